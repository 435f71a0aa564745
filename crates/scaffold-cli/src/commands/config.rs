use scaffold_core::AppConfig;

use crate::error::CliError;

pub fn run_config(config: &AppConfig) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}
