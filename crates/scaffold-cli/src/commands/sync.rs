use scaffold_core::BoundaryHandle;

use crate::error::CliError;

pub async fn run_sync(handle: &BoundaryHandle, as_json: bool) -> Result<(), CliError> {
    let result = handle.sync().await?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", result.summary());
    }
    Ok(())
}
