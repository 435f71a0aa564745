use scaffold_core::BoundaryHandle;
use tokio::sync::broadcast::error::RecvError;

use crate::commands::common::format_push_line;
use crate::error::CliError;

/// Print push messages as JSON lines until Ctrl-C or the backend goes away
pub async fn run_listen(handle: &BoundaryHandle) -> Result<(), CliError> {
    let mut receiver = handle.on_push()?;
    tracing::info!("Waiting for TCP demo events, press Ctrl-C to stop");

    loop {
        tokio::select! {
            received = receiver.recv() => match received {
                Ok(message) => println!("{}", format_push_line(&message)?),
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!("Dropped {} push messages", skipped);
                }
                Err(RecvError::Closed) => break,
            },
            signal = tokio::signal::ctrl_c() => {
                signal?;
                break;
            }
        }
    }

    Ok(())
}
