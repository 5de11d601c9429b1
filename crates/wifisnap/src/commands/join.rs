//! `wifisnap join` -- dispatch a best-effort join request and stream the
//! attempt narrative until it settles.

use owo_colors::OwoColorize;

use wifisnap_core::{Provisioner, ProvisioningStatus};

use crate::cli::JoinArgs;
use crate::config::Config;
use crate::dispatch::SystemDispatcher;
use crate::error::CliError;

pub async fn handle(args: &JoinArgs, config: &Config) -> Result<(), CliError> {
    let provisioner = Provisioner::with_confirm_delay(SystemDispatcher, config.confirm_delay());
    let mut rx = provisioner.subscribe();

    provisioner.attempt_join(&args.credentials.credentials());

    let status = rx.borrow_and_update().clone();
    print_status(&status);
    if let ProvisioningStatus::Failed(reason) = status {
        provisioner.shutdown();
        return Err(CliError::JoinFailed { reason });
    }

    // The host never confirms; wait for the fallback hint so the user
    // knows what "success" looks like.
    if !args.no_wait {
        while rx.changed().await.is_ok() {
            let status = rx.borrow_and_update().clone();
            print_status(&status);
            if matches!(
                status,
                ProvisioningStatus::AwaitingConfirmation | ProvisioningStatus::Failed(_)
            ) {
                break;
            }
        }
    }

    provisioner.shutdown();
    Ok(())
}

fn print_status(status: &ProvisioningStatus) {
    if let Some(message) = status.message() {
        match status {
            ProvisioningStatus::Failed(_) => eprintln!("{}", message.red()),
            _ => println!("{}", message.cyan()),
        }
    }
}
