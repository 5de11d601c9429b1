mod cli;
mod commands;
mod config;
mod dispatch;
mod error;
mod rasterize;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};
use crate::error::CliError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.global.verbose);

    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config = config::load()?;
    tracing::debug!(command = ?cli.command, "dispatching command");

    match cli.command {
        Command::Scan(args) => commands::scan::handle(&args),
        Command::Uri(args) => commands::encode::uri(&args),
        Command::Payload(args) => commands::encode::payload(&args),
        Command::Join(args) => commands::join::handle(&args, &config).await,
        Command::Qr(args) => commands::qr::handle(&args, &config).await,
        Command::Copy(args) => commands::copy::handle(&args),
    }
}
