use std::io::{self, Write};
use std::process;

use anyhow::Context;
use clap::error::ErrorKind;
use dealdrip_cli::{cli::Args, output, runner};
use dealdrip_notify::NotificationService;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Default log filter directive.
const DEFAULT_LOG_FILTER: &str = "info,hyper=warn,reqwest=warn";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = match Args::parse_argv(std::env::args_os()) {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            eprintln!("{e}");
            output::write_usage(&mut io::stdout())?;
            process::exit(1);
        }
    };

    init_logging(args.verbose, args.quiet);
    dotenvy::dotenv().ok();

    let mut stdout = io::stdout();
    let status = runner::run(args.invocation(), NotificationService::from_env, &mut stdout)
        .await
        .context("Failed to write notification status")?;
    stdout.flush()?;

    process::exit(status.exit_code(args.strict_exit));
}

fn init_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
    };

    // stdout is reserved for the status markers.
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .init();
}
