use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rss_summary::cli::Cli;
use rss_summary::config::Config;
use rss_summary::Error;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Load configuration
    let config = match &cli.config {
        Some(path) => match Config::load(path) {
            Ok(config) => config,
            Err(e) => {
                let e = Error::Config(e);
                println!("{}", e);
                return ExitCode::from(e.exit_code());
            }
        },
        None => Config::default(),
    }
    .with_overrides(cli.strict_exit, cli.verbose);

    // Initialize logging on stderr so stdout only carries the summary
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let result = rss_summary::run(cli.url, &mut stdin.lock(), &mut stdout.lock());

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!("Run failed: {:?}", e);
            println!("{}", e);
            if config.strict_exit {
                ExitCode::from(e.exit_code())
            } else {
                ExitCode::SUCCESS
            }
        }
    }
}
