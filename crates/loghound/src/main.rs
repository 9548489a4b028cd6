//! loghound: print decoded git commit history
//!
//! Runs `git log` against a repository and prints every commit as JSON or as
//! one line of text. Logs go to stderr.

use clap::Parser;
use tracing::error;

use loghound::config::Config;

#[tokio::main]
async fn main() -> std::process::ExitCode {
    let config = Config::parse();

    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_level().into()),
        )
        .init();

    match loghound::run(&config).await {
        Ok(rendered) => {
            println!("{}", rendered.trim_end());
            std::process::ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{err:#}");
            std::process::ExitCode::FAILURE
        }
    }
}
