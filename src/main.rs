use clap::Parser;

use tshort::cli::Cli;
use tshort::config::init_config;
use tshort::runtime::modes::{self, Mode};
use tshort::system::init_logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = match init_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e.format_colored());
            std::process::exit(1);
        }
    };

    match modes::detect_mode(cli.command.as_ref()) {
        Mode::Server => {
            let _guard = match init_logging(&config.logging) {
                Ok(guard) => guard,
                Err(e) => {
                    eprintln!("{}", e.format_colored());
                    std::process::exit(1);
                }
            };
            tracing::info!("tshort {} starting", env!("CARGO_PKG_VERSION"));
            modes::run_server(&config).await?;
        }
        Mode::Cli => {
            let Some(command) = cli.command else {
                return Ok(());
            };
            if let Err(e) = modes::run_cli(command, &config).await {
                eprintln!("{}", e.format_colored());
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
