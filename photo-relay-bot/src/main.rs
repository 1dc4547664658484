//! Binary for the photo relay bot.

use anyhow::Result;
use clap::Parser;
use photo_relay_bot::{load_config, run_bot, version_line, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = load_config(token)?;
            run_bot(config).await
        }
        Commands::Version => {
            println!("{}", version_line());
            Ok(())
        }
    }
}
