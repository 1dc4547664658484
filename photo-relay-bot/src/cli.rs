//! CLI parser and config loading.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::BotConfig;

/// Telegram client library this build is pinned to (see Cargo.toml).
pub const TELEGRAM_CLIENT: &str = "teloxide 0.17";

#[derive(Parser)]
#[command(name = "photo-relay-bot")]
#[command(about = "Telegram photo submission and approval bot", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the bot (config from env / .env; token can override TELEGRAM_BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
    /// Print the bot and Telegram client versions, then exit.
    Version,
}

/// Load BotConfig from environment. If `token` is provided it overrides the env token.
pub fn load_config(token: Option<String>) -> Result<BotConfig> {
    BotConfig::load(token)
}

/// One-line version report printed by `version`.
pub fn version_line() -> String {
    format!(
        "{} {} ({})",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        TELEGRAM_CLIENT
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_run_with_token() {
        let cli = Cli::try_parse_from(["photo-relay-bot", "run", "--token", "t"]).unwrap();
        assert!(matches!(cli.command, Commands::Run { token: Some(ref t) } if t == "t"));
    }

    #[test]
    fn test_parse_version() {
        let cli = Cli::try_parse_from(["photo-relay-bot", "version"]).unwrap();
        assert!(matches!(cli.command, Commands::Version));
        assert!(version_line().starts_with("photo-relay-bot "));
        assert!(version_line().contains("teloxide"));
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["photo-relay-bot"]).is_err());
    }
}
