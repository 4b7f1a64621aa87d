//! Local configuration commands (no backend access)

use clap::Subcommand;

use crate::config::{EconomyPaths, Settings, DEFAULT_API_BASE_URL};
use crate::error::EconomyResult;

/// Config subcommands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show paths and settings
    Show,
    /// Use a custom backend URL ("/api" is appended when missing)
    SetApiUrl {
        /// e.g. http://192.168.0.10:8080
        url: String,
    },
    /// Go back to the default backend URL
    ResetApiUrl,
    /// Set the symbol printed before amounts
    SetCurrency {
        /// e.g. "R$"
        symbol: String,
    },
}

pub fn handle_config_command(
    paths: &EconomyPaths,
    settings: &mut Settings,
    cmd: ConfigCommands,
) -> EconomyResult<()> {
    match cmd {
        ConfigCommands::Show => {
            println!("economy-cli configuration");
            println!("=========================");
            println!("Data directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Session file:   {}", paths.session_file().display());
            println!();
            println!("Settings:");
            println!(
                "  API URL:         {}{}",
                settings.api_base_url(),
                if settings.has_custom_api_url() { " (custom)" } else { " (default)" }
            );
            println!("  Request timeout: {}s", settings.request_timeout_secs);
            println!("  Currency:        {}", settings.currency_symbol);
        }

        ConfigCommands::SetApiUrl { url } => {
            settings.set_api_url(&url)?;
            settings.save(paths)?;
            println!("API URL set to {}", settings.api_base_url());
        }

        ConfigCommands::ResetApiUrl => {
            settings.reset_api_url();
            settings.save(paths)?;
            println!("API URL reset to {}", DEFAULT_API_BASE_URL);
        }

        ConfigCommands::SetCurrency { symbol } => {
            settings.set_currency_symbol(&symbol)?;
            settings.save(paths)?;
            println!("Currency symbol set to {}", settings.currency_symbol);
        }
    }
    Ok(())
}
