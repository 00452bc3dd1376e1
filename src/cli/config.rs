//! Configuration CLI commands
//!
//! Shows the resolved config paths and settings, and persists new defaults.

use clap::Subcommand;

use crate::config::paths::PolyPaths;
use crate::config::settings::Settings;
use crate::crypto::Encoding;
use crate::error::PolyResult;

/// Config subcommands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration and paths
    Show,

    /// Change saved defaults
    Set {
        /// Default encoding for encrypted output (base64, hex, bin)
        #[arg(short, long)]
        encoding: Option<Encoding>,
        /// Default PBKDF2 iteration count
        #[arg(short, long)]
        iterations: Option<u32>,
        /// Default bcrypt cost
        #[arg(short, long)]
        cost: Option<u32>,
    },
}

/// Handle a config command; no subcommand shows the configuration
pub fn handle_config_command(paths: &PolyPaths, cmd: Option<ConfigCommands>) -> PolyResult<()> {
    let settings = Settings::load_or_default(paths)?;

    match cmd.unwrap_or(ConfigCommands::Show) {
        ConfigCommands::Show => show(paths, &settings),
        ConfigCommands::Set {
            encoding,
            iterations,
            cost,
        } => {
            let updated = apply(settings, encoding, iterations, cost);
            updated.save(paths)?;
            tracing::debug!(path = %paths.settings_file().display(), "settings saved");

            println!("Saved {}", paths.settings_file().display());
            show(paths, &updated);
        }
    }

    Ok(())
}

fn apply(
    mut settings: Settings,
    encoding: Option<Encoding>,
    iterations: Option<u32>,
    cost: Option<u32>,
) -> Settings {
    if let Some(encoding) = encoding {
        settings.encoding = encoding;
    }
    if let Some(iterations) = iterations {
        settings.pbkdf2_iterations = iterations;
    }
    if let Some(cost) = cost {
        settings.bcrypt_cost = cost;
    }
    settings
}

fn show(paths: &PolyPaths, settings: &Settings) {
    println!("poly-crypto Configuration");
    println!("=========================");
    println!("Config directory: {}", paths.config_dir().display());
    println!("Settings file:    {}", paths.settings_file().display());
    println!();
    println!("Settings:");
    println!("  Encoding:          {}", settings.encoding);
    println!("  PBKDF2 iterations: {}", settings.pbkdf2_iterations);
    println!("  bcrypt cost:       {}", settings.bcrypt_cost);
}
