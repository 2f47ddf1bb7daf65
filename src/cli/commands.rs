use anyhow::Result;
use colored::Colorize;

use crate::app::init_config;

use super::Commands;

/// Handle subcommands that don't open a widget.
///
/// Returns `true` when the command was fully handled here.
pub fn handle_command(command: &Commands) -> Result<bool> {
    match command {
        Commands::Init => {
            println!("Initializing Benchtop configuration...");
            let path = init_config()?;
            println!("Configuration ready at: {}", path.display().to_string().green());
            Ok(true)
        }
        Commands::Version => {
            show_version();
            Ok(true)
        }
        Commands::Calc { .. } | Commands::Gallery { .. } => Ok(false),
    }
}

/// Show version information
pub fn show_version() {
    println!("Benchtop v{}", env!("CARGO_PKG_VERSION"));
    println!("   A terminal calculator and image gallery");
}
