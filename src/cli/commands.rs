use anyhow::Result;

use crate::app::init_config;

use super::Commands;

/// Handle CLI subcommands. Returns true when the command was fully handled
/// and the process should exit.
pub fn handle_command(command: &Commands) -> Result<bool> {
    match command {
        Commands::Init => {
            println!("Initializing Nexus configuration...");
            init_config()?;
            Ok(true)
        }
        Commands::Version => {
            show_version();
            Ok(true)
        }
        Commands::Chat => Ok(false), // Continue to the chat interface
    }
}

/// Show version information
pub fn show_version() {
    println!("Nexus v{}", env!("CARGO_PKG_VERSION"));
    println!("   Terminal client for the Nexus automation consultant");
}
