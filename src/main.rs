use anyhow::Result;
use clap::Parser;

use nexus::{
    app::{load_config, load_config_from},
    cli::{handle_command, Cli},
    models::GeneratorFactory,
    runtime::{OneShotRunner, Repl},
    session::Persona,
    utils::init_logger,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Set up logging if verbose
    if cli.verbose {
        init_logger();
    }

    // Handle subcommands that don't start a conversation
    if let Some(command) = &cli.command {
        if handle_command(command)? {
            return Ok(());
        }
    }

    // Load configuration
    let mut config = if let Some(config_path) = &cli.config {
        load_config_from(config_path)?
    } else {
        load_config()?
    };

    if let Some(model) = &cli.model {
        config.model.name = model.clone();
    }

    let generator = GeneratorFactory::create(&config)?;
    let persona = Persona {
        greeting: config.persona.greeting.clone(),
        system_instruction: config.persona.system_instruction.clone(),
    };

    // Non-interactive mode: one submission, reply on stdout
    if let Some(prompt) = cli.prompt {
        let runner = OneShotRunner::new(generator, persona);
        let reply = runner.execute(prompt).await?;
        println!("{reply}");
        return Ok(());
    }

    Repl::new(generator, persona).run().await
}
