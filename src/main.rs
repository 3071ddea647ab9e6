//! ollama-conn - Main CLI Entry Point

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use ollama_connection::{
    cli::{Args, Commands},
    ConnectionConfig, OllamaConnection,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut config = ConnectionConfig::load(args.config.as_deref())
        .context("Failed to load configuration")?;
    if let Some(address) = &args.address {
        config.address = address.clone();
    }
    config.strict |= args.strict;

    let connection = OllamaConnection::new(&config.address, config.strict)
        .await
        .with_context(|| format!("Failed to connect to Ollama at {}", config.address))?;

    match &args.command {
        Commands::Version => {
            println!("{}", connection.server_version());
        }
        Commands::List => {
            for name in connection.list_model_names().context("Failed to parse model listing")? {
                println!("{}", name.cyan());
            }
        }
        Commands::Ps => {
            for name in connection
                .list_loaded_model_names()
                .await
                .context("Failed to list loaded models")?
            {
                println!("{}", name.green());
            }
        }
        Commands::Show { model } => {
            let info = connection
                .get_model_info(model)
                .await
                .with_context(|| format!("Failed to show model '{}'", model))?;
            println!("{}", serde_json::to_string_pretty(&info)?);
        }
        Commands::Action { action, model } => {
            let status = connection
                .perform_model_action(*action, model)
                .await
                .with_context(|| format!("Failed to {} model '{}'", action, model))?;
            let line = format!("{} {}: HTTP {}", action, model, status);
            if (200..300).contains(&status) {
                println!("{}", line.green());
            } else {
                println!("{}", line.red());
            }
        }
        Commands::Generate { model, prompt } => {
            let response = connection
                .get_generation_result(model, prompt)
                .await
                .context("Generation failed")?;
            println!("{}", response);
        }
    }

    Ok(())
}
