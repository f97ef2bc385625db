// redraft - iterative self-critique refinement for LLM-generated content
// Main entry point

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;

use redraft::cli::{output, Cli};
use redraft::config::{load_api_key, ModelConfig};
use redraft::providers::GroqProvider;
use redraft::reflection::{ReflectionAgent, RunOptions};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    // Load credentials explicitly, before constructing any collaborator
    let api_key = load_api_key()?;

    let provider = GroqProvider::new(api_key)?;
    let agent = ReflectionAgent::new(Arc::new(provider), ModelConfig { model: cli.model });

    let opts = RunOptions {
        n_steps: cli.steps,
        verbose: cli.verbose,
        ..RunOptions::default()
    };
    let result = agent.run(&cli.message, &opts).await?;

    output::final_banner(&result);

    Ok(())
}
