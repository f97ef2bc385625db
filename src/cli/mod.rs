// Command-line interface

pub mod output;

use clap::Parser;

use crate::config::DEFAULT_MODEL;

/// Iteratively refine generated content through self-critique.
///
/// Reads the API key from the GROQ_API_KEY environment variable.
#[derive(Debug, Parser)]
#[command(name = "redraft", version)]
pub struct Cli {
    /// User message to seed the generation loop
    #[arg(long)]
    pub message: String,

    /// Maximum number of generate/reflect cycles
    #[arg(long, default_value_t = 10)]
    pub steps: usize,

    /// Verbosity level (0 = quiet, > 0 prints coloured stage banners)
    #[arg(long, default_value_t = 0)]
    pub verbose: u8,

    /// Model identifier used for both stages
    #[arg(long, default_value = DEFAULT_MODEL)]
    pub model: String,
}
