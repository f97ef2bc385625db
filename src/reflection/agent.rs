// Reflection agent
//
// Drives the iterative loop: generate a candidate, critique it, and either
// stop on the critic's stop sequence or feed the critique back as the next
// refinement instruction.

use std::sync::Arc;

use crossterm::style::Color;

use crate::cli::output;
use crate::config::ModelConfig;
use crate::error::Result;
use crate::history::{BoundedHistory, EvictionPolicy};
use crate::providers::{CompletionProvider, Message};

use super::prompts::{
    compose_prompt, BASE_GENERATION_PROMPT, BASE_REFLECTION_PROMPT, STOP_SEQUENCE,
};

/// Messages kept per history: the fixed system prompt plus the two most
/// recent turns. Bounds the context sent to the model regardless of how many
/// steps run.
const HISTORY_CAPACITY: usize = 3;

/// Options for a single reflection run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Caller-supplied instruction placed before the base generation prompt.
    pub generation_prompt: Option<String>,
    /// Caller-supplied instruction placed before the base reflection prompt.
    pub reflection_prompt: Option<String>,
    /// Maximum number of generate/reflect cycles.
    pub n_steps: usize,
    /// Verbosity level; > 0 prints coloured stage banners.
    pub verbose: u8,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            generation_prompt: None,
            reflection_prompt: None,
            n_steps: 10,
            verbose: 0,
        }
    }
}

/// Orchestrates the generate/reflect cycle over an injected completion
/// provider. Each instance owns its history pair exclusively; concurrent
/// runs need separate instances.
pub struct ReflectionAgent {
    provider: Arc<dyn CompletionProvider>,
    config: ModelConfig,
}

impl ReflectionAgent {
    pub fn new(provider: Arc<dyn CompletionProvider>, config: ModelConfig) -> Self {
        Self { provider, config }
    }

    /// Generate a candidate response from the current generation history.
    async fn generate(&self, history: &BoundedHistory, verbose: u8) -> Result<String> {
        let content = self
            .provider
            .complete(history.messages(), &self.config.model)
            .await?;
        if verbose > 0 {
            output::stage("GENERATION", Color::Blue, &content);
        }
        Ok(content)
    }

    /// Produce a critique of the latest candidate from the reflection history.
    async fn reflect(&self, history: &BoundedHistory, verbose: u8) -> Result<String> {
        let content = self
            .provider
            .complete(history.messages(), &self.config.model)
            .await?;
        if verbose > 0 {
            output::stage("REFLECTION", Color::Green, &content);
        }
        Ok(content)
    }

    /// Execute the reflection loop for up to `n_steps` iterations and return
    /// the final candidate.
    ///
    /// `n_steps == 0` performs no provider calls and returns an empty string.
    /// A provider failure aborts the run mid-step and propagates unchanged;
    /// history mutations already applied in that step are not rolled back
    /// (both histories are local to the run and dropped with it).
    pub async fn run(&self, user_msg: &str, opts: &RunOptions) -> Result<String> {
        let gen_prompt = compose_prompt(opts.generation_prompt.as_deref(), BASE_GENERATION_PROMPT);
        let ref_prompt = compose_prompt(opts.reflection_prompt.as_deref(), BASE_REFLECTION_PROMPT);

        // The system prompt stays sticky while the rest of the window turns
        // over with the latest candidate/critique pair.
        let mut generation = BoundedHistory::seeded(
            EvictionPolicy::EvictOldestAfterFirst,
            Some(HISTORY_CAPACITY),
            vec![Message::system(gen_prompt), Message::user(user_msg)],
        )?;
        let mut reflection = BoundedHistory::seeded(
            EvictionPolicy::EvictOldestAfterFirst,
            Some(HISTORY_CAPACITY),
            vec![Message::system(ref_prompt)],
        )?;

        let mut final_generation = String::new();

        for step in 1..=opts.n_steps {
            if opts.verbose > 0 {
                output::step_tracker(step, opts.n_steps);
            }
            tracing::debug!("Reflection step {}/{}", step, opts.n_steps);

            // 1) Generate a candidate; the critic sees it as user content.
            final_generation = self.generate(&generation, opts.verbose).await?;
            generation.push(Message::assistant(final_generation.clone()));
            reflection.push(Message::user(final_generation.clone()));

            // 2) Critique the candidate.
            let critique = self.reflect(&reflection, opts.verbose).await?;

            // 3) Stop early when the critic is satisfied. The critique is
            //    discarded; the candidate is already the result.
            if critique.contains(STOP_SEQUENCE) {
                tracing::debug!("Stop sequence found at step {}", step);
                if opts.verbose > 0 {
                    output::stop_notice();
                }
                break;
            }

            // 4) Feed the critique back as the next refinement instruction.
            generation.push(Message::user(critique.clone()));
            reflection.push(Message::assistant(critique));
        }

        Ok(final_generation)
    }
}
