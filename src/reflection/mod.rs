// Generate -> reflect -> revise loop

mod agent;
pub mod prompts;

pub use agent::{ReflectionAgent, RunOptions};
pub use prompts::{compose_prompt, BASE_GENERATION_PROMPT, BASE_REFLECTION_PROMPT, STOP_SEQUENCE};
