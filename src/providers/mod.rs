// Completion provider abstraction
//
// The loop only needs one operation from the remote service: turn an ordered
// message history plus a model identifier into generated text. Keeping that
// behind a trait lets the composition root wire the real Groq client while
// tests inject scripted doubles.

use async_trait::async_trait;

use crate::error::Result;

pub mod groq;
pub mod types;

pub use groq::GroqProvider;
pub use types::{Message, Role};

/// Boundary to a remote text-generation service.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Send the ordered message history and return the generated text.
    ///
    /// The history is read-only. Failure to produce text (transport error,
    /// rejected request, malformed or empty response) surfaces as
    /// [`crate::Error::Service`].
    async fn complete(&self, messages: &[Message], model: &str) -> Result<String>;
}
