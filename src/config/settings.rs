// Configuration structs

/// Default Groq model used for both generation and reflection.
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

/// Model parameters shared by both loop stages. Supplied once at agent
/// construction and read-only thereafter.
#[derive(Debug, Clone)]
pub struct ModelConfig {
    /// Model identifier sent with every completion request.
    pub model: String,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
        }
    }
}
