// Credential loading
// Loads the Groq API key from the environment, once, at process start.

use anyhow::{bail, Result};

const API_KEY_VAR: &str = "GROQ_API_KEY";

/// Load the Groq API key from the environment.
///
/// Called by the entrypoint before any collaborator is constructed; nothing
/// in the library reads the environment implicitly, so calling this again
/// simply re-reads the same variable.
pub fn load_api_key() -> Result<String> {
    match std::env::var(API_KEY_VAR) {
        Ok(key) if !key.is_empty() => Ok(key),
        _ => bail!(
            "No API key found. Set the {API_KEY_VAR} environment variable:\n\n\
             export {API_KEY_VAR}=\"gsk_...\""
        ),
    }
}
