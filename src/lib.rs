// redraft - iterative self-critique refinement for LLM-generated content
// Library exports

pub mod cli;
pub mod config;
pub mod error;
pub mod history;
pub mod providers;
pub mod reflection;

pub use error::{Error, Result};
