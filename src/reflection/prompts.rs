// System prompts for the generate/critique loop
//
// Centralising these makes them easy to swap in tests and to extend from
// the CLI with caller-supplied instructions.

/// Literal marker the critic emits when the content needs no further work.
pub const STOP_SEQUENCE: &str = "<OK>";

/// Default system prompt for the generation stage.
pub const BASE_GENERATION_PROMPT: &str = "
Your task is to Generate the best content possible for the user's request.
If the user provides critique, respond with a revised version of your previous attempt.
You must always output the revised content.
";

/// Default system prompt for the reflection stage.
pub const BASE_REFLECTION_PROMPT: &str = "
You are tasked with generating critique and recommendations to the user's generated content.
If the user content has something wrong or something to be improved, output a list of recommendations
and critiques. If the user content is ok and there's nothing to change, output this: <OK>
";

/// Combine an optional caller-supplied instruction with a base system prompt.
///
/// A present instruction is placed immediately before the base prompt with no
/// separator injected; an absent or empty one leaves the base prompt as-is.
pub fn compose_prompt(custom: Option<&str>, base: &str) -> String {
    format!("{}{}", custom.unwrap_or(""), base)
}
