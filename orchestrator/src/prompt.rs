//! Prompt assembly.
//!
//! Both prompts embed the literal user query. The grounded prompt
//! additionally carries the matched product's name, description, and
//! feature list; the fallback prompt asks the generator to clarify or
//! explain the available options instead.

use voicemart_catalog::Product;

/// Prompt for a query with a matched product.
pub fn grounded_prompt(utterance: &str, product: &Product) -> String {
    format!(
        "User asked: \"{utterance}\". Recommend the {}: {}. Features: {}. Keep it conversational and helpful.",
        product.name,
        product.description,
        product.features.join(", "),
    )
}

/// Prompt for a query with no matched product.
pub fn fallback_prompt(utterance: &str) -> String {
    format!(
        "User asked: \"{utterance}\". Help them understand our product options or ask for more specific requirements."
    )
}
