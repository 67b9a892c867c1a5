use crate::prompt::keywords::{REGION_KEYWORDS, Region, STYLE_KEYWORDS, Style};

/// Infer the placement region from free-text instructions.
///
/// Matching is plain substring containment on the lowercased text, walked in fixed priority
/// order (`foot`, `ear`, `hand`, `head`, `torso`, `neck`); the first region with any hit wins.
/// Returns `None` when nothing matches, which selects the default placement downstream.
pub fn classify(text: &str) -> Option<Region> {
    first_match(&text.to_lowercase(), REGION_KEYWORDS)
}

/// Infer the presentation style from free-text instructions.
pub fn classify_style(text: &str) -> Option<Style> {
    first_match(&text.to_lowercase(), STYLE_KEYWORDS)
}

fn first_match<T: Copy>(lower: &str, table: &[(T, &[&str])]) -> Option<T> {
    table
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| lower.contains(kw)))
        .map(|(tag, _)| *tag)
}

#[cfg(test)]
#[path = "../../tests/unit/prompt/classify.rs"]
mod tests;
