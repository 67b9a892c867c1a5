use crate::prompt::classify::{classify, classify_style};

const PREAMBLE: &str = "Create a professional e-commerce product placement image. ";

const TECHNICAL_REQUIREMENTS: &[&str] = &[
    "Ensure realistic lighting and shadows",
    "Maintain proper proportions and perspective",
    "Create seamless integration between product and model",
    "Use high-quality, professional composition",
    "Make it suitable for e-commerce product display",
    "Ensure the product looks natural and appealing on the model",
];

/// Expand a user instruction into a descriptive prompt.
///
/// The result is informational (logged by callers); the compositor never reads it.
pub fn enhance_prompt(user_prompt: &str) -> String {
    let mut out = String::from(PREAMBLE);

    if let Some(region) = classify(user_prompt) {
        out.push_str(&format!(
            "Place the product on the model's {}. ",
            region.phrase()
        ));
    }

    if let Some(style) = classify_style(user_prompt) {
        out.push_str(&format!("The style should be {}. ", style.phrase()));
    }

    out.push_str(&format!("User's specific instruction: \"{user_prompt}\". "));

    out.push_str("\nTechnical requirements:\n");
    for req in TECHNICAL_REQUIREMENTS {
        out.push_str("- ");
        out.push_str(req);
        out.push('\n');
    }

    out.trim().to_string()
}

#[cfg(test)]
#[path = "../../tests/unit/prompt/enhance.rs"]
mod tests;
