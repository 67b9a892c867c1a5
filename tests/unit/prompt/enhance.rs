use super::*;

#[test]
fn includes_region_style_and_verbatim_instruction() {
    let text = "Spor ayakkabıyı AYAĞA yerleştir";
    let out = enhance_prompt(text);

    assert!(out.starts_with("Create a professional e-commerce product placement image."));
    assert!(out.contains("Place the product on the model's feet. "));
    assert!(out.contains("The style should be sporty. "));
    assert!(out.contains("User's specific instruction: \"Spor ayakkabıyı AYAĞA yerleştir\"."));
    assert!(out.contains("Technical requirements:"));
    assert!(out.ends_with("- Ensure the product looks natural and appealing on the model"));
}

#[test]
fn omits_region_and_style_when_nothing_matches() {
    let out = enhance_prompt("lorem ipsum");
    assert!(!out.contains("Place the product"));
    assert!(!out.contains("The style should be"));
    assert!(out.contains("\"lorem ipsum\""));
}

#[test]
fn lists_every_technical_requirement_once() {
    let out = enhance_prompt("lorem ipsum");
    for req in TECHNICAL_REQUIREMENTS {
        assert_eq!(out.matches(req).count(), 1, "{req}");
    }
}

#[test]
fn is_deterministic() {
    assert_eq!(enhance_prompt("kolye"), enhance_prompt("kolye"));
}

#[test]
fn uses_english_phrases_not_turkish_keys() {
    let out = enhance_prompt("Professional fular, boyun");
    assert!(out.contains("Place the product on the model's neck. "));
    assert!(out.contains("The style should be professional. "));
    assert!(!out.contains("model's boyun"));
    assert!(!out.contains("should be profesyonel"));
}
