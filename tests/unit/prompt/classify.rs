use super::*;
use crate::prompt::keywords::{region_keywords, style_keywords};

#[test]
fn mixed_case_turkish_instruction_is_foot() {
    assert_eq!(
        classify("Ayakkabıyı modelin AYAĞINA yerleştir"),
        Some(Region::Foot)
    );
}

#[test]
fn each_region_matches_its_own_instruction() {
    let cases = [
        ("kulaklığı kulağına tak", Region::Ear),
        ("saati bileğine tak", Region::Hand),
        ("şapkayı başına koy", Region::Head),
        ("put the t-shirt on the chest", Region::Torso),
        ("kolyeyi boynuna tak", Region::Neck),
        ("SANDALET", Region::Foot),
    ];
    for (text, expected) in cases {
        assert_eq!(classify(text), Some(expected), "{text}");
    }
}

#[test]
fn every_keyword_selects_a_region_no_later_than_its_own() {
    for region in Region::ALL {
        let own_rank = Region::ALL.iter().position(|r| *r == region).unwrap();
        for kw in region_keywords(region) {
            let got = classify(&format!("  {kw} ")).unwrap();
            let got_rank = Region::ALL.iter().position(|r| *r == got).unwrap();
            assert!(got_rank <= own_rank, "{kw} -> {got}");
        }
    }
}

#[test]
fn ascii_keywords_match_in_uppercase() {
    for (text, expected) in [
        ("SHOES", Region::Foot),
        ("HEADPHONE", Region::Ear),
        ("BRACELET", Region::Hand),
        ("GLASSES", Region::Head),
        ("STOMACH", Region::Torso),
        ("SCARF", Region::Neck),
    ] {
        assert_eq!(classify(text), Some(expected), "{text}");
    }
}

#[test]
fn priority_order_is_fixed() {
    assert_eq!(
        Region::ALL,
        [
            Region::Foot,
            Region::Ear,
            Region::Hand,
            Region::Head,
            Region::Torso,
            Region::Neck,
        ]
    );
}

#[test]
fn first_match_wins_over_later_categories() {
    // "ayak" (foot) and "el" (hand) both present.
    assert_eq!(classify("el ve ayak"), Some(Region::Foot));
    // "watch" (hand) and "necklace" (neck) both present.
    assert_eq!(classify("necklace and watch"), Some(Region::Hand));
    // "ear" (ear) and "hat" (head) both present.
    assert_eq!(classify("hat over the ear"), Some(Region::Ear));
}

#[test]
fn no_keyword_yields_none() {
    assert_eq!(classify("lorem ipsum"), None);
    assert_eq!(classify(""), None);
}

#[test]
fn classification_is_pure() {
    let text = "Saat ve kolye";
    assert_eq!(classify(text), classify(text));
    assert_eq!(classify_style(text), classify_style(text));
}

#[test]
fn styles_follow_priority_order() {
    assert_eq!(classify_style("Profesyonel bir çekim"), Some(Style::Professional));
    assert_eq!(classify_style("rahat, günlük"), Some(Style::Casual));
    assert_eq!(classify_style("fitness vibe"), Some(Style::Sport));
    assert_eq!(classify_style("very CLASSY"), Some(Style::Elegant));
    assert_eq!(classify_style("sport but classy"), Some(Style::Sport));
    assert_eq!(classify_style("lorem ipsum"), None);
}

#[test]
fn substring_matching_has_no_word_boundaries() {
    // "informal" contains "formal", which belongs to an earlier style.
    assert_eq!(classify_style("informal"), Some(Style::Professional));
    assert!(style_keywords(Style::Casual).contains(&"informal"));
}

#[test]
fn region_and_style_are_independent() {
    let text = "spor ayakkabıyı ayağa yerleştir";
    assert_eq!(classify(text), Some(Region::Foot));
    assert_eq!(classify_style(text), Some(Style::Sport));
}
