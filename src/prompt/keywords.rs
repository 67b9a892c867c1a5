//! Keyword tables for prompt classification.
//!
//! Tables are ordered: classification walks them top to bottom and the first category with
//! any matching substring wins. Keywords are lowercase and mix Turkish and English.

/// Coarse body-placement zone inferred from instruction keywords.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    Foot,
    Ear,
    Hand,
    Head,
    Torso,
    Neck,
}

impl Region {
    /// All regions in classification priority order.
    pub const ALL: [Region; 6] = [
        Region::Foot,
        Region::Ear,
        Region::Hand,
        Region::Head,
        Region::Torso,
        Region::Neck,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Region::Foot => "foot",
            Region::Ear => "ear",
            Region::Hand => "hand",
            Region::Head => "head",
            Region::Torso => "torso",
            Region::Neck => "neck",
        }
    }

    /// Natural-language fragment used in enhanced prompts.
    pub fn phrase(self) -> &'static str {
        match self {
            Region::Foot => "feet",
            Region::Ear => "ears",
            Region::Hand => "hand",
            Region::Head => "head",
            Region::Torso => "body",
            Region::Neck => "neck",
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Presentation style tag. Annotates enhanced prompts only; has no geometric effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Style {
    Professional,
    Casual,
    Sport,
    Elegant,
}

impl Style {
    /// All styles in classification priority order.
    pub const ALL: [Style; 4] = [Style::Professional, Style::Casual, Style::Sport, Style::Elegant];

    pub fn as_str(self) -> &'static str {
        match self {
            Style::Professional => "professional",
            Style::Casual => "casual",
            Style::Sport => "sport",
            Style::Elegant => "elegant",
        }
    }

    pub fn phrase(self) -> &'static str {
        match self {
            Style::Professional => "professional",
            Style::Casual => "casual",
            Style::Sport => "sporty",
            Style::Elegant => "elegant",
        }
    }
}

impl std::fmt::Display for Style {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub(crate) const REGION_KEYWORDS: &[(Region, &[&str])] = &[
    (
        Region::Foot,
        &[
            "ayak", "foot", "feet", "ayakkabı", "shoe", "shoes", "bot", "sandalet",
        ],
    ),
    (
        Region::Ear,
        &[
            "kulak",
            "ear",
            "ears",
            "kulaklık",
            "headphone",
            "earphone",
            "işitme",
        ],
    ),
    (
        Region::Hand,
        &[
            "el", "hand", "hands", "saat", "watch", "bilezik", "bracelet", "yüzük", "ring",
        ],
    ),
    (
        Region::Head,
        &[
            "baş", "head", "şapka", "hat", "gözlük", "glasses", "maske", "mask",
        ],
    ),
    (
        Region::Torso,
        &[
            "vücut", "body", "göğüs", "chest", "karın", "stomach", "sırt", "back",
        ],
    ),
    (
        Region::Neck,
        &["boyun", "neck", "kolye", "necklace", "fular", "scarf"],
    ),
];

pub(crate) const STYLE_KEYWORDS: &[(Style, &[&str])] = &[
    (
        Style::Professional,
        &["profesyonel", "professional", "iş", "business", "formal"],
    ),
    (
        Style::Casual,
        &["casual", "günlük", "rahat", "relaxed", "informal"],
    ),
    (
        Style::Sport,
        &["spor", "sport", "fitness", "egzersiz", "workout"],
    ),
    (
        Style::Elegant,
        &["elegant", "şık", "zarif", "sophisticated", "classy"],
    ),
];

/// Keywords that select `region`.
pub fn region_keywords(region: Region) -> &'static [&'static str] {
    REGION_KEYWORDS
        .iter()
        .find(|(r, _)| *r == region)
        .map(|(_, kws)| *kws)
        .unwrap_or(&[])
}

/// Keywords that select `style`.
pub fn style_keywords(style: Style) -> &'static [&'static str] {
    STYLE_KEYWORDS
        .iter()
        .find(|(s, _)| *s == style)
        .map(|(_, kws)| *kws)
        .unwrap_or(&[])
}
