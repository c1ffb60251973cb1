//! Math classes of notation symbols, as used by unicode-math.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MathType {
    Ordinary,
    Alphabetic,
    Accent,
    AccentWide,
    BottomAccent,
    BottomAccentWide,
    AccentOverlay,
    BinaryOperation,
    Relation,
    LargeOperator,
    Radical,
    Opening,
    Closing,
    Fencing,
    Over,
    Under,
    Punctuation,
}

const TAGS: [(MathType, &str); 17] = [
    (MathType::Ordinary, "ORD"),
    (MathType::Alphabetic, "ABC"),
    (MathType::Accent, "ACC"),
    (MathType::AccentWide, "ACW"),
    (MathType::BottomAccent, "BOT"),
    (MathType::BottomAccentWide, "BOW"),
    (MathType::AccentOverlay, "LAY"),
    (MathType::BinaryOperation, "BIN"),
    (MathType::Relation, "REL"),
    (MathType::LargeOperator, "LOP"),
    (MathType::Radical, "RAD"),
    (MathType::Opening, "OPN"),
    (MathType::Closing, "CLO"),
    (MathType::Fencing, "FEN"),
    (MathType::Over, "OVR"),
    (MathType::Under, "NDR"),
    (MathType::Punctuation, "PUN"),
];

impl MathType {
    /// Three-letter tag, e.g. `REL`.
    pub fn tag(self) -> &'static str {
        TAGS[self as usize].1
    }

    /// The unicode-math class macro, e.g. `\mathrel`.
    pub fn class_macro(self) -> &'static str {
        match self {
            MathType::Ordinary => "\\mathord",
            MathType::Alphabetic => "\\mathalpha",
            MathType::Accent => "\\mathaccent",
            MathType::AccentWide => "\\mathaccentwide",
            MathType::BottomAccent => "\\mathbotaccent",
            MathType::BottomAccentWide => "\\mathbotaccentwide",
            MathType::AccentOverlay => "\\mathaccentoverlay",
            MathType::BinaryOperation => "\\mathbin",
            MathType::Relation => "\\mathrel",
            MathType::LargeOperator => "\\mathop",
            MathType::Radical => "\\mathradical",
            MathType::Opening => "\\mathopen",
            MathType::Closing => "\\mathclose",
            MathType::Fencing => "\\mathfence",
            MathType::Over => "\\mathover",
            MathType::Under => "\\mathunder",
            MathType::Punctuation => "\\mathpunct",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        TAGS.iter().find(|(_, t)| *t == tag).map(|(ty, _)| *ty)
    }
}

impl fmt::Display for MathType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_round_trip() {
        for (ty, tag) in TAGS {
            assert_eq!(ty.tag(), tag);
            assert_eq!(MathType::from_tag(tag), Some(ty));
        }
        assert_eq!(MathType::from_tag("rel"), None);
    }

    #[test]
    fn test_display_and_macro() {
        assert_eq!(MathType::Relation.to_string(), "REL");
        assert_eq!(MathType::BinaryOperation.class_macro(), "\\mathbin");
    }
}
