//! General category through Unicode property classes of the regex engine.
//!
//! An alternative to [`codepoint_to_category`](crate::codepoint_to_category)
//! that needs no category table. Its answers follow the Unicode version of
//! `fancy-regex`'s class data, so they may lag or lead the shipped tables.
//! Classes are tested in a fixed order; line and paragraph separators,
//! controls and private use are recognized by range.

use std::sync::LazyLock;

use fancy_regex::Regex;

use crate::category::GeneralCategory;

/// Tested in this order; the first match wins.
const CLASSES: [GeneralCategory; 23] = [
    GeneralCategory::LowercaseLetter,
    GeneralCategory::UppercaseLetter,
    GeneralCategory::TitlecaseLetter,
    GeneralCategory::ModifierLetter,
    GeneralCategory::OtherLetter,
    GeneralCategory::NonspacingMark,
    GeneralCategory::SpacingMark,
    GeneralCategory::EnclosingMark,
    GeneralCategory::DecimalNumber,
    GeneralCategory::LetterNumber,
    GeneralCategory::OtherNumber,
    GeneralCategory::ConnectorPunctuation,
    GeneralCategory::DashPunctuation,
    GeneralCategory::OpenPunctuation,
    GeneralCategory::ClosePunctuation,
    GeneralCategory::InitialPunctuation,
    GeneralCategory::FinalPunctuation,
    GeneralCategory::OtherPunctuation,
    GeneralCategory::MathSymbol,
    GeneralCategory::CurrencySymbol,
    GeneralCategory::ModifierSymbol,
    GeneralCategory::OtherSymbol,
    GeneralCategory::SpaceSeparator,
];

fn class_regex(category: GeneralCategory) -> Option<Regex> {
    let pattern = format!(r"^\p{{{}}}$", category.short_name());
    match Regex::new(&pattern) {
        Ok(re) => Some(re),
        Err(err) => {
            log::warn!("skipping category class {}: {}", pattern, err);
            None
        }
    }
}

static MATCHERS: LazyLock<Vec<(GeneralCategory, Regex)>> = LazyLock::new(|| {
    CLASSES
        .iter()
        .filter_map(|&category| class_regex(category).map(|re| (category, re)))
        .collect()
});

static FORMAT: LazyLock<Option<Regex>> =
    LazyLock::new(|| class_regex(GeneralCategory::Format));

fn is_match(re: &Regex, text: &str) -> bool {
    match re.is_match(text) {
        Ok(matched) => matched,
        Err(err) => {
            log::warn!("treating {:?} as no match for {}: {}", text, re.as_str(), err);
            false
        }
    }
}

/// General category of `c`.
pub fn get_category(c: char) -> GeneralCategory {
    let mut buf = [0; 4];
    let text: &str = c.encode_utf8(&mut buf);

    if let Some((category, _)) = MATCHERS.iter().find(|(_, re)| is_match(re, text)) {
        return *category;
    }

    match u32::from(c) {
        0x2028 => GeneralCategory::LineSeparator,
        0x2029 => GeneralCategory::ParagraphSeparator,
        0x0000..=0x001F | 0x007F..=0x009F => GeneralCategory::Control,
        _ if FORMAT.as_ref().is_some_and(|re| is_match(re, text)) => GeneralCategory::Format,
        0xE000..=0xF8FF | 0xF0000..=0xFFFFD | 0x100000..=0x10FFFD => GeneralCategory::PrivateUse,
        _ => GeneralCategory::Unassigned,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::codepoint_to_category;

    #[test]
    fn test_every_class_compiles() {
        assert_eq!(MATCHERS.len(), CLASSES.len());
        assert!(FORMAT.is_some());
    }

    #[test]
    fn test_letters_and_numbers() {
        assert_eq!(get_category('a'), GeneralCategory::LowercaseLetter);
        assert_eq!(get_category('A'), GeneralCategory::UppercaseLetter);
        assert_eq!(get_category('\u{01C5}'), GeneralCategory::TitlecaseLetter);
        assert_eq!(get_category('\u{4E00}'), GeneralCategory::OtherLetter);
        assert_eq!(get_category('7'), GeneralCategory::DecimalNumber);
        assert_eq!(get_category('\u{2167}'), GeneralCategory::LetterNumber);
    }

    #[test]
    fn test_range_fallbacks() {
        assert_eq!(get_category(' '), GeneralCategory::SpaceSeparator);
        assert_eq!(get_category('\u{2028}'), GeneralCategory::LineSeparator);
        assert_eq!(get_category('\u{2029}'), GeneralCategory::ParagraphSeparator);
        assert_eq!(get_category('\u{0000}'), GeneralCategory::Control);
        assert_eq!(get_category('\u{0085}'), GeneralCategory::Control);
        assert_eq!(get_category('\u{200B}'), GeneralCategory::Format);
        assert_eq!(get_category('\u{E000}'), GeneralCategory::PrivateUse);
        assert_eq!(get_category('\u{10FFFD}'), GeneralCategory::PrivateUse);
        assert_eq!(get_category('\u{0378}'), GeneralCategory::Unassigned);
        assert_eq!(get_category('\u{10FFFF}'), GeneralCategory::Unassigned);
    }

    #[test]
    fn test_match_errors_read_as_no_match() {
        // A backreference forces the backtracking engine; a tiny limit makes it give up.
        let re = fancy_regex::RegexBuilder::new(r"^(a+)+\1$")
            .backtrack_limit(1)
            .build()
            .unwrap();
        assert!(re.is_match("aaaaaaaaaaaaaaaaaaaaaaab").is_err());
        assert!(!is_match(&re, "aaaaaaaaaaaaaaaaaaaaaaab"));
        assert!(is_match(&MATCHERS[0].1, "a"));
    }

    #[test]
    fn test_agrees_with_table_on_ascii_and_latin_1() {
        for c in (0u8..=0xFF).map(char::from) {
            assert_eq!(get_category(c), codepoint_to_category(u32::from(c)), "{:?}", c);
        }
    }
}
