//! Loose matching of property value names.
//!
//! Block and script names are matched ignoring case, whitespace, underscores,
//! hyphens and a leading "is" (UAX #44, LM3), so that `Old_Italic`,
//! `old-italic`, `OLDITALIC` and `IsOldItalic` all compare equal.

/// Reduce a property value name to its comparison key.
pub fn comparable_property(name: &str) -> String {
    let mut key: String = name
        .chars()
        .filter(|c| !matches!(c, '_' | '-') && !c.is_whitespace())
        .map(|c| c.to_ascii_lowercase())
        .collect();
    if key.len() > 2 && key.starts_with("is") {
        key.drain(..2);
    }
    key
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separators_and_case() {
        assert_eq!(comparable_property("Old_Italic"), "olditalic");
        assert_eq!(comparable_property("old-italic"), "olditalic");
        assert_eq!(comparable_property("OLDITALIC"), "olditalic");
        assert_eq!(comparable_property("Old Italic"), "olditalic");
        assert_eq!(comparable_property("  Latin-1 Supplement "), "latin1supplement");
    }

    #[test]
    fn test_is_prefix() {
        assert_eq!(comparable_property("IsBasicLatin"), "basiclatin");
        assert_eq!(comparable_property("is_Hiragana"), "hiragana");
        // A bare "is" is kept rather than reduced to nothing.
        assert_eq!(comparable_property("Is"), "is");
    }

    #[test]
    fn test_empty() {
        assert_eq!(comparable_property(""), "");
        assert_eq!(comparable_property("_- "), "");
    }
}
