//! Typst `sym` notations.
//!
//! Keyed by grapheme: a Typst symbol may expand to a base character followed
//! by combining marks (`eq.vert.not` is `=` plus U+20D2), so the code point
//! view is derived from the grapheme one.

use std::sync::LazyLock;

use crate::multimap::NotationMap;
use crate::tables::typst::TYPST_NOTATIONS;
use crate::LookupError;

static MAP: LazyLock<NotationMap<&'static str>> = LazyLock::new(|| {
    NotationMap::from_pairs(
        TYPST_NOTATIONS
            .iter()
            .flat_map(|&(grapheme, notations)| notations.iter().map(move |&n| (grapheme, n))),
    )
});

/// Typst notations producing `grapheme`.
pub fn grapheme_to_notations(grapheme: &str) -> &'static [&'static str] {
    MAP.key_to_values(grapheme)
}

/// Grapheme produced by a Typst notation.
pub fn notation_to_grapheme(notation: &str) -> Result<&'static str, LookupError> {
    MAP.value_to_plain_key(notation)
        .ok_or_else(|| LookupError::UnknownNotation(notation.to_string()))
}

/// Typst notations for the single code point `cp`.
///
/// Fails with [`LookupError::CodepointOutOfRange`] when `cp` is not a Unicode
/// scalar value and with [`LookupError::UnknownCodepoint`] when no notation
/// produces it on its own. The returned slice is never empty.
pub fn codepoint_to_notations(cp: u32) -> Result<&'static [&'static str], LookupError> {
    let c = char::from_u32(cp).ok_or(LookupError::CodepointOutOfRange(cp))?;
    let mut buf = [0; 4];
    match grapheme_to_notations(c.encode_utf8(&mut buf)) {
        [] => Err(LookupError::UnknownCodepoint(cp)),
        notations => Ok(notations),
    }
}

/// Code points of the grapheme a Typst notation produces.
pub fn notation_to_codepoints(notation: &str) -> Result<Vec<u32>, LookupError> {
    notation_to_grapheme(notation).map(|grapheme| grapheme.chars().map(u32::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codepoint_to_notations() {
        assert_eq!(codepoint_to_notations(0x2192), Ok(&["arrow.r", "->"][..]));
        assert_eq!(codepoint_to_notations(0x2205), Ok(&["emptyset", "nothing"][..]));
        assert_eq!(codepoint_to_notations(0x41), Err(LookupError::UnknownCodepoint(0x41)));
        assert_eq!(
            codepoint_to_notations(0x10FFFF),
            Err(LookupError::UnknownCodepoint(0x10FFFF))
        );
        assert_eq!(
            codepoint_to_notations(0xD800),
            Err(LookupError::CodepointOutOfRange(0xD800))
        );
        assert!(codepoint_to_notations(0x110000).is_err());
    }

    #[test]
    fn test_notation_to_codepoints() {
        assert_eq!(notation_to_codepoints("eq.not"), Ok(vec![0x2260]));
        assert_eq!(notation_to_codepoints("!="), Ok(vec![0x2260]));
        assert_eq!(notation_to_codepoints("eq.vert.not"), Ok(vec![0x3D, 0x20D2]));
        assert_eq!(
            notation_to_codepoints("arrow.sideways"),
            Err(LookupError::UnknownNotation("arrow.sideways".to_string()))
        );
    }

    #[test]
    fn test_multi_codepoint_grapheme_has_no_single_codepoint_entry() {
        assert_eq!(grapheme_to_notations("=\u{20D2}"), &["eq.vert.not"]);
        assert_eq!(codepoint_to_notations(0x3D), Ok(&["eq"][..]));
        assert_eq!(
            codepoint_to_notations(0x20D2),
            Err(LookupError::UnknownCodepoint(0x20D2))
        );
    }

    #[test]
    fn test_found_notations_are_never_empty() {
        for cp in 0..=0x2FFF {
            if let Ok(notations) = codepoint_to_notations(cp) {
                assert!(!notations.is_empty(), "U+{:04X}", cp);
            }
        }
    }

    #[test]
    fn test_no_collisions() {
        assert!(MAP.overwritten().is_empty(), "{:?}", MAP.overwritten());
        for &(grapheme, notations) in TYPST_NOTATIONS {
            for notation in notations {
                assert_eq!(notation_to_grapheme(notation), Ok(grapheme));
            }
        }
    }
}
