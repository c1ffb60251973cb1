//! LaTeX notations.
//!
//! Three independent systems share the same bidirectional map:
//!
//! - [`texmath`]: plain TeX math mode symbols (`\leq`, `\alpha`, ...)
//! - [`unimath`]: unicode-math symbol names (`\mupalpha`, `\lparen`, ...)
//! - [`text`]: text mode commands, keyed by grapheme since accented letters
//!   may need a base letter plus combining marks
//!
//! Math notations are stored without their leading backslash; lookups accept
//! either spelling.

use crate::LookupError;

fn strip_backslash(notation: &str) -> &str {
    notation.strip_prefix('\\').unwrap_or(notation)
}

macro_rules! math_notations {
    ($(#[$doc:meta])* $name:ident, $records:expr) => {
        $(#[$doc])*
        pub mod $name {
            use std::sync::LazyLock;

            use crate::math_type::MathType;
            use crate::multimap::NotationMap;
            use crate::LookupError;

            static MAP: LazyLock<NotationMap<u32, MathType>> = LazyLock::new(|| {
                NotationMap::from_records($records.iter().copied())
            });

            /// Notations for `cp`, without backslash, in source order. Empty
            /// when there are none.
            pub fn codepoint_to_notations(cp: u32) -> &'static [&'static str] {
                MAP.key_to_values(&cp)
            }

            /// Math class and code point of a notation. A single leading
            /// backslash is optional.
            pub fn notation_to_mathtype_codepoint(
                notation: &str,
            ) -> Result<(MathType, u32), LookupError> {
                MAP.value_to_key(super::strip_backslash(notation))
                    .ok_or_else(|| LookupError::UnknownNotation(notation.to_string()))
            }

            #[cfg(test)]
            pub(crate) fn map() -> &'static NotationMap<u32, MathType> {
                &MAP
            }
        }
    };
}

math_notations!(
    /// Plain TeX math symbols.
    texmath,
    crate::tables::texmath::TEXMATH_RECORDS
);

math_notations!(
    /// unicode-math symbol names.
    unimath,
    crate::tables::unimath::UNIMATH_RECORDS
);

/// Text mode commands keyed by grapheme.
pub mod text {
    use std::sync::LazyLock;

    use crate::multimap::NotationMap;
    use crate::tables::latex_text::LATEX_TEXT_NOTATIONS;
    use crate::LookupError;

    static MAP: LazyLock<NotationMap<&'static str>> = LazyLock::new(|| {
        NotationMap::from_pairs(
            LATEX_TEXT_NOTATIONS
                .iter()
                .flat_map(|&(grapheme, notations)| notations.iter().map(move |&n| (grapheme, n))),
        )
    });

    /// Commands producing `grapheme`, in source order.
    pub fn grapheme_to_notations(grapheme: &str) -> &'static [&'static str] {
        MAP.key_to_values(grapheme)
    }

    /// The grapheme a command produces. Text commands are matched verbatim.
    pub fn notation_to_grapheme(notation: &str) -> Result<&'static str, LookupError> {
        MAP.value_to_plain_key(notation)
            .ok_or_else(|| LookupError::UnknownNotation(notation.to_string()))
    }

    #[cfg(test)]
    pub(crate) fn map() -> &'static NotationMap<&'static str> {
        &MAP
    }
}

/// Look a math notation up in [`unimath`] first, then [`texmath`].
pub fn notation_to_codepoint(notation: &str) -> Result<u32, LookupError> {
    unimath::notation_to_mathtype_codepoint(notation)
        .or_else(|_| texmath::notation_to_mathtype_codepoint(notation))
        .map(|(_, cp)| cp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math_type::MathType;

    #[test]
    fn test_texmath_forward_keeps_order() {
        assert_eq!(texmath::codepoint_to_notations(0x2264), &["le", "leq"]);
        assert_eq!(texmath::codepoint_to_notations(0x007B), &["lbrace", "{"]);
        assert!(texmath::codepoint_to_notations(0x41).is_empty());
    }

    #[test]
    fn test_texmath_backward_with_and_without_backslash() {
        assert_eq!(
            texmath::notation_to_mathtype_codepoint("leq"),
            Ok((MathType::Relation, 0x2264))
        );
        assert_eq!(
            texmath::notation_to_mathtype_codepoint("\\leq"),
            Ok((MathType::Relation, 0x2264))
        );
        assert_eq!(
            texmath::notation_to_mathtype_codepoint("\\{"),
            Ok((MathType::Opening, 0x007B))
        );
        assert_eq!(
            texmath::notation_to_mathtype_codepoint("\\\\leq"),
            Err(LookupError::UnknownNotation("\\\\leq".to_string()))
        );
    }

    #[test]
    fn test_same_codepoint_different_types() {
        assert_eq!(
            texmath::notation_to_mathtype_codepoint("surd"),
            Ok((MathType::Ordinary, 0x221A))
        );
        assert_eq!(
            texmath::notation_to_mathtype_codepoint("sqrt"),
            Ok((MathType::Radical, 0x221A))
        );
    }

    #[test]
    fn test_unimath() {
        assert_eq!(unimath::codepoint_to_notations(0x03B1), &["mupalpha"]);
        assert_eq!(
            unimath::notation_to_mathtype_codepoint("\\lparen"),
            Ok((MathType::Opening, 0x0028))
        );
        assert!(unimath::notation_to_mathtype_codepoint("alpha").is_err());
    }

    #[test]
    fn test_notation_to_codepoint_falls_back_to_texmath() {
        assert_eq!(notation_to_codepoint("mupalpha"), Ok(0x03B1));
        assert_eq!(notation_to_codepoint("\\alpha"), Ok(0x03B1));
        assert!(notation_to_codepoint("\\frobnicate").is_err());
    }

    #[test]
    fn test_text_graphemes() {
        assert_eq!(text::grapheme_to_notations("é"), &["\\'e", "\\'{e}"]);
        assert_eq!(text::grapheme_to_notations("n\u{0304}"), &["\\=n", "\\={n}"]);
        assert!(text::grapheme_to_notations("e").is_empty());
        assert_eq!(text::notation_to_grapheme("\\ss"), Ok("ß"));
        assert_eq!(text::notation_to_grapheme("---"), Ok("\u{2014}"));
        assert!(text::notation_to_grapheme("ss").is_err());
    }

    #[test]
    fn test_every_notation_round_trips() {
        let map = texmath::map();
        for cp in crate::tables::texmath::TEXMATH_RECORDS.iter().map(|r| r.0) {
            for notation in texmath::codepoint_to_notations(cp) {
                assert_eq!(map.value_to_key(notation).map(|(_, k)| k), Some(cp), "{}", notation);
            }
        }
    }

    #[test]
    fn test_shipped_tables_have_no_collisions() {
        assert!(texmath::map().overwritten().is_empty(), "{:?}", texmath::map().overwritten());
        assert!(unimath::map().overwritten().is_empty(), "{:?}", unimath::map().overwritten());
        assert!(text::map().overwritten().is_empty(), "{:?}", text::map().overwritten());
    }
}
