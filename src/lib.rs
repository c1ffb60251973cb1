//! chartable: Unicode character property lookup
//!
//! Resolves the properties of a code point (general category, bidi class,
//! canonical combining class, script, block, name and aliases, LaTeX and Typst
//! notations) from precomputed sorted tables, and answers the inverse
//! questions: which code point has this name, which range does this block or
//! script cover, which symbol does this notation denote.
//!
//! ```
//! use chartable::{codepoint_to_category, get_name, GeneralCategory};
//!
//! assert_eq!(codepoint_to_category(0x41), GeneralCategory::UppercaseLetter);
//! assert_eq!(get_name(0x41).unwrap(), "LATIN CAPITAL LETTER A");
//! assert_eq!(chartable::name_to_codepoint("latin small letter a"), Ok(0x61));
//! ```
//!
//! Properties that Unicode gives a default for never fail: an unlisted code
//! point is `Cn`, combining class 0, script `zzzz` and block `No_Block`.
//! Properties without a default (names, bidi class, notations) report a
//! [`LookupError`] instead.
//!
//! Lookups take a plain `u32` and do not reject values above
//! [`MAX_CODEPOINT`]; such values simply match nothing. Use
//! [`validate_codepoint`] to fail fast.

use std::fmt;

pub mod bidi;
pub mod block;
pub mod canonical;
pub mod category;
pub mod combining_class;
pub mod interval;
pub mod latex;
pub mod math_type;
pub mod multimap;
pub mod name;
pub mod name_alias;
#[cfg(feature = "regex-classifier")]
pub mod regex_classifier;
pub mod script;
mod tables;
pub mod typst;

pub use bidi::{codepoint_to_bidi_class, BidiClass};
pub use block::{block_to_codepoint_range, codepoint_to_block, name_to_block, Block, NO_BLOCK};
pub use canonical::comparable_property;
pub use category::{codepoint_to_category, CategoryGroup, GeneralCategory};
pub use combining_class::codepoint_to_combining_class;
pub use interval::{IntervalRecord, IntervalTable, RecordValue};
pub use math_type::MathType;
pub use multimap::NotationMap;
pub use name::{get_label, get_name, get_name_or_label, name_to_codepoint};
pub use name_alias::{get_aliases, NameAliases};
pub use script::{codepoint_to_script, script_to_codepoint_ranges, Script, UNKNOWN_SCRIPT};

/// The largest Unicode code point.
pub const MAX_CODEPOINT: u32 = 0x10FFFF;

/// Errors returned by lookups that have no default answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The value is above [`MAX_CODEPOINT`], or is not a scalar value where
    /// one is required.
    CodepointOutOfRange(u32),
    /// The code point has no value for the requested property.
    UnknownCodepoint(u32),
    /// No block, script or character has this name.
    UnknownName(String),
    /// No symbol has this notation.
    UnknownNotation(String),
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupError::CodepointOutOfRange(cp) => {
                write!(f, "code point out of range: {:#X}", cp)
            }
            LookupError::UnknownCodepoint(cp) => write!(f, "no value for U+{:04X}", cp),
            LookupError::UnknownName(name) => write!(f, "unknown name: {:?}", name),
            LookupError::UnknownNotation(notation) => {
                write!(f, "unknown notation: {:?}", notation)
            }
        }
    }
}

impl std::error::Error for LookupError {}

/// Returns `cp` unchanged if it is at most [`MAX_CODEPOINT`].
pub fn validate_codepoint(cp: u32) -> Result<u32, LookupError> {
    if cp <= MAX_CODEPOINT {
        Ok(cp)
    } else {
        Err(LookupError::CodepointOutOfRange(cp))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_codepoint() {
        assert_eq!(validate_codepoint(0), Ok(0));
        assert_eq!(validate_codepoint(0x10FFFF), Ok(0x10FFFF));
        assert_eq!(
            validate_codepoint(0x110000),
            Err(LookupError::CodepointOutOfRange(0x110000))
        );
        // Surrogates are code points, if not scalar values.
        assert_eq!(validate_codepoint(0xD800), Ok(0xD800));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            LookupError::CodepointOutOfRange(0x110000).to_string(),
            "code point out of range: 0x110000"
        );
        assert_eq!(LookupError::UnknownCodepoint(0x378).to_string(), "no value for U+0378");
        assert_eq!(
            LookupError::UnknownName("Klingon".into()).to_string(),
            "unknown name: \"Klingon\""
        );
        assert_eq!(
            LookupError::UnknownNotation("\\foo".into()).to_string(),
            "unknown notation: \"\\\\foo\""
        );
    }

    #[test]
    fn test_sentinels_above_max_codepoint() {
        let cp = MAX_CODEPOINT + 1;
        assert_eq!(codepoint_to_category(cp), GeneralCategory::Unassigned);
        assert_eq!(codepoint_to_combining_class(cp), 0);
        assert_eq!(codepoint_to_script(cp), UNKNOWN_SCRIPT);
        assert_eq!(codepoint_to_block(cp), NO_BLOCK);
        assert!(codepoint_to_bidi_class(cp).is_err());
        assert!(get_name(cp).is_err());
        assert!(get_aliases(cp).is_empty());
    }
}
