//! Bidirectional class.
//!
//! Resolved through two tables: the classes of assigned characters, then the
//! DerivedBidiClass defaults for unassigned ranges (e.g. the Hebrew and Arabic
//! blocks default to R and AL). A codepoint missing from both is reported as an
//! error rather than silently treated as L.

use std::fmt;

use crate::interval::{lookup_chain, IntervalTable};
use crate::tables::bidi::{BIDI_CLASSES, DEFAULT_BIDI_CLASSES};
use crate::LookupError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BidiClass {
    // Strong
    LeftToRight,
    RightToLeft,
    ArabicLetter,
    // Weak
    EuropeanNumber,
    EuropeanSeparator,
    EuropeanTerminator,
    ArabicNumber,
    CommonSeparator,
    NonspacingMark,
    BoundaryNeutral,
    // Neutral
    ParagraphSeparator,
    SegmentSeparator,
    WhiteSpace,
    OtherNeutral,
    // Explicit formatting
    LeftToRightEmbedding,
    LeftToRightOverride,
    RightToLeftEmbedding,
    RightToLeftOverride,
    PopDirectionalFormat,
    LeftToRightIsolate,
    RightToLeftIsolate,
    FirstStrongIsolate,
    PopDirectionalIsolate,
}

const NAMES: [(BidiClass, &str, &str); 23] = [
    (BidiClass::LeftToRight, "L", "Left_To_Right"),
    (BidiClass::RightToLeft, "R", "Right_To_Left"),
    (BidiClass::ArabicLetter, "AL", "Arabic_Letter"),
    (BidiClass::EuropeanNumber, "EN", "European_Number"),
    (BidiClass::EuropeanSeparator, "ES", "European_Separator"),
    (BidiClass::EuropeanTerminator, "ET", "European_Terminator"),
    (BidiClass::ArabicNumber, "AN", "Arabic_Number"),
    (BidiClass::CommonSeparator, "CS", "Common_Separator"),
    (BidiClass::NonspacingMark, "NSM", "Nonspacing_Mark"),
    (BidiClass::BoundaryNeutral, "BN", "Boundary_Neutral"),
    (BidiClass::ParagraphSeparator, "B", "Paragraph_Separator"),
    (BidiClass::SegmentSeparator, "S", "Segment_Separator"),
    (BidiClass::WhiteSpace, "WS", "White_Space"),
    (BidiClass::OtherNeutral, "ON", "Other_Neutral"),
    (BidiClass::LeftToRightEmbedding, "LRE", "Left_To_Right_Embedding"),
    (BidiClass::LeftToRightOverride, "LRO", "Left_To_Right_Override"),
    (BidiClass::RightToLeftEmbedding, "RLE", "Right_To_Left_Embedding"),
    (BidiClass::RightToLeftOverride, "RLO", "Right_To_Left_Override"),
    (BidiClass::PopDirectionalFormat, "PDF", "Pop_Directional_Format"),
    (BidiClass::LeftToRightIsolate, "LRI", "Left_To_Right_Isolate"),
    (BidiClass::RightToLeftIsolate, "RLI", "Right_To_Left_Isolate"),
    (BidiClass::FirstStrongIsolate, "FSI", "First_Strong_Isolate"),
    (BidiClass::PopDirectionalIsolate, "PDI", "Pop_Directional_Isolate"),
];

impl BidiClass {
    pub fn short_name(self) -> &'static str {
        NAMES[self as usize].1
    }

    pub fn long_name(self) -> &'static str {
        NAMES[self as usize].2
    }

    pub fn from_short_name(short: &str) -> Option<Self> {
        NAMES
            .iter()
            .find(|(_, s, _)| *s == short)
            .map(|(class, _, _)| *class)
    }

    /// L, R and AL.
    pub fn is_strong(self) -> bool {
        matches!(
            self,
            BidiClass::LeftToRight | BidiClass::RightToLeft | BidiClass::ArabicLetter
        )
    }
}

impl fmt::Display for BidiClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

const TABLES: [IntervalTable<'static, BidiClass>; 2] = [
    IntervalTable::new(BIDI_CLASSES),
    IntervalTable::new(DEFAULT_BIDI_CLASSES),
];

/// Bidi class of `cp`, falling back to the unassigned-range defaults.
pub fn codepoint_to_bidi_class(cp: u32) -> Result<BidiClass, LookupError> {
    lookup_chain(&TABLES, cp).ok_or(LookupError::UnknownCodepoint(cp))
}

#[cfg(test)]
mod tests {
    use super::BidiClass::*;
    use super::*;

    #[test]
    fn test_assigned_characters() {
        assert_eq!(codepoint_to_bidi_class(0x41), Ok(LeftToRight));
        assert_eq!(codepoint_to_bidi_class(0x30), Ok(EuropeanNumber));
        assert_eq!(codepoint_to_bidi_class(0x20), Ok(WhiteSpace));
        assert_eq!(codepoint_to_bidi_class(0x0A), Ok(ParagraphSeparator));
        assert_eq!(codepoint_to_bidi_class(0x09), Ok(SegmentSeparator));
        assert_eq!(codepoint_to_bidi_class(0x05D0), Ok(RightToLeft));
        assert_eq!(codepoint_to_bidi_class(0x0627), Ok(ArabicLetter));
        assert_eq!(codepoint_to_bidi_class(0x0661), Ok(ArabicNumber));
        assert_eq!(codepoint_to_bidi_class(0x0300), Ok(NonspacingMark));
        assert_eq!(codepoint_to_bidi_class(0x2067), Ok(RightToLeftIsolate));
    }

    #[test]
    fn test_default_table_for_unassigned() {
        // U+05FF is unassigned; the Hebrew block defaults to R.
        assert_eq!(codepoint_to_bidi_class(0x05FF), Ok(RightToLeft));
        // U+07BF is unassigned; the Thaana block defaults to AL.
        assert_eq!(codepoint_to_bidi_class(0x07BF), Ok(ArabicLetter));
        assert_eq!(codepoint_to_bidi_class(0x1EFFF), Ok(RightToLeft));
    }

    #[test]
    fn test_missing_from_both_tables() {
        assert_eq!(
            codepoint_to_bidi_class(0x0378),
            Err(LookupError::UnknownCodepoint(0x0378))
        );
        assert!(codepoint_to_bidi_class(0x110000).is_err());
    }

    #[test]
    fn test_names() {
        for (class, short, long) in NAMES {
            assert_eq!(class.short_name(), short);
            assert_eq!(class.long_name(), long);
            assert_eq!(BidiClass::from_short_name(short), Some(class));
        }
        assert_eq!(BidiClass::from_short_name("XX"), None);
        assert_eq!(ArabicLetter.to_string(), "AL");
        assert!(ArabicLetter.is_strong());
        assert!(!EuropeanNumber.is_strong());
    }

    #[test]
    fn test_tables_are_sorted() {
        for table in TABLES {
            assert!(table.is_sorted_disjoint());
        }
    }
}
