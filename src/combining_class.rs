//! Canonical combining class.

use crate::interval::IntervalTable;
use crate::tables::combining_class::COMBINING_CLASSES;

const TABLE: IntervalTable<'static, u8> = IntervalTable::new(COMBINING_CLASSES);

/// Canonical combining class of `cp`; `0` (Not_Reordered) when unlisted.
pub fn codepoint_to_combining_class(cp: u32) -> u8 {
    TABLE.lookup(cp).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combining_marks() {
        assert_eq!(codepoint_to_combining_class(0x0300), 230);
        assert_eq!(codepoint_to_combining_class(0x0316), 220);
        assert_eq!(codepoint_to_combining_class(0x0334), 1);
        assert_eq!(codepoint_to_combining_class(0x0345), 240);
        assert_eq!(codepoint_to_combining_class(0x0591), 220);
        assert_eq!(codepoint_to_combining_class(0x05B0), 10);
        assert_eq!(codepoint_to_combining_class(0x0E38), 103);
        assert_eq!(codepoint_to_combining_class(0x094D), 9);
        assert_eq!(codepoint_to_combining_class(0x3099), 8);
    }

    #[test]
    fn test_default_zero() {
        assert_eq!(codepoint_to_combining_class(0x41), 0);
        // COMBINING GRAPHEME JOINER sits inside the combining marks block but is a starter.
        assert_eq!(codepoint_to_combining_class(0x034F), 0);
        assert_eq!(codepoint_to_combining_class(0x10FFFF), 0);
    }

    #[test]
    fn test_table_is_sorted() {
        assert!(TABLE.is_sorted_disjoint());
    }
}
