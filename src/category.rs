//! Unicode general category.
//!
//! Lookup never fails: codepoints absent from the table are `Cn`
//! ([`GeneralCategory::Unassigned`]), as UCD defines for unlisted code points.

use std::fmt;

use crate::interval::IntervalTable;
use crate::tables::category::CATEGORIES;

/// The major class a [`GeneralCategory`] belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CategoryGroup {
    Letter,
    Mark,
    Number,
    Punctuation,
    Symbol,
    Separator,
    Other,
}

impl CategoryGroup {
    /// One-letter abbreviation (`L`, `M`, ...).
    pub fn short_name(self) -> &'static str {
        match self {
            CategoryGroup::Letter => "L",
            CategoryGroup::Mark => "M",
            CategoryGroup::Number => "N",
            CategoryGroup::Punctuation => "P",
            CategoryGroup::Symbol => "S",
            CategoryGroup::Separator => "Z",
            CategoryGroup::Other => "C",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GeneralCategory {
    UppercaseLetter,
    LowercaseLetter,
    TitlecaseLetter,
    ModifierLetter,
    OtherLetter,
    NonspacingMark,
    SpacingMark,
    EnclosingMark,
    DecimalNumber,
    LetterNumber,
    OtherNumber,
    ConnectorPunctuation,
    DashPunctuation,
    OpenPunctuation,
    ClosePunctuation,
    InitialPunctuation,
    FinalPunctuation,
    OtherPunctuation,
    MathSymbol,
    CurrencySymbol,
    ModifierSymbol,
    OtherSymbol,
    SpaceSeparator,
    LineSeparator,
    ParagraphSeparator,
    Control,
    Format,
    Surrogate,
    PrivateUse,
    Unassigned,
}

/// Every category with its short and long property value alias.
const NAMES: [(GeneralCategory, &str, &str); 30] = [
    (GeneralCategory::UppercaseLetter, "Lu", "Uppercase_Letter"),
    (GeneralCategory::LowercaseLetter, "Ll", "Lowercase_Letter"),
    (GeneralCategory::TitlecaseLetter, "Lt", "Titlecase_Letter"),
    (GeneralCategory::ModifierLetter, "Lm", "Modifier_Letter"),
    (GeneralCategory::OtherLetter, "Lo", "Other_Letter"),
    (GeneralCategory::NonspacingMark, "Mn", "Nonspacing_Mark"),
    (GeneralCategory::SpacingMark, "Mc", "Spacing_Mark"),
    (GeneralCategory::EnclosingMark, "Me", "Enclosing_Mark"),
    (GeneralCategory::DecimalNumber, "Nd", "Decimal_Number"),
    (GeneralCategory::LetterNumber, "Nl", "Letter_Number"),
    (GeneralCategory::OtherNumber, "No", "Other_Number"),
    (GeneralCategory::ConnectorPunctuation, "Pc", "Connector_Punctuation"),
    (GeneralCategory::DashPunctuation, "Pd", "Dash_Punctuation"),
    (GeneralCategory::OpenPunctuation, "Ps", "Open_Punctuation"),
    (GeneralCategory::ClosePunctuation, "Pe", "Close_Punctuation"),
    (GeneralCategory::InitialPunctuation, "Pi", "Initial_Punctuation"),
    (GeneralCategory::FinalPunctuation, "Pf", "Final_Punctuation"),
    (GeneralCategory::OtherPunctuation, "Po", "Other_Punctuation"),
    (GeneralCategory::MathSymbol, "Sm", "Math_Symbol"),
    (GeneralCategory::CurrencySymbol, "Sc", "Currency_Symbol"),
    (GeneralCategory::ModifierSymbol, "Sk", "Modifier_Symbol"),
    (GeneralCategory::OtherSymbol, "So", "Other_Symbol"),
    (GeneralCategory::SpaceSeparator, "Zs", "Space_Separator"),
    (GeneralCategory::LineSeparator, "Zl", "Line_Separator"),
    (GeneralCategory::ParagraphSeparator, "Zp", "Paragraph_Separator"),
    (GeneralCategory::Control, "Cc", "Control"),
    (GeneralCategory::Format, "Cf", "Format"),
    (GeneralCategory::Surrogate, "Cs", "Surrogate"),
    (GeneralCategory::PrivateUse, "Co", "Private_Use"),
    (GeneralCategory::Unassigned, "Cn", "Unassigned"),
];

impl GeneralCategory {
    /// Two-letter abbreviation, e.g. `Lu`.
    pub fn short_name(self) -> &'static str {
        NAMES[self as usize].1
    }

    /// Long property value alias, e.g. `Uppercase_Letter`.
    pub fn long_name(self) -> &'static str {
        NAMES[self as usize].2
    }

    /// Parse a two-letter abbreviation. Matching is exact (`Lu`, not `LU`).
    pub fn from_short_name(short: &str) -> Option<Self> {
        NAMES
            .iter()
            .find(|(_, s, _)| *s == short)
            .map(|(category, _, _)| *category)
    }

    pub fn group(self) -> CategoryGroup {
        use GeneralCategory::*;
        match self {
            UppercaseLetter | LowercaseLetter | TitlecaseLetter | ModifierLetter | OtherLetter => {
                CategoryGroup::Letter
            }
            NonspacingMark | SpacingMark | EnclosingMark => CategoryGroup::Mark,
            DecimalNumber | LetterNumber | OtherNumber => CategoryGroup::Number,
            ConnectorPunctuation | DashPunctuation | OpenPunctuation | ClosePunctuation
            | InitialPunctuation | FinalPunctuation | OtherPunctuation => {
                CategoryGroup::Punctuation
            }
            MathSymbol | CurrencySymbol | ModifierSymbol | OtherSymbol => CategoryGroup::Symbol,
            SpaceSeparator | LineSeparator | ParagraphSeparator => CategoryGroup::Separator,
            Control | Format | Surrogate | PrivateUse | Unassigned => CategoryGroup::Other,
        }
    }
}

impl fmt::Display for GeneralCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

const TABLE: IntervalTable<'static, GeneralCategory> = IntervalTable::new(CATEGORIES);

/// General category of `cp`; `Unassigned` when the table has no entry.
pub fn codepoint_to_category(cp: u32) -> GeneralCategory {
    TABLE.lookup(cp).unwrap_or(GeneralCategory::Unassigned)
}

#[cfg(test)]
mod tests {
    use super::GeneralCategory::*;
    use super::*;

    #[test]
    fn test_ascii() {
        assert_eq!(codepoint_to_category(0x41), UppercaseLetter);
        assert_eq!(codepoint_to_category(0x42), UppercaseLetter);
        assert_eq!(codepoint_to_category(0x7A), LowercaseLetter);
        assert_eq!(codepoint_to_category(0x5B), OpenPunctuation);
        assert_eq!(codepoint_to_category(0x30), DecimalNumber);
        assert_eq!(codepoint_to_category(0x20), SpaceSeparator);
        assert_eq!(codepoint_to_category(0x09), Control);
        assert_eq!(codepoint_to_category(0x24), CurrencySymbol);
        assert_eq!(codepoint_to_category(0x5F), ConnectorPunctuation);
    }

    #[test]
    fn test_parity_compressed_latin_extended() {
        assert_eq!(codepoint_to_category(0x0100), UppercaseLetter);
        assert_eq!(codepoint_to_category(0x0101), LowercaseLetter);
        assert_eq!(codepoint_to_category(0x0136), UppercaseLetter);
        assert_eq!(codepoint_to_category(0x0137), LowercaseLetter);
        // Parity flips after U+0138.
        assert_eq!(codepoint_to_category(0x0139), UppercaseLetter);
        assert_eq!(codepoint_to_category(0x013A), LowercaseLetter);
        assert_eq!(codepoint_to_category(0x017D), UppercaseLetter);
        assert_eq!(codepoint_to_category(0x017E), LowercaseLetter);
    }

    #[test]
    fn test_outside_latin_1() {
        assert_eq!(codepoint_to_category(0x0250), LowercaseLetter);
        assert_eq!(codepoint_to_category(0x0E01), OtherLetter);
        assert_eq!(codepoint_to_category(0x0591), NonspacingMark);
        assert_eq!(codepoint_to_category(0x1F600), OtherSymbol);
        assert_eq!(codepoint_to_category(0x1E290), OtherLetter);
    }

    #[test]
    fn test_unassigned_default() {
        assert_eq!(codepoint_to_category(0x0378), Unassigned);
        assert_eq!(codepoint_to_category(0x03A2), Unassigned);
        assert_eq!(codepoint_to_category(0xFFFF), Unassigned);
        assert_eq!(codepoint_to_category(0x110000), Unassigned);
    }

    #[test]
    fn test_separators_and_special_ranges() {
        assert_eq!(codepoint_to_category(0x2028), LineSeparator);
        assert_eq!(codepoint_to_category(0x2029), ParagraphSeparator);
        assert_eq!(codepoint_to_category(0x4E00), OtherLetter);
        assert_eq!(codepoint_to_category(0xAC00), OtherLetter);
        assert_eq!(codepoint_to_category(0xD800), Surrogate);
        assert_eq!(codepoint_to_category(0xE000), PrivateUse);
        assert_eq!(codepoint_to_category(0x10FFFD), PrivateUse);
    }

    #[test]
    fn test_names_round_trip() {
        for (category, short, long) in NAMES {
            assert_eq!(category.short_name(), short);
            assert_eq!(category.long_name(), long);
            assert_eq!(GeneralCategory::from_short_name(short), Some(category));
        }
        assert_eq!(GeneralCategory::from_short_name("LU"), None);
        assert_eq!(UppercaseLetter.to_string(), "Lu");
    }

    #[test]
    fn test_groups() {
        assert_eq!(TitlecaseLetter.group(), CategoryGroup::Letter);
        assert_eq!(EnclosingMark.group(), CategoryGroup::Mark);
        assert_eq!(Unassigned.group(), CategoryGroup::Other);
        assert_eq!(ParagraphSeparator.group().short_name(), "Z");
    }

    #[test]
    fn test_table_is_sorted() {
        assert!(TABLE.is_sorted_disjoint());
    }
}
