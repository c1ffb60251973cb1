//! Character names.
//!
//! Most names come from an exact codepoint-to-name table. Some ranges are
//! named by rule instead of individually (UAX #44 NR1 and NR2): CJK
//! ideographs and similar sets get a fixed prefix plus the codepoint in hex,
//! Hangul syllables get a name composed from their jamo. When the exact table
//! misses, the rules in [`NAME_RULES`] are tried in order.
//!
//! ```text
//! U+0041  table         LATIN CAPITAL LETTER A
//! U+4E00  prefix rule   CJK UNIFIED IDEOGRAPH-4E00
//! U+AC01  Hangul rule   HANGUL SYLLABLE GAG
//! ```

use std::borrow::Cow;
use std::sync::LazyLock;

use rustc_hash::FxHashMap;

use crate::category::{codepoint_to_category, GeneralCategory};
use crate::interval::Span;
use crate::name_alias::all_aliases;
use crate::tables::name::NAMES;
use crate::{LookupError, MAX_CODEPOINT};

const HANGUL_BASE: u32 = 0xAC00;
const HANGUL_LAST: u32 = 0xD7A3;
const JAMO_V_COUNT: u32 = 21;
const JAMO_T_COUNT: u32 = 28;
const JAMO_N_COUNT: u32 = JAMO_V_COUNT * JAMO_T_COUNT;

const JAMO_L: [&str; 19] = [
    "G", "GG", "N", "D", "DD", "R", "M", "B", "BB", "S", "SS", "", "J", "JJ", "C", "K", "T", "P",
    "H",
];
const JAMO_V: [&str; 21] = [
    "A", "AE", "YA", "YAE", "EO", "E", "YEO", "YE", "O", "WA", "WAE", "OE", "YO", "U", "WEO", "WE",
    "WI", "YU", "EU", "YI", "I",
];
const JAMO_T: [&str; 28] = [
    "", "G", "GG", "GS", "N", "NJ", "NH", "D", "L", "LG", "LM", "LB", "LS", "LT", "LP", "LH", "M",
    "B", "BS", "S", "SS", "NG", "J", "C", "K", "T", "P", "H",
];

/// How a range of code points gets its names.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NameRule {
    /// `prefix` followed by the code point in uppercase hex, at least 4 digits.
    HexSuffix {
        start: u32,
        end: u32,
        prefix: &'static str,
    },
    /// `HANGUL SYLLABLE ` followed by the names of the syllable's jamo.
    HangulSyllable { start: u32, end: u32 },
}

impl Span for NameRule {
    fn start(&self) -> u32 {
        match *self {
            NameRule::HexSuffix { start, .. } | NameRule::HangulSyllable { start, .. } => start,
        }
    }

    fn end(&self) -> u32 {
        match *self {
            NameRule::HexSuffix { end, .. } | NameRule::HangulSyllable { end, .. } => end,
        }
    }
}

impl NameRule {
    const fn hex(start: u32, end: u32, prefix: &'static str) -> Self {
        NameRule::HexSuffix { start, end, prefix }
    }

    /// The name this rule gives `cp`, if `cp` is in range.
    pub fn name(&self, cp: u32) -> Option<String> {
        if !self.contains(cp) {
            return None;
        }
        match *self {
            NameRule::HexSuffix { prefix, .. } => Some(format!("{}{:04X}", prefix, cp)),
            NameRule::HangulSyllable { .. } => Some(hangul_syllable_name(cp)),
        }
    }

    /// Parse a name this rule could have produced. `name` must be uppercase.
    fn parse(&self, name: &str) -> Option<u32> {
        let cp = match *self {
            NameRule::HexSuffix { prefix, .. } => {
                let digits = name.strip_prefix(prefix)?;
                let cp = u32::from_str_radix(digits, 16).ok()?;
                // Reject spellings the rule never produces (`+4E00`, `04E00`).
                if format!("{:04X}", cp) != digits {
                    return None;
                }
                cp
            }
            NameRule::HangulSyllable { .. } => {
                parse_hangul_syllable(name.strip_prefix("HANGUL SYLLABLE ")?)?
            }
        };
        self.contains(cp).then_some(cp)
    }
}

/// Ranges named by rule, tried in order.
pub const NAME_RULES: &[NameRule] = &[
    NameRule::hex(0x3400, 0x4DBF, "CJK UNIFIED IDEOGRAPH-"),
    NameRule::hex(0x4E00, 0x9FFF, "CJK UNIFIED IDEOGRAPH-"),
    NameRule::HangulSyllable {
        start: HANGUL_BASE,
        end: HANGUL_LAST,
    },
    NameRule::hex(0xF900, 0xFA6D, "CJK COMPATIBILITY IDEOGRAPH-"),
    NameRule::hex(0xFA70, 0xFAD9, "CJK COMPATIBILITY IDEOGRAPH-"),
    NameRule::hex(0x17000, 0x187F7, "TANGUT IDEOGRAPH-"),
    NameRule::hex(0x18B00, 0x18CD5, "KHITAN SMALL SCRIPT CHARACTER-"),
    NameRule::hex(0x18D00, 0x18D08, "TANGUT IDEOGRAPH-"),
    NameRule::hex(0x1B170, 0x1B2FB, "NUSHU CHARACTER-"),
    NameRule::hex(0x20000, 0x2A6DF, "CJK UNIFIED IDEOGRAPH-"),
    NameRule::hex(0x2A700, 0x2B738, "CJK UNIFIED IDEOGRAPH-"),
    NameRule::hex(0x2B740, 0x2B81D, "CJK UNIFIED IDEOGRAPH-"),
    NameRule::hex(0x2B820, 0x2CEA1, "CJK UNIFIED IDEOGRAPH-"),
    NameRule::hex(0x2CEB0, 0x2EBE0, "CJK UNIFIED IDEOGRAPH-"),
    NameRule::hex(0x2F800, 0x2FA1D, "CJK COMPATIBILITY IDEOGRAPH-"),
    NameRule::hex(0x30000, 0x3134A, "CJK UNIFIED IDEOGRAPH-"),
];

fn hangul_syllable_name(cp: u32) -> String {
    let s = cp - HANGUL_BASE;
    let l = (s / JAMO_N_COUNT) as usize;
    let v = ((s % JAMO_N_COUNT) / JAMO_T_COUNT) as usize;
    let t = (s % JAMO_T_COUNT) as usize;
    format!("HANGUL SYLLABLE {}{}{}", JAMO_L[l], JAMO_V[v], JAMO_T[t])
}

fn parse_hangul_syllable(jamo: &str) -> Option<u32> {
    for (l, lead) in JAMO_L.iter().enumerate() {
        let Some(rest) = jamo.strip_prefix(lead) else {
            continue;
        };
        for (v, vowel) in JAMO_V.iter().enumerate() {
            let Some(tail) = rest.strip_prefix(vowel) else {
                continue;
            };
            if let Some(t) = JAMO_T.iter().position(|trail| *trail == tail) {
                return Some(
                    HANGUL_BASE + (l as u32 * JAMO_V_COUNT + v as u32) * JAMO_T_COUNT + t as u32,
                );
            }
        }
    }
    None
}

static NAME_MAP: LazyLock<FxHashMap<u32, &'static str>> = LazyLock::new(|| {
    let map: FxHashMap<_, _> = NAMES.iter().copied().collect();
    log::debug!("built name map: {} entries", map.len());
    map
});

/// Uppercased name or alias to code point.
static CODEPOINT_MAP: LazyLock<FxHashMap<&'static str, u32>> = LazyLock::new(|| {
    let mut map: FxHashMap<&'static str, u32> =
        NAMES.iter().map(|&(cp, name)| (name, cp)).collect();
    for (cp, aliases) in all_aliases() {
        for alias in aliases.iter() {
            map.entry(alias).or_insert(*cp);
        }
    }
    log::debug!("built reverse name map: {} entries", map.len());
    map
});

/// Name of `cp`: the exact table first, then the range rules.
pub fn get_name(cp: u32) -> Result<Cow<'static, str>, LookupError> {
    if let Some(name) = NAME_MAP.get(&cp) {
        return Ok(Cow::Borrowed(*name));
    }
    NAME_RULES
        .iter()
        .find_map(|rule| rule.name(cp))
        .map(Cow::Owned)
        .ok_or(LookupError::UnknownCodepoint(cp))
}

/// Code point of a character name or formal alias. Case-insensitive.
pub fn name_to_codepoint(name: &str) -> Result<u32, LookupError> {
    let upper = name.trim().to_ascii_uppercase();
    if let Some(&cp) = CODEPOINT_MAP.get(upper.as_str()) {
        return Ok(cp);
    }
    NAME_RULES
        .iter()
        .find_map(|rule| rule.parse(&upper))
        .ok_or_else(|| LookupError::UnknownName(name.to_string()))
}

/// The code point label for code points that have no name, e.g.
/// `<control-0009>` or `<reserved-0378>`. `None` for graphic and format
/// characters and for values beyond `U+10FFFF`.
pub fn get_label(cp: u32) -> Option<String> {
    if cp > MAX_CODEPOINT {
        return None;
    }
    let kind = match codepoint_to_category(cp) {
        GeneralCategory::Control => "control",
        GeneralCategory::PrivateUse => "private-use",
        GeneralCategory::Surrogate => "surrogate",
        GeneralCategory::Unassigned if is_noncharacter(cp) => "noncharacter",
        GeneralCategory::Unassigned => "reserved",
        _ => return None,
    };
    Some(format!("<{}-{:04X}>", kind, cp))
}

/// The name of `cp` if it has one, otherwise its label.
pub fn get_name_or_label(cp: u32) -> Result<Cow<'static, str>, LookupError> {
    get_name(cp).or_else(|err| get_label(cp).map(Cow::Owned).ok_or(err))
}

/// U+FDD0..U+FDEF and the last two code points of every plane.
pub fn is_noncharacter(cp: u32) -> bool {
    (0xFDD0..=0xFDEF).contains(&cp) || (cp <= MAX_CODEPOINT && cp & 0xFFFE == 0xFFFE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_names() {
        assert_eq!(get_name(0x41).unwrap(), "LATIN CAPITAL LETTER A");
        assert_eq!(get_name(0x7A).unwrap(), "LATIN SMALL LETTER Z");
        assert_eq!(get_name(0x30).unwrap(), "DIGIT ZERO");
        assert_eq!(get_name(0x221E).unwrap(), "INFINITY");
        assert_eq!(get_name(0x0250).unwrap(), "LATIN SMALL LETTER TURNED A");
        assert_eq!(get_name(0x0E01).unwrap(), "THAI CHARACTER KO KAI");
        assert_eq!(get_name(0x1F600).unwrap(), "GRINNING FACE");
        assert!(matches!(get_name(0x41).unwrap(), Cow::Borrowed(_)));
    }

    #[test]
    fn test_cjk_rule() {
        assert_eq!(get_name(0x4E00).unwrap(), "CJK UNIFIED IDEOGRAPH-4E00");
        assert_eq!(get_name(0x9FFF).unwrap(), "CJK UNIFIED IDEOGRAPH-9FFF");
        assert_eq!(get_name(0x3400).unwrap(), "CJK UNIFIED IDEOGRAPH-3400");
        assert_eq!(get_name(0x20000).unwrap(), "CJK UNIFIED IDEOGRAPH-20000");
        assert_eq!(get_name(0xF900).unwrap(), "CJK COMPATIBILITY IDEOGRAPH-F900");
        assert_eq!(get_name(0x17000).unwrap(), "TANGUT IDEOGRAPH-17000");
        assert_eq!(get_name(0x1B170).unwrap(), "NUSHU CHARACTER-1B170");
        assert_eq!(get_name(0x2B738).unwrap(), "CJK UNIFIED IDEOGRAPH-2B738");
        assert_eq!(
            get_name(0x18B00).unwrap(),
            "KHITAN SMALL SCRIPT CHARACTER-18B00"
        );
    }

    #[test]
    fn test_hangul_rule() {
        assert_eq!(get_name(0xAC00).unwrap(), "HANGUL SYLLABLE GA");
        assert_eq!(get_name(0xAC01).unwrap(), "HANGUL SYLLABLE GAG");
        assert_eq!(get_name(0xD4DB).unwrap(), "HANGUL SYLLABLE PWILH");
        assert_eq!(get_name(0xD7A3).unwrap(), "HANGUL SYLLABLE HIH");
        assert_eq!(get_name(0xC544).unwrap(), "HANGUL SYLLABLE A");
    }

    #[test]
    fn test_unnamed_is_error() {
        assert_eq!(get_name(0x09), Err(LookupError::UnknownCodepoint(0x09)));
        assert!(get_name(0x0378).is_err());
        assert!(get_name(0xD7A4).is_err());
        assert!(get_name(0x110000).is_err());
    }

    #[test]
    fn test_name_to_codepoint() {
        assert_eq!(name_to_codepoint("LATIN SMALL LETTER A"), Ok(0x61));
        assert_eq!(name_to_codepoint("latin small letter a"), Ok(0x61));
        assert_eq!(name_to_codepoint("CJK UNIFIED IDEOGRAPH-4E00"), Ok(0x4E00));
        assert_eq!(name_to_codepoint("cjk unified ideograph-20000"), Ok(0x20000));
        assert_eq!(name_to_codepoint("HANGUL SYLLABLE GAG"), Ok(0xAC01));
        assert_eq!(name_to_codepoint("HANGUL SYLLABLE A"), Ok(0xC544));
        assert_eq!(name_to_codepoint("HANGUL SYLLABLE PWILH"), Ok(0xD4DB));
    }

    #[test]
    fn test_name_to_codepoint_aliases() {
        assert_eq!(name_to_codepoint("LINE FEED"), Ok(0x0A));
        assert_eq!(name_to_codepoint("LF"), Ok(0x0A));
        assert_eq!(name_to_codepoint("byte order mark"), Ok(0xFEFF));
        // The correction and the original name both resolve.
        assert_eq!(name_to_codepoint("LATIN CAPITAL LETTER GHA"), Ok(0x01A2));
        assert_eq!(name_to_codepoint("LATIN CAPITAL LETTER OI"), Ok(0x01A2));
    }

    #[test]
    fn test_name_to_codepoint_rejects_bad_suffixes() {
        // Outside the rule's range.
        assert!(name_to_codepoint("CJK UNIFIED IDEOGRAPH-0041").is_err());
        // Not the rule's spelling.
        assert!(name_to_codepoint("CJK UNIFIED IDEOGRAPH-04E00").is_err());
        assert!(name_to_codepoint("CJK UNIFIED IDEOGRAPH-+4E00").is_err());
        assert!(name_to_codepoint("HANGUL SYLLABLE XYZ").is_err());
        assert_eq!(
            name_to_codepoint("NOT A CHARACTER"),
            Err(LookupError::UnknownName("NOT A CHARACTER".to_string()))
        );
    }

    #[test]
    fn test_rules_round_trip_over_hangul() {
        for cp in HANGUL_BASE..=HANGUL_LAST {
            let name = get_name(cp).unwrap();
            assert_eq!(name_to_codepoint(&name), Ok(cp), "{}", name);
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(get_label(0x09).as_deref(), Some("<control-0009>"));
        assert_eq!(get_label(0xE000).as_deref(), Some("<private-use-E000>"));
        assert_eq!(get_label(0xD800).as_deref(), Some("<surrogate-D800>"));
        assert_eq!(get_label(0xFFFE).as_deref(), Some("<noncharacter-FFFE>"));
        assert_eq!(get_label(0xFDD0).as_deref(), Some("<noncharacter-FDD0>"));
        assert_eq!(get_label(0x0378).as_deref(), Some("<reserved-0378>"));
        assert_eq!(get_label(0x41), None);
        assert_eq!(get_label(0x0250), None);
        assert_eq!(get_label(0x0E01), None);
        assert_eq!(get_label(0x110000), None);
    }

    #[test]
    fn test_name_or_label() {
        assert_eq!(get_name_or_label(0x41).unwrap(), "LATIN CAPITAL LETTER A");
        assert_eq!(get_name_or_label(0x09).unwrap(), "<control-0009>");
        assert!(get_name_or_label(0x110000).is_err());
    }

    #[test]
    fn test_noncharacters() {
        assert!(is_noncharacter(0xFFFF));
        assert!(is_noncharacter(0x10FFFE));
        assert!(is_noncharacter(0x1FFFF));
        assert!(!is_noncharacter(0xFFFD));
        assert!(!is_noncharacter(0x11FFFE));
    }

    #[test]
    fn test_rules_are_sorted() {
        assert!(crate::interval::is_sorted_disjoint(NAME_RULES));
    }
}
