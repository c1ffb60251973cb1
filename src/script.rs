//! Unicode scripts.
//!
//! Scripts are identified by their ISO 15924 code, stored lowercase (`latn`,
//! `grek`, ...). Codepoints outside every script range resolve to
//! [`UNKNOWN_SCRIPT`]. Unlike blocks, a script is spread over many ranges, so
//! the reverse lookup returns all of them.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

use crate::canonical::comparable_property;
use crate::interval::IntervalTable;
use crate::tables::script::{SCRIPTS, SCRIPT_RANGES};
use crate::LookupError;

/// Code reported for codepoints without a script.
pub const UNKNOWN_SCRIPT: &str = "zzzz";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Script {
    /// ISO 15924 code, lowercase.
    pub code: &'static str,
    /// Long property value alias, e.g. `Old_Italic`.
    pub name: &'static str,
    pub aliases: &'static [&'static str],
}

impl Script {
    pub const fn new(
        code: &'static str,
        name: &'static str,
        aliases: &'static [&'static str],
    ) -> Self {
        Self {
            code,
            name,
            aliases,
        }
    }
}

const TABLE: IntervalTable<'static, &'static str> = IntervalTable::new(SCRIPT_RANGES);

/// Keyed by the comparable form of the code, the long name and every alias.
static NAME_INDEX: LazyLock<FxHashMap<String, usize>> = LazyLock::new(|| {
    let mut index = FxHashMap::default();
    for (i, script) in SCRIPTS.iter().enumerate() {
        index.insert(comparable_property(script.code), i);
        index.insert(comparable_property(script.name), i);
        for alias in script.aliases {
            index.insert(comparable_property(alias), i);
        }
    }
    log::debug!("built script name index: {} keys for {} scripts", index.len(), SCRIPTS.len());
    index
});

static CODES: LazyLock<Vec<&'static str>> =
    LazyLock::new(|| SCRIPTS.iter().map(|script| script.code).collect());

/// Script code of `cp`, or [`UNKNOWN_SCRIPT`].
pub fn codepoint_to_script(cp: u32) -> &'static str {
    TABLE.lookup(cp).unwrap_or(UNKNOWN_SCRIPT)
}

/// Look up a script by code, long name or alias, loosely matched.
pub fn name_to_script(name: &str) -> Result<&'static Script, LookupError> {
    NAME_INDEX
        .get(&comparable_property(name))
        .map(|&i| &SCRIPTS[i])
        .ok_or_else(|| LookupError::UnknownName(name.to_string()))
}

/// `latn` -> `Latin`. Codes match case-insensitively.
pub fn short_name_to_long_name(code: &str) -> Result<&'static str, LookupError> {
    SCRIPTS
        .iter()
        .find(|script| script.code.eq_ignore_ascii_case(code))
        .map(|script| script.name)
        .ok_or_else(|| LookupError::UnknownName(code.to_string()))
}

/// `Old Italic` -> `ital`. Long names match loosely.
pub fn long_name_to_short_name(name: &str) -> Result<&'static str, LookupError> {
    let key = comparable_property(name);
    SCRIPTS
        .iter()
        .find(|script| comparable_property(script.name) == key)
        .map(|script| script.code)
        .ok_or_else(|| LookupError::UnknownName(name.to_string()))
}

/// All ranges assigned to the named script, in code point order, with the
/// script's aliases.
///
/// A known script with no ranges in the table (e.g. `Unknown` itself) yields
/// an empty range list rather than an error.
pub fn script_to_codepoint_ranges(
    name: &str,
) -> Result<(Vec<(u32, u32)>, &'static [&'static str]), LookupError> {
    let script = name_to_script(name)?;
    let ranges = TABLE
        .records()
        .iter()
        .filter(|record| record.value.resolve(record.start) == script.code)
        .map(|record| (record.start, record.end))
        .collect();
    Ok((ranges, script.aliases))
}

/// Every script code, in table order.
pub fn get_list() -> &'static [&'static str] {
    &CODES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codepoint_to_script() {
        assert_eq!(codepoint_to_script(0x41), "latn");
        assert_eq!(codepoint_to_script(0x20), "zyyy");
        assert_eq!(codepoint_to_script(0x0301), "zinh");
        assert_eq!(codepoint_to_script(0x03B1), "grek");
        assert_eq!(codepoint_to_script(0x03E2), "copt");
        assert_eq!(codepoint_to_script(0x05D0), "hebr");
        assert_eq!(codepoint_to_script(0x4E00), "hani");
        assert_eq!(codepoint_to_script(0xAC00), "hang");
        assert_eq!(codepoint_to_script(0x10300), "ital");
        assert_eq!(codepoint_to_script(0x0250), "latn");
        assert_eq!(codepoint_to_script(0x0E01), "thai");
        assert_eq!(codepoint_to_script(0x1E290), "toto");
    }

    #[test]
    fn test_unknown_sentinel() {
        assert_eq!(codepoint_to_script(0x0378), UNKNOWN_SCRIPT);
        assert_eq!(codepoint_to_script(0xE000), UNKNOWN_SCRIPT);
        assert_eq!(codepoint_to_script(0x110000), UNKNOWN_SCRIPT);
    }

    #[test]
    fn test_name_to_script() {
        let italic = name_to_script("Old_Italic").unwrap();
        assert_eq!(italic.code, "ital");
        assert_eq!(name_to_script("OldItalic"), Ok(italic));
        assert_eq!(name_to_script("old-italic"), Ok(italic));
        assert_eq!(name_to_script("Ital"), Ok(italic));
        assert_eq!(name_to_script("Qaai").unwrap().name, "Inherited");
        assert_eq!(
            name_to_script("Elvish"),
            Err(LookupError::UnknownName("Elvish".to_string()))
        );
    }

    #[test]
    fn test_short_and_long_names() {
        assert_eq!(short_name_to_long_name("latn"), Ok("Latin"));
        assert_eq!(short_name_to_long_name("Latn"), Ok("Latin"));
        assert_eq!(long_name_to_short_name("Old Italic"), Ok("ital"));
        assert_eq!(long_name_to_short_name("KATAKANA_OR_HIRAGANA"), Ok("hrkt"));
        assert!(short_name_to_long_name("xxxx").is_err());
        assert!(long_name_to_short_name("Latn").is_err());
    }

    #[test]
    fn test_script_to_codepoint_ranges() {
        let (ranges, aliases) = script_to_codepoint_ranges("Latin").unwrap();
        assert_eq!(ranges[0], (0x41, 0x5A));
        assert_eq!(ranges[1], (0x61, 0x7A));
        assert!(ranges.windows(2).all(|w| w[0].1 < w[1].0));
        assert!(aliases.is_empty());

        let (ranges, aliases) = script_to_codepoint_ranges("Coptic").unwrap();
        assert_eq!(ranges, vec![(0x03E2, 0x03EF), (0x2C80, 0x2CF3), (0x2CF9, 0x2CFF)]);
        assert_eq!(aliases, &["Qaac"]);

        let (ranges, _) = script_to_codepoint_ranges("Unknown").unwrap();
        assert!(ranges.is_empty());

        assert!(script_to_codepoint_ranges("Quenya").is_err());
    }

    #[test]
    fn test_list_keeps_table_order() {
        let list = get_list();
        assert_eq!(list.len(), SCRIPTS.len());
        // Every Script property value, plus Katakana_Or_Hiragana.
        assert_eq!(list.len(), 163);
        assert_eq!(list[0], "adlm");
        assert_eq!(list.last(), Some(&UNKNOWN_SCRIPT));
    }

    #[test]
    fn test_every_range_names_a_known_script() {
        assert!(TABLE.is_sorted_disjoint());
        for record in TABLE.records() {
            let code = record.value.resolve(record.start);
            assert!(name_to_script(code).is_ok(), "{}", code);
        }
    }
}
