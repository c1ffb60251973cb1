//! Unicode blocks.
//!
//! Forward lookup comes in two shapes: [`codepoint_to_block`] always answers,
//! using the `No_Block` sentinel outside every block, while
//! [`codepoint_to_block_record`] reports the miss as an error. Reverse lookups
//! go through a map keyed by [`comparable_property`], built on first use from
//! each block's name and every alias.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

use crate::canonical::comparable_property;
use crate::interval::{search, Span};
use crate::tables::block::BLOCKS;
use crate::LookupError;

/// Name reported for codepoints outside every block.
pub const NO_BLOCK: &str = "No_Block";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Block {
    pub start: u32,
    pub end: u32,
    /// Long property value alias, e.g. `Old_Italic`.
    pub name: &'static str,
    /// Short and legacy aliases, e.g. `ASCII` for `Basic_Latin`.
    pub aliases: &'static [&'static str],
}

impl Block {
    pub const fn new(
        start: u32,
        end: u32,
        name: &'static str,
        aliases: &'static [&'static str],
    ) -> Self {
        Self {
            start,
            end,
            name,
            aliases,
        }
    }
}

impl Span for Block {
    fn start(&self) -> u32 {
        self.start
    }

    fn end(&self) -> u32 {
        self.end
    }
}

static NAME_INDEX: LazyLock<FxHashMap<String, usize>> = LazyLock::new(|| {
    let mut index = FxHashMap::default();
    for (i, block) in BLOCKS.iter().enumerate() {
        index.insert(comparable_property(block.name), i);
        for alias in block.aliases {
            index.insert(comparable_property(alias), i);
        }
    }
    log::debug!("built block name index: {} keys for {} blocks", index.len(), BLOCKS.len());
    index
});

static NAMES: LazyLock<Vec<&'static str>> =
    LazyLock::new(|| BLOCKS.iter().map(|block| block.name).collect());

/// The block containing `cp`, or an error outside every block.
pub fn codepoint_to_block_record(cp: u32) -> Result<&'static Block, LookupError> {
    search(BLOCKS, cp).ok_or(LookupError::UnknownCodepoint(cp))
}

/// Name of the block containing `cp`, or [`NO_BLOCK`].
pub fn codepoint_to_block(cp: u32) -> &'static str {
    search(BLOCKS, cp).map_or(NO_BLOCK, |block| block.name)
}

/// Look up a block by name or alias, loosely matched.
pub fn name_to_block(name: &str) -> Result<&'static Block, LookupError> {
    NAME_INDEX
        .get(&comparable_property(name))
        .map(|&i| &BLOCKS[i])
        .ok_or_else(|| LookupError::UnknownName(name.to_string()))
}

/// Range and aliases of the named block.
pub fn block_to_codepoint_range(
    name: &str,
) -> Result<(u32, u32, &'static [&'static str]), LookupError> {
    name_to_block(name).map(|block| (block.start, block.end, block.aliases))
}

/// Every block name, in code point order.
pub fn get_list() -> &'static [&'static str] {
    &NAMES
}

/// Every block record, in code point order.
pub fn blocks() -> &'static [Block] {
    BLOCKS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interval::is_sorted_disjoint;

    #[test]
    fn test_codepoint_to_block() {
        assert_eq!(codepoint_to_block(0x41), "Basic_Latin");
        assert_eq!(codepoint_to_block(0x7F), "Basic_Latin");
        assert_eq!(codepoint_to_block(0x80), "Latin_1_Supplement");
        assert_eq!(codepoint_to_block(0x4E00), "CJK_Unified_Ideographs");
        assert_eq!(codepoint_to_block(0x10300), "Old_Italic");
        assert_eq!(codepoint_to_block(0x10FFFF), "Supplementary_Private_Use_Area_B");
    }

    #[test]
    fn test_no_block_sentinel_and_error() {
        assert_eq!(codepoint_to_block(0x2FE0), NO_BLOCK);
        assert_eq!(codepoint_to_block(0xE0080), NO_BLOCK);
        assert_eq!(
            codepoint_to_block_record(0x2FE0),
            Err(LookupError::UnknownCodepoint(0x2FE0))
        );
        let record = codepoint_to_block_record(0x3042).unwrap();
        assert_eq!(record.name, "Hiragana");
        assert_eq!((record.start, record.end), (0x3040, 0x309F));
    }

    #[test]
    fn test_name_canonicalization() {
        let expected = name_to_block("Old_Italic").unwrap();
        for spelling in ["old-italic", "OLDITALIC", "Old Italic", "IsOldItalic"] {
            assert_eq!(name_to_block(spelling), Ok(expected), "{}", spelling);
        }
        assert_eq!((expected.start, expected.end), (0x10300, 0x1032F));
    }

    #[test]
    fn test_aliases_resolve() {
        assert_eq!(name_to_block("ASCII").unwrap().name, "Basic_Latin");
        assert_eq!(name_to_block("latin-1").unwrap().name, "Latin_1_Supplement");
        assert_eq!(name_to_block("Greek").unwrap().name, "Greek_And_Coptic");
        assert_eq!(
            name_to_block("Arabic_Presentation_Forms-A").unwrap().name,
            "Arabic_Presentation_Forms_A"
        );
    }

    #[test]
    fn test_unknown_name_is_error() {
        assert_eq!(
            name_to_block("Klingon"),
            Err(LookupError::UnknownName("Klingon".to_string()))
        );
        assert!(block_to_codepoint_range("").is_err());
    }

    #[test]
    fn test_block_to_codepoint_range() {
        let (start, end, aliases) = block_to_codepoint_range("basic latin").unwrap();
        assert_eq!((start, end), (0x0000, 0x007F));
        assert_eq!(aliases, &["ASCII"]);
    }

    #[test]
    fn test_list_keeps_table_order() {
        let list = get_list();
        assert_eq!(list.len(), blocks().len());
        assert_eq!(list[0], "Basic_Latin");
        assert_eq!(list[1], "Latin_1_Supplement");
        assert_eq!(list.last(), Some(&"Supplementary_Private_Use_Area_B"));
    }

    #[test]
    fn test_table_is_sorted() {
        assert!(is_sorted_disjoint(BLOCKS));
    }

    #[test]
    fn test_names_do_not_collide() {
        for (i, block) in BLOCKS.iter().enumerate() {
            for name in std::iter::once(&block.name).chain(block.aliases) {
                assert_eq!(NAME_INDEX.get(&comparable_property(name)), Some(&i), "{}", name);
            }
        }
    }
}
