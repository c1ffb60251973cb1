//! Formal name aliases.
//!
//! Each code point may carry aliases of five kinds, which are kept apart
//! because they mean different things: a correction replaces a mistaken name,
//! a control alias names a control code, an alternate is a widely used other
//! name, a figment names something that was never really standardized, and an
//! abbreviation is a short form. Code points without aliases get five empty
//! lists.

use crate::tables::name_alias::NAME_ALIASES;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NameAliases {
    pub corrections: &'static [&'static str],
    pub controls: &'static [&'static str],
    pub alternates: &'static [&'static str],
    pub figments: &'static [&'static str],
    pub abbreviations: &'static [&'static str],
}

static EMPTY: NameAliases = NameAliases::new(&[], &[], &[], &[], &[]);

impl NameAliases {
    pub const fn new(
        corrections: &'static [&'static str],
        controls: &'static [&'static str],
        alternates: &'static [&'static str],
        figments: &'static [&'static str],
        abbreviations: &'static [&'static str],
    ) -> Self {
        Self {
            corrections,
            controls,
            alternates,
            figments,
            abbreviations,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// All aliases, in the order corrections, controls, alternates, figments,
    /// abbreviations.
    pub fn iter(&self) -> impl Iterator<Item = &'static str> {
        self.corrections
            .iter()
            .chain(self.controls)
            .chain(self.alternates)
            .chain(self.figments)
            .chain(self.abbreviations)
            .copied()
    }
}

/// Aliases of `cp`; all five lists are empty when it has none.
pub fn get_aliases(cp: u32) -> &'static NameAliases {
    NAME_ALIASES
        .binary_search_by_key(&cp, |(c, _)| *c)
        .map_or(&EMPTY, |i| &NAME_ALIASES[i].1)
}

/// Every code point with aliases, in code point order.
pub(crate) fn all_aliases() -> &'static [(u32, NameAliases)] {
    NAME_ALIASES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_aliases_keep_order() {
        let aliases = get_aliases(0x0A);
        assert_eq!(aliases.controls, &["LINE FEED", "NEW LINE", "END OF LINE"]);
        assert_eq!(aliases.abbreviations, &["LF", "NL", "EOL"]);
        assert!(aliases.corrections.is_empty());
        assert!(aliases.alternates.is_empty());
        assert!(aliases.figments.is_empty());
    }

    #[test]
    fn test_kinds_are_separate() {
        assert_eq!(get_aliases(0x01A2).corrections, &["LATIN CAPITAL LETTER GHA"]);
        assert_eq!(get_aliases(0xFEFF).alternates, &["BYTE ORDER MARK"]);
        assert_eq!(get_aliases(0x0080).figments, &["PADDING CHARACTER"]);
        assert!(get_aliases(0x0080).controls.is_empty());
    }

    #[test]
    fn test_missing_code_point_is_empty() {
        let aliases = get_aliases(0x41);
        assert!(aliases.is_empty());
        assert_eq!(*aliases, NameAliases::default());
        assert!(get_aliases(0x110000).is_empty());
    }

    #[test]
    fn test_iter_flattens_in_kind_order() {
        let all: Vec<_> = get_aliases(0x09).iter().collect();
        assert_eq!(
            all,
            vec!["CHARACTER TABULATION", "HORIZONTAL TABULATION", "HT", "TAB"]
        );
    }

    #[test]
    fn test_table_is_sorted() {
        assert!(NAME_ALIASES.windows(2).all(|w| w[0].0 < w[1].0));
    }
}
