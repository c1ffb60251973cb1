//! Bidirectional multi-valued map for notation and name lookups.
//!
//! A key (a codepoint or a grapheme string) owns zero or more notation
//! strings, kept in the order they first appear in the source records. Each
//! notation string resolves back to exactly one key, optionally tagged with a
//! type (for math notations, the [`MathType`](crate::MathType) of the symbol).
//!
//! The two directions have different miss policies: a key without notations
//! is a normal outcome and yields an empty slice, while an unknown notation is
//! a genuine miss and yields `None`.
//!
//! If the same notation is registered for two different keys, the later record
//! wins. Such collisions are kept in [`NotationMap::overwritten`] so data tests
//! can check that the shipped tables have none.

use std::borrow::Borrow;
use std::fmt::Debug;
use std::hash::Hash;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// Notations for one key. Most keys have one or two.
pub type Notations = SmallVec<[&'static str; 2]>;

/// A notation that was registered for two different keys.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Overwrite<K> {
    pub notation: &'static str,
    /// The key that lost.
    pub previous: K,
    /// The key the notation now resolves to.
    pub current: K,
}

/// Forward one-to-many, backward many-to-one notation map.
#[derive(Clone, Debug)]
pub struct NotationMap<K, T = ()> {
    forward: FxHashMap<K, Notations>,
    backward: FxHashMap<&'static str, (T, K)>,
    overwritten: Vec<Overwrite<K>>,
}

impl<K, T> NotationMap<K, T>
where
    K: Copy + Eq + Hash + Debug,
    T: Copy,
{
    /// Build both directions from `(key, tag, notation)` records.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = (K, T, &'static str)>,
    {
        let mut forward: FxHashMap<K, Notations> = FxHashMap::default();
        let mut backward: FxHashMap<&'static str, (T, K)> = FxHashMap::default();
        let mut overwritten = Vec::new();

        for (key, tag, notation) in records {
            forward.entry(key).or_default().push(notation);
            if let Some((_, previous)) = backward.insert(notation, (tag, key)) {
                if previous != key {
                    log::warn!(
                        "notation {:?} registered for {:?} and {:?}; keeping {:?}",
                        notation,
                        previous,
                        key,
                        key
                    );
                    overwritten.push(Overwrite {
                        notation,
                        previous,
                        current: key,
                    });
                }
            }
        }

        log::debug!(
            "built notation map: {} keys, {} notations",
            forward.len(),
            backward.len()
        );

        Self {
            forward,
            backward,
            overwritten,
        }
    }

    /// All notations registered for `key`, in first-seen order. Empty when the
    /// key has none.
    pub fn key_to_values<Q>(&self, key: &Q) -> &[&'static str]
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.forward.get(key).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// The tag and key a notation resolves to.
    pub fn value_to_key(&self, notation: &str) -> Option<(T, K)> {
        self.backward.get(notation).copied()
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.forward.contains_key(key)
    }

    /// Number of distinct keys.
    pub fn key_count(&self) -> usize {
        self.forward.len()
    }

    /// Number of distinct notations.
    pub fn notation_count(&self) -> usize {
        self.backward.len()
    }

    /// Notations that were registered for more than one key.
    pub fn overwritten(&self) -> &[Overwrite<K>] {
        &self.overwritten
    }
}

impl<K> NotationMap<K, ()>
where
    K: Copy + Eq + Hash + Debug,
{
    /// Build an untagged map from `(key, notation)` pairs.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, &'static str)>,
    {
        Self::from_records(pairs.into_iter().map(|(key, notation)| (key, (), notation)))
    }

    /// The key a notation resolves to, without the unit tag.
    pub fn value_to_plain_key(&self, notation: &str) -> Option<K> {
        self.value_to_key(notation).map(|((), key)| key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NotationMap<u32, char> {
        NotationMap::from_records([
            (0x2264, 'r', "le"),
            (0x2264, 'r', "leq"),
            (0x2265, 'r', "ge"),
            (0x221A, 'o', "surd"),
            (0x221A, 'a', "sqrt"),
        ])
    }

    #[test]
    fn test_forward_preserves_order() {
        let map = sample();
        assert_eq!(map.key_to_values(&0x2264), &["le", "leq"]);
        assert_eq!(map.key_to_values(&0x221A), &["surd", "sqrt"]);
    }

    #[test]
    fn test_forward_missing_key_is_empty() {
        let map = sample();
        assert!(map.key_to_values(&0x41).is_empty());
        assert!(!map.contains_key(&0x41));
    }

    #[test]
    fn test_backward_returns_tag_and_key() {
        let map = sample();
        assert_eq!(map.value_to_key("leq"), Some(('r', 0x2264)));
        assert_eq!(map.value_to_key("surd"), Some(('o', 0x221A)));
        assert_eq!(map.value_to_key("sqrt"), Some(('a', 0x221A)));
        assert_eq!(map.value_to_key("nope"), None);
    }

    #[test]
    fn test_counts() {
        let map = sample();
        assert_eq!(map.key_count(), 3);
        assert_eq!(map.notation_count(), 5);
        assert!(map.overwritten().is_empty());
    }

    #[test]
    fn test_duplicate_notation_last_write_wins() {
        let map = NotationMap::from_pairs([(1u32, "x"), (2u32, "x"), (2u32, "y")]);
        assert_eq!(map.value_to_plain_key("x"), Some(2));
        // The forward direction still lists the notation under both keys.
        assert_eq!(map.key_to_values(&1), &["x"]);
        assert_eq!(map.key_to_values(&2), &["x", "y"]);
        assert_eq!(
            map.overwritten(),
            &[Overwrite {
                notation: "x",
                previous: 1,
                current: 2
            }]
        );
    }

    #[test]
    fn test_repeated_pair_is_not_a_collision() {
        let map = NotationMap::from_pairs([(1u32, "x"), (1u32, "x")]);
        assert!(map.overwritten().is_empty());
        assert_eq!(map.value_to_plain_key("x"), Some(1));
    }

    #[test]
    fn test_grapheme_keys_borrow_as_str() {
        let map = NotationMap::from_pairs([("é", "\\'e"), ("é", "\\'{e}")]);
        let query = String::from("é");
        assert_eq!(map.key_to_values(query.as_str()), &["\\'e", "\\'{e}"]);
        assert_eq!(map.value_to_plain_key("\\'{e}"), Some("é"));
    }
}
