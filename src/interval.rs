//! Interval table lookup engine.
//!
//! Every range-based property in this crate (general category, bidi class,
//! combining class, script, block) is stored as a flat slice of records sorted
//! by their first codepoint, with no two records overlapping. Resolution is a
//! binary search over that slice.
//!
//! Large blocks whose category alternates codepoint by codepoint (e.g. the
//! Latin Extended case pairs) are compressed into a single record carrying two
//! values; the value is then picked by codepoint parity:
//! ```text
//! 0x0100..=0x012F  Alternating { even: Lu, odd: Ll }
//!   0x0100 -> Lu, 0x0101 -> Ll, 0x0102 -> Lu, ...
//! ```
//!
//! The engine trusts its input: tables must be sorted and disjoint. A malformed
//! table gives wrong answers rather than an error. [`is_sorted_disjoint`] exists
//! so tests can assert the invariant over the shipped data.

use std::cmp::Ordering;

/// Anything that covers an inclusive codepoint range.
///
/// Implemented by [`IntervalRecord`] and by the richer block and script
/// entries, so all of them share [`search`].
pub trait Span {
    /// First codepoint covered.
    fn start(&self) -> u32;
    /// Last codepoint covered (inclusive).
    fn end(&self) -> u32;

    fn contains(&self, cp: u32) -> bool {
        self.start() <= cp && cp <= self.end()
    }
}

/// The value part of a record: either one value for the whole range, or two
/// values alternating by parity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordValue<V> {
    Single(V),
    Alternating { even: V, odd: V },
}

impl<V: Copy> RecordValue<V> {
    /// Pick the value that applies to `cp`.
    #[inline]
    pub fn resolve(&self, cp: u32) -> V {
        match *self {
            RecordValue::Single(v) => v,
            RecordValue::Alternating { even, odd } => {
                if cp % 2 == 0 {
                    even
                } else {
                    odd
                }
            }
        }
    }
}

/// A contiguous range sharing one (or two alternating) property values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IntervalRecord<V> {
    pub start: u32,
    pub end: u32,
    pub value: RecordValue<V>,
}

impl<V> IntervalRecord<V> {
    pub const fn single(start: u32, end: u32, value: V) -> Self {
        Self {
            start,
            end,
            value: RecordValue::Single(value),
        }
    }

    pub const fn alternating(start: u32, end: u32, even: V, odd: V) -> Self {
        Self {
            start,
            end,
            value: RecordValue::Alternating { even, odd },
        }
    }
}

impl<V> Span for IntervalRecord<V> {
    #[inline]
    fn start(&self) -> u32 {
        self.start
    }

    #[inline]
    fn end(&self) -> u32 {
        self.end
    }
}

/// Binary search `records` for the one containing `cp`.
///
/// `records` must be sorted by start and disjoint.
pub fn search<R: Span>(records: &[R], cp: u32) -> Option<&R> {
    records
        .binary_search_by(|record| {
            if cp < record.start() {
                Ordering::Greater
            } else if record.end() < cp {
                Ordering::Less
            } else {
                Ordering::Equal
            }
        })
        .ok()
        .map(|idx| &records[idx])
}

/// Check the table invariant: every record is well formed and each record ends
/// before the next one starts.
pub fn is_sorted_disjoint<R: Span>(records: &[R]) -> bool {
    records.iter().all(|r| r.start() <= r.end())
        && records.windows(2).all(|pair| pair[0].end() < pair[1].start())
}

/// A sorted, disjoint table of interval records.
#[derive(Clone, Copy, Debug)]
pub struct IntervalTable<'a, V> {
    records: &'a [IntervalRecord<V>],
}

impl<'a, V: Copy> IntervalTable<'a, V> {
    pub const fn new(records: &'a [IntervalRecord<V>]) -> Self {
        Self { records }
    }

    /// The record whose range contains `cp`, if any.
    pub fn find(&self, cp: u32) -> Option<&'a IntervalRecord<V>> {
        search(self.records, cp)
    }

    /// Resolve `cp` to its value, decoding parity records.
    pub fn lookup(&self, cp: u32) -> Option<V> {
        self.find(cp).map(|record| record.value.resolve(cp))
    }

    pub fn records(&self) -> &'a [IntervalRecord<V>] {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn is_sorted_disjoint(&self) -> bool {
        is_sorted_disjoint(self.records)
    }
}

/// Try each table in order; the first hit wins.
///
/// Used where a property has a primary table plus a table of defaults for
/// unassigned codepoints.
pub fn lookup_chain<V: Copy>(tables: &[IntervalTable<'_, V>], cp: u32) -> Option<V> {
    tables.iter().find_map(|table| table.lookup(cp))
}

#[cfg(test)]
mod tests {
    use super::*;

    const LETTERS: [IntervalRecord<&str>; 2] = [
        IntervalRecord::single(0x41, 0x5A, "Lu"),
        IntervalRecord::single(0x61, 0x7A, "Ll"),
    ];

    #[test]
    fn test_lookup_inside_ranges() {
        let table = IntervalTable::new(&LETTERS);
        assert_eq!(table.lookup(0x41), Some("Lu"));
        assert_eq!(table.lookup(0x42), Some("Lu"));
        assert_eq!(table.lookup(0x5A), Some("Lu"));
        assert_eq!(table.lookup(0x61), Some("Ll"));
        assert_eq!(table.lookup(0x7A), Some("Ll"));
    }

    #[test]
    fn test_lookup_gaps_and_edges() {
        let table = IntervalTable::new(&LETTERS);
        assert_eq!(table.lookup(0x5B), None);
        assert_eq!(table.lookup(0x60), None);
        assert_eq!(table.lookup(0x40), None);
        assert_eq!(table.lookup(0x7B), None);
        assert_eq!(table.lookup(0), None);
        assert_eq!(table.lookup(0x10FFFF), None);
    }

    #[test]
    fn test_empty_table() {
        let table: IntervalTable<'_, u8> = IntervalTable::new(&[]);
        assert!(table.is_empty());
        assert_eq!(table.lookup(0x41), None);
        assert!(table.is_sorted_disjoint());
    }

    #[test]
    fn test_single_codepoint_records() {
        let records = [
            IntervalRecord::single(1, 1, 'a'),
            IntervalRecord::single(2, 2, 'b'),
            IntervalRecord::single(3, 3, 'c'),
            IntervalRecord::single(10, 20, 'd'),
        ];
        let table = IntervalTable::new(&records);
        assert_eq!(table.lookup(1), Some('a'));
        assert_eq!(table.lookup(2), Some('b'));
        assert_eq!(table.lookup(3), Some('c'));
        assert_eq!(table.lookup(4), None);
        assert_eq!(table.lookup(15), Some('d'));
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn test_parity_records() {
        let records = [
            IntervalRecord::single(0x00, 0x0F, "Cc"),
            IntervalRecord::alternating(0x100, 0x12F, "Lu", "Ll"),
        ];
        let table = IntervalTable::new(&records);
        for cp in 0x100..=0x12F {
            let expected = if cp % 2 == 0 { "Lu" } else { "Ll" };
            assert_eq!(table.lookup(cp), Some(expected), "cp {:#X}", cp);
        }
        assert_eq!(table.lookup(0x05), Some("Cc"));
        assert_eq!(table.lookup(0x130), None);
    }

    #[test]
    fn test_find_returns_containing_record() {
        let table = IntervalTable::new(&LETTERS);
        let record = table.find(0x70).unwrap();
        assert_eq!((record.start, record.end), (0x61, 0x7A));
    }

    #[test]
    fn test_lookup_chain_falls_through() {
        let primary = [IntervalRecord::single(0x41, 0x5A, "L")];
        let defaults = [
            IntervalRecord::single(0x30, 0x5A, "X"),
            IntervalRecord::single(0x590, 0x5FF, "R"),
        ];
        let tables = [IntervalTable::new(&primary), IntervalTable::new(&defaults)];
        assert_eq!(lookup_chain(&tables, 0x41), Some("L"));
        assert_eq!(lookup_chain(&tables, 0x30), Some("X"));
        assert_eq!(lookup_chain(&tables, 0x5D0), Some("R"));
        assert_eq!(lookup_chain(&tables, 0x600), None);
    }

    #[test]
    fn test_sorted_disjoint_check() {
        assert!(is_sorted_disjoint(&LETTERS));

        let overlapping = [
            IntervalRecord::single(0, 10, ()),
            IntervalRecord::single(10, 20, ()),
        ];
        assert!(!is_sorted_disjoint(&overlapping));

        let unsorted = [
            IntervalRecord::single(20, 30, ()),
            IntervalRecord::single(0, 10, ()),
        ];
        assert!(!is_sorted_disjoint(&unsorted));

        let inverted = [IntervalRecord::single(5, 4, ())];
        assert!(!is_sorted_disjoint(&inverted));
    }
}
