//! Pack sizes and shipment distributions.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A fixed quantity of items sold as one indivisible unit.
pub type PackSize = u64;

/// How many packs of each size to ship.
///
/// Entries are kept in ascending pack-size order. Every key present has a
/// count of at least one; zero-count entries are never materialized. The
/// serde representation is a plain map, so the JSON form is an object with
/// stringified sizes as keys:
///
/// ```
/// use packplan_core::Distribution;
///
/// let mut distribution = Distribution::new();
/// distribution.add_pack(500);
/// distribution.add_pack(250);
/// distribution.add_pack(250);
///
/// assert_eq!(distribution.total_items(), 1000);
/// assert_eq!(distribution.pack_count(), 3);
/// assert_eq!(distribution.count(250), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Distribution(BTreeMap<PackSize, u64>);

impl Distribution {
    /// Creates an empty distribution.
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Adds one pack of `size` to the distribution.
    pub fn add_pack(&mut self, size: PackSize) {
        *self.0.entry(size).or_insert(0) += 1;
    }

    /// Total items shipped: the sum of size x count over all entries.
    pub fn total_items(&self) -> u64 {
        self.0.iter().map(|(size, count)| size * count).sum()
    }

    /// Total number of packs across all sizes.
    pub fn pack_count(&self) -> u64 {
        self.0.values().sum()
    }

    /// Count of packs for one size; zero when the size is absent.
    pub fn count(&self, size: PackSize) -> u64 {
        self.0.get(&size).copied().unwrap_or(0)
    }

    /// Number of distinct pack sizes present.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no packs are present at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates `(size, count)` entries in ascending pack-size order.
    pub fn iter(&self) -> impl Iterator<Item = (PackSize, u64)> + '_ {
        self.0.iter().map(|(&size, &count)| (size, count))
    }
}

impl FromIterator<(PackSize, u64)> for Distribution {
    /// Collects `(size, count)` pairs, skipping zero counts to preserve the
    /// no-empty-entries invariant.
    fn from_iter<I: IntoIterator<Item = (PackSize, u64)>>(iter: I) -> Self {
        Self(iter.into_iter().filter(|&(_, count)| count > 0).collect())
    }
}
