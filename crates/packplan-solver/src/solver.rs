//! Dynamic-programming search over achievable cumulative sums.

use std::rc::Rc;

use packplan_core::{Distribution, PackPlanError, PackSize, Result};
use tracing::debug;

/// One link in a candidate's pack chain.
///
/// Chains are structurally shared between candidates via `Rc`, so extending
/// a candidate by one pack is O(1) instead of copying a whole distribution
/// at every table cell.
struct PackLink {
    size: PackSize,
    prev: Option<Rc<PackLink>>,
}

impl Drop for PackLink {
    fn drop(&mut self) {
        // Unlink iteratively; dropping a long uniquely-owned chain would
        // otherwise recurse once per link and overflow the stack.
        let mut prev = self.prev.take();
        while let Some(link) = prev {
            match Rc::try_unwrap(link) {
                Ok(mut inner) => prev = inner.prev.take(),
                Err(_) => break,
            }
        }
    }
}

/// Best-known way to reach one cumulative sum during the sweep.
///
/// Immutable once produced; a strictly better candidate replaces a worse
/// one at the same sum rather than mutating it in place.
#[derive(Clone)]
struct Candidate {
    /// Total packs used to reach this sum.
    pack_count: u64,
    /// Cumulative sum minus the target; negative while the sum is short.
    overshoot: i64,
    packs: Option<Rc<PackLink>>,
}

impl Candidate {
    /// Two-key lexicographic order: smaller overshoot wins, then fewer packs.
    fn better_than(&self, other: &Candidate) -> bool {
        if self.overshoot != other.overshoot {
            return self.overshoot < other.overshoot;
        }
        self.pack_count < other.pack_count
    }

    /// Extends this candidate by one pack of `size`, sharing the chain.
    fn extend(&self, size: PackSize, overshoot: i64) -> Candidate {
        Candidate {
            pack_count: self.pack_count + 1,
            overshoot,
            packs: Some(Rc::new(PackLink {
                size,
                prev: self.packs.clone(),
            })),
        }
    }

    /// Materializes the pack chain into a distribution.
    fn to_distribution(&self) -> Distribution {
        let mut distribution = Distribution::new();
        let mut link = self.packs.as_deref();
        while let Some(current) = link {
            distribution.add_pack(current.size);
            link = current.prev.as_deref();
        }
        distribution
    }
}

/// Finds the optimal multiset of packs fulfilling an order of `target` items:
///
/// 1. only whole packs are shipped, so the total may exceed the order;
/// 2. the excess over the order (overshoot) is minimized first;
/// 3. among equal overshoots, the total number of packs is minimized.
///
/// The catalog is sorted ascending and deduplicated before the search, so
/// equal catalogs produce identical results regardless of presentation
/// order. When several distributions tie on both overshoot and pack count,
/// the one found first during the ascending-sum, ascending-size sweep is
/// kept; that choice is an iteration-order artifact, not a stable policy.
///
/// Pack sizes must be strictly positive; that is the catalog loader's
/// contract and is not re-validated here.
///
/// # Errors
///
/// - [`PackPlanError::EmptyCatalog`] when the catalog has no sizes
/// - [`PackPlanError::InvalidTarget`] when `target` is zero
/// - [`PackPlanError::NoSolution`] when the final scan finds nothing, which
///   indicates a violated precondition rather than a normal failure
///
/// # Example
///
/// ```
/// use packplan_solver::solve;
///
/// let distribution = solve(12001, &[250, 500, 1000, 2000, 5000]).unwrap();
/// assert_eq!(distribution.total_items(), 12250);
/// assert_eq!(distribution.pack_count(), 4);
/// ```
pub fn solve(target: u64, catalog: &[PackSize]) -> Result<Distribution> {
    if catalog.is_empty() {
        return Err(PackPlanError::EmptyCatalog);
    }
    if target == 0 {
        return Err(PackPlanError::InvalidTarget);
    }

    let mut sizes = catalog.to_vec();
    sizes.sort_unstable();
    sizes.dedup();
    let Some(&largest) = sizes.last() else {
        return Err(PackPlanError::EmptyCatalog);
    };

    // No optimal solution needs a cumulative sum beyond target + largest
    // pack: one more of the largest pack from any sum >= target can only
    // worsen overshoot.
    let max_sum = (target + largest) as usize;
    let target_signed = target as i64;

    debug!(order = target, catalog_len = sizes.len(), max_sum, "pack search start");

    let mut table: Vec<Option<Candidate>> = vec![None; max_sum + 1];
    table[0] = Some(Candidate {
        pack_count: 0,
        overshoot: -target_signed,
        packs: None,
    });

    // Forward sweep: pack sizes are positive, so every extension lands on a
    // strictly larger sum and no finalized slot is ever revisited.
    for sum in 0..=max_sum {
        let Some(current) = table[sum].clone() else {
            continue;
        };
        for &size in &sizes {
            let new_sum = sum + size as usize;
            if new_sum > max_sum {
                // Sizes are ascending; the rest only overflow further.
                break;
            }
            let candidate = current.extend(size, new_sum as i64 - target_signed);
            match &table[new_sum] {
                Some(occupant) if !candidate.better_than(occupant) => {}
                _ => table[new_sum] = Some(candidate),
            }
        }
    }

    // Every sum in [target, max_sum] covers the order; pick the single best
    // candidate under the same comparator.
    let mut best: Option<&Candidate> = None;
    for slot in &table[target as usize..] {
        let Some(candidate) = slot.as_ref() else {
            continue;
        };
        match best {
            Some(current_best) if !candidate.better_than(current_best) => {}
            _ => best = Some(candidate),
        }
    }

    let Some(winner) = best else {
        return Err(PackPlanError::NoSolution { target });
    };
    let distribution = winner.to_distribution();
    debug!(
        order = target,
        total_items = distribution.total_items(),
        pack_count = distribution.pack_count(),
        "pack search complete"
    );
    Ok(distribution)
}
