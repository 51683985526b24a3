//! Packplan Solver - exact pack-combination search
//!
//! Given an order quantity and a catalog of allowed pack sizes, [`solve`]
//! finds the multiset of packs that covers the order with the smallest
//! possible excess, using the fewest packs among equally small excesses.
//! The search is a forward dynamic program over achievable cumulative sums
//! and returns the exact optimum, never an approximation.

pub mod solver;


pub use packplan_core::{Distribution, PackPlanError, PackSize};
pub use solver::solve;
