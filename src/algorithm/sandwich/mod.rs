//! Interval graph sandwich search
//!
//! Given a required graph and a forbidden graph over the same vertices, find
//! intervals such that every required edge overlaps and no forbidden edge
//! does. The search grows partial realizations one vertex at a time.

pub mod instance;
pub mod interval;
pub mod realization;
pub mod solver;

pub use instance::SandwichInstance;
pub use interval::{Interval, IntervalForVertex};
pub use realization::{Realization, RealizationPool};
pub use solver::{SandwichSolver, SearchOutcome, SearchReport, SearchStatistics, SolveReport};
