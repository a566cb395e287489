//! A Rust library for laying out pedigree charts.
//!
//! A family's parent, child and mating relationships are turned into an
//! interval graph sandwich instance whose realization places every
//! individual on a line, generation by generation, without overlaps between
//! relatives that must be drawn apart.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod models;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::{LayoutConfig, SolverConfig};
pub use error::{LayoutError, Result};
pub use models::{Family, Person, Sex};

// Pedigree graph
pub use algorithm::pedigree::{FamilyConnections, IndividualGroup, PedigreeVertex};

// Solver
pub use algorithm::sandwich::{
    Interval, IntervalForVertex, SandwichInstance, SandwichSolver, SearchOutcome, SolveReport,
};

// Layout
pub use algorithm::layout::{
    LayoutKind, PedigreeLayout, PositionedIndividual, layout_families, layout_family,
};
