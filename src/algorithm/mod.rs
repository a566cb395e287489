//! Algorithms of the pedigree layout engine
//!
//! The pedigree module turns a family into a sandwich instance, the
//! sandwich module solves it and the layout module turns the solution into
//! generation rows.

pub mod graph;
pub mod layout;
pub mod pedigree;
pub mod sandwich;
