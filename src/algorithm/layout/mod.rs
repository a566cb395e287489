//! Family layout on top of the sandwich solver

pub mod batch;
pub mod family;
pub mod types;

pub use batch::layout_families;
pub use family::layout_family;
pub use types::{LayoutKind, PedigreeLayout, PositionedIndividual};
