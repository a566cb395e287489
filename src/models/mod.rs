//! Domain models for the pedigree layout engine
//!
//! These models stand in for the family collaborator: a family is a list of
//! persons with optional parent links.

pub mod family;
pub mod person;
pub mod types;

// Re-export commonly used types
pub use family::Family;
pub use person::Person;
pub use types::Sex;
