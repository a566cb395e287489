//! Pedigree graph of a family and its sandwich instance

pub mod connections;
pub mod group;

pub use connections::FamilyConnections;
pub use group::{
    GroupKey, GroupKind, Individual, IndividualGroup, IndividualId, MatingUnit, MatingUnitId,
    PedigreeVertex, SibshipUnit,
};
