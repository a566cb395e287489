//! Pedigree graph primitives
//!
//! Individuals, mating units and sibship units live in arenas owned by
//! `FamilyConnections` and refer to each other by index. All three are
//! groups of individuals and share the `IndividualGroup` capability.

use crate::models::{Person, Sex};
use smallvec::SmallVec;
use std::collections::BTreeSet;
use std::fmt;

/// Index of an individual in its `FamilyConnections`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IndividualId(pub usize);

/// Index of a mating unit in its `FamilyConnections`
///
/// A sibship unit is owned by exactly one mating unit and shares its index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MatingUnitId(pub usize);

/// Kind of a pedigree vertex, in canonical order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GroupKind {
    Individual,
    MatingUnit,
    SibshipUnit,
}

/// Canonical identity of a group: its kind and sorted member ids
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupKey {
    pub kind: GroupKind,
    pub members: Vec<String>,
}

impl GroupKey {
    #[must_use]
    pub fn new(kind: GroupKind, members: impl IntoIterator<Item = String>) -> Self {
        let mut members: Vec<String> = members.into_iter().collect();
        members.sort();
        Self { kind, members }
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self.members.join(",");
        match self.kind {
            GroupKind::Individual => write!(f, "{joined}"),
            GroupKind::MatingUnit => write!(f, "m{{{joined}}}"),
            GroupKind::SibshipUnit => write!(f, "s{{{joined}}}"),
        }
    }
}

/// A vertex of the pedigree sandwich instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PedigreeVertex {
    Individual(IndividualId),
    MatingUnit(MatingUnitId),
    /// The sibship of the given mating unit
    SibshipUnit(MatingUnitId),
}

impl PedigreeVertex {
    #[must_use]
    pub const fn kind(&self) -> GroupKind {
        match self {
            Self::Individual(_) => GroupKind::Individual,
            Self::MatingUnit(_) => GroupKind::MatingUnit,
            Self::SibshipUnit(_) => GroupKind::SibshipUnit,
        }
    }

    #[must_use]
    pub const fn as_individual(&self) -> Option<IndividualId> {
        match self {
            Self::Individual(id) => Some(*id),
            Self::MatingUnit(_) | Self::SibshipUnit(_) => None,
        }
    }
}

/// A group of individuals that can be placed as one interval
pub trait IndividualGroup {
    fn kind(&self) -> GroupKind;

    /// Individuals the group consists of
    fn individual_set(&self) -> BTreeSet<IndividualId>;

    /// Children of the group, looked up through the mating unit arena
    fn children_set(&self, mating_units: &[MatingUnit]) -> BTreeSet<IndividualId>;

    /// Ranks of the group's individuals; unranked individuals are skipped
    fn generation_ranks(&self, individuals: &[Individual]) -> BTreeSet<i32> {
        self.individual_set()
            .into_iter()
            .filter_map(|id| individuals.get(id.0).and_then(Individual::rank))
            .collect()
    }

    fn group_key(&self, individuals: &[Individual]) -> GroupKey {
        GroupKey::new(
            self.kind(),
            self.individual_set()
                .into_iter()
                .filter_map(|id| individuals.get(id.0))
                .map(|individual| individual.person_id.clone()),
        )
    }
}

/// One family member in the pedigree graph
#[derive(Debug, Clone)]
pub struct Individual {
    pub id: IndividualId,
    pub person_id: String,
    pub sex: Sex,
    pub generated: bool,
    /// Mating units this individual is a parent in
    pub mating_units: SmallVec<[MatingUnitId; 2]>,
    /// Mating unit of this individual's parents
    pub parents: Option<MatingUnitId>,
    pub(crate) rank: Option<i32>,
}

impl Individual {
    #[must_use]
    pub fn new(id: IndividualId, person: &Person) -> Self {
        Self {
            id,
            person_id: person.person_id.clone(),
            sex: person.sex,
            generated: person.generated,
            mating_units: SmallVec::new(),
            parents: None,
            rank: None,
        }
    }

    /// Generation rank, once assigned
    #[must_use]
    pub const fn rank(&self) -> Option<i32> {
        self.rank
    }

    #[must_use]
    pub fn has_mates(&self) -> bool {
        !self.mating_units.is_empty()
    }

    /// Whether both individuals are children of the same mating unit
    #[must_use]
    pub fn are_siblings(&self, other: &Self) -> bool {
        self.parents.is_some() && self.parents == other.parents
    }

    /// Whether the two individuals are parents in exactly one common mating unit
    #[must_use]
    pub fn are_mates(&self, other: &Self) -> bool {
        self.mating_units
            .iter()
            .filter(|unit| other.mating_units.contains(unit))
            .count()
            == 1
    }
}

impl IndividualGroup for Individual {
    fn kind(&self) -> GroupKind {
        GroupKind::Individual
    }

    fn individual_set(&self) -> BTreeSet<IndividualId> {
        BTreeSet::from([self.id])
    }

    fn children_set(&self, mating_units: &[MatingUnit]) -> BTreeSet<IndividualId> {
        self.mating_units
            .iter()
            .filter_map(|unit| mating_units.get(unit.0))
            .flat_map(|unit| unit.children.individuals.iter().copied())
            .collect()
    }
}

/// The children of one mating unit
#[derive(Debug, Clone, Default)]
pub struct SibshipUnit {
    pub individuals: BTreeSet<IndividualId>,
}

impl SibshipUnit {
    #[must_use]
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }
}

impl IndividualGroup for SibshipUnit {
    fn kind(&self) -> GroupKind {
        GroupKind::SibshipUnit
    }

    fn individual_set(&self) -> BTreeSet<IndividualId> {
        self.individuals.clone()
    }

    fn children_set(&self, _mating_units: &[MatingUnit]) -> BTreeSet<IndividualId> {
        BTreeSet::new()
    }
}

/// A mother and father together with their children
#[derive(Debug, Clone)]
pub struct MatingUnit {
    pub id: MatingUnitId,
    pub mother: IndividualId,
    pub father: IndividualId,
    pub children: SibshipUnit,
}

impl MatingUnit {
    #[must_use]
    pub fn new(id: MatingUnitId, mother: IndividualId, father: IndividualId) -> Self {
        Self {
            id,
            mother,
            father,
            children: SibshipUnit::default(),
        }
    }

    /// The parent that is not `this_parent`, or None if it is not a parent here
    #[must_use]
    pub fn other_parent(&self, this_parent: IndividualId) -> Option<IndividualId> {
        if this_parent == self.mother {
            Some(self.father)
        } else if this_parent == self.father {
            Some(self.mother)
        } else {
            None
        }
    }

    #[must_use]
    pub fn is_parent(&self, individual: IndividualId) -> bool {
        self.mother == individual || self.father == individual
    }
}

impl IndividualGroup for MatingUnit {
    fn kind(&self) -> GroupKind {
        GroupKind::MatingUnit
    }

    fn individual_set(&self) -> BTreeSet<IndividualId> {
        BTreeSet::from([self.mother, self.father])
    }

    fn children_set(&self, _mating_units: &[MatingUnit]) -> BTreeSet<IndividualId> {
        self.children.individuals.clone()
    }
}
