//! Layout result types
//!
//! A `PedigreeLayout` is what the rendering side consumes: the individuals
//! of one connected component grouped by generation, each with the interval
//! the solver assigned to it.

use crate::algorithm::pedigree::{FamilyConnections, PedigreeVertex};
use crate::algorithm::sandwich::IntervalForVertex;
use crate::error::Result;
use crate::models::Family;
use itertools::Itertools;
use serde::Serialize;
use std::collections::BTreeMap;

/// How a layout was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutKind {
    /// From a sandwich realization
    Solved,
    /// Single row of members, used when no realization is available
    Fallback,
}

/// One individual with its position on the layout line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionedIndividual {
    pub person_id: String,
    /// Generation, 0 for the oldest
    pub rank: i32,
    pub left: f64,
    pub right: f64,
    /// Whether the individual is a synthesized placeholder
    pub generated: bool,
}

/// Layout of one connected component of a family
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PedigreeLayout {
    pub family_id: String,
    pub kind: LayoutKind,
    /// Generations by ascending rank, each ordered left to right
    pub generations: Vec<Vec<PositionedIndividual>>,
    /// Forbidden overlaps that had to be given up, as group keys
    pub relaxed_edges: Vec<(String, String)>,
}

impl PedigreeLayout {
    /// Build a layout from a realization of the pedigree's sandwich instance
    ///
    /// Only individual vertices are kept; mating and sibship units only
    /// shape the intervals.
    #[must_use]
    pub fn from_intervals(
        connections: &FamilyConnections,
        intervals: &[IntervalForVertex<PedigreeVertex>],
    ) -> Self {
        let mut by_rank: BTreeMap<i32, Vec<PositionedIndividual>> = BTreeMap::new();

        for interval in intervals {
            let Some(individual) = interval
                .vertex
                .as_individual()
                .and_then(|id| connections.individual(id))
            else {
                continue;
            };
            let rank = individual.rank().unwrap_or_default();
            by_rank.entry(rank).or_default().push(PositionedIndividual {
                person_id: individual.person_id.clone(),
                rank,
                left: interval.left(),
                right: interval.right(),
                generated: individual.generated,
            });
        }

        let generations: Vec<Vec<PositionedIndividual>> = by_rank
            .into_values()
            .map(|generation| {
                generation
                    .into_iter()
                    .sorted_by(|a, b| {
                        a.left
                            .total_cmp(&b.left)
                            .then_with(|| a.right.total_cmp(&b.right))
                    })
                    .collect_vec()
            })
            .collect();

        Self {
            family_id: connections.family().family_id.clone(),
            kind: LayoutKind::Solved,
            generations,
            relaxed_edges: Vec::new(),
        }
    }

    /// All members on one row, in member order
    #[must_use]
    pub fn fallback(family: &Family) -> Self {
        let row = family
            .full_members()
            .iter()
            .enumerate()
            .map(|(idx, person)| PositionedIndividual {
                person_id: person.person_id.clone(),
                rank: 0,
                left: idx as f64,
                right: (idx + 1) as f64,
                generated: person.generated,
            })
            .collect_vec();

        Self {
            family_id: family.family_id.clone(),
            kind: LayoutKind::Fallback,
            generations: if row.is_empty() { Vec::new() } else { vec![row] },
            relaxed_edges: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_relaxed_edges(mut self, edges: Vec<(String, String)>) -> Self {
        self.relaxed_edges = edges;
        self
    }

    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        matches!(self.kind, LayoutKind::Fallback)
    }

    pub fn individuals(&self) -> impl Iterator<Item = &PositionedIndividual> {
        self.generations.iter().flatten()
    }

    #[must_use]
    pub fn individual_count(&self) -> usize {
        self.generations.iter().map(Vec::len).sum()
    }

    #[must_use]
    pub fn position_of(&self, person_id: &str) -> Option<&PositionedIndividual> {
        self.individuals()
            .find(|individual| individual.person_id == person_id)
    }

    /// Leftmost and rightmost bound of the layout
    #[must_use]
    pub fn extent(&self) -> Option<(f64, f64)> {
        self.individuals().fold(None, |extent, individual| match extent {
            None => Some((individual.left, individual.right)),
            Some((left, right)) => Some((left.min(individual.left), right.max(individual.right))),
        })
    }

    /// Shift every position by `offset`
    pub fn translate(&mut self, offset: f64) {
        for individual in self.generations.iter_mut().flatten() {
            individual.left += offset;
            individual.right += offset;
        }
    }

    /// Serialize the layout for a rendering collaborator
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
