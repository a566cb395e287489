//! Family connections
//!
//! Builds the pedigree graph of a family (individuals, mating units and
//! sibship units), assigns generation ranks and derives the sandwich
//! instance whose realization is the pedigree layout.

use super::group::{
    GroupKey, Individual, IndividualGroup, IndividualId, MatingUnit, MatingUnitId,
    PedigreeVertex, SibshipUnit,
};
use crate::algorithm::graph::UndirectedGraph;
use crate::algorithm::sandwich::SandwichInstance;
use crate::error::{LayoutError, Result};
use crate::models::{Family, Person, Sex};
use log::debug;
use rustc_hash::{FxHashMap, FxHashSet};

/// Pedigree graph of one family
#[derive(Debug, Clone)]
pub struct FamilyConnections {
    family: Family,
    individuals: Vec<Individual>,
    by_person: FxHashMap<String, IndividualId>,
    mating_units: Vec<MatingUnit>,
    by_parents: FxHashMap<String, MatingUnitId>,
}

impl FamilyConnections {
    /// Synthesize placeholder parents so that every member has zero or two
    ///
    /// A member with only a father gets `"<dad>.mother"`, one with only a
    /// mother gets `"<mom>.father"`; the placeholder is shared by all
    /// children of that parent. Parent ids that are not members are
    /// synthesized as well.
    pub fn add_missing_members(family: &mut Family) {
        let ids: Vec<String> = family
            .full_members()
            .iter()
            .map(|person| person.person_id.clone())
            .collect();

        let mut new_members: Vec<Person> = Vec::new();
        let mut generated: FxHashSet<String> = FxHashSet::default();

        for id in ids {
            let Some(person) = family.get_member_mut(&id) else {
                continue;
            };
            if person.mom_id == person.dad_id {
                continue;
            }

            match (person.mom_id.clone(), person.dad_id.clone()) {
                (None, Some(dad_id)) => person.mom_id = Some(format!("{dad_id}.mother")),
                (Some(mom_id), None) => person.dad_id = Some(format!("{mom_id}.father")),
                _ => {}
            }

            let parents = [
                person.mom_id.clone().map(|id| (id, Sex::Female)),
                person.dad_id.clone().map(|id| (id, Sex::Male)),
            ];

            for (parent_id, sex) in parents.into_iter().flatten() {
                if !family.contains(&parent_id) && generated.insert(parent_id.clone()) {
                    new_members.push(Person::placeholder(parent_id, sex));
                }
            }
        }

        if !new_members.is_empty() {
            debug!(
                "family {}: synthesized {} missing members",
                family.family_id,
                new_members.len()
            );
        }
        family.add_members(new_members);
    }

    /// Build the pedigree graph of `family`
    ///
    /// # Arguments
    /// * `family` - Family to connect; a copy is kept in the result
    /// * `add_missing_members` - Whether to synthesize placeholder parents first
    ///
    /// # Returns
    /// The connected pedigree with one mating unit per distinct parent pair
    ///
    /// # Errors
    /// `MalformedFamily` when a parent id does not name a member, which can
    /// only happen with `add_missing_members` disabled
    pub fn from_family(family: &Family, add_missing_members: bool) -> Result<Self> {
        let mut family = family.clone();
        if add_missing_members {
            Self::add_missing_members(&mut family);
        }

        let mut individuals: Vec<Individual> = family
            .full_members()
            .iter()
            .enumerate()
            .map(|(idx, person)| Individual::new(IndividualId(idx), person))
            .collect();
        let by_person: FxHashMap<String, IndividualId> = individuals
            .iter()
            .map(|individual| (individual.person_id.clone(), individual.id))
            .collect();

        let mut mating_units: Vec<MatingUnit> = Vec::new();
        let mut by_parents: FxHashMap<String, MatingUnitId> = FxHashMap::default();

        for (idx, person) in family.full_members().iter().enumerate() {
            let (Some(mom_id), Some(dad_id)) = (&person.mom_id, &person.dad_id) else {
                continue;
            };
            if mom_id == dad_id {
                continue;
            }

            let lookup = |parent_id: &str, role: &str| {
                by_person.get(parent_id).copied().ok_or_else(|| {
                    LayoutError::malformed(
                        family.family_id.clone(),
                        format!("{role} {parent_id} of {} is not a member", person.person_id),
                    )
                })
            };
            let mother = lookup(mom_id, "mother")?;
            let father = lookup(dad_id, "father")?;

            let key = format!("{mom_id},{dad_id}");
            let unit_id = match by_parents.get(&key) {
                Some(&unit_id) => unit_id,
                None => {
                    let unit_id = MatingUnitId(mating_units.len());
                    mating_units.push(MatingUnit::new(unit_id, mother, father));
                    individuals[mother.0].mating_units.push(unit_id);
                    individuals[father.0].mating_units.push(unit_id);
                    by_parents.insert(key, unit_id);
                    unit_id
                }
            };

            individuals[idx].parents = Some(unit_id);
            mating_units[unit_id.0]
                .children
                .individuals
                .insert(IndividualId(idx));
        }

        Ok(Self {
            family,
            individuals,
            by_person,
            mating_units,
            by_parents,
        })
    }

    /// Assign generation ranks, oldest generation 0
    ///
    /// Does nothing once every individual is ranked.
    pub fn add_ranks(&mut self) {
        if self.mating_units.is_empty() {
            for individual in &mut self.individuals {
                individual.rank = Some(0);
            }
            return;
        }
        if self.individuals.iter().all(|individual| individual.rank.is_some()) {
            return;
        }

        loop {
            let seed = self
                .individuals
                .iter()
                .find(|individual| individual.rank.is_none() && individual.has_mates())
                .or_else(|| {
                    self.individuals
                        .iter()
                        .find(|individual| individual.rank.is_none())
                })
                .map(|individual| individual.id);

            let Some(seed) = seed else {
                break;
            };
            self.flood_ranks(seed);
        }

        let max_rank = self.max_rank();
        for individual in &mut self.individuals {
            individual.rank = individual.rank.map(|rank| max_rank - rank);
        }
    }

    /// Rank every unranked individual reachable from `seed`, `seed` at 0
    ///
    /// Children are one below their parents, mates share a rank. The first
    /// rank to reach an individual wins.
    fn flood_ranks(&mut self, seed: IndividualId) {
        let mut stack = vec![(seed, 0)];

        while let Some((id, rank)) = stack.pop() {
            let individual = &mut self.individuals[id.0];
            if individual.rank.is_some() {
                continue;
            }
            individual.rank = Some(rank);

            let mut next: Vec<(IndividualId, i32)> = Vec::new();
            for unit_id in &self.individuals[id.0].mating_units {
                let unit = &self.mating_units[unit_id.0];
                next.extend(unit.children.individuals.iter().map(|&child| (child, rank - 1)));
                next.push((unit.father, rank));
                next.push((unit.mother, rank));
            }
            if let Some(parents) = self.individuals[id.0].parents {
                let unit = &self.mating_units[parents.0];
                next.push((unit.father, rank + 1));
                next.push((unit.mother, rank + 1));
            }

            stack.extend(next.into_iter().rev());
        }
    }

    /// Largest assigned rank, at least 0
    #[must_use]
    pub fn max_rank(&self) -> i32 {
        self.individuals
            .iter()
            .filter_map(Individual::rank)
            .fold(0, i32::max)
    }

    /// Derive the sandwich instance of this pedigree
    ///
    /// Ranks are assigned first. Vertices are ordered by their group key.
    ///
    /// # Returns
    /// An instance over all individuals, mating units and sibship units,
    /// with the overlaps the drawing needs as required edges and the ones
    /// it must avoid as forbidden edges
    pub fn create_sandwich_instance(&mut self) -> Result<SandwichInstance<PedigreeVertex>> {
        self.add_ranks();

        let mut vertices: Vec<PedigreeVertex> = self
            .individuals
            .iter()
            .map(|individual| PedigreeVertex::Individual(individual.id))
            .chain(
                self.mating_units
                    .iter()
                    .map(|unit| PedigreeVertex::MatingUnit(unit.id)),
            )
            .chain(
                self.mating_units
                    .iter()
                    .map(|unit| PedigreeVertex::SibshipUnit(unit.id)),
            )
            .collect();
        vertices.sort_by_cached_key(|&vertex| self.group_key(vertex));

        let mut required: Vec<(PedigreeVertex, PedigreeVertex)> = Vec::new();
        let mut forbidden: Vec<(PedigreeVertex, PedigreeVertex)> = Vec::new();

        // individuals of the same rank stay apart, except around a person
        // with more than two mates
        for (idx, first) in self.individuals.iter().enumerate() {
            for second in &self.individuals[idx + 1..] {
                if first.rank != second.rank || self.shares_crowded_mating_unit(first, second) {
                    continue;
                }
                forbidden.push((
                    PedigreeVertex::Individual(first.id),
                    PedigreeVertex::Individual(second.id),
                ));
            }
        }

        for individual in &self.individuals {
            let ranks = individual.generation_ranks(&self.individuals);
            let vertex = PedigreeVertex::Individual(individual.id);

            for unit in &self.mating_units {
                if unit.is_parent(individual.id) {
                    required.push((vertex, PedigreeVertex::MatingUnit(unit.id)));
                } else if ranks == unit.generation_ranks(&self.individuals) {
                    forbidden.push((vertex, PedigreeVertex::MatingUnit(unit.id)));
                }

                if unit.children.individuals.contains(&individual.id) {
                    required.push((vertex, PedigreeVertex::SibshipUnit(unit.id)));
                } else if individual.parents.is_some()
                    && ranks == unit.children.generation_ranks(&self.individuals)
                {
                    forbidden.push((vertex, PedigreeVertex::SibshipUnit(unit.id)));
                }
            }
        }

        for unit in &self.mating_units {
            required.push((
                PedigreeVertex::MatingUnit(unit.id),
                PedigreeVertex::SibshipUnit(unit.id),
            ));
        }

        // mating units stay apart from unrelated groups of other generations
        for unit in &self.mating_units {
            let ranks = unit.generation_ranks(&self.individuals);
            let members = unit.individual_set();

            for other in &self.mating_units {
                let others: [(PedigreeVertex, &dyn IndividualGroup); 2] = [
                    (PedigreeVertex::SibshipUnit(other.id), &other.children),
                    (PedigreeVertex::MatingUnit(other.id), other),
                ];
                for (vertex, group) in others {
                    if vertex == PedigreeVertex::SibshipUnit(unit.id) {
                        continue;
                    }
                    if ranks.is_disjoint(&group.generation_ranks(&self.individuals))
                        && members.is_disjoint(&group.individual_set())
                    {
                        forbidden.push((PedigreeVertex::MatingUnit(unit.id), vertex));
                    }
                }
            }
        }

        debug!(
            "family {}: sandwich instance with {} vertices, {} required and {} forbidden pairs",
            self.family.family_id,
            vertices.len(),
            required.len(),
            forbidden.len()
        );

        SandwichInstance::from_sets(vertices, required, forbidden)
    }

    /// Whether one of the two has more than two mates and the other is one of them
    fn shares_crowded_mating_unit(&self, first: &Individual, second: &Individual) -> bool {
        let crowded_mate = |individual: &Individual, mate: IndividualId| {
            individual.mating_units.len() > 2
                && individual
                    .mating_units
                    .iter()
                    .any(|unit| self.mating_units[unit.0].other_parent(individual.id) == Some(mate))
        };
        crowded_mate(first, second.id) || crowded_mate(second, first.id)
    }

    /// Person graph: mates are linked and each parent is linked to each child
    #[must_use]
    pub fn graph(&self) -> UndirectedGraph {
        let mut graph = UndirectedGraph::with_vertices(self.individuals.len());
        for unit in &self.mating_units {
            graph.add_edge(unit.mother.0, unit.father.0);
            for child in &unit.children.individuals {
                graph.add_edge(unit.mother.0, child.0);
                graph.add_edge(unit.father.0, child.0);
            }
        }
        graph
    }

    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.graph().is_connected()
    }

    /// Connected components as person ids in member order
    #[must_use]
    pub fn connected_components(&self) -> Vec<Vec<String>> {
        self.graph()
            .connected_components()
            .into_iter()
            .map(|component| {
                component
                    .into_iter()
                    .map(|idx| self.individuals[idx].person_id.clone())
                    .collect()
            })
            .collect()
    }

    /// The family, including synthesized members
    #[must_use]
    pub const fn family(&self) -> &Family {
        &self.family
    }

    #[must_use]
    pub fn members(&self) -> &[Person] {
        self.family.full_members()
    }

    #[must_use]
    pub fn individual(&self, id: IndividualId) -> Option<&Individual> {
        self.individuals.get(id.0)
    }

    #[must_use]
    pub fn individual_by_person(&self, person_id: &str) -> Option<&Individual> {
        self.by_person
            .get(person_id)
            .and_then(|&id| self.individual(id))
    }

    #[must_use]
    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    #[must_use]
    pub fn individuals_with_rank(&self, rank: i32) -> Vec<&Individual> {
        self.individuals
            .iter()
            .filter(|individual| individual.rank == Some(rank))
            .collect()
    }

    #[must_use]
    pub fn mating_units(&self) -> &[MatingUnit] {
        &self.mating_units
    }

    /// Mating unit of the given mother and father
    #[must_use]
    pub fn mating_unit_of(&self, mom_id: &str, dad_id: &str) -> Option<&MatingUnit> {
        self.by_parents
            .get(&format!("{mom_id},{dad_id}"))
            .map(|&id| &self.mating_units[id.0])
    }

    pub fn sibship_units(&self) -> impl Iterator<Item = &SibshipUnit> {
        self.mating_units.iter().map(|unit| &unit.children)
    }

    /// The group behind a vertex of this pedigree
    #[must_use]
    pub fn group(&self, vertex: PedigreeVertex) -> &dyn IndividualGroup {
        match vertex {
            PedigreeVertex::Individual(id) => &self.individuals[id.0],
            PedigreeVertex::MatingUnit(id) => &self.mating_units[id.0],
            PedigreeVertex::SibshipUnit(id) => &self.mating_units[id.0].children,
        }
    }

    #[must_use]
    pub fn group_key(&self, vertex: PedigreeVertex) -> GroupKey {
        self.group(vertex).group_key(&self.individuals)
    }
}
