//! Partial interval realizations of a sandwich instance
//!
//! A `Realization` places vertices on the line one at a time. Every new
//! vertex gets a unit interval right of everything placed so far, and every
//! vertex that still has unplaced required neighbors (an *active* vertex) is
//! stretched to cover it. Overlaps therefore appear exactly between a new
//! vertex and the vertices active when it was placed, so the realization
//! satisfies all required edges by construction and `can_extend` only has to
//! guard forbidden edges and the width bound.

use super::interval::Interval;
use crate::algorithm::graph::UndirectedGraph;
use rustc_hash::FxHashMap;
use std::collections::BTreeSet;

/// Distance between the right edge of the maximal set and a new interval
const EXTENSION_GAP: f64 = 1.0;

/// Sorted domain of a realization, used to skip already visited states
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DomainSignature(Box<[usize]>);

/// A partial interval assignment over vertex indices
#[derive(Debug, Clone)]
pub struct Realization<'g> {
    graph: &'g UndirectedGraph,
    forbidden_graph: &'g UndirectedGraph,
    domain: Vec<usize>,
    intervals: Vec<Interval>,
    /// vertex -> position in `domain`
    positions: Vec<Option<usize>>,
    max_width: usize,
    active: Option<BTreeSet<usize>>,
    maximal: Option<BTreeSet<usize>>,
    dangling: Option<BTreeSet<usize>>,
    degrees: FxHashMap<usize, usize>,
}

impl<'g> Realization<'g> {
    /// Empty realization over the vertices of `graph`
    #[must_use]
    pub fn new(
        graph: &'g UndirectedGraph,
        forbidden_graph: &'g UndirectedGraph,
        max_width: usize,
    ) -> Self {
        Self {
            graph,
            forbidden_graph,
            domain: Vec::new(),
            intervals: Vec::new(),
            positions: vec![None; graph.vertex_count()],
            max_width,
            active: None,
            maximal: None,
            dangling: None,
            degrees: FxHashMap::default(),
        }
    }

    /// Realization holding only `vertex` on the unit interval
    #[must_use]
    pub fn singleton(
        graph: &'g UndirectedGraph,
        forbidden_graph: &'g UndirectedGraph,
        vertex: usize,
        max_width: usize,
    ) -> Self {
        let mut realization = Self::new(graph, forbidden_graph, max_width);
        realization.place(vertex, Interval::default());
        realization
    }

    /// Placed vertices in placement order
    #[must_use]
    pub fn domain(&self) -> &[usize] {
        &self.domain
    }

    /// Intervals, positionally matching `domain`
    #[must_use]
    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.domain.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.domain.is_empty()
    }

    #[must_use]
    pub const fn max_width(&self) -> usize {
        self.max_width
    }

    #[must_use]
    pub fn contains(&self, vertex: usize) -> bool {
        self.positions.get(vertex).is_some_and(Option::is_some)
    }

    #[must_use]
    pub fn interval_of(&self, vertex: usize) -> Option<&Interval> {
        let position = (*self.positions.get(vertex)?)?;
        self.intervals.get(position)
    }

    /// Placed vertices paired with their intervals
    pub fn iter(&self) -> impl Iterator<Item = (usize, Interval)> + '_ {
        self.domain.iter().copied().zip(self.intervals.iter().copied())
    }

    /// Sorted domain, equal for realizations over the same vertex set
    #[must_use]
    pub fn signature(&self) -> DomainSignature {
        let mut sorted = self.domain.clone();
        sorted.sort_unstable();
        DomainSignature(sorted.into_boxed_slice())
    }

    fn place(&mut self, vertex: usize, interval: Interval) {
        if vertex >= self.positions.len() {
            self.positions.resize(vertex + 1, None);
        }
        self.positions[vertex] = Some(self.domain.len());
        self.domain.push(vertex);
        self.intervals.push(interval);
    }

    fn invalidate(&mut self) {
        self.active = None;
        self.maximal = None;
        self.dangling = None;
        self.degrees.clear();
    }

    /// Required neighbors of `vertex` that are not placed yet
    #[must_use]
    pub fn dangling(&self, vertex: usize) -> BTreeSet<usize> {
        self.graph
            .neighbors(vertex)
            .filter(|&neighbor| !self.contains(neighbor))
            .collect()
    }

    /// Whether a placed vertex still has unplaced required neighbors
    #[must_use]
    pub fn is_active_vertex(&self, vertex: usize) -> bool {
        self.graph
            .neighbors(vertex)
            .any(|neighbor| !self.contains(neighbor))
    }

    pub fn active_vertices(&mut self) -> &BTreeSet<usize> {
        if self.active.is_none() {
            let active = self
                .domain
                .iter()
                .copied()
                .filter(|&vertex| self.is_active_vertex(vertex))
                .collect();
            self.active = Some(active);
        }
        self.active.get_or_insert_with(BTreeSet::new)
    }

    /// Union of the dangling sets of all active vertices
    pub fn dangling_set(&mut self) -> &BTreeSet<usize> {
        if self.dangling.is_none() {
            let active = self.active_vertices().clone();
            let dangling = active
                .into_iter()
                .flat_map(|vertex| self.dangling(vertex))
                .collect();
            self.dangling = Some(dangling);
        }
        self.dangling.get_or_insert_with(BTreeSet::new)
    }

    /// Whether the interval at `first` ends before the one at `second` starts
    #[must_use]
    pub fn is_in_interval_order(&self, first: usize, second: usize) -> bool {
        self.intervals[first].precedes(&self.intervals[second])
    }

    /// Whether no other placed interval starts after the one at `position` ends
    #[must_use]
    pub fn is_maximal(&self, position: usize) -> bool {
        (0..self.domain.len())
            .all(|other| other == position || !self.is_in_interval_order(position, other))
    }

    pub fn maximal_set(&mut self) -> &BTreeSet<usize> {
        if self.maximal.is_none() {
            let maximal = (0..self.domain.len())
                .filter(|&position| self.is_maximal(position))
                .map(|position| self.domain[position])
                .collect();
            self.maximal = Some(maximal);
        }
        self.maximal.get_or_insert_with(BTreeSet::new)
    }

    /// Number of other placed intervals overlapping the one of `vertex`
    pub fn degree(&mut self, vertex: usize) -> usize {
        if let Some(&degree) = self.degrees.get(&vertex) {
            return degree;
        }
        let Some(&interval) = self.interval_of(vertex) else {
            return 0;
        };
        let degree = self
            .iter()
            .filter(|&(other, other_interval)| other != vertex && interval.overlaps(&other_interval))
            .count();
        self.degrees.insert(vertex, degree);
        degree
    }

    /// Place `vertex` if that keeps the realization valid
    pub fn extend(&mut self, vertex: usize) -> bool {
        if !self.can_extend(vertex) {
            return false;
        }
        self.force_extend(vertex);
        true
    }

    /// Place `vertex` right of the maximal set, stretching every active vertex
    pub fn force_extend(&mut self, vertex: usize) {
        let maximal = self.maximal_set().clone();
        let max_right = maximal
            .into_iter()
            .filter_map(|placed| self.interval_of(placed).map(|interval| interval.right))
            .reduce(f64::max);

        let left = max_right.map_or(0.0, |right| right + EXTENSION_GAP);
        let right = left + 1.0;

        let active = self.active_vertices().clone();
        for open in active {
            if let Some(position) = self.positions[open] {
                self.intervals[position].right = right;
            }
        }

        self.place(vertex, Interval::new(left, right));
        self.invalidate();
    }

    /// Whether `vertex` can be placed next without breaking the realization
    ///
    /// Every check runs against a speculative copy extended with
    /// `force_extend`; only this realization's caches are touched.
    pub fn can_extend(&mut self, vertex: usize) -> bool {
        let mut scratch = Self::new(self.graph, self.forbidden_graph, self.max_width);
        self.can_extend_using(vertex, &mut scratch)
    }

    /// `can_extend` building its speculative copy in `scratch`
    ///
    /// # Arguments
    /// * `vertex` - Candidate vertex to place next
    /// * `scratch` - Realization overwritten with the speculative copy; its
    ///   previous contents are discarded and its buffers reused
    ///
    /// # Returns
    /// `true` if placing `vertex` keeps every required and forbidden
    /// constraint satisfiable within `max_width`
    pub fn can_extend_using(&mut self, vertex: usize, scratch: &mut Self) -> bool {
        if vertex >= self.graph.vertex_count() || self.contains(vertex) {
            return false;
        }

        let active = self.active_vertices().clone();

        if self.has_forbidden_edge(vertex, &active) {
            return false;
        }

        if active.len() + 1 == self.max_width && !self.dangling_set().contains(&vertex) {
            return false;
        }

        scratch.clone_from_realization(self);
        scratch.force_extend(vertex);
        let speculative = scratch;
        let new_active = speculative.active_vertices().clone();

        for &still_active in active.intersection(&new_active) {
            if speculative.degree(still_active) != self.degree(still_active) + 1 {
                return false;
            }
        }

        if new_active.len() >= self.max_width {
            return false;
        }

        if !self.old_dangling_same(vertex, &active, speculative) {
            return false;
        }

        if !self.new_dangling_valid(vertex, &active, speculative) {
            return false;
        }

        if !Self::new_active_valid(vertex, &active, &new_active, speculative) {
            return false;
        }

        debug_assert!(active.is_subset(self.maximal_set()));

        true
    }

    fn has_forbidden_edge(&self, vertex: usize, active: &BTreeSet<usize>) -> bool {
        self.forbidden_graph
            .neighbors(vertex)
            .any(|neighbor| active.contains(&neighbor))
    }

    fn old_dangling_same(
        &self,
        vertex: usize,
        active: &BTreeSet<usize>,
        speculative: &Self,
    ) -> bool {
        active.iter().all(|&old| {
            let mut expected = self.dangling(old);
            expected.remove(&vertex);
            speculative.dangling(old) == expected
        })
    }

    fn new_dangling_valid(
        &self,
        vertex: usize,
        active: &BTreeSet<usize>,
        speculative: &Self,
    ) -> bool {
        let expected: BTreeSet<usize> = self
            .graph
            .neighbors(vertex)
            .filter(|neighbor| !active.contains(neighbor))
            .collect();
        speculative.dangling(vertex) == expected
    }

    fn new_active_valid(
        vertex: usize,
        active: &BTreeSet<usize>,
        new_active: &BTreeSet<usize>,
        speculative: &Self,
    ) -> bool {
        let expected: BTreeSet<usize> = active
            .iter()
            .copied()
            .chain(std::iter::once(vertex))
            .filter(|&candidate| !speculative.dangling(candidate).is_empty())
            .collect();
        *new_active == expected
    }

    /// Overwrite this realization with a copy of `source`, reusing buffers
    pub fn clone_from_realization(&mut self, source: &Self) {
        self.graph = source.graph;
        self.forbidden_graph = source.forbidden_graph;
        self.domain.clone_from(&source.domain);
        self.intervals.clone_from(&source.intervals);
        self.positions.clone_from(&source.positions);
        self.max_width = source.max_width;
        self.active.clone_from(&source.active);
        self.maximal.clone_from(&source.maximal);
        self.dangling.clone_from(&source.dangling);
        self.degrees.clone_from(&source.degrees);
    }
}

/// Recycles realizations dropped by the search so that clones reuse buffers
#[derive(Debug, Default)]
pub struct RealizationPool<'g> {
    spare: Vec<Realization<'g>>,
}

impl<'g> RealizationPool<'g> {
    #[must_use]
    pub fn new() -> Self {
        Self { spare: Vec::new() }
    }

    /// Copy of `source`, built in a recycled realization when one is available
    pub fn copy_of(&mut self, source: &Realization<'g>) -> Realization<'g> {
        match self.spare.pop() {
            Some(mut realization) => {
                realization.clone_from_realization(source);
                realization
            }
            None => source.clone(),
        }
    }

    /// Return a realization that is no longer needed
    pub fn recycle(&mut self, realization: Realization<'g>) {
        self.spare.push(realization);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.spare.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spare.is_empty()
    }
}
