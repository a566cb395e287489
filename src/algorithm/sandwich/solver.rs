//! Search for interval realizations of sandwich instances
//!
//! `try_solve` runs a depth-first worklist search over partial realizations.
//! `solve` wraps it in a relaxation loop that drops forbidden edges, smallest
//! combinations first, until some layout is found.

use super::instance::SandwichInstance;
use super::interval::IntervalForVertex;
use super::realization::{DomainSignature, Realization, RealizationPool};
use crate::algorithm::graph::UndirectedGraph;
use crate::config::SolverConfig;
use itertools::Itertools;
use log::{debug, info, warn};
use rustc_hash::FxHashSet;
use std::collections::VecDeque;
use std::fmt::Debug;
use std::hash::Hash;

/// How a single search attempt ended
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome<V> {
    /// Every vertex was placed
    Solved(Vec<IntervalForVertex<V>>),
    /// The worklist ran empty: no realization exists under these constraints
    Exhausted,
    /// The iteration cap was reached before a decision
    BudgetExceeded,
}

impl<V> SearchOutcome<V> {
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        matches!(self, Self::Solved(_))
    }

    #[must_use]
    pub fn into_intervals(self) -> Option<Vec<IntervalForVertex<V>>> {
        match self {
            Self::Solved(intervals) => Some(intervals),
            Self::Exhausted | Self::BudgetExceeded => None,
        }
    }
}

/// Counters of one search attempt
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStatistics {
    /// Realizations popped from the worklist
    pub iterations: usize,
    /// Distinct partial domains queued
    pub visited: usize,
}

/// Outcome and counters of one search attempt
#[derive(Debug, Clone, PartialEq)]
pub struct SearchReport<V> {
    pub outcome: SearchOutcome<V>,
    pub statistics: SearchStatistics,
}

/// Result of the relaxation loop
#[derive(Debug, Clone, PartialEq)]
pub struct SolveReport<V> {
    /// The realization found, if any
    pub intervals: Option<Vec<IntervalForVertex<V>>>,
    /// Forbidden edges dropped to reach `intervals`
    pub removed_edges: Vec<(V, V)>,
    /// Number of search attempts run
    pub attempts: usize,
    /// Attempts that hit the iteration cap
    pub budget_exhaustions: usize,
    /// Iterations summed over all attempts
    pub iterations: usize,
}

impl<V> SolveReport<V> {
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.intervals.is_some()
    }
}

/// Interval graph sandwich solver
#[derive(Debug, Clone, Default)]
pub struct SandwichSolver {
    config: SolverConfig,
}

impl SandwichSolver {
    #[must_use]
    pub const fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Find a realization, dropping forbidden edges if needed
    ///
    /// # Arguments
    /// * `instance` - Vertices with their required and forbidden overlaps
    ///
    /// # Returns
    /// One interval per vertex, or `None` if no relaxation allowed by the
    /// configuration admits a realization
    pub fn solve<V>(&self, instance: &SandwichInstance<V>) -> Option<Vec<IntervalForVertex<V>>>
    where
        V: Clone + Eq + Hash + Debug,
    {
        self.solve_with_report(instance).intervals
    }

    /// Find a realization under the instance's exact constraints
    pub fn try_solve<V>(&self, instance: &SandwichInstance<V>) -> Option<Vec<IntervalForVertex<V>>>
    where
        V: Clone + Eq + Hash + Debug,
    {
        self.search(instance).outcome.into_intervals()
    }

    /// Run one search attempt under the instance's exact constraints
    pub fn search<V>(&self, instance: &SandwichInstance<V>) -> SearchReport<V>
    where
        V: Clone + Eq + Hash + Debug,
    {
        self.search_with(instance, instance.forbidden_graph())
    }

    /// Relaxation loop returning the full report
    ///
    /// Removes 0, 1, 2, ... forbidden edges, trying every combination of a
    /// size in edge order before the next size. An attempt that hits the
    /// iteration cap counts as failed and the loop moves on.
    ///
    /// # Arguments
    /// * `instance` - Vertices with their required and forbidden overlaps
    ///
    /// # Returns
    /// A `SolveReport` with the realization, the edges removed to reach it
    /// and counters over all attempts
    pub fn solve_with_report<V>(&self, instance: &SandwichInstance<V>) -> SolveReport<V>
    where
        V: Clone + Eq + Hash + Debug,
    {
        let forbidden_edges: Vec<(usize, usize)> = instance.forbidden_graph().edges().collect();

        let mut report = SolveReport {
            intervals: None,
            removed_edges: Vec::new(),
            attempts: 0,
            budget_exhaustions: 0,
            iterations: 0,
        };

        if forbidden_edges.is_empty() || !self.config.relax_forbidden {
            let attempt = self.search(instance);
            Self::record(&mut report, &attempt);
            report.intervals = attempt.outcome.into_intervals();
            if report.intervals.is_none() {
                warn!("no sandwich solution for {} vertices", instance.len());
            }
            return report;
        }

        info!(
            "sandwich forbidden graph edges: {}",
            forbidden_edges.len()
        );

        let max_removed = self
            .config
            .max_relaxation
            .map_or(forbidden_edges.len(), |limit| limit.min(forbidden_edges.len()));

        for count in 0..=max_removed {
            for removed in forbidden_edges.iter().copied().combinations(count) {
                debug!(
                    "trying to remove edges: {:?}",
                    instance.edge_vertices(&removed)
                );

                let relaxed = instance.forbidden_graph().without_edges(&removed);
                let attempt = self.search_with(instance, &relaxed);
                Self::record(&mut report, &attempt);

                if let SearchOutcome::Solved(intervals) = attempt.outcome {
                    if count > 0 {
                        info!("sandwich solved after removing {count} forbidden edges");
                    }
                    report.removed_edges = instance.edge_vertices(&removed);
                    report.intervals = Some(intervals);
                    return report;
                }
            }
        }

        warn!(
            "no sandwich solution after {} attempts ({} hit the iteration cap)",
            report.attempts, report.budget_exhaustions
        );
        report
    }

    fn record<V>(report: &mut SolveReport<V>, attempt: &SearchReport<V>) {
        report.attempts += 1;
        report.iterations += attempt.statistics.iterations;
        if matches!(attempt.outcome, SearchOutcome::BudgetExceeded) {
            report.budget_exhaustions += 1;
        }
    }

    fn search_with<V>(
        &self,
        instance: &SandwichInstance<V>,
        forbidden_graph: &UndirectedGraph,
    ) -> SearchReport<V>
    where
        V: Clone + Eq + Hash + Debug,
    {
        let required_graph = instance.required_graph();
        let vertex_count = instance.len();
        let max_width = self.config.max_width;
        let mut statistics = SearchStatistics::default();

        let finish = |realization: &Realization<'_>| -> Vec<IntervalForVertex<V>> {
            realization
                .iter()
                .map(|(vertex, interval)| {
                    IntervalForVertex::new(instance.vertices()[vertex].clone(), interval)
                })
                .collect()
        };

        if vertex_count == 0 {
            return SearchReport {
                outcome: SearchOutcome::Solved(Vec::new()),
                statistics,
            };
        }

        let mut queue: VecDeque<Realization<'_>> = (0..vertex_count)
            .map(|vertex| Realization::singleton(required_graph, forbidden_graph, vertex, max_width))
            .collect();

        if vertex_count == 1 {
            let outcome = queue
                .pop_back()
                .map_or(SearchOutcome::Exhausted, |realization| {
                    SearchOutcome::Solved(finish(&realization))
                });
            return SearchReport { outcome, statistics };
        }

        let mut visited: FxHashSet<DomainSignature> = FxHashSet::default();
        let mut pool = RealizationPool::new();
        let mut scratch = Realization::new(required_graph, forbidden_graph, max_width);

        while let Some(mut realization) = queue.pop_back() {
            statistics.iterations += 1;

            if statistics.iterations > self.config.max_iterations {
                warn!(
                    "bailing at {} iterations...",
                    self.config.max_iterations
                );
                statistics.iterations -= 1;
                return SearchReport {
                    outcome: SearchOutcome::BudgetExceeded,
                    statistics,
                };
            }

            for vertex in 0..vertex_count {
                if realization.contains(vertex)
                    || !realization.can_extend_using(vertex, &mut scratch)
                {
                    continue;
                }

                let mut extended = pool.copy_of(&realization);
                extended.force_extend(vertex);

                if extended.len() == vertex_count {
                    debug!(
                        "sandwich iterations count: {}",
                        statistics.iterations
                    );
                    return SearchReport {
                        outcome: SearchOutcome::Solved(finish(&extended)),
                        statistics,
                    };
                }

                if visited.insert(extended.signature()) {
                    statistics.visited += 1;
                    queue.push_back(extended);
                } else {
                    pool.recycle(extended);
                }
            }

            pool.recycle(realization);
        }

        SearchReport {
            outcome: SearchOutcome::Exhausted,
            statistics,
        }
    }
}
