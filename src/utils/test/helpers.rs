//! Test helper functions

use crate::algorithm::sandwich::{IntervalForVertex, SandwichInstance};
use std::fmt::Debug;
use std::hash::Hash;

/// Initialise `env_logger` for tests; safe to call from every test
pub fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Forbidden edges whose vertices ended up with overlapping intervals
#[must_use]
pub fn forbidden_overlaps<V>(
    instance: &SandwichInstance<V>,
    intervals: &[IntervalForVertex<V>],
) -> Vec<(V, V)>
where
    V: Clone + Eq + Hash + Debug,
{
    let find = |vertex: &V| intervals.iter().find(|interval| &interval.vertex == vertex);
    instance
        .forbidden_edges()
        .into_iter()
        .filter(|(u, v)| match (find(u), find(v)) {
            (Some(first), Some(second)) => first.overlaps(second),
            _ => false,
        })
        .collect()
}

/// Required edges whose vertices ended up with disjoint intervals
#[must_use]
pub fn missing_required_overlaps<V>(
    instance: &SandwichInstance<V>,
    intervals: &[IntervalForVertex<V>],
) -> Vec<(V, V)>
where
    V: Clone + Eq + Hash + Debug,
{
    let find = |vertex: &V| intervals.iter().find(|interval| &interval.vertex == vertex);
    instance
        .required_edges()
        .into_iter()
        .filter(|(u, v)| match (find(u), find(v)) {
            (Some(first), Some(second)) => !first.overlaps(second),
            _ => true,
        })
        .collect()
}
