//! Half-open intervals on the layout line

use serde::Serialize;
use std::fmt;

/// A half-open interval `[left, right)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Interval {
    pub left: f64,
    pub right: f64,
}

impl Default for Interval {
    fn default() -> Self {
        Self::new(0.0, 1.0)
    }
}

impl Interval {
    #[must_use]
    pub const fn new(left: f64, right: f64) -> Self {
        Self { left, right }
    }

    /// Whether the two intervals share at least one point
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.left < other.right && other.left < self.right
    }

    /// The common part of both intervals, if any
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        if !self.overlaps(other) {
            return None;
        }
        Some(Self::new(
            self.left.max(other.left),
            self.right.min(other.right),
        ))
    }

    /// Interval order: `self` ends strictly before `other` starts
    #[must_use]
    pub fn precedes(&self, other: &Self) -> bool {
        self.right < other.left
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}:{})", self.left, self.right)
    }
}

/// An interval assigned to one vertex of a sandwich instance
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntervalForVertex<V> {
    pub vertex: V,
    pub interval: Interval,
}

impl<V> IntervalForVertex<V> {
    #[must_use]
    pub const fn new(vertex: V, interval: Interval) -> Self {
        Self { vertex, interval }
    }

    #[must_use]
    pub const fn left(&self) -> f64 {
        self.interval.left
    }

    #[must_use]
    pub const fn right(&self) -> f64 {
        self.interval.right
    }

    /// Whether the intervals of the two vertices overlap
    #[must_use]
    pub fn overlaps<W>(&self, other: &IntervalForVertex<W>) -> bool {
        self.interval.overlaps(&other.interval)
    }
}

impl<V: fmt::Display> fmt::Display for IntervalForVertex<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "i[{}> {}:{}]", self.vertex, self.left(), self.right())
    }
}
