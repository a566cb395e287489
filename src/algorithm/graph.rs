//! Undirected graph over dense vertex indices
//!
//! Thin wrapper around a petgraph `UnGraphMap` keyed by `usize`. Vertices are
//! always `0..vertex_count`. Edges are reported sorted so that relaxation
//! tries edge combinations in a stable order, whatever the insertion and
//! removal history of the underlying map.

use itertools::Itertools;
use petgraph::algo;
use petgraph::graphmap::UnGraphMap;
use petgraph::unionfind::UnionFind;

/// Simple undirected graph without self loops or parallel edges
#[derive(Debug, Clone, Default)]
pub struct UndirectedGraph {
    graph: UnGraphMap<usize, ()>,
}

impl UndirectedGraph {
    /// Graph with `count` isolated vertices `0..count`
    #[must_use]
    pub fn with_vertices(count: usize) -> Self {
        let mut graph = UnGraphMap::with_capacity(count, 0);
        for vertex in 0..count {
            graph.add_node(vertex);
        }
        Self { graph }
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    fn ensure_vertex(&mut self, vertex: usize) {
        for missing in self.graph.node_count()..=vertex {
            self.graph.add_node(missing);
        }
    }

    /// Add the edge `u - v`; returns false for self loops and existing edges
    pub fn add_edge(&mut self, u: usize, v: usize) -> bool {
        if u == v || self.graph.contains_edge(u, v) {
            return false;
        }
        self.ensure_vertex(u.max(v));
        self.graph.add_edge(u, v, ());
        true
    }

    /// Remove the edge `u - v`; returns whether it existed
    pub fn remove_edge(&mut self, u: usize, v: usize) -> bool {
        self.graph.remove_edge(u, v).is_some()
    }

    #[must_use]
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.graph.contains_edge(u, v)
    }

    /// Neighbors of `vertex`, in no particular order
    pub fn neighbors(&self, vertex: usize) -> impl Iterator<Item = usize> + '_ {
        self.graph.neighbors(vertex)
    }

    /// Every edge once as `(low, high)`, sorted
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.graph
            .all_edges()
            .map(|(u, v, _)| (u.min(v), u.max(v)))
            .sorted_unstable()
    }

    /// Copy of this graph with the given edges removed
    #[must_use]
    pub fn without_edges(&self, edges: &[(usize, usize)]) -> Self {
        let mut graph = self.clone();
        for &(u, v) in edges {
            graph.remove_edge(u, v);
        }
        graph
    }

    /// Connected components, each sorted, ordered by their lowest vertex
    #[must_use]
    pub fn connected_components(&self) -> Vec<Vec<usize>> {
        let count = self.vertex_count();
        let mut sets = UnionFind::new(count);
        for (u, v, _) in self.graph.all_edges() {
            sets.union(u, v);
        }

        let mut components: Vec<Vec<usize>> = Vec::new();
        let mut slot_of_root: Vec<Option<usize>> = vec![None; count];
        for vertex in 0..count {
            let root = sets.find_mut(vertex);
            match slot_of_root[root] {
                Some(slot) => components[slot].push(vertex),
                None => {
                    slot_of_root[root] = Some(components.len());
                    components.push(vec![vertex]);
                }
            }
        }
        components
    }

    /// Whether every vertex is reachable from every other one
    #[must_use]
    pub fn is_connected(&self) -> bool {
        algo::connected_components(&self.graph) <= 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_remove_edges() {
        let mut graph = UndirectedGraph::with_vertices(3);
        assert!(graph.add_edge(0, 1));
        assert!(!graph.add_edge(1, 0));
        assert!(!graph.add_edge(2, 2));
        assert_eq!(graph.edge_count(), 1);
        assert!(graph.has_edge(1, 0));

        assert!(graph.remove_edge(1, 0));
        assert!(!graph.remove_edge(0, 1));
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.vertex_count(), 3);
    }

    #[test]
    fn test_edges_are_sorted_once() {
        let mut graph = UndirectedGraph::with_vertices(4);
        graph.add_edge(3, 1);
        graph.add_edge(2, 0);
        graph.add_edge(0, 1);

        let edges: Vec<_> = graph.edges().collect();
        assert_eq!(edges, vec![(0, 1), (0, 2), (1, 3)]);
    }

    #[test]
    fn test_edge_order_survives_removal() {
        let mut graph = UndirectedGraph::with_vertices(5);
        for (u, v) in [(3, 4), (0, 1), (1, 2), (2, 3)] {
            graph.add_edge(u, v);
        }
        graph.remove_edge(1, 0);
        graph.add_edge(0, 4);

        let edges: Vec<_> = graph.edges().collect();
        assert_eq!(edges, vec![(0, 4), (1, 2), (2, 3), (3, 4)]);
    }

    #[test]
    fn test_add_edge_grows_vertices() {
        let mut graph = UndirectedGraph::with_vertices(1);
        assert!(graph.add_edge(0, 3));
        assert_eq!(graph.vertex_count(), 4);
        assert_eq!(graph.connected_components().len(), 3);
    }

    #[test]
    fn test_connected_components() {
        let mut graph = UndirectedGraph::with_vertices(5);
        graph.add_edge(0, 3);
        graph.add_edge(4, 1);

        assert_eq!(
            graph.connected_components(),
            vec![vec![0, 3], vec![1, 4], vec![2]]
        );
        assert!(!graph.is_connected());

        graph.add_edge(3, 4);
        graph.add_edge(2, 0);
        assert!(graph.is_connected());
        assert_eq!(graph.connected_components(), vec![vec![0, 1, 2, 3, 4]]);
    }

    #[test]
    fn test_without_edges_leaves_original() {
        let mut graph = UndirectedGraph::with_vertices(3);
        graph.add_edge(0, 1);
        graph.add_edge(1, 2);

        let relaxed = graph.without_edges(&[(1, 0)]);
        assert_eq!(relaxed.edge_count(), 1);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(relaxed.vertex_count(), 3);
    }
}
