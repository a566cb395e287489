//! Interval graph sandwich instances
//!
//! An instance is a vertex list with two graphs over it: edges of the
//! required graph must become interval overlaps, edges of the forbidden graph
//! must not. Vertex order is preserved and drives the search order.

use crate::algorithm::graph::UndirectedGraph;
use crate::error::{LayoutError, Result};
use rustc_hash::FxHashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Vertices plus required and forbidden overlap graphs
#[derive(Debug, Clone)]
pub struct SandwichInstance<V> {
    vertices: Vec<V>,
    index: FxHashMap<V, usize>,
    required_graph: UndirectedGraph,
    forbidden_graph: UndirectedGraph,
}

impl<V> SandwichInstance<V>
where
    V: Clone + Eq + Hash + Debug,
{
    /// Build an instance from vertices and edge lists
    ///
    /// Duplicate vertices keep their first position. Edges may be listed in
    /// either direction and more than once.
    pub fn from_sets(
        vertices: impl IntoIterator<Item = V>,
        required: impl IntoIterator<Item = (V, V)>,
        forbidden: impl IntoIterator<Item = (V, V)>,
    ) -> Result<Self> {
        let mut ordered = Vec::new();
        let mut index = FxHashMap::default();
        for vertex in vertices {
            if !index.contains_key(&vertex) {
                index.insert(vertex.clone(), ordered.len());
                ordered.push(vertex);
            }
        }

        let required_graph = Self::build_graph(&index, ordered.len(), required)?;
        let forbidden_graph = Self::build_graph(&index, ordered.len(), forbidden)?;

        Ok(Self {
            vertices: ordered,
            index,
            required_graph,
            forbidden_graph,
        })
    }

    fn build_graph(
        index: &FxHashMap<V, usize>,
        vertex_count: usize,
        edges: impl IntoIterator<Item = (V, V)>,
    ) -> Result<UndirectedGraph> {
        let mut graph = UndirectedGraph::with_vertices(vertex_count);
        for (u, v) in edges {
            let lookup = |vertex: &V| {
                index
                    .get(vertex)
                    .copied()
                    .ok_or_else(|| LayoutError::UnknownVertex(format!("{vertex:?}")))
            };
            graph.add_edge(lookup(&u)?, lookup(&v)?);
        }
        Ok(graph)
    }

    /// Vertices in search order
    #[must_use]
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    #[must_use]
    pub fn index_of(&self, vertex: &V) -> Option<usize> {
        self.index.get(vertex).copied()
    }

    #[must_use]
    pub const fn required_graph(&self) -> &UndirectedGraph {
        &self.required_graph
    }

    #[must_use]
    pub const fn forbidden_graph(&self) -> &UndirectedGraph {
        &self.forbidden_graph
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Map index pairs back to vertex pairs
    #[must_use]
    pub fn edge_vertices(&self, edges: &[(usize, usize)]) -> Vec<(V, V)> {
        edges
            .iter()
            .map(|&(u, v)| (self.vertices[u].clone(), self.vertices[v].clone()))
            .collect()
    }

    /// Forbidden edges as vertex pairs, in sorted index order
    #[must_use]
    pub fn forbidden_edges(&self) -> Vec<(V, V)> {
        let edges: Vec<_> = self.forbidden_graph.edges().collect();
        self.edge_vertices(&edges)
    }

    /// Required edges as vertex pairs, in sorted index order
    #[must_use]
    pub fn required_edges(&self) -> Vec<(V, V)> {
        let edges: Vec<_> = self.required_graph.edges().collect();
        self.edge_vertices(&edges)
    }
}
