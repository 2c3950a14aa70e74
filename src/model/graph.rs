//! Simple undirected graph on a fixed vertex set `1..=n`.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::{check_order, pair_count, Code, Vertex, MAX_VERTICES};
use crate::{Error, Result};

/// Neighbour bitsets, one word per vertex. Bit `j` of word `i` is set iff
/// vertices `i + 1` and `j + 1` are adjacent.
type AdjRows = SmallVec<[u32; MAX_VERTICES]>;

#[inline(always)]
const fn bit(i: usize) -> u32 {
    1u32 << i
}

/// An immutable simple undirected graph.
///
/// Invariants: no self-loops, symmetric adjacency, no multi-edges. Every
/// operation that "changes" a graph returns a new value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "EdgeList", try_from = "EdgeList")]
pub struct Graph {
    adj: AdjRows,
}

/// Serialized shape of a [`Graph`]: vertex count plus edge list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeList {
    pub vertices: usize,
    pub edges: Vec<(Vertex, Vertex)>,
}

impl From<Graph> for EdgeList {
    fn from(g: Graph) -> Self {
        Self { vertices: g.order(), edges: g.edges().collect() }
    }
}

impl TryFrom<EdgeList> for Graph {
    type Error = Error;

    fn try_from(list: EdgeList) -> Result<Self> {
        Graph::from_edges(list.vertices, &list.edges)
    }
}

impl Graph {
    /// The graph on `n` vertices with no edges.
    pub fn empty(n: usize) -> Result<Self> {
        let n = check_order(n)?;
        Ok(Self { adj: SmallVec::from_elem(0, n) })
    }

    /// The complete graph on `n` vertices.
    pub fn complete(n: usize) -> Result<Self> {
        Ok(Self::empty(n)?.complement())
    }

    /// Build a graph from an edge list. Duplicate edges collapse.
    pub fn from_edges(n: usize, edges: &[(Vertex, Vertex)]) -> Result<Self> {
        let mut g = Self::empty(n)?;
        for &(u, v) in edges {
            let (i, j) = g.pair(u, v)?;
            g.set(i, j);
        }
        Ok(g)
    }

    /// Number of vertices.
    #[inline]
    pub fn order(&self) -> usize {
        self.adj.len()
    }

    /// Vertex identifiers in natural order.
    pub fn vertices(&self) -> std::ops::RangeInclusive<Vertex> {
        1..=self.order()
    }

    /// True iff `u` and `v` are adjacent.
    pub fn is_adjacent(&self, u: Vertex, v: Vertex) -> Result<bool> {
        let i = self.index(u)?;
        let j = self.index(v)?;
        Ok(self.has_edge_at(i, j))
    }

    /// Neighbours of `v` in ascending order.
    pub fn neighbors(&self, v: Vertex) -> Result<Vec<Vertex>> {
        let i = self.index(v)?;
        let row = self.adj[i];
        Ok((0..self.order()).filter(|&j| row & bit(j) != 0).map(|j| j + 1).collect())
    }

    pub fn degree(&self, v: Vertex) -> Result<usize> {
        let i = self.index(v)?;
        Ok(self.adj[i].count_ones() as usize)
    }

    /// Number of unordered adjacent pairs.
    pub fn edge_count(&self) -> usize {
        let sum: u32 = self.adj.iter().map(|row| row.count_ones()).sum();
        (sum / 2) as usize
    }

    /// True iff every pair of distinct vertices is adjacent.
    pub fn is_complete(&self) -> bool {
        self.edge_count() == pair_count(self.order())
    }

    /// Edges `(u, v)` with `u < v`, in code order (u ascending, then v ascending).
    pub fn edges(&self) -> impl Iterator<Item = (Vertex, Vertex)> + '_ {
        let n = self.order();
        (0..n)
            .flat_map(move |i| ((i + 1)..n).map(move |j| (i, j)))
            .filter(|&(i, j)| self.has_edge_at(i, j))
            .map(|(i, j)| (i + 1, j + 1))
    }

    /// The complement: every pair of distinct vertices is adjacent iff it is
    /// not adjacent here.
    pub fn complement(&self) -> Self {
        let n = self.order();
        let all = bit(n) - 1;
        let adj = self
            .adj
            .iter()
            .enumerate()
            .map(|(i, row)| !row & all & !bit(i))
            .collect();
        Self { adj }
    }

    /// A copy of this graph with edge `(u, v)` added.
    pub fn with_edge(&self, u: Vertex, v: Vertex) -> Result<Self> {
        let (i, j) = self.pair(u, v)?;
        Ok(self.with_edge_at(i, j))
    }

    /// A copy of this graph with the labels of `v1` and `v2` swapped.
    pub fn relabeled(&self, v1: Vertex, v2: Vertex) -> Result<Self> {
        let a = self.index(v1)?;
        let b = self.index(v2)?;
        let n = self.order();
        let mut ordering: SmallVec<[usize; MAX_VERTICES]> = (0..n).collect();
        ordering.swap(a, b);

        let mut out = Self { adj: SmallVec::from_elem(0, n) };
        for i in 0..n {
            for j in (i + 1)..n {
                if self.has_edge_at(ordering[i], ordering[j]) {
                    out.set(i, j);
                }
            }
        }
        Ok(out)
    }

    /// Code under the natural vertex order.
    pub fn natural_code(&self) -> Code {
        let n = self.order();
        let mut code: Code = 0;
        for i in 0..n {
            for j in (i + 1)..n {
                code = (code << 1) | Code::from(self.has_edge_at(i, j));
            }
        }
        code
    }

    /// Code under `ordering`, where `ordering[k]` is the vertex placed at
    /// position `k`. The ordering must be a permutation of the vertex set.
    pub fn encode(&self, ordering: &[Vertex]) -> Result<Code> {
        let n = self.order();
        if ordering.len() != n {
            return Err(Error::InvalidOrdering(format!(
                "expected {n} vertices, got {}",
                ordering.len()
            )));
        }
        let mut seen = 0u32;
        let mut positions: SmallVec<[usize; MAX_VERTICES]> = SmallVec::with_capacity(n);
        for &v in ordering {
            let i = self.index(v)?;
            if seen & bit(i) != 0 {
                return Err(Error::InvalidOrdering(format!("vertex {v} appears twice")));
            }
            seen |= bit(i);
            positions.push(i);
        }
        Ok(self.code_at(&positions))
    }

    /// Pair bits in code order.
    pub fn upper_triangle(&self) -> Vec<bool> {
        let n = self.order();
        (0..n)
            .flat_map(|i| ((i + 1)..n).map(move |j| (i, j)))
            .map(|(i, j)| self.has_edge_at(i, j))
            .collect()
    }

    // ------------------------------------------------------------------------
    // Zero-based fast paths for the enumeration engines
    // ------------------------------------------------------------------------

    #[inline(always)]
    pub(crate) fn has_edge_at(&self, i: usize, j: usize) -> bool {
        self.adj[i] & bit(j) != 0
    }

    /// Code under a zero-based ordering. No validation.
    #[inline]
    pub(crate) fn code_at(&self, ordering: &[usize]) -> Code {
        let n = ordering.len();
        let mut code: Code = 0;
        for i in 0..n {
            let row = self.adj[ordering[i]];
            for j in (i + 1)..n {
                code = (code << 1) | Code::from(row & bit(ordering[j]) != 0);
            }
        }
        code
    }

    pub(crate) fn with_edge_at(&self, i: usize, j: usize) -> Self {
        let mut out = self.clone();
        out.set(i, j);
        out
    }

    fn set(&mut self, i: usize, j: usize) {
        self.adj[i] |= bit(j);
        self.adj[j] |= bit(i);
    }

    fn index(&self, v: Vertex) -> Result<usize> {
        if v == 0 || v > self.order() {
            return Err(Error::UnknownVertex { vertex: v, order: self.order() });
        }
        Ok(v - 1)
    }

    fn pair(&self, u: Vertex, v: Vertex) -> Result<(usize, usize)> {
        let i = self.index(u)?;
        let j = self.index(v)?;
        if i == j {
            return Err(Error::SelfLoop(u));
        }
        Ok((i, j))
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "G(n={}, m={}) [", self.order(), self.edge_count())?;
        for (k, (u, v)) in self.edges().enumerate() {
            if k > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{u}-{v}")?;
        }
        write!(f, "]")
    }
}
