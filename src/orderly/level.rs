//! Levels (frontiers) and the level-to-level transition.

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::augment::Pairs;
use crate::canon::is_canonical;
use crate::config::AcceptancePolicy;
use crate::model::{Code, Graph};
use crate::{Error, Result};

/// Canonical graphs sharing one edge count, in acceptance order.
///
/// Every graph in a level has the same order and exactly `edges` edges;
/// deserialization rejects anything else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawLevel")]
pub struct Level {
    edges: usize,
    graphs: Vec<Graph>,
}

#[derive(Deserialize)]
struct RawLevel {
    edges: usize,
    graphs: Vec<Graph>,
}

impl TryFrom<RawLevel> for Level {
    type Error = Error;

    fn try_from(raw: RawLevel) -> Result<Self> {
        let order = raw.graphs.first().map(Graph::order);
        for g in &raw.graphs {
            if Some(g.order()) != order {
                return Err(Error::MalformedEncoding(format!(
                    "level mixes graphs on {} and {} vertices",
                    order.unwrap_or_default(),
                    g.order()
                )));
            }
            if g.edge_count() != raw.edges {
                return Err(Error::MalformedEncoding(format!(
                    "level on {} edges holds a graph with {}",
                    raw.edges,
                    g.edge_count()
                )));
            }
        }
        Ok(Self { edges: raw.edges, graphs: raw.graphs })
    }
}

impl Level {
    /// Level 0: the empty graph on `n` vertices.
    pub fn initial(n: usize) -> Result<Self> {
        Ok(Self { edges: 0, graphs: vec![Graph::empty(n)?] })
    }

    /// Edge count shared by every graph in the level.
    pub fn edges(&self) -> usize {
        self.edges
    }

    pub fn graphs(&self) -> &[Graph] {
        &self.graphs
    }

    pub fn len(&self) -> usize {
        self.graphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graphs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Graph> {
        self.graphs.iter()
    }

    pub fn into_graphs(self) -> Vec<Graph> {
        self.graphs
    }
}

impl IntoIterator for Level {
    type Item = Graph;
    type IntoIter = std::vec::IntoIter<Graph>;

    fn into_iter(self) -> Self::IntoIter {
        self.graphs.into_iter()
    }
}

impl<'a> IntoIterator for &'a Level {
    type Item = &'a Graph;
    type IntoIter = std::slice::Iter<'a, Graph>;

    fn into_iter(self) -> Self::IntoIter {
        self.graphs.iter()
    }
}

/// Counters for one transition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionStats {
    /// Augmented graphs examined.
    pub candidates: u64,
    pub accepted: u64,
    /// Rejected before the canonicity test: code already seen, or out of order.
    pub rejected_duplicate: u64,
    pub rejected_non_canonical: u64,
}

/// Per-level isomorph rejection state.
#[derive(Debug)]
enum Gate {
    SeenSet(HashSet<Code>),
    Monotonic(Option<Code>),
}

impl Gate {
    fn new(policy: AcceptancePolicy) -> Self {
        match policy {
            AcceptancePolicy::SeenSet => Gate::SeenSet(HashSet::new()),
            AcceptancePolicy::Monotonic => Gate::Monotonic(None),
        }
    }

    fn admit(&mut self, candidate: &Graph, stats: &mut TransitionStats) -> bool {
        let code = candidate.natural_code();
        let fresh = match self {
            Gate::SeenSet(seen) => !seen.contains(&code),
            Gate::Monotonic(last) => last.is_none_or(|last| code < last),
        };
        if !fresh {
            stats.rejected_duplicate += 1;
            return false;
        }
        if !is_canonical(candidate) {
            stats.rejected_non_canonical += 1;
            return false;
        }
        match self {
            Gate::SeenSet(seen) => {
                seen.insert(code);
            }
            Gate::Monotonic(last) => *last = Some(code),
        }
        stats.accepted += 1;
        trace!("accepted code {code:#x} on {} edges", candidate.edge_count());
        true
    }
}

/// One lazy step from level `m` to level `m + 1`.
///
/// Walks the frontier in order, augments each parent in pair order, and
/// yields every candidate that passes the gate and is canonical. Dropping a
/// transition part way simply stops the work.
#[derive(Debug)]
pub struct Transition {
    n: usize,
    parents: Vec<Graph>,
    parent: usize,
    pairs: Pairs,
    gate: Gate,
    edges: usize,
    accepted: Vec<Graph>,
    stats: TransitionStats,
}

impl Transition {
    pub fn new(frontier: Level, policy: AcceptancePolicy) -> Self {
        let n = frontier.graphs.first().map_or(0, Graph::order);
        Self {
            n,
            parents: frontier.graphs,
            parent: 0,
            pairs: Pairs::new(n),
            gate: Gate::new(policy),
            edges: frontier.edges + 1,
            accepted: Vec::new(),
            stats: TransitionStats::default(),
        }
    }

    /// Run the whole transition eagerly.
    pub fn run(frontier: Level, policy: AcceptancePolicy) -> Level {
        let mut step = Self::new(frontier, policy);
        step.by_ref().for_each(drop);
        step.into_level()
    }

    /// Edge count of the level being built.
    pub fn edges(&self) -> usize {
        self.edges
    }

    pub fn stats(&self) -> TransitionStats {
        self.stats
    }

    /// The graphs accepted so far, as a level.
    pub fn into_level(self) -> Level {
        debug!(
            "Generated {} graphs on {} edges ({} candidates, {} duplicate, {} non-canonical)",
            self.accepted.len(),
            self.edges,
            self.stats.candidates,
            self.stats.rejected_duplicate,
            self.stats.rejected_non_canonical,
        );
        Level { edges: self.edges, graphs: self.accepted }
    }
}

impl Iterator for Transition {
    type Item = Graph;

    fn next(&mut self) -> Option<Graph> {
        while let Some(parent) = self.parents.get(self.parent) {
            for (i, j) in self.pairs.by_ref() {
                if parent.has_edge_at(i, j) {
                    continue;
                }
                let candidate = parent.with_edge_at(i, j);
                self.stats.candidates += 1;
                if self.gate.admit(&candidate, &mut self.stats) {
                    self.accepted.push(candidate.clone());
                    return Some(candidate);
                }
            }
            self.parent += 1;
            self.pairs = Pairs::new(self.n);
        }
        None
    }
}
