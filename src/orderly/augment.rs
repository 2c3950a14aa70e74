//! Single-edge augmentation.

use crate::model::Graph;

/// Unordered vertex pairs `(i, j)`, `i < j`, zero-based, in lexicographic
/// order. This order is what makes a level transition reproducible.
#[derive(Debug, Clone)]
pub(crate) struct Pairs {
    n: usize,
    i: usize,
    j: usize,
}

impl Pairs {
    pub(crate) fn new(n: usize) -> Self {
        Self { n, i: 0, j: 1 }
    }
}

impl Iterator for Pairs {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<(usize, usize)> {
        if self.j >= self.n {
            self.i += 1;
            self.j = self.i + 1;
            if self.j >= self.n {
                return None;
            }
        }
        let pair = (self.i, self.j);
        self.j += 1;
        Some(pair)
    }
}

/// Every graph obtained from `graph` by adding one missing edge.
///
/// Lazy, finite and restartable: calling [`augment`] again on the same graph
/// yields the same sequence. The source graph is never modified.
#[derive(Debug, Clone)]
pub struct Augmenter<'a> {
    graph: &'a Graph,
    pairs: Pairs,
}

impl Iterator for Augmenter<'_> {
    type Item = Graph;

    fn next(&mut self) -> Option<Graph> {
        let graph = self.graph;
        self.pairs
            .by_ref()
            .find(|&(i, j)| !graph.has_edge_at(i, j))
            .map(|(i, j)| graph.with_edge_at(i, j))
    }
}

/// Augment `graph` by one edge in every possible way.
pub fn augment(graph: &Graph) -> Augmenter<'_> {
    Augmenter { graph, pairs: Pairs::new(graph.order()) }
}
