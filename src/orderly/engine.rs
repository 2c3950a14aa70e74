//! The orderly enumeration drivers: one graph at a time, or one level at a time.

use tracing::info;

use super::level::{Level, Transition};
use crate::config::AcceptancePolicy;
use crate::model::{pair_count, Graph};
use crate::Result;

enum State {
    Start(Level),
    Running(Transition),
    Done,
}

/// All canonical graphs on `n` vertices, in non-decreasing edge count.
///
/// The empty graph comes first; each following level is produced lazily
/// from the previous one. Iteration stops after the complete graph.
pub struct Orderly {
    state: State,
    policy: AcceptancePolicy,
    complete_edges: usize,
    emitted: u64,
    finished: bool,
}

impl Orderly {
    pub fn new(n: usize, policy: AcceptancePolicy) -> Result<Self> {
        let initial = Level::initial(n)?;
        info!("Starting orderly enumeration on {n} vertices ({policy:?})");
        Ok(Self {
            state: State::Start(initial),
            policy,
            complete_edges: pair_count(n),
            emitted: 0,
            finished: false,
        })
    }

    /// Graphs yielded so far.
    pub fn emitted(&self) -> u64 {
        self.emitted
    }

    fn advance(&mut self) -> Option<Graph> {
        loop {
            match std::mem::replace(&mut self.state, State::Done) {
                State::Start(level) => {
                    let empty = level.graphs().first().cloned();
                    if level.edges() < self.complete_edges {
                        self.state = State::Running(Transition::new(level, self.policy));
                    }
                    return empty;
                }
                State::Running(mut step) => {
                    if let Some(graph) = step.next() {
                        self.state = State::Running(step);
                        return Some(graph);
                    }
                    let level = step.into_level();
                    if !level.is_empty() && level.edges() < self.complete_edges {
                        self.state = State::Running(Transition::new(level, self.policy));
                    }
                }
                State::Done => return None,
            }
        }
    }
}

impl Iterator for Orderly {
    type Item = Graph;

    fn next(&mut self) -> Option<Graph> {
        let next = self.advance();
        match next {
            Some(_) => self.emitted += 1,
            None if !self.finished => {
                self.finished = true;
                info!("Orderly enumeration finished: {} graphs", self.emitted);
            }
            None => {}
        }
        next
    }
}

/// Whole levels instead of single graphs: level 0 first, then one level per
/// call until the level holding the complete graph.
pub struct Levels {
    frontier: Option<Level>,
    started: bool,
    policy: AcceptancePolicy,
    complete_edges: usize,
}

impl Levels {
    pub fn new(n: usize, policy: AcceptancePolicy) -> Result<Self> {
        let initial = Level::initial(n)?;
        info!("Starting level-wise orderly enumeration on {n} vertices ({policy:?})");
        Ok(Self {
            frontier: Some(initial),
            started: false,
            policy,
            complete_edges: pair_count(n),
        })
    }
}

impl Iterator for Levels {
    type Item = Level;

    fn next(&mut self) -> Option<Level> {
        if !self.started {
            self.started = true;
            return self.frontier.clone();
        }
        let current = self.frontier.take()?;
        if current.edges() >= self.complete_edges {
            return None;
        }
        let next = Transition::run(current, self.policy);
        self.frontier = Some(next.clone());
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_orderly_three_vertices() {
        let graphs: Vec<_> = Orderly::new(3, AcceptancePolicy::SeenSet).unwrap().collect();
        let edges: Vec<_> = graphs.iter().map(Graph::edge_count).collect();
        assert_eq!(edges, vec![0, 1, 2, 3]);
        assert_eq!(graphs[1].edges().collect::<Vec<_>>(), vec![(1, 2)]);
        assert_eq!(graphs[2].edges().collect::<Vec<_>>(), vec![(1, 2), (1, 3)]);
        assert!(graphs[3].is_complete());
    }

    #[test]
    fn test_orderly_single_vertex() {
        let graphs: Vec<_> = Orderly::new(1, AcceptancePolicy::SeenSet).unwrap().collect();
        assert_eq!(graphs, vec![Graph::empty(1).unwrap()]);
    }

    #[test]
    fn test_orderly_rejects_zero_vertices() {
        assert!(Orderly::new(0, AcceptancePolicy::SeenSet).is_err());
        assert!(Levels::new(0, AcceptancePolicy::SeenSet).is_err());
    }

    #[test]
    fn test_orderly_is_fused_after_completion() {
        let mut it = Orderly::new(2, AcceptancePolicy::Monotonic).unwrap();
        assert_eq!(it.by_ref().count(), 2);
        assert!(it.next().is_none());
        assert!(it.next().is_none());
    }

    #[test]
    fn test_emitted_counter() {
        let mut it = Orderly::new(4, AcceptancePolicy::SeenSet).unwrap();
        it.by_ref().take(5).for_each(drop);
        assert_eq!(it.emitted(), 5);
    }

    #[test]
    fn test_levels_group_the_same_graphs() {
        let flat: Vec<_> = Orderly::new(5, AcceptancePolicy::SeenSet).unwrap().collect();
        let levels: Vec<_> = Levels::new(5, AcceptancePolicy::SeenSet).unwrap().collect();
        assert_eq!(levels.len(), 11);
        for (m, level) in levels.iter().enumerate() {
            assert_eq!(level.edges(), m);
        }
        let grouped: Vec<Graph> = levels.into_iter().flat_map(Level::into_graphs).collect();
        assert_eq!(grouped, flat);
    }

    #[test]
    fn test_levels_single_vertex() {
        let levels: Vec<_> = Levels::new(1, AcceptancePolicy::SeenSet).unwrap().collect();
        assert_eq!(levels.len(), 1);
        assert_eq!(levels[0].len(), 1);
    }
}
