//! Complement-paired enumeration.
//!
//! Complementing maps the graphs on `m` edges one-to-one onto the graphs on
//! `C(n,2) - m` edges, so only the lower half of the levels is generated.
//! Each graph is followed immediately by its complement. When the number of
//! levels is odd the middle level is self-paired: it gets one more plain
//! transition and no complements.

use tracing::info;

use super::level::{Level, Transition};
use crate::config::AcceptancePolicy;
use crate::model::{pair_count, Graph};
use crate::Result;

enum Phase {
    Start(Level),
    Paired(Transition),
    Middle(Transition),
    Done,
}

/// All canonical graphs on `n` vertices (as isomorphism class
/// representatives), driven through the lower half of the levels.
pub struct ComplementOrderly {
    phase: Phase,
    pending: Option<Graph>,
    policy: AcceptancePolicy,
    /// Number of levels generated directly, `(C(n,2) + 1) / 2`.
    half: usize,
    /// Whether a self-paired middle level at `half` edges exists.
    odd: bool,
    emitted: u64,
    finished: bool,
}

impl ComplementOrderly {
    pub fn new(n: usize, policy: AcceptancePolicy) -> Result<Self> {
        let initial = Level::initial(n)?;
        let edge_classes = pair_count(n) + 1;
        let half = edge_classes / 2;
        let odd = edge_classes % 2 == 1;
        info!(
            "Starting complement enumeration on {n} vertices ({policy:?}): \
             {edge_classes} edge classes, max edges {}, odd={odd}",
            edge_classes - 1
        );
        Ok(Self {
            phase: Phase::Start(initial),
            pending: None,
            policy,
            half,
            odd,
            emitted: 0,
            finished: false,
        })
    }

    /// Graphs yielded so far, complements included.
    pub fn emitted(&self) -> u64 {
        self.emitted
    }

    /// Next phase once `level` is complete.
    fn after(&self, level: Level) -> Phase {
        if level.is_empty() {
            Phase::Done
        } else if level.edges() + 1 < self.half {
            Phase::Paired(Transition::new(level, self.policy))
        } else if self.odd {
            Phase::Middle(Transition::new(level, self.policy))
        } else {
            Phase::Done
        }
    }

    fn advance(&mut self) -> Option<Graph> {
        if let Some(complement) = self.pending.take() {
            return Some(complement);
        }
        loop {
            match std::mem::replace(&mut self.phase, Phase::Done) {
                Phase::Start(level) => {
                    let empty = level.graphs().first().cloned()?;
                    // A single vertex is its own complement and the only level.
                    if empty.is_complete() {
                        return Some(empty);
                    }
                    self.pending = Some(empty.complement());
                    self.phase = self.after(level);
                    return Some(empty);
                }
                Phase::Paired(mut step) => {
                    if let Some(graph) = step.next() {
                        self.pending = Some(graph.complement());
                        self.phase = Phase::Paired(step);
                        return Some(graph);
                    }
                    let level = step.into_level();
                    self.phase = self.after(level);
                }
                Phase::Middle(mut step) => {
                    if let Some(graph) = step.next() {
                        self.phase = Phase::Middle(step);
                        return Some(graph);
                    }
                    step.into_level();
                }
                Phase::Done => return None,
            }
        }
    }
}

impl Iterator for ComplementOrderly {
    type Item = Graph;

    fn next(&mut self) -> Option<Graph> {
        let next = self.advance();
        match next {
            Some(_) => self.emitted += 1,
            None if !self.finished => {
                self.finished = true;
                info!("Complement enumeration finished: {} graphs", self.emitted);
            }
            None => {}
        }
        next
    }
}
