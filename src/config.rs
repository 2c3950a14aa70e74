//! Enumeration configuration.
//!
//! Everything a caller (CLI, service, test) chooses about a run lives in
//! [`EnumerationConfig`]. It is plain serde data so it can be loaded from
//! JSON alongside whatever else the caller configures.

use serde::{Deserialize, Serialize};

use crate::model::check_order;
use crate::Result;

/// Vertex count used when none is given.
pub const DEFAULT_VERTICES: usize = 4;

/// Which driver produces the graphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Every edge-count level, one transition at a time.
    Orderly,
    /// Lower half of the levels plus their complements.
    #[default]
    Complement,
}

/// How a level transition rejects candidates isomorphic to one it already
/// accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AcceptancePolicy {
    /// Keep the set of codes accepted in the current level.
    #[default]
    SeenSet,
    /// Accept only codes strictly below the last accepted code in the level.
    /// Relies on augmentation order and bit significance lining up.
    Monotonic,
}

/// Parameters of one enumeration run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnumerationConfig {
    /// Number of vertices, `1..=MAX_VERTICES`.
    pub vertices: usize,
    pub strategy: Strategy,
    pub acceptance: AcceptancePolicy,
}

impl Default for EnumerationConfig {
    fn default() -> Self {
        Self {
            vertices: DEFAULT_VERTICES,
            strategy: Strategy::default(),
            acceptance: AcceptancePolicy::default(),
        }
    }
}

impl EnumerationConfig {
    pub fn new(vertices: usize) -> Self {
        Self { vertices, ..Self::default() }
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_acceptance(mut self, acceptance: AcceptancePolicy) -> Self {
        self.acceptance = acceptance;
        self
    }

    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Fails with `InvalidVertexCount` when the vertex count is out of range.
    pub fn validate(&self) -> Result<()> {
        check_order(self.vertices).map(|_| ())
    }
}
