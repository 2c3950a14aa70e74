//! # orderly-graphs: Non-isomorphic Graph Enumeration
//!
//! Enumerates every simple undirected graph on `n` vertices exactly once up
//! to isomorphism, using R. C. Read's orderly method with maximum-code
//! canonical forms.
//!
//! ## Design Principles
//!
//! 1. **Value graphs**: `Graph` is immutable; augmentation and complement return new values
//! 2. **One code convention**: pair `(i, j)`, `i < j`, row-major, earlier pairs more significant
//! 3. **Lazy drivers**: every enumeration is an `Iterator`; stop pulling to stop the work
//! 4. **No I/O in the core**: rendering and CLIs consume `Graph` through its query methods
//!
//! ## Quick Start
//!
//! ```rust
//! use orderly_graphs::{unlabeled, unlabeled_complement};
//!
//! # fn example() -> orderly_graphs::Result<()> {
//! let graphs: Vec<_> = unlabeled(4)?.collect();
//! assert_eq!(graphs.len(), 11);
//!
//! // Same classes, half the canonicity tests.
//! assert_eq!(unlabeled_complement(4)?.count(), 11);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Drivers
//!
//! | Entry point | Yields | Strategy |
//! |-------------|--------|----------|
//! | [`unlabeled`] | `Graph` | every level, non-decreasing edge count |
//! | [`unlabeled_by_edge_count`] | `Level` | every level, grouped |
//! | [`unlabeled_complement`] | `Graph` | lower half of the levels plus complements |
//! | [`enumerate`] | `Graph` | chosen by [`EnumerationConfig`] |

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod canon;
pub mod orderly;
pub mod config;
pub mod export;

// ============================================================================
// Re-exports
// ============================================================================

pub use model::{pair_count, Code, Graph, Vertex, MAX_VERTICES};
pub use canon::{are_isomorphic, canonical_code, code, is_canonical};
pub use orderly::{
    augment, Augmenter, ComplementOrderly, Enumeration, Level, Levels, Orderly, Transition,
    TransitionStats,
};
pub use config::{AcceptancePolicy, EnumerationConfig, Strategy};

// ============================================================================
// Entry points
// ============================================================================

/// All non-isomorphic graphs on `n` vertices, in non-decreasing edge count.
pub fn unlabeled(n: usize) -> Result<Orderly> {
    Orderly::new(n, AcceptancePolicy::default())
}

/// The same graphs as [`unlabeled`], one edge-count level at a time.
pub fn unlabeled_by_edge_count(n: usize) -> Result<Levels> {
    Levels::new(n, AcceptancePolicy::default())
}

/// All non-isomorphic graphs on `n` vertices, generating only the lower
/// half of the edge counts and pairing each graph with its complement.
pub fn unlabeled_complement(n: usize) -> Result<ComplementOrderly> {
    ComplementOrderly::new(n, AcceptancePolicy::default())
}

/// Run the enumeration described by `config`.
pub fn enumerate(config: &EnumerationConfig) -> Result<Enumeration> {
    Enumeration::from_config(config)
}

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid vertex count: {0} (expected 1..={max})", max = MAX_VERTICES)]
    InvalidVertexCount(usize),

    #[error("Vertex not found: {vertex} (graph has vertices 1..={order})")]
    UnknownVertex { vertex: Vertex, order: usize },

    #[error("Self-loop at vertex {0}")]
    SelfLoop(Vertex),

    #[error("Invalid ordering: {0}")]
    InvalidOrdering(String),

    #[error("Malformed encoding: {0}")]
    MalformedEncoding(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
