//! # Canonical Code Engine
//!
//! A graph's code under an ordering concatenates one bit per vertex pair
//! `(i, j)`, `i < j` by position, in row-major order, earlier pairs more
//! significant. The canonical code is the maximum code over every ordering;
//! a graph is canonical iff its natural-order code is that maximum.
//!
//! The search is exhaustive over all `n!` orderings at `O(n²)` each. That is
//! the dominant cost of enumeration.

pub mod permutations;

pub use permutations::{next_permutation, Permutations, VertexOrder};

use crate::model::{Code, Graph, Vertex};
use crate::Result;

/// Code of `g` under `ordering`, or under the natural order when `None`.
pub fn code(g: &Graph, ordering: Option<&[Vertex]>) -> Result<Code> {
    match ordering {
        Some(ordering) => g.encode(ordering),
        None => Ok(g.natural_code()),
    }
}

/// Maximum code of `g` over all vertex orderings.
pub fn canonical_code(g: &Graph) -> Code {
    Permutations::new(g.order())
        .map(|perm| g.code_at(&perm))
        .max()
        .unwrap_or_default()
}

/// True iff the natural-order code of `g` is its canonical code.
///
/// Stops at the first ordering that beats the natural code; the answer is
/// the same as comparing against the exhaustive maximum.
pub fn is_canonical(g: &Graph) -> bool {
    let natural = g.natural_code();
    let mut perm: VertexOrder = (0..g.order()).collect();
    while next_permutation(&mut perm) {
        if g.code_at(&perm) > natural {
            return false;
        }
    }
    true
}

/// True iff `a` and `b` are relabelings of each other.
pub fn are_isomorphic(a: &Graph, b: &Graph) -> bool {
    a.order() == b.order()
        && a.edge_count() == b.edge_count()
        && canonical_code(a) == canonical_code(b)
}
