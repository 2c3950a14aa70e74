//! # Graph Model
//!
//! The `Graph` value type and the small amount of pair arithmetic that
//! every other module leans on.
//!
//! Design rule: this module is pure data. No enumeration state, no logging,
//! no I/O. Everything here is a function of its inputs.

pub mod graph;

pub use graph::Graph;

/// Vertex identifier. Vertices of a graph on `n` vertices are `1..=n`.
pub type Vertex = usize;

/// Numeric code of a graph under a vertex ordering: one bit per vertex pair,
/// most significant bit first.
pub type Code = u128;

/// Largest supported vertex count. C(16, 2) = 120 pair bits fit in a [`Code`].
pub const MAX_VERTICES: usize = 16;

/// Precomputed `C(n, 2) = n*(n-1)/2` for n in 0..=MAX_VERTICES.
const PAIRS: [usize; MAX_VERTICES + 1] = {
    let mut table = [0usize; MAX_VERTICES + 1];
    let mut i = 0usize;
    while i <= MAX_VERTICES {
        table[i] = (i * i.saturating_sub(1)) / 2;
        i += 1;
    }
    table
};

/// Number of unordered vertex pairs on `n` vertices, i.e. the edge count of
/// the complete graph.
#[inline]
pub const fn pair_count(n: usize) -> usize {
    debug_assert!(n <= MAX_VERTICES);
    PAIRS[n]
}

/// Inverse of [`pair_count`]: the vertex count whose pair count is exactly
/// `pairs`, if any. Zero pairs maps to a single vertex.
pub fn order_for_pairs(pairs: usize) -> Option<usize> {
    if pairs == 0 {
        return Some(1);
    }
    (2..=MAX_VERTICES).find(|&n| PAIRS[n] == pairs)
}

/// Validate a vertex count for graph construction and enumeration.
pub fn check_order(n: usize) -> crate::Result<usize> {
    if n == 0 || n > MAX_VERTICES {
        return Err(crate::Error::InvalidVertexCount(n));
    }
    Ok(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_count() {
        assert_eq!(pair_count(0), 0);
        assert_eq!(pair_count(1), 0);
        assert_eq!(pair_count(2), 1);
        assert_eq!(pair_count(4), 6);
        assert_eq!(pair_count(MAX_VERTICES), 120);
        assert!(pair_count(MAX_VERTICES) <= Code::BITS as usize);
    }

    #[test]
    fn test_order_for_pairs() {
        assert_eq!(order_for_pairs(0), Some(1));
        assert_eq!(order_for_pairs(1), Some(2));
        assert_eq!(order_for_pairs(6), Some(4));
        assert_eq!(order_for_pairs(7), None);
        assert_eq!(order_for_pairs(121), None);
    }

    #[test]
    fn test_check_order() {
        assert!(check_order(1).is_ok());
        assert!(check_order(MAX_VERTICES).is_ok());
        assert!(matches!(check_order(0), Err(crate::Error::InvalidVertexCount(0))));
        assert!(matches!(
            check_order(MAX_VERTICES + 1),
            Err(crate::Error::InvalidVertexCount(17))
        ));
    }
}
