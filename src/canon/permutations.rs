//! Lexicographic permutations of `0..n`.

use smallvec::SmallVec;

use crate::model::MAX_VERTICES;

/// A zero-based vertex ordering.
pub type VertexOrder = SmallVec<[usize; MAX_VERTICES]>;

/// Rearrange `perm` into its lexicographic successor. Returns `false` (and
/// leaves `perm` untouched) when `perm` is already the last permutation.
pub fn next_permutation(perm: &mut [usize]) -> bool {
    let n = perm.len();
    if n < 2 {
        return false;
    }
    // Longest non-increasing suffix starts at i + 1.
    let mut i = n - 1;
    while i > 0 && perm[i - 1] >= perm[i] {
        i -= 1;
    }
    if i == 0 {
        return false;
    }
    let pivot = i - 1;
    let mut j = n - 1;
    while perm[j] <= perm[pivot] {
        j -= 1;
    }
    perm.swap(pivot, j);
    perm[i..].reverse();
    true
}

/// Iterator over all orderings of `0..n`, starting at the identity.
#[derive(Debug, Clone)]
pub struct Permutations {
    current: VertexOrder,
    done: bool,
}

impl Permutations {
    pub fn new(n: usize) -> Self {
        Self { current: (0..n).collect(), done: false }
    }
}

impl Iterator for Permutations {
    type Item = VertexOrder;

    fn next(&mut self) -> Option<VertexOrder> {
        if self.done {
            return None;
        }
        let out = self.current.clone();
        self.done = !next_permutation(&mut self.current);
        Some(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_three_in_lexicographic_order() {
        let all: Vec<Vec<usize>> = Permutations::new(3).map(|p| p.to_vec()).collect();
        assert_eq!(
            all,
            vec![
                vec![0, 1, 2],
                vec![0, 2, 1],
                vec![1, 0, 2],
                vec![1, 2, 0],
                vec![2, 0, 1],
                vec![2, 1, 0],
            ]
        );
    }

    #[test]
    fn test_counts() {
        assert_eq!(Permutations::new(1).count(), 1);
        assert_eq!(Permutations::new(4).count(), 24);
        assert_eq!(Permutations::new(6).count(), 720);
    }

    #[test]
    fn test_last_permutation_is_stable() {
        let mut p = [2, 1, 0];
        assert!(!next_permutation(&mut p));
        assert_eq!(p, [2, 1, 0]);
    }
}
