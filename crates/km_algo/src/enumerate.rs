//! crates/km_algo/src/enumerate.rs
//! Lazy subset enumerator over the eligible parties.
//!
//! Order contract (selection depends on it, so it is fixed):
//! - subset size ascending, starting at 1;
//! - within one size, combinations in lexicographic index order, so subsets
//!   led by the strongest parties come first (the input is ordered descending
//!   by share).
//!
//! For n parties this yields exactly 2^n − 1 candidates; n is single-digit
//! in practice, so the bound is irrelevant for cost but matters for tests.

use km_core::{Coalition, PartyResult};

/// Iterate every non-empty subset of `parties` in the fixed search order.
///
/// `parties` must already be in descending-share order (see `PollSnapshot`);
/// the enumerator does not re-sort.
pub fn coalitions(parties: &[PartyResult]) -> CoalitionIter<'_> {
    CoalitionIter {
        parties,
        size: 1,
        indices: vec![0],
        exhausted: parties.is_empty(),
    }
}

/// Stateless-from-the-outside candidate generator: each call to
/// [`coalitions`] restarts the sequence from the beginning.
#[derive(Clone, Debug)]
pub struct CoalitionIter<'a> {
    parties: &'a [PartyResult],
    /// Current subset size (1..=n).
    size: usize,
    /// Current combination, as ascending indices into `parties`.
    indices: Vec<usize>,
    exhausted: bool,
}

impl CoalitionIter<'_> {
    /// Advance `indices` to the next combination of `size` elements, or roll
    /// over to the first combination of `size + 1`.
    fn advance(&mut self) {
        let n = self.parties.len();
        // Rightmost index that can still move up.
        let movable = (0..self.size)
            .rev()
            .find(|&i| self.indices[i] < n - self.size + i);
        match movable {
            Some(i) => {
                self.indices[i] += 1;
                for j in i + 1..self.size {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
            }
            None => {
                self.size += 1;
                if self.size > n {
                    self.exhausted = true;
                } else {
                    self.indices = (0..self.size).collect();
                }
            }
        }
    }
}

impl Iterator for CoalitionIter<'_> {
    type Item = Coalition;

    fn next(&mut self) -> Option<Coalition> {
        if self.exhausted {
            return None;
        }
        let members: Vec<PartyResult> = self
            .indices
            .iter()
            .map(|&i| self.parties[i].clone())
            .collect();
        self.advance();
        Some(Coalition::from_members(members))
    }
}
