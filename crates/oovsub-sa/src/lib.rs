//! Suffix array and LCP construction.
//!
//! The array is rebuilt for every query (corpus + query word), so the
//! builder favours a small, allocation-light prefix-doubling scheme over
//! linear-time induced sorting.
//!
//! # Architecture
//!
//! - [`builder`] -- prefix doubling over an explicit worklist of unresolved groups
//! - [`lcp`] -- Kasai's linear LCP pass over a finished suffix array

pub mod builder;
pub mod lcp;

pub use builder::{DEFAULT_INITIAL_STEP, SuffixArrayBuilder};
pub use lcp::kasai_lcp;

/// A suffix array together with its LCP array.
///
/// `sa()[i]` is the start of the `i`-th smallest suffix; `lcp()[i]` is the
/// length of the common prefix of the suffixes at ranks `i - 1` and `i`,
/// with `lcp()[0] == 0`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuffixArray {
    sa: Vec<usize>,
    lcp: Vec<usize>,
}

/// Two suffixes adjacent in sorted order and the length of their shared prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdjacentSuffixes {
    /// Start of the lexicographically smaller suffix (rank `i - 1`).
    pub prev: usize,
    /// Start of the suffix at rank `i`.
    pub current: usize,
    /// Common prefix length, `lcp()[i]`.
    pub lcp: usize,
}

impl SuffixArray {
    /// Build the suffix array and LCP array of `text` with default settings.
    pub fn new<T: Ord>(text: &[T]) -> Self {
        SuffixArrayBuilder::default().build(text)
    }

    pub(crate) fn from_parts(sa: Vec<usize>, lcp: Vec<usize>) -> Self {
        debug_assert_eq!(sa.len(), lcp.len());
        Self { sa, lcp }
    }

    /// Number of suffixes (the text length).
    pub fn len(&self) -> usize {
        self.sa.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sa.is_empty()
    }

    /// Suffix start positions in lexicographic order.
    pub fn sa(&self) -> &[usize] {
        &self.sa
    }

    /// Longest-common-prefix lengths between rank-adjacent suffixes.
    pub fn lcp(&self) -> &[usize] {
        &self.lcp
    }

    /// Compute the inverse permutation: `rank()[p]` is the rank of the
    /// suffix starting at `p`.
    pub fn rank(&self) -> Vec<usize> {
        let mut rank = vec![0; self.sa.len()];
        for (r, &p) in self.sa.iter().enumerate() {
            rank[p] = r;
        }
        rank
    }

    /// Iterate over every rank-adjacent pair, smallest first.
    pub fn adjacent_pairs(&self) -> impl Iterator<Item = AdjacentSuffixes> + '_ {
        self.sa
            .windows(2)
            .zip(self.lcp.iter().skip(1))
            .map(|(pair, &lcp)| AdjacentSuffixes {
                prev: pair[0],
                current: pair[1],
                lcp,
            })
    }

    /// Consume the value and return `(sa, lcp)`.
    pub fn into_parts(self) -> (Vec<usize>, Vec<usize>) {
        (self.sa, self.lcp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn banana() {
        let sa = SuffixArray::new(&chars("banana"));
        // a, ana, anana, banana, na, nana
        assert_eq!(sa.sa(), &[5, 3, 1, 0, 4, 2]);
        assert_eq!(sa.lcp(), &[0, 1, 3, 0, 0, 2]);
    }

    #[test]
    fn empty_text() {
        let sa = SuffixArray::new::<char>(&[]);
        assert!(sa.is_empty());
        assert!(sa.lcp().is_empty());
        assert_eq!(sa.adjacent_pairs().count(), 0);
    }

    #[test]
    fn single_character() {
        let sa = SuffixArray::new(&chars("x"));
        assert_eq!(sa.sa(), &[0]);
        assert_eq!(sa.lcp(), &[0]);
    }

    #[test]
    fn rank_is_inverse() {
        let sa = SuffixArray::new(&chars("mississippi"));
        let rank = sa.rank();
        for (r, &p) in sa.sa().iter().enumerate() {
            assert_eq!(rank[p], r);
        }
    }

    #[test]
    fn adjacent_pairs_skip_rank_zero() {
        let sa = SuffixArray::new(&chars("abab"));
        // ab, abab, b, bab
        let pairs: Vec<_> = sa.adjacent_pairs().collect();
        assert_eq!(pairs.len(), 3);
        assert_eq!(
            pairs[0],
            AdjacentSuffixes {
                prev: 2,
                current: 0,
                lcp: 2
            }
        );
        assert_eq!(pairs[2].lcp, 1);
    }

    #[test]
    fn into_parts_round_trip() {
        let sa = SuffixArray::new(&chars("abc"));
        let (positions, lcp) = sa.into_parts();
        assert_eq!(positions, vec![0, 1, 2]);
        assert_eq!(lcp, vec![0, 0, 0]);
    }
}
