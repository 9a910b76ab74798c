// Suffix array construction by prefix doubling
//
// Positions are first sorted by their literal `step`-length window. Every run
// of equal windows forms a group whose rank is the SA index of its first
// member. Each round re-sorts only the unresolved groups by the rank found
// `step` characters further on, then doubles `step`. Unresolved groups live
// on a worklist, so a round touches only the positions that still need it.

use std::ops::Range;

use crate::SuffixArray;
use crate::lcp::kasai_lcp;

/// Width of the literal window used for the initial sort.
pub const DEFAULT_INITIAL_STEP: usize = 16;

/// Builds a [`SuffixArray`] for an arbitrary slice of ordered symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuffixArrayBuilder {
    initial_step: usize,
}

impl Default for SuffixArrayBuilder {
    fn default() -> Self {
        Self {
            initial_step: DEFAULT_INITIAL_STEP,
        }
    }
}

impl SuffixArrayBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different initial window. Zero is treated as one.
    pub fn with_initial_step(initial_step: usize) -> Self {
        Self {
            initial_step: initial_step.max(1),
        }
    }

    pub fn initial_step(&self) -> usize {
        self.initial_step
    }

    /// Build the suffix array and LCP array of `text`.
    ///
    /// Runs in `O(n log^2 n)` worst case. An empty text yields empty arrays.
    pub fn build<T: Ord>(&self, text: &[T]) -> SuffixArray {
        let n = text.len();
        if n == 0 {
            return SuffixArray::default();
        }

        let (sa, rank) = self.sort_suffixes(text);
        let lcp = kasai_lcp(text, &sa, &rank);
        SuffixArray::from_parts(sa, lcp)
    }

    /// Returns `(sa, rank)` for a nonempty text.
    fn sort_suffixes<T: Ord>(&self, text: &[T]) -> (Vec<usize>, Vec<usize>) {
        let n = text.len();
        let mut step = self.initial_step.min(n);

        let window = |p: usize| &text[p..(p + step).min(n)];

        // Stable: equal windows keep ascending position order.
        let mut sa: Vec<usize> = (0..n).collect();
        sa.sort_by(|&a, &b| window(a).cmp(window(b)));

        let mut rank = vec![0; n];
        let mut pending: Vec<Range<usize>> = Vec::new();
        let mut group_start = 0;
        for i in 0..n {
            if i > 0 && window(sa[i - 1]) != window(sa[i]) {
                push_group(&mut pending, group_start..i);
                group_start = i;
            }
            rank[sa[i]] = group_start;
        }
        push_group(&mut pending, group_start..n);

        let mut round = 0usize;
        while !pending.is_empty() && step < n {
            round += 1;
            log::trace!(
                "suffix sort round {round}: step={step}, unresolved groups={}",
                pending.len()
            );

            // Keys are read from the ranks of the previous round only; new
            // ranks are applied after every group has been re-sorted.
            let mut updates: Vec<(usize, usize)> = Vec::new();
            let mut next: Vec<Range<usize>> = Vec::new();
            let key = |p: usize| rank.get(p + step).copied();

            for group in pending.drain(..) {
                let members = &mut sa[group.clone()];
                members.sort_unstable_by_key(|&p| (key(p), p));

                let mut sub_start = group.start;
                for i in group.clone() {
                    if i > group.start && key(sa[i - 1]) != key(sa[i]) {
                        push_group(&mut next, sub_start..i);
                        sub_start = i;
                    }
                    updates.push((sa[i], sub_start));
                }
                push_group(&mut next, sub_start..group.end);
            }

            for (p, r) in updates {
                rank[p] = r;
            }
            pending = next;
            step = step.saturating_mul(2);
        }

        (sa, rank)
    }
}

/// Queue a group for refinement if it still holds more than one position.
fn push_group(pending: &mut Vec<Range<usize>>, group: Range<usize>) {
    if group.len() > 1 {
        pending.push(group);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn naive_sa(text: &[char]) -> Vec<usize> {
        let mut sa: Vec<usize> = (0..text.len()).collect();
        sa.sort_by(|&a, &b| text[a..].cmp(&text[b..]));
        sa
    }

    #[test]
    fn default_step_is_sixteen() {
        assert_eq!(SuffixArrayBuilder::new().initial_step(), 16);
    }

    #[test]
    fn zero_step_is_clamped() {
        assert_eq!(SuffixArrayBuilder::with_initial_step(0).initial_step(), 1);
    }

    #[test]
    fn window_longer_than_text_resolves_immediately() {
        let text = chars("cab");
        let sa = SuffixArrayBuilder::new().build(&text);
        assert_eq!(sa.sa(), &[1, 2, 0]);
    }

    #[test]
    fn small_step_needs_refinement_rounds() {
        let text = chars("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaab");
        let built = SuffixArrayBuilder::with_initial_step(1).build(&text);
        assert_eq!(built.sa(), naive_sa(&text).as_slice());
    }

    #[test]
    fn every_initial_step_gives_the_same_array() {
        let text = chars("cat\0dog\0catalog\0cats");
        let expected = naive_sa(&text);
        for step in 1..=24 {
            let built = SuffixArrayBuilder::with_initial_step(step).build(&text);
            assert_eq!(built.sa(), expected.as_slice(), "initial step {step}");
        }
    }

    #[test]
    fn repeated_long_runs_beyond_initial_window() {
        let unit = "abcabcabcabcabcabcabc";
        let text: Vec<char> = format!("{unit}x{unit}y{unit}").chars().collect();
        let built = SuffixArrayBuilder::new().build(&text);
        assert_eq!(built.sa(), naive_sa(&text).as_slice());
    }

    #[test]
    fn separator_sorts_before_letters() {
        let text = chars("b\0a");
        let built = SuffixArrayBuilder::new().build(&text);
        // "\0a" < "a" < "b\0a"
        assert_eq!(built.sa(), &[1, 2, 0]);
    }

    #[test]
    fn works_on_bytes() {
        let built = SuffixArrayBuilder::new().build(b"abracadabra");
        assert_eq!(built.sa(), &[10, 7, 0, 3, 5, 8, 1, 4, 6, 9, 2]);
    }
}
