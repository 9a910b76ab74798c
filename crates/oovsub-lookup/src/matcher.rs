// Cross-boundary longest-common-substring search
//
// The text is `corpus + word`. Suffixes adjacent in the suffix array share
// their longest possible prefix, so every maximal substring common to the
// corpus and the word shows up as the LCP of some adjacent pair with one
// suffix on each side of the boundary.

use std::ops::Range;

use oovsub_core::{CombiningMarkPredicate, MatchSpan};
use oovsub_sa::SuffixArray;

/// Words at least this long get an extra bonus for matching their first
/// character.
pub const LONG_WORD_BOOST_LEN: usize = 5;

// ---------------------------------------------------------------------------
// Position weights
// ---------------------------------------------------------------------------

/// Per-position weights of the query word, strictly decreasing from the
/// front. A match is scored by summing the weights it covers, so among
/// equally long matches the one nearer the start of the word wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionWeights {
    weights: Vec<usize>,
}

impl PositionWeights {
    /// Weights for a word of `word_len` characters: `word_len + 1 - i` at
    /// position `i`, with position 0 boosted by another `word_len + 1` when
    /// the word has at least [`LONG_WORD_BOOST_LEN`] characters.
    pub fn new(word_len: usize) -> Self {
        let mut weights: Vec<usize> = (0..=word_len).map(|i| word_len + 1 - i).collect();
        if word_len >= LONG_WORD_BOOST_LEN {
            weights[0] += word_len + 1;
        }
        Self { weights }
    }

    /// Sum of the weights over `range`.
    pub fn score(&self, range: Range<usize>) -> usize {
        self.weights[range].iter().sum()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.weights
    }
}

// ---------------------------------------------------------------------------
// Matcher
// ---------------------------------------------------------------------------

/// Finds the best substring shared between the corpus and the query word.
pub struct BoundaryCrossMatcher<'p, P: CombiningMarkPredicate + ?Sized> {
    predicate: &'p P,
    separator: Option<char>,
}

impl<'p, P: CombiningMarkPredicate + ?Sized> BoundaryCrossMatcher<'p, P> {
    pub fn new(predicate: &'p P) -> Self {
        Self {
            predicate,
            separator: None,
        }
    }

    /// Cut every corpus-side span at the first `separator`, so a query
    /// holding the separator cannot match across two corpus words.
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = Some(separator);
        self
    }

    /// Scan the adjacent suffix pairs of `text = corpus + word` and return
    /// the best match crossing `mark` (the corpus length), or
    /// [`MatchSpan::EMPTY`] when the two sides share nothing usable.
    ///
    /// Selection rules, applied in suffix-array order:
    /// - only pairs with one suffix on each side of `mark` count;
    /// - a span whose first corpus character is a combining mark is skipped;
    /// - a longer span always replaces the current best;
    /// - an equally long span replaces it when its score is not lower, so
    ///   the last tie in scan order wins.
    ///
    /// The corpus side of a span is cut at `mark`, so it never runs from the
    /// last corpus word into the appended query, and at the separator when
    /// one is set.
    pub fn find(&self, sa: &SuffixArray, text: &[char], mark: usize) -> MatchSpan {
        let mark = mark.min(text.len());
        let weights = PositionWeights::new(text.len() - mark);

        let mut best: Option<(MatchSpan, usize)> = None;
        for pair in sa.adjacent_pairs() {
            let (corpus_pos, query_pos) = match (pair.prev < mark, pair.current < mark) {
                (true, false) => (pair.prev, pair.current),
                (false, true) => (pair.current, pair.prev),
                _ => continue,
            };

            let mut len = pair.lcp.min(mark - corpus_pos);
            if let Some(separator) = self.separator {
                len = text[corpus_pos..corpus_pos + len]
                    .iter()
                    .position(|&c| c == separator)
                    .unwrap_or(len);
            }
            if len == 0 {
                continue;
            }
            if self.predicate.is_non_initial(text[corpus_pos]) {
                continue;
            }

            let span = MatchSpan::new(corpus_pos, query_pos - mark, len);
            let score = weights.score(span.word_range());
            let replace = match best {
                None => true,
                Some((current, current_score)) => {
                    len > current.len() || (len == current.len() && score >= current_score)
                }
            };
            if replace {
                best = Some((span, score));
            }
        }

        best.map_or(MatchSpan::EMPTY, |(span, _)| span)
    }
}
