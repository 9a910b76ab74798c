// Matched span shared between the corpus and the query word

use std::ops::Range;

/// A substring shared across the corpus/query boundary.
///
/// `vocab_start..vocab_end` indexes the corpus, `word_start..word_end` the
/// query word; both ranges are in characters and always have the same
/// length. The all-zero value is the "no match" sentinel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MatchSpan {
    pub vocab_start: usize,
    pub vocab_end: usize,
    pub word_start: usize,
    pub word_end: usize,
}

impl MatchSpan {
    /// The empty span returned when no cross-boundary match exists.
    pub const EMPTY: MatchSpan = MatchSpan {
        vocab_start: 0,
        vocab_end: 0,
        word_start: 0,
        word_end: 0,
    };

    /// Build a span of `len` characters starting at `vocab_start` in the
    /// corpus and at `word_start` in the query.
    pub fn new(vocab_start: usize, word_start: usize, len: usize) -> Self {
        Self {
            vocab_start,
            vocab_end: vocab_start + len,
            word_start,
            word_end: word_start + len,
        }
    }

    /// Number of matched characters.
    pub fn len(&self) -> usize {
        self.word_end - self.word_start
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Corpus-side character range.
    pub fn vocab_range(&self) -> Range<usize> {
        self.vocab_start..self.vocab_end
    }

    /// Query-side character range.
    pub fn word_range(&self) -> Range<usize> {
        self.word_start..self.word_end
    }
}
