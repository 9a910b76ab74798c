// OovSubstitutor: maps any word to a vocabulary word or the unknown token.
//
// Each call builds a fresh suffix array over `corpus + word`; nothing is
// cached between calls, so a shared `&OovSubstitutor` can serve many threads
// as long as the vocabulary is not modified.

use oovsub_core::tokens::UNKNOWN_TOKEN;
use oovsub_core::{CombiningMarkPredicate, MatchSpan, NoCombiningMarks};
use oovsub_sa::{DEFAULT_INITIAL_STEP, SuffixArrayBuilder};

use crate::expander::expand_to_word;
use crate::matcher::BoundaryCrossMatcher;
use crate::vocabulary::Vocabulary;

/// Minimum match length for which the matched span is widened to its
/// enclosing vocabulary word.
pub const DEFAULT_MIN_EXPAND_LEN: usize = 2;

/// Tunable behaviour of [`OovSubstitutor`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstituteOptions {
    /// Returned when no substitute is found.
    pub unknown_token: String,
    /// Shortest match that is expanded to a whole vocabulary word.
    pub min_expand_len: usize,
    /// Initial window of the suffix sort.
    pub initial_step: usize,
}

impl Default for SubstituteOptions {
    fn default() -> Self {
        Self {
            unknown_token: UNKNOWN_TOKEN.to_string(),
            min_expand_len: DEFAULT_MIN_EXPAND_LEN,
            initial_step: DEFAULT_INITIAL_STEP,
        }
    }
}

/// How a substitution result was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubstitutionKind {
    /// The query was empty; no search ran.
    Empty,
    /// The matched substring is itself a vocabulary word.
    Exact,
    /// The match was widened to the vocabulary word containing it.
    Expanded,
    /// Nothing useful matched; the result is the unknown token.
    Unknown,
}

/// Result of [`OovSubstitutor::substitute_detailed`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    /// The substitute word (or the unknown token).
    pub word: String,
    pub kind: SubstitutionKind,
    /// The cross-boundary match the result was derived from.
    pub span: MatchSpan,
}

/// Resolves out-of-vocabulary words to the vocabulary word sharing the
/// longest, best-placed substring with them.
pub struct OovSubstitutor<'v> {
    vocabulary: &'v Vocabulary,
    predicate: Box<dyn CombiningMarkPredicate + Send + Sync>,
    options: SubstituteOptions,
}

impl<'v> OovSubstitutor<'v> {
    /// Create a substitutor with the given combining-mark predicate.
    pub fn new<P>(vocabulary: &'v Vocabulary, predicate: P) -> Self
    where
        P: CombiningMarkPredicate + Send + Sync + 'static,
    {
        Self {
            vocabulary,
            predicate: Box::new(predicate),
            options: SubstituteOptions::default(),
        }
    }

    /// Create a substitutor that treats every character as word-initial.
    pub fn without_marks(vocabulary: &'v Vocabulary) -> Self {
        Self::new(vocabulary, NoCombiningMarks)
    }

    pub fn with_options(mut self, options: SubstituteOptions) -> Self {
        self.options = options;
        self
    }

    pub fn vocabulary(&self) -> &'v Vocabulary {
        self.vocabulary
    }

    pub fn options(&self) -> &SubstituteOptions {
        &self.options
    }

    // =========================================================================
    // Option setters
    // =========================================================================

    pub fn set_unknown_token(&mut self, token: impl Into<String>) {
        self.options.unknown_token = token.into();
    }

    pub fn set_min_expand_len(&mut self, value: usize) {
        self.options.min_expand_len = value;
    }

    pub fn set_initial_step(&mut self, value: usize) {
        self.options.initial_step = value;
    }

    // =========================================================================
    // Substitution
    // =========================================================================

    /// Map `word` to a vocabulary word, or to the unknown token.
    pub fn substitute(&self, word: &str) -> String {
        self.substitute_detailed(word).word
    }

    /// Like [`substitute`](Self::substitute), also reporting the match and
    /// the path taken.
    ///
    /// 1. An empty word yields the unknown token without searching.
    /// 2. The best cross-boundary match is found in `corpus + word`.
    /// 3. If the matched part of the word is a vocabulary word, it is returned.
    /// 4. Otherwise a match of at least `min_expand_len` characters is widened
    ///    to the corpus word containing it.
    /// 5. Otherwise the unknown token is returned.
    pub fn substitute_detailed(&self, word: &str) -> Substitution {
        if word.is_empty() {
            return self.unknown(SubstitutionKind::Empty, MatchSpan::EMPTY);
        }

        let word_chars: Vec<char> = word.chars().collect();
        let corpus = self.vocabulary.corpus();
        let mark = corpus.len();

        let mut text = Vec::with_capacity(mark + word_chars.len());
        text.extend_from_slice(corpus);
        text.extend_from_slice(&word_chars);

        let sa = SuffixArrayBuilder::with_initial_step(self.options.initial_step).build(&text);
        let span = BoundaryCrossMatcher::new(&*self.predicate)
            .with_separator(self.vocabulary.separator())
            .find(&sa, &text, mark);

        let raw: String = word_chars[span.word_range()].iter().collect();
        let result = if self.vocabulary.contains_word(&raw) {
            Substitution {
                word: raw,
                kind: SubstitutionKind::Exact,
                span,
            }
        } else if !span.is_empty() && span.len() >= self.options.min_expand_len {
            let range = expand_to_word(corpus, span.vocab_range(), self.vocabulary.separator());
            Substitution {
                word: corpus[range].iter().collect(),
                kind: SubstitutionKind::Expanded,
                span,
            }
        } else {
            self.unknown(SubstitutionKind::Unknown, span)
        };

        log::debug!(
            "substitute {word:?} -> {:?} ({:?}, match length {})",
            result.word,
            result.kind,
            span.len()
        );
        result
    }

    fn unknown(&self, kind: SubstitutionKind, span: MatchSpan) -> Substitution {
        Substitution {
            word: self.options.unknown_token.clone(),
            kind,
            span,
        }
    }
}
