// Vector lookup with out-of-vocabulary fallback
//
// Resolution order: known word, numeric literal, substitute, unknown.

use oovsub_core::tokens::{NUMERIC_TOKEN, is_numeric_literal};

use crate::substitutor::OovSubstitutor;

/// Which rule produced a [`Resolution`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolutionKind {
    /// The word has its own vector.
    Known,
    /// The word is a number and resolves to the numeric token.
    Numeric,
    /// The word was replaced by a vocabulary word.
    Substituted,
    /// No substitute was found; the key is the unknown token.
    Unknown,
}

/// The vocabulary key a query word resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub key: String,
    pub kind: ResolutionKind,
}

/// Maps arbitrary words to keys of the vector table.
pub struct Resolver<'v> {
    substitutor: OovSubstitutor<'v>,
}

impl<'v> Resolver<'v> {
    pub fn new(substitutor: OovSubstitutor<'v>) -> Self {
        Self { substitutor }
    }

    pub fn substitutor(&self) -> &OovSubstitutor<'v> {
        &self.substitutor
    }

    /// Find the vector-table key to use for `word`.
    pub fn resolve(&self, word: &str) -> Resolution {
        let vocabulary = self.substitutor.vocabulary();

        if !word.is_empty() && vocabulary.contains(word) {
            return Resolution {
                key: word.to_string(),
                kind: ResolutionKind::Known,
            };
        }
        if is_numeric_literal(word) && vocabulary.contains(NUMERIC_TOKEN) {
            return Resolution {
                key: NUMERIC_TOKEN.to_string(),
                kind: ResolutionKind::Numeric,
            };
        }

        let key = self.substitutor.substitute(word);
        let kind = if key == self.substitutor.options().unknown_token {
            ResolutionKind::Unknown
        } else {
            ResolutionKind::Substituted
        };
        Resolution { key, kind }
    }

    /// The vector for `word` after resolution.
    ///
    /// Returns `None` only when the resolved key has no vector, i.e. the
    /// vocabulary lacks an entry for the unknown token.
    pub fn vector(&self, word: &str) -> Option<&'v [f32]> {
        let key = self.resolve(word).key;
        self.substitutor.vocabulary().vector(&key)
    }
}
