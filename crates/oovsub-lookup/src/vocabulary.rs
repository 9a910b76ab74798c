// Vocabulary: corpus string plus word-vector table
//
// The corpus is every vocabulary word followed by a separator character,
// stored as a `Vec<char>` so the matcher can index code points directly.
// The final separator keeps a match against the last word from running on
// into a query appended to the corpus. Reserved keys (`<unk>`, `<num>`) live
// in the vector table only.

use hashbrown::HashMap;

use oovsub_core::tokens::{WORD_SEPARATOR, is_reserved};

/// Error type for vocabulary construction.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum VocabularyError {
    /// Words must contain at least one character.
    #[error("vocabulary words must not be empty")]
    EmptyWord,

    /// The separator may not appear inside a word.
    #[error("word {word:?} contains the corpus separator {separator:?}")]
    SeparatorInWord { word: String, separator: char },

    /// Every vector must have the vocabulary's dimension.
    #[error("vector for {word:?} has {actual} components, expected {expected}")]
    DimensionMismatch {
        word: String,
        expected: usize,
        actual: usize,
    },
}

/// An immutable vocabulary: the corpus string used for substring matching
/// and the vector table used for membership checks and lookups.
///
/// Built once through [`VocabularyBuilder`] and shared read-only by every
/// substitution.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    /// Every non-reserved word, in insertion order, each followed by `separator`.
    corpus: Vec<char>,
    /// Word -> vector, including reserved keys.
    vectors: HashMap<String, Vec<f32>>,
    /// Number of words that appear in the corpus.
    word_count: usize,
    dimension: usize,
    separator: char,
}

impl Vocabulary {
    /// Start building a vocabulary whose vectors have `dimension` components.
    pub fn builder(dimension: usize) -> VocabularyBuilder {
        VocabularyBuilder::new(dimension)
    }

    /// Build a membership-only vocabulary (zero-dimensional vectors).
    pub fn from_words<I, S>(words: I) -> Result<Self, VocabularyError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut builder = VocabularyBuilder::new(0);
        for word in words {
            builder.insert(word, Vec::new())?;
        }
        Ok(builder.build())
    }

    /// The corpus characters: every word followed by the separator.
    pub fn corpus(&self) -> &[char] {
        &self.corpus
    }

    /// The separator between corpus words.
    pub fn separator(&self) -> char {
        self.separator
    }

    /// Vector dimension.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of words in the corpus (reserved keys excluded).
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Returns `true` if the vector table has an entry for `key`,
    /// reserved keys included.
    pub fn contains(&self, key: &str) -> bool {
        self.vectors.contains_key(key)
    }

    /// Returns `true` if `word` is an ordinary (non-reserved) vocabulary word.
    pub fn contains_word(&self, word: &str) -> bool {
        !is_reserved(word) && self.contains(word)
    }

    /// The vector stored for `key`.
    pub fn vector(&self, key: &str) -> Option<&[f32]> {
        self.vectors.get(key).map(Vec::as_slice)
    }

    /// Iterate over the corpus words in insertion order.
    pub fn words(&self) -> impl Iterator<Item = String> + '_ {
        self.corpus
            .split(move |&c| c == self.separator)
            .filter(|w| !w.is_empty())
            .map(|w| w.iter().collect())
    }
}

/// Incremental constructor for [`Vocabulary`].
///
/// Acts as the loader for the corpus string and so enforces its
/// precondition: no word may be empty or contain the separator.
#[derive(Debug, Clone)]
pub struct VocabularyBuilder {
    dimension: usize,
    separator: char,
    order: Vec<String>,
    vectors: HashMap<String, Vec<f32>>,
}

impl VocabularyBuilder {
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            separator: WORD_SEPARATOR,
            order: Vec::new(),
            vectors: HashMap::new(),
        }
    }

    /// Use a different corpus separator. Must be set before inserting words.
    pub fn separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Add a word with its vector.
    ///
    /// Re-inserting a word replaces its vector and keeps its original
    /// position in the corpus.
    pub fn insert(
        &mut self,
        word: impl Into<String>,
        vector: Vec<f32>,
    ) -> Result<&mut Self, VocabularyError> {
        let word = word.into();
        if word.is_empty() {
            return Err(VocabularyError::EmptyWord);
        }
        if word.contains(self.separator) {
            return Err(VocabularyError::SeparatorInWord {
                word,
                separator: self.separator,
            });
        }
        if vector.len() != self.dimension {
            return Err(VocabularyError::DimensionMismatch {
                word,
                expected: self.dimension,
                actual: vector.len(),
            });
        }

        if !is_reserved(&word) && !self.vectors.contains_key(&word) {
            self.order.push(word.clone());
        }
        self.vectors.insert(word, vector);
        Ok(self)
    }

    /// Number of distinct keys inserted so far, reserved keys included.
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Lay the words out in the corpus and freeze the vocabulary.
    pub fn build(self) -> Vocabulary {
        let total: usize = self.order.iter().map(|w| w.chars().count() + 1).sum();
        let mut corpus = Vec::with_capacity(total);
        for word in &self.order {
            corpus.extend(word.chars());
            corpus.push(self.separator);
        }

        log::debug!(
            "built vocabulary: {} words, {} keys, corpus length {}",
            self.order.len(),
            self.vectors.len(),
            corpus.len()
        );

        Vocabulary {
            corpus,
            vectors: self.vectors,
            word_count: self.order.len(),
            dimension: self.dimension,
            separator: self.separator,
        }
    }
}
