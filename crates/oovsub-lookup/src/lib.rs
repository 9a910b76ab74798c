//! Approximate vocabulary matching for word-vector lookup.
//!
//! A query word missing from the vocabulary is replaced by the vocabulary
//! word sharing the longest, best-placed contiguous substring with it, so a
//! caller can use that word's vector instead of the unknown-token vector.
//!
//! # Architecture
//!
//! - [`vocabulary`] -- corpus string and vector table, with a validating builder
//! - [`matcher`] -- best shared substring across the corpus/query boundary
//! - [`expander`] -- widen a corpus-side match to its enclosing word
//! - [`substitutor`] -- the `substitute` entry point and its options
//! - [`resolver`] -- vector-table key resolution with numeric and OOV fallback

pub mod expander;
pub mod matcher;
pub mod resolver;
pub mod substitutor;
pub mod vocabulary;

pub use matcher::{BoundaryCrossMatcher, PositionWeights};
pub use resolver::{Resolution, ResolutionKind, Resolver};
pub use substitutor::{OovSubstitutor, SubstituteOptions, Substitution, SubstitutionKind};
pub use vocabulary::{Vocabulary, VocabularyBuilder, VocabularyError};
