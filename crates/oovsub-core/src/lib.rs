//! Shared leaf types for out-of-vocabulary substitution.
//!
//! - [`character`] -- combining-mark predicates (which characters may not begin a word)
//! - [`span`] -- the matched-span type passed between matcher and expander
//! - [`tokens`] -- reserved vocabulary keys and the corpus separator

pub mod character;
pub mod span;
pub mod tokens;

pub use character::{CombiningMarkPredicate, NoCombiningMarks, ThaiNonInitial, UnicodeCombiningMarks};
pub use span::MatchSpan;
