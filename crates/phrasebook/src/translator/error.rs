//! Error types for phrase loading and lint output.

use thiserror::Error;

use crate::plural::PluralFamily;
use crate::template::TemplateError;

/// Errors that occur when adding phrases to a [`Translator`](crate::Translator).
///
/// A failed call applies none of its entries.
#[derive(Debug, Error)]
pub enum PhraseError {
    /// A key was given an empty variant list.
    #[error("phrase '{key}' has no variants")]
    InvalidPhrase { key: String },

    /// A key was given a null variant list, or a null variant.
    #[error("phrase '{key}' has a null variant list or variant")]
    NullVariants { key: String },

    /// The phrase document itself was null.
    #[error("phrase document is null")]
    NullInput,

    /// The phrase document is not a JSON object of string arrays.
    #[error("invalid phrase document: {source}")]
    Json {
        #[source]
        source: serde_json::Error,
    },
}

/// A problem found by [`Translator::lint`](crate::Translator::lint).
///
/// Lint warnings never affect translation; they point at phrases that will
/// silently fall back at runtime.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LintWarning {
    /// Fewer variants than the family can select. Missing forms fall back to
    /// variant 0.
    #[error(
        "phrase '{key}' has {variants} variant(s) but {family} plurals select up to {expected}"
    )]
    MissingForms {
        key: String,
        family: PluralFamily,
        variants: usize,
        expected: usize,
    },

    /// More variants than the family can select. The extras are unreachable.
    #[error("phrase '{key}' has {variants} variant(s) but {family} plurals only use {expected}")]
    UnreachableForms {
        key: String,
        family: PluralFamily,
        variants: usize,
        expected: usize,
    },

    /// A variant does not parse, so it is always returned uninterpolated.
    #[error("phrase '{key}' variant {variant}: {error}")]
    MalformedTemplate {
        key: String,
        variant: usize,
        error: TemplateError,
    },
}
