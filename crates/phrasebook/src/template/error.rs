//! Template error types.

use thiserror::Error;

/// An error parsing or rendering a template.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    /// Malformed template text, with location information.
    #[error("syntax error at {line}:{column}: {message}")]
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },

    /// A placeholder references an argument that was not supplied.
    #[error("placeholder {{{index}}} has no argument, {available} supplied")]
    MissingArgument { index: usize, available: usize },

    /// The argument's `Display` implementation returned an error.
    #[error("argument {index} failed to format")]
    Display { index: usize },
}
