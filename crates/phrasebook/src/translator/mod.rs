//! Phrase storage and translation.
//!
//! A [`Translator`] pairs a culture with a concurrent [`PhraseBank`]. Keys map
//! to ordered variant lists; translation picks a variant by plural rule and
//! interpolates positional arguments into it.

mod bank;
mod error;
mod phrase_set;
mod translate;

pub use bank::{PhraseBank, Variants};
pub use error::{LintWarning, PhraseError};
pub use phrase_set::PhraseSet;
pub use translate::Translator;
