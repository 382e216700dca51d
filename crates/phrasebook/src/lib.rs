//! Phrase translation with plural family selection.
//!
//! A [`Translator`] stores, per key, an ordered list of template variants.
//! Translating a key with a count resolves the translator's culture to a
//! [`PluralFamily`], asks that family which variant the count selects, and
//! interpolates positional arguments (`{0}`, `{1}`, ...) into it.
//!
//! ```
//! use phrasebook::{Translator, Value};
//!
//! let translator = Translator::with_culture("ru");
//! translator
//!     .extend([("files", ["{0} файл", "{0} файла", "{0} файлов"])])
//!     .unwrap();
//!
//! assert_eq!(translator.translate("files", &[Value::from(21)]), "21 файл");
//! assert_eq!(translator.translate("files", &[Value::from(3)]), "3 файла");
//! assert_eq!(translator.translate("files", &[Value::from(5)]), "5 файлов");
//! ```

pub mod plural;
pub mod template;
pub mod translator;
pub mod types;

pub use plural::{Count, FamilyResolver, PluralFamily, ResolverError, clamp_index, select_index};
pub use template::{Template, TemplateError, interpolate};
pub use translator::{LintWarning, PhraseBank, PhraseError, PhraseSet, Translator, Variants};
pub use types::Value;
