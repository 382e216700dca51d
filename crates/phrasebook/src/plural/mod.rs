//! Plural family resolution and variant index selection.
//!
//! A locale resolves to one of a closed set of [`PluralFamily`] values, and
//! each family maps a [`Count`] to an index into a phrase's variant list.

mod family;
mod resolver;
mod selector;

pub use family::{FAMILY_TABLE, INVARIANT_LOCALE, PluralFamily};
pub use resolver::{FamilyResolver, ResolverError};
pub use selector::{Count, clamp_index, select_index};

impl PluralFamily {
    /// Returns the variant index this family selects for `count`.
    ///
    /// See [`select_index`].
    pub fn select_index(self, count: impl Into<Count>) -> usize {
        selector::select_index(self, count)
    }
}
