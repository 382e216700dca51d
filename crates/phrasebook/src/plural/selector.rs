//! Count-to-variant-index rules.
//!
//! Each [`PluralFamily`] maps a count to a 0-based index into a phrase's
//! variant list. The rules are modular arithmetic over the count and its last
//! one or two digits. Counts may be fractional; the remainder follows the sign
//! of the count, so negative counts run through the same arithmetic unchanged.

use std::fmt::{Display, Formatter, Result as FmtResult};

use super::PluralFamily;

/// A magnitude used to pick a plural variant.
///
/// Integral and fractional counts are both accepted. Integers convert
/// losslessly up to 2^53.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Count(f64);

impl Count {
    /// Creates a count from a raw value.
    pub fn new(value: f64) -> Self {
        Count(value)
    }

    /// The raw value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// The count modulo 10, signed like the count.
    pub fn mod10(self) -> f64 {
        self.0 % 10.0
    }

    /// The count modulo 100, signed like the count.
    pub fn mod100(self) -> f64 {
        self.0 % 100.0
    }
}

impl Display for Count {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}

macro_rules! count_from_lossless {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Count {
                fn from(n: $ty) -> Self {
                    Count(f64::from(n))
                }
            }
        )*
    };
}

macro_rules! count_from_wide {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Count {
                fn from(n: $ty) -> Self {
                    Count(n as f64)
                }
            }
        )*
    };
}

count_from_lossless!(i8, i16, i32, u8, u16, u32, f32, f64);
count_from_wide!(i64, u64, i128, u128, isize, usize);

/// Returns the variant index `family` selects for `count`.
///
/// Total and deterministic. The result may exceed the number of variants a
/// phrase actually has; pass it through [`clamp_index`] before indexing.
pub fn select_index(family: PluralFamily, count: impl Into<Count>) -> usize {
    let count = count.into();
    let n = count.value();
    let mod10 = count.mod10();
    let mod100 = count.mod100();

    match family {
        PluralFamily::Arabic => {
            if n < 3.0 {
                // Truncates toward zero; negative counts saturate at 0.
                truncate(n)
            } else if (3.0..=10.0).contains(&mod100) {
                3
            } else if mod100 >= 11.0 {
                4
            } else {
                5
            }
        }
        PluralFamily::BosnianSerbian | PluralFamily::Croatian | PluralFamily::Russian => {
            if n != 11.0 && mod10 == 1.0 {
                0
            } else if (2.0..=4.0).contains(&mod10) && !(12.0..=14.0).contains(&n) {
                1
            } else {
                2
            }
        }
        PluralFamily::Chinese => 0,
        PluralFamily::French => usize::from(n > 1.0),
        PluralFamily::German => usize::from(n != 1.0),
        PluralFamily::Lithuanian => {
            if mod10 == 1.0 && mod100 != 11.0 {
                0
            } else if (2.0..=9.0).contains(&mod10) && !(11.0..=19.0).contains(&mod100) {
                1
            } else {
                2
            }
        }
        PluralFamily::Czech => {
            if n == 1.0 {
                0
            } else if (2.0..=4.0).contains(&n) {
                1
            } else {
                2
            }
        }
        PluralFamily::Polish => {
            // No upper bound on the count itself, only on its last digits.
            if n == 1.0 {
                0
            } else if n >= 2.0 && mod10 <= 4.0 && !(10.0..20.0).contains(&mod100) {
                1
            } else {
                2
            }
        }
        PluralFamily::Icelandic => usize::from(mod10 != 1.0 || mod100 == 11.0),
        PluralFamily::Slovenian => {
            if mod100 == 1.0 {
                0
            } else if mod100 == 2.0 {
                1
            } else if mod100 == 3.0 || mod100 == 4.0 {
                2
            } else {
                3
            }
        }
    }
}

/// Clamps a selected index to a variant list of length `len`.
///
/// Out-of-range indices fall back to variant 0, the catch-all form.
pub fn clamp_index(index: usize, len: usize) -> usize {
    if index < len { index } else { 0 }
}

fn truncate(n: f64) -> usize {
    n.trunc() as usize
}
