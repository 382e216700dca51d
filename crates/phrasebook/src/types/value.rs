use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::plural::Count;

/// A runtime value passed as an interpolation argument.
///
/// The `Value` enum lets integers, floats, and strings be mixed in one
/// argument list. Only [`Value::Integer`] in the first position drives plural
/// selection in [`Translator::translate`](crate::Translator::translate);
/// floats and numeric-looking strings never do.
///
/// # Example
///
/// ```
/// use phrasebook::Value;
///
/// let count: Value = 42u8.into();
/// assert_eq!(count.as_integer(), Some(42));
///
/// let name: Value = "Alice".into();
/// assert_eq!(name.as_str(), Some("Alice"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Any fixed-width integer, signed or unsigned.
    Integer(i128),

    /// A floating-point number.
    Float(f64),

    /// A string value.
    String(String),
}

impl Value {
    /// Get this value as an integer, if it is one.
    pub fn as_integer(&self) -> Option<i128> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Get this value as a string, if it is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// The plural count this value selects, if it is integral.
    pub fn plural_count(&self) -> Option<Count> {
        self.as_integer().map(Count::from)
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Value::Integer(n) => Display::fmt(n, f),
            Value::Float(n) => Display::fmt(n, f),
            Value::String(s) => f.pad(s),
        }
    }
}

macro_rules! value_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Value::Integer(i128::from(n))
                }
            }
        )*
    };
}

value_from_integer!(i8, i16, i32, i64, i128, u8, u16, u32, u64);

impl From<isize> for Value {
    fn from(n: isize) -> Self {
        Value::Integer(n as i128)
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::Integer(n as i128)
    }
}

impl From<u128> for Value {
    /// Values above `i128::MAX` saturate.
    fn from(n: u128) -> Self {
        Value::Integer(i128::try_from(n).unwrap_or(i128::MAX))
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Float(f64::from(n))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::String(s.clone())
    }
}

impl From<Count> for Value {
    /// Integral counts become [`Value::Integer`], everything else a float.
    fn from(count: Count) -> Self {
        let n = count.value();
        if n.fract() == 0.0 && n.abs() < 1e36 {
            Value::Integer(n as i128)
        } else {
            Value::Float(n)
        }
    }
}
