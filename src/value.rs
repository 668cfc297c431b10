//! Modifier values.
//!
//! A modifier carries one of four kinds of value, and the kind decides which
//! class (if any) the modifier contributes:
//!
//! - [`ModifierValue::Flag`]`(true)` adds a bare `base--name` class
//! - [`ModifierValue::Flag`]`(false)` and [`ModifierValue::Null`] add nothing
//! - [`ModifierValue::Text`] and [`ModifierValue::Number`] add `base--name_value`

use std::fmt;

use serde::{Deserialize, Serialize};

/// A numeric modifier value.
///
/// Integers and floats are kept apart so that large integers format exactly.
/// Both format with their natural decimal representation: no separators, no
/// fixed precision, and whole floats without a fractional part (`2.0` is `2`).
/// Floats at or above `1e21`, or below `1e-6`, use exponent notation
/// (`1e+21`, `1e-7`), the same as JavaScript number-to-string.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Number::Int(n) => write!(f, "{}", n),
            Number::Float(n) if n.is_infinite() => {
                f.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" })
            }
            // -0.0 prints as "-0" otherwise
            Number::Float(n) if n == 0.0 => f.write_str("0"),
            Number::Float(n) if n.abs() >= 1e21 || n.abs() < 1e-6 => write_exponent(f, n),
            Number::Float(n) => write!(f, "{}", n),
        }
    }
}

/// Writes `n` as shortest digits plus an explicitly signed exponent.
fn write_exponent(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    let formatted = format!("{:e}", n);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            write!(f, "{}e+{}", mantissa, exponent)
        }
        _ => f.write_str(&formatted),
    }
}

macro_rules! number_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Number {
                fn from(n: $ty) -> Self {
                    Number::Int(n as i64)
                }
            }

            impl From<$ty> for ModifierValue {
                fn from(n: $ty) -> Self {
                    ModifierValue::Number(Number::from(n))
                }
            }
        )*
    };
}

number_from_int!(i8, i16, i32, i64, u8, u16, u32, isize);

macro_rules! number_from_lossy {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Number {
                fn from(n: $ty) -> Self {
                    match i64::try_from(n) {
                        Ok(n) => Number::Int(n),
                        Err(_) => Number::Float(n as f64),
                    }
                }
            }

            impl From<$ty> for ModifierValue {
                fn from(n: $ty) -> Self {
                    ModifierValue::Number(Number::from(n))
                }
            }
        )*
    };
}

number_from_lossy!(u64, usize);

impl From<f64> for Number {
    fn from(n: f64) -> Self {
        Number::Float(n)
    }
}

impl From<f32> for Number {
    fn from(n: f32) -> Self {
        // 0.1f32 as f64 is 0.10000000149011612
        Number::Float(n.to_string().parse().unwrap_or(n as f64))
    }
}

/// The value of a modifier.
///
/// Serializes untagged, so `true`, `"red"`, `3` and `null` round-trip
/// through JSON or YAML as their plain scalar forms.
///
/// JSON has no infinities or NaN: a non-finite float serializes as `null`
/// and reads back as [`ModifierValue::Null`], which emits no class.
///
/// # Example
///
/// ```rust
/// use standout_bem::ModifierValue;
///
/// assert_eq!(ModifierValue::from(true), ModifierValue::Flag(true));
/// assert_eq!(ModifierValue::from("red").suffix(), Some("red".to_string()));
/// assert_eq!(ModifierValue::from(2.5).suffix(), Some("2.5".to_string()));
/// assert_eq!(ModifierValue::from(None::<&str>), ModifierValue::Null);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ModifierValue {
    Null,
    Flag(bool),
    Number(Number),
    Text(String),
}

impl ModifierValue {
    /// Returns `true` if this value contributes a class when resolved.
    pub fn is_active(&self) -> bool {
        !matches!(self, ModifierValue::Null | ModifierValue::Flag(false))
    }

    /// Returns the text appended after the value separator, if any.
    ///
    /// Flags and nulls have no suffix; text is used verbatim and numbers use
    /// their natural decimal form.
    pub fn suffix(&self) -> Option<String> {
        match self {
            ModifierValue::Null | ModifierValue::Flag(_) => None,
            ModifierValue::Number(n) => Some(n.to_string()),
            ModifierValue::Text(s) => Some(s.clone()),
        }
    }
}

impl Default for ModifierValue {
    fn default() -> Self {
        ModifierValue::Flag(true)
    }
}

impl From<bool> for ModifierValue {
    fn from(flag: bool) -> Self {
        ModifierValue::Flag(flag)
    }
}

impl From<&str> for ModifierValue {
    fn from(s: &str) -> Self {
        ModifierValue::Text(s.to_string())
    }
}

impl From<String> for ModifierValue {
    fn from(s: String) -> Self {
        ModifierValue::Text(s)
    }
}

impl From<&String> for ModifierValue {
    fn from(s: &String) -> Self {
        ModifierValue::Text(s.clone())
    }
}

impl From<Number> for ModifierValue {
    fn from(n: Number) -> Self {
        ModifierValue::Number(n)
    }
}

impl From<f64> for ModifierValue {
    fn from(n: f64) -> Self {
        ModifierValue::Number(Number::Float(n))
    }
}

impl From<f32> for ModifierValue {
    fn from(n: f32) -> Self {
        ModifierValue::Number(Number::from(n))
    }
}

impl From<()> for ModifierValue {
    fn from(_: ()) -> Self {
        ModifierValue::Null
    }
}

impl<T: Into<ModifierValue>> From<Option<T>> for ModifierValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(ModifierValue::Null, Into::into)
    }
}
