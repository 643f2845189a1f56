//! Raw classifier inputs and their coercion to `f64`.
//!
//! A [`Measure`] is whatever the caller handed in: a native number, a numeric
//! string, a boolean, nothing at all, or some value without a numeric
//! reading. [`Measure::coerce`] turns it into a float or reports that it has
//! no numeric interpretation.

use std::fmt;

/// Untyped input to the classifier.
#[derive(Debug, Clone, PartialEq)]
pub enum Measure {
    Number(f64),
    Text(String),
    Bool(bool),
    /// Absent value (`None`, JSON `null`)
    Missing,
    /// A value with no numeric interpretation; carries a short description
    Opaque(String),
}

/// Coercion failure for a single input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotNumeric {
    pub description: String,
}

impl fmt::Display for NotNumeric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is not numeric", self.description)
    }
}

impl std::error::Error for NotNumeric {}

impl Measure {
    /// Coerce to a float.
    ///
    /// Strings are trimmed and parsed as decimal or scientific notation,
    /// including `inf` and `nan`. A single underscore between two digits is
    /// a digit separator (`1_000`). Booleans read as `1.0` / `0.0`.
    pub fn coerce(&self) -> Result<f64, NotNumeric> {
        match self {
            Measure::Number(n) => Ok(*n),
            Measure::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
            Measure::Text(s) => strip_digit_separators(s.trim())
                .and_then(|digits| digits.parse::<f64>().ok())
                .ok_or_else(|| NotNumeric {
                    description: format!("{:?}", s),
                }),
            Measure::Missing => Err(NotNumeric {
                description: "missing value".to_string(),
            }),
            Measure::Opaque(what) => Err(NotNumeric {
                description: what.clone(),
            }),
        }
    }
}

/// Remove `_` separators that sit between two ASCII digits.
///
/// Returns `None` for a leading, trailing or doubled underscore, or one next
/// to a non-digit.
fn strip_digit_separators(s: &str) -> Option<String> {
    if !s.contains('_') {
        return Some(s.to_string());
    }

    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len());
    for (i, &c) in chars.iter().enumerate() {
        if c != '_' {
            out.push(c);
            continue;
        }
        let before = i.checked_sub(1).and_then(|j| chars.get(j));
        let after = chars.get(i + 1);
        match (before, after) {
            (Some(b), Some(a)) if b.is_ascii_digit() && a.is_ascii_digit() => {}
            _ => return None,
        }
    }
    Some(out)
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Measure::Number(n) => write!(f, "{}", n),
            Measure::Text(s) => write!(f, "{:?}", s),
            Measure::Bool(b) => write!(f, "{}", b),
            Measure::Missing => write!(f, "<missing>"),
            Measure::Opaque(what) => write!(f, "<{}>", what),
        }
    }
}

macro_rules! impl_from_number {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Measure {
                fn from(value: $t) -> Self {
                    Measure::Number(value as f64)
                }
            }
        )*
    };
}

impl_from_number!(f64, f32, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl From<bool> for Measure {
    fn from(value: bool) -> Self {
        Measure::Bool(value)
    }
}

impl From<&str> for Measure {
    fn from(value: &str) -> Self {
        Measure::Text(value.to_string())
    }
}

impl From<String> for Measure {
    fn from(value: String) -> Self {
        Measure::Text(value)
    }
}

impl From<&String> for Measure {
    fn from(value: &String) -> Self {
        Measure::Text(value.clone())
    }
}

impl<T: Into<Measure>> From<Option<T>> for Measure {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Measure::Missing)
    }
}

impl From<serde_json::Value> for Measure {
    fn from(value: serde_json::Value) -> Self {
        Measure::from(&value)
    }
}

impl From<&serde_json::Value> for Measure {
    fn from(value: &serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => Measure::Missing,
            Value::Bool(b) => Measure::Bool(*b),
            Value::Number(n) => n
                .as_f64()
                .map(Measure::Number)
                .unwrap_or_else(|| Measure::Opaque(format!("number {}", n))),
            Value::String(s) => Measure::Text(s.clone()),
            Value::Array(_) => Measure::Opaque("array".to_string()),
            Value::Object(_) => Measure::Opaque("object".to_string()),
        }
    }
}
