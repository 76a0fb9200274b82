//! Example module demonstrating the library structure
//!
//! Three small operations live here:
//!
//! - [`greet`] - build a greeting message
//! - [`calculate_sum`] - add two numbers
//! - [`process_data`] - tag list or dictionary data with its shape

use std::fmt;
use std::ops::Add;

use log::debug;
use serde::Serialize;
use serde_json::Value;

use crate::error::{Error, Result};

/// Generate a greeting message for `name`
#[must_use]
pub fn greet(name: &str) -> String {
    format!("Hello, {name}!")
}

/// Calculate the sum of two numbers
///
/// Works for any operand type implementing [`Add`]. Use [`Number`] when the
/// operands may be a mix of integers and floats.
#[must_use]
pub fn calculate_sum<T: Add>(a: T, b: T) -> T::Output {
    a + b
}

/// A number that is either an integer or a float
///
/// Integers are held as `i128`, so the sum of any two `i64` values is exact.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Integer value
    Int(i128),
    /// Floating-point value
    Float(f64),
}

impl Number {
    /// Value as a float, promoting integers
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub const fn as_f64(self) -> f64 {
        match self {
            Self::Int(i) => i as f64,
            Self::Float(f) => f,
        }
    }

    /// Add two numbers, returning `None` if an integer sum leaves the `i128` range
    #[must_use]
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        match (self, rhs) {
            (Self::Int(a), Self::Int(b)) => a.checked_add(b).map(Self::Int),
            _ => Some(Self::Float(self.as_f64() + rhs.as_f64())),
        }
    }
}

impl Add for Number {
    type Output = Self;

    /// Integer sums use `i128` addition; see [`Number::checked_add`] for a
    /// non-panicking variant.
    fn add(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Self::Int(a), Self::Int(b)) => Self::Int(a + b),
            _ => Self::Float(self.as_f64() + rhs.as_f64()),
        }
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self::Int(i128::from(value))
    }
}

impl From<i128> for Number {
    fn from(value: i128) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{i}"),
            // Debug keeps the trailing ".0" on whole floats
            Self::Float(x) => write!(f, "{x:?}"),
        }
    }
}

/// Shape of data accepted by [`process_data`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DataKind {
    /// Ordered sequence
    List,
    /// Key-value mapping
    Dict,
}

impl DataKind {
    /// Detect the shape of `value`, if it is one we accept
    #[must_use]
    pub const fn of(value: &Value) -> Option<Self> {
        match value {
            Value::Array(_) => Some(Self::List),
            Value::Object(_) => Some(Self::Dict),
            _ => None,
        }
    }

    /// Label string ("list" or "dict")
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Dict => "dict",
        }
    }
}

impl fmt::Display for DataKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Processed data with metadata
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessedData {
    /// The input, unchanged
    pub original: Value,
    /// Shape of the input
    #[serde(rename = "type")]
    pub kind: DataKind,
    /// Always `true` once processed
    pub processed: bool,
}

/// Process input data
///
/// Only lists and dictionaries are accepted; any other value yields
/// [`Error::InvalidArgument`].
pub fn process_data(data: Value) -> Result<ProcessedData> {
    let kind = DataKind::of(&data).ok_or(Error::InvalidArgument)?;
    debug!("processing {kind} data");

    Ok(ProcessedData {
        original: data,
        kind,
        processed: true,
    })
}
