//! Scalar payloads and their textual parsing.

use std::str::FromStr;

use crate::error::{Error, Result};
use crate::kind::ParamKind;

/// A typed scalar. The active arm is the parameter's kind.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Int(i32),
    UInt(u32),
    LLong(i64),
    ULLong(u64),
    Double(f64),
    Boolean(bool),
    String(String),
}

impl ParamValue {
    pub fn kind(&self) -> ParamKind {
        match self {
            Self::Int(_) => ParamKind::Int,
            Self::UInt(_) => ParamKind::UInt,
            Self::LLong(_) => ParamKind::LLong,
            Self::ULLong(_) => ParamKind::ULLong,
            Self::Double(_) => ParamKind::Double,
            Self::Boolean(_) => ParamKind::Boolean,
            Self::String(_) => ParamKind::String,
        }
    }

    /// Parses `text` as a value of `kind`.
    ///
    /// Integers are base 10 and must consume the whole input (leading
    /// whitespace and a sign are accepted). Booleans accept `true`/`false`
    /// in any case, or `1`/`0`. Doubles are parsed independently of the
    /// process locale. `field` only feeds the error message.
    pub fn parse(field: &str, kind: ParamKind, text: &str) -> Result<Self> {
        let invalid = |expected: &'static str| Error::InvalidValue {
            field: field.to_string(),
            expected,
        };

        let value = match kind {
            ParamKind::Int => Self::Int(parse_number(text).ok_or_else(|| invalid("int"))?),
            ParamKind::UInt => {
                Self::UInt(parse_number(text).ok_or_else(|| invalid("unsigned int"))?)
            }
            ParamKind::LLong => {
                Self::LLong(parse_number(text).ok_or_else(|| invalid("long long"))?)
            }
            ParamKind::ULLong => {
                Self::ULLong(parse_number(text).ok_or_else(|| invalid("unsigned long long"))?)
            }
            ParamKind::Double => Self::Double(parse_number(text).ok_or_else(|| invalid("double"))?),
            ParamKind::Boolean => Self::Boolean(
                parse_boolean(text).ok_or_else(|| Error::InvalidBoolean(field.to_string()))?,
            ),
            ParamKind::String => Self::String(text.to_string()),
        };
        Ok(value)
    }
}

fn parse_number<T: FromStr>(text: &str) -> Option<T> {
    text.trim_start_matches(|c: char| c.is_ascii_whitespace())
        .parse()
        .ok()
}

fn parse_boolean(text: &str) -> Option<bool> {
    if text.eq_ignore_ascii_case("true") || text == "1" {
        Some(true)
    } else if text.eq_ignore_ascii_case("false") || text == "0" {
        Some(false)
    } else {
        None
    }
}

macro_rules! impl_from_native {
    ($($ty:ty => $arm:ident),* $(,)?) => {
        $(
            impl From<$ty> for ParamValue {
                fn from(value: $ty) -> Self {
                    Self::$arm(value)
                }
            }
        )*
    };
}

impl_from_native! {
    i32 => Int,
    u32 => UInt,
    i64 => LLong,
    u64 => ULLong,
    f64 => Double,
    bool => Boolean,
    String => String,
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

/// Native types that can be read out of a [`ParamValue`] of one kind.
pub trait FromParamValue<'a>: Sized {
    const KIND: ParamKind;

    /// Returns `None` when `value` is not of kind [`Self::KIND`].
    fn from_value(value: &'a ParamValue) -> Option<Self>;
}

macro_rules! impl_from_param_value {
    ($($ty:ty => $arm:ident),* $(,)?) => {
        $(
            impl<'a> FromParamValue<'a> for $ty {
                const KIND: ParamKind = ParamKind::$arm;

                fn from_value(value: &'a ParamValue) -> Option<Self> {
                    match value {
                        ParamValue::$arm(v) => Some(*v),
                        _ => None,
                    }
                }
            }
        )*
    };
}

impl_from_param_value! {
    i32 => Int,
    u32 => UInt,
    i64 => LLong,
    u64 => ULLong,
    f64 => Double,
    bool => Boolean,
}

impl<'a> FromParamValue<'a> for &'a str {
    const KIND: ParamKind = ParamKind::String;

    fn from_value(value: &'a ParamValue) -> Option<Self> {
        match value {
            ParamValue::String(s) => Some(s.as_str()),
            _ => None,
        }
    }
}
