//! Bounded parameter names.

use std::borrow::Borrow;
use std::fmt;
use std::ops::Deref;

use crate::error::{Error, Result};

/// Size of the name field at the C boundary, terminator included.
///
/// A name may hold at most `FIELD_LENGTH - 1` bytes.
pub const FIELD_LENGTH: usize = 80;

/// A parameter name that fits the fixed-size C field.
///
/// Construction never truncates: an oversized name is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldName(String);

impl FieldName {
    pub fn new(name: &str) -> Result<Self> {
        Self::check(name.as_bytes())?;
        Ok(Self(name.to_string()))
    }

    /// Checks raw name bytes against the field bounds.
    ///
    /// Names arriving over the C boundary are not required to be UTF-8; the
    /// lossy form only feeds the error message.
    pub fn check(name: &[u8]) -> Result<()> {
        if name.len() >= FIELD_LENGTH {
            return Err(Error::NameTooLong(String::from_utf8_lossy(name).into_owned()));
        }
        if name.contains(&0) {
            return Err(Error::NameContainsNul(name.escape_ascii().to_string()));
        }
        Ok(())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for FieldName {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for FieldName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for FieldName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for FieldName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for FieldName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<&str> for FieldName {
    type Error = Error;

    fn try_from(name: &str) -> Result<Self> {
        Self::new(name)
    }
}
