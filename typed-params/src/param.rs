//! A single named parameter and its assignment primitives.

use crate::error::{Error, Result};
use crate::kind::ParamKind;
use crate::name::FieldName;
use crate::value::ParamValue;
use crate::view::ParamView;

/// A named, typed scalar.
#[derive(Debug, Clone, PartialEq)]
pub struct TypedParam {
    name: FieldName,
    value: ParamValue,
}

impl TypedParam {
    /// Builds a parameter from a native value.
    ///
    /// Fails with an internal error when `name` does not fit the name field.
    pub fn new(name: &str, value: impl Into<ParamValue>) -> Result<Self> {
        Ok(Self {
            name: FieldName::new(name)?,
            value: value.into(),
        })
    }

    /// Builds a parameter by parsing `text` as `kind`.
    ///
    /// `None` text is an invalid argument, checked before the name.
    pub fn from_text(name: &str, kind: ParamKind, text: Option<&str>) -> Result<Self> {
        Self::from_raw_text(name, kind.as_raw(), text)
    }

    /// Like [`TypedParam::from_text`] but with an unchecked raw tag, as
    /// received over the C boundary. An out-of-range tag is an internal
    /// error reported after the text and name checks.
    pub fn from_raw_text(name: &str, raw_kind: i32, text: Option<&str>) -> Result<Self> {
        let text = text.ok_or_else(|| Error::NullValue(name.to_string()))?;
        let name = FieldName::new(name)?;
        let kind = ParamKind::from_raw(raw_kind).ok_or_else(|| Error::UnexpectedType {
            kind: raw_kind,
            field: name.to_string(),
        })?;
        let value = ParamValue::parse(&name, kind, text)?;
        Ok(Self { name, value })
    }

    /// Replaces name and value in place. On error `self` is untouched.
    pub fn assign(&mut self, name: &str, value: impl Into<ParamValue>) -> Result<()> {
        *self = Self::new(name, value)?;
        Ok(())
    }

    /// Replaces name and value from text in place. On error `self` is untouched.
    pub fn assign_from_text(
        &mut self,
        name: &str,
        kind: ParamKind,
        text: Option<&str>,
    ) -> Result<()> {
        *self = Self::from_text(name, kind, text)?;
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ParamKind {
        self.value.kind()
    }

    pub fn value(&self) -> &ParamValue {
        &self.value
    }
}

impl ParamView for TypedParam {
    fn field(&self) -> &[u8] {
        self.name.as_bytes()
    }

    fn raw_kind(&self) -> i32 {
        self.kind().as_raw()
    }
}
