//! The growable parameter collection.

use std::slice;

use crate::error::{Error, Result};
use crate::kind::ParamKind;
use crate::param::TypedParam;
use crate::resize::ResizePolicy;
use crate::validate::{self, SchemaEntry};
use crate::value::{FromParamValue, ParamValue};
use crate::view;

/// An ordered sequence of uniquely named parameters.
///
/// Insertion order is preserved and lookups are linear. Every mutator is
/// transactional: on error the set of parameters is left as it was.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypedParams {
    params: Vec<TypedParam>,
    policy: ResizePolicy,
}

impl TypedParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> crate::TypedParamsBuilder {
        crate::TypedParamsBuilder::default()
    }

    pub(crate) fn from_parts(params: Vec<TypedParam>, policy: ResizePolicy) -> Self {
        Self { params, policy }
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.params.capacity()
    }

    pub fn resize_policy(&self) -> ResizePolicy {
        self.policy
    }

    pub fn iter(&self) -> slice::Iter<'_, TypedParam> {
        self.params.iter()
    }

    pub fn get(&self, name: &str) -> Option<&TypedParam> {
        view::find(&self.params, name.as_bytes())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Reads `name` as `T`.
    ///
    /// `Ok(None)` when absent; an invalid-argument error naming both kinds
    /// when present with another kind.
    pub fn get_as<'a, T: FromParamValue<'a>>(&'a self, name: &str) -> Result<Option<T>> {
        let Some(param) = self.get(name) else {
            return Ok(None);
        };
        T::from_value(param.value())
            .map(Some)
            .ok_or_else(|| Error::TypeMismatch {
                name: name.to_string(),
                expected: T::KIND.name(),
                actual: param.kind().name(),
            })
    }

    pub fn get_int(&self, name: &str) -> Result<Option<i32>> {
        self.get_as(name)
    }

    pub fn get_uint(&self, name: &str) -> Result<Option<u32>> {
        self.get_as(name)
    }

    pub fn get_llong(&self, name: &str) -> Result<Option<i64>> {
        self.get_as(name)
    }

    pub fn get_ullong(&self, name: &str) -> Result<Option<u64>> {
        self.get_as(name)
    }

    pub fn get_double(&self, name: &str) -> Result<Option<f64>> {
        self.get_as(name)
    }

    pub fn get_boolean(&self, name: &str) -> Result<Option<bool>> {
        self.get_as(name)
    }

    /// Borrowed view of a string parameter, valid as long as the collection.
    pub fn get_string(&self, name: &str) -> Result<Option<&str>> {
        self.get_as(name)
    }

    /// Appends a parameter built from a native value.
    pub fn add(&mut self, name: &str, value: impl Into<ParamValue>) -> Result<()> {
        self.push_with(name, |name| TypedParam::new(name, value))
    }

    pub fn add_int(&mut self, name: &str, value: i32) -> Result<()> {
        self.add(name, value)
    }

    pub fn add_uint(&mut self, name: &str, value: u32) -> Result<()> {
        self.add(name, value)
    }

    pub fn add_llong(&mut self, name: &str, value: i64) -> Result<()> {
        self.add(name, value)
    }

    pub fn add_ullong(&mut self, name: &str, value: u64) -> Result<()> {
        self.add(name, value)
    }

    pub fn add_double(&mut self, name: &str, value: f64) -> Result<()> {
        self.add(name, value)
    }

    pub fn add_boolean(&mut self, name: &str, value: bool) -> Result<()> {
        self.add(name, value)
    }

    /// Appends a copy of `value`.
    pub fn add_string(&mut self, name: &str, value: &str) -> Result<()> {
        self.add(name, value)
    }

    /// Appends a parameter parsed from `text`.
    pub fn add_from_text(&mut self, name: &str, kind: ParamKind, text: Option<&str>) -> Result<()> {
        self.push_with(name, |name| TypedParam::from_text(name, kind, text))
    }

    /// Appends an already built parameter.
    pub fn push(&mut self, param: TypedParam) -> Result<()> {
        let name = param.name().to_string();
        self.push_with(&name, |_| Ok(param))
    }

    fn push_with(
        &mut self,
        name: &str,
        make: impl FnOnce(&str) -> Result<TypedParam>,
    ) -> Result<()> {
        if self.contains(name) {
            return Err(Error::AlreadySet(name.to_string()));
        }
        self.reserve_slots(1)?;
        let param = make(name)?;
        self.params.push(param);
        Ok(())
    }

    /// Makes room for `add` more parameters according to the resize policy.
    pub fn reserve_slots(&mut self, add: usize) -> Result<()> {
        let capacity = self.params.capacity();
        let Some(target) = self.policy.grow(capacity, self.params.len(), add)? else {
            return Ok(());
        };
        self.params.try_reserve_exact(target - self.params.len())?;
        tracing::trace!(from = capacity, to = self.params.capacity(), "grew parameter array");
        Ok(())
    }

    /// Checks every parameter against `schema`; see [`validate::validate`].
    pub fn validate(&self, schema: &[SchemaEntry<'_>]) -> Result<()> {
        validate::validate(&self.params, schema)
    }

    /// Drops every parameter, keeping the allocated slots.
    pub fn clear(&mut self) {
        self.params.clear();
    }
}

impl<'a> IntoIterator for &'a TypedParams {
    type Item = &'a TypedParam;
    type IntoIter = slice::Iter<'a, TypedParam>;

    fn into_iter(self) -> Self::IntoIter {
        self.params.iter()
    }
}

impl IntoIterator for TypedParams {
    type Item = TypedParam;
    type IntoIter = std::vec::IntoIter<TypedParam>;

    fn into_iter(self) -> Self::IntoIter {
        self.params.into_iter()
    }
}
