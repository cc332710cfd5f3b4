//! Schema validation of a parameter list.

use crate::error::{Error, Result};
use crate::kind::{ParamKind, type_name};
use crate::view::ParamView;

/// One accepted `(name, kind)` pair of a schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaEntry<'a> {
    pub name: &'a str,
    pub kind: ParamKind,
}

impl<'a> SchemaEntry<'a> {
    pub const fn new(name: &'a str, kind: ParamKind) -> Self {
        Self { name, kind }
    }
}

impl<'a> From<(&'a str, ParamKind)> for SchemaEntry<'a> {
    fn from((name, kind): (&'a str, ParamKind)) -> Self {
        Self::new(name, kind)
    }
}

impl ParamView for SchemaEntry<'_> {
    fn field(&self) -> &[u8] {
        self.name.as_bytes()
    }

    fn raw_kind(&self) -> i32 {
        self.kind.as_raw()
    }
}

/// Checks that every parameter is named in `schema` with the same kind and
/// that no name occurs twice.
///
/// The first schema row with a matching name decides the expected kind.
/// Validation stops at the first offending parameter and returns its error.
/// Cost is `O(n·m + n²)`; both sides are small API-defined lists.
pub fn validate<P: ParamView, S: ParamView>(params: &[P], schema: &[S]) -> Result<()> {
    for (i, param) in params.iter().enumerate() {
        let name = param.field();
        let lossy = || String::from_utf8_lossy(name).into_owned();

        let entry = schema
            .iter()
            .find(|entry| entry.field() == name)
            .ok_or_else(|| Error::NotSupported(lossy()))?;

        if entry.raw_kind() != param.raw_kind() {
            return Err(Error::InvalidType {
                name: lossy(),
                actual: type_name(param.raw_kind()),
                expected: type_name(entry.raw_kind()),
            });
        }

        if params[..i].iter().any(|prev| prev.field() == name) {
            return Err(Error::Duplicate(lossy()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TypedParam;

    const SCHEMA: [SchemaEntry<'static>; 2] = [
        SchemaEntry::new("n", ParamKind::Int),
        SchemaEntry::new("m", ParamKind::String),
    ];

    #[test]
    fn test_subset_of_schema_passes() {
        let params = [TypedParam::new("n", 1).unwrap()];
        validate(&params, &SCHEMA).unwrap();
        validate::<TypedParam, SchemaEntry>(&[], &SCHEMA).unwrap();
    }

    #[test]
    fn test_unknown_name() {
        let params = [TypedParam::new("x", 1).unwrap()];
        assert_eq!(
            validate(&params, &SCHEMA).unwrap_err().to_string(),
            "parameter 'x' not supported"
        );
        assert!(validate::<_, SchemaEntry>(&params, &[]).is_err());
    }

    #[test]
    fn test_wrong_type_names_both() {
        let params = [TypedParam::new("n", 1).unwrap()];
        let schema = [SchemaEntry::new("n", ParamKind::UInt)];
        let msg = validate(&params, &schema).unwrap_err().to_string();
        assert_eq!(msg, "invalid type 'int' for parameter 'n', expected 'uint'");
    }

    #[test]
    fn test_duplicate() {
        let params = [
            TypedParam::new("n", 1).unwrap(),
            TypedParam::new("m", "s").unwrap(),
            TypedParam::new("n", 2).unwrap(),
        ];
        assert_eq!(
            validate(&params, &SCHEMA).unwrap_err(),
            Error::Duplicate("n".into())
        );
    }

    #[test]
    fn test_first_matching_row_decides() {
        let params = [TypedParam::new("n", 1u32).unwrap()];
        let schema = [
            SchemaEntry::new("n", ParamKind::Int),
            SchemaEntry::new("n", ParamKind::UInt),
        ];
        assert!(matches!(
            validate(&params, &schema),
            Err(Error::InvalidType { .. })
        ));
    }
}
