//! Variant tags of a typed parameter.
//!
//! The textual names are part of the user-visible error text and must not
//! change.

/// Raw tag values as they appear in the C `type` field.
pub mod raw {
    pub const UNKNOWN: i32 = 0;
    pub const INT: i32 = 1;
    pub const UINT: i32 = 2;
    pub const LLONG: i32 = 3;
    pub const ULLONG: i32 = 4;
    pub const DOUBLE: i32 = 5;
    pub const BOOLEAN: i32 = 6;
    pub const STRING: i32 = 7;
}

/// Name used for tags outside the enumerated range.
pub const UNKNOWN_NAME: &str = "unknown";

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::EnumString,
    strum::Display,
    strum::IntoStaticStr,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
#[repr(i32)]
pub enum ParamKind {
    Int = raw::INT,
    UInt = raw::UINT,
    LLong = raw::LLONG,
    ULLong = raw::ULLONG,
    Double = raw::DOUBLE,
    Boolean = raw::BOOLEAN,
    String = raw::STRING,
}

impl ParamKind {
    pub const fn as_raw(self) -> i32 {
        self as i32
    }

    pub const fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            raw::INT => Some(Self::Int),
            raw::UINT => Some(Self::UInt),
            raw::LLONG => Some(Self::LLong),
            raw::ULLONG => Some(Self::ULLong),
            raw::DOUBLE => Some(Self::Double),
            raw::BOOLEAN => Some(Self::Boolean),
            raw::STRING => Some(Self::String),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        self.into()
    }
}

/// Name of a raw tag, falling back to `"unknown"` when out of range.
pub fn type_name(raw: i32) -> &'static str {
    ParamKind::from_raw(raw).map_or(UNKNOWN_NAME, ParamKind::name)
}

impl TryFrom<i32> for ParamKind {
    type Error = i32;

    fn try_from(raw: i32) -> Result<Self, Self::Error> {
        Self::from_raw(raw).ok_or(raw)
    }
}

impl From<ParamKind> for i32 {
    fn from(kind: ParamKind) -> Self {
        kind.as_raw()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_names() {
        let names: Vec<&str> = ParamKind::iter().map(ParamKind::name).collect();
        assert_eq!(
            names,
            ["int", "uint", "llong", "ullong", "double", "boolean", "string"]
        );
    }

    #[test]
    fn test_raw_roundtrip() {
        for kind in ParamKind::iter() {
            assert_eq!(ParamKind::from_raw(kind.as_raw()), Some(kind));
            assert_eq!(type_name(kind.as_raw()), kind.to_string());
        }
        assert_eq!(ParamKind::try_from(0), Err(0));
        assert_eq!(type_name(raw::UNKNOWN), "unknown");
        assert_eq!(type_name(8), "unknown");
        assert_eq!(type_name(-1), "unknown");
    }

    #[test]
    fn test_parse_name() {
        assert_eq!(ParamKind::from_str("ullong").unwrap(), ParamKind::ULLong);
        assert!(ParamKind::from_str("unknown").is_err());
        assert!(ParamKind::from_str("Int").is_err());
    }
}
