//! Typed parameter collections.
//!
//! A [`TypedParams`] is an ordered bag of uniquely named scalar parameters,
//! each carrying one of seven value kinds. It is the building block used to
//! pass heterogeneous settings across an API boundary without a dedicated
//! struct per call.
//!
//! ```
//! use typed_params::{ParamKind, SchemaEntry, TypedParams};
//!
//! let mut params = TypedParams::new();
//! params.add_uint("vcpus", 4).unwrap();
//! params.add_from_text("autostart", ParamKind::Boolean, Some("TRUE")).unwrap();
//!
//! assert_eq!(params.get_uint("vcpus").unwrap(), Some(4));
//! assert_eq!(params.get_boolean("autostart").unwrap(), Some(true));
//!
//! let schema = [
//!     SchemaEntry::new("vcpus", ParamKind::UInt),
//!     SchemaEntry::new("autostart", ParamKind::Boolean),
//! ];
//! params.validate(&schema).unwrap();
//! ```

pub mod builder;
pub mod collection;
pub mod error;
pub mod kind;
pub mod name;
pub mod param;
pub mod resize;
pub mod sink;
pub mod validate;
pub mod value;
pub mod view;

pub use builder::TypedParamsBuilder;
pub use collection::TypedParams;
pub use error::{Error, ErrorKind, Result};
pub use kind::ParamKind;
pub use name::{FIELD_LENGTH, FieldName};
pub use param::TypedParam;
pub use resize::ResizePolicy;
pub use sink::{ErrorSink, RecordedError, RecordingSink, ThreadLocalSink};
pub use validate::SchemaEntry;
pub use value::{FromParamValue, ParamValue};
pub use view::ParamView;

pub trait Builder {
    type Output;
    fn build(self) -> Result<Self::Output>;
}
