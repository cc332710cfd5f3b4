#![allow(non_camel_case_types, non_upper_case_globals)]

use std::ffi::{CStr, c_char, c_double, c_int, c_longlong, c_uint, c_ulonglong, c_void};

use typed_params::kind::raw;
use typed_params::{ErrorKind, FieldName, ParamView, Result};

pub const TP_FIELD_LENGTH: usize = typed_params::FIELD_LENGTH;

pub const TP_PARAM_INT: c_int = raw::INT;
pub const TP_PARAM_UINT: c_int = raw::UINT;
pub const TP_PARAM_LLONG: c_int = raw::LLONG;
pub const TP_PARAM_ULLONG: c_int = raw::ULLONG;
pub const TP_PARAM_DOUBLE: c_int = raw::DOUBLE;
pub const TP_PARAM_BOOLEAN: c_int = raw::BOOLEAN;
pub const TP_PARAM_STRING: c_int = raw::STRING;

pub const TP_ERR_OK: c_int = 0;
pub const TP_ERR_INTERNAL_ERROR: c_int = ErrorKind::InternalError.code();
pub const TP_ERR_NO_MEMORY: c_int = ErrorKind::NoMemory.code();
pub const TP_ERR_INVALID_ARG: c_int = ErrorKind::InvalidArg.code();

#[repr(C)]
#[derive(Clone, Copy)]
pub union tp_param_value_t {
    pub i: c_int,
    pub ui: c_uint,
    pub l: c_longlong,
    pub ul: c_ulonglong,
    pub d: c_double,
    pub b: c_char,
    pub s: *mut c_char,
}

impl Default for tp_param_value_t {
    fn default() -> Self {
        Self { ul: 0 }
    }
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct tp_param_t {
    pub field: [c_char; TP_FIELD_LENGTH],
    pub type_: c_int,
    pub value: tp_param_value_t,
}

impl Default for tp_param_t {
    fn default() -> Self {
        Self {
            field: [0; TP_FIELD_LENGTH],
            type_: 0,
            value: tp_param_value_t::default(),
        }
    }
}

impl std::fmt::Debug for tp_param_t {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("tp_param_t")
            .field("field", &self.field_bytes())
            .field("type_", &self.type_)
            .finish_non_exhaustive()
    }
}

impl tp_param_t {
    /// Name bytes up to the first NUL (or the whole field if unterminated).
    pub fn field_bytes(&self) -> &[u8] {
        // SAFETY: c_char and u8 share size and alignment.
        let bytes =
            unsafe { std::slice::from_raw_parts(self.field.as_ptr().cast::<u8>(), TP_FIELD_LENGTH) };
        let len = bytes.iter().position(|&b| b == 0).unwrap_or(TP_FIELD_LENGTH);
        &bytes[..len]
    }

    /// Copies `name` into the field, NUL padded. Fails with an internal
    /// error when it does not fit; the field is untouched then.
    pub fn set_field(&mut self, name: &[u8]) -> Result<()> {
        FieldName::check(name)?;
        self.field = [0; TP_FIELD_LENGTH];
        for (dst, &src) in self.field.iter_mut().zip(name) {
            *dst = src as c_char;
        }
        Ok(())
    }
}

impl ParamView for tp_param_t {
    fn field(&self) -> &[u8] {
        self.field_bytes()
    }

    fn raw_kind(&self) -> i32 {
        self.type_
    }
}

/// One `(name, type)` row of a validation schema. A null `name` ends the
/// schema early.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct tp_schema_entry_t {
    pub name: *const c_char,
    pub type_: c_int,
}

impl ParamView for tp_schema_entry_t {
    fn field(&self) -> &[u8] {
        if self.name.is_null() {
            return &[];
        }
        // SAFETY: callers only build views over entries whose name is a
        // valid C string that outlives the schema slice.
        unsafe { CStr::from_ptr(self.name) }.to_bytes()
    }

    fn raw_kind(&self) -> i32 {
        self.type_
    }
}

/// Error passed to a registered error function.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct tp_error_t {
    pub code: c_int,
    pub message: *const c_char,
}

pub type tp_error_func_t =
    Option<unsafe extern "C" fn(opaque: *mut c_void, error: *const tp_error_t)>;
