//! Direct assignment into a single caller-provided slot.
//!
//! The slot is treated as uninitialized: a string payload it may already
//! hold is not released. Failures are recorded but not dispatched.

use std::ffi::{c_char, c_int};

use typed_params::{Error, ParamKind};

use crate::types::{tp_param_t, tp_param_value_t};
use crate::utils::{
    bytes_from_ptr, c_param, c_param_from_text, c_strdup, lossy, text_from_ptr, tp_try,
};

/// Assigns `name`, `type_` and the matching arm of `value` to `param`.
///
/// For strings the slot takes ownership of `value.s`, which must come from
/// the C allocator; NULL is replaced by an owned empty string. Ownership is
/// only taken on success. For booleans any non-zero `value.b` is stored as
/// `1`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn tp_param_assign(
    param: *mut tp_param_t,
    name: *const c_char,
    type_: c_int,
    value: tp_param_value_t,
) -> c_int {
    tracing::trace!("tp_param_assign: type={type_}");
    tp_try! { dispatch: false;
        if param.is_null() {
            return Err(Error::InvalidArgument("param must not be NULL".to_string()));
        }
        let name = unsafe { bytes_from_ptr(name, "name") }?;
        let slot = c_param(name, type_, || {
            let kind = ParamKind::from_raw(type_).ok_or_else(|| Error::UnexpectedType {
                kind: type_,
                field: lossy(name),
            })?;
            Ok(match kind {
                ParamKind::Boolean => tp_param_value_t {
                    b: c_char::from(unsafe { value.b } != 0),
                },
                ParamKind::String if unsafe { value.s }.is_null() => tp_param_value_t {
                    s: c_strdup(b"")?,
                },
                _ => value,
            })
        })?;
        unsafe { *param = slot };
    }
}

/// Assigns `name` and `type_` to `param`, parsing the value from `value`.
/// Strings are copied byte for byte.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn tp_param_assign_from_string(
    param: *mut tp_param_t,
    name: *const c_char,
    type_: c_int,
    value: *const c_char,
) -> c_int {
    tracing::trace!("tp_param_assign_from_string: type={type_}");
    tp_try! { dispatch: false;
        if param.is_null() {
            return Err(Error::InvalidArgument("param must not be NULL".to_string()));
        }
        let name = unsafe { bytes_from_ptr(name, "name") }?;
        let text = unsafe { text_from_ptr(value) };
        let slot = c_param_from_text(name, type_, text)?;
        unsafe { *param = slot };
    }
}
