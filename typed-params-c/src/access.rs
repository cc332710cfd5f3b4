//! Lookup and typed readers.
//!
//! Readers return `1` when the parameter exists with the requested type,
//! `0` when it is absent and `-1` on a type mismatch. A NULL `value` turns
//! the call into a presence and type check. Mismatches are recorded as the
//! thread's last error but not dispatched.

use std::ffi::{CStr, c_char, c_double, c_int, c_longlong, c_uint, c_ulonglong};
use std::ptr;

use typed_params::kind::type_name;
use typed_params::{Error, ErrorSink, ParamKind, ThreadLocalSink, view};

use crate::types::{tp_param_t, tp_param_value_t};
use crate::utils::{lossy, params_slice};

/// Finds the parameter called `name`, or NULL.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn tp_params_get(
    params: *mut tp_param_t,
    nparams: c_int,
    name: *const c_char,
) -> *mut tp_param_t {
    tracing::trace!("tp_params_get: nparams={nparams}");
    ThreadLocalSink.reset();

    if params.is_null() || name.is_null() {
        return ptr::null_mut();
    }
    let slots = unsafe { params_slice(params, nparams) };
    let name = unsafe { CStr::from_ptr(name) }.to_bytes();
    match view::position(slots, name) {
        Some(i) => unsafe { params.add(i) },
        None => ptr::null_mut(),
    }
}

unsafe fn get_typed<T>(
    params: *const tp_param_t,
    nparams: c_int,
    name: *const c_char,
    kind: ParamKind,
    value: *mut T,
    read: impl FnOnce(&tp_param_value_t) -> T,
) -> c_int {
    let sink = ThreadLocalSink;
    sink.reset();

    if params.is_null() || name.is_null() {
        return 0;
    }
    let slots = unsafe { params_slice(params, nparams) };
    let name = unsafe { CStr::from_ptr(name) }.to_bytes();
    let Some(param) = view::find(slots, name) else {
        return 0;
    };

    if param.type_ != kind.as_raw() {
        sink.record(&Error::TypeMismatch {
            name: lossy(name),
            expected: kind.name(),
            actual: type_name(param.type_),
        });
        return -1;
    }
    if !value.is_null() {
        unsafe { *value = read(&param.value) };
    }
    1
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn tp_params_get_int(
    params: *const tp_param_t,
    nparams: c_int,
    name: *const c_char,
    value: *mut c_int,
) -> c_int {
    tracing::trace!("tp_params_get_int");
    unsafe { get_typed(params, nparams, name, ParamKind::Int, value, |v| v.i) }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn tp_params_get_uint(
    params: *const tp_param_t,
    nparams: c_int,
    name: *const c_char,
    value: *mut c_uint,
) -> c_int {
    tracing::trace!("tp_params_get_uint");
    unsafe { get_typed(params, nparams, name, ParamKind::UInt, value, |v| v.ui) }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn tp_params_get_llong(
    params: *const tp_param_t,
    nparams: c_int,
    name: *const c_char,
    value: *mut c_longlong,
) -> c_int {
    tracing::trace!("tp_params_get_llong");
    unsafe { get_typed(params, nparams, name, ParamKind::LLong, value, |v| v.l) }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn tp_params_get_ullong(
    params: *const tp_param_t,
    nparams: c_int,
    name: *const c_char,
    value: *mut c_ulonglong,
) -> c_int {
    tracing::trace!("tp_params_get_ullong");
    unsafe { get_typed(params, nparams, name, ParamKind::ULLong, value, |v| v.ul) }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn tp_params_get_double(
    params: *const tp_param_t,
    nparams: c_int,
    name: *const c_char,
    value: *mut c_double,
) -> c_int {
    tracing::trace!("tp_params_get_double");
    unsafe { get_typed(params, nparams, name, ParamKind::Double, value, |v| v.d) }
}

/// Stores `0` or `1` in `value`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn tp_params_get_boolean(
    params: *const tp_param_t,
    nparams: c_int,
    name: *const c_char,
    value: *mut c_int,
) -> c_int {
    tracing::trace!("tp_params_get_boolean");
    unsafe {
        get_typed(params, nparams, name, ParamKind::Boolean, value, |v| {
            c_int::from(v.b != 0)
        })
    }
}

/// Stores a borrowed pointer to the string payload in `value`. The caller
/// must not free it; it lives as long as the parameter.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn tp_params_get_string(
    params: *const tp_param_t,
    nparams: c_int,
    name: *const c_char,
    value: *mut *const c_char,
) -> c_int {
    tracing::trace!("tp_params_get_string");
    unsafe {
        get_typed(params, nparams, name, ParamKind::String, value, |v| {
            v.s.cast_const()
        })
    }
}
