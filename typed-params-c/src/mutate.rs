//! Appenders over a caller-held `(array, count, capacity)` triple.
//!
//! An appender fails with an invalid-argument error when `name` is already
//! present, grows the array when it is full (reporting the new capacity in
//! `maxparams`), and only increments `nparams` once the new slot is fully
//! initialized. Failures are recorded and dispatched.

use std::ffi::{c_char, c_double, c_int, c_longlong, c_uint, c_ulonglong};
use std::mem::size_of;
use std::ptr;

use typed_params::{Error, ResizePolicy, Result, view};

use crate::types::{
    TP_PARAM_BOOLEAN, TP_PARAM_DOUBLE, TP_PARAM_INT, TP_PARAM_LLONG, TP_PARAM_STRING,
    TP_PARAM_UINT, TP_PARAM_ULLONG, tp_param_t, tp_param_value_t,
};
use crate::utils::{
    bytes_from_ptr, c_param, c_param_from_text, c_strdup, count_from, lossy, params_slice,
    text_from_ptr, tp_try,
};

/// Makes room for one more slot after `count` live ones.
unsafe fn grow(
    params: *mut *mut tp_param_t,
    maxparams: *mut c_int,
    count: usize,
) -> Result<*mut tp_param_t> {
    let array = unsafe { *params };
    let capacity = if array.is_null() {
        0
    } else {
        count_from(unsafe { *maxparams }, "maxparams")?
    };
    let Some(target) = ResizePolicy::default().grow(capacity, count, 1)? else {
        return Ok(array);
    };

    let new_max = c_int::try_from(target).map_err(|_| Error::NoMemory)?;
    let bytes = target
        .checked_mul(size_of::<tp_param_t>())
        .ok_or(Error::NoMemory)?;
    let grown = unsafe { libc::realloc(array.cast(), bytes) }.cast::<tp_param_t>();
    if grown.is_null() {
        return Err(Error::NoMemory);
    }
    unsafe { ptr::write_bytes(grown.add(capacity), 0, target - capacity) };
    tracing::trace!(from = capacity, to = target, "grew parameter array");

    unsafe {
        *params = grown;
        *maxparams = new_max;
    }
    Ok(grown)
}

unsafe fn add_with(
    params: *mut *mut tp_param_t,
    nparams: *mut c_int,
    maxparams: *mut c_int,
    name: *const c_char,
    make: impl FnOnce(&[u8]) -> Result<tp_param_t>,
) -> c_int {
    tp_try! { dispatch: true;
        if params.is_null() || nparams.is_null() || maxparams.is_null() {
            return Err(Error::InvalidArgument(
                "params, nparams and maxparams must not be NULL".to_string(),
            ));
        }
        let name = unsafe { bytes_from_ptr(name, "name") }?;
        let count = count_from(unsafe { *nparams }, "nparams")?;

        let live = unsafe { params_slice(*params, *nparams) };
        if view::find(live, name).is_some() {
            return Err(Error::AlreadySet(lossy(name)));
        }

        let array = unsafe { grow(params, maxparams, count) }?;
        let slot = make(name)?;
        unsafe {
            *array.add(count) = slot;
            *nparams += 1;
        }
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn tp_params_add_int(
    params: *mut *mut tp_param_t,
    nparams: *mut c_int,
    maxparams: *mut c_int,
    name: *const c_char,
    value: c_int,
) -> c_int {
    tracing::trace!("tp_params_add_int: value={value}");
    unsafe {
        add_with(params, nparams, maxparams, name, |name| {
            c_param(name, TP_PARAM_INT, || Ok(tp_param_value_t { i: value }))
        })
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn tp_params_add_uint(
    params: *mut *mut tp_param_t,
    nparams: *mut c_int,
    maxparams: *mut c_int,
    name: *const c_char,
    value: c_uint,
) -> c_int {
    tracing::trace!("tp_params_add_uint: value={value}");
    unsafe {
        add_with(params, nparams, maxparams, name, |name| {
            c_param(name, TP_PARAM_UINT, || Ok(tp_param_value_t { ui: value }))
        })
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn tp_params_add_llong(
    params: *mut *mut tp_param_t,
    nparams: *mut c_int,
    maxparams: *mut c_int,
    name: *const c_char,
    value: c_longlong,
) -> c_int {
    tracing::trace!("tp_params_add_llong: value={value}");
    unsafe {
        add_with(params, nparams, maxparams, name, |name| {
            c_param(name, TP_PARAM_LLONG, || Ok(tp_param_value_t { l: value }))
        })
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn tp_params_add_ullong(
    params: *mut *mut tp_param_t,
    nparams: *mut c_int,
    maxparams: *mut c_int,
    name: *const c_char,
    value: c_ulonglong,
) -> c_int {
    tracing::trace!("tp_params_add_ullong: value={value}");
    unsafe {
        add_with(params, nparams, maxparams, name, |name| {
            c_param(name, TP_PARAM_ULLONG, || Ok(tp_param_value_t { ul: value }))
        })
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn tp_params_add_double(
    params: *mut *mut tp_param_t,
    nparams: *mut c_int,
    maxparams: *mut c_int,
    name: *const c_char,
    value: c_double,
) -> c_int {
    tracing::trace!("tp_params_add_double: value={value}");
    unsafe {
        add_with(params, nparams, maxparams, name, |name| {
            c_param(name, TP_PARAM_DOUBLE, || Ok(tp_param_value_t { d: value }))
        })
    }
}

/// Any non-zero `value` is stored as true.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn tp_params_add_boolean(
    params: *mut *mut tp_param_t,
    nparams: *mut c_int,
    maxparams: *mut c_int,
    name: *const c_char,
    value: c_int,
) -> c_int {
    tracing::trace!("tp_params_add_boolean: value={value}");
    unsafe {
        add_with(params, nparams, maxparams, name, |name| {
            c_param(name, TP_PARAM_BOOLEAN, || {
                Ok(tp_param_value_t {
                    b: c_char::from(value != 0),
                })
            })
        })
    }
}

/// Stores a byte copy of `value`; NULL stores an empty string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn tp_params_add_string(
    params: *mut *mut tp_param_t,
    nparams: *mut c_int,
    maxparams: *mut c_int,
    name: *const c_char,
    value: *const c_char,
) -> c_int {
    tracing::trace!("tp_params_add_string");
    let value = unsafe { text_from_ptr(value) }.map_or(&b""[..], |text| text.to_bytes());
    unsafe {
        add_with(params, nparams, maxparams, name, |name| {
            c_param(name, TP_PARAM_STRING, || {
                Ok(tp_param_value_t {
                    s: c_strdup(value)?,
                })
            })
        })
    }
}

/// Adds a parameter of raw `type_` parsed from `value`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn tp_params_add_from_string(
    params: *mut *mut tp_param_t,
    nparams: *mut c_int,
    maxparams: *mut c_int,
    name: *const c_char,
    type_: c_int,
    value: *const c_char,
) -> c_int {
    tracing::trace!("tp_params_add_from_string: type={type_}");
    let text = unsafe { text_from_ptr(value) };
    unsafe {
        add_with(params, nparams, maxparams, name, |name| {
            c_param_from_text(name, type_, text)
        })
    }
}
