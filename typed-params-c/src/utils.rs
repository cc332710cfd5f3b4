use std::ffi::{CStr, c_char, c_int};
use std::{ptr, slice};

use typed_params::{Error, ParamKind, ParamValue, Result};

use crate::types::{tp_param_t, tp_param_value_t, tp_schema_entry_t};

/// Reads a required C string as raw bytes, without its terminator.
///
/// # Safety
/// `ptr` must be null or point to a valid NUL-terminated string that
/// outlives `'a`.
pub unsafe fn bytes_from_ptr<'a>(ptr: *const c_char, what: &str) -> Result<&'a [u8]> {
    if ptr.is_null() {
        return Err(Error::InvalidArgument(format!("{what} must not be NULL")));
    }
    Ok(unsafe { CStr::from_ptr(ptr) }.to_bytes())
}

/// Reads an optional C string; `None` for NULL.
///
/// # Safety
/// Same as [`bytes_from_ptr`].
pub unsafe fn text_from_ptr<'a>(ptr: *const c_char) -> Option<&'a CStr> {
    if ptr.is_null() {
        return None;
    }
    Some(unsafe { CStr::from_ptr(ptr) })
}

/// Converts a C count, rejecting negatives.
pub fn count_from(n: c_int, what: &str) -> Result<usize> {
    usize::try_from(n).map_err(|_| Error::InvalidArgument(format!("{what} must not be negative")))
}

/// Views `nparams` slots; NULL or a non-positive count give an empty slice.
///
/// # Safety
/// A non-null `params` must point to at least `nparams` initialized slots.
pub unsafe fn params_slice<'a>(params: *const tp_param_t, nparams: c_int) -> &'a [tp_param_t] {
    match usize::try_from(nparams) {
        Ok(n) if n > 0 && !params.is_null() => unsafe { slice::from_raw_parts(params, n) },
        _ => &[],
    }
}

/// Views the schema up to `nschema` rows or the first NULL name.
///
/// # Safety
/// A non-null `schema` must point to at least `nschema` rows.
pub unsafe fn schema_slice<'a>(
    schema: *const tp_schema_entry_t,
    nschema: c_int,
) -> &'a [tp_schema_entry_t] {
    let rows = match usize::try_from(nschema) {
        Ok(n) if n > 0 && !schema.is_null() => unsafe { slice::from_raw_parts(schema, n) },
        _ => &[],
    };
    let end = rows
        .iter()
        .position(|row| row.name.is_null())
        .unwrap_or(rows.len());
    &rows[..end]
}

/// Copies `bytes` plus a terminator into memory owned by the C allocator.
pub fn c_strdup(bytes: &[u8]) -> Result<*mut c_char> {
    let len = bytes.len();
    let buf = unsafe { libc::malloc(len + 1) }.cast::<c_char>();
    if buf.is_null() {
        return Err(Error::NoMemory);
    }
    unsafe {
        ptr::copy_nonoverlapping(bytes.as_ptr().cast::<c_char>(), buf, len);
        *buf.add(len) = 0;
    }
    Ok(buf)
}

/// Builds a slot named `name` with raw tag `type_`.
///
/// `value` only runs once the name is known to fit, so a string it
/// allocates is never leaked by a failing name check.
pub fn c_param(
    name: &[u8],
    type_: c_int,
    value: impl FnOnce() -> Result<tp_param_value_t>,
) -> Result<tp_param_t> {
    let mut slot = tp_param_t {
        type_,
        ..Default::default()
    };
    slot.set_field(name)?;
    slot.value = value()?;
    Ok(slot)
}

/// Builds a slot by parsing `text` as raw tag `type_`.
///
/// Checks run in order: NULL text, name bounds, tag range. String payloads
/// are copied byte for byte; other kinds are parsed from the text, where
/// bytes that are not UTF-8 never match and fail like any other bad input.
pub fn c_param_from_text(
    name: &[u8],
    type_: c_int,
    text: Option<&CStr>,
) -> Result<tp_param_t> {
    let text = text.ok_or_else(|| Error::NullValue(lossy(name)))?;
    c_param(name, type_, || {
        let kind = ParamKind::from_raw(type_).ok_or_else(|| Error::UnexpectedType {
            kind: type_,
            field: lossy(name),
        })?;
        match kind {
            ParamKind::String => Ok(tp_param_value_t {
                s: c_strdup(text.to_bytes())?,
            }),
            kind => {
                let value = ParamValue::parse(&lossy(name), kind, &text.to_string_lossy())?;
                c_value(&value)
            }
        }
    })
}

/// Lowers a value into the C union, copying any string payload.
pub fn c_value(value: &ParamValue) -> Result<tp_param_value_t> {
    let value = match value {
        ParamValue::Int(v) => tp_param_value_t { i: *v },
        ParamValue::UInt(v) => tp_param_value_t { ui: *v },
        ParamValue::LLong(v) => tp_param_value_t { l: *v },
        ParamValue::ULLong(v) => tp_param_value_t { ul: *v },
        ParamValue::Double(v) => tp_param_value_t { d: *v },
        ParamValue::Boolean(v) => tp_param_value_t { b: c_char::from(*v) },
        ParamValue::String(v) => tp_param_value_t {
            s: c_strdup(v.as_bytes())?,
        },
    };
    Ok(value)
}

pub fn lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Runs the body as an entry point: the thread's last error is reset first
/// and any error is recorded, optionally dispatched, and mapped to `-1`.
macro_rules! tp_try {
    (dispatch: $dispatch:expr; $($body:tt)*) => {{
        use typed_params::ErrorSink as _;
        let res = typed_params::ThreadLocalSink.guard($dispatch, || -> typed_params::Result<()> {
            $($body)*
            Ok(())
        });
        match res {
            Ok(()) => 0,
            Err(_) => -1,
        }
    }};
}

pub(crate) use tp_try;
