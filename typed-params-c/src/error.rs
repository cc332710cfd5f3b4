//! Last-error slot and error callback at the C boundary.
//!
//! Errors are kept per thread. A message pointer returned by
//! [`tp_get_last_error_message`] stays valid until the next call to it on
//! the same thread.

use std::cell::RefCell;
use std::ffi::{CString, c_char, c_int, c_void};
use std::ptr;

use typed_params::{ErrorSink, RecordedError, ThreadLocalSink};

use crate::types::{TP_ERR_OK, tp_error_func_t, tp_error_t};

thread_local! {
    static LAST_MESSAGE: RefCell<Option<CString>> = const { RefCell::new(None) };
}

fn message_cstring(message: &str) -> CString {
    CString::new(message.replace('\0', "\\0")).unwrap_or_default()
}

#[unsafe(no_mangle)]
pub extern "C" fn tp_get_last_error_code() -> c_int {
    ThreadLocalSink::last_error().map_or(TP_ERR_OK, |err| err.kind.code())
}

#[unsafe(no_mangle)]
pub extern "C" fn tp_get_last_error_message() -> *const c_char {
    let Some(err) = ThreadLocalSink::last_error() else {
        return ptr::null();
    };
    let message = message_cstring(&err.message);
    LAST_MESSAGE.with_borrow_mut(|slot| slot.insert(message).as_ptr())
}

#[unsafe(no_mangle)]
pub extern "C" fn tp_reset_last_error() {
    tracing::trace!("tp_reset_last_error");
    ThreadLocalSink.reset();
}

/// Registers `func` to receive every error dispatched on this thread. A
/// NULL `func` restores the default, which logs the error.
#[unsafe(no_mangle)]
pub extern "C" fn tp_set_error_func(func: tp_error_func_t, opaque: *mut c_void) {
    tracing::trace!("tp_set_error_func");
    let handler = func.map(|func| {
        Box::new(move |err: &RecordedError| {
            let message = message_cstring(&err.message);
            let error = tp_error_t {
                code: err.kind.code(),
                message: message.as_ptr(),
            };
            unsafe { func(opaque, &error) };
        }) as Box<dyn Fn(&RecordedError)>
    });
    ThreadLocalSink::set_handler(handler);
}
