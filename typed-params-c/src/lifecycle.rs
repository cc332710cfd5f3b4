use std::ffi::c_int;
use std::ptr;

use crate::types::{TP_PARAM_STRING, tp_param_t};

/// Frees every string payload. The array itself is kept; NULL is a no-op.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn tp_params_clear(params: *mut tp_param_t, nparams: c_int) {
    tracing::trace!("tp_params_clear: nparams={nparams}");
    if params.is_null() {
        return;
    }
    for i in 0..usize::try_from(nparams).unwrap_or(0) {
        let slot = unsafe { &mut *params.add(i) };
        if slot.type_ == TP_PARAM_STRING {
            unsafe { libc::free(slot.value.s.cast()) };
            slot.value.s = ptr::null_mut();
        }
    }
}

/// [`tp_params_clear`] followed by freeing the array.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn tp_params_free(params: *mut tp_param_t, nparams: c_int) {
    tracing::trace!("tp_params_free: nparams={nparams}");
    unsafe {
        tp_params_clear(params, nparams);
        libc::free(params.cast());
    }
}
