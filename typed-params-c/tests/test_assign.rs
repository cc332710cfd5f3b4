use std::ffi::{CStr, c_char};
use std::ptr;

use typed_params_c::{
    access::{tp_params_get_boolean, tp_params_get_llong, tp_params_get_string},
    assign::{tp_param_assign, tp_param_assign_from_string},
    error::tp_get_last_error_code,
    lifecycle::tp_params_clear,
    types::{
        TP_ERR_INTERNAL_ERROR, TP_ERR_INVALID_ARG, TP_ERR_OK, TP_FIELD_LENGTH, TP_PARAM_BOOLEAN,
        TP_PARAM_LLONG, TP_PARAM_STRING, tp_param_t, tp_param_value_t,
    },
};

#[test]
fn test_assign_scalar() {
    let mut slot = tp_param_t::default();
    let value = tp_param_value_t { l: -40 };
    let ret = unsafe { tp_param_assign(&mut slot, c"limit".as_ptr(), TP_PARAM_LLONG, value) };
    assert_eq!(ret, 0);
    assert_eq!(slot.field_bytes(), b"limit");
    assert_eq!(slot.type_, TP_PARAM_LLONG);

    let mut out = 0;
    let ret = unsafe { tp_params_get_llong(&slot, 1, c"limit".as_ptr(), &mut out) };
    assert_eq!(ret, 1);
    assert_eq!(out, -40);
}

#[test]
fn test_assign_normalizes_boolean() {
    let mut slot = tp_param_t::default();
    let value = tp_param_value_t { b: 9 };
    let ret = unsafe { tp_param_assign(&mut slot, c"flag".as_ptr(), TP_PARAM_BOOLEAN, value) };
    assert_eq!(ret, 0);
    assert_eq!(unsafe { slot.value.b }, 1);

    let mut out = 0;
    unsafe { tp_params_get_boolean(&slot, 1, c"flag".as_ptr(), &mut out) };
    assert_eq!(out, 1);
}

#[test]
fn test_assign_null_string_becomes_empty() {
    let mut slot = tp_param_t::default();
    let value = tp_param_value_t { s: ptr::null_mut() };
    let ret = unsafe { tp_param_assign(&mut slot, c"s".as_ptr(), TP_PARAM_STRING, value) };
    assert_eq!(ret, 0);

    let mut out: *const c_char = ptr::null();
    unsafe { tp_params_get_string(&slot, 1, c"s".as_ptr(), &mut out) };
    assert!(!out.is_null());
    assert_eq!(unsafe { CStr::from_ptr(out) }.to_bytes(), b"");

    unsafe { tp_params_clear(&mut slot, 1) };
}

#[test]
fn test_assign_takes_string_ownership() {
    let mut slot = tp_param_t::default();
    let owned = unsafe { libc::strdup(c"payload".as_ptr()) };
    let value = tp_param_value_t { s: owned };
    let ret = unsafe { tp_param_assign(&mut slot, c"s".as_ptr(), TP_PARAM_STRING, value) };
    assert_eq!(ret, 0);
    assert_eq!(unsafe { slot.value.s }, owned);

    // The slot frees it.
    unsafe { tp_params_clear(&mut slot, 1) };
    assert!(unsafe { slot.value.s }.is_null());
}

#[test]
fn test_assign_rejects_bad_input() {
    let mut slot = tp_param_t::default();
    let value = tp_param_value_t::default();

    let long = vec![b'x' as c_char; TP_FIELD_LENGTH]
        .into_iter()
        .chain([0])
        .collect::<Vec<c_char>>();
    let ret = unsafe { tp_param_assign(&mut slot, long.as_ptr(), TP_PARAM_LLONG, value) };
    assert_eq!(ret, -1);
    assert_eq!(tp_get_last_error_code(), TP_ERR_INTERNAL_ERROR);

    let ret = unsafe { tp_param_assign(&mut slot, c"n".as_ptr(), 99, value) };
    assert_eq!(ret, -1);
    assert_eq!(tp_get_last_error_code(), TP_ERR_INTERNAL_ERROR);

    let ret = unsafe { tp_param_assign(ptr::null_mut(), c"n".as_ptr(), TP_PARAM_LLONG, value) };
    assert_eq!(ret, -1);
    assert_eq!(tp_get_last_error_code(), TP_ERR_INVALID_ARG);

    // The slot was never touched.
    assert_eq!(slot.field_bytes(), b"");
    assert_eq!(slot.type_, 0);
}

#[test]
fn test_assign_from_string() {
    let mut slot = tp_param_t::default();
    let ret = unsafe {
        tp_param_assign_from_string(&mut slot, c"n".as_ptr(), TP_PARAM_LLONG, c" -12".as_ptr())
    };
    assert_eq!(ret, 0);
    assert_eq!(tp_get_last_error_code(), TP_ERR_OK);
    assert_eq!(unsafe { slot.value.l }, -12);

    let ret = unsafe {
        tp_param_assign_from_string(&mut slot, c"b".as_ptr(), TP_PARAM_BOOLEAN, c"0".as_ptr())
    };
    assert_eq!(ret, 0);
    assert_eq!(slot.field_bytes(), b"b");
    assert_eq!(unsafe { slot.value.b }, 0);

    let ret = unsafe {
        tp_param_assign_from_string(&mut slot, c"s".as_ptr(), TP_PARAM_STRING, c"text".as_ptr())
    };
    assert_eq!(ret, 0);
    assert_eq!(unsafe { CStr::from_ptr(slot.value.s) }.to_bytes(), b"text");
    unsafe { tp_params_clear(&mut slot, 1) };

    let ret = unsafe {
        tp_param_assign_from_string(&mut slot, c"n".as_ptr(), TP_PARAM_LLONG, c"12abc".as_ptr())
    };
    assert_eq!(ret, -1);
    assert_eq!(tp_get_last_error_code(), TP_ERR_INVALID_ARG);
}

#[test]
fn test_assign_keeps_raw_bytes() {
    let mut slot = tp_param_t::default();
    let ret = unsafe {
        tp_param_assign_from_string(
            &mut slot,
            c"caf\xe9".as_ptr(),
            TP_PARAM_STRING,
            c"na\xefve".as_ptr(),
        )
    };
    assert_eq!(ret, 0);
    assert_eq!(slot.field_bytes(), b"caf\xe9");

    let mut out: *const c_char = ptr::null();
    let ret = unsafe { tp_params_get_string(&slot, 1, c"caf\xe9".as_ptr(), &mut out) };
    assert_eq!(ret, 1);
    assert_eq!(unsafe { CStr::from_ptr(out) }.to_bytes(), b"na\xefve");
    unsafe { tp_params_clear(&mut slot, 1) };

    let value = tp_param_value_t { l: 5 };
    let ret = unsafe { tp_param_assign(&mut slot, c"\xff".as_ptr(), TP_PARAM_LLONG, value) };
    assert_eq!(ret, 0);
    assert_eq!(slot.field_bytes(), b"\xff");
}
