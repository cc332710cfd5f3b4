use std::ffi::{CStr, c_char, c_int};

use typed_params::ParamKind;

/// Textual name of a raw type tag; `"unknown"` when out of range.
///
/// The returned string is static and must not be freed.
#[unsafe(no_mangle)]
pub extern "C" fn tp_param_type_to_string(type_: c_int) -> *const c_char {
    let name: &'static CStr = match ParamKind::from_raw(type_) {
        Some(ParamKind::Int) => c"int",
        Some(ParamKind::UInt) => c"uint",
        Some(ParamKind::LLong) => c"llong",
        Some(ParamKind::ULLong) => c"ullong",
        Some(ParamKind::Double) => c"double",
        Some(ParamKind::Boolean) => c"boolean",
        Some(ParamKind::String) => c"string",
        None => c"unknown",
    };
    name.as_ptr()
}

#[cfg(test)]
mod tests {
    use super::*;
    use typed_params::kind::type_name;

    #[test]
    fn test_matches_core_names() {
        for raw in -1..10 {
            let name = unsafe { CStr::from_ptr(tp_param_type_to_string(raw)) };
            assert_eq!(name.to_str().unwrap(), type_name(raw));
        }
    }
}
