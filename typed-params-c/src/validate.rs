use std::ffi::c_int;

use typed_params::{Error, validate};

use crate::types::{tp_param_t, tp_schema_entry_t};
use crate::utils::{params_slice, schema_slice, tp_try};

/// Checks that every parameter appears in `schema` with the same type and
/// that no name repeats. Stops at the first offending parameter.
///
/// `schema` holds `nschema` rows; a row with a NULL name ends it early.
/// Failures are recorded but not dispatched.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn tp_params_validate(
    params: *const tp_param_t,
    nparams: c_int,
    schema: *const tp_schema_entry_t,
    nschema: c_int,
) -> c_int {
    tracing::trace!("tp_params_validate: nparams={nparams}, nschema={nschema}");
    tp_try! { dispatch: false;
        if params.is_null() && nparams > 0 {
            return Err(Error::InvalidArgument(
                "params must not be NULL with a non-zero count".to_string(),
            ));
        }
        let params = unsafe { params_slice(params, nparams) };
        let schema = unsafe { schema_slice(schema, nschema) };
        validate::validate(params, schema)?;
    }
}
