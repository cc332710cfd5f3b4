//! C ABI over `typed-params`.
//!
//! Parameters live in caller-held arrays of [`types::tp_param_t`] addressed
//! by an `(array, count, capacity)` triple. Memory is managed with the C
//! allocator so arrays and strings can cross freely between C and this
//! library; release them with [`lifecycle::tp_params_free`].
//!
//! Entry points return `0` on success and `-1` on failure (readers use
//! `1`/`0`/`-1`) and leave the failure in a per-thread last-error slot, see
//! [`error`].

#![allow(clippy::missing_safety_doc)]
#![allow(clippy::not_unsafe_ptr_arg_deref)]

mod utils;

pub mod access;
pub mod assign;
pub mod error;
pub mod kind;
pub mod lifecycle;
pub mod mutate;
pub mod types;
pub mod validate;
