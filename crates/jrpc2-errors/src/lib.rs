//! # jrpc2-errors
//!
//! JSON-RPC 2.0 error codes, default messages and a wire-compatible error
//! value.
//!
//! This crate provides the error vocabulary for JSON-RPC servers and
//! clients:
//!
//! - **Error codes**: the standard JSON-RPC 2.0 codes plus application
//!   extension codes, as raw `i32` constants and as the typed [`ErrorCode`]
//! - **Default messages**: one human-readable message per code
//! - **Error value**: [`Error`], a `{code, message, data}` triple that
//!   serializes to the JSON-RPC `error` object and renders as its message
//! - **Null result sentinel**: [`ERR_NULL_RESULT`]
//!
//! It carries no transport, dispatch or envelope handling, and does not
//! depend on any async runtime.
//!
//! # Example
//!
//! ```rust
//! use jrpc2_errors::{Error, ErrorCode, ERR_NULL_RESULT};
//!
//! let err = Error::new(
//!     ErrorCode::INVALID_PARAMS_ERROR,
//!     "bad param",
//!     Some(serde_json::json!({ "param": "limit" })),
//! );
//! assert_eq!(err.to_string(), "bad param");
//!
//! let wire = serde_json::to_string(&err).unwrap();
//! assert_eq!(wire, r#"{"code":-32602,"message":"bad param","data":{"param":"limit"}}"#);
//!
//! assert_eq!(ERR_NULL_RESULT.to_string(), "result is null");
//! ```
//!
//! # Feature Flags
//!
//! - `fancy-errors`: rich terminal reports through `miette/fancy`
//! - `schemars`: derive `JsonSchema` for [`Error`] and [`ErrorCode`]
//! - `distinct-permission-denied`: give
//!   [`ErrorCode::PERMISSION_DENIED_ERROR`] the code -32002 instead of
//!   sharing -32602 with [`ErrorCode::INVALID_PARAMS_ERROR`]

#![deny(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]

pub mod error;

// Re-export commonly used types at the crate root
pub use error::{
    codes, messages, CatalogEntry, Error, ErrorCode, NullResult, NullResultExt, ERR_NULL_RESULT,
};

/// Prelude module for convenient imports.
///
/// # Example
///
/// ```rust
/// use jrpc2_errors::prelude::*;
///
/// let err = Error::from_code(ErrorCode::INTERNAL_ERROR);
/// assert_eq!(err.to_string(), "Internal error");
/// ```
pub mod prelude {
    pub use crate::error::{Error, ErrorCode, NullResult, NullResultExt, ERR_NULL_RESULT};
}
