//! The null result sentinel.
//!
//! A call can succeed at the protocol level and still carry no result.
//! [`NullResult`] names that condition so callers can match on it instead
//! of comparing strings.

use miette::Diagnostic;
use serde_json::Value;
use thiserror::Error;

use super::code::ErrorCode;
use super::messages;
use super::types::Error;

/// A successful call produced no result.
#[derive(Error, Diagnostic, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[error("{}", messages::NULL_RESULT)]
#[diagnostic(
    code(jsonrpc::null_result),
    help("The call succeeded but the peer returned no result payload")
)]
pub struct NullResult;

/// The null result sentinel value.
pub const ERR_NULL_RESULT: NullResult = NullResult;

impl From<NullResult> for Error {
    fn from(err: NullResult) -> Self {
        tracing::trace!("Reporting null result as server error");
        Self::new(ErrorCode::SERVER_ERROR, err.to_string(), None)
    }
}

/// Extension trait for turning an absent result into [`NullResult`].
///
/// # Example
///
/// ```rust
/// use jrpc2_errors::{NullResultExt, ERR_NULL_RESULT};
///
/// let result: Option<u32> = None;
/// assert_eq!(result.or_null_result(), Err(ERR_NULL_RESULT));
///
/// let value = serde_json::json!({"ok": true});
/// assert!(value.or_null_result().is_ok());
/// ```
pub trait NullResultExt<T> {
    /// Return the result, or [`ERR_NULL_RESULT`] if it is absent.
    fn or_null_result(self) -> Result<T, NullResult>;
}

impl<T> NullResultExt<T> for Option<T> {
    fn or_null_result(self) -> Result<T, NullResult> {
        self.ok_or(ERR_NULL_RESULT)
    }
}

impl NullResultExt<Value> for Value {
    fn or_null_result(self) -> Result<Value, NullResult> {
        if self.is_null() {
            Err(ERR_NULL_RESULT)
        } else {
            Ok(self)
        }
    }
}
