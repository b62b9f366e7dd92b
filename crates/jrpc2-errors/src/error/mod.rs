//! The JSON-RPC error catalog.
//!
//! This module provides the error vocabulary a JSON-RPC server or client
//! uses to report faults outward:
//!
//! - **Codes**: the five pre-defined JSON-RPC 2.0 codes, the generic server
//!   error, and six application codes, as raw [`codes`] and typed [`ErrorCode`]
//! - **Messages**: the default text for each code in [`messages`]
//! - **Error value**: [`Error`], pairing a code, a message and optional data
//! - **Null result**: the [`ERR_NULL_RESULT`] sentinel for calls that
//!   succeed without a result
//!
//! Nothing here raises or recovers anything. Handlers build an [`Error`]
//! when they detect a fault; the host serializes it into the `error`
//! member of the response.
//!
//! # Catalog
//!
//! | Name | Code | Default message |
//! |------|------|-----------------|
//! | `PARSE_ERROR` | -32700 | Parse error |
//! | `INVALID_REQUEST_ERROR` | -32600 | Invalid request |
//! | `METHOD_NOT_FOUND_ERROR` | -32601 | Method not found |
//! | `INVALID_PARAMS_ERROR` | -32602 | Invalid params |
//! | `INTERNAL_ERROR` | -32603 | Internal error |
//! | `SERVER_ERROR` | -32000 | Server error |
//! | `DATA_NOT_FOUND_ERROR` | -32001 | Data not found |
//! | `PERMISSION_DENIED_ERROR` | -32602 (-32002 with `distinct-permission-denied`) | Permission denied |
//! | `ALREADY_EXECUTED_ERROR` | -32003 | Already executed |
//! | `REGISTRATION_IS_REQUIRED_ERROR` | -32004 | Registration is required |
//! | `CHECK_IS_REQUIRED_ERROR` | -32005 | Check is required |
//! | `EXTERNAL_SERVICE_ERROR` | -32006 | Error occurred when calling external service, try again later |
//!
//! # Example
//!
//! ```rust
//! use jrpc2_errors::error::{Error, ErrorCode};
//!
//! fn lookup(id: u64) -> Result<String, Error> {
//!     Err(Error::from_code(ErrorCode::DATA_NOT_FOUND_ERROR)
//!         .with_data(serde_json::json!({ "id": id })))
//! }
//!
//! let err = lookup(7).unwrap_err();
//! assert_eq!(err.code.value(), -32001);
//! assert_eq!(err.to_string(), "Data not found");
//! ```

mod code;
pub mod codes;
pub mod messages;
mod null_result;
mod types;

// Re-export all public types
pub use code::{CatalogEntry, ErrorCode};
pub use null_result::{ERR_NULL_RESULT, NullResult, NullResultExt};
pub use types::Error;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_size_is_small() {
        // Result<T, Error> is passed around by every handler.
        let size = std::mem::size_of::<Error>();
        assert!(size <= 64, "Error is {size} bytes, should be <= 64 bytes.");
    }

    #[test]
    fn test_types_are_thread_safe() {
        fn assert_send_sync<T: Send + Sync + 'static>() {}

        assert_send_sync::<Error>();
        assert_send_sync::<ErrorCode>();
        assert_send_sync::<CatalogEntry>();
        assert_send_sync::<NullResult>();
    }

    #[test]
    fn test_raw_and_typed_codes_agree() {
        assert_eq!(ErrorCode::PARSE_ERROR, codes::PARSE_ERROR);
        assert_eq!(ErrorCode::INVALID_REQUEST_ERROR, codes::INVALID_REQUEST_ERROR);
        assert_eq!(ErrorCode::METHOD_NOT_FOUND_ERROR, codes::METHOD_NOT_FOUND_ERROR);
        assert_eq!(ErrorCode::INVALID_PARAMS_ERROR, codes::INVALID_PARAMS_ERROR);
        assert_eq!(ErrorCode::INTERNAL_ERROR, codes::INTERNAL_ERROR);
        assert_eq!(ErrorCode::SERVER_ERROR, codes::SERVER_ERROR);
        assert_eq!(ErrorCode::DATA_NOT_FOUND_ERROR, codes::DATA_NOT_FOUND_ERROR);
        assert_eq!(ErrorCode::PERMISSION_DENIED_ERROR, codes::PERMISSION_DENIED_ERROR);
        assert_eq!(ErrorCode::ALREADY_EXECUTED_ERROR, codes::ALREADY_EXECUTED_ERROR);
        assert_eq!(
            ErrorCode::REGISTRATION_IS_REQUIRED_ERROR,
            codes::REGISTRATION_IS_REQUIRED_ERROR
        );
        assert_eq!(ErrorCode::CHECK_IS_REQUIRED_ERROR, codes::CHECK_IS_REQUIRED_ERROR);
        assert_eq!(ErrorCode::EXTERNAL_SERVICE_ERROR, codes::EXTERNAL_SERVICE_ERROR);
    }

    #[test]
    fn test_every_catalog_code_builds_its_default_error() {
        for entry in ErrorCode::CATALOG {
            let err = Error::new(entry.code, entry.message, None);
            assert_eq!(err.to_string(), entry.message);
            assert!(entry.code.is_reserved());
        }
    }
}
