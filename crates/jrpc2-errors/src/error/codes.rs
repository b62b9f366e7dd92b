//! Standard JSON-RPC and application error codes.
//!
//! This module defines the raw `i32` values used in the `code` member of
//! JSON-RPC 2.0 error objects. The typed equivalents live on
//! [`ErrorCode`](super::ErrorCode).

/// Invalid JSON was received by the server.
///
/// An error occurred on the server while parsing the JSON text.
pub const PARSE_ERROR: i32 = -32700;

/// The JSON sent is not a valid Request object.
pub const INVALID_REQUEST_ERROR: i32 = -32600;

/// The method does not exist or is not available.
pub const METHOD_NOT_FOUND_ERROR: i32 = -32601;

/// Invalid method parameter(s).
pub const INVALID_PARAMS_ERROR: i32 = -32602;

/// Internal JSON-RPC error.
pub const INTERNAL_ERROR: i32 = -32603;

/// Reserved for implementation-defined server errors.
pub const SERVER_ERROR: i32 = -32000;

// Application codes

/// The requested data does not exist.
pub const DATA_NOT_FOUND_ERROR: i32 = -32001;

/// The caller is not allowed to perform the operation.
///
/// Shares its value with [`INVALID_PARAMS_ERROR`] unless the
/// `distinct-permission-denied` feature is enabled.
#[cfg(not(feature = "distinct-permission-denied"))]
pub const PERMISSION_DENIED_ERROR: i32 = -32602;

/// The caller is not allowed to perform the operation.
#[cfg(feature = "distinct-permission-denied")]
pub const PERMISSION_DENIED_ERROR: i32 = -32002;

/// The operation has already been executed.
pub const ALREADY_EXECUTED_ERROR: i32 = -32003;

/// The caller must register first.
pub const REGISTRATION_IS_REQUIRED_ERROR: i32 = -32004;

/// A check must be passed first.
pub const CHECK_IS_REQUIRED_ERROR: i32 = -32005;

/// A call to an external service failed.
pub const EXTERNAL_SERVICE_ERROR: i32 = -32006;

// Ranges

/// Lowest code reserved by the JSON-RPC 2.0 specification.
pub const RESERVED_MIN: i32 = -32768;

/// Highest code reserved by the JSON-RPC 2.0 specification.
pub const RESERVED_MAX: i32 = -32000;

/// Server error range start.
pub const SERVER_ERROR_START: i32 = -32000;

/// Server error range end.
pub const SERVER_ERROR_END: i32 = -32099;
