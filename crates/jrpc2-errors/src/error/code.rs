//! Typed JSON-RPC error codes and the catalog table.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{codes, messages};

/// A JSON-RPC error code.
///
/// Serializes as a bare integer. Any `i32` can be wrapped, since peers may
/// send codes this catalog does not know about; the named associated
/// constants cover the catalog itself.
///
/// # Example
///
/// ```rust
/// use jrpc2_errors::ErrorCode;
///
/// let code = ErrorCode::METHOD_NOT_FOUND_ERROR;
/// assert_eq!(code.value(), -32601);
/// assert_eq!(code.default_message(), Some("Method not found"));
/// assert!(code.is_pre_defined());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(transparent)]
pub struct ErrorCode(i32);

/// One row of the error catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Name of the error category.
    pub name: &'static str,
    /// Numeric code.
    pub code: ErrorCode,
    /// Default human-readable message.
    pub message: &'static str,
}

impl ErrorCode {
    /// Invalid JSON was received by the server (-32700).
    pub const PARSE_ERROR: Self = Self(codes::PARSE_ERROR);
    /// The JSON sent is not a valid Request object (-32600).
    pub const INVALID_REQUEST_ERROR: Self = Self(codes::INVALID_REQUEST_ERROR);
    /// The method does not exist or is not available (-32601).
    pub const METHOD_NOT_FOUND_ERROR: Self = Self(codes::METHOD_NOT_FOUND_ERROR);
    /// Invalid method parameter(s) (-32602).
    pub const INVALID_PARAMS_ERROR: Self = Self(codes::INVALID_PARAMS_ERROR);
    /// Internal JSON-RPC error (-32603).
    pub const INTERNAL_ERROR: Self = Self(codes::INTERNAL_ERROR);
    /// Implementation-defined server error (-32000).
    pub const SERVER_ERROR: Self = Self(codes::SERVER_ERROR);
    /// The requested data does not exist (-32001).
    pub const DATA_NOT_FOUND_ERROR: Self = Self(codes::DATA_NOT_FOUND_ERROR);
    /// The caller is not allowed to perform the operation.
    pub const PERMISSION_DENIED_ERROR: Self = Self(codes::PERMISSION_DENIED_ERROR);
    /// The operation has already been executed (-32003).
    pub const ALREADY_EXECUTED_ERROR: Self = Self(codes::ALREADY_EXECUTED_ERROR);
    /// The caller must register first (-32004).
    pub const REGISTRATION_IS_REQUIRED_ERROR: Self = Self(codes::REGISTRATION_IS_REQUIRED_ERROR);
    /// A check must be passed first (-32005).
    pub const CHECK_IS_REQUIRED_ERROR: Self = Self(codes::CHECK_IS_REQUIRED_ERROR);
    /// A call to an external service failed (-32006).
    pub const EXTERNAL_SERVICE_ERROR: Self = Self(codes::EXTERNAL_SERVICE_ERROR);

    /// Every catalog entry, standard codes first.
    ///
    /// Lookups by code take the first matching row, so a shared value
    /// resolves to the earlier entry.
    pub const CATALOG: &'static [CatalogEntry] = &[
        CatalogEntry {
            name: "ParseError",
            code: Self::PARSE_ERROR,
            message: messages::PARSE_ERROR,
        },
        CatalogEntry {
            name: "InvalidRequestError",
            code: Self::INVALID_REQUEST_ERROR,
            message: messages::INVALID_REQUEST_ERROR,
        },
        CatalogEntry {
            name: "MethodNotFoundError",
            code: Self::METHOD_NOT_FOUND_ERROR,
            message: messages::METHOD_NOT_FOUND_ERROR,
        },
        CatalogEntry {
            name: "InvalidParamsError",
            code: Self::INVALID_PARAMS_ERROR,
            message: messages::INVALID_PARAMS_ERROR,
        },
        CatalogEntry {
            name: "InternalError",
            code: Self::INTERNAL_ERROR,
            message: messages::INTERNAL_ERROR,
        },
        CatalogEntry {
            name: "ServerError",
            code: Self::SERVER_ERROR,
            message: messages::SERVER_ERROR,
        },
        CatalogEntry {
            name: "DataNotFoundError",
            code: Self::DATA_NOT_FOUND_ERROR,
            message: messages::DATA_NOT_FOUND_ERROR,
        },
        CatalogEntry {
            name: "PermissionDeniedError",
            code: Self::PERMISSION_DENIED_ERROR,
            message: messages::PERMISSION_DENIED_ERROR,
        },
        CatalogEntry {
            name: "AlreadyExecutedError",
            code: Self::ALREADY_EXECUTED_ERROR,
            message: messages::ALREADY_EXECUTED_ERROR,
        },
        CatalogEntry {
            name: "RegistrationIsRequiredError",
            code: Self::REGISTRATION_IS_REQUIRED_ERROR,
            message: messages::REGISTRATION_IS_REQUIRED_ERROR,
        },
        CatalogEntry {
            name: "CheckIsRequiredError",
            code: Self::CHECK_IS_REQUIRED_ERROR,
            message: messages::CHECK_IS_REQUIRED_ERROR,
        },
        CatalogEntry {
            name: "ExternalServiceError",
            code: Self::EXTERNAL_SERVICE_ERROR,
            message: messages::EXTERNAL_SERVICE_ERROR,
        },
    ];

    /// Wrap a raw code.
    #[must_use]
    pub const fn new(code: i32) -> Self {
        Self(code)
    }

    /// The raw integer value.
    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }

    /// The catalog row for this code, if it is a catalog code.
    #[must_use]
    pub fn entry(self) -> Option<&'static CatalogEntry> {
        Self::CATALOG.iter().find(|entry| entry.code == self)
    }

    /// The default message for this code, if it is a catalog code.
    #[must_use]
    pub fn default_message(self) -> Option<&'static str> {
        self.entry().map(|entry| entry.message)
    }

    /// The catalog name for this code, if it is a catalog code.
    #[must_use]
    pub fn name(self) -> Option<&'static str> {
        self.entry().map(|entry| entry.name)
    }

    /// Whether more than one catalog row uses this code.
    #[must_use]
    pub fn is_shared(self) -> bool {
        Self::CATALOG.iter().filter(|entry| entry.code == self).count() > 1
    }

    /// Whether the code falls in the range reserved by JSON-RPC 2.0
    /// (-32768 to -32000).
    #[must_use]
    pub const fn is_reserved(self) -> bool {
        self.0 >= codes::RESERVED_MIN && self.0 <= codes::RESERVED_MAX
    }

    /// Whether the code is one of the five errors pre-defined by JSON-RPC 2.0.
    #[must_use]
    pub const fn is_pre_defined(self) -> bool {
        matches!(
            self.0,
            codes::PARSE_ERROR
                | codes::INVALID_REQUEST_ERROR
                | codes::METHOD_NOT_FOUND_ERROR
                | codes::INVALID_PARAMS_ERROR
                | codes::INTERNAL_ERROR
        )
    }

    /// Whether the code falls in the implementation-defined server error
    /// range (-32099 to -32000).
    #[must_use]
    pub const fn is_server_error(self) -> bool {
        self.0 >= codes::SERVER_ERROR_END && self.0 <= codes::SERVER_ERROR_START
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for ErrorCode {
    fn from(code: i32) -> Self {
        Self(code)
    }
}

impl From<ErrorCode> for i32 {
    fn from(code: ErrorCode) -> Self {
        code.0
    }
}

impl PartialEq<i32> for ErrorCode {
    fn eq(&self, other: &i32) -> bool {
        self.0 == *other
    }
}
