//! Default messages for the catalog codes.
//!
//! Each constant pairs with the code of the same name in
//! [`codes`](super::codes).

/// Default message for [`PARSE_ERROR`](super::codes::PARSE_ERROR).
pub const PARSE_ERROR: &str = "Parse error";

/// Default message for [`INVALID_REQUEST_ERROR`](super::codes::INVALID_REQUEST_ERROR).
pub const INVALID_REQUEST_ERROR: &str = "Invalid request";

/// Default message for [`METHOD_NOT_FOUND_ERROR`](super::codes::METHOD_NOT_FOUND_ERROR).
pub const METHOD_NOT_FOUND_ERROR: &str = "Method not found";

/// Default message for [`INVALID_PARAMS_ERROR`](super::codes::INVALID_PARAMS_ERROR).
pub const INVALID_PARAMS_ERROR: &str = "Invalid params";

/// Default message for [`INTERNAL_ERROR`](super::codes::INTERNAL_ERROR).
pub const INTERNAL_ERROR: &str = "Internal error";

/// Default message for [`SERVER_ERROR`](super::codes::SERVER_ERROR).
pub const SERVER_ERROR: &str = "Server error";

/// Default message for [`DATA_NOT_FOUND_ERROR`](super::codes::DATA_NOT_FOUND_ERROR).
pub const DATA_NOT_FOUND_ERROR: &str = "Data not found";

/// Default message for [`PERMISSION_DENIED_ERROR`](super::codes::PERMISSION_DENIED_ERROR).
pub const PERMISSION_DENIED_ERROR: &str = "Permission denied";

/// Default message for [`ALREADY_EXECUTED_ERROR`](super::codes::ALREADY_EXECUTED_ERROR).
pub const ALREADY_EXECUTED_ERROR: &str = "Already executed";

/// Default message for [`REGISTRATION_IS_REQUIRED_ERROR`](super::codes::REGISTRATION_IS_REQUIRED_ERROR).
pub const REGISTRATION_IS_REQUIRED_ERROR: &str = "Registration is required";

/// Default message for [`CHECK_IS_REQUIRED_ERROR`](super::codes::CHECK_IS_REQUIRED_ERROR).
pub const CHECK_IS_REQUIRED_ERROR: &str = "Check is required";

/// Default message for [`EXTERNAL_SERVICE_ERROR`](super::codes::EXTERNAL_SERVICE_ERROR).
pub const EXTERNAL_SERVICE_ERROR: &str =
    "Error occurred when calling external service, try again later";

/// Message carried by the null result sentinel.
pub const NULL_RESULT: &str = "result is null";
