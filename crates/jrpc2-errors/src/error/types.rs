//! The JSON-RPC error value.
//!
//! [`Error`] is what a handler builds when it detects a fault and what the
//! host server serializes into the `error` member of a response.

use std::fmt;

use miette::{Diagnostic, Severity};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_json::error::Category;
use thiserror::Error;

use super::code::ErrorCode;
use super::messages;

/// A JSON-RPC 2.0 error object.
///
/// Renders as its `message` only; the code and data never leak into the
/// text form.
///
/// # Example
///
/// ```rust
/// use jrpc2_errors::{Error, ErrorCode};
///
/// let err = Error::new(ErrorCode::INVALID_PARAMS_ERROR, "bad param", None);
/// assert_eq!(err.to_string(), "bad param");
///
/// let json = serde_json::to_value(&err).unwrap();
/// assert_eq!(json, serde_json::json!({"code": -32602, "message": "bad param"}));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[error("{message}")]
pub struct Error {
    /// A number that indicates the error type that occurred.
    pub code: ErrorCode,
    /// A short description of the error.
    ///
    /// Should be limited to a concise single sentence.
    pub message: String,
    /// Additional information about the error.
    ///
    /// `None` is omitted on the wire. A peer sending `"data": null` is read
    /// back as `None`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl Error {
    /// Create an error from its three parts.
    ///
    /// No validation is performed on the code or the message.
    pub fn new(code: impl Into<ErrorCode>, message: impl Into<String>, data: Option<Value>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            data,
        }
    }

    /// Create an error carrying the code's default catalog message.
    ///
    /// Codes outside the catalog get the generic "Server error" message.
    ///
    /// ```rust
    /// use jrpc2_errors::{Error, ErrorCode};
    ///
    /// assert_eq!(Error::from_code(ErrorCode::DATA_NOT_FOUND_ERROR).message, "Data not found");
    /// assert_eq!(Error::from_code(-32050).message, "Server error");
    /// ```
    pub fn from_code(code: impl Into<ErrorCode>) -> Self {
        let code = code.into();
        let message = code.default_message().unwrap_or(messages::SERVER_ERROR);
        Self::new(code, message, None)
    }

    /// Create a "parse error" (-32700).
    pub fn parse_error(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::PARSE_ERROR, message, None)
    }

    /// Create an "invalid request" error (-32600).
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::INVALID_REQUEST_ERROR, message, None)
    }

    /// Create a "method not found" error (-32601).
    pub fn method_not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::METHOD_NOT_FOUND_ERROR, message, None)
    }

    /// Create an "invalid params" error (-32602).
    pub fn invalid_params(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::INVALID_PARAMS_ERROR, message, None)
    }

    /// Create an "internal error" (-32603).
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::INTERNAL_ERROR, message, None)
    }

    /// Create a "server error" (-32000).
    pub fn server_error(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SERVER_ERROR, message, None)
    }

    /// Create a "data not found" error (-32001).
    pub fn data_not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DATA_NOT_FOUND_ERROR, message, None)
    }

    /// Create a "permission denied" error.
    pub fn permission_denied(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::PERMISSION_DENIED_ERROR, message, None)
    }

    /// Create an "already executed" error (-32003).
    pub fn already_executed(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ALREADY_EXECUTED_ERROR, message, None)
    }

    /// Create a "registration is required" error (-32004).
    pub fn registration_required(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::REGISTRATION_IS_REQUIRED_ERROR, message, None)
    }

    /// Create a "check is required" error (-32005).
    pub fn check_required(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::CHECK_IS_REQUIRED_ERROR, message, None)
    }

    /// Create an "external service" error (-32006).
    pub fn external_service(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::EXTERNAL_SERVICE_ERROR, message, None)
    }

    /// Attach additional data.
    ///
    /// If `data` cannot be represented as JSON it is dropped with a warning
    /// and the error is returned unchanged.
    ///
    /// ```rust
    /// use jrpc2_errors::Error;
    ///
    /// let err = Error::invalid_params("missing field")
    ///     .with_data(serde_json::json!({"field": "name"}));
    /// assert_eq!(err.data.unwrap()["field"], "name");
    /// ```
    pub fn with_data<T: Serialize>(mut self, data: T) -> Self {
        match serde_json::to_value(data) {
            Ok(value) => self.data = Some(value),
            Err(e) => {
                tracing::warn!(
                    code = %self.code,
                    error = %e,
                    "Dropping error data that cannot be serialized"
                );
            }
        }
        self
    }

    /// Decode the attached data into `T`.
    ///
    /// Returns `Ok(None)` when there is no data.
    pub fn data_as<T: DeserializeOwned>(&self) -> Result<Option<T>, serde_json::Error> {
        self.data.as_ref().map(T::deserialize).transpose()
    }
}

impl Diagnostic for Error {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(format!("jsonrpc::{}", self.code)))
    }

    fn severity(&self) -> Option<Severity> {
        if self.code.is_pre_defined() {
            Some(Severity::Error)
        } else {
            Some(Severity::Warning)
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        // A code used by several catalog rows cannot name its category.
        if self.code.is_shared() {
            return None;
        }
        let entry = self.code.entry()?;
        Some(Box::new(format!("{}: {}", entry.name, entry.message)))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        let category = err.classify();
        tracing::debug!(
            ?category,
            line = err.line(),
            column = err.column(),
            "Converting serde_json error to JSON-RPC error"
        );

        let code = match category {
            Category::Syntax | Category::Eof => ErrorCode::PARSE_ERROR,
            Category::Data => ErrorCode::INVALID_PARAMS_ERROR,
            Category::Io => ErrorCode::INTERNAL_ERROR,
        };
        Self::from_code(code).with_data(serde_json::json!({
            "detail": err.to_string(),
            "line": err.line(),
            "column": err.column(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_renders_message_only() {
        let err = Error::new(ErrorCode::INVALID_PARAMS_ERROR, "bad param", None);
        assert_eq!(err.to_string(), "bad param");
    }

    #[test]
    fn test_data_is_inert_to_rendering() {
        let err = Error::new(
            ErrorCode::INTERNAL_ERROR,
            "boom",
            Some(json!({"nested": {"list": [1, 2, 3], "flag": true}})),
        );
        assert_eq!(err.to_string(), "boom");
    }

    #[test]
    fn test_value_equality() {
        let a = Error::new(-32001, "missing", Some(json!({"id": 7})));
        let b = Error::new(ErrorCode::DATA_NOT_FOUND_ERROR, "missing", Some(json!({"id": 7})));
        assert_eq!(a, b);

        let c = Error::new(ErrorCode::DATA_NOT_FOUND_ERROR, "missing", None);
        assert_ne!(a, c);
    }

    #[test]
    fn test_construction_accepts_anything() {
        let err = Error::new(12345, "", None);
        assert_eq!(err.code.value(), 12345);
        assert_eq!(err.to_string(), "");
    }

    #[test]
    fn test_named_constructors() {
        let cases = [
            (Error::parse_error("m"), ErrorCode::PARSE_ERROR),
            (Error::invalid_request("m"), ErrorCode::INVALID_REQUEST_ERROR),
            (Error::method_not_found("m"), ErrorCode::METHOD_NOT_FOUND_ERROR),
            (Error::invalid_params("m"), ErrorCode::INVALID_PARAMS_ERROR),
            (Error::internal_error("m"), ErrorCode::INTERNAL_ERROR),
            (Error::server_error("m"), ErrorCode::SERVER_ERROR),
            (Error::data_not_found("m"), ErrorCode::DATA_NOT_FOUND_ERROR),
            (Error::permission_denied("m"), ErrorCode::PERMISSION_DENIED_ERROR),
            (Error::already_executed("m"), ErrorCode::ALREADY_EXECUTED_ERROR),
            (Error::registration_required("m"), ErrorCode::REGISTRATION_IS_REQUIRED_ERROR),
            (Error::check_required("m"), ErrorCode::CHECK_IS_REQUIRED_ERROR),
            (Error::external_service("m"), ErrorCode::EXTERNAL_SERVICE_ERROR),
        ];
        for (err, code) in cases {
            assert_eq!(err.code, code);
            assert_eq!(err.message, "m");
            assert!(err.data.is_none());
        }
    }

    #[test]
    fn test_from_code_uses_catalog_message() {
        assert_eq!(Error::from_code(ErrorCode::PARSE_ERROR).message, "Parse error");
        assert_eq!(
            Error::from_code(ErrorCode::EXTERNAL_SERVICE_ERROR).message,
            "Error occurred when calling external service, try again later"
        );
        assert_eq!(Error::from_code(-1).message, "Server error");
    }

    #[test]
    fn test_wire_form_omits_absent_data() {
        let err = Error::method_not_found("Method not found");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json, json!({"code": -32601, "message": "Method not found"}));
        assert!(json.get("data").is_none());
    }

    #[test]
    fn test_explicit_null_data_reads_as_absent() {
        #[derive(Debug, PartialEq, Deserialize)]
        struct Detail {
            field: String,
        }

        let parsed: Error =
            serde_json::from_str(r#"{"code":-32602,"message":"x","data":null}"#).unwrap();
        assert_eq!(parsed.data, None);
        assert_eq!(parsed.data_as::<Detail>().unwrap(), None);
        assert_eq!(parsed, Error::new(ErrorCode::INVALID_PARAMS_ERROR, "x", None));
    }

    #[test]
    fn test_null_data_built_locally_is_sent_as_null() {
        let err = Error::new(ErrorCode::SERVER_ERROR, "x", Some(Value::Null));
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json, json!({"code": -32000, "message": "x", "data": null}));
    }

    #[test]
    fn test_missing_data_deserializes_to_none() {
        let parsed: Error = serde_json::from_str(r#"{"code":-32600,"message":"Invalid request"}"#).unwrap();
        assert_eq!(parsed, Error::from_code(ErrorCode::INVALID_REQUEST_ERROR));
    }

    #[test]
    fn test_missing_message_is_rejected() {
        let result: Result<Error, _> = serde_json::from_str(r#"{"code":-32600}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_with_data_and_data_as() {
        #[derive(Debug, PartialEq, Serialize, Deserialize)]
        struct Detail {
            field: String,
            limit: u32,
        }

        let err = Error::invalid_params("too long").with_data(Detail {
            field: "name".to_string(),
            limit: 64,
        });
        let detail: Option<Detail> = err.data_as().unwrap();
        assert_eq!(
            detail,
            Some(Detail {
                field: "name".to_string(),
                limit: 64
            })
        );

        assert!(err.data_as::<Vec<u8>>().is_err());
        assert_eq!(Error::invalid_params("x").data_as::<Detail>().unwrap(), None);
    }

    #[test]
    fn test_with_data_drops_unserializable_data() {
        use std::collections::HashMap;

        let subscriber = tracing_subscriber::fmt().with_test_writer().finish();
        tracing::subscriber::with_default(subscriber, || {
            let mut bad = HashMap::new();
            bad.insert((1, 2), "tuple keys are not valid JSON object keys");

            let err = Error::internal_error("kept").with_data(bad);
            assert_eq!(err.message, "kept");
            assert!(err.data.is_none());
        });
    }

    #[test]
    fn test_from_serde_json_error() {
        let syntax = serde_json::from_str::<Value>("{not json").unwrap_err();
        let err: Error = syntax.into();
        assert_eq!(err.code, ErrorCode::PARSE_ERROR);
        assert_eq!(err.message, "Parse error");
        assert!(err.data.as_ref().unwrap()["detail"].is_string());

        let eof = serde_json::from_str::<Value>("[1, 2").unwrap_err();
        assert_eq!(Error::from(eof).code, ErrorCode::PARSE_ERROR);

        let data = serde_json::from_str::<u8>("\"text\"").unwrap_err();
        assert_eq!(Error::from(data).code, ErrorCode::INVALID_PARAMS_ERROR);
    }

    #[test]
    fn test_diagnostic() {
        let err = Error::parse_error("bad json");
        assert_eq!(Diagnostic::code(&err).unwrap().to_string(), "jsonrpc::-32700");
        assert_eq!(err.severity(), Some(Severity::Error));
        assert_eq!(err.help().unwrap().to_string(), "ParseError: Parse error");

        let err = Error::already_executed("twice");
        assert_eq!(err.severity(), Some(Severity::Warning));

        let err = Error::new(7, "custom", None);
        assert!(err.help().is_none());
    }

    #[test]
    #[cfg(not(feature = "distinct-permission-denied"))]
    fn test_shared_code_has_no_help() {
        assert!(Error::permission_denied("no role").help().is_none());
        assert!(Error::invalid_params("bad").help().is_none());
    }

    #[test]
    #[cfg(feature = "distinct-permission-denied")]
    fn test_distinct_permission_denied_help() {
        let err = Error::permission_denied("no role");
        assert_eq!(
            err.help().unwrap().to_string(),
            "PermissionDeniedError: Permission denied"
        );
        assert_eq!(
            Error::invalid_params("bad").help().unwrap().to_string(),
            "InvalidParamsError: Invalid params"
        );
    }

    #[test]
    fn test_usable_as_std_error() {
        fn fails() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
            Err(Error::data_not_found("no such user"))?;
            Ok(())
        }
        assert_eq!(fails().unwrap_err().to_string(), "no such user");
    }
}
