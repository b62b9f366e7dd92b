//! Fuzz target for JSON-RPC error object parsing.
//!
//! Parses arbitrary bytes as an error object and checks that a parsed
//! error renders as its message, survives re-serialization, and that
//! catalog lookups agree with each other.

#![no_main]

use jrpc2_errors::{Error, ErrorCode};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(err) = serde_json::from_slice::<Error>(data) {
        assert_eq!(err.to_string(), err.message);
        assert_ne!(err.data, Some(serde_json::Value::Null));

        let serialized = serde_json::to_string(&err).expect("parsed error must serialize");
        let reparsed: Error =
            serde_json::from_str(&serialized).expect("serialized error must parse");
        assert_eq!(reparsed, err);

        let code = err.code;
        assert_eq!(code.name().is_some(), code.default_message().is_some());
        if code.name().is_some() {
            assert!(code.is_reserved());
        }
    }

    // Parse failures always map onto one of the three conversion codes
    if let Err(e) = serde_json::from_slice::<serde_json::Value>(data) {
        let err = Error::from(e);
        assert!(
            [
                ErrorCode::PARSE_ERROR,
                ErrorCode::INVALID_PARAMS_ERROR,
                ErrorCode::INTERNAL_ERROR,
            ]
            .contains(&err.code),
            "unexpected code {}",
            err.code
        );
        assert_eq!(err.code.default_message(), Some(err.message.as_str()));
    }
});
