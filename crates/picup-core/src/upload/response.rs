//! Parse the endpoint's reply into a hosted url or an upload error.

use crate::error::UploadError;
use serde::Deserialize;
use serde_json::Value;

const DEFAULT_FAILURE_MESSAGE: &str = "Upload failed";

#[derive(Debug, Deserialize)]
struct UploadResponse {
    #[serde(default)]
    success: Value,
    #[serde(default)]
    result: Value,
    #[serde(default)]
    message: Value,
}

/// JSON truthiness: `false`, `null`, `0` and `""` are falsy.
fn is_truthy(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Interpret an HTTP status and body from the upload endpoint.
///
/// Success requires status 200 and a truthy `success`; the first element of
/// `result` is the hosted url.
pub fn parse_response(code: u32, body: &[u8]) -> Result<String, UploadError> {
    if code != 200 {
        return Err(UploadError::Status {
            code,
            body: String::from_utf8_lossy(body).trim().to_string(),
        });
    }

    let parsed: UploadResponse =
        serde_json::from_slice(body).map_err(|e| UploadError::InvalidResponse {
            reason: e.to_string(),
        })?;

    if !is_truthy(&parsed.success) {
        let message = match parsed.message {
            Value::String(s) if !s.is_empty() => s,
            _ => DEFAULT_FAILURE_MESSAGE.to_string(),
        };
        return Err(UploadError::Rejected { message });
    }

    match parsed.result.get(0) {
        Some(Value::String(url)) => Ok(url.clone()),
        _ => Err(UploadError::InvalidResponse {
            reason: "response has no result url".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_returns_first_result() {
        let body = br#"{"success":true,"result":["http://cdn.io/x.png","http://cdn.io/y.png"]}"#;
        assert_eq!(parse_response(200, body).unwrap(), "http://cdn.io/x.png");
    }

    #[test]
    fn non_200_keeps_text_body() {
        match parse_response(500, b"internal error\n") {
            Err(UploadError::Status { code, body }) => {
                assert_eq!(code, 500);
                assert_eq!(body, "internal error");
            }
            other => panic!("expected Status, got {other:?}"),
        }
    }

    #[test]
    fn success_false_uses_message() {
        let body = br#"{"success":false,"message":"image not found"}"#;
        match parse_response(200, body) {
            Err(UploadError::Rejected { message }) => assert_eq!(message, "image not found"),
            other => panic!("expected Rejected, got {other:?}"),
        }
    }

    #[test]
    fn success_false_without_message_uses_default() {
        for body in [
            &br#"{"success":false}"#[..],
            &br#"{"success":false,"message":""}"#[..],
            &br#"{"success":0,"result":["x"]}"#[..],
            &br#"{"result":["x"]}"#[..],
        ] {
            match parse_response(200, body) {
                Err(UploadError::Rejected { message }) => assert_eq!(message, "Upload failed"),
                other => panic!("expected Rejected, got {other:?}"),
            }
        }
    }

    #[test]
    fn truthy_success_values() {
        assert!(parse_response(200, br#"{"success":1,"result":["u"]}"#).is_ok());
        assert!(parse_response(200, br#"{"success":"yes","result":["u"]}"#).is_ok());
        assert!(parse_response(200, br#"{"success":{},"result":["u"]}"#).is_ok());
    }

    #[test]
    fn missing_or_empty_result_is_invalid() {
        for body in [
            &br#"{"success":true}"#[..],
            &br#"{"success":true,"result":[]}"#[..],
            &br#"{"success":true,"result":[42]}"#[..],
        ] {
            assert!(matches!(
                parse_response(200, body),
                Err(UploadError::InvalidResponse { .. })
            ));
        }
    }

    #[test]
    fn non_json_body_is_invalid() {
        assert!(matches!(
            parse_response(200, b"<html>ok</html>"),
            Err(UploadError::InvalidResponse { .. })
        ));
    }
}
