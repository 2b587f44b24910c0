use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Outcome of a single request.
///
/// Exactly one response is produced per request. An unknown method is a
/// normal outcome and answered with `NotImplemented`, never `Error`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Response {
    Success { value: Value },
    NotImplemented,
    Error { message: String },
}

impl Response {
    /// Create a success response with a typed value (serializes to JSON value)
    pub fn success<T: Serialize>(value: T) -> Self {
        Self::Success {
            value: serde_json::to_value(value).unwrap_or(Value::Null),
        }
    }

    pub fn error(message: &str) -> Self {
        Self::Error {
            message: message.to_string(),
        }
    }

    /// The success value, if this response is a success
    pub fn value(&self) -> Option<&Value> {
        match self {
            Self::Success { value } => Some(value),
            _ => None,
        }
    }

    /// The error message, if this response is an error
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error { message } => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_is_tagged_with_value() {
        let wire = serde_json::to_string(&Response::success("Linux 6.1.0")).unwrap();
        assert_eq!(wire, r#"{"status":"success","value":"Linux 6.1.0"}"#);
    }

    #[test]
    fn not_implemented_is_a_bare_marker() {
        let wire = serde_json::to_string(&Response::NotImplemented).unwrap();
        assert_eq!(wire, r#"{"status":"not_implemented"}"#);
    }

    #[test]
    fn error_carries_its_message() {
        let response = Response::error("invalid method name");
        let wire = serde_json::to_string(&response).unwrap();
        assert_eq!(wire, r#"{"status":"error","message":"invalid method name"}"#);

        let decoded: Response = serde_json::from_str(&wire).unwrap();
        assert_eq!(decoded.error_message(), Some("invalid method name"));
    }

    #[test]
    fn success_accepts_structured_values() {
        let response = Response::success(vec!["getPlatformVersion"]);
        let value = response.value().unwrap();
        assert!(value.is_array());
    }
}
