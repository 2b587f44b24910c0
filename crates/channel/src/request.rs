use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single query delivered across the message channel.
///
/// `arguments` is an opaque key-value mapping; it is optional on the wire
/// and capabilities that take no arguments ignore it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Request {
    pub method: String,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub arguments: Map<String, Value>,
}

impl Request {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            arguments: Map::new(),
        }
    }

    pub fn with_arguments(method: impl Into<String>, arguments: Map<String, Value>) -> Self {
        Self {
            method: method.into(),
            arguments,
        }
    }

    /// Look up a single argument by key
    pub fn argument(&self, key: &str) -> Option<&Value> {
        self.arguments.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arguments_default_to_empty() {
        let request: Request = serde_json::from_str(r#"{"method":"getPlatformVersion"}"#).unwrap();
        assert_eq!(request.method, "getPlatformVersion");
        assert!(request.arguments.is_empty());
    }

    #[test]
    fn arguments_survive_round_trip() {
        let mut arguments = Map::new();
        arguments.insert("verbose".to_string(), Value::Bool(true));
        let request = Request::with_arguments("getPlatformVersion", arguments);

        let wire = serde_json::to_string(&request).unwrap();
        let decoded: Request = serde_json::from_str(&wire).unwrap();
        assert_eq!(decoded.argument("verbose"), Some(&Value::Bool(true)));
    }

    #[test]
    fn empty_arguments_are_not_serialized() {
        let wire = serde_json::to_string(&Request::new("ping")).unwrap();
        assert_eq!(wire, r#"{"method":"ping"}"#);
    }
}
