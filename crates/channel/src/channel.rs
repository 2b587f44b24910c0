use crate::error::ChannelError;
use crate::request::Request;
use crate::response::Response;
use std::sync::Arc;

/// Channel name used when the host does not pick its own.
pub const DEFAULT_CHANNEL: &str = "caplink";

/// Receiving side of a message channel.
pub trait Handler: Send + Sync {
    fn handle(&self, request: Request) -> Response;
}

/// A named in-process boundary between a host and a handler.
///
/// Bound once at host registration time; the host keeps the channel and
/// routes requests through it by reference. The channel itself holds no
/// mutable state, so concurrent invocations need no locking.
pub struct MessageChannel {
    name: String,
    handler: Arc<dyn Handler>,
}

impl MessageChannel {
    pub fn bind(name: impl Into<String>, handler: Arc<dyn Handler>) -> Result<Self, ChannelError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ChannelError::EmptyName);
        }
        Ok(Self { name, handler })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Deliver one request and return its single response.
    pub fn invoke(&self, request: Request) -> Response {
        self.handler.handle(request)
    }

    /// Deliver one JSON-encoded request and return the JSON-encoded
    /// response, for hosts that hand over serialized payloads.
    pub fn invoke_json(&self, payload: &str) -> Result<String, ChannelError> {
        let request: Request = serde_json::from_str(payload)?;
        let response = self.invoke(request);
        Ok(serde_json::to_string(&response)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Echo;

    impl Handler for Echo {
        fn handle(&self, request: Request) -> Response {
            Response::success(request.method)
        }
    }

    #[test]
    fn bind_rejects_empty_name() {
        let result = MessageChannel::bind("", Arc::new(Echo));
        assert!(matches!(result, Err(ChannelError::EmptyName)));
    }

    #[test]
    fn invoke_routes_to_the_handler() {
        let channel = MessageChannel::bind(DEFAULT_CHANNEL, Arc::new(Echo)).unwrap();
        assert_eq!(channel.name(), DEFAULT_CHANNEL);

        let response = channel.invoke(Request::new("ping"));
        assert_eq!(response.value().and_then(|v| v.as_str()), Some("ping"));
    }

    #[test]
    fn invoke_json_round_trips() {
        let channel = MessageChannel::bind(DEFAULT_CHANNEL, Arc::new(Echo)).unwrap();
        let payload = channel.invoke_json(r#"{"method":"ping"}"#).unwrap();
        assert_eq!(payload, r#"{"status":"success","value":"ping"}"#);
    }

    #[test]
    fn invoke_json_rejects_malformed_payloads() {
        let channel = MessageChannel::bind(DEFAULT_CHANNEL, Arc::new(Echo)).unwrap();
        let result = channel.invoke_json("{not json");
        assert!(matches!(result, Err(ChannelError::Serialization(_))));
    }
}
