//! Request dispatch for the capability query service.

use crate::capability::Capability;
use crate::config::ServiceConfig;
use crate::platform::PlatformVersion;
use channel::{ChannelError, Handler, MessageChannel, Request, Response};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// The capability query service.
///
/// Holds a lookup table of capability name to handler. Constructed once at
/// host-defined registration time; immutable afterwards, so a shared
/// reference can serve concurrent requests without locking.
pub struct QueryService {
  capabilities: HashMap<String, Box<dyn Capability>>,
}

impl QueryService {
  /// Create a service with all built-in capabilities registered
  pub fn new() -> Self {
    let mut service = Self::empty();
    service.register(Box::new(PlatformVersion::new()));
    service
  }

  /// Create a service with no capabilities
  pub fn empty() -> Self {
    Self {
      capabilities: HashMap::new(),
    }
  }

  /// Create a service with the built-ins the host configuration enables
  pub fn from_config(config: &ServiceConfig) -> Self {
    let mut service = Self::empty();
    for name in &config.capabilities {
      match name.as_str() {
        "getPlatformVersion" => service.register(Box::new(PlatformVersion::new())),
        other => warn!("Unknown capability in config: {}", other),
      }
    }
    service
  }

  /// Register a capability under its own name, replacing any existing
  /// capability with the same name.
  pub fn register(&mut self, capability: Box<dyn Capability>) {
    self.capabilities.insert(capability.name().to_string(), capability);
  }

  /// Sorted names of the registered capabilities
  pub fn capability_names(&self) -> Vec<&str> {
    let mut names: Vec<&str> = self.capabilities.keys().map(String::as_str).collect();
    names.sort_unstable();
    names
  }

  /// Handle an incoming request.
  ///
  /// Every request yields exactly one response: the capability's value, an
  /// explicit not-implemented marker for unknown methods, or an error for
  /// the empty method name and failed environment queries.
  pub fn handle(&self, request: Request) -> Response {
    debug!("Handling request: {}", request.method);

    if request.method.is_empty() {
      warn!("Rejected request with empty method name");
      return Response::error("invalid method name");
    }

    // Meta capability, always available
    if request.method == "listCapabilities" {
      return Response::success(self.capability_names());
    }

    match self.capabilities.get(request.method.as_str()) {
      Some(capability) => match capability.invoke(&request.arguments) {
        Ok(value) => Response::success(value),
        Err(e) => {
          warn!("Capability {} failed: {}", request.method, e);
          Response::error(&e.to_string())
        }
      },
      None => {
        debug!("Method not implemented: {}", request.method);
        Response::NotImplemented
      }
    }
  }
}

impl Default for QueryService {
  fn default() -> Self {
    Self::new()
  }
}

impl Handler for QueryService {
  fn handle(&self, request: Request) -> Response {
    QueryService::handle(self, request)
  }
}

/// Construct the service from host configuration and bind it to the
/// configured channel name.
pub fn register_channel(config: &ServiceConfig) -> Result<MessageChannel, ChannelError> {
  let service = QueryService::from_config(config);
  MessageChannel::bind(config.channel.clone(), Arc::new(service))
}
