//! Configuration for embedding the service in a host.
//!
//! The host constructs a `ServiceConfig` at registration time (or
//! deserializes one from its own configuration source) and passes it to
//! `QueryService::from_config` / `register_channel`.

use channel::DEFAULT_CHANNEL;
use serde::{Deserialize, Serialize};

/// Built-in capabilities a host can enable or disable
pub const BUILTIN_CAPABILITIES: &[&str] = &["getPlatformVersion"];

/// Meta capabilities that are always available but not exposed in capability lists
pub const META_CAPABILITIES: &[&str] = &["listCapabilities"];

/// Service configuration supplied by the host
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
  /// Channel name the service is bound under (default: "caplink")
  pub channel: String,

  /// Built-in capabilities to register (default: all built-ins)
  pub capabilities: Vec<String>,
}

impl Default for ServiceConfig {
  fn default() -> Self {
    Self {
      channel: DEFAULT_CHANNEL.to_string(),
      capabilities: BUILTIN_CAPABILITIES.iter().map(|name| name.to_string()).collect(),
    }
  }
}
