//! Platform version capability: answers queries about the host OS.

use crate::capability::Capability;
use crate::error::CapabilityError;
use serde_json::{Map, Value};
use sysinfo::System;

/// Source of platform facts, injectable for tests
pub trait PlatformProbe: Send + Sync {
  fn label(&self) -> String;
  fn version(&self) -> Result<String, CapabilityError>;
}

/// Probe backed by the real host environment
pub struct HostProbe;

impl PlatformProbe for HostProbe {
  fn label(&self) -> String {
    platform_label().to_string()
  }

  fn version(&self) -> Result<String, CapabilityError> {
    // OS release first, kernel release when the distribution does not
    // report one (minimal containers).
    System::os_version()
      .or_else(System::kernel_version)
      .filter(|version| !version.is_empty())
      .ok_or_else(|| CapabilityError::Environment("OS version unavailable".to_string()))
  }
}

/// Human-readable label for the compile-target OS
pub fn platform_label() -> &'static str {
  match std::env::consts::OS {
    "linux" => "Linux",
    "macos" => "macOS",
    "ios" => "iOS",
    "android" => "Android",
    "windows" => "Windows",
    "freebsd" => "FreeBSD",
    other => other,
  }
}

/// The `getPlatformVersion` capability.
///
/// Answers with `"<label> <version>"`, e.g. `"Linux 6.1.0"`.
pub struct PlatformVersion {
  probe: Box<dyn PlatformProbe>,
}

impl PlatformVersion {
  pub fn new() -> Self {
    Self {
      probe: Box::new(HostProbe),
    }
  }

  pub fn with_probe(probe: Box<dyn PlatformProbe>) -> Self {
    Self { probe }
  }
}

impl Default for PlatformVersion {
  fn default() -> Self {
    Self::new()
  }
}

impl Capability for PlatformVersion {
  fn name(&self) -> &str {
    "getPlatformVersion"
  }

  fn invoke(&self, _arguments: &Map<String, Value>) -> Result<Value, CapabilityError> {
    let version = self.probe.version()?;
    Ok(Value::String(format!("{} {}", self.probe.label(), version)))
  }
}
