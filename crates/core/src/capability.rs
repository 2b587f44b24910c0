use crate::error::CapabilityError;
use serde_json::{Map, Value};

/// A named operation the service can perform on request.
///
/// Implementations hold no mutable state after construction; `invoke` may
/// be called concurrently from multiple host threads.
pub trait Capability: Send + Sync {
  /// Method name this capability answers to
  fn name(&self) -> &str;

  /// Perform the operation.
  ///
  /// `arguments` is the opaque key-value mapping from the request;
  /// capabilities that take no arguments ignore it.
  fn invoke(&self, arguments: &Map<String, Value>) -> Result<Value, CapabilityError>;
}
