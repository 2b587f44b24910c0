use thiserror::Error;

/// Failure a capability surfaces to the caller.
///
/// An unknown method is not a failure: the service answers it with an
/// explicit not-implemented response instead.
#[derive(Debug, Error)]
pub enum CapabilityError {
  #[error("Environment query failed: {0}")]
  Environment(String),
}
