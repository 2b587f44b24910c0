//! Capability query service: answers named host requests over an
//! in-process message channel.

mod capability;
mod config;
mod error;
mod platform;
mod service;

pub use capability::Capability;
pub use config::{BUILTIN_CAPABILITIES, META_CAPABILITIES, ServiceConfig};
pub use error::CapabilityError;
pub use platform::{HostProbe, PlatformProbe, PlatformVersion, platform_label};
pub use service::{QueryService, register_channel};
