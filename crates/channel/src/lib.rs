mod channel;
mod error;
mod request;
mod response;

pub use channel::{DEFAULT_CHANNEL, Handler, MessageChannel};
pub use error::ChannelError;
pub use request::Request;
pub use response::Response;
