mod bus;
mod config;
mod error;
mod message;
mod relay;

pub use bus::{PublishError, ScalarPublisher};
pub use config::RelayConfig;
pub use error::{RelayError, RelayResult};
pub use message::{ImuMessage, Quat};
pub use relay::EulerRelay;
