use thiserror::Error;

/// Error surfaced by a transport's publish primitive.
#[derive(Error, Debug)]
#[error("publish on '{channel}' failed: {message}")]
pub struct PublishError {
    /// Channel the value was headed for
    pub channel: String,
    /// Transport-specific detail
    pub message: String,
}

impl PublishError {
    pub fn new(channel: impl Into<String>, message: impl Into<String>) -> Self {
        PublishError {
            channel: channel.into(),
            message: message.into(),
        }
    }
}

/// Outbound seam to the pub/sub transport: one named channel carrying a
/// single 64-bit float per message.
///
/// Delivery is fire-and-forget: a successful return means the value was
/// handed to the transport, not that any consumer received it.
pub trait ScalarPublisher {
    /// Channel name, for diagnostics
    fn channel(&self) -> &str;

    /// Hand one value to the transport
    fn publish(&mut self, value: f64) -> Result<(), PublishError>;
}
