use crate::bus::PublishError;
use thiserror::Error;

/// Primary error type for the relay crate
#[derive(Error, Debug)]
pub enum RelayError {
    /// Inbound message carried no usable orientation field. A malformed
    /// message is an upstream-driver error: fail the message, publish
    /// nothing, never substitute a default.
    #[error("inbound message has no orientation field")]
    MissingOrientation,

    /// The transport rejected an outbound value
    #[error("transport publish failed")]
    Publish(#[from] PublishError),
}

/// Type alias for Result with RelayError
pub type RelayResult<T> = Result<T, RelayError>;
