use orientation::{quat_to_euler, EulerAngles};

use crate::{ImuMessage, RelayConfig, RelayError, RelayResult, ScalarPublisher};

/// Bridges one inbound orientation message to three outbound scalar channels.
///
/// Each call to [`on_message`](EulerRelay::on_message) extracts the
/// quaternion, converts it, and publishes roll, pitch, yaw to their dedicated
/// channels, in that fixed order. The relay keeps no state between calls and
/// performs no batching or buffering: one message in, three values out,
/// synchronously.
pub struct EulerRelay<P: ScalarPublisher> {
    config: RelayConfig,
    roll_pub: P,
    pitch_pub: P,
    yaw_pub: P,
}

impl<P: ScalarPublisher> EulerRelay<P> {
    pub fn new(config: RelayConfig, roll_pub: P, pitch_pub: P, yaw_pub: P) -> Self {
        EulerRelay {
            config,
            roll_pub,
            pitch_pub,
            yaw_pub,
        }
    }

    pub fn config(&self) -> &RelayConfig {
        &self.config
    }

    /// Handle one inbound message.
    ///
    /// Fails fast with [`RelayError::MissingOrientation`] before publishing
    /// anything if the message has no orientation. A publish failure aborts
    /// the rest of this message's processing; the three channels are
    /// independent topics, so consumers must not assume cross-channel
    /// atomicity either way.
    pub fn on_message(&mut self, msg: &ImuMessage) -> RelayResult<EulerAngles> {
        let quat = msg.orientation.ok_or(RelayError::MissingOrientation)?;

        let mut angles = quat_to_euler(&quat.as_quaternion());
        if self.config.degrees {
            angles = angles.to_degrees();
        }

        self.roll_pub.publish(angles.roll)?;
        self.pitch_pub.publish(angles.pitch)?;
        self.yaw_pub.publish(angles.yaw)?;

        if self.config.verbose {
            log::info!(
                "\n\tYaw: {}\n\tPitch: {}\n\tRoll: {}\n-------------------------------",
                angles.yaw,
                angles.pitch,
                angles.roll
            );
        }

        Ok(angles)
    }
}
