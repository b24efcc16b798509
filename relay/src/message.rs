use nalgebra as na;
use serde::Deserialize;

/// Wire quaternion (x, y, z, w), 64-bit floats.
///
/// Not validated: unit norm is the upstream driver's contract, and a
/// degenerate quaternion flows through conversion unchanged.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Quat {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl Quat {
    pub fn as_quaternion(&self) -> na::Quaternion<f64> {
        na::Quaternion::new(self.w, self.x, self.y, self.z)
    }
}

/// Inbound orientation-bearing sensor message.
///
/// Only the orientation field matters to the relay; rates and accelerations
/// ride along on the wire but are not republished. A message without an
/// orientation is a hard error for the relay, never defaulted.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ImuMessage {
    #[serde(default)]
    pub orientation: Option<Quat>,
    /// Body-frame angular velocity (x, y, z) in rad/s, if the driver sent it
    #[serde(default)]
    pub angular_velocity: Option<[f64; 3]>,
    /// Body-frame linear acceleration (x, y, z) in m/s², if the driver sent it
    #[serde(default)]
    pub linear_acceleration: Option<[f64; 3]>,
}

impl ImuMessage {
    /// Message carrying only an orientation
    pub fn from_orientation(x: f64, y: f64, z: f64, w: f64) -> Self {
        ImuMessage {
            orientation: Some(Quat { x, y, z, w }),
            ..Default::default()
        }
    }
}
