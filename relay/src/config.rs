use std::env;

/// Relay switches, fixed for the lifetime of the running process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelayConfig {
    /// Publish angles in degrees instead of radians
    pub degrees: bool,
    /// Emit one info record per processed message
    pub verbose: bool,
}

impl Default for RelayConfig {
    fn default() -> Self {
        RelayConfig {
            degrees: true,
            verbose: true,
        }
    }
}

impl RelayConfig {
    /// Read the switches from `IMU_RELAY_DEGREES` and `IMU_RELAY_VERBOSE`.
    ///
    /// Unset or unrecognized values fall back to the defaults (both true).
    pub fn from_env() -> Self {
        RelayConfig {
            degrees: env_flag("IMU_RELAY_DEGREES", true),
            verbose: env_flag("IMU_RELAY_VERBOSE", true),
        }
    }
}

fn env_flag(name: &str, default: bool) -> bool {
    match env::var(name) {
        Ok(value) => match value.to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => true,
            "0" | "false" | "no" | "off" => false,
            _ => default,
        },
        Err(_) => default,
    }
}
