use crate::state::ApState;
use serde::{Deserialize, Serialize};

/// No error; carried on every non-`Failed` state change
pub const ERROR_NONE: i32 = 0;
/// Generic setup failure (invalid config, radio, country code, native start)
pub const ERROR_GENERAL: i32 = 1;
/// No usable channel for the requested band
pub const ERROR_NO_CHANNEL: i32 = 2;

/// Radio band the access point should operate on
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Band {
    Band2GHz,
    Band5GHz,
    /// Let the driver pick whichever band has a usable channel
    Any,
}

/// Security mode for the access point
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApSecurity {
    Open,
    Wpa2Psk { passphrase: String },
}

/// Desired access point configuration
///
/// Band/channel computation and country-code formatting happen upstream; by
/// the time a config reaches the state machine its parameters are assumed
/// validated. An absent config (`None` in [`ApCommand::Start`]) is itself a
/// valid, failing input.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApConfig {
    pub ssid: String,
    pub band: Band,
    /// Specific channel, or `None` to let the driver choose within the band
    pub channel: Option<u8>,
    pub security: ApSecurity,
}

impl ApConfig {
    /// Open network on the given band, driver-chosen channel
    pub fn open(ssid: impl Into<String>, band: Band) -> Self {
        Self {
            ssid: ssid.into(),
            band,
            channel: None,
            security: ApSecurity::Open,
        }
    }

    /// Minimal structural check; an empty SSID cannot be brought up
    pub fn is_valid(&self) -> bool {
        !self.ssid.is_empty()
    }
}

/// Commands from the caller to the state machine
///
/// These two operations are the whole public command surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ApCommand {
    /// Request the AP be brought up. `None` config is accepted and reported
    /// as a failed start, matching the contract that absence is a valid
    /// (failing) input rather than a caller error.
    Start { config: Option<ApConfig> },

    /// Request teardown. Silent no-op if nothing was started.
    Stop,
}

/// Notifications from the state machine to the listener
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ApEvent {
    /// Lifecycle state changed. `error_code` is [`ERROR_NONE`] except on
    /// [`ApState::Failed`], where it carries the failure taxonomy value.
    StateChanged { state: ApState, error_code: i32 },

    /// Auxiliary diagnostic channel: best-effort teardown failures and
    /// handler errors land here, never in the lifecycle sequence.
    Error { message: String },
}

/// One push-delivered tethering snapshot
///
/// Every event carries the full "available" and "active" interface sets for
/// that moment, not a delta. The state machine only ever tests membership of
/// its managed interface and never caches a snapshot beyond the current
/// event.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TetherSnapshot {
    pub available: Vec<String>,
    pub active: Vec<String>,
}

impl TetherSnapshot {
    pub fn new(available: Vec<String>, active: Vec<String>) -> Self {
        Self { available, active }
    }

    /// Is the interface currently offered for tethering?
    pub fn is_available(&self, interface: &str) -> bool {
        self.available.iter().any(|name| name == interface)
    }

    /// Is the interface actively tethered (AP confirmed serving)?
    pub fn is_active(&self, interface: &str) -> bool {
        self.active.iter().any(|name| name == interface)
    }
}

#[cfg(test)]
#[allow(clippy::panic, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn test_config_validity() {
        let config = ApConfig::open("TestAp", Band::Band2GHz);
        assert!(config.is_valid());

        let empty = ApConfig::open("", Band::Band2GHz);
        assert!(!empty.is_valid());
    }

    #[test]
    fn test_command_serialization() {
        let cmd = ApCommand::Start {
            config: Some(ApConfig {
                ssid: "TestAp".into(),
                band: Band::Band5GHz,
                channel: Some(36),
                security: ApSecurity::Wpa2Psk {
                    passphrase: "hunter22".into(),
                },
            }),
        };
        let json = serde_json::to_string(&cmd).unwrap();
        let deserialized: ApCommand = serde_json::from_str(&json).unwrap();

        match deserialized {
            ApCommand::Start {
                config: Some(config),
            } => {
                assert_eq!(config.ssid, "TestAp");
                assert_eq!(config.band, Band::Band5GHz);
                assert_eq!(config.channel, Some(36));
            }
            _ => panic!("Wrong variant"),
        }
    }

    #[test]
    fn test_event_serialization() {
        let event = ApEvent::StateChanged {
            state: ApState::Failed,
            error_code: ERROR_GENERAL,
        };
        let json = serde_json::to_string(&event).unwrap();
        let deserialized: ApEvent = serde_json::from_str(&json).unwrap();

        match deserialized {
            ApEvent::StateChanged { state, error_code } => {
                assert_eq!(state, ApState::Failed);
                assert_eq!(error_code, ERROR_GENERAL);
            }
            _ => panic!("Wrong variant"),
        }
    }

    #[test]
    fn test_snapshot_membership() {
        let snapshot = TetherSnapshot::new(vec!["wlan0".into(), "wlan1".into()], vec!["wlan1".into()]);

        assert!(snapshot.is_available("wlan0"));
        assert!(!snapshot.is_active("wlan0"));
        assert!(snapshot.is_available("wlan1"));
        assert!(snapshot.is_active("wlan1"));
        assert!(!snapshot.is_available("eth0"));
        assert!(!snapshot.is_active("eth0"));
    }
}
