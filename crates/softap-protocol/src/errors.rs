//! Error Handling Guidelines
//!
//! All error messages should follow this format:
//!
//! 1. **What failed**: the operation that failed
//! 2. **Why it failed**: the root cause if known
//! 3. **What to do**: suggested action when possible
//!
//! Setup-path errors are terminal for the current start-attempt and are
//! reported exactly once to the listener as `Failed` with the code from
//! [`SoftApError::failure_code`]. Teardown-path errors are best-effort and go
//! to the diagnostic channel instead; local state still reaches `Disabled`.

use crate::messages::{ERROR_GENERAL, ERROR_NO_CHANNEL};
use thiserror::Error;

/// Unified error type for Soft AP lifecycle operations
#[derive(Error, Debug, Clone)]
pub enum SoftApError {
    /// Configuration was absent or structurally unusable
    #[error("Invalid AP configuration: {0}")]
    InvalidConfiguration(String),

    /// Radio subsystem could not be activated
    #[error("Radio activation failed: {0}")]
    RadioActivation(String),

    /// Driver rejected the country code
    #[error("Country code rejected: {0}")]
    CountryCode(String),

    /// Network service failed to start the access point
    #[error("Native AP start failed: {0}")]
    NativeStart(String),

    /// No usable channel on the requested band
    #[error("No channel available: {0}")]
    NoChannel(String),

    /// State transition was rejected
    #[error("Invalid state transition: {0}")]
    InvalidTransition(String),

    /// Communication channel closed
    #[error("Channel closed: {0}")]
    ChannelClosed(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl SoftApError {
    /// Listener-visible failure code for a setup-path error
    ///
    /// Only `NoChannel` gets a distinct code; every other setup failure is
    /// reported as a general failure, matching the listener contract.
    pub fn failure_code(&self) -> i32 {
        match self {
            Self::NoChannel(_) => ERROR_NO_CHANNEL,
            _ => ERROR_GENERAL,
        }
    }
}

impl From<String> for SoftApError {
    fn from(s: String) -> Self {
        SoftApError::Other(s)
    }
}

impl From<&str> for SoftApError {
    fn from(s: &str) -> Self {
        SoftApError::Other(s.to_string())
    }
}
