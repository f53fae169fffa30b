//! Centralized timing constants for the Soft AP lifecycle
//!
//! Values here shape externally observable behavior; the integration tests
//! pin them, so a change ripples into the test expectations.

/// Tethering activation supervision
pub mod tether {
    /// How long the state machine waits for tethering to become active on
    /// the managed interface after a successful native start (milliseconds)
    ///
    /// **Value**: 5000 ms
    ///
    /// **Rationale**: the tethering service needs to program an interface
    /// address and bring the link up before reporting the interface active;
    /// on loaded systems that takes up to a few seconds. If no activation
    /// arrives within the window, the AP is torn down (`Disabling` →
    /// `Disabled`) rather than left up and unreachable. The teardown is
    /// deliberately not reported as `Failed`: the listener already saw
    /// `Enabled`, so the machine reports what it observed, a successful
    /// start followed by a shutdown.
    pub const TIMEOUT_MS: u64 = 5000;
}
