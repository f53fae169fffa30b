/// # Soft AP Lifecycle State Machine
///
/// This module implements the lifecycle state machine for a software access
/// point on a single managed interface. The state machine prevents invalid
/// state combinations and provides a single source of truth for AP status.
///
/// ## State Transition Diagram
///
/// ```text
///              start(valid cfg,
///              services succeed)
///   ┌──────┐   ┌───────────────►┌──────────┐ native ┌─────────┐
///   │ Idle ├──►│                │ Enabling ├───────►│ Enabled │
///   └──────┘   │                └────┬─────┘ start  └────┬────┘
///              │                     │        ok         │
///   ┌──────────┴─┐     invalid cfg | │                   │ stop() or
///   │  Disabled  │     native start │                    │ tether timeout
///   └────────────┘     fails        │                    │
///        ▲     ▲                    ▼                    ▼
///        │     │               ┌────────┐         ┌────────────┐
///        │   start             │ Failed │         │ Disabling  │
///        │                     └───┬────┘         └─────┬──────┘
///        │                         │ start              │
///        └─────────────────────────┴────────────────────┘
/// ```
///
/// ## State Invariants
///
/// - **Idle**: nothing started yet; `stop` here is a silent no-op
/// - **Enabling**: setup in progress; only observable transiently, every
///   start-attempt emits it exactly once before `Enabled` or `Failed`
/// - **Enabled**: native AP up; a tether-activation timeout may be armed
/// - **Disabling**: teardown in progress, always followed by `Disabled`
/// - **Disabled / Failed**: terminal for the current session; a new `start`
///   transitions out of them
///
/// The externally visible notification sequence for any single start-attempt
/// is one of: `[Enabling, Enabled]`, `[Enabling, Enabled, Disabling,
/// Disabled]`, `[Enabling, Failed]`, or nothing at all for a `stop` while
/// idle. `Disabling`/`Disabled` are never emitted without a prior
/// `Enabling`/`Enabled` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ApState {
    /// No AP session has been started on this instance
    Idle,

    /// Bringing up radio, country code, and native AP
    Enabling,

    /// Native AP is up; awaiting (or past) tethering activation
    Enabled,

    /// Tearing down, either from an explicit stop or a tether timeout
    Disabling,

    /// Teardown complete, ready for a new start
    Disabled,

    /// Setup failed; reported once with a failure code, ready for a new start
    Failed,
}

impl ApState {
    /// Can a `start` command be accepted in this state?
    ///
    /// A start while a session is already in flight is deliberately ignored
    /// (idempotence guard), producing no duplicate notification.
    pub fn can_start(&self) -> bool {
        matches!(self, Self::Idle | Self::Disabled | Self::Failed)
    }

    /// Does a `stop` command have anything to tear down?
    ///
    /// In `Idle`, `Disabled`, and `Failed` nothing was successfully started,
    /// so `stop` is a silent no-op.
    pub fn can_stop(&self) -> bool {
        matches!(self, Self::Enabling | Self::Enabled)
    }

    /// Validate if transition to `new_state` is allowed from current state
    pub fn can_transition_to(&self, new_state: ApState) -> bool {
        use ApState::*;

        match (self, new_state) {
            // A new session may begin from any resting state
            (Idle, Enabling) => true,
            (Disabled, Enabling) => true,
            (Failed, Enabling) => true,

            // Setup either completes, fails, or is cancelled mid-flight
            (Enabling, Enabled) => true,
            (Enabling, Failed) => true,
            (Enabling, Disabling) => true,

            // Teardown from a running AP (explicit stop or tether timeout)
            (Enabled, Disabling) => true,
            (Disabling, Disabled) => true,

            _ => false,
        }
    }

    /// Short name for log output
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Enabling => "Enabling",
            Self::Enabled => "Enabled",
            Self::Disabling => "Disabling",
            Self::Disabled => "Disabled",
            Self::Failed => "Failed",
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_transitions() {
        assert!(ApState::Idle.can_transition_to(ApState::Enabling));
        assert!(ApState::Enabling.can_transition_to(ApState::Enabled));
        assert!(ApState::Enabling.can_transition_to(ApState::Failed));
        assert!(ApState::Enabled.can_transition_to(ApState::Disabling));
        assert!(ApState::Disabling.can_transition_to(ApState::Disabled));
        assert!(ApState::Disabled.can_transition_to(ApState::Enabling));
        assert!(ApState::Failed.can_transition_to(ApState::Enabling));
    }

    #[test]
    fn test_invalid_transitions() {
        // Cannot reach Enabled without passing through Enabling
        assert!(!ApState::Idle.can_transition_to(ApState::Enabled));

        // Teardown states are unreachable unless something was started
        assert!(!ApState::Idle.can_transition_to(ApState::Disabling));
        assert!(!ApState::Failed.can_transition_to(ApState::Disabling));

        // Failed only occurs during setup
        assert!(!ApState::Enabled.can_transition_to(ApState::Failed));
        assert!(!ApState::Disabling.can_transition_to(ApState::Failed));
    }

    #[test]
    fn test_start_stop_guards() {
        assert!(ApState::Idle.can_start());
        assert!(ApState::Disabled.can_start());
        assert!(ApState::Failed.can_start());
        assert!(!ApState::Enabling.can_start());
        assert!(!ApState::Enabled.can_start());
        assert!(!ApState::Disabling.can_start());

        assert!(ApState::Enabling.can_stop());
        assert!(ApState::Enabled.can_stop());
        assert!(!ApState::Idle.can_stop());
        assert!(!ApState::Disabled.can_stop());
        assert!(!ApState::Failed.can_stop());
    }

    #[test]
    fn test_serialization() {
        let state = ApState::Enabled;
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: ApState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
