use futures_channel::mpsc;
use softap_protocol::{
    ApCommand, ApConfig, ApEvent, ApState, SoftApError, TetherSnapshot, ERROR_NONE,
};
use softap_runtime::{
    actor_debug, actor_info, actor_warn, spawn_timeout, Actor, ApMessage, TimeoutHandle,
};

use crate::constants;
use crate::netcfg::NetworkConfig;
use crate::radio::RadioControl;

/// SoftApActor owns the Soft AP lifecycle state machine
///
/// Responsibilities:
/// - Serialize start/stop commands, tethering snapshots, and timer fires
///   through one inbox, processed strictly in arrival order
/// - Validate and execute state transitions
/// - Drive the radio and network-configuration collaborators synchronously
/// - Emit an ordered, non-duplicated sequence of lifecycle notifications
///
/// ## State Machine
///
/// For the complete transition diagram and invariants, see the `ApState`
/// documentation in `softap-protocol/src/state.rs`.
///
/// Key coordination patterns:
/// - **Tether await**: `Enabled` arms a single cancellable timeout; an
///   "active" snapshot for the managed interface cancels it, expiry tears
///   the AP down (`Disabling` → `Disabled`) without a `Failed` notification
/// - **Race resolution**: stop vs. timeout vs. tether-success resolve by
///   queue order; the late handler is discarded by the still-armed guard
///   (`pending_timeout` + `await_token`)
pub struct SoftApActor<R, N> {
    state: ApState,
    radio: R,
    netcfg: N,

    // Managed interface name, fixed for the lifetime of this instance
    interface: String,
    country_code: String,

    event_tx: mpsc::Sender<ApEvent>,

    // Channel to send messages to self (for the tether timeout)
    state_tx: mpsc::Sender<ApMessage>,

    tether_timeout_ms: u64,

    // Armed timeout for the current tether-await period, if any.
    // Cancelled automatically on every state transition.
    pending_timeout: Option<TimeoutHandle>,

    // Await-period sequence; incremented each time a timeout is armed and
    // used to discard fires from a previous period.
    await_token: u64,
}

impl<R, N> SoftApActor<R, N>
where
    R: RadioControl,
    N: NetworkConfig,
{
    /// Build a state machine bound to the radio's managed interface
    ///
    /// The interface name is queried exactly once here.
    pub fn new(
        radio: R,
        netcfg: N,
        country_code: impl Into<String>,
        event_tx: mpsc::Sender<ApEvent>,
        state_tx: mpsc::Sender<ApMessage>,
    ) -> Self {
        let interface = radio.interface_name();
        Self {
            state: ApState::Idle,
            radio,
            netcfg,
            interface,
            country_code: country_code.into(),
            event_tx,
            state_tx,
            tether_timeout_ms: constants::tether::TIMEOUT_MS,
            pending_timeout: None,
            await_token: 0,
        }
    }

    /// Name of the managed interface this instance controls
    pub fn interface(&self) -> &str {
        &self.interface
    }

    /// Notify the listener (non-critical)
    ///
    /// A full or closed listener channel must never stall the state machine;
    /// the drop is logged instead.
    fn send_listener_event(&self, event: ApEvent) {
        if let Err(e) = self.event_tx.clone().try_send(event) {
            actor_warn!("listener event dropped: {:?}", e);
        }
    }

    /// Attempt to transition to a new state
    ///
    /// Cancels any armed timeout, emits exactly one `StateChanged`, and arms
    /// the tether timeout when entering `Enabled`. Returns Err if the
    /// transition table rejects the move.
    fn transition(&mut self, new_state: ApState, error_code: i32) -> Result<(), SoftApError> {
        if !self.state.can_transition_to(new_state) {
            return Err(SoftApError::InvalidTransition(format!(
                "{} → {}",
                self.state.as_str(),
                new_state.as_str()
            )));
        }

        let old_state = self.state;

        if let Some(handle) = self.pending_timeout.take() {
            handle.cancel();
            actor_debug!("cancelled tether timeout for previous state");
        }

        self.state = new_state;

        self.send_listener_event(ApEvent::StateChanged {
            state: new_state,
            error_code,
        });

        actor_debug!(
            "SoftApActor: {} → {}",
            old_state.as_str(),
            new_state.as_str()
        );

        self.pending_timeout = self.arm_tether_timeout_if_needed(new_state);

        Ok(())
    }

    /// Arm the tether-activation timeout when entering `Enabled`
    ///
    /// Exactly one timeout exists per await period; the fresh token
    /// invalidates any fire still in flight from an earlier period.
    fn arm_tether_timeout_if_needed(&mut self, state: ApState) -> Option<TimeoutHandle> {
        if state != ApState::Enabled {
            return None;
        }

        self.await_token = self.await_token.wrapping_add(1);
        actor_debug!(
            "arming {} ms tether timeout for {} (token {})",
            self.tether_timeout_ms,
            self.interface,
            self.await_token
        );
        Some(spawn_timeout(
            self.state_tx.clone(),
            self.await_token,
            self.tether_timeout_ms,
        ))
    }

    /// Terminate the current start-attempt with a single `Failed`
    ///
    /// No teardown calls are made on this path: nothing was successfully
    /// started.
    fn fail(&mut self, err: SoftApError) -> Result<(), SoftApError> {
        actor_info!("soft AP start on {} failed: {}", self.interface, err);
        self.transition(ApState::Failed, err.failure_code())
    }

    async fn handle_start(&mut self, config: Option<ApConfig>) -> Result<(), SoftApError> {
        // Idempotence guard: a start while a session is in flight is
        // deliberately ignored, with no duplicate notification
        if !self.state.can_start() {
            actor_debug!("ignoring start in {} state", self.state.as_str());
            return Ok(());
        }

        self.transition(ApState::Enabling, ERROR_NONE)?;

        let config = match config {
            Some(config) if config.is_valid() => config,
            _ => {
                return self.fail(SoftApError::InvalidConfiguration(
                    "no usable AP configuration provided".into(),
                ))
            }
        };

        if !self.radio.is_active() {
            if let Err(e) = self.radio.activate() {
                return self.fail(SoftApError::RadioActivation(e.to_string()));
            }
        }

        let code = self.country_code.to_uppercase();
        if !self.radio.set_country_code(&code) {
            return self.fail(SoftApError::CountryCode(code));
        }

        if let Err(e) = self.netcfg.start_access_point(&config, &self.interface) {
            return self.fail(e);
        }

        actor_info!("soft AP up on {}, awaiting tether activation", self.interface);
        self.transition(ApState::Enabled, ERROR_NONE)
    }

    async fn handle_stop(&mut self) -> Result<(), SoftApError> {
        // Nothing was started: silent no-op, no notification, no leaf calls
        if !self.state.can_stop() {
            actor_debug!("ignoring stop in {} state", self.state.as_str());
            return Ok(());
        }

        self.teardown()
    }

    /// Shared `Disabling → Disabled` sequence for explicit stop and tether
    /// timeout
    ///
    /// The network-service stop is best-effort: local state must reach
    /// `Disabled` even if the service is unreachable, so its failure goes to
    /// the diagnostic channel rather than the lifecycle sequence.
    fn teardown(&mut self) -> Result<(), SoftApError> {
        self.transition(ApState::Disabling, ERROR_NONE)?;

        if let Err(e) = self.netcfg.stop_access_point(&self.interface) {
            actor_warn!("stopAccessPoint on {} failed: {}", self.interface, e);
            self.send_listener_event(ApEvent::Error {
                message: format!("access point teardown on {} failed: {}", self.interface, e),
            });
        }

        self.transition(ApState::Disabled, ERROR_NONE)
    }

    /// Consume one tethering snapshot
    ///
    /// Only meaningful while awaiting activation (`Enabled` with an armed
    /// timeout); every other delivery is ignored. The snapshot is never
    /// cached beyond this call.
    fn handle_tether_state(&mut self, snapshot: TetherSnapshot) {
        if self.state != ApState::Enabled || self.pending_timeout.is_none() {
            actor_debug!("ignoring tether snapshot in {} state", self.state.as_str());
            return;
        }

        if snapshot.is_active(&self.interface) {
            // Tethering confirmed serving: stand down the timeout and stay
            // Enabled with no additional notification (already reported)
            if let Some(handle) = self.pending_timeout.take() {
                handle.cancel();
            }
            actor_info!("tethering active on {}", self.interface);
        } else if snapshot.is_available(&self.interface) {
            actor_debug!("{} offered for tethering, awaiting activation", self.interface);
        } else {
            // Interface in neither set: transient, keep waiting
            actor_debug!(
                "tether snapshot omits {}, treating as transient",
                self.interface
            );
        }
    }

    /// Tether-activation window elapsed
    ///
    /// Guards resolve the race against stop/tether-success: the fire is
    /// discarded unless the machine is still `Enabled`, the token belongs to
    /// the current await period, and the timeout is still armed. Expiry is
    /// reported as teardown, not as a second failure; the listener already
    /// saw `Enabled`.
    fn handle_tether_timeout(&mut self, token: u64) -> Result<(), SoftApError> {
        if self.state != ApState::Enabled
            || token != self.await_token
            || self.pending_timeout.is_none()
        {
            actor_debug!("ignoring stale tether timeout (token {})", token);
            return Ok(());
        }

        actor_info!(
            "tethering not active on {} within {} ms, shutting down",
            self.interface,
            self.tether_timeout_ms
        );
        self.teardown()
    }
}

impl<R, N> Actor for SoftApActor<R, N>
where
    R: RadioControl,
    N: NetworkConfig,
{
    type Message = ApMessage;

    fn name(&self) -> &'static str {
        "SoftApActor"
    }

    async fn handle(&mut self, msg: ApMessage) -> Result<(), SoftApError> {
        match msg {
            ApMessage::Command(ApCommand::Start { config }) => self.handle_start(config).await,
            ApMessage::Command(ApCommand::Stop) => self.handle_stop().await,
            ApMessage::TetherStateChanged(snapshot) => {
                self.handle_tether_state(snapshot);
                Ok(())
            }
            ApMessage::TetherTimeout { token } => self.handle_tether_timeout(token),
        }
    }

    async fn shutdown(&mut self) {
        // No notification may be emitted after the run loop ends, so the
        // armed timeout has to die with the machine
        if let Some(handle) = self.pending_timeout.take() {
            handle.cancel();
        }
        actor_debug!("SoftApActor for {} shut down", self.interface);
    }
}
