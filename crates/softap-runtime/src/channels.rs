use futures_channel::mpsc;
use softap_protocol::{ApCommand, ApEvent, TetherSnapshot};

/// Message types for the Soft AP state machine inbox
///
/// Commands, tethering snapshots, and timer fires all share one ordered
/// queue; whichever message is dequeued first wins any apparent race, and the
/// loser's handler checks a still-armed guard before acting.
#[derive(Debug, Clone)]
pub enum ApMessage {
    /// Caller command (`start` / `stop`)
    Command(ApCommand),

    /// Push-delivered tethering snapshot from the event source
    TetherStateChanged(TetherSnapshot),

    /// The tether-activation timeout elapsed
    ///
    /// `token` identifies the await period that armed the timer; the handler
    /// discards fires whose token no longer matches the current period.
    TetherTimeout { token: u64 },
}

/// Handles for spawning the state machine
pub struct ActorHandles {
    pub state_rx: mpsc::Receiver<ApMessage>,
    pub event_tx: mpsc::Sender<ApEvent>,
}

/// Channel manager for the Soft AP actor system
///
/// Owns the command-side senders and the listener-side event receiver, and
/// provides a unified interface for pushing commands into the ordered queue.
pub struct ChannelManager {
    // Bounded channel to prevent memory exhaustion under a misbehaving caller
    state_tx: mpsc::Sender<ApMessage>,

    // Listener event receiver; take with take_event_receiver() to move it
    // into a consuming task
    event_rx: mpsc::Receiver<ApEvent>,
}

impl ChannelManager {
    /// Create a new channel manager and actor handles
    ///
    /// Returns (ChannelManager for the caller, ActorHandles for spawning).
    ///
    /// Capacities:
    /// - state_tx: 256 for commands, snapshots, and timer fires (low frequency)
    /// - event_tx: 1024 for lifecycle and diagnostic events to the listener
    pub fn new() -> (Self, ActorHandles) {
        let (state_tx, state_rx) = mpsc::channel(256);
        let (event_tx, event_rx) = mpsc::channel(1024);

        let handles = ActorHandles { state_rx, event_tx };

        let manager = Self { state_tx, event_rx };

        (manager, handles)
    }

    /// Send a caller command into the state machine's ordered queue
    pub fn send_command(&self, cmd: ApCommand) -> Result<(), String> {
        self.state_tx
            .clone()
            .try_send(ApMessage::Command(cmd))
            .map_err(|e| {
                if e.is_full() {
                    "System overloaded: too many pending commands.".to_string()
                } else {
                    "State machine unavailable: command channel closed.".to_string()
                }
            })
    }

    /// Clone the inbox sender for collaborators
    ///
    /// The timeout task and the tethering event source feed the same queue
    /// as commands, preserving ordering relative to them.
    pub fn state_sender(&self) -> mpsc::Sender<ApMessage> {
        self.state_tx.clone()
    }

    /// Get mutable reference to the listener event receiver
    pub fn event_receiver(&mut self) -> &mut mpsc::Receiver<ApEvent> {
        &mut self.event_rx
    }

    /// Take ownership of the listener event receiver
    ///
    /// The receiver should only be taken once; events arriving after the
    /// take are delivered to the returned receiver, not the manager.
    pub fn take_event_receiver(&mut self) -> mpsc::Receiver<ApEvent> {
        let (_detached_tx, detached_rx) = mpsc::channel(1);
        std::mem::replace(&mut self.event_rx, detached_rx)
    }
}
