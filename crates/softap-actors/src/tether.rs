use futures_channel::mpsc;
use softap_protocol::{SoftApError, TetherSnapshot};
use softap_runtime::{actor_warn, ApMessage};

/// Inbound port for tethering state notifications
///
/// Any push transport (callback, channel, polling adapter) satisfies the
/// contract as long as snapshots enter the same ordered queue as commands.
/// Ordering relative to commands is what the state machine relies on to
/// resolve races deterministically.
pub struct TetherEventSource {
    state_tx: mpsc::Sender<ApMessage>,
}

impl TetherEventSource {
    pub fn new(state_tx: mpsc::Sender<ApMessage>) -> Self {
        Self { state_tx }
    }

    /// Push one snapshot into the state machine's queue
    pub fn notify(&self, snapshot: TetherSnapshot) -> Result<(), SoftApError> {
        self.state_tx
            .clone()
            .try_send(ApMessage::TetherStateChanged(snapshot))
            .map_err(|e| {
                if e.is_disconnected() {
                    SoftApError::ChannelClosed("state machine has shut down".into())
                } else {
                    SoftApError::Other("state machine inbox overloaded".into())
                }
            })
    }

    /// Adapt a snapshot stream by forwarding it from a spawned task
    ///
    /// Stops silently when either end closes; a full inbox drops the
    /// snapshot with a warning, since the next full snapshot supersedes it.
    pub fn forward_from(mut rx: mpsc::Receiver<TetherSnapshot>, state_tx: mpsc::Sender<ApMessage>) {
        use futures::stream::StreamExt;

        let source = TetherEventSource::new(state_tx);
        tokio::spawn(async move {
            while let Some(snapshot) = rx.next().await {
                if let Err(e) = source.notify(snapshot) {
                    match e {
                        SoftApError::ChannelClosed(_) => break,
                        _ => actor_warn!("tether snapshot dropped: {}", e),
                    }
                }
            }
        });
    }
}
