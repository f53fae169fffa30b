use crate::actor_debug;
use futures::stream::StreamExt;
use futures_channel::mpsc;
use softap_protocol::{ApEvent, SoftApError};
use std::future::Future;

/// Actor trait for implementing message-driven components
///
/// Actors are independent, stateful components that communicate through
/// message passing. Each actor has its own inbox and processes messages
/// sequentially, so handlers never observe concurrent mutation.
///
/// # Lifecycle
///
/// 1. **init()** - called once before message processing starts
/// 2. **handle()** - called for each received message, in arrival order
/// 3. **shutdown()** - called when the inbox closes
///
/// # Example
///
/// ```ignore
/// struct MyActor {
///     event_tx: mpsc::Sender<ApEvent>,
/// }
///
/// impl Actor for MyActor {
///     type Message = MyMessage;
///
///     fn name(&self) -> &'static str {
///         "MyActor"
///     }
///
///     async fn handle(&mut self, msg: Self::Message) -> Result<(), SoftApError> {
///         // Process message
///         Ok(())
///     }
/// }
/// ```
// Lifecycle methods are declared as Send-bounded futures rather than
// `async fn` so the provided `run` future can cross threads in
// `tokio::spawn`; implementations still write plain `async fn`.
pub trait Actor: Send + 'static {
    /// Message type this actor processes
    type Message: Send + 'static;

    /// Actor name (used for logging and debugging)
    fn name(&self) -> &'static str;

    /// Initialize the actor before processing messages
    fn init(&mut self) -> impl Future<Output = Result<(), SoftApError>> + Send {
        async { Ok(()) }
    }

    /// Handle a single message
    ///
    /// Called once per received message; runs to completion before the next
    /// message is dequeued.
    fn handle(
        &mut self,
        msg: Self::Message,
    ) -> impl Future<Output = Result<(), SoftApError>> + Send;

    /// Clean up before shutdown
    ///
    /// Called when the actor is stopping. Pending deferred work (e.g. an
    /// armed timeout) must be cancelled here so nothing fires afterwards.
    fn shutdown(&mut self) -> impl Future<Output = ()> + Send {
        async {}
    }

    /// Main actor run loop (provided by runtime)
    ///
    /// Consumes the actor and runs it to completion: init, sequential
    /// message processing, shutdown. Handler errors are reported on the
    /// event channel and never abort the loop.
    fn run(
        mut self,
        mut rx: mpsc::Receiver<Self::Message>,
        event_tx: mpsc::Sender<ApEvent>,
    ) -> impl Future<Output = ()> + Send
    where
        Self: Sized,
    {
        async move {
            if let Err(e) = self.init().await {
                let _ = event_tx.clone().try_send(ApEvent::Error {
                    message: format!("{} init failed: {}", self.name(), e),
                });
                return;
            }

            actor_debug!("{} started", self.name());

            while let Some(msg) = rx.next().await {
                if let Err(e) = self.handle(msg).await {
                    let _ = event_tx.clone().try_send(ApEvent::Error {
                        message: format!("{} error: {}", self.name(), e),
                    });
                }
            }

            self.shutdown().await;

            actor_debug!("{} stopped", self.name());
        }
    }
}

/// Spawn an actor onto the tokio runtime
pub fn spawn_actor<A>(actor: A, rx: mpsc::Receiver<A::Message>, event_tx: mpsc::Sender<ApEvent>)
where
    A: Actor,
{
    tokio::spawn(actor.run(rx, event_tx));
}
