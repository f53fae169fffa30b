//! # Soft AP Runtime
//!
//! Runtime infrastructure for the Soft AP actor system.
//!
//! This crate defines:
//! - **Actor trait**: base trait for message-driven components
//! - **Channel management**: typed message routing into the state machine
//! - **Supervision**: the cancellable tether-activation timeout
//!
//! ## Architecture
//!
//! The runtime follows these principles:
//! - **Zero shared state**: the state machine owns its data
//! - **One ordered queue**: commands, tethering events, and timer fires all
//!   travel through the same channel and are handled strictly in arrival
//!   order, so no two handlers ever run concurrently
//! - **Run to completion**: every handler finishes before the next message is
//!   dequeued; races (stop vs. timeout) resolve deterministically by queue
//!   order plus a still-armed guard in the late handler
//!
//! ## Example
//!
//! ```ignore
//! use softap_runtime::{spawn_actor, ChannelManager};
//!
//! let (manager, handles) = ChannelManager::new();
//! let actor = SoftApActor::new(radio, netcfg, "US", handles.event_tx.clone(),
//!                              manager.state_sender());
//! spawn_actor(actor, handles.state_rx, handles.event_tx);
//! manager.send_command(ApCommand::Stop)?;
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::indexing_slicing,
    clippy::todo
)]

pub mod actor;
pub mod channels;
pub mod logging;
pub mod supervision;

// Re-exported for the logging macros; call sites use actor_debug! and
// friends, not this directly.
pub use log;

pub use actor::{spawn_actor, Actor};
pub use channels::{ActorHandles, ApMessage, ChannelManager};
pub use supervision::{spawn_timeout, TimeoutHandle};
