//! # Soft AP Protocol
//!
//! Type-safe message definitions for the Soft AP lifecycle controller.
//!
//! This crate defines all types exchanged between the lifecycle state machine,
//! its collaborators, and the listener. It has no dependency on any async
//! runtime or platform API, making it fully testable in plain Rust.
//!
//! ## Architecture
//!
//! - **ApCommand**: Requests from the caller → state machine (`start`/`stop`)
//! - **ApEvent**: Notifications from the state machine → listener
//! - **TetherSnapshot**: Push-delivered tethering interface sets
//! - **ApState**: Lifecycle state machine (pure logic, no side effects)
//!
//! ## Message Flow
//!
//! ```text
//! Caller → ApCommand → SoftApActor → RadioControl / NetworkConfig
//!                           ↓
//!                       ApEvent → Listener
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::indexing_slicing,
    clippy::todo
)]

pub mod errors;
pub mod messages;
pub mod state;

pub use errors::SoftApError;
pub use messages::{
    ApCommand, ApConfig, ApEvent, ApSecurity, Band, TetherSnapshot, ERROR_GENERAL, ERROR_NONE,
    ERROR_NO_CHANNEL,
};
pub use state::ApState;
