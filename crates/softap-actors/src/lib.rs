//! # Soft AP Actors
//!
//! The Soft AP lifecycle state machine and its collaborator seams.
//!
//! ## Components
//!
//! - **SoftApActor**: single-threaded controller processing start/stop
//!   commands and tethering events, driving the radio and network-service
//!   clients and emitting ordered lifecycle notifications
//! - **RadioControl / NetworkConfig**: thin trait seams to the native driver
//!   and the OS network-configuration service
//! - **TetherEventSource**: inbound port feeding tethering snapshots into the
//!   state machine's ordered queue

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::indexing_slicing,
    clippy::todo
)]

pub mod ap_actor;
pub mod constants;
pub mod netcfg;
pub mod radio;
pub mod tether;

pub use ap_actor::SoftApActor;
pub use netcfg::NetworkConfig;
pub use radio::RadioControl;
pub use tether::TetherEventSource;
