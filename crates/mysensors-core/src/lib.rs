//! MySensors core: the sensor-network frame, its catalog, and error types.
//!
//! This crate defines the wire-level contract shared by battery-powered nodes
//! and the gateway: a packed 7-byte header followed by at most
//! [`protocol::MAX_PAYLOAD`] payload bytes. It carries no transport or runtime
//! dependencies; radios, routing and retransmission live elsewhere and only
//! produce or consume fully formed [`protocol::Message`] values.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Value-level operations on a message are total; the only fallible path
//! (decoding received bytes) surfaces as `Error`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod protocol;

/// Shared result type.
pub use error::{Error, ErrorCode, Result};
