//! MySensors node library entry.
//!
//! This crate sits on top of the frame core: it loads the node config,
//! stamps outbound messages with the node identity, and classifies inbound
//! frames. It is consumed by the binary (`main.rs`) and by integration tests.

pub mod config;
pub mod inbound;
pub mod node;

pub use node::Node;
