//! Top-level facade crate for MySensors.
//!
//! Re-exports the frame core and the node helpers so users can depend on a single crate.

pub mod core {
    pub use mysensors_core::*;
}

pub mod node {
    pub use mysensors_node::*;
}
