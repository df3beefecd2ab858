//! Domain layer - Cluster identity and port definitions
//!
//! This module defines the descriptor handed to provider backends and the
//! traits (ports) those backends implement.

pub mod cluster;
pub mod ports;

pub use cluster::*;
pub use ports::*;
