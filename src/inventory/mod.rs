//! Inventory Module
//!
//! Turns a cloud handle and a cluster into the cluster's complete,
//! uniquely keyed set of resources on that cloud.

pub mod collector;
pub mod registry;
pub mod resource;

pub use collector::*;
pub use registry::*;
pub use resource::*;
