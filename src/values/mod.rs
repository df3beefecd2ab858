//! Value-semantics utilities
//!
//! Helpers shared by the dispatcher and every provider backend:
//! - [`optional`]: conversions that keep "unset" distinct from "empty"
//! - [`render`]: plain-text and JSON renderings for log lines
//! - [`text_resource`]: readable content carried inside provider payloads

pub mod optional;
pub mod render;
pub mod text_resource;

pub use optional::*;
pub use render::*;
pub use text_resource::*;
