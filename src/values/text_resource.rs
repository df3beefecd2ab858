//! Text resources
//!
//! Opaque content (user data, rendered manifests, policy documents) that a
//! provider payload may carry and that diagnostics can render as a string.

use crate::error::Result;
use std::io::{Cursor, Read};

/// Content that can be opened for reading
pub trait TextResource {
    fn open(&self) -> Result<Box<dyn Read + '_>>;
}

/// Read the full content of a resource as UTF-8 text
pub fn resource_as_string(resource: &dyn TextResource) -> Result<String> {
    let mut reader = resource.open()?;
    let mut s = String::new();
    reader.read_to_string(&mut s)?;
    Ok(s)
}

/// Resource backed by an in-memory string
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringResource(pub String);

impl StringResource {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }
}

impl TextResource for StringResource {
    fn open(&self) -> Result<Box<dyn Read + '_>> {
        Ok(Box::new(Cursor::new(self.0.as_bytes())))
    }
}

/// Resource backed by raw bytes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BytesResource(pub Vec<u8>);

impl BytesResource {
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self(data.into())
    }
}

impl TextResource for BytesResource {
    fn open(&self) -> Result<Box<dyn Read + '_>> {
        Ok(Box::new(Cursor::new(self.0.as_slice())))
    }
}
