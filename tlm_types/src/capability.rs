//! Optional transport capabilities
//!
//! A target implements one required capability (blocking transport) and
//! may support any of the optional ones. Declining an optional capability
//! is not misuse: the request is answered synchronously with an error
//! status and no side effect.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An optional transport operation a target may or may not support
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportCapability {
    /// Non-blocking (split) transaction transport
    NonBlocking,
    /// Direct-memory-pointer requests
    DirectMemory,
    /// Debug transport introspection
    Debug,
}

impl fmt::Display for TransportCapability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportCapability::NonBlocking => write!(f, "non-blocking transport"),
            TransportCapability::DirectMemory => write!(f, "direct memory interface"),
            TransportCapability::Debug => write!(f, "debug transport"),
        }
    }
}
