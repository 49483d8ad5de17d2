//! Categorized failure kinds of the transport path
//!
//! Every kind here is recoverable: targets translate them into a
//! `GenericError` response status plus a diagnostic report, and the
//! initiator recovers by falling back to the original payload. Nothing
//! on the transport path aborts the call chain.

use crate::TransportCapability;
use thiserror::Error;

/// Errors a target can encounter while serving a transaction
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// Declared transaction length does not match the payload record size
    #[error("declared data length {declared} does not match payload size {expected}")]
    LengthMismatch { declared: usize, expected: usize },

    /// A read command was issued to a write-only target
    #[error("read commands are not supported by this target")]
    ReadUnsupported,

    /// The opcode does not name any operation in the dispatch table
    #[error("unsupported opcode {0}")]
    UnsupportedOperation(u32),

    /// A declared-but-unimplemented capability was requested
    #[error("{0} is not available on this target")]
    CapabilityUnavailable(TransportCapability),

    /// The payload buffer is too short to decode a full record
    #[error("payload buffer truncated: got {actual} bytes, expected {expected}")]
    Truncated { actual: usize, expected: usize },
}
