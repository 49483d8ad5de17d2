//! The ALU operation record and its wire layout
//!
//! The payload is the structured record carried by a transaction: an
//! opcode selecting the operation, two operands, and the result slot the
//! target fills in. Its byte layout is the only wire format in the model,
//! so encode and decode must stay byte-for-byte inverses: the target
//! decodes exactly what the initiator encoded.

use serde::{Deserialize, Serialize};
use tlm_types::{PortDirection, TransportError};

/// Opcode selecting addition
pub const OPCODE_ADD: u32 = 0;

/// Opcode selecting subtraction
pub const OPCODE_SUB: u32 = 1;

/// Size of one encoded payload record in bytes
///
/// Four little-endian 32-bit words: opcode, op1, op2, result. A
/// transaction is valid for dispatch only if its declared data length
/// equals this value; that comparison is the sole structural validation
/// on the transport path.
pub const PAYLOAD_BYTE_LEN: usize = 16;

/// Direction of each payload field as seen by the target
///
/// Recorded for documentation only; no component reads or enforces these
/// tags. `result` is logically write-only: a producer of a request must
/// never read it.
pub const FIELD_DIRECTIONS: [(&str, PortDirection); 4] = [
    ("opcode", PortDirection::Input),
    ("op1", PortDirection::Input),
    ("op2", PortDirection::Input),
    ("result", PortDirection::Output),
];

/// The ALU transaction payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AluPayload {
    /// Operation selector
    pub opcode: u32,
    /// First operand
    pub op1: i32,
    /// Second operand
    pub op2: i32,
    /// Result slot, written by the target
    pub result: i32,
}

impl AluPayload {
    /// Creates a request payload with an empty result slot
    pub fn request(opcode: u32, op1: i32, op2: i32) -> Self {
        Self {
            opcode,
            op1,
            op2,
            result: 0,
        }
    }

    /// Encodes this record into its fixed wire layout
    pub fn encode(&self) -> [u8; PAYLOAD_BYTE_LEN] {
        let mut bytes = [0u8; PAYLOAD_BYTE_LEN];
        bytes[0..4].copy_from_slice(&self.opcode.to_le_bytes());
        bytes[4..8].copy_from_slice(&self.op1.to_le_bytes());
        bytes[8..12].copy_from_slice(&self.op2.to_le_bytes());
        bytes[12..16].copy_from_slice(&self.result.to_le_bytes());
        bytes
    }

    /// Decodes a record from its fixed wire layout
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Truncated`] if the buffer holds fewer
    /// bytes than one full record.
    pub fn decode(bytes: &[u8]) -> Result<Self, TransportError> {
        if bytes.len() < PAYLOAD_BYTE_LEN {
            return Err(TransportError::Truncated {
                actual: bytes.len(),
                expected: PAYLOAD_BYTE_LEN,
            });
        }
        let word = |i: usize| -> [u8; 4] {
            [bytes[4 * i], bytes[4 * i + 1], bytes[4 * i + 2], bytes[4 * i + 3]]
        };
        Ok(Self {
            opcode: u32::from_le_bytes(word(0)),
            op1: i32::from_le_bytes(word(1)),
            op2: i32::from_le_bytes(word(2)),
            result: i32::from_le_bytes(word(3)),
        })
    }
}
