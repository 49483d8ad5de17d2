//! # Transaction-Level ALU
//!
//! This crate models a hardware ALU at the transaction level: a requester
//! packages an operation and two operands into a transaction, hands it to
//! a combinational target, and receives back a computed result plus a
//! status code, with no clock edges on the path.
//!
//! ## Structure
//!
//! - [`payload`]: the typed operation record and its fixed byte layout
//! - [`target`]: the [`Alu`] device that validates and executes
//!   transactions synchronously
//! - [`initiator`]: the [`Initiator`] that builds transactions and
//!   recovers from rejected ones
//! - [`top`]: the [`Top`] assembly owning both ends of the single binding
//!
//! ## Philosophy
//!
//! The transport path is a plain synchronous call with zero elapsed time.
//! Failures never cross the assembly boundary: the target reports them
//! through the response status, and the initiator absorbs them by
//! returning the caller's original payload unchanged.

pub mod initiator;
pub mod payload;
pub mod target;
pub mod top;

pub use initiator::Initiator;
pub use payload::{AluPayload, FIELD_DIRECTIONS, OPCODE_ADD, OPCODE_SUB, PAYLOAD_BYTE_LEN};
pub use target::Alu;
pub use top::Top;
