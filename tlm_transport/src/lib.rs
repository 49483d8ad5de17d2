//! # Transaction-Level Transport
//!
//! This crate implements the transport envelope and the capability-set
//! interface between an initiator and a target.
//!
//! ## Philosophy
//!
//! - **One atomic call**: a request/response exchange is a single
//!   synchronous call carrying a structured payload. No queuing, no
//!   pipelining, no simulated time on this path.
//! - **Capability set, not inheritance**: a target implements one trait
//!   with a required blocking transport operation and one defaulted
//!   operation per optional capability. The defaults decline the
//!   capability; a device overrides exactly what it supports.
//! - **Binding is structural**: an initiator port is wired to a target
//!   port exactly once, at assembly time. The type system makes re-binding
//!   unrepresentable.
//!
//! ## Key Types
//!
//! - [`Transaction`]: single-use transport envelope over a byte buffer
//! - [`FwTransport`]: the forward-transport capability set
//! - [`InitiatorSocket`] / [`BoundInitiatorSocket`]: one-time binding

pub mod interface;
pub mod socket;
pub mod transaction;

pub use interface::{DmiDescriptor, FwTransport, NbSync, Phase};
pub use socket::{BoundInitiatorSocket, InitiatorSocket};
pub use transaction::Transaction;
