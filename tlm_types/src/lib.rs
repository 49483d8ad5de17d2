//! # Transport Core Types
//!
//! This crate defines the fundamental vocabulary of the transaction-level
//! transport model.
//!
//! ## Philosophy
//!
//! - **Explicit over implicit**: command kinds, response statuses and
//!   capability kinds are closed enums, never bare integers.
//! - **Type safety first**: identifiers are typed newtypes and cannot be
//!   confused with one another.
//! - **Status, not exceptions**: a target never reports failure except
//!   through the response status of the transaction it was handed.
//!
//! ## Key Types
//!
//! - [`TransactionId`] / [`ModuleId`]: unique identifiers
//! - [`Command`]: read/write command kind of a transaction
//! - [`ResponseStatus`]: terminal outcome of a transaction
//! - [`TransportCapability`]: optional transport operations a target may
//!   decline to support
//! - [`TransportError`]: the categorized failure kinds of the transport path

pub mod capability;
pub mod error;
pub mod ids;
pub mod protocol;

pub use capability::TransportCapability;
pub use error::TransportError;
pub use ids::{ModuleId, TransactionId};
pub use protocol::{Command, PortDirection, ResponseStatus};
