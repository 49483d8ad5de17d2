//! # Transport Contract Tests
//!
//! This crate provides "golden" tests for the transaction-level transport
//! contract to ensure it does not drift accidentally over time.
//!
//! ## Philosophy
//!
//! - **Explicit over implicit**: the wire contract is written as code
//! - **Testability first**: these tests fail when the contract changes
//! - **Mechanism not policy**: define what must be stable, not how to
//!   use it
//!
//! ## Structure
//!
//! - [`wire`]: payload byte layout and encoding names
//! - [`transport`]: the end-to-end request/response scenarios and the
//!   capability rejection guarantees

pub mod transport;
pub mod wire;
