//! Wire contract tests
//!
//! These tests pin the byte layout the initiator writes and the target
//! reads, plus the serialized names of the protocol enums. The two sides
//! of the transport share this layout by construction; these tests make
//! any accidental change a loud failure.
