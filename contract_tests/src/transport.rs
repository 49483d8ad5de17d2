//! Transport behavior contract tests
//!
//! End-to-end guarantees of the assembled system: the arithmetic
//! scenarios, round-trip identity under every failure kind, capability
//! rejection, and the independence of consecutive calls.
