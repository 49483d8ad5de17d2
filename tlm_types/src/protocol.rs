//! Command kinds, response statuses and port directions

use serde::{Deserialize, Serialize};
use std::fmt;

/// Command kind carried by a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    /// Read from the target
    Read,
    /// Write to the target
    Write,
}

impl Command {
    /// Checks if this is a read command
    pub fn is_read(&self) -> bool {
        matches!(self, Command::Read)
    }

    /// Checks if this is a write command
    pub fn is_write(&self) -> bool {
        matches!(self, Command::Write)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Read => write!(f, "read"),
            Command::Write => write!(f, "write"),
        }
    }
}

/// Terminal outcome of a transaction
///
/// A transaction starts as [`ResponseStatus::Incomplete`] and must reach
/// exactly one of the two terminal states before it is considered
/// complete. There are no further transitions: a transaction is never
/// revived or reused after reaching a terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseStatus {
    /// No target has produced a response yet (the only valid initial state)
    Incomplete,
    /// The target completed the transaction successfully
    Ok,
    /// The target rejected or failed the transaction
    GenericError,
}

impl ResponseStatus {
    /// Checks if this status counts as a failed response
    ///
    /// From the requester's point of view anything other than [`Ok`]
    /// after the call returns is a failure, including a target that left
    /// the status untouched.
    ///
    /// [`Ok`]: ResponseStatus::Ok
    pub fn is_error(&self) -> bool {
        !matches!(self, ResponseStatus::Ok)
    }

    /// Checks if this status is terminal
    pub fn is_terminal(&self) -> bool {
        !matches!(self, ResponseStatus::Incomplete)
    }
}

impl fmt::Display for ResponseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseStatus::Incomplete => write!(f, "incomplete"),
            ResponseStatus::Ok => write!(f, "ok"),
            ResponseStatus::GenericError => write!(f, "generic error"),
        }
    }
}

/// Direction of a payload field as seen by the target
///
/// Recorded as documentation on payload records. No component reads or
/// enforces these tags; a producer writing an output field is a design
/// smell, not a runtime error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PortDirection {
    /// The field is an input to the target
    Input,
    /// The field is written by the target
    Output,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_predicates() {
        assert!(Command::Read.is_read());
        assert!(!Command::Read.is_write());
        assert!(Command::Write.is_write());
        assert!(!Command::Write.is_read());
    }

    #[test]
    fn test_status_error_predicate() {
        assert!(ResponseStatus::Incomplete.is_error());
        assert!(ResponseStatus::GenericError.is_error());
        assert!(!ResponseStatus::Ok.is_error());
    }

    #[test]
    fn test_status_terminal_predicate() {
        assert!(!ResponseStatus::Incomplete.is_terminal());
        assert!(ResponseStatus::Ok.is_terminal());
        assert!(ResponseStatus::GenericError.is_terminal());
    }

    #[test]
    fn test_status_serde_names() {
        assert_eq!(
            serde_json::to_string(&ResponseStatus::GenericError).unwrap(),
            "\"generic_error\""
        );
        assert_eq!(
            serde_json::to_string(&ResponseStatus::Incomplete).unwrap(),
            "\"incomplete\""
        );
    }

    #[test]
    fn test_direction_serde_names() {
        assert_eq!(
            serde_json::to_string(&PortDirection::Input).unwrap(),
            "\"input\""
        );
        assert_eq!(
            serde_json::to_string(&PortDirection::Output).unwrap(),
            "\"output\""
        );
    }
}
