//! Single-use transport envelope

use tlm_types::{Command, ResponseStatus, TransactionId};

/// A transport envelope wrapping a payload buffer
///
/// A transaction is constructed fresh for every call and never reused or
/// pooled. Its status starts as [`ResponseStatus::Incomplete`] and makes
/// exactly one transition, to either `Ok` or `GenericError`, after which
/// it is terminal.
///
/// The declared `data_length` is a *claim* about the buffer, checked by
/// the target against the payload record size. It is carried separately
/// from the buffer itself so that a mismatched claim is representable and
/// testable.
#[derive(Debug)]
pub struct Transaction {
    id: TransactionId,
    command: Command,
    data: Vec<u8>,
    data_length: usize,
    streaming_width: usize,
    status: ResponseStatus,
}

impl Transaction {
    /// Creates a new transaction over a payload buffer
    ///
    /// The declared data length and streaming width both default to the
    /// buffer length, and the status starts incomplete.
    pub fn new(command: Command, data: Vec<u8>) -> Self {
        let len = data.len();
        Self {
            id: TransactionId::new(),
            command,
            data,
            data_length: len,
            streaming_width: len,
            status: ResponseStatus::Incomplete,
        }
    }

    /// Overrides the declared data length
    pub fn with_data_length(mut self, data_length: usize) -> Self {
        self.data_length = data_length;
        self
    }

    /// Overrides the declared streaming width
    pub fn with_streaming_width(mut self, streaming_width: usize) -> Self {
        self.streaming_width = streaming_width;
        self
    }

    /// Returns the transaction ID
    pub fn id(&self) -> TransactionId {
        self.id
    }

    /// Returns the command kind
    pub fn command(&self) -> Command {
        self.command
    }

    /// Returns the payload buffer
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns the payload buffer for in-place mutation by the target
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Returns the declared data length
    pub fn data_length(&self) -> usize {
        self.data_length
    }

    /// Returns the declared streaming width
    pub fn streaming_width(&self) -> usize {
        self.streaming_width
    }

    /// Returns the response status
    pub fn response_status(&self) -> ResponseStatus {
        self.status
    }

    /// Sets the response status
    ///
    /// Invariant: the status may only move away from `Incomplete` once.
    pub fn set_response_status(&mut self, status: ResponseStatus) {
        debug_assert!(
            !self.status.is_terminal(),
            "transaction already reached a terminal status"
        );
        self.status = status;
    }

    /// Checks if the response counts as an error
    pub fn is_response_error(&self) -> bool {
        self.status.is_error()
    }

    /// Consumes the transaction and returns its payload buffer
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transaction_initial_state() {
        let trans = Transaction::new(Command::Write, vec![0u8; 16]);
        assert_eq!(trans.command(), Command::Write);
        assert_eq!(trans.data_length(), 16);
        assert_eq!(trans.streaming_width(), 16);
        assert_eq!(trans.response_status(), ResponseStatus::Incomplete);
        assert!(trans.is_response_error());
    }

    #[test]
    fn test_transaction_declared_length_is_independent() {
        let trans = Transaction::new(Command::Write, vec![0u8; 16]).with_data_length(15);
        assert_eq!(trans.data().len(), 16);
        assert_eq!(trans.data_length(), 15);
    }

    #[test]
    fn test_transaction_status_transition_ok() {
        let mut trans = Transaction::new(Command::Write, vec![0u8; 16]);
        trans.set_response_status(ResponseStatus::Ok);
        assert_eq!(trans.response_status(), ResponseStatus::Ok);
        assert!(!trans.is_response_error());
    }

    #[test]
    fn test_transaction_status_transition_error() {
        let mut trans = Transaction::new(Command::Read, vec![0u8; 16]);
        trans.set_response_status(ResponseStatus::GenericError);
        assert_eq!(trans.response_status(), ResponseStatus::GenericError);
        assert!(trans.is_response_error());
    }

    #[test]
    fn test_transaction_ids_are_unique() {
        let a = Transaction::new(Command::Write, vec![]);
        let b = Transaction::new(Command::Write, vec![]);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_transaction_into_data() {
        let mut trans = Transaction::new(Command::Write, vec![1, 2, 3]);
        trans.data_mut()[0] = 9;
        assert_eq!(trans.into_data(), vec![9, 2, 3]);
    }
}
