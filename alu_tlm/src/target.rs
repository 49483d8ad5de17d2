//! The combinational ALU target device
//!
//! The target validates and executes a transaction synchronously: it
//! checks the declared length, decodes the payload, looks the opcode up
//! in the dispatch table, writes the result back through the transaction
//! buffer, and sets the response status. Every failure is recoverable and
//! is reported only through the status plus a diagnostic in the device's
//! report log; the payload buffer is left unmodified on any error.

use crate::payload::{AluPayload, OPCODE_ADD, OPCODE_SUB, PAYLOAD_BYTE_LEN};
use sim_report::{Report, ReportLog};
use tlm_transport::{FwTransport, Transaction};
use tlm_types::{Command, ModuleId, ResponseStatus, TransportError};

/// Message type tag for transport diagnostics
pub const REPORT_TYPE: &str = "tlm";

type AluOp = fn(i32, i32) -> i32;

/// Explicit opcode-to-operation mapping
///
/// Adding an operation means adding a row here; an opcode without a row
/// is answered with a recoverable error status, never an abort.
const OPCODE_TABLE: &[(u32, AluOp)] = &[(OPCODE_ADD, add), (OPCODE_SUB, sub)];

// Two's-complement wraparound, matching the registered hardware adders.
fn add(op1: i32, op2: i32) -> i32 {
    op1.wrapping_add(op2)
}

fn sub(op1: i32, op2: i32) -> i32 {
    op1.wrapping_sub(op2)
}

fn lookup(opcode: u32) -> Option<AluOp> {
    OPCODE_TABLE
        .iter()
        .find(|(code, _)| *code == opcode)
        .map(|(_, op)| *op)
}

/// The combinational ALU device
///
/// Supports only the blocking transport capability; the non-blocking,
/// direct-memory and debug capabilities are inherited as declining stubs
/// from [`FwTransport`].
#[derive(Debug)]
pub struct Alu {
    id: ModuleId,
    log: ReportLog,
}

impl Alu {
    /// Creates a new ALU device
    pub fn new() -> Self {
        Self {
            id: ModuleId::new(),
            log: ReportLog::new(),
        }
    }

    /// Returns the module ID
    pub fn module_id(&self) -> ModuleId {
        self.id
    }

    /// Returns the device's diagnostic log
    pub fn report_log(&self) -> &ReportLog {
        &self.log
    }

    /// Drains the device's diagnostic log
    pub fn drain_reports(&mut self) -> Vec<Report> {
        self.log.drain()
    }

    fn reject(&mut self, trans: &mut Transaction, error: TransportError) {
        self.log.post(
            Report::error(REPORT_TYPE, error.to_string())
                .with_source(self.id)
                .with_field("transaction", trans.id().to_string()),
        );
        trans.set_response_status(ResponseStatus::GenericError);
    }
}

impl Default for Alu {
    fn default() -> Self {
        Self::new()
    }
}

impl FwTransport for Alu {
    fn b_transport(&mut self, trans: &mut Transaction) {
        if trans.data_length() != PAYLOAD_BYTE_LEN {
            let error = TransportError::LengthMismatch {
                declared: trans.data_length(),
                expected: PAYLOAD_BYTE_LEN,
            };
            self.reject(trans, error);
            return;
        }

        match trans.command() {
            Command::Read => self.reject(trans, TransportError::ReadUnsupported),
            Command::Write => {
                let mut payload = match AluPayload::decode(trans.data()) {
                    Ok(payload) => payload,
                    Err(error) => {
                        self.reject(trans, error);
                        return;
                    }
                };
                match lookup(payload.opcode) {
                    Some(op) => {
                        payload.result = op(payload.op1, payload.op2);
                        trans.data_mut()[..PAYLOAD_BYTE_LEN].copy_from_slice(&payload.encode());
                        trans.set_response_status(ResponseStatus::Ok);
                    }
                    None => {
                        self.reject(trans, TransportError::UnsupportedOperation(payload.opcode))
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sim_report::Severity;

    fn write_transaction(payload: &AluPayload) -> Transaction {
        Transaction::new(Command::Write, payload.encode().to_vec())
    }

    #[test]
    fn test_add_dispatch() {
        let mut alu = Alu::new();
        let mut trans = write_transaction(&AluPayload::request(OPCODE_ADD, 3, 4));

        alu.b_transport(&mut trans);

        assert_eq!(trans.response_status(), ResponseStatus::Ok);
        let response = AluPayload::decode(trans.data()).unwrap();
        assert_eq!(response.result, 7);
    }

    #[test]
    fn test_sub_dispatch() {
        let mut alu = Alu::new();
        let mut trans = write_transaction(&AluPayload::request(OPCODE_SUB, 10, 4));

        alu.b_transport(&mut trans);

        assert_eq!(trans.response_status(), ResponseStatus::Ok);
        let response = AluPayload::decode(trans.data()).unwrap();
        assert_eq!(response.result, 6);
    }

    #[test]
    fn test_sub_with_negative_result() {
        let mut alu = Alu::new();
        let mut trans = write_transaction(&AluPayload::request(OPCODE_SUB, 0, 5));

        alu.b_transport(&mut trans);

        let response = AluPayload::decode(trans.data()).unwrap();
        assert_eq!(response.result, -5);
    }

    #[test]
    fn test_add_wraps_like_hardware() {
        let mut alu = Alu::new();
        let mut trans = write_transaction(&AluPayload::request(OPCODE_ADD, i32::MAX, 1));

        alu.b_transport(&mut trans);

        assert_eq!(trans.response_status(), ResponseStatus::Ok);
        let response = AluPayload::decode(trans.data()).unwrap();
        assert_eq!(response.result, i32::MIN);
    }

    #[test]
    fn test_length_mismatch_leaves_payload_unmodified() {
        let mut alu = Alu::new();
        let payload = AluPayload::request(OPCODE_ADD, 3, 4);
        let mut trans = Transaction::new(Command::Write, payload.encode().to_vec())
            .with_data_length(PAYLOAD_BYTE_LEN - 1);

        alu.b_transport(&mut trans);

        assert_eq!(trans.response_status(), ResponseStatus::GenericError);
        assert_eq!(trans.data(), payload.encode());
        assert_eq!(alu.report_log().count_at_least(Severity::Error), 1);
    }

    #[test]
    fn test_read_command_is_rejected_without_mutation() {
        let mut alu = Alu::new();
        let payload = AluPayload::request(OPCODE_ADD, 3, 4);
        let mut trans = Transaction::new(Command::Read, payload.encode().to_vec());

        alu.b_transport(&mut trans);

        assert_eq!(trans.response_status(), ResponseStatus::GenericError);
        assert_eq!(trans.data(), payload.encode());
        let reports = alu.report_log().reports();
        assert_eq!(reports.len(), 1);
        assert!(reports[0].message.contains("read commands are not supported"));
    }

    #[test]
    fn test_unknown_opcode_is_a_recoverable_error() {
        let mut alu = Alu::new();
        let payload = AluPayload::request(99, 1, 1);
        let mut trans = write_transaction(&payload);

        alu.b_transport(&mut trans);

        assert_eq!(trans.response_status(), ResponseStatus::GenericError);
        assert_eq!(trans.data(), payload.encode());
        let reports = alu.report_log().reports();
        assert!(reports[0].message.contains("unsupported opcode 99"));
    }

    #[test]
    fn test_capability_stubs_decline_without_side_effects() {
        use tlm_transport::{DmiDescriptor, NbSync, Phase};

        let mut alu = Alu::new();

        let mut trans = write_transaction(&AluPayload::request(OPCODE_ADD, 1, 2));
        let mut phase = Phase::BeginReq;
        assert_eq!(alu.nb_transport_fw(&mut trans, &mut phase), NbSync::Completed);
        assert_eq!(trans.response_status(), ResponseStatus::GenericError);

        let mut trans = write_transaction(&AluPayload::request(OPCODE_ADD, 1, 2));
        let mut dmi = DmiDescriptor::default();
        assert!(!alu.get_direct_mem_ptr(&mut trans, &mut dmi));

        let mut trans = write_transaction(&AluPayload::request(OPCODE_ADD, 1, 2));
        assert_eq!(alu.transport_dbg(&mut trans), 0);

        // Declined capabilities leave the device itself untouched.
        assert!(alu.report_log().is_empty());
    }

    #[test]
    fn test_calls_are_independent() {
        let mut alu = Alu::new();

        let mut first = write_transaction(&AluPayload::request(OPCODE_ADD, 1, 2));
        alu.b_transport(&mut first);
        let mut second = write_transaction(&AluPayload::request(OPCODE_SUB, 1, 2));
        alu.b_transport(&mut second);

        let first = AluPayload::decode(first.data()).unwrap();
        let second = AluPayload::decode(second.data()).unwrap();
        assert_eq!(first.result, 3);
        assert_eq!(second.result, -1);
    }
}
