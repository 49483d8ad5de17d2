//! The requester side of the transport path
//!
//! The initiator turns a payload value into a single-use transaction,
//! invokes the bound target synchronously, and inspects the resulting
//! status. It is the only component that decides recovery: on any error
//! status it posts a diagnostic and hands the caller back the original
//! payload unchanged, so `send` never fails outward.

use crate::payload::{AluPayload, PAYLOAD_BYTE_LEN};
use crate::target::REPORT_TYPE;
use sim_report::{Report, ReportLog};
use tlm_transport::{BoundInitiatorSocket, DmiDescriptor, FwTransport, Phase, Transaction};
use tlm_types::{Command, ModuleId, TransportCapability, TransportError};

/// The transaction initiator
///
/// Owns its bound outbound socket, and through it the target. The wiring
/// is fixed for the initiator's whole life.
#[derive(Debug)]
pub struct Initiator<T> {
    id: ModuleId,
    socket: BoundInitiatorSocket<T>,
    log: ReportLog,
}

impl<T: FwTransport> Initiator<T> {
    /// Creates an initiator over an already-bound socket
    pub fn new(socket: BoundInitiatorSocket<T>) -> Self {
        Self {
            id: ModuleId::new(),
            socket,
            log: ReportLog::new(),
        }
    }

    /// Sends a payload through the bound target and returns the response
    ///
    /// Builds a fresh write transaction with declared length and
    /// streaming width equal to the payload record size, invokes the
    /// target synchronously, and then either returns the freshly decoded
    /// response value or, on any error status, reports the failure and
    /// returns the original payload unchanged. Elapsed time on this path
    /// is always zero.
    pub fn send(&mut self, request: &AluPayload) -> AluPayload {
        let mut trans = Transaction::new(Command::Write, request.encode().to_vec())
            .with_data_length(PAYLOAD_BYTE_LEN)
            .with_streaming_width(PAYLOAD_BYTE_LEN);

        self.socket.b_transport(&mut trans);

        if trans.is_response_error() {
            self.log.post(
                Report::error(REPORT_TYPE, "transaction failed")
                    .with_source(self.id)
                    .with_field("transaction", trans.id().to_string())
                    .with_field("status", trans.response_status().to_string()),
            );
            return *request;
        }

        match AluPayload::decode(trans.data()) {
            Ok(response) => response,
            Err(error) => {
                self.log.post(
                    Report::error(REPORT_TYPE, error.to_string())
                        .with_source(self.id)
                        .with_field("transaction", trans.id().to_string()),
                );
                *request
            }
        }
    }

    /// Checks whether the bound target supports an optional capability
    ///
    /// Issues a throwaway transaction through the capability's own entry
    /// point and inspects the outcome. A declined capability is posted as
    /// a diagnostic and returned as
    /// [`TransportError::CapabilityUnavailable`]; this is negotiation,
    /// not misuse, and it leaves the target unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::CapabilityUnavailable`] if the target
    /// declines the capability.
    pub fn check_capability(
        &mut self,
        capability: TransportCapability,
    ) -> Result<(), TransportError> {
        let mut trans = Transaction::new(Command::Write, vec![0u8; PAYLOAD_BYTE_LEN]);
        let available = match capability {
            TransportCapability::NonBlocking => {
                let mut phase = Phase::BeginReq;
                self.socket.nb_transport_fw(&mut trans, &mut phase);
                !trans.is_response_error()
            }
            TransportCapability::DirectMemory => {
                let mut dmi = DmiDescriptor::default();
                self.socket.get_direct_mem_ptr(&mut trans, &mut dmi)
            }
            TransportCapability::Debug => {
                self.socket.transport_dbg(&mut trans);
                !trans.is_response_error()
            }
        };

        if available {
            Ok(())
        } else {
            let error = TransportError::CapabilityUnavailable(capability);
            self.log.post(
                Report::error(REPORT_TYPE, error.to_string())
                    .with_source(self.id)
                    .with_field("transaction", trans.id().to_string()),
            );
            Err(error)
        }
    }

    /// Returns the module ID
    pub fn module_id(&self) -> ModuleId {
        self.id
    }

    /// Returns the bound target
    pub fn target(&self) -> &T {
        self.socket.target()
    }

    /// Returns the bound target mutably
    pub fn target_mut(&mut self) -> &mut T {
        self.socket.target_mut()
    }

    /// Returns the initiator's diagnostic log
    pub fn report_log(&self) -> &ReportLog {
        &self.log
    }

    /// Drains the initiator's diagnostic log
    pub fn drain_reports(&mut self) -> Vec<Report> {
        self.log.drain()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload::{OPCODE_ADD, OPCODE_SUB};
    use crate::target::Alu;
    use tlm_transport::InitiatorSocket;
    use tlm_types::ResponseStatus;

    fn initiator() -> Initiator<Alu> {
        Initiator::new(InitiatorSocket::new().bind(Alu::new()))
    }

    #[test]
    fn test_send_returns_computed_result() {
        let mut initiator = initiator();
        let response = initiator.send(&AluPayload::request(OPCODE_ADD, 3, 4));

        assert_eq!(response.result, 7);
        assert_eq!(response.op1, 3);
        assert_eq!(response.op2, 4);
        assert!(initiator.report_log().is_empty());
    }

    #[test]
    fn test_send_recovers_with_original_payload_on_error() {
        let mut initiator = initiator();
        let request = AluPayload::request(99, 1, 1);

        let response = initiator.send(&request);

        assert_eq!(response, request);
        let reports = initiator.report_log().reports();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].message, "transaction failed");
    }

    #[test]
    fn test_send_never_fails_outward() {
        // A target that refuses everything still yields a total send.
        struct RefusingTarget;
        impl FwTransport for RefusingTarget {
            fn b_transport(&mut self, trans: &mut Transaction) {
                trans.set_response_status(ResponseStatus::GenericError);
            }
        }

        let mut initiator = Initiator::new(InitiatorSocket::new().bind(RefusingTarget));
        let request = AluPayload::request(OPCODE_ADD, 5, 6);

        assert_eq!(initiator.send(&request), request);
    }

    #[test]
    fn test_send_recovers_when_target_leaves_status_incomplete() {
        struct SilentTarget;
        impl FwTransport for SilentTarget {
            fn b_transport(&mut self, _trans: &mut Transaction) {}
        }

        let mut initiator = Initiator::new(InitiatorSocket::new().bind(SilentTarget));
        let request = AluPayload::request(OPCODE_ADD, 5, 6);

        assert_eq!(initiator.send(&request), request);
        assert_eq!(initiator.report_log().reports().len(), 1);
    }

    #[test]
    fn test_consecutive_sends_are_independent() {
        let mut initiator = initiator();

        let first = initiator.send(&AluPayload::request(OPCODE_ADD, 3, 4));
        let second = initiator.send(&AluPayload::request(OPCODE_SUB, 10, 4));

        assert_eq!(first.result, 7);
        assert_eq!(second.result, 6);
        assert_eq!(second.opcode, OPCODE_SUB);
    }

    #[test]
    fn test_capability_check_reports_unavailable() {
        let mut initiator = initiator();

        let result = initiator.check_capability(TransportCapability::DirectMemory);

        assert_eq!(
            result,
            Err(TransportError::CapabilityUnavailable(
                TransportCapability::DirectMemory
            ))
        );
        let reports = initiator.report_log().reports();
        assert_eq!(reports.len(), 1);
        assert!(reports[0].message.contains("direct memory interface"));
    }

    #[test]
    fn test_every_optional_capability_is_declined() {
        let mut initiator = initiator();

        for capability in [
            TransportCapability::NonBlocking,
            TransportCapability::DirectMemory,
            TransportCapability::Debug,
        ] {
            assert_eq!(
                initiator.check_capability(capability),
                Err(TransportError::CapabilityUnavailable(capability))
            );
        }
        assert_eq!(initiator.report_log().reports().len(), 3);
        // Negotiation leaves the target untouched.
        assert!(initiator.target().report_log().is_empty());
    }

    #[test]
    fn test_capability_check_does_not_disturb_transport() {
        let mut initiator = initiator();

        let _ = initiator.check_capability(TransportCapability::NonBlocking);
        let response = initiator.send(&AluPayload::request(OPCODE_ADD, 2, 3));

        assert_eq!(response.result, 5);
    }

    #[test]
    fn test_failed_send_does_not_poison_later_sends() {
        let mut initiator = initiator();

        let failed = initiator.send(&AluPayload::request(99, 1, 1));
        assert_eq!(failed.result, 0);

        let response = initiator.send(&AluPayload::request(OPCODE_ADD, 2, 2));
        assert_eq!(response.result, 4);
    }
}
