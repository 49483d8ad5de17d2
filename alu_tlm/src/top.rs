//! Top-level assembly
//!
//! `Top` owns one initiator and one ALU target, performs the single
//! binding between them at construction time, and forwards `send` calls
//! to the initiator. Ownership is a straight chain: the assembly owns the
//! initiator, the initiator owns its bound socket, the socket owns the
//! target. Dropping the assembly releases all three, in that order, with
//! no manual teardown.

use crate::initiator::Initiator;
use crate::payload::AluPayload;
use crate::target::Alu;
use tlm_transport::InitiatorSocket;
use tlm_types::ModuleId;

/// The assembled transaction-level ALU system
#[derive(Debug)]
pub struct Top {
    id: ModuleId,
    initiator: Initiator<Alu>,
}

impl Top {
    /// Builds the assembly and performs its one binding
    pub fn new() -> Self {
        let alu = Alu::new();
        let socket = InitiatorSocket::new().bind(alu);
        Self {
            id: ModuleId::new(),
            initiator: Initiator::new(socket),
        }
    }

    /// Sends a payload through the system
    ///
    /// Pure forwarding to the initiator: returns the computed response on
    /// success and the original payload on any rejected transaction.
    pub fn send(&mut self, payload: &AluPayload) -> AluPayload {
        self.initiator.send(payload)
    }

    /// Returns the module ID
    pub fn module_id(&self) -> ModuleId {
        self.id
    }

    /// Returns the initiator sub-component
    pub fn initiator(&self) -> &Initiator<Alu> {
        &self.initiator
    }

    /// Returns the initiator sub-component mutably
    pub fn initiator_mut(&mut self) -> &mut Initiator<Alu> {
        &mut self.initiator
    }

    /// Returns the ALU sub-component
    pub fn alu(&self) -> &Alu {
        self.initiator.target()
    }
}

impl Default for Top {
    fn default() -> Self {
        Self::new()
    }
}
