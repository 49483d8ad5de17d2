//! One-time initiator-to-target binding
//!
//! Binding is a typestate transition: [`InitiatorSocket::bind`] consumes
//! the unbound socket and the target, producing a [`BoundInitiatorSocket`]
//! that owns the target exclusively. There is no unbind and no way to
//! bind twice, so the "what happens on re-bind" question cannot arise at
//! runtime.

use crate::interface::{DmiDescriptor, FwTransport, NbSync, Phase};
use crate::Transaction;

/// An initiator's outbound port before assembly
#[derive(Debug, Default)]
pub struct InitiatorSocket {
    _private: (),
}

impl InitiatorSocket {
    /// Creates an unbound socket
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds this socket to a target, consuming both
    ///
    /// Called exactly once per assembly.
    pub fn bind<T: FwTransport>(self, target: T) -> BoundInitiatorSocket<T> {
        BoundInitiatorSocket { target }
    }
}

/// An initiator port wired 1:1 to its target
///
/// The socket owns the target: when the assembly is torn down the socket
/// goes with it, and the target with the socket. The wiring itself is
/// immutable for the socket's whole life.
#[derive(Debug)]
pub struct BoundInitiatorSocket<T> {
    target: T,
}

impl<T: FwTransport> BoundInitiatorSocket<T> {
    /// Forwards a blocking transport call to the bound target
    pub fn b_transport(&mut self, trans: &mut Transaction) {
        self.target.b_transport(trans);
    }

    /// Forwards a non-blocking transport call to the bound target
    pub fn nb_transport_fw(&mut self, trans: &mut Transaction, phase: &mut Phase) -> NbSync {
        self.target.nb_transport_fw(trans, phase)
    }

    /// Forwards a direct-memory-pointer request to the bound target
    pub fn get_direct_mem_ptr(&mut self, trans: &mut Transaction, dmi: &mut DmiDescriptor) -> bool {
        self.target.get_direct_mem_ptr(trans, dmi)
    }

    /// Forwards a debug transport call to the bound target
    pub fn transport_dbg(&mut self, trans: &mut Transaction) -> usize {
        self.target.transport_dbg(trans)
    }

    /// Returns the bound target
    pub fn target(&self) -> &T {
        &self.target
    }

    /// Returns the bound target mutably
    pub fn target_mut(&mut self) -> &mut T {
        &mut self.target
    }
}
