//! The forward-transport capability set
//!
//! A target device implements [`FwTransport`]. Only [`b_transport`] is
//! required; every optional capability has a default implementation that
//! declines it by setting `GenericError` on the transaction and returning
//! the capability-specific rejection value, with no other state change.
//! This keeps every target compliant with the full transport interface
//! while letting it declare capabilities unavailable.
//!
//! [`b_transport`]: FwTransport::b_transport

use crate::Transaction;
use tlm_types::ResponseStatus;

/// Protocol phase of a non-blocking transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Request path begins
    BeginReq,
    /// Request path ends
    EndReq,
    /// Response path begins
    BeginResp,
    /// Response path ends
    EndResp,
}

/// Synchronization result of a non-blocking transport call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NbSync {
    /// The target accepted the phase as-is
    Accepted,
    /// The target advanced the phase in place
    Updated,
    /// The target completed the whole transaction in one call
    Completed,
}

/// Descriptor for a granted direct-memory region
///
/// Starts out denying everything; a target that grants direct access
/// fills in the permitted range and access kinds. No target in this
/// model grants access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DmiDescriptor {
    /// Reads through the region are permitted
    pub read_allowed: bool,
    /// Writes through the region are permitted
    pub write_allowed: bool,
    /// First byte address of the granted region
    pub start: u64,
    /// Last byte address of the granted region
    pub end: u64,
}

/// Forward transport interface from initiator to target
///
/// The blocking call is the only required capability: it must not return
/// until the target has produced a terminal response status, and it must
/// leave the payload buffer unmodified on any error status.
pub trait FwTransport {
    /// Blocking transport: validate, dispatch, mutate the payload in
    /// place, and set a terminal response status before returning.
    fn b_transport(&mut self, trans: &mut Transaction);

    /// Non-blocking (split) transport.
    ///
    /// Declined by default: sets `GenericError` and reports completion so
    /// the initiator does not wait for further phases.
    fn nb_transport_fw(&mut self, trans: &mut Transaction, _phase: &mut Phase) -> NbSync {
        trans.set_response_status(ResponseStatus::GenericError);
        NbSync::Completed
    }

    /// Direct-memory-pointer request.
    ///
    /// Declined by default: sets `GenericError`, leaves the descriptor
    /// denying all access, and returns `false`.
    fn get_direct_mem_ptr(&mut self, trans: &mut Transaction, _dmi: &mut DmiDescriptor) -> bool {
        trans.set_response_status(ResponseStatus::GenericError);
        false
    }

    /// Debug transport.
    ///
    /// Declined by default: sets `GenericError` and reports zero bytes
    /// transferred.
    fn transport_dbg(&mut self, trans: &mut Transaction) -> usize {
        trans.set_response_status(ResponseStatus::GenericError);
        0
    }
}
