//! Demo driver for the transaction-level ALU
//!
//! Assembles the system, pushes a handful of transactions through it
//! (including ones the target rejects), and prints the outcomes together
//! with the diagnostics both sides collected. Also steps the clocked
//! adders a few edges to show the two timing models side by side.

use alu_tlm::{AluPayload, Top, OPCODE_ADD, OPCODE_SUB};
use clocked_adders::{ClockedModule, DoubleAdder, IntAdder};

fn main() {
    let mut top = Top::new();

    println!("== transaction-level transport (zero elapsed time) ==");
    let requests = [
        AluPayload::request(OPCODE_ADD, 3, 4),
        AluPayload::request(OPCODE_SUB, 10, 4),
        AluPayload::request(OPCODE_SUB, 0, 5),
        AluPayload::request(99, 1, 1),
    ];

    for request in &requests {
        let reports_before = top.initiator().report_log().reports().len();
        let response = top.send(request);
        let rejected = top.initiator().report_log().reports().len() > reports_before;
        if rejected {
            println!(
                "opcode {:>2}: rejected, original payload returned",
                request.opcode
            );
        } else {
            println!(
                "opcode {:>2}: ({}, {}) -> {}",
                request.opcode, request.op1, request.op2, response.result
            );
        }
    }

    println!();
    println!("== diagnostics ==");
    for report in top.initiator_mut().drain_reports() {
        println!("initiator {}", report);
    }
    for report in top.initiator_mut().target_mut().drain_reports() {
        println!("target    {}", report);
    }

    println!();
    println!("== clocked adders (advance on rising edges) ==");
    let mut int_adder = IntAdder::new();
    int_adder.set_inputs(3, 4);
    println!("int adder before edge: {}", int_adder.result());
    int_adder.on_posedge();
    println!("int adder after edge:  {}", int_adder.result());

    let mut double_adder = DoubleAdder::new();
    double_adder.set_inputs(1.5, 2.25);
    double_adder.on_posedge();
    println!("double adder after edge: {}", double_adder.result());
}
