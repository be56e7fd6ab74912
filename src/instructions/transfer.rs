//! # Register Transfer Instructions
//!
//! - TAX, TAY, TXA, TYA, TSX: copy a register and update N and Z
//! - TXS: copy X into SP, flags untouched
//!
//! All take 2 cycles.

use crate::mli::MliContext;
use crate::{OPCODE_TABLE, CPU};

fn cycles(opcode: u8) -> u32 {
    OPCODE_TABLE[opcode as usize].base_cycles as u32
}

/// Executes the TAX (Transfer Accumulator to X) instruction.
pub(crate) fn execute_tax<H: MliContext>(cpu: &mut CPU<H>, opcode: u8) -> u32 {
    cpu.x = cpu.a;
    cpu.p.update_nz(cpu.x);
    cycles(opcode)
}

/// Executes the TAY (Transfer Accumulator to Y) instruction.
pub(crate) fn execute_tay<H: MliContext>(cpu: &mut CPU<H>, opcode: u8) -> u32 {
    cpu.y = cpu.a;
    cpu.p.update_nz(cpu.y);
    cycles(opcode)
}

/// Executes the TXA (Transfer X to Accumulator) instruction.
pub(crate) fn execute_txa<H: MliContext>(cpu: &mut CPU<H>, opcode: u8) -> u32 {
    cpu.a = cpu.x;
    cpu.p.update_nz(cpu.a);
    cycles(opcode)
}

/// Executes the TYA (Transfer Y to Accumulator) instruction.
pub(crate) fn execute_tya<H: MliContext>(cpu: &mut CPU<H>, opcode: u8) -> u32 {
    cpu.a = cpu.y;
    cpu.p.update_nz(cpu.a);
    cycles(opcode)
}

/// Executes the TSX (Transfer Stack Pointer to X) instruction.
pub(crate) fn execute_tsx<H: MliContext>(cpu: &mut CPU<H>, opcode: u8) -> u32 {
    cpu.x = cpu.sp;
    cpu.p.update_nz(cpu.x);
    cycles(opcode)
}

/// Executes the TXS (Transfer X to Stack Pointer) instruction.
pub(crate) fn execute_txs<H: MliContext>(cpu: &mut CPU<H>, opcode: u8) -> u32 {
    cpu.sp = cpu.x;
    cycles(opcode)
}
