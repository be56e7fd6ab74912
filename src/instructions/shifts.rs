//! # Shift and Rotate Instructions
//!
//! - ASL: shift left, bit 7 into C
//! - LSR: shift right, bit 0 into C
//! - ROL: rotate left through C
//! - ROR: rotate right through C
//!
//! Each works on the accumulator or a memory operand. Memory forms are
//! read-modify-write; `abs,X` takes 6 cycles plus one on a page crossing,
//! which also reads the un-carried address.

use crate::flags::{self, StatusFlags};
use crate::mli::MliContext;
use crate::{AddressingMode, OPCODE_TABLE, CPU};

fn shift<H: MliContext>(
    cpu: &mut CPU<H>,
    opcode: u8,
    op: impl FnOnce(&mut StatusFlags, u8) -> u8,
) -> u32 {
    let metadata = &OPCODE_TABLE[opcode as usize];

    if metadata.addressing_mode == AddressingMode::Accumulator {
        cpu.a = op(&mut cpu.p, cpu.a);
        return metadata.base_cycles as u32;
    }

    let (addr, page_crossed) = cpu.indexed_address(metadata.addressing_mode);
    cpu.modify(addr, op);
    metadata.base_cycles as u32 + page_crossed as u32
}

/// Executes the ASL (Arithmetic Shift Left) instruction.
pub(crate) fn execute_asl<H: MliContext>(cpu: &mut CPU<H>, opcode: u8) -> u32 {
    shift(cpu, opcode, |p, value| {
        let result = value << 1;
        p.set_if(flags::C, value & 0x80 != 0);
        p.update_nz(result);
        result
    })
}

/// Executes the LSR (Logical Shift Right) instruction.
pub(crate) fn execute_lsr<H: MliContext>(cpu: &mut CPU<H>, opcode: u8) -> u32 {
    shift(cpu, opcode, |p, value| {
        let result = value >> 1;
        p.set_if(flags::C, value & 0x01 != 0);
        p.update_nz(result);
        result
    })
}

/// Executes the ROL (Rotate Left) instruction.
pub(crate) fn execute_rol<H: MliContext>(cpu: &mut CPU<H>, opcode: u8) -> u32 {
    shift(cpu, opcode, |p, value| {
        let result = (value << 1) | p.is_set(flags::C) as u8;
        p.set_if(flags::C, value & 0x80 != 0);
        p.update_nz(result);
        result
    })
}

/// Executes the ROR (Rotate Right) instruction.
pub(crate) fn execute_ror<H: MliContext>(cpu: &mut CPU<H>, opcode: u8) -> u32 {
    shift(cpu, opcode, |p, value| {
        let result = (value >> 1) | ((p.is_set(flags::C) as u8) << 7);
        p.set_if(flags::C, value & 0x01 != 0);
        p.update_nz(result);
        result
    })
}
