//! # Increment and Decrement Instructions
//!
//! - INC/DEC: memory operand, or the accumulator (65C02 `INC A`/`DEC A`)
//! - INX/INY/DEX/DEY: index registers
//!
//! All wrap at 8 bits and update N and Z. `INC abs,X`/`DEC abs,X` always take
//! 7 cycles, with or without a page crossing.

use crate::mli::MliContext;
use crate::{AddressingMode, OPCODE_TABLE, CPU};

fn step_operand<H: MliContext>(cpu: &mut CPU<H>, opcode: u8, delta: u8) -> u32 {
    let metadata = &OPCODE_TABLE[opcode as usize];

    if metadata.addressing_mode == AddressingMode::Accumulator {
        cpu.a = cpu.a.wrapping_add(delta);
        cpu.p.update_nz(cpu.a);
    } else {
        let (addr, _) = cpu.operand_address(metadata.addressing_mode);
        cpu.modify(addr, |p, value| {
            let result = value.wrapping_add(delta);
            p.update_nz(result);
            result
        });
    }

    metadata.base_cycles as u32
}

/// Executes the INC (Increment) instruction.
pub(crate) fn execute_inc<H: MliContext>(cpu: &mut CPU<H>, opcode: u8) -> u32 {
    step_operand(cpu, opcode, 1)
}

/// Executes the DEC (Decrement) instruction.
pub(crate) fn execute_dec<H: MliContext>(cpu: &mut CPU<H>, opcode: u8) -> u32 {
    step_operand(cpu, opcode, 0xFF)
}

pub(crate) fn execute_inx<H: MliContext>(cpu: &mut CPU<H>, opcode: u8) -> u32 {
    cpu.x = cpu.x.wrapping_add(1);
    cpu.p.update_nz(cpu.x);
    OPCODE_TABLE[opcode as usize].base_cycles as u32
}

pub(crate) fn execute_iny<H: MliContext>(cpu: &mut CPU<H>, opcode: u8) -> u32 {
    cpu.y = cpu.y.wrapping_add(1);
    cpu.p.update_nz(cpu.y);
    OPCODE_TABLE[opcode as usize].base_cycles as u32
}

pub(crate) fn execute_dex<H: MliContext>(cpu: &mut CPU<H>, opcode: u8) -> u32 {
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.p.update_nz(cpu.x);
    OPCODE_TABLE[opcode as usize].base_cycles as u32
}

pub(crate) fn execute_dey<H: MliContext>(cpu: &mut CPU<H>, opcode: u8) -> u32 {
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.p.update_nz(cpu.y);
    OPCODE_TABLE[opcode as usize].base_cycles as u32
}
