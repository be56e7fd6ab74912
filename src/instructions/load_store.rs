//! # Load and Store Instructions
//!
//! This module implements:
//! - LDA, LDX, LDY: load a register, update N and Z
//! - STA, STX, STY: store a register, no flags
//! - STZ: store zero (65C02), no flags
//!
//! ## Cycle Counts
//!
//! Loads add one cycle when an indexed address crosses a page. Stores always
//! take their base cycle count.

use super::read_cycles;
use crate::mli::MliContext;
use crate::{OPCODE_TABLE, CPU};

/// Executes the LDA (Load Accumulator) instruction.
///
/// Supported modes: immediate, zp, zp,X, abs, abs,X, abs,Y, (zp,X), (zp),Y, (zp).
pub(crate) fn execute_lda<H: MliContext>(cpu: &mut CPU<H>, opcode: u8) -> u32 {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (value, page_crossed) = cpu.read_operand(metadata.addressing_mode);

    cpu.a = value;
    cpu.p.update_nz(value);

    read_cycles(metadata, page_crossed)
}

/// Executes the LDX (Load X Register) instruction.
pub(crate) fn execute_ldx<H: MliContext>(cpu: &mut CPU<H>, opcode: u8) -> u32 {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (value, page_crossed) = cpu.read_operand(metadata.addressing_mode);

    cpu.x = value;
    cpu.p.update_nz(value);

    read_cycles(metadata, page_crossed)
}

/// Executes the LDY (Load Y Register) instruction.
pub(crate) fn execute_ldy<H: MliContext>(cpu: &mut CPU<H>, opcode: u8) -> u32 {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (value, page_crossed) = cpu.read_operand(metadata.addressing_mode);

    cpu.y = value;
    cpu.p.update_nz(value);

    read_cycles(metadata, page_crossed)
}

fn store<H: MliContext>(cpu: &mut CPU<H>, opcode: u8, value: u8) -> u32 {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (addr, _) = cpu.operand_address(metadata.addressing_mode);
    cpu.write(addr, value);
    metadata.base_cycles as u32
}

/// Executes the STA (Store Accumulator) instruction.
pub(crate) fn execute_sta<H: MliContext>(cpu: &mut CPU<H>, opcode: u8) -> u32 {
    let value = cpu.a;
    store(cpu, opcode, value)
}

pub(crate) fn execute_stx<H: MliContext>(cpu: &mut CPU<H>, opcode: u8) -> u32 {
    let value = cpu.x;
    store(cpu, opcode, value)
}

pub(crate) fn execute_sty<H: MliContext>(cpu: &mut CPU<H>, opcode: u8) -> u32 {
    let value = cpu.y;
    store(cpu, opcode, value)
}

pub(crate) fn execute_stz<H: MliContext>(cpu: &mut CPU<H>, opcode: u8) -> u32 {
    store(cpu, opcode, 0)
}
