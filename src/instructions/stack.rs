//! # Stack Instructions
//!
//! This module implements stack operations:
//! - PHA/PLA: accumulator
//! - PHP/PLP: status register
//! - PHX/PLX, PHY/PLY: index registers (65C02)
//!
//! The stack lives at 0x0100-0x01FF and grows downward. Pushes write then
//! decrement SP; pulls increment SP then read. SP wraps within the page.
//!
//! PHP pushes status with B and bit 5 set. PLP forces bit 5 on and otherwise
//! takes the pulled byte as-is.

use crate::flags::StatusFlags;
use crate::mli::MliContext;
use crate::{OPCODE_TABLE, CPU};

fn cycles(opcode: u8) -> u32 {
    OPCODE_TABLE[opcode as usize].base_cycles as u32
}

/// Executes the PHA (Push Accumulator) instruction.
pub(crate) fn execute_pha<H: MliContext>(cpu: &mut CPU<H>, opcode: u8) -> u32 {
    cpu.push_u8(cpu.a);
    cycles(opcode)
}

/// Executes the PHP (Push Processor Status) instruction.
pub(crate) fn execute_php<H: MliContext>(cpu: &mut CPU<H>, opcode: u8) -> u32 {
    cpu.push_u8(cpu.p.to_byte_brk());
    cycles(opcode)
}

pub(crate) fn execute_phx<H: MliContext>(cpu: &mut CPU<H>, opcode: u8) -> u32 {
    cpu.push_u8(cpu.x);
    cycles(opcode)
}

pub(crate) fn execute_phy<H: MliContext>(cpu: &mut CPU<H>, opcode: u8) -> u32 {
    cpu.push_u8(cpu.y);
    cycles(opcode)
}

/// Executes the PLA (Pull Accumulator) instruction.
pub(crate) fn execute_pla<H: MliContext>(cpu: &mut CPU<H>, opcode: u8) -> u32 {
    cpu.a = cpu.pull_u8();
    cpu.p.update_nz(cpu.a);
    cycles(opcode)
}

/// Executes the PLP (Pull Processor Status) instruction.
pub(crate) fn execute_plp<H: MliContext>(cpu: &mut CPU<H>, opcode: u8) -> u32 {
    cpu.p = StatusFlags::from_byte(cpu.pull_u8());
    cycles(opcode)
}

pub(crate) fn execute_plx<H: MliContext>(cpu: &mut CPU<H>, opcode: u8) -> u32 {
    cpu.x = cpu.pull_u8();
    cpu.p.update_nz(cpu.x);
    cycles(opcode)
}

pub(crate) fn execute_ply<H: MliContext>(cpu: &mut CPU<H>, opcode: u8) -> u32 {
    cpu.y = cpu.pull_u8();
    cpu.p.update_nz(cpu.y);
    cycles(opcode)
}
