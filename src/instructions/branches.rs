//! # Branch Instructions
//!
//! This module implements the relative branches:
//! - BCC/BCS: Carry clear/set
//! - BEQ/BNE: Zero set/clear
//! - BMI/BPL: Negative set/clear
//! - BVC/BVS: Overflow clear/set
//! - BRA: Always (65C02)
//!
//! ## Cycle Counts
//!
//! - Not taken: 2 cycles
//! - Taken, same page: 3 cycles
//! - Taken, target on another page: 4 cycles
//!
//! The page comparison uses the address of the instruction following the
//! branch, which is what PC holds once the offset is fetched.

use crate::flags;
use crate::mli::MliContext;
use crate::opcodes::Mnemonic;
use crate::{OPCODE_TABLE, CPU};

/// Executes any relative branch.
pub(crate) fn execute_branch<H: MliContext>(cpu: &mut CPU<H>, opcode: u8) -> u32 {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let offset = cpu.fetch_u8();

    let p = cpu.p;
    let taken = match metadata.mnemonic {
        Mnemonic::Bcc => !p.is_set(flags::C),
        Mnemonic::Bcs => p.is_set(flags::C),
        Mnemonic::Bne => !p.is_set(flags::Z),
        Mnemonic::Beq => p.is_set(flags::Z),
        Mnemonic::Bpl => !p.is_set(flags::N),
        Mnemonic::Bmi => p.is_set(flags::N),
        Mnemonic::Bvc => !p.is_set(flags::V),
        Mnemonic::Bvs => p.is_set(flags::V),
        _ => true,
    };

    let mut cycles = metadata.base_cycles as u32;
    if taken {
        cycles += cpu.branch(offset);
    }
    cycles
}
