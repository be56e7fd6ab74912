//! # Status Flag Instructions
//!
//! - CLC/SEC: Clear/Set Carry
//! - CLI/SEI: Clear/Set Interrupt Disable
//! - CLD/SED: Clear/Set Decimal
//! - CLV: Clear Overflow
//!
//! All take 2 cycles and affect only the named flag.

use crate::flags;
use crate::mli::MliContext;
use crate::opcodes::Mnemonic;
use crate::{OPCODE_TABLE, CPU};

pub(crate) fn execute_flag<H: MliContext>(cpu: &mut CPU<H>, opcode: u8) -> u32 {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let (flag, value) = match metadata.mnemonic {
        Mnemonic::Clc => (flags::C, false),
        Mnemonic::Sec => (flags::C, true),
        Mnemonic::Cli => (flags::I, false),
        Mnemonic::Sei => (flags::I, true),
        Mnemonic::Cld => (flags::D, false),
        Mnemonic::Sed => (flags::D, true),
        _ => (flags::V, false),
    };
    cpu.p.set_if(flag, value);

    metadata.base_cycles as u32
}
