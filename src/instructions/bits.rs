//! # 65C02 Bit Instructions
//!
//! - TSB/TRB: test the accumulator against memory, then set or reset those bits
//! - RMBn/SMBn: reset or set bit n of a zero-page byte (Rockwell/WDC)
//! - BBRn/BBSn: branch if bit n of a zero-page byte is reset or set
//!
//! TSB and TRB set Z from `A & M` taken before the write-back and leave N/V alone.

use crate::flags;
use crate::mli::MliContext;
use crate::{OPCODE_TABLE, CPU};

/// Executes TSB (Test and Set Bits).
pub(crate) fn execute_tsb<H: MliContext>(cpu: &mut CPU<H>, opcode: u8) -> u32 {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (addr, _) = cpu.operand_address(metadata.addressing_mode);
    let a = cpu.a;

    cpu.modify(addr, |p, value| {
        p.set_if(flags::Z, value & a == 0);
        value | a
    });

    metadata.base_cycles as u32
}

/// Executes TRB (Test and Reset Bits).
pub(crate) fn execute_trb<H: MliContext>(cpu: &mut CPU<H>, opcode: u8) -> u32 {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (addr, _) = cpu.operand_address(metadata.addressing_mode);
    let a = cpu.a;

    cpu.modify(addr, |p, value| {
        p.set_if(flags::Z, value & a == 0);
        value & !a
    });

    metadata.base_cycles as u32
}

pub(crate) fn execute_rmb<H: MliContext>(cpu: &mut CPU<H>, opcode: u8, bit: u8) -> u32 {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (addr, _) = cpu.operand_address(metadata.addressing_mode);

    cpu.modify(addr, |_, value| value & !(1 << bit));

    metadata.base_cycles as u32
}

pub(crate) fn execute_smb<H: MliContext>(cpu: &mut CPU<H>, opcode: u8, bit: u8) -> u32 {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (addr, _) = cpu.operand_address(metadata.addressing_mode);

    cpu.modify(addr, |_, value| value | (1 << bit));

    metadata.base_cycles as u32
}

pub(crate) fn execute_bbr<H: MliContext>(cpu: &mut CPU<H>, opcode: u8, bit: u8) -> u32 {
    branch_on_bit(cpu, opcode, bit, false)
}

pub(crate) fn execute_bbs<H: MliContext>(cpu: &mut CPU<H>, opcode: u8, bit: u8) -> u32 {
    branch_on_bit(cpu, opcode, bit, true)
}

/// `BBxn zp,rel`: both operand bytes are fetched before the zero-page byte is read.
fn branch_on_bit<H: MliContext>(cpu: &mut CPU<H>, opcode: u8, bit: u8, want_set: bool) -> u32 {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (addr, _) = cpu.operand_address(metadata.addressing_mode);
    let offset = cpu.fetch_u8();
    let value = cpu.read(addr);

    let mut cycles = metadata.base_cycles as u32;
    if (value & (1 << bit) != 0) == want_set {
        cycles += cpu.branch(offset);
    }
    cycles
}
