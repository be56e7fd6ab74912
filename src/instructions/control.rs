//! # Control Flow Instructions
//!
//! This module implements control flow operations:
//! - JMP: absolute, indirect and absolute indexed indirect
//! - JSR/RTS: subroutine call and return, with the MLI trap
//! - BRK/RTI: software interrupt and return
//! - NOP, including the reserved opcodes the 65C02 executes as NOPs
//! - WAI/STP: halt states

use log::trace;

use crate::cpu::{ExecutionState, COUT_VECTOR, IRQ_VECTOR};
use crate::flags::{self, StatusFlags};
use crate::mli::MliContext;
use crate::{AddressingMode, Result, OPCODE_TABLE, CPU};

/// Executes the BRK (Force Interrupt) instruction.
///
/// BRK is two bytes long: the byte after the opcode is a signature the
/// handler can inspect, and the pushed return address skips it.
///
/// # Operation
///
/// 1. Push PC + 2 (high byte first)
/// 2. Push status with B and bit 5 set
/// 3. Set I, clear D (65C02)
/// 4. Load PC from the IRQ vector at 0xFFFE/0xFFFF
pub(crate) fn execute_brk<H: MliContext>(cpu: &mut CPU<H>, opcode: u8) -> u32 {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let brk_pc = cpu.pc.wrapping_sub(1);

    let return_addr = cpu.pc.wrapping_add(1);
    cpu.push_u16(return_addr);
    cpu.push_u8(cpu.p.to_byte_brk());

    cpu.p.set_if(flags::I, true);
    cpu.p.set_if(flags::D, false);

    let vector = cpu.read_u16(IRQ_VECTOR);
    cpu.jump(brk_pc, vector);

    metadata.base_cycles as u32
}

/// Executes the JMP instruction.
///
/// `JMP ($0036)` is how ProDOS programs print through COUT; when capture is
/// enabled the accumulator is recorded before the jump.
pub(crate) fn execute_jmp<H: MliContext>(cpu: &mut CPU<H>, opcode: u8) -> u32 {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let jmp_pc = cpu.pc.wrapping_sub(1);

    let target = match metadata.addressing_mode {
        AddressingMode::Indirect => {
            let ptr = cpu.fetch_u16();
            if ptr == COUT_VECTOR && cpu.config.capture_cout {
                cpu.capture_cout(cpu.a);
            }
            cpu.read_u16(ptr)
        }
        mode => cpu.operand_address(mode).0,
    };

    cpu.jump(jmp_pc, target);
    metadata.base_cycles as u32
}

/// Executes the JSR (Jump to Subroutine) instruction.
///
/// Pushes the address of the last operand byte (return address - 1) and
/// jumps. A JSR to the configured MLI entry is serviced by the trap instead.
pub(crate) fn execute_jsr<H: MliContext>(cpu: &mut CPU<H>, opcode: u8) -> Result<u32> {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let jsr_pc = cpu.pc.wrapping_sub(1);
    let target = cpu.fetch_u16();

    if target == cpu.config.mli_entry {
        return cpu.mli_trap(jsr_pc);
    }

    let return_addr = cpu.pc.wrapping_sub(1);
    cpu.push_u16(return_addr);
    cpu.jump(jsr_pc, target);

    Ok(metadata.base_cycles as u32)
}

/// Executes the RTS (Return from Subroutine) instruction.
pub(crate) fn execute_rts<H: MliContext>(cpu: &mut CPU<H>, opcode: u8) -> u32 {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let rts_pc = cpu.pc.wrapping_sub(1);

    let target = cpu.pull_u16().wrapping_add(1);
    cpu.jump(rts_pc, target);

    metadata.base_cycles as u32
}

/// Executes the RTI (Return from Interrupt) instruction.
///
/// Pulls status (bit 5 forced on) then PC. Unlike RTS, the pulled address is
/// used as-is.
pub(crate) fn execute_rti<H: MliContext>(cpu: &mut CPU<H>, opcode: u8) -> u32 {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let rti_pc = cpu.pc.wrapping_sub(1);

    cpu.p = StatusFlags::from_byte(cpu.pull_u8());
    let target = cpu.pull_u16();
    cpu.jump(rti_pc, target);

    metadata.base_cycles as u32
}

/// Executes NOP and the reserved opcodes.
///
/// Reserved opcodes consume their operand bytes and perform the same operand
/// read a real load would, then do nothing.
pub(crate) fn execute_nop<H: MliContext>(cpu: &mut CPU<H>, opcode: u8) -> u32 {
    let metadata = &OPCODE_TABLE[opcode as usize];

    match metadata.addressing_mode {
        AddressingMode::Implicit => {}
        mode => {
            let (addr, _) = cpu.operand_address(mode);
            cpu.read(addr);
        }
    }

    if opcode != 0xEA {
        trace!("reserved opcode ${:02X} executed as NOP", opcode);
    }

    metadata.base_cycles as u32
}

/// Executes WAI. The CPU stays in Waiting until reset.
pub(crate) fn execute_wai<H: MliContext>(cpu: &mut CPU<H>, opcode: u8) -> u32 {
    cpu.halt(ExecutionState::Waiting);
    OPCODE_TABLE[opcode as usize].base_cycles as u32
}

/// Executes STP. The CPU stays in Stopped until reset.
pub(crate) fn execute_stp<H: MliContext>(cpu: &mut CPU<H>, opcode: u8) -> u32 {
    cpu.halt(ExecutionState::Stopped);
    OPCODE_TABLE[opcode as usize].base_cycles as u32
}
