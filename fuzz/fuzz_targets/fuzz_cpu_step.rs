//! Fuzz target for CPU step execution.
//!
//! Builds an arbitrary register file, memory image and Language Card state,
//! then executes a few instructions. Any panic is a bug.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use prodos8emu::{Apple2Memory, MliContext, WriteBus, CPU};

/// Arbitrary CPU initial state for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    status: u8,
}

/// Language Card switches applied before execution
#[derive(Debug, Arbitrary)]
struct FuzzLanguageCard {
    read_enabled: bool,
    write_enabled: bool,
    bank1: bool,
}

/// Memory regions for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Bytes at the PC location (a few instructions)
    instruction_bytes: [u8; 16],
    zero_page: [u8; 256],
    stack_page: [u8; 256],
    /// Placed at $C000 so page-crossing reads can land on soft switches
    io_page: [u8; 256],
}

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    language_card: FuzzLanguageCard,
    memory: FuzzMemory,
    attach_mli: bool,
    mli_status: u8,
}

struct FixedStatus(u8);

impl MliContext for FixedStatus {
    fn dispatch(&mut self, _memory: &mut Apple2Memory, _call_number: u8, _param_block: u16) -> u8 {
        self.0
    }
}

fn write_region(memory: &mut Apple2Memory, start: u16, bytes: &[u8]) {
    for (i, &byte) in bytes.iter().enumerate() {
        memory.write(start.wrapping_add(i as u16), byte);
    }
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = Apple2Memory::new();

    write_region(&mut memory, 0x0000, &input.memory.zero_page);
    write_region(&mut memory, 0x0100, &input.memory.stack_page);
    write_region(&mut memory, 0x0800, &input.memory.instruction_bytes);
    write_region(&mut memory, 0xC000, &input.memory.io_page);

    memory.set_lc_read_enabled(input.language_card.read_enabled);
    memory.set_lc_write_enabled(input.language_card.write_enabled);
    memory.set_lc_bank1(input.language_card.bank1);

    let mut cpu: CPU<FixedStatus> = CPU::new(memory);
    if input.attach_mli {
        cpu.attach_mli(FixedStatus(input.mli_status));
    }

    cpu.set_pc(0x0800);
    cpu.set_a(input.cpu_state.a);
    cpu.set_x(input.cpu_state.x);
    cpu.set_y(input.cpu_state.y);
    cpu.set_sp(input.cpu_state.sp);
    cpu.set_status(input.cpu_state.status);

    // Only a JSR to the MLI entry without a context may fail
    let _ = cpu.run(8);

    assert!(cpu.status() & 0x20 != 0, "unused status bit must stay set");
});
