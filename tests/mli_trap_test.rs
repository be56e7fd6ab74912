//! Tests for the MLI JSR trap.
//!
//! Tests cover:
//! - Descriptor decoding (call number, parameter block) and the resume address
//! - Status in A, Carry on error, N/Z from the status, D cleared
//! - Missing context reported as an error with PC left on the JSR
//! - Handler access to emulated memory
//! - Trace entry, configurable entry point, boxed and borrowed contexts

use prodos8emu::mli::{ERR_IO_ERROR, ERR_NO_ERROR, MLI_GET_PREFIX, MLI_QUIT};
use prodos8emu::{
    Apple2Memory, CpuConfig, EmulatorError, MliContext, ReadBus, WriteBus, CPU,
};

const PROGRAM: u16 = 0x2000;

/// Records every call and answers with a fixed status.
#[derive(Default)]
struct Recorder {
    status: u8,
    calls: Vec<(u8, u16)>,
}

impl Recorder {
    fn returning(status: u8) -> Self {
        Self {
            status,
            calls: Vec::new(),
        }
    }
}

impl MliContext for Recorder {
    fn dispatch(&mut self, _memory: &mut Apple2Memory, call_number: u8, param_block: u16) -> u8 {
        self.calls.push((call_number, param_block));
        self.status
    }
}

/// GET_PREFIX-style handler: writes a counted string to the buffer pointer
/// held at param+1.
struct PrefixWriter;

impl MliContext for PrefixWriter {
    fn dispatch(&mut self, memory: &mut Apple2Memory, call_number: u8, param_block: u16) -> u8 {
        if call_number != MLI_GET_PREFIX {
            return 0x01;
        }
        let buffer = prodos8emu::memory::read_u16_le(&*memory, param_block + 1);
        let prefix = b"/HD/";
        memory.write(buffer, prefix.len() as u8);
        for (i, &byte) in prefix.iter().enumerate() {
            memory.write(buffer + 1 + i as u16, byte);
        }
        ERR_NO_ERROR
    }
}

fn rom_with_reset_vector(vector: u16) -> Vec<u8> {
    let mut rom = vec![0u8; 0x3000];
    rom[0x2FFC] = vector as u8;
    rom[0x2FFD] = (vector >> 8) as u8;
    rom
}

fn setup_memory() -> Apple2Memory {
    let mut memory = Apple2Memory::new();
    memory.load_rom(&rom_with_reset_vector(PROGRAM)).unwrap();
    memory
}

/// Places `JSR $BF00; .byte call; .word param` at PROGRAM.
fn write_mli_call(memory: &mut Apple2Memory, call_number: u8, param_block: u16) {
    let bytes = [
        0x20,
        0x00,
        0xBF,
        call_number,
        param_block as u8,
        (param_block >> 8) as u8,
    ];
    for (i, byte) in bytes.into_iter().enumerate() {
        memory.write(PROGRAM + i as u16, byte);
    }
}

fn setup_cpu_with(status: u8, call_number: u8, param_block: u16) -> CPU<Recorder> {
    let mut memory = setup_memory();
    write_mli_call(&mut memory, call_number, param_block);
    let mut cpu = CPU::new(memory);
    cpu.attach_mli(Recorder::returning(status));
    cpu
}

// ========== Successful Calls ==========

#[test]
fn test_trap_success() {
    let mut cpu = setup_cpu_with(ERR_NO_ERROR, MLI_GET_PREFIX, 0x3000);
    cpu.set_a(0x99);
    cpu.set_flag_c(true);
    let sp_before = cpu.sp();

    let cycles = cpu.step().unwrap();

    assert_eq!(cpu.pc(), PROGRAM + 6, "resumes after the 3-byte descriptor");
    assert_eq!(cpu.a(), 0x00);
    assert!(!cpu.flag_c());
    assert!(cpu.flag_z());
    assert!(!cpu.flag_n());
    assert_eq!(cpu.sp(), sp_before, "the trap pushes nothing");
    assert_eq!(cycles, 6);
    assert_eq!(cpu.mli().unwrap().calls, vec![(MLI_GET_PREFIX, 0x3000)]);
}

#[test]
fn test_trap_error_sets_carry() {
    let mut cpu = setup_cpu_with(ERR_IO_ERROR, 0xC8, 0x0300);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x27);
    assert!(cpu.flag_c());
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());
    assert_eq!(cpu.pc(), 0x2006);
}

#[test]
fn test_trap_high_status_sets_negative() {
    let mut cpu = setup_cpu_with(0x80, 0xC8, 0x0300);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x80);
    assert!(cpu.flag_c());
    assert!(cpu.flag_n());
}

#[test]
fn test_trap_clears_decimal_and_keeps_other_flags() {
    let mut cpu = setup_cpu_with(ERR_NO_ERROR, MLI_QUIT, 0x0300);
    cpu.set_flag_d(true);
    cpu.set_flag_v(true);
    cpu.set_flag_i(false);

    cpu.step().unwrap();

    assert!(!cpu.flag_d());
    assert!(cpu.flag_v());
    assert!(!cpu.flag_i());
}

#[test]
fn test_trap_counts_one_instruction_and_six_cycles() {
    let mut cpu = setup_cpu_with(ERR_NO_ERROR, MLI_QUIT, 0x0300);

    cpu.step().unwrap();

    assert_eq!(cpu.instruction_count(), 1);
    assert_eq!(cpu.cycles(), 6);
}

#[test]
fn test_trap_records_trace_entry() {
    let mut cpu = setup_cpu_with(ERR_NO_ERROR, MLI_QUIT, 0x0300);

    cpu.step().unwrap();

    let last = cpu.trace().last().unwrap();
    assert_eq!((last.from, last.to), (0xBF00, 0x2006));
}

#[test]
fn test_handler_writes_memory() {
    let mut memory = setup_memory();
    write_mli_call(&mut memory, MLI_GET_PREFIX, 0x0300);
    // param block: count=1, buffer=$0280
    memory.write(0x0300, 0x01);
    memory.write(0x0301, 0x80);
    memory.write(0x0302, 0x02);

    let mut cpu = CPU::new(memory);
    cpu.attach_mli(PrefixWriter);
    cpu.step().unwrap();

    assert_eq!(cpu.a(), ERR_NO_ERROR);
    let bytes = prodos8emu::memory::read_counted_string(&cpu.memory().read_bus(), 0x0280, 64);
    assert_eq!(bytes, b"/HD/".to_vec());
}

#[test]
fn test_consecutive_calls() {
    let mut memory = setup_memory();
    write_mli_call(&mut memory, 0xC4, 0x0300);
    // Second call directly after the first
    let second = [0x20, 0x00, 0xBF, 0xC5, 0x10, 0x03];
    for (i, byte) in second.into_iter().enumerate() {
        memory.write(PROGRAM + 6 + i as u16, byte);
    }

    let mut cpu = CPU::new(memory);
    cpu.attach_mli(Recorder::returning(0));
    assert_eq!(cpu.run(2).unwrap(), 2);

    assert_eq!(cpu.pc(), PROGRAM + 12);
    assert_eq!(cpu.mli().unwrap().calls, vec![(0xC4, 0x0300), (0xC5, 0x0310)]);
}

// ========== Missing Context ==========

#[test]
fn test_trap_without_context_is_an_error() {
    let mut memory = setup_memory();
    write_mli_call(&mut memory, 0xC8, 0x0300);
    let mut cpu: CPU = CPU::new(memory);

    let err = cpu.step().unwrap_err();

    assert!(matches!(
        err,
        EmulatorError::NoMliContext { pc: 0x2000, call_number: 0xC8 }
    ));
    assert_eq!(cpu.pc(), PROGRAM, "PC stays on the JSR");
    assert_eq!(cpu.instruction_count(), 0);
    assert_eq!(cpu.cycles(), 0);
    assert_eq!(cpu.sp(), 0xFF);
}

#[test]
fn test_run_propagates_missing_context() {
    let mut memory = setup_memory();
    memory.write(0x1FFF, 0xEA); // NOP before the call
    write_mli_call(&mut memory, 0xC8, 0x0300);
    let mut cpu: CPU = CPU::new(memory);
    cpu.set_pc(0x1FFF);

    assert!(cpu.run(10).is_err());
    assert_eq!(cpu.pc(), PROGRAM);
    assert_eq!(cpu.instruction_count(), 1);
}

#[test]
fn test_detached_context_stops_servicing() {
    let mut cpu = setup_cpu_with(ERR_NO_ERROR, MLI_QUIT, 0x0300);

    let recorder = cpu.detach_mli().unwrap();
    assert!(recorder.calls.is_empty());

    assert!(matches!(
        cpu.step(),
        Err(EmulatorError::NoMliContext { .. })
    ));

    // Reattaching resumes from the same JSR
    assert!(cpu.attach_mli(recorder).is_none());
    cpu.step().unwrap();
    assert_eq!(cpu.pc(), 0x2006);
}

// ========== Configuration ==========

#[test]
fn test_custom_entry_point() {
    let mut memory = setup_memory();
    // JSR $9000 ; .byte $C4 ; .word $0300
    for (i, byte) in [0x20, 0x00, 0x90, 0xC4, 0x00, 0x03].into_iter().enumerate() {
        memory.write(PROGRAM + i as u16, byte);
    }

    let config = CpuConfig::default().with_mli_entry(0x9000);
    let mut cpu = CPU::with_config(memory, config);
    cpu.attach_mli(Recorder::returning(0));
    cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0x2006);
    assert_eq!(cpu.mli().unwrap().calls, vec![(0xC4, 0x0300)]);
}

#[test]
fn test_jsr_elsewhere_is_a_normal_call() {
    let mut memory = setup_memory();
    // JSR $BF03
    for (i, byte) in [0x20, 0x03, 0xBF].into_iter().enumerate() {
        memory.write(PROGRAM + i as u16, byte);
    }
    let mut cpu = CPU::new(memory);
    cpu.attach_mli(Recorder::default());

    cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0xBF03);
    assert_eq!(cpu.sp(), 0xFD);
    assert!(cpu.mli().unwrap().calls.is_empty());
}

#[test]
fn test_boxed_dyn_context() {
    let mut memory = setup_memory();
    write_mli_call(&mut memory, 0xCA, 0x0300);

    let mut cpu: CPU<Box<dyn MliContext>> = CPU::new(memory);
    cpu.attach_mli(Box::new(Recorder::returning(0x4C)));
    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x4C);
    assert!(cpu.flag_c());
}

#[test]
fn test_borrowed_context() {
    let mut memory = setup_memory();
    write_mli_call(&mut memory, 0xCA, 0x0300);
    let mut recorder = Recorder::returning(0);

    {
        let mut cpu = CPU::new(memory);
        cpu.attach_mli(&mut recorder);
        cpu.step().unwrap();
        assert_eq!(cpu.memory().read_bus().read(PROGRAM + 3), 0xCA);
    }

    assert_eq!(recorder.calls, vec![(0xCA, 0x0300)]);
}

#[test]
fn test_trap_sees_lc_mapping() {
    struct ReadsLc(u8);

    impl MliContext for ReadsLc {
        fn dispatch(&mut self, memory: &mut Apple2Memory, _call: u8, _param: u16) -> u8 {
            self.0 = memory.read_bus().read(0xD000);
            0
        }
    }

    let mut memory = setup_memory();
    write_mli_call(&mut memory, 0xC4, 0x0300);
    memory.set_lc_write_enabled(true);
    memory.write(0xD000, 0x5A);

    let mut cpu = CPU::new(memory);
    cpu.memory_mut().set_lc_read_enabled(true);
    cpu.attach_mli(ReadsLc(0));
    cpu.step().unwrap();

    assert_eq!(cpu.mli().unwrap().0, 0x5A);
}
