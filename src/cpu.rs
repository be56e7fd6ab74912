//! # CPU State and Execution
//!
//! This module contains the CPU struct representing the 65C02 processor state
//! and the fetch-decode-execute loop.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of next instruction
//! - **Stack pointer** (SP): 8-bit offset into stack page (0x0100-0x01FF)
//! - **Status register** (P): [`StatusFlags`] with the unused bit pinned to 1
//! - **Execution state**: Running, Waiting (after WAI) or Stopped (after STP)
//! - **Cycle counter**: u64 monotonically increasing cycle count
//!
//! ## Execution Model
//!
//! - `step()`: Execute one instruction, returning its cycle count
//! - `run()`: Execute up to N instructions, stopping early on WAI/STP
//!
//! Every bus access goes through [`Apple2Memory`]: reads use the read mapping,
//! writes the write mapping, and accesses to `$C080-$C08F` drive the Language
//! Card soft switches instead of touching memory.
//!
//! ## MLI Trap
//!
//! A `JSR` to [`CpuConfig::mli_entry`] never executes. The CPU reads the
//! inline call number and parameter-block pointer, hands them to the attached
//! [`MliContext`], and resumes six bytes past the JSR with the status in A and
//! Carry set on error.

use std::fmt::Write as _;

use log::{debug, info};

use crate::apple2mem::Apple2Memory;
use crate::flags::{self, StatusFlags};
use crate::memory::ReadBus;
use crate::mli::{self, MliContext, NoMli};
use crate::trace::ControlFlowTrace;
use crate::{instructions, AddressingMode, EmulatorError, Result};

/// Reset vector location.
pub const RESET_VECTOR: u16 = 0xFFFC;

/// IRQ/BRK vector location.
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// Zero-page pointer ProDOS programs jump through to print a character.
pub const COUT_VECTOR: u16 = 0x0036;

const STACK_PAGE: u16 = 0x0100;

/// Execution state of the processor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionState {
    /// Fetching and executing instructions.
    Running,

    /// Halted by WAI. Nothing in this emulator raises an interrupt, so the
    /// CPU stays here until the next reset.
    Waiting,

    /// Halted by STP until the next reset.
    Stopped,
}

/// One bus cycle, as recorded by the optional bus log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusAccess {
    Read(u16),
    Write(u16, u8),
}

/// CPU configuration.
///
/// # Examples
///
/// ```
/// use prodos8emu::CpuConfig;
///
/// let config = CpuConfig::default().with_capture_cout(true).with_trace_capacity(16);
/// assert_eq!(config.mli_entry, 0xBF00);
/// assert!(config.capture_cout);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CpuConfig {
    /// JSR target intercepted as the MLI trap.
    pub mli_entry: u16,

    /// Slots in the control-flow trace ring buffer.
    pub trace_capacity: usize,

    /// Transitions with both endpoints at or above this address are not traced.
    pub trace_filter_start: u16,

    /// Capture characters printed through `JMP ($0036)`.
    pub capture_cout: bool,
}

impl Default for CpuConfig {
    fn default() -> Self {
        Self {
            mli_entry: 0xBF00,
            trace_capacity: 100,
            trace_filter_start: 0xF800,
            capture_cout: false,
        }
    }
}

impl CpuConfig {
    pub fn with_mli_entry(mut self, addr: u16) -> Self {
        self.mli_entry = addr;
        self
    }

    pub fn with_trace_capacity(mut self, capacity: usize) -> Self {
        self.trace_capacity = capacity;
        self
    }

    pub fn with_trace_filter_start(mut self, addr: u16) -> Self {
        self.trace_filter_start = addr;
        self
    }

    pub fn with_capture_cout(mut self, enabled: bool) -> Self {
        self.capture_cout = enabled;
        self
    }
}

/// 65C02 CPU state and execution context.
///
/// The CPU owns the [`Apple2Memory`] it executes against and, optionally, the
/// [`MliContext`] that services ProDOS calls. `H` defaults to [`NoMli`], a
/// context type that can never be attached.
///
/// # Examples
///
/// ```
/// use prodos8emu::{Apple2Memory, WriteBus, CPU};
///
/// let mut memory = Apple2Memory::new();
/// memory.write(0x0300, 0xE8); // INX
///
/// let mut cpu: CPU = CPU::new(memory);
/// cpu.set_pc(0x0300);
/// cpu.step().unwrap();
///
/// assert_eq!(cpu.x(), 1);
/// assert_eq!(cpu.pc(), 0x0301);
/// assert_eq!(cpu.cycles(), 2);
/// ```
pub struct CPU<H: MliContext = NoMli> {
    /// Accumulator register
    pub(crate) a: u8,

    /// X index register
    pub(crate) x: u8,

    /// Y index register
    pub(crate) y: u8,

    /// Program counter (address of next instruction)
    pub(crate) pc: u16,

    /// Stack pointer (0x0100 + sp gives full stack address)
    pub(crate) sp: u8,

    /// Processor status register
    pub(crate) p: StatusFlags,

    /// Total CPU cycles executed
    pub(crate) cycles: u64,

    /// Instructions executed since the last reset
    pub(crate) instruction_count: u64,

    pub(crate) state: ExecutionState,

    pub(crate) memory: Apple2Memory,

    pub(crate) mli: Option<H>,

    pub(crate) config: CpuConfig,

    pub(crate) trace: ControlFlowTrace,

    pub(crate) bus_log: Option<Vec<BusAccess>>,

    /// Characters captured from the COUT vector
    pub(crate) cout: String,
}

impl<H: MliContext> CPU<H> {
    /// Creates a CPU bound to `memory` with the default configuration.
    ///
    /// The CPU is reset immediately: PC is loaded from the reset vector at
    /// 0xFFFC/0xFFFD as currently mapped for reads.
    pub fn new(memory: Apple2Memory) -> Self {
        Self::with_config(memory, CpuConfig::default())
    }

    /// Creates a CPU with a custom configuration.
    pub fn with_config(memory: Apple2Memory, config: CpuConfig) -> Self {
        let mut cpu = Self {
            a: 0x00,
            x: 0x00,
            y: 0x00,
            pc: 0x0000,
            sp: 0xFF,
            p: StatusFlags::POWER_ON,
            cycles: 0,
            instruction_count: 0,
            state: ExecutionState::Running,
            memory,
            mli: None,
            trace: ControlFlowTrace::new(config.trace_capacity, config.trace_filter_start),
            config,
            bus_log: None,
            cout: String::new(),
        };
        cpu.reset();
        cpu
    }

    /// Resets the processor.
    ///
    /// - PC is loaded from the reset vector through the read bus
    /// - SP = 0xFF, P = I | unused
    /// - Waiting/Stopped are cleared
    /// - The instruction counter restarts at zero
    ///
    /// A, X, Y, memory and the cycle counter are left alone. The jump is
    /// recorded in the trace as coming from `$0000`.
    pub fn reset(&mut self) {
        self.state = ExecutionState::Running;
        self.sp = 0xFF;
        self.p = StatusFlags::POWER_ON;

        let vector = self.read_u16(RESET_VECTOR);
        self.pc = vector;
        self.trace.record(0x0000, vector);
        self.instruction_count = 0;
    }

    /// Executes one instruction and returns the cycles it took.
    ///
    /// Returns `Ok(0)` without touching anything while Waiting or Stopped.
    ///
    /// # Errors
    ///
    /// [`EmulatorError::NoMliContext`] if the instruction is a JSR to the MLI
    /// entry and no context is attached. PC is left on the JSR.
    pub fn step(&mut self) -> Result<u32> {
        if self.state != ExecutionState::Running {
            return Ok(0);
        }

        self.instruction_count += 1;
        let opcode = self.fetch_u8();

        match instructions::execute(self, opcode) {
            Ok(cycles) => {
                self.cycles += cycles as u64;
                Ok(cycles)
            }
            Err(err) => {
                self.instruction_count -= 1;
                Err(err)
            }
        }
    }

    /// Executes up to `max_instructions` instructions.
    ///
    /// Stops early once the CPU is Waiting or Stopped. Returns the number of
    /// instructions executed.
    ///
    /// # Examples
    ///
    /// ```
    /// use prodos8emu::{Apple2Memory, ExecutionState, WriteBus, CPU};
    ///
    /// let mut memory = Apple2Memory::new();
    /// memory.write(0x0300, 0xEA); // NOP
    /// memory.write(0x0301, 0xEA); // NOP
    /// memory.write(0x0302, 0xDB); // STP
    ///
    /// let mut cpu: CPU = CPU::new(memory);
    /// cpu.set_pc(0x0300);
    ///
    /// assert_eq!(cpu.run(100).unwrap(), 3);
    /// assert_eq!(cpu.state(), ExecutionState::Stopped);
    /// ```
    pub fn run(&mut self, max_instructions: u64) -> Result<u64> {
        let mut executed = 0;
        while executed < max_instructions && self.state == ExecutionState::Running {
            self.step()?;
            executed += 1;
        }
        Ok(executed)
    }

    // ========== MLI Context ==========

    /// Attaches the OS-call context, returning the previous one.
    pub fn attach_mli(&mut self, mli: H) -> Option<H> {
        self.mli.replace(mli)
    }

    /// Detaches and returns the OS-call context.
    pub fn detach_mli(&mut self) -> Option<H> {
        self.mli.take()
    }

    pub fn mli(&self) -> Option<&H> {
        self.mli.as_ref()
    }

    pub fn mli_mut(&mut self) -> Option<&mut H> {
        self.mli.as_mut()
    }

    /// Services a trapped `JSR <mli_entry>` whose target operand has been
    /// fetched. PC points at the inline call number.
    pub(crate) fn mli_trap(&mut self, jsr_pc: u16) -> Result<u32> {
        let call_pc = self.pc;
        let call_number = self.read(call_pc);
        let param_block = self.read_u16(call_pc.wrapping_add(1));

        let Some(context) = self.mli.as_mut() else {
            self.pc = jsr_pc;
            return Err(EmulatorError::NoMliContext {
                pc: jsr_pc,
                call_number,
            });
        };

        let status = context.dispatch(&mut self.memory, call_number, param_block);

        let return_pc = call_pc.wrapping_add(3);
        self.pc = return_pc;
        self.trace.record(self.config.mli_entry, return_pc);

        self.a = status;
        self.p.set_if(flags::C, status != 0);
        self.p.update_nz(status);
        self.p.set_if(flags::D, false);

        self.log_mli_call(call_pc, call_number, param_block, status);

        Ok(6)
    }

    fn log_mli_call(&self, call_pc: u16, call_number: u8, param_block: u16, status: u8) {
        if !log::log_enabled!(log::Level::Debug) {
            return;
        }

        debug!(
            "{}",
            mli_log_line(self.instruction_count, call_pc, call_number, param_block, status)
        );

        if status == mli::ERR_UNSUPPORTED_STOR_TYPE {
            debug!("{}", self.stack_dump());
            debug!("{}", self.trace);
        }
    }

    // ========== Bus Access ==========

    /// Reads a byte as the CPU would, soft switches and bus log included.
    pub(crate) fn read(&mut self, addr: u16) -> u8 {
        if let Some(log) = self.bus_log.as_mut() {
            log.push(BusAccess::Read(addr));
        }
        if self.memory.apply_soft_switch(addr, true) {
            return 0;
        }
        self.memory.read(addr)
    }

    /// Writes a byte as the CPU would, soft switches and bus log included.
    pub(crate) fn write(&mut self, addr: u16, value: u8) {
        if let Some(log) = self.bus_log.as_mut() {
            log.push(BusAccess::Write(addr, value));
        }
        if self.memory.apply_soft_switch(addr, false) {
            return;
        }
        crate::memory::write_u8(&mut self.memory, addr, value);
    }

    pub(crate) fn read_u16(&mut self, addr: u16) -> u16 {
        let lo = self.read(addr) as u16;
        let hi = self.read(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }

    /// Reads a pointer from zero page; the high byte wraps within page zero.
    pub(crate) fn read_u16_zp(&mut self, zp: u8) -> u16 {
        let lo = self.read(zp as u16) as u16;
        let hi = self.read(zp.wrapping_add(1) as u16) as u16;
        (hi << 8) | lo
    }

    pub(crate) fn fetch_u8(&mut self) -> u8 {
        let value = self.read(self.pc);
        self.pc = self.pc.wrapping_add(1);
        value
    }

    pub(crate) fn fetch_u16(&mut self) -> u16 {
        let lo = self.fetch_u8() as u16;
        let hi = self.fetch_u8() as u16;
        (hi << 8) | lo
    }

    /// Extra bus cycle that re-reads the last instruction byte.
    pub(crate) fn dummy_read_last_instruction_byte(&mut self) {
        let addr = self.pc.wrapping_sub(1);
        self.read(addr);
    }

    // ========== Addressing ==========

    /// Resolves the effective address for `mode`, consuming its operand bytes.
    ///
    /// Returns the address and whether indexing carried into the high byte.
    /// `Immediate` and `Relative` resolve to the operand byte itself;
    /// `ZeroPageRelative` resolves to the zero-page byte and leaves the branch
    /// offset unread. `Implicit` and `Accumulator` consume nothing.
    pub(crate) fn operand_address(&mut self, mode: AddressingMode) -> (u16, bool) {
        match mode {
            AddressingMode::Implicit | AddressingMode::Accumulator => (self.pc, false),
            AddressingMode::Immediate | AddressingMode::Relative => {
                let addr = self.pc;
                self.pc = self.pc.wrapping_add(1);
                (addr, false)
            }
            AddressingMode::ZeroPage | AddressingMode::ZeroPageRelative => {
                (self.fetch_u8() as u16, false)
            }
            AddressingMode::ZeroPageX => (self.fetch_u8().wrapping_add(self.x) as u16, false),
            AddressingMode::ZeroPageY => (self.fetch_u8().wrapping_add(self.y) as u16, false),
            AddressingMode::Absolute => (self.fetch_u16(), false),
            AddressingMode::AbsoluteX => {
                let base = self.fetch_u16();
                index_address(base, self.x)
            }
            AddressingMode::AbsoluteY => {
                let base = self.fetch_u16();
                index_address(base, self.y)
            }
            AddressingMode::Indirect => {
                // No page-wrap bug on the 65C02.
                let ptr = self.fetch_u16();
                (self.read_u16(ptr), false)
            }
            AddressingMode::IndirectX => {
                let zp = self.fetch_u8().wrapping_add(self.x);
                (self.read_u16_zp(zp), false)
            }
            AddressingMode::IndirectY => {
                let zp = self.fetch_u8();
                let base = self.read_u16_zp(zp);
                index_address(base, self.y)
            }
            AddressingMode::ZeroPageIndirect => {
                let zp = self.fetch_u8();
                (self.read_u16_zp(zp), false)
            }
            AddressingMode::AbsoluteIndexedIndirect => {
                let ptr = self.fetch_u16().wrapping_add(self.x as u16);
                (self.read_u16(ptr), false)
            }
        }
    }

    /// Like [`operand_address`](Self::operand_address), but when indexing
    /// crosses a page the un-carried address is read and discarded first.
    pub(crate) fn indexed_address(&mut self, mode: AddressingMode) -> (u16, bool) {
        let (addr, page_crossed) = self.operand_address(mode);
        if page_crossed {
            self.read(addr.wrapping_sub(0x0100));
        }
        (addr, page_crossed)
    }

    /// Reads the operand for `mode`, with the page-cross dummy read.
    pub(crate) fn read_operand(&mut self, mode: AddressingMode) -> (u8, bool) {
        let (addr, page_crossed) = self.indexed_address(mode);
        (self.read(addr), page_crossed)
    }

    /// Read-modify-write of a memory operand.
    ///
    /// The last instruction byte is re-read between the read and the
    /// write-back.
    pub(crate) fn modify(&mut self, addr: u16, op: impl FnOnce(&mut StatusFlags, u8) -> u8) {
        let value = self.read(addr);
        self.dummy_read_last_instruction_byte();
        let result = op(&mut self.p, value);
        self.write(addr, result);
    }

    // ========== Stack ==========

    pub(crate) fn push_u8(&mut self, value: u8) {
        self.write(STACK_PAGE | self.sp as u16, value);
        self.sp = self.sp.wrapping_sub(1);
    }

    pub(crate) fn pull_u8(&mut self) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        self.read(STACK_PAGE | self.sp as u16)
    }

    /// Pushes high byte first, so the value sits little-endian in memory.
    pub(crate) fn push_u16(&mut self, value: u16) {
        self.push_u8((value >> 8) as u8);
        self.push_u8(value as u8);
    }

    pub(crate) fn pull_u16(&mut self) -> u16 {
        let lo = self.pull_u8() as u16;
        let hi = self.pull_u8() as u16;
        (hi << 8) | lo
    }

    // ========== Control Flow ==========

    /// Sets PC for an explicit jump and records it in the trace.
    pub(crate) fn jump(&mut self, from: u16, to: u16) {
        self.pc = to;
        self.trace.record(from, to);
    }

    /// Takes a relative branch from the current PC.
    ///
    /// Returns the penalty cycles: 1 for the taken branch, 1 more if the
    /// target is on another page.
    pub(crate) fn branch(&mut self, offset: u8) -> u32 {
        let from = self.pc;
        let to = from.wrapping_add(offset as i8 as u16);
        let page_crossed = (from & 0xFF00) != (to & 0xFF00);
        if page_crossed {
            self.dummy_read_last_instruction_byte();
        }
        self.jump(from, to);
        1 + page_crossed as u32
    }

    pub(crate) fn halt(&mut self, state: ExecutionState) {
        info!(
            "CPU {:?} at ${:04X} after {} instructions",
            state,
            self.pc.wrapping_sub(1),
            self.instruction_count
        );
        self.state = state;
    }

    /// Appends a character sent through the COUT vector.
    pub(crate) fn capture_cout(&mut self, value: u8) {
        let ch = value & 0x7F;
        match ch {
            0x0D => self.cout.push('\n'),
            0x20..=0x7E => self.cout.push(ch as char),
            0x00 => self.cout.push_str("\\0"),
            0x07 => self.cout.push_str("\\a"),
            0x08 => self.cout.push_str("\\b"),
            0x09 => self.cout.push_str("\\t"),
            0x0A => self.cout.push_str("\\n"),
            0x0B => self.cout.push_str("\\v"),
            0x0C => self.cout.push_str("\\f"),
            0x1B => self.cout.push_str("\\e"),
            0x7F => self.cout.push_str("\\x7f"),
            _ => {
                let _ = write!(self.cout, "\\x{:02X}", ch);
            }
        }
    }

    // ========== Diagnostics ==========

    /// Control-flow trace of explicit PC changes.
    pub fn trace(&self) -> &ControlFlowTrace {
        &self.trace
    }

    /// Starts recording every bus access. Any previous log is discarded.
    pub fn enable_bus_log(&mut self) {
        self.bus_log = Some(Vec::new());
    }

    /// Stops recording bus accesses.
    pub fn disable_bus_log(&mut self) {
        self.bus_log = None;
    }

    /// Drains the bus log, leaving logging enabled.
    ///
    /// Returns an empty vector if logging is off.
    pub fn take_bus_log(&mut self) -> Vec<BusAccess> {
        self.bus_log.as_mut().map(std::mem::take).unwrap_or_default()
    }

    /// Drains captured COUT output.
    pub fn take_cout(&mut self) -> String {
        std::mem::take(&mut self.cout)
    }

    /// Renders the used part of the stack page, 16 bytes per row.
    ///
    /// Reads go straight to memory and do not appear in the bus log.
    pub fn stack_dump(&self) -> String {
        let top: u16 = 0x01FF;
        let ptr = STACK_PAGE | self.sp as u16;
        let mut out = String::new();

        let _ = writeln!(
            out,
            "Stack dump (SP=${:02X}, used bytes: {}):",
            self.sp,
            top - ptr
        );

        if ptr >= top {
            out.push_str("  (stack empty)\n");
            return out;
        }

        let bus = self.memory.read_bus();
        for addr in (ptr + 1)..=top {
            if addr == ptr + 1 || (addr - STACK_PAGE) % 16 == 0 {
                if addr != ptr + 1 {
                    out.push('\n');
                }
                let _ = write!(out, "  ${:04X}:", addr);
            }
            let _ = write!(out, " {:02X}", bus.read(addr));
        }
        out.push('\n');
        out
    }

    // ========== Register Getters ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the stack pointer value.
    ///
    /// Note: The full stack address is 0x0100 + SP. The stack grows downward from 0x01FF.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Returns the status register as a packed byte (`NV-BDIZC`, bit 5 always 1).
    pub fn status(&self) -> u8 {
        self.p.bits()
    }

    /// Returns the total number of CPU cycles executed since creation.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Returns the number of instructions executed since the last reset.
    pub fn instruction_count(&self) -> u64 {
        self.instruction_count
    }

    pub fn state(&self) -> ExecutionState {
        self.state
    }

    pub fn is_waiting(&self) -> bool {
        self.state == ExecutionState::Waiting
    }

    pub fn is_stopped(&self) -> bool {
        self.state == ExecutionState::Stopped
    }

    pub fn config(&self) -> &CpuConfig {
        &self.config
    }

    pub fn memory(&self) -> &Apple2Memory {
        &self.memory
    }

    pub fn memory_mut(&mut self) -> &mut Apple2Memory {
        &mut self.memory
    }

    // ========== Status Flag Getters ==========

    /// Returns true if the Negative flag is set.
    pub fn flag_n(&self) -> bool {
        self.p.is_set(flags::N)
    }

    /// Returns true if the Overflow flag is set.
    pub fn flag_v(&self) -> bool {
        self.p.is_set(flags::V)
    }

    /// Returns true if the Decimal mode flag is set.
    pub fn flag_d(&self) -> bool {
        self.p.is_set(flags::D)
    }

    /// Returns true if the Interrupt Disable flag is set.
    pub fn flag_i(&self) -> bool {
        self.p.is_set(flags::I)
    }

    /// Returns true if the Zero flag is set.
    pub fn flag_z(&self) -> bool {
        self.p.is_set(flags::Z)
    }

    /// Returns true if the Carry flag is set.
    pub fn flag_c(&self) -> bool {
        self.p.is_set(flags::C)
    }

    // ========== Setters ==========

    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    /// Loads P from a byte; bit 5 is forced on.
    pub fn set_status(&mut self, value: u8) {
        self.p = StatusFlags::from_byte(value);
    }

    pub fn set_flag_n(&mut self, value: bool) {
        self.p.set_if(flags::N, value);
    }

    pub fn set_flag_v(&mut self, value: bool) {
        self.p.set_if(flags::V, value);
    }

    pub fn set_flag_d(&mut self, value: bool) {
        self.p.set_if(flags::D, value);
    }

    pub fn set_flag_i(&mut self, value: bool) {
        self.p.set_if(flags::I, value);
    }

    pub fn set_flag_z(&mut self, value: bool) {
        self.p.set_if(flags::Z, value);
    }

    pub fn set_flag_c(&mut self, value: bool) {
        self.p.set_if(flags::C, value);
    }
}

/// Adds an index register to a base address.
///
/// Returns the address and whether the low-byte add carried into the high
/// byte.
pub(crate) fn index_address(base: u16, index: u8) -> (u16, bool) {
    let addr = base.wrapping_add(index as u16);
    (addr, (base & 0xFF00) != (addr & 0xFF00))
}

/// One MLI log line. `call_pc` is the address of the inline call number,
/// three bytes past the JSR.
fn mli_log_line(
    instruction: u64,
    call_pc: u16,
    call_number: u8,
    param_block: u16,
    status: u8,
) -> String {
    let outcome = if status == mli::ERR_NO_ERROR {
        "OK".to_string()
    } else {
        match mli::error_name(status) {
            "" => "ERROR".to_string(),
            name => format!("ERROR ({})", name),
        }
    };

    format!(
        "@{} PC=${:04X} MLI call=${:02X} ({}) param=${:04X} result=${:02X} {}",
        instruction,
        call_pc,
        call_number,
        mli::call_name(call_number),
        param_block,
        status,
        outcome
    )
}
