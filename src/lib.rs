//! # 65C02 + Apple II Language Card Emulator Core
//!
//! An instruction-level WDC 65C02 emulator running against an Apple II 64KB
//! address space with Language Card bank switching, plus the JSR trap that
//! hands ProDOS 8 MLI calls to a host-side handler.
//!
//! ## Quick Start
//!
//! ```rust
//! use prodos8emu::{Apple2Memory, WriteBus, CPU};
//!
//! let mut memory = Apple2Memory::new();
//!
//! // Reset vector lives in LC RAM here, so enable LC read and write first.
//! memory.set_lc_read_enabled(true);
//! memory.set_lc_write_enabled(true);
//! memory.write(0xFFFC, 0x00);
//! memory.write(0xFFFD, 0x20);
//! memory.write(0x2000, 0xA9); // LDA #$42
//! memory.write(0x2001, 0x42);
//!
//! let mut cpu: CPU = CPU::new(memory);
//! cpu.reset();
//! assert_eq!(cpu.pc(), 0x2000);
//!
//! let cycles = cpu.step().unwrap();
//! assert_eq!(cycles, 2);
//! assert_eq!(cpu.a(), 0x42);
//! ```
//!
//! ## Architecture
//!
//! - **Bus split**: [`ReadBus`]/[`WriteBus`] keep the read and write paths
//!   apart, so `$D000-$FFFF` can read ROM while writes land in LC RAM
//! - **Table-driven decoding**: every opcode is described once in
//!   [`OPCODE_TABLE`]; instruction modules look up their addressing mode and
//!   base cycle count there
//! - **Explicit OS boundary**: MLI calls go through the [`MliContext`] trait;
//!   a trap with no context attached is a [`EmulatorError::NoMliContext`]
//!
//! ## Modules
//!
//! - `memory` - bus traits and little-endian helpers
//! - `apple2mem` - banked memory with Language Card soft switches
//! - `cpu` - CPU state and execution logic
//! - `opcodes` - opcode metadata table
//! - `addressing` - addressing mode enumeration
//! - `trace` - control-flow ring buffer
//! - `mli` - OS-call boundary and ProDOS naming tables

pub mod addressing;
pub mod apple2mem;
pub mod cpu;
pub mod flags;
pub mod memory;
pub mod mli;
pub mod opcodes;
pub mod trace;

// Internal instruction implementations (not part of public API)
mod instructions;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export public API
pub use addressing::AddressingMode;
pub use apple2mem::{Apple2Memory, BankSource, LanguageCardState, LcBank, ReadView, WriteView};
pub use cpu::{BusAccess, CpuConfig, ExecutionState, CPU};
pub use flags::StatusFlags;
pub use memory::{FlatMemory, ReadBus, WriteBus};
pub use mli::{MliContext, NoMli};
pub use opcodes::{Mnemonic, OpcodeMetadata, OPCODE_TABLE};
pub use trace::{ControlFlowTrace, TraceEntry};

/// Errors surfaced by the emulator core.
///
/// All of these are configuration errors: they abort the triggering call and
/// are never retried internally.
#[derive(Debug, thiserror::Error)]
pub enum EmulatorError {
    /// A ROM image was not exactly 12KB.
    #[error("ROM image must be {expected} bytes, got {actual}")]
    RomSizeMismatch { expected: usize, actual: usize },

    /// The MLI trap fired but no OS-call context is attached.
    #[error("MLI call ${call_number:02X} at ${pc:04X} with no MLI context attached")]
    NoMliContext { pc: u16, call_number: u8 },

    /// A ROM file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, EmulatorError>;
