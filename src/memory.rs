//! # Memory Bus Abstraction
//!
//! This module provides the bus traits that decouple the CPU and the MLI layer
//! from a specific memory implementation, plus the little-endian helpers used
//! to pull multi-byte values and counted strings out of emulated memory.
//!
//! ## Address Decomposition
//!
//! The 64KB address space is split into 16 banks of 4KB:
//!
//! - bank   = `addr >> 12`
//! - offset = `addr & 0x0FFF`
//!
//! ## Wraparound
//!
//! Multi-byte accesses wrap at the top of the address space: a 16-bit read at
//! `0xFFFF` takes its high byte from `0x0000`. The wrap is address-space wide,
//! never bank-local.
//!
//! ## Design Principles
//!
//! - No bus errors: every 16-bit address is valid, reads and writes always succeed
//! - Read and write paths are separate traits, so a memory model can route them
//!   to different storage for the same address

/// Size of one bank window in bytes.
pub const BANK_SIZE: usize = 0x1000;

/// Number of bank windows covering the 64KB address space.
pub const NUM_BANKS: usize = 16;

/// Splits an address into its `(bank, offset)` pair.
///
/// # Examples
///
/// ```
/// use prodos8emu::memory::bank_offset;
///
/// assert_eq!(bank_offset(0xD123), (0xD, 0x123));
/// assert_eq!(bank_offset(0x0FFF), (0x0, 0xFFF));
/// ```
#[inline]
pub const fn bank_offset(addr: u16) -> (usize, usize) {
    ((addr >> 12) as usize, (addr & 0x0FFF) as usize)
}

/// Read side of the memory bus.
///
/// Implementations never panic: unmapped storage may return anything, but a
/// read always produces a byte.
pub trait ReadBus {
    /// Reads a byte from the specified 16-bit address.
    fn read(&self, addr: u16) -> u8;
}

/// Write side of the memory bus.
///
/// Writes always succeed. Write-protected regions may silently discard the
/// value (matching the hardware), but a write never fails.
pub trait WriteBus {
    /// Writes a byte to the specified 16-bit address.
    fn write(&mut self, addr: u16, value: u8);
}

impl<T: ReadBus + ?Sized> ReadBus for &T {
    fn read(&self, addr: u16) -> u8 {
        (**self).read(addr)
    }
}

impl<T: ReadBus + ?Sized> ReadBus for &mut T {
    fn read(&self, addr: u16) -> u8 {
        (**self).read(addr)
    }
}

impl<T: WriteBus + ?Sized> WriteBus for &mut T {
    fn write(&mut self, addr: u16, value: u8) {
        (**self).write(addr, value);
    }
}

// ========== Byte Helpers ==========

/// Reads a single byte.
#[inline]
pub fn read_u8<B: ReadBus + ?Sized>(bus: &B, addr: u16) -> u8 {
    bus.read(addr)
}

/// Writes a single byte.
#[inline]
pub fn write_u8<B: WriteBus + ?Sized>(bus: &mut B, addr: u16, value: u8) {
    bus.write(addr, value);
}

// ========== Multi-byte Helpers ==========

/// Reads a 16-bit little-endian value, wrapping at `0xFFFF`.
///
/// # Examples
///
/// ```
/// use prodos8emu::memory::{read_u16_le, FlatMemory, WriteBus};
///
/// let mut mem = FlatMemory::new();
/// mem.write(0xFFFF, 0x34);
/// mem.write(0x0000, 0x12);
/// assert_eq!(read_u16_le(&mem, 0xFFFF), 0x1234);
/// ```
pub fn read_u16_le<B: ReadBus + ?Sized>(bus: &B, addr: u16) -> u16 {
    let lo = bus.read(addr) as u16;
    let hi = bus.read(addr.wrapping_add(1)) as u16;
    (hi << 8) | lo
}

/// Writes a 16-bit little-endian value, wrapping at `0xFFFF`.
pub fn write_u16_le<B: WriteBus + ?Sized>(bus: &mut B, addr: u16, value: u16) {
    bus.write(addr, value as u8);
    bus.write(addr.wrapping_add(1), (value >> 8) as u8);
}

/// Reads a 24-bit little-endian value, wrapping at `0xFFFF`.
///
/// The top byte of the returned `u32` is always zero.
pub fn read_u24_le<B: ReadBus + ?Sized>(bus: &B, addr: u16) -> u32 {
    let b0 = bus.read(addr) as u32;
    let b1 = bus.read(addr.wrapping_add(1)) as u32;
    let b2 = bus.read(addr.wrapping_add(2)) as u32;
    (b2 << 16) | (b1 << 8) | b0
}

/// Writes the low 24 bits of `value` little-endian, wrapping at `0xFFFF`.
pub fn write_u24_le<B: WriteBus + ?Sized>(bus: &mut B, addr: u16, value: u32) {
    bus.write(addr, value as u8);
    bus.write(addr.wrapping_add(1), (value >> 8) as u8);
    bus.write(addr.wrapping_add(2), (value >> 16) as u8);
}

/// Reads a counted (length-prefixed) string.
///
/// The byte at `addr` is the length; up to `min(length, max_len)` raw bytes
/// follow it. Bytes are returned exactly as stored: high bits and case are
/// left for the caller to normalize.
///
/// # Examples
///
/// ```
/// use prodos8emu::memory::{read_counted_string, FlatMemory, WriteBus};
///
/// let mut mem = FlatMemory::new();
/// mem.write(0x0300, 3);
/// mem.write(0x0301, b'A');
/// mem.write(0x0302, b'B');
/// mem.write(0x0303, b'C');
///
/// assert_eq!(read_counted_string(&mem, 0x0300, 64), b"ABC".to_vec());
/// assert_eq!(read_counted_string(&mem, 0x0300, 2), b"AB".to_vec());
/// ```
pub fn read_counted_string<B: ReadBus + ?Sized>(bus: &B, addr: u16, max_len: usize) -> Vec<u8> {
    let count = bus.read(addr) as usize;
    let len = count.min(max_len);
    (0..len)
        .map(|i| bus.read(addr.wrapping_add(1).wrapping_add(i as u16)))
        .collect()
}

/// Simple 64KB flat memory implementation.
///
/// All addresses are plain RAM initialized to `0x00`. Useful for exercising
/// the bus helpers and for MLI handlers under test, where no language card
/// is involved.
///
/// # Examples
///
/// ```
/// use prodos8emu::memory::{FlatMemory, ReadBus, WriteBus};
///
/// let mut mem = FlatMemory::new();
/// mem.write(0x1234, 0x42);
/// assert_eq!(mem.read(0x1234), 0x42);
/// ```
pub struct FlatMemory {
    /// 64KB contiguous memory array
    data: Box<[u8; 65536]>,
}

impl FlatMemory {
    /// Creates a new FlatMemory instance with all bytes initialized to zero.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; 65536]),
        }
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl ReadBus for FlatMemory {
    fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }
}

impl WriteBus for FlatMemory {
    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }
}
