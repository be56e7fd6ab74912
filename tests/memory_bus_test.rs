//! Memory bus helper tests
//!
//! Verifies the little-endian helpers and counted-string reader against both
//! `FlatMemory` and the Apple II bus views, including wraparound at `0xFFFF`.

use prodos8emu::memory::{
    read_counted_string, read_u16_le, read_u24_le, read_u8, write_u16_le, write_u24_le, write_u8,
};
use prodos8emu::{Apple2Memory, FlatMemory, ReadBus, WriteBus};
use proptest::prelude::*;

#[test]
fn test_flat_memory_initialization() {
    let memory = FlatMemory::new();

    for addr in [0x0000, 0x1234, 0x8000, 0xFFFF] {
        assert_eq!(memory.read(addr), 0x00, "Memory at 0x{:04X} should be initialized to 0", addr);
    }
}

#[test]
fn test_byte_helpers_round_trip() {
    let mut memory = FlatMemory::new();

    for (addr, value) in [(0x0000u16, 0x01u8), (0x00FF, 0xFF), (0xBF00, 0x4C), (0xFFFF, 0x80)] {
        write_u8(&mut memory, addr, value);
        assert_eq!(read_u8(&memory, addr), value, "byte at 0x{:04X}", addr);
    }
}

// ========== Multi-Byte Values ==========

#[test]
fn test_u16_little_endian_layout() {
    let mut memory = FlatMemory::new();

    write_u16_le(&mut memory, 0x0300, 0xBEEF);

    assert_eq!(memory.read(0x0300), 0xEF);
    assert_eq!(memory.read(0x0301), 0xBE);
    assert_eq!(read_u16_le(&memory, 0x0300), 0xBEEF);
}

#[test]
fn test_u16_wraps_at_top_of_memory() {
    let mut memory = FlatMemory::new();

    write_u16_le(&mut memory, 0xFFFF, 0x1234);

    assert_eq!(memory.read(0xFFFF), 0x34);
    assert_eq!(memory.read(0x0000), 0x12);
    assert_eq!(read_u16_le(&memory, 0xFFFF), 0x1234);
}

#[test]
fn test_u24_little_endian_layout() {
    let mut memory = FlatMemory::new();

    write_u24_le(&mut memory, 0x0400, 0x00ABCDEF);

    assert_eq!(memory.read(0x0400), 0xEF);
    assert_eq!(memory.read(0x0401), 0xCD);
    assert_eq!(memory.read(0x0402), 0xAB);
    assert_eq!(memory.read(0x0403), 0x00, "only three bytes are written");
    assert_eq!(read_u24_le(&memory, 0x0400), 0x00ABCDEF);
}

#[test]
fn test_u24_drops_top_byte_and_wraps() {
    let mut memory = FlatMemory::new();

    write_u24_le(&mut memory, 0xFFFE, 0xFF123456);

    assert_eq!(memory.read(0xFFFE), 0x56);
    assert_eq!(memory.read(0xFFFF), 0x34);
    assert_eq!(memory.read(0x0000), 0x12);
    assert_eq!(read_u24_le(&memory, 0xFFFE), 0x123456);
}

// ========== Counted Strings ==========

#[test]
fn test_counted_string_returns_raw_bytes() {
    let mut memory = FlatMemory::new();
    let path = [0xAF, b'p', b'r', b'o', b'D', b'O', b'S'];

    memory.write(0x0280, path.len() as u8);
    for (i, &byte) in path.iter().enumerate() {
        memory.write(0x0281 + i as u16, byte);
    }

    assert_eq!(read_counted_string(&memory, 0x0280, 64), path.to_vec());
}

#[test]
fn test_counted_string_clamped_and_empty() {
    let mut memory = FlatMemory::new();
    memory.write(0x0280, 200);

    assert_eq!(read_counted_string(&memory, 0x0280, 64).len(), 64);

    memory.write(0x0280, 0);
    assert!(read_counted_string(&memory, 0x0280, 64).is_empty());
}

#[test]
fn test_counted_string_wraps_at_top_of_memory() {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFE, 3);
    memory.write(0xFFFF, b'A');
    memory.write(0x0000, b'B');
    memory.write(0x0001, b'C');

    assert_eq!(read_counted_string(&memory, 0xFFFE, 15), b"ABC".to_vec());
}

// ========== Apple II Bus Views ==========

#[test]
fn test_helpers_follow_lc_mapping() {
    let mut memory = Apple2Memory::new();
    memory.set_lc_read_enabled(true);
    memory.set_lc_write_enabled(true);

    write_u16_le(&mut memory.write_bus(), 0xFFFC, 0x2000);

    assert_eq!(read_u16_le(&memory.read_bus(), 0xFFFC), 0x2000);
    assert_eq!(read_u16_le(&memory, 0xFFFC), 0x2000);
}

#[test]
fn test_helpers_wrap_across_lc_and_zero_page() {
    let mut memory = Apple2Memory::new();
    memory.set_lc_write_enabled(true);

    // High byte lands in zero page, low byte in LC RAM that is not read-mapped
    write_u16_le(&mut memory.write_bus(), 0xFFFF, 0xAB12);

    assert_eq!(memory.read_bus().read(0x0000), 0xAB);
    assert_eq!(memory.read_bus().read(0xFFFF), 0x00, "reads still see ROM");
    assert_eq!(memory.write_bus().read(0xFFFF), 0x12);
}

// ========== Property Tests ==========

proptest! {
    /// Property: 16-bit values round-trip at every address, high byte at addr+1 (wrapping)
    #[test]
    fn prop_u16_round_trip(addr in 0u16..=0xFFFF, value in 0u16..=0xFFFF) {
        let mut memory = FlatMemory::new();

        write_u16_le(&mut memory, addr, value);

        prop_assert_eq!(read_u16_le(&memory, addr), value);
        prop_assert_eq!(memory.read(addr.wrapping_add(1)), (value >> 8) as u8);
    }

    /// Property: 24-bit values keep only their low three bytes
    #[test]
    fn prop_u24_round_trip(addr in 0u16..=0xFFFF, value in 0u32..=0xFFFF_FFFF) {
        let mut memory = FlatMemory::new();

        write_u24_le(&mut memory, addr, value);

        prop_assert_eq!(read_u24_le(&memory, addr), value & 0x00FF_FFFF);
        prop_assert_eq!(memory.read(addr.wrapping_add(2)), (value >> 16) as u8);
    }
}
