//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic and logical operations:
//! - ADC/SBC: Add/Subtract with Carry, binary and decimal
//! - AND, ORA, EOR: Logical operations on the accumulator
//! - CMP, CPX, CPY: Register comparisons
//! - BIT: Bit test
//!
//! ## Decimal Mode
//!
//! With D set, ADC and SBC treat both operands as two packed BCD digits. The
//! 65C02 takes one extra cycle and, unlike the NMOS part, sets N and Z from
//! the corrected BCD result. V is computed from the binary operation.

use super::read_cycles;
use crate::flags::{self, StatusFlags};
use crate::mli::MliContext;
use crate::{AddressingMode, OPCODE_TABLE, CPU};

/// Adds `value` and the carry to `a`, returning the new accumulator.
pub(crate) fn add_with_carry(p: &mut StatusFlags, a: u8, value: u8) -> u8 {
    let carry_in = p.is_set(flags::C) as u16;
    let sum = a as u16 + value as u16 + carry_in;

    let result = if p.is_set(flags::D) {
        let mut lo = (a & 0x0F) as u16 + (value & 0x0F) as u16 + carry_in;
        let mut hi = (a & 0xF0) as u16 + (value & 0xF0) as u16;

        if lo > 0x09 {
            lo += 0x06;
        }
        if lo > 0x0F {
            hi += 0x10;
        }

        // V comes from the high nibbles plus the adjusted low-digit carry,
        // taken as signed, before the high digit is corrected.
        let signed = (a & 0xF0) as i8 as i16
            + (value & 0xF0) as i8 as i16
            + (lo & 0x0F) as i16
            + if lo > 0x0F { 0x10 } else { 0 };
        p.set_if(flags::V, !(-128..=127).contains(&signed));

        if (hi & 0x1F0) > 0x90 {
            hi += 0x60;
        }

        p.set_if(flags::C, (hi & 0xFF00) != 0);
        ((lo & 0x0F) | (hi & 0xF0)) as u8
    } else {
        // Overflow: both operands share a sign the result does not have
        p.set_if(flags::V, (!(a ^ value) & (a ^ sum as u8) & 0x80) != 0);
        p.set_if(flags::C, sum > 0xFF);
        sum as u8
    };

    p.update_nz(result);
    result
}

/// Subtracts `value` and the borrow (inverted carry) from `a`.
pub(crate) fn subtract_with_borrow(p: &mut StatusFlags, a: u8, value: u8) -> u8 {
    let borrow = (!p.is_set(flags::C)) as u16;
    let diff = (a as u16).wrapping_sub(value as u16).wrapping_sub(borrow);

    let overflow = ((a ^ value) & (a ^ diff as u8) & 0x80) != 0;

    let result = if p.is_set(flags::D) {
        let mut lo = (a & 0x0F) as i16 - (value & 0x0F) as i16 - borrow as i16;
        let mut hi = (a & 0xF0) as i16 - (value & 0xF0) as i16;

        if lo < 0 {
            lo -= 0x06;
            hi -= 0x10;
        }
        if hi < 0 {
            hi -= 0x60;
        }

        ((lo & 0x0F) | (hi & 0xF0)) as u8
    } else {
        diff as u8
    };

    p.set_if(flags::C, diff < 0x100);
    p.set_if(flags::V, overflow);
    p.update_nz(result);
    result
}

/// Compares `register` with `value`: C, Z and N as for `register - value`.
pub(crate) fn compare(p: &mut StatusFlags, register: u8, value: u8) {
    let diff = register.wrapping_sub(value);
    p.set_if(flags::C, register >= value);
    p.update_nz(diff);
}

/// Executes the ADC (Add with Carry) instruction.
///
/// Adds the value at the effective address (determined by addressing mode)
/// plus the carry flag to the accumulator. Updates N, V, Z and C.
pub(crate) fn execute_adc<H: MliContext>(cpu: &mut CPU<H>, opcode: u8) -> u32 {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (value, page_crossed) = cpu.read_operand(metadata.addressing_mode);

    let decimal = cpu.p.is_set(flags::D);
    cpu.a = add_with_carry(&mut cpu.p, cpu.a, value);

    read_cycles(metadata, page_crossed) + decimal as u32
}

/// Executes the SBC (Subtract with Carry) instruction.
pub(crate) fn execute_sbc<H: MliContext>(cpu: &mut CPU<H>, opcode: u8) -> u32 {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (value, page_crossed) = cpu.read_operand(metadata.addressing_mode);

    let decimal = cpu.p.is_set(flags::D);
    cpu.a = subtract_with_borrow(&mut cpu.p, cpu.a, value);

    read_cycles(metadata, page_crossed) + decimal as u32
}

/// Executes the AND (Logical AND) instruction.
pub(crate) fn execute_and<H: MliContext>(cpu: &mut CPU<H>, opcode: u8) -> u32 {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (value, page_crossed) = cpu.read_operand(metadata.addressing_mode);

    cpu.a &= value;
    cpu.p.update_nz(cpu.a);

    read_cycles(metadata, page_crossed)
}

/// Executes the ORA (Logical Inclusive OR) instruction.
pub(crate) fn execute_ora<H: MliContext>(cpu: &mut CPU<H>, opcode: u8) -> u32 {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (value, page_crossed) = cpu.read_operand(metadata.addressing_mode);

    cpu.a |= value;
    cpu.p.update_nz(cpu.a);

    read_cycles(metadata, page_crossed)
}

/// Executes the EOR (Exclusive OR) instruction.
pub(crate) fn execute_eor<H: MliContext>(cpu: &mut CPU<H>, opcode: u8) -> u32 {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (value, page_crossed) = cpu.read_operand(metadata.addressing_mode);

    cpu.a ^= value;
    cpu.p.update_nz(cpu.a);

    read_cycles(metadata, page_crossed)
}

pub(crate) fn execute_cmp<H: MliContext>(cpu: &mut CPU<H>, opcode: u8) -> u32 {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (value, page_crossed) = cpu.read_operand(metadata.addressing_mode);

    compare(&mut cpu.p, cpu.a, value);

    read_cycles(metadata, page_crossed)
}

pub(crate) fn execute_cpx<H: MliContext>(cpu: &mut CPU<H>, opcode: u8) -> u32 {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (value, page_crossed) = cpu.read_operand(metadata.addressing_mode);

    compare(&mut cpu.p, cpu.x, value);

    read_cycles(metadata, page_crossed)
}

pub(crate) fn execute_cpy<H: MliContext>(cpu: &mut CPU<H>, opcode: u8) -> u32 {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (value, page_crossed) = cpu.read_operand(metadata.addressing_mode);

    compare(&mut cpu.p, cpu.y, value);

    read_cycles(metadata, page_crossed)
}

/// Executes the BIT (Bit Test) instruction.
///
/// Z reflects `A & M`. Memory forms also copy bits 7 and 6 of the operand
/// into N and V; the immediate form (65C02) only touches Z.
pub(crate) fn execute_bit<H: MliContext>(cpu: &mut CPU<H>, opcode: u8) -> u32 {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let (value, page_crossed) = cpu.read_operand(metadata.addressing_mode);

    cpu.p.set_if(flags::Z, cpu.a & value == 0);
    if metadata.addressing_mode != AddressingMode::Immediate {
        cpu.p.set_if(flags::N, value & 0x80 != 0);
        cpu.p.set_if(flags::V, value & 0x40 != 0);
    }

    read_cycles(metadata, page_crossed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(carry: bool, decimal: bool) -> StatusFlags {
        let mut p = StatusFlags::from_byte(0);
        p.set_if(flags::C, carry);
        p.set_if(flags::D, decimal);
        p
    }

    #[test]
    fn test_decimal_add_wraps_at_100() {
        let mut p = status(false, true);
        assert_eq!(add_with_carry(&mut p, 0x58, 0x46), 0x04);
        assert!(p.is_set(flags::C));
        assert!(!p.is_set(flags::Z));
    }

    #[test]
    fn test_decimal_zero_flag_uses_bcd_result() {
        // Binary sum is 0x9A, BCD result is 0x00 with carry.
        let mut p = status(false, true);
        assert_eq!(add_with_carry(&mut p, 0x99, 0x01), 0x00);
        assert!(p.is_set(flags::Z));
        assert!(!p.is_set(flags::N));
        assert!(p.is_set(flags::C));
    }

    #[test]
    fn test_decimal_subtract_borrows() {
        let mut p = status(true, true);
        assert_eq!(subtract_with_borrow(&mut p, 0x00, 0x01), 0x99);
        assert!(!p.is_set(flags::C));
        assert!(p.is_set(flags::N));
    }

    #[test]
    fn test_decimal_overflow_follows_adjusted_intermediate() {
        // $79 + $01: low digit carries, intermediate $80 overflows as signed
        let mut p = status(false, true);
        assert_eq!(add_with_carry(&mut p, 0x79, 0x01), 0x80);
        assert!(p.is_set(flags::V));
        assert!(p.is_set(flags::N));

        // $50 + $50: binary sum $A0 overflows, BCD result $00 with carry does too
        let mut p = status(false, true);
        assert_eq!(add_with_carry(&mut p, 0x50, 0x50), 0x00);
        assert!(p.is_set(flags::V));
        assert!(p.is_set(flags::C));

        // $15 + $26: no overflow either way
        let mut p = status(false, true);
        assert_eq!(add_with_carry(&mut p, 0x15, 0x26), 0x41);
        assert!(!p.is_set(flags::V));
    }

    #[test]
    fn test_binary_overflow() {
        let mut p = status(false, false);
        assert_eq!(add_with_carry(&mut p, 0x7F, 0x01), 0x80);
        assert!(p.is_set(flags::V));
        assert!(p.is_set(flags::N));

        let mut p = status(true, false);
        assert_eq!(subtract_with_borrow(&mut p, 0x80, 0x01), 0x7F);
        assert!(p.is_set(flags::V));
        assert!(p.is_set(flags::C));
    }

    #[test]
    fn test_compare_sets_carry_on_equal() {
        let mut p = status(false, false);
        compare(&mut p, 0x40, 0x40);
        assert!(p.is_set(flags::C));
        assert!(p.is_set(flags::Z));

        compare(&mut p, 0x10, 0x20);
        assert!(!p.is_set(flags::C));
        assert!(p.is_set(flags::N));
    }
}
