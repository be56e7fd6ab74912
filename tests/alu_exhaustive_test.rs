//! Exhaustive ADC/SBC tests.
//!
//! Tests cover:
//! - Binary ADC/SBC for every (A, M, C) combination: result, C, V, N, Z
//! - Decimal ADC/SBC for every valid packed-BCD pair: result, C, V, N, Z
//! - The extra decimal-mode cycle
//!
//! Each case executes `ADC #imm` / `SBC #imm` through the CPU.

use prodos8emu::{Apple2Memory, WriteBus, CPU};

const PROGRAM: u16 = 0x0300;

fn setup_cpu() -> CPU {
    CPU::new(Apple2Memory::new())
}

/// Runs `opcode #value` with the given A, carry and decimal flags.
fn run_imm(cpu: &mut CPU, opcode: u8, a: u8, value: u8, carry: bool, decimal: bool) -> u32 {
    cpu.memory_mut().write(PROGRAM, opcode);
    cpu.memory_mut().write(PROGRAM + 1, value);
    cpu.set_pc(PROGRAM);
    cpu.set_a(a);
    cpu.set_flag_c(carry);
    cpu.set_flag_d(decimal);
    cpu.step().unwrap()
}

fn to_bcd(n: u32) -> u8 {
    (((n / 10) << 4) | (n % 10)) as u8
}

fn from_bcd(b: u8) -> u32 {
    (b >> 4) as u32 * 10 + (b & 0x0F) as u32
}

// ========== Binary Mode ==========

#[test]
fn test_adc_binary_all_operands() {
    let mut cpu = setup_cpu();

    for a in 0..=255u8 {
        for m in 0..=255u8 {
            for carry in [false, true] {
                let cycles = run_imm(&mut cpu, 0x69, a, m, carry, false);

                let sum = a as u16 + m as u16 + carry as u16;
                let expected = sum as u8;
                let overflow = (a ^ expected) & (m ^ expected) & 0x80 != 0;

                assert_eq!(cpu.a(), expected, "ADC {:02X}+{:02X}+{}", a, m, carry);
                assert_eq!(cpu.flag_c(), sum > 0xFF, "C for {:02X}+{:02X}+{}", a, m, carry);
                assert_eq!(cpu.flag_v(), overflow, "V for {:02X}+{:02X}+{}", a, m, carry);
                assert_eq!(cpu.flag_z(), expected == 0);
                assert_eq!(cpu.flag_n(), expected & 0x80 != 0);
                assert_eq!(cycles, 2);
            }
        }
    }
}

#[test]
fn test_sbc_binary_all_operands() {
    let mut cpu = setup_cpu();

    for a in 0..=255u8 {
        for m in 0..=255u8 {
            for carry in [false, true] {
                let cycles = run_imm(&mut cpu, 0xE9, a, m, carry, false);

                let borrow = !carry as i16;
                let diff = a as i16 - m as i16 - borrow;
                let expected = diff as u8;
                let overflow = (a ^ m) & (a ^ expected) & 0x80 != 0;

                assert_eq!(cpu.a(), expected, "SBC {:02X}-{:02X} C={}", a, m, carry);
                assert_eq!(cpu.flag_c(), diff >= 0, "C for {:02X}-{:02X} C={}", a, m, carry);
                assert_eq!(cpu.flag_v(), overflow, "V for {:02X}-{:02X} C={}", a, m, carry);
                assert_eq!(cpu.flag_z(), expected == 0);
                assert_eq!(cpu.flag_n(), expected & 0x80 != 0);
                assert_eq!(cycles, 2);
            }
        }
    }
}

// ========== Decimal Mode ==========

/// Reference decimal-mode ADC overflow: signed sum of the high nibbles plus
/// the adjusted low digit, before the high digit is corrected.
fn decimal_adc_overflow(a: u8, m: u8, carry: bool) -> bool {
    let mut lo = (a & 0x0F) as i16 + (m & 0x0F) as i16 + carry as i16;
    if lo >= 0x0A {
        lo = ((lo + 0x06) & 0x0F) + 0x10;
    }
    let signed = (a & 0xF0) as i8 as i16 + (m & 0xF0) as i8 as i16 + lo;
    !(-128..=127).contains(&signed)
}

/// Decimal-mode SBC sets V exactly as the binary subtraction would.
fn binary_sbc_overflow(a: u8, m: u8, carry: bool) -> bool {
    let diff = a as i8 as i16 - m as i8 as i16 - (!carry) as i16;
    !(-128..=127).contains(&diff)
}

#[test]
fn test_adc_decimal_all_bcd_operands() {
    let mut cpu = setup_cpu();

    for x in 0..100u32 {
        for y in 0..100u32 {
            for carry in [false, true] {
                let a = to_bcd(x);
                let m = to_bcd(y);
                let cycles = run_imm(&mut cpu, 0x69, a, m, carry, true);

                let sum = x + y + carry as u32;
                let expected = to_bcd(sum % 100);

                assert_eq!(cpu.a(), expected, "ADC {:02X}+{:02X}+{} (BCD)", a, m, carry);
                assert_eq!(cpu.flag_c(), sum > 99, "C for {:02X}+{:02X}+{} (BCD)", a, m, carry);
                assert_eq!(cpu.flag_z(), expected == 0, "Z for {:02X}+{:02X}+{}", a, m, carry);
                assert_eq!(cpu.flag_n(), expected & 0x80 != 0, "N for {:02X}+{:02X}", a, m);
                assert_eq!(
                    cpu.flag_v(),
                    decimal_adc_overflow(a, m, carry),
                    "V for {:02X}+{:02X}+{} (BCD)",
                    a,
                    m,
                    carry
                );
                assert_eq!(cycles, 3);
            }
        }
    }
}

#[test]
fn test_sbc_decimal_all_bcd_operands() {
    let mut cpu = setup_cpu();

    for x in 0..100i32 {
        for y in 0..100i32 {
            for carry in [false, true] {
                let a = to_bcd(x as u32);
                let m = to_bcd(y as u32);
                let cycles = run_imm(&mut cpu, 0xE9, a, m, carry, true);

                let diff = x - y - (!carry) as i32;
                let expected = to_bcd(diff.rem_euclid(100) as u32);

                assert_eq!(cpu.a(), expected, "SBC {:02X}-{:02X} C={} (BCD)", a, m, carry);
                assert_eq!(cpu.flag_c(), diff >= 0, "C for {:02X}-{:02X} C={} (BCD)", a, m, carry);
                assert_eq!(
                    cpu.flag_v(),
                    binary_sbc_overflow(a, m, carry),
                    "V for {:02X}-{:02X} C={} (BCD)",
                    a,
                    m,
                    carry
                );
                assert_eq!(cpu.flag_z(), expected == 0);
                assert_eq!(cpu.flag_n(), expected & 0x80 != 0);
                assert_eq!(cycles, 3);
            }
        }
    }
}

#[test]
fn test_decimal_results_are_valid_bcd() {
    let mut cpu = setup_cpu();

    for x in (0..100u32).step_by(7) {
        for y in (0..100u32).step_by(3) {
            run_imm(&mut cpu, 0x69, to_bcd(x), to_bcd(y), false, true);
            let result = cpu.a();
            assert!(result & 0x0F <= 9 && result >> 4 <= 9, "{:02X} is not BCD", result);
            assert_eq!(from_bcd(result), (x + y) % 100);
        }
    }
}

#[test]
fn test_decimal_mode_page_cross_adds_both_penalties() {
    let mut cpu = setup_cpu();

    // ADC $20F0,Y with Y=$20 crosses into $2110
    cpu.memory_mut().write(0x2110, 0x01);
    cpu.memory_mut().write(PROGRAM, 0x79);
    cpu.memory_mut().write(PROGRAM + 1, 0xF0);
    cpu.memory_mut().write(PROGRAM + 2, 0x20);
    cpu.set_pc(PROGRAM);
    cpu.set_a(0x09);
    cpu.set_y(0x20);
    cpu.set_flag_c(false);
    cpu.set_flag_d(true);

    let cycles = cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x10);
    assert_eq!(cycles, 4 + 1 + 1);
}
