//! # Opcode Metadata Table
//!
//! This module contains the complete 256-entry opcode metadata table that serves as the
//! single source of truth for 65C02 instruction decoding.
//!
//! The table covers:
//! - **All documented WDC 65C02 instructions**, including the Rockwell bit
//!   instructions (RMBn, SMBn, BBRn, BBSn) and WAI/STP
//! - **The unused opcodes**, decoded as the NOP variants the CMOS part executes
//!   (1, 2 or 3 bytes, with their operand reads)
//!
//! Each opcode entry includes:
//! - Mnemonic
//! - Addressing mode
//! - Base cycle cost (excluding page-crossing, branch and decimal penalties)
//! - Instruction size in bytes

use crate::addressing::AddressingMode;

/// Instruction mnemonic.
///
/// The Rockwell bit instructions carry their bit number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mnemonic {
    Adc,
    And,
    Asl,
    Bbr(u8),
    Bbs(u8),
    Bcc,
    Bcs,
    Beq,
    Bit,
    Bmi,
    Bne,
    Bpl,
    Bra,
    Brk,
    Bvc,
    Bvs,
    Clc,
    Cld,
    Cli,
    Clv,
    Cmp,
    Cpx,
    Cpy,
    Dec,
    Dex,
    Dey,
    Eor,
    Inc,
    Inx,
    Iny,
    Jmp,
    Jsr,
    Lda,
    Ldx,
    Ldy,
    Lsr,
    Nop,
    Ora,
    Pha,
    Php,
    Phx,
    Phy,
    Pla,
    Plp,
    Plx,
    Ply,
    Rmb(u8),
    Rol,
    Ror,
    Rti,
    Rts,
    Sbc,
    Sec,
    Sed,
    Sei,
    Smb(u8),
    Sta,
    Stp,
    Stx,
    Sty,
    Stz,
    Tax,
    Tay,
    Trb,
    Tsb,
    Tsx,
    Txa,
    Txs,
    Tya,
    Wai,
}

const RMB: [&str; 8] = ["RMB0", "RMB1", "RMB2", "RMB3", "RMB4", "RMB5", "RMB6", "RMB7"];
const SMB: [&str; 8] = ["SMB0", "SMB1", "SMB2", "SMB3", "SMB4", "SMB5", "SMB6", "SMB7"];
const BBR: [&str; 8] = ["BBR0", "BBR1", "BBR2", "BBR3", "BBR4", "BBR5", "BBR6", "BBR7"];
const BBS: [&str; 8] = ["BBS0", "BBS1", "BBS2", "BBS3", "BBS4", "BBS5", "BBS6", "BBS7"];

impl Mnemonic {
    /// Upper-case assembler name, e.g. `"LDA"` or `"BBR3"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Mnemonic::Adc => "ADC",
            Mnemonic::And => "AND",
            Mnemonic::Asl => "ASL",
            Mnemonic::Bbr(bit) => BBR[(bit & 7) as usize],
            Mnemonic::Bbs(bit) => BBS[(bit & 7) as usize],
            Mnemonic::Bcc => "BCC",
            Mnemonic::Bcs => "BCS",
            Mnemonic::Beq => "BEQ",
            Mnemonic::Bit => "BIT",
            Mnemonic::Bmi => "BMI",
            Mnemonic::Bne => "BNE",
            Mnemonic::Bpl => "BPL",
            Mnemonic::Bra => "BRA",
            Mnemonic::Brk => "BRK",
            Mnemonic::Bvc => "BVC",
            Mnemonic::Bvs => "BVS",
            Mnemonic::Clc => "CLC",
            Mnemonic::Cld => "CLD",
            Mnemonic::Cli => "CLI",
            Mnemonic::Clv => "CLV",
            Mnemonic::Cmp => "CMP",
            Mnemonic::Cpx => "CPX",
            Mnemonic::Cpy => "CPY",
            Mnemonic::Dec => "DEC",
            Mnemonic::Dex => "DEX",
            Mnemonic::Dey => "DEY",
            Mnemonic::Eor => "EOR",
            Mnemonic::Inc => "INC",
            Mnemonic::Inx => "INX",
            Mnemonic::Iny => "INY",
            Mnemonic::Jmp => "JMP",
            Mnemonic::Jsr => "JSR",
            Mnemonic::Lda => "LDA",
            Mnemonic::Ldx => "LDX",
            Mnemonic::Ldy => "LDY",
            Mnemonic::Lsr => "LSR",
            Mnemonic::Nop => "NOP",
            Mnemonic::Ora => "ORA",
            Mnemonic::Pha => "PHA",
            Mnemonic::Php => "PHP",
            Mnemonic::Phx => "PHX",
            Mnemonic::Phy => "PHY",
            Mnemonic::Pla => "PLA",
            Mnemonic::Plp => "PLP",
            Mnemonic::Plx => "PLX",
            Mnemonic::Ply => "PLY",
            Mnemonic::Rmb(bit) => RMB[(bit & 7) as usize],
            Mnemonic::Rol => "ROL",
            Mnemonic::Ror => "ROR",
            Mnemonic::Rti => "RTI",
            Mnemonic::Rts => "RTS",
            Mnemonic::Sbc => "SBC",
            Mnemonic::Sec => "SEC",
            Mnemonic::Sed => "SED",
            Mnemonic::Sei => "SEI",
            Mnemonic::Smb(bit) => SMB[(bit & 7) as usize],
            Mnemonic::Sta => "STA",
            Mnemonic::Stp => "STP",
            Mnemonic::Stx => "STX",
            Mnemonic::Sty => "STY",
            Mnemonic::Stz => "STZ",
            Mnemonic::Tax => "TAX",
            Mnemonic::Tay => "TAY",
            Mnemonic::Trb => "TRB",
            Mnemonic::Tsb => "TSB",
            Mnemonic::Tsx => "TSX",
            Mnemonic::Txa => "TXA",
            Mnemonic::Txs => "TXS",
            Mnemonic::Tya => "TYA",
            Mnemonic::Wai => "WAI",
        }
    }
}

/// Metadata for a single 65C02 opcode.
///
/// # Fields
///
/// - `mnemonic`: Instruction name
/// - `addressing_mode`: How the instruction interprets operand bytes
/// - `base_cycles`: Nominal cycle cost; page-crossing, branch-taken and
///   decimal-mode penalties are added at execution time
/// - `size_bytes`: Total instruction size including opcode and operands (1-3 bytes)
///
/// # Examples
///
/// ```
/// use prodos8emu::{AddressingMode, Mnemonic, OPCODE_TABLE};
///
/// let lda_imm = &OPCODE_TABLE[0xA9];
/// assert_eq!(lda_imm.mnemonic, Mnemonic::Lda);
/// assert_eq!(lda_imm.addressing_mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.base_cycles, 2);
/// assert_eq!(lda_imm.size_bytes, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Instruction mnemonic.
    pub mnemonic: Mnemonic,

    /// Addressing mode for this instruction.
    pub addressing_mode: AddressingMode,

    /// Base cycle cost (before penalties).
    pub base_cycles: u8,

    /// Total instruction size in bytes (opcode + operands).
    pub size_bytes: u8,
}

const fn op(mnemonic: Mnemonic, addressing_mode: AddressingMode, base_cycles: u8) -> OpcodeMetadata {
    OpcodeMetadata {
        mnemonic,
        addressing_mode,
        base_cycles,
        size_bytes: 1 + addressing_mode.operand_bytes(),
    }
}

/// Complete 256-entry opcode metadata table indexed by opcode byte value.
pub const OPCODE_TABLE: [OpcodeMetadata; 256] = [
    // 0x00: BRK carries a signature byte, so it is two bytes long
    OpcodeMetadata {
        mnemonic: Mnemonic::Brk,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 7,
        size_bytes: 2,
    },
    op(Mnemonic::Ora, AddressingMode::IndirectX, 6), // 0x01
    op(Mnemonic::Nop, AddressingMode::Immediate, 2), // 0x02
    op(Mnemonic::Nop, AddressingMode::Implicit, 1), // 0x03
    op(Mnemonic::Tsb, AddressingMode::ZeroPage, 5), // 0x04
    op(Mnemonic::Ora, AddressingMode::ZeroPage, 3), // 0x05
    op(Mnemonic::Asl, AddressingMode::ZeroPage, 5), // 0x06
    op(Mnemonic::Rmb(0), AddressingMode::ZeroPage, 5), // 0x07
    op(Mnemonic::Php, AddressingMode::Implicit, 3), // 0x08
    op(Mnemonic::Ora, AddressingMode::Immediate, 2), // 0x09
    op(Mnemonic::Asl, AddressingMode::Accumulator, 2), // 0x0A
    op(Mnemonic::Nop, AddressingMode::Implicit, 1), // 0x0B
    op(Mnemonic::Tsb, AddressingMode::Absolute, 6), // 0x0C
    op(Mnemonic::Ora, AddressingMode::Absolute, 4), // 0x0D
    op(Mnemonic::Asl, AddressingMode::Absolute, 6), // 0x0E
    op(Mnemonic::Bbr(0), AddressingMode::ZeroPageRelative, 5), // 0x0F
    op(Mnemonic::Bpl, AddressingMode::Relative, 2), // 0x10
    op(Mnemonic::Ora, AddressingMode::IndirectY, 5), // 0x11
    op(Mnemonic::Ora, AddressingMode::ZeroPageIndirect, 5), // 0x12
    op(Mnemonic::Nop, AddressingMode::Implicit, 1), // 0x13
    op(Mnemonic::Trb, AddressingMode::ZeroPage, 5), // 0x14
    op(Mnemonic::Ora, AddressingMode::ZeroPageX, 4), // 0x15
    op(Mnemonic::Asl, AddressingMode::ZeroPageX, 6), // 0x16
    op(Mnemonic::Rmb(1), AddressingMode::ZeroPage, 5), // 0x17
    op(Mnemonic::Clc, AddressingMode::Implicit, 2), // 0x18
    op(Mnemonic::Ora, AddressingMode::AbsoluteY, 4), // 0x19
    op(Mnemonic::Inc, AddressingMode::Accumulator, 2), // 0x1A
    op(Mnemonic::Nop, AddressingMode::Implicit, 1), // 0x1B
    op(Mnemonic::Trb, AddressingMode::Absolute, 6), // 0x1C
    op(Mnemonic::Ora, AddressingMode::AbsoluteX, 4), // 0x1D
    op(Mnemonic::Asl, AddressingMode::AbsoluteX, 6), // 0x1E
    op(Mnemonic::Bbr(1), AddressingMode::ZeroPageRelative, 5), // 0x1F
    op(Mnemonic::Jsr, AddressingMode::Absolute, 6), // 0x20
    op(Mnemonic::And, AddressingMode::IndirectX, 6), // 0x21
    op(Mnemonic::Nop, AddressingMode::Immediate, 2), // 0x22
    op(Mnemonic::Nop, AddressingMode::Implicit, 1), // 0x23
    op(Mnemonic::Bit, AddressingMode::ZeroPage, 3), // 0x24
    op(Mnemonic::And, AddressingMode::ZeroPage, 3), // 0x25
    op(Mnemonic::Rol, AddressingMode::ZeroPage, 5), // 0x26
    op(Mnemonic::Rmb(2), AddressingMode::ZeroPage, 5), // 0x27
    op(Mnemonic::Plp, AddressingMode::Implicit, 4), // 0x28
    op(Mnemonic::And, AddressingMode::Immediate, 2), // 0x29
    op(Mnemonic::Rol, AddressingMode::Accumulator, 2), // 0x2A
    op(Mnemonic::Nop, AddressingMode::Implicit, 1), // 0x2B
    op(Mnemonic::Bit, AddressingMode::Absolute, 4), // 0x2C
    op(Mnemonic::And, AddressingMode::Absolute, 4), // 0x2D
    op(Mnemonic::Rol, AddressingMode::Absolute, 6), // 0x2E
    op(Mnemonic::Bbr(2), AddressingMode::ZeroPageRelative, 5), // 0x2F
    op(Mnemonic::Bmi, AddressingMode::Relative, 2), // 0x30
    op(Mnemonic::And, AddressingMode::IndirectY, 5), // 0x31
    op(Mnemonic::And, AddressingMode::ZeroPageIndirect, 5), // 0x32
    op(Mnemonic::Nop, AddressingMode::Implicit, 1), // 0x33
    op(Mnemonic::Bit, AddressingMode::ZeroPageX, 4), // 0x34
    op(Mnemonic::And, AddressingMode::ZeroPageX, 4), // 0x35
    op(Mnemonic::Rol, AddressingMode::ZeroPageX, 6), // 0x36
    op(Mnemonic::Rmb(3), AddressingMode::ZeroPage, 5), // 0x37
    op(Mnemonic::Sec, AddressingMode::Implicit, 2), // 0x38
    op(Mnemonic::And, AddressingMode::AbsoluteY, 4), // 0x39
    op(Mnemonic::Dec, AddressingMode::Accumulator, 2), // 0x3A
    op(Mnemonic::Nop, AddressingMode::Implicit, 1), // 0x3B
    op(Mnemonic::Bit, AddressingMode::AbsoluteX, 4), // 0x3C
    op(Mnemonic::And, AddressingMode::AbsoluteX, 4), // 0x3D
    op(Mnemonic::Rol, AddressingMode::AbsoluteX, 6), // 0x3E
    op(Mnemonic::Bbr(3), AddressingMode::ZeroPageRelative, 5), // 0x3F
    op(Mnemonic::Rti, AddressingMode::Implicit, 6), // 0x40
    op(Mnemonic::Eor, AddressingMode::IndirectX, 6), // 0x41
    op(Mnemonic::Nop, AddressingMode::Immediate, 2), // 0x42
    op(Mnemonic::Nop, AddressingMode::Implicit, 1), // 0x43
    op(Mnemonic::Nop, AddressingMode::ZeroPage, 3), // 0x44
    op(Mnemonic::Eor, AddressingMode::ZeroPage, 3), // 0x45
    op(Mnemonic::Lsr, AddressingMode::ZeroPage, 5), // 0x46
    op(Mnemonic::Rmb(4), AddressingMode::ZeroPage, 5), // 0x47
    op(Mnemonic::Pha, AddressingMode::Implicit, 3), // 0x48
    op(Mnemonic::Eor, AddressingMode::Immediate, 2), // 0x49
    op(Mnemonic::Lsr, AddressingMode::Accumulator, 2), // 0x4A
    op(Mnemonic::Nop, AddressingMode::Implicit, 1), // 0x4B
    op(Mnemonic::Jmp, AddressingMode::Absolute, 3), // 0x4C
    op(Mnemonic::Eor, AddressingMode::Absolute, 4), // 0x4D
    op(Mnemonic::Lsr, AddressingMode::Absolute, 6), // 0x4E
    op(Mnemonic::Bbr(4), AddressingMode::ZeroPageRelative, 5), // 0x4F
    op(Mnemonic::Bvc, AddressingMode::Relative, 2), // 0x50
    op(Mnemonic::Eor, AddressingMode::IndirectY, 5), // 0x51
    op(Mnemonic::Eor, AddressingMode::ZeroPageIndirect, 5), // 0x52
    op(Mnemonic::Nop, AddressingMode::Implicit, 1), // 0x53
    op(Mnemonic::Nop, AddressingMode::ZeroPageX, 4), // 0x54
    op(Mnemonic::Eor, AddressingMode::ZeroPageX, 4), // 0x55
    op(Mnemonic::Lsr, AddressingMode::ZeroPageX, 6), // 0x56
    op(Mnemonic::Rmb(5), AddressingMode::ZeroPage, 5), // 0x57
    op(Mnemonic::Cli, AddressingMode::Implicit, 2), // 0x58
    op(Mnemonic::Eor, AddressingMode::AbsoluteY, 4), // 0x59
    op(Mnemonic::Phy, AddressingMode::Implicit, 3), // 0x5A
    op(Mnemonic::Nop, AddressingMode::Implicit, 1), // 0x5B
    op(Mnemonic::Nop, AddressingMode::Absolute, 8), // 0x5C
    op(Mnemonic::Eor, AddressingMode::AbsoluteX, 4), // 0x5D
    op(Mnemonic::Lsr, AddressingMode::AbsoluteX, 6), // 0x5E
    op(Mnemonic::Bbr(5), AddressingMode::ZeroPageRelative, 5), // 0x5F
    op(Mnemonic::Rts, AddressingMode::Implicit, 6), // 0x60
    op(Mnemonic::Adc, AddressingMode::IndirectX, 6), // 0x61
    op(Mnemonic::Nop, AddressingMode::Immediate, 2), // 0x62
    op(Mnemonic::Nop, AddressingMode::Implicit, 1), // 0x63
    op(Mnemonic::Stz, AddressingMode::ZeroPage, 3), // 0x64
    op(Mnemonic::Adc, AddressingMode::ZeroPage, 3), // 0x65
    op(Mnemonic::Ror, AddressingMode::ZeroPage, 5), // 0x66
    op(Mnemonic::Rmb(6), AddressingMode::ZeroPage, 5), // 0x67
    op(Mnemonic::Pla, AddressingMode::Implicit, 4), // 0x68
    op(Mnemonic::Adc, AddressingMode::Immediate, 2), // 0x69
    op(Mnemonic::Ror, AddressingMode::Accumulator, 2), // 0x6A
    op(Mnemonic::Nop, AddressingMode::Implicit, 1), // 0x6B
    op(Mnemonic::Jmp, AddressingMode::Indirect, 6), // 0x6C
    op(Mnemonic::Adc, AddressingMode::Absolute, 4), // 0x6D
    op(Mnemonic::Ror, AddressingMode::Absolute, 6), // 0x6E
    op(Mnemonic::Bbr(6), AddressingMode::ZeroPageRelative, 5), // 0x6F
    op(Mnemonic::Bvs, AddressingMode::Relative, 2), // 0x70
    op(Mnemonic::Adc, AddressingMode::IndirectY, 5), // 0x71
    op(Mnemonic::Adc, AddressingMode::ZeroPageIndirect, 5), // 0x72
    op(Mnemonic::Nop, AddressingMode::Implicit, 1), // 0x73
    op(Mnemonic::Stz, AddressingMode::ZeroPageX, 4), // 0x74
    op(Mnemonic::Adc, AddressingMode::ZeroPageX, 4), // 0x75
    op(Mnemonic::Ror, AddressingMode::ZeroPageX, 6), // 0x76
    op(Mnemonic::Rmb(7), AddressingMode::ZeroPage, 5), // 0x77
    op(Mnemonic::Sei, AddressingMode::Implicit, 2), // 0x78
    op(Mnemonic::Adc, AddressingMode::AbsoluteY, 4), // 0x79
    op(Mnemonic::Ply, AddressingMode::Implicit, 4), // 0x7A
    op(Mnemonic::Nop, AddressingMode::Implicit, 1), // 0x7B
    op(Mnemonic::Jmp, AddressingMode::AbsoluteIndexedIndirect, 6), // 0x7C
    op(Mnemonic::Adc, AddressingMode::AbsoluteX, 4), // 0x7D
    op(Mnemonic::Ror, AddressingMode::AbsoluteX, 6), // 0x7E
    op(Mnemonic::Bbr(7), AddressingMode::ZeroPageRelative, 5), // 0x7F
    op(Mnemonic::Bra, AddressingMode::Relative, 2), // 0x80
    op(Mnemonic::Sta, AddressingMode::IndirectX, 6), // 0x81
    op(Mnemonic::Nop, AddressingMode::Immediate, 2), // 0x82
    op(Mnemonic::Nop, AddressingMode::Implicit, 1), // 0x83
    op(Mnemonic::Sty, AddressingMode::ZeroPage, 3), // 0x84
    op(Mnemonic::Sta, AddressingMode::ZeroPage, 3), // 0x85
    op(Mnemonic::Stx, AddressingMode::ZeroPage, 3), // 0x86
    op(Mnemonic::Smb(0), AddressingMode::ZeroPage, 5), // 0x87
    op(Mnemonic::Dey, AddressingMode::Implicit, 2), // 0x88
    op(Mnemonic::Bit, AddressingMode::Immediate, 2), // 0x89
    op(Mnemonic::Txa, AddressingMode::Implicit, 2), // 0x8A
    op(Mnemonic::Nop, AddressingMode::Implicit, 1), // 0x8B
    op(Mnemonic::Sty, AddressingMode::Absolute, 4), // 0x8C
    op(Mnemonic::Sta, AddressingMode::Absolute, 4), // 0x8D
    op(Mnemonic::Stx, AddressingMode::Absolute, 4), // 0x8E
    op(Mnemonic::Bbs(0), AddressingMode::ZeroPageRelative, 5), // 0x8F
    op(Mnemonic::Bcc, AddressingMode::Relative, 2), // 0x90
    op(Mnemonic::Sta, AddressingMode::IndirectY, 6), // 0x91
    op(Mnemonic::Sta, AddressingMode::ZeroPageIndirect, 5), // 0x92
    op(Mnemonic::Nop, AddressingMode::Implicit, 1), // 0x93
    op(Mnemonic::Sty, AddressingMode::ZeroPageX, 4), // 0x94
    op(Mnemonic::Sta, AddressingMode::ZeroPageX, 4), // 0x95
    op(Mnemonic::Stx, AddressingMode::ZeroPageY, 4), // 0x96
    op(Mnemonic::Smb(1), AddressingMode::ZeroPage, 5), // 0x97
    op(Mnemonic::Tya, AddressingMode::Implicit, 2), // 0x98
    op(Mnemonic::Sta, AddressingMode::AbsoluteY, 5), // 0x99
    op(Mnemonic::Txs, AddressingMode::Implicit, 2), // 0x9A
    op(Mnemonic::Nop, AddressingMode::Implicit, 1), // 0x9B
    op(Mnemonic::Stz, AddressingMode::Absolute, 4), // 0x9C
    op(Mnemonic::Sta, AddressingMode::AbsoluteX, 5), // 0x9D
    op(Mnemonic::Stz, AddressingMode::AbsoluteX, 5), // 0x9E
    op(Mnemonic::Bbs(1), AddressingMode::ZeroPageRelative, 5), // 0x9F
    op(Mnemonic::Ldy, AddressingMode::Immediate, 2), // 0xA0
    op(Mnemonic::Lda, AddressingMode::IndirectX, 6), // 0xA1
    op(Mnemonic::Ldx, AddressingMode::Immediate, 2), // 0xA2
    op(Mnemonic::Nop, AddressingMode::Implicit, 1), // 0xA3
    op(Mnemonic::Ldy, AddressingMode::ZeroPage, 3), // 0xA4
    op(Mnemonic::Lda, AddressingMode::ZeroPage, 3), // 0xA5
    op(Mnemonic::Ldx, AddressingMode::ZeroPage, 3), // 0xA6
    op(Mnemonic::Smb(2), AddressingMode::ZeroPage, 5), // 0xA7
    op(Mnemonic::Tay, AddressingMode::Implicit, 2), // 0xA8
    op(Mnemonic::Lda, AddressingMode::Immediate, 2), // 0xA9
    op(Mnemonic::Tax, AddressingMode::Implicit, 2), // 0xAA
    op(Mnemonic::Nop, AddressingMode::Implicit, 1), // 0xAB
    op(Mnemonic::Ldy, AddressingMode::Absolute, 4), // 0xAC
    op(Mnemonic::Lda, AddressingMode::Absolute, 4), // 0xAD
    op(Mnemonic::Ldx, AddressingMode::Absolute, 4), // 0xAE
    op(Mnemonic::Bbs(2), AddressingMode::ZeroPageRelative, 5), // 0xAF
    op(Mnemonic::Bcs, AddressingMode::Relative, 2), // 0xB0
    op(Mnemonic::Lda, AddressingMode::IndirectY, 5), // 0xB1
    op(Mnemonic::Lda, AddressingMode::ZeroPageIndirect, 5), // 0xB2
    op(Mnemonic::Nop, AddressingMode::Implicit, 1), // 0xB3
    op(Mnemonic::Ldy, AddressingMode::ZeroPageX, 4), // 0xB4
    op(Mnemonic::Lda, AddressingMode::ZeroPageX, 4), // 0xB5
    op(Mnemonic::Ldx, AddressingMode::ZeroPageY, 4), // 0xB6
    op(Mnemonic::Smb(3), AddressingMode::ZeroPage, 5), // 0xB7
    op(Mnemonic::Clv, AddressingMode::Implicit, 2), // 0xB8
    op(Mnemonic::Lda, AddressingMode::AbsoluteY, 4), // 0xB9
    op(Mnemonic::Tsx, AddressingMode::Implicit, 2), // 0xBA
    op(Mnemonic::Nop, AddressingMode::Implicit, 1), // 0xBB
    op(Mnemonic::Ldy, AddressingMode::AbsoluteX, 4), // 0xBC
    op(Mnemonic::Lda, AddressingMode::AbsoluteX, 4), // 0xBD
    op(Mnemonic::Ldx, AddressingMode::AbsoluteY, 4), // 0xBE
    op(Mnemonic::Bbs(3), AddressingMode::ZeroPageRelative, 5), // 0xBF
    op(Mnemonic::Cpy, AddressingMode::Immediate, 2), // 0xC0
    op(Mnemonic::Cmp, AddressingMode::IndirectX, 6), // 0xC1
    op(Mnemonic::Nop, AddressingMode::Immediate, 2), // 0xC2
    op(Mnemonic::Nop, AddressingMode::Implicit, 1), // 0xC3
    op(Mnemonic::Cpy, AddressingMode::ZeroPage, 3), // 0xC4
    op(Mnemonic::Cmp, AddressingMode::ZeroPage, 3), // 0xC5
    op(Mnemonic::Dec, AddressingMode::ZeroPage, 5), // 0xC6
    op(Mnemonic::Smb(4), AddressingMode::ZeroPage, 5), // 0xC7
    op(Mnemonic::Iny, AddressingMode::Implicit, 2), // 0xC8
    op(Mnemonic::Cmp, AddressingMode::Immediate, 2), // 0xC9
    op(Mnemonic::Dex, AddressingMode::Implicit, 2), // 0xCA
    op(Mnemonic::Wai, AddressingMode::Implicit, 3), // 0xCB
    op(Mnemonic::Cpy, AddressingMode::Absolute, 4), // 0xCC
    op(Mnemonic::Cmp, AddressingMode::Absolute, 4), // 0xCD
    op(Mnemonic::Dec, AddressingMode::Absolute, 6), // 0xCE
    op(Mnemonic::Bbs(4), AddressingMode::ZeroPageRelative, 5), // 0xCF
    op(Mnemonic::Bne, AddressingMode::Relative, 2), // 0xD0
    op(Mnemonic::Cmp, AddressingMode::IndirectY, 5), // 0xD1
    op(Mnemonic::Cmp, AddressingMode::ZeroPageIndirect, 5), // 0xD2
    op(Mnemonic::Nop, AddressingMode::Implicit, 1), // 0xD3
    op(Mnemonic::Nop, AddressingMode::ZeroPageX, 4), // 0xD4
    op(Mnemonic::Cmp, AddressingMode::ZeroPageX, 4), // 0xD5
    op(Mnemonic::Dec, AddressingMode::ZeroPageX, 6), // 0xD6
    op(Mnemonic::Smb(5), AddressingMode::ZeroPage, 5), // 0xD7
    op(Mnemonic::Cld, AddressingMode::Implicit, 2), // 0xD8
    op(Mnemonic::Cmp, AddressingMode::AbsoluteY, 4), // 0xD9
    op(Mnemonic::Phx, AddressingMode::Implicit, 3), // 0xDA
    op(Mnemonic::Stp, AddressingMode::Implicit, 3), // 0xDB
    op(Mnemonic::Nop, AddressingMode::Absolute, 4), // 0xDC
    op(Mnemonic::Cmp, AddressingMode::AbsoluteX, 4), // 0xDD
    op(Mnemonic::Dec, AddressingMode::AbsoluteX, 7), // 0xDE
    op(Mnemonic::Bbs(5), AddressingMode::ZeroPageRelative, 5), // 0xDF
    op(Mnemonic::Cpx, AddressingMode::Immediate, 2), // 0xE0
    op(Mnemonic::Sbc, AddressingMode::IndirectX, 6), // 0xE1
    op(Mnemonic::Nop, AddressingMode::Immediate, 2), // 0xE2
    op(Mnemonic::Nop, AddressingMode::Implicit, 1), // 0xE3
    op(Mnemonic::Cpx, AddressingMode::ZeroPage, 3), // 0xE4
    op(Mnemonic::Sbc, AddressingMode::ZeroPage, 3), // 0xE5
    op(Mnemonic::Inc, AddressingMode::ZeroPage, 5), // 0xE6
    op(Mnemonic::Smb(6), AddressingMode::ZeroPage, 5), // 0xE7
    op(Mnemonic::Inx, AddressingMode::Implicit, 2), // 0xE8
    op(Mnemonic::Sbc, AddressingMode::Immediate, 2), // 0xE9
    op(Mnemonic::Nop, AddressingMode::Implicit, 2), // 0xEA
    op(Mnemonic::Nop, AddressingMode::Implicit, 1), // 0xEB
    op(Mnemonic::Cpx, AddressingMode::Absolute, 4), // 0xEC
    op(Mnemonic::Sbc, AddressingMode::Absolute, 4), // 0xED
    op(Mnemonic::Inc, AddressingMode::Absolute, 6), // 0xEE
    op(Mnemonic::Bbs(6), AddressingMode::ZeroPageRelative, 5), // 0xEF
    op(Mnemonic::Beq, AddressingMode::Relative, 2), // 0xF0
    op(Mnemonic::Sbc, AddressingMode::IndirectY, 5), // 0xF1
    op(Mnemonic::Sbc, AddressingMode::ZeroPageIndirect, 5), // 0xF2
    op(Mnemonic::Nop, AddressingMode::Implicit, 1), // 0xF3
    op(Mnemonic::Nop, AddressingMode::ZeroPageX, 4), // 0xF4
    op(Mnemonic::Sbc, AddressingMode::ZeroPageX, 4), // 0xF5
    op(Mnemonic::Inc, AddressingMode::ZeroPageX, 6), // 0xF6
    op(Mnemonic::Smb(7), AddressingMode::ZeroPage, 5), // 0xF7
    op(Mnemonic::Sed, AddressingMode::Implicit, 2), // 0xF8
    op(Mnemonic::Sbc, AddressingMode::AbsoluteY, 4), // 0xF9
    op(Mnemonic::Plx, AddressingMode::Implicit, 4), // 0xFA
    op(Mnemonic::Nop, AddressingMode::Implicit, 1), // 0xFB
    op(Mnemonic::Nop, AddressingMode::Absolute, 4), // 0xFC
    op(Mnemonic::Sbc, AddressingMode::AbsoluteX, 4), // 0xFD
    op(Mnemonic::Inc, AddressingMode::AbsoluteX, 7), // 0xFE
    op(Mnemonic::Bbs(7), AddressingMode::ZeroPageRelative, 5), // 0xFF
];
