//! # 65C02 Instruction Implementations
//!
//! This module contains the implementations of all 65C02 instructions, organized by category.
//! Each instruction is implemented as a standalone function that takes a mutable reference
//! to the CPU and the opcode byte, and returns the cycles the instruction took.
//!
//! The opcode byte has already been fetched (PC points at the first operand byte).
//! Operand decoding and base cycle counts come from [`OPCODE_TABLE`].
//!
//! ## Categories
//!
//! - **alu**: Arithmetic and logic operations (ADC, SBC, AND, ORA, EOR, CMP, CPX, CPY, BIT)
//! - **bits**: 65C02 bit operations (TSB, TRB, RMBn, SMBn, BBRn, BBSn)
//! - **branches**: Conditional branches and BRA
//! - **shifts**: Shift and rotate operations (ASL, LSR, ROL, ROR)
//! - **load_store**: Load and store instructions (LDA, LDX, LDY, STA, STX, STY, STZ)
//! - **inc_dec**: Increment and decrement operations (INC, DEC, INX, INY, DEX, DEY)
//! - **control**: Control flow instructions (JMP, JSR, RTS, RTI, BRK, NOP, WAI, STP)
//! - **stack**: Stack operations (PHA, PHP, PLA, PLP, PHX, PHY, PLX, PLY)
//! - **flags**: Status flag manipulation (CLC, SEC, CLI, SEI, CLD, SED, CLV)
//! - **transfer**: Register transfer operations (TAX, TAY, TXA, TYA, TSX, TXS)

pub mod alu;
pub mod bits;
pub mod branches;
pub mod control;
pub mod flags;
pub mod inc_dec;
pub mod load_store;
pub mod shifts;
pub mod stack;
pub mod transfer;

use crate::mli::MliContext;
use crate::opcodes::{Mnemonic, OpcodeMetadata, OPCODE_TABLE};
use crate::{Result, CPU};

/// Executes the already-fetched `opcode`.
pub(crate) fn execute<H: MliContext>(cpu: &mut CPU<H>, opcode: u8) -> Result<u32> {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let cycles = match metadata.mnemonic {
        Mnemonic::Adc => alu::execute_adc(cpu, opcode),
        Mnemonic::Sbc => alu::execute_sbc(cpu, opcode),
        Mnemonic::And => alu::execute_and(cpu, opcode),
        Mnemonic::Ora => alu::execute_ora(cpu, opcode),
        Mnemonic::Eor => alu::execute_eor(cpu, opcode),
        Mnemonic::Cmp => alu::execute_cmp(cpu, opcode),
        Mnemonic::Cpx => alu::execute_cpx(cpu, opcode),
        Mnemonic::Cpy => alu::execute_cpy(cpu, opcode),
        Mnemonic::Bit => alu::execute_bit(cpu, opcode),

        Mnemonic::Tsb => bits::execute_tsb(cpu, opcode),
        Mnemonic::Trb => bits::execute_trb(cpu, opcode),
        Mnemonic::Rmb(bit) => bits::execute_rmb(cpu, opcode, bit),
        Mnemonic::Smb(bit) => bits::execute_smb(cpu, opcode, bit),
        Mnemonic::Bbr(bit) => bits::execute_bbr(cpu, opcode, bit),
        Mnemonic::Bbs(bit) => bits::execute_bbs(cpu, opcode, bit),

        Mnemonic::Bcc
        | Mnemonic::Bcs
        | Mnemonic::Beq
        | Mnemonic::Bne
        | Mnemonic::Bmi
        | Mnemonic::Bpl
        | Mnemonic::Bvc
        | Mnemonic::Bvs
        | Mnemonic::Bra => branches::execute_branch(cpu, opcode),

        Mnemonic::Asl => shifts::execute_asl(cpu, opcode),
        Mnemonic::Lsr => shifts::execute_lsr(cpu, opcode),
        Mnemonic::Rol => shifts::execute_rol(cpu, opcode),
        Mnemonic::Ror => shifts::execute_ror(cpu, opcode),

        Mnemonic::Lda => load_store::execute_lda(cpu, opcode),
        Mnemonic::Ldx => load_store::execute_ldx(cpu, opcode),
        Mnemonic::Ldy => load_store::execute_ldy(cpu, opcode),
        Mnemonic::Sta => load_store::execute_sta(cpu, opcode),
        Mnemonic::Stx => load_store::execute_stx(cpu, opcode),
        Mnemonic::Sty => load_store::execute_sty(cpu, opcode),
        Mnemonic::Stz => load_store::execute_stz(cpu, opcode),

        Mnemonic::Inc => inc_dec::execute_inc(cpu, opcode),
        Mnemonic::Dec => inc_dec::execute_dec(cpu, opcode),
        Mnemonic::Inx => inc_dec::execute_inx(cpu, opcode),
        Mnemonic::Iny => inc_dec::execute_iny(cpu, opcode),
        Mnemonic::Dex => inc_dec::execute_dex(cpu, opcode),
        Mnemonic::Dey => inc_dec::execute_dey(cpu, opcode),

        Mnemonic::Jmp => control::execute_jmp(cpu, opcode),
        Mnemonic::Jsr => return control::execute_jsr(cpu, opcode),
        Mnemonic::Rts => control::execute_rts(cpu, opcode),
        Mnemonic::Rti => control::execute_rti(cpu, opcode),
        Mnemonic::Brk => control::execute_brk(cpu, opcode),
        Mnemonic::Nop => control::execute_nop(cpu, opcode),
        Mnemonic::Wai => control::execute_wai(cpu, opcode),
        Mnemonic::Stp => control::execute_stp(cpu, opcode),

        Mnemonic::Pha => stack::execute_pha(cpu, opcode),
        Mnemonic::Php => stack::execute_php(cpu, opcode),
        Mnemonic::Pla => stack::execute_pla(cpu, opcode),
        Mnemonic::Plp => stack::execute_plp(cpu, opcode),
        Mnemonic::Phx => stack::execute_phx(cpu, opcode),
        Mnemonic::Phy => stack::execute_phy(cpu, opcode),
        Mnemonic::Plx => stack::execute_plx(cpu, opcode),
        Mnemonic::Ply => stack::execute_ply(cpu, opcode),

        Mnemonic::Clc
        | Mnemonic::Sec
        | Mnemonic::Cli
        | Mnemonic::Sei
        | Mnemonic::Cld
        | Mnemonic::Sed
        | Mnemonic::Clv => flags::execute_flag(cpu, opcode),

        Mnemonic::Tax => transfer::execute_tax(cpu, opcode),
        Mnemonic::Tay => transfer::execute_tay(cpu, opcode),
        Mnemonic::Txa => transfer::execute_txa(cpu, opcode),
        Mnemonic::Tya => transfer::execute_tya(cpu, opcode),
        Mnemonic::Tsx => transfer::execute_tsx(cpu, opcode),
        Mnemonic::Txs => transfer::execute_txs(cpu, opcode),
    };

    Ok(cycles)
}

/// Base cycles plus one if an indexed read crossed a page.
#[inline]
pub(crate) fn read_cycles(metadata: &OpcodeMetadata, page_crossed: bool) -> u32 {
    metadata.base_cycles as u32 + page_crossed as u32
}
