//! Micro-op implementations, grouped by instruction family.
//!
//! [`execute`] runs one sub-cycle of the current micro-op. Most ops finish
//! in a single sub-cycle; the stack ops and the memory read-modify-write
//! ops span several, sequenced by the counters in the instruction record.

use crate::cpu::CPU;
use crate::opcodes::Uop;

mod alu;
mod control;
mod flags;
mod inc_dec;
mod load_store;
mod shifts;
mod stack;
mod transfer;

/// Runs one sub-cycle of the current micro-op.
pub(crate) fn execute(cpu: &mut CPU) {
    debug_assert!(!cpu.halted);

    match cpu.instr.uop {
        Uop::Nop => control::execute_nop(cpu),
        Uop::Hlt => control::execute_hlt(cpu),
        Uop::Lda => load_store::execute_lda(cpu),
        Uop::Ldx => load_store::execute_ldx(cpu),
        Uop::Ldy => load_store::execute_ldy(cpu),
        Uop::Sta => load_store::execute_sta(cpu),
        Uop::Stx => load_store::execute_stx(cpu),
        Uop::Sty => load_store::execute_sty(cpu),
        Uop::Tax => transfer::execute_tax(cpu),
        Uop::Tay => transfer::execute_tay(cpu),
        Uop::Tsx => transfer::execute_tsx(cpu),
        Uop::Txa => transfer::execute_txa(cpu),
        Uop::Txs => transfer::execute_txs(cpu),
        Uop::Tya => transfer::execute_tya(cpu),
        Uop::Pha => stack::execute_pha(cpu),
        Uop::Pla => stack::execute_pla(cpu),
        Uop::Php => stack::execute_php(cpu),
        Uop::Plp => stack::execute_plp(cpu),
        Uop::Dec => inc_dec::execute_dec(cpu),
        Uop::Dex => inc_dec::execute_dex(cpu),
        Uop::Dey => inc_dec::execute_dey(cpu),
        Uop::Inc => inc_dec::execute_inc(cpu),
        Uop::Inx => inc_dec::execute_inx(cpu),
        Uop::Iny => inc_dec::execute_iny(cpu),
        Uop::Adc => alu::execute_adc(cpu),
        Uop::Sbc => alu::execute_sbc(cpu),
        Uop::And => alu::execute_and(cpu),
        Uop::Eor => alu::execute_eor(cpu),
        Uop::Ora => alu::execute_ora(cpu),
        Uop::Asl => shifts::execute_asl(cpu),
        Uop::Lsr => shifts::execute_lsr(cpu),
        Uop::Rol => shifts::execute_rol(cpu),
        Uop::Ror => shifts::execute_ror(cpu),
        Uop::Clc => flags::execute_clc(cpu),
        Uop::Cld => flags::execute_cld(cpu),
        Uop::Cli => flags::execute_cli(cpu),
        Uop::Clv => flags::execute_clv(cpu),
        Uop::Sec => flags::execute_sec(cpu),
        Uop::Sed => flags::execute_sed(cpu),
        Uop::Sei => flags::execute_sei(cpu),
    }
}
