//! # Load and Store Instructions
//!
//! LDA/LDX/LDY read the byte at the latched effective address and update
//! N/Z from the loaded value. STA/STX/STY write the register out and leave
//! the flags alone.

use crate::cpu::CPU;

pub(crate) fn execute_lda(cpu: &mut CPU) {
    debug_assert!(cpu.instr.address_latched);
    cpu.a = cpu.bus.load(cpu.ab);
    cpu.set_value_flags(cpu.a);
}

pub(crate) fn execute_ldx(cpu: &mut CPU) {
    debug_assert!(cpu.instr.address_latched);
    cpu.x = cpu.bus.load(cpu.ab);
    cpu.set_value_flags(cpu.x);
}

pub(crate) fn execute_ldy(cpu: &mut CPU) {
    debug_assert!(cpu.instr.address_latched);
    cpu.y = cpu.bus.load(cpu.ab);
    cpu.set_value_flags(cpu.y);
}

pub(crate) fn execute_sta(cpu: &mut CPU) {
    debug_assert!(cpu.instr.address_latched);
    cpu.bus.store(cpu.ab, cpu.a);
}

pub(crate) fn execute_stx(cpu: &mut CPU) {
    debug_assert!(cpu.instr.address_latched);
    cpu.bus.store(cpu.ab, cpu.x);
}

pub(crate) fn execute_sty(cpu: &mut CPU) {
    debug_assert!(cpu.instr.address_latched);
    cpu.bus.store(cpu.ab, cpu.y);
}
