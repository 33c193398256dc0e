//! # Arithmetic and Logic Instructions
//!
//! ADC and SBC share one adder: SBC is ADC of the operand's complement,
//! which gives the 6502's borrow-is-inverted-carry behaviour for free.
//! All arithmetic is binary; decimal mode does not exist on the 2A03.

use crate::cpu::CPU;
use crate::status;

/// A + M + C, with the 6502 carry and signed-overflow rules.
fn add_with_carry(cpu: &mut CPU, m: u8) {
    let sum = cpu.a as u16 + m as u16 + (cpu.p & status::C) as u16;
    let result = sum as u8;

    // Signed overflow: both inputs agree in sign and the result disagrees.
    let overflow = (cpu.a ^ result) & (m ^ result) & 0x80 != 0;
    cpu.change_flags(status::V, if overflow { status::V } else { 0 });
    cpu.change_flags(status::C, if sum > 0xFF { status::C } else { 0 });
    cpu.set_value_flags(result);
    cpu.a = result;
}

pub(crate) fn execute_adc(cpu: &mut CPU) {
    debug_assert!(cpu.instr.address_latched);
    let m = cpu.bus.load(cpu.ab);
    add_with_carry(cpu, m);
}

pub(crate) fn execute_sbc(cpu: &mut CPU) {
    debug_assert!(cpu.instr.address_latched);
    let m = cpu.bus.load(cpu.ab);
    add_with_carry(cpu, !m);
}

pub(crate) fn execute_and(cpu: &mut CPU) {
    debug_assert!(cpu.instr.address_latched);
    cpu.a &= cpu.bus.load(cpu.ab);
    cpu.set_value_flags(cpu.a);
}

pub(crate) fn execute_eor(cpu: &mut CPU) {
    debug_assert!(cpu.instr.address_latched);
    cpu.a ^= cpu.bus.load(cpu.ab);
    cpu.set_value_flags(cpu.a);
}

pub(crate) fn execute_ora(cpu: &mut CPU) {
    debug_assert!(cpu.instr.address_latched);
    cpu.a |= cpu.bus.load(cpu.ab);
    cpu.set_value_flags(cpu.a);
}
