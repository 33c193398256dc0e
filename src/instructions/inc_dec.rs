//! # Increment and Decrement Instructions
//!
//! INC/DEC are read-modify-write: read the operand into the data-bus
//! scratch, mutate it, write it back, one phase per sub-cycle. The phase
//! is derived from how many sub-cycles remain before retirement
//! (`ncycles - cycle - 1`), so the same sequence works for every
//! addressing mode regardless of how long the address took to latch.
//!
//! INX/DEX/INY/DEY mutate the index registers directly in one sub-cycle.

use crate::cpu::CPU;

pub(crate) fn execute_dec(cpu: &mut CPU) {
    debug_assert!(cpu.instr.address_latched);
    match cpu.instr.ncycles - cpu.instr.cycle - 1 {
        3 => cpu.db = cpu.bus.load(cpu.ab),
        2 => cpu.db = cpu.db.wrapping_sub(1),
        1 => {
            cpu.bus.store(cpu.ab, cpu.db);
            cpu.set_value_flags(cpu.db);
        }
        phase => panic!("illegal DEC sub-cycle (T-{})", phase),
    }
}

pub(crate) fn execute_inc(cpu: &mut CPU) {
    debug_assert!(cpu.instr.address_latched);
    match cpu.instr.ncycles - cpu.instr.cycle - 1 {
        3 => cpu.db = cpu.bus.load(cpu.ab),
        2 => cpu.db = cpu.db.wrapping_add(1),
        1 => {
            cpu.bus.store(cpu.ab, cpu.db);
            cpu.set_value_flags(cpu.db);
        }
        phase => panic!("illegal INC sub-cycle (T-{})", phase),
    }
}

pub(crate) fn execute_dex(cpu: &mut CPU) {
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.set_value_flags(cpu.x);
}

pub(crate) fn execute_inx(cpu: &mut CPU) {
    cpu.x = cpu.x.wrapping_add(1);
    cpu.set_value_flags(cpu.x);
}

pub(crate) fn execute_dey(cpu: &mut CPU) {
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.set_value_flags(cpu.y);
}

pub(crate) fn execute_iny(cpu: &mut CPU) {
    cpu.y = cpu.y.wrapping_add(1);
    cpu.set_value_flags(cpu.y);
}
