//! # Register Transfer Instructions
//!
//! All transfers update N/Z from the moved value except TXS: writing the
//! stack pointer touches no flags on the real part.

use crate::cpu::CPU;

pub(crate) fn execute_tax(cpu: &mut CPU) {
    cpu.x = cpu.a;
    cpu.set_value_flags(cpu.x);
}

pub(crate) fn execute_tay(cpu: &mut CPU) {
    cpu.y = cpu.a;
    cpu.set_value_flags(cpu.y);
}

pub(crate) fn execute_tsx(cpu: &mut CPU) {
    cpu.x = cpu.sp;
    cpu.set_value_flags(cpu.x);
}

pub(crate) fn execute_txa(cpu: &mut CPU) {
    cpu.a = cpu.x;
    cpu.set_value_flags(cpu.a);
}

pub(crate) fn execute_txs(cpu: &mut CPU) {
    // No flag update here.
    cpu.sp = cpu.x;
}

pub(crate) fn execute_tya(cpu: &mut CPU) {
    cpu.a = cpu.y;
    cpu.set_value_flags(cpu.a);
}
