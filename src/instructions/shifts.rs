//! # Shift and Rotate Instructions
//!
//! In Implicit mode these operate on the accumulator in one sub-cycle.
//! Against memory they are read-modify-write, phased exactly like INC/DEC:
//! read into the scratch, shift, write back. The carry flag receives the
//! bit shifted out; ROL/ROR feed the old carry into the vacated bit.

use crate::addressing::AddressingMode;
use crate::cpu::CPU;
use crate::status;

pub(crate) fn execute_asl(cpu: &mut CPU) {
    if cpu.instr.mode == AddressingMode::Implicit {
        cpu.change_flags(status::C, if cpu.a & 0x80 != 0 { status::C } else { 0 });
        cpu.a <<= 1;
        cpu.set_value_flags(cpu.a);
        return;
    }

    debug_assert!(cpu.instr.address_latched);
    match cpu.instr.ncycles - cpu.instr.cycle - 1 {
        3 => cpu.db = cpu.bus.load(cpu.ab),
        2 => {
            cpu.change_flags(status::C, if cpu.db & 0x80 != 0 { status::C } else { 0 });
            cpu.db <<= 1;
            cpu.set_value_flags(cpu.db);
        }
        1 => cpu.bus.store(cpu.ab, cpu.db),
        phase => panic!("illegal ASL sub-cycle (T-{})", phase),
    }
}

pub(crate) fn execute_lsr(cpu: &mut CPU) {
    if cpu.instr.mode == AddressingMode::Implicit {
        cpu.change_flags(status::C, if cpu.a & 0x01 != 0 { status::C } else { 0 });
        cpu.a >>= 1;
        cpu.set_value_flags(cpu.a);
        return;
    }

    debug_assert!(cpu.instr.address_latched);
    match cpu.instr.ncycles - cpu.instr.cycle - 1 {
        3 => cpu.db = cpu.bus.load(cpu.ab),
        2 => {
            cpu.change_flags(status::C, if cpu.db & 0x01 != 0 { status::C } else { 0 });
            cpu.db >>= 1;
            cpu.set_value_flags(cpu.db);
        }
        1 => cpu.bus.store(cpu.ab, cpu.db),
        phase => panic!("illegal LSR sub-cycle (T-{})", phase),
    }
}

pub(crate) fn execute_rol(cpu: &mut CPU) {
    if cpu.instr.mode == AddressingMode::Implicit {
        let carry_in = cpu.p & status::C;
        cpu.change_flags(status::C, if cpu.a & 0x80 != 0 { status::C } else { 0 });
        cpu.a = cpu.a << 1 | carry_in;
        cpu.set_value_flags(cpu.a);
        return;
    }

    debug_assert!(cpu.instr.address_latched);
    match cpu.instr.ncycles - cpu.instr.cycle - 1 {
        3 => cpu.db = cpu.bus.load(cpu.ab),
        2 => {
            let carry_in = cpu.p & status::C;
            cpu.change_flags(status::C, if cpu.db & 0x80 != 0 { status::C } else { 0 });
            cpu.db = cpu.db << 1 | carry_in;
            cpu.set_value_flags(cpu.db);
        }
        1 => cpu.bus.store(cpu.ab, cpu.db),
        phase => panic!("illegal ROL sub-cycle (T-{})", phase),
    }
}

pub(crate) fn execute_ror(cpu: &mut CPU) {
    if cpu.instr.mode == AddressingMode::Implicit {
        let carry_in = cpu.p & status::C;
        cpu.change_flags(status::C, if cpu.a & 0x01 != 0 { status::C } else { 0 });
        cpu.a = cpu.a >> 1 | carry_in << 7;
        cpu.set_value_flags(cpu.a);
        return;
    }

    debug_assert!(cpu.instr.address_latched);
    match cpu.instr.ncycles - cpu.instr.cycle - 1 {
        3 => cpu.db = cpu.bus.load(cpu.ab),
        2 => {
            let carry_in = cpu.p & status::C;
            cpu.change_flags(status::C, if cpu.db & 0x01 != 0 { status::C } else { 0 });
            cpu.db = cpu.db >> 1 | carry_in << 7;
            cpu.set_value_flags(cpu.db);
        }
        1 => cpu.bus.store(cpu.ab, cpu.db),
        phase => panic!("illegal ROR sub-cycle (T-{})", phase),
    }
}
