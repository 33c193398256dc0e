//! # Addressing Modes
//!
//! The ten addressing modes this revision supports, and the per-mode micro
//! state machines that materialise an effective address cycle by cycle.
//!
//! Each machine is keyed off the instruction's current sub-cycle. On entry
//! `pc` points at the first operand byte; when the machine finishes, `pc`
//! has moved past the operands and `ab` holds the effective address.
//! Implicit and Immediate are special: they complete without consuming a
//! bus cycle, so the control loop runs the micro-op in the same tick.

use crate::cpu::CPU;

/// How an instruction interprets its operand bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    /// No operand; shifts in this mode operate on the accumulator.
    ///
    /// Examples: NOP, TAX, ASL A
    Implicit,

    /// 8-bit constant following the opcode.
    ///
    /// Example: LDA #$10
    Immediate,

    /// 8-bit address in the zero page (0x0000-0x00FF).
    ///
    /// Example: LDA $80
    ZeroPage,

    /// Zero-page address indexed by X; wraps within the zero page.
    ///
    /// Example: LDA $80,X
    ZeroPageX,

    /// Zero-page address indexed by Y; wraps within the zero page.
    ///
    /// Example: LDX $80,Y
    ZeroPageY,

    /// Full 16-bit little-endian address.
    ///
    /// Example: LDA $1234
    Absolute,

    /// 16-bit address indexed by X. Read-style ops pay +1 cycle when the
    /// index carries into the high byte.
    ///
    /// Example: LDA $1234,X
    AbsoluteX,

    /// 16-bit address indexed by Y; penalty as for `AbsoluteX`.
    ///
    /// Example: LDA $1234,Y
    AbsoluteY,

    /// Indexed indirect: the zero-page operand plus X names a zero-page
    /// pointer, which is dereferenced.
    ///
    /// Example: LDA ($40,X)
    IndirectX,

    /// Indirect indexed: the zero-page operand names a pointer whose value
    /// is indexed by Y; penalty as for `AbsoluteY`.
    ///
    /// Example: LDA ($40),Y
    IndirectY,
}

/// Advances the current instruction's addressing machine by one sub-cycle.
///
/// Returns `true` when the mode completed without consuming the bus cycle
/// (Implicit/Immediate), telling the control loop to run the micro-op in
/// this same tick. All other modes return `false` and own the cycle.
///
/// # Panics
///
/// Panics if called on a sub-cycle the mode does not have; the control
/// loop never does.
pub(crate) fn step(cpu: &mut CPU) -> bool {
    let mut immediate = false;

    match cpu.instr.mode {
        AddressingMode::Implicit => {
            subcycle_check(cpu, cpu.instr.cycle == 0);
            cpu.instr.address_latched = true;
            immediate = true;
        }
        AddressingMode::Immediate => {
            // The operand byte is the effective address; no extra cycle.
            subcycle_check(cpu, cpu.instr.cycle == 0);
            let operand = cpu.pc;
            cpu.pc = cpu.pc.wrapping_add(1);
            cpu.latch_address(operand);
            immediate = true;
        }
        AddressingMode::ZeroPage => {
            subcycle_check(cpu, cpu.instr.cycle == 0);
            let lo = cpu.fetch_pc();
            cpu.latch_address(lo as u16);
        }
        AddressingMode::ZeroPageX => match cpu.instr.cycle {
            0 => cpu.db = cpu.fetch_pc(),
            1 => {
                // Indexing wraps within the zero page.
                let addr = cpu.db.wrapping_add(cpu.x);
                cpu.latch_address(addr as u16);
            }
            _ => subcycle_check(cpu, false),
        },
        AddressingMode::ZeroPageY => match cpu.instr.cycle {
            0 => cpu.db = cpu.fetch_pc(),
            1 => {
                let addr = cpu.db.wrapping_add(cpu.y);
                cpu.latch_address(addr as u16);
            }
            _ => subcycle_check(cpu, false),
        },
        AddressingMode::Absolute => match cpu.instr.cycle {
            0 => cpu.ab = cpu.fetch_pc() as u16,
            1 => {
                let hi = cpu.fetch_pc() as u16;
                let addr = hi << 8 | cpu.ab;
                cpu.latch_address(addr);
            }
            _ => subcycle_check(cpu, false),
        },
        AddressingMode::AbsoluteX => match cpu.instr.cycle {
            0 => cpu.ab = cpu.fetch_pc() as u16,
            1 => {
                cpu.ab = (cpu.fetch_pc() as u16) << 8 | cpu.ab;
                if !cpu.should_stall(cpu.ab, cpu.x) {
                    let addr = cpu.ab.wrapping_add(cpu.x as u16);
                    cpu.latch_address(addr);
                }
            }
            2 => {
                // Delay cycle inserted by the stall.
                let addr = cpu.ab.wrapping_add(cpu.x as u16);
                cpu.latch_address(addr);
            }
            _ => subcycle_check(cpu, false),
        },
        AddressingMode::AbsoluteY => match cpu.instr.cycle {
            0 => cpu.ab = cpu.fetch_pc() as u16,
            1 => {
                cpu.ab = (cpu.fetch_pc() as u16) << 8 | cpu.ab;
                if !cpu.should_stall(cpu.ab, cpu.y) {
                    let addr = cpu.ab.wrapping_add(cpu.y as u16);
                    cpu.latch_address(addr);
                }
            }
            2 => {
                let addr = cpu.ab.wrapping_add(cpu.y as u16);
                cpu.latch_address(addr);
            }
            _ => subcycle_check(cpu, false),
        },
        AddressingMode::IndirectX => match cpu.instr.cycle {
            0 => cpu.db = cpu.fetch_pc(),
            1 => {
                // The pointer itself wraps within the zero page.
                cpu.db = cpu.db.wrapping_add(cpu.x);
            }
            2 => {
                let ptr = cpu.db;
                cpu.db = cpu.db.wrapping_add(1);
                cpu.ab = cpu.bus.load(ptr as u16) as u16;
            }
            3 => {
                let hi = cpu.bus.load(cpu.db as u16) as u16;
                let addr = hi << 8 | cpu.ab;
                cpu.latch_address(addr);
            }
            _ => subcycle_check(cpu, false),
        },
        AddressingMode::IndirectY => match cpu.instr.cycle {
            0 => cpu.db = cpu.fetch_pc(),
            1 => {
                let ptr = cpu.db;
                cpu.db = cpu.db.wrapping_add(1);
                cpu.ab = cpu.bus.load(ptr as u16) as u16;
            }
            2 => {
                cpu.ab = (cpu.bus.load(cpu.db as u16) as u16) << 8 | cpu.ab;
                if !cpu.should_stall(cpu.ab, cpu.y) {
                    let addr = cpu.ab.wrapping_add(cpu.y as u16);
                    cpu.latch_address(addr);
                }
            }
            3 => {
                let addr = cpu.ab.wrapping_add(cpu.y as u16);
                cpu.latch_address(addr);
            }
            _ => subcycle_check(cpu, false),
        },
    }

    immediate
}

fn subcycle_check(cpu: &CPU, ok: bool) {
    assert!(
        ok,
        "illegal sub-cycle {} for {:?} addressing",
        cpu.instr.cycle, cpu.instr.mode
    );
}
