//! Fuzz target for the tick loop.
//!
//! Assembles random programs out of supported opcodes that cannot
//! overwrite the program image, runs them for a bounded number of
//! cycles, and checks the accounting invariants: one cycle per tick, the
//! retirement counter matching the reported retirements, and halt
//! absorption.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use rp2a03::{AddressingMode, RamBank, Uop, CPU, OPCODE_TABLE};

#[derive(Debug, Arbitrary)]
struct FuzzInstruction {
    opcode_choice: u8,
    operand_lo: u8,
    operand_hi: u8,
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    a: u8,
    x: u8,
    y: u8,
    instructions: Vec<FuzzInstruction>,
    zero_page: [u8; 64],
}

/// Opcodes safe for random programs: everything supported except the
/// fatal CLD/SED and the ops that write outside the stack page (stores
/// and memory read-modify-writes), which could corrupt the program
/// image mid-run.
fn runnable_opcodes() -> Vec<u8> {
    OPCODE_TABLE
        .iter()
        .enumerate()
        .filter_map(|(opcode, entry)| entry.as_ref().map(|e| (opcode as u8, *e)))
        .filter(|(_, e)| {
            !matches!(e.uop, Uop::Cld | Uop::Sed | Uop::Sta | Uop::Stx | Uop::Sty)
                && !(e.addressing_mode != AddressingMode::Implicit
                    && matches!(
                        e.uop,
                        Uop::Inc | Uop::Dec | Uop::Asl | Uop::Lsr | Uop::Rol | Uop::Ror
                    ))
        })
        .map(|(opcode, _)| opcode)
        .collect()
}

fn instruction_len(mode: AddressingMode) -> u16 {
    match mode {
        AddressingMode::Implicit => 1,
        AddressingMode::Absolute | AddressingMode::AbsoluteX | AddressingMode::AbsoluteY => 3,
        _ => 2,
    }
}

fuzz_target!(|input: FuzzInput| {
    if input.instructions.len() > 256 {
        return;
    }

    let opcodes = runnable_opcodes();

    // The program sits at 0x0200, clear of the zero page and the stack,
    // with a JAM pinned at the end.
    let ram = RamBank::new(0x10000);
    ram.load_bytes(0x0000, &input.zero_page);
    ram.write(0xFFFC, 0x00);
    ram.write(0xFFFD, 0x02);

    let mut at = 0x0200u16;
    for instr in &input.instructions {
        let opcode = opcodes[instr.opcode_choice as usize % opcodes.len()];
        let entry = OPCODE_TABLE[opcode as usize].unwrap();

        ram.write(at, opcode);
        if instruction_len(entry.addressing_mode) >= 2 {
            ram.write(at + 1, instr.operand_lo);
        }
        if instruction_len(entry.addressing_mode) == 3 {
            ram.write(at + 2, instr.operand_hi);
        }
        at += instruction_len(entry.addressing_mode);
    }
    ram.write(at, 0x02);

    let mut cpu = CPU::new();
    cpu.map_ram_region(0x0000, ram);
    cpu.reset();
    cpu.set_a(input.a);
    cpu.set_x(input.x);
    cpu.set_y(input.y);

    let mut reported = 0u64;
    for _ in 0..10_000 {
        if cpu.is_halted() {
            break;
        }
        let before = cpu.cycles();
        if cpu.tick() {
            reported += 1;
        }
        assert_eq!(cpu.cycles(), before + 1);
    }

    assert!(cpu.is_halted(), "bounded program must reach its JAM");
    assert_eq!(cpu.total_retired(), reported);

    // Ticking a wedged CPU changes nothing.
    let cycles = cpu.cycles();
    assert!(!cpu.tick());
    assert_eq!(cpu.cycles(), cycles);
});
