//! Tests for the TXS (Transfer X to Stack Pointer) instruction.
//!
//! TXS is the one transfer that does not touch the flags.

use rp2a03::{RamBank, CPU};

fn setup_cpu(program: &[u8]) -> CPU {
    let ram = RamBank::new(0x10000);
    ram.load_bytes(0x0000, program);
    let mut cpu = CPU::new();
    cpu.map_ram_region(0x0000, ram);
    cpu.reset();
    cpu
}

#[test]
fn txs_copies_x_to_sp() {
    let mut cpu = setup_cpu(&[0x9A, 0x02]);
    cpu.set_x(0x42);

    assert_eq!(cpu.step(), 2);
    assert_eq!(cpu.sp(), 0x42);
}

#[test]
fn txs_does_not_touch_the_flags() {
    // LDX #$80; LDA #$01; TXS; JAM
    // The load of A leaves N and Z clear; a flag-updating TXS would set N
    // from the 0x80 going into SP.
    let mut cpu = setup_cpu(&[0xA2, 0x80, 0xA9, 0x01, 0x9A, 0x02]);
    while !cpu.is_halted() {
        cpu.tick();
    }

    assert_eq!(cpu.sp(), 0x80);
    assert!(!cpu.flag_n());
    assert!(!cpu.flag_z());
}

#[test]
fn txs_then_push_uses_the_new_stack_page_offset() {
    // LDX #$80; TXS; LDA #$42; PHA; JAM
    let mut cpu = setup_cpu(&[0xA2, 0x80, 0x9A, 0xA9, 0x42, 0x48, 0x02]);
    while !cpu.is_halted() {
        cpu.tick();
    }

    assert_eq!(cpu.load(0x0180), 0x42);
    assert_eq!(cpu.sp(), 0x7F);
}
