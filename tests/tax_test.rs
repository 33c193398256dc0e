//! Tests for the TAX and TAY transfer instructions.

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
fn tax_copies_a_to_x() {
    let mut cpu = setup_cpu(&[0xAA, 0x02]);
    cpu.set_a(0x42);

    assert_eq!(cpu.step(), 2);
    assert_eq!(cpu.x(), 0x42);
    assert_eq!(cpu.a(), 0x42);
}

#[test]
fn tax_updates_n_and_z() {
    let mut cpu = setup_cpu(&[0xAA, 0x02]);
    cpu.set_a(0x00);
    cpu.step();
    assert!(cpu.flag_z());

    let mut cpu = setup_cpu(&[0xAA, 0x02]);
    cpu.set_a(0x90);
    cpu.step();
    assert!(cpu.flag_n());
}

#[test]
fn tay_copies_a_to_y() {
    let mut cpu = setup_cpu(&[0xA8, 0x02]);
    cpu.set_a(0x42);

    assert_eq!(cpu.step(), 2);
    assert_eq!(cpu.y(), 0x42);
}
