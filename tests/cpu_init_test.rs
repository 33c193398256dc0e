//! CPU construction, reset, and lifecycle tests.
//!
//! Covers the power-on state, the reset sequence (vector load, register
//! reinitialisation, first-opcode prefetch), and which state survives a
//! reset.

use rp2a03::{status, RamBank, CPU};

fn ram_with_reset_vector(target: u16) -> RamBank {
    let ram = RamBank::new(0x10000);
    ram.write(0xFFFC, target as u8);
    ram.write(0xFFFD, (target >> 8) as u8);
    ram
}

#[test]
fn reset_reads_the_vector_little_endian() {
    let ram = ram_with_reset_vector(0x8000);
    ram.write(0x8000, 0xEA); // NOP, something for the prefetch to decode

    let mut cpu = CPU::new();
    cpu.map_ram_region(0x0000, ram);
    cpu.reset();

    // The prefetch already consumed the opcode byte.
    assert_eq!(cpu.pc(), 0x8001);
}

#[test]
fn reset_initialises_the_documented_state() {
    let ram = ram_with_reset_vector(0x0000);
    ram.write(0x0000, 0xEA);

    let mut cpu = CPU::new();
    cpu.map_ram_region(0x0000, ram);
    cpu.reset();

    assert_eq!(cpu.sp(), 0xFD);
    assert_eq!(cpu.status(), status::I | status::U);
    assert!(cpu.flag_i());
    assert!(!cpu.flag_d());
    assert_eq!(cpu.status() & status::B, 0);
    assert_eq!(cpu.cycles(), 8);
    assert_eq!(cpu.total_retired(), 0);
    assert!(!cpu.is_halted());
}

#[test]
fn a_x_and_y_survive_reset() {
    let ram = ram_with_reset_vector(0x0000);
    ram.write(0x0000, 0xEA);

    let mut cpu = CPU::new();
    cpu.map_ram_region(0x0000, ram);
    cpu.reset();

    cpu.set_a(0xAA);
    cpu.set_x(0xBB);
    cpu.set_y(0xCC);
    cpu.reset();

    assert_eq!(cpu.a(), 0xAA);
    assert_eq!(cpu.x(), 0xBB);
    assert_eq!(cpu.y(), 0xCC);
}

#[test]
fn reset_recovers_a_jammed_cpu() {
    let ram = ram_with_reset_vector(0x0000);
    ram.write(0x0000, 0x02); // JAM

    let mut cpu = CPU::new();
    cpu.map_ram_region(0x0000, ram.clone());
    cpu.reset();

    cpu.tick();
    assert!(cpu.is_halted());

    // Swap the program and reset; the CPU runs again.
    ram.write(0x0000, 0xEA);
    cpu.reset();
    assert!(!cpu.is_halted());
    assert_eq!(cpu.cycles(), 8);
    assert_eq!(cpu.total_retired(), 0);

    cpu.tick();
    assert!(cpu.tick()); // NOP retires
    assert_eq!(cpu.total_retired(), 1);
}

#[test]
#[should_panic(expected = "unmapped address 0xFFFC")]
fn reset_without_a_vector_region_is_fatal() {
    let mut cpu = CPU::new();
    cpu.map_ram_region(0x0000, RamBank::new(0x1000));
    cpu.reset();
}
