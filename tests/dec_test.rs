//! Tests for the DEC (Decrement Memory) instruction.

use rp2a03::{RamBank, CPU};

fn setup_cpu(program: &[u8]) -> CPU {
    let ram = RamBank::new(0x10000);
    ram.load_bytes(0x0000, program);
    let mut cpu = CPU::new();
    cpu.map_ram_region(0x0000, ram);
    cpu.reset();
    cpu
}

fn run_to_halt(cpu: &mut CPU) -> u64 {
    let start = cpu.cycles();
    for _ in 0..10_000 {
        if cpu.is_halted() {
            return cpu.cycles() - start - 1;
        }
        cpu.tick();
    }
    panic!("program never reached the JAM");
}

#[test]
fn dec_zero_page() {
    // DEC $03; JAM; .byte $43
    let mut cpu = setup_cpu(&[0xC6, 0x03, 0x02, 0x43]);
    let cycles = run_to_halt(&mut cpu);

    assert_eq!(cpu.load(0x0003), 0x42);
    assert_eq!(cycles, 5);
}

#[test]
fn dec_to_zero() {
    let mut cpu = setup_cpu(&[0xC6, 0x03, 0x02, 0x01]);
    run_to_halt(&mut cpu);

    assert_eq!(cpu.load(0x0003), 0x00);
    assert!(cpu.flag_z());
}

#[test]
fn dec_wraps_below_zero() {
    let mut cpu = setup_cpu(&[0xC6, 0x03, 0x02, 0x00]);
    run_to_halt(&mut cpu);

    assert_eq!(cpu.load(0x0003), 0xFF);
    assert!(cpu.flag_n());
}

#[test]
fn dec_zero_page_x() {
    let mut cpu = setup_cpu(&[0xD6, 0x02, 0x02, 0x05]);
    cpu.set_x(0x01);
    let cycles = run_to_halt(&mut cpu);

    assert_eq!(cpu.load(0x0003), 0x04);
    assert_eq!(cycles, 6);
}

#[test]
fn dec_absolute_x_always_takes_seven_cycles() {
    let mut cpu = setup_cpu(&[0xDE, 0xFF, 0x0F, 0x02]);
    cpu.set_x(0x02);
    cpu.store(0x1001, 0x10);
    let cycles = run_to_halt(&mut cpu);

    assert_eq!(cpu.load(0x1001), 0x0F);
    assert_eq!(cycles, 7);
}
