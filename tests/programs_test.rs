//! Small end-to-end programs run to their trailing JAM.
//!
//! Each program exercises a few instructions together and checks the
//! architectural state and the total cycle accounting afterwards.

use rp2a03::{status, RamBank, CPU};

/// CPU with 64KB RAM, `program` at 0x0000, reset vector pointing at it.
fn setup_cpu(program: &[u8]) -> CPU {
    let ram = RamBank::new(0x10000);
    ram.load_bytes(0x0000, program);
    let mut cpu = CPU::new();
    cpu.map_ram_region(0x0000, ram);
    cpu.reset();
    cpu
}

fn run_to_halt(cpu: &mut CPU) {
    for _ in 0..10_000 {
        if cpu.is_halted() {
            return;
        }
        cpu.tick();
    }
    panic!("program never reached the JAM");
}

#[test]
fn nop_then_jam() {
    let mut cpu = setup_cpu(&[0xEA, 0x02]);
    run_to_halt(&mut cpu);

    // Reset costs 8, NOP 2, the JAM 1.
    assert_eq!(cpu.cycles(), 11);
    assert_eq!(cpu.total_retired(), 2);
    assert!(cpu.is_halted());
}

#[test]
fn lda_immediate_plain_value() {
    let mut cpu = setup_cpu(&[0xA9, 0x42, 0x02]);
    run_to_halt(&mut cpu);

    assert_eq!(cpu.a(), 0x42);
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());
    assert_eq!(cpu.total_retired(), 2);
}

#[test]
fn lda_immediate_zero() {
    let mut cpu = setup_cpu(&[0xA9, 0x00, 0x02]);
    run_to_halt(&mut cpu);

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_z());
    assert!(!cpu.flag_n());
}

#[test]
fn lda_immediate_negative() {
    let mut cpu = setup_cpu(&[0xA9, 0x80, 0x02]);
    run_to_halt(&mut cpu);

    assert_eq!(cpu.a(), 0x80);
    assert!(cpu.flag_n());
    assert!(!cpu.flag_v());
}

#[test]
fn adc_signed_overflow() {
    // CLC; LDA #$7F; ADC #$01; JAM
    let mut cpu = setup_cpu(&[0x18, 0xA9, 0x7F, 0x69, 0x01, 0x02]);
    run_to_halt(&mut cpu);

    assert_eq!(cpu.a(), 0x80);
    assert!(cpu.flag_v());
    assert!(!cpu.flag_c());
    assert!(cpu.flag_n());
}

#[test]
fn store_then_load_back_through_memory() {
    // LDA #$FF; STA $10; LDX $10; JAM
    let mut cpu = setup_cpu(&[0xA9, 0xFF, 0x85, 0x10, 0xA6, 0x10, 0x02]);
    run_to_halt(&mut cpu);

    assert_eq!(cpu.x(), 0xFF);
    assert_eq!(cpu.load(0x0010), 0xFF);
    assert!(cpu.flag_n());
}

#[test]
fn indexed_load_pays_the_page_cross() {
    // LDX #$01; LDA $00FF,X; JAM
    let mut cpu = setup_cpu(&[0xA2, 0x01, 0xBD, 0xFF, 0x00, 0x02]);
    cpu.store(0x0100, 0xAB);

    assert_eq!(cpu.step(), 2); // LDX
    assert_eq!(cpu.step(), 5); // LDA with the extra crossing cycle
    assert_eq!(cpu.a(), 0xAB);
}

#[test]
fn push_pull_round_trip_preserves_a_and_p() {
    // LDA #$C7; PHA; PHP; LDA #$00; PLP; PLA; JAM
    let mut cpu = setup_cpu(&[0xA9, 0xC7, 0x48, 0x08, 0xA9, 0x00, 0x28, 0x68, 0x02]);

    // Capture P as PHP saw it (N set by the load).
    for _ in 0..3 {
        cpu.step();
    }
    let status_at_php = cpu.status();

    run_to_halt(&mut cpu);

    assert_eq!(cpu.a(), 0xC7);
    assert_eq!(cpu.sp(), 0xFD);
    assert_eq!(
        cpu.status() & !(status::B | status::U),
        status_at_php & !(status::B | status::U)
    );
}
