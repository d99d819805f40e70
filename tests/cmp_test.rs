//! Tests for the CMP (compare) instruction and the flags register.
//!
//! Covers:
//! - Equal flag set iff the two registers hold equal values
//! - Registers untouched by the comparison
//! - Greater/Less bits never written (extension point)

use ls8::opcodes::{CMP, HLT, LDI};
use ls8::{Cpu, MemoryBus, Ram, FLAG_EQUAL, FLAG_GREATER, FLAG_LESS};

fn setup_cpu(program: &[u8]) -> Cpu<Ram, Vec<u8>> {
    let mut memory = Ram::default();
    for (addr, byte) in program.iter().enumerate() {
        memory.write(addr as u8, *byte).unwrap();
    }
    Cpu::with_output(memory, Vec::new())
}

fn run_cmp(a: u8, b: u8) -> Cpu<Ram, Vec<u8>> {
    let mut cpu = setup_cpu(&[LDI, 0x00, a, LDI, 0x01, b, CMP, 0x00, 0x01, HLT]);
    cpu.run().unwrap();
    cpu
}

#[test]
fn test_cmp_equal_sets_flag() {
    let cpu = run_cmp(7, 7);
    assert!(cpu.flag_equal());
    assert_eq!(cpu.fl(), FLAG_EQUAL);
}

#[test]
fn test_cmp_unequal_clears_flag() {
    let cpu = run_cmp(7, 8);
    assert!(!cpu.flag_equal());
    assert_eq!(cpu.fl(), 0);
}

#[test]
fn test_cmp_zero_values() {
    assert!(run_cmp(0, 0).flag_equal());
    assert!(!run_cmp(0, 255).flag_equal());
}

#[test]
fn test_cmp_overwrites_previous_result() {
    // Equal comparison followed by an unequal one: the flag must clear.
    let mut cpu = setup_cpu(&[
        LDI, 0x00, 5, LDI, 0x01, 5, CMP, 0x00, 0x01, LDI, 0x01, 6, CMP, 0x00, 0x01, HLT,
    ]);
    cpu.run().unwrap();
    assert!(!cpu.flag_equal());
}

#[test]
fn test_cmp_preserves_registers() {
    let cpu = run_cmp(12, 34);
    assert_eq!(cpu.register(0), 12);
    assert_eq!(cpu.register(1), 34);
}

#[test]
fn test_cmp_never_writes_greater_or_less() {
    for (a, b) in [(1u8, 2u8), (2, 1), (3, 3)] {
        let cpu = run_cmp(a, b);
        assert_eq!(cpu.fl() & FLAG_GREATER, 0, "CMP {a},{b}");
        assert_eq!(cpu.fl() & FLAG_LESS, 0, "CMP {a},{b}");
    }
}
