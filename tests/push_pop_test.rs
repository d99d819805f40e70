//! Tests for the PUSH and POP instructions and the stack protocol.
//!
//! Covers:
//! - SP starts at the empty-stack position and moves by one per operation
//! - PUSH decrements before writing; POP reads before incrementing
//! - PUSH;POP round trip restores register and SP
//! - Underflow and overflow are fatal, reported conditions

use ls8::opcodes::{HLT, LDI, POP, PUSH};
use ls8::{Cpu, ExecutionError, MemoryBus, Ram, STACK_INIT};

fn setup_cpu(program: &[u8]) -> Cpu<Ram, Vec<u8>> {
    let mut memory = Ram::default();
    for (addr, byte) in program.iter().enumerate() {
        memory.write(addr as u8, *byte).unwrap();
    }
    Cpu::with_output(memory, Vec::new())
}

#[test]
fn test_sp_initial_value() {
    let cpu = setup_cpu(&[HLT]);
    assert_eq!(cpu.sp(), STACK_INIT);
    assert_eq!(STACK_INIT, 0xF4);
}

#[test]
fn test_push_writes_below_sp() {
    let mut cpu = setup_cpu(&[LDI, 0x00, 0x42, PUSH, 0x00, HLT]);
    cpu.run().unwrap();

    assert_eq!(cpu.sp(), STACK_INIT - 1);
    assert_eq!(cpu.memory().read(STACK_INIT - 1).unwrap(), 0x42);
}

#[test]
fn test_push_pop_round_trip() {
    // LDI R0,5; PUSH R0; LDI R0,0; POP R0
    let mut cpu = setup_cpu(&[
        LDI, 0x00, 0x05, PUSH, 0x00, LDI, 0x00, 0x00, POP, 0x00, HLT,
    ]);
    cpu.run().unwrap();

    assert_eq!(cpu.register(0), 5);
    assert_eq!(cpu.sp(), STACK_INIT);
}

#[test]
fn test_pop_into_different_register() {
    let mut cpu = setup_cpu(&[LDI, 0x02, 0x63, PUSH, 0x02, POP, 0x05, HLT]);
    cpu.run().unwrap();

    assert_eq!(cpu.register(5), 0x63);
    assert_eq!(cpu.sp(), STACK_INIT);
}

#[test]
fn test_stack_is_last_in_first_out() {
    let mut cpu = setup_cpu(&[
        LDI, 0x00, 1, PUSH, 0x00, LDI, 0x00, 2, PUSH, 0x00, POP, 0x03, POP, 0x04, HLT,
    ]);
    cpu.run().unwrap();

    assert_eq!(cpu.register(3), 2);
    assert_eq!(cpu.register(4), 1);
}

#[test]
fn test_pop_empty_stack_underflows() {
    let mut cpu = setup_cpu(&[POP, 0x00, HLT]);

    let err = cpu.run().unwrap_err();
    assert!(matches!(
        err,
        ExecutionError::StackUnderflow { sp: STACK_INIT }
    ));
    assert!(cpu.halted());
    assert_eq!(cpu.sp(), STACK_INIT);
}

#[test]
fn test_push_at_address_zero_overflows() {
    let mut cpu = setup_cpu(&[PUSH, 0x00, HLT]);
    cpu.set_register(7, 0); // force SP to the bottom of memory

    let err = cpu.run().unwrap_err();
    assert!(matches!(err, ExecutionError::StackOverflow { sp: 0 }));
    assert!(cpu.halted());
    assert_eq!(cpu.sp(), 0);
}
