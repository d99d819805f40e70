//! Tests for the periodic execution clock.

use std::time::Duration;

use ls8::opcodes::{HLT, LDI, NOP, PRN};
use ls8::{Clock, Cpu, ExecutionError, MemoryBus, Ram};

fn setup_cpu(program: &[u8]) -> Cpu<Ram, Vec<u8>> {
    let mut memory = Ram::default();
    for (addr, byte) in program.iter().enumerate() {
        memory.write(addr as u8, *byte).unwrap();
    }
    Cpu::with_output(memory, Vec::new())
}

#[test]
fn test_clock_runs_to_halt() {
    let mut cpu = setup_cpu(&[LDI, 0x00, 0x07, PRN, 0x00, HLT]);
    let clock = Clock::new(Duration::ZERO);

    clock.run(&mut cpu).unwrap();

    assert!(cpu.halted());
    assert_eq!(cpu.output(), b"7\n");
}

#[test]
fn test_clock_with_nonzero_interval() {
    // A short real interval; the program is three instructions long.
    let mut cpu = setup_cpu(&[NOP, NOP, HLT]);
    let clock = Clock::new(Duration::from_millis(1));
    assert_eq!(clock.interval(), Duration::from_millis(1));

    clock.run(&mut cpu).unwrap();
    assert!(cpu.halted());
}

#[test]
fn test_clock_propagates_faults() {
    let mut cpu = setup_cpu(&[0xFF]);
    let clock = Clock::new(Duration::ZERO);

    let err = clock.run(&mut cpu).unwrap_err();
    assert!(matches!(err, ExecutionError::UnknownOpcode(0xFF)));
    assert!(cpu.halted());
}

#[test]
fn test_clock_on_halted_cpu_returns_immediately() {
    let mut cpu = setup_cpu(&[HLT]);
    let clock = Clock::new(Duration::from_secs(3600));

    // The CPU halts on its first step before any sleep; a second run
    // must return without ticking at all.
    Clock::new(Duration::ZERO).run(&mut cpu).unwrap();
    clock.run(&mut cpu).unwrap();
    assert!(cpu.halted());
}
