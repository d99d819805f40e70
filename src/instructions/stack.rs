//! # Stack Instructions
//!
//! - PUSH: decrement SP, then write the register's value at the new SP
//! - POP: read at SP into the register, then increment SP
//!
//! The stack lives in main memory and grows downward from the SP's
//! initial value; SP always addresses the next free slot. The underlying
//! primitives (`Cpu::push` / `Cpu::pop`) enforce the overflow and
//! underflow bounds and are shared with CALL/RET.

use std::io::Write;

use crate::cpu::Cpu;
use crate::errors::ExecutionError;
use crate::memory::MemoryBus;

/// PUSH: pushes `R[reg]` onto the stack.
pub(crate) fn execute_push<M: MemoryBus, W: Write>(
    cpu: &mut Cpu<M, W>,
    reg: u8,
    _operand_b: u8,
) -> Result<Option<u8>, ExecutionError> {
    let value = cpu.registers[(reg & 0x07) as usize];
    cpu.push(value)?;
    Ok(None)
}

/// POP: pops the stack top into `R[reg]`.
pub(crate) fn execute_pop<M: MemoryBus, W: Write>(
    cpu: &mut Cpu<M, W>,
    reg: u8,
    _operand_b: u8,
) -> Result<Option<u8>, ExecutionError> {
    let value = cpu.pop()?;
    cpu.registers[(reg & 0x07) as usize] = value;
    Ok(None)
}
