//! # Control Flow Instructions
//!
//! - CALL: push the return address, jump to the address held in a register
//! - RET: pop the return address and resume there
//! - HLT: stop the run normally
//! - NOP: no effect
//!
//! CALL and RET are the only instructions that bypass the execution
//! loop's default PC advance; they return their target address explicitly.
//! Every CALL must be matched by exactly one RET for the stack to return
//! to a consistent depth.

use std::io::Write;

use crate::cpu::Cpu;
use crate::errors::ExecutionError;
use crate::memory::MemoryBus;

/// CALL: pushes the address of the next instruction (PC + 2, skipping the
/// two-byte CALL), then transfers control to the address in `R[reg]`.
pub(crate) fn execute_call<M: MemoryBus, W: Write>(
    cpu: &mut Cpu<M, W>,
    reg: u8,
    _operand_b: u8,
) -> Result<Option<u8>, ExecutionError> {
    let return_address = cpu.pc.wrapping_add(2);
    cpu.push(return_address)?;
    Ok(Some(cpu.registers[(reg & 0x07) as usize]))
}

/// RET: pops the return address pushed by the matching CALL and resumes
/// there.
pub(crate) fn execute_ret<M: MemoryBus, W: Write>(
    cpu: &mut Cpu<M, W>,
    _operand_a: u8,
    _operand_b: u8,
) -> Result<Option<u8>, ExecutionError> {
    let return_address = cpu.pop()?;
    Ok(Some(return_address))
}

/// HLT: marks the CPU halted; no further cycles execute.
pub(crate) fn execute_hlt<M: MemoryBus, W: Write>(
    cpu: &mut Cpu<M, W>,
    _operand_a: u8,
    _operand_b: u8,
) -> Result<Option<u8>, ExecutionError> {
    cpu.halted = true;
    Ok(None)
}

/// NOP: no effect.
pub(crate) fn execute_nop<M: MemoryBus, W: Write>(
    _cpu: &mut Cpu<M, W>,
    _operand_a: u8,
    _operand_b: u8,
) -> Result<Option<u8>, ExecutionError> {
    Ok(None)
}
