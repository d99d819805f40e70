//! # ALU Instruction Handlers
//!
//! Thin per-opcode adapters over [`Cpu::alu`]. Each handler forwards its
//! register-index operands and the matching [`AluOp`]; the ALU owns the
//! actual semantics (wrapping arithmetic, flag writes, the zero-divisor
//! rule). None of these transfer control, so they all return `Ok(None)`
//! and take the default PC advance.

use std::io::Write;

use crate::alu::AluOp;
use crate::cpu::Cpu;
use crate::errors::ExecutionError;
use crate::memory::MemoryBus;

/// ADD: `R[a] := R[a] + R[b]`, wrapping.
pub(crate) fn execute_add<M: MemoryBus, W: Write>(
    cpu: &mut Cpu<M, W>,
    reg_a: u8,
    reg_b: u8,
) -> Result<Option<u8>, ExecutionError> {
    cpu.alu(AluOp::Add, reg_a, reg_b)?;
    Ok(None)
}

/// SUB: `R[a] := R[a] - R[b]`, wrapping.
pub(crate) fn execute_sub<M: MemoryBus, W: Write>(
    cpu: &mut Cpu<M, W>,
    reg_a: u8,
    reg_b: u8,
) -> Result<Option<u8>, ExecutionError> {
    cpu.alu(AluOp::Sub, reg_a, reg_b)?;
    Ok(None)
}

/// MUL: `R[a] := R[a] * R[b]`, wrapping.
pub(crate) fn execute_mul<M: MemoryBus, W: Write>(
    cpu: &mut Cpu<M, W>,
    reg_a: u8,
    reg_b: u8,
) -> Result<Option<u8>, ExecutionError> {
    cpu.alu(AluOp::Mul, reg_a, reg_b)?;
    Ok(None)
}

/// DIV: `R[a] := R[a] / R[b]`; a zero divisor halts the run.
pub(crate) fn execute_div<M: MemoryBus, W: Write>(
    cpu: &mut Cpu<M, W>,
    reg_a: u8,
    reg_b: u8,
) -> Result<Option<u8>, ExecutionError> {
    cpu.alu(AluOp::Div, reg_a, reg_b)?;
    Ok(None)
}

/// MOD: `R[a] := R[a] % R[b]`; a zero divisor halts the run.
pub(crate) fn execute_mod<M: MemoryBus, W: Write>(
    cpu: &mut Cpu<M, W>,
    reg_a: u8,
    reg_b: u8,
) -> Result<Option<u8>, ExecutionError> {
    cpu.alu(AluOp::Mod, reg_a, reg_b)?;
    Ok(None)
}

/// AND: `R[a] := R[a] & R[b]`.
pub(crate) fn execute_and<M: MemoryBus, W: Write>(
    cpu: &mut Cpu<M, W>,
    reg_a: u8,
    reg_b: u8,
) -> Result<Option<u8>, ExecutionError> {
    cpu.alu(AluOp::And, reg_a, reg_b)?;
    Ok(None)
}

/// OR: `R[a] := R[a] | R[b]`.
pub(crate) fn execute_or<M: MemoryBus, W: Write>(
    cpu: &mut Cpu<M, W>,
    reg_a: u8,
    reg_b: u8,
) -> Result<Option<u8>, ExecutionError> {
    cpu.alu(AluOp::Or, reg_a, reg_b)?;
    Ok(None)
}

/// XOR: `R[a] := R[a] ^ R[b]`.
pub(crate) fn execute_xor<M: MemoryBus, W: Write>(
    cpu: &mut Cpu<M, W>,
    reg_a: u8,
    reg_b: u8,
) -> Result<Option<u8>, ExecutionError> {
    cpu.alu(AluOp::Xor, reg_a, reg_b)?;
    Ok(None)
}

/// NOT: `R[a] := !R[a]` (unary; the second operand byte is ignored).
pub(crate) fn execute_not<M: MemoryBus, W: Write>(
    cpu: &mut Cpu<M, W>,
    reg_a: u8,
    _operand_b: u8,
) -> Result<Option<u8>, ExecutionError> {
    cpu.alu(AluOp::Not, reg_a, 0)?;
    Ok(None)
}

/// INC: `R[a] := R[a] + 1`, wrapping (unary).
pub(crate) fn execute_inc<M: MemoryBus, W: Write>(
    cpu: &mut Cpu<M, W>,
    reg_a: u8,
    _operand_b: u8,
) -> Result<Option<u8>, ExecutionError> {
    cpu.alu(AluOp::Inc, reg_a, 0)?;
    Ok(None)
}

/// DEC: `R[a] := R[a] - 1`, wrapping (unary).
pub(crate) fn execute_dec<M: MemoryBus, W: Write>(
    cpu: &mut Cpu<M, W>,
    reg_a: u8,
    _operand_b: u8,
) -> Result<Option<u8>, ExecutionError> {
    cpu.alu(AluOp::Dec, reg_a, 0)?;
    Ok(None)
}

/// CMP: sets the Equal flag iff `R[a] == R[b]`; registers untouched.
pub(crate) fn execute_cmp<M: MemoryBus, W: Write>(
    cpu: &mut Cpu<M, W>,
    reg_a: u8,
    reg_b: u8,
) -> Result<Option<u8>, ExecutionError> {
    cpu.alu(AluOp::Cmp, reg_a, reg_b)?;
    Ok(None)
}
