//! # Load and Output Instructions
//!
//! - LDI: load an immediate value into a register
//! - PRN: print a register's value as a decimal line
//!
//! PRN is the only user-visible output channel of the machine. It writes
//! through the CPU's output sink so tests and embeddings can capture it.

use std::io::Write;

use crate::cpu::Cpu;
use crate::errors::ExecutionError;
use crate::memory::MemoryBus;

/// LDI: `R[reg] := immediate`.
pub(crate) fn execute_ldi<M: MemoryBus, W: Write>(
    cpu: &mut Cpu<M, W>,
    reg: u8,
    immediate: u8,
) -> Result<Option<u8>, ExecutionError> {
    cpu.registers[(reg & 0x07) as usize] = immediate;
    Ok(None)
}

/// PRN: writes `R[reg]` as a decimal integer followed by a newline to the
/// output sink. The second operand byte is ignored.
pub(crate) fn execute_prn<M: MemoryBus, W: Write>(
    cpu: &mut Cpu<M, W>,
    reg: u8,
    _operand_b: u8,
) -> Result<Option<u8>, ExecutionError> {
    let value = cpu.registers[(reg & 0x07) as usize];
    writeln!(cpu.output, "{value}")?;
    Ok(None)
}
