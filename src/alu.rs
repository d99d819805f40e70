//! # ALU (Arithmetic Logic Unit)
//!
//! One entry point, [`Cpu::alu`], parameterized by a symbolic [`AluOp`]
//! and one or two register indices. All arithmetic wraps modulo 256: the
//! registers are genuinely 8-bit here, where the reference material left
//! overflow behavior unmasked.
//!
//! Division and modulo by zero are the one explicit failure rule in the
//! arithmetic core: the operation does not execute, the dividend register
//! is untouched, and the run halts with a reported error.

use std::io::Write;

use crate::cpu::{Cpu, FLAG_EQUAL};
use crate::errors::ExecutionError;
use crate::memory::MemoryBus;

/// Symbolic name of an ALU operation.
///
/// Binary operations combine `R[a]` and `R[b]` into `R[a]`. `Not`, `Inc`,
/// and `Dec` are unary and ignore the second register. `Cmp` writes only
/// the flags register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AluOp {
    /// `R[a] := R[a] + R[b]` (wrapping).
    Add,
    /// `R[a] := R[a] - R[b]` (wrapping).
    Sub,
    /// `R[a] := R[a] * R[b]` (wrapping).
    Mul,
    /// `R[a] := R[a] / R[b]`; fails if `R[b]` is zero.
    Div,
    /// `R[a] := R[a] % R[b]`; fails if `R[b]` is zero.
    Mod,
    /// `R[a] := R[a] & R[b]`.
    And,
    /// `R[a] := R[a] | R[b]`.
    Or,
    /// `R[a] := R[a] ^ R[b]`.
    Xor,
    /// `R[a] := !R[a]` (unary).
    Not,
    /// `R[a] := R[a] + 1` (unary, wrapping).
    Inc,
    /// `R[a] := R[a] - 1` (unary, wrapping).
    Dec,
    /// Sets the Equal flag iff `R[a] == R[b]`; clears it otherwise.
    /// Registers are untouched.
    Cmp,
}

impl<M: MemoryBus, W: Write> Cpu<M, W> {
    /// Executes one ALU operation against the register file.
    ///
    /// Register indices are masked to 0-7, so a malformed operand byte
    /// selects a real register rather than faulting.
    ///
    /// # Errors
    ///
    /// `Div` and `Mod` return [`ExecutionError::DivisionByZero`] when the
    /// divisor register holds zero, without mutating the dividend.
    pub fn alu(
        &mut self,
        op: AluOp,
        reg_a: u8,
        reg_b: u8,
    ) -> Result<(), ExecutionError> {
        let ia = (reg_a & 0x07) as usize;
        let ib = (reg_b & 0x07) as usize;
        let a = self.registers[ia];
        let b = self.registers[ib];

        let result = match op {
            AluOp::Add => a.wrapping_add(b),
            AluOp::Sub => a.wrapping_sub(b),
            AluOp::Mul => a.wrapping_mul(b),
            AluOp::Div | AluOp::Mod => {
                if b == 0 {
                    return Err(ExecutionError::DivisionByZero {
                        divisor: reg_b & 0x07,
                    });
                }
                if op == AluOp::Div {
                    a / b
                } else {
                    a % b
                }
            }
            AluOp::And => a & b,
            AluOp::Or => a | b,
            AluOp::Xor => a ^ b,
            AluOp::Not => !a,
            AluOp::Inc => a.wrapping_add(1),
            AluOp::Dec => a.wrapping_sub(1),
            AluOp::Cmp => {
                // CMP writes only the Equal bit. Greater/Less stay an
                // extension point until conditional jumps exist.
                if a == b {
                    self.fl |= FLAG_EQUAL;
                } else {
                    self.fl &= !FLAG_EQUAL;
                }
                return Ok(());
            }
        };

        self.registers[ia] = result;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::Ram;

    fn setup_cpu() -> Cpu<Ram> {
        Cpu::new(Ram::default())
    }

    #[test]
    fn test_add_wraps() {
        let mut cpu = setup_cpu();
        cpu.set_register(0, 200);
        cpu.set_register(1, 100);

        cpu.alu(AluOp::Add, 0, 1).unwrap();
        assert_eq!(cpu.register(0), 44); // 300 mod 256
        assert_eq!(cpu.register(1), 100);
    }

    #[test]
    fn test_div_by_zero_leaves_dividend() {
        let mut cpu = setup_cpu();
        cpu.set_register(2, 42);
        cpu.set_register(3, 0);

        let err = cpu.alu(AluOp::Div, 2, 3).unwrap_err();
        assert!(matches!(err, ExecutionError::DivisionByZero { divisor: 3 }));
        assert_eq!(cpu.register(2), 42);
    }

    #[test]
    fn test_cmp_touches_only_equal_bit() {
        let mut cpu = setup_cpu();
        cpu.set_register(0, 7);
        cpu.set_register(1, 7);

        cpu.alu(AluOp::Cmp, 0, 1).unwrap();
        assert_eq!(cpu.fl(), FLAG_EQUAL);

        cpu.set_register(1, 8);
        cpu.alu(AluOp::Cmp, 0, 1).unwrap();
        assert_eq!(cpu.fl(), 0);
    }

    #[test]
    fn test_unary_ops_ignore_second_register() {
        let mut cpu = setup_cpu();
        cpu.set_register(0, 0b1010_1010);
        cpu.set_register(5, 99);

        cpu.alu(AluOp::Not, 0, 5).unwrap();
        assert_eq!(cpu.register(0), 0b0101_0101);
        assert_eq!(cpu.register(5), 99);
    }
}
