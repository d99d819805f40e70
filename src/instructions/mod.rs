//! # LS-8 Instruction Implementations
//!
//! This module contains the implementations of all LS-8 instructions,
//! organized by category, plus the dispatch-table builder that wires them
//! to their opcode bytes.
//!
//! Each instruction is a standalone handler function that takes a mutable
//! reference to the CPU and the two unconditionally fetched operand bytes.
//! Handlers for instructions with fewer declared operands ignore the
//! extras. A handler returns `Some(pc)` to transfer control explicitly
//! (CALL/RET); `None` lets the execution loop apply the default
//! `operand_count + 1` advance.
//!
//! ## Categories
//!
//! - **alu_ops**: arithmetic and logic (ADD, SUB, MUL, DIV, MOD, AND, OR,
//!   XOR, NOT, INC, DEC, CMP)
//! - **load_store**: register load and output (LDI, PRN)
//! - **stack**: stack operations (PUSH, POP)
//! - **control**: control flow (CALL, RET, HLT, NOP)

use std::io::Write;

use crate::cpu::Handler;
use crate::memory::MemoryBus;
use crate::opcodes;

pub(crate) mod alu_ops;
pub(crate) mod control;
pub(crate) mod load_store;
pub(crate) mod stack;

/// Builds the opcode -> handler dispatch table.
///
/// Called once from `Cpu::with_output`; the table is immutable afterward.
/// Adding an instruction means adding one entry here plus one handler in
/// the matching category module. Bytes without an entry stay `None` and
/// surface as `ExecutionError::UnknownOpcode` when fetched.
pub(crate) fn dispatch_table<M: MemoryBus, W: Write>() -> [Option<Handler<M, W>>; 256] {
    let mut table: [Option<Handler<M, W>>; 256] = [None; 256];

    table[opcodes::NOP as usize] = Some(control::execute_nop);
    table[opcodes::HLT as usize] = Some(control::execute_hlt);
    table[opcodes::RET as usize] = Some(control::execute_ret);
    table[opcodes::CALL as usize] = Some(control::execute_call);

    table[opcodes::LDI as usize] = Some(load_store::execute_ldi);
    table[opcodes::PRN as usize] = Some(load_store::execute_prn);

    table[opcodes::PUSH as usize] = Some(stack::execute_push);
    table[opcodes::POP as usize] = Some(stack::execute_pop);

    table[opcodes::ADD as usize] = Some(alu_ops::execute_add);
    table[opcodes::SUB as usize] = Some(alu_ops::execute_sub);
    table[opcodes::MUL as usize] = Some(alu_ops::execute_mul);
    table[opcodes::DIV as usize] = Some(alu_ops::execute_div);
    table[opcodes::MOD as usize] = Some(alu_ops::execute_mod);
    table[opcodes::AND as usize] = Some(alu_ops::execute_and);
    table[opcodes::OR as usize] = Some(alu_ops::execute_or);
    table[opcodes::XOR as usize] = Some(alu_ops::execute_xor);
    table[opcodes::NOT as usize] = Some(alu_ops::execute_not);
    table[opcodes::INC as usize] = Some(alu_ops::execute_inc);
    table[opcodes::DEC as usize] = Some(alu_ops::execute_dec);
    table[opcodes::CMP as usize] = Some(alu_ops::execute_cmp);

    table
}
