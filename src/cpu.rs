//! # CPU State and Execution
//!
//! This module contains the Cpu struct representing the LS-8 processor
//! state and the fetch-decode-execute loop.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Register file**: 8 general-purpose 8-bit registers (R7 is the SP)
//! - **Program counter** (PC): address of the next instruction
//! - **Instruction register** (IR): the most recently fetched opcode
//! - **Flags register** (FL): Equal / Greater-Than / Less-Than bits
//! - **Dispatch table**: opcode -> handler, built once at construction
//!
//! ## Execution Model
//!
//! The CPU executes instructions via:
//! - `step()`: execute one instruction cycle
//! - `run()`: step until halted
//! - `run_for_steps()`: step until a budget is exhausted or halted
//!
//! Any execution fault (unknown opcode, division by zero, stack or memory
//! fault) marks the CPU halted before the error is returned, so a failed
//! run can never limp onward.

use std::io::{self, Write};

use crate::errors::ExecutionError;
use crate::instructions;
use crate::memory::MemoryBus;
use crate::opcodes::operand_count;

/// Index of the register reserved as the Stack Pointer.
pub const SP: usize = 7;

/// Initial Stack Pointer value: the empty-stack position. The stack grows
/// downward from here, so SP always addresses the next free slot.
pub const STACK_INIT: u8 = 0xF4;

/// Equal flag bit in the FL register.
pub const FLAG_EQUAL: u8 = 0b0000_0001;

/// Greater-Than flag bit in the FL register. Defined as an extension
/// point; no instruction in this set writes or reads it.
pub const FLAG_GREATER: u8 = 0b0000_0010;

/// Less-Than flag bit in the FL register. Defined as an extension point;
/// no instruction in this set writes or reads it.
pub const FLAG_LESS: u8 = 0b0000_0100;

/// An instruction handler: receives the CPU and the two unconditionally
/// fetched operand bytes, and may return an explicit next-PC value to
/// bypass the default advance (used by CALL and RET).
pub(crate) type Handler<M, W> =
    fn(&mut Cpu<M, W>, u8, u8) -> Result<Option<u8>, ExecutionError>;

/// LS-8 CPU state and execution context.
///
/// The Cpu struct contains all processor state including the register
/// file, flags, program counter, and instruction register. It is generic
/// over the memory implementation via the [`MemoryBus`] trait and over
/// the PRN output sink via [`std::io::Write`].
///
/// # Type Parameters
///
/// * `M` - memory bus implementation
/// * `W` - output sink for PRN (defaults to stdout)
///
/// # Examples
///
/// ```
/// use ls8::{Cpu, MemoryBus, Ram, STACK_INIT};
///
/// let mut memory = Ram::default();
/// memory.write(0x00, 0x01).unwrap(); // HLT
///
/// let mut cpu = Cpu::new(memory);
/// assert_eq!(cpu.pc(), 0x00);
/// assert_eq!(cpu.sp(), STACK_INIT);
///
/// cpu.run().unwrap();
/// assert!(cpu.halted());
/// ```
pub struct Cpu<M: MemoryBus, W: Write = io::Stdout> {
    /// General-purpose registers R0-R7. R7 is the Stack Pointer.
    pub(crate) registers: [u8; 8],

    /// Program counter: address of the next instruction to fetch.
    pub(crate) pc: u8,

    /// Instruction register: the opcode fetched this cycle.
    pub(crate) ir: u8,

    /// Flags register (see the `FLAG_*` bit constants).
    pub(crate) fl: u8,

    /// Set by HLT or by any execution fault; once set, `step` is a no-op.
    pub(crate) halted: bool,

    /// Memory bus implementation.
    pub(crate) memory: M,

    /// Line-oriented output sink written by PRN.
    pub(crate) output: W,

    /// Opcode -> handler mapping, built once and immutable thereafter.
    dispatch: [Option<Handler<M, W>>; 256],
}

impl<M: MemoryBus> Cpu<M> {
    /// Creates a new CPU with the given memory bus, writing PRN output to
    /// stdout.
    ///
    /// The CPU is initialized to the LS-8 power-on state: PC at 0, all
    /// registers zeroed except the SP at [`STACK_INIT`], flags cleared.
    pub fn new(memory: M) -> Self {
        Self::with_output(memory, io::stdout())
    }
}

impl<M: MemoryBus, W: Write> Cpu<M, W> {
    /// Creates a new CPU writing PRN output to the given sink.
    ///
    /// Useful for capturing output in tests or routing it in an embedding
    /// application.
    ///
    /// # Examples
    ///
    /// ```
    /// use ls8::{Cpu, MemoryBus, Ram};
    ///
    /// let mut memory = Ram::default();
    /// // LDI R0,72; PRN R0; HLT
    /// for (addr, byte) in [0x99, 0x00, 72, 0x43, 0x00, 0x01].into_iter().enumerate() {
    ///     memory.write(addr as u8, byte).unwrap();
    /// }
    ///
    /// let mut cpu = Cpu::with_output(memory, Vec::new());
    /// cpu.run().unwrap();
    /// assert_eq!(cpu.output(), b"72\n");
    /// ```
    pub fn with_output(memory: M, output: W) -> Self {
        let mut registers = [0u8; 8];
        registers[SP] = STACK_INIT;

        Self {
            registers,
            pc: 0,
            ir: 0,
            fl: 0,
            halted: false,
            memory,
            output,
            dispatch: instructions::dispatch_table(),
        }
    }

    /// Executes one instruction cycle.
    ///
    /// Performs the fetch-decode-execute sequence:
    /// 1. Fetch the opcode at PC into IR
    /// 2. Look up the handler in the dispatch table
    /// 3. Unconditionally fetch the two bytes after the opcode (handlers
    ///    with fewer declared operands ignore the extras)
    /// 4. Invoke the handler
    /// 5. Advance PC - either to the handler's explicit next-PC value
    ///    (CALL/RET) or by `operand_count + 1`
    ///
    /// Stepping a halted CPU is a no-op that returns `Ok(())`.
    ///
    /// # Errors
    ///
    /// Any [`ExecutionError`] halts the run: the CPU marks itself halted
    /// before the error is returned, and further `step` calls do nothing.
    pub fn step(&mut self) -> Result<(), ExecutionError> {
        if self.halted {
            return Ok(());
        }

        let result = self.cycle();
        if result.is_err() {
            self.halted = true;
        }
        result
    }

    fn cycle(&mut self) -> Result<(), ExecutionError> {
        // Fetch
        self.ir = self.memory.read(self.pc)?;

        // Decode
        let handler = self.dispatch[self.ir as usize]
            .ok_or(ExecutionError::UnknownOpcode(self.ir))?;

        // Operand fetch: always two bytes, regardless of declared count
        let operand_a = self.memory.read(self.pc.wrapping_add(1))?;
        let operand_b = self.memory.read(self.pc.wrapping_add(2))?;

        // Execute, then advance PC. Control transfers return their target
        // explicitly; everything else skips the opcode and its operands.
        match handler(self, operand_a, operand_b)? {
            Some(next_pc) => self.pc = next_pc,
            None => self.pc = self.pc.wrapping_add(operand_count(self.ir) + 1),
        }

        Ok(())
    }

    /// Steps the CPU until it halts.
    ///
    /// Returns `Ok(())` on a normal HLT, or the fault that stopped the
    /// run. An emulated infinite loop runs forever; budget-limited
    /// execution is available via [`Cpu::run_for_steps`].
    pub fn run(&mut self) -> Result<(), ExecutionError> {
        while !self.halted {
            self.step()?;
        }
        Ok(())
    }

    /// Steps the CPU until `budget` instructions have executed or it
    /// halts, whichever comes first.
    ///
    /// Returns the number of instructions actually executed.
    ///
    /// # Examples
    ///
    /// ```
    /// use ls8::{Cpu, MemoryBus, Ram};
    ///
    /// let mut memory = Ram::default();
    /// memory.write(0x03, 0x01).unwrap(); // NOP; NOP; NOP; HLT
    ///
    /// let mut cpu = Cpu::new(memory);
    /// assert_eq!(cpu.run_for_steps(2).unwrap(), 2);
    /// assert_eq!(cpu.run_for_steps(10).unwrap(), 2); // NOP then HLT
    /// assert!(cpu.halted());
    /// ```
    pub fn run_for_steps(&mut self, budget: u64) -> Result<u64, ExecutionError> {
        let mut executed = 0;
        while executed < budget && !self.halted {
            self.step()?;
            executed += 1;
        }
        Ok(executed)
    }

    /// Pushes a byte onto the stack: decrement SP, then write at the new
    /// SP. SP is only committed after the write succeeds, so a memory
    /// fault leaves the register file untouched.
    pub(crate) fn push(&mut self, value: u8) -> Result<(), ExecutionError> {
        let sp = self.registers[SP];
        if sp == 0 {
            return Err(ExecutionError::StackOverflow { sp });
        }

        let sp = sp - 1;
        self.memory.write(sp, value)?;
        self.registers[SP] = sp;
        Ok(())
    }

    /// Pops a byte off the stack: read at SP, then increment SP.
    ///
    /// SP at or above [`STACK_INIT`] means the stack is empty.
    pub(crate) fn pop(&mut self) -> Result<u8, ExecutionError> {
        let sp = self.registers[SP];
        if sp >= STACK_INIT {
            return Err(ExecutionError::StackUnderflow { sp });
        }

        let value = self.memory.read(sp)?;
        self.registers[SP] = sp + 1;
        Ok(value)
    }

    // ========== State Accessors ==========

    /// Returns the value of general-purpose register `index` (masked to
    /// 0-7).
    pub fn register(&self, index: u8) -> u8 {
        self.registers[(index & 0x07) as usize]
    }

    /// Sets general-purpose register `index` (masked to 0-7) to `value`.
    pub fn set_register(&mut self, index: u8, value: u8) {
        self.registers[(index & 0x07) as usize] = value;
    }

    /// Returns the program counter.
    pub fn pc(&self) -> u8 {
        self.pc
    }

    /// Sets the program counter.
    pub fn set_pc(&mut self, pc: u8) {
        self.pc = pc;
    }

    /// Returns the stack pointer (register R7).
    pub fn sp(&self) -> u8 {
        self.registers[SP]
    }

    /// Returns the instruction register: the most recently fetched opcode.
    pub fn ir(&self) -> u8 {
        self.ir
    }

    /// Returns the flags register as a packed byte.
    ///
    /// Bit layout:
    /// - Bit 0: Equal
    /// - Bit 1: Greater-Than (extension point, never set)
    /// - Bit 2: Less-Than (extension point, never set)
    pub fn fl(&self) -> u8 {
        self.fl
    }

    /// Returns true if the Equal flag is set.
    pub fn flag_equal(&self) -> bool {
        self.fl & FLAG_EQUAL != 0
    }

    /// Returns true if the CPU has halted (HLT or a fatal fault).
    pub fn halted(&self) -> bool {
        self.halted
    }

    /// Returns a shared reference to the memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Returns a mutable reference to the memory bus.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    /// Returns a shared reference to the PRN output sink.
    pub fn output(&self) -> &W {
        &self.output
    }
}
