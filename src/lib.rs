//! # LS-8 CPU Emulator Core
//!
//! An emulator library for the LS-8, a small 8-bit virtual processor. It
//! fetches instructions from an addressable memory, decodes them through a
//! dispatch table, executes them against an 8-register file, and advances
//! a program counter until halted.
//!
//! ## Quick Start
//!
//! ```rust
//! use ls8::{loader, Cpu, Ram};
//!
//! // Create the full 256-byte address space
//! let mut memory = Ram::default();
//!
//! // Load a program: LDI R0,8; PRN R0; HLT
//! let program = "\
//! 10011001
//! 00000000
//! 00001000
//! 01000011
//! 00000000
//! 00000001
//! ";
//! loader::load(&mut memory, program).unwrap();
//!
//! // Capture PRN output instead of writing to stdout
//! let mut cpu = Cpu::with_output(memory, Vec::new());
//! cpu.run().unwrap();
//!
//! assert!(cpu.halted());
//! assert_eq!(cpu.output(), b"8\n");
//! ```
//!
//! ## Architecture
//!
//! - **Modularity**: CPU state is separated from the memory implementation
//!   via the `MemoryBus` trait, and from the PRN output channel via
//!   `std::io::Write`
//! - **Table-driven dispatch**: one opcode -> handler table built at
//!   construction replaces a monolithic conditional in the execution loop
//! - **Self-describing operand counts**: bits 6-7 of every opcode encode
//!   its operand count, so the loop carries no per-instruction size data
//! - **Reported faults**: unknown opcodes, zero divisors, stack and memory
//!   bounds violations halt the run through `Result` values, never panics
//!
//! ## Modules
//!
//! - `cpu` - CPU state, dispatch, and the fetch-decode-execute loop
//! - `alu` - arithmetic/logic unit
//! - `memory` - MemoryBus trait and the Ram implementation
//! - `opcodes` - opcode constants and decode helpers
//! - `loader` - object-file (binary text) program loading
//! - `clock` - explicit owned periodic-step driver
//! - `errors` - error taxonomy

pub mod alu;
pub mod clock;
pub mod cpu;
pub mod errors;
pub mod loader;
pub mod memory;
pub mod opcodes;

// Internal instruction implementations (not part of the public API)
mod instructions;

// Re-export public API
pub use alu::AluOp;
pub use clock::Clock;
pub use cpu::{Cpu, FLAG_EQUAL, FLAG_GREATER, FLAG_LESS, SP, STACK_INIT};
pub use errors::{ExecutionError, LoadError, MemoryError};
pub use memory::{MemoryBus, Ram};
