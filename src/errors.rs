//! # Error Types
//!
//! All faults in an emulated program are reported through `Result` values
//! rather than panics. A fault is fatal for the current run — the CPU marks
//! itself halted before the error propagates — but never crashes the host.
//!
//! Three error enums cover the three phases of use:
//! - [`MemoryError`] - memory construction and bus access faults
//! - [`LoadError`] - object-file parsing faults, reported at load time
//! - [`ExecutionError`] - faults raised while stepping the CPU

use std::io;

use thiserror::Error;

/// Errors raised by the memory bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MemoryError {
    /// Access to an address outside the memory's configured size.
    #[error("address 0x{addr:02X} is out of bounds for a {size}-byte memory")]
    OutOfBounds {
        /// The offending address.
        addr: u8,
        /// The memory size in bytes.
        size: usize,
    },

    /// Requested memory size is not a power of two in `1..=256`.
    #[error("memory size {0} is not a power of two in 1..=256")]
    InvalidSize(usize),
}

/// Errors raised while executing instructions.
///
/// Any of these terminates the current run: the CPU sets its halted flag
/// before returning the error, so no further cycles execute.
#[derive(Debug, Error)]
pub enum ExecutionError {
    /// Fetched an opcode byte with no dispatch-table entry.
    ///
    /// Contains the offending opcode value.
    #[error("unknown opcode 0x{0:02X}")]
    UnknownOpcode(u8),

    /// DIV or MOD with a zero divisor. The dividend register is left
    /// untouched.
    #[error("division by zero: register R{divisor} holds 0")]
    DivisionByZero {
        /// Index of the divisor register.
        divisor: u8,
    },

    /// PUSH (or CALL) would move the stack pointer below address 0.
    #[error("stack overflow: cannot push with SP at 0x{sp:02X}")]
    StackOverflow {
        /// Stack pointer value at the time of the fault.
        sp: u8,
    },

    /// POP (or RET) on an empty stack.
    #[error("stack underflow: cannot pop with SP at 0x{sp:02X}")]
    StackUnderflow {
        /// Stack pointer value at the time of the fault.
        sp: u8,
    },

    /// A memory bus access failed.
    #[error(transparent)]
    Memory(#[from] MemoryError),

    /// Writing PRN output to the sink failed.
    #[error("failed to write PRN output")]
    Output(#[from] io::Error),
}

/// Errors raised while parsing or loading an LS-8 object file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// A non-comment line is not a valid 8-bit binary value.
    #[error("line {line}: `{text}` is not an 8-bit binary value")]
    InvalidByte {
        /// 1-based source line number.
        line: usize,
        /// The offending text, with comments and whitespace stripped.
        text: String,
    },

    /// The program does not fit in the 256-byte address space.
    #[error("program is {len} bytes but the address space holds only 256")]
    TooLarge {
        /// Parsed program length in bytes.
        len: usize,
    },

    /// Writing a program byte into memory failed.
    #[error(transparent)]
    Memory(#[from] MemoryError),
}
