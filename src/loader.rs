//! # Object-File Loader
//!
//! Parses the LS-8 object-file text format and writes the program into
//! memory before execution starts. The format is line-oriented:
//!
//! - one instruction or operand byte per line, written in binary
//!   (typically as eight characters, e.g. `10011001`)
//! - `#` starts a comment, full-line or trailing
//! - blank lines are ignored
//!
//! ```text
//! # print8.ls8: print the number 8
//! 10011001 # LDI R0,8
//! 00000000
//! 00001000
//! 01000011 # PRN R0
//! 00000000
//! 00000001 # HLT
//! ```

use crate::errors::LoadError;
use crate::memory::MemoryBus;

/// Parses object-file text into its raw program bytes.
///
/// # Errors
///
/// Returns [`LoadError::InvalidByte`] naming the offending 1-based line
/// when a non-comment line is not a binary value that fits in a byte, and
/// [`LoadError::TooLarge`] when the program exceeds the 256-byte address
/// space.
///
/// # Examples
///
/// ```
/// use ls8::loader;
///
/// let bytes = loader::parse_program("10011001 # LDI R0,8\n00000000\n00001000\n").unwrap();
/// assert_eq!(bytes, vec![0x99, 0x00, 0x08]);
/// ```
pub fn parse_program(source: &str) -> Result<Vec<u8>, LoadError> {
    let mut bytes = Vec::new();

    for (number, line) in source.lines().enumerate() {
        let text = match line.find('#') {
            Some(comment) => &line[..comment],
            None => line,
        };
        let text = text.trim();
        if text.is_empty() {
            continue;
        }

        let byte = u8::from_str_radix(text, 2).map_err(|_| LoadError::InvalidByte {
            line: number + 1,
            text: text.to_string(),
        })?;
        bytes.push(byte);
    }

    if bytes.len() > 256 {
        return Err(LoadError::TooLarge { len: bytes.len() });
    }

    Ok(bytes)
}

/// Parses object-file text and writes the bytes into memory starting at
/// address 0. Returns the program length in bytes.
///
/// # Errors
///
/// Propagates parse failures, and [`LoadError::Memory`] when the program
/// does not fit in the given memory.
///
/// # Examples
///
/// ```
/// use ls8::{loader, MemoryBus, Ram};
///
/// let mut memory = Ram::default();
/// let len = loader::load(&mut memory, "10011001\n00000000\n00001000\n00000001\n").unwrap();
/// assert_eq!(len, 4);
/// assert_eq!(memory.read(0).unwrap(), 0x99);
/// ```
pub fn load<M: MemoryBus>(memory: &mut M, source: &str) -> Result<usize, LoadError> {
    let bytes = parse_program(source)?;
    for (addr, byte) in bytes.iter().enumerate() {
        memory.write(addr as u8, *byte)?;
    }
    Ok(bytes.len())
}
