//! # Memory Bus Abstraction
//!
//! This module provides the `MemoryBus` trait that decouples the CPU from
//! specific memory implementations. This enables flexible memory
//! configurations including:
//!
//! - Flat RAM sized to the full 256-byte address space (`Ram`)
//! - Smaller power-of-two memories for constrained programs
//! - Debugging wrappers with logging
//!
//! ## Design Principles
//!
//! Unlike real 8-bit hardware, this bus reports faults: an access outside
//! the configured size yields `MemoryError::OutOfBounds` instead of
//! undefined behavior, and the CPU turns that into a fatal, reported halt.

use crate::errors::MemoryError;

/// Memory bus trait for CPU to read/write bytes.
///
/// Implementations of this trait provide the memory backend for the CPU.
/// The CPU performs all fetches, operand reads, and stack traffic through
/// this abstraction.
///
/// # Design
///
/// - `read(&self)`: immutable reference allows shared reads
/// - `write(&mut self)`: mutable reference makes side effects explicit
/// - Both return `Result` so out-of-range access is a reported fault,
///   not a panic
///
/// # Examples
///
/// ```
/// use ls8::{MemoryBus, Ram};
///
/// let mut mem = Ram::default();
///
/// // Write a value
/// mem.write(0x12, 0x42).unwrap();
///
/// // Read it back
/// assert_eq!(mem.read(0x12).unwrap(), 0x42);
/// ```
pub trait MemoryBus {
    /// Reads the byte at the specified address.
    ///
    /// # Errors
    ///
    /// Returns `MemoryError::OutOfBounds` if `addr` is outside the
    /// memory's configured size.
    fn read(&self, addr: u8) -> Result<u8, MemoryError>;

    /// Writes a byte to the specified address.
    ///
    /// # Errors
    ///
    /// Returns `MemoryError::OutOfBounds` if `addr` is outside the
    /// memory's configured size.
    fn write(&mut self, addr: u8, value: u8) -> Result<(), MemoryError>;
}

/// Flat byte-addressable RAM.
///
/// All addresses from 0 up to the configured size map to a single
/// contiguous array initialized to zero. The size is fixed at construction
/// and must be a power of two no larger than the 256-byte address space.
///
/// # Examples
///
/// ```
/// use ls8::{MemoryBus, Ram};
///
/// // Full 256-byte address space
/// let mem = Ram::default();
/// assert_eq!(mem.size(), 256);
///
/// // A 16-byte memory for a tiny program
/// let small = Ram::new(16).unwrap();
/// assert_eq!(small.size(), 16);
///
/// // Sizes must be powers of two
/// assert!(Ram::new(100).is_err());
/// ```
pub struct Ram {
    /// Contiguous backing store, zero-initialized.
    data: Box<[u8]>,
}

impl Ram {
    /// Creates a zeroed RAM of the given size.
    ///
    /// # Errors
    ///
    /// Returns `MemoryError::InvalidSize` unless `size` is a power of two
    /// in `1..=256`.
    pub fn new(size: usize) -> Result<Self, MemoryError> {
        if size == 0 || size > 256 || !size.is_power_of_two() {
            return Err(MemoryError::InvalidSize(size));
        }
        Ok(Self {
            data: vec![0; size].into_boxed_slice(),
        })
    }

    /// Returns the configured size in bytes.
    pub fn size(&self) -> usize {
        self.data.len()
    }
}

impl Default for Ram {
    /// A RAM covering the full 256-byte address space.
    fn default() -> Self {
        Self {
            data: vec![0; 256].into_boxed_slice(),
        }
    }
}

impl MemoryBus for Ram {
    fn read(&self, addr: u8) -> Result<u8, MemoryError> {
        self.data
            .get(addr as usize)
            .copied()
            .ok_or(MemoryError::OutOfBounds {
                addr,
                size: self.data.len(),
            })
    }

    fn write(&mut self, addr: u8, value: u8) -> Result<(), MemoryError> {
        let size = self.data.len();
        match self.data.get_mut(addr as usize) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(MemoryError::OutOfBounds { addr, size }),
        }
    }
}
