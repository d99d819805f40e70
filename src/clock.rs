//! # Periodic Execution Clock
//!
//! An explicit, owned driver that steps a CPU on a fixed interval to
//! simulate continuous execution. The clock owns nothing global: whoever
//! drives execution (a test harness, a CLI, an embedding application)
//! constructs one, runs it, and drops it.
//!
//! The step itself never yields or blocks mid-instruction; the clock only
//! sleeps between cycles. An interval of zero makes the clock a plain
//! run-to-halt loop.

use std::io::Write;
use std::thread;
use std::time::Duration;

use crate::cpu::Cpu;
use crate::errors::ExecutionError;
use crate::memory::MemoryBus;

/// A fixed-interval instruction clock.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use ls8::{Clock, Cpu, MemoryBus, Ram};
///
/// let mut memory = Ram::default();
/// memory.write(0x00, 0x01).unwrap(); // HLT
///
/// let mut cpu = Cpu::new(memory);
/// let clock = Clock::new(Duration::ZERO);
/// clock.run(&mut cpu).unwrap();
/// assert!(cpu.halted());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Clock {
    interval: Duration,
}

impl Clock {
    /// Creates a clock that executes one instruction per `interval`.
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    /// Returns the configured tick interval.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Steps the CPU once per tick until it halts.
    ///
    /// # Errors
    ///
    /// Propagates the [`ExecutionError`] that stopped the run, if any.
    pub fn run<M: MemoryBus, W: Write>(
        &self,
        cpu: &mut Cpu<M, W>,
    ) -> Result<(), ExecutionError> {
        while !cpu.halted() {
            cpu.step()?;
            // No tick after the final instruction
            if !cpu.halted() && !self.interval.is_zero() {
                thread::sleep(self.interval);
            }
        }
        Ok(())
    }
}
