//! Power-loss simulation
//!
//! Wraps a medium and lets only a fixed number of physical writes through.
//! Every later write fails with `EeError::PowerLoss` and leaves the cell
//! untouched, which models the supply dying between two byte writes.

use crate::error::{EeError, Result};
use crate::layout::Address;

use super::Medium;

/// Medium wrapper that cuts power after `budget` physical writes
#[derive(Debug, Clone)]
pub struct PowerCut<M> {
    inner: M,
    /// Writes allowed before the cut
    budget: u64,
    /// Writes that reached the inner medium
    written: u64,
}

impl<M: Medium> PowerCut<M> {
    /// Allow `budget` writes through to `inner`
    pub fn new(inner: M, budget: u64) -> Self {
        Self {
            inner,
            budget,
            written: 0,
        }
    }

    /// Whether the budget has been used up
    pub fn is_cut(&self) -> bool {
        self.written >= self.budget
    }

    /// Writes that reached the inner medium
    pub fn writes(&self) -> u64 {
        self.written
    }

    /// Restore power with a fresh budget
    pub fn restore(&mut self, budget: u64) {
        self.budget = budget;
        self.written = 0;
    }

    /// Take the inner medium back (the "reboot")
    pub fn into_inner(self) -> M {
        self.inner
    }

    pub fn inner(&self) -> &M {
        &self.inner
    }
}

impl<M: Medium> Medium for PowerCut<M> {
    fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    fn read_byte(&self, addr: Address) -> Result<u8> {
        self.inner.read_byte(addr)
    }

    fn write_byte(&mut self, addr: Address, value: u8) -> Result<()> {
        if self.is_cut() {
            return Err(EeError::PowerLoss {
                writes: self.written,
            });
        }
        self.inner.write_byte(addr, value)?;
        self.written += 1;
        Ok(())
    }

    fn sync(&mut self) -> Result<()> {
        self.inner.sync()
    }
}
