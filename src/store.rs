//! Byte Store
//!
//! Single-byte access to a medium with change suppression: a write that would
//! store the value a cell already holds is skipped, so it costs a read instead
//! of a write cycle.
//!
//! ## Ownership
//! One `ByteStore` owns the medium for the life of the process and is passed
//! by `&mut` to whatever needs persistence. All mutation goes through it, which
//! makes it the single serialization point for the address space.

use crate::config::Config;
use crate::error::{EeError, Result};
use crate::layout::Address;
use crate::medium::{FileMedium, Medium};

/// Write accounting for a `ByteStore`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IoStats {
    /// Writes that reached the medium
    pub physical_writes: u64,
    /// Writes skipped because the cell already held the value
    pub suppressed_writes: u64,
}

/// Change-suppressing byte store over a medium
pub struct ByteStore<M: Medium> {
    /// The medium this store owns
    medium: M,
    /// Physical/suppressed write counters
    stats: IoStats,
}

impl ByteStore<FileMedium> {
    /// Open a file-backed store described by `config`
    pub fn open(config: &Config) -> Result<Self> {
        Ok(Self::new(FileMedium::open(config)?))
    }
}

impl<M: Medium> ByteStore<M> {
    /// Take ownership of a medium
    pub fn new(medium: M) -> Self {
        Self {
            medium,
            stats: IoStats::default(),
        }
    }

    /// Read the byte at `addr`
    pub fn read(&self, addr: Address) -> Result<u8> {
        self.check_range(addr, 1)?;
        self.medium.read_byte(addr)
    }

    /// Write `value` at `addr` unless the cell already holds it
    ///
    /// Returns `true` if a physical write was issued.
    pub fn write(&mut self, addr: Address, value: u8) -> Result<bool> {
        if self.read(addr)? == value {
            self.stats.suppressed_writes += 1;
            tracing::trace!(addr, value, "Suppressed unchanged byte write");
            return Ok(false);
        }

        self.force_write(addr, value)?;
        Ok(true)
    }

    /// Write `value` at `addr` without comparing first
    pub fn force_write(&mut self, addr: Address, value: u8) -> Result<()> {
        self.check_range(addr, 1)?;
        self.medium.write_byte(addr, value)?;
        self.stats.physical_writes += 1;
        tracing::trace!(addr, value, "Wrote byte");
        Ok(())
    }

    /// Flush the medium
    pub fn sync(&mut self) -> Result<()> {
        self.medium.sync()
    }

    /// Fail unless `addr..addr + len` lies inside the medium
    pub(crate) fn check_range(&self, addr: Address, len: usize) -> Result<()> {
        let capacity = self.medium.capacity();
        match addr.checked_add(len) {
            Some(end) if end <= capacity => Ok(()),
            _ => Err(EeError::AddressOutOfRange {
                addr,
                len,
                capacity,
            }),
        }
    }

    // =========================================================================
    // Accessors (for testing and debugging)
    // =========================================================================

    /// Size of the address space
    pub fn capacity(&self) -> usize {
        self.medium.capacity()
    }

    /// Write counters since creation or the last `reset_stats`
    pub fn stats(&self) -> IoStats {
        self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = IoStats::default();
    }

    pub fn medium(&self) -> &M {
        &self.medium
    }

    pub fn medium_mut(&mut self) -> &mut M {
        &mut self.medium
    }

    /// Give the medium back
    pub fn into_inner(self) -> M {
        self.medium
    }
}
