//! In-memory medium
//!
//! Simulates an EEPROM in RAM and keeps a write counter for every cell so
//! tests and benchmarks can see exactly how wear is distributed.

use crate::config::{Config, DEFAULT_CELL_ENDURANCE};
use crate::error::{EeError, Result};
use crate::layout::Address;

use super::Medium;

/// RAM-backed medium with per-cell wear accounting
#[derive(Debug, Clone)]
pub struct RamMedium {
    /// Cell contents
    cells: Vec<u8>,
    /// Physical writes issued to each cell
    wear: Vec<u32>,
    /// Rated write cycles per cell
    endurance: u32,
}

/// Snapshot of how worn a medium is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WearStats {
    /// Physical writes across all cells
    pub total_writes: u64,
    /// Writes to the most-written cell
    pub max_cell_writes: u32,
    /// Cells at or past their rated endurance
    pub worn_cells: usize,
}

impl RamMedium {
    /// Create a zero-filled medium
    pub fn new(capacity: usize) -> Self {
        Self::with_fill(capacity, 0x00)
    }

    /// Create a medium with every cell holding `fill`
    pub fn with_fill(capacity: usize, fill: u8) -> Self {
        Self {
            cells: vec![fill; capacity],
            wear: vec![0; capacity],
            endurance: DEFAULT_CELL_ENDURANCE,
        }
    }

    /// Create a medium sized, filled and rated per `config`
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_fill(config.capacity, config.fill_byte).with_endurance(config.cell_endurance))
    }

    /// Set the rated write cycles per cell
    pub fn with_endurance(mut self, cycles: u32) -> Self {
        self.endurance = cycles;
        self
    }

    /// Rated write cycles per cell
    pub fn endurance(&self) -> u32 {
        self.endurance
    }

    /// Physical writes issued to the cell at `addr` (0 if out of range)
    pub fn wear(&self, addr: Address) -> u32 {
        self.wear.get(addr).copied().unwrap_or(0)
    }

    /// Summarize wear against the rated per-cell endurance
    pub fn wear_stats(&self) -> WearStats {
        let mut stats = WearStats::default();
        for &count in &self.wear {
            stats.total_writes += u64::from(count);
            stats.max_cell_writes = stats.max_cell_writes.max(count);
            if count >= self.endurance {
                stats.worn_cells += 1;
            }
        }
        stats
    }

    /// Raw view of every cell
    pub fn as_bytes(&self) -> &[u8] {
        &self.cells
    }
}

impl Medium for RamMedium {
    fn capacity(&self) -> usize {
        self.cells.len()
    }

    fn read_byte(&self, addr: Address) -> Result<u8> {
        self.cells
            .get(addr)
            .copied()
            .ok_or(EeError::AddressOutOfRange {
                addr,
                len: 1,
                capacity: self.cells.len(),
            })
    }

    fn write_byte(&mut self, addr: Address, value: u8) -> Result<()> {
        let capacity = self.cells.len();
        let cell = self.cells.get_mut(addr).ok_or(EeError::AddressOutOfRange {
            addr,
            len: 1,
            capacity,
        })?;
        *cell = value;
        self.wear[addr] = self.wear[addr].saturating_add(1);
        Ok(())
    }
}
