//! Configuration for eestore
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

use crate::error::{EeError, Result};

/// Capacity of the reference medium: a 1 KiB AVR EEPROM (`E2END + 1`)
pub const DEFAULT_CAPACITY: usize = 1024;

/// Rated write cycles per cell before content becomes unreliable
pub const DEFAULT_CELL_ENDURANCE: u32 = 100_000;

/// Main configuration for a persistent medium
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Medium Configuration
    // -------------------------------------------------------------------------
    /// Image file backing the medium (file-backed stores only)
    pub image_path: PathBuf,

    /// Size of the linear address space in bytes
    pub capacity: usize,

    /// Byte value a freshly created image is filled with.
    /// Round-robin arrays read as unset only when their validity bits are clear,
    /// so anything other than 0x00 requires a `reset` before first use.
    pub fill_byte: u8,

    /// Rated write cycles per cell, used for wear reports
    pub cell_endurance: u32,

    // -------------------------------------------------------------------------
    // Durability Configuration
    // -------------------------------------------------------------------------
    /// How often the file medium flushes to disk
    pub sync_strategy: SyncStrategy,
}

/// Flush strategy for file-backed media
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncStrategy {
    /// fsync after every physical byte write (mirrors the real medium)
    EveryWrite,

    /// fsync after N physical byte writes
    EveryNWrites { count: usize },

    /// Only sync when `ByteStore::sync` is called
    Manual,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            image_path: PathBuf::from("./eestore.img"),
            capacity: DEFAULT_CAPACITY,
            fill_byte: 0x00,
            cell_endurance: DEFAULT_CELL_ENDURANCE,
            sync_strategy: SyncStrategy::EveryWrite,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Reject configurations no medium can be built from
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(EeError::Config("capacity must be non-zero".to_string()));
        }
        if let SyncStrategy::EveryNWrites { count: 0 } = self.sync_strategy {
            return Err(EeError::Config(
                "EveryNWrites requires a non-zero count".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the image file path
    pub fn image_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.image_path = path.into();
        self
    }

    /// Set the medium capacity (in bytes)
    pub fn capacity(mut self, bytes: usize) -> Self {
        self.config.capacity = bytes;
        self
    }

    /// Set the fill byte for new images
    pub fn fill_byte(mut self, byte: u8) -> Self {
        self.config.fill_byte = byte;
        self
    }

    /// Set the rated endurance per cell
    pub fn cell_endurance(mut self, cycles: u32) -> Self {
        self.config.cell_endurance = cycles;
        self
    }

    /// Set the sync strategy
    pub fn sync_strategy(mut self, strategy: SyncStrategy) -> Self {
        self.config.sync_strategy = strategy;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
