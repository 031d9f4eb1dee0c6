//! File-backed medium
//!
//! Persists an EEPROM image as a flat file of exactly `capacity` bytes.
//! The image is cached in memory for reads; every write goes straight
//! through to the file at the same offset.

use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use crate::config::{Config, SyncStrategy};
use crate::error::{EeError, Result};
use crate::layout::Address;

use super::Medium;

/// EEPROM image stored in a file
pub struct FileMedium {
    /// Path of the image file
    path: PathBuf,
    /// Open handle used for write-through
    file: File,
    /// In-memory copy of the image
    cache: Vec<u8>,
    /// When to fsync
    sync_strategy: SyncStrategy,
    /// Writes since the last fsync
    unsynced: usize,
}

impl FileMedium {
    /// Open the image at `config.image_path`, creating it if missing
    ///
    /// A new image is filled with `config.fill_byte`. An existing image must
    /// be exactly `config.capacity` bytes long.
    pub fn open(config: &Config) -> Result<Self> {
        config.validate()?;

        let path = config.image_path.clone();
        let exists = path.exists();

        let mut file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&path)?;

        let cache = if exists {
            let actual = file.metadata()?.len();
            let expected = config.capacity as u64;
            if actual != expected {
                return Err(EeError::ImageSize { expected, actual });
            }

            let mut cache = vec![0u8; config.capacity];
            file.read_exact(&mut cache)?;
            tracing::info!(
                path = %path.display(),
                capacity = config.capacity,
                "Opened EEPROM image"
            );
            cache
        } else {
            let cache = vec![config.fill_byte; config.capacity];
            file.write_all(&cache)?;
            file.sync_all()?;
            tracing::info!(
                path = %path.display(),
                capacity = config.capacity,
                fill = config.fill_byte,
                "Created EEPROM image"
            );
            cache
        };

        Ok(Self {
            path,
            file,
            cache,
            sync_strategy: config.sync_strategy,
            unsynced: 0,
        })
    }

    /// Path of the backing image
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes not yet flushed to disk
    pub fn unsynced_writes(&self) -> usize {
        self.unsynced
    }
}

impl Medium for FileMedium {
    fn capacity(&self) -> usize {
        self.cache.len()
    }

    fn read_byte(&self, addr: Address) -> Result<u8> {
        self.cache
            .get(addr)
            .copied()
            .ok_or(EeError::AddressOutOfRange {
                addr,
                len: 1,
                capacity: self.cache.len(),
            })
    }

    fn write_byte(&mut self, addr: Address, value: u8) -> Result<()> {
        if addr >= self.cache.len() {
            return Err(EeError::AddressOutOfRange {
                addr,
                len: 1,
                capacity: self.cache.len(),
            });
        }

        self.file.seek(SeekFrom::Start(addr as u64))?;
        self.file.write_all(&[value])?;
        self.cache[addr] = value;
        self.unsynced += 1;

        let strategy = self.sync_strategy;
        match strategy {
            SyncStrategy::EveryWrite => self.sync()?,
            SyncStrategy::EveryNWrites { count } if self.unsynced >= count => self.sync()?,
            _ => {}
        }

        Ok(())
    }

    fn sync(&mut self) -> Result<()> {
        if self.unsynced > 0 {
            self.file.sync_data()?;
            self.unsynced = 0;
        }
        Ok(())
    }
}
