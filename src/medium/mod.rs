//! Medium Module
//!
//! The raw byte-addressable storage the rest of the crate is built on.
//!
//! ## Contract
//! - `read_byte` returns the byte at an address and has no side effects
//! - `write_byte` unconditionally programs one cell and costs one write cycle
//! - A write interrupted by power loss may leave that one cell indeterminate,
//!   but never disturbs any other cell
//!
//! Callers (`ByteStore`) bounds-check every address before it reaches a medium.
//!
//! ## Implementations
//! - `RamMedium`: in-memory cells with per-cell wear counters
//! - `FileMedium`: an EEPROM image file on disk
//! - `PowerCut`: wraps another medium and fails all writes after a budget

mod fault;
mod file;
mod ram;

pub use fault::PowerCut;
pub use file::FileMedium;
pub use ram::{RamMedium, WearStats};

use crate::error::Result;
use crate::layout::Address;

/// A fixed-size, byte-addressable, write-endurance-limited store
pub trait Medium {
    /// Size of the address space in bytes
    fn capacity(&self) -> usize;

    /// Read the byte at `addr`
    fn read_byte(&self, addr: Address) -> Result<u8>;

    /// Program the cell at `addr` with `value`
    fn write_byte(&mut self, addr: Address, value: u8) -> Result<()>;

    /// Make previous writes durable
    fn sync(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<M: Medium + ?Sized> Medium for &mut M {
    fn capacity(&self) -> usize {
        (**self).capacity()
    }

    fn read_byte(&self, addr: Address) -> Result<u8> {
        (**self).read_byte(addr)
    }

    fn write_byte(&mut self, addr: Address, value: u8) -> Result<()> {
        (**self).write_byte(addr, value)
    }

    fn sync(&mut self) -> Result<()> {
        (**self).sync()
    }
}
