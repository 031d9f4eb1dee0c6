//! Block Transfer
//!
//! Sequential multi-byte access built from single-byte `ByteStore` calls,
//! one byte per ascending address.
//!
//! Block writes are not atomic. If power is lost after `k` bytes, the first
//! `k` bytes hold the new data and the rest still hold the old data. The
//! round-robin stores order their block writes so that such a torn write is
//! never mistaken for a valid value.

use crate::error::Result;
use crate::layout::Address;
use crate::medium::Medium;
use crate::store::ByteStore;

impl<M: Medium> ByteStore<M> {
    /// Read `len` bytes starting at `addr`
    pub fn read_block(&self, addr: Address, len: usize) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; len];
        self.read_into(addr, &mut buf)?;
        Ok(buf)
    }

    /// Fill `buf` with the bytes starting at `addr`
    pub fn read_into(&self, addr: Address, buf: &mut [u8]) -> Result<()> {
        self.check_range(addr, buf.len())?;
        for (offset, byte) in buf.iter_mut().enumerate() {
            *byte = self.read(addr + offset)?;
        }
        Ok(())
    }

    /// Write `bytes` starting at `addr`, skipping unchanged cells
    ///
    /// Returns the number of physical writes issued.
    pub fn write_block(&mut self, addr: Address, bytes: &[u8]) -> Result<usize> {
        self.check_range(addr, bytes.len())?;
        let mut written = 0;
        for (offset, &byte) in bytes.iter().enumerate() {
            if self.write(addr + offset, byte)? {
                written += 1;
            }
        }
        Ok(written)
    }

    /// Set `len` bytes starting at `addr` to `value`
    ///
    /// Returns the number of physical writes issued.
    pub fn fill(&mut self, addr: Address, value: u8, len: usize) -> Result<usize> {
        self.check_range(addr, len)?;
        let mut written = 0;
        for offset in 0..len {
            if self.write(addr + offset, value)? {
                written += 1;
            }
        }
        Ok(written)
    }

    /// Zero `len` bytes starting at `addr`
    pub fn zero(&mut self, addr: Address, len: usize) -> Result<usize> {
        self.fill(addr, 0, len)
    }
}
