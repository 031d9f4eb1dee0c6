//! Typed values
//!
//! Reads and writes any plain-old-data type through Block Transfer over
//! `size_of::<T>()` bytes. Values use the host's native in-memory byte order;
//! this is not a portable format.

use bytemuck::Pod;

use crate::error::Result;
use crate::layout::Address;
use crate::medium::Medium;
use crate::store::ByteStore;

impl<M: Medium> ByteStore<M> {
    /// Read a `T` stored at `addr`
    pub fn read_value<T: Pod>(&self, addr: Address) -> Result<T> {
        let mut value = T::zeroed();
        self.read_into(addr, bytemuck::bytes_of_mut(&mut value))?;
        Ok(value)
    }

    /// Store `value` at `addr`, touching only the bytes that changed
    ///
    /// Returns the number of physical writes issued.
    pub fn write_value<T: Pod>(&mut self, addr: Address, value: &T) -> Result<usize> {
        self.write_block(addr, bytemuck::bytes_of(value))
    }
}
