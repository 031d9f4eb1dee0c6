//! Round-Robin Struct Store
//!
//! Persists one fixed-size opaque record across N slots.
//!
//! ## Layout
//! ```text
//! ┌────────┬───────────────────┬────────┬───────────────────┬─────┐
//! │ marker │ payload (len)     │ marker │ payload (len)     │ ... │
//! └────────┴───────────────────┴────────┴───────────────────┴─────┘
//!  slot 0                       slot 1
//! ```
//! A nonzero marker byte flags the current slot.
//!
//! Unlike the scalar store, a write always advances, even when the payload is
//! unchanged. Callers that want to skip identical records compare first.

use bytemuck::Pod;

use crate::error::{EeError, Result};
use crate::layout::Address;
use crate::medium::Medium;
use crate::store::ByteStore;

use super::WriteOutcome;

/// Marker written to a slot on first use
pub const VALID_MARKER: u8 = 1;

/// Order of the two new-slot writes during an advance
///
/// Both orders finish the new slot before clearing the old one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommitOrder {
    /// Marker, then payload. Power loss between the two leaves the new slot
    /// current with the payload it held N writes ago.
    #[default]
    MarkerFirst,

    /// Payload, then marker. The new slot only becomes current once its
    /// payload is complete.
    PayloadFirst,
}

/// Descriptor of a struct slot array
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundRobinStruct {
    /// Address of slot 0
    base: Address,
    /// Payload bytes per slot
    payload_len: usize,
    /// Number of slots (N >= 2)
    slots: usize,
    commit_order: CommitOrder,
}

impl RoundRobinStruct {
    /// Describe `slots` slots of `payload_len` bytes starting at `base`
    ///
    /// Panics (a compile error in `const` context) if `slots < 2`.
    pub const fn new(base: Address, payload_len: usize, slots: usize) -> Self {
        assert!(slots >= 2, "a round-robin array needs at least two slots");
        Self {
            base,
            payload_len,
            slots,
            commit_order: CommitOrder::MarkerFirst,
        }
    }

    pub const fn with_commit_order(self, order: CommitOrder) -> Self {
        Self {
            commit_order: order,
            ..self
        }
    }

    pub const fn base(&self) -> Address {
        self.base
    }

    pub const fn slots(&self) -> usize {
        self.slots
    }

    pub const fn payload_len(&self) -> usize {
        self.payload_len
    }

    pub const fn commit_order(&self) -> CommitOrder {
        self.commit_order
    }

    /// Bytes per slot: marker + payload
    pub const fn stride(&self) -> usize {
        1 + self.payload_len
    }

    pub const fn footprint(&self) -> usize {
        self.slots * self.stride()
    }

    pub const fn end(&self) -> Address {
        self.base + self.footprint()
    }

    /// Address of slot `index`'s marker byte
    pub const fn slot_address(&self, index: usize) -> Address {
        self.base + index * self.stride()
    }

    pub const fn payload_address(&self, index: usize) -> Address {
        self.slot_address(index) + 1
    }

    fn check_len(&self, actual: usize) -> Result<()> {
        if actual != self.payload_len {
            return Err(EeError::PayloadSize {
                expected: self.payload_len,
                actual,
            });
        }
        Ok(())
    }

    /// First slot with a nonzero marker, with that marker
    fn scan<M: Medium>(&self, store: &ByteStore<M>) -> Result<Option<(usize, u8)>> {
        for index in 0..self.slots {
            let marker = store.read(self.slot_address(index))?;
            if marker != 0 {
                return Ok(Some((index, marker)));
            }
        }
        Ok(None)
    }

    /// Index of the current slot, `None` while unset
    pub fn current_index<M: Medium>(&self, store: &ByteStore<M>) -> Result<Option<usize>> {
        Ok(self.scan(store)?.map(|(index, _)| index))
    }

    /// Every slot with a nonzero marker
    pub fn current_slots<M: Medium>(&self, store: &ByteStore<M>) -> Result<Vec<usize>> {
        let mut current = Vec::new();
        for index in 0..self.slots {
            if store.read(self.slot_address(index))? != 0 {
                current.push(index);
            }
        }
        Ok(current)
    }

    /// Copy the current payload into `buf`, or zero it if unset
    pub fn read<M: Medium>(&self, store: &ByteStore<M>, buf: &mut [u8]) -> Result<()> {
        self.check_len(buf.len())?;
        match self.scan(store)? {
            Some((index, _)) => store.read_into(self.payload_address(index), buf),
            None => {
                buf.fill(0);
                Ok(())
            }
        }
    }

    pub fn read_vec<M: Medium>(&self, store: &ByteStore<M>) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; self.payload_len];
        self.read(store, &mut buf)?;
        Ok(buf)
    }

    /// Store `payload` in the next slot
    pub fn write<M: Medium>(
        &self,
        store: &mut ByteStore<M>,
        payload: &[u8],
    ) -> Result<WriteOutcome> {
        self.check_len(payload.len())?;

        match self.scan(store)? {
            Some((from, marker)) => {
                let to = (from + 1) % self.slots;

                // Phase 1: new slot gets the carried-forward marker and the payload
                self.commit(store, to, marker, payload)?;

                // Phase 2: invalidate the old slot
                store.write(self.slot_address(from), 0)?;

                tracing::debug!(base = self.base, from, to, "Struct advanced");
                Ok(WriteOutcome::Advanced { from, to })
            }
            None => {
                // No older slot to fall back on, so the marker always goes last
                store.write_block(self.payload_address(0), payload)?;
                store.write(self.slot_address(0), VALID_MARKER)?;

                tracing::debug!(base = self.base, "Struct initialized");
                Ok(WriteOutcome::Initialized)
            }
        }
    }

    /// Write marker and payload of slot `index` in the configured order
    fn commit<M: Medium>(
        &self,
        store: &mut ByteStore<M>,
        index: usize,
        marker: u8,
        payload: &[u8],
    ) -> Result<()> {
        match self.commit_order {
            CommitOrder::MarkerFirst => {
                store.write(self.slot_address(index), marker)?;
                store.write_block(self.payload_address(index), payload)?;
            }
            CommitOrder::PayloadFirst => {
                store.write_block(self.payload_address(index), payload)?;
                store.write(self.slot_address(index), marker)?;
            }
        }
        Ok(())
    }

    /// Read the current payload as a `T`
    pub fn read_value<T: Pod, M: Medium>(&self, store: &ByteStore<M>) -> Result<T> {
        let mut value = T::zeroed();
        self.read(store, bytemuck::bytes_of_mut(&mut value))?;
        Ok(value)
    }

    /// Store `value` as the payload
    pub fn write_value<T: Pod, M: Medium>(
        &self,
        store: &mut ByteStore<M>,
        value: &T,
    ) -> Result<WriteOutcome> {
        self.write(store, bytemuck::bytes_of(value))
    }

    /// Clear every slot, returning the array to unset
    pub fn reset<M: Medium>(&self, store: &mut ByteStore<M>) -> Result<usize> {
        store.zero(self.base, self.footprint())
    }
}
