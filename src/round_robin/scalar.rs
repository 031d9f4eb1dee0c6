//! Round-Robin Scalar Store
//!
//! Persists one signed integer across N bit-packed slots.
//!
//! ## Layout
//! ```text
//! base
//!  │
//!  ▼
//! ┌────────────┬────────────┬─────┬────────────┐
//! │  slot 0    │  slot 1    │ ... │  slot N-1  │   each W::BYTES wide
//! └────────────┴────────────┴─────┴────────────┘
//! ```

use std::marker::PhantomData;

use crate::error::Result;
use crate::layout::Address;
use crate::medium::Medium;
use crate::store::ByteStore;

use super::slot::{ScalarSlot, SlotWidth};
use super::WriteOutcome;

/// Descriptor of a scalar slot array
///
/// Holds no data itself; every operation goes through the `ByteStore`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundRobinInt<W: SlotWidth> {
    /// Address of slot 0
    base: Address,
    /// Number of slots (N >= 2)
    slots: usize,
    width: PhantomData<W>,
}

impl<W: SlotWidth> RoundRobinInt<W> {
    /// Describe an array of `slots` slots starting at `base`
    ///
    /// Panics (a compile error in `const` context) if `slots < 2`.
    pub const fn new(base: Address, slots: usize) -> Self {
        assert!(slots >= 2, "a round-robin array needs at least two slots");
        Self {
            base,
            slots,
            width: PhantomData,
        }
    }

    pub const fn base(&self) -> Address {
        self.base
    }

    pub const fn slots(&self) -> usize {
        self.slots
    }

    /// Bytes the array occupies
    pub const fn footprint(&self) -> usize {
        self.slots * W::BYTES
    }

    /// First address past the array
    pub const fn end(&self) -> Address {
        self.base + self.footprint()
    }

    pub const fn slot_address(&self, index: usize) -> Address {
        self.base + index * W::BYTES
    }

    /// Decode slot `index`
    pub fn load<M: Medium>(&self, store: &ByteStore<M>, index: usize) -> Result<ScalarSlot> {
        let mut buf = [0u8; 4];
        let bytes = &mut buf[..W::BYTES];
        store.read_into(self.slot_address(index), bytes)?;
        Ok(ScalarSlot::decode::<W>(bytes))
    }

    /// First current slot in ascending order
    fn scan<M: Medium>(&self, store: &ByteStore<M>) -> Result<Option<(usize, ScalarSlot)>> {
        for index in 0..self.slots {
            let slot = self.load(store, index)?;
            if slot.current {
                return Ok(Some((index, slot)));
            }
        }
        Ok(None)
    }

    /// Index of the current slot, `None` while unset
    pub fn current_index<M: Medium>(&self, store: &ByteStore<M>) -> Result<Option<usize>> {
        Ok(self.scan(store)?.map(|(index, _)| index))
    }

    /// Every slot with its validity bit set (more than one only after a crash)
    pub fn current_slots<M: Medium>(&self, store: &ByteStore<M>) -> Result<Vec<usize>> {
        let mut current = Vec::new();
        for index in 0..self.slots {
            if self.load(store, index)?.current {
                current.push(index);
            }
        }
        Ok(current)
    }

    /// The stored value, or 0 if the array was never written
    pub fn read<M: Medium>(&self, store: &ByteStore<M>) -> Result<i32> {
        Ok(self.scan(store)?.map_or(0, |(_, slot)| slot.value))
    }

    /// Store `value`, advancing to the next slot if it changed
    ///
    /// The new slot is written completely before the old one is cleared.
    pub fn write<M: Medium>(&self, store: &mut ByteStore<M>, value: i32) -> Result<WriteOutcome> {
        let next = ScalarSlot::current::<W>(value)?;
        let mut buf = [0u8; 4];

        match self.scan(store)? {
            Some((index, slot)) if slot.value == value => {
                tracing::debug!(
                    base = self.base,
                    slot = index,
                    value,
                    "Scalar unchanged, write skipped"
                );
                Ok(WriteOutcome::Unchanged { slot: index })
            }
            Some((from, slot)) => {
                let to = (from + 1) % self.slots;

                // Phase 1: new slot becomes current
                store.write_block(self.slot_address(to), next.encode::<W>(&mut buf))?;

                // Phase 2: old slot loses its validity bit, value untouched
                let cleared = ScalarSlot {
                    current: false,
                    ..slot
                };
                store.write_block(self.slot_address(from), cleared.encode::<W>(&mut buf))?;

                tracing::debug!(base = self.base, from, to, value, "Scalar advanced");
                Ok(WriteOutcome::Advanced { from, to })
            }
            None => {
                store.write_block(self.slot_address(0), next.encode::<W>(&mut buf))?;
                tracing::debug!(base = self.base, value, "Scalar initialized");
                Ok(WriteOutcome::Initialized)
            }
        }
    }

    /// Clear every slot, returning the array to unset
    pub fn reset<M: Medium>(&self, store: &mut ByteStore<M>) -> Result<usize> {
        store.zero(self.base, self.footprint())
    }
}
