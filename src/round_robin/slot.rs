//! Scalar slot encoding
//!
//! A scalar slot packs a validity bit and a signed value into one 8, 16 or
//! 32 bit word:
//!
//! ```text
//!  word bit:  W-1 ..................... 1   0
//!            ┌─────────────────────────────┬───┐
//!            │ value (W-1 bits, signed)    │ c │   c = current
//!            └─────────────────────────────┴───┘
//! ```
//!
//! The word is stored big-endian. The byte holding `current` therefore sits
//! at the highest address of the slot and is the last one an ascending block
//! write touches: a slot only turns current once all of its value bytes are
//! in place, and clearing `current` rewrites exactly one byte.

use std::fmt::Debug;

use crate::error::{EeError, Result};

mod sealed {
    pub trait Sealed {}
}

/// Physical width of a scalar slot, fixed when the value is defined
pub trait SlotWidth: sealed::Sealed + Copy + Debug + 'static {
    /// Bits in the packed word (validity bit included)
    const WORD_BITS: u32;

    /// Bytes a slot occupies on the medium
    const BYTES: usize = (Self::WORD_BITS / 8) as usize;

    /// Bits available to the value
    const VALUE_BITS: u32 = Self::WORD_BITS - 1;

    /// Smallest storable value
    const MIN: i32 = -(1 << (Self::VALUE_BITS - 1));

    /// Largest storable value
    const MAX: i32 = (1 << (Self::VALUE_BITS - 1)) - 1;
}

/// 1-byte slot holding a 7-bit value (-64..=63)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bits7;

/// 2-byte slot holding a 15-bit value (-16384..=16383)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bits15;

/// 4-byte slot holding a 31-bit value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bits31;

impl sealed::Sealed for Bits7 {}
impl sealed::Sealed for Bits15 {}
impl sealed::Sealed for Bits31 {}

impl SlotWidth for Bits7 {
    const WORD_BITS: u32 = 8;
}

impl SlotWidth for Bits15 {
    const WORD_BITS: u32 = 16;
}

impl SlotWidth for Bits31 {
    const WORD_BITS: u32 = 32;
}

/// Decoded contents of one scalar slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScalarSlot {
    pub current: bool,
    pub value: i32,
}

impl ScalarSlot {
    /// A current slot holding `value`, checked against the width's range
    pub fn current<W: SlotWidth>(value: i32) -> Result<Self> {
        if !(W::MIN..=W::MAX).contains(&value) {
            return Err(EeError::ValueOutOfRange {
                value: i64::from(value),
                bits: W::VALUE_BITS,
            });
        }
        Ok(Self {
            current: true,
            value,
        })
    }

    /// Pack into a word of `W::WORD_BITS` bits
    pub fn pack<W: SlotWidth>(self) -> u32 {
        let mask = u32::MAX >> (32 - W::WORD_BITS);
        (((self.value as u32) << 1) | u32::from(self.current)) & mask
    }

    /// Unpack a word of `W::WORD_BITS` bits, sign-extending the value
    pub fn unpack<W: SlotWidth>(word: u32) -> Self {
        let shift = 32 - W::WORD_BITS;
        let signed = ((word << shift) as i32) >> shift;
        Self {
            current: word & 1 == 1,
            value: signed >> 1,
        }
    }

    /// On-medium bytes; the returned slice of `buf` is `W::BYTES` long
    pub fn encode<W: SlotWidth>(self, buf: &mut [u8; 4]) -> &[u8] {
        *buf = self.pack::<W>().to_be_bytes();
        &buf[4 - W::BYTES..]
    }

    /// Decode `W::BYTES` on-medium bytes
    pub fn decode<W: SlotWidth>(bytes: &[u8]) -> Self {
        let mut word = [0u8; 4];
        word[4 - bytes.len()..].copy_from_slice(bytes);
        Self::unpack::<W>(u32::from_be_bytes(word))
    }
}
