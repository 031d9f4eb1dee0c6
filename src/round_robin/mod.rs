//! Round-Robin Module
//!
//! Wear-leveled persistence of a single logical value across an array of N
//! slots. Each update moves the value to the next slot instead of rewriting
//! the same cells, so the array as a whole absorbs N times the writes a
//! single location could.
//!
//! ## Slot Array State Machine
//! ```text
//!            write(v)                 write(v')
//!   UNSET ────────────▶ CURRENT(0) ────────────▶ CURRENT(1) ─ ─ ▶ CURRENT(N-1)
//!                           ▲                                         │
//!                           └──────────────── write(v'') ─────────────┘
//! ```
//! - Exactly one slot is current once the value has been written
//! - The index only ever moves forward by one (mod N)
//! - Readers take the first current slot in ascending order
//!
//! ## Two-Phase Advance
//! The next slot is made current before the old slot is cleared. Losing
//! power between the two phases leaves two current slots, and the scan
//! resolves that to one of them; the next write collapses the pair again.
//!
//! ## Stores
//! - `RoundRobinInt<W>`: bit-packed `{current, value}` slots of 8/16/32 bits
//! - `RoundRobinStruct`: `{marker byte, payload}` slots of any fixed size

mod record;
mod scalar;
mod slot;

pub use record::{CommitOrder, RoundRobinStruct, VALID_MARKER};
pub use scalar::RoundRobinInt;
pub use slot::{Bits15, Bits31, Bits7, ScalarSlot, SlotWidth};

/// What a round-robin write did to the slot array
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The value was already stored; nothing was written
    Unchanged { slot: usize },

    /// The array was unset; slot 0 now holds the value
    Initialized,

    /// The value moved from slot `from` to slot `to`
    Advanced { from: usize, to: usize },
}

impl WriteOutcome {
    /// Index of the current slot after the write
    pub fn slot(&self) -> usize {
        match *self {
            WriteOutcome::Unchanged { slot } => slot,
            WriteOutcome::Initialized => 0,
            WriteOutcome::Advanced { to, .. } => to,
        }
    }
}
