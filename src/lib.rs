//! # eestore
//!
//! Persistence for byte-addressable, write-endurance-limited memory such as
//! EEPROM, where every cell survives only on the order of 100k write cycles:
//! - Change-suppressed writes: unchanged bytes are never reprogrammed
//! - Typed values and opaque records over plain byte transfers
//! - Round-robin slot arrays that spread a hot value over N locations
//! - Deterministic recovery of the current value after power loss mid-write
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────────────────────┐   ┌──────────────────────────┐
//! │   RoundRobinInt<W>       │   │   RoundRobinStruct       │
//! │ {current:1, value:W-1}   │   │ {marker:u8, payload:[u8]}│
//! └────────────┬─────────────┘   └────────────┬─────────────┘
//!              └──────────────┬───────────────┘
//!                             ▼
//!              ┌──────────────────────────────┐
//!              │   Block Transfer / Typed     │
//!              │ read_block, write_block, fill│
//!              └──────────────┬───────────────┘
//!                             ▼
//!              ┌──────────────────────────────┐
//!              │         ByteStore            │
//!              │ read, write (suppressed),    │
//!              │ force_write                  │
//!              └──────────────┬───────────────┘
//!                             ▼
//!              ┌──────────────────────────────┐
//!              │   Medium (RAM / file image)  │
//!              └──────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use eestore::medium::RamMedium;
//! use eestore::{Bits7, ByteStore, RoundRobinInt};
//!
//! const COUNTER: RoundRobinInt<Bits7> = RoundRobinInt::new(0, 3);
//!
//! let mut store = ByteStore::new(RamMedium::new(64));
//! COUNTER.write(&mut store, 5)?;
//! COUNTER.write(&mut store, 9)?;
//! assert_eq!(COUNTER.read(&store)?, 9);
//! assert_eq!(COUNTER.current_index(&store)?, Some(1));
//! # Ok::<(), eestore::EeError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;
pub mod layout;

pub mod medium;
pub mod store;
pub mod block;
pub mod typed;
pub mod round_robin;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{EeError, Result};
pub use config::{Config, SyncStrategy, DEFAULT_CAPACITY};
pub use layout::Address;
pub use store::{ByteStore, IoStats};
pub use round_robin::{
    Bits15, Bits31, Bits7, CommitOrder, RoundRobinInt, RoundRobinStruct, SlotWidth, WriteOutcome,
};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of eestore
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
