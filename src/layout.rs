//! Static layout of the address space
//!
//! Every persistent value owns a fixed, non-overlapping address range for the
//! lifetime of the device. Layouts are declared at build time, either as a
//! `#[repr(C)]` struct rooted at address 0 or as a chain of round-robin
//! descriptors built with `const fn`, and `check_capacity!` turns an oversized
//! layout into a compile error.
//!
//! ```
//! use eestore::{check_capacity, Bits15, RoundRobinInt, RoundRobinStruct};
//!
//! const BOOTS: RoundRobinInt<Bits15> = RoundRobinInt::new(0, 8);
//! const SETTINGS: RoundRobinStruct = RoundRobinStruct::new(BOOTS.end(), 12, 4);
//!
//! check_capacity!(bytes SETTINGS.end(), eestore::DEFAULT_CAPACITY);
//! ```

/// Offset into the medium's linear address space
pub type Address = usize;

/// Whether a layout of `total` bytes fits a medium of `capacity` bytes
pub const fn fits(total: usize, capacity: usize) -> bool {
    total <= capacity
}

/// Fail the build when a layout exceeds a medium's capacity
///
/// - `check_capacity!(type T, CAP)` checks `size_of::<T>()`
/// - `check_capacity!(bytes EXPR, CAP)` checks a computed end address
#[macro_export]
macro_rules! check_capacity {
    (type $layout:ty, $capacity:expr) => {
        const _: () = ::core::assert!(
            $crate::layout::fits(::core::mem::size_of::<$layout>(), $capacity),
            "persistent layout exceeds medium capacity"
        );
    };
    (bytes $total:expr, $capacity:expr) => {
        const _: () = ::core::assert!(
            $crate::layout::fits($total, $capacity),
            "persistent layout exceeds medium capacity"
        );
    };
}

/// Address of `field` within a `#[repr(C)]` layout struct rooted at address 0
#[macro_export]
macro_rules! ee_addr {
    ($layout:ty, $field:ident) => {
        ::core::mem::offset_of!($layout, $field) as $crate::layout::Address
    };
}
