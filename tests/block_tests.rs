//! Tests for Block Transfer
//!
//! These tests verify:
//! - Sequential reads and writes over ascending addresses
//! - Per-byte change suppression inside block writes
//! - Fill and zero
//! - Torn writes when power is lost mid-block

mod common;

use common::ram_store;
use eestore::medium::{PowerCut, RamMedium};
use eestore::{ByteStore, EeError};
use pretty_assertions::assert_eq;

// =============================================================================
// Read/Write Tests
// =============================================================================

#[test]
fn test_write_then_read_block() {
    let mut store = ram_store(16);

    store.write_block(4, &[1, 2, 3, 4, 5]).unwrap();

    assert_eq!(store.read_block(4, 5).unwrap(), vec![1, 2, 3, 4, 5]);
    assert_eq!(store.read_block(3, 1).unwrap(), vec![0]);
    assert_eq!(store.read_block(9, 1).unwrap(), vec![0]);
}

#[test]
fn test_read_into_buffer() {
    let mut store = ram_store(8);
    store.write_block(0, &[9, 8, 7]).unwrap();

    let mut buf = [0xAAu8; 3];
    store.read_into(0, &mut buf).unwrap();

    assert_eq!(buf, [9, 8, 7]);
}

#[test]
fn test_empty_block_is_noop() {
    let mut store = ram_store(4);

    assert_eq!(store.write_block(4, &[]).unwrap(), 0);
    assert_eq!(store.read_block(4, 0).unwrap(), Vec::<u8>::new());
}

#[test]
fn test_write_block_only_writes_changed_bytes() {
    let mut store = ram_store(8);
    assert_eq!(store.write_block(0, &[1, 2, 3, 4]).unwrap(), 4);

    let written = store.write_block(0, &[1, 9, 3, 4]).unwrap();

    assert_eq!(written, 1);
    assert_eq!(store.medium().wear(0), 1);
    assert_eq!(store.medium().wear(1), 2);
    assert_eq!(store.medium().wear(2), 1);
}

#[test]
fn test_write_block_out_of_range_touches_nothing() {
    let mut store = ram_store(4);

    let result = store.write_block(2, &[1, 2, 3]);

    assert!(matches!(
        result,
        Err(EeError::AddressOutOfRange { addr: 2, len: 3, capacity: 4 })
    ));
    assert_eq!(store.medium().as_bytes(), &[0, 0, 0, 0]);
}

// =============================================================================
// Fill Tests
// =============================================================================

#[test]
fn test_fill_range() {
    let mut store = ram_store(6);

    let written = store.fill(1, 0x5A, 4).unwrap();

    assert_eq!(written, 4);
    assert_eq!(store.medium().as_bytes(), &[0, 0x5A, 0x5A, 0x5A, 0x5A, 0]);
}

#[test]
fn test_fill_is_change_suppressed() {
    let mut store = ram_store(6);
    store.write_block(0, &[7, 0, 7]).unwrap();

    let written = store.fill(0, 7, 3).unwrap();

    assert_eq!(written, 1);
}

#[test]
fn test_zero_range() {
    let mut store = ram_store(4);
    store.write_block(0, &[1, 2, 3, 4]).unwrap();

    let written = store.zero(1, 2).unwrap();

    assert_eq!(written, 2);
    assert_eq!(store.medium().as_bytes(), &[1, 0, 0, 4]);
}

// =============================================================================
// Torn Write Tests
// =============================================================================

#[test]
fn test_power_loss_tears_block_write() {
    let mut store = ByteStore::new(PowerCut::new(RamMedium::new(8), 2));

    let result = store.write_block(0, &[1, 2, 3, 4]);

    assert!(matches!(result, Err(EeError::PowerLoss { writes: 2 })));
    // First two bytes new, the rest still old
    assert_eq!(store.medium().inner().as_bytes()[..4].to_vec(), vec![1, 2, 0, 0]);
}

#[test]
fn test_suppressed_bytes_do_not_consume_power_budget() {
    let mut medium = RamMedium::new(4);
    {
        let mut store = ByteStore::new(&mut medium);
        store.write_block(0, &[1, 2, 0, 0]).unwrap();
    }

    let mut store = ByteStore::new(PowerCut::new(medium, 1));
    store.write_block(0, &[1, 2, 3, 0]).unwrap();

    assert!(store.medium().is_cut());
    assert_eq!(store.medium().writes(), 1);
    assert_eq!(store.read_block(0, 4).unwrap(), vec![1, 2, 3, 0]);
}

#[test]
fn test_restore_power() {
    let mut store = ByteStore::new(PowerCut::new(RamMedium::new(4), 0));
    assert!(store.write(0, 1).is_err());

    store.medium_mut().restore(4);

    assert!(store.write(0, 1).unwrap());
    assert_eq!(store.into_inner().into_inner().as_bytes()[0], 1);
}
