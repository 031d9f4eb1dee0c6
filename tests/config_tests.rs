//! Tests for Config
//!
//! These tests verify:
//! - Default values
//! - Builder setters
//! - Validation of unusable settings
//! - Building RAM media from a config

use eestore::config::DEFAULT_CELL_ENDURANCE;
use eestore::medium::{Medium, RamMedium};
use eestore::{Config, EeError, SyncStrategy, DEFAULT_CAPACITY};

#[test]
fn test_defaults() {
    let config = Config::default();

    assert_eq!(config.capacity, DEFAULT_CAPACITY);
    assert_eq!(config.capacity, 1024);
    assert_eq!(config.fill_byte, 0x00);
    assert_eq!(config.cell_endurance, DEFAULT_CELL_ENDURANCE);
    assert_eq!(config.sync_strategy, SyncStrategy::EveryWrite);
    assert!(config.validate().is_ok());
}

#[test]
fn test_builder_sets_every_field() {
    let config = Config::builder()
        .image_path("/tmp/custom.img")
        .capacity(4096)
        .fill_byte(0xFF)
        .cell_endurance(10)
        .sync_strategy(SyncStrategy::Manual)
        .build();

    assert_eq!(config.image_path.to_str(), Some("/tmp/custom.img"));
    assert_eq!(config.capacity, 4096);
    assert_eq!(config.fill_byte, 0xFF);
    assert_eq!(config.cell_endurance, 10);
    assert_eq!(config.sync_strategy, SyncStrategy::Manual);
}

#[test]
fn test_validate_rejects_zero_capacity() {
    let config = Config::builder().capacity(0).build();

    assert!(matches!(config.validate(), Err(EeError::Config(_))));
}

#[test]
fn test_validate_rejects_zero_sync_interval() {
    let config = Config::builder()
        .sync_strategy(SyncStrategy::EveryNWrites { count: 0 })
        .build();

    assert!(matches!(config.validate(), Err(EeError::Config(_))));
}

#[test]
fn test_ram_medium_from_config() {
    let config = Config::builder()
        .capacity(32)
        .fill_byte(0xFF)
        .cell_endurance(2)
        .build();

    let mut medium = RamMedium::from_config(&config).unwrap();

    assert_eq!(medium.capacity(), 32);
    assert_eq!(medium.read_byte(31).unwrap(), 0xFF);
    assert_eq!(medium.endurance(), 2);
    assert_eq!(medium.wear_stats().total_writes, 0);

    // Endurance from the config decides when a cell counts as worn
    medium.write_byte(0, 1).unwrap();
    assert_eq!(medium.wear_stats().worn_cells, 0);
    medium.write_byte(0, 2).unwrap();
    assert_eq!(medium.wear_stats().worn_cells, 1);
}

#[test]
fn test_ram_medium_default_endurance() {
    assert_eq!(RamMedium::new(8).endurance(), DEFAULT_CELL_ENDURANCE);
}
