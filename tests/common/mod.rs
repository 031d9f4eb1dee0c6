//! Shared helpers for integration tests

#![allow(dead_code)]

use std::sync::Once;

use eestore::medium::RamMedium;
use eestore::ByteStore;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Route library logs to the test harness (visible with `--nocapture`)
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("warn,eestore=debug"));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

/// Zero-filled RAM store of `capacity` bytes
pub fn ram_store(capacity: usize) -> ByteStore<RamMedium> {
    init_tracing();
    ByteStore::new(RamMedium::new(capacity))
}
