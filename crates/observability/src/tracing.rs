//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "info";

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    init_with_default(DEFAULT_FILTER);
}

/// Initialize with a fallback filter directive, still overridable via `RUST_LOG`.
///
/// Returns `false` when a global subscriber was already installed.
pub fn init_with_default(directive: &str) -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));

    // JSON logs + timestamps, configurable via RUST_LOG.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use gildedrose_inventory::{Inventory, Item};

    #[test]
    fn init_is_idempotent() {
        init_with_default("debug");
        assert!(!init_with_default("debug"));
        crate::init();

        // Domain logging runs under the installed subscriber.
        let mut inventory = Inventory::new();
        inventory.admit(Item::new("Foo", 1, 99));
        inventory.admit(Item::new("Conjured", 5, 1));
        inventory.end_of_day();
        assert_eq!(inventory.items(), &[Item::new("Conjured", 4, -2)]);
    }
}
