//! Inventory domain module.
//!
//! Item categories, their daily quality/sell-in rules, and the inventory that
//! ages its stock once per day. Pure deterministic domain logic: no IO, no
//! storage.

pub mod inventory;
pub mod item;
pub mod rules;

pub use inventory::Inventory;
pub use item::{Category, Item, LEGENDARY_QUALITY};
pub use rules::{QualityBounds, QualityRules, UpdateRules};
