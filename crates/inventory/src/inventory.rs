use gildedrose_core::{DomainError, DomainResult};

use crate::item::Item;
use crate::rules::{QualityRules, UpdateRules, DEFAULT_MAX_QUALITY};

/// The inn's stock: an ordered sequence of items aged together once a day.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory<R = QualityRules> {
    items: Vec<Item>,
    rules: R,
}

impl Inventory {
    /// Empty inventory using the standard rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the inventory directly. Items are not checked for admission.
    pub fn with_items(items: Vec<Item>) -> Self {
        Self::with_rules(items, QualityRules::default())
    }
}

impl<R: UpdateRules> Inventory<R> {
    pub fn with_rules(items: Vec<Item>, rules: R) -> Self {
        Self { items, rules }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn rules(&self) -> &R {
        &self.rules
    }

    /// Append `item`, or refuse it when it is over quality and not legendary.
    pub fn try_admit(&mut self, item: Item) -> DomainResult<()> {
        if !item.category().is_legendary() && item.quality > DEFAULT_MAX_QUALITY {
            return Err(DomainError::validation(format!(
                "item '{}' has quality {} above {}",
                item.name, item.quality, DEFAULT_MAX_QUALITY
            )));
        }
        self.items.push(item);
        Ok(())
    }

    /// Like [`Inventory::try_admit`], but a refused item is silently dropped.
    pub fn admit(&mut self, item: Item) {
        if let Err(err) = self.try_admit(item) {
            tracing::debug!(error = %err, "item not admitted");
        }
    }

    /// Age every item by one day, preserving order.
    pub fn end_of_day(&mut self) {
        let _span = tracing::debug_span!("end_of_day", items = self.items.len()).entered();

        let rules = &self.rules;
        self.items = core::mem::take(&mut self.items)
            .into_iter()
            .map(|item| rules.update(item))
            .collect();

        tracing::debug!("day advanced");
    }
}
