//! Daily quality/sell-in update rules, one per item category.
//!
//! Every rule consumes an [`Item`] and returns its state one day later. Any
//! "past due" check reads the sell-in *before* this day's decrement.

use serde::{Deserialize, Serialize};

use gildedrose_core::{DomainError, DomainResult, ValueObject};

use crate::item::{Category, Item, LEGENDARY_QUALITY};

pub const DEFAULT_MAX_QUALITY: i32 = 50;
pub const DEFAULT_MIN_QUALITY: i32 = 0;

/// Inclusive quality range enforced by the clamping primitives.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QualityBounds {
    pub max: i32,
    pub min: i32,
}

impl QualityBounds {
    pub fn new(max: i32, min: i32) -> DomainResult<Self> {
        Self { max, min }.validated()
    }

    /// Check a (possibly deserialized) bounds value.
    pub fn validated(self) -> DomainResult<Self> {
        if self.min > self.max {
            return Err(DomainError::validation(format!(
                "minimum quality {} is above maximum {}",
                self.min, self.max
            )));
        }
        Ok(self)
    }

    pub fn contains(&self, quality: i32) -> bool {
        (self.min..=self.max).contains(&quality)
    }
}

impl Default for QualityBounds {
    fn default() -> Self {
        Self {
            max: DEFAULT_MAX_QUALITY,
            min: DEFAULT_MIN_QUALITY,
        }
    }
}

impl ValueObject for QualityBounds {}

/// Rule set applied by the inventory at the end of each day.
///
/// Implementors supply one rule per category; `update` routes an item to the
/// rule for its category.
pub trait UpdateRules {
    fn aged_brie(&self, item: Item) -> Item;
    fn backstage_passes(&self, item: Item) -> Item;
    fn sulfuras(&self, item: Item) -> Item;
    fn conjured(&self, item: Item) -> Item;
    fn normal(&self, item: Item) -> Item;

    fn update(&self, item: Item) -> Item {
        match item.category() {
            Category::AgedBrie => self.aged_brie(item),
            Category::BackstagePasses => self.backstage_passes(item),
            Category::Sulfuras => self.sulfuras(item),
            Category::Conjured => self.conjured(item),
            Category::Normal => self.normal(item),
        }
    }
}

/// Standard rules:
///
/// - Once the sell by date has passed, quality degrades twice as fast.
/// - Quality never leaves the configured bounds (0..=50 by default).
/// - "Aged Brie" increases in quality the older it gets.
/// - "Sulfuras" is legendary: never sold, quality fixed at 80.
/// - "Backstage passes" gain 1, 2 within 10 days, 3 within 5 days, and drop
///   to 0 after the concert.
/// - "Conjured" items degrade twice as fast as normal ones.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct QualityRules {
    bounds: QualityBounds,
}

impl QualityRules {
    pub fn new(bounds: QualityBounds) -> Self {
        Self { bounds }
    }

    pub fn bounds(&self) -> QualityBounds {
        self.bounds
    }

    fn increase(&self, quality: i32) -> i32 {
        if quality < self.bounds.max {
            quality + 1
        } else {
            quality
        }
    }

    fn decrease(&self, quality: i32) -> i32 {
        if quality > self.bounds.min {
            quality - 1
        } else {
            quality
        }
    }

    /// One normal degradation step (doubled once past due). Leaves sell-in alone.
    fn degrade(&self, mut item: Item) -> Item {
        item.quality = self.decrease(item.quality);
        if item.sell_in <= 0 {
            item.quality = self.decrease(item.quality);
        }
        item
    }

    fn backstage_bump(&self, quality: i32, sell_in: i32) -> i32 {
        let mut quality = self.increase(quality);
        if sell_in < 11 {
            quality = self.increase(quality);
        }
        if sell_in < 6 {
            quality = self.increase(quality);
        }
        quality
    }
}

impl UpdateRules for QualityRules {
    fn aged_brie(&self, mut item: Item) -> Item {
        item.quality = self.increase(item.quality);
        if item.sell_in < 0 {
            item.quality = self.increase(item.quality);
        }
        item.sell_in = item.sell_in.saturating_sub(1);
        item
    }

    fn backstage_passes(&self, mut item: Item) -> Item {
        item.quality = if item.sell_in == 0 {
            0
        } else {
            self.backstage_bump(item.quality, item.sell_in)
        };
        item.sell_in = item.sell_in.saturating_sub(1);
        item
    }

    fn sulfuras(&self, mut item: Item) -> Item {
        item.quality = LEGENDARY_QUALITY;
        item
    }

    fn conjured(&self, item: Item) -> Item {
        let mut item = if item.sell_in == 5 {
            // Flat drop with no floor; can leave quality below the minimum.
            let mut item = item;
            item.quality = item.quality.saturating_sub(3);
            if item.quality < self.bounds.min {
                tracing::warn!(
                    name = %item.name,
                    quality = item.quality,
                    min = self.bounds.min,
                    "conjured item quality fell below minimum"
                );
            }
            item
        } else {
            self.degrade(self.degrade(item))
        };
        item.sell_in = item.sell_in.saturating_sub(1);
        item
    }

    fn normal(&self, item: Item) -> Item {
        let mut item = self.degrade(item);
        item.sell_in = item.sell_in.saturating_sub(1);
        item
    }
}
