use serde::{Deserialize, Serialize};

use gildedrose_core::ValueObject;

/// Fixed quality of the legendary category.
pub const LEGENDARY_QUALITY: i32 = 80;

/// A stocked item: its name selects the update rule applied each day.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub name: String,
    /// Days left to sell the item; goes negative once the date has passed.
    pub sell_in: i32,
    pub quality: i32,
}

impl Item {
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        Self {
            name: name.into(),
            sell_in,
            quality,
        }
    }

    pub fn category(&self) -> Category {
        Category::from_name(&self.name)
    }
}

impl ValueObject for Item {}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}

/// Item category, resolved by exact match on the item name.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    AgedBrie,
    BackstagePasses,
    /// Legendary: never sold, never loses quality.
    Sulfuras,
    Conjured,
    Normal,
}

impl Category {
    pub const AGED_BRIE: &'static str = "Aged Brie";
    pub const BACKSTAGE_PASSES: &'static str = "Backstage passes";
    pub const SULFURAS: &'static str = "Sulfuras";
    pub const CONJURED: &'static str = "Conjured";

    pub fn from_name(name: &str) -> Self {
        match name {
            Self::AGED_BRIE => Category::AgedBrie,
            Self::BACKSTAGE_PASSES => Category::BackstagePasses,
            Self::SULFURAS => Category::Sulfuras,
            Self::CONJURED => Category::Conjured,
            _ => Category::Normal,
        }
    }

    pub fn is_legendary(self) -> bool {
        matches!(self, Category::Sulfuras)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_is_resolved_by_exact_name() {
        assert_eq!(Category::from_name("Aged Brie"), Category::AgedBrie);
        assert_eq!(Category::from_name("Backstage passes"), Category::BackstagePasses);
        assert_eq!(Category::from_name("Sulfuras"), Category::Sulfuras);
        assert_eq!(Category::from_name("Conjured"), Category::Conjured);
        assert_eq!(Category::from_name("Foo"), Category::Normal);
    }

    #[test]
    fn near_miss_names_fall_back_to_normal() {
        // Singular form is not the backstage literal.
        assert_eq!(Category::from_name("Backstage pass"), Category::Normal);
        assert_eq!(Category::from_name("aged brie"), Category::Normal);
        assert_eq!(Category::from_name("Sulfuras "), Category::Normal);
    }

    #[test]
    fn only_sulfuras_is_legendary() {
        assert!(Category::Sulfuras.is_legendary());
        assert!(!Category::AgedBrie.is_legendary());
        assert!(!Category::Normal.is_legendary());
    }

    #[test]
    fn item_uses_camel_case_on_the_wire() {
        let item = Item::new("Aged Brie", 2, 0);
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "name": "Aged Brie", "sellIn": 2, "quality": 0 })
        );

        let parsed: Item =
            serde_json::from_str(r#"{"name":"Foo","sellIn":-3,"quality":7}"#).unwrap();
        assert_eq!(parsed, Item::new("Foo", -3, 7));
        assert_eq!(parsed.category(), Category::Normal);
    }

    #[test]
    fn display_lists_name_sell_in_and_quality() {
        assert_eq!(Item::new("Conjured", 3, 6).to_string(), "Conjured, 3, 6");
    }
}
