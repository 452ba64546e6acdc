//! Menu Model (categories own their items)

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Nutrition facts (per serving)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Nutrition {
    pub calories: Option<u32>,
    pub protein_g: Option<f64>,
    pub carbs_g: Option<f64>,
    pub fat_g: Option<f64>,
}

/// Menu item entity
///
/// Carries the same field rules as [`MenuItemCreate`] so a full menu
/// submission is checked like single-item writes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct MenuItem {
    pub id: String,
    /// Owning category, kept in line with the containing [`MenuCategory`]
    pub category_id: String,
    #[validate(length(min = 1, max = 200, message = "must be 1-200 characters"))]
    pub name: String,
    #[serde(default)]
    #[validate(length(max = 500))]
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(default = "default_true")]
    pub is_available: bool,
    /// e.g. "vegetarian", "vegan", "gluten-free"
    #[serde(default)]
    pub dietary_tags: Vec<String>,
    /// 0 (mild) .. 5 (very hot)
    #[serde(default)]
    #[validate(range(max = 5))]
    pub spice_level: u8,
    #[serde(default)]
    pub nutrition: Nutrition,
    #[validate(length(max = 2048))]
    pub image_url: Option<String>,
}

fn default_true() -> bool {
    true
}

/// Menu category entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct MenuCategory {
    pub id: String,
    #[validate(length(min = 1, max = 200, message = "must be 1-200 characters"))]
    pub name: String,
    #[serde(default)]
    #[validate(length(max = 500))]
    pub description: String,
    #[serde(default)]
    pub display_order: i32,
    /// Ordered item list
    #[serde(default)]
    pub items: Vec<MenuItem>,
}

/// Full menu (what `saveMenuData` submits and `getMenuData` returns)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Menu {
    #[serde(default)]
    pub categories: Vec<MenuCategory>,
}

impl Menu {
    /// Iterate all items across categories, in category then item order
    pub fn items(&self) -> impl Iterator<Item = &MenuItem> {
        self.categories.iter().flat_map(|c| c.items.iter())
    }

    /// First id that occurs more than once among categories and items
    pub fn first_duplicate_id(&self) -> Option<&str> {
        let mut seen = std::collections::HashSet::new();
        self.categories
            .iter()
            .map(|c| c.id.as_str())
            .chain(self.items().map(|i| i.id.as_str()))
            .find(|id| !seen.insert(*id))
    }

    /// Point every item's `category_id` at the category that contains it
    pub fn assign_category_ids(&mut self) {
        for category in &mut self.categories {
            for item in &mut category.items {
                if item.category_id != category.id {
                    item.category_id.clone_from(&category.id);
                }
            }
        }
    }
}

/// Create menu item payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MenuItemCreate {
    #[validate(length(min = 1, max = 200, message = "must be 1-200 characters"))]
    pub name: String,
    #[serde(default)]
    #[validate(length(max = 500))]
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub is_available: Option<bool>,
    #[serde(default)]
    pub dietary_tags: Vec<String>,
    #[validate(range(max = 5))]
    pub spice_level: Option<u8>,
    pub nutrition: Option<Nutrition>,
    #[validate(length(max = 2048))]
    pub image_url: Option<String>,
}

impl MenuItemCreate {
    /// Minimal payload with name and price
    pub fn new(name: impl Into<String>, price: Decimal) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            price,
            is_available: None,
            dietary_tags: Vec::new(),
            spice_level: None,
            nutrition: None,
            image_url: None,
        }
    }

    /// Materialize the item under `category_id` with the given id
    pub fn into_item(self, id: String, category_id: &str) -> MenuItem {
        MenuItem {
            id,
            category_id: category_id.to_string(),
            name: self.name,
            description: self.description,
            price: self.price,
            is_available: self.is_available.unwrap_or(true),
            dietary_tags: self.dietary_tags,
            spice_level: self.spice_level.unwrap_or(0),
            nutrition: self.nutrition.unwrap_or_default(),
            image_url: self.image_url,
        }
    }
}

/// Update menu item payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct MenuItemUpdate {
    #[validate(length(min = 1, max = 200, message = "must be 1-200 characters"))]
    pub name: Option<String>,
    #[validate(length(max = 500))]
    pub description: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub price: Option<Decimal>,
    pub is_available: Option<bool>,
    pub dietary_tags: Option<Vec<String>>,
    #[validate(range(max = 5))]
    pub spice_level: Option<u8>,
    pub nutrition: Option<Nutrition>,
    #[validate(length(max = 2048))]
    pub image_url: Option<String>,
}

impl MenuItem {
    /// Merge present fields of `update` into this item
    pub fn merge(&mut self, update: MenuItemUpdate) {
        if let Some(v) = update.name {
            self.name = v;
        }
        if let Some(v) = update.description {
            self.description = v;
        }
        if let Some(v) = update.price {
            self.price = v;
        }
        if let Some(v) = update.is_available {
            self.is_available = v;
        }
        if let Some(v) = update.dietary_tags {
            self.dietary_tags = v;
        }
        if let Some(v) = update.spice_level {
            self.spice_level = v;
        }
        if let Some(v) = update.nutrition {
            self.nutrition = v;
        }
        if let Some(v) = update.image_url {
            self.image_url = Some(v);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, category: &str) -> MenuItem {
        MenuItemCreate::new("Soup", Decimal::new(650, 2)).into_item(id.into(), category)
    }

    #[test]
    fn create_payload_accepts_float_price() {
        let payload: MenuItemCreate =
            serde_json::from_str(r#"{"name": "Test Item", "price": 9.99}"#).unwrap();
        assert_eq!(payload.price, Decimal::new(999, 2));
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn into_item_applies_defaults() {
        let item = item("item-1", "cat-1");
        assert!(item.is_available);
        assert_eq!(item.spice_level, 0);
        assert_eq!(item.category_id, "cat-1");
    }

    #[test]
    fn merge_leaves_absent_fields() {
        let mut it = item("item-1", "cat-1");
        it.merge(MenuItemUpdate {
            price: Some(Decimal::new(700, 2)),
            ..Default::default()
        });
        assert_eq!(it.price, Decimal::new(700, 2));
        assert_eq!(it.name, "Soup");
    }

    #[test]
    fn spice_level_above_five_is_invalid() {
        let mut payload = MenuItemCreate::new("Vindaloo", Decimal::new(1500, 2));
        payload.spice_level = Some(9);
        assert!(payload.validate().is_err());
    }

    #[test]
    fn duplicate_ids_are_detected_across_categories() {
        let menu = Menu {
            categories: vec![
                MenuCategory {
                    id: "cat-1".into(),
                    name: "Starters".into(),
                    description: String::new(),
                    display_order: 1,
                    items: vec![item("item-1", "cat-1")],
                },
                MenuCategory {
                    id: "cat-2".into(),
                    name: "Mains".into(),
                    description: String::new(),
                    display_order: 2,
                    items: vec![item("item-1", "cat-2")],
                },
            ],
        };
        assert_eq!(menu.first_duplicate_id(), Some("item-1"));
    }

    #[test]
    fn stored_item_rules_match_create_payload() {
        let mut it = item("item-1", "cat-1");
        assert!(it.validate().is_ok());
        it.spice_level = 9;
        assert!(it.validate().is_err());
        it.spice_level = 2;
        it.name = "x".repeat(201);
        assert!(it.validate().is_err());
    }

    #[test]
    fn assign_category_ids_follows_containing_category() {
        let mut menu = Menu {
            categories: vec![MenuCategory {
                id: "cat-1".into(),
                name: "Starters".into(),
                description: String::new(),
                display_order: 1,
                items: vec![item("item-1", "cat-999"), item("item-2", "cat-1")],
            }],
        };
        menu.assign_category_ids();
        assert!(menu.items().all(|i| i.category_id == "cat-1"));
    }
}
