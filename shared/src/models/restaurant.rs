//! Restaurant Profile Model

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use validator::Validate;

/// Day of week key for operating hours
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];
}

/// Opening window of a single day (HH:MM, local time)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayHours {
    pub open: String,
    pub close: String,
    #[serde(default)]
    pub closed: bool,
}

impl DayHours {
    pub fn open(open: &str, close: &str) -> Self {
        Self {
            open: open.to_string(),
            close: close.to_string(),
            closed: false,
        }
    }

    pub fn closed() -> Self {
        Self {
            open: String::new(),
            close: String::new(),
            closed: true,
        }
    }
}

/// Postal address
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub zip_code: String,
    #[serde(default)]
    pub country: String,
}

/// Brand color triple (hex strings)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandColors {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
}

/// Amenity flags shown on the public profile
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Amenities {
    pub wifi: bool,
    pub parking: bool,
    pub outdoor_seating: bool,
    pub wheelchair_accessible: bool,
    pub reservations: bool,
    pub delivery: bool,
    pub takeout: bool,
    pub private_dining: bool,
}

/// Restaurant profile (singleton, never deleted)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantProfile {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub cuisine_type: String,
    #[serde(default)]
    pub restaurant_type: String,
    /// "$" .. "$$$$"
    #[serde(default)]
    pub price_range: String,

    // -- Contact --
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub address: Address,

    // -- Story --
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub concept: String,
    #[serde(default)]
    pub history: String,
    #[serde(default)]
    pub philosophy: String,

    #[serde(default)]
    pub operating_hours: BTreeMap<Weekday, DayHours>,
    /// Platform -> handle, e.g. "instagram" -> "@trattoria"
    #[serde(default)]
    pub social_media: BTreeMap<String, String>,
    #[serde(default)]
    pub brand_colors: BrandColors,
    #[serde(default)]
    pub amenities: Amenities,

    pub created_at: i64,
    pub updated_at: i64,
}

/// Partial profile update
///
/// Shallow merge: every present field replaces the stored one, nested
/// sub-objects are replaced whole.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct RestaurantUpdate {
    #[validate(length(min = 1, max = 200, message = "must be 1-200 characters"))]
    pub name: Option<String>,
    #[validate(length(max = 200))]
    pub tagline: Option<String>,
    pub cuisine_type: Option<String>,
    pub restaurant_type: Option<String>,
    #[validate(length(max = 4))]
    pub price_range: Option<String>,
    #[validate(email(message = "must be a valid email address"))]
    pub email: Option<String>,
    #[validate(length(max = 100))]
    pub phone: Option<String>,
    #[validate(length(max = 2048))]
    pub website: Option<String>,
    pub address: Option<Address>,
    #[validate(length(max = 5000))]
    pub description: Option<String>,
    #[validate(length(max = 5000))]
    pub concept: Option<String>,
    #[validate(length(max = 5000))]
    pub history: Option<String>,
    #[validate(length(max = 5000))]
    pub philosophy: Option<String>,
    pub operating_hours: Option<BTreeMap<Weekday, DayHours>>,
    pub social_media: Option<BTreeMap<String, String>>,
    pub brand_colors: Option<BrandColors>,
    pub amenities: Option<Amenities>,
}

impl RestaurantProfile {
    /// Shallow-merge `update` into this profile. Does not touch `updated_at`.
    pub fn merge(&mut self, update: RestaurantUpdate) {
        let RestaurantUpdate {
            name,
            tagline,
            cuisine_type,
            restaurant_type,
            price_range,
            email,
            phone,
            website,
            address,
            description,
            concept,
            history,
            philosophy,
            operating_hours,
            social_media,
            brand_colors,
            amenities,
        } = update;

        if let Some(v) = name {
            self.name = v;
        }
        if let Some(v) = tagline {
            self.tagline = v;
        }
        if let Some(v) = cuisine_type {
            self.cuisine_type = v;
        }
        if let Some(v) = restaurant_type {
            self.restaurant_type = v;
        }
        if let Some(v) = price_range {
            self.price_range = v;
        }
        if let Some(v) = email {
            self.email = v;
        }
        if let Some(v) = phone {
            self.phone = v;
        }
        if let Some(v) = website {
            self.website = v;
        }
        if let Some(v) = address {
            self.address = v;
        }
        if let Some(v) = description {
            self.description = v;
        }
        if let Some(v) = concept {
            self.concept = v;
        }
        if let Some(v) = history {
            self.history = v;
        }
        if let Some(v) = philosophy {
            self.philosophy = v;
        }
        if let Some(v) = operating_hours {
            self.operating_hours = v;
        }
        if let Some(v) = social_media {
            self.social_media = v;
        }
        if let Some(v) = brand_colors {
            self.brand_colors = v;
        }
        if let Some(v) = amenities {
            self.amenities = v;
        }
    }
}
