//! Customer Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Lifecycle status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomerStatus {
    #[default]
    New,
    Active,
    Dormant,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Demographics {
    pub age_range: Option<String>,
    pub gender: Option<String>,
    pub location: Option<String>,
    pub occupation: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomerBehavior {
    /// e.g. "weekly", "monthly"
    pub visit_frequency: Option<String>,
    pub preferred_time: Option<String>,
    pub average_party_size: Option<f64>,
    pub favorite_items: Vec<String>,
    /// YYYY-MM-DD
    pub last_visit: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomerMetrics {
    pub total_visits: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_spent: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub average_order_value: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub lifetime_value: Decimal,
    pub loyalty_points: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomerPreferences {
    pub dietary_restrictions: Vec<String>,
    pub email_opt_in: bool,
    pub sms_opt_in: bool,
    pub preferred_channel: Option<String>,
}

/// Customer entity (append-only list)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    #[serde(default)]
    pub demographics: Demographics,
    #[serde(default)]
    pub behavior: CustomerBehavior,
    #[serde(default)]
    pub metrics: CustomerMetrics,
    #[serde(default)]
    pub preferences: CustomerPreferences,
    #[serde(default)]
    pub status: CustomerStatus,
    /// Marketing segment label, e.g. "vip", "regular"
    #[serde(default)]
    pub segment: String,
    pub created_at: i64,
}

/// Create customer payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CustomerCreate {
    #[validate(length(min = 1, max = 200, message = "must be 1-200 characters"))]
    pub name: String,
    #[validate(email(message = "must be a valid email address"))]
    pub email: Option<String>,
    #[validate(length(max = 100))]
    pub phone: Option<String>,
    #[serde(default)]
    pub demographics: Demographics,
    #[serde(default)]
    pub behavior: CustomerBehavior,
    #[serde(default)]
    pub metrics: CustomerMetrics,
    #[serde(default)]
    pub preferences: CustomerPreferences,
    pub status: Option<CustomerStatus>,
    #[validate(length(max = 100))]
    pub segment: Option<String>,
}

impl CustomerCreate {
    pub fn into_customer(self, id: String, created_at: i64) -> Customer {
        Customer {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            demographics: self.demographics,
            behavior: self.behavior,
            metrics: self.metrics,
            preferences: self.preferences,
            status: self.status.unwrap_or_default(),
            segment: self.segment.unwrap_or_else(|| "new".to_string()),
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_payload_defaults_to_new_segment() {
        let payload: CustomerCreate = serde_json::from_str(r#"{"name": "Ada"}"#).unwrap();
        let customer = payload.into_customer("customer-1".into(), 10);
        assert_eq!(customer.status, CustomerStatus::New);
        assert_eq!(customer.segment, "new");
        assert_eq!(customer.metrics.total_visits, 0);
    }

    #[test]
    fn status_uses_lowercase_tags() {
        let json = serde_json::to_string(&CustomerStatus::Dormant).unwrap();
        assert_eq!(json, "\"dormant\"");
    }

    #[test]
    fn invalid_email_is_rejected() {
        let payload = CustomerCreate {
            name: "Ada".into(),
            email: Some("ada-at-example".into()),
            ..Default::default()
        };
        assert!(payload.validate().is_err());
    }
}
