//! Marketing Campaign Model

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CampaignType {
    Email,
    Sms,
    Social,
    Promotion,
    Loyalty,
    Event,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    Active,
    Completed,
    #[default]
    Draft,
}

/// Delivery metrics. Ratios are percentages, `roas` is a multiplier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CampaignMetrics {
    pub impressions: u64,
    pub clicks: u64,
    pub conversions: u64,
    pub ctr: f64,
    pub conversion_rate: f64,
    pub roas: f64,
}

/// Campaign entity (append-only list)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub campaign_type: CampaignType,
    pub status: CampaignStatus,
    #[serde(with = "rust_decimal::serde::float")]
    pub budget: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub spent: Decimal,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub channels: Vec<String>,
    pub target_segment: Option<String>,
    #[serde(default)]
    pub metrics: CampaignMetrics,
    pub created_at: i64,
}

/// Create campaign payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CampaignCreate {
    #[validate(length(min = 1, max = 200, message = "must be 1-200 characters"))]
    pub name: String,
    #[serde(rename = "type")]
    pub campaign_type: CampaignType,
    pub status: Option<CampaignStatus>,
    #[serde(with = "rust_decimal::serde::float")]
    pub budget: Decimal,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub channels: Vec<String>,
    #[validate(length(max = 100))]
    pub target_segment: Option<String>,
}

impl CampaignCreate {
    /// New campaigns start with nothing spent and zeroed metrics
    pub fn into_campaign(self, id: String, created_at: i64) -> Campaign {
        Campaign {
            id,
            name: self.name,
            campaign_type: self.campaign_type,
            status: self.status.unwrap_or_default(),
            budget: self.budget,
            spent: Decimal::ZERO,
            start_date: self.start_date,
            end_date: self.end_date,
            channels: self.channels,
            target_segment: self.target_segment,
            metrics: CampaignMetrics::default(),
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_uses_type_key() {
        let payload: CampaignCreate = serde_json::from_str(
            r#"{
                "name": "Spring Brunch",
                "type": "email",
                "budget": 250.0,
                "start_date": "2024-03-01",
                "end_date": "2024-03-31",
                "channels": ["email"]
            }"#,
        )
        .unwrap();
        let campaign = payload.into_campaign("campaign-1".into(), 5);
        assert_eq!(campaign.campaign_type, CampaignType::Email);
        assert_eq!(campaign.status, CampaignStatus::Draft);
        assert_eq!(campaign.spent, Decimal::ZERO);

        let json = serde_json::to_value(&campaign).unwrap();
        assert_eq!(json["type"], "email");
        assert_eq!(json["budget"], 250.0);
    }
}
