//! Review Model

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use validator::Validate;

/// Platform a review was collected from
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewPlatform {
    Google,
    Yelp,
    OpenTable,
    TripAdvisor,
    Facebook,
    Direct,
}

impl ReviewPlatform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::Yelp => "yelp",
            Self::OpenTable => "opentable",
            Self::TripAdvisor => "tripadvisor",
            Self::Facebook => "facebook",
            Self::Direct => "direct",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    /// Sentiment implied by a star rating when none is supplied
    pub fn from_rating(rating: u8) -> Self {
        match rating {
            4.. => Self::Positive,
            3 => Self::Neutral,
            _ => Self::Negative,
        }
    }
}

/// Owner response attached to a review
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewResponse {
    pub text: String,
    pub responded_at: i64,
    pub author: String,
    #[serde(default)]
    pub ai_generated: bool,
}

/// Review entity (append-only list)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    pub author: String,
    /// 1..=5
    pub rating: u8,
    pub text: String,
    pub platform: ReviewPlatform,
    /// YYYY-MM-DD
    pub date: String,
    pub sentiment: Sentiment,
    pub response: Option<ReviewResponse>,
}

/// Add review payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ReviewCreate {
    #[validate(length(min = 1, max = 200, message = "must be 1-200 characters"))]
    pub author: String,
    pub rating: u8,
    #[serde(default)]
    #[validate(length(max = 5000))]
    pub text: String,
    pub platform: ReviewPlatform,
    /// Defaults to today (UTC)
    pub date: Option<chrono::NaiveDate>,
    pub sentiment: Option<Sentiment>,
}

impl ReviewCreate {
    pub fn into_review(self, id: String) -> Review {
        let date = self
            .date
            .unwrap_or_else(|| chrono::Utc::now().date_naive());
        Review {
            id,
            author: self.author,
            rating: self.rating,
            text: self.text,
            platform: self.platform,
            date: date.format("%Y-%m-%d").to_string(),
            sentiment: self
                .sentiment
                .unwrap_or_else(|| Sentiment::from_rating(self.rating)),
            response: None,
        }
    }
}

/// Respond to review payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ReviewResponseCreate {
    #[validate(length(min = 1, max = 2000, message = "must be 1-2000 characters"))]
    pub text: String,
    pub author: Option<String>,
    #[serde(default)]
    pub ai_generated: bool,
}

impl ReviewResponseCreate {
    pub fn into_response(self, responded_at: i64) -> ReviewResponse {
        ReviewResponse {
            text: self.text,
            responded_at,
            author: self.author.unwrap_or_else(|| "Owner".to_string()),
            ai_generated: self.ai_generated,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlatformStats {
    pub count: usize,
    pub average_rating: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentBreakdown {
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
}

/// Aggregate over the current review list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewSummary {
    pub total_reviews: usize,
    /// Rounded to two decimals, 0.0 when there are no reviews
    pub average_rating: f64,
    /// Star -> count, always holds keys 1..=5
    pub rating_distribution: BTreeMap<u8, usize>,
    pub platform_breakdown: BTreeMap<String, PlatformStats>,
    pub sentiment: SentimentBreakdown,
    pub responded: usize,
    /// Percentage of reviews with an owner response
    pub response_rate: f64,
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

impl ReviewSummary {
    pub fn from_reviews(reviews: &[Review]) -> Self {
        let mut rating_distribution: BTreeMap<u8, usize> = (1..=5).map(|r| (r, 0)).collect();
        let mut platform_sums: BTreeMap<String, (usize, u32)> = BTreeMap::new();
        let mut sentiment = SentimentBreakdown::default();
        let mut rating_sum: u32 = 0;
        let mut responded = 0;

        for review in reviews {
            *rating_distribution.entry(review.rating).or_insert(0) += 1;
            let entry = platform_sums
                .entry(review.platform.as_str().to_string())
                .or_insert((0, 0));
            entry.0 += 1;
            entry.1 += u32::from(review.rating);
            rating_sum += u32::from(review.rating);
            match review.sentiment {
                Sentiment::Positive => sentiment.positive += 1,
                Sentiment::Neutral => sentiment.neutral += 1,
                Sentiment::Negative => sentiment.negative += 1,
            }
            if review.response.is_some() {
                responded += 1;
            }
        }

        let total = reviews.len();
        let average_rating = if total == 0 {
            0.0
        } else {
            round2(f64::from(rating_sum) / total as f64)
        };
        let response_rate = if total == 0 {
            0.0
        } else {
            round2(responded as f64 * 100.0 / total as f64)
        };
        let platform_breakdown = platform_sums
            .into_iter()
            .map(|(platform, (count, sum))| {
                (
                    platform,
                    PlatformStats {
                        count,
                        average_rating: round2(f64::from(sum) / count as f64),
                    },
                )
            })
            .collect();

        Self {
            total_reviews: total,
            average_rating,
            rating_distribution,
            platform_breakdown,
            sentiment,
            responded,
            response_rate,
        }
    }
}
