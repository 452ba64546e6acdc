//! Seed data loaded into a fresh store

use rust_decimal::Decimal;
use std::collections::BTreeMap;

use shared::models::{
    Address, Amenities, Analytics, BrandColors, Campaign, CampaignMetrics, CampaignStatus,
    CampaignType, ChannelRevenue, Customer, CustomerAnalytics, CustomerBehavior, CustomerMetrics,
    CustomerPreferences, CustomerStatus, DayHours, Demographics, ItemPerformance, Menu,
    MenuCategory, MenuItem, MenuPerformance, MonthlyRevenue, Nutrition, RatingTrend,
    RestaurantProfile, RevenueAnalytics, Review, ReviewAnalytics, ReviewPlatform,
    ReviewResponse, SegmentShare, Sentiment, Weekday,
};

use super::StoreData;

/// 2024-01-01T00:00:00Z
pub const SEED_TIMESTAMP: i64 = 1_704_067_200_000;

fn money(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

fn date(s: &str) -> chrono::NaiveDate {
    chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap_or_default()
}

pub fn seed_data() -> StoreData {
    StoreData {
        restaurant: restaurant(),
        menu: menu(),
        customers: customers(),
        reviews: reviews(),
        campaigns: campaigns(),
        analytics: analytics(),
        generated_content: Vec::new(),
    }
}

fn restaurant() -> RestaurantProfile {
    let mut hours = BTreeMap::new();
    for day in Weekday::ALL {
        let window = match day {
            Weekday::Monday => DayHours::closed(),
            Weekday::Friday | Weekday::Saturday => DayHours::open("11:30", "23:00"),
            Weekday::Sunday => DayHours::open("10:00", "21:00"),
            _ => DayHours::open("11:30", "22:00"),
        };
        hours.insert(day, window);
    }

    RestaurantProfile {
        id: "restaurant-1".into(),
        name: "Bella Vista Trattoria".into(),
        tagline: "Handmade pasta, wood-fired everything".into(),
        cuisine_type: "Italian".into(),
        restaurant_type: "Casual Dining".into(),
        price_range: "$$".into(),
        email: "hello@bellavista.example".into(),
        phone: "+1 555 0142".into(),
        website: "https://bellavista.example".into(),
        address: Address {
            street: "214 Market Street".into(),
            city: "San Francisco".into(),
            state: "CA".into(),
            zip_code: "94105".into(),
            country: "USA".into(),
        },
        description: "A neighbourhood trattoria serving regional Italian dishes.".into(),
        concept: "Seasonal produce, fresh pasta made every morning.".into(),
        history: "Opened in 2012 by the Rossi family.".into(),
        philosophy: "Simple food, honest ingredients, long tables.".into(),
        operating_hours: hours,
        social_media: BTreeMap::from([
            ("instagram".to_string(), "@bellavista_sf".to_string()),
            ("facebook".to_string(), "bellavistasf".to_string()),
        ]),
        brand_colors: BrandColors {
            primary: "#8B1E3F".into(),
            secondary: "#F4E9D8".into(),
            accent: "#3C6E47".into(),
        },
        amenities: Amenities {
            wifi: true,
            parking: false,
            outdoor_seating: true,
            wheelchair_accessible: true,
            reservations: true,
            delivery: true,
            takeout: true,
            private_dining: true,
        },
        created_at: SEED_TIMESTAMP,
        updated_at: SEED_TIMESTAMP,
    }
}

#[allow(clippy::too_many_arguments)]
fn item(
    id: &str,
    category_id: &str,
    name: &str,
    description: &str,
    cents: i64,
    dietary: &[&str],
    spice_level: u8,
    calories: u32,
) -> MenuItem {
    MenuItem {
        id: id.into(),
        category_id: category_id.into(),
        name: name.into(),
        description: description.into(),
        price: money(cents),
        is_available: true,
        dietary_tags: dietary.iter().map(|d| d.to_string()).collect(),
        spice_level,
        nutrition: Nutrition {
            calories: Some(calories),
            ..Default::default()
        },
        image_url: None,
    }
}

fn menu() -> Menu {
    Menu {
        categories: vec![
            MenuCategory {
                id: "cat-1".into(),
                name: "Antipasti".into(),
                description: "Small plates to share".into(),
                display_order: 1,
                items: vec![
                    item(
                        "item-1",
                        "cat-1",
                        "Bruschetta al Pomodoro",
                        "Grilled bread, heirloom tomato, basil",
                        900,
                        &["vegetarian", "vegan"],
                        0,
                        320,
                    ),
                    item(
                        "item-2",
                        "cat-1",
                        "Burrata",
                        "Creamy burrata, roasted peppers, olive oil",
                        1400,
                        &["vegetarian", "gluten-free"],
                        0,
                        450,
                    ),
                ],
            },
            MenuCategory {
                id: "cat-2".into(),
                name: "Pasta".into(),
                description: "Made fresh every morning".into(),
                display_order: 2,
                items: vec![
                    item(
                        "item-3",
                        "cat-2",
                        "Cacio e Pepe",
                        "Tonnarelli, pecorino romano, black pepper",
                        1800,
                        &["vegetarian"],
                        1,
                        780,
                    ),
                    item(
                        "item-4",
                        "cat-2",
                        "Spaghetti all'Arrabbiata",
                        "Tomato, garlic, calabrian chili",
                        1650,
                        &["vegan"],
                        3,
                        690,
                    ),
                    item(
                        "item-5",
                        "cat-2",
                        "Tagliatelle al Ragù",
                        "Slow-cooked beef and pork ragù",
                        2200,
                        &[],
                        0,
                        910,
                    ),
                ],
            },
            MenuCategory {
                id: "cat-3".into(),
                name: "Dolci".into(),
                description: "Desserts".into(),
                display_order: 3,
                items: vec![
                    item(
                        "item-6",
                        "cat-3",
                        "Tiramisù",
                        "Mascarpone, espresso, cocoa",
                        1000,
                        &["vegetarian"],
                        0,
                        520,
                    ),
                    item(
                        "item-7",
                        "cat-3",
                        "Affogato",
                        "Vanilla gelato drowned in espresso",
                        800,
                        &["vegetarian", "gluten-free"],
                        0,
                        260,
                    ),
                ],
            },
        ],
    }
}

#[allow(clippy::too_many_arguments)]
fn customer(
    id: &str,
    name: &str,
    email: &str,
    status: CustomerStatus,
    segment: &str,
    visits: u32,
    spent_cents: i64,
    last_visit: &str,
) -> Customer {
    let spent = money(spent_cents);
    let average = if visits == 0 {
        Decimal::ZERO
    } else {
        (spent / Decimal::from(visits)).round_dp(2)
    };
    Customer {
        id: id.into(),
        name: name.into(),
        email: Some(email.into()),
        phone: None,
        demographics: Demographics {
            age_range: Some("25-34".into()),
            location: Some("San Francisco".into()),
            ..Default::default()
        },
        behavior: CustomerBehavior {
            visit_frequency: Some(if visits > 20 { "weekly" } else { "monthly" }.into()),
            preferred_time: Some("dinner".into()),
            average_party_size: Some(2.5),
            favorite_items: vec!["Cacio e Pepe".into()],
            last_visit: Some(last_visit.into()),
        },
        metrics: CustomerMetrics {
            total_visits: visits,
            total_spent: spent,
            average_order_value: average,
            lifetime_value: spent,
            loyalty_points: visits * 10,
        },
        preferences: CustomerPreferences {
            dietary_restrictions: Vec::new(),
            email_opt_in: true,
            sms_opt_in: false,
            preferred_channel: Some("email".into()),
        },
        status,
        segment: segment.into(),
        created_at: SEED_TIMESTAMP,
    }
}

fn customers() -> Vec<Customer> {
    vec![
        customer(
            "cust-1",
            "Maria Gonzalez",
            "maria@example.com",
            CustomerStatus::Active,
            "vip",
            34,
            215_000,
            "2024-05-28",
        ),
        customer(
            "cust-2",
            "James Chen",
            "james@example.com",
            CustomerStatus::Active,
            "regular",
            12,
            64_800,
            "2024-05-20",
        ),
        customer(
            "cust-3",
            "Priya Patel",
            "priya@example.com",
            CustomerStatus::New,
            "new",
            1,
            5_400,
            "2024-05-30",
        ),
        customer(
            "cust-4",
            "Tom Becker",
            "tom@example.com",
            CustomerStatus::Dormant,
            "lapsed",
            6,
            31_200,
            "2023-11-02",
        ),
    ]
}

fn review(
    id: &str,
    author: &str,
    rating: u8,
    text: &str,
    platform: ReviewPlatform,
    date: &str,
    response: Option<&str>,
) -> Review {
    Review {
        id: id.into(),
        author: author.into(),
        rating,
        text: text.into(),
        platform,
        date: date.into(),
        sentiment: Sentiment::from_rating(rating),
        response: response.map(|text| ReviewResponse {
            text: text.into(),
            responded_at: SEED_TIMESTAMP,
            author: "Owner".into(),
            ai_generated: false,
        }),
    }
}

fn reviews() -> Vec<Review> {
    vec![
        review(
            "review-1",
            "Sarah M.",
            5,
            "Best cacio e pepe outside of Rome. Lovely staff.",
            ReviewPlatform::Google,
            "2024-05-25",
            Some("Grazie Sarah! See you soon."),
        ),
        review(
            "review-2",
            "Dave K.",
            4,
            "Great pasta, a little loud on Friday night.",
            ReviewPlatform::Yelp,
            "2024-05-22",
            None,
        ),
        review(
            "review-3",
            "Linda R.",
            2,
            "Waited 40 minutes for our mains.",
            ReviewPlatform::OpenTable,
            "2024-05-18",
            None,
        ),
        review(
            "review-4",
            "Marco P.",
            5,
            "Tiramisù is unreal.",
            ReviewPlatform::TripAdvisor,
            "2024-05-10",
            None,
        ),
        review(
            "review-5",
            "Ana S.",
            3,
            "Good food but the patio was too cold.",
            ReviewPlatform::Google,
            "2024-05-02",
            None,
        ),
    ]
}

fn campaigns() -> Vec<Campaign> {
    vec![
        Campaign {
            id: "campaign-1".into(),
            name: "Spring Pasta Week".into(),
            campaign_type: CampaignType::Social,
            status: CampaignStatus::Active,
            budget: money(150_000),
            spent: money(82_000),
            start_date: date("2024-05-01"),
            end_date: date("2024-06-15"),
            channels: vec!["instagram".into(), "facebook".into()],
            target_segment: Some("regular".into()),
            metrics: CampaignMetrics {
                impressions: 48_200,
                clicks: 1_930,
                conversions: 212,
                ctr: 4.0,
                conversion_rate: 10.98,
                roas: 3.4,
            },
            created_at: SEED_TIMESTAMP,
        },
        Campaign {
            id: "campaign-2".into(),
            name: "VIP Wine Dinner".into(),
            campaign_type: CampaignType::Email,
            status: CampaignStatus::Completed,
            budget: money(40_000),
            spent: money(38_500),
            start_date: date("2024-03-01"),
            end_date: date("2024-03-31"),
            channels: vec!["email".into()],
            target_segment: Some("vip".into()),
            metrics: CampaignMetrics {
                impressions: 1_200,
                clicks: 410,
                conversions: 96,
                ctr: 34.17,
                conversion_rate: 23.41,
                roas: 6.2,
            },
            created_at: SEED_TIMESTAMP,
        },
        Campaign {
            id: "campaign-3".into(),
            name: "Summer Patio Launch".into(),
            campaign_type: CampaignType::Promotion,
            status: CampaignStatus::Draft,
            budget: money(80_000),
            spent: Decimal::ZERO,
            start_date: date("2024-06-21"),
            end_date: date("2024-07-31"),
            channels: vec!["instagram".into(), "email".into(), "sms".into()],
            target_segment: None,
            metrics: CampaignMetrics::default(),
            created_at: SEED_TIMESTAMP,
        },
    ]
}

fn perf(item_id: &str, name: &str, orders: u32, revenue_cents: i64) -> ItemPerformance {
    ItemPerformance {
        item_id: item_id.into(),
        name: name.into(),
        orders,
        revenue: money(revenue_cents),
    }
}

fn analytics() -> Analytics {
    Analytics {
        revenue: RevenueAnalytics {
            total_revenue: money(12_845_000),
            monthly_growth: 8.5,
            average_order_value: money(4_250),
            total_orders: 3_022,
            by_month: vec![
                MonthlyRevenue {
                    month: "2024-03".into(),
                    revenue: money(3_980_000),
                    orders: 951,
                },
                MonthlyRevenue {
                    month: "2024-04".into(),
                    revenue: money(4_210_000),
                    orders: 990,
                },
                MonthlyRevenue {
                    month: "2024-05".into(),
                    revenue: money(4_655_000),
                    orders: 1_081,
                },
            ],
            by_channel: vec![
                ChannelRevenue {
                    channel: "dine-in".into(),
                    revenue: money(8_990_000),
                },
                ChannelRevenue {
                    channel: "takeout".into(),
                    revenue: money(2_310_000),
                },
                ChannelRevenue {
                    channel: "delivery".into(),
                    revenue: money(1_545_000),
                },
            ],
        },
        customers: CustomerAnalytics {
            total_customers: 1_248,
            new_this_month: 86,
            retention_rate: 68.0,
            churn_rate: 7.5,
            average_lifetime_value: money(48_600),
            segments: vec![
                SegmentShare {
                    segment: "vip".into(),
                    count: 112,
                    percentage: 9.0,
                },
                SegmentShare {
                    segment: "regular".into(),
                    count: 654,
                    percentage: 52.4,
                },
                SegmentShare {
                    segment: "new".into(),
                    count: 318,
                    percentage: 25.5,
                },
                SegmentShare {
                    segment: "lapsed".into(),
                    count: 164,
                    percentage: 13.1,
                },
            ],
        },
        menu_performance: MenuPerformance {
            top_items: vec![
                perf("item-3", "Cacio e Pepe", 812, 1_461_600),
                perf("item-5", "Tagliatelle al Ragù", 640, 1_408_000),
                perf("item-6", "Tiramisù", 598, 598_000),
            ],
            low_performers: vec![perf("item-7", "Affogato", 74, 59_200)],
        },
        reviews: ReviewAnalytics {
            average_rating: 4.4,
            total_reviews: 386,
            monthly_trend: vec![
                RatingTrend {
                    month: "2024-03".into(),
                    average_rating: 4.3,
                    count: 118,
                },
                RatingTrend {
                    month: "2024-04".into(),
                    average_rating: 4.4,
                    count: 131,
                },
                RatingTrend {
                    month: "2024-05".into(),
                    average_rating: 4.5,
                    count: 137,
                },
            ],
        },
    }
}
