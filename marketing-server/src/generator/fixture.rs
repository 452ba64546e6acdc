//! Deterministic canned payloads
//!
//! Output depends only on the request: no clock, no randomness. Params fill
//! the templates superficially.

use async_trait::async_trait;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde_json::{Value, json};

use shared::error::AppResult;
use shared::models::{ContentType, MenuItem};

use super::{
    ContentGenerator, ContentRequest, GeneratedPayload, capitalize, default_title, param_str,
    param_str_list, param_u64,
};

const DEFAULT_COUNT: u64 = 3;
const MAX_COUNT: u64 = 10;
const COMBO_DISCOUNT_PERCENT: i64 = 15;
const DEFAULT_DISCOUNT_PERCENT: u64 = 15;

const COMBO_NAMES: [&str; 5] = [
    "Date Night Duo",
    "Family Feast",
    "Lunch Express",
    "Chef's Tasting",
    "Weekend Brunch Box",
];

const SEASONAL_DISHES: [(&str, &str, &str); 4] = [
    ("Harvest Risotto", "Arborio rice with roasted squash and sage", "squash"),
    ("Garden Salad", "Young greens, shaved fennel, citrus dressing", "fennel"),
    ("Braised Short Rib", "Slow-braised beef, root vegetable mash", "root vegetables"),
    ("Berry Tart", "Buttery crust, vanilla cream, fresh berries", "berries"),
];

const PROMOTION_TEMPLATES: [(&str, &str); 3] = [
    ("Happy Hour", "Weekdays 4-6pm on small plates and drinks"),
    ("Midweek Special", "Every Wednesday on mains for dine-in guests"),
    ("Loyalty Reward", "For returning guests with 5+ visits"),
];

#[derive(Debug, Clone, Default)]
pub struct FixtureGenerator;

impl FixtureGenerator {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ContentGenerator for FixtureGenerator {
    fn name(&self) -> &'static str {
        "fixture"
    }

    async fn generate(&self, request: &ContentRequest) -> AppResult<GeneratedPayload> {
        let content_data = match request.content_type {
            ContentType::Combos => combos(request),
            ContentType::SeasonalMenu => seasonal_menu(request),
            ContentType::ItemDescriptions => item_descriptions(request),
            ContentType::SocialPosts => social_posts(request),
            ContentType::Promotions => promotions(request),
        };
        Ok(GeneratedPayload {
            title: default_title(request.content_type, &request.params),
            content_data,
        })
    }
}

fn count(params: &Value) -> usize {
    param_u64(params, "count")
        .unwrap_or(DEFAULT_COUNT)
        .clamp(1, MAX_COUNT) as usize
}

fn money(value: Decimal) -> Value {
    json!(value.round_dp(2).to_f64().unwrap_or_default())
}

/// Requested item names, falling back to the first items of the menu
///
/// A requested list is cut to `count` when given, otherwise to `MAX_COUNT`.
fn item_names(request: &ContentRequest, limit: usize) -> Vec<String> {
    let requested = param_str_list(&request.params, "items");
    if !requested.is_empty() {
        let cap = match param_u64(&request.params, "count") {
            Some(_) => limit,
            None => MAX_COUNT as usize,
        };
        return requested.into_iter().take(cap).collect();
    }
    request
        .menu_items
        .iter()
        .take(limit)
        .map(|i| i.name.clone())
        .collect()
}

fn combos(request: &ContentRequest) -> Value {
    let available: Vec<&MenuItem> = request
        .menu_items
        .iter()
        .filter(|i| i.is_available)
        .collect();

    let combos: Vec<Value> = (0..count(&request.params))
        .map(|n| {
            let name = COMBO_NAMES[n % COMBO_NAMES.len()];
            let picked: Vec<&MenuItem> = if available.is_empty() {
                Vec::new()
            } else {
                (0..2).map(|k| available[(n * 2 + k) % available.len()]).collect()
            };
            let full: Decimal = picked.iter().map(|i| i.price).sum();
            let price = full * Decimal::new(100 - COMBO_DISCOUNT_PERCENT, 2);
            json!({
                "name": name,
                "items": picked.iter().map(|i| i.name.as_str()).collect::<Vec<_>>(),
                "price": money(price),
                "savings": money(full - price.round_dp(2)),
                "description": format!(
                    "{} pairing from {}",
                    name, request.restaurant_name
                ),
            })
        })
        .collect();

    json!({ "combos": combos })
}

fn seasonal_menu(request: &ContentRequest) -> Value {
    let season = param_str(&request.params, "season").unwrap_or("spring");
    let items: Vec<Value> = SEASONAL_DISHES
        .iter()
        .cycle()
        .take(count(&request.params))
        .enumerate()
        .map(|(n, (name, description, ingredient))| {
            json!({
                "name": format!("{} {}", capitalize(season), name),
                "description": description,
                "price": money(Decimal::new(1400 + 200 * n as i64, 2)),
                "ingredients": [ingredient],
            })
        })
        .collect();

    json!({
        "season": season,
        "cuisine": request.cuisine_type,
        "items": items,
    })
}

fn item_descriptions(request: &ContentRequest) -> Value {
    let descriptions: Vec<Value> = item_names(request, count(&request.params))
        .into_iter()
        .map(|name| {
            let original = request
                .menu_items
                .iter()
                .find(|i| i.name == name)
                .map(|i| i.description.clone())
                .unwrap_or_default();
            json!({
                "item": name,
                "original": original,
                "enhanced": format!(
                    "{name}, prepared the {} way at {}: a house favourite made from scratch every day.",
                    request.cuisine_type, request.restaurant_name
                ),
            })
        })
        .collect();

    json!({ "descriptions": descriptions })
}

fn social_posts(request: &ContentRequest) -> Value {
    let platform = param_str(&request.params, "platform").unwrap_or("instagram");
    let theme = param_str(&request.params, "theme").unwrap_or("weekend");
    let tag = request
        .restaurant_name
        .chars()
        .filter(|c| c.is_alphanumeric())
        .collect::<String>();
    let times = ["11:30", "17:00", "19:30"];

    let posts: Vec<Value> = item_names(request, count(&request.params))
        .into_iter()
        .enumerate()
        .map(|(n, item)| {
            json!({
                "caption": format!("This {theme}, treat yourself to our {item} at {}.", request.restaurant_name),
                "hashtags": [format!("#{tag}"), format!("#{}", theme.replace(' ', "")), "#foodie"],
                "best_time": times[n % times.len()],
            })
        })
        .collect();

    json!({ "platform": platform, "theme": theme, "posts": posts })
}

fn promotions(request: &ContentRequest) -> Value {
    let discount = param_u64(&request.params, "discount_percent")
        .unwrap_or(DEFAULT_DISCOUNT_PERCENT)
        .min(100);
    let promotions: Vec<Value> = PROMOTION_TEMPLATES
        .iter()
        .cycle()
        .take(count(&request.params))
        .enumerate()
        .map(|(n, (title, description))| {
            json!({
                "title": title,
                "description": description,
                "discount_percent": discount,
                "code": format!("{}{}", title.split_whitespace().map(|w| &w[..1]).collect::<String>(), discount + n as u64),
            })
        })
        .collect();

    json!({ "promotions": promotions })
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::MenuItemCreate;

    fn request(content_type: ContentType, params: Value) -> ContentRequest {
        ContentRequest {
            content_type,
            params,
            restaurant_name: "Bella Vista".into(),
            cuisine_type: "Italian".into(),
            menu_items: vec![
                MenuItemCreate::new("Burrata", Decimal::new(1400, 2))
                    .into_item("item-1".into(), "cat-1"),
                MenuItemCreate::new("Cacio e Pepe", Decimal::new(1800, 2))
                    .into_item("item-2".into(), "cat-2"),
            ],
        }
    }

    #[tokio::test]
    async fn combos_are_deterministic() {
        let generator = FixtureGenerator::new();
        let req = request(ContentType::Combos, json!({}));
        let a = generator.generate(&req).await.unwrap();
        let b = generator.generate(&req).await.unwrap();
        assert_eq!(a, b);

        let combos = a.content_data["combos"].as_array().unwrap();
        assert_eq!(combos.len(), 3);
        // 14.00 + 18.00 at 15% off
        let price = combos[0]["price"].as_f64().unwrap();
        let savings = combos[0]["savings"].as_f64().unwrap();
        assert!((price - 27.2).abs() < 1e-9);
        assert!((savings - 4.8).abs() < 1e-9);
        assert_eq!(a.title, "Combo Suggestions");
    }

    #[tokio::test]
    async fn combos_with_empty_menu_have_no_items() {
        let mut req = request(ContentType::Combos, json!({"count": 1}));
        req.menu_items.clear();
        let payload = FixtureGenerator::new().generate(&req).await.unwrap();
        let combo = &payload.content_data["combos"][0];
        assert_eq!(combo["items"], json!([]));
        assert_eq!(combo["price"].as_f64(), Some(0.0));
    }

    #[tokio::test]
    async fn count_is_clamped() {
        let payload = FixtureGenerator::new()
            .generate(&request(ContentType::SeasonalMenu, json!({"count": 99, "season": "winter"})))
            .await
            .unwrap();
        assert_eq!(payload.content_data["items"].as_array().unwrap().len(), 10);
        assert_eq!(payload.content_data["season"], "winter");
        assert_eq!(payload.title, "Winter Menu");
    }

    #[tokio::test]
    async fn descriptions_prefer_requested_items() {
        let payload = FixtureGenerator::new()
            .generate(&request(
                ContentType::ItemDescriptions,
                json!({"items": ["Tiramisù"]}),
            ))
            .await
            .unwrap();
        let descriptions = payload.content_data["descriptions"].as_array().unwrap();
        assert_eq!(descriptions.len(), 1);
        assert_eq!(descriptions[0]["item"], "Tiramisù");
        assert_eq!(descriptions[0]["original"], "");
    }

    #[tokio::test]
    async fn social_posts_and_promotions_read_params() {
        let generator = FixtureGenerator::new();
        let posts = generator
            .generate(&request(
                ContentType::SocialPosts,
                json!({"platform": "facebook", "theme": "date night"}),
            ))
            .await
            .unwrap();
        assert_eq!(posts.content_data["platform"], "facebook");
        assert_eq!(posts.content_data["posts"][0]["hashtags"][1], "#datenight");

        let promos = generator
            .generate(&request(
                ContentType::Promotions,
                json!({"discount_percent": 20, "count": 2}),
            ))
            .await
            .unwrap();
        let list = promos.content_data["promotions"].as_array().unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0]["discount_percent"], 20);
        assert_eq!(list[0]["code"], "HH20");
    }

    #[tokio::test]
    async fn requested_items_are_capped() {
        let many: Vec<String> = (0..25).map(|n| format!("Dish {n}")).collect();
        let generator = FixtureGenerator::new();

        let posts = generator
            .generate(&request(ContentType::SocialPosts, json!({"items": &many})))
            .await
            .unwrap();
        assert_eq!(posts.content_data["posts"].as_array().unwrap().len(), 10);

        let descriptions = generator
            .generate(&request(
                ContentType::ItemDescriptions,
                json!({"items": &many, "count": 2}),
            ))
            .await
            .unwrap();
        let list = descriptions.content_data["descriptions"].as_array().unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[1]["item"], "Dish 1");
    }
}
