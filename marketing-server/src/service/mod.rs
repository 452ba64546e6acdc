//! Marketing facade
//!
//! [`MarketingService`] exposes the REST-shaped async operations the
//! dashboard calls. Each call validates its input, waits out the simulated
//! network latency, then reads or mutates the [`AppStore`].

mod latency;

pub use latency::{jittered, simulate};

use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use validator::Validate;

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{
    Analytics, Campaign, CampaignCreate, ContentType, Customer, CustomerAnalytics,
    CustomerCreate, GeneratedContent, Menu, MenuItem, MenuItemCreate, MenuItemUpdate,
    NewGeneratedContent, RestaurantProfile, RestaurantUpdate, RevenueAnalytics, Review,
    ReviewCreate, ReviewResponseCreate, ReviewSummary,
};
use shared::util::now_millis;

use crate::core::{Config, LatencyConfig, MissingReferencePolicy};
use crate::generator::{ContentGenerator, ContentRequest, build_generator};
use crate::store::AppStore;

/// `testConnection` payload
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConnectionInfo {
    pub connected: bool,
    pub message: String,
    pub generator: String,
    pub timestamp: i64,
}

/// 营销服务门面
#[derive(Clone)]
pub struct MarketingService {
    store: AppStore,
    generator: Arc<dyn ContentGenerator>,
    latency: LatencyConfig,
    policy: MissingReferencePolicy,
    cancel: CancellationToken,
}

impl std::fmt::Debug for MarketingService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MarketingService")
            .field("generator", &self.generator.name())
            .field("latency", &self.latency)
            .field("policy", &self.policy)
            .finish()
    }
}

impl MarketingService {
    pub fn new(
        store: AppStore,
        generator: Arc<dyn ContentGenerator>,
        latency: LatencyConfig,
        policy: MissingReferencePolicy,
    ) -> Self {
        Self {
            store,
            generator,
            latency,
            policy,
            cancel: CancellationToken::new(),
        }
    }

    /// Wire the facade from configuration
    pub fn from_config(config: &Config, store: AppStore) -> AppResult<Self> {
        Ok(Self::new(
            store,
            build_generator(config)?,
            config.latency,
            config.missing_reference_policy,
        ))
    }

    /// Copy of this facade whose calls fail with `RequestCancelled` once
    /// `token` fires. Shares the same store.
    pub fn with_cancellation(&self, token: CancellationToken) -> Self {
        Self {
            cancel: token,
            ..self.clone()
        }
    }

    pub fn store(&self) -> &AppStore {
        &self.store
    }

    async fn api_delay(&self) -> AppResult<()> {
        simulate(jittered(self.latency.api, self.latency.jitter), &self.cancel).await
    }

    async fn generation_delay(&self) -> AppResult<()> {
        simulate(
            jittered(self.latency.generation, self.latency.jitter),
            &self.cancel,
        )
        .await
    }

    // =========================================================================
    // Connection
    // =========================================================================

    pub async fn test_connection(&self) -> AppResult<ConnectionInfo> {
        self.api_delay().await?;
        Ok(ConnectionInfo {
            connected: true,
            message: "Connected to marketing data service".to_string(),
            generator: self.generator.name().to_string(),
            timestamp: now_millis(),
        })
    }

    // =========================================================================
    // Restaurant profile
    // =========================================================================

    /// `user_id` identifies the caller only; there is a single profile
    pub async fn get_restaurant_profile(&self, user_id: &str) -> AppResult<RestaurantProfile> {
        tracing::debug!(user_id = %user_id, "Fetching restaurant profile");
        self.api_delay().await?;
        Ok(self.store.restaurant())
    }

    pub async fn update_restaurant_profile(
        &self,
        user_id: &str,
        update: RestaurantUpdate,
    ) -> AppResult<RestaurantProfile> {
        update.validate()?;
        self.api_delay().await?;
        let profile = self.store.update_restaurant(update);
        tracing::info!(user_id = %user_id, restaurant = %profile.id, "Restaurant profile updated");
        Ok(profile)
    }

    // =========================================================================
    // Menu
    // =========================================================================

    pub async fn get_menu_data(&self) -> AppResult<Menu> {
        self.api_delay().await?;
        Ok(self.store.menu())
    }

    /// Replace the whole menu after checking ids and every category and item
    /// with the single-item rules
    ///
    /// Each item's `category_id` is reset to the category that contains it.
    pub async fn save_menu_data(&self, mut menu: Menu) -> AppResult<Menu> {
        validate_menu(&menu)?;
        menu.assign_category_ids();
        self.api_delay().await?;
        let saved = self.store.replace_menu(menu);
        tracing::info!(
            categories = saved.categories.len(),
            items = saved.items().count(),
            "Menu saved"
        );
        Ok(saved)
    }

    pub async fn get_menu_items(&self, category_id: Option<&str>) -> AppResult<Vec<MenuItem>> {
        self.api_delay().await?;
        Ok(self.store.menu_items(category_id))
    }

    /// Add an item under `category_id`
    ///
    /// `Ok(None)` when the category is missing and the policy is `ignore`;
    /// nothing is stored.
    pub async fn create_menu_item(
        &self,
        category_id: &str,
        item: MenuItemCreate,
    ) -> AppResult<Option<MenuItem>> {
        item.validate()?;
        check_price(item.price)?;
        self.api_delay().await?;

        match self.store.add_menu_item(category_id, item) {
            Some(created) => {
                tracing::info!(item = %created.id, category = %category_id, "Menu item created");
                Ok(Some(created))
            }
            None => match self.policy {
                MissingReferencePolicy::Ignore => {
                    tracing::warn!(category = %category_id, "Category not found, menu item not stored");
                    Ok(None)
                }
                MissingReferencePolicy::Reject => {
                    Err(AppError::missing(ErrorCode::CategoryNotFound, category_id))
                }
            },
        }
    }

    /// Merge `update` into the first item with `item_id`
    ///
    /// `Ok(None)` when the item is missing and the policy is `ignore`.
    pub async fn update_menu_item(
        &self,
        item_id: &str,
        update: MenuItemUpdate,
    ) -> AppResult<Option<MenuItem>> {
        update.validate()?;
        if let Some(price) = update.price {
            check_price(price)?;
        }
        self.api_delay().await?;

        match self.store.update_menu_item(item_id, update) {
            Some(updated) => {
                tracing::info!(item = %updated.id, "Menu item updated");
                Ok(Some(updated))
            }
            None => match self.policy {
                MissingReferencePolicy::Ignore => {
                    tracing::warn!(item = %item_id, "Menu item not found, update ignored");
                    Ok(None)
                }
                MissingReferencePolicy::Reject => {
                    Err(AppError::missing(ErrorCode::MenuItemNotFound, item_id))
                }
            },
        }
    }

    // =========================================================================
    // Customers
    // =========================================================================

    pub async fn get_customers(&self) -> AppResult<Vec<Customer>> {
        self.api_delay().await?;
        Ok(self.store.customers())
    }

    pub async fn get_customer_by_id(&self, id: &str) -> AppResult<Customer> {
        self.api_delay().await?;
        self.store
            .customer(id)
            .ok_or_else(|| AppError::missing(ErrorCode::CustomerNotFound, id))
    }

    pub async fn create_customer(&self, data: CustomerCreate) -> AppResult<Customer> {
        data.validate()?;
        self.api_delay().await?;
        let customer = self.store.add_customer(data);
        tracing::info!(customer = %customer.id, "Customer created");
        Ok(customer)
    }

    // =========================================================================
    // Reviews
    // =========================================================================

    pub async fn get_reviews(&self) -> AppResult<Vec<Review>> {
        self.api_delay().await?;
        Ok(self.store.reviews())
    }

    /// Computed from the current review list on every call
    pub async fn get_review_summary(&self) -> AppResult<ReviewSummary> {
        self.api_delay().await?;
        Ok(ReviewSummary::from_reviews(&self.store.reviews()))
    }

    pub async fn add_review(&self, data: ReviewCreate) -> AppResult<Review> {
        data.validate()?;
        if !(1..=5).contains(&data.rating) {
            return Err(AppError::new(ErrorCode::ReviewInvalidRating)
                .with_detail("rating", data.rating));
        }
        self.api_delay().await?;
        let review = self.store.add_review(data);
        tracing::info!(review = %review.id, rating = review.rating, "Review added");
        Ok(review)
    }

    pub async fn respond_to_review(
        &self,
        review_id: &str,
        response: ReviewResponseCreate,
    ) -> AppResult<Review> {
        response.validate()?;
        self.api_delay().await?;
        let review = self
            .store
            .respond_to_review(review_id, response)
            .ok_or_else(|| AppError::missing(ErrorCode::ReviewNotFound, review_id))?;
        tracing::info!(review = %review.id, "Review response saved");
        Ok(review)
    }

    // =========================================================================
    // Campaigns
    // =========================================================================

    pub async fn get_campaigns(&self) -> AppResult<Vec<Campaign>> {
        self.api_delay().await?;
        Ok(self.store.campaigns())
    }

    pub async fn create_campaign(&self, data: CampaignCreate) -> AppResult<Campaign> {
        data.validate()?;
        if data.budget < Decimal::ZERO {
            return Err(
                AppError::with_message(ErrorCode::ValueOutOfRange, "Budget must not be negative")
                    .with_detail("field", "budget"),
            );
        }
        if data.end_date < data.start_date {
            return Err(AppError::new(ErrorCode::CampaignInvalidDateRange)
                .with_detail("start_date", data.start_date.to_string())
                .with_detail("end_date", data.end_date.to_string()));
        }
        self.api_delay().await?;
        let campaign = self.store.add_campaign(data);
        tracing::info!(campaign = %campaign.id, "Campaign created");
        Ok(campaign)
    }

    // =========================================================================
    // Analytics (static snapshot)
    // =========================================================================

    pub async fn get_analytics(&self) -> AppResult<Analytics> {
        self.api_delay().await?;
        Ok(self.store.analytics())
    }

    pub async fn get_customer_analytics(&self) -> AppResult<CustomerAnalytics> {
        self.api_delay().await?;
        Ok(self.store.analytics().customers)
    }

    pub async fn get_revenue_analytics(&self) -> AppResult<RevenueAnalytics> {
        self.api_delay().await?;
        Ok(self.store.analytics().revenue)
    }

    // =========================================================================
    // Generated content
    // =========================================================================

    /// Generate content of `content_type` and persist it
    ///
    /// `params` must be a JSON object or null. Nothing is stored when the
    /// generator fails or the call is cancelled.
    pub async fn generate_content(
        &self,
        content_type: &str,
        params: Value,
    ) -> AppResult<GeneratedContent> {
        let content_type: ContentType = content_type.parse()?;
        let params = match params {
            Value::Null => Value::Object(Default::default()),
            Value::Object(_) => params,
            _ => return Err(AppError::invalid_request("params must be a JSON object")),
        };
        self.generation_delay().await?;

        let profile = self.store.restaurant();
        let request = ContentRequest {
            content_type,
            params,
            restaurant_name: profile.name,
            cuisine_type: profile.cuisine_type,
            menu_items: self.store.menu_items(None),
        };

        let result = tokio::select! {
            _ = self.cancel.cancelled() => return Err(AppError::cancelled()),
            result = self.generator.generate(&request) => result,
        };
        let payload = result.inspect_err(|e| {
            tracing::warn!(content_type = %content_type, error = %e, "Content generation failed");
        })?;

        let content = self.store.add_generated_content(NewGeneratedContent {
            title: payload.title,
            content_type,
            generator: self.generator.name().to_string(),
            params: request.params,
            content_data: payload.content_data,
        });
        tracing::info!(
            content = %content.id,
            content_type = %content_type,
            generator = %content.generator,
            "Content generated"
        );
        Ok(content)
    }

    pub async fn get_generated_content(&self) -> AppResult<Vec<GeneratedContent>> {
        self.api_delay().await?;
        Ok(self.store.generated_content())
    }

    pub async fn apply_generated_content(&self, id: &str) -> AppResult<GeneratedContent> {
        self.api_delay().await?;
        let content = self
            .store
            .mark_content_applied(id)
            .ok_or_else(|| AppError::missing(ErrorCode::ContentNotFound, id))?;
        tracing::info!(content = %content.id, "Generated content applied");
        Ok(content)
    }
}

fn check_price(price: Decimal) -> AppResult<()> {
    if price < Decimal::ZERO {
        return Err(AppError::new(ErrorCode::MenuItemInvalidPrice)
            .with_detail("price", price.to_string()));
    }
    Ok(())
}

fn validate_menu(menu: &Menu) -> AppResult<()> {
    if let Some(id) = menu.first_duplicate_id() {
        return Err(AppError::new(ErrorCode::MenuDuplicateId).with_detail("id", id));
    }
    for category in &menu.categories {
        if category.name.trim().is_empty() {
            return Err(AppError::validation("Category name must not be empty")
                .with_detail("id", category.id.as_str()));
        }
        category
            .validate()
            .map_err(|e| AppError::from(e).with_detail("id", category.id.as_str()))?;
        for item in &category.items {
            if item.name.trim().is_empty() {
                return Err(AppError::validation("Item name must not be empty")
                    .with_detail("id", item.id.as_str()));
            }
            item.validate()
                .map_err(|e| AppError::from(e).with_detail("id", item.id.as_str()))?;
            check_price(item.price)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::FixtureGenerator;
    use crate::store::Resource;
    use serde_json::json;
    use shared::models::{CampaignType, ContentStatus, ReviewPlatform};

    fn service(policy: MissingReferencePolicy) -> MarketingService {
        MarketingService::new(
            AppStore::seeded(),
            Arc::new(FixtureGenerator::new()),
            LatencyConfig::none(),
            policy,
        )
    }

    fn review(rating: u8) -> ReviewCreate {
        ReviewCreate {
            author: "Sam".into(),
            rating,
            text: "Lovely".into(),
            platform: ReviewPlatform::Google,
            date: None,
            sentiment: None,
        }
    }

    fn campaign(start: (u32, u32), end: (u32, u32)) -> CampaignCreate {
        CampaignCreate {
            name: "Summer".into(),
            campaign_type: CampaignType::Social,
            status: None,
            budget: Decimal::new(1000, 0),
            start_date: chrono::NaiveDate::from_ymd_opt(2024, start.0, start.1).unwrap(),
            end_date: chrono::NaiveDate::from_ymd_opt(2024, end.0, end.1).unwrap(),
            channels: vec![],
            target_segment: None,
        }
    }

    #[tokio::test]
    async fn profile_update_is_visible_to_later_reads() {
        let svc = service(MissingReferencePolicy::Ignore);
        svc.update_restaurant_profile(
            "u1",
            RestaurantUpdate {
                name: Some("New Name".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        let profile = svc.get_restaurant_profile("u1").await.unwrap();
        assert_eq!(profile.name, "New Name");
    }

    #[tokio::test]
    async fn invalid_profile_update_is_rejected() {
        let svc = service(MissingReferencePolicy::Ignore);
        let err = svc
            .update_restaurant_profile(
                "u1",
                RestaurantUpdate {
                    name: Some(String::new()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(svc.store().version(Resource::Restaurant), 0);
    }

    #[tokio::test]
    async fn created_menu_item_is_listed() {
        let svc = service(MissingReferencePolicy::Ignore);
        let payload: MenuItemCreate =
            serde_json::from_value(json!({"name": "Test Item", "price": 9.99})).unwrap();
        let created = svc.create_menu_item("cat-1", payload).await.unwrap().unwrap();

        let items = svc.get_menu_items(Some("cat-1")).await.unwrap();
        let found = items.iter().find(|i| i.id == created.id).unwrap();
        assert_eq!(found.name, "Test Item");
        assert_eq!(found.price, Decimal::new(999, 2));
    }

    #[tokio::test]
    async fn missing_category_follows_policy() {
        let lenient = service(MissingReferencePolicy::Ignore);
        let before = lenient.get_menu_data().await.unwrap();
        let item = lenient
            .create_menu_item("cat-404", MenuItemCreate::new("Ghost", Decimal::ONE))
            .await
            .unwrap();
        assert!(item.is_none());
        assert_eq!(lenient.get_menu_data().await.unwrap(), before);
        assert_eq!(lenient.store().version(Resource::Menu), 0);

        let strict = service(MissingReferencePolicy::Reject);
        let err = strict
            .create_menu_item("cat-404", MenuItemCreate::new("Ghost", Decimal::ONE))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::CategoryNotFound);
    }

    #[tokio::test]
    async fn missing_item_follows_policy() {
        let lenient = service(MissingReferencePolicy::Ignore);
        let result = lenient
            .update_menu_item("item-404", MenuItemUpdate::default())
            .await
            .unwrap();
        assert!(result.is_none());

        let strict = service(MissingReferencePolicy::Reject);
        let err = strict
            .update_menu_item("item-404", MenuItemUpdate::default())
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::MenuItemNotFound);
    }

    #[tokio::test]
    async fn negative_price_is_rejected() {
        let svc = service(MissingReferencePolicy::Ignore);
        let err = svc
            .create_menu_item("cat-1", MenuItemCreate::new("Free Lunch", Decimal::new(-1, 0)))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::MenuItemInvalidPrice);
    }

    #[tokio::test]
    async fn duplicate_menu_ids_conflict() {
        let svc = service(MissingReferencePolicy::Ignore);
        let mut menu = svc.get_menu_data().await.unwrap();
        let copy = menu.categories[0].items[0].clone();
        menu.categories[1].items.push(copy);

        let err = svc.save_menu_data(menu).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::MenuDuplicateId);
        assert_eq!(err.http_status(), http::StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn saved_menu_items_follow_single_item_rules() {
        let svc = service(MissingReferencePolicy::Ignore);
        let before = svc.get_menu_data().await.unwrap();

        let mut menu = before.clone();
        menu.categories[0].items[0].spice_level = 9;
        let err = svc.save_menu_data(menu).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        let details = err.details.unwrap();
        assert_eq!(details["id"], "item-1");
        assert!(details.contains_key("spice_level"));

        let mut menu = before.clone();
        menu.categories[0].items[0].description = "x".repeat(501);
        assert!(svc.save_menu_data(menu).await.is_err());

        assert_eq!(svc.get_menu_data().await.unwrap(), before);
        assert_eq!(svc.store().version(Resource::Menu), 0);
    }

    #[tokio::test]
    async fn saved_menu_items_take_their_category_id() {
        let svc = service(MissingReferencePolicy::Ignore);
        let mut menu = svc.get_menu_data().await.unwrap();
        menu.categories[0].items[0].category_id = "cat-999".into();

        let saved = svc.save_menu_data(menu).await.unwrap();
        assert_eq!(saved.categories[0].items[0].category_id, "cat-1");

        let items = svc.get_menu_items(Some("cat-1")).await.unwrap();
        assert!(items.iter().any(|i| i.id == "item-1"));
        assert!(svc.get_menu_items(Some("cat-999")).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn unknown_customer_is_not_found() {
        let svc = service(MissingReferencePolicy::Ignore);
        let err = svc.get_customer_by_id("nonexistent").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::CustomerNotFound);
        assert_eq!(err.message, "Customer not found");
        assert!(svc.get_customer_by_id("cust-1").await.is_ok());
    }

    #[tokio::test]
    async fn review_rating_must_be_one_to_five() {
        let svc = service(MissingReferencePolicy::Ignore);
        for rating in [0, 6] {
            let err = svc.add_review(review(rating)).await.unwrap_err();
            assert_eq!(err.code, ErrorCode::ReviewInvalidRating);
        }
        let before = svc.get_review_summary().await.unwrap();
        svc.add_review(review(5)).await.unwrap();
        let after = svc.get_review_summary().await.unwrap();
        assert_eq!(after.total_reviews, before.total_reviews + 1);
        assert_eq!(after.rating_distribution[&5u8], before.rating_distribution[&5u8] + 1);
    }

    #[tokio::test]
    async fn responding_to_unknown_review_fails() {
        let svc = service(MissingReferencePolicy::Ignore);
        let err = svc
            .respond_to_review(
                "review-404",
                ReviewResponseCreate {
                    text: "Thanks".into(),
                    author: None,
                    ai_generated: false,
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ReviewNotFound);
    }

    #[tokio::test]
    async fn campaign_dates_must_be_ordered() {
        let svc = service(MissingReferencePolicy::Ignore);
        let err = svc
            .create_campaign(campaign((6, 30), (6, 1)))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::CampaignInvalidDateRange);

        let mut negative = campaign((6, 1), (6, 30));
        negative.budget = Decimal::new(-5, 0);
        let err = svc.create_campaign(negative).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);

        let count = svc.get_campaigns().await.unwrap().len();
        svc.create_campaign(campaign((6, 1), (6, 1))).await.unwrap();
        assert_eq!(svc.get_campaigns().await.unwrap().len(), count + 1);
    }

    #[tokio::test]
    async fn analytics_is_a_static_snapshot() {
        let svc = service(MissingReferencePolicy::Ignore);
        let before = svc.get_analytics().await.unwrap();
        svc.create_customer(CustomerCreate {
            name: "Ada".into(),
            ..Default::default()
        })
        .await
        .unwrap();
        assert_eq!(svc.get_analytics().await.unwrap(), before);
        assert_eq!(svc.get_customer_analytics().await.unwrap(), before.customers);
        assert_eq!(svc.get_revenue_analytics().await.unwrap(), before.revenue);
    }

    #[tokio::test]
    async fn generated_combos_are_persisted_and_deterministic() {
        let svc = service(MissingReferencePolicy::Ignore);
        let first = svc.generate_content("combos", json!({})).await.unwrap();
        let second = svc.generate_content("combos", Value::Null).await.unwrap();
        assert_eq!(first.content_data, second.content_data);
        assert_ne!(first.id, second.id);
        assert_eq!(first.generator, "fixture");

        let listed = svc.get_generated_content().await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0], first);

        let applied = svc.apply_generated_content(&first.id).await.unwrap();
        assert_eq!(applied.status, ContentStatus::Applied);
        let err = svc.apply_generated_content("content-404").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ContentNotFound);
    }

    #[tokio::test]
    async fn generate_rejects_bad_input() {
        let svc = service(MissingReferencePolicy::Ignore);
        let err = svc.generate_content("haiku", json!({})).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::UnsupportedContentType);

        let err = svc.generate_content("combos", json!([1])).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidRequest);
        assert!(svc.get_generated_content().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn cancelled_calls_do_not_mutate() {
        let svc = service(MissingReferencePolicy::Ignore);
        let token = CancellationToken::new();
        let cancellable = svc.with_cancellation(token.clone());
        token.cancel();

        let err = cancellable
            .create_customer(CustomerCreate {
                name: "Late".into(),
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::RequestCancelled);

        let err = cancellable
            .generate_content("promotions", json!({}))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::RequestCancelled);

        assert_eq!(svc.store().version(Resource::Customer), 0);
        assert_eq!(svc.store().version(Resource::GeneratedContent), 0);
        // The original facade is unaffected
        assert!(svc.test_connection().await.unwrap().connected);
    }
}
