//! In-memory application state
//!
//! [`AppStore`] is a cheap-to-clone handle over one `RwLock`-guarded
//! [`StoreData`]. Reads hand out clones; every mutation bumps the version of
//! the touched [`Resource`], broadcasts a [`StoreEvent`] and writes an audit
//! line once the lock is released.

mod event;
pub mod seed;
mod versions;

pub use event::{Resource, StoreAction, StoreEvent};
pub use versions::ResourceVersions;

use parking_lot::RwLock;
use std::sync::Arc;
use tokio::sync::broadcast;

use shared::models::{
    Analytics, Campaign, CampaignCreate, ContentStatus, Customer, CustomerCreate,
    GeneratedContent, Menu, MenuItem, MenuItemCreate, MenuItemUpdate, NewGeneratedContent,
    RestaurantProfile, RestaurantUpdate, Review, ReviewCreate, ReviewResponseCreate,
};
use shared::util::{new_id, next_timestamp, now_millis};

const EVENT_CHANNEL_CAPACITY: usize = 256;

/// All entity collections
#[derive(Debug, Clone)]
pub struct StoreData {
    pub restaurant: RestaurantProfile,
    pub menu: Menu,
    pub customers: Vec<Customer>,
    pub reviews: Vec<Review>,
    pub campaigns: Vec<Campaign>,
    /// Static snapshot, never recomputed
    pub analytics: Analytics,
    pub generated_content: Vec<GeneratedContent>,
}

/// Shared store handle
#[derive(Clone)]
pub struct AppStore {
    data: Arc<RwLock<StoreData>>,
    versions: Arc<ResourceVersions>,
    events: broadcast::Sender<StoreEvent>,
}

impl std::fmt::Debug for AppStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let data = self.data.read();
        f.debug_struct("AppStore")
            .field("categories", &data.menu.categories.len())
            .field("customers", &data.customers.len())
            .field("reviews", &data.reviews.len())
            .field("campaigns", &data.campaigns.len())
            .field("generated_content", &data.generated_content.len())
            .finish()
    }
}

impl Default for AppStore {
    fn default() -> Self {
        Self::seeded()
    }
}

impl AppStore {
    pub fn new(data: StoreData) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            data: Arc::new(RwLock::new(data)),
            versions: Arc::new(ResourceVersions::new()),
            events,
        }
    }

    /// Store pre-loaded with the demo restaurant
    pub fn seeded() -> Self {
        Self::new(seed::seed_data())
    }

    // =========================================================================
    // Subscriptions
    // =========================================================================

    /// Receive a [`StoreEvent`] for every subsequent mutation
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }

    /// Current version of a resource, 0 if never mutated
    pub fn version(&self, resource: Resource) -> u64 {
        self.versions.get(resource)
    }

    fn notify(&self, resource: Resource, action: StoreAction, id: Option<String>) {
        let version = self.versions.increment(resource);
        tracing::info!(
            target: "audit",
            resource = %resource,
            action = action.as_str(),
            id = id.as_deref().unwrap_or("-"),
            version,
            "store mutation"
        );
        // No receivers is fine
        let _ = self.events.send(StoreEvent {
            resource,
            action,
            id,
            version,
        });
    }

    // =========================================================================
    // Reads
    // =========================================================================

    pub fn restaurant(&self) -> RestaurantProfile {
        self.data.read().restaurant.clone()
    }

    pub fn menu(&self) -> Menu {
        self.data.read().menu.clone()
    }

    /// Items of one category, or of every category when `category_id` is `None`
    pub fn menu_items(&self, category_id: Option<&str>) -> Vec<MenuItem> {
        let data = self.data.read();
        match category_id {
            Some(id) => data
                .menu
                .categories
                .iter()
                .filter(|c| c.id == id)
                .flat_map(|c| c.items.iter().cloned())
                .collect(),
            None => data.menu.items().cloned().collect(),
        }
    }

    pub fn customers(&self) -> Vec<Customer> {
        self.data.read().customers.clone()
    }

    pub fn customer(&self, id: &str) -> Option<Customer> {
        self.data.read().customers.iter().find(|c| c.id == id).cloned()
    }

    pub fn reviews(&self) -> Vec<Review> {
        self.data.read().reviews.clone()
    }

    pub fn review(&self, id: &str) -> Option<Review> {
        self.data.read().reviews.iter().find(|r| r.id == id).cloned()
    }

    pub fn campaigns(&self) -> Vec<Campaign> {
        self.data.read().campaigns.clone()
    }

    pub fn analytics(&self) -> Analytics {
        self.data.read().analytics.clone()
    }

    pub fn generated_content(&self) -> Vec<GeneratedContent> {
        self.data.read().generated_content.clone()
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Shallow-merge `update` into the profile and stamp `updated_at`
    pub fn update_restaurant(&self, update: RestaurantUpdate) -> RestaurantProfile {
        let updated = {
            let mut data = self.data.write();
            let profile = &mut data.restaurant;
            profile.merge(update);
            profile.updated_at = next_timestamp(Some(profile.updated_at));
            profile.clone()
        };
        self.notify(
            Resource::Restaurant,
            StoreAction::Updated,
            Some(updated.id.clone()),
        );
        updated
    }

    /// Replace the whole menu
    pub fn replace_menu(&self, menu: Menu) -> Menu {
        {
            let mut data = self.data.write();
            data.menu = menu.clone();
        }
        self.notify(Resource::Menu, StoreAction::Replaced, None);
        menu
    }

    /// Append an item to `category_id`. `None` leaves the store untouched when
    /// the category does not exist.
    pub fn add_menu_item(&self, category_id: &str, item: MenuItemCreate) -> Option<MenuItem> {
        let created = {
            let mut data = self.data.write();
            let category = data
                .menu
                .categories
                .iter_mut()
                .find(|c| c.id == category_id)?;
            let created = item.into_item(new_id("item"), category_id);
            category.items.push(created.clone());
            created
        };
        self.notify(Resource::Menu, StoreAction::Created, Some(created.id.clone()));
        Some(created)
    }

    /// Merge `update` into the first item with `item_id`, searching every
    /// category in order
    pub fn update_menu_item(&self, item_id: &str, update: MenuItemUpdate) -> Option<MenuItem> {
        let updated = {
            let mut data = self.data.write();
            let item = data
                .menu
                .categories
                .iter_mut()
                .flat_map(|c| c.items.iter_mut())
                .find(|i| i.id == item_id)?;
            item.merge(update);
            item.clone()
        };
        self.notify(Resource::Menu, StoreAction::Updated, Some(updated.id.clone()));
        Some(updated)
    }

    pub fn add_customer(&self, data: CustomerCreate) -> Customer {
        let customer = data.into_customer(new_id("customer"), now_millis());
        self.data.write().customers.push(customer.clone());
        self.notify(
            Resource::Customer,
            StoreAction::Created,
            Some(customer.id.clone()),
        );
        customer
    }

    pub fn add_review(&self, data: ReviewCreate) -> Review {
        let review = data.into_review(new_id("review"));
        self.data.write().reviews.push(review.clone());
        self.notify(Resource::Review, StoreAction::Created, Some(review.id.clone()));
        review
    }

    /// Replace the review with a copy carrying `response`
    pub fn respond_to_review(
        &self,
        review_id: &str,
        response: ReviewResponseCreate,
    ) -> Option<Review> {
        let updated = {
            let mut data = self.data.write();
            let slot = data.reviews.iter_mut().find(|r| r.id == review_id)?;
            let replacement = Review {
                response: Some(response.into_response(now_millis())),
                ..slot.clone()
            };
            *slot = replacement.clone();
            replacement
        };
        self.notify(Resource::Review, StoreAction::Updated, Some(updated.id.clone()));
        Some(updated)
    }

    pub fn add_campaign(&self, data: CampaignCreate) -> Campaign {
        let campaign = data.into_campaign(new_id("campaign"), now_millis());
        self.data.write().campaigns.push(campaign.clone());
        self.notify(
            Resource::Campaign,
            StoreAction::Created,
            Some(campaign.id.clone()),
        );
        campaign
    }

    pub fn add_generated_content(&self, content: NewGeneratedContent) -> GeneratedContent {
        let content = content.into_content(new_id("content"), now_millis());
        self.data.write().generated_content.push(content.clone());
        self.notify(
            Resource::GeneratedContent,
            StoreAction::Created,
            Some(content.id.clone()),
        );
        content
    }

    /// Flip a generated record to `applied`. Applying twice is a no-op that
    /// still returns the record.
    pub fn mark_content_applied(&self, id: &str) -> Option<GeneratedContent> {
        let (content, changed) = {
            let mut data = self.data.write();
            let content = data.generated_content.iter_mut().find(|c| c.id == id)?;
            let changed = content.status != ContentStatus::Applied;
            content.status = ContentStatus::Applied;
            (content.clone(), changed)
        };
        if changed {
            self.notify(
                Resource::GeneratedContent,
                StoreAction::Updated,
                Some(content.id.clone()),
            );
        }
        Some(content)
    }
}
