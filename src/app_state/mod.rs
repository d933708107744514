use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::CampaignStore;

pub type CampaignStoreType = Arc<RwLock<dyn CampaignStore + Send + Sync>>;

#[derive(Clone)]
pub struct AppState {
    pub campaign_store: CampaignStoreType,
}

impl AppState {
    pub fn new(campaign_store: CampaignStoreType) -> Self {
        Self { campaign_store }
    }
}
