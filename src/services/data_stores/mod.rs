mod hashmap_campaign_store;
mod postgres_campaign_store;

pub use hashmap_campaign_store::*;
pub use postgres_campaign_store::*;
