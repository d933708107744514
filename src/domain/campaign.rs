use super::{ActorId, CampaignId, CampaignName, Owned};

/// Parent resource of a set of members. Only the owning actor may read or
/// change those members.
#[derive(Debug, Clone, PartialEq)]
pub struct Campaign {
    pub campaign_id: CampaignId,
    pub owner_id: ActorId,
    pub campaign_name: CampaignName,
}

impl Campaign {
    pub fn new(owner_id: ActorId, campaign_name: CampaignName) -> Self {
        Self {
            campaign_id: CampaignId::default(),
            owner_id,
            campaign_name,
        }
    }
}

impl Owned for Campaign {
    fn owner(&self) -> &ActorId {
        &self.owner_id
    }
}
