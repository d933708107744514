use super::{ActorId, Campaign, CampaignId, Member, MemberId};
use color_eyre::eyre::Report;
use thiserror::Error;

/// Persistence for campaigns and the members nested under them.
///
/// Implementations enforce the `(campaign, email)` uniqueness of members
/// themselves: `add_member` and `update_member` must reject a clash with
/// `MemberEmailExists` without changing anything. Access control is not the
/// store's concern.
#[async_trait::async_trait]
pub trait CampaignStore {
    async fn add_campaign(
        &mut self,
        campaign: &Campaign,
    ) -> Result<(), CampaignStoreError>;
    async fn get_campaign(
        &self,
        campaign_id: &CampaignId,
    ) -> Result<Campaign, CampaignStoreError>;
    async fn get_campaign_list(
        &self,
        owner_id: &ActorId,
    ) -> Result<Vec<Campaign>, CampaignStoreError>;
    async fn add_member(
        &mut self,
        member: &Member,
    ) -> Result<(), CampaignStoreError>;
    async fn get_member(
        &self,
        member_id: &MemberId,
    ) -> Result<Member, CampaignStoreError>;
    async fn get_members(
        &self,
        campaign_id: &CampaignId,
    ) -> Result<Vec<Member>, CampaignStoreError>;
    async fn update_member(
        &mut self,
        member: &Member,
    ) -> Result<(), CampaignStoreError>;
    async fn delete_member(
        &mut self,
        member_id: &MemberId,
    ) -> Result<(), CampaignStoreError>;
}

#[derive(Debug, Error)]
pub enum CampaignStoreError {
    #[error("Campaign ID exists")]
    CampaignIDExists,
    #[error("Campaign ID not found")]
    CampaignIDNotFound,
    #[error("Member ID exists")]
    MemberIDExists,
    #[error("Member ID not found")]
    MemberIDNotFound,
    #[error("Member email already exists in campaign")]
    MemberEmailExists,
    #[error("Unexpected error")]
    UnexpectedError(#[source] Report),
}

impl PartialEq for CampaignStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::CampaignIDExists, Self::CampaignIDExists)
                | (Self::CampaignIDNotFound, Self::CampaignIDNotFound)
                | (Self::MemberIDExists, Self::MemberIDExists)
                | (Self::MemberIDNotFound, Self::MemberIDNotFound)
                | (Self::MemberEmailExists, Self::MemberEmailExists)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}
