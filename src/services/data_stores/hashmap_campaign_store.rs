use std::collections::HashMap;

use crate::domain::{
    ActorId, Campaign, CampaignId, CampaignStore, CampaignStoreError, Member,
    MemberId,
};

#[derive(Default)]
pub struct HashmapCampaignStore {
    campaigns: HashMap<CampaignId, Campaign>,
    members: HashMap<MemberId, Member>,
}

impl HashmapCampaignStore {
    fn ensure_unique_email(
        &self,
        member: &Member,
    ) -> Result<(), CampaignStoreError> {
        if self
            .members
            .values()
            .any(|existing| existing.conflicts_with(member))
        {
            return Err(CampaignStoreError::MemberEmailExists);
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl CampaignStore for HashmapCampaignStore {
    async fn add_campaign(
        &mut self,
        campaign: &Campaign,
    ) -> Result<(), CampaignStoreError> {
        if self.campaigns.contains_key(&campaign.campaign_id) {
            return Err(CampaignStoreError::CampaignIDExists);
        }

        self.campaigns
            .insert(campaign.campaign_id.clone(), campaign.clone());
        Ok(())
    }

    async fn get_campaign(
        &self,
        campaign_id: &CampaignId,
    ) -> Result<Campaign, CampaignStoreError> {
        match self.campaigns.get(campaign_id) {
            Some(campaign) => Ok(campaign.clone()),
            None => Err(CampaignStoreError::CampaignIDNotFound),
        }
    }

    async fn get_campaign_list(
        &self,
        owner_id: &ActorId,
    ) -> Result<Vec<Campaign>, CampaignStoreError> {
        let mut campaigns: Vec<Campaign> = self
            .campaigns
            .values()
            .filter(|campaign| &campaign.owner_id == owner_id)
            .cloned()
            .collect();
        campaigns.sort_by(|a, b| {
            a.campaign_name.as_ref().cmp(b.campaign_name.as_ref())
        });
        Ok(campaigns)
    }

    async fn add_member(
        &mut self,
        member: &Member,
    ) -> Result<(), CampaignStoreError> {
        if !self.campaigns.contains_key(&member.campaign_id) {
            return Err(CampaignStoreError::CampaignIDNotFound);
        }
        if self.members.contains_key(&member.member_id) {
            return Err(CampaignStoreError::MemberIDExists);
        }
        self.ensure_unique_email(member)?;

        self.members.insert(member.member_id.clone(), member.clone());
        Ok(())
    }

    async fn get_member(
        &self,
        member_id: &MemberId,
    ) -> Result<Member, CampaignStoreError> {
        match self.members.get(member_id) {
            Some(member) => Ok(member.clone()),
            None => Err(CampaignStoreError::MemberIDNotFound),
        }
    }

    async fn get_members(
        &self,
        campaign_id: &CampaignId,
    ) -> Result<Vec<Member>, CampaignStoreError> {
        if !self.campaigns.contains_key(campaign_id) {
            return Err(CampaignStoreError::CampaignIDNotFound);
        }

        let mut members: Vec<Member> = self
            .members
            .values()
            .filter(|member| &member.campaign_id == campaign_id)
            .cloned()
            .collect();
        members
            .sort_by(|a, b| a.member_name.as_ref().cmp(b.member_name.as_ref()));
        Ok(members)
    }

    async fn update_member(
        &mut self,
        member: &Member,
    ) -> Result<(), CampaignStoreError> {
        if !self.members.contains_key(&member.member_id) {
            return Err(CampaignStoreError::MemberIDNotFound);
        }
        self.ensure_unique_email(member)?;

        self.members.insert(member.member_id.clone(), member.clone());
        Ok(())
    }

    async fn delete_member(
        &mut self,
        member_id: &MemberId,
    ) -> Result<(), CampaignStoreError> {
        match self.members.remove(member_id) {
            Some(_) => Ok(()),
            None => Err(CampaignStoreError::MemberIDNotFound),
        }
    }
}
