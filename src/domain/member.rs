use super::{CampaignId, Email, MemberId, MemberName};

#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub campaign_id: CampaignId,
    pub member_id: MemberId,
    pub member_name: MemberName,
    pub email: Email,
}

impl Member {
    pub fn new(
        campaign_id: CampaignId,
        member_name: MemberName,
        email: Email,
    ) -> Self {
        Self {
            campaign_id,
            member_id: MemberId::default(),
            member_name,
            email,
        }
    }

    /// Two members clash when they sit in the same campaign under the same
    /// e-mail address but are different records.
    pub fn conflicts_with(&self, other: &Member) -> bool {
        self.member_id != other.member_id
            && self.campaign_id == other.campaign_id
            && self.email == other.email
    }
}
