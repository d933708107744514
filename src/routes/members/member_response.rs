use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

use crate::domain::Member;

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct MemberResponse {
    pub id: uuid::Uuid,
    pub campaign_id: uuid::Uuid,
    pub name: String,
    pub email: String,
}

impl From<&Member> for MemberResponse {
    fn from(member: &Member) -> Self {
        Self {
            id: *member.member_id.as_ref(),
            campaign_id: *member.campaign_id.as_ref(),
            name: member.member_name.as_ref().to_owned(),
            email: member.email.as_ref().expose_secret().to_owned(),
        }
    }
}
