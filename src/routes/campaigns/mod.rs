mod get_campaign_list;
mod get_members;
mod new_campaign;

pub use get_campaign_list::get_campaign_list;
pub use get_members::{get_member_list_for_campaign, MemberListResponse};
pub use new_campaign::{new_campaign, NewCampaignRequest, NewCampaignResponse};
