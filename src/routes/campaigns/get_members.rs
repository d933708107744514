use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::CookieJar;
use serde::{Deserialize, Serialize};

use crate::{
    domain::{CampaignAPIError, CampaignId},
    routes::members::MemberResponse,
    services::members,
    utils::auth::get_actor,
    AppState,
};

#[tracing::instrument(name = "Get member list route handler", skip_all)]
pub async fn get_member_list_for_campaign(
    Path(campaign_id): Path<uuid::Uuid>,
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(StatusCode, CookieJar, Json<MemberListResponse>), CampaignAPIError>
{
    let actor = get_actor(&jar)?;
    let campaign_id = CampaignId::new(campaign_id);
    tracing::debug!("campaign_id: {}", campaign_id.as_ref());

    let member_list = members::list_members(
        &*state.campaign_store.read().await,
        &actor,
        &campaign_id,
    )
    .await?;

    let response = Json(MemberListResponse {
        campaign_id: *campaign_id.as_ref(),
        members: member_list.iter().map(MemberResponse::from).collect(),
    });

    Ok((StatusCode::OK, jar, response))
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct MemberListResponse {
    pub campaign_id: uuid::Uuid,
    pub members: Vec<MemberResponse>,
}
