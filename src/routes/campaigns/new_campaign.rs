use axum::{extract::State, http::StatusCode, Json};
use axum_extra::extract::CookieJar;
use color_eyre::eyre::eyre;
use serde::{Deserialize, Serialize};

use crate::{
    domain::{Campaign, CampaignAPIError, CampaignName},
    utils::auth::get_actor,
    AppState,
};

#[tracing::instrument(name = "Create new campaign route handler", skip_all)]
pub async fn new_campaign(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(request): Json<NewCampaignRequest>,
) -> Result<(StatusCode, CookieJar, Json<NewCampaignResponse>), CampaignAPIError>
{
    let actor = get_actor(&jar)?;
    let campaign_name = CampaignName::parse(&request.name)?;
    let campaign = Campaign::new(actor, campaign_name);

    state
        .campaign_store
        .write()
        .await
        .add_campaign(&campaign)
        .await
        .map_err(|e| CampaignAPIError::UnexpectedError(eyre!(e)))?;

    let response = Json(NewCampaignResponse {
        id: *campaign.campaign_id.as_ref(),
        name: campaign.campaign_name.as_ref().to_owned(),
    });

    Ok((StatusCode::CREATED, jar, response))
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct NewCampaignResponse {
    pub id: uuid::Uuid,
    pub name: String,
}

#[derive(Debug, PartialEq, Deserialize)]
pub struct NewCampaignRequest {
    pub name: String,
}
