use axum::{extract::State, http::StatusCode, Json};
use axum_extra::extract::CookieJar;
use color_eyre::eyre::eyre;

use crate::{
    domain::CampaignAPIError, routes::campaigns::NewCampaignResponse,
    utils::auth::get_actor, AppState,
};

#[tracing::instrument(name = "Get campaign list route handler", skip_all)]
pub async fn get_campaign_list(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<
    (StatusCode, CookieJar, Json<Vec<NewCampaignResponse>>),
    CampaignAPIError,
> {
    let actor = get_actor(&jar)?;

    let campaigns = state
        .campaign_store
        .read()
        .await
        .get_campaign_list(&actor)
        .await
        .map_err(|e| CampaignAPIError::UnexpectedError(eyre!(e)))?;

    let response = Json(
        campaigns
            .iter()
            .map(|campaign| NewCampaignResponse {
                id: *campaign.campaign_id.as_ref(),
                name: campaign.campaign_name.as_ref().to_owned(),
            })
            .collect(),
    );

    Ok((StatusCode::OK, jar, response))
}
