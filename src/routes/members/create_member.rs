use axum::{extract::State, http::StatusCode, Json};
use axum_extra::extract::CookieJar;
use secrecy::Secret;
use serde::Deserialize;

use crate::{
    domain::CampaignAPIError,
    services::members::{self, NewMemberAttributes},
    utils::auth::get_actor,
    AppState,
};

use super::MemberResponse;

#[tracing::instrument(name = "Create member route handler", skip_all)]
pub async fn create_member(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(request): Json<CreateMemberRequest>,
) -> Result<(StatusCode, CookieJar, Json<MemberResponse>), CampaignAPIError> {
    let actor = get_actor(&jar)?;
    tracing::debug!("actor: {}", actor.as_ref());

    let attributes = NewMemberAttributes {
        campaign_id: request.campaign_id,
        name: request.name,
        email: request.email,
    };

    let member = members::create_member(
        &mut *state.campaign_store.write().await,
        &actor,
        attributes,
    )
    .await?;

    Ok((StatusCode::CREATED, jar, Json(MemberResponse::from(&member))))
}

#[derive(Debug, Deserialize)]
pub struct CreateMemberRequest {
    pub name: String,
    pub email: Secret<String>,
    pub campaign_id: String,
}
