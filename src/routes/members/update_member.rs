use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::CookieJar;
use secrecy::Secret;
use serde::Deserialize;

use crate::{
    domain::{CampaignAPIError, MemberId},
    services::members::{self, MemberChanges},
    utils::auth::get_actor,
    AppState,
};

use super::MemberResponse;

/// Handles both `PUT` and `PATCH`; absent fields are left untouched. A
/// `campaign_id` in the body is ignored, members never move between
/// campaigns.
#[tracing::instrument(name = "Update member route handler", skip_all)]
pub async fn update_member(
    Path(member_id): Path<uuid::Uuid>,
    State(state): State<AppState>,
    jar: CookieJar,
    Json(request): Json<UpdateMemberRequest>,
) -> Result<(StatusCode, CookieJar, Json<MemberResponse>), CampaignAPIError> {
    let actor = get_actor(&jar)?;
    let member_id = MemberId::new(member_id);
    tracing::debug!("member_id: {}", member_id.as_ref());

    let changes = MemberChanges {
        name: request.name,
        email: request.email,
    };

    let member = members::update_member(
        &mut *state.campaign_store.write().await,
        &actor,
        &member_id,
        changes,
    )
    .await?;

    Ok((StatusCode::OK, jar, Json(MemberResponse::from(&member))))
}

#[derive(Debug, Deserialize)]
pub struct UpdateMemberRequest {
    pub name: Option<String>,
    pub email: Option<Secret<String>>,
}
