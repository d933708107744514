use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::CookieJar;

use crate::{
    domain::{CampaignAPIError, MemberId},
    services::members,
    utils::auth::get_actor,
    AppState,
};

use super::MemberResponse;

#[tracing::instrument(name = "Get member route handler", skip_all)]
pub async fn get_member(
    Path(member_id): Path<uuid::Uuid>,
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(StatusCode, CookieJar, Json<MemberResponse>), CampaignAPIError> {
    let actor = get_actor(&jar)?;
    let member_id = MemberId::new(member_id);

    let member = members::show_member(
        &*state.campaign_store.read().await,
        &actor,
        &member_id,
    )
    .await?;

    Ok((StatusCode::OK, jar, Json(MemberResponse::from(&member))))
}
