use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use axum_extra::extract::CookieJar;

use crate::{
    domain::{CampaignAPIError, MemberId},
    services::members,
    utils::auth::get_actor,
    AppState,
};

#[tracing::instrument(name = "Destroy member route handler", skip_all)]
pub async fn destroy_member(
    Path(member_id): Path<uuid::Uuid>,
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(StatusCode, CookieJar), CampaignAPIError> {
    let actor = get_actor(&jar)?;
    let member_id = MemberId::new(member_id);
    tracing::debug!("member_id: {}", member_id.as_ref());

    members::destroy_member(
        &mut *state.campaign_store.write().await,
        &actor,
        &member_id,
    )
    .await?;

    Ok((StatusCode::NO_CONTENT, jar))
}
