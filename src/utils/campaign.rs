use color_eyre::eyre::eyre;

use crate::domain::{
    is_owner, ActorId, Campaign, CampaignAPIError, CampaignId, CampaignStore,
    CampaignStoreError, Owned,
};

pub fn authorize<R: Owned + ?Sized>(
    actor: &ActorId,
    resource: &R,
) -> Result<(), CampaignAPIError> {
    if is_owner(actor, resource) {
        Ok(())
    } else {
        Err(CampaignAPIError::Forbidden)
    }
}

/// Loads a campaign and checks that `actor` owns it. A missing campaign is
/// reported as not found, a foreign one as forbidden.
#[tracing::instrument(name = "Check actor permissions for campaign", skip_all)]
pub async fn get_owned_campaign(
    campaign_store: &(dyn CampaignStore + Send + Sync),
    actor: &ActorId,
    campaign_id: &CampaignId,
) -> Result<Campaign, CampaignAPIError> {
    let campaign = campaign_store
        .get_campaign(campaign_id)
        .await
        .map_err(|e| match e {
            CampaignStoreError::CampaignIDNotFound => {
                CampaignAPIError::IDNotFoundError(*campaign_id.as_ref())
            }
            e => CampaignAPIError::UnexpectedError(eyre!(e)),
        })?;

    authorize(actor, &campaign)?;

    Ok(campaign)
}
