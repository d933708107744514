//! Member operations. Every function receives the acting user explicitly and
//! works against a store the caller has already locked, so a whole
//! resolve/authorize/mutate sequence runs under one guard.

use color_eyre::eyre::eyre;
use secrecy::Secret;

use crate::{
    domain::{
        ActorId, CampaignAPIError, CampaignId, CampaignStore,
        CampaignStoreError, Email, Member, MemberId, MemberName,
    },
    utils::campaign::get_owned_campaign,
};

pub type DynCampaignStore = dyn CampaignStore + Send + Sync;

#[derive(Debug)]
pub struct NewMemberAttributes {
    pub campaign_id: String,
    pub name: String,
    pub email: Secret<String>,
}

/// Partial update. Fields left as `None` keep their stored value.
#[derive(Debug, Default)]
pub struct MemberChanges {
    pub name: Option<String>,
    pub email: Option<Secret<String>>,
}

fn map_member_store_error(
    member_id: &MemberId,
) -> impl Fn(CampaignStoreError) -> CampaignAPIError + '_ {
    move |e| match e {
        CampaignStoreError::MemberIDNotFound => {
            CampaignAPIError::IDNotFoundError(*member_id.as_ref())
        }
        CampaignStoreError::MemberEmailExists => {
            CampaignAPIError::MemberAlreadyAdded
        }
        e => CampaignAPIError::UnexpectedError(eyre!(e)),
    }
}

/// Resolves a member and the campaign it belongs to, failing unless `actor`
/// owns that campaign.
async fn get_owned_member(
    campaign_store: &DynCampaignStore,
    actor: &ActorId,
    member_id: &MemberId,
) -> Result<Member, CampaignAPIError> {
    let member = campaign_store
        .get_member(member_id)
        .await
        .map_err(map_member_store_error(member_id))?;

    get_owned_campaign(campaign_store, actor, &member.campaign_id).await?;

    Ok(member)
}

#[tracing::instrument(name = "Create member", skip_all)]
pub async fn create_member(
    campaign_store: &mut DynCampaignStore,
    actor: &ActorId,
    attributes: NewMemberAttributes,
) -> Result<Member, CampaignAPIError> {
    let campaign_id = CampaignId::parse(&attributes.campaign_id)?;
    let campaign =
        get_owned_campaign(campaign_store, actor, &campaign_id).await?;

    let member_name = MemberName::parse(attributes.name)?;
    let email = Email::parse(attributes.email)?;
    let member = Member::new(campaign.campaign_id, member_name, email);

    campaign_store
        .add_member(&member)
        .await
        .map_err(|e| match e {
            CampaignStoreError::MemberEmailExists => {
                CampaignAPIError::MemberAlreadyAdded
            }
            CampaignStoreError::CampaignIDNotFound => {
                CampaignAPIError::IDNotFoundError(*member.campaign_id.as_ref())
            }
            e => CampaignAPIError::UnexpectedError(eyre!(e)),
        })?;

    tracing::debug!(
        "member {} added to campaign {}",
        member.member_id.as_ref(),
        member.campaign_id.as_ref()
    );

    Ok(member)
}

#[tracing::instrument(name = "Show member", skip_all)]
pub async fn show_member(
    campaign_store: &DynCampaignStore,
    actor: &ActorId,
    member_id: &MemberId,
) -> Result<Member, CampaignAPIError> {
    get_owned_member(campaign_store, actor, member_id).await
}

#[tracing::instrument(name = "Update member", skip_all)]
pub async fn update_member(
    campaign_store: &mut DynCampaignStore,
    actor: &ActorId,
    member_id: &MemberId,
    changes: MemberChanges,
) -> Result<Member, CampaignAPIError> {
    let mut member =
        get_owned_member(campaign_store, actor, member_id).await?;

    if let Some(name) = changes.name {
        member.member_name = MemberName::parse(name)?;
    }
    if let Some(email) = changes.email {
        member.email = Email::parse(email)?;
    }

    campaign_store
        .update_member(&member)
        .await
        .map_err(map_member_store_error(member_id))?;

    Ok(member)
}

#[tracing::instrument(name = "Destroy member", skip_all)]
pub async fn destroy_member(
    campaign_store: &mut DynCampaignStore,
    actor: &ActorId,
    member_id: &MemberId,
) -> Result<(), CampaignAPIError> {
    get_owned_member(campaign_store, actor, member_id).await?;

    campaign_store
        .delete_member(member_id)
        .await
        .map_err(map_member_store_error(member_id))?;

    tracing::debug!("member {} removed", member_id.as_ref());

    Ok(())
}

#[tracing::instrument(name = "List campaign members", skip_all)]
pub async fn list_members(
    campaign_store: &DynCampaignStore,
    actor: &ActorId,
    campaign_id: &CampaignId,
) -> Result<Vec<Member>, CampaignAPIError> {
    get_owned_campaign(campaign_store, actor, campaign_id).await?;

    campaign_store
        .get_members(campaign_id)
        .await
        .map_err(|e| match e {
            CampaignStoreError::CampaignIDNotFound => {
                CampaignAPIError::IDNotFoundError(*campaign_id.as_ref())
            }
            e => CampaignAPIError::UnexpectedError(eyre!(e)),
        })
}
