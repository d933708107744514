use color_eyre::eyre::eyre;
use secrecy::{ExposeSecret, Secret};
use sqlx::{postgres::PgRow, PgPool, Row};
use uuid::Uuid;

use crate::domain::{
    ActorId, Campaign, CampaignId, CampaignName, CampaignStore,
    CampaignStoreError, Email, Member, MemberId, MemberName,
};

const MEMBER_EMAIL_CONSTRAINT: &str = "members_campaign_id_email_key";

pub struct PostgresCampaignStore {
    pool: PgPool,
}

impl PostgresCampaignStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn campaign_from_row(row: &PgRow) -> Result<Campaign, CampaignStoreError> {
    let unexpected =
        |e: sqlx::Error| CampaignStoreError::UnexpectedError(eyre!(e));
    let campaign_name: String =
        row.try_get("campaign_name").map_err(unexpected)?;

    Ok(Campaign {
        campaign_id: CampaignId::new(
            row.try_get::<Uuid, _>("campaign_id").map_err(unexpected)?,
        ),
        owner_id: ActorId::new(
            row.try_get::<Uuid, _>("owner_id").map_err(unexpected)?,
        ),
        campaign_name: CampaignName::parse(&campaign_name)
            .map_err(|e| CampaignStoreError::UnexpectedError(eyre!(e)))?,
    })
}

fn member_from_row(row: &PgRow) -> Result<Member, CampaignStoreError> {
    let unexpected =
        |e: sqlx::Error| CampaignStoreError::UnexpectedError(eyre!(e));
    let member_name: String = row.try_get("member_name").map_err(unexpected)?;
    let email: String = row.try_get("email").map_err(unexpected)?;

    Ok(Member {
        campaign_id: CampaignId::new(
            row.try_get::<Uuid, _>("campaign_id").map_err(unexpected)?,
        ),
        member_id: MemberId::new(
            row.try_get::<Uuid, _>("member_id").map_err(unexpected)?,
        ),
        member_name: MemberName::parse(member_name)
            .map_err(|e| CampaignStoreError::UnexpectedError(eyre!(e)))?,
        email: Email::parse(Secret::new(email))
            .map_err(|e| CampaignStoreError::UnexpectedError(eyre!(e)))?,
    })
}

fn map_member_write_error(e: sqlx::Error) -> CampaignStoreError {
    match e {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            if db_err.constraint() == Some(MEMBER_EMAIL_CONSTRAINT) {
                CampaignStoreError::MemberEmailExists
            } else {
                CampaignStoreError::MemberIDExists
            }
        }
        sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
            CampaignStoreError::CampaignIDNotFound
        }
        e => CampaignStoreError::UnexpectedError(eyre!(e)),
    }
}

#[async_trait::async_trait]
impl CampaignStore for PostgresCampaignStore {
    #[tracing::instrument(name = "Adding campaign to PostgreSQL", skip_all)]
    async fn add_campaign(
        &mut self,
        campaign: &Campaign,
    ) -> Result<(), CampaignStoreError> {
        sqlx::query(
            r#"
            INSERT INTO campaigns (campaign_id, owner_id, campaign_name) VALUES ($1, $2, $3)
            "#,
        )
        .bind(campaign.campaign_id.as_ref())
        .bind(campaign.owner_id.as_ref())
        .bind(campaign.campaign_name.as_ref())
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                CampaignStoreError::CampaignIDExists
            }
            err => CampaignStoreError::UnexpectedError(eyre!(err)),
        })?;
        Ok(())
    }

    #[tracing::instrument(name = "Getting campaign from PostgreSQL", skip_all)]
    async fn get_campaign(
        &self,
        campaign_id: &CampaignId,
    ) -> Result<Campaign, CampaignStoreError> {
        let row = sqlx::query(
            r#"
            SELECT campaign_id, owner_id, campaign_name
            FROM campaigns
            WHERE campaign_id = $1
            "#,
        )
        .bind(campaign_id.as_ref())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => CampaignStoreError::CampaignIDNotFound,
            err => CampaignStoreError::UnexpectedError(eyre!(err)),
        })?;

        campaign_from_row(&row)
    }

    #[tracing::instrument(
        name = "Getting campaign list from PostgreSQL",
        skip_all
    )]
    async fn get_campaign_list(
        &self,
        owner_id: &ActorId,
    ) -> Result<Vec<Campaign>, CampaignStoreError> {
        let rows = sqlx::query(
            r#"
            SELECT campaign_id, owner_id, campaign_name
            FROM campaigns
            WHERE owner_id = $1
            ORDER BY campaign_name
            "#,
        )
        .bind(owner_id.as_ref())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| CampaignStoreError::UnexpectedError(eyre!(e)))?;

        rows.iter().map(campaign_from_row).collect()
    }

    #[tracing::instrument(name = "Adding member to PostgreSQL", skip_all)]
    async fn add_member(
        &mut self,
        member: &Member,
    ) -> Result<(), CampaignStoreError> {
        sqlx::query(
            r#"
            INSERT INTO members (member_id, campaign_id, member_name, email) VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(member.member_id.as_ref())
        .bind(member.campaign_id.as_ref())
        .bind(member.member_name.as_ref())
        .bind(member.email.as_ref().expose_secret())
        .execute(&self.pool)
        .await
        .map_err(map_member_write_error)?;
        Ok(())
    }

    #[tracing::instrument(name = "Getting member from PostgreSQL", skip_all)]
    async fn get_member(
        &self,
        member_id: &MemberId,
    ) -> Result<Member, CampaignStoreError> {
        let row = sqlx::query(
            r#"
            SELECT member_id, campaign_id, member_name, email
            FROM members
            WHERE member_id = $1
            "#,
        )
        .bind(member_id.as_ref())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => CampaignStoreError::MemberIDNotFound,
            e => CampaignStoreError::UnexpectedError(eyre!(e)),
        })?;

        member_from_row(&row)
    }

    #[tracing::instrument(name = "Getting members from PostgreSQL", skip_all)]
    async fn get_members(
        &self,
        campaign_id: &CampaignId,
    ) -> Result<Vec<Member>, CampaignStoreError> {
        self.get_campaign(campaign_id).await?;

        let rows = sqlx::query(
            r#"
            SELECT member_id, campaign_id, member_name, email
            FROM members
            WHERE campaign_id = $1
            ORDER BY member_name
            "#,
        )
        .bind(campaign_id.as_ref())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| CampaignStoreError::UnexpectedError(eyre!(e)))?;

        rows.iter().map(member_from_row).collect()
    }

    #[tracing::instrument(name = "Updating member in PostgreSQL", skip_all)]
    async fn update_member(
        &mut self,
        member: &Member,
    ) -> Result<(), CampaignStoreError> {
        let result = sqlx::query(
            r#"
            UPDATE members SET member_name = $2, email = $3
            WHERE member_id = $1
            "#,
        )
        .bind(member.member_id.as_ref())
        .bind(member.member_name.as_ref())
        .bind(member.email.as_ref().expose_secret())
        .execute(&self.pool)
        .await
        .map_err(map_member_write_error)?;

        if result.rows_affected() == 0 {
            return Err(CampaignStoreError::MemberIDNotFound);
        }

        Ok(())
    }

    #[tracing::instrument(name = "Deleting member from PostgreSQL", skip_all)]
    async fn delete_member(
        &mut self,
        member_id: &MemberId,
    ) -> Result<(), CampaignStoreError> {
        let result = sqlx::query(
            r#"
            DELETE FROM members WHERE member_id = $1
            "#,
        )
        .bind(member_id.as_ref())
        .execute(&self.pool)
        .await
        .map_err(|e| CampaignStoreError::UnexpectedError(eyre!(e)))?;

        if result.rows_affected() == 0 {
            return Err(CampaignStoreError::MemberIDNotFound);
        }

        Ok(())
    }
}
