use std::sync::Arc;

use campaign_members::{
    app_state::AppState,
    get_postgres_pool,
    services::data_stores::PostgresCampaignStore,
    utils::{
        constants::{prod, ALLOWED_ORIGINS, DATABASE_URL},
        tracing::init_tracing,
    },
    Application,
};
use color_eyre::eyre::{eyre, Result, WrapErr};
use sqlx::PgPool;
use tokio::sync::RwLock;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    let pg_pool = configure_postgresql().await?;
    let campaign_store =
        Arc::new(RwLock::new(PostgresCampaignStore::new(pg_pool)));
    let app_state = AppState::new(campaign_store);

    let app =
        Application::build(app_state, prod::APP_ADDRESS, &ALLOWED_ORIGINS)
            .await
            .map_err(|e| eyre!("failed to build app: {e}"))?;

    app.run().await.wrap_err("failed to run app")
}

async fn configure_postgresql() -> Result<PgPool> {
    let pg_pool = get_postgres_pool(&DATABASE_URL)
        .await
        .wrap_err("failed to create Postgres connection pool")?;

    sqlx::migrate!()
        .run(&pg_pool)
        .await
        .wrap_err("failed to run migrations")?;

    Ok(pg_pool)
}
