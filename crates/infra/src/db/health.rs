use anyhow::Result;
use sqlx::SqlitePool;

/// Lightweight readiness check: run a trivial SELECT successfully.
#[tracing::instrument(skip_all)]
pub async fn ready(pool: &SqlitePool) -> Result<()> {
    let one: i64 = sqlx::query_scalar("SELECT 1").fetch_one(pool).await?;
    anyhow::ensure!(one == 1, "unexpected readiness probe result: {one}");
    Ok(())
}
