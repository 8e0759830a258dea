use anyhow::{Context, Result};
use include_dir::{include_dir, Dir};
use sqlx::SqlitePool;

static EMBEDDED_MIGRATIONS: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/db/migrations");

/// Apply every embedded `*.sql` in name order, recording each in
/// `schema_migrations` so re-runs skip what is already applied.
#[tracing::instrument(skip_all)]
pub async fn run(pool: &SqlitePool) -> Result<()> {
    ensure_table(pool).await?;

    for (name, sql) in load_embedded()? {
        if applied(pool, &name).await? {
            continue;
        }
        apply_sql(pool, &sql)
            .await
            .with_context(|| format!("apply migration {name}"))?;
        record(pool, &name).await?;
    }
    Ok(())
}

async fn ensure_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS schema_migrations (
          version    TEXT PRIMARY KEY,
          applied_at TEXT NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;
    Ok(())
}

async fn applied(pool: &SqlitePool, version: &str) -> Result<bool> {
    let hit: Option<i64> =
        sqlx::query_scalar("SELECT 1 FROM schema_migrations WHERE version = ?1 LIMIT 1")
            .bind(version)
            .fetch_optional(pool)
            .await?;
    Ok(hit.is_some())
}

async fn record(pool: &SqlitePool, version: &str) -> Result<()> {
    let now = time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| "now".into());

    sqlx::query("INSERT INTO schema_migrations (version, applied_at) VALUES (?1, ?2)")
        .bind(version)
        .bind(now)
        .execute(pool)
        .await?;
    Ok(())
}

async fn apply_sql(pool: &SqlitePool, sql: &str) -> Result<()> {
    sqlx::raw_sql(sql).execute(pool).await?;
    Ok(())
}

fn load_embedded() -> Result<Vec<(String, String)>> {
    let mut files: Vec<_> = EMBEDDED_MIGRATIONS.files().collect();
    files.sort_by_key(|f| f.path());
    let mut out = Vec::new();
    for f in files {
        if f.path().extension().and_then(|s| s.to_str()) != Some("sql") {
            continue;
        }
        let name = f
            .path()
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .context("migration without a file name")?;
        let sql = f.contents_utf8().context("migration not utf-8")?.to_owned();
        out.push((name, sql));
    }
    Ok(out)
}
