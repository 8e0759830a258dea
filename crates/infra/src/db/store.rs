//! Narrow storage access for the contact-info singleton. Handlers receive
//! this store instead of reaching for the pool directly.

use anyhow::Result;
use domain::content::{ContactInfo, ContactInfoPatch, CONTACT_INFO_ID};
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct ContactInfoStore {
    pool: SqlitePool,
}

impl ContactInfoStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Look up the singleton; create it with defaults on first access.
    /// A concurrent first-read loses the insert race gracefully: the
    /// fixed-key primary key makes the second insert a no-op.
    #[tracing::instrument(skip_all)]
    pub async fn fetch_or_create(&self) -> Result<ContactInfo> {
        if let Some(info) = self.find().await? {
            return Ok(info);
        }
        self.ensure_row().await?;
        let info = self
            .find()
            .await?
            .ok_or_else(|| anyhow::anyhow!("contact_info row missing after create"))?;
        Ok(info)
    }

    /// Upsert-by-fixed-key: create the row if absent, then merge the
    /// provided fields. Absent patch fields leave stored values untouched.
    #[tracing::instrument(skip_all)]
    pub async fn apply(&self, patch: &ContactInfoPatch) -> Result<ContactInfo> {
        self.ensure_row().await?;

        if !patch.is_empty() {
            sqlx::query(
                r#"
                UPDATE contact_info SET
                  title_fr         = COALESCE(?1,  title_fr),
                  title_en         = COALESCE(?2,  title_en),
                  description_fr   = COALESCE(?3,  description_fr),
                  description_en   = COALESCE(?4,  description_en),
                  address          = COALESCE(?5,  address),
                  email            = COALESCE(?6,  email),
                  phone            = COALESCE(?7,  phone),
                  phone2           = COALESCE(?8,  phone2),
                  working_hours_fr = COALESCE(?9,  working_hours_fr),
                  working_hours_en = COALESCE(?10, working_hours_en),
                  map_embed_url    = COALESCE(?11, map_embed_url)
                WHERE id = ?12
                "#,
            )
            .bind(&patch.title_fr)
            .bind(&patch.title_en)
            .bind(&patch.description_fr)
            .bind(&patch.description_en)
            .bind(&patch.address)
            .bind(&patch.email)
            .bind(&patch.phone)
            .bind(&patch.phone2)
            .bind(&patch.working_hours_fr)
            .bind(&patch.working_hours_en)
            .bind(&patch.map_embed_url)
            .bind(CONTACT_INFO_ID)
            .execute(&self.pool)
            .await?;
        }

        let info = self
            .find()
            .await?
            .ok_or_else(|| anyhow::anyhow!("contact_info row missing after update"))?;
        Ok(info)
    }

    async fn find(&self) -> Result<Option<ContactInfo>> {
        let info = sqlx::query_as::<_, ContactInfo>("SELECT * FROM contact_info WHERE id = ?1")
            .bind(CONTACT_INFO_ID)
            .fetch_optional(&self.pool)
            .await?;
        Ok(info)
    }

    async fn ensure_row(&self) -> Result<()> {
        sqlx::query("INSERT OR IGNORE INTO contact_info (id) VALUES (?1)")
            .bind(CONTACT_INFO_ID)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{conn, migrate};
    use tempfile::TempDir;

    async fn test_store() -> (TempDir, ContactInfoStore) {
        let dir = TempDir::new().expect("tempdir");
        let url = format!("sqlite://{}", dir.path().join("site.db").to_string_lossy());
        let pool = conn::connect(&url).await.expect("connect");
        migrate::run(&pool).await.expect("migrate");
        (dir, ContactInfoStore::new(pool))
    }

    #[tokio::test]
    async fn lazy_create_is_idempotent() {
        let (_dir, store) = test_store().await;

        let first = store.fetch_or_create().await.unwrap();
        assert_eq!(first.id, CONTACT_INFO_ID);
        assert!(first.email.is_none());

        let second = store.fetch_or_create().await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn partial_patch_merges_without_clobbering() {
        let (_dir, store) = test_store().await;

        store
            .apply(&ContactInfoPatch {
                title_fr: Some("Contactez-nous".into()),
                email: Some("contact@example.org".into()),
                ..Default::default()
            })
            .await
            .unwrap();

        let updated = store
            .apply(&ContactInfoPatch {
                email: Some("new@example.org".into()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(updated.email.as_deref(), Some("new@example.org"));
        assert_eq!(updated.title_fr.as_deref(), Some("Contactez-nous"));
    }

    #[tokio::test]
    async fn patch_on_missing_row_creates_it() {
        let (_dir, store) = test_store().await;

        let info = store
            .apply(&ContactInfoPatch {
                phone: Some("+33 1 23 45 67 89".into()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(info.id, CONTACT_INFO_ID);
        assert_eq!(info.phone.as_deref(), Some("+33 1 23 45 67 89"));
    }
}
