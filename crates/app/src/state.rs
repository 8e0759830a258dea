use infra::db::ContactInfoStore;
use sqlx::SqlitePool;
use std::{
    path::{Path, PathBuf},
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub store: ContactInfoStore,
    auth_dir: PathBuf,
    ready: Arc<AtomicBool>,
}

impl AppState {
    #[tracing::instrument(skip_all)]
    pub fn new(pool: SqlitePool, auth_dir: impl Into<PathBuf>) -> Self {
        Self {
            store: ContactInfoStore::new(pool.clone()),
            pool,
            auth_dir: auth_dir.into(),
            ready: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn auth_dir(&self) -> &Path {
        &self.auth_dir
    }

    /// One-way transition; there is no way back to not-ready.
    pub fn set_ready(&self) {
        self.ready.store(true, Ordering::Relaxed);
    }

    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Relaxed)
    }
}
