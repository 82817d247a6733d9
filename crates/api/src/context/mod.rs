//! Application context - dependency injection container

use std::sync::Arc;

use dealdesk_core::{DealRepository, DealStore, NotesRepository, NotesService};
use dealdesk_domain::{Config, DealDeskError, Result, StorageBackend};
use dealdesk_infra::{
    DbManager, InMemoryDealRepository, InMemoryNotesRepository, InfraError, SqliteDealRepository,
};
use tracing::info;

/// Application context - holds all services and dependencies
pub struct AppContext {
    pub config: Config,
    pub deals: Arc<DealStore>,
    pub notes: Arc<NotesService>,
    /// Present only for the SQLite backend
    pub db: Option<Arc<DbManager>>,
}

impl AppContext {
    /// Create a new application context with default configuration
    /// (in-memory storage)
    pub async fn new() -> Result<Self> {
        Self::new_with_config(Config::default()).await
    }

    /// Create a new application context for `config`
    ///
    /// Opens and migrates the SQLite database when that backend is selected.
    pub async fn new_with_config(config: Config) -> Result<Self> {
        let (deal_repository, db): (Arc<dyn DealRepository>, Option<Arc<DbManager>>) =
            match config.storage.backend {
                StorageBackend::Memory => (Arc::new(InMemoryDealRepository::new()), None),
                StorageBackend::Sqlite => {
                    let path = config.storage.path.clone();
                    let pool_size = config.storage.pool_size;
                    let db = tokio::task::spawn_blocking(move || -> Result<DbManager> {
                        let db = DbManager::new(path, pool_size)?;
                        db.run_migrations()?;
                        Ok(db)
                    })
                    .await
                    .map_err(|err| DealDeskError::from(InfraError::from(err)))??;
                    let db = Arc::new(db);
                    (Arc::new(SqliteDealRepository::new(Arc::clone(&db))), Some(db))
                }
            };

        info!(backend = %config.storage.backend, "storage backend ready");

        let notes_repository = Arc::new(InMemoryNotesRepository::new());
        Ok(Self::with_repositories(config, deal_repository, notes_repository, db))
    }

    /// Assemble a context from already-built repositories
    pub fn with_repositories(
        config: Config,
        deal_repository: Arc<dyn DealRepository>,
        notes_repository: Arc<dyn NotesRepository>,
        db: Option<Arc<DbManager>>,
    ) -> Self {
        Self {
            config,
            deals: Arc::new(DealStore::new(deal_repository)),
            notes: Arc::new(NotesService::new(notes_repository)),
            db,
        }
    }

    /// Context over fresh in-memory repositories
    pub fn in_memory() -> Self {
        Self::with_repositories(
            Config::default(),
            Arc::new(InMemoryDealRepository::new()),
            Arc::new(InMemoryNotesRepository::new()),
            None,
        )
    }
}
