use crate::{
    config::RuntimeConfiguration,
    error::RosterResult,
    store::{StudentStore, memory::MemoryStudentStore, postgres::PostgresStudentStore},
};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct RosterState {
    store: Arc<dyn StudentStore>,
}

impl RosterState {
    pub async fn new(options: PgPoolOptions, config: &RuntimeConfiguration) -> RosterResult<Self> {
        let store =
            PostgresStudentStore::new(options, &config.db_config().database_url()).await?;

        Ok(Self {
            store: Arc::new(store),
        })
    }

    ///state over an empty in-memory store, no postgres needed - for tests
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            store: Arc::new(MemoryStudentStore::default()),
        }
    }

    pub fn store(&self) -> &dyn StudentStore {
        &*self.store
    }

    pub async fn sensible_shutdown(&self) {
        self.store.close().await;
    }
}
