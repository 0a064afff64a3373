use std::sync::Arc;

use crate::config::Config;
use crate::db::DatabaseBackend;
use crate::services::CollectionService;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub db: Arc<dyn DatabaseBackend>,
    pub collections: CollectionService,
}

impl AppState {
    pub fn new(config: Config, db: Arc<dyn DatabaseBackend>) -> Self {
        let collections = CollectionService::new(db.clone());

        Self {
            config: Arc::new(config),
            db,
            collections,
        }
    }
}
