use crate::config::Config;
use crate::storage::{Storage, driver::filesystem::FilesystemStorage};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn Storage>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let storage_backend: Arc<dyn Storage + Send + Sync> = match config.storage_typ.as_str() {
            "FILESYSTEM" => Arc::new(FilesystemStorage::new(&config.root_dir)),
            _ => Arc::new(FilesystemStorage::new(&config.root_dir)),
        };

        AppState {
            storage: storage_backend,
            config: Arc::new(config),
        }
    }
}
