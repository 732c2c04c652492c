use std::sync::Arc;

use super::{
    config::Config,
    database::{EntryStore, SupabaseStore},
    error::AppError,
    guestbook::Guestbook,
};

pub struct AppState {
    pub guestbook: Guestbook,
}

impl AppState {
    pub fn new(config: &Config) -> Result<Arc<Self>, AppError> {
        let store = SupabaseStore::new(&config.supabase_url, &config.supabase_key)?;

        Ok(Self::with_store(Arc::new(store)))
    }

    pub fn with_store(store: Arc<dyn EntryStore>) -> Arc<Self> {
        Arc::new(Self {
            guestbook: Guestbook::new(store),
        })
    }
}
