//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::RepoError;
use blog_core::ports::PostRepository;
use blog_infra::{InMemoryPostRepository, StoreConfig};

#[cfg(feature = "mongodb")]
use blog_infra::MongoStore;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
}

/// Owns the store client between startup and shutdown.
pub struct StoreHandle {
    #[cfg(feature = "mongodb")]
    mongo: Option<MongoStore>,
}

impl StoreHandle {
    /// Close the underlying client, if any.
    pub async fn close(self) {
        #[cfg(feature = "mongodb")]
        if let Some(store) = self.mongo {
            store.close().await;
        }
    }
}

impl AppState {
    pub fn new(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }

    /// State backed by a process-local store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryPostRepository::new()))
    }

    /// Build the application state, connecting to the document store when
    /// one is configured.
    pub async fn connect(
        store_config: Option<&StoreConfig>,
    ) -> Result<(Self, StoreHandle), RepoError> {
        #[cfg(feature = "mongodb")]
        let (state, handle) = match store_config {
            Some(config) => {
                let store = MongoStore::connect(config).await?;
                let state = Self::new(Arc::new(store.posts()));
                (state, StoreHandle { mongo: Some(store) })
            }
            None => {
                tracing::warn!("MONGODB_URI not set. Running without database (in-memory mode).");
                (Self::in_memory(), StoreHandle { mongo: None })
            }
        };

        #[cfg(not(feature = "mongodb"))]
        let (state, handle) = {
            if store_config.is_some() {
                tracing::warn!("Built without mongodb feature - ignoring MONGODB_URI");
            }
            tracing::info!("Running without mongodb feature - using in-memory repository");
            (Self::in_memory(), StoreHandle {})
        };

        tracing::info!(store = state.posts.backend(), "Application state initialized");

        Ok((state, handle))
    }
}
