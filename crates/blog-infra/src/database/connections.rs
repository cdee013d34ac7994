use std::time::Duration;

#[cfg(feature = "mongodb")]
use blog_core::RepoError;
#[cfg(feature = "mongodb")]
use mongodb::{Client, Database, bson::doc, options::ClientOptions};

#[cfg(feature = "mongodb")]
use super::MongoPostRepository;

/// Configuration for the document store.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub uri: String,
    pub database: String,
    pub collection: String,
    /// Upper bound on establishing the first connection at startup.
    pub connect_timeout: Duration,
    pub max_pool_size: u32,
    pub app_name: String,
}

impl StoreConfig {
    /// Configuration for `uri` with the standard database, collection and
    /// pool settings.
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            database: "blog".to_string(),
            collection: "posts".to_string(),
            connect_timeout: Duration::from_secs(10),
            max_pool_size: 100,
            app_name: "blog-api".to_string(),
        }
    }
}

/// An explicitly constructed document store client.
///
/// Lifecycle: [`MongoStore::connect`] at startup, hand out repositories with
/// [`MongoStore::posts`] while serving, then [`MongoStore::close`].
///
/// # Example
/// ```ignore
/// let store = MongoStore::connect(&config).await?;
/// let posts = Arc::new(store.posts());
/// // ... serve requests ...
/// store.close().await;
/// ```
#[cfg(feature = "mongodb")]
pub struct MongoStore {
    client: Client,
    database: Database,
    collection: String,
}

#[cfg(feature = "mongodb")]
impl MongoStore {
    /// Connect and verify the server answers, all within `connect_timeout`.
    pub async fn connect(config: &StoreConfig) -> Result<Self, RepoError> {
        tracing::info!("Initializing document store connection...");

        let connect = async {
            let mut options = ClientOptions::parse(&config.uri)
                .await
                .map_err(|e| RepoError::Connection(e.to_string()))?;
            options.connect_timeout = Some(config.connect_timeout);
            options.server_selection_timeout = Some(config.connect_timeout);
            options.max_pool_size = Some(config.max_pool_size);
            options.app_name = Some(config.app_name.clone());

            let client =
                Client::with_options(options).map_err(|e| RepoError::Connection(e.to_string()))?;
            let database = client.database(&config.database);

            // The driver connects lazily; a ping forces the first round trip.
            database
                .run_command(doc! { "ping": 1 }, None)
                .await
                .map_err(|e| RepoError::Connection(e.to_string()))?;

            Ok::<_, RepoError>((client, database))
        };

        let (client, database) = tokio::time::timeout(config.connect_timeout, connect)
            .await
            .map_err(|_| {
                RepoError::Connection(format!(
                    "no response from {} within {:?}",
                    config.database, config.connect_timeout
                ))
            })??;

        tracing::info!(
            database = %config.database,
            collection = %config.collection,
            "Document store connected (pool: {})",
            config.max_pool_size
        );

        Ok(Self {
            client,
            database,
            collection: config.collection.clone(),
        })
    }

    /// Repository over the configured posts collection.
    pub fn posts(&self) -> MongoPostRepository {
        MongoPostRepository::new(self.database.collection(&self.collection))
    }

    /// Close the client, waiting for in-flight operations to finish.
    pub async fn close(self) {
        tracing::info!(database = %self.database.name(), "Closing document store connection");
        self.client.shutdown().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_keeps_uri_and_fills_defaults() {
        let config = StoreConfig::new("mongodb://db.internal:27017");

        assert_eq!(config.uri, "mongodb://db.internal:27017");
        assert_eq!(config.database, "blog");
        assert_eq!(config.collection, "posts");
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
        assert_eq!(config.max_pool_size, 100);
    }
}
