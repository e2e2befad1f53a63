//! Redis-backed key-value store for deployments sharing one cache.
//!
//! Uses plain GET/SET without EXPIRE: entries live until overwritten,
//! and freshness is judged by the reader from the stored timestamp.

use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::AsyncCommands;

use crate::ports::{KeyValueError, KeyValueStore};

/// Redis-backed key-value store.
#[derive(Clone)]
pub struct RedisKeyValueStore {
    conn: MultiplexedConnection,
    namespace: Option<String>,
}

impl RedisKeyValueStore {
    /// Create a new store over an established connection.
    pub fn new(conn: MultiplexedConnection) -> Self {
        Self {
            conn,
            namespace: None,
        }
    }

    /// Connect to the Redis server at `url`.
    pub async fn connect(url: &str) -> Result<Self, KeyValueError> {
        let client =
            redis::Client::open(url).map_err(|e| KeyValueError::Unavailable(e.to_string()))?;
        let conn = client
            .get_multiplexed_tokio_connection()
            .await
            .map_err(|e| KeyValueError::Unavailable(e.to_string()))?;
        Ok(Self::new(conn))
    }

    /// Prefix every key with `namespace:`.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    fn redis_key(&self, key: &str) -> String {
        namespaced_key(self.namespace.as_deref(), key)
    }
}

fn namespaced_key(namespace: Option<&str>, key: &str) -> String {
    match namespace {
        Some(ns) => format!("{ns}:{key}"),
        None => key.to_string(),
    }
}

#[async_trait]
impl KeyValueStore for RedisKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, KeyValueError> {
        let mut conn = self.conn.clone();

        conn.get(self.redis_key(key))
            .await
            .map_err(|e: redis::RedisError| KeyValueError::Unavailable(e.to_string()))
    }

    async fn set(&self, key: &str, value: String) -> Result<(), KeyValueError> {
        let mut conn = self.conn.clone();

        conn.set::<_, _, ()>(self.redis_key(key), value)
            .await
            .map_err(|e: redis::RedisError| KeyValueError::Unavailable(e.to_string()))
    }
}

impl std::fmt::Debug for RedisKeyValueStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisKeyValueStore")
            .field("namespace", &self.namespace)
            .finish_non_exhaustive()
    }
}
