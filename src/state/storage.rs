//! State storage implementation
//!
//! Persists conversation state in Redis across turns. Two independent
//! namespaces are kept: the dialogue flow is scoped per conversation
//! (chat) and the profile per user. Loading a missing record seeds the
//! type's default, so a fresh conversation starts from a clean flow.

use redis::AsyncCommands;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, error};

use crate::config::RedisConfig;
use crate::dialog::flow::{ConversationFlow, UserProfile};
use crate::utils::errors::Result;

/// Redis-based state storage
#[derive(Clone)]
pub struct StateStorage {
    connection_manager: redis::aio::ConnectionManager,
    config: RedisConfig,
}

impl StateStorage {
    /// Create a new state storage instance
    pub async fn new(config: RedisConfig) -> Result<Self> {
        let client = redis::Client::open(config.url.as_str())?;
        let connection_manager = redis::aio::ConnectionManager::new(client).await?;

        Ok(Self {
            connection_manager,
            config,
        })
    }

    /// Load the dialogue flow for a chat, or the default when absent
    pub async fn load_flow(&self, chat_id: i64) -> Result<ConversationFlow> {
        self.load(&flow_key(&self.config.prefix, chat_id)).await
    }

    /// Save the dialogue flow for a chat
    pub async fn save_flow(&self, chat_id: i64, flow: &ConversationFlow) -> Result<()> {
        self.save(&flow_key(&self.config.prefix, chat_id), flow).await
    }

    /// Load the profile for a user, or the default when absent
    pub async fn load_profile(&self, user_id: i64) -> Result<UserProfile> {
        self.load(&profile_key(&self.config.prefix, user_id)).await
    }

    /// Save the profile for a user
    pub async fn save_profile(&self, user_id: i64, profile: &UserProfile) -> Result<()> {
        self.save(&profile_key(&self.config.prefix, user_id), profile)
            .await
    }

    /// Delete both records, returning the conversation to a clean start
    pub async fn clear(&self, chat_id: i64, user_id: i64) -> Result<()> {
        let mut conn = self.connection_manager.clone();
        let deleted: u32 = conn
            .del(&[
                flow_key(&self.config.prefix, chat_id),
                profile_key(&self.config.prefix, user_id),
            ])
            .await?;
        debug!(chat_id, user_id, deleted, "Cleared conversation state");
        Ok(())
    }

    async fn load<T: DeserializeOwned + Default>(&self, key: &str) -> Result<T> {
        let mut conn = self.connection_manager.clone();
        let serialized: Option<String> = match conn.get::<&str, Option<String>>(key).await {
            Ok(data) => data,
            Err(e) => {
                error!(key = %key, error = %e, "Failed to get state from Redis");
                return Err(e.into());
            }
        };

        match serialized {
            Some(data) => {
                let value = serde_json::from_str(&data).map_err(|e| {
                    error!(key = %key, error = %e, "Failed to deserialize state");
                    e
                })?;
                debug!(key = %key, "State loaded");
                Ok(value)
            }
            None => {
                debug!(key = %key, "No state found, seeding default");
                Ok(T::default())
            }
        }
    }

    async fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let serialized = serde_json::to_string(value).map_err(|e| {
            error!(key = %key, error = %e, "Failed to serialize state");
            e
        })?;

        let mut conn = self.connection_manager.clone();
        match conn
            .set_ex::<_, _, ()>(key, serialized, self.config.ttl_seconds)
            .await
        {
            Ok(()) => {
                debug!(key = %key, ttl_seconds = self.config.ttl_seconds, "State saved");
                Ok(())
            }
            Err(e) => {
                error!(key = %key, error = %e, "Failed to save state to Redis");
                Err(e.into())
            }
        }
    }

    /// Test Redis connection
    pub async fn test_connection(&self) -> Result<()> {
        let mut conn = self.connection_manager.clone();
        let _: String = redis::cmd("PING").query_async(&mut conn).await?;
        Ok(())
    }
}

impl std::fmt::Debug for StateStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateStorage")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

fn flow_key(prefix: &str, chat_id: i64) -> String {
    format!("{prefix}flow:{chat_id}")
}

fn profile_key(prefix: &str, user_id: i64) -> String {
    format!("{prefix}profile:{user_id}")
}
