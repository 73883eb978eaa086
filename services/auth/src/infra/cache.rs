use deadpool_redis::Pool;
use deadpool_redis::redis::{AsyncCommands, RedisError};

use crate::domain::repository::OtpCache;
use crate::domain::types::OtpKey;
use crate::error::AuthServiceError;

#[derive(Clone)]
pub struct RedisOtpCache {
    pub pool: Pool,
}

fn attempts_key(key: &OtpKey) -> String {
    format!("{key}:attempts")
}

impl RedisOtpCache {
    async fn conn(&self) -> Result<deadpool_redis::Connection, AuthServiceError> {
        self.pool
            .get()
            .await
            .map_err(|e| AuthServiceError::Internal(e.into()))
    }
}

impl OtpCache for RedisOtpCache {
    async fn put(
        &self,
        key: &OtpKey,
        value: &[u8],
        ttl_secs: u64,
    ) -> Result<(), AuthServiceError> {
        let mut conn = self.conn().await?;
        let (): () = conn
            .set_ex(key.to_string(), value.to_vec(), ttl_secs)
            .await
            .map_err(|e: RedisError| AuthServiceError::Internal(e.into()))?;
        Ok(())
    }

    async fn get(&self, key: &OtpKey) -> Result<Option<Vec<u8>>, AuthServiceError> {
        let mut conn = self.conn().await?;
        let value: Option<Vec<u8>> = conn
            .get(key.to_string())
            .await
            .map_err(|e: RedisError| AuthServiceError::Internal(e.into()))?;
        Ok(value)
    }

    async fn delete(&self, key: &OtpKey) -> Result<(), AuthServiceError> {
        let mut conn = self.conn().await?;
        let _: i64 = conn
            .del(key.to_string())
            .await
            .map_err(|e: RedisError| AuthServiceError::Internal(e.into()))?;
        Ok(())
    }

    async fn count_attempt(&self, key: &OtpKey, ttl_secs: u64) -> Result<u64, AuthServiceError> {
        let mut conn = self.conn().await?;
        let counter = attempts_key(key);
        let count: u64 = conn
            .incr(&counter, 1)
            .await
            .map_err(|e: RedisError| AuthServiceError::Internal(e.into()))?;
        if count == 1 {
            let _: i64 = conn
                .expire(&counter, ttl_secs as i64)
                .await
                .map_err(|e: RedisError| AuthServiceError::Internal(e.into()))?;
        }
        Ok(count)
    }

    async fn clear_attempts(&self, key: &OtpKey) -> Result<(), AuthServiceError> {
        let mut conn = self.conn().await?;
        let _: i64 = conn
            .del(attempts_key(key))
            .await
            .map_err(|e: RedisError| AuthServiceError::Internal(e.into()))?;
        Ok(())
    }
}
