use crate::{constant::TEST_REDIS_URL, TestError};
use fred::prelude::*;

/// Redis test setup with a per-test queue namespace.
///
/// Each instance generates a unique queue name so tests running in parallel
/// against the same Redis never see each other's entries.
pub struct RedisTest {
    pub redis_pool: Pool,
    queue_name: String,
}

impl RedisTest {
    pub async fn new() -> Result<Self, TestError> {
        let redis_config = Config::from_url(TEST_REDIS_URL)?;
        let redis_pool = Pool::new(redis_config, None, None, None, 5)?;
        redis_pool.init().await?;

        let queue_name = Self::generate_unique_queue_name();

        Ok(RedisTest {
            redis_pool,
            queue_name,
        })
    }

    /// The unique Redis queue name for this test instance.
    pub fn queue_name(&self) -> String {
        self.queue_name.clone()
    }

    /// Unique queue name from timestamp and thread id.
    fn generate_unique_queue_name() -> String {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};
        use std::time::{SystemTime, UNIX_EPOCH};

        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();

        let thread_id = std::thread::current().id();

        let mut hasher = DefaultHasher::new();
        timestamp.hash(&mut hasher);
        thread_id.hash(&mut hasher);

        format!("gjallar:test:queue:{:x}", hasher.finish())
    }
}
