//! Placeholder configuration values used across tests. None of these are
//! real credentials.

/// Bot token for test Telegram clients.
pub static TEST_TELEGRAM_BOT_TOKEN: &str = "000000:telegram-test-token";

/// Chat id of the test Telegram group.
pub static TEST_TELEGRAM_CHAT_ID: &str = "-1001";

/// Role id pinged by mentionable Discord test messages.
pub static TEST_DISCORD_ROLE_ID: &str = "4242";

/// Redis instance expected by the `redis-test` feature.
pub static TEST_REDIS_URL: &str = "redis://127.0.0.1:6379";
