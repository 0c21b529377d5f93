//! Process wiring: logging, database, Redis, and the delivery workers.

use sea_orm::DatabaseConnection;
use tracing_subscriber::EnvFilter;

use crate::{
    channel::{ChannelSet, DiscordClient, TelegramClient},
    config::Config,
    error::Error,
    worker::{handler::DeliveryHandler, Worker},
};

/// Install the tracing subscriber. `RUST_LOG` overrides the default level.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Connect to the database and run migrations.
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Connect to Valkey/Redis backing the delivery queue.
pub async fn connect_to_redis(config: &Config) -> Result<fred::prelude::Pool, Error> {
    use fred::prelude::*;

    let redis_config = fred::prelude::Config::from_url(&config.valkey_url)?;
    let pool = Pool::new(redis_config, None, None, None, 6)?;

    pool.connect();
    pool.wait_for_connect().await?;

    Ok(pool)
}

/// Build the channel adapters and start the delivery worker pool.
pub async fn start_delivery_workers(
    config: &Config,
    redis_pool: fred::prelude::Pool,
) -> Result<Worker, Error> {
    let http = reqwest::Client::builder().build()?;
    let channels = ChannelSet::new(
        TelegramClient::new(http.clone(), &config.telegram_bot_token),
        DiscordClient::new(http),
    );
    let handler = DeliveryHandler::new(channels);

    let worker = Worker::new(config.delivery_workers, redis_pool, handler);
    worker.pool.start().await?;

    Ok(worker)
}
