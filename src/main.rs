use gjallar::{config::Config, data::team::TeamRepository, startup};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let db = startup::connect_to_database(&config)
        .await
        .expect("Failed to connect to database");
    let redis_pool = startup::connect_to_redis(&config)
        .await
        .expect("Failed to connect to Valkey");
    let worker = startup::start_delivery_workers(&config, redis_pool)
        .await
        .expect("Failed to start delivery workers");

    match TeamRepository::new(&db).registered().await {
        Ok(teams) => tracing::info!(
            "Gjallar is up: {} registered team(s), delivery workers running",
            teams.len()
        ),
        Err(e) => tracing::warn!("Gjallar is up, but counting registered teams failed: {:?}", e),
    }

    tokio::signal::ctrl_c()
        .await
        .expect("Failed to listen for shutdown signal");

    tracing::info!("Shutdown signal received");
    if let Err(e) = worker.pool.stop().await {
        tracing::error!("Worker pool shutdown failed: {:?}", e);
    }
}
