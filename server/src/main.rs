use restaurant_server::{Config, Server, ServerState, init_logger_with_file};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Environment (.env overrides nothing already set)
    dotenv::dotenv().ok();

    // 2. Configuration and logging
    let config = Config::from_env();
    init_logger_with_file(
        &config.log_level,
        config.is_production(),
        config.log_dir.as_deref(),
    )?;

    tracing::info!("Restaurant server starting...");

    // 3. State: database pool + role provider
    let state = ServerState::initialize(&config).await?;

    // 4. Serve until shutdown
    let server = Server::new(state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
