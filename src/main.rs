use event_api::config::AppConfig;
use event_api::{db, routes};

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DB_* and APP_PORT
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env();
    tracing::info!(
        "connecting to database {} at {}:{}",
        config.database.database,
        config.database.host,
        config.database.port
    );

    let pool = db::connect(&config.database)
        .await
        .unwrap_or_else(|e| panic!("unable to connect to database: {}", e));

    let app = routes::app(pool);

    let bind_addr = format!("0.0.0.0:{}", config.listen_port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    tracing::info!("event api listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}
