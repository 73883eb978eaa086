use sea_orm::Database;
use tracing::info;

use lostfound_claims::config::ClaimsConfig;
use lostfound_claims::infra::db::DbNotificationRepository;
use lostfound_claims::infra::dispatcher::{notification_channel, run_notification_worker};
use lostfound_claims::router::build_router;
use lostfound_claims::state::AppState;
use lostfound_core::config::Config;
use lostfound_core::shutdown::shutdown_signal;
use lostfound_core::tracing::init_tracing;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = ClaimsConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let (notifications, notification_rx) =
        notification_channel(config.notification_queue_capacity);
    let worker = tokio::spawn(run_notification_worker(
        DbNotificationRepository { db: db.clone() },
        notification_rx,
    ));

    let state = AppState {
        db,
        jwt_secret: config.jwt_secret,
        http_client: reqwest::Client::new(),
        scorer_url: config.scorer_url,
        upload_dir: config.upload_dir.into(),
        upload_base_url: config.upload_base_url,
        notifications,
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.claims_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("claims service listening on {addr}");
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server error");

    // The router (and every dispatcher clone) is gone; the worker exits once drained.
    if let Err(e) = worker.await {
        tracing::error!(error = %e, "notification worker panicked");
    }
    info!("claims service stopped");
}
