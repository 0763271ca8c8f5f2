mod model;
mod server;

use tower_http::cors::CorsLayer;

use crate::server::{
    config::Config,
    error::AppError,
    scheduler::meal_reminders,
    service::{ai::AiClient, mail::MailClient, storage::StorageClient},
    startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db).await?;
    let http_client = startup::setup_reqwest_client()?;

    let mail = MailClient::new(http_client.clone(), &config);
    let storage = StorageClient::new(http_client.clone(), &config);
    let ai = AiClient::from_config(http_client.clone(), &config);

    tracing::info!("Starting server");

    // Start attendance reminder scheduler
    let scheduler_db = db.clone();
    let scheduler_mail = mail.clone();
    let reminder_hour = config.reminder_hour;
    tokio::spawn(async move {
        if let Err(e) =
            meal_reminders::start_scheduler(scheduler_db, scheduler_mail, reminder_hour).await
        {
            tracing::error!("Attendance reminder scheduler error: {}", e);
        }
    });

    let router = server::router::router()
        .with_state(AppState::new(
            db,
            mail,
            storage,
            ai,
            config.app_url.clone(),
            config.jwt_secret.clone(),
        ))
        .layer(session)
        .layer(CorsLayer::permissive());

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", addr);
    axum::serve(listener, router).await?;

    Ok(())
}
