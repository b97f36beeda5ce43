mod model;
mod server;

use tokio::net::TcpListener;

use crate::server::{
    config::Config, error::AppError, router, service::token::JwtService, startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let jwt = JwtService::new(config.jwt);

    let app = router::router(AppState::new(db, jwt));

    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    Ok(())
}
