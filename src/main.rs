mod model;
mod server;

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    config::Config, error::AppError, router, router::ApiDoc, startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    startup::init_tracing(&config);

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db, &config).await?;
    let state = AppState::from_config(db, &config);

    let mut app = router::router()
        .with_state(state)
        .layer(session)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    if let Some(cors) = startup::cors_layer(&config)? {
        app = app.layer(cors);
    }

    tracing::info!("Starting server on {}", config.bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui",
        config.bind_address
    );

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
