use anyhow::Context;
use axum::Router;
use std::sync::Arc;
use taskdock::{
    api,
    auth::jwt::AuthService,
    store::{TaskStore, UserStore},
    AppState, Config,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "taskdock=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // A missing JWT_SECRET aborts here; the server never starts without a
    // signing secret.
    let config =
        Config::from_env().map_err(|e| anyhow::anyhow!("configuration error: {}", e))?;

    tokio::fs::create_dir_all(&config.storage.data_dir)
        .await
        .with_context(|| format!("creating data dir {}", config.storage.data_dir.display()))?;

    let auth_service = Arc::new(AuthService::new(
        config.auth.jwt_secret.clone(),
        config.auth.token_expiry,
    ));

    let state = AppState {
        users: Arc::new(UserStore::new(config.storage.data_dir.join("users.json"))),
        tasks: Arc::new(TaskStore::new(config.storage.data_dir.join("tasks.json"))),
        auth_service: auth_service.clone(),
        config: Arc::new(config.clone()),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .nest("/api", api::routes::create_router(auth_service))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state);

    #[cfg(feature = "swagger-ui")]
    let app = {
        use utoipa::OpenApi;
        app.merge(
            utoipa_swagger_ui::SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", api::ApiDoc::openapi()),
        )
    };

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {}", addr))?;

    tracing::info!(%addr, "taskdock listening");

    axum::serve(listener, app).await?;

    Ok(())
}
