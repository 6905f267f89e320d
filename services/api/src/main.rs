use anyhow::Context as _;
use tracing::info;

use skyview_auth_types::bearer::TokenSecret;
use skyview_core::{config::Config, tracing::init_tracing};

use skyview_api::config::ApiConfig;
use skyview_api::infra::db::{self, MongoStore};
use skyview_api::router::build_app;
use skyview_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = ApiConfig::from_env().context("load configuration")?;

    let db = db::connect(&config.connection_uri()?, &config.db_name)
        .await
        .context("connect to MongoDB")?;

    let state = AppState {
        store: MongoStore::new(db),
        jwt_secret: TokenSecret::new(config.access_token_secret.as_str()),
    };

    let app = build_app(state, &config.cors_origins);
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("bind {addr}"))?;

    info!("skyview apartment listening on port {}", config.port);
    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
