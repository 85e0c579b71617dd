use std::sync::Arc;

use axum::Router;
use dotenvy::dotenv;
use tower_http::trace::TraceLayer;
use tracing::info;

use api::application::ports::clock::SystemClock;
use api::application::services::service_info::ConfigServiceInfoService;
use api::application::services::user_auth::JwtUserAuthService;
use api::bootstrap::app_context::AppContext;
use api::bootstrap::config::Config;
use api::bootstrap::container::Container;
use api::infrastructure::db::repositories::user_auth_repository_sqlx::SqlxUserAuthRepository;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::presentation::http::health::check_health,
        api::presentation::http::service_info::get_service_info,
        api::presentation::http::auth::login,
    ),
    components(schemas(
        api::presentation::http::auth::LoginRequest,
        api::domain::user::UserDto,
        api::application::services::user_auth::TokenPair,
        api::application::services::user_auth::LoginOutcome,
        api::application::services::service_info::ServiceInfo,
    )),
    tags(
        (name = "Health", description = "Liveness checks"),
        (name = "ServiceInfo", description = "Process identity and version"),
        (name = "Auth", description = "Credential verification and token issuance")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let cfg = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| {
            format!("api={},tower_http=info,axum=info", cfg.log_level)
        }))
        .init();

    info!(
        service = %cfg.service_name,
        version = %cfg.app_version,
        "Starting API boilerplate"
    );

    let pool = api::infrastructure::db::connect_pool(&cfg.database.url()).await?;

    // Bindings are registered once here; the object graph is fixed before
    // the server starts.
    let mut container = Container::new();
    container.register_user_auth_repository(|logger| {
        SqlxUserAuthRepository::new(logger, pool.clone(), cfg.database.driver)
    });
    let user_repo = container.resolve_user_auth_repository()?;
    container.register_user_auth_service(|logger| {
        JwtUserAuthService::new(
            logger,
            user_repo,
            cfg.secret_key.clone(),
            cfg.access_token_ttl_secs,
            cfg.refresh_token_ttl_secs,
        )
    });
    container.register_service_info_service(|logger| {
        ConfigServiceInfoService::new(
            logger,
            cfg.service_name.clone(),
            cfg.app_version.clone(),
            Arc::new(SystemClock),
        )
    });

    let ctx = AppContext::from_container(cfg.clone(), &container)?;

    let app = Router::new()
        .merge(api::presentation::http::health::routes())
        .merge(api::presentation::http::service_info::routes(ctx.clone()))
        .merge(api::presentation::http::auth::routes(ctx.clone()))
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", cfg.host, cfg.port);
    info!(%addr, "HTTP API listening");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
