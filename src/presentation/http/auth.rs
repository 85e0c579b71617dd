use axum::{Json, Router, extract::State, routing::post};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::application::services::user_auth::LoginOutcome;
use crate::bootstrap::app_context::AppContext;
use crate::presentation::http::envelope::ApiResponse;
use crate::presentation::http::error::ApiError;

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Invokes exactly one service operation and wraps the outcome; any error
/// forwards untouched to the shared dispatch point.
#[utoipa::path(
    post,
    path = "/login",
    tag = "Auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "User projection plus Bearer token pair"),
        (status = 401, description = "Password mismatch"),
        (status = 404, description = "Unknown email"),
    )
)]
pub async fn login(
    State(ctx): State<AppContext>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<ApiResponse<LoginOutcome>>, ApiError> {
    let outcome = ctx.user_auth().login(&req.email, &req.password).await?;
    Ok(Json(ApiResponse::success_with_message(
        200,
        outcome,
        "Login successfully",
    )))
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new().route("/login", post(login)).with_state(ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::service_info::{ServiceInfo, ServiceInfoService};
    use crate::application::services::user_auth::{TokenPair, UserAuthService};
    use crate::bootstrap::app_context::AppServices;
    use crate::bootstrap::config::{Config, DatabaseConfig, DatabaseDriver};
    use crate::domain::error::DomainError;
    use crate::domain::user::UserDto;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use serde_json::json;
    use std::sync::Arc;
    use tower::ServiceExt;

    enum Behavior {
        Success,
        WrongPassword,
        UnknownEmail,
    }

    struct ScriptedAuthService(Behavior);

    #[async_trait]
    impl UserAuthService for ScriptedAuthService {
        async fn login(&self, email: &str, _password: &str) -> Result<LoginOutcome, DomainError> {
            match self.0 {
                Behavior::Success => Ok(LoginOutcome {
                    user: UserDto {
                        id: 42,
                        username: "jdoe".into(),
                        email: email.into(),
                        active: true,
                        display_name: "J. Doe".into(),
                        first_name: "John".into(),
                        last_name: "Doe".into(),
                    },
                    token: TokenPair {
                        token_type: "Bearer".into(),
                        token: "access".into(),
                        refresh_token: "refresh".into(),
                    },
                }),
                Behavior::WrongPassword => Err(DomainError::Unauthorized(format!(
                    "Invalid password for user: {email}"
                ))),
                Behavior::UnknownEmail => Err(DomainError::RecordNotFound(format!(
                    "User with email {email} is not found"
                ))),
            }
        }
    }

    struct NoInfo;

    #[async_trait]
    impl ServiceInfoService for NoInfo {
        async fn get_service_info(&self) -> Result<ServiceInfo, DomainError> {
            Err(DomainError::Internal(anyhow::anyhow!("not under test")))
        }
    }

    // Explicit literal so ambient environment variables cannot change what
    // the handlers under test see.
    fn test_config() -> Config {
        Config {
            service_name: "boilerplate".into(),
            app_version: "1.0.0".into(),
            host: "localhost".into(),
            port: 5000,
            log_level: "debug".into(),
            secret_key: "secret".into(),
            access_token_ttl_secs: 60 * 60 * 24,
            refresh_token_ttl_secs: 60 * 60 * 24 * 7,
            database: DatabaseConfig {
                driver: DatabaseDriver::Postgres,
                host: "localhost".into(),
                port: 5432,
                user: "postgres".into(),
                password: "postgres".into(),
                name: "postgres".into(),
            },
        }
    }

    fn app(behavior: Behavior) -> Router {
        let ctx = AppContext::new(
            test_config(),
            AppServices::new(Arc::new(ScriptedAuthService(behavior)), Arc::new(NoInfo)),
        );
        routes(ctx)
    }

    async fn post_login(app: Router) -> (StatusCode, serde_json::Value) {
        let body = json!({"email": "jdoe@example.com", "password": "hunter2"});
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/login")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(serde_json::to_vec(&body).unwrap()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn successful_login_wraps_user_and_token_pair() {
        let (status, value) = post_login(app(Behavior::Success)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(value["status"], "success");
        assert_eq!(value["message"], "Login successfully");
        assert_eq!(value["data"]["user"]["email"], "jdoe@example.com");
        assert_eq!(value["data"]["token"]["type"], "Bearer");
        assert_eq!(value["data"]["token"]["refreshToken"], "refresh");
    }

    #[tokio::test]
    async fn wrong_password_maps_to_401() {
        let (status, value) = post_login(app(Behavior::WrongPassword)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(value["code"], 401);
        assert_eq!(value["status"], "error");
        assert!(value.get("data").is_none());
    }

    #[tokio::test]
    async fn unknown_email_maps_to_404() {
        let (status, value) = post_login(app(Behavior::UnknownEmail)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(value["code"], 404);
        assert_eq!(
            value["message"],
            "User with email jdoe@example.com is not found"
        );
    }
}
