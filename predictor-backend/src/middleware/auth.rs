// predictor-backend/src/middleware/auth.rs

use crate::api::AppState;
use crate::domain::principal::Principal;
use crate::error::AppError;
use crate::utils::error_helper::unauthorized_error;
use crate::utils::jwt::JwtManager;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Request},
    http::{header, request::Parts, HeaderMap, HeaderValue, Method},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::{debug, info};

/// 現在のリクエストの主体を返すセッションプロバイダー
///
/// セッションが無い・無効な場合は `None`。副作用は持たない。
#[async_trait]
pub trait SessionProvider: Send + Sync {
    async fn current_principal(&self, parts: &Parts) -> Option<Principal>;
}

/// JWT（Bearer ヘッダー、なければ Cookie）によるセッションプロバイダー
pub struct JwtSessionProvider {
    jwt_manager: Arc<JwtManager>,
    cookie_name: String,
}

impl JwtSessionProvider {
    pub fn new(jwt_manager: Arc<JwtManager>, cookie_name: impl Into<String>) -> Self {
        Self {
            jwt_manager,
            cookie_name: cookie_name.into(),
        }
    }
}

#[async_trait]
impl SessionProvider for JwtSessionProvider {
    async fn current_principal(&self, parts: &Parts) -> Option<Principal> {
        let token = extract_token(&parts.headers, &self.cookie_name)?;

        match self.jwt_manager.verify_session_token(&token) {
            Ok(claims) => Some(claims.principal),
            Err(e) => {
                debug!(path = %parts.uri.path(), error = %e, "Session token rejected");
                None
            }
        }
    }
}

/// 管理者として認可済みのリクエスト
///
/// ハンドラー引数に置くと、ボディの抽出より先に認可が行われる。
#[derive(Debug, Clone)]
pub struct AdminSession(pub Principal);

impl AdminSession {
    pub fn principal(&self) -> &Principal {
        &self.0
    }
}

/// 主体が管理者であることを確認する
pub fn require_admin(principal: Option<Principal>, path: &str) -> Result<Principal, AppError> {
    let Some(principal) = principal else {
        return Err(unauthorized_error("Authentication required", path));
    };

    if !principal.is_admin() {
        return Err(unauthorized_error("Admin access required", path));
    }

    Ok(principal)
}

impl FromRequestParts<AppState> for AdminSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let principal = state.session_provider.current_principal(parts).await;
        let admin = require_admin(principal, parts.uri.path())?;

        info!(
            user_id = %admin.user_id,
            username = %admin.username,
            path = %parts.uri.path(),
            "Admin authenticated request"
        );

        Ok(AdminSession(admin))
    }
}

/// CORS ミドルウェア設定
pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| origin.parse::<HeaderValue>().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
        .allow_credentials(true) // Cookie送信を許可
        .max_age(std::time::Duration::from_secs(3600))
}

/// セキュリティヘッダーミドルウェア
pub async fn security_headers_middleware(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;

    let headers = response.headers_mut();
    headers.insert(
        "X-Content-Type-Options",
        HeaderValue::from_static("nosniff"),
    );
    headers.insert("X-Frame-Options", HeaderValue::from_static("DENY"));
    headers.insert(
        "Referrer-Policy",
        HeaderValue::from_static("strict-origin-when-cross-origin"),
    );
    headers.insert(
        "Content-Security-Policy",
        HeaderValue::from_static("default-src 'none'; frame-ancestors 'none'"),
    );

    response
}

// --- ヘルパー関数 ---

/// リクエストからトークンを抽出
fn extract_token(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    // Authorization ヘッダーからトークンを取得
    let auth_header = headers
        .get(header::AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .and_then(|auth_str| auth_str.strip_prefix("Bearer "))
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty());

    // Cookieからトークンを取得（フォールバック）
    auth_header.or_else(|| {
        CookieJar::from_headers(headers)
            .get(cookie_name)
            .map(|cookie| cookie.value().to_string())
    })
}
