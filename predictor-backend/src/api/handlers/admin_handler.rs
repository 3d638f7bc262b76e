// predictor-backend/src/api/handlers/admin_handler.rs

use crate::api::dto::common::ApiResponse;
use crate::api::dto::match_dto::{
    BonusMatchRequest, MatchDto, OverrideSlotRequest, OverrideSlotResponse,
};
use crate::api::AppState;
use crate::error::AppResult;
use crate::extractors::JsonBody;
use crate::middleware::auth::AdminSession;
use axum::{extract::State, routing::post, Json, Router};

// === 試合管理API ===

/// ノックアウト枠の上書き
pub async fn override_match_slot_handler(
    State(app_state): State<AppState>,
    admin: AdminSession,
    JsonBody(request): JsonBody<OverrideSlotRequest>,
) -> AppResult<Json<ApiResponse<OverrideSlotResponse>>> {
    let result = app_state
        .admin_service
        .override_knockout_slot(admin.principal(), request)
        .await?;

    Ok(Json(ApiResponse::success(
        "Knockout slot overridden successfully",
        result,
    )))
}

/// ボーナス試合フラグの設定
pub async fn set_bonus_match_handler(
    State(app_state): State<AppState>,
    admin: AdminSession,
    JsonBody(request): JsonBody<BonusMatchRequest>,
) -> AppResult<Json<ApiResponse<MatchDto>>> {
    let updated = app_state
        .admin_service
        .set_bonus_match(admin.principal(), request)
        .await?;

    Ok(Json(ApiResponse::success(
        "Bonus match setting updated successfully",
        updated,
    )))
}

// --- Router Setup ---

pub fn admin_router(app_state: AppState) -> Router {
    // 認可は各ハンドラーの AdminSession 抽出で行う
    Router::new()
        .route(
            "/api/admin/matches/override",
            post(override_match_slot_handler),
        )
        .route(
            "/api/admin/settings/bonus-match",
            post(set_bonus_match_handler),
        )
        .with_state(app_state)
}
