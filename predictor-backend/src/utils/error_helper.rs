// predictor-backend/src/utils/error_helper.rs

//! エラーハンドリングの統一化ヘルパー
//!
//! サービス層とハンドラー層で共通して使用するエラー処理パターンを提供します。
//! コラボレーター（DB・大会処理）のエラーはここでログに残し、
//! クライアントには汎用メッセージだけを返します。

use crate::error::AppError;
use tracing::{error, warn};

// =============================================================================
// ログ付きエラー変換パターン
// =============================================================================

/// 内部サーバーエラーをログ付きで生成
///
/// # Arguments
/// * `error` - 元のエラー
/// * `context` - エラーが発生したコンテキスト
/// * `user_message` - ユーザーに表示するメッセージ
pub fn internal_server_error<E: std::fmt::Display>(
    error: E,
    context: &str,
    user_message: &str,
) -> AppError {
    error!(
        error = %error,
        context = %context,
        "Internal server error occurred"
    );
    AppError::InternalServerError(user_message.to_string())
}

/// 認証エラーをログ付きで生成
pub fn unauthorized_error(message: &str, context: &str) -> AppError {
    warn!(
        context = %context,
        message = %message,
        "Unauthorized access attempt"
    );
    AppError::Unauthorized(message.to_string())
}

// =============================================================================
// Result型のヘルパートレイト
// =============================================================================

/// Result型にエラー変換ヘルパーメソッドを追加するトレイト
pub trait ErrorHelperExt<T> {
    /// 内部サーバーエラーに変換
    fn map_internal_error(self, context: &str, user_message: &str) -> Result<T, AppError>;
}

impl<T, E> ErrorHelperExt<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn map_internal_error(self, context: &str, user_message: &str) -> Result<T, AppError> {
        self.map_err(|e| internal_server_error(e, context, user_message))
    }
}
