// predictor-backend/src/domain/principal.rs
use super::role::RoleName;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// リクエストに紐づく認証済みの主体
///
/// セッションプロバイダーがリクエストごとに生成する。永続化はしない。
/// `role_name` は発行元のクレームをそのまま保持し、未知のロールも受け入れる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub user_id: Uuid,
    pub username: String,
    pub role_name: String,
}

impl Principal {
    pub fn new(user_id: Uuid, username: impl Into<String>, role_name: impl Into<String>) -> Self {
        Self {
            user_id,
            username: username.into(),
            role_name: role_name.into(),
        }
    }

    pub fn role(&self) -> Option<RoleName> {
        RoleName::from_str(&self.role_name)
    }

    /// 管理者かチェック
    pub fn is_admin(&self) -> bool {
        self.role().is_some_and(|role| role.is_admin())
    }
}
