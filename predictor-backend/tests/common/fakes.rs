// tests/common/fakes.rs
//
// DB や認証基盤の代わりに使う偽実装。呼び出しを記録して検証に使う。

use async_trait::async_trait;
use axum::http::{header, request::Parts};
use chrono::Utc;
use predictor_backend::{
    domain::{knockout_slot::KnockoutSlot, match_model, principal::Principal},
    middleware::auth::SessionProvider,
    repository::match_repository::MatchStore,
    service::tournament_service::TournamentOps,
};
use sea_orm::DbErr;
use std::collections::HashMap;
use std::sync::Mutex;
use uuid::Uuid;

pub const ADMIN_TOKEN: &str = "admin-token";
pub const MEMBER_TOKEN: &str = "member-token";

/// 固定トークン → 主体 の対応表で応答するセッションプロバイダー
pub struct FakeSessionProvider {
    sessions: HashMap<String, Principal>,
}

impl FakeSessionProvider {
    pub fn new() -> Self {
        let mut sessions = HashMap::new();
        sessions.insert(
            ADMIN_TOKEN.to_string(),
            Principal::new(Uuid::new_v4(), "grandma", "admin"),
        );
        sessions.insert(
            MEMBER_TOKEN.to_string(),
            Principal::new(Uuid::new_v4(), "cousin", "member"),
        );
        Self { sessions }
    }
}

#[async_trait]
impl SessionProvider for FakeSessionProvider {
    async fn current_principal(&self, parts: &Parts) -> Option<Principal> {
        let token = parts
            .headers
            .get(header::AUTHORIZATION)?
            .to_str()
            .ok()?
            .strip_prefix("Bearer ")?;
        self.sessions.get(token).cloned()
    }
}

pub fn sample_match(id: &str) -> match_model::Model {
    match_model::Model {
        id: id.to_string(),
        stage: "round_of_16".to_string(),
        home_team_id: None,
        away_team_id: None,
        is_bonus_match: false,
        kickoff_at: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

/// メモリ上の試合テーブル
pub struct InMemoryMatchStore {
    matches: Mutex<HashMap<String, match_model::Model>>,
    calls: Mutex<Vec<(String, bool)>>,
    fail_with: Option<String>,
}

impl InMemoryMatchStore {
    pub fn with_matches(ids: &[&str]) -> Self {
        let matches = ids
            .iter()
            .map(|id| (id.to_string(), sample_match(id)))
            .collect();
        Self {
            matches: Mutex::new(matches),
            calls: Mutex::new(Vec::new()),
            fail_with: None,
        }
    }

    /// 常に接続エラーを返すストア
    pub fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_string()),
            ..Self::with_matches(&[])
        }
    }

    pub fn calls(&self) -> Vec<(String, bool)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn get(&self, id: &str) -> Option<match_model::Model> {
        self.matches.lock().unwrap().get(id).cloned()
    }
}

#[async_trait]
impl MatchStore for InMemoryMatchStore {
    async fn set_bonus_match(
        &self,
        match_id: &str,
        is_bonus_match: bool,
    ) -> Result<match_model::Model, DbErr> {
        self.calls
            .lock()
            .unwrap()
            .push((match_id.to_string(), is_bonus_match));

        if let Some(message) = &self.fail_with {
            return Err(DbErr::Conn(sea_orm::RuntimeErr::Internal(message.clone())));
        }

        let mut matches = self.matches.lock().unwrap();
        let record = matches.get_mut(match_id).ok_or(DbErr::RecordNotUpdated)?;
        record.is_bonus_match = is_bonus_match;
        record.updated_at = Utc::now();
        Ok(record.clone())
    }
}

/// 呼び出しを記録するだけの大会処理
pub struct RecordingTournament {
    calls: Mutex<Vec<(String, String, KnockoutSlot)>>,
    fail_with: Option<String>,
}

impl RecordingTournament {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_with: None,
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_with: Some(message.to_string()),
        }
    }

    pub fn calls(&self) -> Vec<(String, String, KnockoutSlot)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TournamentOps for RecordingTournament {
    async fn assign_knockout_slot(
        &self,
        match_id: &str,
        team_id: &str,
        slot: KnockoutSlot,
    ) -> Result<(), DbErr> {
        self.calls
            .lock()
            .unwrap()
            .push((match_id.to_string(), team_id.to_string(), slot));

        match &self.fail_with {
            Some(message) => Err(DbErr::Custom(message.clone())),
            None => Ok(()),
        }
    }
}
