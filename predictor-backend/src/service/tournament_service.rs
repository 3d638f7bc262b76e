// src/service/tournament_service.rs
use crate::domain::knockout_slot::KnockoutSlot;
use crate::repository::match_repository::MatchRepository;
use async_trait::async_trait;
use sea_orm::DbErr;
use std::sync::Arc;
use tracing::info;

/// 大会ブラケット操作のインターフェース
///
/// 勝ち上がりの反映方法は実装側の責務。呼び出し側は成功か失敗かだけを見る。
#[async_trait]
pub trait TournamentOps: Send + Sync {
    async fn assign_knockout_slot(
        &self,
        match_id: &str,
        team_id: &str,
        slot: KnockoutSlot,
    ) -> Result<(), DbErr>;
}

/// 試合行の枠カラムを直接書き換える実装
pub struct TournamentService {
    match_repo: Arc<MatchRepository>,
}

impl TournamentService {
    pub fn new(match_repo: Arc<MatchRepository>) -> Self {
        Self { match_repo }
    }
}

#[async_trait]
impl TournamentOps for TournamentService {
    async fn assign_knockout_slot(
        &self,
        match_id: &str,
        team_id: &str,
        slot: KnockoutSlot,
    ) -> Result<(), DbErr> {
        let updated = self
            .match_repo
            .assign_team_to_slot(match_id, team_id, slot)
            .await?;

        info!(
            match_id = %updated.id,
            team_id = %team_id,
            slot = %slot,
            stage = %updated.stage,
            "Knockout slot assigned"
        );

        Ok(())
    }
}
