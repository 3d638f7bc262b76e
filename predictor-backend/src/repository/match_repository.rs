// src/repository/match_repository.rs
use crate::db::DbPool;
use crate::domain::knockout_slot::KnockoutSlot;
use crate::domain::match_model::{self, ActiveModel as MatchActiveModel};
use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DbErr, Set};

/// 試合レコードの永続化インターフェース
///
/// ハンドラーからは trait object として扱い、テストでは偽実装に差し替える。
#[async_trait]
pub trait MatchStore: Send + Sync {
    /// `is_bonus_match` だけを更新し、更新後のレコードを返す。
    /// 存在しない ID は `DbErr` として返る。
    async fn set_bonus_match(
        &self,
        match_id: &str,
        is_bonus_match: bool,
    ) -> Result<match_model::Model, DbErr>;
}

pub struct MatchRepository {
    db: DbPool,
}

impl MatchRepository {
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }

    /// ノックアウト枠にチームを割り当てる
    ///
    /// 単一の UPDATE 文なので、行単位では原子的。同じ枠への同時更新は後勝ち。
    pub async fn assign_team_to_slot(
        &self,
        match_id: &str,
        team_id: &str,
        slot: KnockoutSlot,
    ) -> Result<match_model::Model, DbErr> {
        let mut active_model = MatchActiveModel {
            id: Set(match_id.to_string()),
            ..Default::default()
        };

        match slot {
            KnockoutSlot::Home => active_model.home_team_id = Set(Some(team_id.to_string())),
            KnockoutSlot::Away => active_model.away_team_id = Set(Some(team_id.to_string())),
        }

        active_model.update(&self.db).await
    }
}

#[async_trait]
impl MatchStore for MatchRepository {
    async fn set_bonus_match(
        &self,
        match_id: &str,
        is_bonus_match: bool,
    ) -> Result<match_model::Model, DbErr> {
        let active_model = MatchActiveModel {
            id: Set(match_id.to_string()),
            is_bonus_match: Set(is_bonus_match),
            ..Default::default()
        };

        active_model.update(&self.db).await
    }
}
