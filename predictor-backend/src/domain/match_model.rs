// predictor-backend/src/domain/match_model.rs
use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ConnectionTrait, DbErr, Set};
use serde::{Deserialize, Serialize};

/// 試合エンティティ
///
/// ノックアウト枠は `home_team_id` / `away_team_id` でチームを参照する。
/// 行の作成・削除はこのサービスでは行わない（管理操作による更新のみ）。
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "matches")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Text")]
    pub id: String,
    #[sea_orm(column_type = "Text")]
    pub stage: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub home_team_id: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub away_team_id: Option<String>,
    pub is_bonus_match: bool,
    #[sea_orm(nullable)]
    pub kickoff_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::team_model::Entity",
        from = "Column::HomeTeamId",
        to = "super::team_model::Column::Id"
    )]
    HomeTeam,
    #[sea_orm(
        belongs_to = "super::team_model::Entity",
        from = "Column::AwayTeamId",
        to = "super::team_model::Column::Id"
    )]
    AwayTeam,
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        // 更新の場合のみ updated_at を更新
        if !insert {
            self.updated_at = Set(Utc::now());
        }
        Ok(self)
    }
}
