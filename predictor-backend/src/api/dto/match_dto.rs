// predictor-backend/src/api/dto/match_dto.rs

use crate::domain::knockout_slot::KnockoutSlot;
use crate::domain::match_model;
use crate::error::{AppError, AppResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

pub const MISSING_OVERRIDE_FIELDS: &str = "Missing required fields: matchId, teamId, slot";
pub const INVALID_SLOT: &str = "Invalid slot: must be 'home' or 'away'";
pub const MISSING_MATCH_ID: &str = "Missing required field: matchId";
pub const MISSING_BONUS_FLAG: &str = "Missing required field: isBonusMatch";

// --- Request DTOs ---

/// ノックアウト枠の上書きリクエスト
///
/// 空文字列は未指定として扱う。
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OverrideSlotRequest {
    #[validate(required, length(min = 1))]
    pub match_id: Option<String>,
    #[validate(required, length(min = 1))]
    pub team_id: Option<String>,
    #[validate(required, length(min = 1))]
    pub slot: Option<String>,
}

/// 検証済みの枠上書きコマンド
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverrideSlotCommand {
    pub match_id: String,
    pub team_id: String,
    pub slot: KnockoutSlot,
}

impl OverrideSlotRequest {
    /// 必須項目 → 枠の値、の順で検証する
    pub fn into_command(self) -> AppResult<OverrideSlotCommand> {
        self.validate()
            .map_err(|_| AppError::BadRequest(MISSING_OVERRIDE_FIELDS.to_string()))?;

        let (Some(match_id), Some(team_id), Some(slot)) = (self.match_id, self.team_id, self.slot)
        else {
            return Err(AppError::BadRequest(MISSING_OVERRIDE_FIELDS.to_string()));
        };

        let slot = slot
            .parse::<KnockoutSlot>()
            .map_err(|_| AppError::BadRequest(INVALID_SLOT.to_string()))?;

        Ok(OverrideSlotCommand {
            match_id,
            team_id,
            slot,
        })
    }
}

/// ボーナス試合フラグの更新リクエスト
///
/// `isBonusMatch` の省略と `null` はどちらも未指定として拒否する。
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BonusMatchRequest {
    #[validate(required, length(min = 1))]
    pub match_id: Option<String>,
    #[validate(required)]
    pub is_bonus_match: Option<bool>,
}

impl BonusMatchRequest {
    /// 検証済みの (試合ID, フラグ) を返す。試合IDの欠落を先に報告する
    pub fn into_parts(self) -> AppResult<(String, bool)> {
        if let Err(errors) = self.validate() {
            let message = if errors.field_errors().contains_key("match_id") {
                MISSING_MATCH_ID
            } else {
                MISSING_BONUS_FLAG
            };
            return Err(AppError::BadRequest(message.to_string()));
        }

        let (Some(match_id), Some(is_bonus_match)) = (self.match_id, self.is_bonus_match) else {
            return Err(AppError::BadRequest(MISSING_MATCH_ID.to_string()));
        };

        Ok((match_id, is_bonus_match))
    }
}

// --- Response DTOs ---

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OverrideSlotResponse {
    pub match_id: String,
    pub team_id: String,
    pub slot: KnockoutSlot,
}

impl From<OverrideSlotCommand> for OverrideSlotResponse {
    fn from(command: OverrideSlotCommand) -> Self {
        Self {
            match_id: command.match_id,
            team_id: command.team_id,
            slot: command.slot,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MatchDto {
    pub id: String,
    pub stage: String,
    pub home_team_id: Option<String>,
    pub away_team_id: Option<String>,
    pub is_bonus_match: bool,
    pub kickoff_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<match_model::Model> for MatchDto {
    fn from(model: match_model::Model) -> Self {
        Self {
            id: model.id,
            stage: model.stage,
            home_team_id: model.home_team_id,
            away_team_id: model.away_team_id,
            is_bonus_match: model.is_bonus_match,
            kickoff_at: model.kickoff_at,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
