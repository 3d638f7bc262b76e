// src/service/admin_service.rs

use crate::api::dto::match_dto::{
    BonusMatchRequest, MatchDto, OverrideSlotRequest, OverrideSlotResponse,
};
use crate::domain::principal::Principal;
use crate::error::AppResult;
use crate::repository::match_repository::MatchStore;
use crate::service::tournament_service::TournamentOps;
use crate::utils::error_helper::ErrorHelperExt;
use std::sync::Arc;
use tracing::{info, warn};

/// 管理者向けの試合操作
///
/// 各操作は「検証 → コラボレーター呼び出し1回 → 結果」の一方向。
/// 認可は呼び出し前に済んでいる前提で、`admin` は監査ログ用に受け取る。
pub struct AdminService {
    match_store: Arc<dyn MatchStore>,
    tournament: Arc<dyn TournamentOps>,
}

impl AdminService {
    pub fn new(match_store: Arc<dyn MatchStore>, tournament: Arc<dyn TournamentOps>) -> Self {
        Self {
            match_store,
            tournament,
        }
    }

    /// ノックアウト枠を管理者権限で上書き
    pub async fn override_knockout_slot(
        &self,
        admin: &Principal,
        request: OverrideSlotRequest,
    ) -> AppResult<OverrideSlotResponse> {
        let command = request
            .into_command()
            .inspect_err(|e| warn!(error = %e, "Rejected knockout slot override"))?;

        self.tournament
            .assign_knockout_slot(&command.match_id, &command.team_id, command.slot)
            .await
            .map_internal_error(
                "AdminService::override_knockout_slot",
                "Failed to override knockout slot",
            )?;

        info!(
            admin_id = %admin.user_id,
            match_id = %command.match_id,
            team_id = %command.team_id,
            slot = %command.slot,
            "Knockout slot overridden by admin"
        );

        Ok(command.into())
    }

    /// ボーナス試合フラグを設定
    pub async fn set_bonus_match(
        &self,
        admin: &Principal,
        request: BonusMatchRequest,
    ) -> AppResult<MatchDto> {
        let (match_id, is_bonus_match) = request
            .into_parts()
            .inspect_err(|e| warn!(error = %e, "Rejected bonus match update"))?;

        let updated = self
            .match_store
            .set_bonus_match(&match_id, is_bonus_match)
            .await
            .map_internal_error(
                "AdminService::set_bonus_match",
                "Failed to update bonus match setting",
            )?;

        info!(
            admin_id = %admin.user_id,
            match_id = %updated.id,
            is_bonus_match = updated.is_bonus_match,
            "Bonus match flag updated by admin"
        );

        Ok(updated.into())
    }
}
