use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Matches::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Matches::Id).text().not_null().primary_key())
                    .col(
                        ColumnDef::new(Matches::Stage)
                            .text()
                            .not_null()
                            .default("group"),
                    )
                    .col(ColumnDef::new(Matches::HomeTeamId).text())
                    .col(ColumnDef::new(Matches::AwayTeamId).text())
                    .col(
                        ColumnDef::new(Matches::IsBonusMatch)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Matches::KickoffAt).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(Matches::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Matches::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // ノックアウト枠のチーム参照（チーム削除時は枠を空ける）
        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name("fk_matches_home_team_id")
                    .from(Matches::Table, Matches::HomeTeamId)
                    .to(Teams::Table, Teams::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name("fk_matches_away_team_id")
                    .from(Matches::Table, Matches::AwayTeamId)
                    .to(Teams::Table, Teams::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_matches_stage")
                    .table(Matches::Table)
                    .col(Matches::Stage)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_matches_is_bonus_match")
                    .table(Matches::Table)
                    .col(Matches::IsBonusMatch)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Matches::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Matches {
    Table,
    Id,
    Stage,
    HomeTeamId,
    AwayTeamId,
    IsBonusMatch,
    KickoffAt,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Teams {
    Table,
    Id,
}
