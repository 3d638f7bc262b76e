// migration/src/lib.rs
pub use sea_orm_migration::prelude::*;

// 大会データの基本テーブル
mod m20260601_000001_create_teams_table;
mod m20260601_000002_create_matches_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            // 1. チーム（依存関係なし）
            Box::new(m20260601_000001_create_teams_table::Migration),
            // 2. 試合（teams への外部キーを持つ）
            Box::new(m20260601_000002_create_matches_table::Migration),
        ]
    }
}
