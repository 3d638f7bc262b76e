// src/db.rs
use crate::config::DatabaseConfig;
use migration::Migrator;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;
use std::time::Duration;

pub type DbPool = DatabaseConnection;

pub async fn create_db_pool(config: &DatabaseConfig) -> Result<DbPool, DbErr> {
    let mut opt = ConnectOptions::new(config.url.clone());

    // 接続オプションを設定
    opt.max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(config.connect_timeout)
        .acquire_timeout(config.connect_timeout)
        .idle_timeout(Duration::from_secs(5 * 60))
        .max_lifetime(Duration::from_secs(30 * 60))
        .sqlx_logging(false);

    Database::connect(opt).await
}

// 未適用のマイグレーションを起動時に適用する
pub async fn run_migrations(db: &DbPool) -> Result<(), DbErr> {
    Migrator::up(db, None).await
}
