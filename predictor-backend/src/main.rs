// src/main.rs
use predictor_backend::{
    api::{build_app, AppState},
    config::AppConfig,
    db::{create_db_pool, run_migrations},
    logging::init_tracing,
    middleware::auth::JwtSessionProvider,
    repository::match_repository::MatchRepository,
    service::{admin_service::AdminService, tournament_service::TournamentService},
    utils::jwt::JwtManager,
};
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // トレーシングの設定
    init_tracing("predictor_backend=info,tower_http=info");

    tracing::info!("Starting Predictor Backend server...");

    // 設定を読み込む
    let app_config = Arc::new(AppConfig::from_env()?);
    tracing::info!(
        environment = %app_config.environment,
        server_addr = %app_config.server_addr(),
        "Configuration loaded"
    );

    // データベース接続を作成
    let db_pool = create_db_pool(&app_config.database).await?;
    run_migrations(&db_pool).await?;
    tracing::info!("Database pool created and migrations applied.");

    // サービスの作成
    let match_repo = Arc::new(MatchRepository::new(db_pool));
    let tournament_service = Arc::new(TournamentService::new(match_repo.clone()));
    let admin_service = Arc::new(AdminService::new(match_repo, tournament_service));

    let jwt_manager = Arc::new(JwtManager::new(app_config.jwt.clone())?);
    let session_provider = Arc::new(JwtSessionProvider::new(
        jwt_manager,
        app_config.session.cookie_name.clone(),
    ));

    // ルーターの設定
    let app_state = AppState::new(admin_service, session_provider, app_config.clone());
    let app_router = build_app(app_state);

    // サーバーの起動
    let listener = TcpListener::bind(app_config.server_addr()).await?;
    tracing::info!(
        "Router configured. Server listening on {}",
        app_config.server_addr()
    );

    axum::serve(listener, app_router.into_make_service()).await?;

    Ok(())
}
