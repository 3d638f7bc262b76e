// tests/common/app_helper.rs

use axum::Router;
use predictor_backend::{
    api::{build_app, AppState},
    config::AppConfig,
    middleware::auth::SessionProvider,
    service::admin_service::AdminService,
};
use std::sync::Arc;

use super::fakes::{FakeSessionProvider, InMemoryMatchStore, RecordingTournament};

/// テスト用アプリと、検証用に共有する偽コラボレーター
pub struct TestApp {
    pub router: Router,
    pub match_store: Arc<InMemoryMatchStore>,
    pub tournament: Arc<RecordingTournament>,
}

/// 既定の偽実装でアプリをセットアップ
pub fn setup_app() -> TestApp {
    setup_app_with(
        InMemoryMatchStore::with_matches(&["m1", "m2", "qf-3"]),
        RecordingTournament::new(),
    )
}

pub fn setup_app_with(match_store: InMemoryMatchStore, tournament: RecordingTournament) -> TestApp {
    setup_app_with_sessions(match_store, tournament, Arc::new(FakeSessionProvider::new()))
}

pub fn setup_app_with_sessions(
    match_store: InMemoryMatchStore,
    tournament: RecordingTournament,
    session_provider: Arc<dyn SessionProvider>,
) -> TestApp {
    super::init_test_env();

    let match_store = Arc::new(match_store);
    let tournament = Arc::new(tournament);

    let admin_service = Arc::new(AdminService::new(
        match_store.clone(),
        tournament.clone(),
    ));
    let app_state = AppState::new(
        admin_service,
        session_provider,
        Arc::new(AppConfig::for_testing()),
    );

    TestApp {
        router: build_app(app_state),
        match_store,
        tournament,
    }
}
