// tests/common/mod.rs
#![allow(dead_code)]

pub mod app_helper;
pub mod fakes;
pub mod request;

use std::sync::Once;

// テスト環境の初期化を一度だけ実行
static INIT: Once = Once::new();

/// テスト環境を初期化
pub fn init_test_env() {
    INIT.call_once(|| {
        // テスト用のログ設定
        let _ = tracing_subscriber::fmt()
            .with_env_filter("predictor_backend=debug,tower_http=debug")
            .with_test_writer()
            .try_init();
    });
}
