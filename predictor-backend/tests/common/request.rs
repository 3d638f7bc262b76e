// tests/common/request.rs
use axum::{
    body::{self, Body},
    http::{header, Request, Response},
};
use serde_json::Value;

/// JSONボディ付きのPOSTリクエストを作成（token が None なら認証なし）
pub fn post_json(uri: &str, token: Option<&str>, body: &Value) -> Request<Body> {
    post_raw(uri, token, serde_json::to_string(body).unwrap())
}

/// 任意の文字列ボディでPOSTリクエストを作成
pub fn post_raw(uri: &str, token: Option<&str>, body: impl Into<String>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    builder.body(Body::from(body.into())).unwrap()
}

/// レスポンスボディをJSONとして読む
pub async fn read_json(response: Response<Body>) -> Value {
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
