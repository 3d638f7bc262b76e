// predictor-backend/src/api/dto/common.rs

use serde::{Deserialize, Serialize};

/// 統一API成功レスポンス
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// 成功レスポンスを作成
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_response() {
        let response = ApiResponse::success("ok", vec!["m1", "m2"]);

        assert!(response.success);
        assert_eq!(response.message, "ok");
        assert_eq!(response.data, Some(vec!["m1", "m2"]));
    }
}
