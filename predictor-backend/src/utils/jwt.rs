// src/utils/jwt.rs

use crate::domain::principal::Principal;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// JWT関連のエラー
#[derive(Error, Debug)]
pub enum JwtError {
    #[error("Failed to encode JWT: {0}")]
    EncodingError(#[from] jsonwebtoken::errors::Error),

    #[error("Failed to decode JWT: {0}")]
    DecodingError(String),

    #[error("JWT token has expired")]
    TokenExpired,

    #[error("Invalid JWT token")]
    InvalidToken,

    #[error("Invalid JWT configuration: {0}")]
    ConfigurationError(String),
}

/// セッショントークンのClaims
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SessionTokenClaims {
    /// Subject (user ID)
    pub sub: String,
    /// Issued at
    pub iat: i64,
    /// Expiration time
    pub exp: i64,
    /// Not before
    pub nbf: i64,
    /// Issuer
    pub iss: String,
    /// Audience
    pub aud: String,
    /// JWT ID
    pub jti: String,
    /// Token type
    pub typ: String,
    /// Principal information
    pub principal: Principal,
}

/// JWT設定
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// JWT秘密鍵
    pub secret_key: String,
    /// セッショントークンの有効期限（分）
    pub access_token_expiry_minutes: i64,
    /// 発行者
    pub issuer: String,
    /// 対象者
    pub audience: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret_key: String::new(),
            access_token_expiry_minutes: 60 * 24,
            issuer: "predictor-backend".to_string(),
            audience: "predictor-family".to_string(),
        }
    }
}

impl JwtConfig {
    /// 秘密鍵の検証
    pub fn validate(&self) -> Result<(), JwtError> {
        if self.secret_key.len() < 32 {
            return Err(JwtError::ConfigurationError(
                "JWT secret key must be at least 32 characters".to_string(),
            ));
        }

        if self.access_token_expiry_minutes <= 0 {
            return Err(JwtError::ConfigurationError(
                "Access token expiry must be positive".to_string(),
            ));
        }

        Ok(())
    }
}

/// JWTトークン管理
pub struct JwtManager {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtManager {
    /// 新しいJwtManagerを作成
    pub fn new(config: JwtConfig) -> Result<Self, JwtError> {
        config.validate()?;

        let encoding_key = EncodingKey::from_secret(config.secret_key.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret_key.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&config.issuer]);
        validation.set_audience(&[&config.audience]);
        validation.validate_exp = true;
        validation.validate_nbf = true;

        Ok(Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        })
    }

    /// セッショントークンを生成
    pub fn generate_session_token(&self, principal: Principal) -> Result<String, JwtError> {
        let now = Utc::now();
        let exp = now + Duration::minutes(self.config.access_token_expiry_minutes);

        let claims = SessionTokenClaims {
            sub: principal.user_id.to_string(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
            nbf: now.timestamp(),
            iss: self.config.issuer.clone(),
            aud: self.config.audience.clone(),
            jti: Uuid::new_v4().to_string(),
            typ: "session".to_string(),
            principal,
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(JwtError::EncodingError)
    }

    /// セッショントークンを検証・デコード
    pub fn verify_session_token(&self, token: &str) -> Result<SessionTokenClaims, JwtError> {
        let token_data = decode::<SessionTokenClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => JwtError::TokenExpired,
                _ => JwtError::DecodingError(e.to_string()),
            })?;

        // トークンタイプの検証
        if token_data.claims.typ != "session" {
            return Err(JwtError::InvalidToken);
        }

        Ok(token_data.claims)
    }

    /// トークンの有効期限をISO 8601形式で取得
    pub fn get_expires_at(&self, claims: &SessionTokenClaims) -> String {
        DateTime::from_timestamp(claims.exp, 0)
            .unwrap_or_else(Utc::now)
            .to_rfc3339()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_config() -> JwtConfig {
        JwtConfig {
            secret_key: "test-secret-key-must-be-at-least-32-characters-long".to_string(),
            access_token_expiry_minutes: 15,
            issuer: "test-issuer".to_string(),
            audience: "test-audience".to_string(),
        }
    }

    #[test]
    fn test_session_token_generation_and_verification() {
        let jwt_manager = JwtManager::new(create_test_config()).unwrap();
        let principal = Principal::new(Uuid::new_v4(), "grandma", "admin");

        let token = jwt_manager
            .generate_session_token(principal.clone())
            .unwrap();
        assert!(!token.is_empty());

        let claims = jwt_manager.verify_session_token(&token).unwrap();
        assert_eq!(claims.sub, principal.user_id.to_string());
        assert_eq!(claims.principal, principal);
        assert!(DateTime::parse_from_rfc3339(&jwt_manager.get_expires_at(&claims)).is_ok());
    }

    #[test]
    fn test_invalid_secret_key() {
        let mut config = create_test_config();
        config.secret_key = "short".to_string(); // 短すぎる秘密鍵

        assert!(JwtManager::new(config).is_err());
    }

    #[test]
    fn test_token_from_other_secret_is_rejected() {
        let issuer = JwtManager::new(create_test_config()).unwrap();
        let mut other_config = create_test_config();
        other_config.secret_key = "another-secret-key-that-is-also-32-chars-long".to_string();
        let verifier = JwtManager::new(other_config).unwrap();

        let token = issuer
            .generate_session_token(Principal::new(Uuid::new_v4(), "uncle", "member"))
            .unwrap();

        assert!(matches!(
            verifier.verify_session_token(&token),
            Err(JwtError::DecodingError(_))
        ));
    }

    #[test]
    fn test_wrong_audience_is_rejected() {
        let issuer = JwtManager::new(create_test_config()).unwrap();
        let mut other_config = create_test_config();
        other_config.audience = "someone-else".to_string();
        let verifier = JwtManager::new(other_config).unwrap();

        let token = issuer
            .generate_session_token(Principal::new(Uuid::new_v4(), "cousin", "admin"))
            .unwrap();

        assert!(verifier.verify_session_token(&token).is_err());
    }
}
