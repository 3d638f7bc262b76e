// predictor-backend/src/domain/role.rs
use serde::{Deserialize, Serialize};

/// ロール名を表すenum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleName {
    Admin,
    Member,
}

impl RoleName {
    /// ロール名を文字列として取得
    pub fn as_str(&self) -> &'static str {
        match self {
            RoleName::Admin => "admin",
            RoleName::Member => "member",
        }
    }

    /// 文字列からロール名を解析
    ///
    /// ロールクレームは完全一致で判定する（"Admin" や " admin" は管理者扱いしない）。
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "admin" => Some(RoleName::Admin),
            "member" => Some(RoleName::Member),
            _ => None,
        }
    }

    /// 管理者権限があるかチェック
    pub fn is_admin(&self) -> bool {
        matches!(self, RoleName::Admin)
    }
}

impl std::fmt::Display for RoleName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_name_parsing_is_exact() {
        assert_eq!(RoleName::from_str("admin"), Some(RoleName::Admin));
        assert_eq!(RoleName::from_str("member"), Some(RoleName::Member));
        assert_eq!(RoleName::from_str("Admin"), None);
        assert_eq!(RoleName::from_str("administrator"), None);
        assert_eq!(RoleName::from_str(""), None);
    }

    #[test]
    fn test_is_admin() {
        assert!(RoleName::Admin.is_admin());
        assert!(!RoleName::Member.is_admin());
        assert_eq!(RoleName::Admin.to_string(), "admin");
    }
}
