// predictor-backend/src/domain/knockout_slot.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// ノックアウトステージの試合枠（ホーム / アウェイ）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KnockoutSlot {
    Home,
    Away,
}

impl KnockoutSlot {
    pub fn as_str(&self) -> &'static str {
        match self {
            KnockoutSlot::Home => "home",
            KnockoutSlot::Away => "away",
        }
    }
}

impl fmt::Display for KnockoutSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid knockout slot: {0}")]
pub struct InvalidSlotError(pub String);

impl FromStr for KnockoutSlot {
    type Err = InvalidSlotError;

    // 受け付けるのは小文字の "home" / "away" のみ
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "home" => Ok(KnockoutSlot::Home),
            "away" => Ok(KnockoutSlot::Away),
            other => Err(InvalidSlotError(other.to_string())),
        }
    }
}
