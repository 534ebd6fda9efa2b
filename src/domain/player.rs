use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::seat::SeatId;

/// Игрок, участвующий в раздаче, в том виде, в каком его передаёт модуль рассадки.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerInHand {
    /// Имя игрока. Уникально в пределах раздачи.
    pub name: String,
    /// Сырое место: число, строка вида "#3" или null.
    #[serde(default)]
    pub seat: SeatId,
}

impl PlayerInHand {
    pub fn new(name: impl Into<String>, seat: impl Into<SeatId>) -> Self {
        Self {
            name: name.into(),
            seat: seat.into(),
        }
    }
}

/// Статус игрока в текущей раздаче.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PlayerStatus {
    /// Может действовать.
    Active,
    /// Сфолдил.
    Folded,
    /// В олл-ине – больше не действует, но остаётся в раздаче.
    AllIn,
}

impl PlayerStatus {
    pub fn can_act(self) -> bool {
        matches!(self, PlayerStatus::Active)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PlayerStatus::Active => "active",
            PlayerStatus::Folded => "folded",
            PlayerStatus::AllIn => "allin",
        }
    }
}

impl fmt::Display for PlayerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
