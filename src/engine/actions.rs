use std::fmt;

use serde::{Deserialize, Serialize};

/// Тип записанного действия. Движок порядка сумм не проверяет.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Fold,
    Check,
    Call,
    Bet,
    Raise,
    #[serde(alias = "all-in", alias = "all_in")]
    AllIn,
    /// Всё, что UI записал своим словом (straddle, post и т.п.).
    #[serde(untagged)]
    Other(String),
}

/// Действие игрока на улице так, как его записал UI.
///
/// Сумма может быть дробной (блайнды 2.5) и движком не проверяется.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ActionRecord {
    pub player: String,
    pub action: ActionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
}

impl ActionRecord {
    pub fn new(player: impl Into<String>, action: ActionKind) -> Self {
        Self {
            player: player.into(),
            action,
            amount: None,
        }
    }

    pub fn with_amount(mut self, amount: f64) -> Self {
        self.amount = Some(amount);
        self
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionKind::Fold => f.write_str("fold"),
            ActionKind::Check => f.write_str("check"),
            ActionKind::Call => f.write_str("call"),
            ActionKind::Bet => f.write_str("bet"),
            ActionKind::Raise => f.write_str("raise"),
            ActionKind::AllIn => f.write_str("allin"),
            ActionKind::Other(s) => f.write_str(s),
        }
    }
}
