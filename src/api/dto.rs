use serde::{Deserialize, Serialize};

use crate::domain::{PlayerStatus, SeatNumber, TableId};
use crate::engine::{AnnotatedEntry, HandHistory, OrderEntry, OrderingMode};

/// DTO строки таблицы порядка. Позиция – готовая текстовая метка ("UTG+1").
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderEntryDto {
    pub player: String,
    pub seat: SeatNumber,
    pub position: String,
    pub priority: usize,
}

/// DTO строки порядка вместе с живым статусом – для индикатора хода во фронте.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActionOrderEntryDto {
    pub player: String,
    pub seat: SeatNumber,
    pub position: String,
    pub priority: usize,
    pub status: Option<PlayerStatus>,
    pub can_act: bool,
}

impl From<&OrderEntry> for OrderEntryDto {
    fn from(e: &OrderEntry) -> Self {
        Self {
            player: e.player.clone(),
            seat: e.seat,
            position: e.position.to_string(),
            priority: e.priority,
        }
    }
}

impl From<AnnotatedEntry> for ActionOrderEntryDto {
    fn from(a: AnnotatedEntry) -> Self {
        Self {
            position: a.entry.position.to_string(),
            player: a.entry.player,
            seat: a.entry.seat,
            priority: a.entry.priority,
            status: a.status,
            can_act: a.can_act,
        }
    }
}

/// Ответ на команду.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum CommandResponse {
    TableOpened(TableId),
    TableClosed(TableId),

    /// Раздача начата: обе таблицы порядка и способ их построения.
    HandInitialized {
        ordering: OrderingMode,
        preflop: Vec<OrderEntryDto>,
        postflop: Vec<OrderEntryDto>,
        first_to_act: Option<OrderEntryDto>,
    },

    /// Чей ход после команды (None – ходить некому).
    CurrentPlayer(Option<OrderEntryDto>),

    /// Сколько игроков ещё могут действовать.
    ActivePlayers(usize),

    /// Раздача завершена, история для сериализации.
    HandEnded(HandHistory),
}
