use serde::{Deserialize, Serialize};

use crate::domain::{HandNumber, PlayerStatus, SeatNumber, Street};
use crate::engine::order_table::OrderingMode;

/// Тип события в раздаче.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum HandEventKind {
    /// Раздача началась, таблицы порядка построены.
    HandStarted {
        hand_number: Option<HandNumber>,
        button_seat: Option<SeatNumber>,
        ordering: OrderingMode,
        players: Vec<String>,
    },

    /// Статус игрока изменился (фолд, олл-ин, возврат в игру).
    StatusChanged {
        player: String,
        from: PlayerStatus,
        to: PlayerStatus,
    },

    /// Переход на новую улицу.
    StreetChanged {
        street: Street,
        first_to_act: Option<String>,
    },

    /// Ход передан следующему игроку.
    TurnPassed {
        street: Street,
        player: Option<String>,
    },

    /// Раздача завершена.
    HandFinished { hand_number: Option<HandNumber> },
}

/// Событие в раздаче с порядковым номером.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandEvent {
    pub index: u32,
    pub kind: HandEventKind,
}

/// История одной раздачи.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandHistory {
    pub events: Vec<HandEvent>,
}

impl HandHistory {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, kind: HandEventKind) {
        let idx = self.events.len() as u32;
        self.events.push(HandEvent { index: idx, kind });
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
