use serde::{Deserialize, Serialize};

use crate::domain::{
    is_button_seat_valid, seating_is_consistent, PlayerInHand, PositionLabel, SeatId, SeatNumber,
    StreetClass,
};
use crate::engine::fallback::sequential_order;
use crate::engine::positions::positional_order;

/// Строка таблицы порядка: игрок, его место, позиция и фиксированный ранг.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderEntry {
    pub player: String,
    pub seat: SeatNumber,
    pub position: PositionLabel,
    /// Индекс строки в своей таблице (0..N-1). Не меняется до конца раздачи.
    pub priority: usize,
}

/// Каким способом построены таблицы текущей раздачи.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OrderingMode {
    /// По кнопке и реальной рассадке.
    Positional,
    /// По порядку, в котором игроков добавили в раздачу.
    Sequential,
}

/// Две таблицы порядка на раздачу. Строятся один раз и больше не сортируются.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderTables {
    pub preflop: Vec<OrderEntry>,
    pub postflop: Vec<OrderEntry>,
    pub mode: OrderingMode,
}

impl OrderTables {
    pub fn empty() -> Self {
        Self {
            preflop: Vec::new(),
            postflop: Vec::new(),
            mode: OrderingMode::Sequential,
        }
    }

    pub fn table(&self, class: StreetClass) -> &[OrderEntry] {
        match class {
            StreetClass::Preflop => &self.preflop,
            StreetClass::Postflop => &self.postflop,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.preflop.is_empty() && self.postflop.is_empty()
    }
}

impl Default for OrderTables {
    fn default() -> Self {
        OrderTables::empty()
    }
}

/// Собрать таблицу из упорядоченных (игрок, место, позиция); priority = индекс.
pub(crate) fn ranked<'a, I>(rows: I) -> Vec<OrderEntry>
where
    I: IntoIterator<Item = (&'a str, SeatNumber, PositionLabel)>,
{
    rows.into_iter()
        .enumerate()
        .map(|(priority, (player, seat, position))| OrderEntry {
            player: player.to_string(),
            seat,
            position,
            priority,
        })
        .collect()
}

/// Построить обе таблицы порядка.
///
/// Позиционный порядок, если кнопка стоит на занятом месте и рассадка
/// без дыр и дублей; иначе порядок выбора игроков. Никогда не падает.
pub fn build_order_tables(players: &[PlayerInHand], button: &SeatId) -> OrderTables {
    if !is_button_seat_valid(players, button) {
        tracing::warn!(button = %button, "кнопка невалидна, порядок по очереди выбора игроков");
        return sequential_order(players);
    }

    if !seating_is_consistent(players) {
        tracing::warn!("места нераспознаны или повторяются, порядок по очереди выбора игроков");
        return sequential_order(players);
    }

    match positional_order(players, button) {
        Ok(tables) => tables,
        Err(err) => {
            tracing::warn!(error = %err, "позиционный порядок не построен, порядок по очереди выбора игроков");
            sequential_order(players)
        }
    }
}
