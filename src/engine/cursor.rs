use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::{PlayerStatus, StreetClass};
use crate::engine::order_table::OrderEntry;

/// Статусы игроков раздачи: имя -> статус.
pub type StatusMap = HashMap<String, PlayerStatus>;

/// Счётчики ходов по классам улиц.
///
/// Это не индекс в таблице, а указатель ротации: при каждом чтении он
/// берётся по модулю текущего числа активных игроков.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StreetCursor {
    pub preflop: usize,
    pub postflop: usize,
}

impl StreetCursor {
    pub fn get(&self, class: StreetClass) -> usize {
        match class {
            StreetClass::Preflop => self.preflop,
            StreetClass::Postflop => self.postflop,
        }
    }

    pub fn advance(&mut self, class: StreetClass) {
        match class {
            StreetClass::Preflop => self.preflop = self.preflop.wrapping_add(1),
            StreetClass::Postflop => self.postflop = self.postflop.wrapping_add(1),
        }
    }

    pub fn reset(&mut self, class: StreetClass) {
        match class {
            StreetClass::Preflop => self.preflop = 0,
            StreetClass::Postflop => self.postflop = 0,
        }
    }
}

/// Строки таблицы, чьи игроки ещё могут действовать. Порядок таблицы сохраняется.
pub fn active_entries<'a>(
    table: &'a [OrderEntry],
    statuses: &'a StatusMap,
) -> impl Iterator<Item = &'a OrderEntry> + 'a {
    table.iter().filter(move |e| {
        statuses
            .get(&e.player)
            .map(|s| s.can_act())
            .unwrap_or(false)
    })
}

/// Чей ход: строка `cursor mod (число активных)` среди активных игроков.
pub fn pick_current<'a>(
    table: &'a [OrderEntry],
    statuses: &'a StatusMap,
    cursor: usize,
) -> Option<&'a OrderEntry> {
    let active: Vec<&OrderEntry> = active_entries(table, statuses).collect();
    if active.is_empty() {
        return None;
    }
    Some(active[cursor % active.len()])
}
