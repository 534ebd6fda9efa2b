use std::collections::HashMap;

use crate::engine::actions::{ActionKind, ActionRecord};
use crate::engine::order_table::OrderEntry;

/// Последнее записанное действие каждого игрока на улице.
pub fn last_action_by_player(actions: &[ActionRecord]) -> HashMap<&str, &ActionKind> {
    actions
        .iter()
        .filter(|a| !a.player.is_empty())
        .map(|a| (a.player.as_str(), &a.action))
        .collect()
}

/// Завершён ли раунд ставок.
///
/// - активных игроков не больше одного – завершён;
/// - иначе каждый активный должен иметь хотя бы одно действие на улице.
///
/// Совпадение сумм не проверяется.
pub fn is_round_complete<'a, I>(active: I, actions: &[ActionRecord]) -> bool
where
    I: IntoIterator<Item = &'a OrderEntry>,
{
    let active: Vec<&OrderEntry> = active.into_iter().collect();
    if active.len() <= 1 {
        return true;
    }

    let acted = last_action_by_player(actions);
    active.iter().all(|e| acted.contains_key(e.player.as_str()))
}
