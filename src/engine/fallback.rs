//! Запасной порядок: когда кнопке или рассадке нельзя доверять, порядок
//! действий берётся из последовательности, в которой игроков добавили в раздачу.
//! Позиции подбираются по фиксированным таблицам (индекс, число игроков).

use crate::domain::{resolve_seat, PlayerInHand, PositionLabel};
use crate::engine::order_table::{ranked, OrderTables, OrderingMode};

use crate::domain::PositionLabel::{
    BigBlind as BB, Button as BTN, Cutoff as CO, MiddleUnnumbered as MP, SmallBlind as SB,
    SmallBlindButton as SB_BTN, UnderTheGun as UTG, UnderTheGunPlusOne as UTG1,
};

const PREFLOP_3: [PositionLabel; 3] = [BTN, SB, BB];
const PREFLOP_4: [PositionLabel; 4] = [BTN, SB, BB, UTG];
const PREFLOP_5: [PositionLabel; 5] = [BTN, SB, BB, UTG, CO];
const PREFLOP_6_PLUS: [PositionLabel; 7] = [BTN, SB, BB, UTG, UTG1, MP, CO];

const POSTFLOP_3: [PositionLabel; 3] = [SB, BB, BTN];
const POSTFLOP_4: [PositionLabel; 4] = [SB, BB, UTG, BTN];
const POSTFLOP_5: [PositionLabel; 5] = [SB, BB, UTG, CO, BTN];
const POSTFLOP_6_PLUS: [PositionLabel; 7] = [SB, BB, UTG, UTG1, MP, CO, BTN];

fn ordinal(index: usize) -> PositionLabel {
    PositionLabel::Ordinal(u8::try_from(index + 1).unwrap_or(u8::MAX))
}

fn from_table(table: &[PositionLabel], index: usize) -> PositionLabel {
    table.get(index).copied().unwrap_or_else(|| ordinal(index))
}

/// Префлоп-метка для index-го выбранного игрока.
pub fn sequential_preflop_label(index: usize, total: usize) -> PositionLabel {
    match total {
        2 => {
            if index == 0 {
                SB_BTN
            } else {
                BB
            }
        }
        3 => from_table(&PREFLOP_3, index),
        4 => from_table(&PREFLOP_4, index),
        5 => from_table(&PREFLOP_5, index),
        t if t >= 6 => from_table(&PREFLOP_6_PLUS, index),
        _ => ordinal(index),
    }
}

/// Постфлоп-метка для index-й строки постфлоп-таблицы.
pub fn sequential_postflop_label(index: usize, total: usize) -> PositionLabel {
    match total {
        2 => {
            if index == 0 {
                SB_BTN
            } else {
                BB
            }
        }
        3 => from_table(&POSTFLOP_3, index),
        4 => from_table(&POSTFLOP_4, index),
        5 => from_table(&POSTFLOP_5, index),
        t if t >= 6 => from_table(&POSTFLOP_6_PLUS, index),
        _ => ordinal(index),
    }
}

/// С какого выбранного игрока начинается постфлоп: со слота SB.
fn postflop_start(total: usize) -> usize {
    if total >= 3 {
        1
    } else {
        0
    }
}

/// Таблицы порядка по очереди выбора игроков.
///
/// Префлоп идёт в порядке выбора. Постфлоп – тот же круг, сдвинутый так,
/// чтобы первым шёл слот SB, а первый выбранный (BTN) замыкал его.
pub fn sequential_order(players: &[PlayerInHand]) -> OrderTables {
    let total = players.len();
    let seats: Vec<_> = players.iter().map(|p| resolve_seat(&p.seat)).collect();

    let preflop = ranked(
        players
            .iter()
            .zip(&seats)
            .enumerate()
            .map(|(i, (p, &seat))| (p.name.as_str(), seat, sequential_preflop_label(i, total))),
    );

    let start = postflop_start(total);
    let postflop = ranked((0..total).map(|i| {
        let idx = (start + i) % total;
        (
            players[idx].name.as_str(),
            seats[idx],
            sequential_postflop_label(i, total),
        )
    }));

    tracing::debug!(players = total, "таблицы по очереди выбора построены");

    OrderTables {
        preflop,
        postflop,
        mode: OrderingMode::Sequential,
    }
}
