use std::collections::HashMap;

use crate::domain::{parse_seat, PlayerInHand, PositionLabel, SeatId, SeatNumber};
use crate::engine::errors::EngineError;
use crate::engine::order_table::{ranked, OrderTables, OrderingMode};

/// Занятые места по возрастанию вместе с именами игроков.
fn occupied_seats(players: &[PlayerInHand]) -> Result<Vec<(SeatNumber, &str)>, EngineError> {
    if players.is_empty() {
        return Err(EngineError::EmptyRoster);
    }

    let mut by_seat: HashMap<SeatNumber, &str> = HashMap::with_capacity(players.len());
    for p in players {
        let seat =
            parse_seat(&p.seat).map_err(|_| EngineError::UnassignedSeat(p.name.clone()))?;
        if let Some(first) = by_seat.insert(seat, p.name.as_str()) {
            return Err(EngineError::DuplicateSeat {
                seat,
                first: first.to_string(),
                second: p.name.clone(),
            });
        }
    }

    let mut seats: Vec<(SeatNumber, &str)> = by_seat.into_iter().collect();
    seats.sort_unstable_by_key(|(seat, _)| *seat);
    Ok(seats)
}

/// Индексы мест по часовой стрелке, начиная сразу за кнопкой.
/// Последний элемент – сама кнопка.
pub fn rotation_after_button(total: usize, button_index: usize) -> Vec<usize> {
    (0..total).map(|i| (button_index + i + 1) % total).collect()
}

/// Метка для i-го места ротации (0 – первое место после кнопки).
///
/// Зависит от числа игроков: 1 – соло, 2 – хедз-ап, дальше SB, BB,
/// середина (UTG, UTG+1, MP1, MP2, MP3, ...), CO, BTN.
pub fn rotation_label(index: usize, total: usize) -> PositionLabel {
    match total {
        0 | 1 => PositionLabel::Solo,
        2 => {
            if index == 0 {
                PositionLabel::SmallBlindButton
            } else {
                PositionLabel::BigBlind
            }
        }
        _ => {
            if index == 0 {
                PositionLabel::SmallBlind
            } else if index == 1 {
                PositionLabel::BigBlind
            } else if index == total - 1 {
                PositionLabel::Button
            } else if index == total - 2 {
                PositionLabel::Cutoff
            } else {
                middle_label(index - 2)
            }
        }
    }
}

// k-е место середины стола: UTG, UTG+1, MP1, MP2, затем MP3, MP4, ...
fn middle_label(k: usize) -> PositionLabel {
    match k {
        0 => PositionLabel::UnderTheGun,
        1 => PositionLabel::UnderTheGunPlusOne,
        k => PositionLabel::Middle(u8::try_from(k - 1).unwrap_or(u8::MAX)),
    }
}

/// Порядок по кнопке и реальной рассадке.
///
/// Постфлоп – ротация как есть (SB первым, BTN последним).
/// Префлоп при 3+ игроках начинается с UTG, а SB и BB уходят в конец;
/// при 1–2 игроках совпадает с постфлопом.
pub fn positional_order(
    players: &[PlayerInHand],
    button: &SeatId,
) -> Result<OrderTables, EngineError> {
    let seats = occupied_seats(players)?;
    let button_seat = parse_seat(button)?;
    let total = seats.len();

    let button_index = seats
        .iter()
        .position(|(seat, _)| *seat == button_seat)
        .ok_or(EngineError::ButtonNotSeated(button_seat))?;

    let rotation: Vec<(&str, SeatNumber, PositionLabel)> = rotation_after_button(total, button_index)
        .into_iter()
        .enumerate()
        .map(|(i, idx)| {
            let (seat, name) = seats[idx];
            (name, seat, rotation_label(i, total))
        })
        .collect();

    let preflop = if total <= 2 {
        ranked(rotation.iter().copied())
    } else {
        ranked(rotation[2..].iter().chain(&rotation[..2]).copied())
    };
    let postflop = ranked(rotation.iter().copied());

    tracing::debug!(
        players = total,
        button = button_seat,
        "позиционные таблицы построены"
    );

    Ok(OrderTables {
        preflop,
        postflop,
        mode: OrderingMode::Positional,
    })
}
