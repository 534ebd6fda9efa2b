//! Нормализация мест: единственная точка, где сырые идентификаторы мест
//! (числа, строки вида "#3", null) превращаются в `SeatNumber`.
//! Дальше по движку ходят только целые числа.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::player::PlayerInHand;
use crate::domain::SeatNumber;

/// Сырой идентификатор места с границы (UI / импорт).
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum SeatId {
    Number(i64),
    Text(String),
    #[default]
    Missing,
}

/// Почему сырое место не удалось превратить в номер.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SeatError {
    #[error("место не указано")]
    Missing,

    #[error("пустая строка вместо места")]
    Empty,

    #[error("в \"{0}\" нет цифр")]
    NoDigits(String),

    #[error("номер места должен быть положительным, получено {0}")]
    NotPositive(i64),

    #[error("номер места \"{0}\" слишком большой")]
    Overflow(String),
}

impl From<u32> for SeatId {
    fn from(seat: u32) -> Self {
        SeatId::Number(i64::from(seat))
    }
}

impl From<i64> for SeatId {
    fn from(seat: i64) -> Self {
        SeatId::Number(seat)
    }
}

impl From<i32> for SeatId {
    fn from(seat: i32) -> Self {
        SeatId::Number(i64::from(seat))
    }
}

impl From<&str> for SeatId {
    fn from(seat: &str) -> Self {
        SeatId::Text(seat.to_string())
    }
}

impl From<String> for SeatId {
    fn from(seat: String) -> Self {
        SeatId::Text(seat)
    }
}

impl<T: Into<SeatId>> From<Option<T>> for SeatId {
    fn from(seat: Option<T>) -> Self {
        seat.map(Into::into).unwrap_or(SeatId::Missing)
    }
}

impl fmt::Display for SeatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeatId::Number(n) => write!(f, "{}", n),
            SeatId::Text(s) => write!(f, "{:?}", s),
            SeatId::Missing => f.write_str("null"),
        }
    }
}

/// Строгий разбор места.
///
/// Ведущие нецифровые символы ("#", "Seat ") и пробелы отбрасываются,
/// берётся первая серия цифр. Минус прямо перед цифрами делает номер
/// неположительным.
pub fn parse_seat(raw: &SeatId) -> Result<SeatNumber, SeatError> {
    match raw {
        SeatId::Missing => Err(SeatError::Missing),
        SeatId::Number(n) => {
            if *n <= 0 {
                return Err(SeatError::NotPositive(*n));
            }
            SeatNumber::try_from(*n).map_err(|_| SeatError::Overflow(n.to_string()))
        }
        SeatId::Text(text) => parse_seat_text(text),
    }
}

fn parse_seat_text(text: &str) -> Result<SeatNumber, SeatError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(SeatError::Empty);
    }

    let start = trimmed
        .find(|c: char| c.is_ascii_digit())
        .ok_or_else(|| SeatError::NoDigits(text.to_string()))?;

    let digits: String = trimmed[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();

    let negative = trimmed[..start].ends_with('-');

    let value: SeatNumber = digits
        .parse()
        .map_err(|_| SeatError::Overflow(digits.clone()))?;

    if negative {
        return Err(SeatError::NotPositive(-i64::from(value)));
    }
    if value == 0 {
        return Err(SeatError::NotPositive(0));
    }

    Ok(value)
}

/// Нормализовать место: любая ошибка разбора означает "не назначено" (0).
pub fn resolve_seat(raw: &SeatId) -> SeatNumber {
    match parse_seat(raw) {
        Ok(seat) => seat,
        Err(err) => {
            tracing::debug!(seat = %raw, error = %err, "место не распознано, считаем неназначенным");
            0
        }
    }
}

/// Кнопка валидна, только если её место занято кем-то из игроков раздачи.
pub fn is_button_seat_valid(players: &[PlayerInHand], button: &SeatId) -> bool {
    if players.is_empty() {
        return false;
    }

    let button_seat = resolve_seat(button);
    if button_seat == 0 {
        return false;
    }

    let valid = players
        .iter()
        .map(|p| resolve_seat(&p.seat))
        .any(|seat| seat != 0 && seat == button_seat);

    tracing::debug!(button = button_seat, valid, "проверка кнопки");
    valid
}

/// Все места распознаны и ни одно не занято дважды.
///
/// Иначе геометрию стола восстановить нельзя, и порядок строится по
/// последовательности выбора игроков.
pub fn seating_is_consistent(players: &[PlayerInHand]) -> bool {
    let mut seen = HashSet::with_capacity(players.len());
    players.iter().all(|p| {
        let seat = resolve_seat(&p.seat);
        seat != 0 && seen.insert(seat)
    })
}
