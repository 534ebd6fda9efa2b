use thiserror::Error;

use crate::domain::{SeatError, SeatNumber};

/// Ошибки движка порядка действий.
///
/// Наружу из `ActionOrderManager` они не выходят: на границе жизненного
/// цикла раздачи каждая превращается в запасной порядок или `None`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("в раздаче нет игроков")]
    EmptyRoster,

    #[error("кнопка на месте {0} не занята ни одним игроком")]
    ButtonNotSeated(SeatNumber),

    #[error("у игрока {0} нет распознанного места")]
    UnassignedSeat(String),

    #[error("место {seat} занято дважды ({first} и {second})")]
    DuplicateSeat {
        seat: SeatNumber,
        first: String,
        second: String,
    },

    #[error("неизвестная улица: {0}")]
    UnknownStreet(String),

    #[error(transparent)]
    Seat(#[from] SeatError),
}
