//! Доменная модель раздачи: игроки, места, улицы, позиции.

pub mod hand;
pub mod player;
pub mod position;
pub mod seat;

/// Номер места за столом после нормализации. 0 – место не назначено.
pub type SeatNumber = u32;
pub type TableId = u64;

/// Номер раздачи так, как его ведёт логгер (строка, например "A-117").
pub type HandNumber = String;

pub use hand::*;
pub use player::*;
pub use position::*;
pub use seat::*;
