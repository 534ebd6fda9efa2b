//! Движок порядка действий для логгера живых покерных раздач.
//!
//! По списку игроков и кнопке строит на раздачу две фиксированные таблицы
//! порядка (префлоп и постфлоп) и отвечает на вопрос "чей ход" с учётом
//! фолдов и олл-инов. Ничего не хранит между раздачами и не делает I/O.

pub mod api;
pub mod domain;
pub mod engine;
pub mod infra;

pub use domain::{PlayerInHand, PlayerStatus, PositionLabel, SeatId, SeatNumber, Street, StreetClass};
pub use engine::{ActionOrderManager, OrderEntry, TableManager};
pub use infra::EngineConfig;
