//! Внутрипроцессный API движка для UI-слоя.
//!
//! Здесь описываются:
//! - команды (commands.rs): начать раздачу, фолд, смена улицы;
//! - запросы (queries.rs): только чтение;
//! - DTO (dto.rs): удобные структуры для фронта;
//! - ошибки (errors.rs): то, что видит UI.

pub mod commands;
pub mod dto;
pub mod errors;
pub mod queries;

pub use commands::*;
pub use dto::*;
pub use errors::*;
pub use queries::*;
