use serde::{Deserialize, Serialize};

use crate::domain::TableId;
use crate::engine::{EngineError, ManagerError};

/// Ошибки внешнего API (то, что отдаём UI).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Неправильные входные данные (например, битый JSON).
    BadRequest(String),

    /// Стол не найден.
    TableNotFound(TableId),

    /// На столе нет текущей раздачи.
    NoActiveHand(TableId),
}

impl From<ManagerError> for ApiError {
    fn from(err: ManagerError) -> Self {
        match err {
            ManagerError::TableNotFound(id) => ApiError::TableNotFound(id),
            ManagerError::NoActiveHand(id) => ApiError::NoActiveHand(id),
        }
    }
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}
