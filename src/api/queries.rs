use serde::{Deserialize, Serialize};

use crate::domain::{Street, TableId};
use crate::engine::{ActionRecord, DebugSnapshot, TableManager};

use super::dto::{ActionOrderEntryDto, OrderEntryDto};
use super::errors::ApiError;

/// Запросы "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum Query {
    /// Список столов.
    ListTables,

    /// Чей сейчас ход на улице.
    CurrentPlayer { table_id: TableId, street: String },

    /// Таблица порядка улицы со статусами.
    ActionOrder { table_id: TableId, street: String },

    /// Закончен ли раунд ставок при таких записанных действиях.
    BettingRoundComplete {
        table_id: TableId,
        street: String,
        actions: Vec<ActionRecord>,
    },

    /// Отладочный дамп стола.
    Debug { table_id: TableId },
}

/// Результат запроса "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum QueryResponse {
    Tables(Vec<TableId>),
    CurrentPlayer(Option<OrderEntryDto>),
    ActionOrder(Vec<ActionOrderEntryDto>),
    BettingRoundComplete(bool),
    Debug(DebugSnapshot),
}

impl Query {
    /// Разобрать запрос из JSON.
    pub fn from_json(json: &str) -> Result<Self, ApiError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Выполнить запрос. Отладочный дамп доступен и без текущей раздачи.
pub fn execute_query(manager: &TableManager, query: Query) -> Result<QueryResponse, ApiError> {
    match query {
        Query::ListTables => Ok(QueryResponse::Tables(manager.table_ids())),

        Query::CurrentPlayer { table_id, street } => {
            let street = Street::parse_lenient(&street);
            let engine = manager.active_hand(table_id)?;
            Ok(QueryResponse::CurrentPlayer(
                engine.current_player(street).map(OrderEntryDto::from),
            ))
        }

        Query::ActionOrder { table_id, street } => {
            let street = Street::parse_lenient(&street);
            let engine = manager.active_hand(table_id)?;
            Ok(QueryResponse::ActionOrder(
                engine
                    .action_order(street)
                    .into_iter()
                    .map(ActionOrderEntryDto::from)
                    .collect(),
            ))
        }

        Query::BettingRoundComplete {
            table_id,
            street,
            actions,
        } => {
            let street = Street::parse_lenient(&street);
            let engine = manager.active_hand(table_id)?;
            Ok(QueryResponse::BettingRoundComplete(
                engine.is_betting_round_complete(street, &actions),
            ))
        }

        Query::Debug { table_id } => {
            let engine = manager.table(table_id)?;
            Ok(QueryResponse::Debug(engine.debug_snapshot()))
        }
    }
}
