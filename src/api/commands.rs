use serde::{Deserialize, Serialize};

use crate::domain::{HandNumber, PlayerInHand, PlayerStatus, SeatId, Street, TableId};
use crate::engine::TableManager;

use super::dto::{CommandResponse, OrderEntryDto};
use super::errors::ApiError;

/// Команды UI – всё, что меняет состояние.
///
/// Улицы приходят строкой и разбираются нестрого: всё, что не "preflop",
/// идёт по постфлоп-порядку.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Command {
    /// Завести стол под отдельный движок порядка.
    OpenTable { table_id: TableId },

    /// Убрать стол вместе с его раздачей.
    CloseTable { table_id: TableId },

    /// Начать раздачу.
    InitializeHand(InitializeHandCommand),

    /// Перейти на улицу.
    AdvanceToStreet { table_id: TableId, street: String },

    /// Фолд / олл-ин / возврат игрока.
    UpdatePlayerStatus {
        table_id: TableId,
        player: String,
        status: PlayerStatus,
    },

    /// Игрок сходил – передать ход дальше.
    MoveToNextPlayer { table_id: TableId, street: String },

    /// Закончить раздачу.
    EndHand { table_id: TableId },
}

/// Начать раздачу на столе.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct InitializeHandCommand {
    pub table_id: TableId,
    /// Игроки в порядке, в котором их отметили в UI.
    pub players: Vec<PlayerInHand>,
    #[serde(default)]
    pub button_seat: SeatId,
    #[serde(default)]
    pub hand_number: Option<HandNumber>,
}

impl Command {
    /// Разобрать команду из JSON.
    pub fn from_json(json: &str) -> Result<Self, ApiError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Выполнить команду над менеджером столов.
pub fn execute_command(
    manager: &mut TableManager,
    command: Command,
) -> Result<CommandResponse, ApiError> {
    match command {
        Command::OpenTable { table_id } => {
            manager.add_table(table_id);
            Ok(CommandResponse::TableOpened(table_id))
        }

        Command::CloseTable { table_id } => {
            manager
                .remove_table(table_id)
                .ok_or(ApiError::TableNotFound(table_id))?;
            Ok(CommandResponse::TableClosed(table_id))
        }

        Command::InitializeHand(cmd) => {
            let engine = manager.table_mut(cmd.table_id)?;
            engine.initialize_hand(&cmd.players, cmd.button_seat, cmd.hand_number);

            let tables = engine.order_tables();
            Ok(CommandResponse::HandInitialized {
                ordering: tables.mode,
                preflop: tables.preflop.iter().map(OrderEntryDto::from).collect(),
                postflop: tables.postflop.iter().map(OrderEntryDto::from).collect(),
                first_to_act: engine.current_player(Street::Preflop).map(OrderEntryDto::from),
            })
        }

        Command::AdvanceToStreet { table_id, street } => {
            let street = Street::parse_lenient(&street);
            let engine = manager.active_hand_mut(table_id)?;
            let first = engine.advance_to_street(street).map(OrderEntryDto::from);
            Ok(CommandResponse::CurrentPlayer(first))
        }

        Command::UpdatePlayerStatus {
            table_id,
            player,
            status,
        } => {
            let engine = manager.active_hand_mut(table_id)?;
            let remaining = engine.update_player_status(&player, status);
            Ok(CommandResponse::ActivePlayers(remaining))
        }

        Command::MoveToNextPlayer { table_id, street } => {
            let street = Street::parse_lenient(&street);
            let engine = manager.active_hand_mut(table_id)?;
            let next = engine.move_to_next_player(street).map(OrderEntryDto::from);
            Ok(CommandResponse::CurrentPlayer(next))
        }

        Command::EndHand { table_id } => {
            let engine = manager.active_hand_mut(table_id)?;
            Ok(CommandResponse::HandEnded(engine.end_hand()))
        }
    }
}
