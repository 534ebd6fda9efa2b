//! Движок порядка действий: кто ходит следующим на каждой улице.
//!
//! Высокоуровневый объект: `ActionOrderManager`
//! Основные операции:
//!   - `initialize_hand` – построить таблицы порядка на раздачу
//!   - `current_player` / `move_to_next_player` – чей ход
//!   - `update_player_status` – фолд / олл-ин
//!   - `advance_to_street` / `end_hand` – жизненный цикл раздачи

pub mod action_order;
pub mod actions;
pub mod betting;
pub mod cursor;
pub mod errors;
pub mod fallback;
pub mod hand_history;
pub mod order_table;
pub mod positions;
pub mod table_manager;

pub use action_order::{ActionOrderManager, AnnotatedEntry, DebugRow, DebugSnapshot, HandContext};
pub use actions::{ActionKind, ActionRecord};
pub use cursor::{StatusMap, StreetCursor};
pub use errors::EngineError;
pub use fallback::sequential_order;
pub use hand_history::{HandEvent, HandEventKind, HandHistory};
pub use order_table::{build_order_tables, OrderEntry, OrderTables, OrderingMode};
pub use positions::positional_order;
pub use table_manager::{ManagerError, TableManager};
