// src/engine/table_manager.rs

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use thiserror::Error;

use crate::domain::TableId;
use crate::engine::action_order::ActionOrderManager;
use crate::infra::config::EngineConfig;

/// Ошибки уровня менеджера столов (над движком одной раздачи).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ManagerError {
    #[error("стол {0} не найден")]
    TableNotFound(TableId),

    #[error("на столе {0} раздача не начата")]
    NoActiveHand(TableId),
}

/// Менеджер столов:
/// - по одному `ActionOrderManager` на каждый TableId;
/// - раздачи на разных столах не пересекаются.
#[derive(Debug, Default)]
pub struct TableManager {
    config: EngineConfig,
    tables: HashMap<TableId, ActionOrderManager>,
}

impl TableManager {
    /// Создать пустой менеджер. `config` получают все новые столы.
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            tables: HashMap::new(),
        }
    }

    /// Добавить стол. Если стол с таким id уже был – его раздача сбрасывается.
    pub fn add_table(&mut self, table_id: TableId) -> &mut ActionOrderManager {
        tracing::debug!(table_id, "стол добавлен");
        let manager = ActionOrderManager::new(self.config.clone());
        match self.tables.entry(table_id) {
            Entry::Occupied(mut slot) => {
                slot.insert(manager);
                slot.into_mut()
            }
            Entry::Vacant(slot) => slot.insert(manager),
        }
    }

    pub fn remove_table(&mut self, table_id: TableId) -> Option<ActionOrderManager> {
        self.tables.remove(&table_id)
    }

    pub fn has_table(&self, table_id: TableId) -> bool {
        self.tables.contains_key(&table_id)
    }

    pub fn table_ids(&self) -> Vec<TableId> {
        let mut ids: Vec<TableId> = self.tables.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    pub fn table(&self, table_id: TableId) -> Result<&ActionOrderManager, ManagerError> {
        self.tables
            .get(&table_id)
            .ok_or(ManagerError::TableNotFound(table_id))
    }

    pub fn table_mut(&mut self, table_id: TableId) -> Result<&mut ActionOrderManager, ManagerError> {
        self.tables
            .get_mut(&table_id)
            .ok_or(ManagerError::TableNotFound(table_id))
    }

    /// Движок стола, на котором сейчас идёт раздача.
    pub fn active_hand(&self, table_id: TableId) -> Result<&ActionOrderManager, ManagerError> {
        let manager = self.table(table_id)?;
        if !manager.is_hand_in_progress() {
            return Err(ManagerError::NoActiveHand(table_id));
        }
        Ok(manager)
    }

    pub fn active_hand_mut(
        &mut self,
        table_id: TableId,
    ) -> Result<&mut ActionOrderManager, ManagerError> {
        let manager = self.table_mut(table_id)?;
        if !manager.is_hand_in_progress() {
            return Err(ManagerError::NoActiveHand(table_id));
        }
        Ok(manager)
    }
}
