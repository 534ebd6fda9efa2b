use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{
    resolve_seat, HandNumber, PlayerInHand, PlayerStatus, SeatId, SeatNumber, Street, StreetClass,
};
use crate::engine::actions::ActionRecord;
use crate::engine::betting::is_round_complete;
use crate::engine::cursor::{active_entries, pick_current, StatusMap, StreetCursor};
use crate::engine::hand_history::{HandEventKind, HandHistory};
use crate::engine::order_table::{build_order_tables, OrderEntry, OrderTables, OrderingMode};
use crate::infra::config::EngineConfig;

/// Контекст текущей раздачи.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandContext {
    pub hand_number: Option<HandNumber>,
    /// Кнопка, как её ввёл оператор. None – место не распознано.
    pub button_seat: Option<SeatNumber>,
    pub current_street: Street,
    pub cursor: StreetCursor,
    /// None, пока раздача не начата.
    pub ordering: Option<OrderingMode>,
}

impl Default for HandContext {
    fn default() -> Self {
        Self {
            hand_number: None,
            button_seat: None,
            current_street: Street::Preflop,
            cursor: StreetCursor::default(),
            ordering: None,
        }
    }
}

/// Строка таблицы порядка вместе с текущим статусом игрока.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnnotatedEntry {
    #[serde(flatten)]
    pub entry: OrderEntry,
    pub status: Option<PlayerStatus>,
    pub can_act: bool,
}

/// Строка отладочного дампа.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DebugRow {
    pub entry: OrderEntry,
    pub status: Option<PlayerStatus>,
    /// Этот игрок сейчас ходит на улице этой таблицы.
    pub to_act: bool,
}

/// Дамп состояния движка для оператора. Не часть функционального контракта.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DebugSnapshot {
    pub context: HandContext,
    pub statuses: Vec<(String, PlayerStatus)>,
    pub preflop: Vec<DebugRow>,
    pub postflop: Vec<DebugRow>,
}

/// Движок порядка действий для одной раздачи.
///
/// Владеет всем состоянием раздачи: контекстом, двумя таблицами порядка,
/// статусами игроков. Всё создаётся в `initialize_hand` и стирается в `end_hand`.
/// Принадлежит вызывающему коду (UI-контроллеру), глобального экземпляра нет.
#[derive(Clone, Debug, Default)]
pub struct ActionOrderManager {
    config: EngineConfig,
    context: HandContext,
    tables: OrderTables,
    statuses: StatusMap,
    history: HandHistory,
}

impl ActionOrderManager {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn context(&self) -> &HandContext {
        &self.context
    }

    pub fn order_tables(&self) -> &OrderTables {
        &self.tables
    }

    pub fn order_table(&self, class: StreetClass) -> &[OrderEntry] {
        self.tables.table(class)
    }

    pub fn history(&self) -> &HandHistory {
        &self.history
    }

    pub fn player_status(&self, player: &str) -> Option<PlayerStatus> {
        self.statuses.get(player).copied()
    }

    pub fn active_count(&self) -> usize {
        self.statuses.values().filter(|s| s.can_act()).count()
    }

    pub fn is_hand_in_progress(&self) -> bool {
        self.context.ordering.is_some()
    }

    /// Новая раздача: полностью пересобирает состояние, ничего не берёт из прошлой.
    ///
    /// Имена игроков должны быть уникальны, за это отвечает вызывающий код.
    /// Повтор имени только пишется в лог: обе строки остаются в таблицах,
    /// а статус у них один на двоих.
    pub fn initialize_hand(
        &mut self,
        players: &[PlayerInHand],
        button: impl Into<SeatId>,
        hand_number: Option<HandNumber>,
    ) -> &mut Self {
        let button = button.into();

        tracing::info!(
            hand = hand_number.as_deref().unwrap_or("-"),
            players = players.len(),
            button = %button,
            "старт раздачи"
        );

        self.statuses = StatusMap::with_capacity(players.len());
        for p in players {
            if self.statuses.insert(p.name.clone(), PlayerStatus::Active).is_some() {
                tracing::warn!(player = %p.name, "имя игрока повторяется в раздаче");
            }
        }

        self.tables = build_order_tables(players, &button);

        // Каким способом построены таблицы, видно по `ordering`.
        let button_seat = Some(resolve_seat(&button)).filter(|seat| *seat != 0);

        self.context = HandContext {
            hand_number: hand_number.clone(),
            button_seat,
            current_street: Street::Preflop,
            cursor: StreetCursor::default(),
            ordering: Some(self.tables.mode),
        };

        if self.config.log_order_tables {
            tracing::info!(order = %format_order(&self.tables.preflop), "префлоп-порядок");
            tracing::info!(order = %format_order(&self.tables.postflop), "постфлоп-порядок");
        }

        self.history = HandHistory::new();
        self.record(HandEventKind::HandStarted {
            hand_number,
            button_seat,
            ordering: self.tables.mode,
            players: players.iter().map(|p| p.name.clone()).collect(),
        });

        self
    }

    /// Переход на улицу: курсор её класса обнуляется, возвращается первый активный.
    pub fn advance_to_street(&mut self, street: Street) -> Option<&OrderEntry> {
        tracing::info!(from = %self.context.current_street, to = %street, "смена улицы");

        self.context.current_street = street;
        self.context.cursor.reset(street.class());

        let first = self.peek(street.class()).map(|e| e.player.clone());
        if let Some(name) = &first {
            tracing::info!(street = %street, player = %name, "первым действует");
        }
        self.record(HandEventKind::StreetChanged {
            street,
            first_to_act: first,
        });

        self.current_player(street)
    }

    /// Сменить статус игрока. Возвращает число игроков, которые ещё могут действовать.
    ///
    /// Таблицы и курсоры не трогаются: фолд только сужает фильтр активных.
    pub fn update_player_status(&mut self, player: &str, status: PlayerStatus) -> usize {
        let Some(slot) = self.statuses.get_mut(player) else {
            tracing::warn!(player, status = %status, "игрок не участвует в раздаче, статус не изменён");
            return self.active_count();
        };

        let from = std::mem::replace(slot, status);
        let remaining = self.active_count();
        tracing::debug!(player, from = %from, to = %status, remaining, "статус игрока");

        if from != status {
            self.record(HandEventKind::StatusChanged {
                player: player.to_string(),
                from,
                to: status,
            });
        }

        remaining
    }

    /// Кто сейчас ходит. None – активных игроков нет (или раздача не начата).
    pub fn current_player(&self, street: Street) -> Option<&OrderEntry> {
        let class = street.class();
        if self.tables.table(class).is_empty() {
            tracing::error!(street = %street, "нет таблицы порядка для улицы");
            return None;
        }

        let current = self.peek(class);
        if current.is_none() {
            tracing::debug!(street = %street, "действовать некому");
        }
        current
    }

    /// Передать ход следующему активному игроку.
    pub fn move_to_next_player(&mut self, street: Street) -> Option<&OrderEntry> {
        let class = street.class();
        self.context.cursor.advance(class);

        let next = self.peek(class).map(|e| e.player.clone());
        if let Some(name) = &next {
            tracing::debug!(street = %street, player = %name, "следующий ход");
        }
        self.record(HandEventKind::TurnPassed {
            street,
            player: next,
        });

        self.current_player(street)
    }

    /// Таблица порядка улицы с живыми статусами.
    pub fn action_order(&self, street: Street) -> Vec<AnnotatedEntry> {
        let table = self.tables.table(street.class());
        if table.is_empty() {
            tracing::error!(street = %street, "нет таблицы порядка для улицы");
        }

        table
            .iter()
            .map(|e| {
                let status = self.player_status(&e.player);
                AnnotatedEntry {
                    entry: e.clone(),
                    status,
                    can_act: status.map(PlayerStatus::can_act).unwrap_or(false),
                }
            })
            .collect()
    }

    /// Завершён ли раунд ставок: активных ≤ 1 или каждый активный уже действовал.
    pub fn is_betting_round_complete(&self, street: Street, actions: &[ActionRecord]) -> bool {
        let table = self.tables.table(street.class());
        let complete = is_round_complete(active_entries(table, &self.statuses), actions);
        if complete {
            tracing::debug!(street = %street, "раунд ставок завершён");
        }
        complete
    }

    /// Конец раздачи: всё состояние раздачи стирается, история отдаётся вызывающему.
    pub fn end_hand(&mut self) -> HandHistory {
        tracing::info!(
            hand = self.context.hand_number.as_deref().unwrap_or("-"),
            "конец раздачи"
        );

        self.record(HandEventKind::HandFinished {
            hand_number: self.context.hand_number.clone(),
        });

        self.context = HandContext::default();
        self.tables = OrderTables::empty();
        self.statuses.clear();
        std::mem::take(&mut self.history)
    }

    pub fn debug_snapshot(&self) -> DebugSnapshot {
        let rows = |class: StreetClass| {
            let current = self.peek(class).map(|e| e.priority);
            self.tables
                .table(class)
                .iter()
                .map(|e| DebugRow {
                    entry: e.clone(),
                    status: self.player_status(&e.player),
                    to_act: Some(e.priority) == current,
                })
                .collect::<Vec<_>>()
        };

        let mut statuses: Vec<(String, PlayerStatus)> = self
            .statuses
            .iter()
            .map(|(name, status)| (name.clone(), *status))
            .collect();
        statuses.sort_by(|a, b| a.0.cmp(&b.0));

        let snapshot = DebugSnapshot {
            context: self.context.clone(),
            statuses,
            preflop: rows(StreetClass::Preflop),
            postflop: rows(StreetClass::Postflop),
        };

        tracing::debug!("{}", snapshot);
        snapshot
    }

    fn peek(&self, class: StreetClass) -> Option<&OrderEntry> {
        pick_current(
            self.tables.table(class),
            &self.statuses,
            self.context.cursor.get(class),
        )
    }

    fn record(&mut self, kind: HandEventKind) {
        if self.config.record_history {
            self.history.push(kind);
        }
    }
}

fn format_order(table: &[OrderEntry]) -> String {
    table
        .iter()
        .map(|e| format!("{}({})", e.position, e.player))
        .collect::<Vec<_>>()
        .join(" → ")
}

impl fmt::Display for DebugSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hand = self.context.hand_number.as_deref().unwrap_or("-");
        writeln!(f, "ActionOrderManager – раздача #{}", hand)?;
        writeln!(f, "  улица: {}", self.context.current_street)?;
        match self.context.button_seat {
            Some(seat) => writeln!(f, "  кнопка: место {}", seat)?,
            None => writeln!(f, "  кнопка: нет")?,
        }
        if let Some(mode) = self.context.ordering {
            writeln!(f, "  порядок: {:?}", mode)?;
        }

        writeln!(f, "  статусы:")?;
        for (player, status) in &self.statuses {
            writeln!(f, "    {}: {}", player, status)?;
        }

        for (title, rows) in [("префлоп", &self.preflop), ("постфлоп", &self.postflop)] {
            writeln!(f, "  {}:", title)?;
            for row in rows {
                let marker = if row.to_act { "->" } else { "  " };
                let status = row.status.map(|s| s.as_str()).unwrap_or("?");
                writeln!(
                    f,
                    "  {} {}. {}({}) - {}",
                    marker, row.entry.priority, row.entry.position, row.entry.player, status
                )?;
            }
        }
        Ok(())
    }
}
