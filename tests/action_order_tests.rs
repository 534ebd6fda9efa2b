//! Интеграционные тесты жизненного цикла раздачи и курсора хода.
//!
//! Проверяем:
//! - чей ход на префлопе и постфлопе;
//! - фолд/олл-ин не меняет priority, только сужает фильтр активных;
//! - смена улицы всегда начинает с первого активного;
//! - завершение раунда ставок;
//! - end_hand не оставляет следов прошлой раздачи.

use poker_action_order::domain::{PlayerInHand, PlayerStatus, SeatId, Street, StreetClass};
use poker_action_order::engine::{
    ActionKind, ActionOrderManager, ActionRecord, HandEventKind, OrderingMode,
};
use poker_action_order::infra::EngineConfig;

/// Шесть игроков "P1".."P6" на местах 1..6.
fn six_players() -> Vec<PlayerInHand> {
    (1..=6u32)
        .map(|s| PlayerInHand::new(format!("P{}", s), s))
        .collect()
}

/// Движок с начатой раздачей: 6 игроков, кнопка на месте 3.
///
/// Префлоп:  P6(UTG) P1(UTG+1) P2(CO) P3(BTN) P4(SB) P5(BB)
/// Постфлоп: P4(SB) P5(BB) P6(UTG) P1(UTG+1) P2(CO) P3(BTN)
fn six_handed_hand() -> ActionOrderManager {
    let mut engine = ActionOrderManager::new(EngineConfig::default());
    engine.initialize_hand(&six_players(), 3u32, Some("H-1".to_string()));
    engine
}

fn current_name(engine: &ActionOrderManager, street: Street) -> Option<String> {
    engine.current_player(street).map(|e| e.player.clone())
}

fn acted(names: &[&str]) -> Vec<ActionRecord> {
    names
        .iter()
        .map(|n| ActionRecord::new(*n, ActionKind::Check))
        .collect()
}

#[test]
fn initialize_hand_sets_up_context_and_statuses() {
    let engine = six_handed_hand();

    let ctx = engine.context();
    assert_eq!(ctx.hand_number.as_deref(), Some("H-1"));
    assert_eq!(ctx.button_seat, Some(3));
    assert_eq!(ctx.current_street, Street::Preflop);
    assert_eq!(ctx.cursor.preflop, 0);
    assert_eq!(ctx.cursor.postflop, 0);
    assert_eq!(ctx.ordering, Some(OrderingMode::Positional));

    assert!(engine.is_hand_in_progress());
    assert_eq!(engine.active_count(), 6);
    for p in six_players() {
        assert_eq!(engine.player_status(&p.name), Some(PlayerStatus::Active));
    }
    assert_eq!(engine.order_table(StreetClass::Preflop).len(), 6);
    assert_eq!(engine.order_table(StreetClass::Postflop).len(), 6);
}

#[test]
fn preflop_starts_at_utg_and_moves_clockwise() {
    let mut engine = six_handed_hand();

    assert_eq!(current_name(&engine, Street::Preflop).as_deref(), Some("P6"));

    let order: Vec<String> = (0..6)
        .filter_map(|_| engine.move_to_next_player(Street::Preflop).map(|e| e.player.clone()))
        .collect();
    // После BB круг замыкается на UTG.
    assert_eq!(order, vec!["P1", "P2", "P3", "P4", "P5", "P6"]);
}

#[test]
fn folding_shrinks_the_active_filter_without_renumbering() {
    let mut engine = six_handed_hand();
    let before = engine.order_tables().clone();

    // P6 (UTG) ходит, ход у P1.
    engine.move_to_next_player(Street::Preflop);
    assert_eq!(current_name(&engine, Street::Preflop).as_deref(), Some("P1"));

    // P1 фолдит: на его индексе в фильтре уже P2.
    let remaining = engine.update_player_status("P1", PlayerStatus::Folded);
    assert_eq!(remaining, 5);
    assert_eq!(current_name(&engine, Street::Preflop).as_deref(), Some("P2"));

    // Таблицы не тронуты.
    assert_eq!(engine.order_tables(), &before);
    let p1 = engine
        .order_table(StreetClass::Preflop)
        .iter()
        .find(|e| e.player == "P1")
        .unwrap();
    assert_eq!(p1.priority, 1);

    // Курсор тоже не тронут.
    assert_eq!(engine.context().cursor.preflop, 1);
}

#[test]
fn all_in_players_are_skipped_like_folded_ones() {
    let mut engine = six_handed_hand();
    engine.update_player_status("P6", PlayerStatus::AllIn);
    engine.update_player_status("P1", PlayerStatus::Folded);

    assert_eq!(current_name(&engine, Street::Preflop).as_deref(), Some("P2"));

    let annotated = engine.action_order(Street::Preflop);
    assert_eq!(annotated.len(), 6);
    assert_eq!(annotated[0].entry.player, "P6");
    assert_eq!(annotated[0].status, Some(PlayerStatus::AllIn));
    assert!(!annotated[0].can_act);
    assert!(annotated[2].can_act);
}

#[test]
fn cursor_wraps_modulo_the_live_active_count() {
    let mut engine = six_handed_hand();
    for _ in 0..4 {
        engine.move_to_next_player(Street::Preflop);
    }
    // cursor = 4 -> P4 (SB)
    assert_eq!(current_name(&engine, Street::Preflop).as_deref(), Some("P4"));

    // Трое выбыли: активны P6, P4, P5; 4 mod 3 = 1 -> P4.
    engine.update_player_status("P1", PlayerStatus::Folded);
    engine.update_player_status("P2", PlayerStatus::Folded);
    engine.update_player_status("P3", PlayerStatus::Folded);
    assert_eq!(current_name(&engine, Street::Preflop).as_deref(), Some("P4"));

    engine.move_to_next_player(Street::Preflop);
    assert_eq!(current_name(&engine, Street::Preflop).as_deref(), Some("P5"));
    engine.move_to_next_player(Street::Preflop);
    assert_eq!(current_name(&engine, Street::Preflop).as_deref(), Some("P6"));
}

#[test]
fn advancing_streets_restarts_from_first_active_postflop_player() {
    let mut engine = six_handed_hand();
    engine.update_player_status("P4", PlayerStatus::Folded);

    let first_flop = engine.advance_to_street(Street::Flop).map(|e| e.player.clone());
    assert_eq!(first_flop.as_deref(), Some("P5"));
    assert_eq!(engine.context().current_street, Street::Flop);

    engine.move_to_next_player(Street::Flop);
    engine.move_to_next_player(Street::Flop);
    assert_eq!(current_name(&engine, Street::Flop).as_deref(), Some("P1"));

    let first_turn = engine.advance_to_street(Street::Turn).map(|e| e.player.clone());
    assert_eq!(first_turn, first_flop);
    assert_eq!(current_name(&engine, Street::Turn), first_flop);
}

#[test]
fn flop_turn_and_river_share_one_cursor() {
    let mut engine = six_handed_hand();
    engine.advance_to_street(Street::Flop);
    engine.move_to_next_player(Street::Flop);

    assert_eq!(current_name(&engine, Street::Flop).as_deref(), Some("P5"));
    assert_eq!(current_name(&engine, Street::Turn).as_deref(), Some("P5"));
    assert_eq!(current_name(&engine, Street::River).as_deref(), Some("P5"));
    assert_eq!(engine.context().cursor.postflop, 1);

    // Префлоп-курсор живёт отдельно.
    assert_eq!(current_name(&engine, Street::Preflop).as_deref(), Some("P6"));
}

#[test]
fn advance_to_preflop_resets_only_the_preflop_cursor() {
    let mut engine = six_handed_hand();
    engine.move_to_next_player(Street::Preflop);
    engine.move_to_next_player(Street::River);

    engine.advance_to_street(Street::Preflop);
    assert_eq!(engine.context().cursor.preflop, 0);
    assert_eq!(engine.context().cursor.postflop, 1);
}

#[test]
fn nobody_to_act_when_everyone_folded_or_all_in() {
    let mut engine = six_handed_hand();
    for (i, p) in six_players().iter().enumerate() {
        let status = if i % 2 == 0 {
            PlayerStatus::Folded
        } else {
            PlayerStatus::AllIn
        };
        engine.update_player_status(&p.name, status);
    }

    assert_eq!(engine.active_count(), 0);
    assert!(engine.current_player(Street::Preflop).is_none());
    assert!(engine.move_to_next_player(Street::Preflop).is_none());
    assert!(engine.advance_to_street(Street::Flop).is_none());
}

#[test]
fn folded_player_can_be_reactivated() {
    let mut engine = six_handed_hand();
    engine.update_player_status("P6", PlayerStatus::Folded);
    assert_eq!(current_name(&engine, Street::Preflop).as_deref(), Some("P1"));

    let remaining = engine.update_player_status("P6", PlayerStatus::Active);
    assert_eq!(remaining, 6);
    assert_eq!(current_name(&engine, Street::Preflop).as_deref(), Some("P6"));
}

#[test]
fn unknown_player_status_update_is_ignored() {
    let mut engine = six_handed_hand();
    let remaining = engine.update_player_status("Ghost", PlayerStatus::Folded);

    assert_eq!(remaining, 6);
    assert_eq!(engine.player_status("Ghost"), None);
    assert!(engine.action_order(Street::Flop).iter().all(|a| a.entry.player != "Ghost"));
}

#[test]
fn betting_round_complete_with_one_active_player() {
    let mut engine = six_handed_hand();
    for name in ["P1", "P2", "P3", "P4", "P5"] {
        engine.update_player_status(name, PlayerStatus::Folded);
    }
    assert!(engine.is_betting_round_complete(Street::Preflop, &[]));
    assert!(engine.is_betting_round_complete(Street::River, &[]));
}

#[test]
fn betting_round_needs_every_active_player_to_act() {
    let mut engine = six_handed_hand();
    engine.update_player_status("P2", PlayerStatus::Folded);
    engine.update_player_status("P3", PlayerStatus::AllIn);

    let partial = acted(&["P6", "P1", "P4"]);
    assert!(!engine.is_betting_round_complete(Street::Preflop, &partial));

    let mut full = acted(&["P6", "P1", "P4", "P5"]);
    assert!(engine.is_betting_round_complete(Street::Preflop, &full));

    // Повторные действия и суммы не мешают: важно только "действовал ли".
    full.push(ActionRecord::new("P6", ActionKind::Raise).with_amount(300.0));
    assert!(engine.is_betting_round_complete(Street::Preflop, &full));
}

#[test]
fn betting_round_ignores_actions_of_strangers_and_blank_names() {
    let engine = six_handed_hand();
    let mut actions = acted(&["P1", "P2", "P3", "P4", "P5"]);
    actions.push(ActionRecord::new("Ghost", ActionKind::Call));
    actions.push(ActionRecord::new("", ActionKind::Call));

    assert!(!engine.is_betting_round_complete(Street::Flop, &actions));

    actions.push(ActionRecord::new("P6", ActionKind::Fold));
    assert!(engine.is_betting_round_complete(Street::Flop, &actions));
}

#[test]
fn invalid_button_still_produces_tables_and_a_current_player() {
    let players = vec![
        PlayerInHand::new("Alice", 1u32),
        PlayerInHand::new("Bob", 2u32),
        PlayerInHand::new("Carol", 3u32),
    ];
    let mut engine = ActionOrderManager::new(EngineConfig::default());
    engine.initialize_hand(&players, 99u32, None);

    assert_eq!(engine.context().ordering, Some(OrderingMode::Sequential));
    assert_eq!(engine.order_table(StreetClass::Preflop).len(), 3);
    assert_eq!(engine.order_table(StreetClass::Postflop).len(), 3);
    assert_eq!(current_name(&engine, Street::Preflop).as_deref(), Some("Alice"));
    assert_eq!(
        engine.advance_to_street(Street::Flop).map(|e| e.player.clone()).as_deref(),
        Some("Bob")
    );
}

#[test]
fn entered_button_is_kept_even_when_order_falls_back() {
    let players = vec![
        PlayerInHand::new("P1", 1u32),
        PlayerInHand::new("P2", 2u32),
        PlayerInHand::new("P3", 3u32),
    ];
    let mut engine = ActionOrderManager::new(EngineConfig::default());
    engine.initialize_hand(&players, 99u32, Some("H-9".to_string()));

    assert_eq!(engine.context().ordering, Some(OrderingMode::Sequential));
    assert_eq!(engine.context().button_seat, Some(99));
    assert!(matches!(
        engine.history().events[0].kind,
        HandEventKind::HandStarted { button_seat: Some(99), .. }
    ));
    assert!(engine.debug_snapshot().to_string().contains("кнопка: место 99"));

    // Нераспознанная кнопка в контекст не попадает.
    engine.initialize_hand(&players, SeatId::Missing, None);
    assert_eq!(engine.context().button_seat, None);
    engine.initialize_hand(&players, "button", None);
    assert_eq!(engine.context().button_seat, None);
}

#[test]
fn string_seats_and_button_are_accepted() {
    let players = vec![
        PlayerInHand::new("Alice", "#1"),
        PlayerInHand::new("Bob", "#2"),
        PlayerInHand::new("Carol", "#3"),
    ];
    let mut engine = ActionOrderManager::new(EngineConfig::default());
    engine.initialize_hand(&players, "#3", None);

    assert_eq!(engine.context().ordering, Some(OrderingMode::Positional));
    assert_eq!(engine.context().button_seat, Some(3));
    // 3 игрока: префлоп начинается с кнопки.
    assert_eq!(current_name(&engine, Street::Preflop).as_deref(), Some("Carol"));
    assert_eq!(
        engine.advance_to_street(Street::Flop).map(|e| e.player.clone()).as_deref(),
        Some("Alice")
    );
}

#[test]
fn end_hand_clears_everything_and_returns_history() {
    let mut engine = six_handed_hand();
    engine.update_player_status("P1", PlayerStatus::Folded);
    engine.advance_to_street(Street::Flop);

    let history = engine.end_hand();
    let kinds: Vec<&HandEventKind> = history.events.iter().map(|e| &e.kind).collect();
    assert_eq!(history.len(), 4);
    assert!(matches!(kinds[0], HandEventKind::HandStarted { players, .. } if players.len() == 6));
    assert!(matches!(
        kinds[1],
        HandEventKind::StatusChanged { player, to: PlayerStatus::Folded, .. } if player == "P1"
    ));
    assert!(matches!(kinds[2], HandEventKind::StreetChanged { street: Street::Flop, .. }));
    assert!(matches!(kinds[3], HandEventKind::HandFinished { .. }));

    assert!(!engine.is_hand_in_progress());
    assert_eq!(engine.context().hand_number, None);
    assert_eq!(engine.active_count(), 0);
    assert_eq!(engine.player_status("P2"), None);
    assert!(engine.order_tables().is_empty());
    assert!(engine.current_player(Street::Preflop).is_none());
    assert!(engine.action_order(Street::Flop).is_empty());
    assert!(engine.history().is_empty());
}

#[test]
fn new_hand_after_end_hand_has_no_residue() {
    let mut engine = six_handed_hand();
    engine.update_player_status("P2", PlayerStatus::Folded);
    engine.end_hand();

    let fresh = vec![
        PlayerInHand::new("Xena", 4u32),
        PlayerInHand::new("Yuri", 5u32),
        PlayerInHand::new("Zoe", 6u32),
    ];
    engine.initialize_hand(&fresh, 5u32, Some("H-2".to_string()));

    for table in [
        engine.order_table(StreetClass::Preflop),
        engine.order_table(StreetClass::Postflop),
    ] {
        assert_eq!(table.len(), 3);
        assert!(table.iter().all(|e| ["Xena", "Yuri", "Zoe"].contains(&e.player.as_str())));
    }
    assert_eq!(engine.player_status("P2"), None);
    assert_eq!(engine.active_count(), 3);
}

#[test]
fn initialize_hand_twice_rebuilds_from_scratch() {
    let mut engine = six_handed_hand();
    engine.move_to_next_player(Street::Preflop);
    engine.update_player_status("P3", PlayerStatus::Folded);

    let heads_up = vec![PlayerInHand::new("P1", 1u32), PlayerInHand::new("P2", 2u32)];
    engine.initialize_hand(&heads_up, SeatId::from(2u32), None);

    assert_eq!(engine.active_count(), 2);
    assert_eq!(engine.player_status("P3"), None);
    assert_eq!(engine.context().cursor.preflop, 0);
    assert_eq!(engine.history().len(), 1);
    // Хедз-ап, кнопка 2: первым ходит место после кнопки.
    assert_eq!(current_name(&engine, Street::Preflop).as_deref(), Some("P1"));
}

#[test]
fn history_can_be_switched_off() {
    let config = EngineConfig {
        log_order_tables: false,
        record_history: false,
    };
    let mut engine = ActionOrderManager::new(config);
    engine.initialize_hand(&six_players(), 1u32, None);
    engine.update_player_status("P1", PlayerStatus::Folded);

    assert!(engine.history().is_empty());
    assert!(engine.end_hand().is_empty());
}

#[test]
fn move_to_next_player_is_recorded() {
    let mut engine = six_handed_hand();
    engine.move_to_next_player(Street::Preflop);

    let last = engine.history().events.last().unwrap();
    assert_eq!(last.index, 1);
    assert_eq!(
        last.kind,
        HandEventKind::TurnPassed {
            street: Street::Preflop,
            player: Some("P1".to_string()),
        }
    );
}

#[test]
fn debug_snapshot_marks_whose_turn_it_is() {
    let mut engine = six_handed_hand();
    engine.update_player_status("P6", PlayerStatus::Folded);
    engine.advance_to_street(Street::Flop);

    let snapshot = engine.debug_snapshot();
    let marked_pre: Vec<&str> = snapshot
        .preflop
        .iter()
        .filter(|r| r.to_act)
        .map(|r| r.entry.player.as_str())
        .collect();
    let marked_post: Vec<&str> = snapshot
        .postflop
        .iter()
        .filter(|r| r.to_act)
        .map(|r| r.entry.player.as_str())
        .collect();

    assert_eq!(marked_pre, vec!["P1"]);
    assert_eq!(marked_post, vec!["P4"]);
    assert_eq!(snapshot.statuses.len(), 6);
    assert_eq!(snapshot.context.current_street, Street::Flop);

    let dump = snapshot.to_string();
    assert!(dump.contains("H-1"));
    assert!(dump.contains("-> 1. UTG+1(P1) - active"));
    assert!(dump.contains("P6: folded"));
}

#[test]
fn reading_before_any_hand_returns_nothing() {
    let mut engine = ActionOrderManager::new(EngineConfig::default());

    assert!(!engine.is_hand_in_progress());
    assert!(engine.current_player(Street::Preflop).is_none());
    assert!(engine.move_to_next_player(Street::Flop).is_none());
    assert!(engine.action_order(Street::River).is_empty());
    assert!(engine.is_betting_round_complete(Street::Preflop, &[]));
    assert_eq!(engine.update_player_status("Nobody", PlayerStatus::Folded), 0);
}

#[test]
fn repeated_name_keeps_both_rows_with_one_status() {
    let players = vec![
        PlayerInHand::new("Ann", 1u32),
        PlayerInHand::new("Ann", 2u32),
        PlayerInHand::new("Ben", 3u32),
    ];
    let mut engine = ActionOrderManager::new(EngineConfig::default());
    engine.initialize_hand(&players, 3u32, None);

    assert_eq!(engine.order_table(StreetClass::Preflop).len(), 3);
    assert_eq!(engine.order_table(StreetClass::Postflop).len(), 3);
    assert_eq!(engine.active_count(), 2);

    // Один статус на оба места: фолд убирает из фильтра обе строки.
    engine.update_player_status("Ann", PlayerStatus::Folded);
    let active: Vec<String> = engine
        .action_order(Street::Flop)
        .into_iter()
        .filter(|a| a.can_act)
        .map(|a| a.entry.player)
        .collect();
    assert_eq!(active, vec!["Ben"]);
}
