// src/bin/action_order_dev_cli.rs

use std::path::PathBuf;

use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use poker_action_order::domain::{PlayerInHand, PlayerStatus, SeatNumber, Street};
use poker_action_order::engine::{ActionKind, ActionRecord, ActionOrderManager};
use poker_action_order::infra::{init_tracing, EngineConfig};

/// Симуляция раздач поверх движка порядка действий.
#[derive(Debug, Parser)]
#[command(name = "action_order_dev_cli")]
struct Args {
    /// Сколько игроков посадить (места 1..=N).
    #[arg(long, default_value_t = 6)]
    players: u32,

    /// Место кнопки в первой раздаче (дальше кнопка идёт по кругу).
    /// Невалидное место включает запасной порядок.
    #[arg(long, default_value = "1")]
    button: String,

    /// Сколько раздач сыграть.
    #[arg(long, default_value_t = 3)]
    hands: u32,

    /// Seed RNG для воспроизводимых симуляций.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// JSON-конфиг движка.
    #[arg(long)]
    config: Option<PathBuf>,
}

/// Сколько ходов на улицу максимум, чтобы симуляция не зациклилась.
const MAX_STEPS_PER_STREET: usize = 64;

fn main() {
    init_tracing();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => match EngineConfig::load(path) {
            Ok(cfg) => cfg,
            Err(err) => {
                tracing::warn!(error = %err, "конфиг не загружен, используем значения по умолчанию");
                EngineConfig::default()
            }
        },
        None => EngineConfig::default(),
    };

    let roster: Vec<PlayerInHand> = (1..=args.players)
        .map(|seat| PlayerInHand::new(format!("Player{}", seat), format!("#{}", seat)))
        .collect();

    let mut rng = StdRng::seed_from_u64(args.seed);
    let mut engine = ActionOrderManager::new(config);

    println!("action_order_dev_cli: {} игроков, {} раздач", args.players, args.hands);

    let first_button = args.button.clone();
    for hand in 0..args.hands {
        let button = rotate_button(&first_button, hand, args.players);
        play_hand(&mut engine, &roster, &button, hand + 1, &mut rng);
    }

    println!("[CLI] Завершение работы dev-CLI.");
}

/// Кнопка раздачи: сдвиг от стартовой по кругу. Нечисловую оставляем как есть.
fn rotate_button(first: &str, hand: u32, players: u32) -> String {
    match first.trim().parse::<SeatNumber>() {
        Ok(seat) if seat >= 1 && seat <= players => {
            (((seat - 1 + hand) % players) + 1).to_string()
        }
        _ => first.to_string(),
    }
}

fn play_hand(
    engine: &mut ActionOrderManager,
    roster: &[PlayerInHand],
    button: &str,
    hand: u32,
    rng: &mut StdRng,
) {
    println!();
    println!("================ HAND {} (button {}) =================", hand, button);

    engine.initialize_hand(roster, button, Some(format!("DEV-{}", hand)));

    for street in Street::ALL {
        if engine.active_count() <= 1 {
            break;
        }
        match engine.advance_to_street(street) {
            Some(first) => println!("[{}] первым ходит {}({})", street, first.position, first.player),
            None => {
                println!("[{}] ходить некому", street);
                continue;
            }
        }
        play_street(engine, street, rng);
    }

    print!("{}", engine.debug_snapshot());

    let history = engine.end_hand();
    println!("============ END HAND {} ({} событий) ============", hand, history.len());
}

/// Случайные действия по очереди, пока раунд ставок не завершится.
fn play_street(engine: &mut ActionOrderManager, street: Street, rng: &mut StdRng) {
    let mut actions: Vec<ActionRecord> = Vec::new();

    for _ in 0..MAX_STEPS_PER_STREET {
        if engine.is_betting_round_complete(street, &actions) {
            println!("[{}] раунд ставок завершён", street);
            return;
        }

        let Some(current) = engine.current_player(street) else {
            return;
        };
        let player = current.player.clone();

        let roll: u32 = rng.gen_range(0..100);
        let (kind, status) = match roll {
            0..=19 => (ActionKind::Fold, Some(PlayerStatus::Folded)),
            20..=24 => (ActionKind::AllIn, Some(PlayerStatus::AllIn)),
            _ => (ActionKind::Check, None),
        };

        println!("[{}] {} -> {}", street, player, kind);
        actions.push(ActionRecord::new(player.clone(), kind));

        match status {
            Some(status) => {
                // Выбывший пропадает из фильтра активных: на его индексе уже следующий.
                engine.update_player_status(&player, status);
            }
            None => {
                engine.move_to_next_player(street);
            }
        }
    }

    println!("[{}] превышен лимит шагов ({})", street, MAX_STEPS_PER_STREET);
}
