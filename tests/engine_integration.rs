//! End-to-end engine scenarios
//!
//! Scenarios drive the reducer with actions; where a test needs snakes to
//! move a particular way it swaps in a scripted strategy.

use std::collections::BTreeMap;

use rand_chacha::ChaCha8Rng;

use snake_arena::core::types::{Direction, Position, SnakeId};
use snake_arena::decision::{DecisionContext, DirectionStrategy};
use snake_arena::engine::{run_ticks, EliminationCause};
use snake_arena::entity::Snake;
use snake_arena::spawn::random_free_position;
use snake_arena::{new_game, Action, Engine, EngineConfig, GameConfig, GameState, TickEvent};

/// Always answers the same direction per snake
struct Scripted(BTreeMap<SnakeId, Direction>);

impl DirectionStrategy for Scripted {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn choose_direction(
        &mut self,
        _ctx: &DecisionContext<'_>,
        snake: &Snake,
        _rng: &mut ChaCha8Rng,
    ) -> Direction {
        self.0.get(&snake.id).copied().unwrap_or(snake.direction)
    }
}

fn quiet_config() -> EngineConfig {
    let mut config = EngineConfig::default();
    config.power_ups.spawn_chance = 0.0;
    config
}

fn scripted_engine(moves: &[(u32, Direction)]) -> Engine {
    let script = moves.iter().map(|&(id, d)| (SnakeId(id), d)).collect();
    Engine::with_seed(quiet_config(), 42).unwrap().with_strategy(Box::new(Scripted(script)))
}

fn board(width: i32, height: i32, snakes: Vec<Snake>, fruits: &[(i32, i32)]) -> GameState {
    let mut state = GameState::new(width, height);
    for snake in snakes {
        state.snakes.insert(snake.id, snake);
    }
    state.fruits = fruits.iter().map(|&(x, y)| Position::new(x, y)).collect();
    state
}

fn cells(list: &[(i32, i32)]) -> Vec<Position> {
    list.iter().map(|&(x, y)| Position::new(x, y)).collect()
}

// ============================================================================
// Fruit
// ============================================================================

#[test]
fn test_snake_eats_fruit_in_front() {
    let mut engine = Engine::with_seed(quiet_config(), 7).unwrap();
    let snake = Snake::new(SnakeId(0), Position::new(5, 5), Direction::Right, "");
    let state = board(10, 10, vec![snake], &[(6, 5), (0, 0), (9, 9)]);

    let state = engine.apply(&state, Action::MoveSnakes { round: 0 });
    let state = engine.apply(&state, Action::CheckCollisions);
    let state = engine.apply(&state, Action::CheckFruitConsumption);

    let snake = &state.snakes[&SnakeId(0)];
    assert_eq!(snake.head(), Position::new(6, 5));
    assert_eq!(snake.score, 10);
    assert_eq!(snake.len(), 3);

    assert_eq!(state.fruits.len(), 3);
    assert!(!state.fruits.contains(&Position::new(6, 5)));
    for (i, fruit) in state.fruits.iter().enumerate() {
        assert!(state.grid().contains(*fruit));
        assert!(!snake.occupies(*fruit));
        assert!(!state.fruits[i + 1..].contains(fruit));
    }
}

// ============================================================================
// Eliminations
// ============================================================================

#[test]
fn test_head_on_eliminates_both() {
    let mut engine = scripted_engine(&[(0, Direction::Right), (1, Direction::Left)]);
    let mut a = Snake::new(SnakeId(0), Position::new(3, 4), Direction::Right, "");
    a.score = 5;
    let mut b = Snake::new(SnakeId(1), Position::new(5, 4), Direction::Left, "");
    b.score = 30;
    let state = board(10, 10, vec![a, b], &[(0, 0), (9, 0), (0, 9)]);

    let (moved, events) = engine.apply_with_events(&state, Action::MoveSnakes { round: 0 });
    for id in [SnakeId(0), SnakeId(1)] {
        let snake = &moved.snakes[&id];
        assert_eq!(snake.head(), Position::new(4, 4));
        assert!(!snake.alive);
        assert!(events.contains(&TickEvent::Eliminated {
            snake: id,
            at: Position::new(4, 4),
            cause: EliminationCause::HeadOn,
        }));
    }

    let after = engine.apply(&moved, Action::CheckCollisions);
    let a = &after.snakes[&SnakeId(0)];
    let b = &after.snakes[&SnakeId(1)];
    assert!(a.alive && b.alive);
    assert_eq!(a.score, 0);
    assert_eq!(b.score, 20);
    assert_eq!(a.len(), 1);
    assert_eq!(b.len(), 1);
    assert_ne!(a.head(), b.head());
}

#[test]
fn test_leaving_the_grid_respawns_inside() {
    let mut engine = scripted_engine(&[(0, Direction::Left)]);
    let mut snake = Snake::with_body(SnakeId(0), cells(&[(0, 3), (1, 3), (2, 3)]), Direction::Left);
    snake.score = 15;
    let state = board(8, 8, vec![snake], &[(7, 7), (6, 7), (5, 7)]);

    let (state, events) = engine.apply_with_events(&state, Action::MoveSnakes { round: 0 });

    let snake = &state.snakes[&SnakeId(0)];
    assert!(snake.alive);
    assert_eq!(snake.len(), 1);
    assert_eq!(snake.score, 5);
    assert!(state.grid().contains(snake.head()));
    assert!(matches!(
        events[0],
        TickEvent::Eliminated {
            cause: EliminationCause::Wall,
            ..
        }
    ));
}

#[test]
fn test_running_into_own_torso_is_fatal() {
    let mut engine = scripted_engine(&[(0, Direction::Down)]);
    let snake = Snake::with_body(
        SnakeId(0),
        cells(&[(2, 2), (3, 2), (3, 3), (2, 3), (1, 3)]),
        Direction::Left,
    );
    let state = board(8, 8, vec![snake], &[(7, 7), (6, 7), (5, 7)]);

    let state = engine.apply(&state, Action::MoveSnakes { round: 0 });
    assert_eq!(state.snakes[&SnakeId(0)].head(), Position::new(2, 3));

    let (state, events) = engine.apply_with_events(&state, Action::CheckCollisions);
    assert_eq!(state.snakes[&SnakeId(0)].len(), 1);
    assert!(events.iter().any(|e| matches!(
        e,
        TickEvent::Eliminated {
            cause: EliminationCause::Body,
            ..
        }
    )));
}

#[test]
fn test_following_own_tail_is_safe() {
    // Tail leaves (3,2) in the same move the head enters it
    let mut engine = scripted_engine(&[(0, Direction::Right)]);
    let snake = Snake::with_body(
        SnakeId(0),
        cells(&[(2, 2), (2, 3), (3, 3), (3, 2)]),
        Direction::Up,
    );
    let state = board(8, 8, vec![snake], &[(7, 7), (6, 7), (5, 7)]);

    let state = engine.apply(&state, Action::MoveSnakes { round: 0 });
    let state = engine.apply(&state, Action::CheckCollisions);

    let snake = &state.snakes[&SnakeId(0)];
    assert_eq!(snake.len(), 4);
    assert_eq!(snake.head(), Position::new(3, 2));
}

#[test]
fn test_fast_snake_into_resting_head_dies_alone() {
    // Round 1 only moves the speed-2 snake; snake 1 sits still
    let mut engine = scripted_engine(&[(0, Direction::Right), (1, Direction::Up)]);
    let mut fast = Snake::with_body(SnakeId(0), cells(&[(3, 5), (2, 5), (1, 5)]), Direction::Right);
    fast.speed_multiplier = 2;
    let slow = Snake::with_body(SnakeId(1), cells(&[(4, 5), (4, 6), (4, 7)]), Direction::Up);
    let state = board(10, 10, vec![fast, slow.clone()], &[(0, 0), (9, 0), (0, 9)]);

    let (moved, events) = engine.apply_with_events(&state, Action::MoveSnakes { round: 1 });
    assert!(moved.snakes[&SnakeId(1)].alive);
    assert!(!moved.snakes[&SnakeId(0)].alive);
    assert!(!events.iter().any(|e| matches!(
        e,
        TickEvent::Eliminated {
            cause: EliminationCause::HeadOn,
            ..
        }
    )));
    assert!(events.contains(&TickEvent::Eliminated {
        snake: SnakeId(0),
        at: Position::new(4, 5),
        cause: EliminationCause::Body,
    }));

    let (after, events) = engine.apply_with_events(&moved, Action::CheckCollisions);
    assert_eq!(after.snakes[&SnakeId(1)].body, slow.body);
    assert_eq!(after.snakes[&SnakeId(0)].len(), 1);
    assert!(!events.iter().any(|e| matches!(e, TickEvent::Eliminated { .. })));
}

#[test]
fn test_wall_hit_costs_one_penalty_per_tick() {
    // Snake 1 takes the last cell in front of the wall in the same round
    let mut engine = scripted_engine(&[(0, Direction::Left), (1, Direction::Left)]);
    let mut leaver = Snake::new(SnakeId(0), Position::new(0, 0), Direction::Left, "");
    leaver.score = 30;
    let follower = Snake::with_body(SnakeId(1), cells(&[(2, 0), (3, 0)]), Direction::Left);
    let state = board(4, 1, vec![leaver, follower], &[]);

    let report = engine.step_with_events(&state);

    let leaver = &report.state.snakes[&SnakeId(0)];
    assert!(leaver.alive);
    assert_eq!(leaver.score, 20);
    assert_eq!(leaver.head(), Position::new(0, 0));
    let eliminations: Vec<&TickEvent> = report
        .events
        .iter()
        .filter(|e| matches!(e, TickEvent::Eliminated { snake: SnakeId(0), .. }))
        .collect();
    assert_eq!(
        eliminations,
        vec![&TickEvent::Eliminated {
            snake: SnakeId(0),
            at: Position::new(-1, 0),
            cause: EliminationCause::Wall,
        }]
    );
    assert_eq!(report.state.snakes[&SnakeId(1)].head(), Position::new(1, 0));
}

// ============================================================================
// Spawning and actions
// ============================================================================

#[test]
fn test_saturated_grid_returns_last_free_cell() {
    use rand::SeedableRng;

    let snake = Snake::with_body(SnakeId(0), cells(&[(0, 0), (1, 0), (1, 1)]), Direction::Up);
    let state = board(2, 2, vec![snake], &[]);
    let mut rng = ChaCha8Rng::seed_from_u64(3);

    for _ in 0..5 {
        let pos = random_free_position(state.grid(), state.snakes.values(), &mut rng);
        assert_eq!(pos, Position::new(0, 1));
    }
}

#[test]
fn test_unknown_json_action_is_no_op() {
    let mut engine = Engine::with_seed(quiet_config(), 1).unwrap();
    let state = new_game(&GameConfig::default(), &mut engine).unwrap();

    let action: Action = serde_json::from_str(r#"{"type":"TOGGLE_PAUSE"}"#).unwrap();
    assert_eq!(engine.apply(&state, action), state);
}

#[test]
fn test_json_actions_drive_the_engine() {
    let mut engine = Engine::with_seed(quiet_config(), 1).unwrap();
    let state = new_game(&GameConfig::default(), &mut engine).unwrap();

    let action: Action =
        serde_json::from_str(r#"{"type":"UPDATE_DIMENSIONS","payload":{"width":12,"height":9}}"#)
            .unwrap();
    let state = engine.apply(&state, action);
    assert_eq!((state.width, state.height), (12, 9));
    assert_eq!(state.fruits.len(), 3);
}

// ============================================================================
// Full runs
// ============================================================================

#[test]
fn test_long_run_keeps_invariants() {
    let mut engine = Engine::with_seed(EngineConfig::default(), 99).unwrap();
    let config = GameConfig {
        grid_size: 20,
        snake_count: 4,
        ..GameConfig::default()
    };
    let mut state = new_game(&config, &mut engine).unwrap();
    let roster = state.snakes.len();

    for _ in 0..300 {
        state = engine.step(&state);
        assert_eq!(state.fruits.len(), 3);
        assert_eq!(state.snakes.len(), roster);
        assert!(state.power_ups.len() <= 5);
        for snake in state.snakes.values() {
            assert!(!snake.body.is_empty());
            assert!(snake.alive);
            assert!(state.grid().contains(snake.head()));
        }
    }
    assert_eq!(state.tick, 300);
}

#[test]
fn test_same_seed_same_run() {
    let config = GameConfig::default();
    let run = |seed| {
        let mut engine = Engine::with_seed(EngineConfig::default(), seed).unwrap();
        let state = new_game(&config, &mut engine).unwrap();
        run_ticks(&mut engine, state, 50)
    };
    assert_eq!(run(5), run(5));
}

#[test]
fn test_search_strategy_collects_fruit() {
    let mut config = quiet_config();
    config.strategy = snake_arena::decision::StrategyKind::Search;
    let mut engine = Engine::with_seed(config, 17).unwrap();
    let snake = Snake::new(SnakeId(0), Position::new(2, 2), Direction::Right, "");
    let state = board(12, 12, vec![snake], &[(2, 6), (11, 11), (11, 0)]);

    let state = run_ticks(&mut engine, state, 4);
    let snake = &state.snakes[&SnakeId(0)];
    assert_eq!(snake.score, 10);
    assert_eq!(snake.head(), Position::new(2, 6));
}
