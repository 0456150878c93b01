//! Power-up pickup, expiry and spawning

use rand_chacha::ChaCha8Rng;

use crate::core::config::PowerUpConfig;
use crate::core::constants::MAX_POWERUPS;
use crate::engine::events::TickEvent;
use crate::engine::state::GameState;
use crate::entity::PowerUp;
use crate::spawn::maybe_spawn_power_up;

/// Attach board power-ups to the living snakes standing on them
///
/// Picking up a kind the snake already runs refreshes its duration.
pub fn collect_power_ups(state: &mut GameState, config: &PowerUpConfig, events: &mut Vec<TickEvent>) {
    let board = &mut state.power_ups;
    for snake in state.snakes.values_mut().filter(|s| s.alive) {
        let head = snake.head();
        let Some(index) = board.iter().position(|p| p.position == head) else {
            continue;
        };
        let picked = board.remove(index);

        snake.power_ups.retain(|p| p.kind != picked.kind);
        snake
            .power_ups
            .push(PowerUp::collected(picked.kind, head, config.duration_ticks));
        snake.refresh_effect_flags(config.speed_multiplier);

        tracing::debug!("Snake {} picked up {:?} at {}", snake.id, picked.kind, head);
        events.push(TickEvent::PowerUpCollected {
            snake: snake.id,
            kind: picked.kind,
            at: head,
        });
    }
}

/// Count every board power-up and running effect down by one tick
pub fn expire_effects(state: &mut GameState, config: &PowerUpConfig, events: &mut Vec<TickEvent>) {
    state.power_ups.retain_mut(|p| {
        let expired = p.tick_down();
        if expired {
            events.push(TickEvent::EffectExpired {
                snake: None,
                kind: p.kind,
            });
        }
        !expired
    });

    for snake in state.snakes.values_mut() {
        if snake.power_ups.is_empty() {
            continue;
        }
        let id = snake.id;
        snake.power_ups.retain_mut(|p| {
            let expired = p.tick_down();
            if expired {
                tracing::trace!("Snake {} lost {:?}", id, p.kind);
                events.push(TickEvent::EffectExpired {
                    snake: Some(id),
                    kind: p.kind,
                });
            }
            !expired
        });
        snake.refresh_effect_flags(config.speed_multiplier);
    }
}

/// Roll for one new board power-up
pub fn spawn_power_up(
    state: &mut GameState,
    config: &PowerUpConfig,
    rng: &mut ChaCha8Rng,
    events: &mut Vec<TickEvent>,
) {
    let spawned = maybe_spawn_power_up(
        &state.power_ups,
        state.grid(),
        state.snakes.values(),
        &state.fruits,
        config,
        rng,
    );
    if let Some(power_up) = spawned {
        tracing::debug!("Spawned {:?} at {}", power_up.kind, power_up.position);
        events.push(TickEvent::PowerUpSpawned {
            kind: power_up.kind,
            at: power_up.position,
        });
        state.power_ups.push(power_up);
    }
}

/// Add `power_up` to the board unless it is full
pub fn add_power_up(state: &mut GameState, power_up: PowerUp) {
    if state.power_ups.len() >= MAX_POWERUPS {
        tracing::debug!("Board full, dropping {:?}", power_up.kind);
        return;
    }
    state.power_ups.push(power_up);
}

/// Replace the board power-ups, keeping at most `MAX_POWERUPS`
pub fn replace_power_ups(state: &mut GameState, mut power_ups: Vec<PowerUp>) {
    power_ups.truncate(MAX_POWERUPS);
    state.power_ups = power_ups;
}
