//! Fixed-rate tick driver
//!
//! The engine runs on its own tokio task. Each finished tick is published
//! through a watch channel, so readers only ever see the latest snapshot and
//! never block the simulation.

use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};

use crate::core::error::Result;
use crate::engine::{Engine, GameState, TickEvent};

pub use crate::engine::run_ticks;

/// Shortest interval the scheduler accepts
const MIN_TICK_RATE: Duration = Duration::from_millis(1);

pub struct TickScheduler;

impl TickScheduler {
    /// Tick forever (until stopped) every `tick_rate`
    pub fn spawn(engine: Engine, state: GameState, tick_rate: Duration) -> SchedulerHandle {
        Self::spawn_with_limit(engine, state, tick_rate, None)
    }

    /// Tick every `tick_rate`, ending on its own after `max_ticks` if given
    pub fn spawn_with_limit(
        mut engine: Engine,
        mut state: GameState,
        tick_rate: Duration,
        max_ticks: Option<u64>,
    ) -> SchedulerHandle {
        let (snapshot_tx, snapshot_rx) = watch::channel(state.clone());
        let (stop_tx, mut stop_rx) = watch::channel(false);
        let tick_rate = tick_rate.max(MIN_TICK_RATE);

        let task = tokio::spawn(async move {
            let mut ticker = interval(tick_rate);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // First tick completes immediately
            ticker.tick().await;

            let mut completed = 0u64;
            loop {
                if max_ticks.is_some_and(|limit| completed >= limit) {
                    break;
                }
                tokio::select! {
                    // A stop request and a dropped handle both end the run
                    _ = stop_rx.changed() => break,
                    _ = ticker.tick() => {
                        let report = engine.step_with_events(&state);
                        log_events(report.state.tick, &report.events);
                        state = report.state;
                        completed += 1;
                        // Nobody listening is fine, the handle still joins
                        let _ = snapshot_tx.send(state.clone());
                    }
                }
            }

            tracing::debug!("Scheduler stopped after {} ticks", completed);
            state
        });

        SchedulerHandle {
            snapshots: snapshot_rx,
            stop: stop_tx,
            task,
        }
    }
}

fn log_events(tick: u64, events: &[TickEvent]) {
    for event in events {
        match event {
            TickEvent::Moved { .. } => {}
            TickEvent::Eliminated { snake, cause, .. } => {
                tracing::debug!("[tick {}] snake {} eliminated ({:?})", tick, snake, cause)
            }
            other => tracing::trace!("[tick {}] {:?}", tick, other),
        }
    }
}

/// Control and read side of a running scheduler
pub struct SchedulerHandle {
    snapshots: watch::Receiver<GameState>,
    stop: watch::Sender<bool>,
    task: JoinHandle<GameState>,
}

impl SchedulerHandle {
    /// Most recently published state
    pub fn latest(&self) -> GameState {
        self.snapshots.borrow().clone()
    }

    /// Independent receiver for render loops
    pub fn subscribe(&self) -> watch::Receiver<GameState> {
        self.snapshots.clone()
    }

    /// Ask the task to finish after the tick in progress
    pub fn stop(&self) {
        let _ = self.stop.send(true);
    }

    /// Wait for the task to end and return the final state
    pub async fn join(self) -> Result<GameState> {
        Ok(self.task.await?)
    }
}
