use std::time::Duration;

use bevy::prelude::*;
use constants::render_settings::{LOADING_MAX_STEP_PERCENT, LOADING_SEED, LOADING_TICK_SECS};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::rpc::web_rpc::WebRpcInterface;

#[derive(Resource)]
pub struct LoadingProgress {
    percent: f32,
    tick: Timer,
    rng: SmallRng,
    pub settings_applied: bool,
}

impl Default for LoadingProgress {
    fn default() -> Self {
        Self {
            percent: 0.0,
            tick: Timer::from_seconds(LOADING_TICK_SECS, TimerMode::Repeating),
            rng: SmallRng::seed_from_u64(LOADING_SEED),
            settings_applied: false,
        }
    }
}

impl LoadingProgress {
    pub fn percent(&self) -> f32 {
        self.percent
    }

    pub fn is_complete(&self) -> bool {
        self.percent >= 100.0
    }

    /// Bar is full and the settings are in place.
    pub fn is_ready(&self) -> bool {
        self.is_complete() && self.settings_applied
    }

    /// Add one random step per elapsed tick, clamped at 100. Returns whether
    /// any tick fired.
    pub fn advance(&mut self, delta: Duration) -> bool {
        if self.is_complete() {
            return false;
        }

        self.tick.tick(delta);
        let ticks = self.tick.times_finished_this_tick();
        for _ in 0..ticks {
            let step = self.rng.random_range(0.0..LOADING_MAX_STEP_PERCENT);
            self.percent = (self.percent + step).min(100.0);
        }
        ticks > 0
    }
}

pub fn loading_progress_system(
    time: Res<Time>,
    mut progress: ResMut<LoadingProgress>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    if !progress.advance(time.delta()) {
        return;
    }

    rpc_interface.send_notification(
        "loading_progress",
        serde_json::json!({ "percent": progress.percent() }),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    const TICK: Duration = Duration::from_millis(100);

    #[test]
    fn nothing_happens_before_first_tick() {
        let mut progress = LoadingProgress::default();
        assert!(!progress.advance(Duration::from_millis(50)));
        assert_eq!(progress.percent(), 0.0);
    }

    #[test]
    fn each_tick_adds_less_than_max_step() {
        let mut progress = LoadingProgress::default();
        let mut previous = 0.0;
        for _ in 0..5 {
            progress.advance(TICK);
            let step = progress.percent() - previous;
            assert!((0.0..LOADING_MAX_STEP_PERCENT).contains(&step));
            previous = progress.percent();
        }
    }

    #[test]
    fn progress_caps_at_one_hundred() {
        let mut progress = LoadingProgress::default();
        for _ in 0..1000 {
            progress.advance(TICK);
            assert!(progress.percent() <= 100.0);
        }
        assert!(progress.is_complete());
        assert!(!progress.advance(TICK));
    }

    #[test]
    fn ready_needs_settings_too() {
        let mut progress = LoadingProgress::default();
        progress.percent = 100.0;
        assert!(!progress.is_ready());
        progress.settings_applied = true;
        assert!(progress.is_ready());
    }
}
