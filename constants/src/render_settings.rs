/// Radians of target rotation per pixel of pointer travel.
pub const DRAG_SENSITIVITY: f32 = 0.01;

/// Fraction of the remaining rotation closed each frame.
pub const ROTATION_EASING: f32 = 0.05;

/// Target Y rotation added per frame while auto-rotating.
pub const AUTO_ROTATE_STEP: f32 = 0.005;

pub const PARTICLE_COUNT: usize = 100;
pub const PARTICLE_SPREAD: f32 = 100.0;
pub const PARTICLE_MAX_HEIGHT: f32 = 50.0;
pub const PARTICLE_DRIFT_AMPLITUDE: f32 = 0.01;
pub const PARTICLE_SPIN_STEP: f32 = 0.001;
pub const PARTICLE_COLOR: [f32; 3] = [1.0, 0.843, 0.216];
pub const PARTICLE_OPACITY: f32 = 0.6;
pub const PARTICLE_SEED: u64 = 0x5eed_b11a;

/// Loading screen pacing, seconds unless noted.
pub const LOADING_TICK_SECS: f32 = 0.1;
pub const LOADING_MAX_STEP_PERCENT: f32 = 15.0;
pub const LOADING_HOLD_SECS: f32 = 0.5;
pub const LOADING_FADE_SECS: f32 = 0.8;
pub const LOADING_SEED: u64 = 0x10ad_0001;

pub const PANEL_FADE_IN_SECS: f32 = 0.6;
pub const PANEL_FADE_IN_STAGGER_SECS: f32 = 0.1;
pub const PANEL_SLIDE_PX: f32 = 20.0;

pub const BUTTON_HOVER_SCALE: f32 = 1.05;
pub const BUTTON_HOVER_SECS: f32 = 0.2;

/// How often FPS is pushed to the host page.
pub const FPS_NOTIFY_INTERVAL_SECS: f32 = 0.5;
