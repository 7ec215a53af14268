//! Tunable game parameters.
//!
//! Static values (screen size, limits, colours, sprite sizes) never change
//! during a process. Dynamic values (speeds, fleet direction, point value)
//! are reset at the start of every game and scaled up each time a fleet is
//! wiped out.

pub type Rgb = (u8, u8, u8);

// ── Static defaults ──────────────────────────────────────────────────────────

pub const SCREEN_WIDTH: f64 = 1200.0;
pub const SCREEN_HEIGHT: f64 = 800.0;

pub const ROCKET_WIDTH: f64 = 48.0;
pub const ROCKET_HEIGHT: f64 = 48.0;
/// The rocket may not climb above this y coordinate.
pub const ROCKET_TOP_LIMIT: f64 = 500.0;

pub const SPACESHIP_WIDTH: f64 = 40.0;
pub const SPACESHIP_HEIGHT: f64 = 24.0;

// ── Dynamic base values ──────────────────────────────────────────────────────

const BASE_ROCKET_SPEED: f64 = 0.6;
const BASE_BULLET_SPEED: f64 = 2.0;
const BASE_SPACESHIP_SPEED: f64 = 0.1;
const BASE_SPACESHIP_POINTS: u32 = 50;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FleetDirection {
    Right,
    Left,
}

impl FleetDirection {
    pub fn sign(self) -> f64 {
        match self {
            FleetDirection::Right => 1.0,
            FleetDirection::Left => -1.0,
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            FleetDirection::Right => FleetDirection::Left,
            FleetDirection::Left => FleetDirection::Right,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    // Screen
    pub screen_width: f64,
    pub screen_height: f64,
    pub bg_color: Rgb,

    // Rocket
    pub rocket_limit: u32,
    pub rocket_width: f64,
    pub rocket_height: f64,
    pub rocket_top_limit: f64,

    // Bullets
    pub bullet_width: f64,
    pub bullet_height: f64,
    pub bullet_color: Rgb,
    pub bullets_allowed: usize,

    // Fleet
    pub spaceship_width: f64,
    pub spaceship_height: f64,
    pub fleet_drop_speed: f64,

    // Difficulty scaling
    pub speedup_scale: f64,
    pub score_scale: f64,

    // Dynamic
    pub rocket_speed: f64,
    pub bullet_speed: f64,
    pub spaceship_speed: f64,
    pub fleet_direction: FleetDirection,
    pub spaceship_points: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Settings::with_screen(SCREEN_WIDTH, SCREEN_HEIGHT)
    }
}

impl Settings {
    /// Settings for a surface of the given size; everything else at defaults.
    pub fn with_screen(screen_width: f64, screen_height: f64) -> Self {
        let mut settings = Settings {
            screen_width,
            screen_height,
            bg_color: (12, 20, 69),
            rocket_limit: 3,
            rocket_width: ROCKET_WIDTH,
            rocket_height: ROCKET_HEIGHT,
            rocket_top_limit: ROCKET_TOP_LIMIT,
            bullet_width: 3.0,
            bullet_height: 15.0,
            bullet_color: (255, 255, 255),
            bullets_allowed: 3,
            spaceship_width: SPACESHIP_WIDTH,
            spaceship_height: SPACESHIP_HEIGHT,
            fleet_drop_speed: 5.0,
            speedup_scale: 1.3,
            score_scale: 1.5,
            rocket_speed: 0.0,
            bullet_speed: 0.0,
            spaceship_speed: 0.0,
            fleet_direction: FleetDirection::Right,
            spaceship_points: 0,
        };
        settings.reset_dynamic();
        settings
    }

    /// Restore speeds, fleet direction and point value to their base values.
    pub fn reset_dynamic(&mut self) {
        self.rocket_speed = BASE_ROCKET_SPEED;
        self.bullet_speed = BASE_BULLET_SPEED;
        self.spaceship_speed = BASE_SPACESHIP_SPEED;
        self.fleet_direction = FleetDirection::Right;
        self.spaceship_points = BASE_SPACESHIP_POINTS;
    }

    /// Scale all speeds by `speedup_scale` and the point value by
    /// `score_scale` (truncated). Unbounded over a long session.
    pub fn increase_speed(&mut self) {
        self.rocket_speed *= self.speedup_scale;
        self.bullet_speed *= self.speedup_scale;
        self.spaceship_speed *= self.speedup_scale;

        self.spaceship_points = (self.spaceship_points as f64 * self.score_scale) as u32;
    }
}
