//! Scoreboard text and the start button.
//!
//! Both only derive display state; nothing here draws.

use crate::entities::Rect;
use crate::settings::{Rgb, Settings};
use crate::stats::GameStats;

// ── Scoreboard ────────────────────────────────────────────────────────────────

/// Pre-formatted HUD strings, refreshed by the controller whenever the
/// stats behind them change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scoreboard {
    pub score: String,
    pub high_score: String,
    pub level: String,
    /// Number of rocket icons to show.
    pub rockets: u32,
    pub text_color: Rgb,
}

impl Scoreboard {
    pub fn new(stats: &GameStats) -> Self {
        let mut scoreboard = Scoreboard {
            score: String::new(),
            high_score: String::new(),
            level: String::new(),
            rockets: 0,
            text_color: (255, 255, 255),
        };
        scoreboard.set_score(stats);
        scoreboard.set_high_score(stats);
        scoreboard.set_level(stats);
        scoreboard.set_rockets(stats);
        scoreboard
    }

    pub fn set_score(&mut self, stats: &GameStats) {
        self.score = format_score(stats.score);
    }

    pub fn set_high_score(&mut self, stats: &GameStats) {
        self.high_score = format_score(stats.high_score);
    }

    pub fn set_level(&mut self, stats: &GameStats) {
        self.level = stats.level.to_string();
    }

    pub fn set_rockets(&mut self, stats: &GameStats) {
        self.rockets = stats.rockets_left;
    }
}

/// Round to the nearest ten (ties to the even ten) and group thousands.
pub fn format_score(score: u32) -> String {
    group_thousands(round_to_tens(score))
}

/// Nearest multiple of ten; an exact half goes to the even multiple,
/// so 25 → 20 and 35 → 40.
pub fn round_to_tens(value: u32) -> u64 {
    let value = value as u64;
    let tens = value / 10;
    let rest = value % 10;
    let rounded = match rest {
        0..=4 => tens,
        5 if tens % 2 == 0 => tens,
        _ => tens + 1,
    };
    rounded * 10
}

pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

// ── Start button ──────────────────────────────────────────────────────────────

const BUTTON_WIDTH: f64 = 200.0;
const BUTTON_HEIGHT: f64 = 50.0;

#[derive(Clone, Debug, PartialEq)]
pub struct PlayButton {
    pub rect: Rect,
    pub label: String,
    pub button_color: Rgb,
    pub text_color: Rgb,
}

impl PlayButton {
    /// A button centred on the screen.
    pub fn new(settings: &Settings, label: &str) -> Self {
        let x = settings.screen_width / 2.0 - BUTTON_WIDTH / 2.0;
        let y = settings.screen_height / 2.0 - BUTTON_HEIGHT / 2.0;
        PlayButton {
            rect: Rect::new(x, y, BUTTON_WIDTH, BUTTON_HEIGHT),
            label: label.to_string(),
            button_color: (0, 135, 0),
            text_color: (255, 255, 255),
        }
    }

    pub fn hit(&self, x: f64, y: f64) -> bool {
        self.rect.contains_point(x, y)
    }
}
