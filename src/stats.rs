//! Session statistics.

use crate::settings::Settings;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameStats {
    pub score: u32,
    /// Best score seen by this process. Never reset.
    pub high_score: u32,
    pub level: u32,
    pub rockets_left: u32,
    pub game_active: bool,
}

impl GameStats {
    /// Fresh stats: inactive, waiting on the start screen.
    pub fn new(settings: &Settings) -> Self {
        let mut stats = GameStats {
            score: 0,
            high_score: 0,
            level: 1,
            rockets_left: 0,
            game_active: false,
        };
        stats.reset_stats(settings);
        stats
    }

    /// Reset everything a new game starts from. Leaves `high_score` and
    /// `game_active` alone.
    pub fn reset_stats(&mut self, settings: &Settings) {
        self.rockets_left = settings.rocket_limit;
        self.score = 0;
        self.level = 1;
    }

    /// Raise the high score to the current score if it was beaten.
    /// Returns true when the high score changed.
    pub fn check_high_score(&mut self) -> bool {
        if self.score > self.high_score {
            self.high_score = self.score;
            true
        } else {
            false
        }
    }
}
