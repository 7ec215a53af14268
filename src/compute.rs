//! The game controller: owns every entity and advances the simulation.
//!
//! The controller never sleeps and never touches a terminal. Operations
//! return a [`Response`] or [`TickOutcome`] and the caller performs the side
//! effects (cursor visibility, the respawn pause, quitting).

use log::{debug, info};

use crate::entities::{Body, Bullet, Rocket, Spaceship};
use crate::input::{InputEvent, Key};
use crate::settings::Settings;
use crate::stats::GameStats;
use crate::ui::{PlayButton, Scoreboard};

/// Result of feeding one input event to the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Response {
    Continue,
    /// A new game began; hide the pointer cursor.
    Started,
    Quit,
}

/// Result of one simulation tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not playing; nothing moved.
    Idle,
    Advanced,
    /// The fleet was wiped out and a faster one replaced it.
    LevelCleared { level: u32 },
    /// The rocket was hit and respawned; the caller pauses briefly.
    Respawned { lives_left: u32 },
    /// The last rocket was lost; the caller restores the pointer cursor.
    GameOver { score: u32 },
}

/// Top-left corners of a freshly populated fleet.
///
/// Ships are spaced one ship-width apart with a one-ship margin on either
/// side. Rows start three and a half ship-heights down and stop well above
/// the rocket. The layout depends only on the settings.
pub fn fleet_layout(settings: &Settings) -> Vec<(f64, f64)> {
    let ship_w = settings.spaceship_width;
    let ship_h = settings.spaceship_height;

    let available_x = settings.screen_width - 2.0 * ship_w;
    let columns = (available_x / (2.0 * ship_w)).floor().max(0.0) as usize;

    let available_y = settings.screen_height - 18.0 * ship_h - settings.rocket_height;
    let rows = (available_y / (2.0 * ship_h)).floor().max(0.0) as usize;

    let mut layout = Vec::with_capacity(rows * columns);
    for row in 0..rows {
        for column in 0..columns {
            let x = ship_w + 2.0 * ship_w * column as f64;
            let y = 3.5 * ship_h + 2.0 * ship_h * row as f64;
            layout.push((x, y));
        }
    }
    layout
}

pub struct GameController {
    settings: Settings,
    stats: GameStats,
    scoreboard: Scoreboard,
    play_button: PlayButton,
    pub rocket: Rocket,
    pub bullets: Vec<Bullet>,
    pub spaceships: Vec<Spaceship>,
}

impl GameController {
    /// An inactive game showing a full fleet behind the start button.
    pub fn new(settings: Settings) -> Self {
        let stats = GameStats::new(&settings);
        let scoreboard = Scoreboard::new(&stats);
        let play_button = PlayButton::new(&settings, "Start");
        let rocket = Rocket::new(&settings);
        let mut controller = GameController {
            settings,
            stats,
            scoreboard,
            play_button,
            rocket,
            bullets: Vec::new(),
            spaceships: Vec::new(),
        };
        controller.create_fleet();
        controller
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    pub fn play_button(&self) -> &PlayButton {
        &self.play_button
    }

    pub fn is_active(&self) -> bool {
        self.stats.game_active
    }

    // ── Input ─────────────────────────────────────────────────────────────────

    pub fn handle_event(&mut self, event: InputEvent) -> Response {
        match event {
            InputEvent::Quit | InputEvent::KeyDown(Key::Quit) => Response::Quit,
            InputEvent::KeyDown(key) => self.key_down(key),
            InputEvent::KeyUp(key) => {
                self.set_movement(key, false);
                Response::Continue
            }
            InputEvent::Click { x, y } => {
                if self.press_play_button(x, y) {
                    Response::Started
                } else {
                    Response::Continue
                }
            }
        }
    }

    fn key_down(&mut self, key: Key) -> Response {
        match key {
            Key::Fire => {
                self.fire_bullet();
                Response::Continue
            }
            Key::Start => {
                if self.start_game() {
                    Response::Started
                } else {
                    Response::Continue
                }
            }
            Key::Quit => Response::Quit,
            movement => {
                self.set_movement(movement, true);
                Response::Continue
            }
        }
    }

    fn set_movement(&mut self, key: Key, on: bool) {
        let movement = &mut self.rocket.movement;
        match key {
            Key::Left => movement.left = on,
            Key::Right => movement.right = on,
            Key::Up => movement.up = on,
            Key::Down => movement.down = on,
            Key::Fire | Key::Start | Key::Quit => {}
        }
    }

    /// Start a new game if the click lands on the button while inactive.
    pub fn press_play_button(&mut self, x: f64, y: f64) -> bool {
        self.play_button.hit(x, y) && self.start_game()
    }

    /// Inactive → active. Returns false (and does nothing) mid-game.
    pub fn start_game(&mut self) -> bool {
        if self.stats.game_active {
            return false;
        }

        self.settings.reset_dynamic();

        self.stats.reset_stats(&self.settings);
        self.stats.game_active = true;
        self.scoreboard.set_score(&self.stats);
        self.scoreboard.set_level(&self.stats);
        self.scoreboard.set_rockets(&self.stats);

        self.spaceships.clear();
        self.bullets.clear();
        self.create_fleet();
        self.rocket.center(&self.settings);

        info!(
            "New game started with {} rockets and {} spaceships",
            self.stats.rockets_left,
            self.spaceships.len()
        );
        true
    }

    /// Fire from the rocket's nose unless the bullet cap is reached.
    pub fn fire_bullet(&mut self) -> bool {
        if !self.stats.game_active || self.bullets.len() >= self.settings.bullets_allowed {
            return false;
        }
        self.bullets.push(Bullet::new(&self.settings, &self.rocket));
        true
    }

    // ── Per-tick update ───────────────────────────────────────────────────────

    /// Advance the rocket, the bullets and the fleet by one tick.
    pub fn update(&mut self) -> TickOutcome {
        if !self.stats.game_active {
            return TickOutcome::Idle;
        }

        self.rocket.update(&self.settings);
        let cleared = self.update_bullets();
        let hit = self.update_spaceships();

        match hit {
            Some(outcome) => outcome,
            None if cleared => TickOutcome::LevelCleared {
                level: self.stats.level,
            },
            None => TickOutcome::Advanced,
        }
    }

    /// Returns true when this tick wiped out the fleet.
    fn update_bullets(&mut self) -> bool {
        for bullet in &mut self.bullets {
            bullet.update();
        }
        self.bullets.retain(|bullet| !bullet.is_off_screen());

        let kills = self.check_bullet_spaceship_collisions();
        if kills > 0 {
            self.update_total_score(kills);
        }
        self.increase_difficulty()
    }

    /// Remove every bullet/spaceship pair that overlaps. Each bullet takes
    /// out at most one ship and each ship absorbs at most one bullet.
    /// Removals are applied after the whole scan.
    fn check_bullet_spaceship_collisions(&mut self) -> usize {
        let mut spent = vec![false; self.bullets.len()];
        let mut destroyed = vec![false; self.spaceships.len()];

        for (bi, bullet) in self.bullets.iter().enumerate() {
            let rect = bullet.rect();
            let target = (0..self.spaceships.len())
                .find(|&si| !destroyed[si] && rect.overlaps(&self.spaceships[si].rect()));
            if let Some(si) = target {
                spent[bi] = true;
                destroyed[si] = true;
            }
        }

        let kills = destroyed.iter().filter(|&&d| d).count();
        if kills == 0 {
            return 0;
        }

        self.bullets = std::mem::take(&mut self.bullets)
            .into_iter()
            .enumerate()
            .filter(|(i, _)| !spent[*i])
            .map(|(_, b)| b)
            .collect();
        self.spaceships = std::mem::take(&mut self.spaceships)
            .into_iter()
            .enumerate()
            .filter(|(i, _)| !destroyed[*i])
            .map(|(_, s)| s)
            .collect();

        debug!("{} spaceships destroyed, {} left", kills, self.spaceships.len());
        kills
    }

    fn update_total_score(&mut self, kills: usize) {
        let gained = self.settings.spaceship_points.saturating_mul(kills as u32);
        self.stats.score = self.stats.score.saturating_add(gained);
        self.scoreboard.set_score(&self.stats);
        if self.stats.check_high_score() {
            self.scoreboard.set_high_score(&self.stats);
        }
    }

    /// Once the fleet is gone: new fleet, faster game, next level.
    fn increase_difficulty(&mut self) -> bool {
        if !self.spaceships.is_empty() {
            return false;
        }

        self.bullets.clear();
        self.create_fleet();
        self.settings.increase_speed();

        self.stats.level += 1;
        self.scoreboard.set_level(&self.stats);

        info!(
            "Fleet cleared, level {} (spaceship speed {:.3}, {} points per kill)",
            self.stats.level, self.settings.spaceship_speed, self.settings.spaceship_points
        );
        true
    }

    /// Returns the hit outcome if the rocket was hit this tick.
    fn update_spaceships(&mut self) -> Option<TickOutcome> {
        self.check_fleet_edges();
        for spaceship in &mut self.spaceships {
            spaceship.update(&self.settings);
        }

        let rocket = self.rocket.rect();
        let rocket_collided = self
            .spaceships
            .iter()
            .any(|spaceship| spaceship.rect().overlaps(&rocket));
        let reached_bottom = self
            .spaceships
            .iter()
            .any(|spaceship| spaceship.rect().bottom() >= self.settings.screen_height);

        if rocket_collided || reached_bottom {
            Some(self.rocket_hit())
        } else {
            None
        }
    }

    fn check_fleet_edges(&mut self) {
        if self
            .spaceships
            .iter()
            .any(|spaceship| spaceship.at_edge(&self.settings))
        {
            self.change_fleet_direction();
        }
    }

    fn change_fleet_direction(&mut self) {
        for spaceship in &mut self.spaceships {
            spaceship.drop_by(self.settings.fleet_drop_speed);
        }
        self.settings.fleet_direction = self.settings.fleet_direction.reversed();
    }

    fn rocket_hit(&mut self) -> TickOutcome {
        self.stats.rockets_left = self.stats.rockets_left.saturating_sub(1);
        self.scoreboard.set_rockets(&self.stats);

        self.spaceships.clear();
        self.bullets.clear();

        if self.stats.rockets_left > 0 {
            self.create_fleet();
            self.rocket.center(&self.settings);
            info!("Rocket hit, {} left", self.stats.rockets_left);
            TickOutcome::Respawned {
                lives_left: self.stats.rockets_left,
            }
        } else {
            self.stats.game_active = false;
            info!(
                "Game over with score {} (high score {})",
                self.stats.score, self.stats.high_score
            );
            TickOutcome::GameOver {
                score: self.stats.score,
            }
        }
    }

    fn create_fleet(&mut self) {
        let settings = &self.settings;
        self.spaceships = fleet_layout(settings)
            .into_iter()
            .map(|(x, y)| Spaceship::new(settings, x, y))
            .collect();
    }
}
