//! Game entities: the rocket, its bullets and the enemy spaceships.
//!
//! Each entity is a moving rectangle in world coordinates (y grows
//! downward). Entities never hold on to the settings; the controller passes
//! a read-only `&Settings` into every update.

use crate::settings::Settings;

// ── Geometry ──────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Rect { x, y, width, height }
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    /// Strict overlap: rectangles that only share an edge do not collide.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Half-open containment: the right and bottom edges are outside.
    pub fn contains_point(&self, px: f64, py: f64) -> bool {
        px >= self.left() && px < self.right() && py >= self.top() && py < self.bottom()
    }
}

/// Anything the controller positions, collides and the display draws.
pub trait Body {
    fn rect(&self) -> Rect;
}

// ── Rocket ────────────────────────────────────────────────────────────────────

/// Movement intent, one flag per direction. Set by key-down, cleared by key-up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Movement {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

#[derive(Clone, Debug)]
pub struct Rocket {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub movement: Movement,
}

impl Rocket {
    /// A rocket parked at the bottom centre of the screen.
    pub fn new(settings: &Settings) -> Self {
        let mut rocket = Rocket {
            x: 0.0,
            y: 0.0,
            width: settings.rocket_width,
            height: settings.rocket_height,
            movement: Movement::default(),
        };
        rocket.center(settings);
        rocket
    }

    /// Apply every set movement flag. Each axis is clamped on its own, so
    /// pushing against one wall never blocks travel along the other axis.
    pub fn update(&mut self, settings: &Settings) {
        let speed = settings.rocket_speed;
        let max_x = settings.screen_width - self.width;
        let max_y = settings.screen_height - self.height;

        if self.movement.right && self.x < max_x {
            self.x = (self.x + speed).min(max_x);
        }
        if self.movement.left && self.x > 0.0 {
            self.x = (self.x - speed).max(0.0);
        }
        // The rocket stays in the lower band of the screen.
        if self.movement.up && self.y > settings.rocket_top_limit {
            self.y = (self.y - speed).max(settings.rocket_top_limit);
        }
        if self.movement.down && self.y < max_y {
            self.y = (self.y + speed).min(max_y);
        }
    }

    /// Move to the bottom-centre anchor.
    pub fn center(&mut self, settings: &Settings) {
        self.x = settings.screen_width / 2.0 - self.width / 2.0;
        self.y = settings.screen_height - self.height;
    }
}

impl Body for Rocket {
    fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

// ── Bullets ───────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Bullet {
    /// Fixed at creation.
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Pixels travelled upward per tick.
    pub speed: f64,
}

impl Bullet {
    /// A bullet leaving the rocket's nose at the current bullet speed.
    pub fn new(settings: &Settings, rocket: &Rocket) -> Self {
        Bullet {
            x: rocket.rect().center_x() - settings.bullet_width / 2.0,
            y: rocket.y,
            width: settings.bullet_width,
            height: settings.bullet_height,
            speed: settings.bullet_speed,
        }
    }

    pub fn update(&mut self) {
        self.y -= self.speed;
    }

    pub fn is_off_screen(&self) -> bool {
        self.rect().bottom() <= 0.0
    }
}

impl Body for Bullet {
    fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

// ── Spaceships ────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Spaceship {
    pub x: f64,
    /// Only changes when the whole fleet drops.
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Spaceship {
    pub fn new(settings: &Settings, x: f64, y: f64) -> Self {
        Spaceship {
            x,
            y,
            width: settings.spaceship_width,
            height: settings.spaceship_height,
        }
    }

    /// Slide sideways in the fleet's current direction.
    pub fn update(&mut self, settings: &Settings) {
        self.x += settings.spaceship_speed * settings.fleet_direction.sign();
    }

    pub fn at_edge(&self, settings: &Settings) -> bool {
        let rect = self.rect();
        rect.right() >= settings.screen_width || rect.left() <= 0.0
    }

    pub fn drop_by(&mut self, amount: f64) {
        self.y += amount;
    }
}

impl Body for Spaceship {
    fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}
