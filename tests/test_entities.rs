use space_battle::entities::*;
use space_battle::settings::{FleetDirection, Settings};

fn settings() -> Settings {
    Settings::default()
}

// ── Rect ──────────────────────────────────────────────────────────────────────

#[test]
fn rect_edges() {
    let r = Rect::new(10.0, 20.0, 30.0, 40.0);
    assert_eq!(r.left(), 10.0);
    assert_eq!(r.right(), 40.0);
    assert_eq!(r.top(), 20.0);
    assert_eq!(r.bottom(), 60.0);
    assert_eq!(r.center_x(), 25.0);
}

#[test]
fn rect_overlap_is_strict() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    assert!(a.overlaps(&Rect::new(5.0, 5.0, 10.0, 10.0)));
    // Touching edges only
    assert!(!a.overlaps(&Rect::new(10.0, 0.0, 10.0, 10.0)));
    assert!(!a.overlaps(&Rect::new(0.0, 10.0, 10.0, 10.0)));
    assert!(!a.overlaps(&Rect::new(50.0, 50.0, 1.0, 1.0)));
}

#[test]
fn rect_contains_point_is_half_open() {
    let r = Rect::new(0.0, 0.0, 10.0, 10.0);
    assert!(r.contains_point(0.0, 0.0));
    assert!(r.contains_point(9.9, 9.9));
    assert!(!r.contains_point(10.0, 5.0));
    assert!(!r.contains_point(5.0, 10.0));
}

// ── Rocket ────────────────────────────────────────────────────────────────────

#[test]
fn rocket_starts_bottom_centre() {
    let s = settings();
    let rocket = Rocket::new(&s);
    assert_eq!(rocket.rect().center_x(), 600.0);
    assert_eq!(rocket.rect().bottom(), 800.0);
    assert_eq!(rocket.movement, Movement::default());
}

#[test]
fn rocket_moves_by_current_speed() {
    let mut s = settings();
    let mut rocket = Rocket::new(&s);
    rocket.movement.left = true;
    rocket.update(&s);
    assert!((rocket.x - 575.4).abs() < 1e-9);

    s.increase_speed();
    rocket.update(&s);
    assert!((rocket.x - (575.4 - 0.78)).abs() < 1e-9);
}

#[test]
fn rocket_clamps_at_right_wall() {
    let s = settings();
    let mut rocket = Rocket::new(&s);
    rocket.x = 1151.8;
    rocket.movement.right = true;
    for _ in 0..5 {
        rocket.update(&s);
    }
    assert_eq!(rocket.rect().right(), 1200.0);
}

#[test]
fn rocket_cannot_climb_above_top_limit() {
    let s = settings();
    let mut rocket = Rocket::new(&s);
    rocket.movement.up = true;
    for _ in 0..1000 {
        rocket.update(&s);
    }
    assert_eq!(rocket.y, s.rocket_top_limit);
}

#[test]
fn rocket_axes_clamp_independently() {
    let s = settings();
    let mut rocket = Rocket::new(&s);
    rocket.x = 0.0;
    rocket.movement.left = true;
    rocket.movement.up = true;
    rocket.update(&s);
    assert_eq!(rocket.x, 0.0);
    assert!((rocket.y - 751.4).abs() < 1e-9);
}

#[test]
fn rocket_stays_in_bounds_for_every_flag_combination() {
    let s = settings();
    for mask in 0u8..16 {
        let mut rocket = Rocket::new(&s);
        rocket.movement = Movement {
            up: mask & 1 != 0,
            down: mask & 2 != 0,
            left: mask & 4 != 0,
            right: mask & 8 != 0,
        };
        for _ in 0..3000 {
            rocket.update(&s);
            let r = rocket.rect();
            assert!(r.left() >= 0.0, "mask {mask}: left {}", r.left());
            assert!(r.right() <= s.screen_width, "mask {mask}: right {}", r.right());
            assert!(r.top() >= s.rocket_top_limit, "mask {mask}: top {}", r.top());
            assert!(r.bottom() <= s.screen_height, "mask {mask}: bottom {}", r.bottom());
        }
    }
}

#[test]
fn rocket_center_restores_anchor() {
    let s = settings();
    let mut rocket = Rocket::new(&s);
    rocket.x = 3.0;
    rocket.y = 600.0;
    rocket.center(&s);
    assert_eq!((rocket.x, rocket.y), (576.0, 752.0));
}

// ── Bullet ────────────────────────────────────────────────────────────────────

#[test]
fn bullet_moves_up_by_fixed_speed() {
    let mut s = settings();
    let rocket = Rocket::new(&s);
    let mut bullet = Bullet::new(&s, &rocket);
    // Later speed-ups do not affect bullets already in flight
    s.increase_speed();
    bullet.update();
    assert_eq!(bullet.y, 750.0);
    assert_eq!(bullet.x, 598.5);
}

#[test]
fn bullet_off_screen_when_bottom_at_or_above_zero() {
    let s = settings();
    let mut bullet = Bullet::new(&s, &Rocket::new(&s));
    bullet.y = -14.0;
    assert!(!bullet.is_off_screen());
    bullet.y = -15.0;
    assert!(bullet.is_off_screen());
}

// ── Spaceship ─────────────────────────────────────────────────────────────────

#[test]
fn spaceship_follows_fleet_direction() {
    let mut s = settings();
    let mut ship = Spaceship::new(&s, 100.0, 50.0);
    ship.update(&s);
    assert!((ship.x - 100.1).abs() < 1e-9);

    s.fleet_direction = FleetDirection::Left;
    ship.update(&s);
    ship.update(&s);
    assert!((ship.x - 99.9).abs() < 1e-9);
    assert_eq!(ship.y, 50.0);
}

#[test]
fn spaceship_edge_detection() {
    let s = settings();
    assert!(Spaceship::new(&s, 0.0, 50.0).at_edge(&s));
    assert!(Spaceship::new(&s, 1160.0, 50.0).at_edge(&s));
    assert!(Spaceship::new(&s, 1170.0, 50.0).at_edge(&s));
    assert!(!Spaceship::new(&s, 0.5, 50.0).at_edge(&s));
    assert!(!Spaceship::new(&s, 1159.0, 50.0).at_edge(&s));
}

#[test]
fn spaceship_drop() {
    let s = settings();
    let mut ship = Spaceship::new(&s, 100.0, 50.0);
    ship.drop_by(s.fleet_drop_speed);
    assert_eq!(ship.y, 55.0);
    assert_eq!(ship.x, 100.0);
}
