use space_battle::settings::Settings;
use space_battle::stats::GameStats;
use space_battle::ui::*;

// ── Score formatting ──────────────────────────────────────────────────────────

#[test]
fn round_to_nearest_ten() {
    assert_eq!(round_to_tens(0), 0);
    assert_eq!(round_to_tens(24), 20);
    assert_eq!(round_to_tens(26), 30);
    assert_eq!(round_to_tens(50), 50);
}

#[test]
fn round_half_goes_to_even_ten() {
    assert_eq!(round_to_tens(25), 20);
    assert_eq!(round_to_tens(35), 40);
    assert_eq!(round_to_tens(75), 80);
    assert_eq!(round_to_tens(125), 120);
}

#[test]
fn thousands_are_grouped() {
    assert_eq!(group_thousands(0), "0");
    assert_eq!(group_thousands(999), "999");
    assert_eq!(group_thousands(1000), "1,000");
    assert_eq!(group_thousands(1_234_567), "1,234,567");
}

#[test]
fn format_score_rounds_then_groups() {
    assert_eq!(format_score(12_345), "12,340");
    assert_eq!(format_score(987_656), "987,660");
    assert_eq!(format_score(u32::MAX), "4,294,967,300");
}

// ── Scoreboard ────────────────────────────────────────────────────────────────

#[test]
fn scoreboard_reflects_stats() {
    let settings = Settings::default();
    let mut stats = GameStats::new(&settings);
    let mut board = Scoreboard::new(&stats);
    assert_eq!(board.score, "0");
    assert_eq!(board.high_score, "0");
    assert_eq!(board.level, "1");
    assert_eq!(board.rockets, 3);

    stats.score = 1_875;
    stats.level = 3;
    stats.rockets_left = 1;
    board.set_score(&stats);
    board.set_level(&stats);
    board.set_rockets(&stats);
    assert_eq!(board.score, "1,880");
    assert_eq!(board.level, "3");
    assert_eq!(board.rockets, 1);
    // Not refreshed yet
    assert_eq!(board.high_score, "0");
}

// ── Play button ───────────────────────────────────────────────────────────────

#[test]
fn button_is_centred() {
    let button = PlayButton::new(&Settings::default(), "Start");
    assert_eq!(button.rect.x, 500.0);
    assert_eq!(button.rect.y, 375.0);
    assert_eq!(button.rect.width, 200.0);
    assert_eq!(button.rect.height, 50.0);
    assert_eq!(button.label, "Start");
}

#[test]
fn button_hit_test() {
    let button = PlayButton::new(&Settings::default(), "Start");
    assert!(button.hit(600.0, 400.0));
    assert!(button.hit(500.0, 375.0));
    assert!(!button.hit(700.0, 400.0));
    assert!(!button.hit(600.0, 425.0));
    assert!(!button.hit(0.0, 0.0));
}
