//! Rendering layer — all terminal I/O lives here.
//!
//! Each function receives a mutable writer and an immutable view of the
//! controller. No game logic is performed; this module only translates
//! world-space state into terminal cells through the viewport.

pub mod starfield;

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use space_battle::compute::GameController;
use space_battle::entities::{Body, Rect};
use space_battle::settings::Rgb;
use space_battle::viewport::Viewport;

use starfield::Starfield;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_ROCKET: Color = Color::White;
const C_SPACESHIP: Color = Color::Green;
const C_HUD_ROCKETS: Color = Color::Red;
const C_HINT: Color = Color::DarkGrey;
const C_GAME_OVER: Color = Color::Red;

fn rgb((r, g, b): Rgb) -> Color {
    Color::Rgb { r, g, b }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(
    out: &mut W,
    game: &GameController,
    viewport: &Viewport,
    stars: &Starfield,
) -> std::io::Result<()> {
    let bg = rgb(game.settings().bg_color);
    out.queue(style::SetBackgroundColor(bg))?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_stars(out, stars)?;

    draw_rocket(out, game, viewport)?;
    for bullet in &game.bullets {
        draw_bullet(out, &bullet.rect(), game, viewport)?;
    }
    for spaceship in &game.spaceships {
        draw_spaceship(out, &spaceship.rect(), viewport)?;
    }

    draw_hud(out, game, viewport)?;
    draw_controls_hint(out, viewport)?;

    if !game.is_active() {
        if game.stats().rockets_left == 0 {
            draw_game_over(out, game, viewport)?;
        }
        draw_play_button(out, game, viewport)?;
    }

    out.queue(style::ResetColor)?;
    park_cursor(out, game, viewport)?;
    out.flush()?;
    Ok(())
}

// ── Backdrop ──────────────────────────────────────────────────────────────────

fn draw_stars<W: Write>(out: &mut W, stars: &Starfield) -> std::io::Result<()> {
    for star in &stars.stars {
        let grey = star.brightness;
        out.queue(cursor::MoveTo(star.col, star.row))?;
        out.queue(style::SetForegroundColor(rgb((grey, grey, grey))))?;
        out.queue(Print(star.glyph))?;
    }
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

/// Centre `pattern` in `width` cells, padding both sides with `fill`.
fn fit(pattern: &str, width: u16, fill: char) -> String {
    let width = width as usize;
    let chars: Vec<char> = pattern.chars().collect();
    if chars.len() >= width {
        let skip = (chars.len() - width) / 2;
        return chars[skip..skip + width].iter().collect();
    }
    let left = (width - chars.len()) / 2;
    let right = width - chars.len() - left;
    let mut line = String::with_capacity(width);
    line.extend(std::iter::repeat(fill).take(left));
    line.extend(chars);
    line.extend(std::iter::repeat(fill).take(right));
    line
}

fn draw_rocket<W: Write>(
    out: &mut W,
    game: &GameController,
    viewport: &Viewport,
) -> std::io::Result<()> {
    // Sprite, scaled to the rocket's cell footprint:
    //   ▲      ← nose row
    //  /█\     ← every row below
    let (col, row, width, height) = viewport.cells_for(&game.rocket.rect());
    out.queue(style::SetForegroundColor(C_ROCKET))?;
    for dy in 0..height {
        let line = if dy == 0 && height > 1 {
            fit("▲", width, ' ')
        } else {
            fit("/█\\", width, '█')
        };
        out.queue(cursor::MoveTo(col, row + dy))?;
        out.queue(Print(line))?;
    }
    Ok(())
}

fn draw_bullet<W: Write>(
    out: &mut W,
    rect: &Rect,
    game: &GameController,
    viewport: &Viewport,
) -> std::io::Result<()> {
    // Bullets that have left the top are still alive until fully off screen.
    if rect.bottom() <= 0.0 {
        return Ok(());
    }
    let (col, row) = viewport.to_cell(rect.center_x(), rect.top().max(0.0));
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(rgb(game.settings().bullet_color)))?;
    out.queue(Print("║"))?;
    Ok(())
}

fn draw_spaceship<W: Write>(out: &mut W, rect: &Rect, viewport: &Viewport) -> std::io::Result<()> {
    //   «▼»    ← swept-back wings
    //   ╚═╝    ← engine block (when there is room)
    let (col, row, width, height) = viewport.cells_for(rect);
    out.queue(style::SetForegroundColor(C_SPACESHIP))?;
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(Print(fit("«▼»", width, '═')))?;
    for dy in 1..height {
        out.queue(cursor::MoveTo(col, row + dy))?;
        out.queue(Print(fit("╚═╝", width, ' ')))?;
    }
    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(
    out: &mut W,
    game: &GameController,
    viewport: &Viewport,
) -> std::io::Result<()> {
    let board = game.scoreboard();
    let text = rgb(board.text_color);

    // Remaining rockets — left
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_ROCKETS))?;
    out.queue(Print("▲".repeat(board.rockets as usize)))?;

    // High score — centre
    let high = format!("Hi {}", board.high_score);
    let hx = (viewport.cols / 2).saturating_sub(high.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(hx, 0))?;
    out.queue(style::SetForegroundColor(text))?;
    out.queue(Print(&high))?;

    // Score and level — right
    let right = format!("{}  L{}", board.score, board.level);
    let rx = viewport
        .cols
        .saturating_sub(right.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(rx, 0))?;
    out.queue(Print(&right))?;

    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, viewport: &Viewport) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, viewport.rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(
        "←↑→↓ / WASD : Move   SPACE : Shoot   ENTER / click Start : Play   Q : Quit",
    ))?;
    Ok(())
}

// ── Start screen ──────────────────────────────────────────────────────────────

fn draw_play_button<W: Write>(
    out: &mut W,
    game: &GameController,
    viewport: &Viewport,
) -> std::io::Result<()> {
    let button = game.play_button();
    let (col, row, width, height) = viewport.cells_for(&button.rect);
    let width = width.max(button.label.chars().count() as u16 + 2);
    let label_row = row + height / 2;

    out.queue(style::SetBackgroundColor(rgb(button.button_color)))?;
    out.queue(style::SetForegroundColor(rgb(button.text_color)))?;
    for dy in 0..height {
        let line = if row + dy == label_row {
            fit(&button.label, width, ' ')
        } else {
            " ".repeat(width as usize)
        };
        out.queue(cursor::MoveTo(col, row + dy))?;
        out.queue(Print(line))?;
    }
    out.queue(style::SetBackgroundColor(rgb(game.settings().bg_color)))?;
    Ok(())
}

fn draw_game_over<W: Write>(
    out: &mut W,
    game: &GameController,
    viewport: &Viewport,
) -> std::io::Result<()> {
    let lines = [
        "╔════════════════════╗",
        "║    GAME  OVER      ║",
        "╚════════════════════╝",
    ];
    let (_, button_row, _, _) = viewport.cells_for(&game.play_button().rect);
    let start_row = button_row.saturating_sub(lines.len() as u16 + 1).max(1);
    let cx = viewport.cols / 2;

    out.queue(style::SetForegroundColor(C_GAME_OVER))?;
    for (i, msg) in lines.iter().enumerate() {
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, start_row + i as u16))?;
        out.queue(Print(*msg))?;
    }
    Ok(())
}

/// While the start screen is up the cursor sits on the button; during
/// play it is hidden and parked in a harmless spot.
fn park_cursor<W: Write>(
    out: &mut W,
    game: &GameController,
    viewport: &Viewport,
) -> std::io::Result<()> {
    if game.is_active() {
        out.queue(cursor::MoveTo(0, viewport.rows.saturating_sub(1)))?;
    } else {
        let rect = game.play_button().rect;
        let (col, row) = viewport.to_cell(rect.center_x(), rect.top() + rect.height / 2.0);
        out.queue(cursor::MoveTo(col, row))?;
    }
    Ok(())
}
