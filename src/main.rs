mod display;

use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, KeyboardEnhancementFlags, MouseButton, MouseEvent, MouseEventKind,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use log::{error, info};
use rand::thread_rng;

use space_battle::compute::{GameController, Response, TickOutcome};
use space_battle::config::Config;
use space_battle::input::{InputEvent, Key, KeyHold, HOLD_WINDOW};
use space_battle::viewport::Viewport;

use display::starfield::Starfield;

/// How long the game freezes after the rocket is hit.
const RESPAWN_PAUSE: Duration = Duration::from_millis(500);

// ── Key mapping ───────────────────────────────────────────────────────────────

fn map_key(code: KeyCode, modifiers: KeyModifiers) -> Option<Key> {
    match code {
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Some(Key::Quit),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Key::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Key::Right),
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Key::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Key::Down),
        KeyCode::Char(' ') => Some(Key::Fire),
        KeyCode::Enter | KeyCode::Char('p') | KeyCode::Char('P') => Some(Key::Start),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Key::Quit),
        _ => None,
    }
}

/// Translate one terminal event into at most one game input event.
fn translate(
    event: Event,
    hold: &mut KeyHold,
    viewport: &Viewport,
    now: Instant,
) -> Option<InputEvent> {
    match event {
        Event::Key(KeyEvent { code, modifiers, kind, .. }) => {
            let key = map_key(code, modifiers)?;
            match kind {
                KeyEventKind::Press => hold.press(key, now),
                KeyEventKind::Repeat => {
                    hold.repeat(key, now);
                    None
                }
                KeyEventKind::Release => hold.release(key),
            }
        }
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            ..
        }) => {
            let (x, y) = viewport.to_world(column, row);
            Some(InputEvent::Click { x, y })
        }
        _ => None,
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until the player quits.
///
/// Each frame strictly drains input, then advances the simulation one tick,
/// then renders. A hit that costs a life freezes everything for
/// `RESPAWN_PAUSE` before the frame is drawn.
fn game_loop<W: Write>(
    out: &mut W,
    config: &Config,
    rx: &mpsc::Receiver<Event>,
    keyboard_enhanced: bool,
) -> Result<()> {
    let mut game = GameController::new(config.settings());
    let mut rng = thread_rng();

    let (cols, rows) = terminal::size().context("failed to read terminal size")?;
    let mut viewport = Viewport::new(cols, rows, config.width, config.height);
    let mut stars = Starfield::generate(&mut rng, cols, viewport.play_top(), viewport.play_rows());

    // Terminals that report releases never need synthesized key-ups.
    let mut hold = KeyHold::new(if keyboard_enhanced { None } else { Some(HOLD_WINDOW) });
    let frame = config.frame();

    info!("Entering game loop at {} fps on a {}x{} terminal", config.fps, cols, rows);

    loop {
        let frame_start = Instant::now();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        let mut inputs = Vec::new();
        loop {
            match rx.try_recv() {
                Ok(Event::Resize(cols, rows)) => {
                    viewport = Viewport::new(cols, rows, config.width, config.height);
                    stars = Starfield::generate(
                        &mut rng,
                        cols,
                        viewport.play_top(),
                        viewport.play_rows(),
                    );
                    info!("Terminal resized to {}x{}", cols, rows);
                }
                Ok(ev) => inputs.extend(translate(ev, &mut hold, &viewport, frame_start)),
                Err(mpsc::TryRecvError::Empty) => break,
                // Input thread gone: the terminal closed.
                Err(mpsc::TryRecvError::Disconnected) => inputs.push(InputEvent::Quit),
            }
            if inputs.last() == Some(&InputEvent::Quit) {
                break;
            }
        }
        inputs.extend(hold.expire(frame_start));

        for input in inputs {
            match game.handle_event(input) {
                Response::Quit => {
                    info!("Quit requested");
                    return Ok(());
                }
                Response::Started => {
                    out.execute(cursor::Hide)?;
                }
                Response::Continue => {}
            }
        }

        // ── Advance the simulation ────────────────────────────────────────────
        match game.update() {
            TickOutcome::Respawned { .. } => thread::sleep(RESPAWN_PAUSE),
            TickOutcome::GameOver { .. } => {
                out.execute(cursor::Show)?;
            }
            TickOutcome::Idle | TickOutcome::Advanced | TickOutcome::LevelCleared { .. } => {}
        }

        display::render(out, &game, &viewport, &stars).map_err(|e| {
            error!("Failed to render frame: {}", e);
            e
        })?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame {
            thread::sleep(frame - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let config = Config::parse();

    simple_logging::log_to_file(&config.log_file, config.log_level)
        .with_context(|| format!("failed to open log file {}", config.log_file.display()))?;
    info!("Starting Space Battle with {:?}", config);
    config.validate()?;

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode().context("failed to enable raw mode")?;

    let result = run(&mut out, &config);
    if let Err(e) = &result {
        error!("Game failed: {:#}", e);
    }

    // Always restore the terminal. Popping flags that were never pushed is
    // ignored by the terminal.
    let _ = out.execute(PopKeyboardEnhancementFlags);
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    info!("Space Battle exited");
    result
}

fn run<W: Write>(out: &mut W, config: &Config) -> Result<()> {
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(EnableMouseCapture)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back to hold expiry.
    let keyboard_enhanced = terminal::supports_keyboard_enhancement().unwrap_or(false)
        && out
            .execute(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ))
            .is_ok();
    info!("Keyboard enhancement: {}", keyboard_enhanced);

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(e) => {
                error!("Failed to read terminal event: {}", e);
                break;
            }
        }
    });

    game_loop(out, config, &rx, keyboard_enhanced)
}
