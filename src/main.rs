mod display;

use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    style::{self, Color, Print},
    terminal, ExecutableCommand, QueueableCommand,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};

use alien_duel::compute::{init_state, next_round, tick};
use alien_duel::config::{Args, GameConfig};
use alien_duel::entities::{FrameInput, GameState, GameStatus, Side};
use alien_duel::input::{Bindings, KeyTracker};
use alien_duel::logging;

use display::Viewport;

// ── Title screen ──────────────────────────────────────────────────────────────

enum MenuResult {
    Start,
    Quit,
}

fn show_title<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>) -> anyhow::Result<MenuResult> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let (width, height) = terminal::size()?;
    let cx = width / 2;
    let cy = height / 2;

    let title = "▲  ALIEN  DUEL  ▼";
    out.queue(cursor::MoveTo(
        cx.saturating_sub(title.chars().count() as u16 / 2),
        cy.saturating_sub(7),
    ))?;
    out.queue(style::SetForegroundColor(Color::Cyan))?;
    out.queue(Print(title))?;

    let controls: &[(&str, Color, &str, &str)] = &[
        ("PLAYER", Color::White, "← →", "SPACE shot  ↓ speed-shot  ↑ spread-shot"),
        ("ALIEN ", Color::Green, "A D", "T bomb      G speed-bomb  B spread-bomb"),
    ];
    for (i, (name, color, moves, fire)) in controls.iter().enumerate() {
        let row = cy.saturating_sub(4) + i as u16;
        out.queue(cursor::MoveTo(cx.saturating_sub(28), row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(format!("{}  ", name)))?;
        out.queue(style::SetForegroundColor(Color::DarkGrey))?;
        out.queue(Print(format!("{} move   {}", moves, fire)))?;
    }

    let notes = [
        "Every ability drains your gauge; it refills one unit every 2 seconds.",
        "Speed-shots unlock at 1 point, spread-shots at 3.",
        "Shoot the item for a point and a permanent speed or damage boost.",
    ];
    for (i, note) in notes.iter().enumerate() {
        out.queue(cursor::MoveTo(cx.saturating_sub(28), cy + i as u16))?;
        out.queue(Print(*note))?;
    }

    let hint = "ENTER : Start   Q : Quit";
    out.queue(cursor::MoveTo(
        cx.saturating_sub(hint.chars().count() as u16 / 2),
        cy + 5,
    ))?;
    out.queue(style::SetForegroundColor(Color::White))?;
    out.queue(Print(hint))?;

    out.queue(style::ResetColor)?;
    out.flush()?;

    // Block until the user makes a choice
    loop {
        match rx.recv() {
            Ok(Event::Key(KeyEvent {
                code,
                kind: KeyEventKind::Press,
                ..
            })) => match code {
                KeyCode::Enter | KeyCode::Char(' ') => return Ok(MenuResult::Start),
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                    return Ok(MenuResult::Quit);
                }
                _ => {}
            },
            Ok(_) => {}
            // Reader thread gone: nothing more will arrive
            Err(_) => return Ok(MenuResult::Quit),
        }
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs rounds until the user quits.
///
/// Each frame drains pending key events into the `KeyTracker`, snapshots
/// both sides' held keys and advances the simulation once. Wall-clock time
/// since the match started drives the gauges.
fn game_loop<W: Write>(
    out: &mut W,
    config: GameConfig,
    rng: &mut StdRng,
    rx: &mpsc::Receiver<Event>,
) -> anyhow::Result<GameState> {
    let started = Instant::now();
    let now_ms = |at: Instant| at.duration_since(started).as_millis() as u64;

    let mut state = init_state(config, 0, rng);
    let mut keys = KeyTracker::new();
    let player_keys = Bindings::for_side(Side::Player);
    let alien_keys = Bindings::for_side(Side::Alien);
    let frame_time = config.frame_duration();
    let mut frame: u64 = 0;

    info!(?config, "match started");

    loop {
        let frame_start = Instant::now();
        frame += 1;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            let Event::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) = ev
            else {
                continue;
            };
            keys.record(code, kind, frame);
            if kind != KeyEventKind::Press {
                continue;
            }
            match code {
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Ok(state),
                KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                    return Ok(state);
                }
                KeyCode::Char('r') | KeyCode::Char('R')
                    if state.status != GameStatus::Playing =>
                {
                    state = next_round(&state, now_ms(frame_start), rng);
                    // Keys held through the round break must not fire on frame one
                    keys.clear();
                    info!(round = state.round, "round started");
                }
                _ => {}
            }
        }

        if state.status == GameStatus::Playing {
            let input = FrameInput {
                player: player_keys.read(&keys, frame),
                alien: alien_keys.read(&keys, frame),
            };
            state = tick(&state, &input, now_ms(frame_start), rng);
        }

        let (width, height) = terminal::size()?;
        display::render(out, &state, Viewport { width, height })?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_time {
            thread::sleep(frame_time - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = args.game_config().context("invalid options")?;
    let log_path = args.log_path();
    logging::init(&log_path)?;

    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed, log = %log_path.display(), "starting alien_duel");
    let mut rng = StdRng::seed_from_u64(seed);

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode().context("cannot enable raw mode")?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Ghostty / kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();
    if !keyboard_enhanced {
        warn!("terminal does not report key releases; using hold window");
    }

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
            Err(err) => {
                warn!(%err, "input reader stopped");
                break;
            }
        }
    });

    let result = run(&mut out, config, &mut rng, &rx);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}

fn run<W: Write>(
    out: &mut W,
    config: GameConfig,
    rng: &mut StdRng,
    rx: &mpsc::Receiver<Event>,
) -> anyhow::Result<()> {
    if let MenuResult::Quit = show_title(out, rx)? {
        return Ok(());
    }
    let last = game_loop(out, config, rng, rx)?;
    info!(
        rounds = last.round,
        player_score = last.scores.player,
        alien_score = last.scores.alien,
        "match ended"
    );
    Ok(())
}
