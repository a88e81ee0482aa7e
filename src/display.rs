/// Terminal rendering. Every write to the screen happens in this module.
///
/// Each function receives a mutable writer and an immutable view of the
/// game state. No game logic is performed; this module only translates
/// arena coordinates into terminal cells and state into terminal commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use alien_duel::compute::{ability_cost, available_abilities};
use alien_duel::entities::{
    Ability, Actor, Explosion, GameState, GameStatus, Item, ItemKind, Projectile, Side,
};
use alien_duel::geometry::Rect;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_PLAYER: Color = Color::White;
const C_ALIEN: Color = Color::Green;
const C_SHOT: Color = Color::Cyan;
const C_BOMB: Color = Color::Magenta;
const C_ITEM_SPEED: Color = Color::Yellow;
const C_ITEM_DAMAGE: Color = Color::Red;
const C_EXPLOSION: Color = Color::DarkYellow;
const C_GAUGE_FILL: Color = Color::Green;
const C_GAUGE_EMPTY: Color = Color::DarkRed;
const C_HINT: Color = Color::DarkGrey;

const GAUGE_BAR_WIDTH: usize = 10;

/// Terminal size the frame is drawn into.
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    /// Map an arena point onto a cell inside the border
    /// (columns 1..width-1, rows 2..height-2).
    fn cell(&self, arena: &Rect, x: f32, y: f32) -> (u16, u16) {
        let inner_w = self.width.saturating_sub(2).max(1);
        let inner_h = self.height.saturating_sub(4).max(1);
        let col = ((x - arena.left()) / arena.w * f32::from(inner_w)).floor() as i32;
        let row = ((y - arena.top()) / arena.h * f32::from(inner_h)).floor() as i32;
        (
            1 + col.clamp(0, i32::from(inner_w) - 1) as u16,
            2 + row.clamp(0, i32::from(inner_h) - 1) as u16,
        )
    }

    /// Inclusive cell span covered by `rect`.
    fn span(&self, arena: &Rect, rect: &Rect) -> ((u16, u16), (u16, u16)) {
        let top_left = self.cell(arena, rect.left(), rect.top());
        // Nudge inward so a box ending exactly on a cell edge stays out of it.
        let bottom_right = self.cell(arena, rect.right() - 0.01, rect.bottom() - 0.01);
        (top_left, bottom_right)
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, state: &GameState, view: Viewport) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_border(out, view)?;
    draw_hud(out, state, Side::Alien, 0, view)?;
    draw_hud(out, state, Side::Player, view.height.saturating_sub(1), view)?;

    if let Some(item) = &state.item {
        draw_item(out, state, item, view)?;
    }
    draw_actor(out, state, &state.alien, view)?;
    draw_actor(out, state, &state.player, view)?;
    for projectile in &state.projectiles {
        draw_projectile(out, state, projectile, view)?;
    }
    for explosion in &state.explosions {
        draw_explosion(out, state, explosion, view)?;
    }

    if let GameStatus::RoundOver { winner } = state.status {
        draw_round_over(out, state, winner, view)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, view.height.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, view: Viewport) -> std::io::Result<()> {
    let w = view.width as usize;
    let h = view.height;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    // Row 1: top bar
    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    // Row h-2: bottom bar
    out.queue(cursor::MoveTo(0, h.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    // Side walls
    for row in 2..h.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(view.width.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── HUD (row 0 for the Alien, last row for the Player) ────────────────────────

/// Number of filled cells in the gauge bar.
fn gauge_cells(actor: &Actor) -> usize {
    let filled = (actor.gauge.fraction() * GAUGE_BAR_WIDTH as f32).round() as usize;
    filled.min(GAUGE_BAR_WIDTH)
}

fn ability_label(side: Side, ability: Ability) -> &'static str {
    match (side, ability) {
        (Side::Player, Ability::Shot) => "SPC shot",
        (Side::Player, Ability::SpeedShot) => "↓ speed",
        (Side::Player, Ability::SpreadShot) => "↑ spread",
        (Side::Alien, Ability::Shot) => "T bomb",
        (Side::Alien, Ability::SpeedShot) => "G speed",
        (Side::Alien, Ability::SpreadShot) => "B spread",
    }
}

fn draw_hud<W: Write>(
    out: &mut W,
    state: &GameState,
    side: Side,
    row: u16,
    view: Viewport,
) -> std::io::Result<()> {
    let actor = state.actor(side);
    let (name, color) = match side {
        Side::Player => ("PLAYER", C_PLAYER),
        Side::Alien => ("ALIEN ", C_ALIEN),
    };

    // Name and score, left aligned
    out.queue(cursor::MoveTo(1, row))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(format!("{} {:>3}  ", name, state.scores.get(side))))?;

    // Gauge bar
    let filled = gauge_cells(actor);
    out.queue(style::SetForegroundColor(C_GAUGE_FILL))?;
    out.queue(Print("█".repeat(filled)))?;
    out.queue(style::SetForegroundColor(C_GAUGE_EMPTY))?;
    out.queue(Print("░".repeat(GAUGE_BAR_WIDTH - filled)))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(format!(
        " {:>2}/{}  Spd {:>4.1}  Dmg {}  HP {}  ",
        actor.gauge.value, actor.gauge.capacity, actor.speed, actor.damage, actor.health
    )))?;

    // Unlocked abilities; bright when affordable
    for ability in available_abilities(state, side) {
        let affordable = actor.gauge.can_afford(ability_cost(ability));
        out.queue(style::SetForegroundColor(if affordable { color } else { C_HINT }))?;
        out.queue(Print(format!("[{}] ", ability_label(side, ability))))?;
    }

    // Round number, right aligned
    let round_str = format!("Round {}", state.round);
    if side == Side::Alien {
        let rx = view
            .width
            .saturating_sub(round_str.chars().count() as u16 + 1);
        out.queue(cursor::MoveTo(rx, row))?;
        out.queue(style::SetForegroundColor(C_HINT))?;
        out.queue(Print(&round_str))?;
    }

    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

/// Fill every cell covered by `rect` with `fill`, then put `marker` in the
/// centre cell.
fn draw_box<W: Write>(
    out: &mut W,
    state: &GameState,
    rect: &Rect,
    fill: char,
    marker: char,
    color: Color,
    view: Viewport,
) -> std::io::Result<()> {
    let ((left, top), (right, bottom)) = view.span(&state.arena, rect);
    out.queue(style::SetForegroundColor(color))?;
    let row_text: String = std::iter::repeat(fill)
        .take(usize::from(right - left + 1))
        .collect();
    for row in top..=bottom {
        out.queue(cursor::MoveTo(left, row))?;
        out.queue(Print(&row_text))?;
    }
    let (cx, cy) = view.cell(&state.arena, rect.center_x(), rect.center_y());
    out.queue(cursor::MoveTo(cx, cy))?;
    out.queue(Print(marker))?;
    Ok(())
}

fn draw_actor<W: Write>(
    out: &mut W,
    state: &GameState,
    actor: &Actor,
    view: Viewport,
) -> std::io::Result<()> {
    match actor.side {
        // Wings with the nose pointing at the opponent
        Side::Player => draw_box(out, state, &actor.rect, '▄', '▲', C_PLAYER, view),
        Side::Alien => draw_box(out, state, &actor.rect, '▀', '▼', C_ALIEN, view),
    }
}

fn draw_projectile<W: Write>(
    out: &mut W,
    state: &GameState,
    projectile: &Projectile,
    view: Viewport,
) -> std::io::Result<()> {
    let (symbol, color) = match (projectile.owner, projectile.ability) {
        (Side::Player, Ability::Shot) => ("║", C_SHOT),
        (Side::Player, Ability::SpeedShot) => ("┃", C_SHOT),
        (Side::Player, Ability::SpreadShot) => ("*", C_SHOT),
        (Side::Alien, Ability::Shot) => ("o", C_BOMB),
        (Side::Alien, Ability::SpeedShot) => ("●", C_BOMB),
        (Side::Alien, Ability::SpreadShot) => ("•", C_BOMB),
    };
    let (col, row) = view.cell(
        &state.arena,
        projectile.rect.center_x(),
        projectile.rect.center_y(),
    );
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(symbol))?;
    Ok(())
}

/// Symbols:
///   »  (yellow)  Speed:  +movement speed for whoever destroys it
///   ✚  (red)     Damage: +projectile damage for whoever destroys it
fn draw_item<W: Write>(
    out: &mut W,
    state: &GameState,
    item: &Item,
    view: Viewport,
) -> std::io::Result<()> {
    match item.kind {
        ItemKind::Speed => draw_box(out, state, &item.rect, '░', '»', C_ITEM_SPEED, view),
        ItemKind::Damage => draw_box(out, state, &item.rect, '░', '✚', C_ITEM_DAMAGE, view),
    }
}

fn draw_explosion<W: Write>(
    out: &mut W,
    state: &GameState,
    explosion: &Explosion,
    view: Viewport,
) -> std::io::Result<()> {
    // Flicker between two frames every 3 ticks
    let symbol = if explosion.life / 3 % 2 == 0 { "✶" } else { "✷" };
    let (col, row) = view.cell(&state.arena, explosion.x, explosion.y);
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(C_EXPLOSION))?;
    out.queue(Print(symbol))?;
    Ok(())
}

// ── Round-over overlay ────────────────────────────────────────────────────────

fn draw_round_over<W: Write>(
    out: &mut W,
    state: &GameState,
    winner: Option<Side>,
    view: Viewport,
) -> std::io::Result<()> {
    let title = format!("║   ROUND {:<3} OVER    ║", state.round);
    let (winner_line, winner_color) = match winner {
        Some(Side::Player) => ("Player wins the round", C_PLAYER),
        Some(Side::Alien) => ("Alien wins the round", C_ALIEN),
        None => ("Both down: draw", Color::Yellow),
    };
    let score_line = format!(
        "Player {}  :  {} Alien",
        state.scores.player, state.scores.alien
    );

    let lines: &[(&str, Color)] = &[
        ("╔══════════════════════╗", Color::Red),
        (&title, Color::Red),
        ("╚══════════════════════╝", Color::Red),
        (winner_line, winner_color),
        (&score_line, Color::Yellow),
        ("R - Next Round  Q - Quit", Color::White),
    ];

    let cx = view.width / 2;
    let start_row = (view.height / 2).saturating_sub(lines.len() as u16 / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }

    Ok(())
}
