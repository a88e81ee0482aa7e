//! Entity types shared by the simulation and the renderer. Plain data only.

use crate::config::GameConfig;
use crate::gauge::Gauge;
use crate::geometry::{Rect, Velocity};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// Bottom of the arena, fires upward.
    Player,
    /// Top of the arena, drops bombs downward.
    Alien,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Alien,
            Side::Alien => Side::Player,
        }
    }
}

/// Abilities in tier order; a higher tier costs more gauge and needs a
/// higher score to unlock.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Ability {
    Shot,
    SpeedShot,
    SpreadShot,
}

impl Ability {
    pub const ALL: [Ability; 3] = [Ability::Shot, Ability::SpeedShot, Ability::SpreadShot];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemKind {
    /// Permanently raises movement speed.
    Speed,
    /// Permanently raises projectile damage.
    Damage,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    /// `winner` is `None` when both sides went down on the same frame.
    RoundOver { winner: Option<Side> },
}

// ── Actors ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Actor {
    pub side: Side,
    pub rect: Rect,
    /// −1 facing left, +1 facing right.
    pub facing: i8,
    /// Arena units per frame.
    pub speed: f32,
    /// Damage carried by every projectile this actor fires.
    pub damage: u32,
    pub health: u32,
    /// Set while a fire key is held; firing happens only on the press edge.
    pub reloading: bool,
    pub gauge: Gauge,
}

// ── Projectiles ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Projectile {
    pub rect: Rect,
    pub velocity: Velocity,
    pub owner: Side,
    pub ability: Ability,
    /// Snapshot of the owner's damage at the moment it was fired.
    pub damage: u32,
}

// ── Item & effects ────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Item {
    pub rect: Rect,
    /// Signed horizontal speed; flips when the item touches a wall.
    pub dx: f32,
    pub kind: ItemKind,
}

/// A short-lived flash drawn where something was hit.
#[derive(Clone, Debug, PartialEq)]
pub struct Explosion {
    pub x: f32,
    pub y: f32,
    /// Remaining frames to display.
    pub life: u32,
}

// ── Scores ────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Scoreboard {
    pub player: u32,
    pub alien: u32,
}

impl Scoreboard {
    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Player => self.player,
            Side::Alien => self.alien,
        }
    }

    #[must_use]
    pub fn award(&self, side: Side, points: u32) -> Scoreboard {
        match side {
            Side::Player => Scoreboard {
                player: self.player + points,
                ..*self
            },
            Side::Alien => Scoreboard {
                alien: self.alien + points,
                ..*self
            },
        }
    }
}

// ── Per-frame input ───────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ActorInput {
    /// −1 left, 0 still, +1 right.
    pub direction: i8,
    /// The fire key currently held, if any.
    pub firing: Option<Ability>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub player: ActorInput,
    pub alien: ActorInput,
}

impl FrameInput {
    pub fn for_side(&self, side: Side) -> ActorInput {
        match side {
            Side::Player => self.player,
            Side::Alien => self.alien,
        }
    }
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire match state. Cloneable so pure update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug)]
pub struct GameState {
    pub player: Actor,
    pub alien: Actor,
    /// Shots and bombs of both sides.
    pub projectiles: Vec<Projectile>,
    /// The power-up item, while one is on screen.
    pub item: Option<Item>,
    /// Frames counted toward the next item spawn.
    pub item_timer: u32,
    /// Frame count at which the next item appears.
    pub item_spawn_at: u32,
    pub explosions: Vec<Explosion>,
    pub scores: Scoreboard,
    /// 1-based round number within the match.
    pub round: u32,
    pub status: GameStatus,
    /// Frames simulated in the current round.
    pub frame: u64,
    pub arena: Rect,
    pub config: GameConfig,
}

impl GameState {
    pub fn actor(&self, side: Side) -> &Actor {
        match side {
            Side::Player => &self.player,
            Side::Alien => &self.alien,
        }
    }

    pub fn actor_mut(&mut self, side: Side) -> &mut Actor {
        match side {
            Side::Player => &mut self.player,
            Side::Alien => &mut self.alien,
        }
    }

    pub fn live_projectiles(&self, side: Side) -> usize {
        self.projectiles.iter().filter(|p| p.owner == side).count()
    }
}
