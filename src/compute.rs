/// Pure game-logic functions.
///
/// Every public function takes an immutable reference to the current
/// `GameState` (and, where needed, the wall-clock time and an RNG handle) and
/// returns a brand-new `GameState`. Side effects are limited to the injected
/// RNG and log events.

use rand::Rng;
use tracing::{debug, info};

use crate::config::GameConfig;
use crate::entities::{
    Ability, Actor, ActorInput, Explosion, FrameInput, GameState, GameStatus, Item, ItemKind,
    Projectile, Scoreboard, Side,
};
use crate::gauge::Gauge;
use crate::geometry::{Heading, Rect, Velocity};

// ── Arena & sprite sizes ─────────────────────────────────────────────────────

pub const ARENA_WIDTH: f32 = 640.0;
pub const ARENA_HEIGHT: f32 = 480.0;

pub const ACTOR_WIDTH: f32 = 48.0;
pub const ACTOR_HEIGHT: f32 = 32.0;
pub const ITEM_WIDTH: f32 = 64.0;
pub const ITEM_HEIGHT: f32 = 48.0;

pub const BASE_SPEED: f32 = 5.0;
pub const SPEED_STEP: f32 = 2.0;
pub const MAX_SPEED: f32 = 15.0;
pub const BASE_DAMAGE: u32 = 1;
pub const MAX_DAMAGE: u32 = 5;

pub const ITEM_SPEED: f32 = 2.0;
/// Frames between an item leaving the arena and the next one appearing.
pub const ITEM_SPAWN_FRAMES: std::ops::RangeInclusive<u32> = 300..=600;

pub const EXPLOSION_LIFE: u32 = 12;

/// Points for landing at least one hit on the opponent in a frame.
pub const HIT_POINTS: u32 = 1;
pub const ITEM_POINTS: u32 = 1;

// ── Ability tables ───────────────────────────────────────────────────────────

/// Gauge units spent per use.
pub fn ability_cost(ability: Ability) -> u32 {
    match ability {
        Ability::Shot => 2,
        Ability::SpeedShot => 3,
        Ability::SpreadShot => 5,
    }
}

/// Own score required before the ability can be used.
pub fn unlock_score(ability: Ability) -> u32 {
    match ability {
        Ability::Shot => 0,
        Ability::SpeedShot => 1,
        Ability::SpreadShot => 3,
    }
}

/// Arena units per frame.
pub fn projectile_speed(ability: Ability) -> f32 {
    match ability {
        Ability::Shot => 10.0,
        Ability::SpeedShot => 20.0,
        Ability::SpreadShot => 8.0,
    }
}

/// Launch angles in degrees from the vertical, one projectile per entry.
pub fn spread_angles(ability: Ability) -> &'static [f32] {
    match ability {
        Ability::Shot | Ability::SpeedShot => &[0.0],
        Ability::SpreadShot => &[-20.0, 0.0, 20.0],
    }
}

/// Shots are thin streaks, bombs are square.
fn projectile_size(side: Side) -> (f32, f32) {
    match side {
        Side::Player => (4.0, 16.0),
        Side::Alien => (8.0, 8.0),
    }
}

fn heading(side: Side) -> Heading {
    match side {
        Side::Player => Heading::Up,
        Side::Alien => Heading::Down,
    }
}

// ── Constructors ─────────────────────────────────────────────────────────────

pub fn arena() -> Rect {
    Rect::new(0.0, 0.0, ARENA_WIDTH, ARENA_HEIGHT)
}

fn spawn_actor(side: Side, config: &GameConfig, now_ms: u64, speed: f32, damage: u32) -> Actor {
    let bounds = arena();
    let rect = match side {
        Side::Player => {
            Rect::from_midbottom(bounds.center_x(), bounds.bottom(), ACTOR_WIDTH, ACTOR_HEIGHT)
        }
        Side::Alien => Rect::from_midtop(bounds.center_x(), bounds.top(), ACTOR_WIDTH, ACTOR_HEIGHT),
    };
    Actor {
        side,
        rect,
        facing: -1,
        speed,
        damage,
        health: config.health,
        reloading: false,
        gauge: Gauge::new(config.gauge_capacity, config.gauge_refill_ms, now_ms),
    }
}

/// Build the first round of a match.
pub fn init_state(config: GameConfig, now_ms: u64, rng: &mut impl Rng) -> GameState {
    GameState {
        player: spawn_actor(Side::Player, &config, now_ms, BASE_SPEED, BASE_DAMAGE),
        alien: spawn_actor(Side::Alien, &config, now_ms, BASE_SPEED, BASE_DAMAGE),
        projectiles: Vec::new(),
        item: None,
        item_timer: 0,
        item_spawn_at: rng.gen_range(ITEM_SPAWN_FRAMES),
        explosions: Vec::new(),
        scores: Scoreboard::default(),
        round: 1,
        status: GameStatus::Playing,
        frame: 0,
        arena: arena(),
        config,
    }
}

/// Start the following round. Scores and item upgrades carry over; everything
/// else returns to its starting value.
pub fn next_round(state: &GameState, now_ms: u64, rng: &mut impl Rng) -> GameState {
    let config = state.config;
    GameState {
        player: spawn_actor(Side::Player, &config, now_ms, state.player.speed, state.player.damage),
        alien: spawn_actor(Side::Alien, &config, now_ms, state.alien.speed, state.alien.damage),
        projectiles: Vec::new(),
        item: None,
        item_timer: 0,
        item_spawn_at: rng.gen_range(ITEM_SPAWN_FRAMES),
        explosions: Vec::new(),
        round: state.round + 1,
        status: GameStatus::Playing,
        frame: 0,
        ..state.clone()
    }
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

/// Slide an actor horizontally by its speed, kept inside the arena.
pub fn move_actor(state: &GameState, side: Side, direction: i8) -> GameState {
    let mut next = state.clone();
    let arena = next.arena;
    let actor = next.actor_mut(side);
    if direction != 0 {
        actor.facing = direction.signum();
    }
    actor.rect = actor
        .rect
        .translate(f32::from(direction.signum()) * actor.speed, 0.0)
        .clamp_within(&arena);
    next
}

/// Where projectiles leave the actor: top centre for the Player, bottom
/// centre for the Alien.
pub fn gun_position(actor: &Actor) -> (f32, f32) {
    match actor.side {
        Side::Player => (actor.rect.center_x(), actor.rect.top()),
        Side::Alien => (actor.rect.center_x(), actor.rect.bottom()),
    }
}

pub fn is_unlocked(state: &GameState, side: Side, ability: Ability) -> bool {
    state.scores.get(side) >= unlock_score(ability)
}

pub fn can_fire(state: &GameState, side: Side, ability: Ability) -> bool {
    is_unlocked(state, side, ability)
        && state.live_projectiles(side) < state.config.max_live_projectiles
        && state.actor(side).gauge.can_afford(ability_cost(ability))
}

/// Abilities the side has unlocked, in tier order.
pub fn available_abilities(state: &GameState, side: Side) -> Vec<Ability> {
    Ability::ALL
        .into_iter()
        .filter(|a| is_unlocked(state, side, *a))
        .collect()
}

/// Launch `ability` from `side`, paying its cost from that side's gauge.
/// Returns the state unchanged when the ability is locked, unaffordable, or
/// the side already has its maximum of projectiles in flight.
pub fn fire(state: &GameState, side: Side, ability: Ability) -> GameState {
    if !can_fire(state, side, ability) {
        return state.clone();
    }
    let actor = state.actor(side);
    let Some(gauge) = actor.gauge.spend(ability_cost(ability)) else {
        return state.clone();
    };

    let (gun_x, gun_y) = gun_position(actor);
    let (w, h) = projectile_size(side);
    let rect = match side {
        Side::Player => Rect::from_midbottom(gun_x, gun_y, w, h),
        Side::Alien => Rect::from_midtop(gun_x, gun_y, w, h),
    };
    let speed = projectile_speed(ability);
    let damage = actor.damage;

    let mut next = state.clone();
    next.projectiles
        .extend(spread_angles(ability).iter().map(|&angle| Projectile {
            rect,
            velocity: Velocity::from_angle(speed, angle, heading(side)),
            owner: side,
            ability,
            damage,
        }));
    next.actor_mut(side).gauge = gauge;
    next
}

/// Movement, gauge recharge and firing for one side.
///
/// Firing is edge-triggered: holding a fire key fires once, the key has to be
/// released before the side can fire again.
pub fn apply_input(state: &GameState, side: Side, input: ActorInput, now_ms: u64) -> GameState {
    let mut next = move_actor(state, side, input.direction);
    {
        let actor = next.actor_mut(side);
        actor.gauge = actor.gauge.refill(now_ms);
    }

    if let Some(ability) = input.firing {
        if !next.actor(side).reloading {
            next = fire(&next, side, ability);
        }
    }
    next.actor_mut(side).reloading = input.firing.is_some();
    next
}

// ── Per-frame tick ───────────────────────────────────────────────────────────

fn advance_projectiles(projectiles: &[Projectile], arena: &Rect) -> Vec<Projectile> {
    projectiles
        .iter()
        .map(|p| Projectile {
            rect: p.rect.translate(p.velocity.dx, p.velocity.dy),
            ..p.clone()
        })
        .filter(|p| {
            let past_edge = match p.owner {
                Side::Player => p.rect.top() <= arena.top(),
                Side::Alien => p.rect.bottom() >= arena.bottom(),
            };
            let off_side = p.rect.right() <= arena.left() || p.rect.left() >= arena.right();
            !past_edge && !off_side
        })
        .collect()
}

fn advance_item(item: &Item, arena: &Rect) -> Item {
    let rect = item.rect.translate(item.dx, 0.0);
    let dx = if rect.right() >= arena.right() || rect.left() <= arena.left() {
        -item.dx
    } else {
        item.dx
    };
    Item { rect, dx, ..item.clone() }
}

fn age_explosions(explosions: &[Explosion]) -> Vec<Explosion> {
    explosions
        .iter()
        .filter(|e| e.life > 1)
        .map(|e| Explosion {
            life: e.life - 1,
            ..e.clone()
        })
        .collect()
}

fn explosion_at(rect: &Rect) -> Explosion {
    Explosion {
        x: rect.center_x(),
        y: rect.center_y(),
        life: EXPLOSION_LIFE,
    }
}

/// Projectiles against the opposing actor. Both sides are resolved against
/// the same positions, so mutual hits on one frame end in a draw.
fn resolve_actor_hits(state: GameState) -> GameState {
    let mut next = state;
    let mut damage_taken = [0u32; 2];
    let mut explosions = Vec::new();

    let mut remaining = Vec::with_capacity(next.projectiles.len());
    for projectile in next.projectiles.drain(..) {
        let target = match projectile.owner {
            Side::Player => &next.alien,
            Side::Alien => &next.player,
        };
        if projectile.rect.overlaps(&target.rect) {
            explosions.push(explosion_at(&projectile.rect));
            damage_taken[target_index(target.side)] += projectile.damage;
        } else {
            remaining.push(projectile);
        }
    }
    next.projectiles = remaining;

    for side in [Side::Player, Side::Alien] {
        let damage = damage_taken[target_index(side)];
        if damage == 0 {
            continue;
        }
        next.scores = next.scores.award(side.opponent(), HIT_POINTS);
        let actor = next.actor_mut(side);
        actor.health = actor.health.saturating_sub(damage);
        explosions.push(explosion_at(&actor.rect));
        debug!(target_side = ?side, damage, health = actor.health, "actor hit");
    }
    next.explosions.extend(explosions);

    let player_down = next.player.health == 0;
    let alien_down = next.alien.health == 0;
    if player_down || alien_down {
        let winner = match (player_down, alien_down) {
            (true, true) => None,
            (true, false) => Some(Side::Alien),
            _ => Some(Side::Player),
        };
        next.status = GameStatus::RoundOver { winner };
        info!(
            round = next.round,
            ?winner,
            player_score = next.scores.player,
            alien_score = next.scores.alien,
            "round over"
        );
    }
    next
}

fn target_index(side: Side) -> usize {
    match side {
        Side::Player => 0,
        Side::Alien => 1,
    }
}

fn schedule_item(state: GameState, rng: &mut impl Rng) -> GameState {
    if state.item.is_some() {
        return state;
    }
    let mut next = state;
    next.item_timer += 1;
    if next.item_timer >= next.item_spawn_at {
        let kind = if rng.gen_bool(0.5) {
            ItemKind::Speed
        } else {
            ItemKind::Damage
        };
        next.item = Some(Item {
            rect: Rect::from_center(
                next.arena.center_x(),
                next.arena.center_y(),
                ITEM_WIDTH,
                ITEM_HEIGHT,
            ),
            dx: ITEM_SPEED,
            kind,
        });
        debug!(?kind, frame = next.frame, "item spawned");
    }
    next
}

fn upgrade(actor: &mut Actor, kind: ItemKind) {
    match kind {
        ItemKind::Speed => actor.speed = (actor.speed + SPEED_STEP).min(MAX_SPEED),
        ItemKind::Damage => actor.damage = (actor.damage + 1).min(MAX_DAMAGE),
    }
}

/// The first projectile touching the item destroys it; its owner scores and
/// keeps the upgrade.
fn resolve_item_hits(state: GameState, rng: &mut impl Rng) -> GameState {
    let hit = state.item.clone().and_then(|item| {
        state
            .projectiles
            .iter()
            .position(|p| p.rect.overlaps(&item.rect))
            .map(|index| (item, index))
    });
    let Some((item, hit)) = hit else {
        return state;
    };

    let mut next = state;
    let projectile = next.projectiles.remove(hit);
    let side = projectile.owner;
    next.scores = next.scores.award(side, ITEM_POINTS);
    upgrade(next.actor_mut(side), item.kind);
    next.explosions.push(explosion_at(&item.rect));
    next.item = None;
    next.item_timer = 0;
    next.item_spawn_at = rng.gen_range(ITEM_SPAWN_FRAMES);
    info!(
        ?side,
        kind = ?item.kind,
        speed = next.actor(side).speed,
        damage = next.actor(side).damage,
        "item destroyed"
    );
    next
}

/// Advance the simulation by one frame. All randomness comes through `rng`
/// and wall-clock time through `now_ms`, so callers control determinism.
///
/// Order: move projectiles, the item and explosions; apply both sides'
/// input; resolve hits on actors; schedule and resolve the item.
pub fn tick(state: &GameState, input: &FrameInput, now_ms: u64, rng: &mut impl Rng) -> GameState {
    if state.status != GameStatus::Playing {
        return state.clone();
    }

    let mut next = state.clone();
    next.frame += 1;

    // ── 1. Move everything already in flight ──────────────────────────────────
    next.projectiles = advance_projectiles(&state.projectiles, &state.arena);
    next.explosions = age_explosions(&state.explosions);
    next.item = state.item.as_ref().map(|item| advance_item(item, &state.arena));

    // ── 2. Both sides act ────────────────────────────────────────────────────
    for side in [Side::Player, Side::Alien] {
        next = apply_input(&next, side, input.for_side(side), now_ms);
    }

    // ── 3. Collisions: projectiles ↔ actors ──────────────────────────────────
    next = resolve_actor_hits(next);

    // ── 4. Item spawn & collisions ───────────────────────────────────────────
    next = schedule_item(next, rng);
    resolve_item_hits(next, rng)
}
