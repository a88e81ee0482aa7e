use alien_duel::compute::*;
use alien_duel::config::GameConfig;
use alien_duel::entities::*;
use alien_duel::geometry::{Rect, Velocity};

use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

fn make_state() -> GameState {
    init_state(GameConfig::default(), 0, &mut seeded_rng())
}

/// A state where both sides can afford anything and fire several times.
fn loaded_state() -> GameState {
    let mut s = init_state(
        GameConfig {
            max_live_projectiles: 5,
            ..GameConfig::default()
        },
        0,
        &mut seeded_rng(),
    );
    s.player.gauge.value = 10;
    s.alien.gauge.value = 10;
    s
}

fn projectile(owner: Side, rect: Rect, dy: f32) -> Projectile {
    Projectile {
        rect,
        velocity: Velocity { dx: 0.0, dy },
        owner,
        ability: Ability::Shot,
        damage: 1,
    }
}

/// A player shot that reaches the alien on the next tick.
fn shot_at_alien() -> Projectile {
    projectile(Side::Player, Rect::new(318.0, 40.0, 4.0, 16.0), -10.0)
}

/// An alien bomb that reaches the player on the next tick.
fn bomb_at_player() -> Projectile {
    projectile(Side::Alien, Rect::new(318.0, 435.0, 8.0, 8.0), 10.0)
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

fn idle() -> FrameInput {
    FrameInput::default()
}

// ── init_state ────────────────────────────────────────────────────────────────

#[test]
fn init_state_actor_positions() {
    let s = make_state();
    // Player sits on the bottom edge, alien on the top edge, both centred
    assert_eq!(s.player.rect, Rect::new(296.0, 448.0, 48.0, 32.0));
    assert_eq!(s.alien.rect, Rect::new(296.0, 0.0, 48.0, 32.0));
    assert_eq!(s.player.facing, -1);
}

#[test]
fn init_state_starting_values() {
    let s = make_state();
    assert!(s.projectiles.is_empty());
    assert!(s.item.is_none());
    assert_eq!(s.scores, Scoreboard::default());
    assert_eq!(s.round, 1);
    assert_eq!(s.frame, 0);
    assert_eq!(s.status, GameStatus::Playing);
    assert_eq!(s.player.gauge.value, 0);
    assert_eq!(s.player.speed, BASE_SPEED);
    assert_eq!(s.alien.damage, BASE_DAMAGE);
    assert_eq!(s.player.health, 1);
    assert!(ITEM_SPAWN_FRAMES.contains(&s.item_spawn_at));
}

#[test]
fn init_state_uses_configured_health_and_gauge() {
    let config = GameConfig {
        health: 3,
        gauge_capacity: 12,
        ..GameConfig::default()
    };
    let s = init_state(config, 500, &mut seeded_rng());
    assert_eq!(s.alien.health, 3);
    assert_eq!(s.player.gauge.capacity, 12);
    assert_eq!(s.player.gauge.last_refill_ms, 500);
}

// ── move_actor ────────────────────────────────────────────────────────────────

#[test]
fn move_left_by_speed() {
    let s = make_state();
    let s2 = move_actor(&s, Side::Player, -1);
    assert_eq!(s2.player.rect.x, 291.0);
    assert_eq!(s2.player.facing, -1);
}

#[test]
fn move_right_updates_facing() {
    let s = make_state();
    let s2 = move_actor(&s, Side::Alien, 1);
    assert_eq!(s2.alien.rect.x, 301.0);
    assert_eq!(s2.alien.facing, 1);
}

#[test]
fn move_zero_keeps_position_and_facing() {
    let mut s = make_state();
    s.player.facing = 1;
    let s2 = move_actor(&s, Side::Player, 0);
    assert_eq!(s2.player.rect, s.player.rect);
    assert_eq!(s2.player.facing, 1);
}

#[test]
fn move_clamps_at_left_wall() {
    let mut s = make_state();
    s.player.rect.x = 2.0;
    let s2 = move_actor(&s, Side::Player, -1);
    assert_eq!(s2.player.rect.x, 0.0);
}

#[test]
fn move_clamps_at_right_wall() {
    let mut s = make_state();
    s.alien.rect.x = 590.0;
    let s2 = move_actor(&s, Side::Alien, 1);
    assert_eq!(s2.alien.rect.x, 592.0); // 640 - 48
}

#[test]
fn move_uses_upgraded_speed() {
    let mut s = make_state();
    s.player.speed = 9.0;
    let s2 = move_actor(&s, Side::Player, 1);
    assert_eq!(s2.player.rect.x, 305.0);
}

#[test]
fn move_does_not_mutate_original() {
    let s = make_state();
    let _ = move_actor(&s, Side::Player, -1);
    assert_eq!(s.player.rect.x, 296.0);
}

// ── fire ──────────────────────────────────────────────────────────────────────

#[test]
fn shot_leaves_player_top_centre_and_costs_two() {
    let mut s = make_state();
    s.player.gauge.value = 2;
    let s2 = fire(&s, Side::Player, Ability::Shot);
    assert_eq!(s2.projectiles.len(), 1);
    let p = &s2.projectiles[0];
    assert_eq!(p.owner, Side::Player);
    assert_eq!(p.rect.bottom(), s.player.rect.top());
    assert_eq!(p.rect.center_x(), 320.0);
    assert!(approx(p.velocity.dx, 0.0));
    assert!(approx(p.velocity.dy, -10.0));
    assert_eq!(s2.player.gauge.value, 0);
}

#[test]
fn bomb_leaves_alien_bottom_centre() {
    let mut s = make_state();
    s.alien.gauge.value = 4;
    let s2 = fire(&s, Side::Alien, Ability::Shot);
    let p = &s2.projectiles[0];
    assert_eq!(p.owner, Side::Alien);
    assert_eq!(p.rect.top(), s.alien.rect.bottom());
    assert!(approx(p.velocity.dy, 10.0));
    assert_eq!(s2.alien.gauge.value, 2);
}

#[test]
fn fire_only_drains_the_firing_side() {
    let s = loaded_state();
    let s2 = fire(&s, Side::Alien, Ability::Shot);
    assert_eq!(s2.alien.gauge.value, 8);
    assert_eq!(s2.player.gauge.value, 10);
}

#[test]
fn fire_blocked_when_gauge_too_low() {
    let mut s = make_state();
    s.player.gauge.value = 1;
    let s2 = fire(&s, Side::Player, Ability::Shot);
    assert!(s2.projectiles.is_empty());
    assert_eq!(s2.player.gauge.value, 1);
}

#[test]
fn fire_blocked_by_live_projectile_cap() {
    let mut s = make_state(); // cap = 1
    s.player.gauge.value = 10;
    let s2 = fire(&s, Side::Player, Ability::Shot);
    let s3 = fire(&s2, Side::Player, Ability::Shot);
    assert_eq!(s3.projectiles.len(), 1);
    assert_eq!(s3.player.gauge.value, 8);
}

#[test]
fn projectile_cap_is_per_side() {
    let mut s = make_state();
    s.player.gauge.value = 10;
    s.alien.gauge.value = 10;
    let s2 = fire(&s, Side::Player, Ability::Shot);
    let s3 = fire(&s2, Side::Alien, Ability::Shot);
    assert_eq!(s3.live_projectiles(Side::Player), 1);
    assert_eq!(s3.live_projectiles(Side::Alien), 1);
}

#[test]
fn projectile_carries_owner_damage() {
    let mut s = loaded_state();
    s.player.damage = 3;
    let s2 = fire(&s, Side::Player, Ability::Shot);
    assert_eq!(s2.projectiles[0].damage, 3);
}

#[test]
fn speed_shot_locked_without_score() {
    let s = loaded_state();
    let s2 = fire(&s, Side::Alien, Ability::SpeedShot);
    assert!(s2.projectiles.is_empty());
    assert_eq!(s2.alien.gauge.value, 10);
}

#[test]
fn speed_shot_unlocked_at_one_point() {
    let mut s = loaded_state();
    s.scores.alien = 1;
    let s2 = fire(&s, Side::Alien, Ability::SpeedShot);
    assert_eq!(s2.projectiles.len(), 1);
    assert!(approx(s2.projectiles[0].velocity.dy, 20.0));
    assert_eq!(s2.alien.gauge.value, 7);
}

#[test]
fn spread_shot_fans_three_projectiles() {
    let mut s = loaded_state();
    s.scores.player = 3;
    let s2 = fire(&s, Side::Player, Ability::SpreadShot);
    assert_eq!(s2.projectiles.len(), 3);
    assert_eq!(s2.player.gauge.value, 5);

    let dxs: Vec<f32> = s2.projectiles.iter().map(|p| p.velocity.dx).collect();
    assert!(dxs[0] < 0.0);
    assert!(approx(dxs[1], 0.0));
    assert!(dxs[2] > 0.0);
    assert!(approx(dxs[0], -dxs[2]));
    for p in &s2.projectiles {
        let speed = (p.velocity.dx.powi(2) + p.velocity.dy.powi(2)).sqrt();
        assert!(approx(speed, 8.0));
        assert!(p.velocity.dy < 0.0);
    }
}

#[test]
fn spread_shot_locked_below_three_points() {
    let mut s = loaded_state();
    s.scores.player = 2;
    let s2 = fire(&s, Side::Player, Ability::SpreadShot);
    assert!(s2.projectiles.is_empty());
}

#[test]
fn available_abilities_follow_score() {
    let mut s = make_state();
    assert_eq!(available_abilities(&s, Side::Player), vec![Ability::Shot]);
    s.scores.player = 1;
    assert_eq!(
        available_abilities(&s, Side::Player),
        vec![Ability::Shot, Ability::SpeedShot]
    );
    s.scores.player = 3;
    assert_eq!(available_abilities(&s, Side::Player), Ability::ALL.to_vec());
    assert_eq!(available_abilities(&s, Side::Alien), vec![Ability::Shot]);
}

// ── apply_input ───────────────────────────────────────────────────────────────

#[test]
fn holding_fire_only_fires_once() {
    let s = loaded_state();
    let held = ActorInput {
        direction: 0,
        firing: Some(Ability::Shot),
    };
    let s2 = apply_input(&s, Side::Player, held, 0);
    let s3 = apply_input(&s2, Side::Player, held, 0);
    assert_eq!(s3.projectiles.len(), 1);
    assert!(s3.player.reloading);
}

#[test]
fn release_and_press_fires_again() {
    let s = loaded_state();
    let held = ActorInput {
        direction: 0,
        firing: Some(Ability::Shot),
    };
    let s2 = apply_input(&s, Side::Player, held, 0);
    let s3 = apply_input(&s2, Side::Player, ActorInput::default(), 0);
    assert!(!s3.player.reloading);
    let s4 = apply_input(&s3, Side::Player, held, 0);
    assert_eq!(s4.projectiles.len(), 2);
}

#[test]
fn apply_input_moves_and_refills() {
    let s = make_state();
    let input = ActorInput {
        direction: 1,
        firing: None,
    };
    let s2 = apply_input(&s, Side::Alien, input, 2001);
    assert_eq!(s2.alien.rect.x, 301.0);
    assert_eq!(s2.alien.gauge.value, 1);
    assert_eq!(s2.player.gauge.value, 0);
}

// ── tick: frame counter & projectiles ──────────────────────────────────────

#[test]
fn tick_increments_frame() {
    let mut s = make_state();
    s.frame = 5;
    let s2 = tick(&s, &idle(), 0, &mut seeded_rng());
    assert_eq!(s2.frame, 6);
}

#[test]
fn tick_shot_moves_up() {
    let mut s = make_state();
    s.projectiles
        .push(projectile(Side::Player, Rect::new(100.0, 200.0, 4.0, 16.0), -10.0));
    let s2 = tick(&s, &idle(), 0, &mut seeded_rng());
    assert_eq!(s2.projectiles.len(), 1);
    assert_eq!(s2.projectiles[0].rect.y, 190.0);
}

#[test]
fn tick_removes_shot_at_top_edge() {
    let mut s = make_state();
    // y=10 → 0 → removed; y=11 → 1 → kept
    s.projectiles
        .push(projectile(Side::Player, Rect::new(100.0, 10.0, 4.0, 16.0), -10.0));
    s.projectiles
        .push(projectile(Side::Player, Rect::new(500.0, 11.0, 4.0, 16.0), -10.0));
    let s2 = tick(&s, &idle(), 0, &mut seeded_rng());
    assert_eq!(s2.projectiles.len(), 1);
    assert_eq!(s2.projectiles[0].rect.y, 1.0);
}

#[test]
fn tick_removes_bomb_at_bottom_edge() {
    let mut s = make_state();
    // bottom 462 → 472 kept; bottom 470 → 480 removed
    s.projectiles
        .push(projectile(Side::Alien, Rect::new(100.0, 454.0, 8.0, 8.0), 10.0));
    s.projectiles
        .push(projectile(Side::Alien, Rect::new(20.0, 462.0, 8.0, 8.0), 10.0));
    let s2 = tick(&s, &idle(), 0, &mut seeded_rng());
    assert_eq!(s2.projectiles.len(), 1);
    assert_eq!(s2.projectiles[0].rect.bottom(), 472.0);
}

#[test]
fn tick_removes_projectile_leaving_sideways() {
    let mut s = make_state();
    let mut p = projectile(Side::Player, Rect::new(-2.0, 200.0, 4.0, 16.0), -8.0);
    p.velocity.dx = -3.0;
    s.projectiles.push(p);
    let s2 = tick(&s, &idle(), 0, &mut seeded_rng());
    assert!(s2.projectiles.is_empty());
}

// ── tick: collisions with actors ────────────────────────────────────────────

#[test]
fn shot_hitting_alien_ends_round() {
    let mut s = make_state();
    s.projectiles.push(shot_at_alien());
    let s2 = tick(&s, &idle(), 0, &mut seeded_rng());
    assert_eq!(
        s2.status,
        GameStatus::RoundOver {
            winner: Some(Side::Player)
        }
    );
    assert_eq!(s2.alien.health, 0);
    assert_eq!(s2.scores.player, HIT_POINTS);
    assert!(s2.projectiles.is_empty());
    assert!(!s2.explosions.is_empty());
}

#[test]
fn bomb_hitting_player_ends_round() {
    let mut s = make_state();
    s.projectiles.push(bomb_at_player());
    let s2 = tick(&s, &idle(), 0, &mut seeded_rng());
    assert_eq!(
        s2.status,
        GameStatus::RoundOver {
            winner: Some(Side::Alien)
        }
    );
    assert_eq!(s2.scores.alien, 1);
    assert_eq!(s2.scores.player, 0);
}

#[test]
fn mutual_hits_are_a_draw() {
    let mut s = make_state();
    s.projectiles.push(shot_at_alien());
    s.projectiles.push(bomb_at_player());
    let s2 = tick(&s, &idle(), 0, &mut seeded_rng());
    assert_eq!(s2.status, GameStatus::RoundOver { winner: None });
    assert_eq!(s2.scores.player, 1);
    assert_eq!(s2.scores.alien, 1);
}

#[test]
fn shot_missing_alien_keeps_playing() {
    let mut s = make_state();
    s.projectiles
        .push(projectile(Side::Player, Rect::new(100.0, 40.0, 4.0, 16.0), -10.0));
    let s2 = tick(&s, &idle(), 0, &mut seeded_rng());
    assert_eq!(s2.status, GameStatus::Playing);
    assert_eq!(s2.alien.health, 1);
}

#[test]
fn own_projectiles_do_not_hit_owner() {
    let mut s = make_state();
    // A shot overlapping the player itself
    s.projectiles
        .push(projectile(Side::Player, Rect::new(318.0, 460.0, 4.0, 16.0), -10.0));
    let s2 = tick(&s, &idle(), 0, &mut seeded_rng());
    assert_eq!(s2.status, GameStatus::Playing);
    assert_eq!(s2.player.health, 1);
}

#[test]
fn extra_health_survives_a_hit() {
    let config = GameConfig {
        health: 3,
        ..GameConfig::default()
    };
    let mut s = init_state(config, 0, &mut seeded_rng());
    s.projectiles.push(shot_at_alien());
    let s2 = tick(&s, &idle(), 0, &mut seeded_rng());
    assert_eq!(s2.status, GameStatus::Playing);
    assert_eq!(s2.alien.health, 2);
    assert_eq!(s2.scores.player, 1);
}

#[test]
fn upgraded_damage_cuts_deeper() {
    let config = GameConfig {
        health: 3,
        ..GameConfig::default()
    };
    let mut s = init_state(config, 0, &mut seeded_rng());
    let mut p = shot_at_alien();
    p.damage = 3;
    s.projectiles.push(p);
    let s2 = tick(&s, &idle(), 0, &mut seeded_rng());
    assert_eq!(s2.alien.health, 0);
    assert_eq!(
        s2.status,
        GameStatus::RoundOver {
            winner: Some(Side::Player)
        }
    );
}

#[test]
fn several_hits_in_one_frame_score_once() {
    let config = GameConfig {
        health: 5,
        ..GameConfig::default()
    };
    let mut s = init_state(config, 0, &mut seeded_rng());
    s.projectiles.push(shot_at_alien());
    s.projectiles.push(shot_at_alien());
    let s2 = tick(&s, &idle(), 0, &mut seeded_rng());
    assert_eq!(s2.alien.health, 3);
    assert_eq!(s2.scores.player, 1);
}

#[test]
fn tick_after_round_over_is_a_no_op() {
    let mut s = make_state();
    s.status = GameStatus::RoundOver {
        winner: Some(Side::Alien),
    };
    s.frame = 7;
    let s2 = tick(&s, &idle(), 10_000, &mut seeded_rng());
    assert_eq!(s2.frame, 7);
    assert_eq!(s2.player.gauge.value, 0);
}

#[test]
fn explosions_fade_out() {
    let mut s = make_state();
    s.explosions.push(Explosion {
        x: 10.0,
        y: 10.0,
        life: 2,
    });
    let s2 = tick(&s, &idle(), 0, &mut seeded_rng());
    assert_eq!(s2.explosions[0].life, 1);
    let s3 = tick(&s2, &idle(), 0, &mut seeded_rng());
    assert!(s3.explosions.is_empty());
}

#[test]
fn gauge_recharges_through_tick() {
    let s = make_state();
    let s2 = tick(&s, &idle(), 2001, &mut seeded_rng());
    assert_eq!(s2.player.gauge.value, 1);
    assert_eq!(s2.alien.gauge.value, 1);
    // Not another unit until a further interval passes
    let s3 = tick(&s2, &idle(), 3000, &mut seeded_rng());
    assert_eq!(s3.player.gauge.value, 1);
}

#[test]
fn tick_fires_from_input() {
    let mut s = make_state();
    s.player.gauge.value = 2;
    let input = FrameInput {
        player: ActorInput {
            direction: 0,
            firing: Some(Ability::Shot),
        },
        alien: ActorInput::default(),
    };
    let s2 = tick(&s, &input, 0, &mut seeded_rng());
    assert_eq!(s2.live_projectiles(Side::Player), 1);
    assert_eq!(s2.player.gauge.value, 0);
}

// ── tick: item ──────────────────────────────────────────────────────────────

fn centred_item(kind: ItemKind) -> Item {
    Item {
        rect: Rect::from_center(320.0, 240.0, ITEM_WIDTH, ITEM_HEIGHT),
        dx: ITEM_SPEED,
        kind,
    }
}

#[test]
fn item_spawns_when_timer_is_due() {
    let mut s = make_state();
    s.item_timer = s.item_spawn_at - 1;
    let s2 = tick(&s, &idle(), 0, &mut seeded_rng());
    let item = s2.item.expect("item should have spawned");
    assert_eq!(item.rect.center_x(), 320.0);
    assert_eq!(item.rect.center_y(), 240.0);
    assert_eq!(item.dx, ITEM_SPEED);
}

#[test]
fn item_not_spawned_early() {
    let mut s = make_state();
    s.item_timer = s.item_spawn_at - 2;
    let s2 = tick(&s, &idle(), 0, &mut seeded_rng());
    assert!(s2.item.is_none());
    assert_eq!(s2.item_timer, s.item_spawn_at - 1);
}

#[test]
fn item_moves_horizontally() {
    let mut s = make_state();
    s.item = Some(centred_item(ItemKind::Speed));
    let s2 = tick(&s, &idle(), 0, &mut seeded_rng());
    let item = s2.item.unwrap();
    assert_eq!(item.rect.center_x(), 322.0);
    assert_eq!(item.rect.center_y(), 240.0);
}

#[test]
fn item_bounces_off_walls() {
    let mut s = make_state();
    let mut item = centred_item(ItemKind::Damage);
    item.rect.x = 640.0 - ITEM_WIDTH - 1.0;
    s.item = Some(item);
    let s2 = tick(&s, &idle(), 0, &mut seeded_rng());
    assert_eq!(s2.item.as_ref().unwrap().dx, -ITEM_SPEED);
    let s3 = tick(&s2, &idle(), 0, &mut seeded_rng());
    assert_eq!(s3.item.as_ref().unwrap().dx, -ITEM_SPEED);
    assert!(s3.item.unwrap().rect.right() < 640.0);
}

#[test]
fn player_shot_destroys_speed_item() {
    let mut s = make_state();
    s.item = Some(centred_item(ItemKind::Speed));
    s.item_timer = 123;
    s.projectiles
        .push(projectile(Side::Player, Rect::new(318.0, 270.0, 4.0, 16.0), -10.0));
    let s2 = tick(&s, &idle(), 0, &mut seeded_rng());
    assert!(s2.item.is_none());
    assert!(s2.projectiles.is_empty());
    assert_eq!(s2.scores.player, ITEM_POINTS);
    assert_eq!(s2.player.speed, BASE_SPEED + SPEED_STEP);
    assert_eq!(s2.alien.speed, BASE_SPEED);
    assert_eq!(s2.item_timer, 0);
    assert!(ITEM_SPAWN_FRAMES.contains(&s2.item_spawn_at));
}

#[test]
fn alien_bomb_destroys_damage_item() {
    let mut s = make_state();
    s.item = Some(centred_item(ItemKind::Damage));
    s.projectiles
        .push(projectile(Side::Alien, Rect::new(316.0, 205.0, 8.0, 8.0), 10.0));
    let s2 = tick(&s, &idle(), 0, &mut seeded_rng());
    assert!(s2.item.is_none());
    assert_eq!(s2.scores.alien, 1);
    assert_eq!(s2.alien.damage, BASE_DAMAGE + 1);
    assert_eq!(s2.player.damage, BASE_DAMAGE);
}

#[test]
fn only_one_projectile_is_spent_on_the_item() {
    let mut s = make_state();
    s.item = Some(centred_item(ItemKind::Speed));
    s.projectiles
        .push(projectile(Side::Player, Rect::new(318.0, 270.0, 4.0, 16.0), -10.0));
    s.projectiles
        .push(projectile(Side::Alien, Rect::new(316.0, 205.0, 8.0, 8.0), 10.0));
    let s2 = tick(&s, &idle(), 0, &mut seeded_rng());
    assert_eq!(s2.projectiles.len(), 1);
    assert_eq!(s2.scores.player + s2.scores.alien, 1);
}

#[test]
fn speed_upgrade_is_capped() {
    let mut s = make_state();
    s.player.speed = MAX_SPEED - 1.0;
    s.item = Some(centred_item(ItemKind::Speed));
    s.projectiles
        .push(projectile(Side::Player, Rect::new(318.0, 270.0, 4.0, 16.0), -10.0));
    let s2 = tick(&s, &idle(), 0, &mut seeded_rng());
    assert_eq!(s2.player.speed, MAX_SPEED);
}

#[test]
fn damage_upgrade_is_capped() {
    let mut s = make_state();
    s.alien.damage = MAX_DAMAGE;
    s.item = Some(centred_item(ItemKind::Damage));
    s.projectiles
        .push(projectile(Side::Alien, Rect::new(316.0, 205.0, 8.0, 8.0), 10.0));
    let s2 = tick(&s, &idle(), 0, &mut seeded_rng());
    assert_eq!(s2.alien.damage, MAX_DAMAGE);
}

// ── next_round ────────────────────────────────────────────────────────────────

#[test]
fn next_round_keeps_scores_and_upgrades() {
    let mut s = make_state();
    s.projectiles.push(shot_at_alien());
    s.player.speed = 9.0;
    s.alien.damage = 2;
    s.player.rect.x = 10.0;
    let over = tick(&s, &idle(), 0, &mut seeded_rng());

    let s2 = next_round(&over, 5_000, &mut seeded_rng());
    assert_eq!(s2.round, 2);
    assert_eq!(s2.status, GameStatus::Playing);
    assert_eq!(s2.scores, over.scores);
    assert_eq!(s2.player.speed, 9.0);
    assert_eq!(s2.alien.damage, 2);
}

#[test]
fn next_round_resets_the_field() {
    let mut s = make_state();
    s.player.rect.x = 10.0;
    s.player.gauge.value = 7;
    s.alien.health = 0;
    s.item = Some(centred_item(ItemKind::Speed));
    s.projectiles.push(bomb_at_player());
    s.frame = 900;

    let s2 = next_round(&s, 5_000, &mut seeded_rng());
    assert_eq!(s2.player.rect.x, 296.0);
    assert_eq!(s2.player.gauge.value, 0);
    assert_eq!(s2.player.gauge.last_refill_ms, 5_000);
    assert_eq!(s2.alien.health, 1);
    assert!(s2.item.is_none());
    assert!(s2.projectiles.is_empty());
    assert_eq!(s2.frame, 0);
    assert_eq!(s2.item_timer, 0);
}
