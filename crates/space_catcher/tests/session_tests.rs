//! Headless tests for a full play session: menu selection, the simulation
//! invariants, scoring, crashing and the return to the menu.
//!
//! The app runs on `MinimalPlugins` with virtual time frozen, so `app.update()`
//! only drives state transitions and ticks are stepped by hand through the
//! `FixedUpdate` schedule.

use std::time::Duration;

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;
use space_catcher::collision::Bounds;
use space_catcher::core::config::{CRASH_PAUSE_TICKS, STAR_COUNT};
use space_catcher::core::{FinalScore, GameState, Score, SessionEntity, SoundCue};
use space_catcher::difficulty::{Difficulty, Settings};
use space_catcher::effects::Explosion;
use space_catcher::falling::{Planet, Star, Supply, SupplyTier};
use space_catcher::game_over::{GameOverPlugin, GameOverScreen};
use space_catcher::gameplay::{CrashPause, GameplayPlugin};
use space_catcher::menu::{MenuPlugin, MenuScreen};
use space_catcher::player::Player;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn headless_app() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin))
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::ZERO))
        // Without `InputPlugin` nothing clears presses between frames, so
        // tests control `just_pressed` directly
        .init_resource::<ButtonInput<KeyCode>>()
        .add_plugins((GameplayPlugin, MenuPlugin, GameOverPlugin));
    app.update(); // settle into Menu
    app
}

fn press(app: &mut App, key: KeyCode) {
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(key);
    app.update(); // the state's input system reacts
    app.world_mut().resource_mut::<ButtonInput<KeyCode>>().clear();
    app.update(); // the transition lands
}

fn start_session(difficulty: Difficulty) -> App {
    let mut app = headless_app();
    let key = match difficulty {
        Difficulty::Trainee => KeyCode::Digit1,
        Difficulty::Pilot => KeyCode::Digit2,
        Difficulty::Commander => KeyCode::Digit3,
    };
    press(&mut app, key);
    assert_eq!(state(&app), GameState::Playing, "difficulty key starts a session");
    app
}

fn tick(app: &mut App) {
    app.world_mut().run_schedule(FixedUpdate);
}

fn state(app: &App) -> GameState {
    *app.world().resource::<State<GameState>>().get()
}

fn score(app: &App) -> u32 {
    app.world().resource::<Score>().0
}

fn count<C: Component>(app: &mut App) -> usize {
    app.world_mut()
        .query_filtered::<(), With<C>>()
        .iter(app.world())
        .count()
}

fn cues(app: &App, cue: SoundCue) -> usize {
    app.world()
        .resource::<Events<SoundCue>>()
        .iter_current_update_events()
        .filter(|sent| **sent == cue)
        .count()
}

fn star_tops(app: &mut App) -> Vec<f32> {
    let world = app.world_mut();
    let mut stars = world.query_filtered::<(Entity, &Bounds), With<Star>>();
    let mut tops: Vec<_> = stars
        .iter(world)
        .map(|(entity, bounds)| (entity, bounds.top()))
        .collect();
    tops.sort_by_key(|(entity, _)| *entity);
    tops.into_iter().map(|(_, top)| top).collect()
}

fn ship_center(app: &mut App) -> Vec2 {
    let world = app.world_mut();
    let mut ships = world.query_filtered::<&Bounds, With<Player>>();
    ships.single(world).center()
}

/// Moves everything of kind `C` far above the screen, out of the ship's reach
fn park<C: Component>(app: &mut App) {
    let world = app.world_mut();
    let mut query = world.query_filtered::<&mut Bounds, With<C>>();
    for mut bounds in query.iter_mut(world) {
        let x = bounds.top_left().x;
        bounds.move_to(Vec2::new(x, -5_000.0));
    }
}

/// Drops one supply onto the ship and returns its point value
fn place_supply_on_ship(app: &mut App, tier: Option<SupplyTier>) -> u32 {
    let center = ship_center(app);
    let world = app.world_mut();
    let mut supplies = world.query::<(&mut Supply, &mut Bounds)>();
    let mut iter = supplies.iter_mut(world);
    let (mut supply, mut bounds) = iter.next().expect("a supply exists");
    if let Some(tier) = tier {
        supply.tier = tier;
    }
    *bounds = Bounds::from_center(center, Vec2::splat(supply.tier.box_side()));
    supply.tier.score()
}

/// Centres `n` planets on the ship
fn place_planets_on_ship(app: &mut App, n: usize) {
    let center = ship_center(app);
    let world = app.world_mut();
    let mut planets = world.query::<(&Planet, &mut Bounds)>();
    for (planet, mut bounds) in planets.iter_mut(world).take(n) {
        *bounds = Bounds::from_center(center, Vec2::splat(planet.radius * 2.0));
    }
}

fn planet_centers(app: &mut App) -> Vec<Vec2> {
    let world = app.world_mut();
    let mut planets = world.query_filtered::<&Bounds, With<Planet>>();
    planets.iter(world).map(Bounds::center).collect()
}

// ── Menu ──────────────────────────────────────────────────────────────────────

#[test]
fn menu_is_shown_first() {
    let mut app = headless_app();
    assert_eq!(state(&app), GameState::Menu, "initial state");
    assert_eq!(
        count::<MenuScreen>(&mut app),
        1 + STAR_COUNT,
        "menu text and its star field"
    );
    assert_eq!(count::<SessionEntity>(&mut app), 0, "no session yet");

    let world = app.world_mut();
    let lines: Vec<String> = world
        .query::<&Text>()
        .iter(world)
        .map(|text| text.0.clone())
        .collect();
    assert!(
        lines.iter().any(|line| line == space_catcher::TITLE),
        "title shown, got {lines:?}"
    );
}

#[test]
fn stars_drift_behind_the_menu() {
    let mut app = headless_app();
    assert_eq!(count::<Star>(&mut app), STAR_COUNT, "menu star field");
    let before = star_tops(&mut app);
    tick(&mut app);
    let after = star_tops(&mut app);
    assert!(
        before
            .iter()
            .zip(&after)
            .all(|(old, new)| new > old || *new == 0.0),
        "every star moved down or wrapped"
    );

    press(&mut app, KeyCode::Digit1);
    assert_eq!(count::<MenuScreen>(&mut app), 0, "menu stars cleared");
    assert_eq!(count::<Star>(&mut app), STAR_COUNT, "only the session's stars");
    let world = app.world_mut();
    let tagged = world
        .query_filtered::<(), (With<Star>, With<SessionEntity>)>()
        .iter(world)
        .count();
    assert_eq!(tagged, STAR_COUNT, "session stars are tagged for cleanup");
}

#[test]
fn unrelated_keys_do_not_start_a_session() {
    let mut app = headless_app();
    press(&mut app, KeyCode::Space);
    press(&mut app, KeyCode::Digit9);
    assert_eq!(state(&app), GameState::Menu, "still choosing");
}

#[test]
fn choosing_a_difficulty_builds_the_session() {
    let mut app = headless_app();
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(KeyCode::Digit2);
    app.update();
    assert_eq!(cues(&app, SoundCue::Select), 1, "select sound requested");

    app.world_mut().resource_mut::<ButtonInput<KeyCode>>().clear();
    app.update();

    assert_eq!(state(&app), GameState::Playing, "session started");
    assert_eq!(
        *app.world().resource::<Settings>(),
        Difficulty::Pilot.settings(),
        "settings replaced wholesale"
    );
    assert_eq!(count::<MenuScreen>(&mut app), 0, "menu cleaned up");
    assert_eq!(count::<Player>(&mut app), 1, "one ship");
    assert_eq!(count::<Supply>(&mut app), 3, "supply pool");
    assert_eq!(count::<Planet>(&mut app), 3, "pilot planets");
    assert_eq!(count::<Star>(&mut app), 50, "star field");
    assert_eq!(score(&app), 0, "fresh score");
}

#[test]
fn keypad_digits_work_too() {
    let mut app = headless_app();
    press(&mut app, KeyCode::Numpad3);
    assert_eq!(state(&app), GameState::Playing, "numpad selects");
    assert_eq!(count::<Planet>(&mut app), 5, "commander planets");
}

// ── Supplies ──────────────────────────────────────────────────────────────────

#[test]
fn catching_a_small_supply_scores_ten() {
    let mut app = start_session(Difficulty::Trainee);
    park::<Planet>(&mut app);
    park::<Supply>(&mut app);
    place_supply_on_ship(&mut app, Some(SupplyTier::Small));

    tick(&mut app);

    assert_eq!(score(&app), 10, "small supply value");
    assert_eq!(count::<Supply>(&mut app), 3, "replacement spawned");
    assert_eq!(cues(&app, SoundCue::Coin), 1, "pickup sound");
}

#[test]
fn several_pickups_in_one_tick_play_one_sound() {
    let mut app = start_session(Difficulty::Trainee);
    park::<Planet>(&mut app);

    let center = ship_center(&mut app);
    let mut expected = 0;
    {
        let world = app.world_mut();
        let mut supplies = world.query::<(&Supply, &mut Bounds)>();
        for (supply, mut bounds) in supplies.iter_mut(world) {
            *bounds = Bounds::from_center(center, Vec2::splat(supply.tier.box_side()));
            expected += supply.tier.score();
        }
    }

    tick(&mut app);

    assert_eq!(score(&app), expected, "every supply scored");
    assert_eq!(count::<Supply>(&mut app), 3, "all replaced");
    assert_eq!(cues(&app, SoundCue::Coin), 1, "one pickup sound per tick");
}

#[test]
fn supply_pool_survives_many_pickups() {
    let mut app = start_session(Difficulty::Commander);
    let mut expected = 0;

    for round in 0..150 {
        park::<Planet>(&mut app);
        park::<Supply>(&mut app);
        expected += place_supply_on_ship(&mut app, None);

        tick(&mut app);

        assert_eq!(count::<Supply>(&mut app), 3, "pool size after pickup {round}");
        assert_eq!(score(&app), expected, "score after pickup {round}");
    }
}

// ── Planets ───────────────────────────────────────────────────────────────────

#[test]
fn planet_population_is_fixed() {
    let mut app = start_session(Difficulty::Commander);
    // No ship, no crash
    let world = app.world_mut();
    let ship = world
        .query_filtered::<Entity, With<Player>>()
        .single(world);
    world.despawn(ship);

    for _ in 0..1_500 {
        tick(&mut app);
        assert_eq!(count::<Planet>(&mut app), 5, "planet count never changes");
    }
    assert_eq!(count::<Supply>(&mut app), 3, "supplies recycle on their own");
    assert_eq!(state(&app), GameState::Playing, "still playing");
}

#[test]
fn trainee_crash_ends_the_session() {
    let mut app = start_session(Difficulty::Trainee);
    assert_eq!(count::<Planet>(&mut app), 1, "trainee has one planet");

    // Bank some points first
    park::<Planet>(&mut app);
    park::<Supply>(&mut app);
    place_supply_on_ship(&mut app, Some(SupplyTier::Small));
    tick(&mut app);
    assert_eq!(score(&app), 10, "points before the crash");

    park::<Supply>(&mut app);
    place_planets_on_ship(&mut app, 1);
    tick(&mut app);

    let planet = planet_centers(&mut app);
    let explosions: Vec<Vec2> = {
        let world = app.world_mut();
        let mut query = world.query::<(&Explosion, &Bounds)>();
        query.iter(world).map(|(_, bounds)| bounds.center()).collect()
    };
    assert_eq!(explosions, planet, "one explosion at the planet centre");
    assert_eq!(cues(&app, SoundCue::Explosion), 1, "explosion sound once");
    assert!(app.world().contains_resource::<CrashPause>(), "pause started");

    // The field stays frozen while the countdown runs
    for _ in 1..CRASH_PAUSE_TICKS {
        tick(&mut app);
    }
    app.update();
    assert_eq!(state(&app), GameState::Playing, "pause not over yet");
    assert_eq!(planet_centers(&mut app), planet, "planet frozen during the pause");
    assert_eq!(score(&app), 10, "no scoring during the pause");

    tick(&mut app);
    app.update();

    assert_eq!(state(&app), GameState::GameOver, "crash leads to game over");
    assert_eq!(
        *app.world().resource::<FinalScore>(),
        FinalScore(10),
        "final score is the score at impact"
    );
    assert_eq!(count::<SessionEntity>(&mut app), 0, "session torn down");
    assert!(!app.world().contains_resource::<CrashPause>(), "pause cleared");
    assert_eq!(count::<GameOverScreen>(&mut app), 1, "game over screen shown");
}

#[test]
fn multi_planet_crash_explodes_each_planet_once() {
    let mut app = start_session(Difficulty::Commander);
    park::<Supply>(&mut app);
    park::<Planet>(&mut app);
    place_planets_on_ship(&mut app, 2);

    tick(&mut app);

    assert_eq!(count::<Explosion>(&mut app), 2, "one explosion per planet hit");
    assert_eq!(cues(&app, SoundCue::Explosion), 1, "single explosion sound");
}

#[test]
fn explosions_keep_animating_during_the_pause() {
    let mut app = start_session(Difficulty::Trainee);
    park::<Supply>(&mut app);
    place_planets_on_ship(&mut app, 1);
    tick(&mut app);

    for _ in 0..12 {
        tick(&mut app);
    }

    let world = app.world_mut();
    let frames: Vec<u32> = world
        .query::<&Explosion>()
        .iter(world)
        .map(|explosion| explosion.frame)
        .collect();
    assert_eq!(frames, [4], "frame advances every three ticks");
}

// ── Full loop ─────────────────────────────────────────────────────────────────

#[test]
fn any_key_returns_to_menu_and_a_new_session_starts_clean() {
    let mut app = start_session(Difficulty::Trainee);
    park::<Supply>(&mut app);
    place_supply_on_ship(&mut app, Some(SupplyTier::Large));
    park::<Planet>(&mut app);
    tick(&mut app);
    assert_eq!(score(&app), 30, "large supply value");

    place_planets_on_ship(&mut app, 1);
    park::<Supply>(&mut app);
    for _ in 0..=CRASH_PAUSE_TICKS {
        tick(&mut app);
    }
    app.update();
    assert_eq!(state(&app), GameState::GameOver, "crashed");

    press(&mut app, KeyCode::KeyX);
    assert_eq!(state(&app), GameState::Menu, "back to the menu");
    assert_eq!(count::<GameOverScreen>(&mut app), 0, "game over screen removed");

    press(&mut app, KeyCode::Digit3);
    assert_eq!(state(&app), GameState::Playing, "second session");
    assert_eq!(score(&app), 0, "score reset");
    assert_eq!(count::<Player>(&mut app), 1, "exactly one ship");
    assert_eq!(count::<Planet>(&mut app), 5, "new difficulty applied");
    assert_eq!(count::<Explosion>(&mut app), 0, "no leftovers from the crash");
}
