use bevy::prelude::*;
use game_helpers::cleanup::despawn_all;

use crate::collision::{Bounds, bounding_radius, circles_collide};
use crate::core::config::{CRASH_PAUSE_TICKS, STAR_COUNT, SUPPLY_COUNT, TICK_RATE};
use crate::core::{FinalScore, GameState, Score, SessionEntity, SoundCue};
use crate::difficulty::Settings;
use crate::effects::{animate_explosions, explosion_bundle, fade_sparkles, sparkle_burst};
use crate::falling::{
    Planet, Supply, drift_stars, fall_planets, fall_supplies, planet_bundle, star_bundle,
    supply_bundle,
};
use crate::player::{Player, fly_player, player_bundle};

/// Freezes the play field after a crash. Counts down on the fixed clock while
/// the explosions play out.
#[derive(Resource, Debug)]
pub struct CrashPause {
    pub ticks_left: u32,
    /// Score at the moment of impact
    pub final_score: u32,
}

/// The whole simulation: session setup and teardown, entity updates,
/// collisions and the crash countdown. Needs no window, renderer or audio.
pub struct GameplayPlugin;

impl Plugin for GameplayPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_resource::<Score>()
            .init_resource::<FinalScore>()
            .init_resource::<Settings>()
            .add_event::<SoundCue>()
            .insert_resource(Time::<Fixed>::from_hz(TICK_RATE))
            .add_systems(OnEnter(GameState::Playing), spawn_session)
            .add_systems(
                FixedUpdate,
                (
                    count_down_crash.run_if(resource_exists::<CrashPause>),
                    (
                        fly_player,
                        fall_supplies,
                        fall_planets,
                        drift_stars,
                        collect_supplies,
                        detect_planet_hits,
                    )
                        .chain()
                        .run_if(not(resource_exists::<CrashPause>)),
                    (animate_explosions, fade_sparkles),
                )
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            )
            .add_systems(
                OnExit(GameState::Playing),
                (despawn_all::<SessionEntity>, end_crash_pause),
            );
    }
}

fn spawn_session(mut commands: Commands, settings: Res<Settings>, mut score: ResMut<Score>) {
    score.0 = 0;

    for _ in 0..STAR_COUNT {
        commands.spawn((star_bundle(), SessionEntity));
    }
    commands.spawn(player_bundle());
    for _ in 0..SUPPLY_COUNT {
        commands.spawn(supply_bundle(&settings));
    }
    for _ in 0..settings.planet_count {
        commands.spawn(planet_bundle(&settings));
    }

    info!(
        "Session started: {} supplies, {} planets, ship speed {}",
        SUPPLY_COUNT, settings.planet_count, settings.player_speed
    );
}

/// Every supply the ship touches is scored and swapped for a brand new one,
/// so the population never changes. One pickup sound per tick at most.
fn collect_supplies(
    mut commands: Commands,
    settings: Res<Settings>,
    mut score: ResMut<Score>,
    mut sounds: EventWriter<SoundCue>,
    ships: Query<&Bounds, With<Player>>,
    supplies: Query<(Entity, &Bounds, &Supply)>,
) {
    let Ok(ship) = ships.get_single() else {
        return;
    };

    let mut collected = false;
    for (entity, bounds, supply) in &supplies {
        if !ship.overlaps(bounds) {
            continue;
        }
        score.0 += supply.tier.score();
        sparkle_burst(&mut commands, bounds.center(), supply.tier.color());
        commands.entity(entity).despawn_recursive();
        commands.spawn(supply_bundle(&settings));
        collected = true;
    }

    if collected {
        sounds.send(SoundCue::Coin);
    }
}

/// Planets are never moved or removed by a hit. Each one touching the ship
/// gets its own explosion, and the crash pause starts.
fn detect_planet_hits(
    mut commands: Commands,
    score: Res<Score>,
    mut sounds: EventWriter<SoundCue>,
    ships: Query<&Bounds, With<Player>>,
    planets: Query<(&Bounds, &Planet)>,
) {
    let Ok(ship) = ships.get_single() else {
        return;
    };
    let ship_center = ship.center();
    let ship_radius = bounding_radius(ship.size());

    let mut hits = 0;
    for (bounds, planet) in &planets {
        if circles_collide(ship_center, ship_radius, bounds.center(), planet.radius) {
            commands.spawn(explosion_bundle(bounds.center(), planet.radius * 2.0));
            hits += 1;
        }
    }
    if hits == 0 {
        return;
    }

    sounds.send(SoundCue::Explosion);
    info!("Ship destroyed by {hits} planet(s), final score {}", score.0);
    commands.insert_resource(CrashPause {
        ticks_left: CRASH_PAUSE_TICKS,
        final_score: score.0,
    });
}

// The pause outlives the countdown until the state change lands, so the
// simulation stays frozen on that last tick.
fn count_down_crash(
    mut pause: ResMut<CrashPause>,
    mut final_score: ResMut<FinalScore>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if pause.ticks_left == 0 {
        return;
    }
    pause.ticks_left -= 1;
    if pause.ticks_left == 0 {
        final_score.0 = pause.final_score;
        next_state.set(GameState::GameOver);
    }
}

fn end_crash_pause(mut commands: Commands) {
    commands.remove_resource::<CrashPause>();
}
