//! Rendering for the simulation. Shapes are attached as child meshes when an
//! entity first appears, and transforms follow the screen-space [`Bounds`].

use bevy::prelude::*;

use crate::collision::Bounds;
use crate::core::config::PLAYER_SIZE;
use crate::core::{GameState, Score, SessionEntity, palette, to_world};
use crate::effects::{Explosion, Sparkle};
use crate::falling::{Planet, Star, Supply};
use crate::player::Player;

/// Score overlay shown while playing
#[derive(Component)]
pub struct ScoreText;

/// Exhaust under the ship, stretched vertically to the flame length
#[derive(Component)]
pub struct Flame;

pub struct VisualsPlugin;

impl Plugin for VisualsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Playing), spawn_score_text)
            .add_systems(Update, dress_stars)
            .add_systems(
                Update,
                (
                    dress_player,
                    dress_supplies,
                    dress_planets,
                    dress_explosions,
                    dress_sparkles,
                    update_score_text,
                )
                    .run_if(in_state(GameState::Playing)),
            )
            .add_systems(
                PostUpdate,
                (sync_positions, stretch_flames, grow_explosions, fade_sparkle_sprites)
                    .before(TransformSystem::TransformPropagate),
            );
    }
}

fn spawn_score_text(mut commands: Commands) {
    commands.spawn((
        Text::new("Score: 0"),
        TextFont {
            font_size: 30.0,
            ..default()
        },
        TextColor(palette::WHITE),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(20.0),
            top: Val::Px(20.0),
            ..default()
        },
        ScoreText,
        SessionEntity,
    ));
}

fn update_score_text(score: Res<Score>, mut query: Query<&mut Text, With<ScoreText>>) {
    if !score.is_changed() {
        return;
    }
    for mut text in &mut query {
        text.0 = format!("Score: {}", score.0);
    }
}

fn dress_stars(mut commands: Commands, stars: Query<(Entity, &Star), Added<Star>>) {
    for (entity, star) in &stars {
        commands.entity(entity).insert(Sprite::from_color(
            palette::WHITE.with_alpha(star.alpha),
            Vec2::splat(star.size),
        ));
    }
}

// Screen offset inside the ship's box to a position relative to its centre
fn ship_local(x: f32, y: f32) -> Vec2 {
    Vec2::new(x - PLAYER_SIZE.x / 2.0, PLAYER_SIZE.y / 2.0 - y)
}

fn dress_player(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    ships: Query<Entity, Added<Player>>,
) {
    for ship in &ships {
        let wings = Triangle2d::new(
            ship_local(0.0, 60.0),
            ship_local(50.0, 60.0),
            ship_local(25.0, 30.0),
        );
        let outline = Triangle2d::new(
            ship_local(25.0, -2.0),
            ship_local(8.0, 56.0),
            ship_local(42.0, 56.0),
        );
        let hull = Triangle2d::new(
            ship_local(25.0, 0.0),
            ship_local(10.0, 55.0),
            ship_local(40.0, 55.0),
        );
        // Unit height, pointing down; scaled to the flame length every frame
        let flame = Triangle2d::new(
            Vec2::new(-10.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(0.0, -1.0),
        );

        let parts = [
            (meshes.add(wings), palette::GRAY, Vec3::ZERO),
            (meshes.add(outline), palette::WHITE, Vec3::Z * 0.1),
            (meshes.add(hull), palette::BLUE, Vec3::Z * 0.2),
            (
                meshes.add(Ellipse::new(5.0, 10.0)),
                palette::CYAN,
                ship_local(25.0, 30.0).extend(0.3),
            ),
        ];

        commands.entity(ship).with_children(|parent| {
            for (mesh, color, offset) in parts {
                parent.spawn((
                    Mesh2d(mesh),
                    MeshMaterial2d(materials.add(ColorMaterial::from(color))),
                    Transform::from_translation(offset),
                ));
            }
            parent.spawn((
                Mesh2d(meshes.add(flame)),
                MeshMaterial2d(materials.add(ColorMaterial::from(palette::ORANGE))),
                Transform::from_translation(ship_local(25.0, 55.0).extend(-0.1)),
                Flame,
            ));
        });
    }
}

fn dress_supplies(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    supplies: Query<(Entity, &Supply), Added<Supply>>,
) {
    for (entity, supply) in &supplies {
        let radius = supply.tier.radius();
        let arm = radius.mul_add(2.0, -6.0);

        let glow = meshes.add(Circle::new(radius + 2.0));
        let body = meshes.add(Circle::new(radius));
        commands.entity(entity).with_children(|parent| {
            parent.spawn((
                Mesh2d(glow),
                MeshMaterial2d(materials.add(ColorMaterial::from(palette::GLOW))),
                Transform::default(),
            ));
            parent.spawn((
                Mesh2d(body),
                MeshMaterial2d(materials.add(ColorMaterial::from(supply.tier.color()))),
                Transform::from_xyz(0.0, 0.0, 0.1),
            ));
            for size in [Vec2::new(arm, 3.0), Vec2::new(3.0, arm)] {
                parent.spawn((
                    Sprite::from_color(palette::WHITE, size),
                    Transform::from_xyz(0.0, 0.0, 0.2),
                ));
            }
        });
    }
}

fn dress_planets(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    planets: Query<(Entity, &Planet), Added<Planet>>,
) {
    for (entity, planet) in &planets {
        let body = meshes.add(Circle::new(planet.radius));
        let rim = meshes.add(Annulus::new(planet.radius - 2.0, planet.radius));
        let craters = [
            (meshes.add(Circle::new(10.0)), Vec3::new(-15.0, 15.0, 0.1)),
            (meshes.add(Circle::new(15.0)), Vec3::new(20.0, -10.0, 0.1)),
        ];

        commands.entity(entity).with_children(|parent| {
            parent.spawn((
                Mesh2d(body),
                MeshMaterial2d(materials.add(ColorMaterial::from(planet.tint))),
                Transform::default(),
            ));
            for (crater, offset) in craters {
                parent.spawn((
                    Mesh2d(crater),
                    MeshMaterial2d(materials.add(ColorMaterial::from(palette::CRATER))),
                    Transform::from_translation(offset),
                ));
            }
            // Warning rim
            parent.spawn((
                Mesh2d(rim),
                MeshMaterial2d(materials.add(ColorMaterial::from(palette::RED))),
                Transform::from_xyz(0.0, 0.0, 0.2),
            ));
        });
    }
}

fn dress_explosions(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    explosions: Query<Entity, Added<Explosion>>,
) {
    for entity in &explosions {
        commands.entity(entity).insert((
            Mesh2d(meshes.add(Circle::new(1.0))),
            MeshMaterial2d(materials.add(ColorMaterial::from(palette::ORANGE))),
        ));
    }
}

fn dress_sparkles(mut commands: Commands, sparkles: Query<(Entity, &Sparkle), Added<Sparkle>>) {
    for (entity, sparkle) in &sparkles {
        commands
            .entity(entity)
            .insert(Sprite::from_color(sparkle.color, Vec2::splat(sparkle.size)));
    }
}

fn sync_positions(mut query: Query<(&Bounds, &mut Transform), Changed<Bounds>>) {
    for (bounds, mut transform) in &mut query {
        let position = to_world(bounds.center());
        transform.translation.x = position.x;
        transform.translation.y = position.y;
    }
}

fn stretch_flames(
    ships: Query<(&Player, &Children), Changed<Player>>,
    mut flames: Query<&mut Transform, With<Flame>>,
) {
    for (player, children) in &ships {
        for &child in children.iter() {
            if let Ok(mut transform) = flames.get_mut(child) {
                transform.scale.y = player.flame_length;
            }
        }
    }
}

fn grow_explosions(mut query: Query<(&Explosion, &mut Transform), Changed<Explosion>>) {
    for (explosion, mut transform) in &mut query {
        // A zero scale would collapse the mesh bounds
        let radius = explosion.radius().max(0.01);
        transform.scale = Vec3::new(radius, radius, 1.0);
    }
}

fn fade_sparkle_sprites(mut query: Query<(&Sparkle, &mut Sprite), Changed<Sparkle>>) {
    for (sparkle, mut sprite) in &mut query {
        sprite.color = sparkle.color.with_alpha(sparkle.life.max(0.0));
        sprite.custom_size = Some(Vec2::splat(sparkle.size));
    }
}
