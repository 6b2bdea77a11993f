use bevy::prelude::*;

/// Despawns every entity tagged with `T`, children included.
///
/// Register it on the `OnExit` of whichever state owns the tagged entities.
pub fn despawn_all<T: Component>(mut commands: Commands, query: Query<Entity, With<T>>) {
    for entity in &query {
        commands.entity(entity).despawn_recursive();
    }
}
