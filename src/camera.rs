use bevy::prelude::*;

#[derive(Component)]
pub struct MainCamera;

/// Fixed 2D camera centred on the drawing area
pub fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        MainCamera,
        Transform::from_xyz(0.0, 0.0, 0.0),
    ));
}
