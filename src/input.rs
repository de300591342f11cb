use crate::camera::MainCamera;
use crate::simulation::{PredatorClick, Simulation};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_egui::EguiContexts;

/// System to turn left clicks on the drawing area into predator clicks
pub fn forward_clicks(
    mouse_button: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    camera_query: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    mut contexts: EguiContexts,
    simulation: Res<Simulation>,
    mut clicks: EventWriter<PredatorClick>,
) {
    if !mouse_button.just_pressed(MouseButton::Left) {
        return;
    }

    // Clicks on the control windows are not meant for the moths
    if contexts.ctx_mut().is_pointer_over_area() {
        return;
    }

    let (Ok(window), Ok((camera, camera_transform))) =
        (windows.get_single(), camera_query.get_single())
    else {
        return;
    };

    if let Some(cursor_pos) = window.cursor_position() {
        if let Ok(world_pos) = camera.viewport_to_world_2d(camera_transform, cursor_pos) {
            clicks.send(PredatorClick {
                position: simulation.area().from_world(world_pos),
            });
        }
    }
}
