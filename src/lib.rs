//! Peppered moth camouflage: moths are periodically judged against a tunable
//! background brightness, survivors breed the next generation with a chance
//! of mutation, and the light/dark split is charted over time.

pub mod camera;
pub mod config;
pub mod cycle;
pub mod error;
pub mod input;
pub mod moth;
pub mod population;
pub mod render;
pub mod reproduction;
pub mod selection;
pub mod simulation;
pub mod ui;

use bevy::prelude::*;

pub use config::SimulationConfig;
pub use error::ConfigError;
pub use simulation::{Simulation, SimulationPlugin};

/// Window, drawing and controls. Needs `DefaultPlugins`, `EguiPlugin` and
/// [`SimulationPlugin`].
pub struct PresentationPlugin;

impl Plugin for PresentationPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(Color::srgb(0.93, 0.93, 0.93)))
            .add_systems(Startup, (camera::setup_camera, render::setup_scene))
            .add_systems(
                Update,
                (
                    // Input surface, read before the core systems
                    input::forward_clicks.before(simulation::handle_predator_clicks),
                    ui::controls_ui.before(simulation::handle_reset_requests),
                    // Presentation surface, after the core has settled this frame
                    (render::update_backdrop, render::redraw_moths)
                        .after(simulation::advance_simulation),
                    ui::history_chart_ui,
                ),
            );
    }
}
