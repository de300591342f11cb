use bevy::prelude::*;
use bevy_egui::EguiPlugin;
use peppered_moths::{PresentationPlugin, Simulation, SimulationConfig, SimulationPlugin};

fn main() -> AppExit {
    let simulation = match Simulation::new(SimulationConfig::default()) {
        Ok(simulation) => simulation,
        Err(err) => {
            eprintln!("Invalid simulation config: {err}");
            return AppExit::error();
        }
    };

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Peppered Moth Camouflage".to_string(),
                resolution: (1280.0, 760.0).into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin)
        .add_plugins(SimulationPlugin::new(simulation))
        .add_plugins(PresentationPlugin)
        .run()
}
