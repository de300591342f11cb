use crate::config::MOTH_RADIUS;
use crate::moth::Coloration;
use crate::simulation::{Background, Simulation};
use bevy::prelude::*;

/// Fill color of a moth as sRGB bytes
pub fn moth_rgb(coloration: Coloration) -> [u8; 3] {
    match coloration {
        Coloration::Light => [0xD9, 0xCA, 0xB3],
        Coloration::Dark => [0x4B, 0x3F, 0x3F],
    }
}

/// Background brightness as a gray level; out-of-range values are clamped for display only
pub fn background_gray(brightness: i32) -> u8 {
    brightness.clamp(0, 255) as u8
}

/// Marker for the mesh entities drawn for the current population
#[derive(Component)]
pub struct MothVisual;

/// Marker for the rectangle behind the moths
#[derive(Component)]
pub struct AreaBackdrop;

/// Shared meshes and materials for drawing moths
#[derive(Resource)]
pub struct MothAssets {
    body: Handle<Mesh>,
    outline: Handle<Mesh>,
    light: Handle<ColorMaterial>,
    dark: Handle<ColorMaterial>,
    outline_material: Handle<ColorMaterial>,
    backdrop: Handle<ColorMaterial>,
}

impl MothAssets {
    fn material(&self, coloration: Coloration) -> Handle<ColorMaterial> {
        match coloration {
            Coloration::Light => self.light.clone(),
            Coloration::Dark => self.dark.clone(),
        }
    }
}

/// System to create the drawing assets and the area backdrop
pub fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    simulation: Res<Simulation>,
    background: Res<Background>,
) {
    let color = |rgb: [u8; 3]| ColorMaterial::from_color(Color::srgb_u8(rgb[0], rgb[1], rgb[2]));
    let gray = background_gray(background.brightness);

    let assets = MothAssets {
        body: meshes.add(Circle::new(MOTH_RADIUS)),
        outline: meshes.add(Circle::new(MOTH_RADIUS + 1.0)),
        light: materials.add(color(moth_rgb(Coloration::Light))),
        dark: materials.add(color(moth_rgb(Coloration::Dark))),
        outline_material: materials.add(ColorMaterial::from_color(Color::BLACK)),
        backdrop: materials.add(color([gray, gray, gray])),
    };

    let area = simulation.area();
    commands.spawn((
        AreaBackdrop,
        Mesh2d(meshes.add(Rectangle::new(area.width, area.height))),
        MeshMaterial2d(assets.backdrop.clone()),
        Transform::from_xyz(0.0, 0.0, -1.0),
    ));

    commands.insert_resource(assets);
}

/// System to recolor the backdrop when the background brightness changes
pub fn update_backdrop(
    background: Res<Background>,
    assets: Res<MothAssets>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    if !background.is_changed() {
        return;
    }
    if let Some(material) = materials.get_mut(&assets.backdrop) {
        let gray = background_gray(background.brightness);
        material.color = Color::srgb_u8(gray, gray, gray);
    }
}

/// System to redraw every moth whenever the simulation reports a visible change
pub fn redraw_moths(
    mut commands: Commands,
    simulation: Res<Simulation>,
    assets: Res<MothAssets>,
    visuals: Query<Entity, With<MothVisual>>,
) {
    if !simulation.is_changed() {
        return;
    }

    for entity in visuals.iter() {
        commands.entity(entity).despawn();
    }

    let area = simulation.area();
    for (i, moth) in simulation.moths().iter().enumerate() {
        let world = area.to_world(moth.position);
        // Later moths draw on top, matching population order
        let z = i as f32 * 0.01;

        commands.spawn((
            MothVisual,
            Mesh2d(assets.outline.clone()),
            MeshMaterial2d(assets.outline_material.clone()),
            Transform::from_xyz(world.x, world.y, z),
        ));
        commands.spawn((
            MothVisual,
            Mesh2d(assets.body.clone()),
            MeshMaterial2d(assets.material(moth.coloration)),
            Transform::from_xyz(world.x, world.y, z + 0.005),
        ));
    }
}
