//! Visualization plugin - Self-contained plugin pattern
//!
//! Draws the simulation with a 2D camera: one circle mesh per body, fading
//! gizmo trails, and name labels for the larger bodies. Views are respawned
//! whenever a scenario is loaded and synced from the simulation every frame.

use crate::config::RenderingConfig;
use crate::physics::Trail;
use crate::plugins::simulation::SimulationSet;
use crate::prelude::*;

/// Brightness of the newest trail point relative to the body colour
const TRAIL_BRIGHTNESS: f32 = 0.6;

/// Gap between a body's rim and its label
const LABEL_OFFSET: Scalar = 12.0;

const LABEL_FONT_SIZE: f32 = 14.0;

pub struct VisualizationPlugin;

impl Plugin for VisualizationPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_camera);
        app.add_systems(
            Update,
            (
                (respawn_body_visuals, sync_body_transforms)
                    .chain()
                    .in_set(SimulationSet::Sync),
                draw_trails.after(SimulationSet::Sync),
            ),
        );
    }
}

/// Marks the mesh drawn for the body at `index`
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodyVisual {
    pub index: usize,
}

/// Marks the name label following the body at `index`
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodyLabel {
    pub index: usize,
}

pub fn label_visible(radius: Scalar, rendering: &RenderingConfig) -> bool {
    rendering.show_labels && radius > rendering.label_min_radius
}

/// Centre of the label, just below the body
pub fn label_position(body: &Body) -> Vec2 {
    (body.position - Vector::new(0.0, body.radius() + LABEL_OFFSET)).as_vec2()
}

/// Line-strip vertices for a trail, fading from dark (oldest) to the
/// trail brightness (newest)
pub fn trail_gradient(trail: &Trail, color: Color) -> Vec<(Vec2, Color)> {
    let base = color.to_srgba();
    let len = trail.len() as f32;

    trail
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let fade = (i + 1) as f32 / len * TRAIL_BRIGHTNESS;
            let faded = Color::srgb(base.red * fade, base.green * fade, base.blue * fade);
            (point.as_vec2(), faded)
        })
        .collect()
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Name::new("Main Camera"),
        Camera2d,
        Camera {
            clear_color: ClearColorConfig::Custom(Color::BLACK),
            ..default()
        },
    ));
}

#[allow(clippy::too_many_arguments)]
pub fn respawn_body_visuals(
    mut loaded: EventReader<ScenarioLoaded>,
    mut commands: Commands,
    existing: Query<Entity, Or<(With<BodyVisual>, With<BodyLabel>)>>,
    world: Res<SimulationWorld>,
    appearances: Res<BodyAppearances>,
    config: Res<SimulationConfig>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    // Only the latest load matters when several land in one frame
    if loaded.read().last().is_none() {
        return;
    }

    existing.iter().for_each(|entity| {
        commands.entity(entity).despawn();
    });

    for (index, (body, appearance)) in world.bodies().iter().zip(appearances.iter()).enumerate() {
        commands.spawn((
            Name::new(appearance.name.clone()),
            BodyVisual { index },
            Mesh2d(meshes.add(Circle::new(body.radius() as f32))),
            MeshMaterial2d(materials.add(appearance.color)),
            Transform::from_translation(body.position.as_vec2().extend(1.0)),
        ));

        if label_visible(body.radius(), &config.rendering) {
            commands.spawn((
                BodyLabel { index },
                Text2d::new(appearance.name.clone()),
                TextFont {
                    font_size: LABEL_FONT_SIZE,
                    ..default()
                },
                TextColor(appearance.color),
                Transform::from_translation(label_position(body).extend(2.0)),
            ));
        }
    }

    debug!("Spawned visuals for {} bodies", world.bodies().len());
}

pub fn sync_body_transforms(
    world: Res<SimulationWorld>,
    mut visuals: Query<(&BodyVisual, &mut Transform), Without<BodyLabel>>,
    mut labels: Query<(&BodyLabel, &mut Transform), Without<BodyVisual>>,
) {
    for (visual, mut transform) in &mut visuals {
        if let Some(body) = world.body(visual.index) {
            transform.translation = body.position.as_vec2().extend(transform.translation.z);
        }
    }

    for (label, mut transform) in &mut labels {
        if let Some(body) = world.body(label.index) {
            transform.translation = label_position(body).extend(transform.translation.z);
        }
    }
}

fn draw_trails(
    mut gizmos: Gizmos,
    world: Res<SimulationWorld>,
    appearances: Res<BodyAppearances>,
    config: Res<SimulationConfig>,
) {
    if !config.trails.enabled {
        return;
    }

    for (body, appearance) in world.bodies().iter().zip(appearances.iter()) {
        if body.trail().len() > 1 {
            gizmos.linestrip_gradient_2d(trail_gradient(body.trail(), appearance.color));
        }
    }
}
