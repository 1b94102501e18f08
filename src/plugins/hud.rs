//! On-screen text: scenario title, key help, body count, run status and
//! conserved-quantity readouts

use crate::plugins::controls::KEY_BINDINGS;
use crate::plugins::simulation::SimulationSet;
use crate::prelude::*;
use bevy::color::palettes::css;

const TITLE_FONT_SIZE: f32 = 24.0;
const LINE_FONT_SIZE: f32 = 18.0;

pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_hud);
        app.add_systems(
            Update,
            (
                update_title.run_if(resource_changed::<ActiveScenario>),
                update_body_count,
                update_status,
                update_diagnostics,
            )
                .in_set(SimulationSet::UI),
        );
    }
}

#[derive(Component)]
pub struct HudTitle;

#[derive(Component)]
pub struct HudBodyCount;

#[derive(Component)]
pub struct HudStatus;

#[derive(Component)]
pub struct HudDiagnostics;

pub fn status_line(state: &AppState) -> String {
    match state {
        AppState::Running => "Status: RUNNING".to_string(),
        AppState::Paused => "Status: PAUSED".to_string(),
    }
}

pub fn status_color(state: &AppState) -> Color {
    match state {
        AppState::Running => Color::WHITE,
        AppState::Paused => css::YELLOW.into(),
    }
}

pub fn body_count_line(simulation: &Simulation) -> String {
    format!("Bodies: {}", simulation.bodies().len())
}

pub fn diagnostics_line(simulation: &Simulation) -> String {
    let momentum = simulation.total_momentum();
    format!(
        "t = {:.2}s  p = ({:.1}, {:.1})  KE = {:.3e}",
        simulation.elapsed(),
        momentum.x,
        momentum.y,
        simulation.kinetic_energy()
    )
}

fn line_font() -> TextFont {
    TextFont {
        font_size: LINE_FONT_SIZE,
        ..default()
    }
}

fn spawn_hud(mut commands: Commands) {
    commands
        .spawn((
            Name::new("HUD"),
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(10.0),
                left: Val::Px(10.0),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(2.0),
                ..default()
            },
        ))
        .with_children(|parent| {
            parent.spawn((
                HudTitle,
                Text::new(""),
                TextFont {
                    font_size: TITLE_FONT_SIZE,
                    ..default()
                },
                TextColor(css::YELLOW.into()),
            ));

            for (key, action) in KEY_BINDINGS {
                parent.spawn((
                    Text::new(format!("{key} - {action}")),
                    line_font(),
                    TextColor(Color::WHITE),
                ));
            }

            parent.spawn((HudBodyCount, Text::new(""), line_font(), TextColor(Color::WHITE)));
            parent.spawn((HudStatus, Text::new(""), line_font(), TextColor(Color::WHITE)));
            parent.spawn((
                HudDiagnostics,
                Text::new(""),
                line_font(),
                TextColor(css::LIGHT_GRAY.into()),
            ));
        });
}

fn update_title(active: Res<ActiveScenario>, mut titles: Query<&mut Text, With<HudTitle>>) {
    for mut text in &mut titles {
        text.0 = active.title().to_string();
    }
}

fn update_body_count(
    world: Res<SimulationWorld>,
    mut counts: Query<&mut Text, With<HudBodyCount>>,
) {
    for mut text in &mut counts {
        text.0 = body_count_line(&world);
    }
}

fn update_status(
    state: Res<State<AppState>>,
    mut statuses: Query<(&mut Text, &mut TextColor), With<HudStatus>>,
) {
    for (mut text, mut color) in &mut statuses {
        text.0 = status_line(state.get());
        color.0 = status_color(state.get());
    }
}

fn update_diagnostics(
    world: Res<SimulationWorld>,
    mut readouts: Query<&mut Text, With<HudDiagnostics>>,
) {
    for mut text in &mut readouts {
        text.0 = diagnostics_line(&world);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugins::simulation::SimulationPlugin;
    use crate::test_utils::{create_test_app, moving_body};

    #[test]
    fn test_status_lines() {
        assert_eq!(status_line(&AppState::Running), "Status: RUNNING");
        assert_eq!(status_line(&AppState::Paused), "Status: PAUSED");
        assert_ne!(
            status_color(&AppState::Running),
            status_color(&AppState::Paused)
        );
    }

    #[test]
    fn test_readouts() {
        let simulation = Simulation::new(
            SimulationParams::default(),
            vec![moving_body(Vector::ZERO, Vector::new(3.0, 0.0), 1.0, 2.0)],
        );

        assert_eq!(body_count_line(&simulation), "Bodies: 1");
        assert_eq!(
            diagnostics_line(&simulation),
            "t = 0.00s  p = (6.0, 0.0)  KE = 9.000e0"
        );
    }

    #[test]
    fn test_hud_tracks_simulation() {
        let mut config = SimulationConfig::default();
        config.scenario.initial = ScenarioKind::ThreeBody;

        let mut app = create_test_app();
        app.add_plugins((SimulationPlugin::new(config), HudPlugin));
        app.update();

        let title = app
            .world_mut()
            .query_filtered::<&Text, With<HudTitle>>()
            .single(app.world())
            .unwrap()
            .0
            .clone();
        assert_eq!(title, "Three Body Problem");

        let count = app
            .world_mut()
            .query_filtered::<&Text, With<HudBodyCount>>()
            .single(app.world())
            .unwrap()
            .0
            .clone();
        assert_eq!(count, "Bodies: 3");
    }
}
