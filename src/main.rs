use bevy::log::{Level, LogPlugin};
use bevy::prelude::*;
use bevy::window::WindowResolution;
use clap::Parser;
use gravitas::cli::{self, Args, CliError};
use gravitas::plugins::{ControlsPlugin, HudPlugin, SimulationPlugin, VisualizationPlugin};

fn main() -> Result<(), CliError> {
    let args = Args::parse();

    if args.list_integrators {
        cli::handle_list_integrators();
        return Ok(());
    }

    if args.list_scenarios {
        cli::handle_list_scenarios();
        return Ok(());
    }

    let config = cli::load_and_apply_config(&args)?;

    let level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let window = Window {
        title: "Gravitas".to_string(),
        resolution: WindowResolution::new(
            config.rendering.window_width,
            config.rendering.window_height,
        ),
        ..default()
    };

    let mut app = App::new();

    app.add_plugins(
        DefaultPlugins
            .set(LogPlugin {
                level,
                ..default()
            })
            .set(WindowPlugin {
                primary_window: Some(window),
                ..default()
            }),
    );

    app.add_plugins((
        SimulationPlugin::new(config),
        ControlsPlugin,
        VisualizationPlugin,
        HudPlugin,
    ));

    app.run();

    Ok(())
}
