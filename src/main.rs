use bevy::log::LogPlugin;
use bevy::prelude::*;

mod backend;
mod camera;
mod demo;
mod input;
mod settings;
mod spinner;

use bevy::window::WindowResolution;
use camera::CameraPlugin;
use demo::DemoPlugin;
use input::InputPlugin;
use settings::SettingsPlugin;
use spinner::SpinnerPlugin;

fn main() {
    let mut app = App::new();

    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Char Spinner".into(),
                    resolution: WindowResolution::new(1280, 720),
                    resizable: true,
                    ..default()
                }),
                ..default()
            })
            .set(LogPlugin {
                filter: "wgpu=error,naga=warn,char_spinner=debug".into(),
                ..default()
            }),
    )
    .add_plugins(CameraPlugin)
    .add_plugins(InputPlugin)
    .add_plugins(SettingsPlugin)
    .add_plugins(SpinnerPlugin)
    .add_plugins(DemoPlugin);

    app.run();
}
