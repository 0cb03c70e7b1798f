use bevy::prelude::*;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Viewport>()
            .add_systems(Startup, setup_camera)
            .add_systems(Update, update_viewport);
    }
}

/// Logical size of the primary window
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
        }
    }
}

impl Viewport {
    /// Font size for the main balance spinner at this window size
    pub fn spinner_font_size(&self) -> f32 {
        (self.height * 0.06).round().clamp(16.0, 96.0)
    }

    /// Font size for the compact header spinner
    pub fn compact_font_size(&self) -> f32 {
        (self.spinner_font_size() * 0.5).round().max(12.0)
    }
}

#[derive(Component)]
pub struct MainCamera;

/// The whole app is UI, so a plain 2D camera is enough
fn setup_camera(mut commands: Commands) {
    commands.spawn((Camera2d, MainCamera));
}

/// Update the viewport resource when the window is resized
fn update_viewport(mut viewport: ResMut<Viewport>, windows: Query<&Window>) {
    if let Ok(window) = windows.single() {
        let (width, height) = (window.width(), window.height());

        // Only update if the size actually changed
        if (width - viewport.width).abs() > 0.5 || (height - viewport.height).abs() > 0.5 {
            viewport.width = width;
            viewport.height = height;
            debug!("Viewport resized: {}x{}", width, height);
        }
    }
}
