use bevy::prelude::*;

pub struct InputPlugin;
impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<DisplayAction>()
            .add_systems(Update, collect_display_actions);
    }
}

/// Something the user asked the display to do
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayAction {
    ToggleAnimateNumbers,
    CycleVariant,
    ToggleUnitAlignment,
    ToggleVisualMode,
    ToggleSystemLanguage,
    CycleNodeType,
    /// Show the `-` loading placeholder until the next value arrives
    ShowPlaceholder,
}

/// Keyboard shortcuts, in the order they are listed on screen
pub const KEY_BINDINGS: [(KeyCode, DisplayAction, &str); 7] = [
    (KeyCode::KeyA, DisplayAction::ToggleAnimateNumbers, "A animate"),
    (KeyCode::KeyV, DisplayAction::CycleVariant, "V variant"),
    (KeyCode::KeyB, DisplayAction::ToggleUnitAlignment, "B unit alignment"),
    (KeyCode::KeyM, DisplayAction::ToggleVisualMode, "M visual mode"),
    (KeyCode::KeyL, DisplayAction::ToggleSystemLanguage, "L system language"),
    (KeyCode::KeyN, DisplayAction::CycleNodeType, "N node type"),
    (KeyCode::KeyP, DisplayAction::ShowPlaceholder, "P placeholder"),
];

fn collect_display_actions(keys: Res<ButtonInput<KeyCode>>, mut out: MessageWriter<DisplayAction>) {
    for (key, action, _) in KEY_BINDINGS {
        if keys.just_pressed(key) {
            out.write(action);
        }
    }
}
