//! Visual mode switch.
//!
//! Flipping the switch applies the new state right away, queues
//! `set_visual_mode`, and locks the switch until the visuals report back. If
//! they fail to load (or unload) the flag is put back.

use bevy::prelude::*;

use crate::backend::CommandOutbox;
use crate::backend::commands::SetVisualMode;

use super::config::DisplaySettings;

/// Result of applying a visual mode change
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisualModeOutcome {
    pub enabled: bool,
    pub ok: bool,
}

/// Switch state that is not persisted
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct VisualModeToggle {
    /// A change is in flight; further flips are ignored
    pub loading: bool,
    /// Visuals cannot run on this machine; the switch is disabled
    pub unsupported: bool,
}

impl VisualModeToggle {
    /// Flip visual mode. Returns false when the switch is disabled.
    pub fn request(&mut self, settings: &mut DisplaySettings, outbox: &mut CommandOutbox) -> bool {
        if self.loading || self.unsupported {
            return false;
        }
        settings.visual_mode = !settings.visual_mode;
        self.loading = true;
        outbox.push(&SetVisualMode {
            enabled: settings.visual_mode,
        });
        true
    }

    /// Settle an in-flight change, reverting it on failure
    pub fn resolve(&mut self, settings: &mut DisplaySettings, outcome: VisualModeOutcome) {
        self.loading = false;
        if !outcome.ok && settings.visual_mode == outcome.enabled {
            settings.visual_mode = !outcome.enabled;
        }
    }
}

const VISUAL_BACKGROUND: Color = Color::srgb(0.06, 0.07, 0.16);
const PLAIN_BACKGROUND: Color = Color::srgb(0.04, 0.04, 0.05);

/// Stand-in for the background visuals: tint the clear color and report back
pub fn apply_visual_mode(
    settings: Res<DisplaySettings>,
    toggle: Res<VisualModeToggle>,
    clear_color: Option<ResMut<ClearColor>>,
    mut outcomes: MessageWriter<VisualModeOutcome>,
) {
    if !settings.is_changed() {
        return;
    }

    let ok = match clear_color {
        Some(mut clear_color) => {
            clear_color.0 = if settings.visual_mode {
                VISUAL_BACKGROUND
            } else {
                PLAIN_BACKGROUND
            };
            true
        }
        None => false,
    };

    if toggle.loading {
        outcomes.write(VisualModeOutcome {
            enabled: settings.visual_mode,
            ok,
        });
    }
}

pub fn resolve_visual_mode(
    mut outcomes: MessageReader<VisualModeOutcome>,
    mut toggle: ResMut<VisualModeToggle>,
    mut settings: ResMut<DisplaySettings>,
) {
    for outcome in outcomes.read() {
        if outcome.ok {
            info!("Visual mode {}", if outcome.enabled { "on" } else { "off" });
        } else {
            warn!("Could not switch visual mode to {}, reverting", outcome.enabled);
        }
        toggle.resolve(&mut settings, *outcome);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_flips_and_queues() {
        let mut toggle = VisualModeToggle::default();
        let mut settings = DisplaySettings::default();
        let mut outbox = CommandOutbox::default();

        assert!(toggle.request(&mut settings, &mut outbox));
        assert!(!settings.visual_mode);
        assert!(toggle.loading);

        let sent = outbox.drain();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].command, "set_visual_mode");
        assert_eq!(
            sent[0].payload.as_ref().and_then(|p| p.get("enabled")),
            Some(&serde_json::Value::Bool(false))
        );
    }

    #[test]
    fn test_request_ignored_while_loading() {
        let mut toggle = VisualModeToggle::default();
        let mut settings = DisplaySettings::default();
        let mut outbox = CommandOutbox::default();

        toggle.request(&mut settings, &mut outbox);
        assert!(!toggle.request(&mut settings, &mut outbox));
        assert!(!settings.visual_mode);
        assert_eq!(outbox.len(), 1);
    }

    #[test]
    fn test_request_ignored_when_unsupported() {
        let mut toggle = VisualModeToggle {
            unsupported: true,
            ..Default::default()
        };
        let mut settings = DisplaySettings::default();
        let mut outbox = CommandOutbox::default();

        assert!(!toggle.request(&mut settings, &mut outbox));
        assert!(settings.visual_mode);
        assert!(outbox.is_empty());
    }

    #[test]
    fn test_failure_reverts() {
        let mut toggle = VisualModeToggle::default();
        let mut settings = DisplaySettings::default();
        let mut outbox = CommandOutbox::default();

        toggle.request(&mut settings, &mut outbox);
        toggle.resolve(
            &mut settings,
            VisualModeOutcome {
                enabled: false,
                ok: false,
            },
        );
        assert!(settings.visual_mode);
        assert!(!toggle.loading);
    }

    #[test]
    fn test_success_keeps_new_state() {
        let mut toggle = VisualModeToggle::default();
        let mut settings = DisplaySettings::default();
        let mut outbox = CommandOutbox::default();

        toggle.request(&mut settings, &mut outbox);
        toggle.resolve(
            &mut settings,
            VisualModeOutcome {
                enabled: false,
                ok: true,
            },
        );
        assert!(!settings.visual_mode);
        assert!(toggle.request(&mut settings, &mut outbox));
        assert!(settings.visual_mode);
    }

    fn visual_mode_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .add_message::<VisualModeOutcome>()
            .insert_resource(DisplaySettings::default())
            .init_resource::<VisualModeToggle>()
            .add_systems(Update, (apply_visual_mode, resolve_visual_mode).chain());
        app.update();
        app
    }

    /// Flip the switch from outside the systems, the way a key press would
    fn flip(app: &mut App) {
        let mut settings = app.world().resource::<DisplaySettings>().clone();
        let mut toggle = app.world().resource::<VisualModeToggle>().clone();
        let mut outbox = CommandOutbox::default();
        assert!(toggle.request(&mut settings, &mut outbox));
        app.insert_resource(settings).insert_resource(toggle);
    }

    #[test]
    fn test_missing_background_reverts_and_unlocks() {
        let mut app = visual_mode_app();

        flip(&mut app);
        assert!(!app.world().resource::<DisplaySettings>().visual_mode);
        app.update();

        assert!(app.world().resource::<DisplaySettings>().visual_mode);
        assert!(!app.world().resource::<VisualModeToggle>().loading);
    }

    #[test]
    fn test_background_applies_and_unlocks() {
        let mut app = visual_mode_app();
        app.insert_resource(ClearColor(VISUAL_BACKGROUND));

        flip(&mut app);
        app.update();

        assert!(!app.world().resource::<DisplaySettings>().visual_mode);
        assert!(!app.world().resource::<VisualModeToggle>().loading);
        assert_eq!(app.world().resource::<ClearColor>().0, PLAIN_BACKGROUND);
    }
}
