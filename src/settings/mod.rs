//! Display settings: loading, the toggles bound to keys, and pushing the
//! result into every spinner.

pub mod config;
pub mod visual_mode;

use bevy::prelude::*;

use crate::backend::CommandOutbox;
use crate::backend::commands::{SetNodeType, SetShouldAlwaysUseSystemLanguage};
use crate::input::DisplayAction;
use crate::spinner::CharSpinner;

pub use config::DisplaySettings;
pub use visual_mode::{VisualModeOutcome, VisualModeToggle};

pub struct SettingsPlugin;

impl Plugin for SettingsPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(DisplaySettings::load_or_default())
            .init_resource::<VisualModeToggle>()
            .init_resource::<CommandOutbox>()
            .add_message::<VisualModeOutcome>()
            .add_systems(
                Update,
                (
                    handle_display_actions,
                    visual_mode::apply_visual_mode,
                    visual_mode::resolve_visual_mode,
                    sync_spinners,
                )
                    .chain(),
            );
    }
}

/// Apply one action to the settings, queueing backend calls where the
/// backend owns the value
pub fn apply_action(
    action: DisplayAction,
    settings: &mut DisplaySettings,
    toggle: &mut VisualModeToggle,
    outbox: &mut CommandOutbox,
) {
    match action {
        DisplayAction::ToggleAnimateNumbers => {
            settings.animate_numbers = !settings.animate_numbers;
        }
        DisplayAction::CycleVariant => settings.variant = settings.variant.next(),
        DisplayAction::ToggleUnitAlignment => {
            settings.unit_alignment = settings.unit_alignment.next();
        }
        DisplayAction::ToggleVisualMode => {
            if !toggle.request(settings, outbox) {
                log::debug!("visual mode switch is disabled, ignoring");
            }
        }
        DisplayAction::ToggleSystemLanguage => {
            settings.should_always_use_system_language = !settings.should_always_use_system_language;
            outbox.push(&SetShouldAlwaysUseSystemLanguage {
                should_always_use_system_language: settings.should_always_use_system_language,
            });
        }
        DisplayAction::CycleNodeType => {
            settings.node_type = settings.node_type.next();
            outbox.push(&SetNodeType {
                node_type: settings.node_type,
            });
        }
        // Handled by whoever owns the displayed values
        DisplayAction::ShowPlaceholder => {}
    }
}

fn handle_display_actions(
    mut actions: MessageReader<DisplayAction>,
    mut settings: ResMut<DisplaySettings>,
    mut toggle: ResMut<VisualModeToggle>,
    mut outbox: ResMut<CommandOutbox>,
) {
    for action in actions.read() {
        if *action == DisplayAction::ShowPlaceholder {
            continue;
        }
        apply_action(*action, &mut settings, &mut toggle, &mut outbox);
        info!(
            "⚙️ {:?}: variant={:?}, animate={}, align={:?}, visual={}, node={}",
            action,
            settings.variant,
            settings.animate_numbers,
            settings.unit_alignment,
            settings.visual_mode,
            settings.node_type.label()
        );
    }

    if outbox.is_changed() && !outbox.is_empty() {
        debug!("📮 {} backend calls waiting", outbox.len());
    }
}

/// A spinner that keeps its own variant instead of following the settings
#[derive(Component, Debug, Default)]
pub struct PinnedVariant;

/// Push spinner-related settings into every spinner
fn sync_spinners(
    settings: Res<DisplaySettings>,
    mut spinners: Query<(&mut CharSpinner, Has<PinnedVariant>)>,
) {
    if !settings.is_changed() {
        return;
    }

    for (mut spinner, pinned) in &mut spinners {
        let mut animator = spinner.animator;
        if !pinned {
            animator.variant = settings.variant;
        }
        animator.unit_alignment = settings.unit_alignment;
        animator.animate_numbers = settings.animate_numbers;

        // Only touch the component when something changed, so it isn't rebuilt
        if spinner.animator != animator {
            spinner.animator = animator;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spinner::{DigitGlyphAnimator, SpinnerVariant, UnitAlignment};

    fn apply(action: DisplayAction, settings: &mut DisplaySettings, outbox: &mut CommandOutbox) {
        let mut toggle = VisualModeToggle::default();
        apply_action(action, settings, &mut toggle, outbox);
    }

    #[test]
    fn test_local_toggles_queue_nothing() {
        let mut settings = DisplaySettings::default();
        let mut outbox = CommandOutbox::default();

        apply(DisplayAction::ToggleAnimateNumbers, &mut settings, &mut outbox);
        apply(DisplayAction::CycleVariant, &mut settings, &mut outbox);
        apply(DisplayAction::ToggleUnitAlignment, &mut settings, &mut outbox);
        apply(DisplayAction::ShowPlaceholder, &mut settings, &mut outbox);

        assert!(!settings.animate_numbers);
        assert_eq!(settings.variant, SpinnerVariant::Simple);
        assert_eq!(settings.unit_alignment, UnitAlignment::Center);
        assert!(outbox.is_empty());
    }

    #[test]
    fn test_backend_toggles_queue_calls() {
        let mut settings = DisplaySettings::default();
        let mut outbox = CommandOutbox::default();

        apply(DisplayAction::ToggleSystemLanguage, &mut settings, &mut outbox);
        apply(DisplayAction::CycleNodeType, &mut settings, &mut outbox);
        apply(DisplayAction::ToggleVisualMode, &mut settings, &mut outbox);

        let names: Vec<_> = outbox.drain().iter().map(|i| i.command).collect();
        assert_eq!(
            names,
            vec![
                "set_should_always_use_system_language",
                "set_node_type",
                "set_visual_mode"
            ]
        );
        assert!(settings.should_always_use_system_language);
    }

    #[test]
    fn test_settings_reach_spinners() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .insert_resource(DisplaySettings {
                variant: SpinnerVariant::Simple,
                animate_numbers: false,
                ..Default::default()
            })
            .add_systems(Update, sync_spinners);

        let entity = app
            .world_mut()
            .spawn(CharSpinner::new("1.00", DigitGlyphAnimator::default()))
            .id();
        app.update();

        let spinner = app.world().get::<CharSpinner>(entity).unwrap();
        assert_eq!(spinner.animator.variant, SpinnerVariant::Simple);
        assert!(!spinner.animator.animate_numbers);
        assert_eq!(spinner.animator.font_size, 32.0);
    }

    #[test]
    fn test_pinned_variant_survives_sync() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .insert_resource(DisplaySettings {
                unit_alignment: UnitAlignment::Center,
                ..Default::default()
            })
            .add_systems(Update, sync_spinners);

        let simple = DigitGlyphAnimator::new(16.0, SpinnerVariant::Simple);
        let pinned = app
            .world_mut()
            .spawn((CharSpinner::new("1.2k", simple), PinnedVariant))
            .id();
        let follower = app
            .world_mut()
            .spawn(CharSpinner::new("1,200.00", simple))
            .id();
        app.update();

        let spinner = app.world().get::<CharSpinner>(pinned).unwrap();
        assert_eq!(spinner.animator.variant, SpinnerVariant::Simple);
        assert_eq!(spinner.animator.unit_alignment, UnitAlignment::Center);

        let spinner = app.world().get::<CharSpinner>(follower).unwrap();
        assert_eq!(spinner.animator.variant, SpinnerVariant::Large);
        assert_eq!(spinner.animator.unit_alignment, UnitAlignment::Center);
    }
}
