//! Bevy UI rendering for [`CharSpinner`] entities.
//!
//! A spinner entity is a row node. Whenever its [`CharSpinner`] component is
//! added or changed the row is emptied and rebuilt from a fresh
//! [`SpinnerLayout`]:
//!
//! ```text
//! CharSpinner (row)
//! ├── window (height = one row, clips)
//! │   ├── reel   (column of 10 faces, ReelMotion)
//! │   ├── static (single glyph, ReelMotion)
//! │   └── ...
//! └── unit label (optional, align-self from UnitAlignment)
//! ```

use bevy::prelude::*;

use super::animation::CellMotion;
use super::layout::{DigitGlyphAnimator, GlyphCell, SpinnerLayout};
use super::sizing::UnitAlignment;

const GLYPH_COLOR: Color = Color::srgb(0.93, 0.93, 0.95);
const UNIT_COLOR: Color = Color::srgb(0.55, 0.55, 0.62);

pub struct SpinnerPlugin;

impl Plugin for SpinnerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, (rebuild_spinners, animate_reels).chain());
    }
}

/// An animated numeric display
#[derive(Component, Clone, Debug, PartialEq)]
#[require(Node)]
pub struct CharSpinner {
    pub value: String,
    pub animator: DigitGlyphAnimator,
}

impl CharSpinner {
    pub fn new(value: impl Into<String>, animator: DigitGlyphAnimator) -> Self {
        Self {
            value: value.into(),
            animator,
        }
    }
}

/// Vertical motion of one cell node, sampled every frame
#[derive(Component, Debug)]
pub struct ReelMotion {
    pub motion: CellMotion,
    /// Seconds since the spinner was rebuilt
    pub elapsed: f32,
}

/// Marks the `tXTM` label node
#[derive(Component)]
pub struct SpinnerUnitLabel;

fn align_self_for(alignment: UnitAlignment) -> AlignSelf {
    match alignment {
        UnitAlignment::Baseline => AlignSelf::Baseline,
        UnitAlignment::Center => AlignSelf::Center,
    }
}

/// Rebuild the UI subtree of every spinner whose value or settings changed
fn rebuild_spinners(
    mut commands: Commands,
    mut spinners: Query<(Entity, &CharSpinner, &mut Node), Changed<CharSpinner>>,
) {
    for (entity, spinner, mut node) in &mut spinners {
        let layout = spinner.animator.layout(&spinner.value);

        node.flex_direction = FlexDirection::Row;
        node.column_gap = Val::Px(layout.metrics.font_size * 0.15);

        commands
            .entity(entity)
            .despawn_related::<Children>()
            .with_children(|row| spawn_layout(row, &layout));

        debug!(
            "🔢 Spinner rebuilt: value={:?}, cells={}, settle={:.2}s",
            spinner.value,
            layout.cells.len(),
            layout.settle_time()
        );
    }
}

fn spawn_layout(row: &mut ChildSpawnerCommands, layout: &SpinnerLayout) {
    let metrics = layout.metrics;

    row.spawn((
        Node {
            height: Val::Px(metrics.cell_height),
            flex_direction: FlexDirection::Row,
            overflow: Overflow::clip(),
            ..default()
        },
        Name::new("Spinner Window"),
    ))
    .with_children(|window| {
        for cell in &layout.cells {
            spawn_cell(window, cell);
        }
    });

    if let Some(label) = &layout.unit_label {
        row.spawn((
            Text::new(label.text),
            TextFont {
                font_size: metrics.literal_font_size,
                ..default()
            },
            TextColor(UNIT_COLOR),
            Node {
                align_self: align_self_for(label.alignment),
                ..default()
            },
            SpinnerUnitLabel,
        ));
    }
}

fn spawn_cell(window: &mut ChildSpawnerCommands, cell: &GlyphCell) {
    let faces = cell.faces();
    // Reels are ten rows tall, static cells one
    let rows = if cell.target_offset.is_some() { faces.len() } else { 1 };

    window
        .spawn((
            Node {
                width: Val::Px(cell.width),
                height: Val::Px(cell.height * rows as f32),
                flex_direction: FlexDirection::Column,
                flex_shrink: 0.0,
                top: Val::Px(cell.motion.initial),
                ..default()
            },
            ReelMotion {
                motion: cell.motion,
                elapsed: 0.0,
            },
            Name::new(cell.key.clone()),
        ))
        .with_children(|reel| {
            for face in faces {
                reel.spawn((
                    Text::new(face),
                    TextFont {
                        font_size: cell.font_size,
                        ..default()
                    },
                    TextColor(GLYPH_COLOR),
                    Node {
                        height: Val::Px(cell.height),
                        ..default()
                    },
                ));
            }
        });
}

/// Advance every cell along its spring and write the offset to the node
fn animate_reels(time: Res<Time>, mut reels: Query<(&mut ReelMotion, &mut Node)>) {
    let dt = time.delta_secs();

    for (mut reel, mut node) in &mut reels {
        if reel.motion.is_settled(reel.elapsed) && node.top == Val::Px(reel.motion.target) {
            continue;
        }
        reel.elapsed += dt;
        node.top = Val::Px(reel.motion.offset_at(reel.elapsed));
    }
}
