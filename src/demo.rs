//! Demo driver: a fake wallet balance that grows while "mining".
//!
//! Shows the balance twice, compact in a header and large underneath, and
//! feeds both spinners from a random walk.

use bevy::prelude::*;
use rand::Rng;

use crate::camera::Viewport;
use crate::input::{DisplayAction, KEY_BINDINGS};
use crate::settings::{DisplaySettings, PinnedVariant};
use crate::spinner::{CharSpinner, DigitGlyphAnimator, PLACEHOLDER, SpinnerVariant};

pub struct DemoPlugin;

impl Plugin for DemoPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MiningTicker>()
            .add_systems(Startup, spawn_dashboard)
            .add_systems(Update, (show_placeholder, tick_balance, resize_spinners));
    }
}

/// Which balance readout a spinner is
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub enum BalanceReadout {
    /// Small header readout, abbreviated (`12.5k`)
    Compact,
    /// Main readout with full precision (`12,480.25`)
    Full,
}

impl BalanceReadout {
    pub fn format(self, balance: f64) -> String {
        match self {
            BalanceReadout::Compact => format_compact(balance),
            BalanceReadout::Full => format_balance(balance),
        }
    }
}

/// Simulated mining rewards
#[derive(Resource, Debug)]
pub struct MiningTicker {
    pub timer: Timer,
    pub balance: f64,
    /// Largest reward per tick
    pub max_reward: f64,
    /// False until the first reward lands; spinners show the placeholder
    pub loaded: bool,
}

impl Default for MiningTicker {
    fn default() -> Self {
        Self {
            timer: Timer::from_seconds(3.0, TimerMode::Repeating),
            balance: 0.0,
            max_reward: 2_500.0,
            loaded: false,
        }
    }
}

impl MiningTicker {
    /// Add a random reward, returning the new balance
    pub fn reward(&mut self, rng: &mut impl Rng) -> f64 {
        self.balance += rng.random_range(0.0..self.max_reward);
        self.loaded = true;
        self.balance
    }
}

/// Format with two decimals and `,` thousands grouping: `1234.5` -> `1,234.50`
pub fn format_balance(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (int, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut out = String::with_capacity(fixed.len() + int.len() / 3 + 1);
    if value < 0.0 && fixed.bytes().any(|b| b != b'0' && b != b'.') {
        out.push('-');
    }
    for (i, c) in int.chars().enumerate() {
        if i > 0 && (int.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out.push('.');
    out.push_str(frac);
    out
}

/// Abbreviate with a unit suffix: `12500000` -> `12.5M`
pub fn format_compact(value: f64) -> String {
    const UNITS: [(f64, &str); 4] = [(1.0, ""), (1e3, "k"), (1e6, "M"), (1e9, "B")];

    let mut unit = UNITS
        .iter()
        .rposition(|(scale, _)| value.abs() >= *scale)
        .unwrap_or(0);
    let mut fixed = format!("{:.2}", value / UNITS[unit].0);

    // Rounding can carry into the next unit: 999,999 is `1M`, not `1000k`
    let carried = fixed.trim_start_matches('-').len() > "999.99".len();
    if carried && unit + 1 < UNITS.len() {
        unit += 1;
        fixed = format!("{:.2}", value / UNITS[unit].0);
    }

    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed}{}", UNITS[unit].1)
}

fn spawn_dashboard(
    mut commands: Commands,
    viewport: Res<Viewport>,
    settings: Res<DisplaySettings>,
) {
    let animator = |font_size: f32, variant: SpinnerVariant| DigitGlyphAnimator {
        unit_alignment: settings.unit_alignment,
        animate_numbers: settings.animate_numbers,
        ..DigitGlyphAnimator::new(font_size, variant)
    };

    let hints = KEY_BINDINGS
        .iter()
        .map(|(_, _, hint)| *hint)
        .collect::<Vec<_>>()
        .join("   ");

    commands.spawn((
        Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            flex_direction: FlexDirection::Column,
            align_items: AlignItems::Center,
            justify_content: JustifyContent::Center,
            row_gap: Val::Px(24.0),
            ..default()
        },
        Name::new("Dashboard"),
        children![
            (
                CharSpinner::new(
                    PLACEHOLDER,
                    animator(viewport.compact_font_size(), SpinnerVariant::Simple),
                ),
                BalanceReadout::Compact,
                PinnedVariant,
            ),
            (
                CharSpinner::new(
                    PLACEHOLDER,
                    animator(viewport.spinner_font_size(), settings.variant),
                ),
                BalanceReadout::Full,
            ),
            (
                Text::new(hints),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::srgb(0.45, 0.45, 0.5)),
            ),
        ],
    ));

    info!("✨ Dashboard spawned");
}

fn tick_balance(
    time: Res<Time>,
    mut ticker: ResMut<MiningTicker>,
    mut spinners: Query<(&BalanceReadout, &mut CharSpinner)>,
) {
    if !ticker.timer.tick(time.delta()).just_finished() {
        return;
    }

    if !ticker.loaded {
        info!("💰 First reward landed");
    }
    let balance = ticker.reward(&mut rand::rng());
    for (readout, mut spinner) in &mut spinners {
        spinner.value = readout.format(balance);
    }
    debug!("⛏️ Balance now {:.2}", balance);
}

fn show_placeholder(
    mut actions: MessageReader<DisplayAction>,
    mut ticker: ResMut<MiningTicker>,
    mut spinners: Query<&mut CharSpinner, With<BalanceReadout>>,
) {
    let requested = actions
        .read()
        .filter(|a| **a == DisplayAction::ShowPlaceholder)
        .count();
    if requested == 0 {
        return;
    }

    ticker.loaded = false;
    ticker.timer.reset();
    for mut spinner in &mut spinners {
        spinner.value = PLACEHOLDER.to_string();
    }
}

/// Follow the window size
fn resize_spinners(
    viewport: Res<Viewport>,
    mut spinners: Query<(&BalanceReadout, &mut CharSpinner)>,
) {
    if !viewport.is_changed() {
        return;
    }

    for (readout, mut spinner) in &mut spinners {
        let font_size = match readout {
            BalanceReadout::Compact => viewport.compact_font_size(),
            BalanceReadout::Full => viewport.spinner_font_size(),
        };
        if spinner.animator.font_size != font_size {
            spinner.animator.font_size = font_size;
        }
    }
}
