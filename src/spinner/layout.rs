//! Spinner layout: turns a display string into cells and motions.
//!
//! [`DigitGlyphAnimator::layout`] is a pure function of its inputs. It is
//! rerun from scratch whenever the displayed value changes; nothing is
//! patched incrementally.

use super::animation::{AnimationProfile, CellMotion};
use super::glyph::{GlyphKind, glyphs_for_value};
use super::sizing::{CellMetrics, SpinnerVariant, UnitAlignment};

/// Text of the unit label shown after the value
pub const UNIT_LABEL: &str = "tXTM";

/// Value shown while nothing has loaded yet; hides the unit label
pub const PLACEHOLDER: &str = "-";

/// Faces of a reel, top to bottom
pub const REEL_FACES: [u8; 10] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];

/// One rendered character
#[derive(Clone, Debug, PartialEq)]
pub struct GlyphCell {
    pub source_char: char,
    pub kind: GlyphKind,
    /// Stable identity for reuse across rebuilds (`char-{i}-{c}` or `dec-{i}`)
    pub key: String,
    pub width: f32,
    pub height: f32,
    pub font_size: f32,
    /// Resting offset that exposes the digit face; `None` for static cells
    pub target_offset: Option<f32>,
    pub motion: CellMotion,
}

impl GlyphCell {
    /// Faces to stack in this cell: the full reel for digits, the glyph otherwise
    pub fn faces(&self) -> Vec<String> {
        match self.kind {
            GlyphKind::Digit(_) => REEL_FACES.iter().map(u8::to_string).collect(),
            GlyphKind::Separator | GlyphKind::Literal => vec![self.source_char.to_string()],
        }
    }
}

/// Trailing unit label
#[derive(Clone, Debug, PartialEq)]
pub struct UnitLabel {
    pub text: &'static str,
    pub alignment: UnitAlignment,
}

/// Everything needed to draw one spinner
#[derive(Clone, Debug, PartialEq)]
pub struct SpinnerLayout {
    pub metrics: CellMetrics,
    pub cells: Vec<GlyphCell>,
    pub unit_label: Option<UnitLabel>,
}

impl SpinnerLayout {
    /// Time until the last cell comes to rest
    pub fn settle_time(&self) -> f32 {
        self.cells
            .iter()
            .filter(|c| c.motion.is_animated())
            .map(|c| c.motion.delay + c.motion.profile.duration)
            .fold(0.0, f32::max)
    }
}

/// Lays out display strings as odometer reels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DigitGlyphAnimator {
    pub font_size: f32,
    pub variant: SpinnerVariant,
    pub unit_alignment: UnitAlignment,
    /// Play the roll-in animation when the value changes
    pub animate_numbers: bool,
    pub profile: AnimationProfile,
}

impl Default for DigitGlyphAnimator {
    fn default() -> Self {
        Self {
            font_size: 32.0,
            variant: SpinnerVariant::Large,
            unit_alignment: UnitAlignment::Baseline,
            animate_numbers: true,
            profile: AnimationProfile::default(),
        }
    }
}

impl DigitGlyphAnimator {
    pub fn new(font_size: f32, variant: SpinnerVariant) -> Self {
        Self {
            font_size,
            variant,
            ..Default::default()
        }
    }

    pub fn metrics(&self) -> CellMetrics {
        CellMetrics::new(self.font_size, self.variant)
    }

    /// Build cells and motions for `value`.
    pub fn layout(&self, value: &str) -> SpinnerLayout {
        let metrics = self.metrics();
        let row = metrics.cell_height;

        let cells = glyphs_for_value(value)
            .into_iter()
            .enumerate()
            .map(|(i, (c, kind))| {
                let (key, width, font_size, rest) = match kind {
                    GlyphKind::Digit(d) => (
                        format!("char-{i}-{c}"),
                        metrics.cell_width,
                        metrics.font_size,
                        -(f32::from(d) * row),
                    ),
                    GlyphKind::Separator => {
                        (format!("dec-{i}"), metrics.separator_width, metrics.font_size, 0.0)
                    }
                    GlyphKind::Literal => {
                        (format!("dec-{i}"), metrics.cell_width, metrics.literal_font_size, 0.0)
                    }
                };

                // Everything rolls up from one row below where it rests
                let motion = if self.animate_numbers {
                    CellMotion {
                        initial: rest + row,
                        target: rest,
                        delay: self.profile.delay_for(i),
                        profile: self.profile,
                    }
                } else {
                    CellMotion::at_rest(rest, self.profile)
                };

                GlyphCell {
                    source_char: c,
                    kind,
                    key,
                    width,
                    height: row,
                    font_size,
                    target_offset: kind.is_reel().then_some(rest),
                    motion,
                }
            })
            .collect();

        let unit_label = (value != PLACEHOLDER).then_some(UnitLabel {
            text: UNIT_LABEL,
            alignment: self.unit_alignment,
        });

        SpinnerLayout {
            metrics,
            cells,
            unit_label,
        }
    }
}
