//! Sizing presets and derived cell metrics.

use serde::{Deserialize, Serialize};

/// Extra vertical room per row relative to the font size
const ROW_HEIGHT_FACTOR: f32 = 1.01;

/// Literal glyphs (unit markers, placeholders) are drawn this much smaller
const LITERAL_FONT_SHRINK: f32 = 8.0;

/// Named sizing preset controlling how wide each cell is
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpinnerVariant {
    /// Compact presentation (narrow cells)
    Simple,
    /// Large presentation (cells about as wide as the font size)
    #[default]
    Large,
}

impl SpinnerVariant {
    /// Divisor applied to the font size to get a cell width
    pub const fn width_divisor(self) -> f32 {
        match self {
            SpinnerVariant::Simple => 1.9,
            SpinnerVariant::Large => 0.9991,
        }
    }

    /// The other variant
    pub const fn next(self) -> Self {
        match self {
            SpinnerVariant::Simple => SpinnerVariant::Large,
            SpinnerVariant::Large => SpinnerVariant::Simple,
        }
    }
}

/// Vertical alignment of the trailing unit label against the digits
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitAlignment {
    #[default]
    Baseline,
    Center,
}

impl UnitAlignment {
    pub const fn next(self) -> Self {
        match self {
            UnitAlignment::Baseline => UnitAlignment::Center,
            UnitAlignment::Center => UnitAlignment::Baseline,
        }
    }
}

/// Pixel dimensions shared by every cell of one spinner
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellMetrics {
    pub font_size: f32,
    /// Height of one reel row, also the height of the visible window
    pub cell_height: f32,
    /// Width of a digit or literal cell
    pub cell_width: f32,
    /// Width of a `.` / `,` cell
    pub separator_width: f32,
    /// Font size used for literal glyphs
    pub literal_font_size: f32,
}

impl CellMetrics {
    pub fn new(font_size: f32, variant: SpinnerVariant) -> Self {
        let cell_height = (font_size * ROW_HEIGHT_FACTOR).ceil();
        let cell_width = (font_size / variant.width_divisor()).floor();
        Self {
            font_size,
            cell_height,
            cell_width,
            separator_width: (cell_width / 2.0).floor(),
            literal_font_size: (font_size - LITERAL_FONT_SHRINK).max(1.0),
        }
    }
}
