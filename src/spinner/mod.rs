//! Odometer-style character spinner.
//!
//! Shows a display string (balances, hash rates, a `-` placeholder) with each
//! character in its own cell. Digits get a reel holding all ten faces that is
//! translated to expose the right one; separators and other characters are
//! static cells.
//!
//! - **Glyphs** (`glyph.rs`): character classification
//! - **Sizing** (`sizing.rs`): variants, unit alignment and cell metrics
//! - **Animation** (`animation.rs`): spring timing and per-cell motions as plain data
//! - **Layout** (`layout.rs`): `DigitGlyphAnimator`, the pure string-to-layout step
//! - **Plugin** (`plugin.rs`): Bevy UI tree and the per-frame reel driver

pub mod animation;
pub mod glyph;
pub mod layout;
pub mod plugin;
pub mod sizing;

// Re-export commonly used types
pub use layout::{DigitGlyphAnimator, PLACEHOLDER};
pub use plugin::{CharSpinner, SpinnerPlugin};
pub use sizing::{SpinnerVariant, UnitAlignment};
