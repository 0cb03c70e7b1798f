//! Declarative animation data for spinner cells.
//!
//! Cells never animate themselves. The layout hands out a [`CellMotion`] per
//! cell (where to start, where to rest, when to begin) and whatever drives
//! the frame loop samples it with [`CellMotion::offset_at`].

/// Envelope of the spring response at the end of the duration (1/1000)
const SETTLE_LOG: f32 = 6.907_755;

/// Timing shared by every cell of a spinner
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationProfile {
    /// Seconds from start to rest for a single cell
    pub duration: f32,
    /// 0.0 = no overshoot, towards 1.0 = very springy
    pub bounce: f32,
    /// Extra delay per cell index, so cells roll in left to right
    pub stagger: f32,
    /// Delay before the first cell starts
    pub initial_delay: f32,
}

impl Default for AnimationProfile {
    fn default() -> Self {
        Self {
            duration: 1.14,
            bounce: 0.25,
            stagger: 0.2,
            initial_delay: 0.1,
        }
    }
}

impl AnimationProfile {
    /// Start delay for the cell at `index`
    pub fn delay_for(&self, index: usize) -> f32 {
        self.initial_delay + self.stagger * index as f32
    }

    /// Spring progress `elapsed` seconds after the cell started.
    ///
    /// Exactly 0.0 at the start and exactly 1.0 from `duration` on. In between
    /// it follows a damped spring step response and may overshoot 1.0.
    pub fn progress(&self, elapsed: f32) -> f32 {
        if elapsed <= 0.0 {
            return 0.0;
        }
        if elapsed >= self.duration || self.duration <= 0.0 {
            return 1.0;
        }

        let zeta = (1.0 - self.bounce).clamp(0.05, 1.0);
        let omega = SETTLE_LOG / (zeta * self.duration);
        let t = elapsed;

        if zeta >= 1.0 {
            // Critically damped
            return 1.0 - (-omega * t).exp() * (1.0 + omega * t);
        }

        let omega_d = omega * (1.0 - zeta * zeta).sqrt();
        let envelope = (-zeta * omega * t).exp();
        1.0 - envelope * ((omega_d * t).cos() + (zeta * omega / omega_d) * (omega_d * t).sin())
    }
}

/// Start and rest state of one cell, plus its timing
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellMotion {
    /// Vertical offset (px) the cell is drawn at before its delay elapses
    pub initial: f32,
    /// Vertical offset (px) the cell settles at
    pub target: f32,
    /// Seconds to wait before moving
    pub delay: f32,
    pub profile: AnimationProfile,
}

impl CellMotion {
    /// A motion that is already at rest
    pub fn at_rest(target: f32, profile: AnimationProfile) -> Self {
        Self {
            initial: target,
            target,
            delay: 0.0,
            profile,
        }
    }

    /// Whether this motion moves at all
    pub fn is_animated(&self) -> bool {
        self.initial != self.target
    }

    /// Offset `elapsed` seconds after the spinner was (re)built
    pub fn offset_at(&self, elapsed: f32) -> f32 {
        let p = self.profile.progress(elapsed - self.delay);
        self.initial + (self.target - self.initial) * p
    }

    pub fn is_settled(&self, elapsed: f32) -> bool {
        !self.is_animated() || elapsed >= self.delay + self.profile.duration
    }
}
