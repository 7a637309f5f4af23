use std::time::Duration;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MotionLevel {
    Full,
    Reduced,
    None,
}

/// Analytic under-damped spring, normalized to travel 0 → 1 over a unit
/// duration. Used as the easing for every property of an expand/collapse
/// transition so the whole widget moves as one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringCurve {
    pub damping_ratio: f32,
    pub initial_velocity: f32,
}

impl Default for SpringCurve {
    fn default() -> Self {
        Self {
            damping_ratio: 0.8,
            initial_velocity: 0.5,
        }
    }
}

impl SpringCurve {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn damping_ratio(mut self, value: f32) -> Self {
        self.damping_ratio = value.clamp(0.05, 0.99);
        self
    }

    pub fn initial_velocity(mut self, value: f32) -> Self {
        self.initial_velocity = value;
        self
    }

    /// Progress at normalized time `t` in `[0, 1]`. May overshoot 1.0 in the
    /// middle of the curve; settles to exactly 1.0 at `t >= 1`.
    pub fn evaluate(&self, t: f32) -> f32 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }

        // Undamped natural frequency sized so the envelope has decayed to
        // ~0.25% at t = 1, which keeps the hand-off to rest invisible.
        let zeta = self.damping_ratio.clamp(0.05, 0.99);
        let omega = 6.0 / zeta;
        let omega_d = omega * (1.0 - zeta * zeta).sqrt();
        let decay = (-zeta * omega * t).exp();
        let phase = omega_d * t;
        let drift = (zeta * omega - self.initial_velocity) / omega_d;

        1.0 - decay * (phase.cos() + drift * phase.sin())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FabMotion {
    pub level: MotionLevel,
    pub spring: SpringCurve,
}

impl Default for FabMotion {
    fn default() -> Self {
        Self {
            level: MotionLevel::Full,
            spring: SpringCurve::default(),
        }
    }
}

impl FabMotion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn level(mut self, value: MotionLevel) -> Self {
        self.level = value;
        self
    }

    pub fn spring(mut self, value: SpringCurve) -> Self {
        self.spring = value;
        self
    }

    /// The single duration policy: every path that starts a transition runs
    /// its base duration through this, so the motion level governs taps and
    /// programmatic calls alike.
    pub fn scaled_duration(&self, base: Duration) -> Duration {
        match self.level {
            MotionLevel::None => Duration::ZERO,
            MotionLevel::Reduced => base / 2,
            MotionLevel::Full => base,
        }
    }
}
