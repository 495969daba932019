/// Linear interpolation between `a` and `b`.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Deterministic SplitMix64 generator.
///
/// Stands in for `Math.random()` so that particle fields, globe nodes and HUD data are
/// reproducible from a seed.
#[derive(Clone, Debug)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    /// Create a generator from a seed.
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Next raw 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        // 53 random mantissa bits.
        (self.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Uniform value in `[lo, hi)`.
    pub fn range_f64(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }

    /// Uniform integer in `[lo, hi]`.
    pub fn range_i64(&mut self, lo: i64, hi: i64) -> i64 {
        if hi <= lo {
            return lo;
        }
        let span = (hi - lo + 1) as u64;
        lo + (self.next_u64() % span) as i64
    }
}

/// Scalar that eases toward a target by a fixed fraction every frame.
///
/// `current += (target - current) * factor`
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Damped {
    /// Current value.
    pub current: f64,
    /// Value being approached.
    pub target: f64,
    /// Fraction of the remaining distance covered per step, in `(0, 1]`.
    pub factor: f64,
}

impl Damped {
    /// Create a damped value at rest at `value`.
    pub fn new(value: f64, factor: f64) -> Self {
        Self {
            current: value,
            target: value,
            factor: factor.clamp(f64::EPSILON, 1.0),
        }
    }

    /// Advance one frame.
    pub fn step(&mut self) -> f64 {
        self.current += (self.target - self.current) * self.factor;
        self.current
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
