use crate::domain::ports::RandomSource;

const MODULUS: i64 = 233_280;
const MULTIPLIER: i64 = 9_301;
const INCREMENT: i64 = 49_297;

/// Small seeded LCG used for bolt shapes.
///
/// The seed is a float in `[0, 1)`; its first seven decimal digits select the stream.
/// A seed that truncates to zero (or is not finite) falls back to state 1.
#[derive(Debug, Clone)]
pub struct BoltRng {
    state: i64,
}

impl BoltRng {
    pub fn new(seed: f64) -> Self {
        let scaled = (seed * 1e7).floor();
        let raw = if scaled.is_finite() { scaled as i64 } else { 0 };
        let raw = if raw == 0 { 1 } else { raw };
        // Reducing first gives the same stream and keeps the multiply in range.
        Self {
            state: raw.rem_euclid(MODULUS),
        }
    }
}

impl RandomSource for BoltRng {
    fn next_f64(&mut self) -> f64 {
        self.state = (self.state * MULTIPLIER + INCREMENT) % MODULUS;
        self.state as f64 / MODULUS as f64
    }
}
