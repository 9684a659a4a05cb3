// Ports the simulations depend on: randomness in, draw calls out.

use serde::Serialize;

/// Source of uniform random draws.
///
/// Simulations never reach for a global generator; the host injects one so tests can
/// replay exact sequences.
pub trait RandomSource {
    /// Uniform draw in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Uniform draw in `[min, max)`.
    fn range(&mut self, min: f64, max: f64) -> f64 {
        min + (max - min) * self.next_f64()
    }

    /// Uniform draw in `[min, max)` narrowed to `f32` for pixel-space math.
    fn range_f32(&mut self, min: f32, max: f32) -> f32 {
        self.range(f64::from(min), f64::from(max)) as f32
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

/// Straight RGBA color; channels in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: 1.0,
        }
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }
}

/// 2D drawing target in surface-local (CSS pixel) coordinates.
pub trait RenderSurface {
    /// Wipe the whole surface before a new frame.
    fn clear(&mut self, width: f32, height: f32);

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Rgba);

    fn stroke_circle(&mut self, x: f32, y: f32, radius: f32, line_width: f32, color: Rgba);

    fn line(&mut self, from: (f32, f32), to: (f32, f32), line_width: f32, color: Rgba);
}
