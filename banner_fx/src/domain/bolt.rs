// Procedural lightning bolt in a normalized 100x100 space (y grows downward).

use crate::domain::ports::RandomSource;
use crate::domain::rng::BoltRng;
use serde::Serialize;

const MAIN_MIN_X: f64 = 10.0;
const MAIN_MAX_X: f64 = 90.0;
const BRANCH_MIN_X: f64 = 5.0;
const BRANCH_MAX_X: f64 = 95.0;
const BOTTOM_Y: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A generated bolt: one top-to-bottom polyline plus short side branches.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bolt {
    pub seed: f64,
    pub main: Vec<Point>,
    // Each branch is a two-segment polyline starting on a main vertex.
    pub branches: Vec<Vec<Point>>,
}

/// Builds the bolt for `seed`. Identical seeds always give identical bolts.
pub fn generate_bolt(seed: f64) -> Bolt {
    let mut rng = BoltRng::new(seed);

    // 8..=11 segments.
    let steps = 8 + (rng.next_f64() * 4.0).floor() as usize;
    let center_x = 50.0 + (rng.next_f64() - 0.5) * 6.0;

    let mut main = Vec::with_capacity(steps + 1);
    let mut x = center_x;
    for j in 0..=steps {
        let y = (j as f64 / steps as f64) * BOTTOM_Y;
        // Jitter grows with depth.
        let jitter = (2.0 + j as f64 * 0.8) * (rng.next_f64() - 0.5) * 2.0;
        x = (x + jitter).clamp(MAIN_MIN_X, MAIN_MAX_X);
        main.push(Point { x, y });
    }

    let branch_count = 1 + (rng.next_f64() * 3.0).floor() as usize;
    let branches = (0..branch_count)
        .map(|_| branch_from(&main, steps, &mut rng))
        .collect();

    Bolt {
        seed,
        main,
        branches,
    }
}

fn branch_from(main: &[Point], steps: usize, rng: &mut BoltRng) -> Vec<Point> {
    // Stay clear of the first two vertices and the bottom end.
    let idx = 2 + (rng.next_f64() * (steps - 3) as f64).floor() as usize;
    let start = main[idx];

    let direction = if rng.next_f64() > 0.5 { 1.0 } else { -1.0 };
    let length = 8.0 + rng.next_f64() * 18.0;
    let bend = (rng.next_f64() - 0.5) * 8.0;

    let bx1 = (start.x + direction * (6.0 + rng.next_f64() * 10.0)).clamp(BRANCH_MIN_X, BRANCH_MAX_X);
    let by1 = (start.y + length * 0.5).min(BOTTOM_Y);
    let bx2 = (bx1 + direction * (4.0 + rng.next_f64() * 8.0) + bend).clamp(BRANCH_MIN_X, BRANCH_MAX_X);
    let by2 = (start.y + length).min(BOTTOM_Y);

    vec![start, Point { x: bx1, y: by1 }, Point { x: bx2, y: by2 }]
}
