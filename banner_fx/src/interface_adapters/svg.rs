// SVG adapter for lightning bolts: path data plus the stroke layers a host animates
// inside a `viewBox="0 0 100 100"` overlay.

use crate::domain::{Bolt, Point};
use serde::Serialize;
use std::fmt::Write;

/// Path data for the main bolt: `M x0,0 L x1,y1 ...`.
pub fn main_path_d(bolt: &Bolt) -> String {
    let mut d = String::new();
    let Some((first, rest)) = bolt.main.split_first() else {
        return d;
    };
    // The main bolt is always anchored to the top edge.
    let _ = write!(d, "M {},0", first.x);
    for p in rest {
        let _ = write!(d, " L {},{}", p.x, p.y);
    }
    d
}

/// Path data for one branch: `M sx,sy L x1,y1 L x2,y2`.
pub fn branch_path_d(branch: &[Point]) -> String {
    let mut d = String::new();
    for (i, p) in branch.iter().enumerate() {
        let op = if i == 0 { "M" } else { " L" };
        let _ = write!(d, "{op} {},{}", p.x, p.y);
    }
    d
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrokeLayer {
    pub d: String,
    pub stroke: &'static str,
    pub stroke_width: f32,
    /// Draw-in time from empty path to full length.
    pub duration_secs: f32,
    /// Opacity keyframes spread evenly over `duration_secs`.
    pub opacity: [f32; 3],
}

/// Layers for one strike: core, glow, then one per branch.
pub fn stroke_layers(bolt: &Bolt) -> Vec<StrokeLayer> {
    let main = main_path_d(bolt);
    let mut layers = vec![
        StrokeLayer {
            d: main.clone(),
            stroke: "rgb(140,170,255)",
            stroke_width: 1.8,
            duration_secs: 0.22,
            opacity: [0.9, 1.0, 0.0],
        },
        StrokeLayer {
            d: main,
            stroke: "rgba(140,170,255,0.55)",
            stroke_width: 4.0,
            duration_secs: 0.22,
            opacity: [0.5, 0.8, 0.0],
        },
    ];

    // Thinner branches; later ones linger a little longer.
    layers.extend(bolt.branches.iter().enumerate().map(|(k, branch)| StrokeLayer {
        d: branch_path_d(branch),
        stroke: "rgb(160,185,255)",
        stroke_width: 1.2,
        duration_secs: 0.18 + k as f32 * 0.02,
        opacity: [0.8, 0.4, 0.0],
    }));

    layers
}

/// Screen flash opacity `elapsed_ms` into a flash of `flash_ms`: 0 -> 0.9 -> 0.
pub fn flash_opacity(elapsed_ms: f32, flash_ms: f32) -> f32 {
    if flash_ms <= 0.0 || !(0.0..=flash_ms).contains(&elapsed_ms) {
        return 0.0;
    }
    let t = elapsed_ms / flash_ms;
    let peak = 0.9;
    if t <= 0.5 {
        peak * (t / 0.5)
    } else {
        peak * ((1.0 - t) / 0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::generate_bolt;

    fn tiny_bolt() -> Bolt {
        Bolt {
            seed: 0.5,
            main: vec![
                Point { x: 50.5, y: 0.0 },
                Point { x: 48.0, y: 50.0 },
                Point { x: 52.25, y: 100.0 },
            ],
            branches: vec![vec![
                Point { x: 48.0, y: 50.0 },
                Point { x: 40.0, y: 60.0 },
                Point { x: 35.5, y: 70.0 },
            ]],
        }
    }

    #[test]
    fn when_bolt_is_rendered_then_path_data_matches_svg_syntax() {
        let bolt = tiny_bolt();
        assert_eq!(main_path_d(&bolt), "M 50.5,0 L 48,50 L 52.25,100");
        assert_eq!(branch_path_d(&bolt.branches[0]), "M 48,50 L 40,60 L 35.5,70");
    }

    #[test]
    fn when_layers_are_built_then_core_glow_and_each_branch_are_present() {
        let bolt = generate_bolt(0.42);
        let layers = stroke_layers(&bolt);

        assert_eq!(layers.len(), 2 + bolt.branches.len());
        assert_eq!(layers[0].d, layers[1].d);
        assert!(layers[0].d.starts_with("M "));
        for (k, layer) in layers[2..].iter().enumerate() {
            assert!((layer.duration_secs - (0.18 + k as f32 * 0.02)).abs() < 1e-6);
        }
    }

    #[test]
    fn when_flash_runs_then_opacity_peaks_mid_way_and_ends_dark() {
        assert_eq!(flash_opacity(0.0, 140.0), 0.0);
        assert!((flash_opacity(70.0, 140.0) - 0.9).abs() < 1e-6);
        assert_eq!(flash_opacity(140.0, 140.0), 0.0);
        assert_eq!(flash_opacity(200.0, 140.0), 0.0);
    }
}
