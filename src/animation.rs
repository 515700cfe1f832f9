//! Keyframe math for the ornament animation.

use std::fmt;

use crate::types::*;

pub const PHASE_1_END: Float = 0.33;
pub const PHASE_2_END: Float = 0.66;

pub fn ease_in_out_sine(t: Float) -> Float {
    -((PI * t).cos() - 1.0) / 2.0
}

/// Cubic Bezier through `p`, evaluated at the eased `t`.
pub fn bezier(t: Float, p: [Point3f; 4]) -> Point3f {
    let t = ease_in_out_sine(t);
    let s = 1.0 - t;
    Point3f::from_vec(
        p[0].to_vec() * (s * s * s)
            + p[1].to_vec() * (3.0 * t * s * s)
            + p[2].to_vec() * (3.0 * t * t * s)
            + p[3].to_vec() * (t * t * t),
    )
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    Opening,
    MainDance,
    Finale,
}

impl Phase {
    pub fn at(t: Float) -> Phase {
        if t < PHASE_1_END {
            Phase::Opening
        } else if t < PHASE_2_END {
            Phase::MainDance
        } else {
            Phase::Finale
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Phase::Opening => "Opening",
            Phase::MainDance => "MainDance",
            Phase::Finale => "Finale",
        };
        f.write_str(name)
    }
}

/// Camera `(look_from, look_at)` on the three-phase flight path.
pub fn camera_path(t: Float) -> (Point3f, Point3f) {
    match Phase::at(t) {
        Phase::Opening => {
            // slow descent with a quarter turn
            let p = t / PHASE_1_END;
            let height = 12.0 - p * 4.0;
            let radius = 12.0 - p * 2.0;
            let angle = p * PI * 0.5;
            (
                Point3f::new(angle.cos() * radius, height + (p * PI * 2.0).sin() * 0.5, angle.sin() * radius + 8.0),
                Point3f::new(0.0, 1.0 - p, -2.0),
            )
        }
        Phase::MainDance => {
            // one and a half orbits
            let p = (t - PHASE_1_END) / (PHASE_2_END - PHASE_1_END);
            let radius = 10.0;
            let angle = p * PI * 3.0;
            (
                Point3f::new(angle.cos() * radius, 8.0 + (p * PI * 4.0).sin(), angle.sin() * radius + 6.0),
                Point3f::new(0.0, 2.0 + (p * PI * 2.0).sin(), -2.0),
            )
        }
        Phase::Finale => {
            // rising spiral
            let p = (t - PHASE_2_END) / (1.0 - PHASE_2_END);
            let angle = p * PI * 2.0;
            let radius = 8.0 + p * 2.0;
            let height = 8.0 + p * 6.0;
            (
                Point3f::new(angle.cos() * radius, height + (p * PI * 3.0).sin() * 0.5, angle.sin() * radius + 6.0),
                Point3f::new(0.0, 4.0 + p * 3.0, -2.0),
            )
        }
    }
}
