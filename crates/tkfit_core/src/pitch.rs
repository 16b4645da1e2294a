//! Pitch geometry for the schematic field diagram
//!
//! All coordinates are center-origin meters:
//! - X: along the length, -52.5 (left goal line) .. +52.5 (right goal line)
//! - Y: along the width, -34 .. +34 (touchlines)

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Field dimensions (meters)
pub mod field {
    /// Field length in meters
    pub const LENGTH_M: f64 = 105.0;
    /// Field width in meters
    pub const WIDTH_M: f64 = 68.0;
    /// Center circle radius (meters)
    pub const CENTER_CIRCLE_RADIUS_M: f64 = 9.15;
    /// Penalty area length from goal line
    pub const PENALTY_AREA_LENGTH_M: f64 = 16.5;
    /// Penalty area width (across the goal)
    pub const PENALTY_AREA_WIDTH_M: f64 = 40.3;
    /// Goal area length from goal line
    pub const GOAL_AREA_LENGTH_M: f64 = 5.5;
    /// Goal area width
    pub const GOAL_AREA_WIDTH_M: f64 = 18.32;
    /// Penalty spot distance from goal line (meters)
    pub const PENALTY_SPOT_M: f64 = 11.0;
}

/// Goal dimensions
pub mod goal {
    /// Goal width in meters (FIFA standard)
    pub const WIDTH_M: f64 = 7.32;
    /// Goal half-width
    pub const HALF_WIDTH_M: f64 = 3.66; // 7.32 / 2
    /// Depth drawn behind the goal line
    pub const DEPTH_M: f64 = 2.0;
}

/// Regulation pitch used for the reference diagram.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, JsonSchema)]
pub struct FieldGeometry {
    pub length_m: f64,
    pub width_m: f64,
    pub center_circle_radius_m: f64,
    pub penalty_area_length_m: f64,
    pub penalty_area_width_m: f64,
    pub goal_area_length_m: f64,
    pub goal_area_width_m: f64,
    pub goal_width_m: f64,
    pub goal_depth_m: f64,
    pub penalty_spot_m: f64,
}

impl Default for FieldGeometry {
    fn default() -> Self {
        Self::standard()
    }
}

/// One static element of the pitch drawing.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PitchMarking {
    Rect { name: String, x0: f64, y0: f64, x1: f64, y1: f64, filled: bool },
    Line { name: String, x0: f64, y0: f64, x1: f64, y1: f64 },
    Circle { name: String, cx: f64, cy: f64, radius: f64 },
    Spot { name: String, x: f64, y: f64 },
}

impl PitchMarking {
    pub fn name(&self) -> &str {
        match self {
            PitchMarking::Rect { name, .. }
            | PitchMarking::Line { name, .. }
            | PitchMarking::Circle { name, .. }
            | PitchMarking::Spot { name, .. } => name,
        }
    }
}

impl FieldGeometry {
    /// Create standard FIFA pitch dimensions
    pub const fn standard() -> Self {
        Self {
            length_m: field::LENGTH_M,
            width_m: field::WIDTH_M,
            center_circle_radius_m: field::CENTER_CIRCLE_RADIUS_M,
            penalty_area_length_m: field::PENALTY_AREA_LENGTH_M,
            penalty_area_width_m: field::PENALTY_AREA_WIDTH_M,
            goal_area_length_m: field::GOAL_AREA_LENGTH_M,
            goal_area_width_m: field::GOAL_AREA_WIDTH_M,
            goal_width_m: goal::WIDTH_M,
            goal_depth_m: goal::DEPTH_M,
            penalty_spot_m: field::PENALTY_SPOT_M,
        }
    }

    #[inline]
    pub fn half_length(&self) -> f64 {
        self.length_m * 0.5
    }

    #[inline]
    pub fn half_width(&self) -> f64 {
        self.width_m * 0.5
    }

    /// True when a center-origin point lies on the playing surface (lines included).
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x.abs() <= self.half_length() && y.abs() <= self.half_width()
    }

    /// Static line drawing of the pitch, left half first then right half.
    pub fn markings(&self) -> Vec<PitchMarking> {
        let hl = self.half_length();
        let hw = self.half_width();
        let r = self.center_circle_radius_m;
        let goal_half = self.goal_width_m * 0.5;

        let mut out = vec![
            PitchMarking::Rect {
                name: "pitch".into(),
                x0: -hl,
                y0: -hw,
                x1: hl,
                y1: hw,
                filled: true,
            },
            PitchMarking::Line { name: "halfway_line".into(), x0: 0.0, y0: -hw, x1: 0.0, y1: hw },
            PitchMarking::Circle { name: "center_circle".into(), cx: 0.0, cy: 0.0, radius: r },
        ];

        for (side, sign) in [("left", -1.0), ("right", 1.0)] {
            let line = sign * hl;
            out.push(area_rect(
                format!("{side}_penalty_area"),
                line,
                sign * (hl - self.penalty_area_length_m),
                self.penalty_area_width_m * 0.5,
            ));
            out.push(area_rect(
                format!("{side}_goal_area"),
                line,
                sign * (hl - self.goal_area_length_m),
                self.goal_area_width_m * 0.5,
            ));
            let (gx0, gx1) = ordered(line, sign * (hl + self.goal_depth_m));
            out.push(PitchMarking::Rect {
                name: format!("{side}_goal"),
                x0: gx0,
                y0: -goal_half,
                x1: gx1,
                y1: goal_half,
                filled: true,
            });
            out.push(PitchMarking::Spot {
                name: format!("{side}_penalty_spot"),
                x: sign * (hl - self.penalty_spot_m),
                y: 0.0,
            });
        }

        out
    }
}

fn ordered(a: f64, b: f64) -> (f64, f64) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

fn area_rect(name: String, goal_line_x: f64, inner_x: f64, half_width: f64) -> PitchMarking {
    let (x0, x1) = ordered(goal_line_x, inner_x);
    PitchMarking::Rect { name, x0, y0: -half_width, x1, y1: half_width, filled: false }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_dimensions() {
        let geo = FieldGeometry::standard();
        assert_eq!(geo.length_m, 105.0);
        assert_eq!(geo.width_m, 68.0);
        assert_eq!(geo.half_length(), 52.5);
        assert!((goal::HALF_WIDTH_M * 2.0 - goal::WIDTH_M).abs() < 1e-9);
    }

    #[test]
    fn test_markings_are_mirrored() {
        let markings = FieldGeometry::standard().markings();
        assert_eq!(markings.len(), 3 + 2 * 4);

        let find = |name: &str| {
            markings.iter().find(|m| m.name() == name).cloned().expect("marking present")
        };

        match (find("left_penalty_area"), find("right_penalty_area")) {
            (
                PitchMarking::Rect { x0: lx0, x1: lx1, y1: ly1, .. },
                PitchMarking::Rect { x0: rx0, x1: rx1, y1: ry1, .. },
            ) => {
                assert!((lx0 + rx1).abs() < 1e-9);
                assert!((lx1 + rx0).abs() < 1e-9);
                assert!((lx1 - lx0 - 16.5).abs() < 1e-9);
                assert!((ly1 - ry1).abs() < 1e-9);
                assert!((ly1 - 20.15).abs() < 1e-9);
            }
            other => panic!("unexpected markings: {:?}", other),
        }

        match find("right_penalty_spot") {
            PitchMarking::Spot { x, y, .. } => {
                assert!((x - 41.5).abs() < 1e-9);
                assert_eq!(y, 0.0);
            }
            other => panic!("unexpected marking: {:?}", other),
        }
    }

    #[test]
    fn test_goals_sit_behind_goal_lines() {
        let geo = FieldGeometry::standard();
        for marking in geo.markings() {
            if let PitchMarking::Rect { name, x0, x1, y0, y1, .. } = &marking {
                if name.ends_with("_goal") {
                    assert!(x0.abs() >= geo.half_length() - 1e-9);
                    assert!(x1.abs() >= geo.half_length() - 1e-9);
                    assert!((y1 - y0 - 7.32).abs() < 1e-9);
                }
            }
        }
    }

    #[test]
    fn test_contains() {
        let geo = FieldGeometry::standard();
        assert!(geo.contains(0.0, 0.0));
        assert!(geo.contains(52.5, -34.0));
        assert!(!geo.contains(53.0, 0.0));
        assert!(!geo.contains(0.0, 34.5));
    }
}
