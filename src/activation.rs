//! Activation glyphs drawn inside layer nodes.
//!
//! Each network layer can carry an activation function marker: a small curve
//! drawn across the node interior (the blue squiggle in the classic
//! schematic). The curve is purely decorative; no values flow through it.
//!
//! Curves are produced as polylines sampled across the node diameter and
//! clipped geometrically to the hosting node circle or layer rectangle, so
//! the drawing surface only ever sees plain polyline primitives.

use std::str::FromStr;

use crate::geometry::{Bounds, Point};

/// Number of samples across the node diameter.
const CURVE_SAMPLES: usize = 50;

/// The activation function rendered inside a layer's nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// Flat-then-linear ramp, drawn slightly below center.
    Relu,
    /// Steep logistic curve spanning the node height.
    Sigmoid,
    /// Straight diagonal through the node center.
    Linear,
}

impl Activation {
    /// Returns the canonical lowercase name of this activation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Relu => "relu",
            Self::Sigmoid => "sigmoid",
            Self::Linear => "linear",
        }
    }

    /// Curve height at horizontal offset `x` from the node center, for a node
    /// of the given radius. Positive values are above the center.
    fn value(&self, x: f32, radius: f32) -> f32 {
        match self {
            Self::Relu => {
                if x <= 0.0 {
                    -radius / 4.0
                } else {
                    x - radius / 4.0
                }
            }
            Self::Sigmoid => radius / (1.0 + (-radius * 100.0 * x).exp()) - radius / 2.0,
            Self::Linear => x,
        }
    }

    /// Samples the activation curve across a node centered at `center`.
    ///
    /// Points run left to right over `[center.x - radius, center.x + radius]`.
    /// The y-axis grows downward, so curve values are subtracted from the
    /// center's y-coordinate.
    pub fn curve(&self, center: Point, radius: f32) -> Vec<Point> {
        (0..CURVE_SAMPLES)
            .map(|i| {
                let t = i as f32 / (CURVE_SAMPLES - 1) as f32;
                let x = center.x() - radius + t * 2.0 * radius;
                let y = center.y() - self.value(x - center.x(), radius);
                Point::new(x, y)
            })
            .collect()
    }
}

impl std::fmt::Display for Activation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Activation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "relu" => Ok(Self::Relu),
            "sigmoid" => Ok(Self::Sigmoid),
            "linear" => Ok(Self::Linear),
            _ => Err(format!(
                "unknown activation `{s}`, valid values: relu, sigmoid, linear"
            )),
        }
    }
}

/// Drops curve samples falling outside the node circle.
///
/// Replaces a clip-path: the surface receives only points that are visible.
pub fn clip_to_circle(points: Vec<Point>, center: Point, radius: f32) -> Vec<Point> {
    points
        .into_iter()
        .filter(|p| p.sub_point(center).hypot() <= radius)
        .collect()
}

/// Drops curve samples falling outside the given bounds.
pub fn clip_to_bounds(points: Vec<Point>, bounds: Bounds) -> Vec<Point> {
    points.into_iter().filter(|p| bounds.contains(*p)).collect()
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;
    use crate::geometry::Size;

    const RADIUS: f32 = 0.2;

    #[test]
    fn test_from_str_round_trips() {
        for activation in [Activation::Relu, Activation::Sigmoid, Activation::Linear] {
            assert_eq!(
                Activation::from_str(activation.as_str()).unwrap(),
                activation
            );
        }
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        let result = Activation::from_str("tanh");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("unknown activation"));
    }

    #[test]
    fn test_linear_passes_through_center() {
        assert_approx_eq!(f32, Activation::Linear.value(0.0, RADIUS), 0.0);
        assert_approx_eq!(f32, Activation::Linear.value(0.1, RADIUS), 0.1);
    }

    #[test]
    fn test_relu_is_flat_left_of_center() {
        let left = Activation::Relu.value(-0.1, RADIUS);
        let at_center = Activation::Relu.value(0.0, RADIUS);
        assert_approx_eq!(f32, left, -RADIUS / 4.0);
        assert_approx_eq!(f32, at_center, -RADIUS / 4.0);
        // Ramp to the right of center.
        assert_approx_eq!(f32, Activation::Relu.value(0.1, RADIUS), 0.1 - RADIUS / 4.0);
    }

    #[test]
    fn test_sigmoid_is_centered_and_bounded() {
        // Midpoint of the logistic sits at x = 0.
        assert_approx_eq!(f32, Activation::Sigmoid.value(0.0, RADIUS), 0.0);
        // Saturates toward +/- radius/2 at the node edges.
        let high = Activation::Sigmoid.value(RADIUS, RADIUS);
        let low = Activation::Sigmoid.value(-RADIUS, RADIUS);
        assert!(high > 0.0 && high <= RADIUS / 2.0);
        assert!(low < 0.0 && low >= -RADIUS / 2.0);
        assert_approx_eq!(f32, high, -low, epsilon = 1e-5);
    }

    #[test]
    fn test_curve_spans_node_diameter() {
        let center = Point::new(1.0, 2.0);
        let curve = Activation::Linear.curve(center, RADIUS);
        assert_eq!(curve.len(), CURVE_SAMPLES);
        assert_approx_eq!(f32, curve[0].x(), center.x() - RADIUS);
        assert_approx_eq!(f32, curve.last().unwrap().x(), center.x() + RADIUS);
    }

    #[test]
    fn test_curve_y_axis_points_down() {
        // Linear activation rises to the right, so in y-down coordinates the
        // right end of the curve must be above (smaller y than) the center.
        let center = Point::new(0.0, 0.0);
        let curve = Activation::Linear.curve(center, RADIUS);
        assert!(curve.last().unwrap().y() < center.y());
        assert!(curve[0].y() > center.y());
    }

    #[test]
    fn test_clip_to_circle_keeps_only_interior_points() {
        let center = Point::new(0.0, 0.0);
        let curve = Activation::Linear.curve(center, RADIUS);
        let clipped = clip_to_circle(curve, center, RADIUS);
        assert!(!clipped.is_empty());
        for p in &clipped {
            assert!(p.sub_point(center).hypot() <= RADIUS + 1e-6);
        }
        // The diagonal's endpoints at (+/-r, -/+r) lie outside the circle.
        assert!(clipped.len() < CURVE_SAMPLES);
    }

    #[test]
    fn test_clip_to_bounds() {
        let bounds = Bounds::from_top_left(Point::new(0.0, 0.0), Size::new(1.0, 1.0));
        let points = vec![
            Point::new(0.5, 0.5),
            Point::new(2.0, 0.5),
            Point::new(0.5, -1.0),
        ];
        let clipped = clip_to_bounds(points, bounds);
        assert_eq!(clipped, vec![Point::new(0.5, 0.5)]);
    }
}
