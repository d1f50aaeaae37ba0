/// A point on the stage plane. The y axis grows downward, matching screen
/// coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Clamps `proposed` into the disc of `radius` around `center`.
///
/// Axis clamp into the bounding square first, then a radial projection onto
/// the circle for the corner regions the square still admits. Points already
/// inside come back unchanged, including `center` itself. A NaN coordinate
/// carries no direction and reads as the center on its axis, so the result
/// is always a finite point in the disc.
pub fn clamp_to_disc(proposed: Point, center: Point, radius: f64) -> Point {
    let px = if proposed.x.is_nan() { center.x } else { proposed.x };
    let py = if proposed.y.is_nan() { center.y } else { proposed.y };

    let x = px.clamp(center.x - radius, center.x + radius);
    let y = py.clamp(center.y - radius, center.y + radius);

    let (dx, dy) = (x - center.x, y - center.y);
    let dist = dx.hypot(dy);
    if dist <= radius {
        return Point::new(x, y);
    }

    let scale = radius / dist;
    Point::new(center.x + dx * scale, center.y + dy * scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CENTER: Point = Point { x: 300.0, y: 300.0 };
    const RADIUS: f64 = 150.0;

    #[test]
    fn inside_points_pass_through() {
        let cases = vec![
            Point::new(300.0, 300.0),
            Point::new(310.0, 280.0),
            Point::new(300.0, 450.0),
            Point::new(150.0, 300.0),
        ];

        for p in cases {
            assert_eq!(clamp_to_disc(p, CENTER, RADIUS), p);
        }
    }

    #[test]
    fn outside_points_land_on_the_boundary() {
        let cases = vec![
            Point::new(600.0, 300.0),
            Point::new(300.0, -50.0),
            Point::new(0.0, 0.0),
            Point::new(600.0, 600.0),
            Point::new(460.0, 310.0),
        ];

        for p in cases {
            let clamped = clamp_to_disc(p, CENTER, RADIUS);
            assert!(
                (clamped.distance(CENTER) - RADIUS).abs() < 1e-9,
                "{p:?} clamped to {clamped:?}"
            );
        }
    }

    #[test]
    fn corner_drag_projects_onto_the_diagonal() {
        let clamped = clamp_to_disc(Point::new(600.0, 600.0), CENTER, RADIUS);
        let expected = 300.0 + RADIUS / 2.0_f64.sqrt();
        assert!((clamped.x - expected).abs() < 1e-9);
        assert!((clamped.y - expected).abs() < 1e-9);
    }

    #[test]
    fn axis_overshoot_keeps_the_other_axis() {
        // x far out, y already central: only x moves
        let clamped = clamp_to_disc(Point::new(1000.0, 300.0), CENTER, RADIUS);
        assert_eq!(clamped, Point::new(450.0, 300.0));
    }

    #[test]
    fn non_finite_proposals_cannot_escape_the_disc() {
        let cases = vec![
            Point::new(f64::NAN, f64::NAN),
            Point::new(f64::NAN, 320.0),
            Point::new(250.0, f64::NAN),
            Point::new(f64::INFINITY, 300.0),
            Point::new(f64::NEG_INFINITY, f64::INFINITY),
        ];

        for p in cases {
            let clamped = clamp_to_disc(p, CENTER, RADIUS);
            assert!(clamped.x.is_finite() && clamped.y.is_finite(), "{p:?}");
            assert!(
                clamped.distance(CENTER) <= RADIUS + 1e-9,
                "{p:?} clamped to {clamped:?}"
            );
        }
    }

    #[test]
    fn containment_holds_over_a_coordinate_grid() {
        for gx in 0..=12 {
            for gy in 0..=12 {
                let p = Point::new(gx as f64 * 50.0, gy as f64 * 50.0);
                let clamped = clamp_to_disc(p, CENTER, RADIUS);
                assert!(clamped.distance(CENTER) <= RADIUS + 1e-9, "{p:?}");
            }
        }
    }
}
