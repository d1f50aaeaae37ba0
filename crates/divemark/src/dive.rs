//! Dive pose derivation.
//!
//! With exactly five dragons picked, five dive rectangles hang off the
//! dragon slots, each turned so its long axis points at one of the marks.

use crate::arena::ArenaSpec;
use crate::geometry::Point;
use crate::marks::MarkSet;
use crate::selection::SlotSet;

pub const DRAGON_COUNT: usize = 5;

/// Which mark each dive faces, by pose order: the first two dragons share
/// mark 0, the middle one takes mark 1, the last two share mark 2.
pub const MARK_FOR_POSE: [usize; DRAGON_COUNT] = [0, 0, 1, 2, 2];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DivePose {
    /// Midpoint of the rectangle's top edge, pinned to the dragon center.
    pub anchor: Point,
    /// Clockwise rotation in degrees; zero leaves the rectangle hanging
    /// straight down.
    pub rotation_deg: f64,
}

/// Rotation that points a dive hanging from `dragon` toward `mark`.
///
/// A mark sitting exactly on the dragon keeps the dive upright rather than
/// producing a non-number.
pub fn rotation_deg(mark: Point, dragon: Point) -> f64 {
    let dx = mark.x - dragon.x;
    let dy = mark.y - dragon.y;
    let dist = dx.hypot(dy);
    if dist == 0.0 {
        return 0.0;
    }

    let angle = (dy / dist).clamp(-1.0, 1.0).acos().to_degrees();
    if dx < 0.0 { angle } else { -angle }
}

/// Derives the five dive poses, one per picked dragon in ascending slot
/// order. Anything other than exactly five dragons yields no poses, and
/// the caller is expected to clear whatever it drew last time.
pub fn derive_poses(spec: &ArenaSpec, dragons: SlotSet, marks: &MarkSet) -> Vec<DivePose> {
    if dragons.len() != DRAGON_COUNT {
        return Vec::new();
    }

    dragons
        .iter()
        .zip(MARK_FOR_POSE)
        .map(|(slot, mark)| {
            let anchor = spec.slot_center(slot);
            DivePose {
                anchor,
                rotation_deg: rotation_deg(marks.position(mark), anchor),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arena::ArenaVariant;

    fn eight() -> ArenaSpec {
        ArenaSpec::new(ArenaVariant::Eight)
    }

    #[test]
    fn rotation_quadrants() {
        let dragon = Point::new(300.0, 300.0);
        let cases = vec![
            // mark straight below: rectangle already points at it
            (Point::new(300.0, 400.0), 0.0),
            // mark straight left: quarter turn clockwise
            (Point::new(200.0, 300.0), 90.0),
            // mark straight right: quarter turn counter-clockwise
            (Point::new(400.0, 300.0), -90.0),
            (Point::new(200.0, 400.0), 45.0),
            (Point::new(400.0, 400.0), -45.0),
            (Point::new(200.0, 200.0), 135.0),
            (Point::new(400.0, 200.0), -135.0),
        ];

        for (mark, expected) in cases {
            let got = rotation_deg(mark, dragon);
            assert!((got - expected).abs() < 1e-9, "mark {mark:?}: got {got}");
        }
    }

    #[test]
    fn coincident_mark_keeps_the_dive_upright() {
        let p = Point::new(123.0, 456.0);
        assert_eq!(rotation_deg(p, p), 0.0);
    }

    #[test]
    fn poses_require_exactly_five_dragons() {
        let spec = eight();
        let marks = MarkSet::home_row(&spec);

        for count in [0usize, 1, 4, 6] {
            let dragons: SlotSet = (0..count).collect();
            assert!(
                derive_poses(&spec, dragons, &marks).is_empty(),
                "{count} dragons"
            );
        }

        let dragons: SlotSet = (0..5).collect();
        assert_eq!(derive_poses(&spec, dragons, &marks).len(), 5);
    }

    #[test]
    fn poses_follow_ascending_slot_order() {
        let spec = eight();
        let marks = MarkSet::home_row(&spec);
        // inserted out of order; derivation still walks 1,2,4,6,7
        let dragons: SlotSet = [7, 2, 6, 1, 4].into_iter().collect();

        let poses = derive_poses(&spec, dragons, &marks);
        let anchors: Vec<Point> = poses.iter().map(|p| p.anchor).collect();
        let expected: Vec<Point> = [1, 2, 4, 6, 7]
            .into_iter()
            .map(|i| spec.slot_center(i))
            .collect();
        assert_eq!(anchors, expected);
    }

    #[test]
    fn centered_marks_recover_each_slot_placement_angle() {
        // with every mark on the arena center, a dive hanging from slot i
        // must rotate by exactly the slot's own placement angle (mod 360)
        let spec = eight();
        let mut marks = MarkSet::home_row(&spec);
        for index in 0..3 {
            marks.drag(index, spec.center(), &spec);
        }

        let dragons: SlotSet = (0..5).collect();
        let poses = derive_poses(&spec, dragons, &marks);

        for (pose, slot) in poses.iter().zip(0..5) {
            let normalized = pose.rotation_deg.rem_euclid(360.0);
            let expected = spec.slot_angle_deg(slot);
            assert!(
                (normalized - expected).abs() < 1e-6,
                "slot {slot}: rotation {normalized}, placement {expected}"
            );
        }
    }

    #[test]
    fn shared_marks_follow_the_pairing_table() {
        let spec = eight();
        let mut marks = MarkSet::home_row(&spec);
        marks.drag(0, Point::new(250.0, 320.0), &spec);
        marks.drag(1, Point::new(300.0, 300.0), &spec);
        marks.drag(2, Point::new(360.0, 270.0), &spec);

        let dragons: SlotSet = (0..5).collect();
        let poses = derive_poses(&spec, dragons, &marks);

        for (pose, (slot, mark)) in poses.iter().zip((0..5).zip(MARK_FOR_POSE)) {
            let expected = rotation_deg(marks.position(mark), spec.slot_center(slot));
            assert_eq!(pose.rotation_deg, expected);
        }
    }
}
