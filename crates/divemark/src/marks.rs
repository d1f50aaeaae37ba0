use crate::arena::ArenaSpec;
use crate::geometry::Point;

pub const MARK_COUNT: usize = 3;
pub const MARK_SPACING: f64 = 30.0;

/// Current positions of the three marks.
///
/// Every mutation runs through the arena clamp, so the positions always sit
/// inside the reachable disc.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkSet {
    positions: [Point; MARK_COUNT],
}

impl MarkSet {
    /// Marks start in a short row straddling the stage center.
    pub fn home_row(spec: &ArenaSpec) -> Self {
        let center = spec.center();
        let positions = std::array::from_fn(|i| {
            Point::new(center.x - MARK_SPACING + i as f64 * MARK_SPACING, center.y)
        });
        Self { positions }
    }

    pub fn position(&self, index: usize) -> Point {
        self.positions[index]
    }

    pub fn positions(&self) -> &[Point; MARK_COUNT] {
        &self.positions
    }

    /// Clamps `proposed` into the arena and stores it, returning the point
    /// actually applied.
    pub fn drag(&mut self, index: usize, proposed: Point, spec: &ArenaSpec) -> Point {
        let applied = spec.clamp_mark(proposed);
        self.positions[index] = applied;
        applied
    }

    /// Where mark `index` lands when a token names it without usable
    /// coordinates: a row to the right of the stage center, one mark
    /// diameter apart.
    pub fn fallback_position(spec: &ArenaSpec, index: usize) -> Point {
        let center = spec.center();
        Point::new(center.x + 2.0 * spec.mark_radius() * index as f64, center.y)
    }
}
