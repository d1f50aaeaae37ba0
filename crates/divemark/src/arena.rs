use crate::geometry::{self, Point};
use serde::Serialize;
use serde_with::DeserializeFromStr;
use strum::{Display as StrumDisplay, EnumIter, EnumString};
use thiserror::Error;

pub const STAGE_SIZE: f64 = 600.0;
pub const ARENA_RADIUS: f64 = 160.0;
pub const SLOT_RADIUS: f64 = 25.0;
pub const MARK_RADIUS: f64 = 10.0;
pub const RING_MARGIN: f64 = 2.0; // gap between the arena edge and the slot ring
pub const DIVE_WIDTH: f64 = 110.0;
pub const SLOT_FACE_OFFSET_DEG: f64 = 45.0; // clock faces are turned past their ring angle

/// Ring layout: eight slots at 45 degree spacing or twelve at 30.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    DeserializeFromStr,
    EnumString,
    EnumIter,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum ArenaVariant {
    #[default]
    #[strum(serialize = "Eight", serialize = "8")]
    Eight,
    #[strum(serialize = "Twelve", serialize = "12")]
    Twelve,
}

impl ArenaVariant {
    pub fn slot_count(&self) -> usize {
        match self {
            Self::Eight => 8,
            Self::Twelve => 12,
        }
    }

    pub fn angle_step_deg(&self) -> f64 {
        360.0 / self.slot_count() as f64
    }
}

#[derive(Error, Debug)]
pub enum ArenaError {
    #[error("stage side must be positive, got {0}")]
    BadStage(f64),
    #[error("radii must be positive, got arena {arena}, slot {slot}, mark {mark}")]
    BadRadius { arena: f64, slot: f64, mark: f64 },
    #[error("mark radius {mark} does not fit inside arena radius {arena}")]
    MarkTooLarge { mark: f64, arena: f64 },
    #[error("slot ring (outer radius {ring}) overflows the {stage} stage")]
    RingOutsideStage { ring: f64, stage: f64 },
}

/// Fixed dimensions of one arena layout plus the derived slot ring.
///
/// Slot centers are computed once at construction, indexed clockwise from
/// the top of the ring.
#[derive(Debug, Clone, PartialEq)]
pub struct ArenaSpec {
    variant: ArenaVariant,
    stage_size: f64,
    arena_radius: f64,
    slot_radius: f64,
    mark_radius: f64,
    dive_width: f64,
    slot_centers: Vec<Point>,
}

impl ArenaSpec {
    pub fn new(variant: ArenaVariant) -> Self {
        Self::build(variant, STAGE_SIZE, ARENA_RADIUS, SLOT_RADIUS, MARK_RADIUS)
    }

    /// Non-standard dimensions, validated so every derived quantity stays
    /// meaningful.
    pub fn custom(
        variant: ArenaVariant,
        stage_size: f64,
        arena_radius: f64,
        slot_radius: f64,
        mark_radius: f64,
    ) -> Result<Self, ArenaError> {
        if !stage_size.is_finite() || stage_size <= 0.0 {
            return Err(ArenaError::BadStage(stage_size));
        }
        if [arena_radius, slot_radius, mark_radius]
            .iter()
            .any(|r| !r.is_finite() || *r <= 0.0)
        {
            return Err(ArenaError::BadRadius {
                arena: arena_radius,
                slot: slot_radius,
                mark: mark_radius,
            });
        }
        if mark_radius >= arena_radius {
            return Err(ArenaError::MarkTooLarge {
                mark: mark_radius,
                arena: arena_radius,
            });
        }

        let ring = arena_radius + 2.0 * slot_radius + RING_MARGIN;
        if ring + slot_radius > stage_size / 2.0 {
            return Err(ArenaError::RingOutsideStage {
                ring: ring + slot_radius,
                stage: stage_size,
            });
        }

        Ok(Self::build(
            variant,
            stage_size,
            arena_radius,
            slot_radius,
            mark_radius,
        ))
    }

    fn build(
        variant: ArenaVariant,
        stage_size: f64,
        arena_radius: f64,
        slot_radius: f64,
        mark_radius: f64,
    ) -> Self {
        let center = Point::new(stage_size / 2.0, stage_size / 2.0);
        let ring = arena_radius + 2.0 * slot_radius + RING_MARGIN;
        let step = variant.angle_step_deg();

        // clockwise from twelve o'clock, y axis pointing down
        let slot_centers = (0..variant.slot_count())
            .map(|i| {
                let theta = (i as f64 * step).to_radians();
                Point::new(center.x + ring * theta.sin(), center.y - ring * theta.cos())
            })
            .collect();

        Self {
            variant,
            stage_size,
            arena_radius,
            slot_radius,
            mark_radius,
            dive_width: DIVE_WIDTH,
            slot_centers,
        }
    }

    pub fn variant(&self) -> ArenaVariant {
        self.variant
    }

    pub fn slot_count(&self) -> usize {
        self.slot_centers.len()
    }

    pub fn stage_size(&self) -> f64 {
        self.stage_size
    }

    pub fn arena_radius(&self) -> f64 {
        self.arena_radius
    }

    pub fn slot_radius(&self) -> f64 {
        self.slot_radius
    }

    pub fn mark_radius(&self) -> f64 {
        self.mark_radius
    }

    pub fn center(&self) -> Point {
        Point::new(self.stage_size / 2.0, self.stage_size / 2.0)
    }

    /// Orbital radius of the slot centers.
    pub fn ring_radius(&self) -> f64 {
        self.arena_radius + 2.0 * self.slot_radius + RING_MARGIN
    }

    pub fn slot_center(&self, index: usize) -> Point {
        self.slot_centers[index]
    }

    pub fn slot_centers(&self) -> &[Point] {
        &self.slot_centers
    }

    /// Placement angle of slot `index` in degrees, zero at the top,
    /// increasing clockwise.
    pub fn slot_angle_deg(&self, index: usize) -> f64 {
        index as f64 * self.variant.angle_step_deg()
    }

    /// Angle to draw the clock face at, offset from the placement angle.
    pub fn slot_face_deg(&self, index: usize) -> f64 {
        self.slot_angle_deg(index) + SLOT_FACE_OFFSET_DEG
    }

    /// Greatest distance from the center at which a mark still fits
    /// entirely inside the arena.
    pub fn mark_reach(&self) -> f64 {
        self.arena_radius - self.mark_radius
    }

    pub fn clamp_mark(&self, proposed: Point) -> Point {
        geometry::clamp_to_disc(proposed, self.center(), self.mark_reach())
    }

    pub fn holds_mark(&self, p: Point) -> bool {
        // one ulp of slack for points the radial projection put exactly on
        // the boundary
        p.distance(self.center()) <= self.mark_reach() + 1e-9
    }

    /// Whether `p` lies within the arena's bounding square. The wire
    /// decoder runs this cheaper test; the circular clamp is re-applied
    /// when a session installs the decoded state.
    pub fn in_arena_box(&self, p: Point) -> bool {
        let center = self.center();
        (p.x - center.x).abs() <= self.arena_radius && (p.y - center.y).abs() <= self.arena_radius
    }

    pub fn dive_width(&self) -> f64 {
        self.dive_width
    }

    /// Anything non-positive or non-finite falls back to the stock width.
    pub fn set_dive_width(&mut self, width: f64) {
        self.dive_width = if width.is_finite() && width > 0.0 {
            width
        } else {
            DIVE_WIDTH
        };
    }

    /// Dimensions of a dive rectangle: the adjustable width by a fixed
    /// height spanning the arena diameter plus two slot diameters.
    pub fn dive_rect(&self) -> DiveRect {
        DiveRect {
            width: self.dive_width,
            height: 2.0 * self.arena_radius + 4.0 * self.slot_radius,
        }
    }
}

/// Width and height of a dive rectangle. A dive anchors at the midpoint of
/// its top edge, so the rendered rect spans `width` centered on the anchor
/// and `height` away from it along the rotated down-axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiveRect {
    pub width: f64,
    pub height: f64,
}
