//! Geometry engine and share-token codec for a circular arena planner: a
//! fixed ring of clock slots, a picked subset of five dragons, three
//! draggable marks held inside the arena, and the five oriented dive
//! rectangles derived from marks and dragons. Rendering and event delivery
//! stay with the host; this crate owns the state, the math and the wire
//! formats.

pub mod arena;
pub mod codec;
pub mod dive;
pub mod geometry;
pub mod marks;
pub mod selection;
pub mod session;
pub mod theme;

pub use arena::{ArenaError, ArenaSpec, ArenaVariant, DiveRect};
pub use codec::{Configuration, Token, TokenFormat, decode};
pub use dive::{DRAGON_COUNT, DivePose};
pub use geometry::Point;
pub use marks::{MARK_COUNT, MarkSet};
pub use selection::{Selection, SlotSet};
pub use session::{Session, SlotFill};
pub use theme::ThemeColors;
