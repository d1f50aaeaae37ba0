//! One editing session over an arena: the layout, the dragon pick and the
//! three marks, with every mutation keeping the invariants intact. Hosts
//! forward primitive input events here and re-read the derived state after
//! each one.

use crate::arena::{ArenaSpec, ArenaVariant, DiveRect};
use crate::codec::{self, Configuration, Token, TokenFormat};
use crate::dive::{self, DivePose};
use crate::geometry::Point;
use crate::marks::MarkSet;
use crate::selection::Selection;
use rand::Rng;

/// Visual state of one slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotFill {
    Selected,
    Hovered,
    Idle,
}

impl SlotFill {
    /// Resolves by priority: a picked dragon shows selected even under the
    /// cursor; hover only shows on unpicked slots.
    pub fn resolve(selected: bool, hovered: bool) -> Self {
        if selected {
            Self::Selected
        } else if hovered {
            Self::Hovered
        } else {
            Self::Idle
        }
    }
}

pub struct Session {
    spec: ArenaSpec,
    selection: Selection,
    marks: MarkSet,
}

impl Session {
    pub fn new(variant: ArenaVariant) -> Self {
        Self::with_spec(ArenaSpec::new(variant))
    }

    pub fn with_spec(spec: ArenaSpec) -> Self {
        let selection = Selection::new(spec.slot_count());
        let marks = MarkSet::home_row(&spec);
        Self {
            spec,
            selection,
            marks,
        }
    }

    pub fn spec(&self) -> &ArenaSpec {
        &self.spec
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// A click on slot `index` flips its dragon state. Out-of-range clicks
    /// are ignored.
    pub fn slot_clicked(&mut self, index: usize) {
        self.selection.toggle(index);
    }

    pub fn clear_dragons(&mut self) {
        self.selection.clear();
    }

    pub fn random_dragons<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.selection.randomize(rng);
    }

    /// A drag proposal for mark `index`: the position is clamped into the
    /// arena, stored, and returned for the caller to render.
    pub fn drag_mark(&mut self, index: usize, proposed: Point) -> Point {
        self.marks.drag(index, proposed, &self.spec)
    }

    pub fn mark_position(&self, index: usize) -> Point {
        self.marks.position(index)
    }

    /// Fill state for slot `index`, with the collaborator-tracked hover
    /// folded in.
    pub fn fill(&self, index: usize, hovered: Option<usize>) -> SlotFill {
        SlotFill::resolve(self.selection.is_selected(index), hovered == Some(index))
    }

    /// Recomputed from scratch on every call; cheap enough that no
    /// invalidation tracking is worth carrying.
    pub fn dive_poses(&self) -> Vec<DivePose> {
        dive::derive_poses(&self.spec, self.selection.set(), &self.marks)
    }

    pub fn dive_rect(&self) -> DiveRect {
        self.spec.dive_rect()
    }

    pub fn set_dive_width(&mut self, width: f64) {
        self.spec.set_dive_width(width);
    }

    pub fn configuration(&self) -> Configuration {
        Configuration {
            dragons: self.selection.set(),
            marks: *self.marks.positions(),
        }
    }

    pub fn export_token(&self, format: TokenFormat) -> Token {
        format.encode(&self.configuration(), &self.spec)
    }

    /// Replaces the whole state from a share token.
    pub fn load_token(&mut self, text: &str) {
        self.apply(codec::decode(text, &self.spec));
    }

    /// Installs a configuration wholesale, re-screening the dragon set and
    /// re-clamping marks so the session invariants hold even for
    /// hand-built input.
    pub fn apply(&mut self, config: Configuration) {
        self.selection.restore(config.dragons);
        for (index, mark) in config.marks.into_iter().enumerate() {
            self.marks.drag(index, mark, &self.spec);
        }
    }
}
