use crate::dive::DRAGON_COUNT;
use rand::Rng;

/// Selected slot indices packed as a bitmask, bit `i` for slot `i`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SlotSet(u16);

impl SlotSet {
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Builds a set from a raw mask, dropping bits at or above `slot_count`.
    pub fn from_mask(mask: u32, slot_count: usize) -> Self {
        let keep = (1u32 << slot_count) - 1;
        Self((mask & keep) as u16)
    }

    pub fn contains(self, index: usize) -> bool {
        index < 16 && self.0 & (1 << index) != 0
    }

    pub fn insert(&mut self, index: usize) {
        debug_assert!(index < 16);
        self.0 |= 1 << index;
    }

    pub fn toggle(&mut self, index: usize) {
        debug_assert!(index < 16);
        self.0 ^= 1 << index;
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn mask(self) -> u16 {
        self.0
    }

    /// Set bits in ascending index order.
    pub fn iter(self) -> impl Iterator<Item = usize> {
        (0..16).filter(move |&i| self.contains(i))
    }
}

impl FromIterator<usize> for SlotSet {
    fn from_iter<T: IntoIterator<Item = usize>>(iter: T) -> Self {
        let mut set = Self::empty();
        for index in iter {
            set.insert(index);
        }
        set
    }
}

/// Tracks which slots are picked as dragons, holding the slot-count bound
/// on every mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    slot_count: usize,
    set: SlotSet,
}

impl Selection {
    pub fn new(slot_count: usize) -> Self {
        Self {
            slot_count,
            set: SlotSet::empty(),
        }
    }

    pub fn slot_count(&self) -> usize {
        self.slot_count
    }

    pub fn is_selected(&self, index: usize) -> bool {
        index < self.slot_count && self.set.contains(index)
    }

    /// Flips slot `index`. Out-of-range indices are ignored.
    pub fn toggle(&mut self, index: usize) {
        if index < self.slot_count {
            self.set.toggle(index);
        }
    }

    pub fn clear(&mut self) {
        self.set = SlotSet::empty();
    }

    pub fn count(&self) -> usize {
        self.set.len()
    }

    pub fn set(&self) -> SlotSet {
        self.set
    }

    pub fn mask(&self) -> u16 {
        self.set.mask()
    }

    /// Selected indices in ascending order.
    pub fn indices(&self) -> Vec<usize> {
        self.set.iter().collect()
    }

    /// Replaces the whole selection, dropping indices the arena does not
    /// have.
    pub fn restore(&mut self, set: SlotSet) {
        self.set = SlotSet::from_mask(set.mask().into(), self.slot_count);
    }

    /// Picks exactly [`DRAGON_COUNT`] distinct slots uniformly at random,
    /// replacing the current selection: every index gets a random tag,
    /// the five smallest tags win.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let mut order: Vec<(usize, f64)> =
            (0..self.slot_count).map(|i| (i, rng.random())).collect();
        order.sort_by(|a, b| a.1.total_cmp(&b.1));

        self.set = SlotSet::empty();
        for &(index, _) in order.iter().take(DRAGON_COUNT) {
            self.set.insert(index);
        }
    }
}
