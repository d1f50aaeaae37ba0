//! The compact hex token: dragon bitmask, then three fixed-width mark
//! blocks of `(x << 12) | y`, 12 bits per coordinate.

use super::Configuration;
use crate::arena::ArenaSpec;
use crate::geometry::Point;
use crate::marks::MARK_COUNT;
use crate::selection::SlotSet;

/// Hex digits needed for the dragon mask: two for eight slots, three for
/// twelve.
fn mask_digits(slot_count: usize) -> usize {
    slot_count.div_ceil(4)
}

/// Truncates a stage coordinate into its 12-bit field.
fn pack_coord(value: f64) -> u32 {
    (value as u32).min(0xFFF)
}

pub(super) fn encode(config: &Configuration, spec: &ArenaSpec) -> String {
    let digits = mask_digits(spec.slot_count());
    let mask = config.dragons.mask();
    let mut out = format!("s={mask:0digits$x}");
    for mark in config.marks {
        let block = (pack_coord(mark.x) << 12) | pack_coord(mark.y);
        out.push_str(&format!("{block:06x}"));
    }
    out
}

pub(super) fn decode(hex: &str, spec: &ArenaSpec) -> Configuration {
    let digits = mask_digits(spec.slot_count());

    let dragons = hex
        .get(..digits)
        .and_then(|field| u32::from_str_radix(field, 16).ok())
        .map(|mask| SlotSet::from_mask(mask, spec.slot_count()))
        .unwrap_or_default();

    let marks: [Point; MARK_COUNT] = std::array::from_fn(|index| {
        let start = digits + index * 6;
        hex.get(start..start + 6)
            .and_then(|field| u32::from_str_radix(field, 16).ok())
            .map(|block| Point::new(f64::from(block >> 12), f64::from(block & 0xFFF)))
            .filter(|&p| spec.in_arena_box(p))
            .unwrap_or_else(|| {
                log::debug!("mark {index} block unreadable or out of bounds, using stage center");
                spec.center()
            })
    });

    Configuration { dragons, marks }
}
