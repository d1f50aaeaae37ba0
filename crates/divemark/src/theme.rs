use crate::marks::MARK_COUNT;
use crate::session::SlotFill;
use palette::Srgba;

/// Stock palette for arena renderers, one color per drawable element.
pub struct ThemeColors {
    pub selected: Srgba<f64>,
    pub hovered: Srgba<f64>,
    pub idle: Srgba<f64>,
    pub arena: Srgba<f64>,
    pub dive: Srgba<f64>,
    pub marks: [Srgba<f64>; MARK_COUNT],
}

impl ThemeColors {
    /// Crimson slots over a violet arena, one saturated color per mark,
    /// translucent dives.
    pub fn standard() -> Self {
        Self {
            selected: Srgba::new(180.0 / 255.0, 0.0, 30.0 / 255.0, 0.9),
            hovered: Srgba::new(180.0 / 255.0, 0.0, 30.0 / 255.0, 0.5),
            idle: Srgba::new(180.0 / 255.0, 0.0, 30.0 / 255.0, 0.1),
            arena: Srgba::new(90.0 / 255.0, 0.0, 90.0 / 255.0, 0.3),
            dive: Srgba::new(225.0 / 255.0, 178.0 / 255.0, 1.0, 0.6),
            marks: [
                Srgba::new(249.0 / 255.0, 29.0 / 255.0, 73.0 / 255.0, 1.0),
                Srgba::new(242.0 / 255.0, 239.0 / 255.0, 72.0 / 255.0, 1.0),
                Srgba::new(112.0 / 255.0, 231.0 / 255.0, 1.0, 1.0),
            ],
        }
    }

    pub fn fill(&self, state: SlotFill) -> Srgba<f64> {
        match state {
            SlotFill::Selected => self.selected,
            SlotFill::Hovered => self.hovered,
            SlotFill::Idle => self.idle,
        }
    }
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self::standard()
    }
}
