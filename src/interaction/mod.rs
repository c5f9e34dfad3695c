mod wheel;

use serde::{Deserialize, Serialize};

use crate::api::ItemId;

pub use wheel::{
    WHEEL_NOTCH_UNITS, WheelContext, WheelOutcome, resolve_zoom_factor, resolve_zoomed_unit,
    route_wheel,
};

/// Keyboard modifiers held while a pointer gesture happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ModifierKeys {
    pub control: bool,
    pub shift: bool,
    pub alt: bool,
}

impl ModifierKeys {
    #[must_use]
    pub const fn none() -> Self {
        Self {
            control: false,
            shift: false,
            alt: false,
        }
    }

    #[must_use]
    pub const fn control() -> Self {
        Self {
            control: true,
            shift: false,
            alt: false,
        }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        !self.control && !self.shift && !self.alt
    }
}

/// Modifier that must be held, alone, for the wheel to zoom instead of scroll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZoomModifier {
    Control,
    Shift,
    Alt,
}

impl ZoomModifier {
    #[must_use]
    pub const fn matches(self, keys: ModifierKeys) -> bool {
        match self {
            Self::Control => keys.control && !keys.shift && !keys.alt,
            Self::Shift => keys.shift && !keys.control && !keys.alt,
            Self::Alt => keys.alt && !keys.control && !keys.shift,
        }
    }
}

/// Tuning of wheel-driven zoom.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomBehavior {
    /// Units strictly above this many minutes zoom in coarse steps.
    pub coarse_threshold_minutes: f64,
    /// Minutes added or removed per wheel notch once zoomed out.
    pub coarse_step_minutes: f64,
    pub modifier: ZoomModifier,
}

impl Default for ZoomBehavior {
    fn default() -> Self {
        Self {
            coarse_threshold_minutes: 15.0,
            coarse_step_minutes: 15.0,
            modifier: ZoomModifier::Control,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionMode {
    Idle,
    Pressing,
}

/// Pointer state tracked between press and release over items.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InteractionState {
    mode: InteractionMode,
    cursor_x: f64,
    cursor_y: f64,
    hovered_item: Option<ItemId>,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self {
            mode: InteractionMode::Idle,
            cursor_x: 0.0,
            cursor_y: 0.0,
            hovered_item: None,
        }
    }
}

impl InteractionState {
    #[must_use]
    pub fn mode(self) -> InteractionMode {
        self.mode
    }

    #[must_use]
    pub fn cursor(self) -> (f64, f64) {
        (self.cursor_x, self.cursor_y)
    }

    #[must_use]
    pub fn hovered_item(self) -> Option<ItemId> {
        self.hovered_item
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64, hovered_item: Option<ItemId>) {
        self.cursor_x = x;
        self.cursor_y = y;
        self.hovered_item = hovered_item;
    }

    pub fn on_pointer_leave(&mut self) {
        self.hovered_item = None;
        self.mode = InteractionMode::Idle;
    }

    pub fn on_press(&mut self) {
        self.mode = InteractionMode::Pressing;
    }

    /// Ends a press and reports whether one was in progress.
    pub fn on_release(&mut self) -> bool {
        let was_pressing = self.mode == InteractionMode::Pressing;
        self.mode = InteractionMode::Idle;
        was_pressing
    }
}

#[cfg(test)]
mod tests {
    use super::{InteractionMode, InteractionState, ModifierKeys, ZoomModifier};

    #[test]
    fn zoom_modifier_requires_exact_chord() {
        assert!(ZoomModifier::Control.matches(ModifierKeys::control()));
        assert!(!ZoomModifier::Control.matches(ModifierKeys::none()));
        let chord = ModifierKeys {
            control: true,
            shift: true,
            alt: false,
        };
        assert!(!ZoomModifier::Control.matches(chord));
    }

    #[test]
    fn release_reports_pending_press_once() {
        let mut state = InteractionState::default();
        state.on_press();
        assert_eq!(state.mode(), InteractionMode::Pressing);
        assert!(state.on_release());
        assert!(!state.on_release());
    }
}
