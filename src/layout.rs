//! Pure layout rule for the button stack.
//!
//! All frames are expressed as `top` / `right` insets inside the widget's
//! bounding box, so they are independent of the animated container width.
//! Expansion never moves anything: collapsed items sit in their expanded
//! slots, hidden by opacity and scale only.

pub const MAIN_BUTTON_SIZE: f32 = 56.0;
pub const ITEM_BUTTON_SIZE: f32 = 48.0;
pub const ITEM_STEP: f32 = 70.0;
pub const TRAILING_INSET: f32 = 4.0;
pub const LABEL_GAP: f32 = 12.0;
pub const LABEL_MIN_WIDTH: f32 = 100.0;
pub const LABEL_HEIGHT: f32 = 32.0;
pub const EXPANDED_WIDTH: f32 = 200.0;
pub const COLLAPSED_WIDTH: f32 = 56.0;
pub const COLLAPSED_ITEM_SCALE: f32 = 0.5;
pub const MAIN_ICON_EXPANDED_DEGREES: f32 = 45.0;

/// A rectangle anchored to the container's top-right corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    pub top: f32,
    pub right: f32,
    pub width: f32,
    pub height: f32,
}

impl Frame {
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

/// Per-item visual state at animation rest.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RestVisual {
    pub opacity: f32,
    pub scale: f32,
}

pub fn container_width(expanded: bool) -> f32 {
    if expanded { EXPANDED_WIDTH } else { COLLAPSED_WIDTH }
}

/// Fixed once items are attached; does not re-derive on expand/collapse.
pub fn container_height(item_count: usize) -> f32 {
    item_count as f32 * ITEM_STEP + MAIN_BUTTON_SIZE
}

pub fn main_button_frame(item_count: usize) -> Frame {
    Frame {
        top: item_count as f32 * ITEM_STEP,
        right: 0.0,
        width: MAIN_BUTTON_SIZE,
        height: MAIN_BUTTON_SIZE,
    }
}

/// Item `index`'s button, stacked above the main button: its bottom edge sits
/// at `main_top - ITEM_STEP * (index + 1) + MAIN_BUTTON_SIZE`.
pub fn item_button_frame(item_count: usize, index: usize) -> Frame {
    let main_top = main_button_frame(item_count).top;
    let bottom = main_top - ITEM_STEP * (index as f32 + 1.0) + MAIN_BUTTON_SIZE;
    Frame {
        top: bottom - ITEM_BUTTON_SIZE,
        right: TRAILING_INSET,
        width: ITEM_BUTTON_SIZE,
        height: ITEM_BUTTON_SIZE,
    }
}

/// Item `index`'s label, vertically centered on its button and offset to the
/// leading side by `LABEL_GAP`. `width` carries the minimum; the rendered
/// label may grow with its text.
pub fn item_label_frame(item_count: usize, index: usize) -> Frame {
    let button = item_button_frame(item_count, index);
    Frame {
        top: button.top + (ITEM_BUTTON_SIZE - LABEL_HEIGHT) / 2.0,
        right: TRAILING_INSET + ITEM_BUTTON_SIZE + LABEL_GAP,
        width: LABEL_MIN_WIDTH,
        height: LABEL_HEIGHT,
    }
}

pub fn rest_visual(expanded: bool) -> RestVisual {
    if expanded {
        RestVisual {
            opacity: 1.0,
            scale: 1.0,
        }
    } else {
        RestVisual {
            opacity: 0.0,
            scale: COLLAPSED_ITEM_SCALE,
        }
    }
}

pub fn main_icon_rotation_degrees(expanded: bool) -> f32 {
    if expanded { MAIN_ICON_EXPANDED_DEGREES } else { 0.0 }
}
