use std::time::Duration;

use gpui::{FontWeight, Hsla, SharedString, hsla};

/// Visual and timing parameters for the widget. Immutable value; swapping the
/// config on a rendered `Fab` re-applies every visual on the next frame
/// without touching expansion state or the item list.
#[derive(Clone, Debug)]
pub struct FabConfig {
    pub main_button_color: Hsla,
    pub main_button_icon: SharedString,
    pub main_button_icon_color: Hsla,
    pub shadow_color: Hsla,
    pub shadow_opacity: f32,
    pub shadow_radius: f32,
    pub animation_duration: Duration,
    pub label_background_color: Hsla,
    pub label_text_color: Hsla,
    pub label_font_size: f32,
    pub label_font_weight: FontWeight,
}

impl Default for FabConfig {
    fn default() -> Self {
        Self {
            main_button_color: hsla(211.0 / 360.0, 0.92, 0.52, 1.0),
            main_button_icon: "plus".into(),
            main_button_icon_color: gpui::white(),
            shadow_color: gpui::black(),
            shadow_opacity: 0.25,
            shadow_radius: 8.0,
            animation_duration: Duration::from_millis(300),
            label_background_color: hsla(0.0, 0.0, 1.0, 0.92),
            label_text_color: hsla(0.0, 0.0, 0.15, 1.0),
            label_font_size: 13.0,
            label_font_weight: FontWeight::MEDIUM,
        }
    }
}

impl FabConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn main_button_color(mut self, value: Hsla) -> Self {
        self.main_button_color = value;
        self
    }

    pub fn main_button_icon(mut self, value: impl Into<SharedString>) -> Self {
        self.main_button_icon = value.into();
        self
    }

    pub fn main_button_icon_color(mut self, value: Hsla) -> Self {
        self.main_button_icon_color = value;
        self
    }

    pub fn shadow_color(mut self, value: Hsla) -> Self {
        self.shadow_color = value;
        self
    }

    pub fn shadow_opacity(mut self, value: f32) -> Self {
        self.shadow_opacity = value.clamp(0.0, 1.0);
        self
    }

    pub fn shadow_radius(mut self, value: f32) -> Self {
        self.shadow_radius = value.max(0.0);
        self
    }

    pub fn animation_duration(mut self, value: Duration) -> Self {
        self.animation_duration = value;
        self
    }

    pub fn label_background_color(mut self, value: Hsla) -> Self {
        self.label_background_color = value;
        self
    }

    pub fn label_text_color(mut self, value: Hsla) -> Self {
        self.label_text_color = value;
        self
    }

    pub fn label_font_size(mut self, value: f32) -> Self {
        self.label_font_size = value.max(1.0);
        self
    }

    pub fn label_font_weight(mut self, value: FontWeight) -> Self {
        self.label_font_weight = value;
        self
    }
}
