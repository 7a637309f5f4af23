use std::rc::Rc;

use gpui::{
    ClickEvent, Component, InteractiveElement, IntoElement, RenderOnce,
    StatefulInteractiveElement, Styled, Window, div,
};

use crate::contracts::WithId;
use crate::id::stable_auto_id;

type TapHandler = Rc<dyn Fn(&ClickEvent, &mut Window, &mut gpui::App)>;

/// Transparent, full-bounds tap catcher rendered behind the button stack
/// while the widget is expanded. It exists purely to turn an outside tap into
/// a collapse; when it is not rendered it cannot intercept anything.
pub struct Scrim {
    id: String,
    on_tap: Option<TapHandler>,
}

impl Scrim {
    #[track_caller]
    pub fn new() -> Self {
        Self {
            id: stable_auto_id("scrim"),
            on_tap: None,
        }
    }

    pub fn on_tap(
        mut self,
        handler: impl Fn(&ClickEvent, &mut Window, &mut gpui::App) + 'static,
    ) -> Self {
        self.on_tap = Some(Rc::new(handler));
        self
    }
}

impl Default for Scrim {
    fn default() -> Self {
        Self::new()
    }
}

impl WithId for Scrim {
    fn id(&self) -> &str {
        &self.id
    }

    fn id_mut(&mut self) -> &mut String {
        &mut self.id
    }
}

impl RenderOnce for Scrim {
    fn render(self, _window: &mut Window, _cx: &mut gpui::App) -> impl IntoElement {
        let mut surface = div()
            .id(self.id)
            .absolute()
            .top_0()
            .left_0()
            .size_full()
            .occlude();

        if let Some(handler) = self.on_tap {
            surface = surface.on_click(move |event, window, cx| {
                (handler)(event, window, cx);
            });
        }

        surface
    }
}

impl IntoElement for Scrim {
    type Element = Component<Self>;

    fn into_element(self) -> Self::Element {
        Component::new(self)
    }
}
