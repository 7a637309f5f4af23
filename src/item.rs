use std::rc::Rc;

use gpui::{Hsla, SharedString, Window, hsla};

pub type ItemAction = Rc<dyn Fn(&mut Window, &mut gpui::App)>;

/// One action in the stack. Immutable once constructed; the widget owns its
/// items and identifies them by index, the `id` is caller-supplied and not
/// validated for uniqueness.
#[derive(Clone)]
pub struct FabItem {
    pub id: SharedString,
    pub title: SharedString,
    pub icon: Option<SharedString>,
    pub background_color: Hsla,
    pub icon_color: Hsla,
    pub action: Option<ItemAction>,
}

impl FabItem {
    pub fn new(id: impl Into<SharedString>, title: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            icon: None,
            background_color: hsla(0.0, 0.0, 0.98, 1.0),
            icon_color: hsla(0.0, 0.0, 0.25, 1.0),
            action: None,
        }
    }

    pub fn icon(mut self, value: impl Into<SharedString>) -> Self {
        self.icon = Some(value.into());
        self
    }

    pub fn background_color(mut self, value: Hsla) -> Self {
        self.background_color = value;
        self
    }

    pub fn icon_color(mut self, value: Hsla) -> Self {
        self.icon_color = value;
        self
    }

    pub fn action(mut self, handler: impl Fn(&mut Window, &mut gpui::App) + 'static) -> Self {
        self.action = Some(Rc::new(handler));
        self
    }
}

impl std::fmt::Debug for FabItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FabItem")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("icon", &self.icon)
            .field("has_action", &self.action.is_some())
            .finish()
    }
}
