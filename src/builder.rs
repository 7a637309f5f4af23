use gpui::{SharedString, Window};

use crate::config::FabConfig;
use crate::fab::Fab;
use crate::item::FabItem;

/// Ordered-accumulation convenience for the common construction shape:
/// a config plus a list of (id, title, icon, callback) entries.
///
/// ```ignore
/// let fab = Fab::builder()
///     .config(FabConfig::new().main_button_icon("plus"))
///     .item("new-note", "New note", "pencil", |_, _| {})
///     .item("share", "Share", "share", |_, _| {})
///     .build();
/// ```
pub struct FabBuilder {
    config: FabConfig,
    items: Vec<FabItem>,
}

impl FabBuilder {
    pub fn new() -> Self {
        Self {
            config: FabConfig::default(),
            items: Vec::new(),
        }
    }

    pub fn config(mut self, value: FabConfig) -> Self {
        self.config = value;
        self
    }

    pub fn item(
        mut self,
        id: impl Into<SharedString>,
        title: impl Into<SharedString>,
        icon: impl Into<SharedString>,
        action: impl Fn(&mut Window, &mut gpui::App) + 'static,
    ) -> Self {
        self.items
            .push(FabItem::new(id, title).icon(icon).action(action));
        self
    }

    pub fn push(mut self, item: FabItem) -> Self {
        self.items.push(item);
        self
    }

    #[track_caller]
    pub fn build(self) -> Fab {
        Fab::new().config(self.config).items(self.items)
    }
}

impl Default for FabBuilder {
    fn default() -> Self {
        Self::new()
    }
}
