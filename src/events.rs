use std::rc::{Rc, Weak};

use crate::item::FabItem;

/// External observer of widget activity. All methods default to no-ops so an
/// observer implements only what it cares about.
pub trait FabDelegate {
    fn on_main_button_tap(&self) {}
    fn on_item_tap(&self, item: &FabItem, index: usize) {
        let _ = (item, index);
    }
    fn on_expand(&self) {}
    fn on_collapse(&self) {}
}

/// Non-owning dispatcher. Holds the delegate weakly: the widget never extends
/// the observer's lifetime, and a dropped observer is silently skipped.
#[derive(Clone, Default)]
pub struct FabEvents {
    delegate: Option<Weak<dyn FabDelegate>>,
}

impl FabEvents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_delegate(&mut self, delegate: Weak<dyn FabDelegate>) {
        self.delegate = Some(delegate);
    }

    pub fn clear_delegate(&mut self) {
        self.delegate = None;
    }

    pub fn has_live_delegate(&self) -> bool {
        self.upgrade().is_some()
    }

    fn upgrade(&self) -> Option<Rc<dyn FabDelegate>> {
        self.delegate.as_ref().and_then(Weak::upgrade)
    }

    pub fn main_button_tap(&self) {
        if let Some(delegate) = self.upgrade() {
            delegate.on_main_button_tap();
        }
    }

    pub fn item_tap(&self, item: &FabItem, index: usize) {
        if let Some(delegate) = self.upgrade() {
            delegate.on_item_tap(item, index);
        }
    }

    pub fn expand_completed(&self) {
        if let Some(delegate) = self.upgrade() {
            delegate.on_expand();
        }
    }

    pub fn collapse_completed(&self) {
        if let Some(delegate) = self.upgrade() {
            delegate.on_collapse();
        }
    }
}
