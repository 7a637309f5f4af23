//! Keyed store backing uncontrolled component state.
//!
//! `RenderOnce` components are rebuilt from scratch every frame, so anything
//! that must survive a render lives here, keyed by the component's stable id.
//! Lock failures fall back to defaults; the store is only ever touched from
//! the UI thread.

use std::{
    collections::HashMap,
    sync::{LazyLock, Mutex},
};

use crate::state::FabState;

static FAB_STATE: LazyLock<Mutex<HashMap<String, FabState>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));
static ITEMS_LEN: LazyLock<Mutex<HashMap<String, usize>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

pub fn fab_state(id: &str) -> FabState {
    if let Ok(mut store) = FAB_STATE.lock() {
        return *store.entry(id.to_owned()).or_default();
    }
    FabState::new()
}

pub fn contains_fab(id: &str) -> bool {
    if let Ok(store) = FAB_STATE.lock() {
        return store.contains_key(id);
    }
    false
}

pub fn set_fab_state(id: &str, value: FabState) {
    if let Ok(mut store) = FAB_STATE.lock() {
        store.insert(id.to_owned(), value);
    }
}

pub fn update_fab_state<R>(id: &str, apply: impl FnOnce(&mut FabState) -> R) -> Option<R> {
    if let Ok(mut store) = FAB_STATE.lock() {
        return Some(apply(store.entry(id.to_owned()).or_default()));
    }
    None
}

/// Item count seen by the most recent render. Tap handlers compare against it
/// so a tap raced against a list replacement is dropped instead of routed to
/// a stale index.
pub fn items_len(id: &str) -> usize {
    if let Ok(mut store) = ITEMS_LEN.lock() {
        return *store.entry(id.to_owned()).or_insert(0);
    }
    0
}

pub fn set_items_len(id: &str, value: usize) {
    if let Ok(mut store) = ITEMS_LEN.lock() {
        store.insert(id.to_owned(), value);
    }
}

/// Test hook: drops every entry so suites start from a clean slate.
pub fn clear_all() {
    if let Ok(mut store) = FAB_STATE.lock() {
        store.clear();
    }
    if let Ok(mut store) = ITEMS_LEN.lock() {
        store.clear();
    }
}
