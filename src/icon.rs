//! Embedded icon pack.
//!
//! Icons are shipped inside the binary and extracted to a temp directory on
//! first use so gpui's `svg()` can load them by path. A name that resolves to
//! nothing degrades silently: the button renders without an image.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Component, Path, PathBuf};
use std::sync::{Arc, OnceLock};

use gpui::{
    Component as GpuiComponent, Hsla, InteractiveElement, IntoElement, RenderOnce, SharedString,
    Styled, div, px, svg,
};
use rust_embed::RustEmbed;

use crate::contracts::WithId;
use crate::id::stable_auto_id;

#[derive(RustEmbed)]
#[folder = "assets/icons"]
struct EmbeddedIcons;

#[derive(Clone, Debug, Default)]
struct PackIndex {
    names: BTreeMap<String, PathBuf>,
}

#[derive(Clone, Debug)]
pub struct IconRegistry {
    inner: Arc<PackIndex>,
}

impl Default for IconRegistry {
    fn default() -> Self {
        static DEFAULT_REGISTRY: OnceLock<IconRegistry> = OnceLock::new();
        DEFAULT_REGISTRY.get_or_init(Self::build_default).clone()
    }
}

impl IconRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn build_default() -> Self {
        let mut index = PackIndex::default();
        if let Some(root) = extract_embedded_pack() {
            index = index_pack(&root);
        }
        Self {
            inner: Arc::new(index),
        }
    }

    pub fn resolve(&self, name: &str) -> Option<PathBuf> {
        self.inner.names.get(name).cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.names.is_empty()
    }
}

fn index_pack(root: &Path) -> PackIndex {
    let mut index = PackIndex::default();
    let Ok(entries) = fs::read_dir(root) else {
        return index;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        let is_svg = path
            .extension()
            .and_then(|value| value.to_str())
            .map(|value| value.eq_ignore_ascii_case("svg"))
            .unwrap_or(false);
        if !is_svg {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|value| value.to_str()) {
            index.names.entry(stem.to_owned()).or_insert(path);
        }
    }
    index
}

fn extract_embedded_pack() -> Option<PathBuf> {
    let root = std::env::temp_dir()
        .join("fabmenu-icons")
        .join(env!("CARGO_PKG_VERSION"));
    let marker = root.join(".extract-ready");

    if marker.exists() && pack_is_complete(&root) {
        return Some(root);
    }

    let _ = fs::remove_dir_all(&root);
    fs::create_dir_all(&root).ok()?;

    for relative in EmbeddedIcons::iter() {
        let relative = relative.as_ref();
        let Some(safe_relative) = sanitize_relative_path(relative) else {
            continue;
        };
        let Some(content) = EmbeddedIcons::get(relative) else {
            continue;
        };
        let destination = root.join(safe_relative);
        if let Some(parent) = destination.parent() {
            fs::create_dir_all(parent).ok()?;
        }
        fs::write(destination, content.data.as_ref()).ok()?;
    }

    fs::write(marker, b"ok").ok()?;
    Some(root)
}

fn pack_is_complete(root: &Path) -> bool {
    EmbeddedIcons::iter().all(|relative| {
        sanitize_relative_path(relative.as_ref())
            .map(|safe| root.join(safe).is_file())
            .unwrap_or(false)
    })
}

fn sanitize_relative_path(input: &str) -> Option<PathBuf> {
    let mut output = PathBuf::new();
    for component in Path::new(input).components() {
        match component {
            Component::Normal(value) => output.push(value),
            _ => return None,
        }
    }
    Some(output)
}

pub struct Icon {
    id: String,
    name: String,
    size: f32,
    color: Option<Hsla>,
    registry: IconRegistry,
}

impl Icon {
    #[track_caller]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: stable_auto_id("icon"),
            name: name.into(),
            size: 16.0,
            color: None,
            registry: IconRegistry::new(),
        }
    }

    pub fn size(mut self, value: f32) -> Self {
        self.size = value.max(8.0);
        self
    }

    pub fn color(mut self, value: Hsla) -> Self {
        self.color = Some(value);
        self
    }
}

impl WithId for Icon {
    fn id(&self) -> &str {
        &self.id
    }

    fn id_mut(&mut self) -> &mut String {
        &mut self.id
    }
}

impl RenderOnce for Icon {
    fn render(self, _window: &mut gpui::Window, _cx: &mut gpui::App) -> impl IntoElement {
        if let Some(path) = self.registry.resolve(&self.name) {
            let mut icon = svg()
                .path(path.to_string_lossy().to_string())
                .w(px(self.size))
                .h(px(self.size))
                .id(SharedString::from(self.id));
            if let Some(color) = self.color {
                icon = icon.text_color(color);
            }
            return icon.into_any_element();
        }

        // Unknown icon: render an empty box of the same footprint.
        div()
            .id(SharedString::from(self.id))
            .w(px(self.size))
            .h(px(self.size))
            .into_any_element()
    }
}

impl IntoElement for Icon {
    type Element = GpuiComponent<Self>;

    fn into_element(self) -> Self::Element {
        GpuiComponent::new(self)
    }
}
