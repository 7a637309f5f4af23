use std::rc::{Rc, Weak};
use std::time::{Duration, Instant};

use gpui::{
    AnyElement, ClickEvent, Component, InteractiveElement, IntoElement, ParentElement, Refineable,
    RenderOnce, SharedString, StatefulInteractiveElement, Styled, Svg, Window, div, px, svg,
};

use crate::config::FabConfig;
use crate::contracts::{MotionAware, WithId};
use crate::events::{FabDelegate, FabEvents};
use crate::icon::IconRegistry;
use crate::id::{slot_id, stable_auto_id};
use crate::item::FabItem;
use crate::layout;
use crate::motion::{FabMotion, MotionLevel};
use crate::state::{self, Direction, Transition, TransitionStart};
use crate::transition::{
    FabTransitionExt, animate_icon_rotation, animation_id, container_width_at, item_opacity,
    item_scale, resting_icon_rotation,
};
use crate::{control, scrim::Scrim};

type TapHandler = Rc<dyn Fn(&ClickEvent, &mut Window, &mut gpui::App)>;
type ItemTapHandler = Rc<dyn Fn(&FabItem, usize, &mut Window, &mut gpui::App)>;
type StateHandler = Rc<dyn Fn(&mut Window, &mut gpui::App)>;

/// Expandable floating action button.
///
/// A main button pinned to the bottom-trailing corner of its parent; tapping
/// it reveals a vertical stack of labeled item buttons with a spring
/// animation, collapses on re-tap, item tap, or a tap anywhere outside.
///
/// Uncontrolled by default: expansion lives in the keyed store under this
/// component's id. Pass `expanded(..)` to drive it from the host instead.
pub struct Fab {
    id: String,
    items: Vec<FabItem>,
    config: FabConfig,
    expanded: Option<bool>,
    default_expanded: bool,
    dismiss_on_outside_tap: bool,
    inset_px: f32,
    motion: FabMotion,
    events: FabEvents,
    on_main_button_tap: Option<TapHandler>,
    on_item_tap: Option<ItemTapHandler>,
    on_expand: Option<StateHandler>,
    on_collapse: Option<StateHandler>,
    style: gpui::StyleRefinement,
}

impl Fab {
    #[track_caller]
    pub fn new() -> Self {
        Self {
            id: stable_auto_id("fab"),
            items: Vec::new(),
            config: FabConfig::default(),
            expanded: None,
            default_expanded: false,
            dismiss_on_outside_tap: true,
            inset_px: 16.0,
            motion: FabMotion::default(),
            events: FabEvents::new(),
            on_main_button_tap: None,
            on_item_tap: None,
            on_expand: None,
            on_collapse: None,
            style: gpui::StyleRefinement::default(),
        }
    }

    #[track_caller]
    pub fn builder() -> crate::builder::FabBuilder {
        crate::builder::FabBuilder::new()
    }

    pub fn config(mut self, value: FabConfig) -> Self {
        self.config = value;
        self
    }

    /// Full-replace of the item list. Rendered buttons and labels are rebuilt
    /// from scratch on the next frame; expansion state is untouched.
    pub fn items(mut self, values: impl IntoIterator<Item = FabItem>) -> Self {
        self.items = values.into_iter().collect();
        self
    }

    pub fn item(mut self, value: FabItem) -> Self {
        self.items.push(value);
        self
    }

    /// Controlled mode: the host owns the logical expanded flag.
    pub fn expanded(mut self, value: bool) -> Self {
        self.expanded = Some(value);
        self
    }

    pub fn default_expanded(mut self, value: bool) -> Self {
        self.default_expanded = value;
        self
    }

    pub fn dismiss_on_outside_tap(mut self, value: bool) -> Self {
        self.dismiss_on_outside_tap = value;
        self
    }

    /// Distance from the parent's bottom-trailing corner.
    pub fn inset(mut self, value: f32) -> Self {
        self.inset_px = value.max(0.0);
        self
    }

    pub fn delegate(mut self, value: Weak<dyn FabDelegate>) -> Self {
        self.events.set_delegate(value);
        self
    }

    pub fn on_main_button_tap(
        mut self,
        handler: impl Fn(&ClickEvent, &mut Window, &mut gpui::App) + 'static,
    ) -> Self {
        self.on_main_button_tap = Some(Rc::new(handler));
        self
    }

    pub fn on_item_tap(
        mut self,
        handler: impl Fn(&FabItem, usize, &mut Window, &mut gpui::App) + 'static,
    ) -> Self {
        self.on_item_tap = Some(Rc::new(handler));
        self
    }

    pub fn on_expand(mut self, handler: impl Fn(&mut Window, &mut gpui::App) + 'static) -> Self {
        self.on_expand = Some(Rc::new(handler));
        self
    }

    pub fn on_collapse(mut self, handler: impl Fn(&mut Window, &mut gpui::App) + 'static) -> Self {
        self.on_collapse = Some(Rc::new(handler));
        self
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn item_ids(&self) -> Vec<gpui::SharedString> {
        self.items.iter().map(|item| item.id.clone()).collect()
    }

    fn duration(&self) -> Duration {
        self.motion.scaled_duration(self.config.animation_duration)
    }
}

impl Default for Fab {
    fn default() -> Self {
        Self::new()
    }
}

impl WithId for Fab {
    fn id(&self) -> &str {
        &self.id
    }

    fn id_mut(&mut self) -> &mut String {
        &mut self.id
    }
}

impl MotionAware for Fab {
    fn motion(mut self, value: FabMotion) -> Self {
        self.motion = value;
        self
    }
}

/// Programmatic surface, addressed by the component id. The motion profile
/// runs the configured duration through the same policy the rendered taps
/// use, so a reduced or disabled motion level governs these calls too.
pub fn expand(id: &str, config: &FabConfig, motion: &FabMotion, animated: bool) -> TransitionStart {
    state::apply(id, |s| {
        s.expand(
            Instant::now(),
            motion.scaled_duration(config.animation_duration),
            animated,
        )
    })
    .unwrap_or(TransitionStart::NoOp)
}

pub fn collapse(
    id: &str,
    config: &FabConfig,
    motion: &FabMotion,
    animated: bool,
) -> TransitionStart {
    state::apply(id, |s| {
        s.collapse(
            Instant::now(),
            motion.scaled_duration(config.animation_duration),
            animated,
        )
    })
    .unwrap_or(TransitionStart::NoOp)
}

pub fn toggle(id: &str, config: &FabConfig, motion: &FabMotion, animated: bool) -> TransitionStart {
    state::apply(id, |s| {
        s.toggle(
            Instant::now(),
            motion.scaled_duration(config.animation_duration),
            animated,
        )
    })
    .unwrap_or(TransitionStart::NoOp)
}

pub fn is_expanded(id: &str) -> bool {
    state::resolve(id).is_expanded()
}

/// Window-free core of an item tap: a tap raced against a list replacement is
/// dropped before any side effect; otherwise notify the delegate, run the
/// caller-visible handlers via `invoke`, then collapse. Returns whether the
/// tap was routed.
pub(crate) fn route_item_tap(
    fab_id: &str,
    item: &FabItem,
    index: usize,
    events: &FabEvents,
    duration: Duration,
    animated: bool,
    invoke: impl FnOnce(&FabItem, usize),
) -> bool {
    if index >= control::items_len(fab_id) {
        return false;
    }
    events.item_tap(item, index);
    invoke(item, index);
    let _ = state::apply(fab_id, |s| s.collapse(Instant::now(), duration, animated));
    true
}

impl Fab {
    fn render_main_icon(&self, transition: Option<Transition>, expanded: bool) -> AnyElement {
        let registry = IconRegistry::new();
        let Some(path) = registry.resolve(&self.config.main_button_icon) else {
            // Missing icon degrades silently: plain circle, no image.
            return div().into_any_element();
        };
        let icon: Svg = svg()
            .path(path.to_string_lossy().to_string())
            .w(px(24.0))
            .h(px(24.0))
            .text_color(self.config.main_button_icon_color);

        match transition {
            Some(transition) => animate_icon_rotation(
                icon,
                SharedString::from(animation_id(&self.id, "main-icon", &transition)),
                transition,
            )
            .into_any_element(),
            None => resting_icon_rotation(icon, expanded).into_any_element(),
        }
    }

    // GPUI has no parameterized drop shadow on this style surface, so the
    // configured shadow becomes a soft halo behind the button plus the stock
    // preset on the button itself.
    fn render_main_halo(&self, item_count: usize) -> AnyElement {
        let frame = layout::main_button_frame(item_count);
        let halo_color = self
            .config
            .shadow_color
            .opacity(self.config.shadow_opacity * 0.6);

        div()
            .absolute()
            .top(px(frame.top + self.config.shadow_radius * 0.4))
            .right(px(frame.right))
            .w(px(frame.width))
            .h(px(frame.height))
            .rounded_full()
            .bg(halo_color)
            .into_any_element()
    }

    fn render_main_button(
        &self,
        item_count: usize,
        transition: Option<Transition>,
        expanded: bool,
    ) -> AnyElement {
        let frame = layout::main_button_frame(item_count);
        let events = self.events.clone();
        let on_main_button_tap = self.on_main_button_tap.clone();
        let fab_id = self.id.clone();
        let duration = self.duration();
        let animated = self.motion.level != MotionLevel::None;

        div()
            .id(SharedString::from(slot_id(&self.id, "main-button")))
            .absolute()
            .top(px(frame.top))
            .right(px(frame.right))
            .w(px(frame.width))
            .h(px(frame.height))
            .rounded_full()
            .bg(self.config.main_button_color)
            .shadow_md()
            .flex()
            .items_center()
            .justify_center()
            .cursor_pointer()
            .hover(|style| style.opacity(0.9))
            .child(self.render_main_icon(transition, expanded))
            .on_click(move |event, window, cx| {
                if let Some(handler) = on_main_button_tap.as_ref() {
                    (handler)(event, window, cx);
                }
                events.main_button_tap();
                let _ = state::apply(&fab_id, |s| s.toggle(Instant::now(), duration, animated));
                window.refresh();
            })
            .into_any_element()
    }

    fn item_tap_handler(
        &self,
        index: usize,
    ) -> impl Fn(&ClickEvent, &mut Window, &mut gpui::App) + 'static {
        let events = self.events.clone();
        let on_item_tap = self.on_item_tap.clone();
        let item = self.items[index].clone();
        let fab_id = self.id.clone();
        let duration = self.duration();
        let animated = self.motion.level != MotionLevel::None;

        move |_event, window, cx| {
            let routed = route_item_tap(
                &fab_id,
                &item,
                index,
                &events,
                duration,
                animated,
                |item, index| {
                    if let Some(handler) = on_item_tap.as_ref() {
                        (handler)(item, index, window, cx);
                    }
                    if let Some(action) = item.action.as_ref() {
                        (action)(window, cx);
                    }
                },
            );
            if routed {
                window.refresh();
            }
        }
    }

    fn render_item_button(
        &self,
        index: usize,
        item_count: usize,
        transition: Option<Transition>,
        expanded: bool,
    ) -> AnyElement {
        let item = &self.items[index];
        let frame = layout::item_button_frame(item_count, index);
        let rest = layout::rest_visual(expanded);

        let mut circle = div()
            .rounded_full()
            .bg(item.background_color)
            .shadow_sm()
            .flex()
            .items_center()
            .justify_center();

        if let Some(name) = item.icon.clone() {
            circle = circle.child(
                crate::icon::Icon::named(name.to_string())
                    .with_id(slot_id(&self.id, &format!("item-icon-{index}")))
                    .size(20.0)
                    .color(item.icon_color),
            );
        }

        let circle: AnyElement = match transition {
            Some(transition) => {
                let size = layout::ITEM_BUTTON_SIZE;
                circle
                    .with_progress_animation(
                        SharedString::from(animation_id(
                            &self.id,
                            &format!("item-{index}"),
                            &transition,
                        )),
                        transition,
                        move |circle, progress| {
                            let scaled = size * item_scale(progress);
                            circle
                                .w(px(scaled))
                                .h(px(scaled))
                                .opacity(item_opacity(progress))
                        },
                    )
                    .into_any_element()
            }
            None => {
                let scaled = layout::ITEM_BUTTON_SIZE * rest.scale;
                circle
                    .w(px(scaled))
                    .h(px(scaled))
                    .opacity(rest.opacity)
                    .into_any_element()
            }
        };

        // Fixed cell keeps the hit target and geometry stable; only the
        // circle inside scales.
        let mut cell = div()
            .id(SharedString::from(slot_id(
                &self.id,
                &format!("item-{index}"),
            )))
            .absolute()
            .top(px(frame.top))
            .right(px(frame.right))
            .w(px(frame.width))
            .h(px(frame.height))
            .flex()
            .items_center()
            .justify_center()
            .child(circle);

        // Hidden items must not be tappable.
        if expanded {
            cell = cell
                .cursor_pointer()
                .on_click(self.item_tap_handler(index));
        }

        cell.into_any_element()
    }

    fn render_item_label(
        &self,
        index: usize,
        item_count: usize,
        transition: Option<Transition>,
        expanded: bool,
    ) -> AnyElement {
        let item = &self.items[index];
        let frame = layout::item_label_frame(item_count, index);
        let rest = layout::rest_visual(expanded);

        let mut label = div()
            .id(SharedString::from(slot_id(
                &self.id,
                &format!("label-{index}"),
            )))
            .absolute()
            .top(px(frame.top))
            .right(px(frame.right))
            .min_w(px(frame.width))
            .h(px(frame.height))
            .px(px(10.0))
            .rounded_md()
            .bg(self.config.label_background_color)
            .shadow_sm()
            .flex()
            .items_center()
            .justify_end()
            .text_size(px(self.config.label_font_size))
            .font_weight(self.config.label_font_weight)
            .text_color(self.config.label_text_color)
            .child(item.title.clone());

        if expanded {
            label = label
                .cursor_pointer()
                .on_click(self.item_tap_handler(index));
        }

        match transition {
            Some(transition) => label
                .with_progress_animation(
                    SharedString::from(animation_id(
                        &self.id,
                        &format!("label-{index}"),
                        &transition,
                    )),
                    transition,
                    // Labels fade but do not scale.
                    |label, progress| label.opacity(item_opacity(progress)),
                )
                .into_any_element(),
            None => label.opacity(rest.opacity).into_any_element(),
        }
    }
}

impl RenderOnce for Fab {
    fn render(self, window: &mut Window, cx: &mut gpui::App) -> impl IntoElement {
        let now = Instant::now();
        let duration = self.duration();

        // Seed before anything touches the keyed store, so the first sighting
        // settles at rest instead of animating open on mount.
        if let Some(controlled) = self.expanded {
            state::seed(&self.id, controlled);
            let _ = state::apply(&self.id, |s| s.set_spring(self.motion.spring));
            state::sync_controlled(&self.id, controlled, now, duration);
        } else {
            state::seed(&self.id, self.default_expanded);
            let _ = state::apply(&self.id, |s| s.set_spring(self.motion.spring));
        }
        control::set_items_len(&self.id, self.items.len());

        // Completion side effects run on the first frame after the animation
        // settles: fire the matching event, and (for collapse) drop the scrim.
        if let Some(direction) = state::apply(&self.id, |s| s.poll_completion(now)).flatten() {
            match direction {
                Direction::Expand => {
                    if let Some(handler) = self.on_expand.as_ref() {
                        (handler)(window, cx);
                    }
                    self.events.expand_completed();
                }
                Direction::Collapse => {
                    if let Some(handler) = self.on_collapse.as_ref() {
                        (handler)(window, cx);
                    }
                    self.events.collapse_completed();
                }
            }
        }

        let snapshot = state::resolve(&self.id);
        let expanded = snapshot.is_expanded();
        let transition = snapshot.transition();
        let item_count = self.items.len();
        let height = layout::container_height(item_count);

        let mut stack = div()
            .id(SharedString::from(slot_id(&self.id, "stack")))
            .absolute()
            .bottom(px(self.inset_px))
            .right(px(self.inset_px))
            .h(px(height));

        for index in 0..item_count {
            stack = stack.child(self.render_item_label(index, item_count, transition, expanded));
            stack = stack.child(self.render_item_button(index, item_count, transition, expanded));
        }
        stack = stack.child(self.render_main_halo(item_count));
        stack = stack.child(self.render_main_button(item_count, transition, expanded));

        let stack: AnyElement = match transition {
            Some(transition) => stack
                .with_progress_animation(
                    SharedString::from(animation_id(&self.id, "width", &transition)),
                    transition,
                    |stack, progress| stack.w(px(container_width_at(progress))),
                )
                .into_any_element(),
            None => stack
                .w(px(layout::container_width(expanded)))
                .into_any_element(),
        };

        let mut host = div()
            .id(SharedString::from(self.id.clone()))
            .absolute()
            .top_0()
            .left_0()
            .size_full();

        if snapshot.scrim_visible() && self.dismiss_on_outside_tap {
            let fab_id = self.id.clone();
            let animated = self.motion.level != MotionLevel::None;
            host = host.child(
                Scrim::new()
                    .with_id(slot_id(&self.id, "scrim"))
                    .on_tap(move |_, window, _cx| {
                        let _ =
                            state::apply(&fab_id, |s| s.collapse(Instant::now(), duration, animated));
                        window.refresh();
                    }),
            );
        }

        host.style().refine(&self.style);
        host.child(stack)
    }
}

impl IntoElement for Fab {
    type Element = Component<Self>;

    fn into_element(self) -> Self::Element {
        Component::new(self)
    }
}

crate::impl_expandable!(Fab);

impl gpui::Styled for Fab {
    fn style(&mut self) -> &mut gpui::StyleRefinement {
        &mut self.style
    }
}
