//! Maps transition progress onto gpui animations.
//!
//! A transition animates four things at once: container width, main-icon
//! rotation, per-item opacity and per-item scale. Each animated element
//! carries its own `with_animation` wrapper, but every wrapper shares the
//! transition's duration, spring easing and sequence number, so they start
//! and finish together with no per-item stagger.

use std::time::Duration;

use gpui::{Animation, AnimationElement, AnimationExt, ElementId, Styled, Svg, Transformation,
    percentage};

use crate::id::slot_id;
use crate::layout::{COLLAPSED_ITEM_SCALE, COLLAPSED_WIDTH, EXPANDED_WIDTH,
    MAIN_ICON_EXPANDED_DEGREES};
use crate::motion::SpringCurve;
use crate::state::Transition;

/// Opacity of an item button or label at `progress`. The spring may overshoot
/// past 1; opacity is pinned to the unit range.
pub fn item_opacity(progress: f32) -> f32 {
    progress.clamp(0.0, 1.0)
}

/// Scale of an item button at `progress`. Overshoot is allowed (the spring's
/// bounce reads as a slight pop past full size); scale never goes negative.
pub fn item_scale(progress: f32) -> f32 {
    (COLLAPSED_ITEM_SCALE + (1.0 - COLLAPSED_ITEM_SCALE) * progress).max(0.0)
}

pub fn container_width_at(progress: f32) -> f32 {
    COLLAPSED_WIDTH + (EXPANDED_WIDTH - COLLAPSED_WIDTH) * progress.clamp(0.0, 1.0)
}

pub fn rotation_degrees(progress: f32) -> f32 {
    MAIN_ICON_EXPANDED_DEGREES * progress
}

pub fn spring_easing(spring: SpringCurve) -> impl Fn(f32) -> f32 {
    move |delta| spring.evaluate(delta)
}

/// Element id for an animated slot, keyed by the transition's sequence number
/// so a retargeted transition replays the animation from its new start.
pub fn animation_id(component_id: &str, slot: &str, transition: &Transition) -> String {
    slot_id(component_id, &format!("{slot}-{}", transition.seq))
}

fn timed(transition: &Transition) -> Animation {
    let duration = if transition.duration.is_zero() {
        Duration::from_millis(1)
    } else {
        transition.duration
    };
    Animation::new(duration).with_easing(spring_easing(transition.spring))
}

pub trait FabTransitionExt: Sized + AnimationExt + Styled + 'static {
    /// Runs `apply` with the interpolated progress for each animation frame,
    /// from the transition's captured start toward its target. The easing is
    /// the transition's own spring, so every frame matches
    /// `Transition::progress` at the same instant.
    fn with_progress_animation(
        self,
        id: impl Into<ElementId>,
        transition: Transition,
        apply: impl Fn(Self, f32) -> Self + 'static,
    ) -> AnimationElement<Self> {
        let from = transition.from_progress;
        let target = transition.direction.target_progress();
        self.with_animation(id, timed(&transition), move |this, delta| {
            apply(this, from + (target - from) * delta)
        })
    }
}

impl<E> FabTransitionExt for E where E: Sized + AnimationExt + Styled + 'static {}

/// Rotation is special-cased: it needs the concrete `Svg` element for
/// `with_transformation`, which is not reachable through `Styled`.
pub fn animate_icon_rotation(
    icon: Svg,
    id: impl Into<ElementId>,
    transition: Transition,
) -> AnimationElement<Svg> {
    let from = transition.from_progress;
    let target = transition.direction.target_progress();
    icon.with_animation(id, timed(&transition), move |icon, delta| {
        let progress = from + (target - from) * delta;
        icon.with_transformation(Transformation::rotate(percentage(
            rotation_degrees(progress) / 360.0,
        )))
    })
}

pub fn resting_icon_rotation(icon: Svg, expanded: bool) -> Svg {
    let degrees = crate::layout::main_icon_rotation_degrees(expanded);
    icon.with_transformation(Transformation::rotate(percentage(degrees / 360.0)))
}
