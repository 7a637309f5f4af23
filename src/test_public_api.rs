use gpui::IntoElement;

fn into_any(element: impl IntoElement) -> gpui::AnyElement {
    element.into_any_element()
}

fn assert_render_once<T: gpui::RenderOnce>() {}

#[test]
fn crate_exports_render_components() {
    assert_render_once::<crate::fab::Fab>();
    assert_render_once::<crate::scrim::Scrim>();
    assert_render_once::<crate::icon::Icon>();
}

#[test]
fn prelude_smoke_builds_the_widget() {
    use crate::prelude::*;

    let fab = Fab::builder()
        .config(FabConfig::new().main_button_icon("plus"))
        .item("new-note", "New note", "pencil", |_, _| {})
        .item("share", "Share", "share", |_, _| {})
        .build()
        .motion(FabMotion::new().level(MotionLevel::Full))
        .inset(24.0);
    assert_eq!(fab.item_count(), 2);

    let _ = into_any(fab);
    let _ = into_any(FabItem::new("solo", "Solo").icon("star"));
}

#[test]
fn config_and_motion_values_are_plain_data() {
    let config = crate::FabConfig::new()
        .shadow_opacity(0.4)
        .label_font_size(14.0);
    let copy = config.clone();
    assert_eq!(copy.shadow_opacity, 0.4);

    let motion = crate::motion::FabMotion::new()
        .spring(crate::motion::SpringCurve::new().damping_ratio(0.8));
    assert_eq!(motion.spring.damping_ratio, 0.8);
}
