use super::*;
use crate::consts::INK;
use crate::input::Point;

// =============================================================
// Helpers
// =============================================================

/// A canvas whose top-left sits at (100, 200) in client space.
fn rect() -> ClientRect {
    ClientRect::new(100.0, 200.0, 280.0, 280.0)
}

/// Mouse sample at canvas-local (x, y) given [`rect`].
fn mouse_at(x: f64, y: f64) -> PointerSample {
    PointerSample::mouse(100.0 + x, 200.0 + y)
}

fn touch_at(x: f64, y: f64) -> PointerSample {
    PointerSample::touch(vec![Point::new(100.0 + x, 200.0 + y)])
}

fn draw_line(core: &mut PadCore, from: (f64, f64), to: (f64, f64)) {
    core.on_pointer_down(&mouse_at(from.0, from.1), rect());
    core.on_pointer_move(&mouse_at(to.0, to.1), rect());
    core.on_pointer_up();
}

// =============================================================
// Lifecycle
// =============================================================

#[test]
fn new_core_is_blank_and_idle() {
    let core = PadCore::new();
    assert!(core.surface.is_filled_with(BACKGROUND));
    assert!(!core.is_drawing());
}

#[test]
fn initialize_fills_black_and_renders_everything() {
    let mut core = PadCore::new();
    draw_line(&mut core, (10.0, 10.0), (100.0, 100.0));
    let action = core.initialize();
    assert!(core.surface.is_filled_with(BACKGROUND));
    assert_eq!(action, Action::Render(DirtyRect { x: 0, y: 0, width: 280, height: 280 }));
}

#[test]
fn reset_discards_strokes() {
    let mut core = PadCore::new();
    draw_line(&mut core, (50.0, 50.0), (50.0, 150.0));
    assert!(!core.surface.is_filled_with(BACKGROUND));
    core.reset();
    assert!(core.surface.is_filled_with(BACKGROUND));
}

#[test]
fn reset_twice_matches_single_reset() {
    let mut once = PadCore::new();
    draw_line(&mut once, (20.0, 20.0), (200.0, 220.0));
    once.reset();

    let mut twice = PadCore::new();
    draw_line(&mut twice, (20.0, 20.0), (200.0, 220.0));
    twice.reset();
    twice.reset();

    assert_eq!(once.surface, twice.surface);
    assert!(twice.surface.is_filled_with(BACKGROUND));
}

#[test]
fn reset_ends_stroke_in_progress() {
    let mut core = PadCore::new();
    core.on_pointer_down(&mouse_at(10.0, 10.0), rect());
    core.reset();
    assert!(!core.is_drawing());
    assert_eq!(core.on_pointer_move(&mouse_at(90.0, 90.0), rect()), Action::None);
    assert!(core.surface.is_filled_with(BACKGROUND));
}

// =============================================================
// Stroke gating
// =============================================================

#[test]
fn move_without_down_is_noop() {
    let mut core = PadCore::new();
    let action = core.on_pointer_move(&mouse_at(50.0, 50.0), rect());
    assert_eq!(action, Action::None);
    assert!(core.surface.is_filled_with(BACKGROUND));
}

#[test]
fn move_after_up_is_noop() {
    let mut core = PadCore::new();
    draw_line(&mut core, (10.0, 10.0), (30.0, 10.0));
    let before = core.surface.clone();
    assert_eq!(core.on_pointer_move(&mouse_at(200.0, 200.0), rect()), Action::None);
    assert_eq!(core.surface, before);
}

#[test]
fn move_after_leave_is_noop() {
    let mut core = PadCore::new();
    core.on_pointer_down(&mouse_at(10.0, 10.0), rect());
    core.on_pointer_leave();
    assert!(!core.is_drawing());
    assert_eq!(core.on_pointer_move(&mouse_at(200.0, 200.0), rect()), Action::None);
    assert!(core.surface.is_filled_with(BACKGROUND));
}

#[test]
fn pointer_down_alone_draws_nothing() {
    let mut core = PadCore::new();
    let action = core.on_pointer_down(&mouse_at(60.0, 60.0), rect());
    assert_eq!(action, Action::None);
    assert!(core.is_drawing());
    assert!(core.surface.is_filled_with(BACKGROUND));
}

#[test]
fn empty_touch_down_does_not_start_a_stroke() {
    let mut core = PadCore::new();
    core.on_pointer_down(&PointerSample::touch(Vec::new()), rect());
    assert!(!core.is_drawing());
}

#[test]
fn empty_touch_move_keeps_stroke_but_draws_nothing() {
    let mut core = PadCore::new();
    core.on_pointer_down(&touch_at(10.0, 10.0), rect());
    assert_eq!(core.on_pointer_move(&PointerSample::touch(Vec::new()), rect()), Action::None);
    assert!(core.is_drawing());
    assert!(core.surface.is_filled_with(BACKGROUND));
}

// =============================================================
// Drawing
// =============================================================

#[test]
fn mouse_drag_draws_in_canvas_local_space() {
    let mut core = PadCore::new();
    core.on_pointer_down(&mouse_at(50.0, 50.0), rect());
    let action = core.on_pointer_move(&mouse_at(50.0, 150.0), rect());
    assert_eq!(action, Action::Render(DirtyRect { x: 43, y: 43, width: 14, height: 114 }));
    assert_eq!(core.surface.pixel(50, 100), Some(INK));
    assert_eq!(core.surface.pixel(150, 100), Some(BACKGROUND));
}

#[test]
fn touch_drag_draws_like_mouse_drag() {
    let mut by_mouse = PadCore::new();
    by_mouse.on_pointer_down(&mouse_at(30.0, 40.0), rect());
    by_mouse.on_pointer_move(&mouse_at(180.0, 90.0), rect());

    let mut by_touch = PadCore::new();
    by_touch.on_pointer_down(&touch_at(30.0, 40.0), rect());
    by_touch.on_pointer_move(&touch_at(180.0, 90.0), rect());

    assert_eq!(by_mouse.surface, by_touch.surface);
}

#[test]
fn rect_is_applied_per_event() {
    let mut core = PadCore::new();
    core.on_pointer_down(&PointerSample::mouse(150.0, 150.0), ClientRect::new(100.0, 100.0, 280.0, 280.0));
    // Page scrolled by 50px between events: same client point, new rect.
    core.on_pointer_move(&PointerSample::mouse(150.0, 150.0), ClientRect::new(100.0, 50.0, 280.0, 280.0));
    assert_eq!(core.surface.pixel(50, 75), Some(INK));
}

// =============================================================
// Export
// =============================================================

#[test]
fn export_image_is_png_data_url() {
    let core = PadCore::new();
    let url = core.export_image().unwrap();
    assert!(url.starts_with("data:image/png;base64,"));
}

#[test]
fn export_captures_in_progress_stroke() {
    let mut core = PadCore::new();
    let blank = core.export_image().unwrap();
    core.on_pointer_down(&mouse_at(50.0, 50.0), rect());
    core.on_pointer_move(&mouse_at(50.0, 150.0), rect());
    assert!(core.is_drawing());
    let drawn = core.export_image().unwrap();
    assert_ne!(blank, drawn);
    assert_eq!(drawn, core.surface.to_data_url().unwrap());
}

#[test]
fn export_after_reset_matches_fresh_pad() {
    let mut core = PadCore::new();
    draw_line(&mut core, (50.0, 50.0), (50.0, 150.0));
    core.reset();
    assert_eq!(core.export_image().unwrap(), PadCore::new().export_image().unwrap());
}
