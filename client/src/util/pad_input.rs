//! Browser event to `PointerSample` conversion.

#[cfg(feature = "hydrate")]
use canvas::input::{Point, PointerSample};

#[cfg(feature = "hydrate")]
pub fn mouse_sample(ev: &leptos::ev::MouseEvent) -> PointerSample {
    PointerSample::mouse(f64::from(ev.client_x()), f64::from(ev.client_y()))
}

/// All active contacts in browser order; the pad draws with the first.
#[cfg(feature = "hydrate")]
pub fn touch_sample(ev: &leptos::ev::TouchEvent) -> PointerSample {
    let touches = ev.touches();
    let contacts = (0..touches.length())
        .filter_map(|i| touches.get(i))
        .map(|t| Point::new(f64::from(t.client_x()), f64::from(t.client_y())))
        .collect();
    PointerSample::touch(contacts)
}
