//! Blocking user notifications.

#[cfg(feature = "hydrate")]
pub fn alert(message: &str) {
    let Some(window) = web_sys::window() else {
        log::warn!("no window for alert: {message}");
        return;
    };
    if let Err(err) = window.alert_with_message(message) {
        log::warn!("alert failed: {err:?}");
    }
}
