use log::warn;
use web_sys::{ScrollBehavior, ScrollToOptions};

/// Smoothly scrolls the window so the element with `id` sits `offset` pixels
/// below the top edge. Returns `false` when there is no such element.
pub fn scroll_to_element(id: &str, offset: f64) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let Some(element) = window.document().and_then(|document| document.get_element_by_id(id)) else {
        warn!("No section with id '{}' to scroll to", id);
        return false;
    };

    let top = element.get_bounding_client_rect().top() + window.page_y_offset().unwrap_or(0.0) - offset;
    let options = ScrollToOptions::new();
    options.set_top(top.max(0.0));
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    true
}

/// Jumps back to the top of the page, as route changes do.
pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}
