//! Reviews panel sizing
//!
//! The reviews list scrolls on its own; its height is capped at the menu
//! panel's rendered height so both columns line up.

use crate::host::{Host, Node};

pub fn max_height_value(reference_height: f64) -> String {
    format!("{}px", reference_height)
}

/// Enable smooth internal scrolling on the reviews container
pub fn render_scroll_behavior<H: Host + ?Sized>(host: &mut H) {
    if host.exists(Node::ReviewsContainer) {
        host.set_style(Node::ReviewsContainer, "scroll-behavior", "smooth");
    }
}

/// Match the reviews container's max height to the menu panel. No-op when
/// either element is missing.
pub fn sync_max_height<H: Host + ?Sized>(host: &mut H) {
    if !host.exists(Node::ReviewsContainer) {
        return;
    }
    if let Some(height) = host.offset_height(Node::MenuSection) {
        host.set_style(Node::ReviewsContainer, "max-height", &max_height_value(height));
    }
}
