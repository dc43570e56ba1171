//! Events fed into the controller
//!
//! - **SiteEvent**: what the browser (or a test) reports
//! - **Deferred**: work a component scheduled for later, dispatched back in
//!   as `SiteEvent::Deferred` when its timer fires

use crate::notify::ToastId;

// =============================================================================
// CARDS
// =============================================================================

/// A hoverable card, by collection and index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Card {
    MenuItem(usize),
    Review(usize),
    ContactItem(usize),
}

// =============================================================================
// KEYBOARD
// =============================================================================

/// Modifier-aware key press. `key` is the DOM `KeyboardEvent.key` value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPress {
    pub key: String,
    pub ctrl: bool,
    pub meta: bool,
}

impl KeyPress {
    pub fn plain(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ctrl: false,
            meta: false,
        }
    }

    pub fn with_ctrl(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ctrl: true,
            meta: false,
        }
    }

    /// Ctrl on most platforms, Cmd on macOS
    pub fn command_held(&self) -> bool {
        self.ctrl || self.meta
    }
}

// =============================================================================
// SITE EVENT
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum SiteEvent {
    Scroll,
    Resize,
    /// Window `load`
    WindowLoaded,
    KeyDown(KeyPress),
    /// Click on any in-page `a[href^="#"]`; `target` excludes the `#`
    AnchorClicked { target: String },
    HamburgerClicked,
    NavLinkClicked(usize),
    ScrollIndicatorClicked,
    GalleryItemClicked(usize),
    LightboxCloseClicked,
    /// Click that landed on the overlay itself, not its content
    LightboxBackdropClicked,
    /// A fade-in element crossed the visibility threshold
    FadeInIntersected(usize),
    CardHover { card: Card, entered: bool },
    CardClicked(Card),
    ToastCloseClicked(ToastId),
    Deferred(Deferred),
}

impl SiteEvent {
    /// Anchor click for a link's raw `href`. Only the first `#` is dropped,
    /// so `"##menu"` targets the id `#menu`.
    pub fn anchor(href: &str) -> Self {
        SiteEvent::AnchorClicked {
            target: href.strip_prefix('#').unwrap_or(href).to_string(),
        }
    }
}

/// Scheduled follow-up work
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deferred {
    /// Trailing edge of the scroll debounce
    Parallax,
    Reveal(usize),
    ForceContentVisible,
    LightboxHidden,
    ToastSlideIn(ToastId),
    ToastDismiss(ToastId),
    ToastRemove(ToastId),
    PulseEnd(Card),
    StarPop { card: usize, star: usize },
    StarSettle { card: usize, star: usize },
    HeroEntrance,
    HeroIntro(usize),
}

/// Whether the browser's default action for the event should be suppressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Propagation {
    #[default]
    Continue,
    PreventDefault,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_drops_one_hash() {
        assert_eq!(
            SiteEvent::anchor("#gallery"),
            SiteEvent::AnchorClicked {
                target: "gallery".into()
            }
        );
        assert_eq!(
            SiteEvent::anchor("##menu"),
            SiteEvent::AnchorClicked {
                target: "#menu".into()
            }
        );
        assert_eq!(
            SiteEvent::anchor("#"),
            SiteEvent::AnchorClicked {
                target: String::new()
            }
        );
    }
}
