//! Scroll watcher
//!
//! Derives navbar, nav-link, scroll-indicator and parallax state from the
//! vertical scroll offset. Everything except navbar visibility is a pure
//! function of the current offset; the navbar also needs the previous one.

use crate::config::ScrollSettings;
use crate::host::{Collection, Host, Node, SectionBounds};

// =============================================================================
// PURE DERIVATIONS
// =============================================================================

/// Navbar background state: strictly above the threshold
#[inline]
pub fn is_scrolled(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

/// Navbar hides only while moving down past the hide threshold
#[inline]
pub fn hides_navbar(offset: f64, last_offset: f64, threshold: f64) -> bool {
    offset > last_offset && offset > threshold
}

/// Section whose activation band contains `offset`.
///
/// A section's band is `[top - section_offset, top - section_offset + height)`.
/// Sections are tested in order and the last match wins.
pub fn active_section(offset: f64, sections: &[SectionBounds], section_offset: f64) -> Option<&str> {
    sections
        .iter()
        .filter(|s| {
            let start = s.top - section_offset;
            offset >= start && offset < start + s.height
        })
        .last()
        .map(|s| s.id.as_str())
}

/// Vertical parallax translation in pixels
#[inline]
pub fn parallax_translation(offset: f64, rate: f64) -> f64 {
    // Adding +0.0 turns -0.0 into 0.0 so it never renders as "-0px"
    offset * rate + 0.0
}

// =============================================================================
// SCROLL VIEW
// =============================================================================

/// Everything the scroll watcher renders, except parallax (debounced)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScrollView {
    pub scrolled: bool,
    pub navbar_hidden: bool,
    pub indicator_visible: bool,
    pub active_section: Option<String>,
}

// =============================================================================
// SCROLL WATCHER
// =============================================================================

#[derive(Debug, Clone)]
pub struct ScrollWatcher {
    settings: ScrollSettings,
    last_offset: f64,
    view: ScrollView,
}

impl ScrollWatcher {
    /// `initial_offset` is the scroll position at page load
    pub fn new(settings: ScrollSettings, initial_offset: f64) -> Self {
        let view = ScrollView {
            scrolled: is_scrolled(initial_offset, settings.scrolled_threshold),
            navbar_hidden: false,
            indicator_visible: initial_offset <= settings.indicator_hide_offset,
            active_section: None,
        };
        Self {
            settings,
            last_offset: initial_offset,
            view,
        }
    }

    /// Fold a new offset into the view
    pub fn observe(&mut self, offset: f64, sections: &[SectionBounds]) -> &ScrollView {
        let s = &self.settings;
        self.view = ScrollView {
            scrolled: is_scrolled(offset, s.scrolled_threshold),
            navbar_hidden: hides_navbar(offset, self.last_offset, s.navbar_hide_threshold),
            indicator_visible: offset <= s.indicator_hide_offset,
            active_section: active_section(offset, sections, s.section_offset).map(String::from),
        };
        self.last_offset = offset;
        &self.view
    }

    pub fn view(&self) -> &ScrollView {
        &self.view
    }

    pub fn last_offset(&self) -> f64 {
        self.last_offset
    }

    pub fn parallax_for(&self, offset: f64) -> f64 {
        parallax_translation(offset, self.settings.parallax_rate)
    }

    pub fn settings(&self) -> &ScrollSettings {
        &self.settings
    }
}

// =============================================================================
// RENDER
// =============================================================================

pub fn render_navbar<H: Host + ?Sized>(view: &ScrollView, host: &mut H) {
    host.set_class(Node::Navbar, "scrolled", view.scrolled);
    let transform = if view.navbar_hidden {
        "translateY(-100%)"
    } else {
        "translateY(0)"
    };
    host.set_style(Node::Navbar, "transform", transform);
}

pub fn render_nav_links<H: Host + ?Sized>(view: &ScrollView, host: &mut H) {
    let wanted = view.active_section.as_ref().map(|id| format!("#{}", id));
    for i in 0..host.count(Collection::NavLinks) {
        let active = match (&wanted, host.nav_link_href(i)) {
            (Some(wanted), Some(href)) => *wanted == href,
            _ => false,
        };
        host.set_class(Node::NavLink(i), "active", active);
    }
}

pub fn render_indicator<H: Host + ?Sized>(view: &ScrollView, resting_opacity: f64, host: &mut H) {
    if view.indicator_visible {
        host.set_style(Node::ScrollIndicator, "opacity", &resting_opacity.to_string());
        host.set_style(Node::ScrollIndicator, "pointer-events", "all");
    } else {
        host.set_style(Node::ScrollIndicator, "opacity", "0");
        host.set_style(Node::ScrollIndicator, "pointer-events", "none");
    }
}

pub fn render_parallax<H: Host + ?Sized>(translation: f64, host: &mut H) {
    let transform = format!("translateY({}px)", translation);
    for i in 0..host.count(Collection::HeroBackgrounds) {
        host.set_style(Node::HeroBackground(i), "transform", &transform);
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<SectionBounds> {
        vec![
            SectionBounds::new("hero", 0.0, 800.0),
            SectionBounds::new("about", 800.0, 800.0),
        ]
    }

    #[test]
    fn test_scrolled_is_strict() {
        assert!(!is_scrolled(100.0, 100.0));
        assert!(is_scrolled(100.5, 100.0));
        assert!(!is_scrolled(0.0, 100.0));
    }

    #[test]
    fn test_active_section_uses_offset_band() {
        let s = sections();
        assert_eq!(active_section(850.0, &s, 100.0), Some("about"));
        // about's band starts 100px early
        assert_eq!(active_section(700.0, &s, 100.0), Some("about"));
        assert_eq!(active_section(699.0, &s, 100.0), Some("hero"));
        assert_eq!(active_section(0.0, &s, 100.0), Some("hero"));
        assert_eq!(active_section(1500.0, &s, 100.0), None);
    }

    #[test]
    fn test_active_section_last_match_wins() {
        let overlapping = vec![
            SectionBounds::new("menu-reviews", 0.0, 1000.0),
            SectionBounds::new("gallery", 400.0, 600.0),
        ];
        assert_eq!(active_section(500.0, &overlapping, 100.0), Some("gallery"));
        assert_eq!(active_section(200.0, &overlapping, 100.0), Some("menu-reviews"));
    }

    #[test]
    fn test_navbar_hides_only_on_fast_downward_scroll() {
        let mut w = ScrollWatcher::new(ScrollSettings::default(), 0.0);
        assert!(!w.observe(300.0, &[]).navbar_hidden);
        assert!(w.observe(500.0, &[]).navbar_hidden);
        // Scrolling back up shows it again even past the threshold
        assert!(!w.observe(450.0, &[]).navbar_hidden);
        // Holding still shows it
        assert!(!w.observe(450.0, &[]).navbar_hidden);
        assert_eq!(w.last_offset(), 450.0);
    }

    #[test]
    fn test_indicator_visibility() {
        let mut w = ScrollWatcher::new(ScrollSettings::default(), 0.0);
        assert!(w.observe(200.0, &[]).indicator_visible);
        assert!(!w.observe(201.0, &[]).indicator_visible);
    }

    #[test]
    fn test_parallax_is_negative_half_rate() {
        let w = ScrollWatcher::new(ScrollSettings::default(), 0.0);
        assert_eq!(w.parallax_for(0.0), 0.0);
        assert_eq!(w.parallax_for(300.0), -150.0);
    }

    #[test]
    fn test_parallax_at_top_renders_unsigned_zero() {
        let translation = parallax_translation(0.0, -0.5);
        assert!(translation.is_sign_positive());
        assert_eq!(format!("translateY({}px)", translation), "translateY(0px)");
    }

    #[test]
    fn test_initial_view_reflects_load_offset() {
        let w = ScrollWatcher::new(ScrollSettings::default(), 250.0);
        assert!(w.view().scrolled);
        assert!(!w.view().indicator_visible);
        assert!(!w.view().navbar_hidden);
    }
}
