//! Site behaviour settings
//!
//! Every threshold and delay used by the controller lives here. Values are
//! loaded once from the embedded `config/site_settings.yaml` via
//! [`global_config()`]; a malformed file falls back to [`SiteConfig::default`]
//! with a warning so the page still behaves.

use crate::error::SiteError;
use serde::Deserialize;
use std::sync::OnceLock;

const EMBEDDED_SETTINGS: &str = include_str!("../config/site_settings.yaml");

// =============================================================================
// SETTINGS SECTIONS
// =============================================================================

/// Scroll watcher thresholds
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScrollSettings {
    /// Navbar gets `scrolled` strictly above this offset
    pub scrolled_threshold: f64,
    /// Navbar may hide (on downward scroll) strictly above this offset
    pub navbar_hide_threshold: f64,
    /// Sections become active this many pixels before their top edge
    pub section_offset: f64,
    /// Navbar height compensation for anchor scrolling
    pub nav_scroll_offset: f64,
    /// Scroll indicator fades out strictly above this offset
    pub indicator_hide_offset: f64,
    /// Resting opacity of the scroll indicator
    pub indicator_opacity: f64,
    /// Parallax translation per pixel scrolled
    pub parallax_rate: f64,
    pub parallax_debounce_ms: u32,
}

impl Default for ScrollSettings {
    fn default() -> Self {
        Self {
            scrolled_threshold: 100.0,
            navbar_hide_threshold: 400.0,
            section_offset: 100.0,
            nav_scroll_offset: 70.0,
            indicator_hide_offset: 200.0,
            indicator_opacity: 0.7,
            parallax_rate: -0.5,
            parallax_debounce_ms: 10,
        }
    }
}

/// Fade-in revealer settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RevealSettings {
    /// Visible fraction that counts as "in view"
    pub threshold: f64,
    /// Observer root margin (CSS shorthand)
    pub root_margin: String,
    /// Multiplied by the element's `data-delay`
    pub delay_unit_ms: u32,
    /// Second content-visibility pass after init
    pub content_recheck_ms: u32,
}

impl Default for RevealSettings {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".to_string(),
            delay_unit_ms: 100,
            content_recheck_ms: 100,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LightboxSettings {
    /// Matches the overlay's CSS close transition
    pub close_ms: u32,
}

impl Default for LightboxSettings {
    fn default() -> Self {
        Self { close_ms: 300 }
    }
}

/// Toast timings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NotificationSettings {
    pub enter_ms: u32,
    pub display_ms: u32,
    pub exit_ms: u32,
    /// Horizontal offset of a toast while off screen
    pub offscreen_offset: f64,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            enter_ms: 100,
            display_ms: 5000,
            exit_ms: 300,
            offscreen_offset: 400.0,
        }
    }
}

/// Card hover and page entrance timings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EffectSettings {
    pub pulse_ms: u32,
    pub star_stagger_ms: u32,
    pub star_hold_ms: u32,
    /// Review cards tilt uniformly within +/- this many degrees
    pub max_tilt_degrees: f64,
    pub hero_entrance_ms: u32,
    pub hero_stagger_ms: u32,
}

impl Default for EffectSettings {
    fn default() -> Self {
        Self {
            pulse_ms: 600,
            star_stagger_ms: 50,
            star_hold_ms: 200,
            max_tilt_degrees: 2.0,
            hero_entrance_ms: 300,
            hero_stagger_ms: 200,
        }
    }
}

/// Keyboard section navigation
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NavigationSettings {
    /// Section ids in page order
    pub sections: Vec<String>,
    /// Viewport line (from the top) that decides the current section
    pub probe_line: f64,
}

impl Default for NavigationSettings {
    fn default() -> Self {
        Self {
            sections: ["hero", "about", "menu-reviews", "gallery", "contact"]
                .into_iter()
                .map(String::from)
                .collect(),
            probe_line: 100.0,
        }
    }
}

// =============================================================================
// SITE CONFIG
// =============================================================================

/// Complete site behaviour configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub scroll: ScrollSettings,
    pub reveal: RevealSettings,
    pub lightbox: LightboxSettings,
    pub notifications: NotificationSettings,
    pub effects: EffectSettings,
    pub navigation: NavigationSettings,
}

impl SiteConfig {
    /// Parse settings from YAML. Missing keys take their defaults.
    pub fn from_yaml(source: &str) -> Result<Self, SiteError> {
        Ok(serde_yaml::from_str(source)?)
    }

    /// Settings compiled into the crate
    pub fn embedded() -> Result<Self, SiteError> {
        Self::from_yaml(EMBEDDED_SETTINGS)
    }
}

static GLOBAL_CONFIG: OnceLock<SiteConfig> = OnceLock::new();

/// Process-wide settings, parsed on first use
pub fn global_config() -> &'static SiteConfig {
    GLOBAL_CONFIG.get_or_init(|| match SiteConfig::embedded() {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("Falling back to default site settings: {}", err);
            SiteConfig::default()
        }
    })
}

// =============================================================================
// TESTS
// =============================================================================
