//! Fade-in revealer
//!
//! Two independent paths make `.fade-in` content visible:
//!
//! - **Observer path** (cosmetic): first intersection schedules an
//!   `animate-in` after the element's declared delay. One-shot.
//! - **Fallback path** (guarantee): `force_all_visible` marks every
//!   fade-in element and every section visible regardless of the observer.

use crate::host::{Collection, Host, Node};

/// Parse a `data-delay` multiplier. Missing, malformed or negative values
/// count as zero.
pub fn parse_reveal_delay(raw: Option<&str>) -> f64 {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|d| d.is_finite() && *d > 0.0)
        .unwrap_or(0.0)
}

/// Milliseconds between intersection and reveal
pub fn reveal_delay_ms(multiplier: f64, unit_ms: u32) -> u32 {
    (multiplier * f64::from(unit_ms)).round().clamp(0.0, f64::from(u32::MAX)) as u32
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealPhase {
    #[default]
    Waiting,
    Scheduled,
    Revealed,
}

#[derive(Debug, Clone, Default)]
pub struct Revealer {
    phases: Vec<RevealPhase>,
    forced_visible: bool,
}

impl Revealer {
    pub fn new(element_count: usize) -> Self {
        Self {
            phases: vec![RevealPhase::Waiting; element_count],
            forced_visible: false,
        }
    }

    pub fn len(&self) -> usize {
        self.phases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }

    pub fn phase(&self, index: usize) -> Option<RevealPhase> {
        self.phases.get(index).copied()
    }

    /// Element crossed the threshold. Returns true the first time only;
    /// the caller then schedules the reveal.
    pub fn on_intersect(&mut self, index: usize) -> bool {
        match self.phases.get_mut(index) {
            Some(phase @ RevealPhase::Waiting) => {
                *phase = RevealPhase::Scheduled;
                true
            }
            _ => false,
        }
    }

    /// Scheduled reveal fired. Returns true if the element changed.
    pub fn reveal(&mut self, index: usize) -> bool {
        match self.phases.get_mut(index) {
            Some(phase) if *phase != RevealPhase::Revealed => {
                *phase = RevealPhase::Revealed;
                true
            }
            _ => false,
        }
    }

    pub fn force_all_visible(&mut self) {
        self.forced_visible = true;
    }

    pub fn is_forced_visible(&self) -> bool {
        self.forced_visible
    }
}

// =============================================================================
// RENDER
// =============================================================================

pub fn render_revealed<H: Host + ?Sized>(index: usize, host: &mut H) {
    host.set_class(Node::FadeIn(index), "animate-in", true);
}

/// Content-visibility pass. Re-queries the collections so late-added
/// sections are covered too.
pub fn render_content_visible<H: Host + ?Sized>(host: &mut H) {
    for i in 0..host.count(Collection::FadeIns) {
        let node = Node::FadeIn(i);
        host.set_style(node, "opacity", "1");
        host.set_style(node, "transform", "translateY(0)");
        host.set_class(node, "visible", true);
    }
    for i in 0..host.count(Collection::Sections) {
        let node = Node::Section(i);
        host.set_style(node, "display", "block");
        host.set_style(node, "opacity", "1");
    }
}

/// Window `load` pass: fade-ins and sections alike get opacity, transform
/// and display reset.
pub fn render_loaded_visible<H: Host + ?Sized>(host: &mut H) {
    let fade_ins = (0..host.count(Collection::FadeIns)).map(Node::FadeIn);
    let sections = (0..host.count(Collection::Sections)).map(Node::Section);
    let nodes: Vec<Node> = fade_ins.chain(sections).collect();
    for node in nodes {
        host.set_style(node, "opacity", "1");
        host.set_style(node, "transform", "translateY(0)");
        host.set_style(node, "display", "block");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_reveal_delay() {
        assert_eq!(parse_reveal_delay(None), 0.0);
        assert_eq!(parse_reveal_delay(Some("3")), 3.0);
        assert_eq!(parse_reveal_delay(Some(" 1.5 ")), 1.5);
        assert_eq!(parse_reveal_delay(Some("soon")), 0.0);
        assert_eq!(parse_reveal_delay(Some("-2")), 0.0);
    }

    #[test]
    fn test_reveal_delay_ms() {
        assert_eq!(reveal_delay_ms(0.0, 100), 0);
        assert_eq!(reveal_delay_ms(3.0, 100), 300);
        assert_eq!(reveal_delay_ms(1.5, 100), 150);
    }

    #[test]
    fn test_intersection_is_one_shot() {
        let mut r = Revealer::new(2);
        assert!(r.on_intersect(0));
        assert!(!r.on_intersect(0));
        assert_eq!(r.phase(0), Some(RevealPhase::Scheduled));

        assert!(r.reveal(0));
        assert!(!r.on_intersect(0));
        assert_eq!(r.phase(0), Some(RevealPhase::Revealed));
        assert_eq!(r.phase(1), Some(RevealPhase::Waiting));
    }

    #[test]
    fn test_unknown_index_is_ignored() {
        let mut r = Revealer::new(1);
        assert!(!r.on_intersect(5));
        assert!(!r.reveal(5));
    }
}
