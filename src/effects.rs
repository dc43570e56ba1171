//! Card hover effects and the page-load entrance
//!
//! Menu items and contact cards lift on hover and pulse on click. Review
//! cards tilt by a small random angle and pop their stars one after another.

use crate::event::Card;
use crate::host::{Host, Node};
use rand::Rng;
use std::collections::HashMap;

const RESTING_SHADOW: &str = "0 4px 20px rgba(0, 0, 0, 0.1)";
const REVIEW_TRANSITION: &str = "all 0.4s cubic-bezier(0.68, -0.55, 0.265, 1.55)";
const PULSE_ANIMATION: &str = "pulse 0.6s ease-in-out";
const HERO_ANIMATION: &str = "fadeInUp 1s ease-out forwards";

/// Uniform tilt in `[-max, max)` degrees
pub fn random_tilt(max_degrees: f64) -> f64 {
    if max_degrees <= 0.0 {
        return 0.0;
    }
    rand::thread_rng().gen_range(-max_degrees..max_degrees)
}

fn card_node(card: Card) -> Node {
    match card {
        Card::MenuItem(i) => Node::MenuItem(i),
        Card::Review(i) => Node::ReviewCard(i),
        Card::ContactItem(i) => Node::ContactItem(i),
    }
}

/// Inline styles for a card entering or leaving hover
pub fn hover_styles(card: Card, hovered: bool, tilt_degrees: f64) -> Vec<(&'static str, String)> {
    match (card, hovered) {
        (Card::MenuItem(_), true) => vec![
            ("transform", "translateY(-5px) scale(1.02)".into()),
            ("box-shadow", "0 15px 40px rgba(0, 0, 0, 0.15)".into()),
        ],
        (Card::ContactItem(_), true) => vec![
            ("transform", "translateY(-12px) scale(1.02)".into()),
            ("box-shadow", "0 20px 50px rgba(0, 0, 0, 0.15)".into()),
        ],
        (Card::MenuItem(_) | Card::ContactItem(_), false) => vec![
            ("transform", "translateY(0) scale(1)".into()),
            ("box-shadow", RESTING_SHADOW.into()),
        ],
        (Card::Review(_), true) => vec![
            ("transform", format!("translateY(-8px) rotate({}deg)", tilt_degrees)),
            ("transition", REVIEW_TRANSITION.into()),
        ],
        (Card::Review(_), false) => vec![("transform", "translateY(0) rotate(0deg)".into())],
    }
}

// =============================================================================
// CARD EFFECTS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CardPose {
    pub hovered: bool,
    pub tilt_degrees: f64,
    pub pulsing: bool,
}

#[derive(Debug, Clone, Default)]
pub struct CardEffects {
    poses: HashMap<Card, CardPose>,
}

impl CardEffects {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pose(&self, card: Card) -> CardPose {
        self.poses.get(&card).copied().unwrap_or_default()
    }

    pub fn hover<H: Host + ?Sized>(
        &mut self,
        card: Card,
        entered: bool,
        tilt_degrees: f64,
        host: &mut H,
    ) {
        let pose = self.poses.entry(card).or_default();
        pose.hovered = entered;
        pose.tilt_degrees = if entered { tilt_degrees } else { 0.0 };

        let node = card_node(card);
        for (property, value) in hover_styles(card, entered, pose.tilt_degrees) {
            host.set_style(node, property, &value);
        }
    }

    /// Returns true when the caller must schedule the pulse end. Review
    /// cards do not pulse. Every click reassigns the animation and gets its
    /// own end; the earliest pending end clears it.
    pub fn start_pulse<H: Host + ?Sized>(&mut self, card: Card, host: &mut H) -> bool {
        if matches!(card, Card::Review(_)) {
            return false;
        }
        self.poses.entry(card).or_default().pulsing = true;
        host.set_style(card_node(card), "animation", PULSE_ANIMATION);
        true
    }

    pub fn end_pulse<H: Host + ?Sized>(&mut self, card: Card, host: &mut H) {
        if let Some(pose) = self.poses.get_mut(&card) {
            if pose.pulsing {
                pose.pulsing = false;
                host.set_style(card_node(card), "animation", "");
            }
        }
    }
}

// =============================================================================
// STARS
// =============================================================================

pub fn pop_star<H: Host + ?Sized>(card: usize, star: usize, host: &mut H) {
    let node = Node::ReviewStar { card, star };
    host.set_style(node, "transform", "scale(1.3) rotate(10deg)");
    host.set_style(node, "transition", "all 0.2s ease-out");
}

pub fn settle_star<H: Host + ?Sized>(card: usize, star: usize, host: &mut H) {
    host.set_style(Node::ReviewStar { card, star }, "transform", "scale(1) rotate(0deg)");
}

// =============================================================================
// PAGE ENTRANCE
// =============================================================================

pub fn render_body_visible<H: Host + ?Sized>(host: &mut H) {
    host.set_style(Node::Body, "opacity", "1");
}

pub fn render_hero_intro<H: Host + ?Sized>(index: usize, host: &mut H) {
    host.set_style(Node::HeroIntro(index), "animation", HERO_ANIMATION);
}
