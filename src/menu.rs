//! Mobile menu toggle
//!
//! One boolean drives both the panel and the hamburger icon, so the two
//! visual flags cannot disagree.

use crate::host::{Collection, Host, Node};

/// Transform and opacity of a single hamburger bar
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarPose {
    pub transform: &'static str,
    pub opacity: &'static str,
}

const NEUTRAL_BAR: BarPose = BarPose {
    transform: "",
    opacity: "1",
};

/// Bars of the "X" icon, top to bottom
const CROSS_BARS: [BarPose; 3] = [
    BarPose {
        transform: "rotate(45deg) translate(5px, 5px)",
        opacity: "1",
    },
    BarPose {
        transform: "",
        opacity: "0",
    },
    BarPose {
        transform: "rotate(-45deg) translate(7px, -6px)",
        opacity: "1",
    },
];

/// Pose for bar `index` of `bar_count`.
///
/// The cross needs all three bars; with fewer the bars stay neutral, and
/// bars beyond the third are left alone.
pub fn bar_pose(open: bool, index: usize, bar_count: usize) -> Option<BarPose> {
    if !open {
        return Some(NEUTRAL_BAR);
    }
    if bar_count < CROSS_BARS.len() {
        return None;
    }
    CROSS_BARS.get(index).copied()
}

#[derive(Debug, Clone, Default)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Returns whether the menu was open
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    pub fn render<H: Host + ?Sized>(&self, host: &mut H) {
        host.set_class(Node::Hamburger, "active", self.open);
        host.set_class(Node::NavMenu, "active", self.open);

        let bars = host.count(Collection::HamburgerBars);
        for i in 0..bars {
            if let Some(pose) = bar_pose(self.open, i, bars) {
                host.set_style(Node::HamburgerBar(i), "transform", pose.transform);
                host.set_style(Node::HamburgerBar(i), "opacity", pose.opacity);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_and_close() {
        let mut menu = MobileMenu::new();
        assert!(!menu.is_open());
        menu.toggle();
        assert!(menu.is_open());
        assert!(menu.close());
        assert!(!menu.is_open());
        assert!(!menu.close());
    }

    #[test]
    fn test_cross_pose() {
        let top = bar_pose(true, 0, 3).unwrap();
        let middle = bar_pose(true, 1, 3).unwrap();
        let bottom = bar_pose(true, 2, 3).unwrap();
        assert_eq!(top.transform, "rotate(45deg) translate(5px, 5px)");
        assert_eq!(middle.opacity, "0");
        assert_eq!(bottom.transform, "rotate(-45deg) translate(7px, -6px)");
    }

    #[test]
    fn test_closed_pose_is_neutral_for_every_bar() {
        for i in 0..4 {
            assert_eq!(bar_pose(false, i, 4), Some(NEUTRAL_BAR));
        }
    }

    #[test]
    fn test_cross_needs_three_bars() {
        assert_eq!(bar_pose(true, 0, 2), None);
        assert_eq!(bar_pose(true, 3, 4), None);
    }
}
