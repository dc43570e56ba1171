//! Invariants that must hold over arbitrary interaction sequences

mod common;

use common::{mount, scroll_to, FakeDocument};
use house_of_food_ui::{Node, SiteEvent};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum MenuAction {
    Hamburger,
    NavLink(usize),
    Anchor(&'static str),
    Scroll(f64),
}

fn arb_menu_action() -> impl Strategy<Value = MenuAction> {
    prop_oneof![
        3 => Just(MenuAction::Hamburger),
        1 => (0usize..5).prop_map(MenuAction::NavLink),
        1 => prop::sample::select(vec!["about", "gallery", "nowhere"]).prop_map(MenuAction::Anchor),
        1 => (0.0f64..4000.0).prop_map(MenuAction::Scroll),
    ]
}

proptest! {
    #[test]
    fn scrolled_flag_follows_latest_offset(offsets in prop::collection::vec(0.0f64..4000.0, 1..40)) {
        let mut ctl = mount(FakeDocument::restaurant_page());
        for offset in &offsets {
            scroll_to(&mut ctl, *offset);
        }
        let last = *offsets.last().unwrap();
        prop_assert_eq!(ctl.host().has_class(Node::Navbar, "scrolled"), last > 100.0);
        prop_assert_eq!(ctl.scroll_view().scrolled, last > 100.0);
    }

    #[test]
    fn at_most_one_nav_link_active(offsets in prop::collection::vec(0.0f64..5000.0, 1..20)) {
        let mut ctl = mount(FakeDocument::restaurant_page());
        for offset in offsets {
            scroll_to(&mut ctl, offset);
            let active = (0..5)
                .filter(|i| ctl.host().has_class(Node::NavLink(*i), "active"))
                .count();
            prop_assert!(active <= 1);
        }
    }

    #[test]
    fn menu_panel_and_icon_never_disagree(actions in prop::collection::vec(arb_menu_action(), 1..30)) {
        let mut ctl = mount(FakeDocument::restaurant_page());
        for action in actions {
            let event = match action {
                MenuAction::Hamburger => SiteEvent::HamburgerClicked,
                MenuAction::NavLink(i) => SiteEvent::NavLinkClicked(i),
                MenuAction::Anchor(id) => SiteEvent::AnchorClicked { target: id.to_string() },
                MenuAction::Scroll(offset) => {
                    ctl.host_mut().scroll_y = offset;
                    SiteEvent::Scroll
                }
            };
            ctl.handle(event);

            let open = ctl.menu().unwrap().is_open();
            prop_assert_eq!(ctl.host().has_class(Node::NavMenu, "active"), open);
            prop_assert_eq!(ctl.host().has_class(Node::Hamburger, "active"), open);
        }
    }
}
