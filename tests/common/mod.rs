//! In-memory document for driving the controller without a browser

#![allow(dead_code)]

use house_of_food_ui::{
    Collection, GalleryEntry, Host, ManualScheduler, Node, SectionBounds, Toast, ToastId,
    ViewController,
};
use std::collections::{BTreeSet, HashMap, HashSet};

pub type TestController = ViewController<FakeDocument, ManualScheduler>;

#[derive(Debug, Default)]
pub struct FakeDocument {
    // Structure
    pub present: HashSet<Node>,
    pub counts: HashMap<Collection, usize>,
    pub stars: HashMap<usize, usize>,
    pub sections: Vec<SectionBounds>,
    pub nav_hrefs: Vec<String>,
    pub heights: HashMap<Node, f64>,
    pub gallery: Vec<Option<GalleryEntry>>,
    pub delays: HashMap<usize, String>,
    pub scroll_y: f64,

    // Recorded effects
    pub classes: HashMap<Node, BTreeSet<String>>,
    pub styles: HashMap<(Node, String), String>,
    pub texts: HashMap<Node, String>,
    pub scroll_calls: Vec<f64>,
    pub scrolled_into_view: Vec<String>,
    pub toasts: Vec<Toast>,
    pub removed_toasts: Vec<ToastId>,
    pub stylesheets: Vec<String>,
}

impl FakeDocument {
    /// The full restaurant page: five 800px sections from `hero` down to
    /// `contact`, nav links for each, and every optional component present.
    pub fn restaurant_page() -> Self {
        let ids = ["hero", "about", "menu-reviews", "gallery", "contact"];
        let mut doc = Self {
            sections: ids
                .iter()
                .enumerate()
                .map(|(i, id)| SectionBounds::new(*id, i as f64 * 800.0, 800.0))
                .collect(),
            nav_hrefs: ids.iter().map(|id| format!("#{}", id)).collect(),
            ..Default::default()
        };

        doc.present.extend([
            Node::Body,
            Node::Navbar,
            Node::Hamburger,
            Node::NavMenu,
            Node::ScrollIndicator,
            Node::MenuSection,
            Node::ReviewsContainer,
            Node::Lightbox,
            Node::LightboxImage,
            Node::LightboxCaption,
            Node::LightboxClose,
        ]);

        doc.counts.insert(Collection::HamburgerBars, 3);
        doc.counts.insert(Collection::NavLinks, 5);
        doc.counts.insert(Collection::Sections, 5);
        doc.counts.insert(Collection::FadeIns, 4);
        doc.counts.insert(Collection::HeroBackgrounds, 1);
        doc.counts.insert(Collection::HeroIntros, 4);
        doc.counts.insert(Collection::MenuItems, 3);
        doc.counts.insert(Collection::ReviewCards, 2);
        doc.counts.insert(Collection::ContactItems, 3);
        doc.counts.insert(Collection::GalleryItems, 3);

        doc.stars.insert(0, 5);
        doc.stars.insert(1, 4);
        doc.heights.insert(Node::MenuSection, 640.0);
        doc.delays.insert(1, "3".into());
        doc.delays.insert(2, "bogus".into());

        doc.gallery = vec![
            Some(GalleryEntry {
                background: "linear-gradient(135deg, #2E7D32, #66BB6A)".into(),
                label: "Irish Stew".into(),
                caption: Some("Traditional Irish Stew".into()),
            }),
            Some(GalleryEntry {
                background: "rgb(200, 120, 40)".into(),
                label: "Dining Room".into(),
                caption: None,
            }),
            None,
        ];
        doc
    }

    pub fn without(mut self, node: Node) -> Self {
        self.present.remove(&node);
        self
    }

    pub fn has_class(&self, node: Node, class: &str) -> bool {
        self.classes
            .get(&node)
            .is_some_and(|set| set.contains(class))
    }

    pub fn style(&self, node: Node, property: &str) -> Option<&str> {
        self.styles
            .get(&(node, property.to_string()))
            .map(String::as_str)
    }

    pub fn text(&self, node: Node) -> Option<&str> {
        self.texts.get(&node).map(String::as_str)
    }

    fn section(&self, id: &str) -> Option<&SectionBounds> {
        self.sections.iter().find(|s| s.id == id)
    }

    fn indexed(&self, collection: Collection, index: usize) -> bool {
        index < self.count(collection)
    }
}

impl Host for FakeDocument {
    fn exists(&self, node: Node) -> bool {
        match node {
            Node::HamburgerBar(i) => self.indexed(Collection::HamburgerBars, i),
            Node::NavLink(i) => self.indexed(Collection::NavLinks, i),
            Node::Section(i) => self.indexed(Collection::Sections, i),
            Node::FadeIn(i) => self.indexed(Collection::FadeIns, i),
            Node::HeroBackground(i) => self.indexed(Collection::HeroBackgrounds, i),
            Node::HeroIntro(i) => self.indexed(Collection::HeroIntros, i),
            Node::MenuItem(i) => self.indexed(Collection::MenuItems, i),
            Node::ReviewCard(i) => self.indexed(Collection::ReviewCards, i),
            Node::ReviewStar { card, star } => star < self.star_count(card),
            Node::ContactItem(i) => self.indexed(Collection::ContactItems, i),
            Node::GalleryItem(i) => self.indexed(Collection::GalleryItems, i),
            Node::Toast(id) => self.toasts.iter().any(|t| t.id == id),
            other => self.present.contains(&other),
        }
    }

    fn count(&self, collection: Collection) -> usize {
        self.counts.get(&collection).copied().unwrap_or(0)
    }

    fn star_count(&self, card: usize) -> usize {
        self.stars.get(&card).copied().unwrap_or(0)
    }

    fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    fn section_bounds(&self) -> Vec<SectionBounds> {
        self.sections.clone()
    }

    fn nav_link_href(&self, index: usize) -> Option<String> {
        self.nav_hrefs.get(index).cloned()
    }

    fn offset_top(&self, id: &str) -> Option<f64> {
        self.section(id).map(|s| s.top)
    }

    fn viewport_span(&self, id: &str) -> Option<(f64, f64)> {
        self.section(id)
            .map(|s| (s.top - self.scroll_y, s.top + s.height - self.scroll_y))
    }

    fn offset_height(&self, node: Node) -> Option<f64> {
        if !self.exists(node) {
            return None;
        }
        self.heights.get(&node).copied()
    }

    fn gallery_entry(&self, index: usize) -> Option<GalleryEntry> {
        self.gallery.get(index).cloned().flatten()
    }

    fn reveal_delay_attr(&self, index: usize) -> Option<String> {
        self.delays.get(&index).cloned()
    }

    fn set_class(&mut self, node: Node, class: &str, enabled: bool) {
        if !self.exists(node) {
            return;
        }
        let set = self.classes.entry(node).or_default();
        if enabled {
            set.insert(class.to_string());
        } else {
            set.remove(class);
        }
    }

    fn set_style(&mut self, node: Node, property: &str, value: &str) {
        if !self.exists(node) {
            return;
        }
        let key = (node, property.to_string());
        if value.is_empty() {
            self.styles.remove(&key);
        } else {
            self.styles.insert(key, value.to_string());
        }
    }

    fn set_text(&mut self, node: Node, text: &str) {
        if self.exists(node) {
            self.texts.insert(node, text.to_string());
        }
    }

    fn scroll_to(&mut self, top: f64) {
        self.scroll_calls.push(top);
    }

    fn scroll_into_view(&mut self, id: &str) {
        self.scrolled_into_view.push(id.to_string());
    }

    fn insert_toast(&mut self, toast: &Toast) {
        self.toasts.push(toast.clone());
    }

    fn remove_toast(&mut self, id: ToastId) {
        self.toasts.retain(|t| t.id != id);
        self.removed_toasts.push(id);
    }

    fn inject_stylesheet(&mut self, css: &str) {
        self.stylesheets.push(css.to_string());
    }
}

/// Initialized controller over `doc`
pub fn mount(doc: FakeDocument) -> TestController {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter("house_of_food_ui=debug")
        .try_init();

    let mut controller = ViewController::new(doc, ManualScheduler::new());
    controller.init();
    controller
}

/// Move the page and fire a scroll event
pub fn scroll_to(controller: &mut TestController, offset: f64) {
    controller.host_mut().scroll_y = offset;
    controller.handle(house_of_food_ui::SiteEvent::Scroll);
}
