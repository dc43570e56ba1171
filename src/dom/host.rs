//! `web-sys` implementation of [`Host`]
//!
//! Elements are resolved once when the controller mounts. Geometry
//! (sections, viewport spans, heights) is read live on every call.

use super::Dispatch;
use crate::error::{SiteError, SiteResult};
use crate::event::SiteEvent;
use crate::host::{Collection, GalleryEntry, Host, Node, SectionBounds};
use crate::notify::{Toast, ToastId};
use std::collections::HashMap;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, NodeList, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition, ScrollToOptions, Window,
};

const HERO_INTRO_SELECTOR: &str = ".hero-title-main, .hero-tagline, .hero-location, .hero-cta";

/// Collect a `NodeList` into its HTML elements
fn html_elements(list: NodeList) -> Vec<HtmlElement> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

fn query_all(document: &Document, selector: &str) -> Vec<HtmlElement> {
    document
        .query_selector_all(selector)
        .map(html_elements)
        .unwrap_or_default()
}

fn query_within(root: &Element, selector: &str) -> Vec<HtmlElement> {
    root.query_selector_all(selector)
        .map(html_elements)
        .unwrap_or_default()
}

fn query_one(document: &Document, selector: &str) -> Option<HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

fn by_id(document: &Document, id: &str) -> Option<HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

struct LiveToast {
    element: HtmlElement,
    // Dropped together with the element
    _on_close: Closure<dyn FnMut(web_sys::Event)>,
}

pub struct DomHost {
    window: Window,
    document: Document,
    dispatch: Dispatch,

    body: Option<HtmlElement>,
    navbar: Option<HtmlElement>,
    hamburger: Option<HtmlElement>,
    hamburger_bars: Vec<HtmlElement>,
    nav_menu: Option<HtmlElement>,
    nav_links: Vec<HtmlElement>,
    sections: Vec<HtmlElement>,
    fade_ins: Vec<HtmlElement>,
    hero_backgrounds: Vec<HtmlElement>,
    hero_intros: Vec<HtmlElement>,
    scroll_indicator: Option<HtmlElement>,
    menu_section: Option<HtmlElement>,
    reviews_container: Option<HtmlElement>,
    menu_items: Vec<HtmlElement>,
    review_cards: Vec<HtmlElement>,
    review_stars: Vec<Vec<HtmlElement>>,
    contact_items: Vec<HtmlElement>,
    gallery_items: Vec<HtmlElement>,
    lightbox: Option<HtmlElement>,
    lightbox_image: Option<HtmlElement>,
    lightbox_caption: Option<HtmlElement>,
    lightbox_close: Option<HtmlElement>,

    toasts: HashMap<ToastId, LiveToast>,
}

impl DomHost {
    /// Resolve every element the controller addresses
    pub fn resolve(dispatch: Dispatch) -> SiteResult<Self> {
        let window = web_sys::window().ok_or_else(|| SiteError::JavaScript("No window".into()))?;
        let document = window
            .document()
            .ok_or_else(|| SiteError::JavaScript("No document".into()))?;

        let review_cards = query_all(&document, ".review-card");
        let review_stars = review_cards
            .iter()
            .map(|card| query_within(card, ".star"))
            .collect();

        Ok(Self {
            body: document.body(),
            navbar: by_id(&document, "navbar"),
            hamburger: query_one(&document, ".hamburger"),
            hamburger_bars: query_all(&document, ".hamburger span"),
            nav_menu: query_one(&document, ".nav-menu"),
            nav_links: query_all(&document, ".nav-link"),
            sections: query_all(&document, "section"),
            fade_ins: query_all(&document, ".fade-in"),
            hero_backgrounds: query_all(&document, ".hero-background"),
            hero_intros: query_all(&document, HERO_INTRO_SELECTOR),
            scroll_indicator: query_one(&document, ".scroll-indicator"),
            menu_section: query_one(&document, ".menu-section"),
            reviews_container: query_one(&document, ".reviews-scroll-container"),
            menu_items: query_all(&document, ".menu-item"),
            review_cards,
            review_stars,
            contact_items: query_all(&document, ".contact-info-item"),
            gallery_items: query_all(&document, ".gallery-item"),
            lightbox: by_id(&document, "lightbox"),
            lightbox_image: by_id(&document, "lightboxImage"),
            lightbox_caption: by_id(&document, "lightboxCaption"),
            lightbox_close: by_id(&document, "lightboxClose"),
            toasts: HashMap::new(),
            window,
            document,
            dispatch,
        })
    }

    pub(crate) fn window(&self) -> &Window {
        &self.window
    }

    pub(crate) fn document(&self) -> &Document {
        &self.document
    }

    /// Every element in a collection, for listener wiring
    pub(crate) fn elements(&self, collection: Collection) -> &[HtmlElement] {
        match collection {
            Collection::HamburgerBars => &self.hamburger_bars,
            Collection::NavLinks => &self.nav_links,
            Collection::Sections => &self.sections,
            Collection::FadeIns => &self.fade_ins,
            Collection::HeroBackgrounds => &self.hero_backgrounds,
            Collection::HeroIntros => &self.hero_intros,
            Collection::MenuItems => &self.menu_items,
            Collection::ReviewCards => &self.review_cards,
            Collection::ContactItems => &self.contact_items,
            Collection::GalleryItems => &self.gallery_items,
        }
    }

    pub(crate) fn element(&self, node: Node) -> Option<&HtmlElement> {
        match node {
            Node::Body => self.body.as_ref(),
            Node::Navbar => self.navbar.as_ref(),
            Node::Hamburger => self.hamburger.as_ref(),
            Node::HamburgerBar(i) => self.hamburger_bars.get(i),
            Node::NavMenu => self.nav_menu.as_ref(),
            Node::NavLink(i) => self.nav_links.get(i),
            Node::Section(i) => self.sections.get(i),
            Node::FadeIn(i) => self.fade_ins.get(i),
            Node::HeroBackground(i) => self.hero_backgrounds.get(i),
            Node::HeroIntro(i) => self.hero_intros.get(i),
            Node::ScrollIndicator => self.scroll_indicator.as_ref(),
            Node::MenuSection => self.menu_section.as_ref(),
            Node::ReviewsContainer => self.reviews_container.as_ref(),
            Node::MenuItem(i) => self.menu_items.get(i),
            Node::ReviewCard(i) => self.review_cards.get(i),
            Node::ReviewStar { card, star } => self.review_stars.get(card)?.get(star),
            Node::ContactItem(i) => self.contact_items.get(i),
            Node::GalleryItem(i) => self.gallery_items.get(i),
            Node::Lightbox => self.lightbox.as_ref(),
            Node::LightboxImage => self.lightbox_image.as_ref(),
            Node::LightboxCaption => self.lightbox_caption.as_ref(),
            Node::LightboxClose => self.lightbox_close.as_ref(),
            Node::Toast(id) => self.toasts.get(&id).map(|t| &t.element),
        }
    }

    fn build_toast(&self, toast: &Toast) -> Result<LiveToast, JsValue> {
        let doc = &self.document;
        let element: HtmlElement = doc.create_element("div")?.dyn_into()?;
        element.set_class_name(&toast.kind.class_name());

        let content = doc.create_element("div")?;
        content.set_class_name("notification-content");

        let message = doc.create_element("span")?;
        message.set_class_name("notification-message");
        message.set_text_content(Some(&toast.message));

        let close = doc.create_element("button")?;
        close.set_class_name("notification-close");
        close.set_text_content(Some("\u{00d7}"));

        let id = toast.id;
        let dispatch = self.dispatch.clone();
        let on_close = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
            dispatch(SiteEvent::ToastCloseClicked(id));
        });
        close.add_event_listener_with_callback("click", on_close.as_ref().unchecked_ref())?;

        content.append_child(&message)?;
        content.append_child(&close)?;
        element.append_child(&content)?;

        let body = self
            .document
            .body()
            .ok_or_else(|| JsValue::from_str("No body"))?;
        body.append_child(&element)?;

        Ok(LiveToast {
            element,
            _on_close: on_close,
        })
    }
}

impl Host for DomHost {
    fn exists(&self, node: Node) -> bool {
        self.element(node).is_some()
    }

    fn count(&self, collection: Collection) -> usize {
        self.elements(collection).len()
    }

    fn star_count(&self, card: usize) -> usize {
        self.review_stars.get(card).map_or(0, Vec::len)
    }

    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn section_bounds(&self) -> Vec<SectionBounds> {
        query_all(&self.document, "section[id]")
            .into_iter()
            .map(|s| {
                SectionBounds::new(
                    s.id(),
                    f64::from(s.offset_top()),
                    f64::from(s.client_height()),
                )
            })
            .collect()
    }

    fn nav_link_href(&self, index: usize) -> Option<String> {
        self.nav_links.get(index)?.get_attribute("href")
    }

    fn offset_top(&self, id: &str) -> Option<f64> {
        by_id(&self.document, id).map(|el| f64::from(el.offset_top()))
    }

    fn viewport_span(&self, id: &str) -> Option<(f64, f64)> {
        let rect = self.document.get_element_by_id(id)?.get_bounding_client_rect();
        Some((rect.top(), rect.bottom()))
    }

    fn offset_height(&self, node: Node) -> Option<f64> {
        self.element(node).map(|el| f64::from(el.offset_height()))
    }

    fn gallery_entry(&self, index: usize) -> Option<GalleryEntry> {
        let item = self.gallery_items.get(index)?;
        let placeholder = item.query_selector(".gallery-placeholder").ok().flatten()?;

        let background = self
            .window
            .get_computed_style(&placeholder)
            .ok()
            .flatten()
            .and_then(|style| style.get_property_value("background").ok())
            .unwrap_or_default();
        let caption = item
            .query_selector(".gallery-caption")
            .ok()
            .flatten()
            .map(|c| c.text_content().unwrap_or_default());

        Some(GalleryEntry {
            background,
            label: placeholder.text_content().unwrap_or_default(),
            caption,
        })
    }

    fn reveal_delay_attr(&self, index: usize) -> Option<String> {
        self.fade_ins.get(index)?.get_attribute("data-delay")
    }

    fn set_class(&mut self, node: Node, class: &str, enabled: bool) {
        if let Some(el) = self.element(node) {
            if let Err(err) = el.class_list().toggle_with_force(class, enabled) {
                tracing::debug!("class {} on {:?} failed: {:?}", class, node, err);
            }
        }
    }

    fn set_style(&mut self, node: Node, property: &str, value: &str) {
        let Some(el) = self.element(node) else {
            return;
        };
        let style = el.style();
        let result = if value.is_empty() {
            style.remove_property(property).map(|_| ())
        } else {
            style.set_property(property, value)
        };
        if let Err(err) = result {
            tracing::debug!("style {} on {:?} failed: {:?}", property, node, err);
        }
    }

    fn set_text(&mut self, node: Node, text: &str) {
        if let Some(el) = self.element(node) {
            el.set_text_content(Some(text));
        }
    }

    fn scroll_to(&mut self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn scroll_into_view(&mut self, id: &str) {
        if let Some(el) = self.document.get_element_by_id(id) {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            el.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }

    fn insert_toast(&mut self, toast: &Toast) {
        match self.build_toast(toast) {
            Ok(live) => {
                self.toasts.insert(toast.id, live);
            }
            Err(err) => tracing::warn!("{}", SiteError::from(err)),
        }
    }

    fn remove_toast(&mut self, id: ToastId) {
        if let Some(live) = self.toasts.remove(&id) {
            live.element.remove();
        }
    }

    fn inject_stylesheet(&mut self, css: &str) {
        let result = (|| -> Result<(), JsValue> {
            let style = self.document.create_element("style")?;
            style.set_text_content(Some(css));
            let head = self
                .document
                .head()
                .ok_or_else(|| JsValue::from_str("No head"))?;
            head.append_child(&style)?;
            Ok(())
        })();
        if let Err(err) = result {
            tracing::warn!("Animation stylesheet not injected: {}", SiteError::from(err));
        }
    }
}
