//! Document collaborator
//!
//! The controller never touches the DOM directly. Everything it reads or
//! writes goes through [`Host`], addressed by [`Node`] handles. The browser
//! implementation lives in `dom`; tests use an in-memory document.

use crate::notify::{Toast, ToastId};

// =============================================================================
// NODE HANDLES
// =============================================================================

/// Addressable part of the page.
///
/// Indexed variants refer to document order within their collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Node {
    Body,
    /// `#navbar`
    Navbar,
    /// `.hamburger`
    Hamburger,
    /// `.hamburger span`
    HamburgerBar(usize),
    /// `.nav-menu`
    NavMenu,
    /// `.nav-link`
    NavLink(usize),
    /// Every top-level `section`
    Section(usize),
    /// `.fade-in`
    FadeIn(usize),
    /// `.hero-background`
    HeroBackground(usize),
    /// Hero title, tagline, location and call-to-action
    HeroIntro(usize),
    /// `.scroll-indicator`
    ScrollIndicator,
    /// `.menu-section`
    MenuSection,
    /// `.reviews-scroll-container`
    ReviewsContainer,
    /// `.menu-item`
    MenuItem(usize),
    /// `.review-card`
    ReviewCard(usize),
    /// `.star` within a review card
    ReviewStar { card: usize, star: usize },
    /// `.contact-info-item`
    ContactItem(usize),
    /// `.gallery-item`
    GalleryItem(usize),
    /// `#lightbox`
    Lightbox,
    /// `#lightboxImage`
    LightboxImage,
    /// `#lightboxCaption`
    LightboxCaption,
    /// `#lightboxClose`
    LightboxClose,
    Toast(ToastId),
}

/// Indexed node collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    HamburgerBars,
    NavLinks,
    Sections,
    FadeIns,
    HeroBackgrounds,
    HeroIntros,
    MenuItems,
    ReviewCards,
    ContactItems,
    GalleryItems,
}

// =============================================================================
// GEOMETRY & CONTENT SNAPSHOTS
// =============================================================================

/// Layout of a `section[id]` in document coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    /// `offsetTop`
    pub top: f64,
    /// `clientHeight`
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }
}

/// Visual snapshot of a gallery entry's placeholder
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GalleryEntry {
    /// Computed `background` of the placeholder
    pub background: String,
    /// Placeholder text content
    pub label: String,
    /// `.gallery-caption` text, if the entry has one
    pub caption: Option<String>,
}

// =============================================================================
// HOST
// =============================================================================

/// Document/window collaborator.
///
/// Queries take `&self`; mutations take `&mut self`. Writes to nodes that do
/// not exist are silently ignored.
pub trait Host {
    fn exists(&self, node: Node) -> bool;

    fn count(&self, collection: Collection) -> usize;

    /// Number of `.star` elements inside review card `card`
    fn star_count(&self, card: usize) -> usize;

    /// `window.scrollY`
    fn scroll_y(&self) -> f64;

    /// Every `section[id]`, in document order
    fn section_bounds(&self) -> Vec<SectionBounds>;

    /// Raw `href` attribute of nav link `index`
    fn nav_link_href(&self, index: usize) -> Option<String>;

    /// `offsetTop` of the element with this id
    fn offset_top(&self, id: &str) -> Option<f64>;

    /// Viewport-relative `(top, bottom)` of the element with this id
    fn viewport_span(&self, id: &str) -> Option<(f64, f64)>;

    /// `offsetHeight` of a node
    fn offset_height(&self, node: Node) -> Option<f64>;

    /// `None` when the entry has no placeholder
    fn gallery_entry(&self, index: usize) -> Option<GalleryEntry>;

    /// Raw `data-delay` attribute of fade-in element `index`
    fn reveal_delay_attr(&self, index: usize) -> Option<String>;

    fn set_class(&mut self, node: Node, class: &str, enabled: bool);

    /// Empty `value` clears the property
    fn set_style(&mut self, node: Node, property: &str, value: &str);

    fn set_text(&mut self, node: Node, text: &str);

    /// Smooth `window.scrollTo`
    fn scroll_to(&mut self, top: f64);

    /// Smooth `scrollIntoView` aligned to the block start
    fn scroll_into_view(&mut self, id: &str);

    /// Build and append the toast node (with its close control) to the body
    fn insert_toast(&mut self, toast: &Toast);

    fn remove_toast(&mut self, id: ToastId);

    /// Append a `<style>` element to the document head
    fn inject_stylesheet(&mut self, css: &str);
}
