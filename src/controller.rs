//! View controller
//!
//! Owns every component's view state and routes [`SiteEvent`]s to them.
//! Components render through the [`Host`]; follow-up work goes through the
//! [`Scheduler`] and comes back as `SiteEvent::Deferred`.
//!
//! ```text
//! browser event ──► SiteEvent ──► handle() ──► component state ──► render ──► Host
//!                                     ▲                 │
//!                                     └── Deferred ◄── Scheduler
//! ```
//!
//! Components whose document structure is missing are disabled at `init`
//! with a warning; the others keep working.

use crate::config::{global_config, SiteConfig};
use crate::effects::{self, CardEffects};
use crate::error::{SiteError, SiteResult};
use crate::event::{Card, Deferred, KeyPress, Propagation, SiteEvent};
use crate::host::{Collection, Host, Node};
use crate::keyboard::{current_section, step_target, Step};
use crate::lightbox::Lightbox;
use crate::menu::MobileMenu;
use crate::notify::{ToastId, ToastKind, Toaster};
use crate::reveal::{self, Revealer};
use crate::reviews;
use crate::scroll::{self, ScrollView, ScrollWatcher};
use crate::timer::{Debouncer, ManualScheduler, Scheduler, TimerId};

/// Supplementary keyframes and notification styling
pub const ANIMATIONS_CSS: &str = include_str!("../assets/animations.css");

/// Parts that can be switched off by missing structure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    Navbar,
    MobileMenu,
    Lightbox,
    ScrollIndicator,
}

pub struct ViewController<H: Host, S: Scheduler> {
    host: H,
    scheduler: S,
    config: SiteConfig,

    // Scroll watcher
    scroll: ScrollWatcher,
    parallax: Debouncer,
    navbar_enabled: bool,
    indicator_enabled: bool,

    menu: Option<MobileMenu>,
    lightbox: Option<Lightbox>,
    lightbox_hide: Option<TimerId>,
    revealer: Revealer,
    toaster: Toaster,
    cards: CardEffects,
}

impl<H: Host, S: Scheduler> ViewController<H, S> {
    /// Controller using the embedded site settings. Call [`init`](Self::init)
    /// before dispatching events.
    pub fn new(host: H, scheduler: S) -> Self {
        Self::with_config(host, scheduler, global_config().clone())
    }

    pub fn with_config(host: H, scheduler: S, config: SiteConfig) -> Self {
        let scroll = ScrollWatcher::new(config.scroll.clone(), host.scroll_y());
        let parallax = Debouncer::new(config.scroll.parallax_debounce_ms);
        let revealer = Revealer::new(host.count(Collection::FadeIns));
        let toaster = Toaster::new(config.notifications.clone());
        Self {
            host,
            scheduler,
            config,
            scroll,
            parallax,
            navbar_enabled: false,
            indicator_enabled: false,
            menu: None,
            lightbox: None,
            lightbox_hide: None,
            revealer,
            toaster,
            cards: CardEffects::new(),
        }
    }

    // =========================================================================
    // INITIALIZATION
    // =========================================================================

    /// Page-load sequence: stylesheet, entrance, component guards, then the
    /// content-visibility fallback (now and once more shortly after).
    pub fn init(&mut self) {
        self.host.inject_stylesheet(ANIMATIONS_CSS);
        effects::render_body_visible(&mut self.host);
        self.scheduler
            .schedule(self.config.effects.hero_entrance_ms, Deferred::HeroEntrance);

        self.navbar_enabled = report(self.setup_navbar()).is_some();
        self.menu = report(self.setup_mobile_menu());
        self.lightbox = report(self.setup_lightbox());
        self.indicator_enabled = self.host.exists(Node::ScrollIndicator);
        reviews::render_scroll_behavior(&mut self.host);

        self.force_content_visible();
        self.scheduler.schedule(
            self.config.reveal.content_recheck_ms,
            Deferred::ForceContentVisible,
        );

        tracing::info!(
            navbar = self.navbar_enabled,
            mobile_menu = self.menu.is_some(),
            lightbox = self.lightbox.is_some(),
            fade_ins = self.revealer.len(),
            "Site controller initialized"
        );
    }

    fn setup_navbar(&self) -> SiteResult<()> {
        if !self.host.exists(Node::Navbar) {
            return Err(SiteError::missing("Navbar", "#navbar"));
        }
        Ok(())
    }

    fn setup_mobile_menu(&self) -> SiteResult<MobileMenu> {
        if !self.host.exists(Node::Hamburger) {
            return Err(SiteError::missing("Mobile menu", ".hamburger"));
        }
        if !self.host.exists(Node::NavMenu) {
            return Err(SiteError::missing("Mobile menu", ".nav-menu"));
        }
        Ok(MobileMenu::new())
    }

    fn setup_lightbox(&self) -> SiteResult<Lightbox> {
        let required = [
            (Node::Lightbox, "#lightbox"),
            (Node::LightboxImage, "#lightboxImage"),
            (Node::LightboxCaption, "#lightboxCaption"),
            (Node::LightboxClose, "#lightboxClose"),
        ];
        if let Some((_, selector)) = required.iter().find(|(node, _)| !self.host.exists(*node)) {
            return Err(SiteError::missing("Lightbox", *selector));
        }
        Ok(Lightbox::new())
    }

    pub fn is_enabled(&self, component: Component) -> bool {
        match component {
            Component::Navbar => self.navbar_enabled,
            Component::MobileMenu => self.menu.is_some(),
            Component::Lightbox => self.lightbox.is_some(),
            Component::ScrollIndicator => self.indicator_enabled,
        }
    }

    // =========================================================================
    // EVENT DISPATCH
    // =========================================================================

    pub fn handle(&mut self, event: SiteEvent) -> Propagation {
        match event {
            SiteEvent::Scroll => self.on_scroll(),
            SiteEvent::Resize => reviews::sync_max_height(&mut self.host),
            SiteEvent::WindowLoaded => {
                self.revealer.force_all_visible();
                reveal::render_loaded_visible(&mut self.host);
                reviews::sync_max_height(&mut self.host);
            }
            SiteEvent::KeyDown(press) => return self.on_key(&press),
            SiteEvent::AnchorClicked { target } => {
                if self.scroll_to_section(&target) {
                    self.close_menu_if_open();
                }
                return Propagation::PreventDefault;
            }
            SiteEvent::HamburgerClicked => {
                if let Some(menu) = self.menu.as_mut() {
                    menu.toggle();
                    menu.render(&mut self.host);
                }
            }
            SiteEvent::NavLinkClicked(_) => {
                if let Some(menu) = self.menu.as_mut() {
                    menu.close();
                    menu.render(&mut self.host);
                }
            }
            SiteEvent::ScrollIndicatorClicked => {
                if self.indicator_enabled {
                    self.scroll_to_section("about");
                }
            }
            SiteEvent::GalleryItemClicked(index) => self.open_lightbox(index),
            SiteEvent::LightboxCloseClicked | SiteEvent::LightboxBackdropClicked => {
                self.close_lightbox()
            }
            SiteEvent::FadeInIntersected(index) => self.on_intersect(index),
            SiteEvent::CardHover { card, entered } => self.on_card_hover(card, entered),
            SiteEvent::CardClicked(card) => {
                if self.cards.start_pulse(card, &mut self.host) {
                    self.scheduler
                        .schedule(self.config.effects.pulse_ms, Deferred::PulseEnd(card));
                }
            }
            SiteEvent::ToastCloseClicked(id) => self.dismiss_toast(id),
            SiteEvent::Deferred(task) => self.run_deferred(task),
        }
        Propagation::Continue
    }

    fn run_deferred(&mut self, task: Deferred) {
        match task {
            Deferred::Parallax => {
                self.parallax.fired();
                let translation = self.scroll.parallax_for(self.host.scroll_y());
                scroll::render_parallax(translation, &mut self.host);
            }
            Deferred::Reveal(index) => {
                if self.revealer.reveal(index) {
                    reveal::render_revealed(index, &mut self.host);
                }
            }
            Deferred::ForceContentVisible => self.force_content_visible(),
            Deferred::LightboxHidden => {
                self.lightbox_hide = None;
                if let Some(lightbox) = self.lightbox.as_mut() {
                    lightbox.finish_close(&mut self.host);
                }
            }
            Deferred::ToastSlideIn(id) => self.toaster.slide_in(id, &mut self.host),
            Deferred::ToastDismiss(id) => self.dismiss_toast(id),
            Deferred::ToastRemove(id) => self.toaster.remove(id, &mut self.host),
            Deferred::PulseEnd(card) => self.cards.end_pulse(card, &mut self.host),
            Deferred::StarPop { card, star } => {
                effects::pop_star(card, star, &mut self.host);
                self.scheduler.schedule(
                    self.config.effects.star_hold_ms,
                    Deferred::StarSettle { card, star },
                );
            }
            Deferred::StarSettle { card, star } => effects::settle_star(card, star, &mut self.host),
            Deferred::HeroEntrance => {
                let stagger = self.config.effects.hero_stagger_ms;
                for i in 0..self.host.count(Collection::HeroIntros) {
                    self.scheduler
                        .schedule(stagger.saturating_mul(i as u32), Deferred::HeroIntro(i));
                }
            }
            Deferred::HeroIntro(index) => effects::render_hero_intro(index, &mut self.host),
        }
    }

    // =========================================================================
    // SCROLL & NAVIGATION
    // =========================================================================

    fn on_scroll(&mut self) {
        let offset = self.host.scroll_y();
        let sections = self.host.section_bounds();
        let view = self.scroll.observe(offset, &sections).clone();

        if self.navbar_enabled {
            scroll::render_navbar(&view, &mut self.host);
        }
        scroll::render_nav_links(&view, &mut self.host);
        if self.indicator_enabled {
            let opacity = self.config.scroll.indicator_opacity;
            scroll::render_indicator(&view, opacity, &mut self.host);
        }
        self.parallax.trigger(&mut self.scheduler, Deferred::Parallax);
    }

    /// Smooth-scroll to a section, compensating for the fixed navbar.
    /// Returns false when there is no element with that id.
    fn scroll_to_section(&mut self, id: &str) -> bool {
        match self.host.offset_top(id) {
            Some(top) => {
                self.host.scroll_to(top - self.config.scroll.nav_scroll_offset);
                true
            }
            None => {
                tracing::debug!("No section #{} to scroll to", id);
                false
            }
        }
    }

    fn close_menu_if_open(&mut self) {
        if let Some(menu) = self.menu.as_mut() {
            if menu.close() {
                menu.render(&mut self.host);
            }
        }
    }

    fn on_key(&mut self, press: &KeyPress) -> Propagation {
        if press.key == "Escape" {
            if self.lightbox.as_ref().is_some_and(Lightbox::is_active) {
                self.close_lightbox();
            }
            return Propagation::Continue;
        }

        let Some(step) = Step::from_key(press) else {
            return Propagation::Continue;
        };
        let nav = &self.config.navigation;
        let spans: Vec<_> = nav
            .sections
            .iter()
            .map(|id| self.host.viewport_span(id))
            .collect();
        let current = current_section(&spans, nav.probe_line);

        match step_target(current, step, nav.sections.len()) {
            Some(target) => {
                if spans[target].is_some() {
                    let id = nav.sections[target].clone();
                    self.host.scroll_into_view(&id);
                }
                Propagation::PreventDefault
            }
            None => Propagation::Continue,
        }
    }

    // =========================================================================
    // REVEAL
    // =========================================================================

    fn on_intersect(&mut self, index: usize) {
        if !self.revealer.on_intersect(index) {
            return;
        }
        let raw = self.host.reveal_delay_attr(index);
        let multiplier = reveal::parse_reveal_delay(raw.as_deref());
        let delay = reveal::reveal_delay_ms(multiplier, self.config.reveal.delay_unit_ms);
        self.scheduler.schedule(delay, Deferred::Reveal(index));
    }

    /// Make every fade-in element and section visible, independent of the
    /// observer
    pub fn force_content_visible(&mut self) {
        self.revealer.force_all_visible();
        reveal::render_content_visible(&mut self.host);
    }

    // =========================================================================
    // LIGHTBOX
    // =========================================================================

    fn open_lightbox(&mut self, index: usize) {
        let Some(lightbox) = self.lightbox.as_mut() else {
            return;
        };
        match self.host.gallery_entry(index) {
            Some(entry) => {
                // A hide still pending from an earlier close belongs to that close
                if let Some(id) = self.lightbox_hide.take() {
                    self.scheduler.cancel(id);
                }
                lightbox.open(entry, &mut self.host);
            }
            None => tracing::debug!("Gallery item {} has no placeholder", index),
        }
    }

    fn close_lightbox(&mut self) {
        let Some(lightbox) = self.lightbox.as_mut() else {
            return;
        };
        if lightbox.begin_close(&mut self.host) {
            let id = self
                .scheduler
                .schedule(self.config.lightbox.close_ms, Deferred::LightboxHidden);
            self.lightbox_hide = Some(id);
        }
    }

    // =========================================================================
    // CARDS
    // =========================================================================

    fn on_card_hover(&mut self, card: Card, entered: bool) {
        let tilt = match card {
            Card::Review(_) if entered => effects::random_tilt(self.config.effects.max_tilt_degrees),
            _ => 0.0,
        };
        self.cards.hover(card, entered, tilt, &mut self.host);

        if let (Card::Review(index), true) = (card, entered) {
            let stagger = self.config.effects.star_stagger_ms;
            for star in 0..self.host.star_count(index) {
                self.scheduler.schedule(
                    stagger.saturating_mul(star as u32),
                    Deferred::StarPop { card: index, star },
                );
            }
        }
    }

    // =========================================================================
    // NOTIFICATIONS
    // =========================================================================

    /// Show a self-dismissing toast
    pub fn notify(&mut self, message: &str, kind: ToastKind) {
        let id = self.toaster.create(message, kind, &mut self.host);
        let settings = self.toaster.settings().clone();
        self.scheduler
            .schedule(settings.enter_ms, Deferred::ToastSlideIn(id));
        self.scheduler
            .schedule(settings.display_ms, Deferred::ToastDismiss(id));
        tracing::debug!("Notification {} ({}): {}", id, kind.as_str(), message);
    }

    fn dismiss_toast(&mut self, id: ToastId) {
        if self.toaster.dismiss(id, &mut self.host) {
            let exit_ms = self.toaster.settings().exit_ms;
            self.scheduler.schedule(exit_ms, Deferred::ToastRemove(id));
        }
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn scroll_view(&self) -> &ScrollView {
        self.scroll.view()
    }

    pub fn menu(&self) -> Option<&MobileMenu> {
        self.menu.as_ref()
    }

    pub fn lightbox(&self) -> Option<&Lightbox> {
        self.lightbox.as_ref()
    }

    pub fn revealer(&self) -> &Revealer {
        &self.revealer
    }

    pub fn toaster(&self) -> &Toaster {
        &self.toaster
    }

    pub fn cards(&self) -> &CardEffects {
        &self.cards
    }
}

impl<H: Host> ViewController<H, ManualScheduler> {
    /// Move the virtual clock forward, running every task that comes due,
    /// including ones scheduled along the way.
    pub fn advance(&mut self, ms: u64) {
        let target = self.scheduler.now() + ms;
        while let Some(task) = self.scheduler.pop_due(target) {
            self.handle(SiteEvent::Deferred(task));
        }
        self.scheduler.set_now(target);
    }
}

/// Log a failed component setup and disable it
fn report<T>(result: SiteResult<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!("{}", err);
            None
        }
    }
}
