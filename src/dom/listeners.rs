//! Browser event wiring
//!
//! Translates DOM events into [`SiteEvent`]s. Listeners live for the page
//! lifetime, so their closures are leaked with `forget()`. Components the
//! controller disabled at init get no listeners.

use super::{Dispatch, SharedController};
use crate::controller::Component;
use crate::event::{Card, KeyPress, Propagation, SiteEvent};
use crate::host::Collection;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Event, EventTarget, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, KeyboardEvent,
};

fn listen<F>(target: &EventTarget, name: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Dispatch a fixed event on every `name` event of `target`
fn forward(
    target: &EventTarget,
    name: &str,
    dispatch: &Dispatch,
    event: SiteEvent,
) -> Result<(), JsValue> {
    let dispatch = dispatch.clone();
    listen(target, name, move |_| {
        dispatch(event.clone());
    })
}

fn forward_cards(
    elements: &[HtmlElement],
    dispatch: &Dispatch,
    card: fn(usize) -> Card,
    pulse_on_click: bool,
) -> Result<(), JsValue> {
    for (i, el) in elements.iter().enumerate() {
        let card = card(i);
        forward(el, "mouseenter", dispatch, SiteEvent::CardHover { card, entered: true })?;
        forward(el, "mouseleave", dispatch, SiteEvent::CardHover { card, entered: false })?;
        if pulse_on_click {
            forward(el, "click", dispatch, SiteEvent::CardClicked(card))?;
        }
    }
    Ok(())
}

/// Register every listener, in the order the scroll reactions must apply
pub fn install(controller: &SharedController, dispatch: &Dispatch) -> Result<(), JsValue> {
    let ctl = controller.borrow();
    let host = ctl.host();
    let window = host.window();
    let document = host.document();

    forward(window, "scroll", dispatch, SiteEvent::Scroll)?;
    forward(window, "resize", dispatch, SiteEvent::Resize)?;
    forward(window, "load", dispatch, SiteEvent::WindowLoaded)?;

    // In-page anchors
    let anchors = document.query_selector_all("a[href^=\"#\"]")?;
    for i in 0..anchors.length() {
        let Some(anchor) = anchors.get(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok())
        else {
            continue;
        };
        let href = anchor.get_attribute("href").unwrap_or_default();
        let dispatch = dispatch.clone();
        listen(&anchor, "click", move |event| {
            let outcome = dispatch(SiteEvent::anchor(&href));
            if outcome == Propagation::PreventDefault {
                event.prevent_default();
            }
        })?;
    }

    if ctl.is_enabled(Component::MobileMenu) {
        if let Some(hamburger) = host.element(crate::host::Node::Hamburger) {
            forward(hamburger, "click", dispatch, SiteEvent::HamburgerClicked)?;
        }
        for (i, link) in host.elements(Collection::NavLinks).iter().enumerate() {
            forward(link, "click", dispatch, SiteEvent::NavLinkClicked(i))?;
        }
    }

    if ctl.is_enabled(Component::Lightbox) {
        install_lightbox(&ctl, dispatch)?;
    }

    if ctl.is_enabled(Component::ScrollIndicator) {
        if let Some(indicator) = host.element(crate::host::Node::ScrollIndicator) {
            forward(indicator, "click", dispatch, SiteEvent::ScrollIndicatorClicked)?;
        }
    }

    forward_cards(host.elements(Collection::MenuItems), dispatch, Card::MenuItem, true)?;
    forward_cards(host.elements(Collection::ReviewCards), dispatch, Card::Review, false)?;
    forward_cards(host.elements(Collection::ContactItems), dispatch, Card::ContactItem, true)?;

    // Keyboard: Escape and Ctrl/Cmd + arrows
    {
        let dispatch = dispatch.clone();
        listen(document, "keydown", move |event| {
            let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            let press = KeyPress {
                key: key_event.key(),
                ctrl: key_event.ctrl_key(),
                meta: key_event.meta_key(),
            };
            if dispatch(SiteEvent::KeyDown(press)) == Propagation::PreventDefault {
                event.prevent_default();
            }
        })?;
    }

    // The reveal animation is decorative; content is already visible
    if let Err(err) = install_fade_in_observer(&ctl, dispatch) {
        tracing::warn!("Fade-in observer unavailable: {:?}", err);
    }

    tracing::info!("Site listeners registered");
    Ok(())
}

fn install_lightbox(ctl: &super::SiteController, dispatch: &Dispatch) -> Result<(), JsValue> {
    use crate::host::Node;
    let host = ctl.host();

    for (i, item) in host.elements(Collection::GalleryItems).iter().enumerate() {
        forward(item, "click", dispatch, SiteEvent::GalleryItemClicked(i))?;
    }
    if let Some(close) = host.element(Node::LightboxClose) {
        forward(close, "click", dispatch, SiteEvent::LightboxCloseClicked)?;
    }
    if let Some(overlay) = host.element(Node::Lightbox) {
        let backdrop: JsValue = overlay.clone().into();
        let dispatch = dispatch.clone();
        listen(overlay, "click", move |event| {
            let on_backdrop = event
                .target()
                .map(JsValue::from)
                .is_some_and(|target| target == backdrop);
            if on_backdrop {
                dispatch(SiteEvent::LightboxBackdropClicked);
            }
        })?;
    }
    Ok(())
}

fn install_fade_in_observer(
    ctl: &super::SiteController,
    dispatch: &Dispatch,
) -> Result<(), JsValue> {
    let fade_ins = ctl.host().elements(Collection::FadeIns).to_vec();
    if fade_ins.is_empty() {
        return Ok(());
    }
    let targets: Vec<JsValue> = fade_ins.iter().map(|el| el.clone().into()).collect();

    let dispatch = dispatch.clone();
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target: JsValue = entry.target().into();
                if let Some(index) = targets.iter().position(|t| *t == target) {
                    dispatch(SiteEvent::FadeInIntersected(index));
                }
            }
        },
    );

    let reveal = &ctl.config().reveal;
    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(reveal.threshold));
    options.set_root_margin(&reveal.root_margin);

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    for el in &fade_ins {
        observer.observe(el);
    }
    callback.forget();
    Ok(())
}
