//! Browser bindings (wasm32 only)
//!
//! ```text
//! DOM event ──Closure──► Dispatch ──► SharedController::handle()
//!                            ▲
//! gloo Timeout ──────────────┘
//! ```
//!
//! The controller lives in a thread-local so the JS-facing
//! `showNotification` export can reach it; listeners and timers only hold a
//! weak handle.

mod host;
mod listeners;
mod scheduler;

pub use host::DomHost;
pub use scheduler::BrowserScheduler;

use crate::controller::ViewController;
use crate::error::{SiteError, SiteResult};
use crate::event::{Propagation, SiteEvent};
use crate::notify::ToastKind;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

pub type SiteController = ViewController<DomHost, BrowserScheduler>;
pub type SharedController = Rc<RefCell<SiteController>>;

/// Routes an event into the controller, returning its propagation verdict
pub type Dispatch = Rc<dyn Fn(SiteEvent) -> Propagation>;

thread_local! {
    static CONTROLLER: RefCell<Option<SharedController>> = const { RefCell::new(None) };
}

fn dispatcher(slot: Rc<RefCell<Weak<RefCell<SiteController>>>>) -> Dispatch {
    Rc::new(move |event: SiteEvent| {
        let Some(controller) = slot.borrow().upgrade() else {
            return Propagation::Continue;
        };
        let Ok(mut ctl) = controller.try_borrow_mut() else {
            tracing::warn!("Dropped re-entrant {:?}", event);
            return Propagation::Continue;
        };
        ctl.handle(event)
    })
}

/// Start the controller once the document is parsed
pub fn boot() -> SiteResult<()> {
    let window = web_sys::window().ok_or_else(|| SiteError::JavaScript("No window".into()))?;
    let document = window
        .document()
        .ok_or_else(|| SiteError::JavaScript("No document".into()))?;

    if document.ready_state() != "loading" {
        return mount();
    }

    let on_ready = Closure::<dyn FnMut(web_sys::Event)>::new(move |_| {
        if let Err(err) = mount() {
            tracing::warn!("Site controller failed to start: {}", err);
        }
    });
    document
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())?;
    on_ready.forget();
    Ok(())
}

fn mount() -> SiteResult<()> {
    let already_mounted = CONTROLLER.with(|c| c.borrow().is_some());
    if already_mounted {
        tracing::debug!("Site controller already mounted");
        return Ok(());
    }

    let slot = Rc::new(RefCell::new(Weak::new()));
    let dispatch = dispatcher(slot.clone());

    let host = DomHost::resolve(dispatch.clone())?;
    let scheduler = BrowserScheduler::new(dispatch.clone());
    let controller: SharedController = Rc::new(RefCell::new(ViewController::new(host, scheduler)));
    *slot.borrow_mut() = Rc::downgrade(&controller);

    controller.borrow_mut().init();
    listeners::install(&controller, &dispatch)?;

    // `load` may have fired before we got here
    let loaded = controller.borrow().host().document().ready_state() == "complete";
    CONTROLLER.with(|c| *c.borrow_mut() = Some(controller));
    if loaded {
        dispatch(SiteEvent::WindowLoaded);
    }
    Ok(())
}

/// Show a toast from JavaScript: `showNotification("Saved", "success")`
#[wasm_bindgen(js_name = showNotification)]
pub fn show_notification(message: &str, kind: Option<String>) {
    let kind = kind.as_deref().map(ToastKind::parse).unwrap_or_default();
    CONTROLLER.with(|slot| match slot.borrow().as_ref() {
        Some(controller) => match controller.try_borrow_mut() {
            Ok(mut ctl) => ctl.notify(message, kind),
            Err(_) => tracing::warn!("Notification dropped: controller busy"),
        },
        None => tracing::warn!("showNotification called before the site controller started"),
    });
}
