//! House of Food UI - site behaviour for the restaurant's single-page site
//!
//! Scroll-synchronized navigation, fade-in reveals, the mobile menu, the
//! gallery lightbox, card hover effects and notification toasts.
//!
//! The view-state logic is plain Rust and runs anywhere; the `dom` module
//! binds it to a real page when compiled for `wasm32`.

pub mod config;
pub mod controller;
pub mod effects;
pub mod error;
pub mod event;
pub mod host;
pub mod keyboard;
pub mod lightbox;
pub mod menu;
pub mod notify;
pub mod reveal;
pub mod reviews;
pub mod scroll;
pub mod timer;

#[cfg(target_arch = "wasm32")]
pub mod dom;

pub use config::{global_config, SiteConfig};
pub use controller::{Component, ViewController};
pub use error::{SiteError, SiteResult};
pub use event::{Card, Deferred, KeyPress, Propagation, SiteEvent};
pub use host::{Collection, GalleryEntry, Host, Node, SectionBounds};
pub use notify::{Toast, ToastId, ToastKind};
pub use timer::{Debouncer, ManualScheduler, Scheduler, TimerId};

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    if let Err(err) = dom::boot() {
        tracing::warn!("Site controller failed to start: {}", err);
    }
}
