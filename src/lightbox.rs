//! Gallery lightbox
//!
//! Hidden → Active on a gallery click, Active → Closing on any close
//! trigger, Closing → Hidden once the close transition has had time to run.
//! Closing from Hidden or Closing does nothing.

use crate::host::{GalleryEntry, Host, Node};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum LightboxState {
    #[default]
    Hidden,
    Active {
        entry: GalleryEntry,
    },
    Closing,
}

#[derive(Debug, Clone, Default)]
pub struct Lightbox {
    state: LightboxState,
}

impl Lightbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &LightboxState {
        &self.state
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, LightboxState::Active { .. })
    }

    pub fn is_hidden(&self) -> bool {
        matches!(self.state, LightboxState::Hidden)
    }

    /// Caption currently shown, if active
    pub fn caption(&self) -> Option<&str> {
        match &self.state {
            LightboxState::Active { entry } => Some(entry.caption.as_deref().unwrap_or("")),
            _ => None,
        }
    }

    /// Show `entry`, copying its visual and caption into the overlay
    pub fn open<H: Host + ?Sized>(&mut self, entry: GalleryEntry, host: &mut H) {
        host.set_style(Node::LightboxImage, "background", &entry.background);
        host.set_text(Node::LightboxImage, &entry.label);
        host.set_text(Node::LightboxCaption, entry.caption.as_deref().unwrap_or(""));
        host.set_class(Node::Lightbox, "hidden", false);
        host.set_class(Node::Lightbox, "active", true);
        host.set_style(Node::Body, "overflow", "hidden");
        self.state = LightboxState::Active { entry };
    }

    /// Start closing. Returns true when the caller must schedule
    /// [`Lightbox::finish_close`].
    pub fn begin_close<H: Host + ?Sized>(&mut self, host: &mut H) -> bool {
        if !self.is_active() {
            return false;
        }
        host.set_class(Node::Lightbox, "active", false);
        self.state = LightboxState::Closing;
        true
    }

    /// Close transition elapsed. Ignored unless still closing, so a hide
    /// scheduled before a reopen does not hide the new image.
    pub fn finish_close<H: Host + ?Sized>(&mut self, host: &mut H) {
        if self.state != LightboxState::Closing {
            return;
        }
        host.set_class(Node::Lightbox, "hidden", true);
        host.set_style(Node::Body, "overflow", "");
        self.state = LightboxState::Hidden;
    }
}
