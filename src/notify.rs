//! Notification toasts
//!
//! Each `notify` call produces an independent toast with its own timers.
//! There is no queue: toasts coexist and leave on their own schedule.
//!
//! Lifecycle: `Entering` (off screen) → `Shown` → `Leaving` → removed.

use crate::config::NotificationSettings;
use crate::host::{Host, Node};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(pub u64);

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

// =============================================================================
// TOAST KIND
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastKind {
    #[default]
    Info,
    Success,
    Error,
}

impl ToastKind {
    /// Lenient parse for values coming from JavaScript; unknown kinds are info
    pub fn parse(kind: &str) -> Self {
        match kind.trim().to_ascii_lowercase().as_str() {
            "success" => Self::Success,
            "error" => Self::Error,
            _ => Self::Info,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    pub fn background(&self) -> &'static str {
        match self {
            Self::Success => "#2E7D32",
            Self::Error => "#d32f2f",
            Self::Info => "#1976d2",
        }
    }

    /// `notification notification--<kind>`
    pub fn class_name(&self) -> String {
        format!("notification notification--{}", self.as_str())
    }
}

// =============================================================================
// TOAST
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub kind: ToastKind,
}

impl Toast {
    /// Inline styles applied when the node is created
    pub fn initial_styles(&self, offscreen_offset: f64) -> Vec<(&'static str, String)> {
        vec![
            ("position", "fixed".to_string()),
            ("top", "100px".to_string()),
            ("right", "20px".to_string()),
            ("background", self.kind.background().to_string()),
            ("color", "white".to_string()),
            ("padding", "1rem 1.5rem".to_string()),
            ("border-radius", "8px".to_string()),
            ("box-shadow", "0 4px 20px rgba(0, 0, 0, 0.15)".to_string()),
            ("z-index", "10000".to_string()),
            ("transform", offscreen_transform(offscreen_offset)),
            ("transition", "all 0.3s cubic-bezier(0.4, 0, 0.2, 1)".to_string()),
            ("max-width", "400px".to_string()),
            ("word-wrap", "break-word".to_string()),
        ]
    }
}

fn offscreen_transform(offset: f64) -> String {
    format!("translateX({}px)", offset)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    Entering,
    Shown,
    Leaving,
}

#[derive(Debug, Clone)]
struct LiveToast {
    id: ToastId,
    phase: ToastPhase,
}

// =============================================================================
// TOASTER
// =============================================================================

/// Tracks live toasts. Timer scheduling is left to the caller; each method
/// says what (if anything) needs scheduling next.
#[derive(Debug, Clone)]
pub struct Toaster {
    settings: NotificationSettings,
    next_id: u64,
    live: Vec<LiveToast>,
}

impl Toaster {
    pub fn new(settings: NotificationSettings) -> Self {
        Self {
            settings,
            next_id: 0,
            live: Vec::new(),
        }
    }

    pub fn settings(&self) -> &NotificationSettings {
        &self.settings
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    pub fn phase(&self, id: ToastId) -> Option<ToastPhase> {
        self.live.iter().find(|t| t.id == id).map(|t| t.phase)
    }

    /// Create and insert a toast. The caller schedules slide-in and
    /// auto-dismiss.
    pub fn create<H: Host + ?Sized>(
        &mut self,
        message: &str,
        kind: ToastKind,
        host: &mut H,
    ) -> ToastId {
        let id = ToastId(self.next_id);
        self.next_id += 1;

        let toast = Toast {
            id,
            message: message.to_string(),
            kind,
        };
        host.insert_toast(&toast);
        for (property, value) in toast.initial_styles(self.settings.offscreen_offset) {
            host.set_style(Node::Toast(id), property, &value);
        }
        self.live.push(LiveToast {
            id,
            phase: ToastPhase::Entering,
        });
        id
    }

    pub fn slide_in<H: Host + ?Sized>(&mut self, id: ToastId, host: &mut H) {
        if let Some(toast) = self.find_mut(id) {
            if toast.phase == ToastPhase::Entering {
                toast.phase = ToastPhase::Shown;
                host.set_style(Node::Toast(id), "transform", "translateX(0)");
            }
        }
    }

    /// Animate out. Returns true when the caller must schedule removal;
    /// a toast already leaving (or gone) is left alone.
    pub fn dismiss<H: Host + ?Sized>(&mut self, id: ToastId, host: &mut H) -> bool {
        let offset = self.settings.offscreen_offset;
        match self.find_mut(id) {
            Some(toast) if toast.phase != ToastPhase::Leaving => {
                toast.phase = ToastPhase::Leaving;
                host.set_style(Node::Toast(id), "transform", &offscreen_transform(offset));
                true
            }
            _ => false,
        }
    }

    pub fn remove<H: Host + ?Sized>(&mut self, id: ToastId, host: &mut H) {
        let before = self.live.len();
        self.live.retain(|t| t.id != id);
        if self.live.len() != before {
            host.remove_toast(id);
        }
    }

    fn find_mut(&mut self, id: ToastId) -> Option<&mut LiveToast> {
        self.live.iter_mut().find(|t| t.id == id)
    }
}
