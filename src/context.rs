//! Session and toaster context for the Livimmo UI.
//!
//! Both are provided at the App root via use_context_provider and reached
//! from components through the hooks below. The session itself lives in
//! `livimmo-core`; components that mutate it write through the signal and
//! pass `&mut Session` explicitly to the core operations.
//!
//! ## Usage
//!
//! ```ignore
//! let mut session = use_session();
//! let toaster = use_toaster();
//!
//! let toast = session.write().logout();
//! toaster.push(toast);
//! ```

use dioxus::prelude::*;
use livimmo_core::{Session, Toast};

/// How long a banner stays on screen before auto-dismissing.
const TOAST_DISMISS_MS: u64 = 4000;

/// Hook to access the session holder from context.
pub fn use_session() -> Signal<Session> {
    use_context::<Signal<Session>>()
}

/// Hook to access the toaster from context.
pub fn use_toaster() -> Toaster {
    use_context::<Toaster>()
}

/// A toast currently on screen, keyed so dismissal removes the right one.
#[derive(Clone, Debug, PartialEq)]
pub struct ActiveToast {
    pub id: u64,
    pub toast: Toast,
}

/// Queue of on-screen banners.
///
/// `push` shows a banner and schedules its removal; `dismiss` removes one
/// early (close button). Copy type, as signals are.
#[derive(Clone, Copy, PartialEq)]
pub struct Toaster {
    entries: Signal<Vec<ActiveToast>>,
    next_id: Signal<u64>,
}

impl Toaster {
    pub fn new() -> Self {
        Self {
            entries: Signal::new(Vec::new()),
            next_id: Signal::new(0),
        }
    }

    /// Banners currently on screen, oldest first.
    pub fn entries(&self) -> Vec<ActiveToast> {
        self.entries.read().clone()
    }

    /// Show a banner and schedule its auto-dismiss.
    pub fn push(&self, toast: Toast) {
        let mut entries = self.entries;
        let mut next_id = self.next_id;

        let id = *next_id.read();
        next_id.set(id + 1);
        entries.write().push(ActiveToast { id, toast });

        spawn(async move {
            tokio::time::sleep(std::time::Duration::from_millis(TOAST_DISMISS_MS)).await;
            entries.write().retain(|t| t.id != id);
        });
    }

    /// Remove a banner before its timer fires.
    pub fn dismiss(&self, id: u64) {
        let mut entries = self.entries;
        entries.write().retain(|t| t.id != id);
    }
}
