//! Toast notification host and the `Notifier` handle used to raise toasts.
//!
//! The keyframes the toast animates with are rendered next to it, so they
//! leave the document together with the toast.

#[cfg(test)]
#[path = "notification_test.rs"]
mod notification_test;

use leptos::prelude::*;

use crate::config::PageConfig;
use crate::state::notification::{NotificationId, NotificationPhase, NotificationState};

const KEYFRAMES: &str = "@keyframes slideIn { from { transform: translateX(100%); opacity: 0; } to { transform: translateX(0); opacity: 1; } } \
@keyframes fadeOut { from { opacity: 1; } to { opacity: 0; } }";

const BASE_STYLE: &str = "position: fixed; bottom: 20px; right: 20px; background-color: var(--soft-pink); \
color: white; padding: 12px 20px; border-radius: 8px; box-shadow: 0 5px 15px rgba(0, 0, 0, 0.1); z-index: 10000;";

/// Copyable handle for showing notifications, provided through context.
#[derive(Clone, Copy)]
pub struct Notifier {
    toasts: RwSignal<NotificationState>,
    fade_at_ms: u32,
    lifetime_ms: u32,
}

impl Notifier {
    pub fn new(config: &PageConfig) -> Self {
        Self {
            toasts: RwSignal::new(NotificationState::default()),
            fade_at_ms: config.notification_fade_at_ms,
            lifetime_ms: config.notification_lifetime_ms,
        }
    }

    /// Show `message`, replacing any notification currently on screen.
    pub fn notify(self, message: impl Into<String>) -> NotificationId {
        let mut id = NotificationId::default();
        self.toasts.update(|toasts| id = toasts.notify(message));
        #[cfg(feature = "hydrate")]
        {
            use gloo_timers::callback::Timeout;

            let toasts = self.toasts;
            Timeout::new(self.fade_at_ms, move || {
                toasts.update(|t| {
                    t.begin_fade(id);
                });
            })
            .forget();
            Timeout::new(self.lifetime_ms, move || {
                toasts.update(|t| {
                    t.expire(id);
                });
            })
            .forget();
        }
        id
    }

    pub fn state(self) -> RwSignal<NotificationState> {
        self.toasts
    }
}

fn toast_style(phase: NotificationPhase) -> String {
    let animation = match phase {
        NotificationPhase::Entering => "slideIn 0.3s ease",
        NotificationPhase::Fading => "fadeOut 0.3s ease forwards",
    };
    format!("{BASE_STYLE} animation: {animation};")
}

/// Renders the live notification, if any.
#[component]
pub fn NotificationHost() -> impl IntoView {
    let notifier = expect_context::<Notifier>();
    let toasts = notifier.state();

    move || {
        toasts.get().current().cloned().map(|toast| {
            view! {
                <style>{KEYFRAMES}</style>
                <div class="notification" role="status" style=toast_style(toast.phase)>
                    {toast.message}
                </div>
            }
        })
    }
}
