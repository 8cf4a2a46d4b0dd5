//! Transient notification toasts

use dioxus::prelude::*;

#[cfg(feature = "web")]
const DISMISS_AFTER_MS: u32 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Handle for raising notifications from anywhere in the app. Only one
/// toast is visible at a time; a new one replaces the current.
#[derive(Clone, Copy)]
pub struct Toaster {
    current: Signal<Option<Toast>>,
    next_id: Signal<u64>,
}

impl Toaster {
    pub fn success(&mut self, message: impl Into<String>) {
        self.show(ToastKind::Success, message.into());
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.show(ToastKind::Error, message.into());
    }

    fn show(&mut self, kind: ToastKind, message: String) {
        let id = {
            let mut next_id = self.next_id.write();
            *next_id += 1;
            *next_id
        };
        self.current.set(Some(Toast { id, kind, message }));

        // Dismiss after a few seconds, unless a newer toast replaced this one.
        #[cfg(feature = "web")]
        {
            let mut current = self.current;
            spawn(async move {
                gloo_timers::future::TimeoutFuture::new(DISMISS_AFTER_MS).await;
                let still_showing = current.read().as_ref().map(|t| t.id) == Some(id);
                if still_showing {
                    current.set(None);
                }
            });
        }
    }
}

/// Provides the toaster context and renders the active toast above the app.
#[component]
pub fn ToastProvider(children: Element) -> Element {
    let current = use_signal(|| None::<Toast>);
    let next_id = use_signal(|| 0u64);
    use_context_provider(|| Toaster { current, next_id });

    rsx! {
        {children}
        ToastHost {}
    }
}

#[component]
fn ToastHost() -> Element {
    let toaster = use_toaster();
    let Some(toast) = toaster.current.read().clone() else {
        return rsx! {};
    };

    let palette = match toast.kind {
        ToastKind::Success => "bg-green-50 border border-green-200 text-green-800",
        ToastKind::Error => "bg-orange-50 border border-orange-200 text-orange-800",
    };

    rsx! {
        div {
            class: "fixed top-4 right-4 z-50",
            div {
                class: "px-4 py-3 rounded-md shadow-md text-sm {palette}",
                "{toast.message}"
            }
        }
    }
}

/// Hook to access the toaster
pub fn use_toaster() -> Toaster {
    use_context::<Toaster>()
}
