//! Session and registration-handoff context providers

use dioxus::prelude::*;

use super::storage;

/// Session context available to the entire app. The token is read from
/// persisted storage once at startup; only `login` and `logout` mutate it.
#[derive(Clone, Copy)]
pub struct SessionContext {
    token: Signal<Option<String>>,
}

impl SessionContext {
    /// Check if a session token is held.
    pub fn is_authenticated(&self) -> bool {
        self.token.read().is_some()
    }

    /// Persist the token and mark the session active.
    pub fn login(&mut self, token: String) {
        storage::write_token(&token);
        self.token.set(Some(token));
        tracing::info!("session established");
    }

    /// Drop the persisted token and end the session.
    pub fn logout(&mut self) {
        storage::clear_token();
        self.token.set(None);
        tracing::info!("session cleared");
    }
}

/// Holds the verification token between the registration screen and the
/// OTP screen. The slot is take-once: consuming it leaves nothing behind,
/// so the token is not retrievable after the handoff.
#[derive(Clone, Copy)]
pub struct PendingVerification {
    token: Signal<Option<String>>,
}

impl PendingVerification {
    /// Stash a token for the next screen transition.
    pub fn stash(&mut self, token: String) {
        self.token.set(Some(token));
    }

    /// Consume the handoff token.
    pub fn take(&mut self) -> Option<String> {
        self.token.write().take()
    }
}

/// Auth provider component that wraps the app
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let session_token = use_signal(storage::read_token);
    let pending_token = use_signal(|| None::<String>);

    use_context_provider(|| SessionContext {
        token: session_token,
    });
    use_context_provider(|| PendingVerification {
        token: pending_token,
    });

    children
}

/// Hook to access the session context
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
}

/// Hook to access the registration handoff slot
pub fn use_pending_verification() -> PendingVerification {
    use_context::<PendingVerification>()
}
