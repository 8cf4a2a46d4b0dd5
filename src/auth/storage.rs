//! Persisted session token storage
//!
//! The browser build keeps the token in `localStorage` under a fixed key.
//! Host builds (tests, tooling) use an in-memory slot with the same
//! interface so session lifecycle stays exercisable.

/// Fixed key the session token is persisted under.
pub const SESSION_TOKEN_KEY: &str = "parley.session_token";

#[cfg(feature = "web")]
pub fn read_token() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok().flatten()?;
    storage.get_item(SESSION_TOKEN_KEY).ok().flatten()
}

#[cfg(feature = "web")]
pub fn write_token(token: &str) {
    match web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        Some(storage) => {
            if storage.set_item(SESSION_TOKEN_KEY, token).is_err() {
                tracing::warn!("failed to persist session token");
            }
        }
        None => tracing::warn!("local storage unavailable; session will not survive a reload"),
    }
}

#[cfg(feature = "web")]
pub fn clear_token() {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.remove_item(SESSION_TOKEN_KEY);
    }
}

#[cfg(not(feature = "web"))]
mod host {
    use std::cell::RefCell;

    thread_local! {
        pub(super) static TOKEN: RefCell<Option<String>> = RefCell::new(None);
    }
}

#[cfg(not(feature = "web"))]
pub fn read_token() -> Option<String> {
    host::TOKEN.with(|slot| slot.borrow().clone())
}

#[cfg(not(feature = "web"))]
pub fn write_token(token: &str) {
    host::TOKEN.with(|slot| *slot.borrow_mut() = Some(token.to_string()));
}

#[cfg(not(feature = "web"))]
pub fn clear_token() {
    host::TOKEN.with(|slot| *slot.borrow_mut() = None);
}

#[cfg(all(test, not(feature = "web")))]
mod tests {
    use super::*;

    #[test]
    fn test_token_lifecycle() {
        clear_token();
        assert_eq!(read_token(), None);

        write_token("session-1");
        assert_eq!(read_token(), Some("session-1".to_string()));

        // A later login overwrites the stored token.
        write_token("session-2");
        assert_eq!(read_token(), Some("session-2".to_string()));

        clear_token();
        assert_eq!(read_token(), None);
    }
}
