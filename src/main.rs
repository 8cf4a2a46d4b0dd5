//! Parley - Dioxus web client
//!
//! Client-side screens for the Parley chat application: registration, OTP
//! verification, login, and the chat shell. All data comes from the
//! authentication backend's JSON API.
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! dx serve --features web
//! ```
//!
//! Production build:
//! ```bash
//! dx build --release --features web
//! ```

#![allow(non_snake_case)]

mod api;
mod app;
mod auth;
mod components;
mod otp;
mod pages;
mod routes;
mod state;
mod validate;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    if let Ok(url) = std::env::var("PARLEY_API_URL") {
        api::init_api_base(url);
    }

    dioxus::launch(app::App);
}
