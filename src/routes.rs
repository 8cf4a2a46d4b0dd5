//! Route definitions for the application

use dioxus::prelude::*;

use crate::pages::{Chat, Login, OtpVerification, Register};

/// All application routes
#[derive(Clone, Debug, PartialEq, Routable)]
pub enum Route {
    #[redirect("/", || Route::Login {})]
    #[route("/login")]
    Login {},

    #[route("/register")]
    Register {},

    #[route("/otp-verification")]
    OtpVerification {},

    #[route("/chat")]
    Chat {},
}

/// Render-time redirect used by the page-level auth guards.
///
/// dioxus-router 0.6 does not ship a `Redirect` component, so this
/// reconstructs the guard-and-redirect pattern the pages rely on:
/// replace the current history entry with `to` and render nothing.
#[component]
pub fn Redirect(to: Route) -> Element {
    use_navigator().replace(to);
    rsx! {}
}
