//! Login page

use dioxus::prelude::*;

use crate::api::{client, LoginRequest, RETRY_MESSAGE};
use crate::auth::use_session;
use crate::components::use_toaster;
use crate::routes::{Redirect, Route};
use crate::state::SubmitState;

/// Login page
#[component]
pub fn Login() -> Element {
    let mut session = use_session();
    let mut toaster = use_toaster();
    let navigator = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut email_error = use_signal(|| None::<&'static str>);
    let mut password_error = use_signal(|| None::<&'static str>);
    let mut submit = use_signal(SubmitState::default);

    // Redirect if already authenticated
    if session.is_authenticated() {
        return rsx! {
            Redirect { to: Route::Chat {} }
        };
    }

    let handle_submit = move |_| {
        let email_value = email().trim().to_string();
        let password_value = password();

        // Required-only validation; the password is deliberately not checked
        // against the registration complexity rules.
        email_error.set(email_value.is_empty().then_some("Please input your email!"));
        password_error.set(
            password_value
                .is_empty()
                .then_some("Please input your password!"),
        );
        if email_value.is_empty() || password_value.is_empty() {
            return;
        }

        if !submit.write().begin() {
            return;
        }

        spawn(async move {
            let request = LoginRequest {
                email: email_value,
                password: password_value,
            };

            match client().login(&request).await {
                Ok(response) => match response.token {
                    Some(token) => {
                        submit.write().resolve();
                        session.login(token);
                        navigator.push(Route::Chat {});
                    }
                    None => {
                        submit.write().reject();
                        toaster.error(RETRY_MESSAGE);
                    }
                },
                Err(error) => {
                    submit.write().reject();
                    toaster.error(error.user_message());
                }
            }
        });
    };

    rsx! {
        div {
            class: "flex min-h-screen",

            // Left side with illustration
            div {
                class: "hidden md:flex md:w-1/2 bg-white items-center justify-center p-8",
                div {
                    class: "max-w-md",
                    span { class: "text-6xl", "\u{1F4AC}" }
                    h2 { class: "mt-6 text-3xl font-bold text-gray-800", "Parley" }
                    p { class: "mt-2 text-gray-500", "Pick up the conversation where you left off." }
                }
            }

            // Right side with login form
            div {
                class: "w-full md:w-1/2 bg-black flex items-center justify-center p-6 md:p-12",
                div {
                    class: "w-full max-w-md",

                    div {
                        class: "text-center mb-8",
                        h1 { class: "text-2xl font-bold text-white mb-2", "Welcome Back!" }
                        p {
                            class: "text-gray-400 text-sm",
                            "Don't have an account yet? "
                            Link {
                                to: Route::Register {},
                                class: "text-white hover:underline",
                                "Sign Up"
                            }
                        }
                    }

                    form {
                        onsubmit: handle_submit,

                        div {
                            class: "mb-4",
                            input {
                                r#type: "text",
                                value: "{email}",
                                oninput: move |e| email.set(e.value()),
                                placeholder: "E-mail",
                                class: "w-full px-3 py-2 bg-white border border-gray-700 rounded-md focus:outline-none focus:ring-2 focus:ring-gray-500",
                                disabled: submit().is_submitting()
                            }
                            if let Some(err) = email_error() {
                                p { class: "mt-1 text-xs text-orange-400", "{err}" }
                            }
                        }

                        div {
                            class: "mb-4",
                            input {
                                r#type: "password",
                                value: "{password}",
                                oninput: move |e| password.set(e.value()),
                                placeholder: "Password",
                                class: "w-full px-3 py-2 bg-white border border-gray-700 rounded-md focus:outline-none focus:ring-2 focus:ring-gray-500",
                                disabled: submit().is_submitting()
                            }
                            if let Some(err) = password_error() {
                                p { class: "mt-1 text-xs text-orange-400", "{err}" }
                            }
                        }

                        button {
                            r#type: "submit",
                            class: "w-full bg-blue-600 text-white py-2 px-4 rounded-md hover:bg-gray-700 focus:outline-none focus:ring-2 focus:ring-gray-500 focus:ring-offset-2 disabled:opacity-50 disabled:cursor-not-allowed",
                            disabled: submit().is_submitting(),
                            if submit().is_submitting() { "Signing In..." } else { "Login" }
                        }
                    }
                }
            }
        }
    }
}
