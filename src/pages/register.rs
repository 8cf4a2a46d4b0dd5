//! Registration page

use dioxus::prelude::*;

use crate::api::{client, RegisterRequest, RETRY_MESSAGE};
use crate::auth::use_pending_verification;
use crate::components::use_toaster;
use crate::routes::Route;
use crate::state::SubmitState;
use crate::validate::{validate_registration, RegistrationErrors, RegistrationInput};

/// Registration page
#[component]
pub fn Register() -> Element {
    let mut pending = use_pending_verification();
    let mut toaster = use_toaster();
    let navigator = use_navigator();

    let mut email = use_signal(String::new);
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut errors = use_signal(RegistrationErrors::default);
    let mut submit = use_signal(SubmitState::default);

    let handle_submit = move |_| {
        let input = RegistrationInput {
            email: email().trim().to_string(),
            username: username().trim().to_string(),
            password: password(),
            confirm_password: confirm_password(),
        };

        // Validation runs at submit time only; a failure never reaches the
        // network.
        if let Err(field_errors) = validate_registration(&input) {
            errors.set(field_errors);
            return;
        }
        errors.set(RegistrationErrors::default());

        if !submit.write().begin() {
            return;
        }

        spawn(async move {
            let request = RegisterRequest {
                email: input.email,
                username: input.username,
                password: input.password,
                confirm_password: input.confirm_password,
            };

            match client().register(&request).await {
                Ok(response) => match response.token {
                    Some(token) => {
                        submit.write().resolve();
                        toaster.success(
                            response
                                .message
                                .unwrap_or_else(|| "OTP has been sent to your email!".to_string()),
                        );
                        pending.stash(token);
                        navigator.push(Route::OtpVerification {});
                    }
                    None => {
                        submit.write().reject();
                        toaster.error(RETRY_MESSAGE);
                    }
                },
                Err(error) => {
                    // The form keeps its values for correction.
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
                class: "hidden md:flex md:w-1/2 bg-black items-center justify-center p-8",
                div {
                    class: "max-w-md text-center",
                    span { class: "text-6xl", "\u{1F310}" }
                    h2 { class: "mt-6 text-3xl font-bold text-white", "Join Parley" }
                }
            }

            // Right side with registration form
            div {
                class: "w-full md:w-1/2 bg-white flex items-center justify-center p-6 md:p-12",
                div {
                    class: "w-full max-w-md",

                    div {
                        class: "text-center mb-8",
                        h1 { class: "text-2xl font-bold text-gray-900 mb-2", "Sign Up!" }
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
                                class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-orange-400",
                                disabled: submit().is_submitting()
                            }
                            if let Some(err) = errors().email {
                                p { class: "mt-1 text-xs text-red-600", "{err}" }
                            }
                        }

                        div {
                            class: "mb-4",
                            input {
                                r#type: "text",
                                value: "{username}",
                                oninput: move |e| username.set(e.value()),
                                placeholder: "Username",
                                class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-orange-400",
                                disabled: submit().is_submitting()
                            }
                            if let Some(err) = errors().username {
                                p { class: "mt-1 text-xs text-red-600", "{err}" }
                            }
                        }

                        div {
                            class: "mb-4",
                            input {
                                r#type: "password",
                                value: "{password}",
                                oninput: move |e| password.set(e.value()),
                                placeholder: "Password",
                                class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-orange-400",
                                disabled: submit().is_submitting()
                            }
                            if let Some(err) = errors().password {
                                p { class: "mt-1 text-xs text-red-600", "{err}" }
                            }
                        }

                        div {
                            class: "mb-6",
                            input {
                                r#type: "password",
                                value: "{confirm_password}",
                                oninput: move |e| confirm_password.set(e.value()),
                                placeholder: "Confirm Password",
                                class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-orange-400",
                                disabled: submit().is_submitting()
                            }
                            if let Some(err) = errors().confirm_password {
                                p { class: "mt-1 text-xs text-red-600", "{err}" }
                            }
                        }

                        button {
                            r#type: "submit",
                            class: "w-full bg-orange-500 text-white py-2 px-4 rounded-md hover:bg-gray-800 focus:outline-none focus:ring-2 focus:ring-orange-400 focus:ring-offset-2 disabled:opacity-50 disabled:cursor-not-allowed",
                            disabled: submit().is_submitting(),
                            if submit().is_submitting() { "Sending..." } else { "Get OTP" }
                        }
                    }
                }
            }
        }
    }
}
