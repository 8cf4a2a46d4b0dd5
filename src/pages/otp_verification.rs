//! OTP verification page
//!
//! Reached only through a registration handoff: the verification token is
//! consumed from the navigation-scoped slot on mount, and the page bounces
//! back to registration when there is none.

use std::rc::Rc;

use dioxus::prelude::*;

use crate::api::{client, ResendOtpRequest, VerifyOtpRequest};
use crate::auth::use_pending_verification;
use crate::components::use_toaster;
use crate::otp::{OtpBuffer, OTP_LEN};
use crate::routes::{Redirect, Route};
use crate::state::SubmitState;

/// OTP verification page
#[component]
pub fn OtpVerification() -> Element {
    let pending = use_pending_verification();
    let mut toaster = use_toaster();
    let navigator = use_navigator();

    // Take the handoff token once; it is gone from the slot afterwards.
    let mut verification_token = use_signal({
        let mut pending = pending;
        move || pending.take()
    });

    let mut buffer = use_signal(OtpBuffer::new);
    let mut submit = use_signal(SubmitState::default);
    let mut inputs = use_signal(|| vec![None::<Rc<MountedData>>; OTP_LEN]);

    // Keep DOM focus on the slot the buffer's cursor points at.
    use_effect(move || {
        let cursor = buffer.read().cursor();
        if let Some(input) = inputs.read()[cursor].clone() {
            spawn(async move {
                let _ = input.set_focus(true).await;
            });
        }
    });

    if verification_token.read().is_none() {
        return rsx! {
            Redirect { to: Route::Register {} }
        };
    }

    let handle_verify = move |_| {
        let code = match buffer.read().code() {
            Some(code) => code,
            None => {
                toaster.error("Please enter all digits of the OTP");
                return;
            }
        };
        let Some(token) = verification_token.read().clone() else {
            return;
        };

        if !submit.write().begin() {
            return;
        }

        spawn(async move {
            let request = VerifyOtpRequest { token, otp: code };

            match client().verify_otp(&request).await {
                Ok(response) => {
                    submit.write().resolve();
                    toaster.success(
                        response
                            .message
                            .unwrap_or_else(|| "OTP verified successfully!".to_string()),
                    );
                    navigator.push(Route::Login {});
                }
                Err(error) => {
                    // The entered digits stay put for the retry.
                    submit.write().reject();
                    toaster.error(error.user_message());
                }
            }
        });
    };

    let handle_resend = move |_| {
        let Some(token) = verification_token.read().clone() else {
            return;
        };

        if !submit.write().begin() {
            return;
        }

        spawn(async move {
            let request = ResendOtpRequest { token };

            match client().resend_otp(&request).await {
                Ok(response) => {
                    submit.write().resolve();
                    buffer.write().clear();
                    if let Some(rotated) = response.token {
                        // The backend issues a fresh verification token on
                        // resend; later verify calls must use it.
                        verification_token.set(Some(rotated));
                    }
                    toaster.success(
                        response
                            .message
                            .unwrap_or_else(|| "New OTP has been sent to your email!".to_string()),
                    );
                }
                Err(error) => {
                    submit.write().reject();
                    toaster.error(error.user_message());
                }
            }
        });
    };

    rsx! {
        div {
            class: "min-h-screen bg-gray-900 flex items-center justify-center p-4",

            div {
                class: "bg-white rounded-2xl shadow-2xl p-8 w-full max-w-md mx-auto",

                div {
                    class: "text-center mb-8",
                    h1 { class: "text-2xl font-bold text-gray-900 mb-2", "Enter OTP" }
                    p { class: "text-gray-600 text-sm", "We sent a 4-digit code to your email" }
                }

                div {
                    class: "flex justify-center gap-4 mb-8",
                    for i in 0..OTP_LEN {
                        input {
                            key: "{i}",
                            r#type: "text",
                            inputmode: "numeric",
                            maxlength: "1",
                            value: buffer.read().digit(i).map(String::from).unwrap_or_default(),
                            autofocus: i == 0,
                            onmounted: move |e| inputs.write()[i] = Some(e.data()),
                            oninput: move |e| {
                                let value = e.value();
                                let mut buffer = buffer.write();
                                if value.chars().count() > 1 {
                                    // Browsers deliver pasted text as one
                                    // multi-character input event.
                                    buffer.paste(&value);
                                } else {
                                    buffer.enter(i, &value);
                                }
                            },
                            onkeydown: move |e| {
                                if e.key() == Key::Backspace {
                                    buffer.write().backspace(i);
                                }
                            },
                            class: "w-14 h-14 text-2xl text-center border-2 border-gray-300 rounded-lg focus:border-black focus:outline-none bg-gray-50",
                            disabled: submit().is_submitting()
                        }
                    }
                }

                div {
                    class: "space-y-4",
                    button {
                        r#type: "button",
                        onclick: handle_verify,
                        class: "w-full bg-orange-500 text-white py-3 px-4 rounded-md text-lg hover:bg-orange-800 focus:outline-none focus:ring-2 focus:ring-orange-400 disabled:opacity-50 disabled:cursor-not-allowed",
                        disabled: submit().is_submitting(),
                        if submit().is_submitting() { "Verifying..." } else { "Verify" }
                    }

                    div {
                        class: "text-center",
                        button {
                            r#type: "button",
                            onclick: handle_resend,
                            class: "text-red-600 hover:text-red-500 focus:outline-none text-sm",
                            disabled: submit().is_submitting(),
                            "Resend OTP"
                        }
                    }
                }
            }
        }
    }
}
