//! Chat page
//!
//! Static shell only: the conversation surface is a placeholder behind the
//! session guard. No chat traffic leaves this screen.

use dioxus::prelude::*;

use crate::auth::use_session;
use crate::routes::{Redirect, Route};

const PLACEHOLDER_CHATS: &[&str] = &[
    "Weekend plans",
    "Project kickoff notes",
    "Reading list",
    "Trip ideas",
    "Untitled chat",
];

/// Chat page
#[component]
pub fn Chat() -> Element {
    let mut session = use_session();
    let navigator = use_navigator();

    let mut message = use_signal(String::new);

    // Session guard: only authenticated visitors see the chat shell.
    if !session.is_authenticated() {
        return rsx! {
            Redirect { to: Route::Login {} }
        };
    }

    let handle_logout = move |_| {
        session.logout();
        navigator.push(Route::Login {});
    };

    rsx! {
        div {
            class: "flex h-screen bg-gray-900",

            // Sidebar
            div {
                class: "w-64 bg-gray-800 text-white p-4",
                div {
                    class: "mb-6",
                    h2 { class: "text-lg font-semibold mb-2", "Previous Chats" }
                    div {
                        class: "space-y-2 overflow-y-auto",
                        for (i, chat) in PLACEHOLDER_CHATS.iter().enumerate() {
                            div {
                                key: "{i}",
                                class: "text-sm text-gray-300 truncate hover:bg-gray-700 p-2 rounded cursor-pointer",
                                "{chat}"
                            }
                        }
                    }
                }
            }

            // Main content
            div {
                class: "flex-1 flex flex-col",

                // Header
                div {
                    class: "bg-gray-800 p-4 flex justify-between items-center",
                    span { class: "text-gray-400 text-xl", "\u{1F50D}" }
                    button {
                        r#type: "button",
                        onclick: handle_logout,
                        class: "text-gray-400 hover:text-white text-sm",
                        "Log Out"
                    }
                }

                // Chat area
                div {
                    class: "flex-1 p-8 flex flex-col items-center justify-center",
                    div {
                        class: "max-w-2xl w-full",
                        h1 {
                            class: "text-white text-2xl font-semibold mb-6 text-center",
                            "What can I help with?"
                        }

                        div {
                            class: "mb-8",
                            input {
                                r#type: "text",
                                value: "{message}",
                                oninput: move |e| message.set(e.value()),
                                placeholder: "Ask here...",
                                class: "w-full bg-gray-700 text-white border-none rounded-lg py-3 px-4 focus:outline-none focus:ring-2 focus:ring-gray-500"
                            }
                        }

                        div {
                            class: "flex justify-center gap-4",
                            for i in 0..4 {
                                button {
                                    key: "{i}",
                                    r#type: "button",
                                    class: "w-24 h-12 bg-gray-700 border-none rounded text-gray-400 hover:bg-gray-600 hover:text-white"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
