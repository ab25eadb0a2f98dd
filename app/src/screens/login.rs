use buch_client::auth::check_login;
use dioxus::prelude::*;

use super::form::{BUTTON_STYLE, CARD_STYLE, ERROR_BOX_STYLE, TextInput};
use crate::Route;

#[component]
pub fn Login() -> Element {
    let navigator = use_navigator();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(String::new);

    let submit = move |_| {
        error.set(String::new());
        match check_login(username.read().as_str(), password.read().as_str()) {
            Ok(()) => {
                navigator.push(Route::Search {});
            }
            Err(err) => error.set(err.to_string()),
        }
    };

    rsx! {
        div {
            style: "max-width: 400px; margin: 0 auto;",
            div {
                style: CARD_STYLE,
                h2 {
                    style: "font-size: 1.5rem; font-weight: bold; margin-bottom: 1.5rem; text-align: center;",
                    "Anmeldung"
                }

                if !error.read().is_empty() {
                    div { style: ERROR_BOX_STYLE, "{error}" }
                }

                div {
                    style: "display: flex; flex-direction: column; gap: 1rem;",
                    TextInput {
                        label: "Benutzername",
                        value: username.read().clone(),
                        oninput: move |value| username.set(value),
                    }
                    TextInput {
                        label: "Passwort",
                        value: password.read().clone(),
                        input_type: "password",
                        oninput: move |value| password.set(value),
                    }
                    button {
                        style: "width: 100%; {BUTTON_STYLE}",
                        onclick: submit,
                        "Anmelden"
                    }
                }
            }
        }
    }
}
