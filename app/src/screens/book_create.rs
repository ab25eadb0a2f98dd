use buch_client::api::SAVE_ERROR_MESSAGE;
use buch_client::validate::BookForm;
use dioxus::prelude::*;

use super::form::{
    ArtSelect, CheckboxInput, NumberInput, TextInput, BUTTON_SECONDARY_STYLE, BUTTON_STYLE,
    CARD_STYLE, ERROR_BOX_STYLE,
};
use crate::{AppContext, Route};

#[component]
pub fn BookCreate() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let client = ctx.client;
    let mut form = use_signal(BookForm::default);
    let mut loading = use_signal(|| false);
    let mut error = use_signal(String::new);

    let save = {
        let client = client.clone();
        move |_| {
            let client = client.clone();
            async move {
                error.set(String::new());

                // Validation happens before any network call; the first
                // failing rule is the one message shown.
                let input = match form.read().to_input() {
                    Ok(input) => input,
                    Err(err) => {
                        error.set(err.to_string());
                        return;
                    }
                };

                loading.set(true);
                match client.create(&input).await {
                    Ok(()) => {
                        loading.set(false);
                        navigator.push(Route::Search {});
                    }
                    Err(err) => {
                        log::error!("Speichern fehlgeschlagen: {err}");
                        error.set(SAVE_ERROR_MESSAGE.to_string());
                        loading.set(false);
                    }
                }
            }
        }
    };

    let current = form.read().clone();

    rsx! {
        div {
            style: CARD_STYLE,
            h2 {
                style: "font-size: 1.5rem; font-weight: bold; margin-bottom: 1rem;",
                "Neues Buch anlegen"
            }

            if !error.read().is_empty() {
                div { style: ERROR_BOX_STYLE, "{error}" }
            }

            div {
                style: "display: grid; grid-template-columns: repeat(2, 1fr); gap: 1rem; margin-bottom: 1rem;",
                TextInput {
                    label: "Titel",
                    value: current.titel.clone(),
                    oninput: move |value| form.with_mut(|f| f.titel = value),
                }
                TextInput {
                    label: "Untertitel",
                    value: current.untertitel.clone(),
                    oninput: move |value| form.with_mut(|f| f.untertitel = value),
                }
                TextInput {
                    label: "Autor (kommagetrennt)",
                    value: current.autor.clone(),
                    oninput: move |value| form.with_mut(|f| f.autor = value),
                }
                TextInput {
                    label: "ISBN",
                    value: current.isbn.clone(),
                    oninput: move |value| form.with_mut(|f| f.isbn = value),
                }
                ArtSelect {
                    label: "Buchart",
                    value: current.art.clone(),
                    empty_label: "Bitte wählen",
                    onchange: move |value| form.with_mut(|f| f.art = value),
                }
                NumberInput {
                    label: "Bewertung (0-5)",
                    value: current.rating.to_string(),
                    step: "1",
                    oninput: move |value: String| {
                        if let Ok(rating) = value.parse() {
                            form.with_mut(|f| f.rating = rating);
                        }
                    },
                }
                NumberInput {
                    label: "Preis",
                    value: current.preis.to_string(),
                    oninput: move |value: String| {
                        if let Ok(preis) = value.parse() {
                            form.with_mut(|f| f.preis = preis);
                        }
                    },
                }
                NumberInput {
                    label: "Rabatt",
                    value: current.rabatt.to_string(),
                    oninput: move |value: String| {
                        if let Ok(rabatt) = value.parse() {
                            form.with_mut(|f| f.rabatt = rabatt);
                        }
                    },
                }
                TextInput {
                    label: "Erscheinungsdatum",
                    value: current.datum.clone(),
                    input_type: "date",
                    oninput: move |value| form.with_mut(|f| f.datum = value),
                }
                TextInput {
                    label: "Homepage",
                    value: current.homepage.clone(),
                    oninput: move |value| form.with_mut(|f| f.homepage = value),
                }
            }

            div {
                style: "display: flex; gap: 1.5rem; margin-bottom: 1rem;",
                CheckboxInput {
                    label: "JavaScript",
                    checked: current.javascript,
                    onchange: move |checked| form.with_mut(|f| f.javascript = checked),
                }
                CheckboxInput {
                    label: "TypeScript",
                    checked: current.typescript,
                    onchange: move |checked| form.with_mut(|f| f.typescript = checked),
                }
                CheckboxInput {
                    label: "Lieferbar",
                    checked: current.lieferbar,
                    onchange: move |checked| form.with_mut(|f| f.lieferbar = checked),
                }
            }

            div {
                style: "display: flex; gap: 0.5rem;",
                button {
                    style: BUTTON_STYLE,
                    disabled: *loading.read(),
                    onclick: save,
                    if *loading.read() { "Speichern..." } else { "Speichern" }
                }
                button {
                    style: BUTTON_SECONDARY_STYLE,
                    onclick: move |_| { navigator.push(Route::Search {}); },
                    "Abbrechen"
                }
            }
        }
    }
}
