use buch_client::api::CatalogClient;
use buch_client::query::BuchArt;
use buch_client::search::SearchState;
use dioxus::prelude::*;

use super::form::{
    ArtSelect, CheckboxInput, NumberInput, TextInput, BUTTON_SECONDARY_STYLE, BUTTON_STYLE,
    CARD_STYLE, ERROR_BOX_STYLE,
};
use crate::{AppContext, Route};

/// Issue one search for the state's current filter and page. The sequence
/// number from `begin_search` travels with the request so a response that
/// was overtaken by a later search is dropped on arrival.
async fn run_search(mut state: Signal<SearchState>, client: CatalogClient) {
    let (seq, filter, pagination) = {
        let mut current = state.write();
        let seq = current.begin_search();
        (seq, current.filter.clone(), current.pagination.clone())
    };
    let result = client.search(&filter, &pagination).await;
    state.with_mut(|s| s.apply_result(seq, result));
}

#[component]
pub fn Search() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let client = ctx.client;
    let page_size = ctx.page_size;
    let mut state = use_signal(move || SearchState::new(page_size));

    let filter = state.read().filter.clone();
    let books = state.read().books.clone();
    let loading = state.read().loading;
    let error = state.read().error.clone();
    let page = state.read().pagination.page;
    let total = state.read().pagination.total;
    let total_pages = state.read().pagination.total_pages();

    rsx! {
        div {
            style: CARD_STYLE,
            div {
                style: "display: flex; justify-content: space-between; align-items: baseline; margin-bottom: 1rem;",
                h2 { style: "font-size: 1.5rem; font-weight: bold;", "Suche" }
                div {
                    style: "display: flex; gap: 0.5rem;",
                    button {
                        style: BUTTON_SECONDARY_STYLE,
                        onclick: move |_| { navigator.push(Route::BookCreate {}); },
                        "Neues Buch"
                    }
                    button {
                        style: BUTTON_SECONDARY_STYLE,
                        onclick: move |_| { navigator.push(Route::Login {}); },
                        "Abmelden"
                    }
                }
            }

            div {
                style: "display: grid; grid-template-columns: repeat(3, 1fr); gap: 1rem; margin-bottom: 1rem;",
                TextInput {
                    label: "Titel",
                    value: filter.titel.clone(),
                    oninput: move |value| state.with_mut(|s| s.filter.titel = value),
                }
                TextInput {
                    label: "ISBN",
                    value: filter.isbn.clone(),
                    oninput: move |value| state.with_mut(|s| s.filter.isbn = value),
                }
                ArtSelect {
                    label: "Buchart",
                    value: filter.art.map(|art| art.to_string()).unwrap_or_default(),
                    empty_label: "Alle",
                    onchange: move |value: String| {
                        state.with_mut(|s| s.filter.art = BuchArt::parse(&value));
                    },
                }
                NumberInput {
                    label: "Bewertung",
                    value: filter.rating.map(|r| r.to_string()).unwrap_or_default(),
                    step: "1",
                    oninput: move |value: String| {
                        state.with_mut(|s| s.filter.rating = value.parse().ok());
                    },
                }
                NumberInput {
                    label: "Preis",
                    value: filter.preis.map(|p| p.to_string()).unwrap_or_default(),
                    oninput: move |value: String| {
                        state.with_mut(|s| s.filter.preis = value.parse().ok());
                    },
                }
                NumberInput {
                    label: "Rabatt",
                    value: filter.rabatt.map(|r| r.to_string()).unwrap_or_default(),
                    oninput: move |value: String| {
                        state.with_mut(|s| s.filter.rabatt = value.parse().ok());
                    },
                }
                TextInput {
                    label: "Datum",
                    value: filter.datum.clone(),
                    input_type: "date",
                    oninput: move |value| state.with_mut(|s| s.filter.datum = value),
                }
                TextInput {
                    label: "Homepage",
                    value: filter.homepage.clone(),
                    oninput: move |value| state.with_mut(|s| s.filter.homepage = value),
                }
            }

            div {
                style: "display: flex; gap: 1.5rem; margin-bottom: 1rem;",
                CheckboxInput {
                    label: "JavaScript",
                    checked: filter.javascript,
                    onchange: move |checked| state.with_mut(|s| s.filter.javascript = checked),
                }
                CheckboxInput {
                    label: "TypeScript",
                    checked: filter.typescript,
                    onchange: move |checked| state.with_mut(|s| s.filter.typescript = checked),
                }
                CheckboxInput {
                    label: "Lieferbar",
                    checked: filter.lieferbar,
                    onchange: move |checked| state.with_mut(|s| s.filter.lieferbar = checked),
                }
            }

            div {
                style: "display: flex; gap: 0.5rem;",
                button {
                    style: BUTTON_STYLE,
                    disabled: loading,
                    onclick: {
                        let client = client.clone();
                        move |_| {
                            let client = client.clone();
                            async move { run_search(state, client).await }
                        }
                    },
                    if loading { "Suche läuft..." } else { "Suchen" }
                }
                button {
                    style: BUTTON_SECONDARY_STYLE,
                    onclick: move |_| state.with_mut(|s| s.reset()),
                    "Zurücksetzen"
                }
            }
        }

        if let Some(message) = error {
            div { style: ERROR_BOX_STYLE, "{message}" }
        }

        if !books.is_empty() {
            div {
                style: CARD_STYLE,
                table {
                    style: "width: 100%; border-collapse: collapse; text-align: left;",
                    thead {
                        tr {
                            th { style: "padding: 0.5rem; border-bottom: 2px solid #e5e7eb;", "ID" }
                            th { style: "padding: 0.5rem; border-bottom: 2px solid #e5e7eb;", "Titel" }
                            th { style: "padding: 0.5rem; border-bottom: 2px solid #e5e7eb;", "Autor" }
                            th { style: "padding: 0.5rem; border-bottom: 2px solid #e5e7eb;", "ISBN" }
                        }
                    }
                    tbody {
                        for book in books.iter() {
                            tr {
                                td { style: "padding: 0.5rem; border-bottom: 1px solid #f3f4f6;", "{book.id}" }
                                td { style: "padding: 0.5rem; border-bottom: 1px solid #f3f4f6;", "{book.titel}" }
                                td {
                                    style: "padding: 0.5rem; border-bottom: 1px solid #f3f4f6;",
                                    {book.autor.clone().unwrap_or_default()}
                                }
                                td { style: "padding: 0.5rem; border-bottom: 1px solid #f3f4f6;", "{book.isbn}" }
                            }
                        }
                    }
                }

                if let Some(total_pages) = total_pages {
                    div {
                        style: "display: flex; justify-content: center; align-items: center; gap: 1rem; margin-top: 1rem;",
                        button {
                            style: BUTTON_SECONDARY_STYLE,
                            disabled: loading || page <= 1,
                            onclick: {
                                let client = client.clone();
                                move |_| {
                                    let client = client.clone();
                                    async move {
                                        let target = state.read().pagination.page.saturating_sub(1);
                                        state.with_mut(|s| s.pagination.goto_page(target));
                                        run_search(state, client).await;
                                    }
                                }
                            },
                            "Zurück"
                        }
                        span { "Seite {page} von {total_pages}" }
                        button {
                            style: BUTTON_SECONDARY_STYLE,
                            disabled: loading || page >= total_pages,
                            onclick: {
                                let client = client.clone();
                                move |_| {
                                    let client = client.clone();
                                    async move {
                                        let target = state.read().pagination.page + 1;
                                        state.with_mut(|s| s.pagination.goto_page(target));
                                        run_search(state, client).await;
                                    }
                                }
                            },
                            "Weiter"
                        }
                    }
                }
            }
        } else if total == Some(0) {
            div { style: CARD_STYLE, "Keine Bücher gefunden." }
        }
    }
}
