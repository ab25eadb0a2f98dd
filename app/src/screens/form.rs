use dioxus::prelude::*;

pub const CARD_STYLE: &str =
    "background: white; border-radius: 8px; box-shadow: 0 4px 6px rgba(0,0,0,0.1); padding: 2rem; margin-bottom: 1.5rem;";

pub const ERROR_BOX_STYLE: &str =
    "background: #fee; border: 1px solid #fcc; color: #c33; padding: 0.75rem 1rem; border-radius: 4px; margin-bottom: 1rem;";

pub const BUTTON_STYLE: &str =
    "background: #2563eb; color: white; padding: 0.5rem 1.25rem; border: none; border-radius: 0.375rem; cursor: pointer; font-weight: 500;";

pub const BUTTON_SECONDARY_STYLE: &str =
    "background: #f3f4f6; color: #374151; padding: 0.5rem 1.25rem; border: none; border-radius: 0.375rem; cursor: pointer; font-weight: 500;";

const LABEL_STYLE: &str =
    "display: block; font-size: 0.875rem; font-weight: 500; color: #374151; margin-bottom: 0.5rem;";

const INPUT_STYLE: &str =
    "width: 100%; padding: 0.5rem 0.75rem; border: 1px solid #d1d5db; border-radius: 0.375rem; outline: none;";

#[component]
pub fn TextInput(
    label: &'static str,
    value: String,
    #[props(default = "text")] input_type: &'static str,
    oninput: EventHandler<String>,
) -> Element {
    rsx! {
        div {
            label { style: LABEL_STYLE, {label} }
            input {
                style: INPUT_STYLE,
                r#type: input_type,
                value: "{value}",
                oninput: move |e| oninput.call(e.value()),
            }
        }
    }
}

// Number fields hand the raw string to the caller: the screens own the
// empty-means-unset and parse-failure rules, not the widget.
#[component]
pub fn NumberInput(
    label: &'static str,
    value: String,
    #[props(default = "any")] step: &'static str,
    oninput: EventHandler<String>,
) -> Element {
    rsx! {
        div {
            label { style: LABEL_STYLE, {label} }
            input {
                style: INPUT_STYLE,
                r#type: "number",
                step: step,
                value: "{value}",
                oninput: move |e| oninput.call(e.value()),
            }
        }
    }
}

#[component]
pub fn CheckboxInput(
    label: &'static str,
    checked: bool,
    onchange: EventHandler<bool>,
) -> Element {
    rsx! {
        label {
            style: "display: flex; align-items: center; cursor: pointer; gap: 0.5rem;",
            input {
                r#type: "checkbox",
                checked: checked,
                onchange: move |e| onchange.call(e.checked()),
            }
            span { style: "font-size: 0.875rem; color: #374151;", {label} }
        }
    }
}

/// Select over the three book formats plus one empty entry whose label the
/// caller chooses ("Alle" on the search screen, "Bitte wählen" on create).
#[component]
pub fn ArtSelect(
    label: &'static str,
    value: String,
    empty_label: &'static str,
    onchange: EventHandler<String>,
) -> Element {
    const ARTEN: &[&str] = &["EPUB", "HARDCOVER", "PAPERBACK"];

    rsx! {
        div {
            label { style: LABEL_STYLE, {label} }
            select {
                style: INPUT_STYLE,
                onchange: move |e| onchange.call(e.value()),
                option { value: "", selected: value.is_empty(), {empty_label} }
                for art in ARTEN {
                    option { value: *art, selected: value == *art, {*art} }
                }
            }
        }
    }
}
