use buch_client::api::CatalogClient;
use buch_client::config::BuchClientConfig;
use dioxus::prelude::*;

mod screens;

use screens::{BookCreate, Login, Search};

/// Client-side navigation targets, the only protocol between the screens.
#[derive(Debug, Clone, Routable, PartialEq)]
enum Route {
    #[redirect("/", || Route::Login {})]
    #[route("/login")]
    Login {},
    #[route("/search")]
    Search {},
    #[route("/create")]
    BookCreate {},
}

/// Shared per-process context: the HTTP client and the fixed page size.
/// Each screen re-derives everything else it needs.
#[derive(Clone)]
pub struct AppContext {
    pub client: CatalogClient,
    pub page_size: u32,
}

fn init_context() -> AppContext {
    let config = BuchClientConfig::load().unwrap_or_else(|err| {
        log::warn!("Konfiguration nicht ladbar, Standardwerte werden verwendet: {err}");
        BuchClientConfig::default()
    });
    let client = CatalogClient::from_config(&config).unwrap_or_else(|err| {
        log::warn!("HTTP-Client aus Konfiguration fehlgeschlagen: {err}");
        CatalogClient::new(
            config.backend.base_url.clone(),
            config.backend.rest_path.clone(),
        )
    });
    AppContext {
        client,
        page_size: config.search.page_size,
    }
}

fn main() {
    env_logger::init();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(init_context);

    rsx! {
        div {
            style: "min-height: 100vh; background: #f5f5f5; padding: 20px; font-family: Arial, sans-serif;",
            div {
                style: "max-width: 1100px; margin: 0 auto;",
                h1 {
                    style: "font-size: 2.5rem; font-weight: bold; text-align: center; margin-bottom: 2rem; color: #333;",
                    "Buch Browser"
                }
                Router::<Route> {}
            }
        }
    }
}
