use serde::{Deserialize, Serialize};

use crate::query::BuchArt;

/// Nested title group as the service stores it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BuchTitel {
    pub titel: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub untertitel: Option<String>,
}

/// A book record as the search endpoint returns it. The service owns this
/// shape; the client only reads it.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Buch {
    pub id: u64,
    pub isbn: String,
    pub titel: BuchTitel,
    #[serde(default)]
    pub schlagwoerter: Option<Vec<String>>,
}

/// One page of search results.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct BuchPage {
    pub content: Vec<Buch>,
    #[serde(rename = "totalElements")]
    pub total_elements: u64,
}

/// Flattened projection of a [`Buch`] for list display. Rebuilt from scratch
/// whenever the result list is replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookListing {
    pub id: String,
    pub titel: String,
    pub autor: Option<String>,
    pub isbn: String,
}

impl From<&Buch> for BookListing {
    fn from(buch: &Buch) -> Self {
        let titel = [
            Some(buch.titel.titel.as_str()),
            buch.titel.untertitel.as_deref(),
        ]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(": ");

        Self {
            id: buch.id.to_string(),
            titel,
            autor: buch.schlagwoerter.as_ref().map(|worte| worte.join(", ")),
            isbn: buch.isbn.clone(),
        }
    }
}

/// Payload for the create endpoint. Built from a validated
/// [`BookForm`](crate::validate::BookForm), never constructed from raw user
/// input directly.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BuchInput {
    pub isbn: String,
    pub titel: BuchTitel,
    pub schlagwoerter: Vec<String>,
    pub art: BuchArt,
    pub rating: u32,
    pub preis: f64,
    pub rabatt: f64,
    pub lieferbar: bool,
    pub datum: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
}
