use std::fmt;

use serde::{Deserialize, Serialize};

/// Book format as the service spells it in query parameters and payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BuchArt {
    Epub,
    Hardcover,
    Paperback,
}

impl BuchArt {
    /// Parse the wire spelling, case-insensitively. `None` for anything else,
    /// including the empty "no selection" value of the select element.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_uppercase().as_str() {
            "EPUB" => Some(Self::Epub),
            "HARDCOVER" => Some(Self::Hardcover),
            "PAPERBACK" => Some(Self::Paperback),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Epub => "EPUB",
            Self::Hardcover => "HARDCOVER",
            Self::Paperback => "PAPERBACK",
        }
    }
}

impl fmt::Display for BuchArt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The filter form of the search screen. `Default` is the empty form: all
/// strings blank, all flags off, no numeric bounds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchFilter {
    pub titel: String,
    pub isbn: String,
    pub art: Option<BuchArt>,
    pub rating: Option<u32>,
    pub preis: Option<f64>,
    pub rabatt: Option<f64>,
    pub datum: String,
    pub homepage: String,
    pub javascript: bool,
    pub typescript: bool,
    pub lieferbar: bool,
}

impl SearchFilter {
    /// Build the outgoing query parameters for one result page.
    ///
    /// String fields are trimmed and omitted when empty, numeric fields are
    /// omitted when unset or NaN, and boolean filters appear only when true.
    /// The UI counts pages from 1 while the service counts from 0, so the
    /// page parameter is shifted down here; the page size is sent as-is.
    pub fn build_params(&self, page: u32, page_size: u32) -> Vec<(String, String)> {
        let mut params = Vec::new();

        push_trimmed(&mut params, "isbn", &self.isbn);
        push_trimmed(&mut params, "titel", &self.titel);
        push_trimmed(&mut params, "homepage", &self.homepage);

        if let Some(art) = self.art {
            params.push(("art".to_string(), art.as_str().to_string()));
        }
        if self.lieferbar {
            params.push(("lieferbar".to_string(), "true".to_string()));
        }
        if self.javascript {
            params.push(("javascript".to_string(), "true".to_string()));
        }
        if self.typescript {
            params.push(("typescript".to_string(), "true".to_string()));
        }

        if let Some(rating) = self.rating {
            params.push(("rating".to_string(), rating.to_string()));
        }
        push_f64(&mut params, "preis", self.preis);
        push_f64(&mut params, "rabatt", self.rabatt);
        push_trimmed(&mut params, "datum", &self.datum);

        params.push(("page".to_string(), page.saturating_sub(1).to_string()));
        params.push(("size".to_string(), page_size.to_string()));
        params
    }
}

fn push_trimmed(params: &mut Vec<(String, String)>, key: &str, value: &str) {
    let trimmed = value.trim();
    if !trimmed.is_empty() {
        params.push((key.to_string(), trimmed.to_string()));
    }
}

fn push_f64(params: &mut Vec<(String, String)>, key: &str, value: Option<f64>) {
    if let Some(value) = value {
        if !value.is_nan() {
            params.push((key.to_string(), value.to_string()));
        }
    }
}
