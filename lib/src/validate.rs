use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::error::ValidationError;
use crate::models::{BuchInput, BuchTitel};
use crate::query::BuchArt;

/// The creation form as the user edits it. Lives only as long as the
/// creation screen; never persisted client-side.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookForm {
    pub titel: String,
    pub untertitel: String,
    pub autor: String,
    pub isbn: String,
    pub preis: f64,
    pub rabatt: f64,
    pub art: String,
    pub rating: i32,
    pub homepage: String,
    pub datum: String,
    pub javascript: bool,
    pub typescript: bool,
    pub lieferbar: bool,
}

fn isbn_pattern() -> &'static Regex {
    // ISBN-13 with hyphenated groups, 978/979 prefix
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(978|979)-\d{1,5}-\d{1,7}-\d{1,6}-\d$").expect("static ISBN pattern")
    })
}

fn datum_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("static date pattern"))
}

/// Check the form rules in order and report the first failure. A failing
/// form never reaches the network.
pub fn validate(form: &BookForm) -> Result<(), ValidationError> {
    if form.titel.trim().is_empty() {
        return Err(ValidationError::TitelMissing);
    }
    if BuchArt::parse(&form.art).is_none() {
        return Err(ValidationError::ArtMissing);
    }
    if !isbn_pattern().is_match(form.isbn.trim()) {
        return Err(ValidationError::InvalidIsbn);
    }
    if form.preis < 0.0 {
        return Err(ValidationError::NegativerPreis);
    }
    if !(0..=5).contains(&form.rating) {
        return Err(ValidationError::RatingOutOfRange);
    }
    let datum = form.datum.trim();
    if !datum_pattern().is_match(datum) || NaiveDate::parse_from_str(datum, "%Y-%m-%d").is_err() {
        return Err(ValidationError::InvalidDatum);
    }
    Ok(())
}

/// Split the comma-separated author field into the keyword list, trimming
/// each entry and discarding empty ones.
pub fn split_keywords(autor: &str) -> Vec<String> {
    autor
        .split(',')
        .map(str::trim)
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}

impl BookForm {
    /// Validate and convert into the nested create payload.
    pub fn to_input(&self) -> Result<BuchInput, ValidationError> {
        validate(self)?;

        let untertitel = match self.untertitel.trim() {
            "" => None,
            trimmed => Some(trimmed.to_string()),
        };
        let homepage = match self.homepage.trim() {
            "" => None,
            trimmed => Some(trimmed.to_string()),
        };
        let art = BuchArt::parse(&self.art).ok_or(ValidationError::ArtMissing)?;

        Ok(BuchInput {
            isbn: self.isbn.trim().to_string(),
            titel: BuchTitel {
                titel: self.titel.trim().to_string(),
                untertitel,
            },
            schlagwoerter: split_keywords(&self.autor),
            art,
            rating: self.rating as u32,
            preis: self.preis,
            rabatt: self.rabatt,
            lieferbar: self.lieferbar,
            datum: self.datum.trim().to_string(),
            homepage,
        })
    }
}
