use thiserror::Error;

/// Failures talking to the catalog service.
///
/// A 404 on the search endpoint is its own variant because the service
/// answers "no matching books" that way; callers translate it into an empty
/// result page instead of an error message.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("no matching books")]
    NotFound,
    #[error("unexpected status {0}")]
    Status(reqwest::StatusCode),
}

/// Outcome of the placeholder login gate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LoginError {
    #[error("Bitte füllen Sie alle Felder aus!")]
    MissingFields,
    #[error("Anmeldung fehlgeschlagen")]
    InvalidCredentials,
}

/// Field-level validation failures for the creation form, one variant per
/// rule. Validation checks the rules in order and reports only the first
/// failure, so a form with several problems surfaces one message at a time.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Bitte einen Titel angeben.")]
    TitelMissing,
    #[error("Bitte eine Buchart auswählen.")]
    ArtMissing,
    #[error("Ungültige ISBN. Erwartet wird z. B. 978-3-86490-357-1.")]
    InvalidIsbn,
    #[error("Der Preis darf nicht negativ sein.")]
    NegativerPreis,
    #[error("Die Bewertung muss zwischen 0 und 5 liegen.")]
    RatingOutOfRange,
    #[error("Ungültiges Datum. Erwartet wird JJJJ-MM-TT.")]
    InvalidDatum,
}
