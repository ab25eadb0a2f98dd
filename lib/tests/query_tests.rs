use buch_client::query::{BuchArt, SearchFilter};

fn param<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

#[test]
fn test_default_filter_sends_only_page_and_size() {
    let params = SearchFilter::default().build_params(1, 10);

    assert_eq!(params.len(), 2);
    assert_eq!(param(&params, "page"), Some("0"));
    assert_eq!(param(&params, "size"), Some("10"));
}

#[test]
fn test_string_fields_are_trimmed_and_blank_ones_omitted() {
    let filter = SearchFilter {
        titel: "  Der Pragmatische Programmierer  ".to_string(),
        isbn: "   ".to_string(),
        homepage: "https://example.org".to_string(),
        ..SearchFilter::default()
    };
    let params = filter.build_params(1, 10);

    assert_eq!(param(&params, "titel"), Some("Der Pragmatische Programmierer"));
    assert_eq!(param(&params, "isbn"), None);
    assert_eq!(param(&params, "homepage"), Some("https://example.org"));
}

#[test]
fn test_boolean_filters_appear_only_when_true() {
    let filter = SearchFilter {
        javascript: true,
        typescript: false,
        lieferbar: true,
        ..SearchFilter::default()
    };
    let params = filter.build_params(1, 10);

    assert_eq!(param(&params, "javascript"), Some("true"));
    assert_eq!(param(&params, "typescript"), None);
    assert_eq!(param(&params, "lieferbar"), Some("true"));
}

#[test]
fn test_numeric_fields_skip_none_and_nan() {
    let filter = SearchFilter {
        rating: Some(4),
        preis: Some(f64::NAN),
        rabatt: None,
        ..SearchFilter::default()
    };
    let params = filter.build_params(1, 10);

    assert_eq!(param(&params, "rating"), Some("4"));
    assert_eq!(param(&params, "preis"), None);
    assert_eq!(param(&params, "rabatt"), None);
}

#[test]
fn test_art_and_datum_included_when_set() {
    let filter = SearchFilter {
        art: Some(BuchArt::Hardcover),
        datum: "2024-05-01".to_string(),
        ..SearchFilter::default()
    };
    let params = filter.build_params(1, 10);

    assert_eq!(param(&params, "art"), Some("HARDCOVER"));
    assert_eq!(param(&params, "datum"), Some("2024-05-01"));
}

#[test]
fn test_outgoing_page_is_zero_indexed_and_size_passes_through() {
    let params = SearchFilter::default().build_params(3, 25);
    assert_eq!(param(&params, "page"), Some("2"));
    assert_eq!(param(&params, "size"), Some("25"));

    // page 0 from a caller that has not clamped yet must not underflow
    let params = SearchFilter::default().build_params(0, 25);
    assert_eq!(param(&params, "page"), Some("0"));
}

#[test]
fn test_buchart_parsing() {
    assert_eq!(BuchArt::parse("EPUB"), Some(BuchArt::Epub));
    assert_eq!(BuchArt::parse("paperback"), Some(BuchArt::Paperback));
    assert_eq!(BuchArt::parse(" hardcover "), Some(BuchArt::Hardcover));
    assert_eq!(BuchArt::parse(""), None);
    assert_eq!(BuchArt::parse("LEINEN"), None);
}
