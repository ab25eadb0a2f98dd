use buch_client::error::ValidationError;
use buch_client::query::BuchArt;
use buch_client::validate::{split_keywords, validate, BookForm};

fn valid_form() -> BookForm {
    BookForm {
        titel: "Clean Code".to_string(),
        untertitel: String::new(),
        autor: "Robert Martin".to_string(),
        isbn: "978-3-86490-357-1".to_string(),
        preis: 29.95,
        rabatt: 0.1,
        art: "PAPERBACK".to_string(),
        rating: 4,
        homepage: String::new(),
        datum: "2024-02-28".to_string(),
        javascript: false,
        typescript: true,
        lieferbar: true,
    }
}

#[test]
fn test_valid_form_passes() {
    assert_eq!(validate(&valid_form()), Ok(()));
}

#[test]
fn test_first_failing_rule_wins() {
    // titel and ISBN both invalid: the titel rule comes first
    let form = BookForm {
        titel: "   ".to_string(),
        isbn: "nonsense".to_string(),
        ..valid_form()
    };
    assert_eq!(validate(&form), Err(ValidationError::TitelMissing));
}

#[test]
fn test_missing_art_rejected() {
    let form = BookForm {
        art: String::new(),
        ..valid_form()
    };
    assert_eq!(validate(&form), Err(ValidationError::ArtMissing));
}

#[test]
fn test_isbn_rule() {
    let mut form = valid_form();
    form.isbn = "978-3-86490-357-1".to_string();
    assert_eq!(validate(&form), Ok(()));

    form.isbn = "123-3-86490-357-1".to_string();
    assert_eq!(validate(&form), Err(ValidationError::InvalidIsbn));

    form.isbn = "979-8-12345-678-9".to_string();
    assert_eq!(validate(&form), Ok(()));

    form.isbn = "9783864903571".to_string();
    assert_eq!(validate(&form), Err(ValidationError::InvalidIsbn));
}

#[test]
fn test_negative_price_rejected() {
    let form = BookForm {
        preis: -0.01,
        ..valid_form()
    };
    assert_eq!(validate(&form), Err(ValidationError::NegativerPreis));
}

#[test]
fn test_rating_bounds() {
    let mut form = valid_form();
    form.rating = 0;
    assert_eq!(validate(&form), Ok(()));
    form.rating = 5;
    assert_eq!(validate(&form), Ok(()));
    form.rating = 6;
    assert_eq!(validate(&form), Err(ValidationError::RatingOutOfRange));
    form.rating = -1;
    assert_eq!(validate(&form), Err(ValidationError::RatingOutOfRange));
}

#[test]
fn test_datum_rule() {
    let mut form = valid_form();
    form.datum = "2024-13-01".to_string();
    assert_eq!(validate(&form), Err(ValidationError::InvalidDatum));

    form.datum = "28.02.2024".to_string();
    assert_eq!(validate(&form), Err(ValidationError::InvalidDatum));

    form.datum = String::new();
    assert_eq!(validate(&form), Err(ValidationError::InvalidDatum));

    form.datum = "2024-02-29".to_string();
    assert_eq!(validate(&form), Ok(()));
}

#[test]
fn test_keyword_split_trims_and_drops_empty_entries() {
    assert_eq!(split_keywords("Ada, Grace"), vec!["Ada", "Grace"]);
    assert_eq!(split_keywords("Ada,, Grace ,"), vec!["Ada", "Grace"]);
    assert_eq!(split_keywords(""), Vec::<String>::new());
    assert_eq!(split_keywords("  ,  "), Vec::<String>::new());
}

#[test]
fn test_to_input_builds_the_nested_payload() {
    let form = BookForm {
        untertitel: "  Handbuch  ".to_string(),
        autor: "Ada, Grace".to_string(),
        homepage: "https://example.org".to_string(),
        ..valid_form()
    };

    let input = form.to_input().expect("valid form");
    assert_eq!(input.titel.titel, "Clean Code");
    assert_eq!(input.titel.untertitel.as_deref(), Some("Handbuch"));
    assert_eq!(input.schlagwoerter, vec!["Ada", "Grace"]);
    assert_eq!(input.art, BuchArt::Paperback);
    assert_eq!(input.rating, 4);
    assert_eq!(input.homepage.as_deref(), Some("https://example.org"));
}

#[test]
fn test_to_input_refuses_an_invalid_form() {
    let form = BookForm {
        isbn: "123-3-86490-357-1".to_string(),
        ..valid_form()
    };
    assert_eq!(form.to_input(), Err(ValidationError::InvalidIsbn));
}

#[test]
fn test_payload_serialization_shape() {
    let form = BookForm {
        autor: "Ada".to_string(),
        ..valid_form()
    };
    let input = form.to_input().expect("valid form");
    let json = serde_json::to_value(&input).expect("serializable");

    assert_eq!(json["titel"]["titel"], "Clean Code");
    assert_eq!(json["titel"].get("untertitel"), None);
    assert_eq!(json["schlagwoerter"][0], "Ada");
    assert_eq!(json["art"], "PAPERBACK");
    assert_eq!(json["isbn"], "978-3-86490-357-1");
    assert_eq!(json.get("homepage"), None);
}
