use buch_client::auth::check_login;
use buch_client::error::LoginError;

#[test]
fn test_allowed_pairs_succeed() {
    assert_eq!(check_login("admin", "p"), Ok(()));
    assert_eq!(check_login("user", "p"), Ok(()));
}

#[test]
fn test_unknown_pairs_fail_with_generic_message() {
    for (username, password) in [
        ("admin", "wrong"),
        ("user", ""),
        ("root", "p"),
        ("Admin", "p"),
        ("admin", "P"),
    ] {
        if username.is_empty() || password.is_empty() {
            continue;
        }
        assert_eq!(
            check_login(username, password),
            Err(LoginError::InvalidCredentials),
            "{username}/{password} must be rejected"
        );
    }

    assert_eq!(
        LoginError::InvalidCredentials.to_string(),
        "Anmeldung fehlgeschlagen"
    );
}

#[test]
fn test_empty_fields_rejected_before_the_pair_check() {
    assert_eq!(check_login("", ""), Err(LoginError::MissingFields));
    assert_eq!(check_login("admin", ""), Err(LoginError::MissingFields));
    assert_eq!(check_login("", "p"), Err(LoginError::MissingFields));

    // distinct message from the credential failure
    assert_eq!(
        LoginError::MissingFields.to_string(),
        "Bitte füllen Sie alle Felder aus!"
    );
}
