use crate::error::LoginError;

/// The two accepted credential pairs. Hard-coded on purpose: this gate is a
/// placeholder until the backend issues real tokens, not a security boundary.
const ALLOWED_LOGINS: &[(&str, &str)] = &[("admin", "p"), ("user", "p")];

/// Check a submitted credential pair against the allowed set.
///
/// Empty fields are rejected before the pair is compared, with their own
/// message. No network call, no session, no credential storage.
pub fn check_login(username: &str, password: &str) -> Result<(), LoginError> {
    if username.is_empty() || password.is_empty() {
        return Err(LoginError::MissingFields);
    }

    let valid = ALLOWED_LOGINS
        .iter()
        .any(|(user, pass)| *user == username && *pass == password);

    if valid {
        Ok(())
    } else {
        Err(LoginError::InvalidCredentials)
    }
}
