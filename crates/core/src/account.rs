//! Account field constraints and validation.
//!
//! Shared between registration handlers and any future admin tooling so the
//! rules live in exactly one place.

/// Minimum username length in characters.
pub const MIN_USERNAME_LENGTH: usize = 3;

/// Maximum username length in characters.
pub const MAX_USERNAME_LENGTH: usize = 32;

/// Maximum email length in characters.
pub const MAX_EMAIL_LENGTH: usize = 255;

/// Minimum password length in characters.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Default role assigned to newly registered accounts.
pub const ROLE_USER: &str = "user";

/// Validate a username: length bounds plus a restricted character set
/// (ASCII alphanumerics and underscore) so usernames are URL-safe.
pub fn validate_username(username: &str) -> Result<(), String> {
    let len = username.chars().count();
    if len < MIN_USERNAME_LENGTH || len > MAX_USERNAME_LENGTH {
        return Err(format!(
            "Username must be between {MIN_USERNAME_LENGTH} and {MAX_USERNAME_LENGTH} characters"
        ));
    }
    if !username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return Err("Username may only contain letters, digits, and underscores".to_string());
    }
    Ok(())
}

/// Validate an email address.
///
/// Intentionally shallow: one `@` with non-empty local and domain parts and a
/// dot in the domain. Real deliverability is the mail system's problem.
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.chars().count() > MAX_EMAIL_LENGTH {
        return Err(format!(
            "Email must be at most {MAX_EMAIL_LENGTH} characters"
        ));
    }
    let Some((local, domain)) = email.split_once('@') else {
        return Err("Email must contain an @".to_string());
    };
    if local.is_empty() || domain.is_empty() || !domain.contains('.') || domain.contains('@') {
        return Err("Email address is not well-formed".to_string());
    }
    Ok(())
}
