//! Input validation predicates.

use std::sync::LazyLock;

use regex::Regex;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Minimum password length accepted by [`is_strong_password`].
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Checks the loose `local@domain.tld` shape.
///
/// Each of the three parts must be non-empty and free of whitespace and `@`.
///
/// # Examples
///
/// ```
/// use app_utils::utils::validation::is_valid_email;
///
/// assert!(is_valid_email("example@example.com"));
/// assert!(!is_valid_email("example"));
/// ```
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// True if the string has any non-whitespace content.
pub fn is_not_empty(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Password strength check.
///
/// Requires at least [`MIN_PASSWORD_LENGTH`] characters, only ASCII letters
/// and digits, and at least one digit, one lowercase and one uppercase letter.
///
/// # Examples
///
/// ```
/// use app_utils::utils::validation::is_strong_password;
///
/// assert!(is_strong_password("Password123"));
/// assert!(!is_strong_password("password"));
/// ```
pub fn is_strong_password(password: &str) -> bool {
    password.len() >= MIN_PASSWORD_LENGTH
        && password.chars().all(|c| c.is_ascii_alphanumeric())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
}
