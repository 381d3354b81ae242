//! String helpers.

use regex::Regex;

/// Removes leading and trailing whitespace.
pub fn trim_string(s: &str) -> String {
    s.trim().to_string()
}

/// Replaces every match of the regular expression `find` with `replace`.
///
/// `find` is a pattern, not a literal: `.` matches any character, and
/// `replace` may refer to capture groups as `$1` or `${name}`.
///
/// # Errors
///
/// Returns the compilation error when `find` is not a valid pattern.
///
/// # Examples
///
/// ```
/// use app_utils::utils::strings::replace_string;
///
/// assert_eq!(replace_string("あいうえお", "あ", "か").unwrap(), "かいうえお");
/// assert_eq!(replace_string("a-b-c", "-", "+").unwrap(), "a+b+c");
/// ```
pub fn replace_string(s: &str, find: &str, replace: &str) -> Result<String, regex::Error> {
    let pattern = Regex::new(find)?;
    Ok(pattern.replace_all(s, replace).into_owned())
}

/// Literal prefix test.
pub fn starts_with(s: &str, prefix: &str) -> bool {
    s.starts_with(prefix)
}

/// Literal suffix test.
pub fn ends_with(s: &str, suffix: &str) -> bool {
    s.ends_with(suffix)
}
