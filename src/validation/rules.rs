/*!
 * Email and phone patterns.
 *
 * Both checks only look at the start of the value: anything after a matching
 * prefix is accepted.
 */

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^@]+@[^@]+\.[^@]+").expect("Invalid email regex")
});

static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{9}").expect("Invalid phone regex")
});

/// Non-@ characters, `@`, non-@ characters, `.`, then at least one more character
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// At least nine consecutive digits at the start
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_REGEX.is_match(phone)
}
