use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

pub static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

/// Corporate mail domain every employee address must end with.
pub const ORG_EMAIL_DOMAIN: &str = "nexacorp.com";

/// Upload hard limit: 5 MiB.
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

pub const ALLOWED_IMAGE_TYPES: [&str; 2] = ["image/jpeg", "image/png"];

pub static EMPLOYEE_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{3}[0-9]{4}$").unwrap());

pub static EMPLOYEE_EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"^[a-zA-Z][a-zA-Z0-9._-]*[a-zA-Z0-9]@{}$",
        regex::escape(ORG_EMAIL_DOMAIN)
    ))
    .unwrap()
});

pub static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{10}$").unwrap());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn employee_id_pattern_accepts_three_letters_four_digits() {
        assert!(EMPLOYEE_ID_RE.is_match("ABC1234"));
        assert!(!EMPLOYEE_ID_RE.is_match("AB12345"));
        assert!(!EMPLOYEE_ID_RE.is_match("abc1234"));
        assert!(!EMPLOYEE_ID_RE.is_match("ABCD123"));
        assert!(!EMPLOYEE_ID_RE.is_match(" ABC1234"));
    }

    #[test]
    fn email_pattern_requires_corporate_domain() {
        assert!(EMPLOYEE_EMAIL_RE.is_match("jane.doe@nexacorp.com"));
        assert!(EMPLOYEE_EMAIL_RE.is_match("jd@nexacorp.com"));
        assert!(!EMPLOYEE_EMAIL_RE.is_match("x@other.com"));
        assert!(!EMPLOYEE_EMAIL_RE.is_match("9jane@nexacorp.com"));
        assert!(!EMPLOYEE_EMAIL_RE.is_match("jane.@nexacorp.com"));
    }

    #[test]
    fn phone_pattern_requires_exactly_ten_digits() {
        assert!(PHONE_RE.is_match("9876543210"));
        assert!(!PHONE_RE.is_match("987654321"));
        assert!(!PHONE_RE.is_match("98765432100"));
        assert!(!PHONE_RE.is_match("98765 4321"));
    }
}
