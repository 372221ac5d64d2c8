use validator::ValidateEmail;

use crate::models::candidate::Candidate;

pub const FIRST_NAME_REQUIRED: &str = "First name is required";
pub const LAST_NAME_REQUIRED: &str = "Last name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Invalid email format";
pub const COMMENT_REQUIRED: &str = "The comment field is required";
pub const PHONE_INVALID: &str = "Invalid phone number format.";
pub const TIME_INVALID: &str = "Invalid time format. Time should be in 24-hour format (HH:mm)";
pub const LINKEDIN_INVALID: &str = "The LinkedIn profile URL is not valid.";
pub const GITHUB_INVALID: &str = "The GitHub profile URL is not valid.";

const PHONE_PREFIX: &str = "+255";
const PHONE_LENGTH: usize = 13;
const LINKEDIN_PREFIXES: [&str; 2] = ["https://linkedin.com/", "https://www.linkedin.com/"];
const GITHUB_PREFIXES: [&str; 2] = ["https://github.com/", "https://www.github.com/"];

/// One field rule: the field it guards, the check, and the message reported
/// when the check fails.
struct Rule {
    field: &'static str,
    check: fn(&Candidate) -> bool,
    message: &'static str,
}

/// Evaluated in order, every one of them, regardless of earlier failures.
const RULES: &[Rule] = &[
    Rule {
        field: "first_name",
        check: |c| is_present(&c.first_name),
        message: FIRST_NAME_REQUIRED,
    },
    Rule {
        field: "last_name",
        check: |c| is_present(&c.last_name),
        message: LAST_NAME_REQUIRED,
    },
    Rule {
        field: "phone_number",
        check: |c| optional(&c.phone_number, is_phone_number),
        message: PHONE_INVALID,
    },
    Rule {
        field: "email",
        check: |c| is_present(&c.email),
        message: EMAIL_REQUIRED,
    },
    Rule {
        field: "email",
        check: |c| !is_present(&c.email) || c.email.validate_email(),
        message: EMAIL_INVALID,
    },
    Rule {
        field: "available_start_time",
        check: |c| optional(&c.available_start_time, is_time_of_day),
        message: TIME_INVALID,
    },
    Rule {
        field: "available_end_time",
        check: |c| optional(&c.available_end_time, is_time_of_day),
        message: TIME_INVALID,
    },
    Rule {
        field: "linkedin_profile_url",
        check: |c| optional(&c.linkedin_profile_url, |s| has_any_prefix(s, &LINKEDIN_PREFIXES)),
        message: LINKEDIN_INVALID,
    },
    Rule {
        field: "github_profile_url",
        check: |c| optional(&c.github_profile_url, |s| has_any_prefix(s, &GITHUB_PREFIXES)),
        message: GITHUB_INVALID,
    },
    Rule {
        field: "comment",
        check: |c| is_present(&c.comment),
        message: COMMENT_REQUIRED,
    },
];

/// Checks `candidate` against every field rule and returns one message per
/// failed rule. An empty list means the candidate may be persisted.
pub fn validate(candidate: &Candidate) -> Vec<String> {
    RULES
        .iter()
        .filter(|rule| !(rule.check)(candidate))
        .map(|rule| {
            tracing::debug!(field = rule.field, "candidate field rule failed");
            rule.message.to_string()
        })
        .collect()
}

/// Whitespace alone does not count as a value.
fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Optional fields only have to match when a non-empty value is supplied.
fn optional(value: &Option<String>, check: fn(&str) -> bool) -> bool {
    match value.as_deref() {
        None | Some("") => true,
        Some(s) => check(s),
    }
}

/// `+255`, then `6` or `7`, then eight digits.
fn is_phone_number(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == PHONE_LENGTH
        && s.starts_with(PHONE_PREFIX)
        && matches!(bytes[4], b'6' | b'7')
        && bytes[5..].iter().all(u8::is_ascii_digit)
}

/// 24-hour `HH:MM`.
fn is_time_of_day(s: &str) -> bool {
    let &[h1, h2, b':', m1, m2] = s.as_bytes() else {
        return false;
    };
    let hour_ok = match h1 {
        b'0' | b'1' => h2.is_ascii_digit(),
        b'2' => matches!(h2, b'0'..=b'3'),
        _ => false,
    };
    hour_ok && matches!(m1, b'0'..=b'5') && m2.is_ascii_digit()
}

/// Profile URLs must start with one of `prefixes` and stay on a single line.
fn has_any_prefix(s: &str, prefixes: &[&str]) -> bool {
    prefixes.iter().any(|prefix| s.starts_with(prefix)) && !s.chars().any(char::is_control)
}
