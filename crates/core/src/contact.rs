//! Contact-form validation rules.
//!
//! The contact form is the only surface that accepts unauthenticated
//! input, so it is the only entity with field validation. Checks run in
//! a fixed order and stop at the first failure; each failure carries its
//! own user-facing message.

use std::sync::LazyLock;

use regex::Regex;

/// Minimum message length in characters.
pub const MESSAGE_MIN_CHARS: usize = 10;

/// Maximum message length in characters.
pub const MESSAGE_MAX_CHARS: usize = 5000;

/// `local@domain.tld`: no whitespace or extra `@`, at least one dot
/// after the `@`.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex"));

/// A rejected contact submission. `Display` is the localized message
/// shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ContactValidationError {
    #[error("이메일과 메시지는 필수 항목입니다.")]
    MissingRequired,

    #[error("올바른 이메일 주소를 입력해주세요.")]
    InvalidEmail,

    #[error("메시지는 최소 10자 이상 입력해주세요.")]
    MessageTooShort,

    #[error("메시지는 최대 5000자까지 입력 가능합니다.")]
    MessageTooLong,
}

/// Validate a contact submission's `email` and `message`.
///
/// Order matters: required fields, then email format, then message
/// length. Lengths count characters, not bytes, so Korean text is
/// measured the way the user sees it.
pub fn validate_contact(email: &str, message: &str) -> Result<(), ContactValidationError> {
    if email.is_empty() || message.is_empty() {
        return Err(ContactValidationError::MissingRequired);
    }

    if !EMAIL_RE.is_match(email) {
        return Err(ContactValidationError::InvalidEmail);
    }

    let chars = message.chars().count();
    if chars < MESSAGE_MIN_CHARS {
        return Err(ContactValidationError::MessageTooShort);
    }
    if chars > MESSAGE_MAX_CHARS {
        return Err(ContactValidationError::MessageTooLong);
    }

    Ok(())
}
