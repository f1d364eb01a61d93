pub use fast_chemail::is_valid_email;

pub const MAX_USERNAME_LEN: usize = 150;

/// Letters, digits and `@.+-_` with at most 150 characters.
pub fn is_valid_username(s: &str) -> bool {
    let len = s.chars().count();
    len > 0
        && len <= MAX_USERNAME_LEN
        && s
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '@' | '.' | '+' | '-' | '_'))
}

pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}
