use std::str::FromStr;

use pwhash::bcrypt;
use thiserror::Error;

pub const MIN_PASSWORD_LEN: usize = 6;

/// A hashed password.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    /// Wraps an already hashed password, e.g. loaded from the store.
    pub const fn from_hash(hash: String) -> Self {
        Self(hash)
    }

    pub fn verify(&self, plain: &str) -> bool {
        bcrypt::verify(plain, &self.0)
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Password> for String {
    fn from(from: Password) -> Self {
        from.0
    }
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Password(***)")
    }
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("The password is too short")]
    TooShort,
    #[error("Unable to hash the password")]
    Hash,
}

impl FromStr for Password {
    type Err = ParseError;
    fn from_str(plain: &str) -> Result<Self, Self::Err> {
        if plain.chars().count() < MIN_PASSWORD_LEN {
            return Err(ParseError::TooShort);
        }
        let hash = bcrypt::hash(plain).map_err(|_| ParseError::Hash)?;
        Ok(Self(hash))
    }
}
