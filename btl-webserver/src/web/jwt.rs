use std::{collections::HashSet, time::Duration};

use anyhow::{anyhow, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use parking_lot::{Mutex, MutexGuard};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// The username
    sub: String,
    /// Expiry time as Unix timestamp
    exp: u64,
}

struct Key {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl Key {
    fn random() -> Self {
        let secret = STANDARD.encode(rand::random::<[u8; 32]>());
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }
}

/// Issues session tokens and remembers the ones that were logged out.
pub struct JwtState {
    key: Key,
    valid_for: Duration,
    blacklist: Mutex<HashSet<String>>,
}

impl JwtState {
    pub fn new(valid_for: Duration) -> Self {
        Self {
            key: Key::random(),
            valid_for,
            blacklist: Mutex::new(HashSet::new()),
        }
    }

    pub fn generate_token(&self, username: &str) -> Result<String> {
        let now = u64::try_from(OffsetDateTime::now_utc().unix_timestamp())?;
        let claims = Claims {
            sub: username.to_string(),
            exp: now + self.valid_for.as_secs(),
        };
        Ok(encode(&Header::default(), &claims, &self.key.encoding)?)
    }

    pub fn validate_token_and_get_username(&self, token: &str) -> Result<String> {
        if self.is_on_blacklist(token) {
            return Err(anyhow!("Token is no longer valid"));
        }
        Ok(self.decode(token)?.sub)
    }

    pub fn blacklist_token(&self, token: String) {
        self.remove_invalid_tokens();
        self.lock().insert(token);
    }

    fn decode(&self, token: &str) -> Result<Claims> {
        let data = decode::<Claims>(token, &self.key.decoding, &Validation::default())?;
        Ok(data.claims)
    }

    fn is_on_blacklist(&self, token: &str) -> bool {
        self.lock().contains(token)
    }

    // Expired tokens are rejected anyway
    fn remove_invalid_tokens(&self) {
        let mut blacklist = self.lock();
        blacklist.retain(|token| self.decode(token).is_ok());
    }

    fn lock(&self) -> MutexGuard<HashSet<String>> {
        self.blacklist.lock()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> JwtState {
        JwtState::new(Duration::from_secs(3600))
    }

    #[test]
    fn validate_and_blacklist() {
        let jwt_state = state();
        let token = jwt_state.generate_token("alice").unwrap();
        assert_eq!(
            "alice",
            jwt_state.validate_token_and_get_username(&token).unwrap()
        );
        jwt_state.blacklist_token(token.clone());
        assert!(jwt_state.is_on_blacklist(&token));
        assert!(jwt_state.validate_token_and_get_username(&token).is_err());
    }

    #[test]
    fn tokens_of_other_instances_are_rejected() {
        let token = state().generate_token("alice").unwrap();
        assert!(state().validate_token_and_get_username(&token).is_err());
    }

    #[test]
    fn invalid_tokens_are_removed() {
        let jwt_state = state();
        let token = jwt_state.generate_token("alice").unwrap();
        let invalid_token = "dubidubidu".to_string();
        jwt_state.blacklist_token(token.clone());
        jwt_state.blacklist_token(invalid_token.clone());
        assert!(jwt_state.is_on_blacklist(&invalid_token));
        jwt_state.remove_invalid_tokens();
        assert!(jwt_state.is_on_blacklist(&token));
        assert!(!jwt_state.is_on_blacklist(&invalid_token));
    }
}
