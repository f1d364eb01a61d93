use crate::{authorization, repositories};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid username")]
    Username,
    #[error("The user already exists")]
    UserExists,
    #[error("Invalid password")]
    Password,
    #[error("Invalid email address")]
    Email,
    #[error("Invalid name")]
    Name,
    #[error("Invalid address")]
    Address,
    #[error("Missing content")]
    MissingContent,
    #[error("Invalid page")]
    InvalidPage,
    #[error("Invalid credentials")]
    Credentials,
    #[error("This is not allowed")]
    Forbidden,
    #[error("This is not allowed without auth")]
    Unauthorized,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<btl_entities::password::ParseError> for Error {
    fn from(_: btl_entities::password::ParseError) -> Self {
        Self::Password
    }
}

impl From<authorization::Error> for Error {
    fn from(err: authorization::Error) -> Self {
        match err {
            authorization::Error::NotAuthenticated => Self::Unauthorized,
            authorization::Error::NotOwner => Self::Forbidden,
        }
    }
}
