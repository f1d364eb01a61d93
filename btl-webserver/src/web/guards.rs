use anyhow::Result as Fallible;
use btl_core::{entities::User, repositories::UserRepo};
use btl_db_sqlite::{Connections as ConnectionPool, DbReadOnly, DbReadWrite};
use rocket::{
    outcome::try_outcome,
    request::{FromRequest, Outcome, Request},
    State,
};

use super::{api::ApiError, jwt};

pub const COOKIE_USER_KEY: &str = "btl-user";

/// The database pool as request guard.
#[derive(Clone)]
pub struct Db(ConnectionPool);

impl Db {
    pub fn shared(&self) -> Fallible<DbReadOnly<'_>> {
        self.0.shared()
    }

    pub fn exclusive(&self) -> Fallible<DbReadWrite<'_>> {
        self.0.exclusive()
    }
}

impl From<ConnectionPool> for Db {
    fn from(pool: ConnectionPool) -> Self {
        Self(pool)
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Db {
    type Error = ();

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let db = try_outcome!(request.guard::<&State<Db>>().await);
        Outcome::Success(db.inner().clone())
    }
}

fn get_bearer_token(auth_header_val: &str) -> Option<&str> {
    auth_header_val
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// The credentials presented with a request.
///
/// The guard never fails, the caller is resolved by the handlers
/// with [`Auth::user`] on the connection they already hold.
#[derive(Debug)]
pub struct Auth {
    bearer_tokens: Vec<String>,
    username: Option<String>,
}

impl Auth {
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn bearer_tokens(&self) -> &[String] {
        &self.bearer_tokens
    }

    /// Loads the account of the caller, if any.
    pub fn user<R: UserRepo>(&self, repo: &R) -> Result<Option<User>, ApiError> {
        let Some(username) = self.username() else {
            return Ok(None);
        };
        let user = repo.try_get_user_by_username(username)?;
        if user.is_none() {
            debug!("Unknown user {username} in session");
        }
        Ok(user)
    }

    fn bearer_tokens_from_header(request: &Request) -> Vec<String> {
        request
            .headers()
            .get("Authorization")
            .filter_map(get_bearer_token)
            .map(ToOwned::to_owned)
            .collect()
    }

    fn username_from_cookie(request: &Request) -> Option<String> {
        request
            .cookies()
            .get_private(COOKIE_USER_KEY)
            .map(|cookie| cookie.value().to_owned())
    }

    async fn username_from_jwt_in_header(
        request: &Request<'_>,
        bearer_tokens: &[String],
    ) -> Option<String> {
        let jwt_state = request.guard::<&State<jwt::JwtState>>().await.succeeded()?;
        bearer_tokens
            .iter()
            .find_map(|token| jwt_state.validate_token_and_get_username(token).ok())
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Auth {
    type Error = ();

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let bearer_tokens = Self::bearer_tokens_from_header(request);
        let mut username = None;
        if cfg!(feature = "cookies") {
            username = Self::username_from_cookie(request);
        }
        if username.is_none() {
            username = Self::username_from_jwt_in_header(request, &bearer_tokens).await;
        }
        Outcome::Success(Self {
            bearer_tokens,
            username,
        })
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Version(pub &'static str);
