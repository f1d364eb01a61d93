use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Category {
    pub id: i64,
    pub name: String,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct House {
    pub id          : i64,
    pub category    : Option<i64>,
    pub name        : String,
    pub address     : String,
    pub description : Option<String>,
    pub created_at  : String,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Room {
    pub id          : i64,
    pub house       : i64,
    pub name        : String,
    pub description : Option<String>,
    pub created_at  : String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Number {
    pub id: i64,
    pub value: String,
}

/// A user account as seen by clients.
///
/// The password hash is never part of it.
#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct User {
    pub id          : i64,
    pub username    : String,
    pub first_name  : String,
    pub last_name   : String,
    pub email       : Option<String>,
    pub avatar      : Option<String>,
    pub date_joined : String,
}

/// Registration of a new user without an avatar.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct NewUser {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: Option<String>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Comment {
    pub id         : i64,
    pub room       : i64,
    pub user       : User,
    pub content    : String,
    pub created_at : String,
    pub updated_at : Option<String>,
}

/// Body of comment requests.
#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct CommentContent {
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct RoomDetail {
    #[serde(flatten)]
    pub room: Room,
    pub numbers: Vec<Number>,
    pub comments: Vec<Comment>,
    pub likes: u64,
    pub liked: bool,
}

/// One page of a paginated list.
///
/// `next` and `previous` are page numbers.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Page<T> {
    pub count: u64,
    pub next: Option<u64>,
    pub previous: Option<u64>,
    pub results: Vec<T>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct JwtToken {
    pub token: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, thiserror::Error))]
#[cfg_attr(feature = "extra-derive", error("{http_status}: {message}"))]
pub struct Error {
    /// HTTP status code
    pub http_status: u16,
    pub message: String,
}
