use crate::{id::Id, password::Password, time::Timestamp};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id          : Id,
    pub username    : String,
    pub password    : Password,
    pub first_name  : String,
    pub last_name   : String,
    pub email       : Option<String>,
    pub avatar      : Option<String>,
    pub date_joined : Timestamp,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username    : String,
    pub password    : Password,
    pub first_name  : String,
    pub last_name   : String,
    pub email       : Option<String>,
    pub avatar      : Option<String>,
    pub date_joined : Timestamp,
}
