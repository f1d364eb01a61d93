use crate::{id::Id, time::Timestamp};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub id          : Id,
    pub house_id    : Id,
    pub name        : String,
    pub description : Option<String>,
    pub created_at  : Timestamp,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRoom {
    pub house_id    : Id,
    pub name        : String,
    pub description : Option<String>,
    pub created_at  : Timestamp,
}
