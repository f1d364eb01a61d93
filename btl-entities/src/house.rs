use crate::{id::Id, time::Timestamp};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct House {
    pub id          : Id,
    pub category_id : Option<Id>,
    pub name        : String,
    pub address     : String,
    pub description : Option<String>,
    pub created_at  : Timestamp,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewHouse {
    pub category_id : Option<Id>,
    pub name        : String,
    pub address     : String,
    pub description : Option<String>,
    pub created_at  : Timestamp,
}
