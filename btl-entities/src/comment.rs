use crate::{id::Id, time::Timestamp};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id         : Id,
    pub room_id    : Id,
    pub user_id    : Id,
    pub content    : String,
    pub created_at : Timestamp,
    pub updated_at : Option<Timestamp>,
}

impl Comment {
    pub fn is_owned_by(&self, user_id: Id) -> bool {
        self.user_id == user_id
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub room_id    : Id,
    pub user_id    : Id,
    pub content    : String,
    pub created_at : Timestamp,
}
