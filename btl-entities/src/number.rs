use crate::id::Id;

/// A door or unit number attached to a room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Number {
    pub id: Id,
    pub room_id: Id,
    pub value: String,
}
