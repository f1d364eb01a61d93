use crate::id::Id;

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Like {
    pub id      : Id,
    pub room_id : Id,
    pub user_id : Id,
    pub liked   : bool,
}

impl Like {
    /// The flag of a newly created like.
    ///
    /// The first toggle request only creates the record and keeps this
    /// value, every further request inverts it.
    pub const DEFAULT_LIKED: bool = false;
}
