use crate::repositories::*;

/// All repositories that are served by a single database connection.
pub trait Db:
    CategoryRepo + HouseRepo + RoomRepo + NumberRepo + UserRepo + CommentRepo + LikeRepo
{
}

impl<T> Db for T where
    T: CategoryRepo + HouseRepo + RoomRepo + NumberRepo + UserRepo + CommentRepo + LikeRepo
{
}
