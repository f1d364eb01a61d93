// Low-level database access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by their id and never modified or loaded by another
// repository.

use crate::{entities::*, pagination::Pagination};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait CategoryRepo {
    fn create_category(&self, name: &str) -> Result<Category>;
    fn get_category(&self, id: Id) -> Result<Category>;
    fn all_categories(&self) -> Result<Vec<Category>>;
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HouseFilter {
    /// Case-insensitive substring of the address
    pub address: Option<String>,
}

pub trait HouseRepo {
    fn create_house(&self, house: NewHouse) -> Result<House>;
    fn get_house(&self, id: Id) -> Result<House>;
    fn count_houses(&self, filter: &HouseFilter) -> Result<u64>;
    fn list_houses(&self, filter: &HouseFilter, pagination: &Pagination) -> Result<Vec<House>>;
}

pub trait RoomRepo {
    fn create_room(&self, room: NewRoom) -> Result<Room>;
    fn get_room(&self, id: Id) -> Result<Room>;
    fn load_rooms_of_house(&self, house_id: Id) -> Result<Vec<Room>>;
}

pub trait NumberRepo {
    fn create_number(&self, room_id: Id, value: &str) -> Result<Number>;
    fn load_numbers_of_room(&self, room_id: Id) -> Result<Vec<Number>>;
}

pub trait UserRepo {
    fn create_user(&self, user: NewUser) -> Result<User>;
    fn get_user(&self, id: Id) -> Result<User>;
    fn get_user_by_username(&self, username: &str) -> Result<User>;
    fn try_get_user_by_username(&self, username: &str) -> Result<Option<User>>;
}

pub trait CommentRepo {
    fn create_comment(&self, comment: NewComment) -> Result<Comment>;
    fn load_comment(&self, id: Id) -> Result<Comment>;
    fn load_comments_of_room(&self, room_id: Id) -> Result<Vec<Comment>>;
    fn update_comment(&self, comment: &Comment) -> Result<()>;
    fn delete_comment(&self, id: Id) -> Result<()>;
}

pub trait LikeRepo {
    /// Creates the like of the user for the room with
    /// [`Like::DEFAULT_LIKED`] or inverts the flag of
    /// an existing one, atomically.
    fn toggle_like(&self, user_id: Id, room_id: Id) -> Result<Like>;
    fn try_get_like(&self, user_id: Id, room_id: Id) -> Result<Option<Like>>;
    /// Only likes with the flag set are counted.
    fn count_likes_of_room(&self, room_id: Id) -> Result<u64>;
}
