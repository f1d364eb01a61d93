mod add_comment;
mod authorize;
mod create_listings;
mod create_new_user;
mod delete_comment;
mod error;
mod get_user;
mod list_categories;
mod list_houses;
mod load_room_detail;
mod load_rooms_of_house;
mod login;
mod toggle_like;
mod update_comment;

#[cfg(test)]
pub mod tests;

pub use self::{
    add_comment::*, authorize::*, create_listings::*, create_new_user::*, delete_comment::*,
    error::Error, get_user::*, list_categories::*, list_houses::*, load_room_detail::*,
    load_rooms_of_house::*, login::*, toggle_like::*, update_comment::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{
        authorization::Operation, db::*, entities::*, pagination::*, repositories::*, RepoError,
    };
}
