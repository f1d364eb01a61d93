//! Per-operation authorization policy.

use btl_entities::{id::Id, user::User};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    ListCategories,
    ListHouses,
    ListRoomsOfHouse,
    RetrieveRoom,
    AddComment,
    ToggleLike,
    CreateUser,
    Login,
    CurrentUser,
    UpdateComment,
    DeleteComment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    Anyone,
    Authenticated,
    /// The caller must own the resource
    Owner,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("authentication required")]
    NotAuthenticated,
    #[error("not the owner")]
    NotOwner,
}

impl Operation {
    pub const fn requirement(self) -> Requirement {
        use Operation as O;
        match self {
            O::ListCategories | O::RetrieveRoom | O::CreateUser | O::Login => Requirement::Anyone,
            O::ListHouses
            | O::ListRoomsOfHouse
            | O::AddComment
            | O::ToggleLike
            | O::CurrentUser => Requirement::Authenticated,
            O::UpdateComment | O::DeleteComment => Requirement::Owner,
        }
    }
}

/// Checks if the caller may perform the operation.
///
/// `owner` is the owner of the affected resource and only
/// consulted for operations that require ownership.
pub fn authorize_operation(
    operation: Operation,
    caller: Option<&User>,
    owner: Option<Id>,
) -> Result<(), Error> {
    match operation.requirement() {
        Requirement::Anyone => Ok(()),
        Requirement::Authenticated => caller.map(|_| ()).ok_or(Error::NotAuthenticated),
        Requirement::Owner => match (caller, owner) {
            (Some(user), Some(owner)) if user.id == owner => Ok(()),
            _ => Err(Error::NotOwner),
        },
    }
}
