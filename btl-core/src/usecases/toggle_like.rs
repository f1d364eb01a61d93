use super::prelude::*;
use super::{authenticated, load_room_detail, RoomDetail};

/// Creates or inverts the like of the caller and
/// returns the updated room.
pub fn toggle_like<R>(repo: &R, caller: Option<&User>, room_id: Id) -> Result<RoomDetail>
where
    R: RoomRepo + NumberRepo + CommentRepo + UserRepo + LikeRepo,
{
    let user = authenticated(Operation::ToggleLike, caller)?;
    let room = repo.get_room(room_id)?;
    let like = repo.toggle_like(user.id, room.id)?;
    log::debug!("User {} set like of room {} to {}", user.id, room.id, like.liked);
    load_room_detail(repo, Some(user), room.id)
}
