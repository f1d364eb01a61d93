use super::prelude::*;
use super::authenticated;

/// Adds a comment of the caller to a room.
///
/// The content is not validated, a missing content is stored
/// as an empty string.
pub fn add_comment<R>(
    repo: &R,
    caller: Option<&User>,
    room_id: Id,
    content: Option<String>,
) -> Result<(Comment, User)>
where
    R: RoomRepo + CommentRepo,
{
    let author = authenticated(Operation::AddComment, caller)?;
    let room = repo.get_room(room_id)?;
    let comment = repo.create_comment(NewComment {
        room_id: room.id,
        user_id: author.id,
        content: content.unwrap_or_default(),
        created_at: Timestamp::now(),
    })?;
    log::debug!("User {} commented on room {}", author.id, room.id);
    Ok((comment, author.clone()))
}
