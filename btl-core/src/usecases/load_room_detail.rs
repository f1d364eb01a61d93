use std::collections::HashMap;

use super::prelude::*;
use super::authorize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentWithAuthor {
    pub comment: Comment,
    pub author: User,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomDetail {
    pub room: Room,
    pub numbers: Vec<Number>,
    pub comments: Vec<CommentWithAuthor>,
    /// Number of likes with the flag set
    pub likes: u64,
    /// The flag of the caller's own like
    pub liked: bool,
}

pub fn load_room_detail<R>(repo: &R, caller: Option<&User>, room_id: Id) -> Result<RoomDetail>
where
    R: RoomRepo + NumberRepo + CommentRepo + UserRepo + LikeRepo,
{
    authorize(Operation::RetrieveRoom, caller)?;
    let room = repo.get_room(room_id)?;
    let numbers = repo.load_numbers_of_room(room.id)?;
    let mut authors: HashMap<Id, User> = HashMap::new();
    let mut comments = vec![];
    for comment in repo.load_comments_of_room(room.id)? {
        let author = match authors.get(&comment.user_id) {
            Some(author) => author.clone(),
            None => {
                let author = repo.get_user(comment.user_id)?;
                authors.insert(author.id, author.clone());
                author
            }
        };
        comments.push(CommentWithAuthor { comment, author });
    }
    let likes = repo.count_likes_of_room(room.id)?;
    let liked = match caller {
        Some(user) => repo
            .try_get_like(user.id, room.id)?
            .map(|like| like.liked)
            .unwrap_or(false),
        None => false,
    };
    Ok(RoomDetail {
        room,
        numbers,
        comments,
        likes,
        liked,
    })
}
