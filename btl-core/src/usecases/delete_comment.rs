use super::prelude::*;
use super::authorize_owner;

pub fn delete_comment<R>(repo: &R, caller: Option<&User>, comment_id: Id) -> Result<()>
where
    R: CommentRepo,
{
    let comment = repo.load_comment(comment_id)?;
    authorize_owner(Operation::DeleteComment, caller, comment.user_id)?;
    repo.delete_comment(comment.id)?;
    Ok(())
}
