use super::prelude::*;
use super::authorize_owner;

#[derive(Debug, Clone, Default)]
pub struct CommentUpdate {
    pub content: Option<String>,
    /// Partial updates may omit the content
    pub partial: bool,
}

/// Loads a comment that the caller is allowed to update.
pub fn load_own_comment<R>(repo: &R, caller: Option<&User>, comment_id: Id) -> Result<Comment>
where
    R: CommentRepo,
{
    let comment = repo.load_comment(comment_id)?;
    authorize_owner(Operation::UpdateComment, caller, comment.user_id)?;
    Ok(comment)
}

pub fn update_comment<R>(
    repo: &R,
    caller: Option<&User>,
    comment_id: Id,
    update: CommentUpdate,
) -> Result<(Comment, User)>
where
    R: CommentRepo,
{
    let mut comment = load_own_comment(repo, caller, comment_id)?;
    let CommentUpdate { content, partial } = update;
    match content {
        Some(content) => {
            comment.content = content;
            comment.updated_at = Some(Timestamp::now());
        }
        None if partial => {}
        None => return Err(Error::MissingContent),
    }
    repo.update_comment(&comment)?;
    let author = caller.cloned().ok_or(Error::Forbidden)?;
    Ok((comment, author))
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};
    use btl_entities::builders::*;

    fn setup() -> (MockDb, User, User, Id) {
        let db = MockDb::default();
        let owner = User::build().id(1).username("owner").finish();
        let other = User::build().id(2).username("other").finish();
        let comment = db
            .create_comment(NewComment {
                room_id: Id::new(1),
                user_id: owner.id,
                content: "old".into(),
                created_at: Timestamp::now(),
            })
            .unwrap();
        (db, owner, other, comment.id)
    }

    #[test]
    fn owner_replaces_content() {
        let (db, owner, _, id) = setup();
        let update = CommentUpdate {
            content: Some("new".into()),
            partial: false,
        };
        let (comment, author) = update_comment(&db, Some(&owner), id, update).unwrap();
        assert_eq!("new", comment.content);
        assert!(comment.updated_at.is_some());
        assert_eq!(owner, author);
        assert_eq!("new", db.load_comment(id).unwrap().content);
    }

    #[test]
    fn full_update_requires_content() {
        let (db, owner, _, id) = setup();
        assert!(matches!(
            update_comment(&db, Some(&owner), id, CommentUpdate::default()),
            Err(Error::MissingContent)
        ));
        let partial = CommentUpdate {
            content: None,
            partial: true,
        };
        let (comment, _) = update_comment(&db, Some(&owner), id, partial).unwrap();
        assert_eq!("old", comment.content);
    }

    #[test]
    fn others_are_forbidden() {
        let (db, _, other, id) = setup();
        for caller in [Some(&other), None] {
            let update = CommentUpdate {
                content: Some("hijacked".into()),
                partial: false,
            };
            assert!(matches!(
                update_comment(&db, caller, id, update),
                Err(Error::Forbidden)
            ));
        }
        assert_eq!("old", db.load_comment(id).unwrap().content);
    }

    #[test]
    fn unknown_comment_before_ownership() {
        let (db, _, other, _) = setup();
        assert!(matches!(
            update_comment(&db, Some(&other), Id::new(42), CommentUpdate::default()),
            Err(Error::Repo(RepoError::NotFound))
        ));
    }

    #[test]
    fn load_own_comment_checks_ownership() {
        let (db, owner, other, id) = setup();
        assert_eq!("old", load_own_comment(&db, Some(&owner), id).unwrap().content);
        assert!(matches!(
            load_own_comment(&db, Some(&other), id),
            Err(Error::Forbidden)
        ));
        assert!(matches!(
            load_own_comment(&db, Some(&owner), Id::new(42)),
            Err(Error::Repo(RepoError::NotFound))
        ));
    }
}
