use super::*;

fn update_comment(
    db: Db,
    auth: Auth,
    id: i64,
    body: JsonResult<json::CommentContent>,
    partial: bool,
) -> Result<json::Comment> {
    let mut db = db.exclusive()?;
    let user = auth.user(&db)?;
    let content = match body {
        Ok(body) => body.into_inner().content,
        Err(err) => {
            // ownership is checked before the body
            usecases::load_own_comment(&db, user.as_ref(), Id::new(id))?;
            return Err(err.into());
        }
    };
    let update = usecases::CommentUpdate { content, partial };
    let (comment, author) = db.transaction(|db| {
        usecases::update_comment(db, user.as_ref(), Id::new(id), update)
    })?;
    Ok(Json(to_json_comment(comment, author)))
}

#[put("/comments/<id>", data = "<body>")]
pub fn put_comment(
    db: Db,
    auth: Auth,
    id: i64,
    body: JsonResult<json::CommentContent>,
) -> Result<json::Comment> {
    update_comment(db, auth, id, body, false)
}

#[patch("/comments/<id>", data = "<body>")]
pub fn patch_comment(
    db: Db,
    auth: Auth,
    id: i64,
    body: JsonResult<json::CommentContent>,
) -> Result<json::Comment> {
    update_comment(db, auth, id, body, true)
}

#[delete("/comments/<id>")]
pub fn delete_comment(db: Db, auth: Auth, id: i64) -> StatusResult {
    let mut db = db.exclusive()?;
    let user = auth.user(&db)?;
    db.transaction(|db| usecases::delete_comment(db, user.as_ref(), Id::new(id)))?;
    Ok(Status::NoContent)
}
