use super::*;

#[get("/rooms/<id>")]
pub fn get_room(db: Db, auth: Auth, id: i64) -> Result<json::RoomDetail> {
    let db = db.shared()?;
    let user = auth.user(&db)?;
    let detail = usecases::load_room_detail(&db, user.as_ref(), Id::new(id))?;
    Ok(Json(to_json_room_detail(detail)))
}

#[post("/rooms/<id>/comments", data = "<comment>")]
pub fn post_comment(
    db: Db,
    auth: Auth,
    id: i64,
    comment: JsonResult<json::CommentContent>,
) -> CreatedResult<json::Comment> {
    let mut db = db.exclusive()?;
    let user = auth.user(&db)?;
    // unreadable bodies of anonymous callers are rejected as unauthorized
    let content = match comment {
        Ok(comment) => comment.into_inner().content,
        Err(err) if user.is_some() => return Err(err.into()),
        Err(_) => None,
    };
    let (comment, author) =
        db.transaction(|db| usecases::add_comment(db, user.as_ref(), Id::new(id), content))?;
    let location = format!("/api/comments/{}", comment.id);
    Ok(Created::new(location).body(Json(to_json_comment(comment, author))))
}

#[post("/rooms/<id>/like")]
pub fn post_like(db: Db, auth: Auth, id: i64) -> Result<json::RoomDetail> {
    let mut db = db.exclusive()?;
    let user = auth.user(&db)?;
    let detail = db.transaction(|db| usecases::toggle_like(db, user.as_ref(), Id::new(id)))?;
    Ok(Json(to_json_room_detail(detail)))
}
