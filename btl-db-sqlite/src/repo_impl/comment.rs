use super::*;

impl<'a> CommentRepo for DbReadOnly<'a> {
    fn create_comment(&self, _comment: NewComment) -> Result<Comment> {
        unreachable!();
    }
    fn load_comment(&self, id: Id) -> Result<Comment> {
        load_comment(&mut self.conn.borrow_mut(), id)
    }
    fn load_comments_of_room(&self, room_id: Id) -> Result<Vec<Comment>> {
        load_comments_of_room(&mut self.conn.borrow_mut(), room_id)
    }
    fn update_comment(&self, _comment: &Comment) -> Result<()> {
        unreachable!();
    }
    fn delete_comment(&self, _id: Id) -> Result<()> {
        unreachable!();
    }
}

impl<'a> CommentRepo for DbReadWrite<'a> {
    fn create_comment(&self, comment: NewComment) -> Result<Comment> {
        create_comment(&mut self.conn.borrow_mut(), comment)
    }
    fn load_comment(&self, id: Id) -> Result<Comment> {
        load_comment(&mut self.conn.borrow_mut(), id)
    }
    fn load_comments_of_room(&self, room_id: Id) -> Result<Vec<Comment>> {
        load_comments_of_room(&mut self.conn.borrow_mut(), room_id)
    }
    fn update_comment(&self, comment: &Comment) -> Result<()> {
        update_comment(&mut self.conn.borrow_mut(), comment)
    }
    fn delete_comment(&self, id: Id) -> Result<()> {
        delete_comment(&mut self.conn.borrow_mut(), id)
    }
}

impl<'a> CommentRepo for DbConnection<'a> {
    fn create_comment(&self, comment: NewComment) -> Result<Comment> {
        create_comment(&mut self.conn.borrow_mut(), comment)
    }
    fn load_comment(&self, id: Id) -> Result<Comment> {
        load_comment(&mut self.conn.borrow_mut(), id)
    }
    fn load_comments_of_room(&self, room_id: Id) -> Result<Vec<Comment>> {
        load_comments_of_room(&mut self.conn.borrow_mut(), room_id)
    }
    fn update_comment(&self, comment: &Comment) -> Result<()> {
        update_comment(&mut self.conn.borrow_mut(), comment)
    }
    fn delete_comment(&self, id: Id) -> Result<()> {
        delete_comment(&mut self.conn.borrow_mut(), id)
    }
}

impl From<models::Comment> for Comment {
    fn from(from: models::Comment) -> Self {
        let models::Comment {
            id,
            room_id,
            user_id,
            content,
            created_at,
            updated_at,
        } = from;
        Self {
            id: id.into(),
            room_id: room_id.into(),
            user_id: user_id.into(),
            content,
            created_at: Timestamp::from_millis(created_at),
            updated_at: updated_at.map(Timestamp::from_millis),
        }
    }
}

fn create_comment(conn: &mut SqliteConnection, c: NewComment) -> Result<Comment> {
    let new_comment = models::NewComment {
        room_id: c.room_id.as_i64(),
        user_id: c.user_id.as_i64(),
        content: &c.content,
        created_at: c.created_at.as_millis(),
    };
    diesel::insert_into(schema::comments::table)
        .values(&new_comment)
        .execute(conn)
        .map_err(from_diesel_err)?;
    let id = resolve_last_insert_rowid(conn)?;
    load_comment(conn, id)
}

fn load_comment(conn: &mut SqliteConnection, id: Id) -> Result<Comment> {
    use schema::comments::dsl;
    Ok(dsl::comments
        .filter(dsl::id.eq(id.as_i64()))
        .first::<models::Comment>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn load_comments_of_room(conn: &mut SqliteConnection, room_id: Id) -> Result<Vec<Comment>> {
    use schema::comments::dsl;
    Ok(dsl::comments
        .filter(dsl::room_id.eq(room_id.as_i64()))
        .order_by(dsl::id)
        .load::<models::Comment>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Comment::from)
        .collect())
}

fn update_comment(conn: &mut SqliteConnection, comment: &Comment) -> Result<()> {
    use schema::comments::dsl;
    let changes = models::ChangeComment {
        content: &comment.content,
        updated_at: comment.updated_at.map(Timestamp::as_millis),
    };
    let count = diesel::update(dsl::comments.filter(dsl::id.eq(comment.id.as_i64())))
        .set(&changes)
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn delete_comment(conn: &mut SqliteConnection, id: Id) -> Result<()> {
    use schema::comments::dsl;
    let count = diesel::delete(dsl::comments.filter(dsl::id.eq(id.as_i64())))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}
