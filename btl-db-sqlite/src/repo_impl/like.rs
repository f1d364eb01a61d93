use super::*;

impl<'a> LikeRepo for DbReadOnly<'a> {
    fn toggle_like(&self, _user_id: Id, _room_id: Id) -> Result<Like> {
        unreachable!();
    }
    fn try_get_like(&self, user_id: Id, room_id: Id) -> Result<Option<Like>> {
        try_get_like(&mut self.conn.borrow_mut(), user_id, room_id)
    }
    fn count_likes_of_room(&self, room_id: Id) -> Result<u64> {
        count_likes_of_room(&mut self.conn.borrow_mut(), room_id)
    }
}

impl<'a> LikeRepo for DbReadWrite<'a> {
    fn toggle_like(&self, user_id: Id, room_id: Id) -> Result<Like> {
        toggle_like(&mut self.conn.borrow_mut(), user_id, room_id)
    }
    fn try_get_like(&self, user_id: Id, room_id: Id) -> Result<Option<Like>> {
        try_get_like(&mut self.conn.borrow_mut(), user_id, room_id)
    }
    fn count_likes_of_room(&self, room_id: Id) -> Result<u64> {
        count_likes_of_room(&mut self.conn.borrow_mut(), room_id)
    }
}

impl<'a> LikeRepo for DbConnection<'a> {
    fn toggle_like(&self, user_id: Id, room_id: Id) -> Result<Like> {
        toggle_like(&mut self.conn.borrow_mut(), user_id, room_id)
    }
    fn try_get_like(&self, user_id: Id, room_id: Id) -> Result<Option<Like>> {
        try_get_like(&mut self.conn.borrow_mut(), user_id, room_id)
    }
    fn count_likes_of_room(&self, room_id: Id) -> Result<u64> {
        count_likes_of_room(&mut self.conn.borrow_mut(), room_id)
    }
}

impl From<models::Like> for Like {
    fn from(from: models::Like) -> Self {
        let models::Like {
            id,
            room_id,
            user_id,
            liked,
        } = from;
        Self {
            id: id.into(),
            room_id: room_id.into(),
            user_id: user_id.into(),
            liked,
        }
    }
}

// Inserts the default flag or inverts the stored one
// with a single statement.
fn toggle_like(conn: &mut SqliteConnection, user_id: Id, room_id: Id) -> Result<Like> {
    use schema::likes::dsl;
    let new_like = models::NewLike {
        room_id: room_id.as_i64(),
        user_id: user_id.as_i64(),
        liked: Like::DEFAULT_LIKED,
    };
    conn.transaction(|conn| {
        diesel::insert_into(dsl::likes)
            .values(&new_like)
            .on_conflict((dsl::user_id, dsl::room_id))
            .do_update()
            .set(dsl::liked.eq(diesel::dsl::not(dsl::liked)))
            .execute(conn)?;
        dsl::likes
            .filter(dsl::user_id.eq(new_like.user_id))
            .filter(dsl::room_id.eq(new_like.room_id))
            .first::<models::Like>(conn)
    })
    .map(Like::from)
    .map_err(from_diesel_err)
}

fn try_get_like(conn: &mut SqliteConnection, user_id: Id, room_id: Id) -> Result<Option<Like>> {
    use schema::likes::dsl;
    Ok(dsl::likes
        .filter(dsl::user_id.eq(user_id.as_i64()))
        .filter(dsl::room_id.eq(room_id.as_i64()))
        .first::<models::Like>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(Into::into))
}

fn count_likes_of_room(conn: &mut SqliteConnection, room_id: Id) -> Result<u64> {
    use schema::likes::dsl;
    let count = dsl::likes
        .filter(dsl::room_id.eq(room_id.as_i64()))
        .filter(dsl::liked.eq(true))
        .count()
        .get_result::<i64>(conn)
        .map_err(from_diesel_err)?;
    Ok(count as u64)
}
