use super::*;

impl<'a> RoomRepo for DbReadOnly<'a> {
    fn create_room(&self, _room: NewRoom) -> Result<Room> {
        unreachable!();
    }
    fn get_room(&self, id: Id) -> Result<Room> {
        get_room(&mut self.conn.borrow_mut(), id)
    }
    fn load_rooms_of_house(&self, house_id: Id) -> Result<Vec<Room>> {
        load_rooms_of_house(&mut self.conn.borrow_mut(), house_id)
    }
}

impl<'a> RoomRepo for DbReadWrite<'a> {
    fn create_room(&self, room: NewRoom) -> Result<Room> {
        create_room(&mut self.conn.borrow_mut(), room)
    }
    fn get_room(&self, id: Id) -> Result<Room> {
        get_room(&mut self.conn.borrow_mut(), id)
    }
    fn load_rooms_of_house(&self, house_id: Id) -> Result<Vec<Room>> {
        load_rooms_of_house(&mut self.conn.borrow_mut(), house_id)
    }
}

impl<'a> RoomRepo for DbConnection<'a> {
    fn create_room(&self, room: NewRoom) -> Result<Room> {
        create_room(&mut self.conn.borrow_mut(), room)
    }
    fn get_room(&self, id: Id) -> Result<Room> {
        get_room(&mut self.conn.borrow_mut(), id)
    }
    fn load_rooms_of_house(&self, house_id: Id) -> Result<Vec<Room>> {
        load_rooms_of_house(&mut self.conn.borrow_mut(), house_id)
    }
}

impl From<models::Room> for Room {
    fn from(from: models::Room) -> Self {
        let models::Room {
            id,
            house_id,
            name,
            description,
            created_at,
        } = from;
        Self {
            id: id.into(),
            house_id: house_id.into(),
            name,
            description,
            created_at: Timestamp::from_millis(created_at),
        }
    }
}

fn create_room(conn: &mut SqliteConnection, room: NewRoom) -> Result<Room> {
    let new_room = models::NewRoom {
        house_id: room.house_id.as_i64(),
        name: &room.name,
        description: room.description.as_deref(),
        created_at: room.created_at.as_millis(),
    };
    diesel::insert_into(schema::rooms::table)
        .values(&new_room)
        .execute(conn)
        .map_err(from_diesel_err)?;
    let id = resolve_last_insert_rowid(conn)?;
    get_room(conn, id)
}

fn get_room(conn: &mut SqliteConnection, id: Id) -> Result<Room> {
    use schema::rooms::dsl;
    Ok(dsl::rooms
        .filter(dsl::id.eq(id.as_i64()))
        .first::<models::Room>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn load_rooms_of_house(conn: &mut SqliteConnection, house_id: Id) -> Result<Vec<Room>> {
    use schema::rooms::dsl;
    Ok(dsl::rooms
        .filter(dsl::house_id.eq(house_id.as_i64()))
        .order_by(dsl::id)
        .load::<models::Room>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Room::from)
        .collect())
}
