use super::*;

impl<'a> NumberRepo for DbReadOnly<'a> {
    fn create_number(&self, _room_id: Id, _value: &str) -> Result<Number> {
        unreachable!();
    }
    fn load_numbers_of_room(&self, room_id: Id) -> Result<Vec<Number>> {
        load_numbers_of_room(&mut self.conn.borrow_mut(), room_id)
    }
}

impl<'a> NumberRepo for DbReadWrite<'a> {
    fn create_number(&self, room_id: Id, value: &str) -> Result<Number> {
        create_number(&mut self.conn.borrow_mut(), room_id, value)
    }
    fn load_numbers_of_room(&self, room_id: Id) -> Result<Vec<Number>> {
        load_numbers_of_room(&mut self.conn.borrow_mut(), room_id)
    }
}

impl<'a> NumberRepo for DbConnection<'a> {
    fn create_number(&self, room_id: Id, value: &str) -> Result<Number> {
        create_number(&mut self.conn.borrow_mut(), room_id, value)
    }
    fn load_numbers_of_room(&self, room_id: Id) -> Result<Vec<Number>> {
        load_numbers_of_room(&mut self.conn.borrow_mut(), room_id)
    }
}

impl From<models::Number> for Number {
    fn from(from: models::Number) -> Self {
        let models::Number { id, room_id, value } = from;
        Self {
            id: id.into(),
            room_id: room_id.into(),
            value,
        }
    }
}

fn create_number(conn: &mut SqliteConnection, room_id: Id, value: &str) -> Result<Number> {
    diesel::insert_into(schema::numbers::table)
        .values(&models::NewNumber {
            room_id: room_id.as_i64(),
            value,
        })
        .execute(conn)
        .map_err(from_diesel_err)?;
    let id = resolve_last_insert_rowid(conn)?;
    Ok(Number {
        id,
        room_id,
        value: value.to_owned(),
    })
}

fn load_numbers_of_room(conn: &mut SqliteConnection, room_id: Id) -> Result<Vec<Number>> {
    use schema::numbers::dsl;
    Ok(dsl::numbers
        .filter(dsl::room_id.eq(room_id.as_i64()))
        .order_by(dsl::id)
        .load::<models::Number>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Number::from)
        .collect())
}
