use super::*;

impl<'a> CategoryRepo for DbReadOnly<'a> {
    fn create_category(&self, _name: &str) -> Result<Category> {
        unreachable!();
    }
    fn get_category(&self, id: Id) -> Result<Category> {
        get_category(&mut self.conn.borrow_mut(), id)
    }
    fn all_categories(&self) -> Result<Vec<Category>> {
        all_categories(&mut self.conn.borrow_mut())
    }
}

impl<'a> CategoryRepo for DbReadWrite<'a> {
    fn create_category(&self, name: &str) -> Result<Category> {
        create_category(&mut self.conn.borrow_mut(), name)
    }
    fn get_category(&self, id: Id) -> Result<Category> {
        get_category(&mut self.conn.borrow_mut(), id)
    }
    fn all_categories(&self) -> Result<Vec<Category>> {
        all_categories(&mut self.conn.borrow_mut())
    }
}

impl<'a> CategoryRepo for DbConnection<'a> {
    fn create_category(&self, name: &str) -> Result<Category> {
        create_category(&mut self.conn.borrow_mut(), name)
    }
    fn get_category(&self, id: Id) -> Result<Category> {
        get_category(&mut self.conn.borrow_mut(), id)
    }
    fn all_categories(&self) -> Result<Vec<Category>> {
        all_categories(&mut self.conn.borrow_mut())
    }
}

impl From<models::Category> for Category {
    fn from(from: models::Category) -> Self {
        let models::Category { id, name } = from;
        Self {
            id: id.into(),
            name,
        }
    }
}

fn create_category(conn: &mut SqliteConnection, name: &str) -> Result<Category> {
    diesel::insert_into(schema::categories::table)
        .values(&models::NewCategory { name })
        .execute(conn)
        .map_err(from_diesel_err)?;
    let id = resolve_last_insert_rowid(conn)?;
    get_category(conn, id)
}

fn get_category(conn: &mut SqliteConnection, id: Id) -> Result<Category> {
    use schema::categories::dsl;
    Ok(dsl::categories
        .filter(dsl::id.eq(id.as_i64()))
        .first::<models::Category>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn all_categories(conn: &mut SqliteConnection) -> Result<Vec<Category>> {
    use schema::categories::dsl;
    Ok(dsl::categories
        .order_by(dsl::id)
        .load::<models::Category>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Category::from)
        .collect())
}
