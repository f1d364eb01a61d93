use diesel::sqlite::Sqlite;

use super::*;

impl<'a> HouseRepo for DbReadOnly<'a> {
    fn create_house(&self, _house: NewHouse) -> Result<House> {
        unreachable!();
    }
    fn get_house(&self, id: Id) -> Result<House> {
        get_house(&mut self.conn.borrow_mut(), id)
    }
    fn count_houses(&self, filter: &HouseFilter) -> Result<u64> {
        count_houses(&mut self.conn.borrow_mut(), filter)
    }
    fn list_houses(&self, filter: &HouseFilter, pagination: &Pagination) -> Result<Vec<House>> {
        list_houses(&mut self.conn.borrow_mut(), filter, pagination)
    }
}

impl<'a> HouseRepo for DbReadWrite<'a> {
    fn create_house(&self, house: NewHouse) -> Result<House> {
        create_house(&mut self.conn.borrow_mut(), house)
    }
    fn get_house(&self, id: Id) -> Result<House> {
        get_house(&mut self.conn.borrow_mut(), id)
    }
    fn count_houses(&self, filter: &HouseFilter) -> Result<u64> {
        count_houses(&mut self.conn.borrow_mut(), filter)
    }
    fn list_houses(&self, filter: &HouseFilter, pagination: &Pagination) -> Result<Vec<House>> {
        list_houses(&mut self.conn.borrow_mut(), filter, pagination)
    }
}

impl<'a> HouseRepo for DbConnection<'a> {
    fn create_house(&self, house: NewHouse) -> Result<House> {
        create_house(&mut self.conn.borrow_mut(), house)
    }
    fn get_house(&self, id: Id) -> Result<House> {
        get_house(&mut self.conn.borrow_mut(), id)
    }
    fn count_houses(&self, filter: &HouseFilter) -> Result<u64> {
        count_houses(&mut self.conn.borrow_mut(), filter)
    }
    fn list_houses(&self, filter: &HouseFilter, pagination: &Pagination) -> Result<Vec<House>> {
        list_houses(&mut self.conn.borrow_mut(), filter, pagination)
    }
}

impl From<models::House> for House {
    fn from(from: models::House) -> Self {
        let models::House {
            id,
            category_id,
            name,
            address,
            description,
            created_at,
        } = from;
        Self {
            id: id.into(),
            category_id: category_id.map(Id::from),
            name,
            address,
            description,
            created_at: Timestamp::from_millis(created_at),
        }
    }
}

/// Escapes the wildcards of a `LIKE` pattern with `\`.
fn escape_like_pattern(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

// SQLite compares ASCII characters case-insensitively in `LIKE`
fn filtered_houses(filter: &HouseFilter) -> schema::houses::BoxedQuery<'static, Sqlite> {
    use schema::houses::dsl;
    let mut query = dsl::houses.into_boxed();
    if let Some(address) = &filter.address {
        let pattern = format!("%{}%", escape_like_pattern(address));
        query = query.filter(dsl::address.like(pattern).escape('\\'));
    }
    query
}

fn create_house(conn: &mut SqliteConnection, house: NewHouse) -> Result<House> {
    let NewHouse {
        category_id,
        name,
        address,
        description,
        created_at,
    } = &house;
    let new_house = models::NewHouse {
        category_id: category_id.map(Id::as_i64),
        name,
        address,
        description: description.as_deref(),
        created_at: created_at.as_millis(),
    };
    diesel::insert_into(schema::houses::table)
        .values(&new_house)
        .execute(conn)
        .map_err(from_diesel_err)?;
    let id = resolve_last_insert_rowid(conn)?;
    get_house(conn, id)
}

fn get_house(conn: &mut SqliteConnection, id: Id) -> Result<House> {
    use schema::houses::dsl;
    Ok(dsl::houses
        .filter(dsl::id.eq(id.as_i64()))
        .first::<models::House>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn count_houses(conn: &mut SqliteConnection, filter: &HouseFilter) -> Result<u64> {
    let count = filtered_houses(filter)
        .count()
        .get_result::<i64>(conn)
        .map_err(from_diesel_err)?;
    Ok(count as u64)
}

fn list_houses(
    conn: &mut SqliteConnection,
    filter: &HouseFilter,
    pagination: &Pagination,
) -> Result<Vec<House>> {
    use schema::houses::dsl;
    let mut query = filtered_houses(filter).order_by(dsl::id);
    // SQLite requires a limit for an offset, -1 means unlimited
    let limit = pagination.limit.map(|l| l as i64).unwrap_or(-1);
    query = query.limit(limit);
    if let Some(offset) = pagination.offset {
        query = query.offset(offset as i64);
    }
    Ok(query
        .load::<models::House>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(House::from)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::escape_like_pattern;

    #[test]
    fn escape_wildcards() {
        assert_eq!("abc", escape_like_pattern("abc"));
        assert_eq!(r"10\%", escape_like_pattern("10%"));
        assert_eq!(r"a\_b\\c", escape_like_pattern(r"a_b\c"));
    }
}
