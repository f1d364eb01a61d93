// NOTE:
// All timestamps are stored as unix timestamp in **milli**seconds.

use diesel::{
    self,
    prelude::{Connection as DieselConnection, *},
    result::{DatabaseErrorKind, Error as DieselError},
};

use btl_core::{
    entities::*,
    pagination::Pagination,
    repositories::{self as repo, *},
};

use super::*;

mod category;
mod comment;
mod house;
mod like;
mod number;
mod room;
mod user;

type Result<T> = std::result::Result<T, repo::Error>;

// The rowid of the most recent successful insert on the connection
define_sql_function!(fn last_insert_rowid() -> diesel::sql_types::BigInt);

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            repo::Error::AlreadyExists
        }
        _ => repo::Error::Other(err.into()),
    }
}

fn resolve_last_insert_rowid(conn: &mut SqliteConnection) -> Result<Id> {
    diesel::select(last_insert_rowid())
        .get_result::<i64>(conn)
        .map(Id::from)
        .map_err(from_diesel_err)
}
