#![allow(clippy::extra_unused_lifetimes)]

// NOTE:
// All timestamps with the `_at` postfix and `date_joined`
// are stored as unix timestamp in **milli**seconds.

use super::schema::*;

#[derive(Insertable)]
#[diesel(table_name = categories)]
pub struct NewCategory<'a> {
    pub name: &'a str,
}

#[derive(Queryable)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

#[derive(Insertable)]
#[diesel(table_name = houses)]
pub struct NewHouse<'a> {
    pub category_id: Option<i64>,
    pub name: &'a str,
    pub address: &'a str,
    pub description: Option<&'a str>,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct House {
    pub id: i64,
    pub category_id: Option<i64>,
    pub name: String,
    pub address: String,
    pub description: Option<String>,
    pub created_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = rooms)]
pub struct NewRoom<'a> {
    pub house_id: i64,
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct Room {
    pub id: i64,
    pub house_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub created_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = numbers)]
pub struct NewNumber<'a> {
    pub room_id: i64,
    pub value: &'a str,
}

#[derive(Queryable)]
pub struct Number {
    pub id: i64,
    pub room_id: i64,
    pub value: String,
}

#[derive(Insertable)]
#[diesel(table_name = users)]
pub struct NewUser<'a> {
    pub username: &'a str,
    pub password: &'a str,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: Option<&'a str>,
    pub avatar: Option<&'a str>,
    pub date_joined: i64,
}

#[derive(Queryable)]
pub struct UserEntity {
    pub id: i64,
    pub username: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub avatar: Option<String>,
    pub date_joined: i64,
}

#[derive(Insertable)]
#[diesel(table_name = comments)]
pub struct NewComment<'a> {
    pub room_id: i64,
    pub user_id: i64,
    pub content: &'a str,
    pub created_at: i64,
}

#[derive(AsChangeset)]
#[diesel(table_name = comments)]
#[diesel(treat_none_as_null = true)]
pub struct ChangeComment<'a> {
    pub content: &'a str,
    pub updated_at: Option<i64>,
}

#[derive(Queryable)]
pub struct Comment {
    pub id: i64,
    pub room_id: i64,
    pub user_id: i64,
    pub content: String,
    pub created_at: i64,
    pub updated_at: Option<i64>,
}

#[derive(Insertable)]
#[diesel(table_name = likes)]
pub struct NewLike {
    pub room_id: i64,
    pub user_id: i64,
    pub liked: bool,
}

#[derive(Queryable)]
pub struct Like {
    pub id: i64,
    pub room_id: i64,
    pub user_id: i64,
    pub liked: bool,
}
