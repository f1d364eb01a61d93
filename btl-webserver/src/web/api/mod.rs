use std::{fmt::Display, result};

use btl_boundary as json;
use btl_core::{
    authorization::Operation,
    entities::{Id, User},
    pagination::Page,
    usecases,
};
use rocket::{
    self, delete, get,
    http::{Cookie, CookieJar, Status},
    patch, post, put,
    response::{self, status::Created, Responder},
    routes,
    serde::json::{Error as JsonError, Json},
    Route, State,
};

use super::{
    guards::{Auth, Db, Version, COOKIE_USER_KEY},
    jwt, Cfg, AVATAR_DIR, MEDIA_MOUNT,
};

mod categories;
mod comments;
mod error;
mod houses;
mod rooms;
mod users;
mod util;

pub use self::error::Error as ApiError;


type Result<T> = result::Result<Json<T>, ApiError>;
type CreatedResult<T> = result::Result<Created<Json<T>>, ApiError>;
type JsonResult<'a, T> = result::Result<Json<T>, JsonError<'a>>;
type StatusResult = result::Result<Status, ApiError>;

pub fn routes() -> Vec<Route> {
    routes![
        // ---   categories   --- //
        categories::get_categories,
        // ---   houses   --- //
        houses::get_houses,
        houses::get_rooms_of_house,
        // ---   rooms   --- //
        rooms::get_room,
        rooms::post_comment,
        rooms::post_like,
        // ---   users   --- //
        users::post_user_multipart,
        users::post_user_json,
        users::get_current_user,
        users::post_login,
        users::post_logout,
        // ---   comments   --- //
        comments::put_comment,
        comments::patch_comment,
        comments::delete_comment,
        // ---   util   --- //
        util::get_version,
    ]
}

fn to_json_user(user: User) -> json::User {
    let mut user = json::User::from(user);
    user.avatar = user.avatar.map(|path| format!("{MEDIA_MOUNT}/{path}"));
    user
}

fn to_json_comment(comment: btl_core::entities::Comment, author: User) -> json::Comment {
    let mut comment = json::Comment::from((comment, author));
    comment.user.avatar = comment
        .user
        .avatar
        .map(|path| format!("{MEDIA_MOUNT}/{path}"));
    comment
}

fn to_json_room_detail(detail: usecases::RoomDetail) -> json::RoomDetail {
    let usecases::RoomDetail {
        room,
        numbers,
        comments,
        likes,
        liked,
    } = detail;
    json::RoomDetail {
        room: room.into(),
        numbers: numbers.into_iter().map(Into::into).collect(),
        comments: comments
            .into_iter()
            .map(|c| to_json_comment(c.comment, c.author))
            .collect(),
        likes,
        liked,
    }
}

fn to_json_page<T, U>(page: Page<T>, f: impl FnMut(T) -> U) -> json::Page<U> {
    let next = page.next();
    let previous = page.previous();
    let Page { count, items, .. } = page.map(f);
    json::Page {
        count,
        next,
        previous,
        results: items,
    }
}

fn json_error_response<'r, 'o: 'r, E: Display>(
    req: &'r rocket::Request<'_>,
    err: &E,
    status: Status,
) -> response::Result<'o> {
    let message = err.to_string();
    let boundary_error = json::Error {
        http_status: status.code,
        message,
    };
    Json(boundary_error).respond_to(req).map(|mut res| {
        res.set_status(status);
        res
    })
}
