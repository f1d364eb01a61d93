use maud::Markup;
use rocket::{self, get, post, response::content::RawCss, routes, Route};

use crate::web::{api::ApiError, guards::*};
use btl_core::usecases;

mod view;


const MAIN_CSS: &str = include_str!("main.css");

type Result<T> = std::result::Result<T, ApiError>;

#[get("/main.css")]
pub fn get_main_css() -> RawCss<&'static str> {
    RawCss(MAIN_CSS)
}

#[get("/category")]
pub fn get_categories(db: Db) -> Result<Markup> {
    let categories = usecases::list_categories(&db.shared()?)?;
    Ok(view::categories(&categories))
}

// Form submissions are accepted and ignored
#[post("/category")]
pub fn post_categories() {}

#[get("/houses")]
pub fn get_houses_greeting() -> &'static str {
    "HELLO"
}

#[get("/houses/<id>")]
pub fn get_house_greeting(id: i64) -> String {
    format!("HOUSE {id}")
}

pub fn routes() -> Vec<Route> {
    routes![
        get_main_css,
        get_categories,
        post_categories,
        get_houses_greeting,
        get_house_greeting,
    ]
}
