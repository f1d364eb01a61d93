use super::*;

/// `page` is a number, anything else is an invalid page.
///
/// An unparsable `page_size` falls back to the default size.
#[get("/houses?<q>&<page>&<page_size>")]
pub fn get_houses(
    db: Db,
    auth: Auth,
    cfg: &State<Cfg>,
    q: Option<String>,
    page: Option<&str>,
    page_size: Option<u64>,
) -> Result<json::Page<json::House>> {
    let db = db.shared()?;
    let user = auth.user(&db)?;
    usecases::authenticated(Operation::ListHouses, user.as_ref())?;
    let page = page
        .map(str::parse::<u64>)
        .transpose()
        .map_err(|_| usecases::Error::InvalidPage)?;
    let query = usecases::HouseQuery { q, page, page_size };
    let houses = usecases::list_houses(&db, user.as_ref(), query, cfg.page_limits)?;
    Ok(Json(to_json_page(houses, Into::into)))
}

#[get("/houses/<id>/rooms")]
pub fn get_rooms_of_house(db: Db, auth: Auth, id: i64) -> Result<Vec<json::Room>> {
    let db = db.shared()?;
    let user = auth.user(&db)?;
    let rooms = usecases::load_rooms_of_house(&db, user.as_ref(), Id::new(id))?;
    Ok(Json(rooms.into_iter().map(Into::into).collect()))
}
