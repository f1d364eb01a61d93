use super::*;

#[get("/categories")]
pub fn get_categories(db: Db) -> Result<Vec<json::Category>> {
    let categories = usecases::list_categories(&db.shared()?)?;
    Ok(Json(categories.into_iter().map(Into::into).collect()))
}
