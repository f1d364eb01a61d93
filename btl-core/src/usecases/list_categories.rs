use super::prelude::*;
use super::authorize;

pub fn list_categories<R: CategoryRepo>(repo: &R) -> Result<Vec<Category>> {
    authorize(Operation::ListCategories, None)?;
    Ok(repo.all_categories()?)
}
