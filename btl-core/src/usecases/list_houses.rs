use super::prelude::*;
use super::authenticated;

#[derive(Debug, Clone, Default)]
pub struct HouseQuery {
    pub q: Option<String>,
    pub page: Option<u64>,
    pub page_size: Option<u64>,
}

pub fn list_houses<R: HouseRepo>(
    repo: &R,
    caller: Option<&User>,
    query: HouseQuery,
    limits: PageLimits,
) -> Result<Page<House>> {
    authenticated(Operation::ListHouses, caller)?;
    let HouseQuery { q, page, page_size } = query;
    let filter = HouseFilter {
        address: q.filter(|q| !q.is_empty()),
    };
    let request = PageRequest::new(page, page_size, limits);
    let count = repo.count_houses(&filter)?;
    if !request.is_valid_for(count) {
        return Err(Error::InvalidPage);
    }
    let houses = repo.list_houses(&filter, &request.pagination())?;
    Ok(Page::new(request, count, houses))
}
