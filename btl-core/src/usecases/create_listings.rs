use super::prelude::*;
use crate::util::validate;

pub fn create_category<R: CategoryRepo>(repo: &R, name: &str) -> Result<Category> {
    let name = name.trim();
    if validate::is_blank(name) {
        return Err(Error::Name);
    }
    let category = repo.create_category(name)?;
    log::info!("Created category {} ({})", category.name, category.id);
    Ok(category)
}

#[derive(Debug, Clone)]
pub struct NewHouseInput {
    pub category_id: Option<Id>,
    pub name: String,
    pub address: String,
    pub description: Option<String>,
}

pub fn create_house<R>(repo: &R, input: NewHouseInput) -> Result<House>
where
    R: CategoryRepo + HouseRepo,
{
    let NewHouseInput {
        category_id,
        name,
        address,
        description,
    } = input;
    if validate::is_blank(&name) {
        return Err(Error::Name);
    }
    if validate::is_blank(&address) {
        return Err(Error::Address);
    }
    if let Some(id) = category_id {
        repo.get_category(id)?;
    }
    let house = repo.create_house(NewHouse {
        category_id,
        name,
        address,
        description: description.filter(|d| !d.is_empty()),
        created_at: Timestamp::now(),
    })?;
    log::info!("Created house {} ({})", house.name, house.id);
    Ok(house)
}

pub fn create_room<R>(
    repo: &R,
    house_id: Id,
    name: String,
    description: Option<String>,
) -> Result<Room>
where
    R: HouseRepo + RoomRepo,
{
    if validate::is_blank(&name) {
        return Err(Error::Name);
    }
    let house = repo.get_house(house_id)?;
    let room = repo.create_room(NewRoom {
        house_id: house.id,
        name,
        description: description.filter(|d| !d.is_empty()),
        created_at: Timestamp::now(),
    })?;
    log::info!("Created room {} ({}) in house {}", room.name, room.id, house.id);
    Ok(room)
}

pub fn add_room_number<R>(repo: &R, room_id: Id, value: &str) -> Result<Number>
where
    R: RoomRepo + NumberRepo,
{
    let value = value.trim();
    if validate::is_blank(value) {
        return Err(Error::Name);
    }
    let room = repo.get_room(room_id)?;
    Ok(repo.create_number(room.id, value)?)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};

    fn house(name: &str, address: &str, category_id: Option<Id>) -> NewHouseInput {
        NewHouseInput {
            category_id,
            name: name.into(),
            address: address.into(),
            description: None,
        }
    }

    #[test]
    fn create_house_in_category() {
        let db = MockDb::default();
        let cat = create_category(&db, " flats ").unwrap();
        assert_eq!("flats", cat.name);
        let h = create_house(&db, house("Villa", "1 Main St", Some(cat.id))).unwrap();
        assert_eq!(Some(cat.id), h.category_id);
        assert_eq!(h, db.get_house(h.id).unwrap());
    }

    #[test]
    fn reject_invalid_houses() {
        let db = MockDb::default();
        assert!(matches!(
            create_house(&db, house("", "1 Main St", None)),
            Err(Error::Name)
        ));
        assert!(matches!(
            create_house(&db, house("Villa", "  ", None)),
            Err(Error::Address)
        ));
        assert!(matches!(
            create_house(&db, house("Villa", "1 Main St", Some(Id::new(3)))),
            Err(Error::Repo(RepoError::NotFound))
        ));
        assert!(db.houses.borrow().is_empty());
    }

    #[test]
    fn rooms_and_numbers_need_a_parent() {
        let db = MockDb::default();
        assert!(matches!(
            create_room(&db, Id::new(1), "Kitchen".into(), None),
            Err(Error::Repo(RepoError::NotFound))
        ));
        let h = create_house(&db, house("Villa", "1 Main St", None)).unwrap();
        let r = create_room(&db, h.id, "Kitchen".into(), Some("".into())).unwrap();
        assert_eq!(None, r.description);
        let n = add_room_number(&db, r.id, "12b").unwrap();
        assert_eq!("12b", n.value);
        assert!(add_room_number(&db, Id::new(99), "1").is_err());
    }
}
