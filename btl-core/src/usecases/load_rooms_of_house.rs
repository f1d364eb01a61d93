use super::prelude::*;
use super::authenticated;

pub fn load_rooms_of_house<R>(repo: &R, caller: Option<&User>, house_id: Id) -> Result<Vec<Room>>
where
    R: HouseRepo + RoomRepo,
{
    authenticated(Operation::ListRoomsOfHouse, caller)?;
    let house = repo.get_house(house_id)?;
    Ok(repo.load_rooms_of_house(house.id)?)
}
