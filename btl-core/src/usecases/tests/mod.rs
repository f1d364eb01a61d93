use std::cell::RefCell;

use super::prelude::*;

type RepoResult<T> = std::result::Result<T, RepoError>;

#[derive(Default)]
pub struct MockDb {
    pub categories: RefCell<Vec<Category>>,
    pub houses: RefCell<Vec<House>>,
    pub rooms: RefCell<Vec<Room>>,
    pub numbers: RefCell<Vec<Number>>,
    pub users: RefCell<Vec<User>>,
    pub comments: RefCell<Vec<Comment>>,
    pub likes: RefCell<Vec<Like>>,
}

fn next_id(ids: impl Iterator<Item = Id>) -> Id {
    Id::new(ids.map(Id::as_i64).max().unwrap_or(0) + 1)
}

fn get<T: Clone>(objects: &[T], f: impl Fn(&T) -> bool) -> RepoResult<T> {
    objects.iter().find(|x| f(x)).cloned().ok_or(RepoError::NotFound)
}

fn paginate<T>(items: Vec<T>, pagination: &Pagination) -> Vec<T> {
    let offset = pagination.offset.unwrap_or(0) as usize;
    let limit = pagination.limit.map(|l| l as usize).unwrap_or(usize::MAX);
    items.into_iter().skip(offset).take(limit).collect()
}

impl CategoryRepo for MockDb {
    fn create_category(&self, name: &str) -> RepoResult<Category> {
        let mut categories = self.categories.borrow_mut();
        let category = Category {
            id: next_id(categories.iter().map(|c| c.id)),
            name: name.into(),
        };
        categories.push(category.clone());
        Ok(category)
    }
    fn get_category(&self, id: Id) -> RepoResult<Category> {
        get(&self.categories.borrow(), |c| c.id == id)
    }
    fn all_categories(&self) -> RepoResult<Vec<Category>> {
        Ok(self.categories.borrow().clone())
    }
}

impl MockDb {
    fn filtered_houses(&self, filter: &HouseFilter) -> Vec<House> {
        let needle = filter.address.as_ref().map(|a| a.to_lowercase());
        let mut houses: Vec<_> = self
            .houses
            .borrow()
            .iter()
            .filter(|h| match &needle {
                Some(needle) => h.address.to_lowercase().contains(needle),
                None => true,
            })
            .cloned()
            .collect();
        houses.sort_by_key(|h| h.id);
        houses
    }
}

impl HouseRepo for MockDb {
    fn create_house(&self, house: NewHouse) -> RepoResult<House> {
        let mut houses = self.houses.borrow_mut();
        let NewHouse {
            category_id,
            name,
            address,
            description,
            created_at,
        } = house;
        let house = House {
            id: next_id(houses.iter().map(|h| h.id)),
            category_id,
            name,
            address,
            description,
            created_at,
        };
        houses.push(house.clone());
        Ok(house)
    }
    fn get_house(&self, id: Id) -> RepoResult<House> {
        get(&self.houses.borrow(), |h| h.id == id)
    }
    fn count_houses(&self, filter: &HouseFilter) -> RepoResult<u64> {
        Ok(self.filtered_houses(filter).len() as u64)
    }
    fn list_houses(&self, filter: &HouseFilter, pagination: &Pagination) -> RepoResult<Vec<House>> {
        Ok(paginate(self.filtered_houses(filter), pagination))
    }
}

impl RoomRepo for MockDb {
    fn create_room(&self, room: NewRoom) -> RepoResult<Room> {
        let mut rooms = self.rooms.borrow_mut();
        let NewRoom {
            house_id,
            name,
            description,
            created_at,
        } = room;
        let room = Room {
            id: next_id(rooms.iter().map(|r| r.id)),
            house_id,
            name,
            description,
            created_at,
        };
        rooms.push(room.clone());
        Ok(room)
    }
    fn get_room(&self, id: Id) -> RepoResult<Room> {
        get(&self.rooms.borrow(), |r| r.id == id)
    }
    fn load_rooms_of_house(&self, house_id: Id) -> RepoResult<Vec<Room>> {
        let mut rooms: Vec<_> = self
            .rooms
            .borrow()
            .iter()
            .filter(|r| r.house_id == house_id)
            .cloned()
            .collect();
        rooms.sort_by_key(|r| r.id);
        Ok(rooms)
    }
}

impl NumberRepo for MockDb {
    fn create_number(&self, room_id: Id, value: &str) -> RepoResult<Number> {
        let mut numbers = self.numbers.borrow_mut();
        let number = Number {
            id: next_id(numbers.iter().map(|n| n.id)),
            room_id,
            value: value.into(),
        };
        numbers.push(number.clone());
        Ok(number)
    }
    fn load_numbers_of_room(&self, room_id: Id) -> RepoResult<Vec<Number>> {
        Ok(self
            .numbers
            .borrow()
            .iter()
            .filter(|n| n.room_id == room_id)
            .cloned()
            .collect())
    }
}

impl UserRepo for MockDb {
    fn create_user(&self, user: NewUser) -> RepoResult<User> {
        let mut users = self.users.borrow_mut();
        if users.iter().any(|u| u.username == user.username) {
            return Err(RepoError::AlreadyExists);
        }
        let NewUser {
            username,
            password,
            first_name,
            last_name,
            email,
            avatar,
            date_joined,
        } = user;
        let user = User {
            id: next_id(users.iter().map(|u| u.id)),
            username,
            password,
            first_name,
            last_name,
            email,
            avatar,
            date_joined,
        };
        users.push(user.clone());
        Ok(user)
    }
    fn get_user(&self, id: Id) -> RepoResult<User> {
        get(&self.users.borrow(), |u| u.id == id)
    }
    fn get_user_by_username(&self, username: &str) -> RepoResult<User> {
        get(&self.users.borrow(), |u| u.username == username)
    }
    fn try_get_user_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        match self.get_user_by_username(username) {
            Ok(user) => Ok(Some(user)),
            Err(RepoError::NotFound) => Ok(None),
            Err(err) => Err(err),
        }
    }
}

impl CommentRepo for MockDb {
    fn create_comment(&self, comment: NewComment) -> RepoResult<Comment> {
        let mut comments = self.comments.borrow_mut();
        let NewComment {
            room_id,
            user_id,
            content,
            created_at,
        } = comment;
        let comment = Comment {
            id: next_id(comments.iter().map(|c| c.id)),
            room_id,
            user_id,
            content,
            created_at,
            updated_at: None,
        };
        comments.push(comment.clone());
        Ok(comment)
    }
    fn load_comment(&self, id: Id) -> RepoResult<Comment> {
        get(&self.comments.borrow(), |c| c.id == id)
    }
    fn load_comments_of_room(&self, room_id: Id) -> RepoResult<Vec<Comment>> {
        Ok(self
            .comments
            .borrow()
            .iter()
            .filter(|c| c.room_id == room_id)
            .cloned()
            .collect())
    }
    fn update_comment(&self, comment: &Comment) -> RepoResult<()> {
        let mut comments = self.comments.borrow_mut();
        let existing = comments
            .iter_mut()
            .find(|c| c.id == comment.id)
            .ok_or(RepoError::NotFound)?;
        *existing = comment.clone();
        Ok(())
    }
    fn delete_comment(&self, id: Id) -> RepoResult<()> {
        let mut comments = self.comments.borrow_mut();
        let len = comments.len();
        comments.retain(|c| c.id != id);
        if comments.len() == len {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}

impl LikeRepo for MockDb {
    fn toggle_like(&self, user_id: Id, room_id: Id) -> RepoResult<Like> {
        let mut likes = self.likes.borrow_mut();
        if let Some(like) = likes
            .iter_mut()
            .find(|l| l.user_id == user_id && l.room_id == room_id)
        {
            like.liked = !like.liked;
            return Ok(*like);
        }
        let like = Like {
            id: next_id(likes.iter().map(|l| l.id)),
            room_id,
            user_id,
            liked: Like::DEFAULT_LIKED,
        };
        likes.push(like);
        Ok(like)
    }
    fn try_get_like(&self, user_id: Id, room_id: Id) -> RepoResult<Option<Like>> {
        Ok(self
            .likes
            .borrow()
            .iter()
            .find(|l| l.user_id == user_id && l.room_id == room_id)
            .copied())
    }
    fn count_likes_of_room(&self, room_id: Id) -> RepoResult<u64> {
        Ok(self
            .likes
            .borrow()
            .iter()
            .filter(|l| l.room_id == room_id && l.liked)
            .count() as u64)
    }
}
