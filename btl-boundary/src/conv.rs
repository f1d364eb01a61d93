use super::*;
use btl_entities as e;

impl From<e::category::Category> for Category {
    fn from(from: e::category::Category) -> Self {
        let e::category::Category { id, name } = from;
        Self {
            id: id.into(),
            name,
        }
    }
}

impl From<e::house::House> for House {
    fn from(from: e::house::House) -> Self {
        let e::house::House {
            id,
            category_id,
            name,
            address,
            description,
            created_at,
        } = from;
        Self {
            id: id.into(),
            category: category_id.map(Into::into),
            name,
            address,
            description,
            created_at: created_at.to_string(),
        }
    }
}

impl From<e::room::Room> for Room {
    fn from(from: e::room::Room) -> Self {
        let e::room::Room {
            id,
            house_id,
            name,
            description,
            created_at,
        } = from;
        Self {
            id: id.into(),
            house: house_id.into(),
            name,
            description,
            created_at: created_at.to_string(),
        }
    }
}

impl From<e::number::Number> for Number {
    fn from(from: e::number::Number) -> Self {
        Self {
            id: from.id.into(),
            value: from.value,
        }
    }
}

impl From<e::user::User> for User {
    fn from(from: e::user::User) -> Self {
        let e::user::User {
            id,
            username,
            password: _,
            first_name,
            last_name,
            email,
            avatar,
            date_joined,
        } = from;
        Self {
            id: id.into(),
            username,
            first_name,
            last_name,
            email,
            avatar,
            date_joined: date_joined.to_string(),
        }
    }
}

impl From<(e::comment::Comment, e::user::User)> for Comment {
    fn from((comment, author): (e::comment::Comment, e::user::User)) -> Self {
        let e::comment::Comment {
            id,
            room_id,
            user_id: _,
            content,
            created_at,
            updated_at,
        } = comment;
        Self {
            id: id.into(),
            room: room_id.into(),
            user: author.into(),
            content,
            created_at: created_at.to_string(),
            updated_at: updated_at.map(|t| t.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use e::{id::Id, password::Password, time::Timestamp};

    #[test]
    fn user_without_password() {
        let user = e::user::User {
            id: Id::new(4),
            username: "alice".into(),
            password: Password::from_hash("$2b$10$hash".into()),
            first_name: "Alice".into(),
            last_name: "Liddell".into(),
            email: None,
            avatar: Some("avatars/a.png".into()),
            date_joined: Timestamp::from_millis(0),
        };
        let user = User::from(user);
        assert_eq!(4, user.id);
        assert!(user.date_joined.starts_with("1970-01-01T00:00:00"));
        assert_eq!(Some("avatars/a.png"), user.avatar.as_deref());
    }
}
