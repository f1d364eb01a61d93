pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{house_builder::*, room_builder::*, user_builder::*};

pub mod house_builder {

    use super::*;
    use crate::{house::*, id::*, time::*};

    #[derive(Debug)]
    pub struct HouseBuild {
        house: House,
    }

    impl HouseBuild {
        pub fn id(mut self, id: i64) -> Self {
            self.house.id = id.into();
            self
        }
        pub fn category(mut self, id: i64) -> Self {
            self.house.category_id = Some(id.into());
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.house.name = name.into();
            self
        }
        pub fn address(mut self, address: &str) -> Self {
            self.house.address = address.into();
            self
        }
        pub fn finish(self) -> House {
            self.house
        }
    }

    impl Builder for House {
        type Build = HouseBuild;
        fn build() -> HouseBuild {
            HouseBuild {
                house: House {
                    id: Id::new(1),
                    category_id: None,
                    name: "house".into(),
                    address: "".into(),
                    description: None,
                    created_at: Timestamp::now(),
                },
            }
        }
    }
}

pub mod room_builder {

    use super::*;
    use crate::{id::*, room::*, time::*};

    #[derive(Debug)]
    pub struct RoomBuild {
        room: Room,
    }

    impl RoomBuild {
        pub fn id(mut self, id: i64) -> Self {
            self.room.id = id.into();
            self
        }
        pub fn house(mut self, id: i64) -> Self {
            self.room.house_id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.room.name = name.into();
            self
        }
        pub fn finish(self) -> Room {
            self.room
        }
    }

    impl Builder for Room {
        type Build = RoomBuild;
        fn build() -> RoomBuild {
            RoomBuild {
                room: Room {
                    id: Id::new(1),
                    house_id: Id::new(1),
                    name: "room".into(),
                    description: None,
                    created_at: Timestamp::now(),
                },
            }
        }
    }
}

pub mod user_builder {

    use super::*;
    use crate::{id::*, password::*, time::*, user::*};

    #[derive(Debug)]
    pub struct UserBuild {
        user: User,
    }

    impl UserBuild {
        pub fn id(mut self, id: i64) -> Self {
            self.user.id = id.into();
            self
        }
        pub fn username(mut self, username: &str) -> Self {
            self.user.username = username.into();
            self
        }
        pub fn password(mut self, password: &str) -> Self {
            self.user.password = password.parse().unwrap();
            self
        }
        pub fn finish(self) -> User {
            self.user
        }
    }

    impl Builder for User {
        type Build = UserBuild;
        fn build() -> UserBuild {
            UserBuild {
                user: User {
                    id: Id::new(1),
                    username: "user".into(),
                    password: Password::from_hash(String::new()),
                    first_name: "".into(),
                    last_name: "".into(),
                    email: None,
                    avatar: None,
                    date_joined: Timestamp::now(),
                },
            }
        }
    }
}
