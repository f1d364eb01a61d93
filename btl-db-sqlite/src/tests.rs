use super::*;
use btl_core::{
    entities::*,
    pagination::Pagination,
    repositories::{Error as RepoError, *},
    usecases,
};

fn setup() -> Connections {
    let connections = Connections::init(":memory:", 1).unwrap();
    run_embedded_database_migrations(connections.exclusive().unwrap()).unwrap();
    connections
}

fn new_user(username: &str) -> NewUser {
    NewUser {
        username: username.into(),
        password: Password::from_hash("$2b$04$hash".into()),
        first_name: "".into(),
        last_name: "".into(),
        email: None,
        avatar: None,
        date_joined: Timestamp::now(),
    }
}

fn new_house(address: &str) -> NewHouse {
    NewHouse {
        category_id: None,
        name: "house".into(),
        address: address.into(),
        description: None,
        created_at: Timestamp::now(),
    }
}

fn new_room(house_id: Id) -> NewRoom {
    NewRoom {
        house_id,
        name: "room".into(),
        description: None,
        created_at: Timestamp::now(),
    }
}

#[test]
fn create_and_load_categories() {
    let connections = setup();
    let db = connections.exclusive().unwrap();
    let a = db.create_category("flats").unwrap();
    let b = db.create_category("villas").unwrap();
    assert_ne!(a.id, b.id);
    assert_eq!(vec![a.clone(), b], db.all_categories().unwrap());
    assert_eq!(a, db.get_category(a.id).unwrap());
    assert!(matches!(
        db.get_category(Id::new(99)),
        Err(RepoError::NotFound)
    ));
}

#[test]
fn filter_houses_by_address() {
    let connections = setup();
    let db = connections.exclusive().unwrap();
    for address in [
        "12 Elm Street",
        "3 Oak Avenue",
        "Old ELMwood Road",
        "100% Street",
        "a_b lane",
    ] {
        db.create_house(new_house(address)).unwrap();
    }
    let filter = |q: &str| HouseFilter {
        address: Some(q.into()),
    };
    assert_eq!(5, db.count_houses(&HouseFilter::default()).unwrap());
    assert_eq!(2, db.count_houses(&filter("elm")).unwrap());
    assert_eq!(1, db.count_houses(&filter("%")).unwrap());
    assert_eq!(1, db.count_houses(&filter("_")).unwrap());
    assert_eq!(0, db.count_houses(&filter("zzz")).unwrap());

    let houses = db
        .list_houses(&filter("elm"), &Pagination::default())
        .unwrap();
    assert_eq!(
        vec!["12 Elm Street", "Old ELMwood Road"],
        houses.iter().map(|h| h.address.as_str()).collect::<Vec<_>>()
    );
}

#[test]
fn paginate_houses() {
    let connections = setup();
    let db = connections.exclusive().unwrap();
    let ids: Vec<_> = (0..5)
        .map(|i| db.create_house(new_house(&format!("{i} Main St"))).unwrap().id)
        .collect();
    let page = db
        .list_houses(
            &HouseFilter::default(),
            &Pagination {
                offset: Some(2),
                limit: Some(2),
            },
        )
        .unwrap();
    assert_eq!(ids[2..4].to_vec(), page.iter().map(|h| h.id).collect::<Vec<_>>());
    let rest = db
        .list_houses(
            &HouseFilter::default(),
            &Pagination {
                offset: Some(4),
                limit: None,
            },
        )
        .unwrap();
    assert_eq!(1, rest.len());
}

#[test]
fn rooms_and_numbers() {
    let connections = setup();
    let db = connections.exclusive().unwrap();
    let h1 = db.create_house(new_house("a")).unwrap();
    let h2 = db.create_house(new_house("b")).unwrap();
    let r1 = db.create_room(new_room(h1.id)).unwrap();
    db.create_room(new_room(h2.id)).unwrap();
    let r3 = db.create_room(new_room(h1.id)).unwrap();
    assert_eq!(vec![r1.clone(), r3], db.load_rooms_of_house(h1.id).unwrap());
    assert!(matches!(db.get_room(Id::new(99)), Err(RepoError::NotFound)));
    assert!(db.create_room(new_room(Id::new(99))).is_err());

    db.create_number(r1.id, "1a").unwrap();
    db.create_number(r1.id, "1b").unwrap();
    let numbers = db.load_numbers_of_room(r1.id).unwrap();
    assert_eq!(
        vec!["1a", "1b"],
        numbers.iter().map(|n| n.value.as_str()).collect::<Vec<_>>()
    );
}

#[test]
fn unique_usernames() {
    let connections = setup();
    let db = connections.exclusive().unwrap();
    let alice = db.create_user(new_user("alice")).unwrap();
    assert_eq!(alice, db.get_user_by_username("alice").unwrap());
    assert_eq!(alice, db.get_user(alice.id).unwrap());
    assert!(db.try_get_user_by_username("bob").unwrap().is_none());
    assert!(matches!(
        db.create_user(new_user("alice")),
        Err(RepoError::AlreadyExists)
    ));
}

#[test]
fn update_and_delete_comments() {
    let connections = setup();
    let db = connections.exclusive().unwrap();
    let user = db.create_user(new_user("alice")).unwrap();
    let house = db.create_house(new_house("a")).unwrap();
    let room = db.create_room(new_room(house.id)).unwrap();
    let mut comment = db
        .create_comment(NewComment {
            room_id: room.id,
            user_id: user.id,
            content: "".into(),
            created_at: Timestamp::from_millis(1_000),
        })
        .unwrap();
    assert_eq!("", comment.content);
    assert_eq!(None, comment.updated_at);

    comment.content = "updated".into();
    comment.updated_at = Some(Timestamp::from_millis(2_000));
    db.update_comment(&comment).unwrap();
    assert_eq!(comment, db.load_comment(comment.id).unwrap());
    assert_eq!(vec![comment.clone()], db.load_comments_of_room(room.id).unwrap());

    db.delete_comment(comment.id).unwrap();
    assert!(matches!(
        db.load_comment(comment.id),
        Err(RepoError::NotFound)
    ));
    assert!(matches!(
        db.delete_comment(comment.id),
        Err(RepoError::NotFound)
    ));
}

#[test]
fn comments_need_an_author_and_a_room() {
    let connections = setup();
    let db = connections.exclusive().unwrap();
    let result = db.create_comment(NewComment {
        room_id: Id::new(1),
        user_id: Id::new(1),
        content: "orphan".into(),
        created_at: Timestamp::now(),
    });
    assert!(result.is_err());
}

#[test]
fn toggle_likes() {
    let connections = setup();
    let db = connections.exclusive().unwrap();
    let alice = db.create_user(new_user("alice")).unwrap();
    let bob = db.create_user(new_user("bob")).unwrap();
    let house = db.create_house(new_house("a")).unwrap();
    let room = db.create_room(new_room(house.id)).unwrap();

    assert!(db.try_get_like(alice.id, room.id).unwrap().is_none());
    let first = db.toggle_like(alice.id, room.id).unwrap();
    assert_eq!(Like::DEFAULT_LIKED, first.liked);
    let second = db.toggle_like(alice.id, room.id).unwrap();
    assert_eq!(first.id, second.id);
    assert_eq!(!Like::DEFAULT_LIKED, second.liked);
    let third = db.toggle_like(alice.id, room.id).unwrap();
    assert_eq!(Like::DEFAULT_LIKED, third.liked);

    db.toggle_like(bob.id, room.id).unwrap();
    db.toggle_like(bob.id, room.id).unwrap();
    let liked_by = |liked: bool| u64::from(liked);
    assert_eq!(
        liked_by(third.liked) + liked_by(!Like::DEFAULT_LIKED),
        db.count_likes_of_room(room.id).unwrap()
    );
    assert_eq!(
        Some(third),
        db.try_get_like(alice.id, room.id).unwrap()
    );
}

#[test]
fn read_only_connections() {
    let connections = setup();
    {
        let db = connections.exclusive().unwrap();
        db.create_category("flats").unwrap();
    }
    let db = connections.shared().unwrap();
    assert_eq!(1, db.all_categories().unwrap().len());
}

#[test]
fn rollback_failed_transactions() {
    let connections = setup();
    let mut db = connections.exclusive().unwrap();
    let result = db.transaction(|db| {
        db.create_category("flats")?;
        Err::<(), _>(usecases::Error::Name)
    });
    assert!(matches!(result, Err(usecases::Error::Name)));
    let categories = db
        .transaction(|db| db.all_categories().map_err(usecases::Error::from))
        .unwrap();
    assert!(categories.is_empty());
}
