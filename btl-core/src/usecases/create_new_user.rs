use super::prelude::*;
use super::authorize;
use crate::util::validate;

#[derive(Debug, Clone, Default)]
pub struct UserRegistration {
    pub username: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    /// Path of an already stored avatar image
    pub avatar: Option<String>,
}

pub fn create_new_user<R: UserRepo>(repo: &R, reg: UserRegistration) -> Result<User> {
    authorize(Operation::CreateUser, None)?;
    let UserRegistration {
        username,
        password,
        first_name,
        last_name,
        email,
        avatar,
    } = reg;
    if !validate::is_valid_username(&username) {
        return Err(Error::Username);
    }
    let email = email.filter(|e| !e.trim().is_empty());
    if let Some(email) = &email {
        if !validate::is_valid_email(email) {
            return Err(Error::Email);
        }
    }
    let password = password.parse::<Password>()?;
    if repo.try_get_user_by_username(&username)?.is_some() {
        return Err(Error::UserExists);
    }
    let new_user = NewUser {
        username,
        password,
        first_name,
        last_name,
        email,
        avatar,
        date_joined: Timestamp::now(),
    };
    log::debug!("Creating new user: username = {}", new_user.username);
    let user = repo.create_user(new_user).map_err(|err| match err {
        RepoError::AlreadyExists => Error::UserExists,
        err => Error::Repo(err),
    })?;
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};

    fn registration(username: &str, password: &str) -> UserRegistration {
        UserRegistration {
            username: username.into(),
            password: password.into(),
            ..Default::default()
        }
    }

    #[test]
    fn create_two_users() {
        let db = MockDb::default();
        let alice = create_new_user(&db, registration("alice", "secret1")).unwrap();
        let bob = create_new_user(&db, registration("bob", "secret2")).unwrap();
        assert_ne!(alice.id, bob.id);
        assert!(alice.password.verify("secret1"));
        assert!(db.try_get_user_by_username("alice").unwrap().is_some());
        assert!(db.try_get_user_by_username("carol").unwrap().is_none());
    }

    #[test]
    fn create_user_with_existing_username() {
        let db = MockDb::default();
        create_new_user(&db, registration("alice", "secret1")).unwrap();
        assert!(matches!(
            create_new_user(&db, registration("alice", "secret2")),
            Err(Error::UserExists)
        ));
        assert_eq!(1, db.users.borrow().len());
    }

    #[test]
    fn create_user_with_invalid_input() {
        let db = MockDb::default();
        assert!(matches!(
            create_new_user(&db, registration("", "secret")),
            Err(Error::Username)
        ));
        assert!(matches!(
            create_new_user(&db, registration("a b", "secret")),
            Err(Error::Username)
        ));
        assert!(matches!(
            create_new_user(&db, registration("alice", "12345")),
            Err(Error::Password)
        ));
        let mut reg = registration("alice", "secret");
        reg.email = Some("fooo@".into());
        assert!(matches!(create_new_user(&db, reg), Err(Error::Email)));
        assert!(db.users.borrow().is_empty());
    }

    #[test]
    fn empty_email_is_none() {
        let db = MockDb::default();
        let mut reg = registration("alice", "secret");
        reg.email = Some("".into());
        assert_eq!(None, create_new_user(&db, reg).unwrap().email);
        let mut reg = registration("bob", "secret");
        reg.email = Some("bob@example.com".into());
        assert_eq!(
            Some("bob@example.com"),
            create_new_user(&db, reg).unwrap().email.as_deref()
        );
    }
}
