use super::prelude::*;
use super::authenticated;

pub fn current_user(caller: Option<&User>) -> Result<User> {
    authenticated(Operation::CurrentUser, caller).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use btl_entities::builders::*;

    #[test]
    fn current_user_requires_a_caller() {
        assert!(matches!(current_user(None), Err(Error::Unauthorized)));
        let user = User::build().username("me").finish();
        assert_eq!(user, current_user(Some(&user)).unwrap());
    }
}
