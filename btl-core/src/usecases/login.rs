use super::prelude::*;
use super::authorize;

pub struct Credentials<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

pub fn login_with_username<R>(repo: &R, login: &Credentials) -> Result<User>
where
    R: UserRepo,
{
    authorize(Operation::Login, None)?;
    match repo.try_get_user_by_username(login.username)? {
        Some(user) if user.password.verify(login.password) => Ok(user),
        _ => {
            log::info!("Failed login attempt of {}", login.username);
            Err(Error::Credentials)
        }
    }
}
