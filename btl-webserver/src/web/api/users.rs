use std::path::Path;

use anyhow::anyhow;
use rocket::{
    form::Form,
    fs::TempFile,
    http::{ContentType, SameSite},
    tokio, FromForm,
};
use uuid::Uuid;

use super::*;

const CURRENT_USER_LOCATION: &str = "/api/users/current";

#[post("/login", format = "application/json", data = "<login>")]
pub fn post_login(
    db: Db,
    cookies: &CookieJar<'_>,
    login: JsonResult<json::Credentials>,
    jwt_state: &State<jwt::JwtState>,
) -> Result<json::JwtToken> {
    let login = login?.into_inner();
    let user = {
        let credentials = usecases::Credentials {
            username: &login.username,
            password: &login.password,
        };
        usecases::login_with_username(&db.shared()?, &credentials)?
    };
    let token = jwt_state.generate_token(&user.username)?;
    if cfg!(feature = "cookies") {
        cookies.add_private(
            Cookie::build((COOKIE_USER_KEY, user.username)).same_site(SameSite::Lax),
        );
    }
    Ok(Json(json::JwtToken { token }))
}

#[post("/logout")]
pub fn post_logout(
    auth: Auth,
    cookies: &CookieJar<'_>,
    jwt_state: &State<jwt::JwtState>,
) -> Json<()> {
    cookies.remove_private(COOKIE_USER_KEY);
    for bearer in auth.bearer_tokens() {
        jwt_state.blacklist_token(bearer.to_owned());
    }
    Json(())
}

#[derive(FromForm)]
pub struct UserForm<'r> {
    username: Option<String>,
    password: Option<String>,
    first_name: Option<String>,
    last_name: Option<String>,
    email: Option<String>,
    avatar: Option<TempFile<'r>>,
}

fn image_extension(content_type: Option<&ContentType>) -> Option<&'static str> {
    let content_type = content_type?;
    if content_type.is_png() {
        Some("png")
    } else if content_type.is_jpeg() {
        Some("jpg")
    } else if content_type.is_gif() {
        Some("gif")
    } else if content_type.is_webp() {
        Some("webp")
    } else if content_type.is_bmp() {
        Some("bmp")
    } else {
        None
    }
}

/// Stores an uploaded avatar and returns its path
/// relative to the upload directory.
async fn store_avatar(
    file: &mut TempFile<'_>,
    upload_dir: &Path,
) -> result::Result<String, ApiError> {
    let ext = image_extension(file.content_type()).ok_or_else(|| {
        ApiError::OtherWithStatus(anyhow!("The avatar is not an image"), Status::BadRequest)
    })?;
    let path = format!("{AVATAR_DIR}/{}.{ext}", Uuid::new_v4());
    file.copy_to(upload_dir.join(&path)).await?;
    Ok(path)
}

fn create_user(db: &Db, reg: usecases::UserRegistration) -> result::Result<User, ApiError> {
    let mut db = db.exclusive()?;
    Ok(db.transaction(|db| usecases::create_new_user(db, reg))?)
}

#[post("/users", format = "multipart/form-data", data = "<form>")]
pub async fn post_user_multipart(
    db: Db,
    cfg: &State<Cfg>,
    mut form: Form<UserForm<'_>>,
) -> CreatedResult<json::User> {
    let avatar = match form.avatar.as_mut() {
        Some(file) if file.len() > 0 => Some(store_avatar(file, &cfg.upload_dir).await?),
        _ => None,
    };
    let UserForm {
        username,
        password,
        first_name,
        last_name,
        email,
        avatar: _,
    } = form.into_inner();
    let reg = usecases::UserRegistration {
        username: username.unwrap_or_default(),
        password: password.unwrap_or_default(),
        first_name: first_name.unwrap_or_default(),
        last_name: last_name.unwrap_or_default(),
        email,
        avatar: avatar.clone(),
    };
    let result = create_user(&db, reg);
    if result.is_err() {
        if let Some(path) = avatar {
            if let Err(err) = tokio::fs::remove_file(cfg.upload_dir.join(path)).await {
                warn!("Unable to remove avatar of rejected registration: {err}");
            }
        }
    }
    let user = result?;
    Ok(Created::new(CURRENT_USER_LOCATION).body(Json(to_json_user(user))))
}

#[post("/users", format = "application/json", data = "<new_user>", rank = 2)]
pub fn post_user_json(db: Db, new_user: JsonResult<json::NewUser>) -> CreatedResult<json::User> {
    let json::NewUser {
        username,
        password,
        first_name,
        last_name,
        email,
    } = new_user?.into_inner();
    let reg = usecases::UserRegistration {
        username,
        password,
        first_name,
        last_name,
        email,
        avatar: None,
    };
    let user = create_user(&db, reg)?;
    Ok(Created::new(CURRENT_USER_LOCATION).body(Json(to_json_user(user))))
}

#[get("/users/current")]
pub fn get_current_user(db: Db, auth: Auth) -> Result<json::User> {
    let db = db.shared()?;
    let user = auth.user(&db)?;
    let user = usecases::current_user(user.as_ref())?;
    Ok(Json(to_json_user(user)))
}
